use anyhow::Result;
use retroboy::{run, Outcome, RunConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::from_args(std::env::args().skip(1))?;
    log::info!("Program path: '{}'", config.program.display());

    let report = run(&config)?;
    match report.outcome {
        Outcome::Parked { pc } => println!("Program parked at 0x{pc:04X}"),
        Outcome::FrameBudgetExhausted => {
            println!("Frame budget of {} exhausted", config.max_frames)
        }
    }

    if report.passed() {
        println!("Test passed");
        Ok(())
    } else {
        println!("Test failed (result 0x{:02X})", report.result);
        std::process::exit(1);
    }
}
