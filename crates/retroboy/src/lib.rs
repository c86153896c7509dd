use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use retroboy_gb::machine::RESULT_ADDR;
use retroboy_gb::{ExecutionMode, GameBoy};
use typed_builder::TypedBuilder;

/// Frame budget when none is given (one minute at 60 Hz).
pub const DEFAULT_MAX_FRAMES: u64 = 60 * 60;

pub const USAGE: &str = "usage: retroboy <program> [--boot <file>] [--frames <n>]";

/// What to run and for how long.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct RunConfig {
    #[builder(setter(into))]
    pub program: PathBuf,
    #[builder(default, setter(into, strip_option))]
    pub boot: Option<PathBuf>,
    #[builder(default = DEFAULT_MAX_FRAMES)]
    pub max_frames: u64,
}

impl RunConfig {
    /// Parse command-line arguments (without the binary name).
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut program = None;
        let mut boot = None;
        let mut max_frames = DEFAULT_MAX_FRAMES;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--boot" => {
                    let Some(path) = args.next() else {
                        bail!("--boot needs a file\n{USAGE}");
                    };
                    boot = Some(PathBuf::from(path));
                }
                "--frames" => {
                    let Some(value) = args.next() else {
                        bail!("--frames needs a count\n{USAGE}");
                    };
                    max_frames = value
                        .parse()
                        .with_context(|| format!("invalid frame count '{value}'"))?;
                }
                flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
                _ if program.is_none() => program = Some(PathBuf::from(&arg)),
                _ => bail!("unexpected argument '{arg}'\n{USAGE}"),
            }
        }

        let Some(program) = program else {
            bail!("no program given\n{USAGE}");
        };

        Ok(Self {
            program,
            boot,
            max_frames,
        })
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The program jumped to itself, the usual end of a test program.
    Parked {
        /// Address of the self-jump.
        pc: u16,
    },
    FrameBudgetExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub frames: u64,
    pub cycles: u64,
    /// Byte at [`RESULT_ADDR`] when the run ended.
    pub result: u8,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.result == 0
    }
}

/// Load the images named by `config` and run them.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let program = std::fs::read(&config.program)
        .with_context(|| format!("failed to read program '{}'", config.program.display()))?;

    let mut gb = GameBoy::new();
    gb.load_program(&program)
        .with_context(|| format!("failed to load program '{}'", config.program.display()))?;

    if let Some(boot_path) = &config.boot {
        let boot = std::fs::read(boot_path)
            .with_context(|| format!("failed to read boot image '{}'", boot_path.display()))?;
        gb.load_boot(&boot)
            .with_context(|| format!("failed to load boot image '{}'", boot_path.display()))?;
        // The boot image runs first and hands over to the program itself.
        gb.cpu.regs.pc = 0x0000;
    }

    log::info!(
        "Running '{}' for at most {} frame(s)",
        config.program.display(),
        config.max_frames
    );
    Ok(run_machine(&mut gb, config.max_frames))
}

/// Step `gb` until it parks or `max_frames` frames have elapsed.
pub fn run_machine(gb: &mut GameBoy, max_frames: u64) -> RunReport {
    let start_frame = gb.cpu.clock().frames();

    let outcome = loop {
        if gb.cpu.clock().frames() - start_frame >= max_frames {
            break Outcome::FrameBudgetExhausted;
        }

        let pc = gb.cpu.regs.pc;
        let was_running = gb.mode() == ExecutionMode::Running;
        gb.step();
        if was_running && gb.mode() == ExecutionMode::Running && gb.cpu.regs.pc == pc {
            break Outcome::Parked { pc };
        }
    };

    let report = RunReport {
        outcome,
        frames: gb.cpu.clock().frames() - start_frame,
        cycles: gb.cpu.clock().cycles(),
        result: gb.test_result(),
    };
    log::info!(
        "Run ended: {:?} after {} frame(s), {} cycles, result 0x{:02X} at 0x{:04X} ({})",
        report.outcome,
        report.frames,
        report.cycles,
        report.result,
        RESULT_ADDR,
        gb.cpu.regs,
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builder_defaults() {
        let config = RunConfig::builder().program("test.gb").build();
        assert_eq!(config.program, PathBuf::from("test.gb"));
        assert_eq!(config.boot, None);
        assert_eq!(config.max_frames, DEFAULT_MAX_FRAMES);
    }

    #[test]
    fn parses_program_and_options() {
        let argv = args(&["prog.gb", "--boot", "boot.bin", "--frames", "5"]);
        let config = RunConfig::from_args(argv).unwrap();
        let expected = RunConfig::builder()
            .program("prog.gb")
            .boot("boot.bin")
            .max_frames(5)
            .build();
        assert_eq!(config, expected);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(RunConfig::from_args(args(&[])).is_err());
        assert!(RunConfig::from_args(args(&["a.gb", "b.gb"])).is_err());
        assert!(RunConfig::from_args(args(&["a.gb", "--frames"])).is_err());
        assert!(RunConfig::from_args(args(&["a.gb", "--frames", "x"])).is_err());
        assert!(RunConfig::from_args(args(&["a.gb", "--fast"])).is_err());
    }

    #[test]
    fn parked_program_reports_result() {
        let mut gb = GameBoy::new();
        // 0x0100: LD A, 0x00
        // 0x0102: LD (0xC000), A
        // 0x0105: JR -2
        gb.load_program(&[0x3E, 0x00, 0xEA, 0x00, 0xC0, 0x18, 0xFE])
            .unwrap();
        gb.memory_mut().as_mut_slice()[RESULT_ADDR as usize] = 0xFF;

        let report = run_machine(&mut gb, 10);

        assert_eq!(report.outcome, Outcome::Parked { pc: 0x0105 });
        assert_eq!(report.frames, 0);
        assert!(report.passed());
    }

    #[test]
    fn failing_result_is_not_passed() {
        let mut gb = GameBoy::new();
        // 0x0100: LD A, 0x01 / LD (0xC000), A / JR -2
        gb.load_program(&[0x3E, 0x01, 0xEA, 0x00, 0xC0, 0x18, 0xFE])
            .unwrap();

        let report = run_machine(&mut gb, 10);
        assert_eq!(report.result, 0x01);
        assert!(!report.passed());
    }

    #[test]
    fn busy_loop_runs_until_frame_budget() {
        let mut gb = GameBoy::new();
        // 0x0100: INC A
        // 0x0101: JR -3
        gb.load_program(&[0x3C, 0x18, 0xFD]).unwrap();

        let report = run_machine(&mut gb, 2);
        assert_eq!(report.outcome, Outcome::FrameBudgetExhausted);
        assert_eq!(report.frames, 2);
        assert!(report.cycles >= 2 * retroboy_gb::cpu::CYCLES_PER_FRAME as u64);
    }

    #[test]
    fn halted_cpu_is_not_mistaken_for_a_parked_program() {
        let mut gb = GameBoy::new();
        // 0x0100: HALT with nothing enabled: sleeps for the whole budget.
        gb.load_program(&[0x76]).unwrap();

        let report = run_machine(&mut gb, 1);
        assert_eq!(report.outcome, Outcome::FrameBudgetExhausted);
        assert_eq!(gb.mode(), ExecutionMode::Halted);
    }

    #[test]
    fn missing_program_file_is_an_error() {
        let config = RunConfig::builder()
            .program("/nonexistent/retroboy/program.gb")
            .build();
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("failed to read program"));
    }
}
