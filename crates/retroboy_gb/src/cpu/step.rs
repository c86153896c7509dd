use super::{Bus, Cpu, ExecutionMode};

/// Cost of a step spent idling in HALT or STOP.
const IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute a single instruction (or interrupt dispatch, or idle poll)
    /// and return the number of T-cycles taken.
    ///
    /// Interrupts are only taken here, at instruction boundaries.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cycles = self.step_inner(bus);
        self.clock.tick(cycles);
        cycles
    }

    fn step_inner<B: Bus>(&mut self, bus: &mut B) -> u32 {
        match self.mode {
            ExecutionMode::Stopped => {
                // Only a serviceable interrupt leaves STOP.
                self.service_interrupts(bus).unwrap_or(IDLE_CYCLES)
            }
            ExecutionMode::Halted => {
                // HALT ends as soon as an enabled interrupt is pending, even
                // with IME clear. Whether it is also serviced is up to IME.
                if self.pending_interrupts(bus) != 0 {
                    self.mode = ExecutionMode::Running;
                }
                self.service_interrupts(bus).unwrap_or(IDLE_CYCLES)
            }
            ExecutionMode::Running => {
                if let Some(cycles) = self.service_interrupts(bus) {
                    return cycles;
                }

                log::trace!("GB CPU step: {}", self.regs);
                let opcode = bus.read8(self.regs.pc);
                let cycles = self.exec_opcode(bus, opcode);
                self.apply_ime_delay();
                cycles
            }
        }
    }
}
