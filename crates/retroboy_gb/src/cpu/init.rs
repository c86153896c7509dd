use super::interrupts::EiDelay;
use super::{Clock, Cpu, ExecutionMode, Registers};

/// Stack pointer value after reset (top of high RAM).
pub(super) const RESET_SP: u16 = 0xFFFE;

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            mode: ExecutionMode::Running,
            ei_delay: EiDelay::Idle,
            branch_cycles: 0,
            clock: Clock::default(),
        };
        cpu.apply_reset_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Registers are cleared, execution starts at the boot window (0x0000)
    /// and the master interrupt enable is off. IE/IF live on the bus and are
    /// reset by the machine.
    pub fn reset(&mut self) {
        self.ime = false;
        self.mode = ExecutionMode::Running;
        self.ei_delay = EiDelay::Idle;
        self.branch_cycles = 0;
        self.clock = Clock::default();
        self.apply_reset_state();
    }

    fn apply_reset_state(&mut self) {
        self.regs = Registers {
            sp: RESET_SP,
            ..Registers::default()
        };
    }
}
