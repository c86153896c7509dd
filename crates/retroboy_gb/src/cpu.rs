mod addressing;
pub mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;
pub mod timing;

pub use bus::{Bus, HIGH_PAGE, IE_ADDR, IF_ADDR};
pub use interrupts::{Interrupt, InterruptFlags};
pub use regs::{Flags, Reg16, Reg8, Registers};
pub use timing::{Clock, CYCLES_PER_FRAME};

/// What the CPU does on the next call to [`Cpu::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Fetch and execute instructions.
    #[default]
    Running,
    /// Entered by HALT. Wakes as soon as any enabled interrupt is pending,
    /// whether or not IME is set.
    Halted,
    /// Entered by STOP. Only a serviceable interrupt resumes execution.
    Stopped,
}

/// Game Boy CPU core (LR35902).
///
/// The CPU owns its registers, the master interrupt enable and its cycle
/// clock. Memory, including the IE/IF registers, is reached through a
/// [`Bus`] passed into every call.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    mode: ExecutionMode,
    /// Pending IME enable from EI.
    ei_delay: interrupts::EiDelay,
    /// Extra cost of a taken conditional branch, latched by the control
    /// flow helpers and drained after dispatch.
    branch_cycles: u32,
    clock: Clock,
}

impl Cpu {
    #[inline]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Condition flags as a typed set.
    #[inline]
    pub fn flags(&self) -> Flags {
        self.regs.flags()
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.regs.set_flags(flags);
    }
}
