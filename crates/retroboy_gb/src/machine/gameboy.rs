use crate::cpu::{Cpu, ExecutionMode, Interrupt};

use super::{LoadError, Memory, PROGRAM_START, RESULT_ADDR};

/// High-level Game Boy machine.
///
/// Holds the CPU core and the memory it runs against. All interrupt state
/// (IE, IF and IME) belongs to this one value.
#[derive(Clone, Debug, Default)]
pub struct GameBoy {
    pub cpu: Cpu,
    memory: Memory,
}

impl GameBoy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset CPU and memory. Loaded images are mapped again; without a boot
    /// image execution resumes at the program start.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.memory.reset();
        if !self.memory.has_boot() && self.memory.has_program() {
            self.cpu.regs.pc = PROGRAM_START;
        }
    }

    pub fn load_boot(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.memory.load_boot(image)
    }

    /// Load a program image and point PC at [`PROGRAM_START`].
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.memory.load_program(image)?;
        self.cpu.regs.pc = PROGRAM_START;
        Ok(())
    }

    pub fn switch_bank(&mut self, bank: usize) -> Result<(), LoadError> {
        self.memory.switch_bank(bank)
    }

    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.memory.request_interrupt(interrupt);
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn mode(&self) -> ExecutionMode {
        self.cpu.mode()
    }

    /// Execute one instruction (or interrupt dispatch, or idle poll).
    pub fn step(&mut self) -> u32 {
        self.cpu.step(&mut self.memory)
    }

    /// Step the machine for one frame worth of time.
    ///
    /// Runs until the CPU clock crosses the next frame boundary and returns
    /// the cycles consumed.
    pub fn step_frame(&mut self) -> u32 {
        let start_frame = self.cpu.clock().frames();
        let mut cycles = 0u32;
        while self.cpu.clock().frames() == start_frame {
            cycles = cycles.saturating_add(self.step());
        }
        cycles
    }

    /// Result byte left by test programs at [`RESULT_ADDR`] (0 = passed).
    pub fn test_result(&self) -> u8 {
        self.memory.peek(RESULT_ADDR)
    }
}
