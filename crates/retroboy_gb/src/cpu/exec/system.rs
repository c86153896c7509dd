use crate::cpu::interrupts::EiDelay;
use crate::cpu::{Cpu, ExecutionMode};

impl Cpu {
    pub(super) fn exec_halt(&mut self) {
        self.advance(1);
        self.mode = ExecutionMode::Halted;
    }

    pub(super) fn exec_stop(&mut self) {
        // STOP is a 2-byte instruction; the second byte is padding and is
        // skipped without being interpreted.
        self.advance(2);
        self.mode = ExecutionMode::Stopped;
    }

    pub(super) fn exec_di(&mut self) {
        self.ime = false;
        self.ei_delay = EiDelay::Idle;
        self.advance(1);
    }

    pub(super) fn exec_ei(&mut self) {
        // IME becomes 1 after the *next* instruction completes.
        self.ei_delay = EiDelay::Requested;
        self.advance(1);
    }

    /// Opcodes with no instruction behind them execute as a 1-byte no-op.
    pub(super) fn exec_undefined(&mut self, opcode: u8) {
        log::debug!(
            "GB CPU undefined opcode 0x{:02X} at 0x{:04X}, treated as NOP",
            opcode,
            self.regs.pc
        );
        self.advance(1);
    }
}
