use crate::cpu::addressing::stack_operand;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = self.regs.get16(stack_operand(opcode));
        self.push_u16(bus, value);
        self.advance(1);
    }

    /// POP rr. POP AF drops the low nibble of F.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(bus);
        self.regs.set16(stack_operand(opcode), value);
        self.advance(1);
    }
}
