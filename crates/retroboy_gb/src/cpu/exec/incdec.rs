use crate::cpu::addressing::rr_operand;
use crate::cpu::{alu, Bus, Cpu};

impl Cpu {
    /// INC r / INC (HL). The (HL) form is a single read followed by a single
    /// write.
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index);
        let (result, flags) = alu::inc8(value, self.flags());
        self.write_reg8(bus, index, result);
        self.set_flags(flags);
        self.advance(1);
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index);
        let (result, flags) = alu::dec8(value, self.flags());
        self.write_reg8(bus, index, result);
        self.set_flags(flags);
        self.advance(1);
    }

    /// 16-bit INC rr leaves the flags alone.
    pub(super) fn exec_inc16_rr(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));
        let reg = rr_operand(opcode);
        let value = self.regs.get16(reg).wrapping_add(1);
        self.regs.set16(reg, value);
        self.advance(1);
    }

    pub(super) fn exec_dec16_rr(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));
        let reg = rr_operand(opcode);
        let value = self.regs.get16(reg).wrapping_sub(1);
        self.regs.set16(reg, value);
        self.advance(1);
    }
}
