use crate::cpu::addressing::rr_operand;
use crate::cpu::{alu, Bus, Cpu, Flags};

impl Cpu {
    /// Apply one of the eight accumulator operations encoded in bits 3-5
    /// (ADD, ADC, SUB, SBC, AND, XOR, OR, CP).
    fn alu_a(&mut self, operation: u8, value: u8) {
        let a = self.regs.a;
        let carry = self.regs.flag(Flags::C);
        let (result, flags) = match operation & 0x07 {
            0 => alu::add8(a, value, false),
            1 => alu::add8(a, value, carry),
            2 => alu::sub8(a, value, false),
            3 => alu::sub8(a, value, carry),
            4 => alu::and8(a, value),
            5 => alu::xor8(a, value),
            6 => alu::or8(a, value),
            // CP only keeps the flags of the subtraction.
            _ => (a, alu::sub8(a, value, false).1),
        };
        self.regs.a = result;
        self.set_flags(flags);
    }

    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let value = self.read_reg8(bus, opcode & 0x07);
        self.alu_a(opcode >> 3, value);
        self.advance(1);
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.imm8(bus);
        self.alu_a(opcode >> 3, value);
        self.advance(2);
    }

    /// RLCA / RRCA / RLA / RRA.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let a = self.regs.a;
        let carry = self.regs.flag(Flags::C);
        let rotated = match opcode {
            0x07 => alu::rlc(a),
            0x0F => alu::rrc(a),
            0x17 => alu::rl(a, carry),
            _ => alu::rr(a, carry),
        };
        let (result, flags) = alu::accumulator_form(rotated);
        self.regs.a = result;
        self.set_flags(flags);
        self.advance(1);
    }

    /// DAA / CPL / SCF / CCF.
    pub(super) fn exec_accumulator_misc(&mut self, opcode: u8) {
        let flags = self.flags();
        match opcode {
            0x27 => {
                let (result, flags) = alu::daa(self.regs.a, flags);
                self.regs.a = result;
                self.set_flags(flags);
            }
            0x2F => {
                let (result, flags) = alu::cpl(self.regs.a, flags);
                self.regs.a = result;
                self.set_flags(flags);
            }
            0x37 => self.set_flags(alu::scf(flags)),
            _ => self.set_flags(alu::ccf(flags)),
        }
        self.advance(1);
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.regs.get16(rr_operand(opcode));
        let (result, flags) = alu::add16(self.regs.hl(), value, self.flags());
        self.regs.set_hl(result);
        self.set_flags(flags);
        self.advance(1);
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let (result, flags) = alu::add16_signed(self.regs.sp, self.imm8(bus));
        self.regs.sp = result;
        self.set_flags(flags);
        self.advance(2);
    }
}
