use crate::cpu::addressing::{high_page, rr_operand};
use crate::cpu::{alu, Bus, Cpu, Reg16};

impl Cpu {
    pub(super) fn exec_ld_rr_d16<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.imm16(bus);
        self.regs.set16(rr_operand(opcode), value);
        self.advance(3);
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0x02 | 0x12));
        self.write_indirect(bus, rr_operand(opcode), self.regs.a);
        self.advance(1);
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0x0A | 0x1A));
        self.regs.a = self.read_indirect(bus, rr_operand(opcode));
        self.advance(1);
    }

    /// LD (HL+),A / LD (HL-),A / LD A,(HL+) / LD A,(HL-).
    pub(super) fn exec_ld_hl_auto<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0x22 | 0x32 | 0x2A | 0x3A));
        let hl = self.regs.hl();
        if opcode & 0x08 == 0 {
            self.write_indirect(bus, Reg16::HL, self.regs.a);
        } else {
            self.regs.a = self.read_indirect(bus, Reg16::HL);
        }
        let next = if opcode & 0x10 == 0 {
            hl.wrapping_add(1)
        } else {
            hl.wrapping_sub(1)
        };
        self.regs.set_hl(next);
        self.advance(1);
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let dst = (opcode >> 3) & 0x07;
        let value = self.imm8(bus);
        self.write_reg8(bus, dst, value);
        self.advance(2);
    }

    /// LD (a16),SP stores SP little-endian.
    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.imm16(bus);
        bus.write16(addr, self.regs.sp);
        self.advance(3);
    }

    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
        self.advance(1);
    }

    /// LDH (a8),A / LDH A,(a8).
    pub(super) fn exec_ldh_a8<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let addr = high_page(self.imm8(bus));
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        self.advance(2);
    }

    /// LD (C),A / LD A,(C).
    pub(super) fn exec_ldh_c<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let addr = high_page(self.regs.c);
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        self.advance(1);
    }

    /// LD (a16),A / LD A,(a16).
    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let addr = self.imm16(bus);
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        self.advance(3);
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let (value, flags) = alu::add16_signed(self.regs.sp, self.imm8(bus));
        self.regs.set_hl(value);
        self.set_flags(flags);
        self.advance(2);
    }

    pub(super) fn exec_ld_sp_hl(&mut self) {
        self.regs.sp = self.regs.hl();
        self.advance(1);
    }
}
