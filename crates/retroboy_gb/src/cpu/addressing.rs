//! Operand resolution.
//!
//! None of these helpers touch PC. Immediates are read relative to the
//! opcode address, and the handler that owns the instruction advances PC
//! once it is done.

use super::{Bus, Cpu, Reg16, HIGH_PAGE};

impl Cpu {
    /// Immediate 8-bit operand (the byte at PC+1).
    #[inline]
    pub(super) fn imm8<B: Bus>(&self, bus: &mut B) -> u8 {
        bus.read8(self.regs.pc.wrapping_add(1))
    }

    /// Immediate or direct 16-bit operand, little-endian at PC+1/PC+2.
    #[inline]
    pub(super) fn imm16<B: Bus>(&self, bus: &mut B) -> u16 {
        bus.read16(self.regs.pc.wrapping_add(1))
    }

    /// Read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&self, bus: &mut B, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Write an 8-bit register or (HL) by index. See [`Cpu::read_reg8`].
    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// Read through a register pair used as an address: (BC), (DE), (HL).
    #[inline]
    pub(super) fn read_indirect<B: Bus>(&self, bus: &mut B, pair: Reg16) -> u8 {
        bus.read8(self.regs.get16(pair))
    }

    #[inline]
    pub(super) fn write_indirect<B: Bus>(&self, bus: &mut B, pair: Reg16, value: u8) {
        bus.write8(self.regs.get16(pair), value);
    }
}

/// High-page address for `LDH` and `LD (C),A` style operands.
#[inline]
pub(super) fn high_page(offset: u8) -> u16 {
    HIGH_PAGE | offset as u16
}

/// 16-bit register pair selected by bits 4-5 of the opcode for loads and
/// 16-bit arithmetic (BC, DE, HL, SP).
#[inline]
pub(super) fn rr_operand(opcode: u8) -> Reg16 {
    match (opcode >> 4) & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::SP,
    }
}

/// Pair selected for PUSH/POP, where the fourth slot is AF instead of SP.
#[inline]
pub(super) fn stack_operand(opcode: u8) -> Reg16 {
    match (opcode >> 4) & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::AF,
    }
}
