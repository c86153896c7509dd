mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::timing::OPCODE_CYCLES;
use super::{Bus, Cpu};

impl Cpu {
    /// Decode and execute a single opcode and return the number of cycles.
    ///
    /// `opcode` is the byte at PC. Every handler leaves PC on the first byte
    /// of the next instruction (or on its branch target); nothing here moves
    /// PC after the handler returns.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        if opcode == 0xCB {
            return self.step_cb(bus);
        }

        match opcode {
            // 0x00: NOP
            0x00 => self.advance(1),

            // 16-bit immediate loads.
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(bus, opcode),

            // LD (BC),A / LD (DE),A and the reverse forms.
            0x02 | 0x12 => self.exec_ld_indirect_a(bus, opcode),
            0x0A | 0x1A => self.exec_ld_a_indirect(bus, opcode),

            // LD (HL+),A / LD (HL-),A / LD A,(HL+) / LD A,(HL-)
            0x22 | 0x32 | 0x2A | 0x3A => self.exec_ld_hl_auto(bus, opcode),

            // 16-bit INC rr / DEC rr
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16_rr(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16_rr(opcode),

            // 8-bit INC r / DEC r (including (HL)).
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => self.exec_inc8(bus, opcode),
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => self.exec_dec8(bus, opcode),

            // LD r, d8 (and LD (HL), d8)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => self.exec_ld_r_d8(bus, opcode),

            // Rotate A instructions (unprefixed).
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            0x08 => self.exec_ld_a16_sp(bus),

            // ADD HL, rr
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),

            0x10 => self.exec_stop(),

            // JR r8 / JR cc, r8
            0x18 => self.exec_jr(bus),
            0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr_cc(bus, opcode),

            // DAA / CPL / SCF / CCF
            0x27 | 0x2F | 0x37 | 0x3F => self.exec_accumulator_misc(opcode),

            // HALT sits in the middle of the LD r,r block.
            0x76 => self.exec_halt(),
            0x40..=0x7F => self.exec_ld_r_r(bus, opcode),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, r
            0x80..=0xBF => self.exec_alu_reg_group(bus, opcode),

            0xC0 | 0xC8 | 0xD0 | 0xD8 => self.exec_ret_cc(bus, opcode),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop(bus, opcode),
            0xC2 | 0xCA | 0xD2 | 0xDA => self.exec_jp_cc(bus, opcode),
            0xC3 => self.exec_jp(bus),
            0xC4 | 0xCC | 0xD4 | 0xDC => self.exec_call_cc(bus, opcode),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push(bus, opcode),

            // ALU A, d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.exec_alu_imm(bus, opcode),

            // RST n
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(bus, opcode),

            0xC9 => self.exec_ret(bus),
            0xCD => self.exec_call(bus),
            0xD9 => self.exec_reti(bus),

            // High-page loads.
            0xE0 | 0xF0 => self.exec_ldh_a8(bus, opcode),
            0xE2 | 0xF2 => self.exec_ldh_c(bus, opcode),

            0xE8 => self.exec_add_sp_r8(bus),
            0xE9 => self.exec_jp_hl(),
            0xEA | 0xFA => self.exec_ld_a16_a(bus, opcode),
            0xF3 => self.exec_di(),
            0xF8 => self.exec_ld_hl_sp_r8(bus),
            0xF9 => self.exec_ld_sp_hl(),
            0xFB => self.exec_ei(),

            // Holes in the opcode map: 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB,
            // 0xEC, 0xED, 0xF4, 0xFC, 0xFD.
            _ => self.exec_undefined(opcode),
        }

        OPCODE_CYCLES[opcode as usize] + std::mem::take(&mut self.branch_cycles)
    }
}
