use super::timing::cb_cycles;
use super::{alu, Bus, Cpu, Flags};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// PC points at the 0xCB prefix; the operation byte follows it. The
    /// opcode is decoded as `x` (group), `y` (operation or bit index) and
    /// `z` (operand, with 6 meaning (HL)).
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.imm8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        let value = self.read_reg8(bus, z);
        let flags = self.flags();

        match x {
            // Rotates and shifts.
            0 => {
                let carry = flags.contains(Flags::C);
                let (result, flags) = match y {
                    0 => alu::rlc(value),
                    1 => alu::rrc(value),
                    2 => alu::rl(value, carry),
                    3 => alu::rr(value, carry),
                    4 => alu::sla(value),
                    5 => alu::sra(value),
                    6 => alu::swap(value),
                    _ => alu::srl(value),
                };
                self.write_reg8(bus, z, result);
                self.set_flags(flags);
            }
            // BIT y, r: flags only, no write-back.
            1 => self.set_flags(alu::bit(y, value, flags)),
            // RES y, r
            2 => self.write_reg8(bus, z, value & !(1 << y)),
            // SET y, r
            _ => self.write_reg8(bus, z, value | (1 << y)),
        }

        self.advance(2);
        cb_cycles(cb)
    }
}
