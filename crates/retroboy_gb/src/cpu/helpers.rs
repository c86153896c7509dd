use super::{Bus, Cpu};

impl Cpu {
    /// Move PC past the current instruction.
    #[inline]
    pub(super) fn advance(&mut self, len: u16) {
        self.regs.pc = self.regs.pc.wrapping_add(len);
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        // High byte goes to SP-1 first, then low byte to SP-2.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        let hi = bus.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    // The branch helpers below return whether the branch was taken. Only the
    // conditional forms charge a taken penalty on top of the base table.

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the 2-byte instruction.
    pub(super) fn jr<B: Bus>(&mut self, bus: &mut B, cond: bool) -> bool {
        let offset = self.imm8(bus) as i8;
        self.advance(2);
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add_signed(offset as i16);
        }
        cond
    }

    /// Absolute jump helper used by JP a16 and JP cc,a16.
    pub(super) fn jp_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> bool {
        let addr = self.imm16(bus);
        if cond {
            self.regs.pc = addr;
        } else {
            self.advance(3);
        }
        cond
    }

    /// Call helper used by CALL a16 and CALL cc,a16.
    pub(super) fn call_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> bool {
        let addr = self.imm16(bus);
        self.advance(3);
        if cond {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
        }
        cond
    }

    /// Conditional return helper used by RET cc.
    pub(super) fn ret_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> bool {
        if cond {
            self.regs.pc = self.pop_u16(bus);
        } else {
            self.advance(1);
        }
        cond
    }
}
