use crate::cpu::interrupts::EiDelay;
use crate::cpu::timing::{
    CALL_TAKEN_PENALTY, JP_TAKEN_PENALTY, JR_TAKEN_PENALTY, RET_TAKEN_PENALTY,
};
use crate::cpu::{Bus, Cpu, Flags};

impl Cpu {
    #[inline]
    fn cc_condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.regs.flag(Flags::Z), // NZ
            1 => self.regs.flag(Flags::Z),  // Z
            2 => !self.regs.flag(Flags::C), // NC
            _ => self.regs.flag(Flags::C),  // C
        }
    }

    pub(super) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cc = (opcode >> 3) & 0x03;
        if self.jr(bus, self.cc_condition(cc)) {
            self.branch_cycles = JR_TAKEN_PENALTY;
        }
    }

    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B) {
        self.jr(bus, true);
    }

    pub(super) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cc = (opcode >> 3) & 0x03;
        if self.jp_cond(bus, self.cc_condition(cc)) {
            self.branch_cycles = JP_TAKEN_PENALTY;
        }
    }

    pub(super) fn exec_jp<B: Bus>(&mut self, bus: &mut B) {
        self.jp_cond(bus, true);
    }

    pub(super) fn exec_jp_hl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cc = (opcode >> 3) & 0x03;
        if self.call_cond(bus, self.cc_condition(cc)) {
            self.branch_cycles = CALL_TAKEN_PENALTY;
        }
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B) {
        self.call_cond(bus, true);
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cc = (opcode >> 3) & 0x03;
        if self.ret_cond(bus, self.cc_condition(cc)) {
            self.branch_cycles = RET_TAKEN_PENALTY;
        }
    }

    /// Unconditional RET. Its full cost is in the base table.
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
    }

    /// RETI re-enables interrupts immediately, without the EI delay.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        self.ei_delay = EiDelay::Idle;
    }

    /// RST n pushes the address of the next instruction and jumps to the
    /// fixed vector `n` encoded in bits 3-5.
    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(opcode & 0xC7 == 0xC7);
        let ret = self.regs.pc.wrapping_add(1);
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
    }
}
