use super::super::{Bus, Cpu, IE_ADDR, IF_ADDR};
use super::Interrupt;

impl Cpu {
    /// Sources that are both requested (IF) and enabled (IE), ignoring IME.
    #[inline]
    pub(in crate::cpu) fn pending_interrupts<B: Bus>(&self, bus: &mut B) -> u8 {
        let ie = bus.read8(IE_ADDR);
        let iflags = bus.read8(IF_ADDR);
        ie & iflags & 0x1F
    }

    /// Highest-priority interrupt that would be serviced right now, if any.
    ///
    /// Nothing is serviceable while IME is clear; requests stay latched in
    /// IF until it is set again.
    pub(in crate::cpu) fn poll_pending_interrupt<B: Bus>(&self, bus: &mut B) -> Option<Interrupt> {
        if !self.ime {
            return None;
        }

        let pending = self.pending_interrupts(bus);
        if pending == 0 {
            return None;
        }

        // Find lowest-numbered pending interrupt (VBlank > LCD STAT > Timer > Serial > Joypad).
        Interrupt::from_index(pending.trailing_zeros() as u8)
    }
}
