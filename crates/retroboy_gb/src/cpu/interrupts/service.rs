use super::super::{Bus, Cpu, ExecutionMode, IE_ADDR, IF_ADDR};
use super::EiDelay;

/// Cost of an interrupt dispatch (5 M-cycles).
const DISPATCH_CYCLES: u32 = 20;

impl Cpu {
    /// Service the highest-priority pending interrupt if IME allows it.
    ///
    /// Only the serviced source's IF bit is cleared. IME is cleared so the
    /// handler is not re-entered; it comes back through RETI or EI. A halted
    /// or stopped CPU resumes running.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None` otherwise.
    pub fn service_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let interrupt = self.poll_pending_interrupt(bus)?;

        self.ime = false;
        self.ei_delay = EiDelay::Idle;
        self.mode = ExecutionMode::Running;

        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !interrupt.bit().bits());

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "GB CPU interrupt {:?}: vec=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            interrupt,
            self.regs.pc,
            pc,
            self.regs.sp,
            iflags & 0x1F,
            bus.read8(IE_ADDR),
        );

        Some(DISPATCH_CYCLES)
    }
}
