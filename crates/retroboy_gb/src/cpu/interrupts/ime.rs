use super::super::Cpu;

/// Progress of an IME enable requested by EI.
///
/// EI takes effect only once the instruction after it has retired, so the
/// request is carried across two instruction boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::cpu) enum EiDelay {
    #[default]
    Idle,
    /// EI is the instruction that just executed.
    Requested,
    /// One more instruction has to retire before IME turns on.
    Armed,
}

impl Cpu {
    /// Called once after every executed instruction.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        self.ei_delay = match self.ei_delay {
            EiDelay::Idle => EiDelay::Idle,
            EiDelay::Requested => EiDelay::Armed,
            EiDelay::Armed => {
                self.ime = true;
                EiDelay::Idle
            }
        };
    }
}
