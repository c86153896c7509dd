mod ime;
mod poll;
mod service;

pub(super) use ime::EiDelay;

use bitflags::bitflags;

/// The five maskable interrupt sources, in priority order (VBlank first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

bitflags! {
    /// Layout shared by the IE (0xFFFF) and IF (0xFF0F) registers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0b0000_0001;
        const LCD_STAT = 0b0000_0010;
        const TIMER = 0b0000_0100;
        const SERIAL = 0b0000_1000;
        const JOYPAD = 0b0001_0000;
    }
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Bit index in IE/IF (0 = highest priority).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Handler address the CPU jumps to when servicing this source.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self.index() as u16) * 8
    }

    #[inline]
    pub fn bit(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << self.index())
    }

    /// Map a raw bit index (0–4) back to its source.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}
