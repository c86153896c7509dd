/// Abstraction over the Game Boy bus (memory and IO).
///
/// The address space is total: every one of the 65,536 addresses is a valid
/// byte slot, so reads and writes never fail. The interrupt registers are
/// reached through their IO addresses ([`IF_ADDR`], [`IE_ADDR`]) like any
/// other memory-mapped register.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read (`addr` = low byte, `addr + 1` = high byte).
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}

/// Interrupt Flag register (pending requests).
pub const IF_ADDR: u16 = 0xFF0F;
/// Interrupt Enable register.
pub const IE_ADDR: u16 = 0xFFFF;
/// Base of the high page used by `LDH` and `LD (C),A` forms.
pub const HIGH_PAGE: u16 = 0xFF00;
