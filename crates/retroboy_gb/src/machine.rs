mod cartridge;
mod gameboy;
mod memory;

pub use cartridge::{LoadError, ProgramImage, BANK_SIZE, BOOT_SIZE, PROGRAM_START};
pub use gameboy::GameBoy;
pub use memory::Memory;

/// Total addressable memory for the Game Boy (64 KiB).
///
/// The bus is a flat array with the interrupt registers routed to their own
/// fields; there is no further memory map.
pub const MEMORY_SIZE: usize = 0x10000;

/// Start of the switchable bank window (0x4000–0x7FFF).
pub const BANK_WINDOW: u16 = 0x4000;

/// Byte where test programs leave their result (0 = passed).
pub const RESULT_ADDR: u16 = 0xC000;
