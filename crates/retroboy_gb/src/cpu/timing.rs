//! Instruction costs and frame pacing.
//!
//! All costs are in T-cycles (4 T-cycles per M-cycle).

/// CPU clock frequency of the DMG in Hz.
pub const CPU_HZ: u32 = 4_194_304;

/// Cycle budget of one frame at a 60 Hz pacing rate.
pub const CYCLES_PER_FRAME: u32 = CPU_HZ / 60;

/// Extra cost when `JR cc` takes the branch.
pub const JR_TAKEN_PENALTY: u32 = 4;
/// Extra cost when `JP cc,a16` takes the branch.
pub const JP_TAKEN_PENALTY: u32 = 4;
/// Extra cost when `CALL cc,a16` takes the branch.
pub const CALL_TAKEN_PENALTY: u32 = 12;
/// Extra cost when `RET cc` takes the branch.
pub const RET_TAKEN_PENALTY: u32 = 12;

/// Base cost of every primary opcode.
///
/// Conditional branches are listed with their not-taken cost. The 0xCB
/// entry is the cost of the prefix alone; the full cost of a prefixed
/// instruction comes from [`cb_cycles`]. Undefined opcodes cost one
/// M-cycle like a NOP.
#[rustfmt::skip]
pub const OPCODE_CYCLES: [u32; 256] = [
//  x0  x1  x2  x3  x4  x5  x6  x7  x8  x9  xA  xB  xC  xD  xE  xF
     4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x
     4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 1x
     8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 2x
     8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 3x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 4x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 5x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 6x
     8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 7x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 8x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 9x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Ax
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Bx
     8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  4, 12, 24,  8, 16, // Cx
     8, 12, 12,  4, 12, 16,  8, 16,  8, 16, 12,  4, 12,  4,  8, 16, // Dx
    12, 12,  8,  4,  4, 16,  8, 16, 16,  4, 16,  4,  4,  4,  8, 16, // Ex
    12, 12,  8,  4,  4, 16,  8, 16, 12,  8, 16,  4,  4,  4,  8, 16, // Fx
];

/// Cost of a CB-prefixed instruction, prefix fetch included.
///
/// Register operands take 8 cycles. `(HL)` operands add a memory read, and
/// a write-back for everything except `BIT`.
pub fn cb_cycles(cb_opcode: u8) -> u32 {
    let x = cb_opcode >> 6;
    let z = cb_opcode & 0x07;
    match (x, z) {
        (1, 6) => 12,
        (_, 6) => 16,
        _ => 8,
    }
}

/// Running cycle counter plus a frame-pacing accumulator.
///
/// The accumulator only drives pacing; nothing in the emulated state depends
/// on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    cycles: u64,
    frame_accumulator: u32,
    frames: u64,
}

impl Clock {
    /// Add `cycles` and return how many frame boundaries were crossed.
    pub fn tick(&mut self, cycles: u32) -> u32 {
        self.cycles += cycles as u64;
        self.frame_accumulator += cycles;

        let mut completed = 0;
        while self.frame_accumulator >= CYCLES_PER_FRAME {
            self.frame_accumulator -= CYCLES_PER_FRAME;
            completed += 1;
        }
        self.frames += completed as u64;
        completed
    }

    /// Total cycles since reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Completed frames since reset.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Cycles accumulated towards the next frame boundary.
    #[inline]
    pub fn frame_progress(&self) -> u32 {
        self.frame_accumulator
    }
}
