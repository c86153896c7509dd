//! Flag semantics for the arithmetic, logic, rotate and shift instructions.
//!
//! Everything here is a pure function over operands and the incoming flags.
//! The execute handlers decide where operands come from and where results
//! go; these helpers only compute values and the resulting F register.

use super::Flags;

#[inline]
fn zero(value: u8) -> Flags {
    if value == 0 {
        Flags::Z
    } else {
        Flags::empty()
    }
}

/// Core 8-bit ADD/ADC.
///
/// `carry_in` selects between ADD (false) and ADC with C set (true).
pub fn add8(a: u8, value: u8, carry_in: bool) -> (u8, Flags) {
    let carry = carry_in as u8;
    let half = (a & 0x0F) + (value & 0x0F) + carry;
    let full = a as u16 + value as u16 + carry as u16;
    let result = full as u8;

    let mut flags = zero(result);
    flags.set(Flags::H, half > 0x0F);
    flags.set(Flags::C, full > 0xFF);
    (result, flags)
}

/// Core 8-bit SUB/SBC. Also used by CP, which discards the result.
pub fn sub8(a: u8, value: u8, borrow_in: bool) -> (u8, Flags) {
    let borrow = borrow_in as i16;
    let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let full = a as i16 - value as i16 - borrow;
    let result = full as u8;

    let mut flags = zero(result) | Flags::N;
    flags.set(Flags::H, half < 0);
    flags.set(Flags::C, full < 0);
    (result, flags)
}

#[inline]
pub fn and8(a: u8, value: u8) -> (u8, Flags) {
    let result = a & value;
    (result, zero(result) | Flags::H)
}

#[inline]
pub fn or8(a: u8, value: u8) -> (u8, Flags) {
    let result = a | value;
    (result, zero(result))
}

#[inline]
pub fn xor8(a: u8, value: u8) -> (u8, Flags) {
    let result = a ^ value;
    (result, zero(result))
}

/// 8-bit increment used by INC r and INC (HL). C is preserved.
#[inline]
pub fn inc8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_add(1);
    let mut out = (flags & Flags::C) | zero(result);
    out.set(Flags::H, (value & 0x0F) == 0x0F);
    (result, out)
}

/// 8-bit decrement used by DEC r and DEC (HL). C is preserved.
#[inline]
pub fn dec8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_sub(1);
    let mut out = (flags & Flags::C) | zero(result) | Flags::N;
    out.set(Flags::H, (value & 0x0F) == 0);
    (result, out)
}

/// 16-bit add for `ADD HL,rr`.
///
/// Z is unaffected; N is cleared; H is the carry out of bit 11 and C the
/// carry out of bit 15.
pub fn add16(hl: u16, value: u16, flags: Flags) -> (u16, Flags) {
    let mut out = flags & Flags::Z;
    out.set(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
    out.set(Flags::C, hl as u32 + value as u32 > 0xFFFF);
    (hl.wrapping_add(value), out)
}

/// Signed 8-bit offset applied to a 16-bit base (`ADD SP,r8`, `LD HL,SP+r8`).
///
/// Z and N are cleared; H and C come from unsigned nibble/byte additions of
/// the base and the raw offset byte.
pub fn add16_signed(base: u16, imm8: u8) -> (u16, Flags) {
    let offset = imm8 as i8 as i16 as u16;
    let mut flags = Flags::empty();
    flags.set(Flags::H, (base & 0x000F) + (imm8 as u16 & 0x000F) > 0x000F);
    flags.set(Flags::C, (base & 0x00FF) + imm8 as u16 > 0x00FF);
    (base.wrapping_add(offset), flags)
}

/// Decimal adjust accumulator after a BCD addition or subtraction.
///
/// After an addition the corrections are chosen from the flags and the
/// magnitude of A; after a subtraction only the existing H/C flags gate
/// them. N is preserved, H is always cleared.
pub fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let mut adjust = 0u8;
    let mut carry = flags.contains(Flags::C);

    let result = if !flags.contains(Flags::N) {
        if flags.contains(Flags::H) || (a & 0x0F) > 0x09 {
            adjust |= 0x06;
        }
        if carry || a > 0x99 {
            adjust |= 0x60;
            carry = true;
        }
        a.wrapping_add(adjust)
    } else {
        if flags.contains(Flags::H) {
            adjust |= 0x06;
        }
        if carry {
            adjust |= 0x60;
        }
        a.wrapping_sub(adjust)
    };

    let mut out = (flags & Flags::N) | zero(result);
    out.set(Flags::C, carry);
    (result, out)
}

/// CPL: invert A, set N and H, keep Z and C.
#[inline]
pub fn cpl(a: u8, flags: Flags) -> (u8, Flags) {
    (!a, (flags & (Flags::Z | Flags::C)) | Flags::N | Flags::H)
}

/// SCF: set carry, clear N and H, keep Z.
#[inline]
pub fn scf(flags: Flags) -> Flags {
    (flags & Flags::Z) | Flags::C
}

/// CCF: complement carry, clear N and H, keep Z.
#[inline]
pub fn ccf(flags: Flags) -> Flags {
    let mut out = flags & Flags::Z;
    out.set(Flags::C, !flags.contains(Flags::C));
    out
}

/// Result of a shift/rotate with the CB-prefixed flag convention
/// (Z from result, N = H = 0, C = bit shifted out).
#[inline]
fn shifted(result: u8, carry: bool) -> (u8, Flags) {
    let mut flags = zero(result);
    flags.set(Flags::C, carry);
    (result, flags)
}

/// RLC: circular rotate left. Bit 7 goes to both C and bit 0.
pub fn rlc(value: u8) -> (u8, Flags) {
    shifted(value.rotate_left(1), value & 0x80 != 0)
}

/// RRC: circular rotate right. Bit 0 goes to both C and bit 7.
pub fn rrc(value: u8) -> (u8, Flags) {
    shifted(value.rotate_right(1), value & 0x01 != 0)
}

/// RL: rotate left through carry. Old C fills bit 0, bit 7 goes to C.
pub fn rl(value: u8, carry_in: bool) -> (u8, Flags) {
    shifted((value << 1) | carry_in as u8, value & 0x80 != 0)
}

/// RR: rotate right through carry. Old C fills bit 7, bit 0 goes to C.
pub fn rr(value: u8, carry_in: bool) -> (u8, Flags) {
    shifted((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0)
}

pub fn sla(value: u8) -> (u8, Flags) {
    shifted(value << 1, value & 0x80 != 0)
}

/// SRA keeps bit 7 (arithmetic shift).
pub fn sra(value: u8) -> (u8, Flags) {
    shifted((value >> 1) | (value & 0x80), value & 0x01 != 0)
}

pub fn srl(value: u8) -> (u8, Flags) {
    shifted(value >> 1, value & 0x01 != 0)
}

pub fn swap(value: u8) -> (u8, Flags) {
    shifted(value.rotate_left(4), false)
}

/// BIT n: Z when the bit is clear, N = 0, H = 1, C preserved.
pub fn bit(index: u8, value: u8, flags: Flags) -> Flags {
    let mut out = (flags & Flags::C) | Flags::H;
    out.set(Flags::Z, value & (1 << index) == 0);
    out
}

/// Accumulator rotates (RLCA/RRCA/RLA/RRA) share the bit movement of their
/// CB counterparts but always clear Z, N and H.
#[inline]
pub fn accumulator_form((result, flags): (u8, Flags)) -> (u8, Flags) {
    (result, flags & Flags::C)
}
