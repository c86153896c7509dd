//! Game Boy (LR35902) CPU interpreter core.
//!
//! [`cpu`] holds the register file, ALU, decode/execute engine and interrupt
//! controller, generic over any [`cpu::Bus`]. [`machine`] wraps the CPU and a
//! flat 64 KiB [`machine::Memory`] into a [`GameBoy`] with image loading,
//! bank switching and frame pacing.

pub mod cpu;
pub mod machine;

pub use cpu::{Cpu, ExecutionMode, Interrupt};
pub use machine::{GameBoy, LoadError};
