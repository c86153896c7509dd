use std::fmt;

use super::MEMORY_SIZE;

/// Size of the boot image mapped at 0x0000.
pub const BOOT_SIZE: usize = 0x100;
/// Address where program images are mapped and execution starts.
pub const PROGRAM_START: u16 = 0x0100;
/// Size of one switchable bank.
pub const BANK_SIZE: usize = 0x4000;

/// Errors reported while loading images or switching banks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The boot image is not exactly [`BOOT_SIZE`] bytes.
    BootSize { len: usize },
    EmptyProgram,
    /// The program image does not fit in the address space.
    ProgramTooLarge { len: usize },
    InvalidBank { bank: usize, bank_count: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BootSize { len } => {
                write!(f, "boot image must be {BOOT_SIZE} bytes, got {len}")
            }
            Self::EmptyProgram => write!(f, "program image is empty"),
            Self::ProgramTooLarge { len } => write!(
                f,
                "program image of {len} bytes exceeds the {MEMORY_SIZE}-byte address space"
            ),
            Self::InvalidBank { bank, bank_count } => write!(
                f,
                "bank {bank} out of range (image has {bank_count} bank(s))"
            ),
        }
    }
}

impl std::error::Error for LoadError {}

/// Backing copy of a loaded program, split into fixed-size banks.
///
/// The memory bus maps the start of the image at [`PROGRAM_START`] and can
/// later copy any bank into the switchable window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramImage {
    data: Vec<u8>,
    bank_count: usize,
}

impl ProgramImage {
    /// Validate and take a copy of `data`.
    pub fn new(data: &[u8]) -> Result<Self, LoadError> {
        if data.is_empty() {
            return Err(LoadError::EmptyProgram);
        }
        if data.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge { len: data.len() });
        }

        Ok(Self {
            data: data.to_vec(),
            bank_count: data.len().div_ceil(BANK_SIZE),
        })
    }

    #[inline]
    pub fn bank_count(&self) -> usize {
        self.bank_count
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes of bank `bank`. The last bank may be shorter than
    /// [`BANK_SIZE`].
    pub fn bank(&self, bank: usize) -> Result<&[u8], LoadError> {
        if bank >= self.bank_count {
            return Err(LoadError::InvalidBank {
                bank,
                bank_count: self.bank_count,
            });
        }
        let start = bank * BANK_SIZE;
        let end = (start + BANK_SIZE).min(self.data.len());
        Ok(&self.data[start..end])
    }
}
