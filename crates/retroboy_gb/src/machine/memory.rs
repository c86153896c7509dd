use crate::cpu::{Bus, Interrupt, InterruptFlags, IE_ADDR, IF_ADDR};

use super::cartridge::{LoadError, ProgramImage, BOOT_SIZE, PROGRAM_START};
use super::{BANK_WINDOW, MEMORY_SIZE};

/// The machine's 64 KiB address space.
///
/// A flat byte array backs every address except the two interrupt registers,
/// which live in their own fields and are reached through [`IF_ADDR`] and
/// [`IE_ADDR`]. The memory also keeps the loaded boot and program images so
/// banks can be switched and a reset can restore the initial map.
#[derive(Clone)]
pub struct Memory {
    memory: Box<[u8; MEMORY_SIZE]>,
    if_reg: u8,
    ie_reg: u8,
    boot: Option<Vec<u8>>,
    program: Option<ProgramImage>,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            memory: Box::new([0; MEMORY_SIZE]),
            if_reg: 0,
            ie_reg: 0,
            boot: None,
            program: None,
        }
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("if_reg", &self.if_reg)
            .field("ie_reg", &self.ie_reg)
            .field("boot_loaded", &self.boot.is_some())
            .field(
                "bank_count",
                &self.program.as_ref().map(ProgramImage::bank_count),
            )
            .finish_non_exhaustive()
    }
}

impl Memory {
    /// Clear RAM and the interrupt registers, then map the loaded images
    /// again.
    pub fn reset(&mut self) {
        self.memory.fill(0);
        self.if_reg = 0;
        self.ie_reg = 0;
        self.map_boot();
        self.map_program();
    }

    /// Copy a boot image to 0x0000. It must be exactly [`BOOT_SIZE`] bytes.
    pub fn load_boot(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() != BOOT_SIZE {
            return Err(LoadError::BootSize { len: image.len() });
        }
        self.boot = Some(image.to_vec());
        self.map_boot();
        log::info!("GB boot image loaded ({} bytes)", image.len());
        Ok(())
    }

    /// Keep `image` as the backing program and map it from
    /// [`PROGRAM_START`].
    ///
    /// Rejected images leave the memory untouched.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let program = ProgramImage::new(image)?;
        log::info!(
            "GB program loaded ({} bytes, {} bank(s))",
            image.len(),
            program.bank_count()
        );
        self.program = Some(program);
        self.map_program();
        Ok(())
    }

    /// Copy bank `bank` of the loaded program into 0x4000–0x7FFF.
    ///
    /// Out-of-range requests (or a switch with no program loaded) are
    /// rejected and the memory is left unchanged.
    pub fn switch_bank(&mut self, bank: usize) -> Result<(), LoadError> {
        let Some(program) = self.program.as_ref() else {
            log::warn!("GB bank switch to {bank} with no program loaded");
            return Err(LoadError::InvalidBank {
                bank,
                bank_count: 0,
            });
        };

        let bytes = match program.bank(bank) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("GB bank switch rejected: {err}");
                return Err(err);
            }
        };

        let start = BANK_WINDOW as usize;
        self.memory[start..start + bytes.len()].copy_from_slice(bytes);
        log::debug!("GB switched bank {bank} into 0x{BANK_WINDOW:04X}");
        Ok(())
    }

    /// Number of banks in the loaded program (0 when none is loaded).
    pub fn bank_count(&self) -> usize {
        self.program.as_ref().map_or(0, ProgramImage::bank_count)
    }

    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    pub fn has_boot(&self) -> bool {
        self.boot.is_some()
    }

    /// Post an interrupt request by setting its IF bit.
    #[inline]
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.if_reg |= interrupt.bit().bits();
    }

    #[inline]
    pub fn interrupt_enable(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.ie_reg)
    }

    #[inline]
    pub fn set_interrupt_enable(&mut self, flags: InterruptFlags) {
        self.ie_reg = flags.bits();
    }

    #[inline]
    pub fn interrupt_flags(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.if_reg)
    }

    /// Read a byte without going through `&mut` bus access.
    pub fn peek(&self, addr: u16) -> u8 {
        match addr {
            IF_ADDR => self.if_reg,
            IE_ADDR => self.ie_reg,
            _ => self.memory[addr as usize],
        }
    }

    /// The raw backing array. The bytes at [`IF_ADDR`] and [`IE_ADDR`] are
    /// shadowed by the interrupt registers.
    pub fn as_slice(&self) -> &[u8] {
        &self.memory[..]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.memory[..]
    }

    fn map_boot(&mut self) {
        if let Some(boot) = &self.boot {
            self.memory[..boot.len()].copy_from_slice(boot);
        }
    }

    fn map_program(&mut self) {
        if let Some(program) = &self.program {
            let start = PROGRAM_START as usize;
            let data = program.data();
            let len = data.len().min(MEMORY_SIZE - start);
            self.memory[start..start + len].copy_from_slice(&data[..len]);
        }
    }
}

impl Bus for Memory {
    fn read8(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            IF_ADDR => self.if_reg = value,
            IE_ADDR => self.ie_reg = value,
            _ => self.memory[addr as usize] = value,
        }
    }
}
