use crate::bus::MemoryFault;

/// Program/data source mapped at `0x0000..=0x7FFF` and `0xA000..=0xBFFF`.
///
/// Bank-switching mappers live outside the core; the bus only requires this
/// interface. Writes into the ROM window are mapper commands and never reach
/// raw memory. Either direction may be refused with a [`MemoryFault`], which
/// surfaces out of `Cpu::step` untouched.
pub trait Cartridge {
    fn read(&mut self, addr: u16) -> Result<u8, MemoryFault>;
    fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryFault>;
}

/// Flat 32 KiB ROM with optional external RAM and no mapper.
///
/// Sufficient for small test programs; ROM-window writes are accepted and
/// dropped, reads past the end of the image return open-bus `0xFF`.
pub struct RomOnly {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl RomOnly {
    pub fn new(rom: Vec<u8>) -> Self {
        Self { rom, ram: Vec::new() }
    }

    pub fn with_ram(rom: Vec<u8>, ram_size: usize) -> Self {
        Self {
            rom,
            ram: vec![0; ram_size],
        }
    }
}

impl Cartridge for RomOnly {
    fn read(&mut self, addr: u16) -> Result<u8, MemoryFault> {
        match addr {
            0x0000..=0x7FFF => Ok(self.rom.get(addr as usize).copied().unwrap_or(0xFF)),
            0xA000..=0xBFFF => Ok(self
                .ram
                .get((addr - 0xA000) as usize)
                .copied()
                .unwrap_or(0xFF)),
            _ => Ok(0xFF),
        }
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryFault> {
        if let 0xA000..=0xBFFF = addr
            && let Some(slot) = self.ram.get_mut((addr - 0xA000) as usize)
        {
            *slot = value;
        }
        Ok(())
    }
}
