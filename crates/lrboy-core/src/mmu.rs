use crate::{EmuError, cartridge::Cartridge, io::IoController};

const WRAM_SIZE: usize = 0x2000;
const VRAM_SIZE: usize = 0x2000;
const HRAM_SIZE: usize = 0x7F;
const OAM_SIZE: usize = 0xA0;

/// The 16-bit address space. Owns every backing store the CPU can reach;
/// the cartridge and I/O controller are invoked through it.
pub struct Mmu {
    pub wram: [u8; WRAM_SIZE],
    pub vram: [u8; VRAM_SIZE],
    pub hram: [u8; HRAM_SIZE],
    pub oam: [u8; OAM_SIZE],
    pub ie_reg: u8,
    pub cart: Cartridge,
    pub io: IoController,
}

impl Mmu {
    pub fn new(cart: Cartridge) -> Self {
        Self {
            wram: [0; WRAM_SIZE],
            vram: [0; VRAM_SIZE],
            hram: [0; HRAM_SIZE],
            oam: [0; OAM_SIZE],
            ie_reg: 0,
            cart,
            io: IoController::new(),
        }
    }

    /// Read a byte. Fails only for unimplemented I/O registers.
    pub fn read_byte(&self, addr: u16) -> Result<u8, EmuError> {
        let val = match addr {
            0x0000..=0x3FFF => self.cart.bank0()[addr as usize],
            0x4000..=0x7FFF => self.cart.switch_bank()[(addr - 0x4000) as usize],
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],
            0xA000..=0xBFFF => self.cart.read_ram(addr),
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize],
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize],
            0xFEA0..=0xFEFF => 0xFF,
            0xFF00..=0xFF4B => self.io.read(addr)?,
            0xFF4C..=0xFF7F => 0xFF,
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.ie_reg,
        };
        Ok(val)
    }

    pub fn write_byte(&mut self, addr: u16, val: u8) {
        match addr {
            0x0000..=0x7FFF => {
                self.cart.write_control(addr, val);
                // The I/O controller also sees switchable-bank writes and
                // drops them as unknown registers.
                if addr >= 0x4000 {
                    self.io.write(addr, val);
                }
            }
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = val,
            0xA000..=0xBFFF => self.cart.write_ram(addr, val),
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = val,
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize] = val,
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize] = val,
            0xFEA0..=0xFEFF => {}
            0xFF00..=0xFF4B => self.io.write(addr, val),
            0xFF4C..=0xFF7F => {}
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = val,
            0xFFFF => self.ie_reg = val,
        }
    }

    /// Copy 160 bytes from `DMA << 8` into OAM if a transfer is pending, then
    /// clear the DMA register. Costs no cycles.
    pub fn dma_transfer(&mut self) -> Result<(), EmuError> {
        if self.io.dma == 0 {
            return Ok(());
        }
        let start = (self.io.dma as u16) << 8;
        for i in 0..OAM_SIZE as u16 {
            self.oam[i as usize] = self.read_byte(start.wrapping_add(i))?;
        }
        self.io.dma = 0;
        Ok(())
    }

    /// Tile data addressed with signed indices (0x8800-0x97FF).
    pub fn tile_pattern_table_1(&self) -> &[u8] {
        &self.vram[0x0800..0x1800]
    }

    /// Tile data addressed with unsigned indices (0x8000-0x8FFF).
    pub fn tile_pattern_table_2(&self) -> &[u8] {
        &self.vram[0x0000..0x1000]
    }

    pub fn sprite_pattern_table(&self) -> &[u8] {
        &self.vram[0x0000..0x1000]
    }

    /// Background map at 0x9800.
    pub fn background_tile_map_1(&self) -> &[u8] {
        &self.vram[0x1800..0x1C00]
    }

    /// Background map at 0x9C00.
    pub fn background_tile_map_2(&self) -> &[u8] {
        &self.vram[0x1C00..0x2000]
    }

    pub fn oam(&self) -> &[u8] {
        &self.oam
    }
}
