use std::{fs, io, path::Path};

use log::info;
use thiserror::Error;

pub const ROM_BANK_SIZE: usize = 0x4000;
pub const RAM_BANK_SIZE: usize = 0x2000;

// Header layout (gbdev.io/pandocs/The_Cartridge_Header.html)
const LOGO_ADDR: usize = 0x0104;
const TITLE_ADDR: usize = 0x0134;
const CGB_FLAG_ADDR: usize = 0x0143;
const TYPE_ADDR: usize = 0x0147;
const ROM_SIZE_ADDR: usize = 0x0148;
const RAM_SIZE_ADDR: usize = 0x0149;
const DESTINATION_ADDR: usize = 0x014A;
const HEADER_END: usize = 0x0150;

const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

/// Load-time validation failures. None of these are recoverable: a cartridge
/// that fails to load never reaches the CPU.
#[derive(Error, Debug)]
pub enum CartridgeError {
    #[error("ROM image is too short ({len} bytes) to contain a header")]
    TooShort { len: usize },

    #[error("logo signature at 0x0104 does not match")]
    BadLogo,

    #[error("ROM size code {code:#04x} declares {expected} banks but the image holds {actual}")]
    RomSizeMismatch {
        code: u8,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported ROM size code {0:#04x}")]
    UnsupportedRomSize(u8),

    #[error("unsupported RAM size code {0:#04x}")]
    UnsupportedRamSize(u8),

    #[error("unsupported cartridge type {0:#04x}")]
    UnsupportedType(u8),

    #[error("failed to read ROM image: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbcType {
    RomOnly,
    Mbc1,
}

#[derive(Debug)]
pub struct Cartridge {
    rom: Vec<u8>,
    pub ram: Vec<u8>,
    pub mbc: MbcType,
    pub cgb: bool,
    pub title: String,
    pub destination: u8,
    pub battery: bool,
    rom_banks: usize,
    ram_banks: usize,
    mbc_state: MbcState,
}

#[derive(Debug)]
enum MbcState {
    RomOnly,
    Mbc1 {
        rom_bank: u8,
        ram_bank: u8,
        mode: u8,
        ram_enable: bool,
    },
}

impl Cartridge {
    /// Validate and load a raw ROM image.
    pub fn load(data: Vec<u8>) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_END {
            return Err(CartridgeError::TooShort { len: data.len() });
        }

        let header = Header::parse(&data);
        if !header.logo_matches() {
            return Err(CartridgeError::BadLogo);
        }

        let code = header.rom_size_code();
        let expected = rom_bank_count(code).ok_or(CartridgeError::UnsupportedRomSize(code))?;
        let actual = data.len() / ROM_BANK_SIZE;
        if expected != actual {
            return Err(CartridgeError::RomSizeMismatch {
                code,
                expected,
                actual,
            });
        }

        let ram_code = header.ram_size_code();
        let (ram_banks, ram_size) =
            ram_layout(ram_code).ok_or(CartridgeError::UnsupportedRamSize(ram_code))?;

        let cart_type = header.cart_type();
        let mbc = header.mbc_type().ok_or(CartridgeError::UnsupportedType(cart_type))?;
        let mbc_state = match mbc {
            MbcType::RomOnly => MbcState::RomOnly,
            MbcType::Mbc1 => MbcState::Mbc1 {
                rom_bank: 1,
                ram_bank: 0,
                mode: 0,
                ram_enable: false,
            },
        };

        let cart = Self {
            cgb: header.cgb_only(),
            title: header.title(),
            destination: header.destination(),
            battery: cart_type == 0x03,
            rom: data,
            ram: vec![0; ram_size],
            mbc,
            rom_banks: expected,
            ram_banks,
            mbc_state,
        };

        info!(
            "Loaded ROM: {} (MBC: {:?}, ROM banks: {}, RAM banks: {}, CGB: {})",
            cart.title,
            cart.mbc,
            cart.rom_banks,
            cart.ram_banks,
            if cart.cgb { "yes" } else { "no" }
        );
        Ok(cart)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let data = fs::read(path)?;
        Self::load(data)
    }

    /// Two zeroed ROM banks with no controller and no RAM. Skips header
    /// validation entirely.
    pub fn blank() -> Self {
        Self {
            rom: vec![0; ROM_BANK_SIZE * 2],
            ram: Vec::new(),
            mbc: MbcType::RomOnly,
            cgb: false,
            title: String::new(),
            destination: 0,
            battery: false,
            rom_banks: 2,
            ram_banks: 0,
            mbc_state: MbcState::RomOnly,
        }
    }

    /// Build a blank cartridge whose ROM is `data`, padded to at least two
    /// banks. Header validation is skipped.
    pub fn from_raw(mut data: Vec<u8>) -> Self {
        let banks = data.len().div_ceil(ROM_BANK_SIZE).max(2);
        data.resize(banks * ROM_BANK_SIZE, 0);
        Self {
            rom: data,
            rom_banks: banks,
            ..Self::blank()
        }
    }

    pub fn rom_bank_count(&self) -> usize {
        self.rom_banks
    }

    pub fn ram_bank_count(&self) -> usize {
        self.ram_banks
    }

    /// Index of the bank currently mapped at 0x4000-0x7FFF. Never 0: a
    /// selector that wraps onto bank 0 maps bank 1 instead.
    pub fn selected_rom_bank(&self) -> usize {
        match self.mbc_state {
            MbcState::RomOnly => 1,
            MbcState::Mbc1 { rom_bank, .. } => match rom_bank as usize % self.rom_banks {
                0 => 1,
                bank => bank,
            },
        }
    }

    pub fn selected_ram_bank(&self) -> usize {
        match self.mbc_state {
            MbcState::Mbc1 { ram_bank, .. } if self.ram_banks > 0 => {
                ram_bank as usize % self.ram_banks
            }
            _ => 0,
        }
    }

    pub fn ram_enabled(&self) -> bool {
        match self.mbc_state {
            MbcState::RomOnly => !self.ram.is_empty(),
            MbcState::Mbc1 { ram_enable, .. } => ram_enable,
        }
    }

    pub fn bank0(&self) -> &[u8] {
        &self.rom[..ROM_BANK_SIZE]
    }

    pub fn switch_bank(&self) -> &[u8] {
        let start = self.selected_rom_bank() * ROM_BANK_SIZE;
        &self.rom[start..start + ROM_BANK_SIZE]
    }

    /// The addressed RAM bank, or `None` when the cartridge has no RAM.
    /// A 2 KiB cartridge yields a 2 KiB slice.
    pub fn ram_bank(&self) -> Option<&[u8]> {
        let range = self.ram_bank_range()?;
        Some(&self.ram[range])
    }

    pub fn ram_bank_mut(&mut self) -> Option<&mut [u8]> {
        let range = self.ram_bank_range()?;
        Some(&mut self.ram[range])
    }

    fn ram_bank_range(&self) -> Option<std::ops::Range<usize>> {
        if self.ram.is_empty() {
            return None;
        }
        let start = self.selected_ram_bank() * RAM_BANK_SIZE;
        let end = (start + RAM_BANK_SIZE).min(self.ram.len());
        Some(start..end)
    }

    /// Read from 0xA000-0xBFFF. Disabled or absent RAM reads as 0xFF.
    pub fn read_ram(&self, addr: u16) -> u8 {
        if !self.ram_enabled() {
            return 0xFF;
        }
        let offset = (addr as usize).wrapping_sub(0xA000);
        self.ram_bank()
            .and_then(|bank| bank.get(offset).copied())
            .unwrap_or(0xFF)
    }

    /// Write to 0xA000-0xBFFF. Ignored while RAM is disabled.
    pub fn write_ram(&mut self, addr: u16, val: u8) {
        if !self.ram_enabled() {
            return;
        }
        let offset = (addr as usize).wrapping_sub(0xA000);
        if let Some(b) = self.ram_bank_mut().and_then(|bank| bank.get_mut(offset)) {
            *b = val;
        }
    }

    /// Handle a write into the ROM address range (0x0000-0x7FFF). ROM is never
    /// modified; on MBC1 these writes update the banking registers.
    pub fn write_control(&mut self, addr: u16, val: u8) {
        match (&mut self.mbc_state, addr) {
            (MbcState::RomOnly, _) => {}
            (MbcState::Mbc1 { ram_enable, .. }, 0x0000..=0x1FFF) => {
                *ram_enable = val & 0x0F == 0x0A;
            }
            (MbcState::Mbc1 { rom_bank, .. }, 0x2000..=0x3FFF) => {
                let mut bank = ((*rom_bank & 0x60) | val) & 0x7F;
                // Values 0, 20, 40 and 60 are never selectable and map to
                // the following bank.
                if matches!(bank, 0 | 20 | 40 | 60) {
                    bank += 1;
                }
                *rom_bank = bank;
            }
            (
                MbcState::Mbc1 {
                    rom_bank,
                    ram_bank,
                    mode,
                    ..
                },
                0x4000..=0x5FFF,
            ) => {
                if *mode == 0 {
                    *rom_bank = (*rom_bank & 0x1F) | ((val & 0x03) << 5);
                    if *rom_bank == 0 {
                        *rom_bank = 1;
                    }
                } else {
                    *ram_bank = val & 0x03;
                }
            }
            (MbcState::Mbc1 { mode, .. }, 0x6000..=0x7FFF) => {
                *mode = val & 0x01;
            }
            _ => {}
        }
    }

    /// Restore the controller to its power-on banking state. RAM contents
    /// are kept.
    pub fn reset_banking(&mut self) {
        if let MbcState::Mbc1 { .. } = self.mbc_state {
            self.mbc_state = MbcState::Mbc1 {
                rom_bank: 1,
                ram_bank: 0,
                mode: 0,
                ram_enable: false,
            };
        }
    }
}

fn rom_bank_count(code: u8) -> Option<usize> {
    match code {
        0x00..=0x06 => Some(2 << code),
        0x52 => Some(72),
        0x53 => Some(80),
        0x54 => Some(96),
        _ => None,
    }
}

/// Bank count and total byte size for a RAM size code.
fn ram_layout(code: u8) -> Option<(usize, usize)> {
    match code {
        0x00 => Some((0, 0)),
        0x01 => Some((1, RAM_BANK_SIZE / 4)),
        0x02 => Some((1, RAM_BANK_SIZE)),
        0x03 => Some((4, RAM_BANK_SIZE * 4)),
        0x04 => Some((16, RAM_BANK_SIZE * 16)),
        0x05 => Some((8, RAM_BANK_SIZE * 8)),
        _ => None,
    }
}

struct Header<'a> {
    data: &'a [u8],
}

impl<'a> Header<'a> {
    fn parse(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn logo_matches(&self) -> bool {
        self.data[LOGO_ADDR..LOGO_ADDR + NINTENDO_LOGO.len()] == NINTENDO_LOGO
    }

    fn title(&self) -> String {
        let mut slice = &self.data[TITLE_ADDR..TITLE_ADDR + 16];
        if let Some(pos) = slice.iter().position(|&b| b == 0) {
            slice = &slice[..pos];
        }
        String::from_utf8_lossy(slice).trim().to_string()
    }

    fn cgb_only(&self) -> bool {
        self.data[CGB_FLAG_ADDR] == 0x80
    }

    fn cart_type(&self) -> u8 {
        self.data[TYPE_ADDR]
    }

    fn mbc_type(&self) -> Option<MbcType> {
        match self.cart_type() {
            0x00 => Some(MbcType::RomOnly),
            0x01..=0x03 => Some(MbcType::Mbc1),
            _ => None,
        }
    }

    fn rom_size_code(&self) -> u8 {
        self.data[ROM_SIZE_ADDR]
    }

    fn ram_size_code(&self) -> u8 {
        self.data[RAM_SIZE_ADDR]
    }

    fn destination(&self) -> u8 {
        self.data[DESTINATION_ADDR]
    }
}
