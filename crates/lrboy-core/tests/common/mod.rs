#![allow(dead_code)]

use lrboy_core::{cartridge::Cartridge, gameboy::GameBoy};

pub const LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

/// A header-valid ROM image of `2 << rom_code` banks.
pub fn rom_image(cart_type: u8, rom_code: u8, ram_code: u8) -> Vec<u8> {
    let banks = 2usize << rom_code;
    let mut rom = vec![0u8; banks * 0x4000];
    rom[0x0104..0x0134].copy_from_slice(&LOGO);
    rom[0x0134..0x0138].copy_from_slice(b"TEST");
    rom[0x0147] = cart_type;
    rom[0x0148] = rom_code;
    rom[0x0149] = ram_code;
    rom
}

/// A machine whose ROM holds `program` at 0x0100, where the CPU starts.
pub fn gameboy_with_program(program: &[u8]) -> GameBoy {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    GameBoy::new(Cartridge::from_raw(rom))
}

/// Run `n` instructions, panicking on any emulation error.
pub fn run_steps(gb: &mut GameBoy, n: usize) -> u32 {
    let mut total = 0;
    for _ in 0..n {
        total += gb.step().unwrap();
    }
    total
}
