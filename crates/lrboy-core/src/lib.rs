//! LR35902 (Game Boy) emulation core.
//!
//! Contains the CPU interpreter, the memory map, ROM-only and MBC1 cartridge
//! banking, and the timer/scanline side of the I/O registers. Nothing here
//! renders pixels or produces audio; frontends drive the core through the
//! [`gameboy`] facade and read back memory and registers between steps.

use thiserror::Error;

/// Cartridge loading and MBC1 bank switching.
pub mod cartridge;

/// LR35902 CPU core.
pub mod cpu;

/// Opcode field decoding shared by the CPU.
pub mod decode;

/// High-level facade that wires the CPU and MMU into a single machine.
pub mod gameboy;

/// Joypad input register.
pub mod input;

/// Memory-mapped I/O registers and interrupt sources.
pub mod io;

/// LCD status registers and the scanline counter.
pub mod lcd;

/// Memory map.
pub mod mmu;

/// Divider/timer unit.
pub mod timer;

/// Errors raised while executing. Any of these means the emulation has hit
/// something it does not model, and stepping must stop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmuError {
    #[error("unimplemented opcode {opcode:#04x} at pc {pc:#06x}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },

    #[error("read from unimplemented I/O register {addr:#06x}")]
    UnimplementedRegister { addr: u16 },

    #[error("register pair selector {0} out of range")]
    InvalidRegisterPair(u8),
}
