use log::debug;

use crate::{EmuError, input::Input, lcd::Lcd, timer::Timer};

/// Interrupt sources in priority order (gbdev.io/pandocs/Interrupts.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptKind {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptKind {
    pub const ALL: [InterruptKind; 5] = [
        InterruptKind::VBlank,
        InterruptKind::LcdStat,
        InterruptKind::Timer,
        InterruptKind::Serial,
        InterruptKind::Joypad,
    ];

    /// Bit in IF/IE.
    pub fn bit(self) -> u8 {
        match self {
            InterruptKind::VBlank => 0x01,
            InterruptKind::LcdStat => 0x02,
            InterruptKind::Timer => 0x04,
            InterruptKind::Serial => 0x08,
            InterruptKind::Joypad => 0x10,
        }
    }

    pub fn vector(self) -> u16 {
        match self {
            InterruptKind::VBlank => 0x40,
            InterruptKind::LcdStat => 0x48,
            InterruptKind::Timer => 0x50,
            InterruptKind::Serial => 0x58,
            InterruptKind::Joypad => 0x60,
        }
    }
}

/// Memory-mapped I/O registers at 0xFF00-0xFF4B plus 0xFF4D.
pub struct IoController {
    pub timer: Timer,
    pub lcd: Lcd,
    pub input: Input,
    pub if_reg: u8,
    /// Serial data; stored but never shifted.
    pub sb: u8,
    pub sc: u8,
    /// Pending OAM DMA source page, cleared once the copy is done.
    pub dma: u8,
    last_cycles: u64,
}

impl IoController {
    pub fn new() -> Self {
        Self {
            timer: Timer::new(),
            lcd: Lcd::new(),
            input: Input::new(),
            if_reg: 0,
            sb: 0,
            sc: 0,
            dma: 0,
            last_cycles: 0,
        }
    }

    /// Advance the divider, timer and scanline counters up to the absolute
    /// machine-cycle count `cycles`.
    pub fn step(&mut self, cycles: u64) {
        let elapsed = cycles.saturating_sub(self.last_cycles);
        self.last_cycles = cycles;

        self.lcd.step(elapsed, &mut self.if_reg);
        self.timer.step(elapsed, &mut self.if_reg);
    }

    pub fn request_interrupt(&mut self, kind: InterruptKind) {
        self.if_reg |= kind.bit();
    }

    pub fn set_input(&mut self, state: u8) {
        self.input.set_state(state);
    }

    pub fn read(&self, addr: u16) -> Result<u8, EmuError> {
        let val = match addr {
            0xFF00 => self.input.read(),
            0xFF01 => self.sb,
            0xFF02 => self.sc,
            0xFF04..=0xFF07 => self.timer.read(addr),
            0xFF0F => self.if_reg,
            0xFF46 => self.dma,
            0xFF40..=0xFF45 | 0xFF47..=0xFF4B => self.lcd.read(addr),
            // Speed switch is CGB only.
            0xFF4D => 0xFF,
            _ => return Err(EmuError::UnimplementedRegister { addr }),
        };
        Ok(val)
    }

    pub fn write(&mut self, addr: u16, val: u8) {
        match addr {
            // Sound registers are accepted and dropped.
            0xFF10..=0xFF3F => {}
            0xFF00 => self.input.write(val),
            0xFF01 => self.sb = val,
            0xFF02 => self.sc = val,
            0xFF04..=0xFF07 => self.timer.write(addr, val),
            0xFF0F => self.if_reg = val,
            0xFF46 => self.dma = val,
            0xFF40..=0xFF45 | 0xFF47..=0xFF4B => self.lcd.write(addr, val),
            _ => debug!("Ignoring write to unknown register {addr:04X} = {val:02X}"),
        }
    }
}

impl Default for IoController {
    fn default() -> Self {
        Self::new()
    }
}
