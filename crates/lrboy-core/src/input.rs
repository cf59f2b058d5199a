//! Joypad register (P1, 0xFF00).

pub const BUTTON_RIGHT: u8 = 0x01;
pub const BUTTON_LEFT: u8 = 0x02;
pub const BUTTON_UP: u8 = 0x04;
pub const BUTTON_DOWN: u8 = 0x08;
pub const BUTTON_A: u8 = 0x10;
pub const BUTTON_B: u8 = 0x20;
pub const BUTTON_SELECT: u8 = 0x40;
pub const BUTTON_START: u8 = 0x80;

// Column select bits are active low.
const SELECT_DIRECTIONS: u8 = 0x10;
const SELECT_BUTTONS: u8 = 0x20;

pub struct Input {
    select: u8,
    /// Pressed buttons, 1 = pressed. Directions in the low nibble.
    state: u8,
}

impl Input {
    pub fn new() -> Self {
        Self {
            select: 0x30,
            state: 0,
        }
    }

    pub fn set_state(&mut self, state: u8) {
        self.state = state;
    }

    pub fn state(&self) -> u8 {
        self.state
    }

    pub fn read(&self) -> u8 {
        let mut nibble = 0x0F;
        if self.select & SELECT_DIRECTIONS == 0 {
            nibble &= !self.state & 0x0F;
        }
        if self.select & SELECT_BUTTONS == 0 {
            nibble &= !(self.state >> 4) & 0x0F;
        }
        0xC0 | self.select | nibble
    }

    pub fn write(&mut self, val: u8) {
        self.select = val & 0x30;
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
