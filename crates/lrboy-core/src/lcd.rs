use crate::io::InterruptKind;

pub const CYCLES_PER_LINE: i64 = 456;
pub const LINES_PER_FRAME: u8 = 154;
pub const VBLANK_LINE: u8 = 144;

const STAT_COINCIDENCE: u8 = 0x04;

/// LCD control and status registers plus the scanline counter.
///
/// No pixels are produced here. LY advances once per 456 cycles and the
/// V-blank interrupt is requested on entering line 144.
pub struct Lcd {
    pub lcdc: u8,
    pub stat: u8,
    pub scy: u8,
    pub scx: u8,
    pub ly: u8,
    pub lyc: u8,
    pub bgp: u8,
    pub obp0: u8,
    pub obp1: u8,
    pub wy: u8,
    pub wx: u8,
    line_left: i64,
}

impl Lcd {
    pub fn new() -> Self {
        Self {
            lcdc: 0x91,
            stat: 0,
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            bgp: 0xFC,
            obp0: 0xFF,
            obp1: 0xFF,
            wy: 0,
            wx: 0,
            line_left: CYCLES_PER_LINE,
        }
    }

    pub fn in_vblank(&self) -> bool {
        self.ly >= VBLANK_LINE
    }

    pub fn coincidence(&self) -> bool {
        self.stat & STAT_COINCIDENCE != 0
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => self.lcdc,
            0xFF41 => self.stat,
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.ly,
            0xFF45 => self.lyc,
            0xFF47 => self.bgp,
            0xFF48 => self.obp0,
            0xFF49 => self.obp1,
            0xFF4A => self.wy,
            0xFF4B => self.wx,
            _ => 0xFF,
        }
    }

    pub fn write(&mut self, addr: u16, val: u8) {
        match addr {
            0xFF40 => self.lcdc = val,
            0xFF41 => self.stat = val,
            0xFF42 => self.scy = val,
            0xFF43 => self.scx = val,
            // Any write restarts the frame at line 0.
            0xFF44 => self.ly = 0,
            0xFF45 => self.lyc = val,
            0xFF47 => self.bgp = val,
            0xFF48 => self.obp0 = val,
            0xFF49 => self.obp1 = val,
            0xFF4A => self.wy = val,
            0xFF4B => self.wx = val,
            _ => {}
        }
    }

    pub fn step(&mut self, elapsed: u64, if_reg: &mut u8) {
        self.line_left -= elapsed as i64;
        while self.line_left <= 0 {
            self.line_left += CYCLES_PER_LINE;
            self.next_line(if_reg);
        }
    }

    fn next_line(&mut self, if_reg: &mut u8) {
        self.ly += 1;
        if self.ly == LINES_PER_FRAME {
            self.ly = 0;
        } else if self.ly == VBLANK_LINE {
            *if_reg |= InterruptKind::VBlank.bit();
        }

        if self.ly == self.lyc {
            self.stat |= STAT_COINCIDENCE;
        } else {
            self.stat &= !STAT_COINCIDENCE;
        }
    }
}

impl Default for Lcd {
    fn default() -> Self {
        Self::new()
    }
}
