use crate::io::InterruptKind;

const DIV_PERIOD: i64 = 256;

/// Divider and programmable timer, advanced by elapsed machine cycles.
pub struct Timer {
    /// Divider register, incremented every 256 cycles.
    pub div: u8,
    /// Timer counter
    pub tima: u8,
    /// Timer modulo
    pub tma: u8,
    /// Timer control
    pub tac: u8,
    div_left: i64,
    tac_left: i64,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            div: 0,
            tima: 0,
            tma: 0,
            tac: 0,
            div_left: DIV_PERIOD,
            tac_left: 0,
        }
    }

    pub fn enabled(&self) -> bool {
        self.tac & 0x04 != 0
    }

    /// Cycles per TIMA increment selected by TAC bits 0-1.
    pub fn period(&self) -> i64 {
        match self.tac & 0x03 {
            0 => 1024,
            1 => 16,
            2 => 64,
            _ => 256,
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF04 => self.div,
            0xFF05 => self.tima,
            0xFF06 => self.tma,
            0xFF07 => self.tac,
            _ => 0xFF,
        }
    }

    pub fn write(&mut self, addr: u16, val: u8) {
        match addr {
            0xFF04 => self.div = 0,
            0xFF05 => self.tima = val,
            0xFF06 => self.tma = val,
            0xFF07 => self.tac = val,
            _ => {}
        }
    }

    /// Advance by `elapsed` cycles, raising the timer interrupt in `if_reg`
    /// whenever TIMA overflows.
    pub fn step(&mut self, elapsed: u64, if_reg: &mut u8) {
        let elapsed = elapsed as i64;

        self.div_left -= elapsed;
        while self.div_left <= 0 {
            self.div_left += DIV_PERIOD;
            self.div = self.div.wrapping_add(1);
        }

        if !self.enabled() {
            return;
        }

        self.tac_left -= elapsed;
        while self.tac_left <= 0 {
            self.tac_left += self.period();
            match self.tima.checked_add(1) {
                Some(v) => self.tima = v,
                None => {
                    self.tima = self.tma;
                    *if_reg |= InterruptKind::Timer.bit();
                }
            }
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
