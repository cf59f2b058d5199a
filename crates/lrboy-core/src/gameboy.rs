use crate::{
    EmuError,
    cartridge::Cartridge,
    cpu::{Cpu, Registers},
    mmu::Mmu,
};

pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
}

impl GameBoy {
    pub fn new(cart: Cartridge) -> Self {
        Self {
            cpu: Cpu::new(),
            mmu: Mmu::new(cart),
        }
    }

    /// Execute one instruction. See [`Cpu::step`].
    pub fn step(&mut self) -> Result<u32, EmuError> {
        self.cpu.step(&mut self.mmu)
    }

    /// Step until at least `cycles` more machine cycles have elapsed.
    /// Returns the cycles actually run.
    pub fn run_for(&mut self, cycles: u64) -> Result<u64, EmuError> {
        let target = self.cpu.cycles.saturating_add(cycles);
        let start = self.cpu.cycles;
        while self.cpu.cycles < target {
            self.step()?;
        }
        Ok(self.cpu.cycles - start)
    }

    /// Reset the Game Boy to its post-boot state while preserving the
    /// loaded cartridge and its RAM.
    pub fn reset(&mut self) {
        let mut cart = std::mem::replace(&mut self.mmu.cart, Cartridge::blank());
        cart.reset_banking();
        self.cpu = Cpu::new();
        self.mmu = Mmu::new(cart);
    }

    pub fn cycles(&self) -> u64 {
        self.cpu.cycles
    }

    pub fn registers(&self) -> Registers {
        self.cpu.registers()
    }

    /// Debugger read. Unmapped I/O registers are reported as errors.
    pub fn peek(&self, addr: u16) -> Result<u8, EmuError> {
        self.mmu.read_byte(addr)
    }

    /// Debugger write, routed exactly like a CPU store.
    pub fn poke(&mut self, addr: u16, val: u8) {
        self.mmu.write_byte(addr, val);
    }

    /// Latch the joypad state (1 = pressed, see [`crate::input`]).
    pub fn set_input(&mut self, state: u8) {
        self.mmu.io.set_input(state);
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new(Cartridge::blank())
    }
}
