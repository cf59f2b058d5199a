use log::debug;

use crate::{
    EmuError,
    decode::{Alu, CbOp, Condition, Group, Opcode, REG_HL_INDIRECT, Rotation, is_illegal},
    io::InterruptKind,
    mmu::Mmu,
};

#[cfg(feature = "cpu-trace")]
macro_rules! cpu_trace {
    ($($arg:tt)*) => {
        log::trace!($($arg)*);
    };
}

#[cfg(not(feature = "cpu-trace"))]
macro_rules! cpu_trace {
    ($($arg:tt)*) => {};
}

// CPU flag bits as documented in gbdev.io/pandocs/The_CPU_Flags.html
const FLAG_Z: u8 = 0x80; // Zero
const FLAG_N: u8 = 0x40; // Subtract
const FLAG_H: u8 = 0x20; // Half Carry
const FLAG_C: u8 = 0x10; // Carry

// Post-boot CPU state from gbdev.io/pandocs/Power_Up_State.html
const BOOT_PC: u16 = 0x0100;
const BOOT_SP: u16 = 0xFFFE;

const BOOT_A: u8 = 0x01;
const BOOT_F: u8 = 0xB0;
const BOOT_B: u8 = 0x00;
const BOOT_C: u8 = 0x13;
const BOOT_D: u8 = 0x00;
const BOOT_E: u8 = 0xD8;
const BOOT_H: u8 = 0x01;
const BOOT_L: u8 = 0x4D;

/// Cycles spent while halted, per step.
const HALT_STEP_CYCLES: u32 = 4;
/// Cycles charged for pushing PC and jumping to an interrupt vector.
/// Dispatch is deliberately not free: these are added on top of the
/// cycles of the instruction that preceded it.
const INTERRUPT_DISPATCH_CYCLES: u64 = 20;

/// A requested change of IME that has not taken effect yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingIme {
    enable: bool,
    /// Steps left to finish before the change is applied.
    delay: u8,
}

/// Register snapshot for debuggers and frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

pub struct Cpu {
    pub a: u8,
    f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub pc: u16,
    pub sp: u16,
    pub cycles: u64,
    pub ime: bool,
    pub halted: bool,
    pending_ime: Option<PendingIme>,
}

impl Cpu {
    /// Create a CPU in the documented post-boot state.
    pub fn new() -> Self {
        Self {
            a: BOOT_A,
            f: BOOT_F,
            b: BOOT_B,
            c: BOOT_C,
            d: BOOT_D,
            e: BOOT_E,
            h: BOOT_H,
            l: BOOT_L,
            pc: BOOT_PC,
            sp: BOOT_SP,
            cycles: 0,
            ime: false,
            halted: false,
            pending_ime: None,
        }
    }

    /// Flag register. The low nibble always reads as zero.
    pub fn f(&self) -> u8 {
        self.f
    }

    pub fn set_f(&mut self, val: u8) {
        self.f = val & 0xF0;
    }

    pub fn get_af(&self) -> u16 {
        ((self.a as u16) << 8) | self.f as u16
    }

    fn set_af(&mut self, val: u16) {
        self.a = (val >> 8) as u8;
        self.set_f(val as u8);
    }

    pub fn get_bc(&self) -> u16 {
        ((self.b as u16) << 8) | self.c as u16
    }

    pub fn set_bc(&mut self, val: u16) {
        self.b = (val >> 8) as u8;
        self.c = val as u8;
    }

    pub fn get_de(&self) -> u16 {
        ((self.d as u16) << 8) | self.e as u16
    }

    pub fn set_de(&mut self, val: u16) {
        self.d = (val >> 8) as u8;
        self.e = val as u8;
    }

    pub fn get_hl(&self) -> u16 {
        ((self.h as u16) << 8) | self.l as u16
    }

    pub fn set_hl(&mut self, val: u16) {
        self.h = (val >> 8) as u8;
        self.l = val as u8;
    }

    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            f: self.f,
            b: self.b,
            c: self.c,
            d: self.d,
            e: self.e,
            h: self.h,
            l: self.l,
            sp: self.sp,
            pc: self.pc,
        }
    }

    /// Whether an EI/DI/RETI request is still waiting to apply.
    pub fn ime_change_pending(&self) -> bool {
        self.pending_ime.is_some()
    }

    /// Formatted CPU state string for debugging.
    pub fn debug_state(&self) -> String {
        format!(
            "AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X} PC:{:04X} SP:{:04X} CY:{}",
            self.get_af(),
            self.get_bc(),
            self.get_de(),
            self.get_hl(),
            self.pc,
            self.sp,
            self.cycles
        )
    }

    fn flag(&self, mask: u8) -> bool {
        self.f & mask != 0
    }

    fn fetch8(&mut self, mmu: &Mmu) -> Result<u8, EmuError> {
        let val = mmu.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(val)
    }

    fn fetch16(&mut self, mmu: &Mmu) -> Result<u16, EmuError> {
        let lo = self.fetch8(mmu)? as u16;
        let hi = self.fetch8(mmu)? as u16;
        Ok((hi << 8) | lo)
    }

    fn push_stack(&mut self, mmu: &mut Mmu, val: u16) {
        self.sp = self.sp.wrapping_sub(1);
        mmu.write_byte(self.sp, (val >> 8) as u8);
        self.sp = self.sp.wrapping_sub(1);
        mmu.write_byte(self.sp, val as u8);
    }

    fn pop_stack(&mut self, mmu: &Mmu) -> Result<u16, EmuError> {
        let lo = mmu.read_byte(self.sp)? as u16;
        self.sp = self.sp.wrapping_add(1);
        let hi = mmu.read_byte(self.sp)? as u16;
        self.sp = self.sp.wrapping_add(1);
        Ok((hi << 8) | lo)
    }

    fn read_reg(&self, mmu: &Mmu, index: u8) -> Result<u8, EmuError> {
        Ok(match index {
            0 => self.b,
            1 => self.c,
            2 => self.d,
            3 => self.e,
            4 => self.h,
            5 => self.l,
            REG_HL_INDIRECT => mmu.read_byte(self.get_hl())?,
            _ => self.a,
        })
    }

    fn write_reg(&mut self, mmu: &mut Mmu, index: u8, val: u8) {
        match index {
            0 => self.b = val,
            1 => self.c = val,
            2 => self.d = val,
            3 => self.e = val,
            4 => self.h = val,
            5 => self.l = val,
            REG_HL_INDIRECT => mmu.write_byte(self.get_hl(), val),
            _ => self.a = val,
        }
    }

    /// BC, DE, HL, SP
    fn read_rp(&self, p: u8) -> Result<u16, EmuError> {
        match p {
            0 => Ok(self.get_bc()),
            1 => Ok(self.get_de()),
            2 => Ok(self.get_hl()),
            3 => Ok(self.sp),
            _ => Err(EmuError::InvalidRegisterPair(p)),
        }
    }

    fn write_rp(&mut self, p: u8, val: u16) -> Result<(), EmuError> {
        match p {
            0 => self.set_bc(val),
            1 => self.set_de(val),
            2 => self.set_hl(val),
            3 => self.sp = val,
            _ => return Err(EmuError::InvalidRegisterPair(p)),
        }
        Ok(())
    }

    /// BC, DE, HL, AF
    fn read_rp2(&self, p: u8) -> Result<u16, EmuError> {
        match p {
            3 => Ok(self.get_af()),
            _ => self.read_rp(p),
        }
    }

    fn write_rp2(&mut self, p: u8, val: u16) -> Result<(), EmuError> {
        match p {
            3 => {
                self.set_af(val);
                Ok(())
            }
            _ => self.write_rp(p, val),
        }
    }

    fn condition(&self, cond: Condition) -> bool {
        match cond {
            Condition::NotZero => !self.flag(FLAG_Z),
            Condition::Zero => self.flag(FLAG_Z),
            Condition::NotCarry => !self.flag(FLAG_C),
            Condition::Carry => self.flag(FLAG_C),
        }
    }

    fn request_ime(&mut self, enable: bool) {
        self.pending_ime = Some(PendingIme { enable, delay: 1 });
    }

    fn latch_ime(&mut self) {
        if let Some(pending) = self.pending_ime.as_mut() {
            if pending.delay > 0 {
                pending.delay -= 1;
            } else {
                self.ime = pending.enable;
                self.pending_ime = None;
            }
        }
    }

    /// Run one instruction (or one idle slot while halted), then advance the
    /// I/O counters, service interrupts and flush a pending OAM DMA.
    /// Returns the cycles consumed. After an error the CPU state is
    /// undefined and stepping must stop.
    pub fn step(&mut self, mmu: &mut Mmu) -> Result<u32, EmuError> {
        let start = self.cycles;

        let cycles = if self.halted {
            HALT_STEP_CYCLES
        } else {
            self.execute(mmu)?
        };
        self.cycles += cycles as u64;

        self.latch_ime();
        mmu.io.step(self.cycles);
        self.service_interrupts(mmu);
        mmu.dma_transfer()?;

        Ok((self.cycles - start) as u32)
    }

    fn service_interrupts(&mut self, mmu: &mut Mmu) {
        let pending = mmu.io.if_reg & mmu.ie_reg & 0x1F;
        if pending == 0 {
            return;
        }

        // HALT ends on any enabled request even with IME clear.
        self.halted = false;

        if let Some(kind) = InterruptKind::ALL
            .into_iter()
            .find(|kind| pending & kind.bit() != 0)
        {
            self.interrupt(mmu, kind);
        }
    }

    /// Dispatch `kind` if IME is set and the interrupt is both requested and
    /// enabled. Returns whether the CPU jumped to the vector.
    pub fn interrupt(&mut self, mmu: &mut Mmu, kind: InterruptKind) -> bool {
        if !self.ime {
            return false;
        }
        if mmu.io.if_reg & mmu.ie_reg & kind.bit() == 0 {
            return false;
        }

        self.ime = false;
        self.pending_ime = None;
        self.halted = false;
        mmu.io.if_reg &= !kind.bit();

        self.push_stack(mmu, self.pc);
        self.pc = kind.vector();
        self.cycles += INTERRUPT_DISPATCH_CYCLES;
        true
    }

    fn execute(&mut self, mmu: &mut Mmu) -> Result<u32, EmuError> {
        let pc = self.pc;
        let opcode = self.fetch8(mmu)?;
        cpu_trace!("{:04X}: {:02X}  {}", pc, opcode, self.debug_state());

        if is_illegal(opcode) {
            return Err(EmuError::UnimplementedOpcode { opcode, pc });
        }

        if let Some(cycles) = self.execute_fixed(opcode, mmu)? {
            return Ok(cycles);
        }

        let op = Opcode::decode(opcode);
        self.execute_group(op, mmu)?
            .ok_or(EmuError::UnimplementedOpcode { opcode, pc })
    }

    /// Opcodes outside the regular grid: control flow, accumulator rotates,
    /// stack and high-page loads. Returns `None` for anything else.
    fn execute_fixed(&mut self, opcode: u8, mmu: &mut Mmu) -> Result<Option<u32>, EmuError> {
        let cycles = match opcode {
            0x00 => 4,
            0x07 => {
                let carry = self.a & 0x80 != 0;
                self.a = self.a.rotate_left(1);
                self.f = if carry { FLAG_C } else { 0 };
                4
            }
            0x08 => {
                let addr = self.fetch16(mmu)?;
                mmu.write_byte(addr, self.sp as u8);
                mmu.write_byte(addr.wrapping_add(1), (self.sp >> 8) as u8);
                20
            }
            0x0F => {
                let carry = self.a & 0x01 != 0;
                self.a = self.a.rotate_right(1);
                self.f = if carry { FLAG_C } else { 0 };
                4
            }
            0x10 => {
                // STOP is two bytes long; treated as HALT.
                self.fetch8(mmu)?;
                debug!("STOP at {:04X}", self.pc.wrapping_sub(2));
                self.halted = true;
                4
            }
            0x17 => {
                let carry = self.a & 0x80 != 0;
                let carry_in = self.flag(FLAG_C) as u8;
                self.a = (self.a << 1) | carry_in;
                self.f = if carry { FLAG_C } else { 0 };
                4
            }
            0x18 => {
                let offset = self.fetch8(mmu)? as i8;
                self.pc = self.pc.wrapping_add(offset as u16);
                12
            }
            0x1F => {
                let carry = self.a & 0x01 != 0;
                let carry_in = self.flag(FLAG_C) as u8;
                self.a = (self.a >> 1) | (carry_in << 7);
                self.f = if carry { FLAG_C } else { 0 };
                4
            }
            0x20 | 0x28 | 0x30 | 0x38 => {
                let offset = self.fetch8(mmu)? as i8;
                if self.condition(Condition::from_y(opcode >> 3)) {
                    self.pc = self.pc.wrapping_add(offset as u16);
                    12
                } else {
                    8
                }
            }
            0x27 => {
                self.daa();
                4
            }
            0x2F => {
                self.a = !self.a;
                self.f = (self.f & (FLAG_Z | FLAG_C)) | FLAG_N | FLAG_H;
                4
            }
            0x37 => {
                self.f = (self.f & FLAG_Z) | FLAG_C;
                4
            }
            0x3F => {
                self.f = (self.f & FLAG_Z) | if self.flag(FLAG_C) { 0 } else { FLAG_C };
                4
            }
            0x76 => {
                self.halted = true;
                4
            }
            0xC0 | 0xC8 | 0xD0 | 0xD8 => {
                if self.condition(Condition::from_y(opcode >> 3)) {
                    self.pc = self.pop_stack(mmu)?;
                    20
                } else {
                    8
                }
            }
            0xC2 | 0xCA | 0xD2 | 0xDA => {
                let addr = self.fetch16(mmu)?;
                if self.condition(Condition::from_y(opcode >> 3)) {
                    self.pc = addr;
                    16
                } else {
                    12
                }
            }
            0xC3 => {
                self.pc = self.fetch16(mmu)?;
                16
            }
            0xC4 | 0xCC | 0xD4 | 0xDC => {
                let addr = self.fetch16(mmu)?;
                if self.condition(Condition::from_y(opcode >> 3)) {
                    self.push_stack(mmu, self.pc);
                    self.pc = addr;
                    24
                } else {
                    12
                }
            }
            0xC9 => {
                self.pc = self.pop_stack(mmu)?;
                16
            }
            0xCB => self.execute_cb(mmu)?,
            0xCD => {
                let addr = self.fetch16(mmu)?;
                self.push_stack(mmu, self.pc);
                self.pc = addr;
                24
            }
            0xD9 => {
                self.pc = self.pop_stack(mmu)?;
                self.request_ime(true);
                16
            }
            0xE0 => {
                let offset = self.fetch8(mmu)? as u16;
                mmu.write_byte(0xFF00 | offset, self.a);
                12
            }
            0xE2 => {
                mmu.write_byte(0xFF00 | self.c as u16, self.a);
                8
            }
            0xE8 => {
                let offset = self.fetch8(mmu)?;
                self.sp = self.sp_plus_offset(offset);
                16
            }
            0xE9 => {
                self.pc = self.get_hl();
                4
            }
            0xEA => {
                let addr = self.fetch16(mmu)?;
                mmu.write_byte(addr, self.a);
                16
            }
            0xF0 => {
                let offset = self.fetch8(mmu)? as u16;
                self.a = mmu.read_byte(0xFF00 | offset)?;
                12
            }
            0xF2 => {
                self.a = mmu.read_byte(0xFF00 | self.c as u16)?;
                8
            }
            0xF3 => {
                self.request_ime(false);
                4
            }
            0xF8 => {
                let offset = self.fetch8(mmu)?;
                let val = self.sp_plus_offset(offset);
                self.set_hl(val);
                12
            }
            0xF9 => {
                self.sp = self.get_hl();
                8
            }
            0xFA => {
                let addr = self.fetch16(mmu)?;
                self.a = mmu.read_byte(addr)?;
                16
            }
            0xFB => {
                self.request_ime(true);
                4
            }
            _ => return Ok(None),
        };
        Ok(Some(cycles))
    }

    fn execute_group(&mut self, op: Opcode, mmu: &mut Mmu) -> Result<Option<u32>, EmuError> {
        let cycles = match op.group() {
            Group::LoadPairImm(p) => {
                let val = self.fetch16(mmu)?;
                self.write_rp(p, val)?;
                12
            }
            Group::AddHl(p) => {
                let hl = self.get_hl();
                let val = self.read_rp(p)?;
                let (res, carry) = hl.overflowing_add(val);
                self.f = (self.f & FLAG_Z)
                    | if (hl & 0x0FFF) + (val & 0x0FFF) > 0x0FFF {
                        FLAG_H
                    } else {
                        0
                    }
                    | if carry { FLAG_C } else { 0 };
                self.set_hl(res);
                8
            }
            Group::LoadIndirect { pair, to_a } => {
                let addr = match pair {
                    0 => self.get_bc(),
                    1 => self.get_de(),
                    2 => {
                        let hl = self.get_hl();
                        self.set_hl(hl.wrapping_add(1));
                        hl
                    }
                    3 => {
                        let hl = self.get_hl();
                        self.set_hl(hl.wrapping_sub(1));
                        hl
                    }
                    _ => return Err(EmuError::InvalidRegisterPair(pair)),
                };
                if to_a {
                    self.a = mmu.read_byte(addr)?;
                } else {
                    mmu.write_byte(addr, self.a);
                }
                8
            }
            Group::Inc16(p) => {
                let val = self.read_rp(p)?.wrapping_add(1);
                self.write_rp(p, val)?;
                8
            }
            Group::Dec16(p) => {
                let val = self.read_rp(p)?.wrapping_sub(1);
                self.write_rp(p, val)?;
                8
            }
            Group::Inc8(r) => {
                let val = self.read_reg(mmu, r)?;
                let res = val.wrapping_add(1);
                self.f = (self.f & FLAG_C)
                    | if res == 0 { FLAG_Z } else { 0 }
                    | if val & 0x0F == 0x0F { FLAG_H } else { 0 };
                self.write_reg(mmu, r, res);
                if r == REG_HL_INDIRECT { 12 } else { 4 }
            }
            Group::Dec8(r) => {
                let val = self.read_reg(mmu, r)?;
                let res = val.wrapping_sub(1);
                self.f = (self.f & FLAG_C)
                    | FLAG_N
                    | if res == 0 { FLAG_Z } else { 0 }
                    | if val & 0x0F == 0 { FLAG_H } else { 0 };
                self.write_reg(mmu, r, res);
                if r == REG_HL_INDIRECT { 12 } else { 4 }
            }
            Group::LoadImm(r) => {
                let val = self.fetch8(mmu)?;
                self.write_reg(mmu, r, val);
                if r == REG_HL_INDIRECT { 12 } else { 8 }
            }
            Group::Load { dst, src } => {
                let val = self.read_reg(mmu, src)?;
                self.write_reg(mmu, dst, val);
                if dst == REG_HL_INDIRECT || src == REG_HL_INDIRECT {
                    8
                } else {
                    4
                }
            }
            Group::AluReg(alu, r) => {
                let val = self.read_reg(mmu, r)?;
                self.alu(alu, val);
                if r == REG_HL_INDIRECT { 8 } else { 4 }
            }
            Group::AluImm(alu) => {
                let val = self.fetch8(mmu)?;
                self.alu(alu, val);
                8
            }
            Group::Pop(p) => {
                let val = self.pop_stack(mmu)?;
                self.write_rp2(p, val)?;
                12
            }
            Group::Push(p) => {
                let val = self.read_rp2(p)?;
                self.push_stack(mmu, val);
                16
            }
            Group::Rst(vector) => {
                self.push_stack(mmu, self.pc);
                self.pc = vector;
                16
            }
            Group::Irregular => return Ok(None),
        };
        Ok(Some(cycles))
    }

    fn execute_cb(&mut self, mmu: &mut Mmu) -> Result<u32, EmuError> {
        let op = CbOp::decode(self.fetch8(mmu)?);
        let r = op.target();
        let val = self.read_reg(mmu, r)?;

        match op {
            CbOp::Rotate(rot, _) => {
                let carry_in = self.flag(FLAG_C) as u8;
                let (res, carry) = match rot {
                    Rotation::Rlc => (val.rotate_left(1), val & 0x80 != 0),
                    Rotation::Rrc => (val.rotate_right(1), val & 0x01 != 0),
                    Rotation::Rl => ((val << 1) | carry_in, val & 0x80 != 0),
                    Rotation::Rr => ((val >> 1) | (carry_in << 7), val & 0x01 != 0),
                    Rotation::Sla => (val << 1, val & 0x80 != 0),
                    Rotation::Sra => ((val >> 1) | (val & 0x80), val & 0x01 != 0),
                    Rotation::Swap => (val.rotate_left(4), false),
                    Rotation::Srl => (val >> 1, val & 0x01 != 0),
                };
                self.write_reg(mmu, r, res);
                self.f = if res == 0 { FLAG_Z } else { 0 } | if carry { FLAG_C } else { 0 };
            }
            CbOp::Bit(bit, _) => {
                self.f = (self.f & FLAG_C)
                    | FLAG_H
                    | if val & (1 << bit) == 0 { FLAG_Z } else { 0 };
                return Ok(if r == REG_HL_INDIRECT { 12 } else { 8 });
            }
            CbOp::Res(bit, _) => self.write_reg(mmu, r, val & !(1 << bit)),
            CbOp::Set(bit, _) => self.write_reg(mmu, r, val | (1 << bit)),
        }

        Ok(if r == REG_HL_INDIRECT { 16 } else { 8 })
    }

    fn alu(&mut self, op: Alu, val: u8) {
        let a = self.a;
        let carry_in = self.flag(FLAG_C) as u8;
        let (res, flags) = match op {
            Alu::Add | Alu::Adc => {
                let c = if op == Alu::Adc { carry_in } else { 0 };
                let res = a.wrapping_add(val).wrapping_add(c);
                let h = (a & 0x0F) + (val & 0x0F) + c > 0x0F;
                let carry = a as u16 + val as u16 + c as u16 > 0xFF;
                (res, if h { FLAG_H } else { 0 } | if carry { FLAG_C } else { 0 })
            }
            Alu::Sub | Alu::Sbc | Alu::Cp => {
                let c = if op == Alu::Sbc { carry_in } else { 0 };
                let res = a.wrapping_sub(val).wrapping_sub(c);
                let h = (a & 0x0F) < (val & 0x0F) + c;
                let carry = (a as u16) < val as u16 + c as u16;
                (
                    res,
                    FLAG_N | if h { FLAG_H } else { 0 } | if carry { FLAG_C } else { 0 },
                )
            }
            Alu::And => (a & val, FLAG_H),
            Alu::Xor => (a ^ val, 0),
            Alu::Or => (a | val, 0),
        };
        self.f = flags | if res == 0 { FLAG_Z } else { 0 };
        if op != Alu::Cp {
            self.a = res;
        }
    }

    fn daa(&mut self) {
        let mut carry = self.flag(FLAG_C);
        if !self.flag(FLAG_N) {
            if carry || self.a > 0x99 {
                self.a = self.a.wrapping_add(0x60);
                carry = true;
            }
            if self.flag(FLAG_H) || self.a & 0x0F > 0x09 {
                self.a = self.a.wrapping_add(0x06);
            }
        } else {
            if carry {
                self.a = self.a.wrapping_sub(0x60);
            }
            if self.flag(FLAG_H) {
                self.a = self.a.wrapping_sub(0x06);
            }
        }
        self.f = (self.f & FLAG_N)
            | if self.a == 0 { FLAG_Z } else { 0 }
            | if carry { FLAG_C } else { 0 };
    }

    /// SP plus a signed byte, with the flags ADD SP,r8 and LD HL,SP+r8 share:
    /// Z and N clear, H and C from the unsigned low-byte addition.
    fn sp_plus_offset(&mut self, offset: u8) -> u16 {
        let sp = self.sp;
        let offset = offset as i8 as i16 as u16;
        self.f = if (sp & 0x0F) + (offset & 0x0F) > 0x0F {
            FLAG_H
        } else {
            0
        } | if (sp & 0xFF) + (offset & 0xFF) > 0xFF {
            FLAG_C
        } else {
            0
        };
        sp.wrapping_add(offset)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
