//! Opcode field decoding.
//!
//! Opcodes are split into `x` (bits 7-6), `y` (bits 5-3) and `z` (bits 2-0),
//! with `p = y >> 1` and `q = y & 1`. Most of the instruction set is regular
//! over these fields, so the CPU dispatches on an instruction [`Group`]
//! instead of 256 individual opcodes.

/// Index passed to `read_reg`/`write_reg` that addresses `(HL)`.
pub const REG_HL_INDIRECT: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub raw: u8,
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub p: u8,
    pub q: u8,
}

impl Opcode {
    pub fn decode(op: u8) -> Self {
        let y = (op >> 3) & 0x07;
        Self {
            raw: op,
            x: op >> 6,
            y,
            z: op & 0x07,
            p: y >> 1,
            q: y & 0x01,
        }
    }

    /// Instruction class for the regular part of the opcode grid.
    pub fn group(&self) -> Group {
        match (self.x, self.z, self.q) {
            (0, 1, 0) => Group::LoadPairImm(self.p),
            (0, 1, 1) => Group::AddHl(self.p),
            (0, 2, q) => Group::LoadIndirect {
                pair: self.p,
                to_a: q == 1,
            },
            (0, 3, 0) => Group::Inc16(self.p),
            (0, 3, 1) => Group::Dec16(self.p),
            (0, 4, _) => Group::Inc8(self.y),
            (0, 5, _) => Group::Dec8(self.y),
            (0, 6, _) => Group::LoadImm(self.y),
            (1, _, _) => Group::Load {
                dst: self.y,
                src: self.z,
            },
            (2, _, _) => Group::AluReg(Alu::from_y(self.y), self.z),
            (3, 1, 0) => Group::Pop(self.p),
            (3, 5, 0) => Group::Push(self.p),
            (3, 6, _) => Group::AluImm(Alu::from_y(self.y)),
            (3, 7, _) => Group::Rst((self.y as u16) * 8),
            _ => Group::Irregular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// LD rr,d16
    LoadPairImm(u8),
    /// ADD HL,rr
    AddHl(u8),
    /// LD (BC/DE/HL+/HL-),A and LD A,(BC/DE/HL+/HL-)
    LoadIndirect { pair: u8, to_a: bool },
    Inc16(u8),
    Dec16(u8),
    Inc8(u8),
    Dec8(u8),
    /// LD r,d8
    LoadImm(u8),
    /// LD r,r'
    Load { dst: u8, src: u8 },
    AluReg(Alu, u8),
    AluImm(Alu),
    /// POP uses the AF table.
    Pop(u8),
    Push(u8),
    Rst(u16),
    Irregular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alu {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl Alu {
    pub fn from_y(y: u8) -> Self {
        match y & 0x07 {
            0 => Alu::Add,
            1 => Alu::Adc,
            2 => Alu::Sub,
            3 => Alu::Sbc,
            4 => Alu::And,
            5 => Alu::Xor,
            6 => Alu::Or,
            _ => Alu::Cp,
        }
    }
}

/// Branch condition encoded in `y & 3` of JR/JP/CALL/RET cc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

impl Condition {
    pub fn from_y(y: u8) -> Self {
        match y & 0x03 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NotCarry,
            _ => Condition::Carry,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

/// CB-prefixed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CbOp {
    Rotate(Rotation, u8),
    Bit(u8, u8),
    Res(u8, u8),
    Set(u8, u8),
}

impl CbOp {
    pub fn decode(op: u8) -> Self {
        let Opcode { x, y, z, .. } = Opcode::decode(op);
        match x {
            0 => {
                let rot = match y {
                    0 => Rotation::Rlc,
                    1 => Rotation::Rrc,
                    2 => Rotation::Rl,
                    3 => Rotation::Rr,
                    4 => Rotation::Sla,
                    5 => Rotation::Sra,
                    6 => Rotation::Swap,
                    _ => Rotation::Srl,
                };
                CbOp::Rotate(rot, z)
            }
            1 => CbOp::Bit(y, z),
            2 => CbOp::Res(y, z),
            _ => CbOp::Set(y, z),
        }
    }

    /// Register operand index.
    pub fn target(&self) -> u8 {
        match *self {
            CbOp::Rotate(_, r) | CbOp::Bit(_, r) | CbOp::Res(_, r) | CbOp::Set(_, r) => r,
        }
    }
}

/// Opcodes with no instruction on the LR35902.
pub fn is_illegal(op: u8) -> bool {
    matches!(
        op,
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD
    )
}
