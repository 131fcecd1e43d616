//! Structured operand view over a decoded [`Instruction`].

use crate::{Instruction, MemorySize, OpKind, Register};

/// An instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Register operand.
    Register(Register),
    /// Immediate value.
    Immediate(Immediate),
    /// Memory reference (explicit, moffs, xlat or string operand).
    Memory(MemoryRef),
    /// Near branch with its resolved target.
    NearBranch {
        /// Target address, already truncated to the branch width.
        target: u64,
    },
    /// Far branch `selector:offset`.
    FarBranch { selector: u16, offset: u32 },
}

impl Operand {
    pub(crate) fn from_instruction(insn: &Instruction, index: usize) -> Self {
        let kind = insn.op_kind(index);
        match kind {
            OpKind::Register => Self::Register(insn.op_register(index)),
            OpKind::NearBranch16 | OpKind::NearBranch32 | OpKind::NearBranch64 => {
                Self::NearBranch {
                    target: insn.near_branch64(),
                }
            }
            OpKind::FarBranch16 | OpKind::FarBranch32 => Self::FarBranch {
                selector: insn.far_branch_selector(),
                offset: insn.far_branch32(),
            },
            k if k.is_immediate() => Self::Immediate(Immediate {
                value: insn.immediate(index).unwrap_or(0),
                kind: k,
            }),
            k => Self::Memory(MemoryRef::from_instruction(insn, k)),
        }
    }

    /// Returns true if this is a register operand.
    pub fn is_register(&self) -> bool {
        matches!(self, Self::Register(_))
    }

    /// Returns true if this is an immediate operand.
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate(_))
    }

    /// Returns true if this is a memory operand.
    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Memory(_))
    }
}

/// Immediate value operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Immediate {
    /// The value, already zero- or sign-extended to 64 bits per `kind`.
    pub value: u64,
    /// Encoded form.
    pub kind: OpKind,
}

impl Immediate {
    /// Returns the value as an unsigned u64.
    pub fn as_u64(&self) -> u64 {
        self.value
    }

    /// Returns the value as a signed i64.
    pub fn as_i64(&self) -> i64 {
        self.value as i64
    }

    /// Returns true for the sign-extending immediate kinds.
    pub fn is_signed(&self) -> bool {
        matches!(
            self.kind,
            OpKind::Immediate8to16
                | OpKind::Immediate8to32
                | OpKind::Immediate8to64
                | OpKind::Immediate32to64
        )
    }
}

/// Memory reference operand.
///
/// Represents `seg:[base + index*scale + disp]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRef {
    /// Effective segment.
    pub segment: Register,
    /// Base register (`Register::None` if absent).
    pub base: Register,
    /// Index register (`Register::None` if absent).
    pub index: Register,
    /// Scale factor for index (1, 2, 4, or 8).
    pub scale: u8,
    /// Displacement, sign-extended.
    pub displacement: i64,
    /// Encoded displacement bytes.
    pub displ_size: u8,
    /// Access width/shape.
    pub size: MemorySize,
}

impl MemoryRef {
    fn from_instruction(insn: &Instruction, kind: OpKind) -> Self {
        let (base, segment) = match kind {
            OpKind::MemorySegSI => (Register::SI, insn.memory_segment()),
            OpKind::MemorySegESI => (Register::ESI, insn.memory_segment()),
            OpKind::MemorySegRSI => (Register::RSI, insn.memory_segment()),
            OpKind::MemorySegDI => (Register::DI, insn.memory_segment()),
            OpKind::MemorySegEDI => (Register::EDI, insn.memory_segment()),
            OpKind::MemorySegRDI => (Register::RDI, insn.memory_segment()),
            OpKind::MemoryESDI => (Register::DI, Register::ES),
            OpKind::MemoryESEDI => (Register::EDI, Register::ES),
            OpKind::MemoryESRDI => (Register::RDI, Register::ES),
            _ => {
                return Self {
                    segment: insn.memory_segment(),
                    base: insn.memory_base(),
                    index: insn.memory_index(),
                    scale: insn.memory_index_scale() as u8,
                    displacement: insn.memory_displacement64() as i64,
                    displ_size: insn.memory_displ_size() as u8,
                    size: insn.memory_size(),
                }
            }
        };
        Self {
            segment,
            base,
            index: Register::None,
            scale: 1,
            displacement: 0,
            displ_size: 0,
            size: insn.memory_size(),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register(reg) => write!(f, "{}", reg.name()),
            Self::Immediate(imm) => {
                if imm.is_signed() && imm.as_i64() < 0 {
                    write!(f, "-{:#x}", imm.as_i64().unsigned_abs())
                } else {
                    write!(f, "{:#x}", imm.value)
                }
            }
            Self::Memory(mem) => {
                if mem.segment != Register::None {
                    write!(f, "{}:", mem.segment)?;
                }
                write!(f, "[")?;
                let mut has_content = false;

                if mem.base != Register::None {
                    write!(f, "{}", mem.base)?;
                    has_content = true;
                }

                if mem.index != Register::None {
                    if has_content {
                        write!(f, "+")?;
                    }
                    write!(f, "{}", mem.index)?;
                    if mem.scale > 1 {
                        write!(f, "*{}", mem.scale)?;
                    }
                    has_content = true;
                }

                if mem.displacement != 0 || !has_content {
                    if has_content {
                        if mem.displacement > 0 {
                            write!(f, "+{:#x}", mem.displacement)?;
                        } else {
                            write!(f, "-{:#x}", mem.displacement.unsigned_abs())?;
                        }
                    } else {
                        write!(f, "{:#x}", mem.displacement as u64)?;
                    }
                }

                write!(f, "]")
            }
            Self::NearBranch { target } => write!(f, "{:#x}", target),
            Self::FarBranch { selector, offset } => write!(f, "{:#x}:{:#x}", selector, offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_display() {
        let mem = Operand::Memory(MemoryRef {
            segment: Register::DS,
            base: Register::RBX,
            index: Register::RSI,
            scale: 4,
            displacement: -0x10,
            displ_size: 1,
            size: MemorySize::UInt32,
        });
        assert_eq!(mem.to_string(), "ds:[rbx+rsi*4-0x10]");
    }

    #[test]
    fn test_absolute_display() {
        let mem = Operand::Memory(MemoryRef {
            segment: Register::None,
            base: Register::None,
            index: Register::None,
            scale: 1,
            displacement: 0x1234,
            displ_size: 2,
            size: MemorySize::UInt16,
        });
        assert_eq!(mem.to_string(), "[0x1234]");
    }

    #[test]
    fn test_signed_immediate_display() {
        let imm = Operand::Immediate(Immediate {
            value: -8i64 as u64,
            kind: OpKind::Immediate8to64,
        });
        assert_eq!(imm.to_string(), "-0x8");
        let imm = Operand::Immediate(Immediate {
            value: 0xF8,
            kind: OpKind::Immediate8,
        });
        assert_eq!(imm.to_string(), "0xf8");
    }
}
