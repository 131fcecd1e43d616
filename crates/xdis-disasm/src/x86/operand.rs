//! Operand decoding.
//!
//! Turns each [`Op`] slot of the selected template into an operand of the
//! output [`Instruction`], reading immediates and branch displacements
//! from the cursor in slot order.

use super::cursor::ByteCursor;
use super::decoder::DecodeState;
use super::map::Encoding;
use super::modrm::VsibIndex;
use super::tables::{Imm, Mem, Op, RegKind, Rel};
use crate::error::DecodeError;
use xdis_core::{Instruction, MemorySize, OpKind, Register};

/// Position and size of the displacement and immediates inside an
/// instruction's bytes.
///
/// Branch displacements and far-pointer fields count as immediates; the
/// selector of a far pointer is the second immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstantOffsets {
    pub displacement_offset: usize,
    /// 0, 1, 2, 4 or 8
    pub displacement_size: usize,
    pub immediate_offset: usize,
    /// 0, 1, 2, 4 or 8
    pub immediate_size: usize,
    pub immediate_offset2: usize,
    /// 0 or 1 (`enter`, `extrq`, `insertq`), or 2 (far pointer selector)
    pub immediate_size2: usize,
}

impl ConstantOffsets {
    pub fn has_displacement(&self) -> bool {
        self.displacement_size != 0
    }

    pub fn has_immediate(&self) -> bool {
        self.immediate_size != 0
    }

    pub fn has_immediate2(&self) -> bool {
        self.immediate_size2 != 0
    }

    fn record_immediate(&mut self, offset: usize, size: usize) {
        if self.immediate_size == 0 {
            self.immediate_offset = offset;
            self.immediate_size = size;
        } else {
            self.immediate_offset2 = offset;
            self.immediate_size2 = size;
        }
    }
}

/// Decodes operand slot `index` into `insn`.
pub(super) fn decode_operand(
    cursor: &mut ByteCursor<'_>,
    state: &mut DecodeState,
    op: Op,
    index: usize,
    insn: &mut Instruction,
) -> Result<(), DecodeError> {
    match op {
        Op::Reg(kind) => {
            let reg = register(state, kind, reg_index(state, kind));
            set_register(cursor, insn, index, reg)
        }
        Op::Rm(kind, mem) => {
            if state.memory.is_some() {
                set_memory(insn, index, state, mem_size(state, mem))
            } else {
                let reg = register(state, kind, rm_index(state, kind));
                set_register(cursor, insn, index, reg)
            }
        }
        Op::M(mem) | Op::Vsib(_, mem) => {
            if state.memory.is_none() {
                return Err(cursor.invalid("register operand where memory is required"));
            }
            set_memory(insn, index, state, mem_size(state, mem))
        }
        Op::RmReg(kind) => {
            let reg = register(state, kind, rm_index(state, kind));
            set_register(cursor, insn, index, reg)
        }
        Op::Vvvv(kind) => {
            let reg = register(state, kind, vvvv_index(state, kind));
            set_register(cursor, insn, index, reg)
        }
        Op::OpReg(kind) => {
            let reg = register(state, kind, (state.opcode & 7) | state.ext_b());
            set_register(cursor, insn, index, reg)
        }
        Op::Is4(kind) => {
            let offset = cursor.consumed();
            let imm = cursor.read_u8()?;
            state.offsets.record_immediate(offset, 1);
            let reg_index = if state.bitness.is_64() { imm >> 4 } else { (imm >> 4) & 7 };
            let reg = register(state, kind, reg_index);
            set_register(cursor, insn, index, reg)
        }
        Op::Fixed(reg) => set_register(cursor, insn, index, reg),
        Op::FixedOsz(regs) => set_register(cursor, insn, index, regs[size_index(state.operand_size)]),
        Op::Const1 => {
            insn.set_op_kind(index, OpKind::Immediate8);
            insn.set_immediate(1);
            Ok(())
        }
        Op::Imm(imm) => decode_immediate(cursor, state, imm, index, insn),
        Op::Rel(rel) => {
            let offset = cursor.consumed();
            let (displacement, size) = match rel {
                Rel::Jb => (cursor.read_u8()? as i8 as i64, 1),
                Rel::Jz if state.operand_size == 16 => (cursor.read_u16()? as i16 as i64, 2),
                Rel::Jz => (cursor.read_u32()? as i32 as i64, 4),
            };
            state.offsets.record_immediate(offset, size);
            state.branch = Some((index, displacement));
            Ok(())
        }
        Op::FarPtr => {
            let offset = cursor.consumed();
            let (target, size, kind) = if state.operand_size == 16 {
                (cursor.read_u16()? as u64, 2, OpKind::FarBranch16)
            } else {
                (cursor.read_u32()? as u64, 4, OpKind::FarBranch32)
            };
            let selector_offset = cursor.consumed();
            let selector = cursor.read_u16()?;
            state.offsets.record_immediate(offset, size);
            state.offsets.record_immediate(selector_offset, 2);
            insn.set_op_kind(index, kind);
            insn.set_immediate(target);
            insn.set_far_branch_selector(selector);
            Ok(())
        }
        Op::Moffs(mem) => {
            let size = (state.address_size / 8) as usize;
            let offset = cursor.consumed();
            let displacement = cursor.read_sized(size)?;
            state.offsets.displacement_offset = offset;
            state.offsets.displacement_size = size;
            insn.set_op_kind(index, OpKind::Memory);
            insn.set_memory_segment(state.segment_or(Register::DS));
            insn.set_memory_displacement64(displacement);
            insn.set_memory_displ_size(size as u32);
            insn.set_memory_index_scale(1);
            insn.set_memory_size(mem_size(state, mem));
            Ok(())
        }
        Op::StrSrc(mem) => {
            let kind = match state.address_size {
                16 => OpKind::MemorySegSI,
                32 => OpKind::MemorySegESI,
                _ => OpKind::MemorySegRSI,
            };
            set_string(insn, index, kind, state.segment_or(Register::DS), mem_size(state, mem))
        }
        Op::SegDi(mem) => {
            let kind = match state.address_size {
                16 => OpKind::MemorySegDI,
                32 => OpKind::MemorySegEDI,
                _ => OpKind::MemorySegRDI,
            };
            set_string(insn, index, kind, state.segment_or(Register::DS), mem_size(state, mem))
        }
        Op::StrDst(mem) => {
            // A segment override never applies to es:[rDI].
            let kind = match state.address_size {
                16 => OpKind::MemoryESDI,
                32 => OpKind::MemoryESEDI,
                _ => OpKind::MemoryESRDI,
            };
            set_string(insn, index, kind, Register::ES, mem_size(state, mem))
        }
        Op::Xlat => {
            let base = match state.address_size {
                16 => Register::BX,
                32 => Register::EBX,
                _ => Register::RBX,
            };
            insn.set_op_kind(index, OpKind::Memory);
            insn.set_memory_segment(state.segment_or(Register::DS));
            insn.set_memory_base(base);
            insn.set_memory_index(Register::AL);
            insn.set_memory_index_scale(1);
            insn.set_memory_size(MemorySize::UInt8);
            Ok(())
        }
    }
}

fn decode_immediate(
    cursor: &mut ByteCursor<'_>,
    state: &mut DecodeState,
    imm: Imm,
    index: usize,
    insn: &mut Instruction,
) -> Result<(), DecodeError> {
    let offset = cursor.consumed();
    let (value, size, kind) = match imm {
        Imm::Ib => (cursor.read_u8()? as u64, 1, OpKind::Immediate8),
        Imm::Ib2 => {
            let value = cursor.read_u8()?;
            state.offsets.record_immediate(offset, 1);
            insn.set_op_kind(index, OpKind::Immediate8_2nd);
            insn.set_immediate8_2nd(value);
            return Ok(());
        }
        Imm::Iw => (cursor.read_u16()? as u64, 2, OpKind::Immediate16),
        Imm::Id => (cursor.read_u32()? as u64, 4, OpKind::Immediate32),
        Imm::Iz => match state.operand_size {
            16 => (cursor.read_u16()? as u64, 2, OpKind::Immediate16),
            32 => (cursor.read_u32()? as u64, 4, OpKind::Immediate32),
            _ => (cursor.read_u32()? as i32 as i64 as u64, 4, OpKind::Immediate32to64),
        },
        Imm::Iv => match state.operand_size {
            16 => (cursor.read_u16()? as u64, 2, OpKind::Immediate16),
            32 => (cursor.read_u32()? as u64, 4, OpKind::Immediate32),
            _ => (cursor.read_u64()?, 8, OpKind::Immediate64),
        },
        Imm::Ibs => {
            let value = cursor.read_u8()? as i8 as i64 as u64;
            let kind = match state.operand_size {
                16 => OpKind::Immediate8to16,
                32 => OpKind::Immediate8to32,
                _ => OpKind::Immediate8to64,
            };
            (value, 1, kind)
        }
    };
    state.offsets.record_immediate(offset, size);
    insn.set_op_kind(index, kind);
    insn.set_immediate(value);
    Ok(())
}

fn set_register(
    cursor: &ByteCursor<'_>,
    insn: &mut Instruction,
    index: usize,
    reg: Register,
) -> Result<(), DecodeError> {
    if reg == Register::None {
        return Err(cursor.invalid("register number out of range"));
    }
    insn.set_op_kind(index, OpKind::Register);
    insn.set_op_register(index, reg);
    Ok(())
}

fn set_memory(
    insn: &mut Instruction,
    index: usize,
    state: &DecodeState,
    size: MemorySize,
) -> Result<(), DecodeError> {
    let Some(mem) = state.memory else {
        return Ok(());
    };
    insn.set_op_kind(index, OpKind::Memory);
    insn.set_memory_segment(mem.segment);
    insn.set_memory_base(mem.base);
    insn.set_memory_index(mem.index);
    insn.set_memory_index_scale(mem.scale);
    insn.set_memory_displacement64(mem.displacement);
    insn.set_memory_displ_size(mem.displ_size);
    let size = if state.broadcast {
        size.broadcast_of().unwrap_or(size)
    } else {
        size
    };
    insn.set_memory_size(size);
    Ok(())
}

fn set_string(
    insn: &mut Instruction,
    index: usize,
    kind: OpKind,
    segment: Register,
    size: MemorySize,
) -> Result<(), DecodeError> {
    insn.set_op_kind(index, kind);
    insn.set_memory_segment(segment);
    insn.set_memory_size(size);
    Ok(())
}

/// Memory size of a slot under the current operand size, vector length
/// and W.
pub(super) fn mem_size(state: &DecodeState, mem: Mem) -> MemorySize {
    match mem {
        Mem::Fixed(size) => size,
        Mem::Osz(sizes) => sizes[size_index(state.operand_size)],
        Mem::Len(sizes) => sizes[size_index(state.vector_len)],
        Mem::W(sizes) => sizes[state.w as usize],
    }
}

/// Vector register file of a VSIB index.
pub(super) fn vsib_index(kind: RegKind, vector_len: u32) -> VsibIndex {
    let bits = match kind {
        RegKind::Xmm => 128,
        RegKind::Ymm => 256,
        RegKind::VecHalf => (vector_len / 2).max(128),
        RegKind::VecQuarter => (vector_len / 4).max(128),
        _ => vector_len,
    };
    match bits {
        128 => VsibIndex::Xmm,
        256 => VsibIndex::Ymm,
        _ => VsibIndex::Zmm,
    }
}

fn size_index(bits: u32) -> usize {
    match bits {
        16 | 128 => 0,
        32 | 256 => 1,
        _ => 2,
    }
}

/// Register classes that take the REX/VEX/EVEX extension bits.
fn is_extended(kind: RegKind) -> bool {
    !matches!(
        kind,
        RegKind::Segment | RegKind::SegmentDst | RegKind::Test | RegKind::St | RegKind::Mmx
    )
}

fn is_vector(kind: RegKind) -> bool {
    matches!(
        kind,
        RegKind::Xmm
            | RegKind::Ymm
            | RegKind::VecLen
            | RegKind::VecHalf
            | RegKind::VecQuarter
    )
}

fn reg_index(state: &DecodeState, kind: RegKind) -> u8 {
    let reg = state.modrm.map(|m| m.reg).unwrap_or(0);
    if is_extended(kind) {
        reg | state.ext_r() | state.ext_r2()
    } else {
        reg
    }
}

fn rm_index(state: &DecodeState, kind: RegKind) -> u8 {
    let rm = state.modrm.map(|m| m.rm).unwrap_or(0);
    match kind {
        // Opmask registers in r/m ignore every extension bit.
        RegKind::Mask => rm,
        _ if !is_extended(kind) => rm,
        _ if is_vector(kind) && state.encoding == Encoding::Evex => rm | state.ext_b() | state.ext_x_evex(),
        _ => rm | state.ext_b(),
    }
}

fn vvvv_index(state: &DecodeState, kind: RegKind) -> u8 {
    let vex = state.vex.unwrap_or_default();
    if is_vector(kind) {
        vex.vvvv_full()
    } else {
        vex.vvvv
    }
}

/// Register `index` of a template register class, or `Register::None`
/// if the class has no such register.
fn register(state: &DecodeState, kind: RegKind, index: u8) -> Register {
    let is64 = state.bitness.is_64();
    match kind {
        RegKind::Gpr8 => Register::gpr8(index, state.prefixes.rex.is_some()),
        RegKind::Gpr16 => Register::gpr16(index),
        RegKind::Gpr32 => Register::gpr32(index),
        RegKind::Gpr64 => Register::gpr64(index),
        RegKind::GprOsz => gpr(state.operand_size, index),
        RegKind::GprW if state.w && is64 => Register::gpr64(index),
        RegKind::GprW => Register::gpr32(index),
        RegKind::GprMode if is64 => Register::gpr64(index),
        RegKind::GprMode => Register::gpr32(index),
        RegKind::Segment => Register::segment(index),
        RegKind::SegmentDst => match Register::segment(index) {
            Register::CS => Register::None,
            reg => reg,
        },
        RegKind::Control => match index {
            0 | 2 | 3 | 4 | 8 => Register::cr(index),
            _ => Register::None,
        },
        RegKind::Debug if index < 8 => Register::dr(index),
        RegKind::Debug => Register::None,
        RegKind::Test => Register::tr(index),
        RegKind::St => Register::st(index),
        RegKind::Mmx => Register::mm(index),
        RegKind::Xmm => Register::xmm(index),
        RegKind::Ymm => Register::ymm(index),
        RegKind::VecLen => vector(state.vector_len, index),
        RegKind::VecHalf => vector((state.vector_len / 2).max(128), index),
        RegKind::VecQuarter => vector((state.vector_len / 4).max(128), index),
        RegKind::Mask => Register::k(index),
    }
}

fn gpr(bits: u32, index: u8) -> Register {
    match bits {
        16 => Register::gpr16(index),
        32 => Register::gpr32(index),
        _ => Register::gpr64(index),
    }
}

fn vector(bits: u32, index: u8) -> Register {
    match bits {
        128 => Register::xmm(index),
        256 => Register::ymm(index),
        _ => Register::zmm(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::modrm::ModRM;
    use crate::x86::prefix::{Rex, VexPrefix};
    use xdis_core::Bitness;

    fn state64() -> DecodeState {
        DecodeState {
            bitness: Bitness::Bits64,
            operand_size: 32,
            address_size: 64,
            vector_len: 128,
            ..DecodeState::default()
        }
    }

    #[test]
    fn test_gpr8_follows_rex_presence() {
        let mut state = state64();
        state.modrm = Some(ModRM::parse(0xF7));
        assert_eq!(register(&state, RegKind::Gpr8, rm_index(&state, RegKind::Gpr8)), Register::BH);
        state.prefixes.rex = Some(Rex::from_byte(0x40));
        assert_eq!(register(&state, RegKind::Gpr8, rm_index(&state, RegKind::Gpr8)), Register::DIL);
        state.prefixes.rex = Some(Rex::from_byte(0x41));
        assert_eq!(register(&state, RegKind::Gpr8, rm_index(&state, RegKind::Gpr8)), Register::R15L);
    }

    #[test]
    fn test_segment_and_control_ranges() {
        let state = state64();
        assert_eq!(register(&state, RegKind::Segment, 5), Register::GS);
        assert_eq!(register(&state, RegKind::Segment, 6), Register::None);
        assert_eq!(register(&state, RegKind::SegmentDst, 1), Register::None);
        assert_eq!(register(&state, RegKind::Control, 8), Register::CR8);
        assert_eq!(register(&state, RegKind::Control, 5), Register::None);
        assert_eq!(register(&state, RegKind::Debug, 9), Register::None);
    }

    #[test]
    fn test_mmx_ignores_rex_r() {
        let mut state = state64();
        state.modrm = Some(ModRM::parse(0xC8));
        state.prefixes.rex = Some(Rex::from_byte(0x44));
        assert_eq!(register(&state, RegKind::Mmx, reg_index(&state, RegKind::Mmx)), Register::MM1);
        assert_eq!(register(&state, RegKind::Xmm, reg_index(&state, RegKind::Xmm)), Register::XMM9);
    }

    #[test]
    fn test_evex_register_extensions() {
        let mut state = state64();
        state.encoding = Encoding::Evex;
        state.vector_len = 512;
        state.modrm = Some(ModRM::parse(0xC1));
        state.vex = Some(VexPrefix {
            r2: true,
            x: true,
            vvvv: 2,
            v2: true,
            ..VexPrefix::default()
        });
        assert_eq!(register(&state, RegKind::VecLen, reg_index(&state, RegKind::VecLen)), Register::ZMM16);
        assert_eq!(register(&state, RegKind::VecLen, rm_index(&state, RegKind::VecLen)), Register::ZMM17);
        assert_eq!(register(&state, RegKind::VecHalf, vvvv_index(&state, RegKind::VecHalf)), Register::YMM18);
        // A mask register cannot be numbered 16 or above.
        assert_eq!(register(&state, RegKind::Mask, reg_index(&state, RegKind::Mask)), Register::None);
    }

    #[test]
    fn test_vsib_index_width() {
        assert_eq!(vsib_index(RegKind::VecLen, 256), VsibIndex::Ymm);
        assert_eq!(vsib_index(RegKind::VecHalf, 256), VsibIndex::Xmm);
        assert_eq!(vsib_index(RegKind::VecHalf, 512), VsibIndex::Ymm);
        assert_eq!(vsib_index(RegKind::Xmm, 512), VsibIndex::Xmm);
    }

    #[test]
    fn test_second_immediate_slot() {
        let mut offsets = ConstantOffsets::default();
        offsets.record_immediate(1, 2);
        offsets.record_immediate(3, 1);
        assert_eq!((offsets.immediate_offset, offsets.immediate_size), (1, 2));
        assert_eq!((offsets.immediate_offset2, offsets.immediate_size2), (3, 1));
        assert!(offsets.has_immediate2());
        assert!(!offsets.has_displacement());
    }
}
