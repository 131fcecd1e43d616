//! ModR/M and SIB byte decoding.

use super::cursor::ByteCursor;
use crate::error::DecodeError;
use xdis_core::Register;

/// Decoded ModR/M byte. Fields are the raw 3-bit values; REX/VEX/EVEX
/// extension bits are applied by the operand decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModRM {
    /// Mod field (2 bits)
    pub mod_: u8,
    /// Reg field (3 bits)
    pub reg: u8,
    /// R/M field (3 bits)
    pub rm: u8,
}

impl ModRM {
    pub fn parse(byte: u8) -> Self {
        Self {
            mod_: (byte >> 6) & 0x3,
            reg: (byte >> 3) & 0x7,
            rm: byte & 0x7,
        }
    }

    /// Returns true if this ModR/M encodes a register operand (mod=11).
    pub fn is_register(&self) -> bool {
        self.mod_ == 0b11
    }
}

/// Decoded SIB byte.
#[derive(Debug, Clone, Copy)]
pub struct Sib {
    /// Scale (2 bits) - actual scale is 1 << scale
    pub scale: u8,
    /// Index register (3 bits)
    pub index: u8,
    /// Base register (3 bits)
    pub base: u8,
}

impl Sib {
    pub fn parse(byte: u8) -> Self {
        Self {
            scale: (byte >> 6) & 0x3,
            index: (byte >> 3) & 0x7,
            base: byte & 0x7,
        }
    }

    /// Returns the actual scale factor (1, 2, 4, or 8).
    pub fn scale_factor(&self) -> u32 {
        1 << self.scale
    }
}

/// Vector register file used as a VSIB index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VsibIndex {
    Xmm,
    Ymm,
    Zmm,
}

impl VsibIndex {
    fn register(self, index: u8) -> Register {
        match self {
            Self::Xmm => Register::xmm(index),
            Self::Ymm => Register::ymm(index),
            Self::Zmm => Register::zmm(index),
        }
    }
}

/// Inputs to effective-address decoding beyond the ModR/M byte itself.
#[derive(Debug, Clone, Copy)]
pub struct AddressContext {
    /// Effective address size in bits (16, 32 or 64).
    pub address_size: u32,
    /// Processor is in 64-bit mode (enables RIP-relative addressing).
    pub is64: bool,
    /// REX.B / VEX.B
    pub ext_base: bool,
    /// REX.X / VEX.X
    pub ext_index: bool,
    /// EVEX.V', bit 4 of a VSIB index
    pub ext_vsib: bool,
    pub vsib: Option<VsibIndex>,
    /// EVEX compressed-displacement factor; 1 for everything else.
    pub disp8_scale: u32,
    pub segment_override: Option<Register>,
}

/// Decoded memory operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryOperand {
    /// Effective segment (override or default).
    pub segment: Register,
    pub base: Register,
    pub index: Register,
    pub scale: u32,
    /// Sign-extended to the address width and stored as u64.
    pub displacement: u64,
    /// Number of displacement bytes in the encoding.
    pub displ_size: u32,
    /// Offset of the displacement from the instruction start.
    pub displ_offset: usize,
}

/// Decodes the memory form of a ModR/M byte (mod != 11), consuming the
/// SIB byte and displacement.
pub fn decode_memory(
    cursor: &mut ByteCursor<'_>,
    modrm: ModRM,
    ctx: &AddressContext,
) -> Result<MemoryOperand, DecodeError> {
    let mut mem = if ctx.address_size == 16 {
        if ctx.vsib.is_some() {
            return Err(cursor.invalid("VSIB with 16-bit addressing"));
        }
        decode_memory16(cursor, modrm)?
    } else {
        decode_memory32(cursor, modrm, ctx)?
    };

    let default_segment = match mem.base {
        Register::SP | Register::BP | Register::ESP | Register::EBP | Register::RSP | Register::RBP => {
            Register::SS
        }
        _ => Register::DS,
    };
    mem.segment = ctx.segment_override.unwrap_or(default_segment);
    Ok(mem)
}

const MEM16: [(Register, Register); 8] = [
    (Register::BX, Register::SI),
    (Register::BX, Register::DI),
    (Register::BP, Register::SI),
    (Register::BP, Register::DI),
    (Register::SI, Register::None),
    (Register::DI, Register::None),
    (Register::BP, Register::None),
    (Register::BX, Register::None),
];

fn decode_memory16(cursor: &mut ByteCursor<'_>, modrm: ModRM) -> Result<MemoryOperand, DecodeError> {
    let (mut base, index) = MEM16[modrm.rm as usize];
    let mut mem = MemoryOperand {
        index,
        scale: 1,
        ..MemoryOperand::default()
    };
    let displ_offset = cursor.consumed();
    match modrm.mod_ {
        0 if modrm.rm == 6 => {
            base = Register::None;
            mem.displacement = cursor.read_u16()? as u64;
            mem.displ_size = 2;
        }
        0 => {}
        1 => {
            mem.displacement = cursor.read_u8()? as i8 as i16 as u16 as u64;
            mem.displ_size = 1;
        }
        _ => {
            mem.displacement = cursor.read_u16()? as u64;
            mem.displ_size = 2;
        }
    }
    mem.base = base;
    if mem.displ_size != 0 {
        mem.displ_offset = displ_offset;
    }
    Ok(mem)
}

fn decode_memory32(
    cursor: &mut ByteCursor<'_>,
    modrm: ModRM,
    ctx: &AddressContext,
) -> Result<MemoryOperand, DecodeError> {
    let is_a64 = ctx.address_size == 64;
    let gpr = |n: u8| if is_a64 { Register::gpr64(n) } else { Register::gpr32(n) };
    let mut mem = MemoryOperand {
        scale: 1,
        ..MemoryOperand::default()
    };
    // disp32 without a base register
    let mut absolute = false;

    if modrm.rm == 4 {
        let sib = Sib::parse(cursor.read_u8()?);
        let index = sib.index | ((ctx.ext_index as u8) << 3);
        // The encoded scale is kept even when no index register is used.
        mem.scale = sib.scale_factor();
        if let Some(vsib) = ctx.vsib {
            mem.index = vsib.register(index | ((ctx.ext_vsib as u8) << 4));
        } else if index != 4 {
            mem.index = gpr(index);
        }
        if sib.base == 5 && modrm.mod_ == 0 {
            absolute = true;
        } else {
            mem.base = gpr(sib.base | ((ctx.ext_base as u8) << 3));
        }
    } else if ctx.vsib.is_some() {
        return Err(cursor.invalid("VSIB without a SIB byte"));
    } else if modrm.rm == 5 && modrm.mod_ == 0 {
        if ctx.is64 {
            mem.base = if is_a64 { Register::RIP } else { Register::EIP };
        }
        absolute = true;
    } else {
        mem.base = gpr(modrm.rm | ((ctx.ext_base as u8) << 3));
    }

    let displ_offset = cursor.consumed();
    let disp: Option<(i64, u32)> = match modrm.mod_ {
        0 if absolute => Some((cursor.read_u32()? as i32 as i64, 4)),
        0 => None,
        1 => Some((cursor.read_u8()? as i8 as i64 * ctx.disp8_scale as i64, 1)),
        _ => Some((cursor.read_u32()? as i32 as i64, 4)),
    };
    if let Some((value, size)) = disp {
        mem.displacement = if is_a64 { value as u64 } else { value as u32 as u64 };
        mem.displ_size = size;
        mem.displ_offset = displ_offset;
    }
    Ok(mem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(address_size: u32, is64: bool) -> AddressContext {
        AddressContext {
            address_size,
            is64,
            ext_base: false,
            ext_index: false,
            ext_vsib: false,
            vsib: None,
            disp8_scale: 1,
            segment_override: None,
        }
    }

    fn decode(bytes: &[u8], ctx: &AddressContext) -> MemoryOperand {
        let mut cursor = ByteCursor::new(bytes);
        cursor.begin(0);
        let modrm = ModRM::parse(cursor.read_u8().unwrap());
        decode_memory(&mut cursor, modrm, ctx).unwrap()
    }

    #[test]
    fn test_modrm_parse() {
        let modrm = ModRM::parse(0xD3);
        assert_eq!(modrm, ModRM { mod_: 3, reg: 2, rm: 3 });
        assert!(modrm.is_register());
    }

    #[test]
    fn test_mem16_pairs() {
        let mem = decode(&[0x00], &ctx(16, false));
        assert_eq!((mem.base, mem.index), (Register::BX, Register::SI));
        assert_eq!(mem.segment, Register::DS);
        assert_eq!(mem.displ_size, 0);

        let mem = decode(&[0x42, 0xFF], &ctx(16, false));
        assert_eq!((mem.base, mem.index), (Register::BP, Register::SI));
        assert_eq!(mem.segment, Register::SS);
        assert_eq!(mem.displacement, 0xFFFF);
        assert_eq!(mem.displ_size, 1);
    }

    #[test]
    fn test_mem16_direct() {
        let mem = decode(&[0x06, 0x34, 0x12], &ctx(16, false));
        assert_eq!(mem.base, Register::None);
        assert_eq!(mem.displacement, 0x1234);
        assert_eq!(mem.displ_size, 2);
        assert_eq!(mem.displ_offset, 1);
    }

    #[test]
    fn test_sib_no_index_no_base() {
        // [disp32] via SIB
        let mem = decode(&[0x04, 0x25, 0x78, 0x56, 0x34, 0x12], &ctx(64, true));
        assert_eq!(mem.base, Register::None);
        assert_eq!(mem.index, Register::None);
        assert_eq!(mem.displacement, 0x1234_5678);
        assert_eq!(mem.displ_offset, 2);
    }

    #[test]
    fn test_sib_scaled_index() {
        // [rbx+rsi*4-0x10]
        let mem = decode(&[0x44, 0xB3, 0xF0], &ctx(64, true));
        assert_eq!(mem.base, Register::RBX);
        assert_eq!(mem.index, Register::RSI);
        assert_eq!(mem.scale, 4);
        assert_eq!(mem.displacement as i64, -0x10);
    }

    #[test]
    fn test_sib_scale_without_index() {
        // [rax] with SIB.scale=3 and index=100b
        let mem = decode(&[0x04, 0xE0], &ctx(64, true));
        assert_eq!(mem.base, Register::RAX);
        assert_eq!(mem.index, Register::None);
        assert_eq!(mem.scale, 8);

        // REX.X turns index 100b into r12
        let mut c = ctx(64, true);
        c.ext_index = true;
        let mem = decode(&[0x04, 0x60], &c);
        assert_eq!(mem.index, Register::R12);
        assert_eq!(mem.scale, 2);
    }

    #[test]
    fn test_rip_relative() {
        let mem = decode(&[0x05, 0xF0, 0xFF, 0xFF, 0xFF], &ctx(64, true));
        assert_eq!(mem.base, Register::RIP);
        assert_eq!(mem.displacement as i64, -0x10);

        let mem = decode(&[0x05, 0x10, 0x00, 0x00, 0x00], &ctx(32, true));
        assert_eq!(mem.base, Register::EIP);

        let mem = decode(&[0x05, 0x10, 0x00, 0x00, 0x00], &ctx(32, false));
        assert_eq!(mem.base, Register::None);
        assert_eq!(mem.displacement, 0x10);
    }

    #[test]
    fn test_stack_segment_default() {
        let mem = decode(&[0x45, 0x08], &ctx(64, true));
        assert_eq!(mem.base, Register::RBP);
        assert_eq!(mem.segment, Register::SS);

        let mut c = ctx(64, true);
        c.ext_base = true;
        let mem = decode(&[0x45, 0x08], &c);
        assert_eq!(mem.base, Register::R13);
        assert_eq!(mem.segment, Register::DS);
    }

    #[test]
    fn test_compressed_disp8() {
        let mut c = ctx(64, true);
        c.disp8_scale = 64;
        let mem = decode(&[0x40, 0xFF], &c);
        assert_eq!(mem.displacement as i64, -64);
        assert_eq!(mem.displ_size, 1);
    }

    #[test]
    fn test_vsib_index() {
        let mut c = ctx(64, true);
        c.vsib = Some(VsibIndex::Ymm);
        c.ext_vsib = true;
        // [rax+ymm20*1]
        let mem = decode(&[0x04, 0x20], &c);
        assert_eq!(mem.index, Register::YMM20);
        assert_eq!(mem.base, Register::RAX);
    }
}
