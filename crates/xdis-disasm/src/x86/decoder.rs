//! x86/x64 instruction decoder.

use super::cursor::ByteCursor;
use super::map::{self, Encoding};
use super::modrm::{decode_memory, AddressContext, MemoryOperand, ModRM, VsibIndex};
use super::operand::{self, ConstantOffsets};
use super::prefix::{Prefixes, RepPrefix, VexPrefix};
use super::tables::{self, Flags, MatchContext, Op, PrefixSel, RegKind, Selection};
use crate::error::DecodeError;
use crate::options::DecoderOptions;
use crate::traits::{DecodedInstruction, Disassembler};
use xdis_core::{Bitness, Code, Instruction, OpKind, Register, RoundingControl};

/// Scratch state of the instruction being decoded.
///
/// Replaced wholesale at the start of every decode; nothing carries over
/// from one instruction to the next.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct DecodeState {
    pub bitness: Bitness,
    pub prefixes: Prefixes,
    pub encoding: Encoding,
    pub vex: Option<VexPrefix>,
    /// Opcode byte inside its table (the trailing byte for 3DNow!).
    pub opcode: u8,
    pub modrm: Option<ModRM>,
    /// Decoded effective address when ModR/M selects memory.
    pub memory: Option<MemoryOperand>,
    pub operand_size: u32,
    pub address_size: u32,
    pub vector_len: u32,
    /// REX.W, or VEX/EVEX/XOP.W
    pub w: bool,
    /// EVEX embedded broadcast on the memory operand.
    pub broadcast: bool,
    /// Near-branch operand slot and its displacement, resolved once the
    /// length is known.
    pub branch: Option<(usize, i64)>,
    pub offsets: ConstantOffsets,
}

impl DecodeState {
    /// REX.R / VEX.R as a register-number bit (0 or 8).
    pub fn ext_r(&self) -> u8 {
        let r = match self.vex {
            Some(vex) => vex.r,
            None => self.prefixes.rex.is_some_and(|rex| rex.r),
        };
        (r as u8) << 3
    }

    /// REX.X / VEX.X as a register-number bit (0 or 8).
    pub fn ext_x(&self) -> u8 {
        let x = match self.vex {
            Some(vex) => vex.x,
            None => self.prefixes.rex.is_some_and(|rex| rex.x),
        };
        (x as u8) << 3
    }

    /// REX.B / VEX.B as a register-number bit (0 or 8).
    pub fn ext_b(&self) -> u8 {
        let b = match self.vex {
            Some(vex) => vex.b,
            None => self.prefixes.rex.is_some_and(|rex| rex.b),
        };
        (b as u8) << 3
    }

    /// EVEX.R' (0 or 16).
    pub fn ext_r2(&self) -> u8 {
        (self.vex.is_some_and(|vex| vex.r2) as u8) << 4
    }

    /// EVEX.X applied to a vector register in r/m (0 or 16).
    pub fn ext_x_evex(&self) -> u8 {
        (self.vex.is_some_and(|vex| vex.x) as u8) << 4
    }

    /// Segment override, or `default`.
    pub fn segment_or(&self, default: Register) -> Register {
        self.prefixes.segment.unwrap_or(default)
    }

    fn address_context(&self, vsib: Option<VsibIndex>, disp8_scale: u32) -> AddressContext {
        AddressContext {
            address_size: self.address_size,
            is64: self.bitness.is_64(),
            ext_base: self.ext_b() != 0,
            ext_index: self.ext_x() != 0,
            ext_vsib: self.encoding == Encoding::Evex && self.vex.is_some_and(|vex| vex.v2),
            vsib,
            disp8_scale,
            segment_override: self.prefixes.segment,
        }
    }
}

/// Decodes x86/x64 instructions from a byte buffer.
///
/// Each call to [`decode`](Self::decode) consumes one instruction and
/// advances both the buffer position and the instruction pointer.
/// Encodings that do not form a valid instruction come back as a
/// one-byte `Code::Invalid` instruction so that decoding resumes at the
/// next byte; only running off the end of the buffer is an error.
#[derive(Debug)]
pub struct Decoder<'a> {
    bitness: Bitness,
    options: DecoderOptions,
    cursor: ByteCursor<'a>,
    ip: u64,
    state: DecodeState,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `data` with the instruction pointer at 0.
    pub fn new(bitness: Bitness, data: &'a [u8], options: DecoderOptions) -> Self {
        Self {
            bitness,
            options,
            cursor: ByteCursor::new(data),
            ip: 0,
            state: DecodeState::default(),
        }
    }

    /// Like [`new`](Self::new), taking the bitness as 16, 32 or 64.
    pub fn try_with_bits(bits: u32, data: &'a [u8], options: DecoderOptions) -> Result<Self, xdis_core::Error> {
        Ok(Self::new(Bitness::from_bits(bits)?, data, options))
    }

    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Instruction pointer of the next instruction.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip & self.bitness.ip_mask();
    }

    /// Offset of the next instruction in the buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Moves to another offset in the buffer, clamped to its length. The
    /// instruction pointer is left unchanged.
    pub fn set_position(&mut self, position: usize) {
        self.cursor.set_position(position);
    }

    /// Returns true while there are bytes left to decode.
    pub fn can_decode(&self) -> bool {
        self.cursor.remaining() > 0
    }

    /// Decodes the next instruction.
    ///
    /// Invalid encodings are returned as `Ok` with `Code::Invalid` and a
    /// length of 1. `Err` means the buffer ended; the position is then
    /// left at the start of the truncated instruction.
    pub fn decode(&mut self) -> Result<Instruction, DecodeError> {
        let mut instruction = Instruction::default();
        self.decode_out(&mut instruction)?;
        Ok(instruction)
    }

    /// Decodes the next instruction into `instruction`, overwriting it.
    pub fn decode_out(&mut self, instruction: &mut Instruction) -> Result<(), DecodeError> {
        match self.decode_checked(instruction) {
            Err(DecodeError::Invalid { .. }) => Ok(()),
            result => result,
        }
    }

    /// Displacement and immediate locations of the instruction just
    /// decoded.
    pub fn get_constant_offsets(&self, instruction: &Instruction) -> ConstantOffsets {
        if instruction.is_invalid() {
            ConstantOffsets::default()
        } else {
            self.state.offsets
        }
    }

    /// Iterates over instructions until the buffer ends.
    pub fn iter<'d>(&'d mut self) -> DecoderIter<'d, 'a> {
        DecoderIter { decoder: self }
    }

    /// Decodes one instruction; an invalid encoding is reported as
    /// `DecodeError::Invalid` after `instruction` has been set to the
    /// one-byte invalid instruction.
    pub(crate) fn decode_checked(&mut self, instruction: &mut Instruction) -> Result<(), DecodeError> {
        if !self.can_decode() {
            return Err(DecodeError::NoMoreBytes);
        }
        let ip = self.ip;
        self.cursor.begin(ip);
        self.state = DecodeState {
            bitness: self.bitness,
            ..DecodeState::default()
        };
        *instruction = Instruction::default();

        match self.decode_instruction(ip, instruction) {
            Ok(()) => {
                self.ip = instruction.next_ip();
                Ok(())
            }
            Err(err) if err.is_out_of_bytes() => {
                self.cursor.rewind();
                Err(err)
            }
            Err(err) => {
                if let DecodeError::Invalid { address, reason } = &err {
                    log::trace!("{:#x}: invalid instruction: {}", address, reason);
                }
                self.cursor.rewind();
                self.cursor.set_position(self.cursor.start() + 1);
                self.state.offsets = ConstantOffsets::default();
                *instruction = Instruction::default();
                instruction.set_code(Code::Invalid);
                instruction.set_bitness(self.bitness);
                instruction.set_ip(ip);
                instruction.set_len(1);
                self.ip = instruction.next_ip();
                Err(err)
            }
        }
    }

    fn decode_instruction(&mut self, ip: u64, insn: &mut Instruction) -> Result<(), DecodeError> {
        let bitness = self.bitness;
        let check = !self.options.contains(DecoderOptions::NO_INVALID_CHECK);
        let amd = self.options.contains(DecoderOptions::AMD);
        let Self { cursor, state, .. } = self;

        state.prefixes = Prefixes::scan(cursor, bitness)?;
        let location = map::resolve(cursor, &state.prefixes, bitness)?;
        state.encoding = location.encoding;
        state.vex = location.vex;
        state.opcode = location.opcode;
        state.w = match location.vex {
            Some(vex) => vex.w,
            None => state.prefixes.rex_w(),
        };
        state.address_size = address_size(bitness, state.prefixes.address_size);

        if location.encoding == Encoding::D3Now {
            // 0F 0F /r: operands first, then the opcode byte.
            let modrm = ModRM::parse(cursor.read_u8()?);
            state.modrm = Some(modrm);
            if !modrm.is_register() {
                let ctx = state.address_context(None, 1);
                state.memory = Some(decode_memory(cursor, modrm, &ctx)?);
            }
            state.opcode = cursor.read_u8()?;
        } else if tables::needs_modrm(location.table, location.opcode) {
            state.modrm = Some(ModRM::parse(cursor.read_u8()?));
        }

        let vex = state.vex.unwrap_or_default();
        let is_evex = state.encoding == Encoding::Evex;
        let ctx = MatchContext {
            bitness,
            mandatory: match state.vex {
                Some(vex) => vex.pp,
                None => state.prefixes.mandatory(),
            },
            modrm: state.modrm,
            p66: state.vex.is_none() && state.prefixes.operand_size,
            w: state.w,
            rex_b: state.prefixes.rex.is_some_and(|rex| rex.b),
            address_size: state.address_size,
            l: vex.l,
            evex_reg_bcst: is_evex && vex.bcst && state.modrm.is_some_and(|m| m.is_register()),
            amd,
        };
        let Some(selection) = tables::lookup(location.table, state.opcode, &ctx) else {
            return Err(cursor.invalid("no instruction for this opcode"));
        };
        let Selection {
            template,
            code,
            operand_size,
            vector_len,
        } = selection;
        state.operand_size = operand_size;
        state.vector_len = vector_len;

        if let Some(modrm) = state.modrm {
            if state.encoding != Encoding::D3Now
                && !modrm.is_register()
                && !template.flags.contains(Flags::FORCE_REG)
            {
                let vsib = template.ops.iter().find_map(|op| match op {
                    Op::Vsib(kind, _) => Some(operand::vsib_index(*kind, vector_len)),
                    _ => None,
                });
                let scale = if is_evex {
                    template.tuple.disp8_scale(vector_len, vex.bcst)
                } else {
                    1
                };
                let ctx = state.address_context(vsib, scale);
                state.memory = Some(decode_memory(cursor, modrm, &ctx)?);
            }
        }
        if let Some(mem) = state.memory.filter(|mem| mem.displ_size != 0) {
            state.offsets.displacement_offset = mem.displ_offset;
            state.offsets.displacement_size = mem.displ_size as usize;
        }
        state.broadcast = is_evex && vex.bcst && state.memory.is_some();

        let has_memory = state.memory.is_some();
        let flags = template.flags;
        let lock = state.prefixes.lock;
        let lock_ok = lock && flags.contains(Flags::LOCK) && has_memory;
        // `lock mov cr0` addresses CR8 on AMD processors.
        let cr8_alias = lock
            && !lock_ok
            && amd
            && flags.contains(Flags::CR8_LOCK)
            && state.modrm.is_some_and(|m| m.reg == 0);
        if check {
            if lock && !lock_ok && !cr8_alias {
                return Err(cursor.invalid("LOCK prefix not allowed"));
            }
            if let Some(vex) = state.vex {
                if vex.vvvv != 0 && !template.has_vvvv() {
                    return Err(cursor.invalid("unused vvvv field is not 1111"));
                }
                if is_evex && vex.v2 && !template.has_vvvv() && !template.has_vsib() {
                    return Err(cursor.invalid("unused EVEX.V' bit is not 1"));
                }
            }
            if is_evex {
                check_evex(cursor, &vex, flags, has_memory)?;
            }
        }

        insn.set_code(code);
        insn.set_bitness(bitness);
        insn.set_ip(ip);
        insn.set_op_count(template.ops.len());
        for (index, op) in template.ops.iter().enumerate() {
            operand::decode_operand(cursor, state, *op, index, insn)?;
        }
        if cr8_alias {
            for (index, op) in template.ops.iter().enumerate() {
                if matches!(op, Op::Reg(RegKind::Control)) {
                    insn.set_op_register(index, Register::CR8);
                }
            }
        }

        let len = cursor.consumed();
        insn.set_len(len);

        if let Some((index, displacement)) = state.branch {
            let (kind, mask) = match operand_size {
                16 => (OpKind::NearBranch16, 0xFFFF),
                _ if bitness.is_64() => (OpKind::NearBranch64, u64::MAX),
                _ => (OpKind::NearBranch32, 0xFFFF_FFFF),
            };
            let next_ip = ip.wrapping_add(len as u64);
            insn.set_op_kind(index, kind);
            insn.set_near_branch64(next_ip.wrapping_add(displacement as u64) & mask);
        }

        // A template selected by F3/F2 consumes that prefix; so does an
        // xacquire/xrelease hint.
        let last_rep = state.prefixes.last_rep;
        let hle = has_memory && (lock_ok || flags.contains(Flags::HLE_XCHG));
        let xacquire = hle && last_rep == Some(RepPrefix::Repne);
        let xrelease = (hle || (has_memory && flags.contains(Flags::HLE_MOV)))
            && last_rep == Some(RepPrefix::Repe);
        insn.set_has_repe_prefix(state.prefixes.repe && template.prefix != PrefixSel::PF3 && !xrelease);
        insn.set_has_repne_prefix(state.prefixes.repne && template.prefix != PrefixSel::PF2 && !xacquire);
        insn.set_has_xacquire_prefix(xacquire);
        insn.set_has_xrelease_prefix(xrelease);
        insn.set_has_lock_prefix(lock && !cr8_alias);
        insn.set_segment_prefix(state.prefixes.segment.unwrap_or(Register::None));

        if is_evex {
            insn.set_op_mask(if vex.aaa != 0 { Register::k(vex.aaa) } else { Register::None });
            insn.set_zeroing_masking(vex.z);
            insn.set_is_broadcast(state.broadcast);
            if vex.bcst && !has_memory {
                if flags.contains(Flags::ER) {
                    insn.set_rounding_control(RoundingControl::from_bits(vex.l));
                    insn.set_suppress_all_exceptions(true);
                } else if flags.contains(Flags::SAE) {
                    insn.set_suppress_all_exceptions(true);
                }
            }
        }
        Ok(())
    }
}

/// Opmask, zeroing and `b` rules of an EVEX template.
fn check_evex(cursor: &ByteCursor<'_>, vex: &VexPrefix, flags: Flags, has_memory: bool) -> Result<(), DecodeError> {
    if vex.aaa != 0 && !flags.contains(Flags::K) {
        return Err(cursor.invalid("opmask not allowed"));
    }
    if vex.aaa == 0 && flags.contains(Flags::K1) {
        return Err(cursor.invalid("opmask k0 not allowed"));
    }
    if vex.z && (vex.aaa == 0 || !flags.contains(Flags::Z)) {
        return Err(cursor.invalid("zeroing-masking not allowed"));
    }
    if vex.bcst {
        if has_memory && !flags.contains(Flags::BCST) {
            return Err(cursor.invalid("embedded broadcast not allowed"));
        }
        if !has_memory && !flags.intersects(Flags::ER.union(Flags::SAE)) {
            return Err(cursor.invalid("rounding control not allowed"));
        }
    }
    Ok(())
}

fn address_size(bitness: Bitness, override_prefix: bool) -> u32 {
    match (bitness, override_prefix) {
        (Bitness::Bits64, false) => 64,
        (Bitness::Bits64, true) | (Bitness::Bits32, false) | (Bitness::Bits16, true) => 32,
        (Bitness::Bits32, true) | (Bitness::Bits16, false) => 16,
    }
}

/// Iterator over a borrowed [`Decoder`]; see [`Decoder::iter`].
#[derive(Debug)]
pub struct DecoderIter<'d, 'a> {
    decoder: &'d mut Decoder<'a>,
}

impl Iterator for DecoderIter<'_, '_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        self.decoder.decode().ok()
    }
}

/// Owning iterator over a [`Decoder`].
#[derive(Debug)]
pub struct DecoderIntoIter<'a> {
    decoder: Decoder<'a>,
}

impl Iterator for DecoderIntoIter<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        self.decoder.decode().ok()
    }
}

impl<'a> IntoIterator for Decoder<'a> {
    type Item = Instruction;
    type IntoIter = DecoderIntoIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        DecoderIntoIter { decoder: self }
    }
}

impl<'d, 'a> IntoIterator for &'d mut Decoder<'a> {
    type Item = Instruction;
    type IntoIter = DecoderIter<'d, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        DecoderIter { decoder: self }
    }
}

/// Decodes the single instruction at the start of `buffer`.
pub fn decode(buffer: &[u8], bitness: Bitness, ip: u64, options: DecoderOptions) -> Result<Instruction, DecodeError> {
    let mut decoder = Decoder::new(bitness, buffer, options);
    decoder.set_ip(ip);
    decoder.decode()
}

/// One-shot x86 decoder behind the [`Disassembler`] trait.
///
/// Unlike [`Decoder::decode`], invalid encodings are reported as
/// [`DecodeError::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X86Disassembler {
    pub bitness: Bitness,
    pub options: DecoderOptions,
}

impl X86Disassembler {
    pub fn new(bitness: Bitness) -> Self {
        Self {
            bitness,
            options: DecoderOptions::NONE,
        }
    }

    pub fn with_options(bitness: Bitness, options: DecoderOptions) -> Self {
        Self { bitness, options }
    }
}

impl Default for X86Disassembler {
    fn default() -> Self {
        Self::new(Bitness::Bits64)
    }
}

impl Disassembler for X86Disassembler {
    fn decode_instruction(&self, bytes: &[u8], address: u64) -> Result<DecodedInstruction, DecodeError> {
        let mut decoder = Decoder::new(self.bitness, bytes, self.options);
        decoder.set_ip(address);
        let mut instruction = Instruction::default();
        decoder.decode_checked(&mut instruction)?;
        Ok(DecodedInstruction {
            size: instruction.len(),
            instruction,
        })
    }

    fn disassemble_block(&self, bytes: &[u8], start_address: u64) -> Vec<Result<Instruction, DecodeError>> {
        let mut decoder = Decoder::new(self.bitness, bytes, self.options);
        decoder.set_ip(start_address);
        let mut block = Vec::new();
        while decoder.can_decode() {
            let mut instruction = Instruction::default();
            match decoder.decode_checked(&mut instruction) {
                Ok(()) => block.push(Ok(instruction)),
                Err(err) if err.is_out_of_bytes() => {
                    block.push(Err(err));
                    break;
                }
                Err(err) => block.push(Err(err)),
            }
        }
        block
    }

    fn min_instruction_size(&self) -> usize {
        1
    }

    fn max_instruction_size(&self) -> usize {
        super::cursor::MAX_INSTRUCTION_LEN
    }

    fn is_fixed_width(&self) -> bool {
        false
    }

    fn bitness(&self) -> Bitness {
        self.bitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode64(bytes: &[u8]) -> Instruction {
        decode(bytes, Bitness::Bits64, 0x1000, DecoderOptions::NONE).unwrap()
    }

    fn decode32(bytes: &[u8]) -> Instruction {
        decode(bytes, Bitness::Bits32, 0x1000, DecoderOptions::NONE).unwrap()
    }

    #[test]
    fn test_decode_simple() {
        // push rbp
        let insn = decode64(&[0x55]);
        assert_eq!(insn.code(), Code::Push_r64);
        assert_eq!(insn.op_register(0), Register::RBP);
        assert_eq!(insn.len(), 1);

        // mov rbp, rsp
        let insn = decode64(&[0x48, 0x89, 0xE5]);
        assert_eq!(insn.code(), Code::Mov_rm64_r64);
        assert_eq!(insn.op_register(0), Register::RBP);
        assert_eq!(insn.op_register(1), Register::RSP);
        assert_eq!(insn.len(), 3);
    }

    #[test]
    fn test_decode_call_target() {
        let insn = decode64(&[0xE8, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(insn.code(), Code::Call_rel32_64);
        assert_eq!(insn.op_kind(0), OpKind::NearBranch64);
        assert_eq!(insn.near_branch64(), 0x1015);
    }

    #[test]
    fn test_branch_target_wraps_to_width() {
        // jmp short -4 at ip 0 in 16-bit mode
        let insn = decode(&[0xEB, 0xFC], Bitness::Bits16, 0, DecoderOptions::NONE).unwrap();
        assert_eq!(insn.op_kind(0), OpKind::NearBranch16);
        assert_eq!(insn.near_branch16(), 0xFFFE);

        let insn = decode(&[0xEB, 0xFC], Bitness::Bits32, 0, DecoderOptions::NONE).unwrap();
        assert_eq!(insn.op_kind(0), OpKind::NearBranch32);
        assert_eq!(insn.near_branch64(), 0xFFFF_FFFE);
    }

    #[test]
    fn test_amd_branch_operand_size() {
        let intel = decode64(&[0x66, 0xE9, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(intel.code(), Code::Jmp_rel32_64);
        assert_eq!(intel.len(), 6);

        let amd = decode(&[0x66, 0xE9, 0x10, 0x00], Bitness::Bits64, 0x1000, DecoderOptions::AMD).unwrap();
        assert_eq!(amd.code(), Code::Jmp_rel16);
        assert_eq!(amd.op_kind(0), OpKind::NearBranch16);
        assert_eq!(amd.near_branch16(), 0x1014);
        assert_eq!(amd.len(), 4);
    }

    #[test]
    fn test_invalid_is_one_byte() {
        let mut decoder = Decoder::new(Bitness::Bits64, &[0x06, 0x90], DecoderOptions::NONE);
        let insn = decoder.decode().unwrap();
        assert!(insn.is_invalid());
        assert_eq!(insn.len(), 1);
        assert_eq!(decoder.position(), 1);
        assert_eq!(decoder.ip(), 1);
        assert_eq!(decoder.decode().unwrap().code(), Code::Nopd);
    }

    #[test]
    fn test_out_of_bytes_restores_position() {
        let mut decoder = Decoder::new(Bitness::Bits64, &[0x90, 0x48, 0xB8, 0x01], DecoderOptions::NONE);
        decoder.set_ip(0x400000);
        decoder.decode().unwrap();
        let err = decoder.decode().unwrap_err();
        assert!(err.is_out_of_bytes());
        assert_eq!(decoder.position(), 1);
        assert_eq!(decoder.ip(), 0x400001);
        assert!(decoder.can_decode());
    }

    #[test]
    fn test_no_more_bytes() {
        let mut decoder = Decoder::new(Bitness::Bits32, &[], DecoderOptions::NONE);
        assert!(!decoder.can_decode());
        assert_eq!(decoder.decode().unwrap_err(), DecodeError::NoMoreBytes);
    }

    #[test]
    fn test_too_long_is_invalid() {
        let mut bytes = vec![0x66; 14];
        bytes.extend_from_slice(&[0x01, 0xC0]);
        let insn = decode64(&bytes);
        assert!(insn.is_invalid());
        assert_eq!(insn.len(), 1);

        // 14 prefixes + 1 opcode byte still fit.
        let mut bytes = vec![0x66; 14];
        bytes.push(0x90);
        let insn = decode64(&bytes);
        assert_eq!(insn.len(), 15);
    }

    #[test]
    fn test_lock_rules() {
        // lock add [rax], ecx
        let insn = decode64(&[0xF0, 0x01, 0x08]);
        assert_eq!(insn.code(), Code::Add_rm32_r32);
        assert!(insn.has_lock_prefix());

        // lock add eax, ecx: register destination
        assert!(decode64(&[0xF0, 0x01, 0xC8]).is_invalid());
        // lock mov [rax], ecx: not lockable
        assert!(decode64(&[0xF0, 0x89, 0x08]).is_invalid());

        let insn = decode(&[0xF0, 0x89, 0x08], Bitness::Bits64, 0, DecoderOptions::NO_INVALID_CHECK).unwrap();
        assert_eq!(insn.code(), Code::Mov_rm32_r32);
        assert!(insn.has_lock_prefix());
    }

    #[test]
    fn test_lock_mov_cr0_is_cr8_on_amd() {
        let bytes = [0xF0, 0x0F, 0x20, 0xC0];
        assert!(decode32(&bytes).is_invalid());

        let insn = decode(&bytes, Bitness::Bits32, 0, DecoderOptions::AMD).unwrap();
        assert_eq!(insn.code(), Code::Mov_r32_cr);
        assert_eq!(insn.op_register(0), Register::EAX);
        assert_eq!(insn.op_register(1), Register::CR8);
        assert!(!insn.has_lock_prefix());

        let insn = decode(&[0xF0, 0x0F, 0x22, 0xC3], Bitness::Bits32, 0, DecoderOptions::AMD).unwrap();
        assert_eq!(insn.code(), Code::Mov_cr_r32);
        assert_eq!(insn.op_register(0), Register::CR8);
        assert_eq!(insn.op_register(1), Register::EBX);
    }

    #[test]
    fn test_undefined_control_register() {
        // mov eax, cr1
        assert!(decode32(&[0x0F, 0x20, 0xC8]).is_invalid());
        // mov r8, cr8 via REX.R
        let insn = decode64(&[0x44, 0x0F, 0x20, 0xC0]);
        assert_eq!(insn.op_register(1), Register::CR8);
    }

    #[test]
    fn test_hle_prefixes() {
        // xacquire lock add [rax], ecx
        let insn = decode64(&[0xF2, 0xF0, 0x01, 0x08]);
        assert!(insn.has_xacquire_prefix());
        assert!(insn.has_lock_prefix());
        assert!(!insn.has_repne_prefix());

        // xrelease xchg [rax], ecx: no LOCK needed
        let insn = decode64(&[0xF3, 0x87, 0x08]);
        assert!(insn.has_xrelease_prefix());
        assert!(!insn.has_repe_prefix());

        // xrelease mov [rax], ecx
        let insn = decode64(&[0xF3, 0x89, 0x08]);
        assert!(insn.has_xrelease_prefix());
        assert!(!insn.has_xacquire_prefix());
        assert!(!insn.has_repe_prefix());

        // Only the last of F2/F3 becomes the hint; the other stays a rep flag.
        let insn = decode64(&[0xF2, 0xF3, 0xF0, 0x01, 0x08]);
        assert!(insn.has_xrelease_prefix());
        assert!(!insn.has_xacquire_prefix());
        assert!(insn.has_repne_prefix());
        assert!(!insn.has_repe_prefix());

        // F2 on mov is not xacquire
        let insn = decode64(&[0xF2, 0x89, 0x08]);
        assert!(!insn.has_xacquire_prefix());
        assert!(insn.has_repne_prefix());
    }

    #[test]
    fn test_mandatory_prefix_clears_rep_flag() {
        // pause
        let insn = decode64(&[0xF3, 0x90]);
        assert_eq!(insn.code(), Code::Pause);
        assert!(!insn.has_repe_prefix());

        // rep movsb keeps it
        let insn = decode64(&[0xF3, 0xA4]);
        assert_eq!(insn.code(), Code::Movsb_m8_m8);
        assert!(insn.has_repe_prefix());

        // Both rep prefixes are reported.
        let insn = decode64(&[0xF3, 0xF2, 0xA4]);
        assert!(insn.has_repe_prefix());
        assert!(insn.has_repne_prefix());

        // Only the F3 that selected pause is consumed.
        let insn = decode64(&[0xF2, 0xF3, 0x90]);
        assert_eq!(insn.code(), Code::Pause);
        assert!(insn.has_repne_prefix());
        assert!(!insn.has_repe_prefix());
    }

    #[test]
    fn test_string_operands() {
        // movsb with an FS override: source only
        let insn = decode64(&[0x64, 0xA4]);
        assert_eq!(insn.op_kind(0), OpKind::MemoryESRDI);
        assert_eq!(insn.op_kind(1), OpKind::MemorySegRSI);
        assert_eq!(insn.memory_segment(), Register::FS);
        assert_eq!(insn.segment_prefix(), Register::FS);

        let insn = decode(&[0xA5], Bitness::Bits16, 0, DecoderOptions::NONE).unwrap();
        assert_eq!(insn.code(), Code::Movsw_m16_m16);
        assert_eq!(insn.op_kind(0), OpKind::MemoryESDI);
        assert_eq!(insn.op_kind(1), OpKind::MemorySegSI);
    }

    #[test]
    fn test_moffs() {
        let insn = decode64(&[0xA1, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
        assert_eq!(insn.code(), Code::Mov_EAX_moffs32);
        assert_eq!(insn.memory_displacement64(), 0x1122_3344_5566_7788);
        assert_eq!(insn.memory_displ_size(), 8);
        assert_eq!(insn.memory_base(), Register::None);
        assert_eq!(insn.len(), 9);

        let insn = decode32(&[0x67, 0xA0, 0x34, 0x12]);
        assert_eq!(insn.code(), Code::Mov_AL_moffs8);
        assert_eq!(insn.memory_displ_size(), 2);
        assert_eq!(insn.len(), 4);
    }

    #[test]
    fn test_far_pointer() {
        let insn = decode32(&[0xEA, 0x78, 0x56, 0x34, 0x12, 0x08, 0x00]);
        assert_eq!(insn.code(), Code::Jmp_ptr1632);
        assert_eq!(insn.op_kind(0), OpKind::FarBranch32);
        assert_eq!(insn.far_branch32(), 0x1234_5678);
        assert_eq!(insn.far_branch_selector(), 8);
        assert!(decode64(&[0xEA, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]).is_invalid());
    }

    #[test]
    fn test_immediate_forms() {
        // add rax, -1 (imm8 sign-extended)
        let insn = decode64(&[0x48, 0x83, 0xC0, 0xFF]);
        assert_eq!(insn.op_kind(1), OpKind::Immediate8to64);
        assert_eq!(insn.immediate8to64(), -1);

        // mov rax, imm64
        let insn = decode64(&[0x48, 0xB8, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(insn.code(), Code::Mov_r64_imm64);
        assert_eq!(insn.immediate64(), 0x0102_0304_0506_0708);

        // add rax, imm32 sign-extended
        let insn = decode64(&[0x48, 0x05, 0x00, 0x00, 0x00, 0x80]);
        assert_eq!(insn.op_kind(1), OpKind::Immediate32to64);
        assert_eq!(insn.immediate32to64(), -0x8000_0000);

        // enter 0x10, 1
        let insn = decode64(&[0xC8, 0x10, 0x00, 0x01]);
        assert_eq!(insn.op_kind(0), OpKind::Immediate16);
        assert_eq!(insn.op_kind(1), OpKind::Immediate8_2nd);
        assert_eq!(insn.immediate8_2nd(), 1);
    }

    #[test]
    fn test_constant_offsets() {
        // add dword [rbx+0x10], 0x12345678
        let bytes = [0x81, 0x43, 0x10, 0x78, 0x56, 0x34, 0x12];
        let mut decoder = Decoder::new(Bitness::Bits64, &bytes, DecoderOptions::NONE);
        let insn = decoder.decode().unwrap();
        let offsets = decoder.get_constant_offsets(&insn);
        assert_eq!((offsets.displacement_offset, offsets.displacement_size), (2, 1));
        assert_eq!((offsets.immediate_offset, offsets.immediate_size), (3, 4));
        assert!(!offsets.has_immediate2());
    }

    #[test]
    fn test_vex_unused_vvvv() {
        // vmovups xmm0, [rax] with vvvv = 1111
        let insn = decode64(&[0xC5, 0xF8, 0x10, 0x00]);
        assert_eq!(insn.code(), Code::VEX_Vmovups_xmm_xmmm128);
        // vvvv = 1110
        assert!(decode64(&[0xC5, 0xF0, 0x10, 0x00]).is_invalid());
    }

    #[test]
    fn test_evex_masking_and_rounding() {
        // vaddps zmm1{k1}{z}, zmm2, zmm3
        let insn = decode64(&[0x62, 0xF1, 0x6C, 0xC9, 0x58, 0xCB]);
        assert_eq!(insn.code(), Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
        assert_eq!(insn.op_register(0), Register::ZMM1);
        assert_eq!(insn.op_register(1), Register::ZMM2);
        assert_eq!(insn.op_register(2), Register::ZMM3);
        assert_eq!(insn.op_mask(), Register::K1);
        assert!(insn.zeroing_masking());

        // {rz-sae} with L'L = 11: vector length is 512
        let insn = decode64(&[0x62, 0xF1, 0x6C, 0x78, 0x58, 0xCB]);
        assert_eq!(insn.code(), Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
        assert_eq!(insn.rounding_control(), RoundingControl::RoundTowardZero);
        assert!(insn.suppress_all_exceptions());

        // {z} without an opmask
        assert!(decode64(&[0x62, 0xF1, 0x6C, 0xC8, 0x58, 0xCB]).is_invalid());
    }

    #[test]
    fn test_evex_broadcast_and_disp8() {
        // vaddps zmm1, zmm2, dword bcst [rax+0x40]; disp8 scaled by 4
        let insn = decode64(&[0x62, 0xF1, 0x6C, 0x58, 0x58, 0x48, 0x10]);
        assert!(insn.is_broadcast());
        assert_eq!(insn.memory_size(), xdis_core::MemorySize::Broadcast512_Float32);
        assert_eq!(insn.memory_displacement64(), 0x40);

        // Full vector: disp8 scaled by 64
        let insn = decode64(&[0x62, 0xF1, 0x6C, 0x48, 0x58, 0x48, 0x01]);
        assert!(!insn.is_broadcast());
        assert_eq!(insn.memory_displacement64(), 0x40);
        assert_eq!(insn.memory_displ_size(), 1);
    }

    #[test]
    fn test_three_dnow() {
        // pfadd mm1, [eax+4]
        let insn = decode32(&[0x0F, 0x0F, 0x48, 0x04, 0x9E]);
        assert_eq!(insn.code(), Code::D3NOW_Pfadd_mm_mmm64);
        assert_eq!(insn.op_register(0), Register::MM1);
        assert_eq!(insn.memory_base(), Register::EAX);
        assert_eq!(insn.memory_displacement64(), 4);
        assert_eq!(insn.len(), 5);

        assert!(decode32(&[0x0F, 0x0F, 0xC1, 0x00]).is_invalid());
    }

    #[test]
    fn test_state_does_not_leak() {
        let bytes = [0xF0, 0x01, 0x08, 0x01, 0x08];
        let mut decoder = Decoder::new(Bitness::Bits64, &bytes, DecoderOptions::NONE);
        assert!(decoder.decode().unwrap().has_lock_prefix());
        let insn = decoder.decode().unwrap();
        assert!(!insn.has_lock_prefix());
        assert_eq!(insn.code(), Code::Add_rm32_r32);
    }

    #[test]
    fn test_iterator_stops_at_truncation() {
        let bytes = [0x90, 0x06, 0xC3, 0xE8, 0x00];
        let decoder = Decoder::new(Bitness::Bits64, &bytes, DecoderOptions::NONE);
        let codes: Vec<Code> = decoder.into_iter().map(|insn| insn.code()).collect();
        assert_eq!(codes, vec![Code::Nopd, Code::Invalid, Code::Retnq]);
    }

    #[test]
    fn test_try_with_bits() {
        assert!(Decoder::try_with_bits(32, &[0x90], DecoderOptions::NONE).is_ok());
        assert!(Decoder::try_with_bits(8, &[0x90], DecoderOptions::NONE).is_err());
    }

    #[test]
    fn test_disassembler_reports_invalid() {
        let disasm = X86Disassembler::new(Bitness::Bits64);
        let err = disasm.decode_instruction(&[0x06], 0x2000).unwrap_err();
        assert!(matches!(err, DecodeError::Invalid { address: 0x2000, .. }));

        let decoded = disasm.decode_instruction(&[0xC3], 0x2000).unwrap();
        assert_eq!(decoded.size, 1);
        assert_eq!(disasm.max_instruction_size(), 15);
        assert!(!disasm.is_fixed_width());

        let block = disasm.disassemble_block(&[0x90, 0x06, 0xC3], 0);
        assert_eq!(block.len(), 3);
        assert!(block[1].is_err());
        assert_eq!(block[2].as_ref().unwrap().ip(), 2);
    }

    #[test]
    fn test_disassemble_block_stops_at_truncation() {
        let disasm = X86Disassembler::new(Bitness::Bits64);
        // nop; mov rcx, [rax+...] cut off after the ModR/M byte
        let block = disasm.disassemble_block(&[0x90, 0x48, 0x8B, 0x88, 0x10], 0x1000);
        assert_eq!(block.len(), 2);
        assert_eq!(block[0].as_ref().unwrap().code(), Code::Nopd);
        assert!(block[1].as_ref().unwrap_err().is_out_of_bytes());

        assert!(disasm.disassemble_block(&[], 0).is_empty());
    }
}
