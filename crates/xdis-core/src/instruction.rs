//! Decoded x86/x64 instruction.

use crate::{Bitness, Code, Error, MemorySize, Operand, Register};

/// Maximum number of operands of any instruction.
pub const MAX_OP_COUNT: usize = 5;

/// Kind of an instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types)]
pub enum OpKind {
    /// Register operand, see [`Instruction::op_register`].
    #[default]
    Register,
    /// IP-relative branch target truncated to 16 bits.
    NearBranch16,
    /// IP-relative branch target truncated to 32 bits.
    NearBranch32,
    /// IP-relative branch target.
    NearBranch64,
    /// `ptr16:16` far branch.
    FarBranch16,
    /// `ptr16:32` far branch.
    FarBranch32,
    Immediate8,
    /// Second 8-bit immediate (`enter`, `extrq`, `insertq`).
    Immediate8_2nd,
    Immediate16,
    Immediate32,
    Immediate64,
    /// 8-bit immediate sign-extended to 16 bits.
    Immediate8to16,
    /// 8-bit immediate sign-extended to 32 bits.
    Immediate8to32,
    /// 8-bit immediate sign-extended to 64 bits.
    Immediate8to64,
    /// 32-bit immediate sign-extended to 64 bits.
    Immediate32to64,
    /// `seg:[si]`
    MemorySegSI,
    /// `seg:[esi]`
    MemorySegESI,
    /// `seg:[rsi]`
    MemorySegRSI,
    /// `seg:[di]`
    MemorySegDI,
    /// `seg:[edi]`
    MemorySegEDI,
    /// `seg:[rdi]`
    MemorySegRDI,
    /// `es:[di]`
    MemoryESDI,
    /// `es:[edi]`
    MemoryESEDI,
    /// `es:[rdi]`
    MemoryESRDI,
    /// Memory operand described by the `memory_*` accessors.
    Memory,
}

impl OpKind {
    /// Returns true for any immediate kind.
    pub fn is_immediate(&self) -> bool {
        matches!(
            self,
            Self::Immediate8
                | Self::Immediate8_2nd
                | Self::Immediate16
                | Self::Immediate32
                | Self::Immediate64
                | Self::Immediate8to16
                | Self::Immediate8to32
                | Self::Immediate8to64
                | Self::Immediate32to64
        )
    }

    /// Returns true for memory kinds, including the implicit string operands.
    pub fn is_memory(&self) -> bool {
        matches!(
            self,
            Self::Memory
                | Self::MemorySegSI
                | Self::MemorySegESI
                | Self::MemorySegRSI
                | Self::MemorySegDI
                | Self::MemorySegEDI
                | Self::MemorySegRDI
                | Self::MemoryESDI
                | Self::MemoryESEDI
                | Self::MemoryESRDI
        )
    }

    pub fn is_near_branch(&self) -> bool {
        matches!(
            self,
            Self::NearBranch16 | Self::NearBranch32 | Self::NearBranch64
        )
    }

    pub fn is_far_branch(&self) -> bool {
        matches!(self, Self::FarBranch16 | Self::FarBranch32)
    }
}

/// EVEX static rounding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingControl {
    #[default]
    None,
    RoundToNearest,
    RoundDown,
    RoundUp,
    RoundTowardZero,
}

impl RoundingControl {
    /// Maps the two EVEX.L'L bits to a rounding mode.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Self::RoundToNearest,
            1 => Self::RoundDown,
            2 => Self::RoundUp,
            _ => Self::RoundTowardZero,
        }
    }
}

/// A decoded instruction.
///
/// Plain `Copy` value: every field lives inline, so decoding never
/// allocates. Operand `i` is described by [`op_kind(i)`](Self::op_kind)
/// plus the accessor matching that kind (`op_register`, `memory_*`,
/// `immediate*`, `near_branch*`, `far_branch*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    ip: u64,
    code: Code,
    len: u8,
    bitness: Bitness,
    op_count: u8,
    op_kinds: [OpKind; MAX_OP_COUNT],
    op_registers: [Register; MAX_OP_COUNT],
    segment_prefix: Register,
    memory_segment: Register,
    memory_base: Register,
    memory_index: Register,
    memory_index_scale: u8,
    memory_displacement: u64,
    memory_displ_size: u8,
    memory_size: MemorySize,
    immediate: u64,
    immediate_2nd: u8,
    near_branch: u64,
    far_branch_selector: u16,
    op_mask: Register,
    rounding_control: RoundingControl,
    repe: bool,
    repne: bool,
    lock: bool,
    xacquire: bool,
    xrelease: bool,
    zeroing_masking: bool,
    broadcast: bool,
    suppress_all_exceptions: bool,
}

impl Instruction {
    /// Creates an empty (`Code::Invalid`) instruction.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn set_code(&mut self, code: Code) {
        self.code = code;
    }

    /// Lower-case mnemonic of the instruction's code.
    pub fn mnemonic(&self) -> &'static str {
        self.code.mnemonic()
    }

    pub fn is_invalid(&self) -> bool {
        self.code.is_invalid()
    }

    /// Instruction length in bytes (1..=15).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len as u8;
    }

    /// Always false; a decoded instruction is at least one byte long.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of the first byte.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    /// Address of the following instruction, wrapped to the bitness.
    pub fn next_ip(&self) -> u64 {
        self.ip.wrapping_add(self.len as u64) & self.bitness.ip_mask()
    }

    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    pub fn set_bitness(&mut self, bitness: Bitness) {
        self.bitness = bitness;
    }

    pub fn op_count(&self) -> usize {
        self.op_count as usize
    }

    pub fn set_op_count(&mut self, count: usize) {
        self.op_count = count.min(MAX_OP_COUNT) as u8;
    }

    /// Kind of operand `index`; `OpKind::Register` past `op_count`.
    pub fn op_kind(&self, index: usize) -> OpKind {
        if index < self.op_count() {
            self.op_kinds[index]
        } else {
            OpKind::Register
        }
    }

    pub fn set_op_kind(&mut self, index: usize, kind: OpKind) {
        if let Some(slot) = self.op_kinds.get_mut(index) {
            *slot = kind;
        }
    }

    /// Kinds of all operands, in order.
    pub fn op_kinds(&self) -> impl Iterator<Item = OpKind> + '_ {
        self.op_kinds[..self.op_count()].iter().copied()
    }

    /// Register of operand `index`, or `Register::None` if it is not a
    /// register operand.
    pub fn op_register(&self, index: usize) -> Register {
        if index < self.op_count() && self.op_kinds[index] == OpKind::Register {
            self.op_registers[index]
        } else {
            Register::None
        }
    }

    pub fn set_op_register(&mut self, index: usize, reg: Register) {
        if let Some(slot) = self.op_registers.get_mut(index) {
            *slot = reg;
        }
    }

    /// Index of the memory operand, if any.
    pub fn memory_operand_index(&self) -> Option<usize> {
        self.op_kinds().position(|k| k.is_memory())
    }

    // Memory operand

    /// Explicit segment override prefix, or `Register::None`.
    ///
    /// Independent of [`memory_segment`](Self::memory_segment): a prefix is
    /// recorded even when the instruction has no memory operand.
    pub fn segment_prefix(&self) -> Register {
        self.segment_prefix
    }

    pub fn set_segment_prefix(&mut self, seg: Register) {
        self.segment_prefix = seg;
    }

    /// Effective segment of the memory operand (override or DS/SS default).
    pub fn memory_segment(&self) -> Register {
        self.memory_segment
    }

    pub fn set_memory_segment(&mut self, seg: Register) {
        self.memory_segment = seg;
    }

    pub fn memory_base(&self) -> Register {
        self.memory_base
    }

    pub fn set_memory_base(&mut self, reg: Register) {
        self.memory_base = reg;
    }

    pub fn memory_index(&self) -> Register {
        self.memory_index
    }

    pub fn set_memory_index(&mut self, reg: Register) {
        self.memory_index = reg;
    }

    /// Index scale factor: 1, 2, 4 or 8.
    pub fn memory_index_scale(&self) -> u32 {
        self.memory_index_scale.max(1) as u32
    }

    pub fn set_memory_index_scale(&mut self, scale: u32) {
        self.memory_index_scale = scale as u8;
    }

    /// Displacement sign-extended to the address size.
    pub fn memory_displacement64(&self) -> u64 {
        self.memory_displacement
    }

    pub fn memory_displacement32(&self) -> u32 {
        self.memory_displacement as u32
    }

    pub fn set_memory_displacement64(&mut self, disp: u64) {
        self.memory_displacement = disp;
    }

    /// Number of displacement bytes encoded: 0, 1, 2, 4 or 8.
    ///
    /// Zero exactly when no displacement bytes were consumed, whatever
    /// the displacement value.
    pub fn memory_displ_size(&self) -> u32 {
        self.memory_displ_size as u32
    }

    pub fn set_memory_displ_size(&mut self, size: u32) {
        self.memory_displ_size = size as u8;
    }

    pub fn memory_size(&self) -> MemorySize {
        self.memory_size
    }

    pub fn set_memory_size(&mut self, size: MemorySize) {
        self.memory_size = size;
    }

    /// Returns true if the memory operand is `[rip+disp]` or `[eip+disp]`.
    pub fn is_ip_rel_memory_operand(&self) -> bool {
        matches!(self.memory_base, Register::RIP | Register::EIP)
    }

    /// Absolute address of an IP-relative memory operand.
    pub fn ip_rel_memory_address(&self) -> u64 {
        let address = self.next_ip().wrapping_add(self.memory_displacement);
        if self.memory_base == Register::EIP {
            address & 0xFFFF_FFFF
        } else {
            address
        }
    }

    // Immediates

    pub fn immediate8(&self) -> u8 {
        self.immediate as u8
    }

    /// Second immediate of `enter`, `extrq` and `insertq`.
    pub fn immediate8_2nd(&self) -> u8 {
        self.immediate_2nd
    }

    pub fn set_immediate8_2nd(&mut self, value: u8) {
        self.immediate_2nd = value;
    }

    pub fn immediate16(&self) -> u16 {
        self.immediate as u16
    }

    pub fn immediate32(&self) -> u32 {
        self.immediate as u32
    }

    pub fn immediate64(&self) -> u64 {
        self.immediate
    }

    pub fn immediate8to16(&self) -> i16 {
        self.immediate as i16
    }

    pub fn immediate8to32(&self) -> i32 {
        self.immediate as i32
    }

    pub fn immediate8to64(&self) -> i64 {
        self.immediate as i64
    }

    /// 32-bit immediate sign-extended to 64 bits at decode time.
    pub fn immediate32to64(&self) -> i64 {
        self.immediate as i64
    }

    /// Stores the first immediate; sign-extending kinds must pass the
    /// already extended value.
    pub fn set_immediate(&mut self, value: u64) {
        self.immediate = value;
    }

    /// Value of immediate operand `index`, zero/sign-extended to 64 bits
    /// according to its kind.
    pub fn immediate(&self, index: usize) -> Result<u64, Error> {
        if index >= self.op_count() {
            return Err(Error::OperandIndex {
                index,
                count: self.op_count(),
            });
        }
        let value = match self.op_kinds[index] {
            OpKind::Immediate8 => self.immediate8() as u64,
            OpKind::Immediate8_2nd => self.immediate_2nd as u64,
            OpKind::Immediate16 => self.immediate16() as u64,
            OpKind::Immediate32 => self.immediate32() as u64,
            OpKind::Immediate64
            | OpKind::Immediate8to16
            | OpKind::Immediate8to32
            | OpKind::Immediate8to64
            | OpKind::Immediate32to64 => self.immediate,
            _ => return Err(Error::NotImmediate(index)),
        };
        Ok(value)
    }

    // Branches

    pub fn near_branch16(&self) -> u16 {
        self.near_branch as u16
    }

    pub fn near_branch32(&self) -> u32 {
        self.near_branch as u32
    }

    pub fn near_branch64(&self) -> u64 {
        self.near_branch
    }

    pub fn set_near_branch64(&mut self, target: u64) {
        self.near_branch = target;
    }

    /// Target of the near-branch operand, if the instruction has one.
    pub fn near_branch_target(&self) -> Option<u64> {
        self.op_kinds()
            .find(|k| k.is_near_branch())
            .map(|_| self.near_branch)
    }

    /// Offset part of a `ptr16:16` operand.
    pub fn far_branch16(&self) -> u16 {
        self.immediate as u16
    }

    /// Offset part of a `ptr16:32` operand.
    pub fn far_branch32(&self) -> u32 {
        self.immediate as u32
    }

    pub fn far_branch_selector(&self) -> u16 {
        self.far_branch_selector
    }

    pub fn set_far_branch_selector(&mut self, selector: u16) {
        self.far_branch_selector = selector;
    }

    // Prefixes

    pub fn has_repe_prefix(&self) -> bool {
        self.repe
    }

    pub fn set_has_repe_prefix(&mut self, value: bool) {
        self.repe = value;
    }

    pub fn has_repne_prefix(&self) -> bool {
        self.repne
    }

    pub fn set_has_repne_prefix(&mut self, value: bool) {
        self.repne = value;
    }

    pub fn has_lock_prefix(&self) -> bool {
        self.lock
    }

    pub fn set_has_lock_prefix(&mut self, value: bool) {
        self.lock = value;
    }

    /// F2 acting as an HLE `xacquire` hint.
    pub fn has_xacquire_prefix(&self) -> bool {
        self.xacquire
    }

    pub fn set_has_xacquire_prefix(&mut self, value: bool) {
        self.xacquire = value;
    }

    /// F3 acting as an HLE `xrelease` hint.
    pub fn has_xrelease_prefix(&self) -> bool {
        self.xrelease
    }

    pub fn set_has_xrelease_prefix(&mut self, value: bool) {
        self.xrelease = value;
    }

    // EVEX

    /// Opmask register (`k1`..`k7`) or `Register::None`.
    pub fn op_mask(&self) -> Register {
        self.op_mask
    }

    pub fn set_op_mask(&mut self, reg: Register) {
        self.op_mask = reg;
    }

    pub fn has_op_mask(&self) -> bool {
        self.op_mask != Register::None
    }

    /// `{z}`: zeroing instead of merging masking.
    pub fn zeroing_masking(&self) -> bool {
        self.zeroing_masking
    }

    pub fn set_zeroing_masking(&mut self, value: bool) {
        self.zeroing_masking = value;
    }

    /// EVEX embedded broadcast (`{1toN}`).
    pub fn is_broadcast(&self) -> bool {
        self.broadcast
    }

    pub fn set_is_broadcast(&mut self, value: bool) {
        self.broadcast = value;
    }

    pub fn rounding_control(&self) -> RoundingControl {
        self.rounding_control
    }

    pub fn set_rounding_control(&mut self, rc: RoundingControl) {
        self.rounding_control = rc;
    }

    /// `{sae}`; implied by any static rounding mode.
    pub fn suppress_all_exceptions(&self) -> bool {
        self.suppress_all_exceptions
    }

    pub fn set_suppress_all_exceptions(&mut self, value: bool) {
        self.suppress_all_exceptions = value;
    }

    // Structured view

    /// Operand `index` as a structured [`Operand`].
    pub fn operand(&self, index: usize) -> Result<Operand, Error> {
        if index >= self.op_count() {
            return Err(Error::OperandIndex {
                index,
                count: self.op_count(),
            });
        }
        Ok(Operand::from_instruction(self, index))
    }

    /// All operands as structured [`Operand`] values.
    pub fn operands(&self) -> impl Iterator<Item = Operand> + '_ {
        (0..self.op_count()).map(move |i| Operand::from_instruction(self, i))
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.lock {
            f.write_str("lock ")?;
        }
        if self.xacquire {
            f.write_str("xacquire ")?;
        } else if self.xrelease {
            f.write_str("xrelease ")?;
        }
        f.write_str(self.mnemonic())?;
        for (i, op) in self.operands().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{}", op)?;
            if i == 0 && self.has_op_mask() {
                write!(f, " {{{}}}", self.op_mask)?;
                if self.zeroing_masking {
                    f.write_str("{z}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instruction {
        let mut insn = Instruction::new();
        insn.set_code(Code::Add_rm32_imm8);
        insn.set_bitness(Bitness::Bits32);
        insn.set_ip(0xFFFF_FFFE);
        insn.set_len(3);
        insn.set_op_count(2);
        insn.set_op_kind(0, OpKind::Register);
        insn.set_op_register(0, Register::EAX);
        insn.set_op_kind(1, OpKind::Immediate8to32);
        insn.set_immediate(-2i32 as i64 as u64);
        insn
    }

    #[test]
    fn test_next_ip_wraps() {
        assert_eq!(sample().next_ip(), 1);
    }

    #[test]
    fn test_immediate_by_index() {
        let insn = sample();
        assert_eq!(insn.immediate(1).unwrap() as i64, -2);
        assert_eq!(insn.immediate8to32(), -2);
        assert!(matches!(insn.immediate(0), Err(Error::NotImmediate(0))));
        assert!(matches!(
            insn.immediate(4),
            Err(Error::OperandIndex { index: 4, count: 2 })
        ));
    }

    #[test]
    fn test_op_register_past_count() {
        let insn = sample();
        assert_eq!(insn.op_register(0), Register::EAX);
        assert_eq!(insn.op_register(1), Register::None);
        assert_eq!(insn.op_register(3), Register::None);
        assert_eq!(insn.memory_operand_index(), None);
    }

    #[test]
    fn test_default_is_invalid() {
        let insn = Instruction::default();
        assert!(insn.is_invalid());
        assert_eq!(insn.op_count(), 0);
    }
}
