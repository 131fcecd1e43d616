//! Instruction templates and the opcode index.
//!
//! Every decodable instruction form is described by one [`Template`]: the
//! opcode table and byte it lives at, the predicates that must hold for it
//! to apply (mandatory prefix, ModR/M.reg, register/memory form, operand
//! and address size, W, vector length, processor mode) and the operand
//! list. Templates sharing a `(table, opcode)` are tried in declaration
//! order.

#![allow(non_upper_case_globals)]

mod d3now;
mod evex;
mod legacy;
mod map_0f;
mod map_0f38;
mod map_0f3a;
mod vex;
mod x87;
mod xop;

use super::modrm::ModRM;
use super::prefix::MandatoryPrefix;
use bitflags::bitflags;
use once_cell::sync::Lazy;
use xdis_core::{Bitness, Code, MemorySize, Register};

/// Opcode table a template lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Table {
    /// One-byte opcodes
    Legacy,
    /// `0F xx`
    Legacy0F,
    /// `0F 38 xx`
    Legacy0F38,
    /// `0F 3A xx`
    Legacy0F3A,
    /// `0F 0F /r ib`, keyed by the trailing byte
    D3Now,
    Vex0F,
    Vex0F38,
    Vex0F3A,
    Evex0F,
    Evex0F38,
    Evex0F3A,
    Xop8,
    Xop9,
    XopA,
}

const TABLE_COUNT: usize = 14;

/// Instruction code(s) a template produces.
#[derive(Debug, Clone, Copy)]
pub enum Codes {
    One(Code),
    /// Indexed by effective operand size: 16, 32, 64.
    Osz([Code; 3]),
    /// Indexed by vector length: 128, 256, 512.
    Len([Code; 3]),
}

/// Mandatory prefix a template requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixSel {
    /// Any prefix (tried after exact matches)
    Any,
    /// No 66/F2/F3
    NP,
    /// No F2/F3; 66 stays an operand-size prefix
    NoRep,
    P66,
    PF3,
    PF2,
}

impl PrefixSel {
    fn matches(self, mandatory: MandatoryPrefix) -> bool {
        matches!(
            (self, mandatory),
            (Self::NP, MandatoryPrefix::None)
                | (Self::NoRep, MandatoryPrefix::None | MandatoryPrefix::P66)
                | (Self::P66, MandatoryPrefix::P66)
                | (Self::PF3, MandatoryPrefix::PF3)
                | (Self::PF2, MandatoryPrefix::PF2)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Any,
    /// ModR/M.mod != 11
    Mem,
    /// ModR/M.mod == 11
    Reg,
}

/// Operand/address size predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSel {
    Any,
    S16,
    S32,
    S64,
}

impl SizeSel {
    fn matches(self, bits: u32) -> bool {
        match self {
            Self::Any => true,
            Self::S16 => bits == 16,
            Self::S32 => bits == 32,
            Self::S64 => bits == 64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WSel {
    Any,
    W0,
    W1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LSel {
    Any,
    L128,
    L256,
    L512,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSel {
    Any,
    Only64,
    Not64,
}

bitflags! {
    /// Per-template decoding flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u32 {
        /// LOCK is accepted with a memory destination; also enables
        /// xacquire/xrelease when locked.
        const LOCK = 1 << 0;
        /// xacquire/xrelease without LOCK (`xchg m, r`).
        const HLE_XCHG = 1 << 1;
        /// xrelease without LOCK (`mov m, r`/`mov m, imm`).
        const HLE_MOV = 1 << 2;
        /// 64-bit default operand size in 64-bit mode.
        const D64 = 1 << 3;
        /// Operand size forced to 64 in 64-bit mode (Intel); AMD honours 66.
        const F64 = 1 << 4;
        /// ModR/M.mod is ignored, r/m is always a register.
        const FORCE_REG = 1 << 5;
        /// `lock mov cr0` means CR8 outside 64-bit mode.
        const CR8_LOCK = 1 << 6;
        /// Template only applies when REX.B is clear (`nop` vs `xchg r8, rax`).
        const NO_REX_B = 1 << 7;
        /// EVEX opmask allowed.
        const K = 1 << 8;
        /// EVEX zeroing-masking allowed.
        const Z = 1 << 9;
        /// EVEX embedded broadcast allowed with a memory operand.
        const BCST = 1 << 10;
        /// EVEX embedded rounding allowed with a register operand.
        const ER = 1 << 11;
        /// EVEX suppress-all-exceptions allowed with a register operand.
        const SAE = 1 << 12;
        /// EVEX opmask required (k1..k7).
        const K1 = 1 << 13;

        const KZ = Self::K.bits() | Self::Z.bits();
    }
}

/// EVEX tuple type, used to compute the disp8*N scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleType {
    None,
    /// Full vector or 4-byte broadcast element
    Full32,
    /// Full vector or 8-byte broadcast element
    Full64,
    /// Half vector or 4-byte broadcast element
    Half32,
    /// Full vector, no broadcast
    FullMem,
    /// Fixed N (scalar, tuple1/2/4/8)
    Fixed(u8),
    HalfMem,
    QuarterMem,
    EighthMem,
    Mem128,
    Movddup,
}

impl TupleType {
    /// disp8 scale for a vector length in bits.
    pub fn disp8_scale(self, vector_len: u32, broadcast: bool) -> u32 {
        let vl = vector_len / 8;
        match self {
            Self::None => 1,
            Self::Full32 if broadcast => 4,
            Self::Full64 if broadcast => 8,
            Self::Half32 if broadcast => 4,
            Self::Full32 | Self::Full64 | Self::FullMem => vl,
            Self::Half32 | Self::HalfMem => vl / 2,
            Self::QuarterMem => vl / 4,
            Self::EighthMem => vl / 8,
            Self::Fixed(n) => n as u32,
            Self::Mem128 => 16,
            Self::Movddup => match vector_len {
                128 => 8,
                _ => vl,
            },
        }
    }
}

/// Register file an operand selects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegKind {
    Gpr8,
    Gpr16,
    Gpr32,
    Gpr64,
    /// 16/32/64 by effective operand size
    GprOsz,
    /// 32, or 64 with W1 in 64-bit mode
    GprW,
    /// 32 outside 64-bit mode, 64 in 64-bit mode
    GprMode,
    Segment,
    /// Segment register that cannot be CS (`mov sreg, r/m`)
    SegmentDst,
    Control,
    Debug,
    Test,
    St,
    Mmx,
    Xmm,
    Ymm,
    /// XMM/YMM/ZMM by vector length
    VecLen,
    /// Half of the vector length, at least XMM
    VecHalf,
    /// Quarter of the vector length, at least XMM
    VecQuarter,
    Mask,
}

/// Memory operand size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mem {
    Fixed(MemorySize),
    /// By effective operand size: 16, 32, 64.
    Osz([MemorySize; 3]),
    /// By vector length: 128, 256, 512.
    Len([MemorySize; 3]),
    /// By W: W0, W1.
    W([MemorySize; 2]),
}

/// Immediate encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imm {
    /// imm8
    Ib,
    /// Second imm8
    Ib2,
    /// imm16
    Iw,
    /// imm32
    Id,
    /// imm16/imm32, sign-extended to 64 with a 64-bit operand size
    Iz,
    /// imm16/imm32/imm64 by operand size
    Iv,
    /// imm8 sign-extended to the operand size
    Ibs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rel {
    /// rel8
    Jb,
    /// rel16/rel32 by operand size
    Jz,
}

/// One operand slot of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// ModR/M.reg
    Reg(RegKind),
    /// ModR/M.rm, register or memory
    Rm(RegKind, Mem),
    /// ModR/M.rm, memory only
    M(Mem),
    /// ModR/M.rm, register only
    RmReg(RegKind),
    /// VEX/EVEX/XOP vvvv
    Vvvv(RegKind),
    /// Low three opcode bits
    OpReg(RegKind),
    /// Register in the high nibble of a trailing imm8
    Is4(RegKind),
    Fixed(Register),
    /// Fixed register by operand size: 16, 32, 64.
    FixedOsz([Register; 3]),
    Imm(Imm),
    Rel(Rel),
    /// `ptr16:16` / `ptr16:32`
    FarPtr,
    /// Address-size absolute offset (`mov al, [moffs]`)
    Moffs(Mem),
    /// `seg:[rSI]`
    StrSrc(Mem),
    /// `es:[rDI]`
    StrDst(Mem),
    /// `seg:[rDI]`
    SegDi(Mem),
    /// `seg:[rBX+al]`
    Xlat,
    /// VSIB memory operand with a vector index
    Vsib(RegKind, Mem),
    /// Implicit immediate 1 (`shl r/m, 1`)
    Const1,
}

impl Op {
    const fn uses_modrm(&self) -> bool {
        matches!(
            self,
            Op::Reg(_) | Op::Rm(..) | Op::M(_) | Op::RmReg(_) | Op::Vsib(..)
        )
    }
}

/// Instruction template.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub table: Table,
    pub opcode: u8,
    pub code: Codes,
    pub prefix: PrefixSel,
    /// Required ModR/M.reg (opcode extension)
    pub reg: Option<u8>,
    /// Required ModR/M.rm; implies a register form
    pub rm: Option<u8>,
    pub form: Form,
    pub osz: SizeSel,
    pub asz: SizeSel,
    pub w: WSel,
    pub l: LSel,
    pub mode: ModeSel,
    pub ops: &'static [Op],
    pub flags: Flags,
    pub tuple: TupleType,
    modrm: bool,
}

impl Template {
    pub const fn new(table: Table, opcode: u8, code: Codes, ops: &'static [Op]) -> Self {
        let mut modrm = false;
        let mut form = Form::Any;
        let mut i = 0;
        while i < ops.len() {
            if ops[i].uses_modrm() {
                modrm = true;
            }
            match ops[i] {
                Op::M(_) | Op::Vsib(..) => form = Form::Mem,
                Op::RmReg(_) => form = Form::Reg,
                _ => {}
            }
            i += 1;
        }
        Self {
            table,
            opcode,
            code,
            prefix: PrefixSel::Any,
            reg: None,
            rm: None,
            form,
            osz: SizeSel::Any,
            asz: SizeSel::Any,
            w: WSel::Any,
            l: LSel::Any,
            mode: ModeSel::Any,
            ops,
            flags: Flags::empty(),
            tuple: TupleType::None,
            modrm,
        }
    }

    pub const fn np(mut self) -> Self {
        self.prefix = PrefixSel::NP;
        self
    }

    pub const fn p66(mut self) -> Self {
        self.prefix = PrefixSel::P66;
        self
    }

    /// Rejects F2/F3 but keeps 66 as operand size.
    pub const fn no_rep(mut self) -> Self {
        self.prefix = PrefixSel::NoRep;
        self
    }

    pub const fn pf3(mut self) -> Self {
        self.prefix = PrefixSel::PF3;
        self
    }

    pub const fn pf2(mut self) -> Self {
        self.prefix = PrefixSel::PF2;
        self
    }

    /// Requires ModR/M.reg == `reg`.
    pub const fn reg(mut self, reg: u8) -> Self {
        self.reg = Some(reg);
        self.modrm = true;
        self
    }

    /// Requires mod == 11 and ModR/M.rm == `rm`.
    pub const fn rm(mut self, rm: u8) -> Self {
        self.rm = Some(rm);
        self.form = Form::Reg;
        self.modrm = true;
        self
    }

    /// Requires a full ModR/M byte `C0..FF`.
    pub const fn modrm(self, byte: u8) -> Self {
        self.reg((byte >> 3) & 7).rm(byte & 7)
    }

    pub const fn regform(mut self) -> Self {
        self.form = Form::Reg;
        self
    }

    pub const fn o16(mut self) -> Self {
        self.osz = SizeSel::S16;
        self
    }

    pub const fn o32(mut self) -> Self {
        self.osz = SizeSel::S32;
        self
    }

    pub const fn o64(mut self) -> Self {
        self.osz = SizeSel::S64;
        self
    }

    pub const fn a16(mut self) -> Self {
        self.asz = SizeSel::S16;
        self
    }

    pub const fn a32(mut self) -> Self {
        self.asz = SizeSel::S32;
        self
    }

    pub const fn a64(mut self) -> Self {
        self.asz = SizeSel::S64;
        self
    }

    pub const fn w0(mut self) -> Self {
        self.w = WSel::W0;
        self
    }

    pub const fn w1(mut self) -> Self {
        self.w = WSel::W1;
        self
    }

    pub const fn l128(mut self) -> Self {
        self.l = LSel::L128;
        self
    }

    pub const fn l256(mut self) -> Self {
        self.l = LSel::L256;
        self
    }

    pub const fn l512(mut self) -> Self {
        self.l = LSel::L512;
        self
    }

    pub const fn only64(mut self) -> Self {
        self.mode = ModeSel::Only64;
        self
    }

    pub const fn not64(mut self) -> Self {
        self.mode = ModeSel::Not64;
        self
    }

    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    pub const fn tuple(mut self, tuple: TupleType) -> Self {
        self.tuple = tuple;
        self
    }

    /// True if the template consumes a ModR/M byte.
    pub fn needs_modrm(&self) -> bool {
        self.modrm
    }

    pub fn has_vvvv(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, Op::Vvvv(_)))
    }

    pub fn has_vsib(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, Op::Vsib(..)))
    }
}

/// Const helper: a single-code template.
pub(crate) const fn tpl(table: Table, opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    Template::new(table, opcode, Codes::One(code), ops)
}

/// Const helper: a template whose code depends on the operand size.
pub(crate) const fn tpl_osz(table: Table, opcode: u8, codes: [Code; 3], ops: &'static [Op]) -> Template {
    Template::new(table, opcode, Codes::Osz(codes), ops)
}

/// Const helper: a template whose code depends on the vector length.
pub(crate) const fn tpl_len(table: Table, opcode: u8, codes: [Code; 3], ops: &'static [Op]) -> Template {
    Template::new(table, opcode, Codes::Len(codes), ops)
}

/// Decoding state a template is matched against.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext {
    pub bitness: Bitness,
    pub mandatory: MandatoryPrefix,
    pub modrm: Option<ModRM>,
    /// A `66` prefix was seen.
    pub p66: bool,
    /// REX.W for legacy encodings, VEX/EVEX/XOP.W otherwise.
    pub w: bool,
    pub rex_b: bool,
    /// Effective address size in bits.
    pub address_size: u32,
    /// VEX.L / EVEX.L'L
    pub l: u8,
    /// EVEX.b with a register r/m
    pub evex_reg_bcst: bool,
    pub amd: bool,
}

impl MatchContext {
    /// Effective operand size for a template.
    pub fn operand_size(&self, t: &Template) -> u32 {
        let p66 = self.p66 && t.prefix != PrefixSel::P66;
        match self.bitness {
            Bitness::Bits64 => {
                if t.flags.contains(Flags::F64) {
                    if self.amd && p66 && !self.w {
                        16
                    } else {
                        64
                    }
                } else if self.w {
                    64
                } else if p66 {
                    16
                } else if t.flags.contains(Flags::D64) {
                    64
                } else {
                    32
                }
            }
            Bitness::Bits32 => {
                if p66 {
                    16
                } else {
                    32
                }
            }
            Bitness::Bits16 => {
                if p66 {
                    32
                } else {
                    16
                }
            }
        }
    }

    /// Effective vector length in bits, `None` for the reserved EVEX L'L=3.
    pub fn vector_len(&self, t: &Template) -> Option<u32> {
        if self.evex_reg_bcst && t.flags.intersects(Flags::ER.union(Flags::SAE)) {
            return Some(512);
        }
        match self.l {
            0 => Some(128),
            1 => Some(256),
            2 => Some(512),
            _ => None,
        }
    }
}

/// Result of a successful template lookup.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub template: &'static Template,
    pub code: Code,
    pub operand_size: u32,
    pub vector_len: u32,
}

fn size_index(bits: u32) -> usize {
    match bits {
        16 | 128 => 0,
        32 | 256 => 1,
        _ => 2,
    }
}

fn try_template(t: &'static Template, ctx: &MatchContext) -> Option<Selection> {
    let is64 = ctx.bitness.is_64();
    match t.mode {
        ModeSel::Only64 if !is64 => return None,
        ModeSel::Not64 if is64 => return None,
        _ => {}
    }
    if t.flags.contains(Flags::NO_REX_B) && ctx.rex_b {
        return None;
    }

    if let Some(modrm) = ctx.modrm {
        if t.reg.is_some_and(|reg| reg != modrm.reg) {
            return None;
        }
        if t.rm.is_some_and(|rm| rm != modrm.rm || !modrm.is_register()) {
            return None;
        }
        if !t.flags.contains(Flags::FORCE_REG) {
            match t.form {
                Form::Mem if modrm.is_register() => return None,
                Form::Reg if !modrm.is_register() => return None,
                _ => {}
            }
        }
    }

    match t.w {
        WSel::W0 if ctx.w => return None,
        WSel::W1 if !ctx.w => return None,
        _ => {}
    }

    let operand_size = ctx.operand_size(t);
    if !t.osz.matches(operand_size) || !t.asz.matches(ctx.address_size) {
        return None;
    }

    let vector_len = ctx.vector_len(t)?;
    let l_ok = match t.l {
        LSel::Any => true,
        LSel::L128 => vector_len == 128,
        LSel::L256 => vector_len == 256,
        LSel::L512 => vector_len == 512,
    };
    if !l_ok {
        return None;
    }

    let code = match t.code {
        Codes::One(code) => code,
        Codes::Osz(codes) => codes[size_index(operand_size)],
        Codes::Len(codes) => codes[size_index(vector_len)],
    };
    if code.is_invalid() {
        return None;
    }

    Some(Selection {
        template: t,
        code,
        operand_size,
        vector_len,
    })
}

/// Finds the template that applies to `(table, opcode)` in the given
/// context.
///
/// Templates whose mandatory prefix accepts the context's candidate are
/// tried first, then prefix-agnostic ones; within each pass the first
/// template whose predicates all hold wins.
pub fn lookup(table: Table, opcode: u8, ctx: &MatchContext) -> Option<Selection> {
    let bucket = INDEX.bucket(table, opcode);
    bucket
        .iter()
        .filter(|t| t.prefix.matches(ctx.mandatory))
        .find_map(|t| try_template(t, ctx))
        .or_else(|| {
            bucket
                .iter()
                .filter(|t| t.prefix == PrefixSel::Any)
                .find_map(|t| try_template(t, ctx))
        })
}

/// True if any template at `(table, opcode)` consumes a ModR/M byte.
pub fn needs_modrm(table: Table, opcode: u8) -> bool {
    INDEX.buckets[bucket_key(table, opcode)].modrm
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    start: u32,
    len: u16,
    modrm: bool,
}

struct Index {
    templates: Vec<&'static Template>,
    buckets: Vec<Bucket>,
}

static INDEX: Lazy<Index> = Lazy::new(Index::build);

fn bucket_key(table: Table, opcode: u8) -> usize {
    table as usize * 256 + opcode as usize
}

impl Index {
    fn build() -> Self {
        let mut templates: Vec<&'static Template> = legacy::TEMPLATES
            .iter()
            .chain(x87::TEMPLATES)
            .chain(map_0f::TEMPLATES)
            .chain(map_0f38::TEMPLATES)
            .chain(map_0f3a::TEMPLATES)
            .chain(d3now::TEMPLATES)
            .chain(vex::TEMPLATES)
            .chain(evex::TEMPLATES)
            .chain(xop::TEMPLATES)
            .collect();
        // Stable: declaration order is preserved inside a bucket.
        templates.sort_by_key(|t| bucket_key(t.table, t.opcode));

        let mut buckets = vec![Bucket::default(); TABLE_COUNT * 256];
        for (i, t) in templates.iter().enumerate() {
            let bucket = &mut buckets[bucket_key(t.table, t.opcode)];
            if bucket.len == 0 {
                bucket.start = i as u32;
            }
            bucket.len += 1;
            bucket.modrm |= t.needs_modrm();
        }

        log::debug!(
            "built x86 opcode index: {} templates, {} opcodes",
            templates.len(),
            buckets.iter().filter(|b| b.len != 0).count()
        );
        Self { templates, buckets }
    }

    fn bucket(&self, table: Table, opcode: u8) -> &[&'static Template] {
        let b = self.buckets[bucket_key(table, opcode)];
        let start = b.start as usize;
        &self.templates[start..start + b.len as usize]
    }
}

/// Shorthand operand constants shared by the table files.
pub(crate) mod ops {
    use super::{Imm, Mem, Op, Rel, RegKind};
    use xdis_core::{MemorySize as MS, Register as R};

    pub const OSZ_INT: Mem = Mem::Osz([MS::UInt16, MS::UInt32, MS::UInt64]);

    pub const Eb: Op = Op::Rm(RegKind::Gpr8, Mem::Fixed(MS::UInt8));
    pub const Ew: Op = Op::Rm(RegKind::Gpr16, Mem::Fixed(MS::UInt16));
    pub const Ed: Op = Op::Rm(RegKind::Gpr32, Mem::Fixed(MS::UInt32));
    pub const E64: Op = Op::Rm(RegKind::Gpr64, Mem::Fixed(MS::UInt64));
    pub const Ev: Op = Op::Rm(RegKind::GprOsz, OSZ_INT);
    pub const Gb: Op = Op::Reg(RegKind::Gpr8);
    pub const Gw: Op = Op::Reg(RegKind::Gpr16);
    pub const Gd: Op = Op::Reg(RegKind::Gpr32);
    pub const Gq: Op = Op::Reg(RegKind::Gpr64);
    pub const Gv: Op = Op::Reg(RegKind::GprOsz);
    pub const Rv: Op = Op::RmReg(RegKind::GprOsz);
    pub const Zv: Op = Op::OpReg(RegKind::GprOsz);

    pub const Ib: Op = Op::Imm(Imm::Ib);
    pub const Ib2: Op = Op::Imm(Imm::Ib2);
    pub const Iw: Op = Op::Imm(Imm::Iw);
    pub const Iz: Op = Op::Imm(Imm::Iz);
    pub const Iv: Op = Op::Imm(Imm::Iv);
    pub const Ibs: Op = Op::Imm(Imm::Ibs);
    pub const Jb: Op = Op::Rel(Rel::Jb);
    pub const Jz: Op = Op::Rel(Rel::Jz);

    pub const AL: Op = Op::Fixed(R::AL);
    pub const CL: Op = Op::Fixed(R::CL);
    pub const DX: Op = Op::Fixed(R::DX);
    pub const rAX: Op = Op::FixedOsz([R::AX, R::EAX, R::RAX]);

    pub const Pq: Op = Op::Reg(RegKind::Mmx);
    pub const Qq: Op = Op::Rm(RegKind::Mmx, Mem::Fixed(MS::UInt64));
    pub const Nq: Op = Op::RmReg(RegKind::Mmx);
    pub const Vx: Op = Op::Reg(RegKind::Xmm);
    pub const Ux: Op = Op::RmReg(RegKind::Xmm);
    pub const Wx: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::UInt128));

    /// xmm/m128 with an element-typed memory size.
    const fn wx(size: MS) -> Op {
        Op::Rm(RegKind::Xmm, Mem::Fixed(size))
    }

    /// mm/mem with an element-typed memory size.
    const fn qq(size: MS) -> Op {
        Op::Rm(RegKind::Mmx, Mem::Fixed(size))
    }

    const fn m(size: MS) -> Op {
        Op::M(Mem::Fixed(size))
    }

    pub const Qdb: Op = qq(MS::Packed32_Int8);
    pub const Qdw: Op = qq(MS::Packed32_Int16);
    pub const Qdi: Op = qq(MS::Int32);
    pub const Qpb: Op = qq(MS::Packed64_Int8);
    pub const Qpub: Op = qq(MS::Packed64_UInt8);
    pub const Qpw: Op = qq(MS::Packed64_Int16);
    pub const Qpuw: Op = qq(MS::Packed64_UInt16);
    pub const Qpi: Op = qq(MS::Packed64_Int32);
    pub const Qpud: Op = qq(MS::Packed64_UInt32);
    pub const Qpf: Op = qq(MS::Packed64_Float32);
    pub const Qsq: Op = qq(MS::Int64);

    pub const Wpb: Op = wx(MS::Packed128_Int8);
    pub const Wpub: Op = wx(MS::Packed128_UInt8);
    pub const Wpw: Op = wx(MS::Packed128_Int16);
    pub const Wpuw: Op = wx(MS::Packed128_UInt16);
    pub const Wdq: Op = wx(MS::Packed128_Int32);
    pub const Wpud: Op = wx(MS::Packed128_UInt32);
    pub const Wpq: Op = wx(MS::Packed128_Int64);
    pub const Wpuq: Op = wx(MS::Packed128_UInt64);
    pub const Wps: Op = wx(MS::Packed128_Float32);
    pub const Wpd: Op = wx(MS::Packed128_Float64);

    pub const Mpf: Op = m(MS::Packed64_Float32);
    pub const Mpi: Op = m(MS::Packed64_Int32);
    pub const Msd: Op = m(MS::Float64);
    pub const Mdqi: Op = m(MS::Packed128_Int32);

    /// Signed integer sources of the int-to-float conversions.
    pub const Edi: Op = Op::Rm(RegKind::Gpr32, Mem::Fixed(MS::Int32));
    pub const Eqi: Op = Op::Rm(RegKind::Gpr64, Mem::Fixed(MS::Int64));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx64() -> MatchContext {
        MatchContext {
            bitness: Bitness::Bits64,
            mandatory: MandatoryPrefix::None,
            modrm: None,
            p66: false,
            w: false,
            rex_b: false,
            address_size: 64,
            l: 0,
            evex_reg_bcst: false,
            amd: false,
        }
    }

    #[test]
    fn test_every_template_is_indexed() {
        let total = legacy::TEMPLATES.len()
            + x87::TEMPLATES.len()
            + map_0f::TEMPLATES.len()
            + map_0f38::TEMPLATES.len()
            + map_0f3a::TEMPLATES.len()
            + d3now::TEMPLATES.len()
            + vex::TEMPLATES.len()
            + evex::TEMPLATES.len()
            + xop::TEMPLATES.len();
        assert_eq!(INDEX.templates.len(), total);
        let bucketed: usize = INDEX.buckets.iter().map(|b| b.len as usize).sum();
        assert_eq!(bucketed, total);
    }

    #[test]
    fn test_modrm_consistent_within_bucket() {
        // A bucket that mixes ModR/M and non-ModR/M templates would make
        // the ModR/M read depend on template order.
        for table_opcode in 0..TABLE_COUNT * 256 {
            let b = INDEX.buckets[table_opcode];
            let start = b.start as usize;
            let templates = &INDEX.templates[start..start + b.len as usize];
            let with = templates.iter().filter(|t| t.needs_modrm()).count();
            assert!(
                with == 0 || with == templates.len(),
                "mixed ModR/M bucket {:?} {:#04x}",
                templates[0].table,
                templates[0].opcode
            );
        }
    }

    #[test]
    fn test_lookup_prefers_exact_prefix() {
        let mut ctx = ctx64();
        ctx.mandatory = MandatoryPrefix::PF3;
        let sel = lookup(Table::Legacy, 0x90, &ctx).unwrap();
        assert_eq!(sel.code, Code::Pause);

        ctx.mandatory = MandatoryPrefix::None;
        let sel = lookup(Table::Legacy, 0x90, &ctx).unwrap();
        assert_eq!(sel.code, Code::Nopd);

        ctx.rex_b = true;
        let sel = lookup(Table::Legacy, 0x90, &ctx).unwrap();
        assert_eq!(sel.code, Code::Xchg_r32_EAX);

        // F3 41 90 is still pause
        ctx.mandatory = MandatoryPrefix::PF3;
        let sel = lookup(Table::Legacy, 0x90, &ctx).unwrap();
        assert_eq!(sel.code, Code::Pause);
    }

    #[test]
    fn test_no_rep_keeps_66_as_operand_size() {
        let mut ctx = ctx64();
        ctx.modrm = Some(ModRM::parse(0xF0));
        ctx.mandatory = MandatoryPrefix::P66;
        ctx.p66 = true;
        let sel = lookup(Table::Legacy0F, 0xC7, &ctx).unwrap();
        assert_eq!(sel.code, Code::Rdrand_r16);

        ctx.mandatory = MandatoryPrefix::PF2;
        ctx.p66 = false;
        assert!(lookup(Table::Legacy0F, 0xC7, &ctx).is_none());

        ctx.mandatory = MandatoryPrefix::PF3;
        assert!(lookup(Table::Legacy0F, 0xC7, &ctx).is_none());
    }

    #[test]
    fn test_operand_size_rules() {
        let mut ctx = ctx64();
        let push = lookup(Table::Legacy, 0x50, &ctx).unwrap();
        assert_eq!(push.operand_size, 64);
        ctx.p66 = true;
        assert_eq!(ctx.operand_size(push.template), 16);
        ctx.w = true;
        assert_eq!(ctx.operand_size(push.template), 64);

        let mut ctx = ctx64();
        ctx.p66 = true;
        let jmp = lookup(Table::Legacy, 0xE9, &ctx).unwrap();
        assert_eq!(jmp.operand_size, 64);
        ctx.amd = true;
        assert_eq!(ctx.operand_size(jmp.template), 16);
    }

    #[test]
    fn test_disp8_scale() {
        assert_eq!(TupleType::Full32.disp8_scale(512, false), 64);
        assert_eq!(TupleType::Full32.disp8_scale(512, true), 4);
        assert_eq!(TupleType::Full64.disp8_scale(256, true), 8);
        assert_eq!(TupleType::Half32.disp8_scale(256, false), 16);
        assert_eq!(TupleType::Fixed(8).disp8_scale(128, false), 8);
        assert_eq!(TupleType::Movddup.disp8_scale(128, false), 8);
        assert_eq!(TupleType::Movddup.disp8_scale(512, false), 64);
        assert_eq!(TupleType::None.disp8_scale(512, false), 1);
    }
}
