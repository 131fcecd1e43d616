//! x86/x64 register representation.
//!
//! Registers are a flat enum whose discriminants are laid out class by
//! class, so "register N of class C" is `C`'s first register plus `N`.

/// Register class (general purpose, vector, segment, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegisterClass {
    /// No register.
    None,
    /// 8-bit general purpose register (al, ah, spl, r8l, ...)
    Gpr8,
    /// 16-bit general purpose register
    Gpr16,
    /// 32-bit general purpose register
    Gpr32,
    /// 64-bit general purpose register
    Gpr64,
    /// Instruction pointer (eip, rip)
    Ip,
    /// Segment register (es, cs, ...)
    Segment,
    /// 128-bit vector register
    Xmm,
    /// 256-bit vector register
    Ymm,
    /// 512-bit vector register
    Zmm,
    /// AVX-512 opmask register
    Mask,
    /// Control register (cr0, ...)
    Control,
    /// Debug register (dr0, ...)
    Debug,
    /// x87 stack register
    St,
    /// MMX register
    Mmx,
    /// Test register (tr0, ...)
    Test,
    /// MPX bound register
    Bound,
}

macro_rules! registers {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// An x86/x64 register.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        #[allow(missing_docs)]
        pub enum Register {
            #[default]
            None,
            $($variant,)*
        }

        const ALL: &[Register] = &[Register::None, $(Register::$variant,)*];
        const NAMES: &[&str] = &["", $($name,)*];
    };
}

registers! {
    AL => "al", CL => "cl", DL => "dl", BL => "bl",
    AH => "ah", CH => "ch", DH => "dh", BH => "bh",
    SPL => "spl", BPL => "bpl", SIL => "sil", DIL => "dil",
    R8L => "r8b", R9L => "r9b", R10L => "r10b", R11L => "r11b",
    R12L => "r12b", R13L => "r13b", R14L => "r14b", R15L => "r15b",

    AX => "ax", CX => "cx", DX => "dx", BX => "bx",
    SP => "sp", BP => "bp", SI => "si", DI => "di",
    R8W => "r8w", R9W => "r9w", R10W => "r10w", R11W => "r11w",
    R12W => "r12w", R13W => "r13w", R14W => "r14w", R15W => "r15w",

    EAX => "eax", ECX => "ecx", EDX => "edx", EBX => "ebx",
    ESP => "esp", EBP => "ebp", ESI => "esi", EDI => "edi",
    R8D => "r8d", R9D => "r9d", R10D => "r10d", R11D => "r11d",
    R12D => "r12d", R13D => "r13d", R14D => "r14d", R15D => "r15d",

    RAX => "rax", RCX => "rcx", RDX => "rdx", RBX => "rbx",
    RSP => "rsp", RBP => "rbp", RSI => "rsi", RDI => "rdi",
    R8 => "r8", R9 => "r9", R10 => "r10", R11 => "r11",
    R12 => "r12", R13 => "r13", R14 => "r14", R15 => "r15",

    EIP => "eip", RIP => "rip",

    ES => "es", CS => "cs", SS => "ss", DS => "ds", FS => "fs", GS => "gs",

    XMM0 => "xmm0", XMM1 => "xmm1", XMM2 => "xmm2", XMM3 => "xmm3",
    XMM4 => "xmm4", XMM5 => "xmm5", XMM6 => "xmm6", XMM7 => "xmm7",
    XMM8 => "xmm8", XMM9 => "xmm9", XMM10 => "xmm10", XMM11 => "xmm11",
    XMM12 => "xmm12", XMM13 => "xmm13", XMM14 => "xmm14", XMM15 => "xmm15",
    XMM16 => "xmm16", XMM17 => "xmm17", XMM18 => "xmm18", XMM19 => "xmm19",
    XMM20 => "xmm20", XMM21 => "xmm21", XMM22 => "xmm22", XMM23 => "xmm23",
    XMM24 => "xmm24", XMM25 => "xmm25", XMM26 => "xmm26", XMM27 => "xmm27",
    XMM28 => "xmm28", XMM29 => "xmm29", XMM30 => "xmm30", XMM31 => "xmm31",

    YMM0 => "ymm0", YMM1 => "ymm1", YMM2 => "ymm2", YMM3 => "ymm3",
    YMM4 => "ymm4", YMM5 => "ymm5", YMM6 => "ymm6", YMM7 => "ymm7",
    YMM8 => "ymm8", YMM9 => "ymm9", YMM10 => "ymm10", YMM11 => "ymm11",
    YMM12 => "ymm12", YMM13 => "ymm13", YMM14 => "ymm14", YMM15 => "ymm15",
    YMM16 => "ymm16", YMM17 => "ymm17", YMM18 => "ymm18", YMM19 => "ymm19",
    YMM20 => "ymm20", YMM21 => "ymm21", YMM22 => "ymm22", YMM23 => "ymm23",
    YMM24 => "ymm24", YMM25 => "ymm25", YMM26 => "ymm26", YMM27 => "ymm27",
    YMM28 => "ymm28", YMM29 => "ymm29", YMM30 => "ymm30", YMM31 => "ymm31",

    ZMM0 => "zmm0", ZMM1 => "zmm1", ZMM2 => "zmm2", ZMM3 => "zmm3",
    ZMM4 => "zmm4", ZMM5 => "zmm5", ZMM6 => "zmm6", ZMM7 => "zmm7",
    ZMM8 => "zmm8", ZMM9 => "zmm9", ZMM10 => "zmm10", ZMM11 => "zmm11",
    ZMM12 => "zmm12", ZMM13 => "zmm13", ZMM14 => "zmm14", ZMM15 => "zmm15",
    ZMM16 => "zmm16", ZMM17 => "zmm17", ZMM18 => "zmm18", ZMM19 => "zmm19",
    ZMM20 => "zmm20", ZMM21 => "zmm21", ZMM22 => "zmm22", ZMM23 => "zmm23",
    ZMM24 => "zmm24", ZMM25 => "zmm25", ZMM26 => "zmm26", ZMM27 => "zmm27",
    ZMM28 => "zmm28", ZMM29 => "zmm29", ZMM30 => "zmm30", ZMM31 => "zmm31",

    K0 => "k0", K1 => "k1", K2 => "k2", K3 => "k3",
    K4 => "k4", K5 => "k5", K6 => "k6", K7 => "k7",

    CR0 => "cr0", CR1 => "cr1", CR2 => "cr2", CR3 => "cr3",
    CR4 => "cr4", CR5 => "cr5", CR6 => "cr6", CR7 => "cr7",
    CR8 => "cr8", CR9 => "cr9", CR10 => "cr10", CR11 => "cr11",
    CR12 => "cr12", CR13 => "cr13", CR14 => "cr14", CR15 => "cr15",

    DR0 => "dr0", DR1 => "dr1", DR2 => "dr2", DR3 => "dr3",
    DR4 => "dr4", DR5 => "dr5", DR6 => "dr6", DR7 => "dr7",
    DR8 => "dr8", DR9 => "dr9", DR10 => "dr10", DR11 => "dr11",
    DR12 => "dr12", DR13 => "dr13", DR14 => "dr14", DR15 => "dr15",

    ST0 => "st(0)", ST1 => "st(1)", ST2 => "st(2)", ST3 => "st(3)",
    ST4 => "st(4)", ST5 => "st(5)", ST6 => "st(6)", ST7 => "st(7)",

    MM0 => "mm0", MM1 => "mm1", MM2 => "mm2", MM3 => "mm3",
    MM4 => "mm4", MM5 => "mm5", MM6 => "mm6", MM7 => "mm7",

    TR0 => "tr0", TR1 => "tr1", TR2 => "tr2", TR3 => "tr3",
    TR4 => "tr4", TR5 => "tr5", TR6 => "tr6", TR7 => "tr7",

    BND0 => "bnd0", BND1 => "bnd1", BND2 => "bnd2", BND3 => "bnd3",
}

impl Register {
    /// Returns the register `index` places after `self`, or `None` if the
    /// result would leave the register's class.
    fn offset(self, index: u8, class_len: u8) -> Register {
        if index >= class_len {
            return Register::None;
        }
        ALL.get(self as usize + index as usize)
            .copied()
            .unwrap_or(Register::None)
    }

    /// 8-bit GPR from a 4-bit encoded index.
    ///
    /// Without a REX prefix, indices 4..7 select AH/CH/DH/BH. With any REX
    /// prefix (even `0x40`) they select SPL/BPL/SIL/DIL.
    pub fn gpr8(index: u8, has_rex: bool) -> Register {
        if has_rex && index >= 4 {
            Register::AL.offset(index + 4, 20)
        } else if index < 8 {
            Register::AL.offset(index, 8)
        } else {
            Register::None
        }
    }

    /// 16-bit GPR by encoded index (0..15).
    pub fn gpr16(index: u8) -> Register {
        Register::AX.offset(index, 16)
    }

    /// 32-bit GPR by encoded index (0..15).
    pub fn gpr32(index: u8) -> Register {
        Register::EAX.offset(index, 16)
    }

    /// 64-bit GPR by encoded index (0..15).
    pub fn gpr64(index: u8) -> Register {
        Register::RAX.offset(index, 16)
    }

    /// Segment register by encoded index (ES, CS, SS, DS, FS, GS).
    pub fn segment(index: u8) -> Register {
        Register::ES.offset(index, 6)
    }

    pub fn xmm(index: u8) -> Register {
        Register::XMM0.offset(index, 32)
    }

    pub fn ymm(index: u8) -> Register {
        Register::YMM0.offset(index, 32)
    }

    pub fn zmm(index: u8) -> Register {
        Register::ZMM0.offset(index, 32)
    }

    pub fn k(index: u8) -> Register {
        Register::K0.offset(index, 8)
    }

    pub fn cr(index: u8) -> Register {
        Register::CR0.offset(index, 16)
    }

    pub fn dr(index: u8) -> Register {
        Register::DR0.offset(index, 16)
    }

    pub fn st(index: u8) -> Register {
        Register::ST0.offset(index, 8)
    }

    pub fn mm(index: u8) -> Register {
        Register::MM0.offset(index, 8)
    }

    pub fn tr(index: u8) -> Register {
        Register::TR0.offset(index, 8)
    }

    pub fn bnd(index: u8) -> Register {
        Register::BND0.offset(index, 4)
    }

    /// Returns the class of this register.
    pub fn class(&self) -> RegisterClass {
        use Register as R;
        match *self {
            R::None => RegisterClass::None,
            r if (R::AL..=R::R15L).contains(&r) => RegisterClass::Gpr8,
            r if (R::AX..=R::R15W).contains(&r) => RegisterClass::Gpr16,
            r if (R::EAX..=R::R15D).contains(&r) => RegisterClass::Gpr32,
            r if (R::RAX..=R::R15).contains(&r) => RegisterClass::Gpr64,
            R::EIP | R::RIP => RegisterClass::Ip,
            r if (R::ES..=R::GS).contains(&r) => RegisterClass::Segment,
            r if (R::XMM0..=R::XMM31).contains(&r) => RegisterClass::Xmm,
            r if (R::YMM0..=R::YMM31).contains(&r) => RegisterClass::Ymm,
            r if (R::ZMM0..=R::ZMM31).contains(&r) => RegisterClass::Zmm,
            r if (R::K0..=R::K7).contains(&r) => RegisterClass::Mask,
            r if (R::CR0..=R::CR15).contains(&r) => RegisterClass::Control,
            r if (R::DR0..=R::DR15).contains(&r) => RegisterClass::Debug,
            r if (R::ST0..=R::ST7).contains(&r) => RegisterClass::St,
            r if (R::MM0..=R::MM7).contains(&r) => RegisterClass::Mmx,
            r if (R::TR0..=R::TR7).contains(&r) => RegisterClass::Test,
            _ => RegisterClass::Bound,
        }
    }

    /// First register of this register's class.
    fn class_base(&self) -> Register {
        use Register as R;
        match self.class() {
            RegisterClass::None => R::None,
            RegisterClass::Gpr8 => R::AL,
            RegisterClass::Gpr16 => R::AX,
            RegisterClass::Gpr32 => R::EAX,
            RegisterClass::Gpr64 => R::RAX,
            RegisterClass::Ip => R::EIP,
            RegisterClass::Segment => R::ES,
            RegisterClass::Xmm => R::XMM0,
            RegisterClass::Ymm => R::YMM0,
            RegisterClass::Zmm => R::ZMM0,
            RegisterClass::Mask => R::K0,
            RegisterClass::Control => R::CR0,
            RegisterClass::Debug => R::DR0,
            RegisterClass::St => R::ST0,
            RegisterClass::Mmx => R::MM0,
            RegisterClass::Test => R::TR0,
            RegisterClass::Bound => R::BND0,
        }
    }

    /// Index of the register within its class (`xmm7` -> 7, `r9d` -> 9).
    ///
    /// For 8-bit registers this is the position in the flat list
    /// `al..bh, spl..dil, r8b..r15b`, not the encoded index.
    pub fn number(&self) -> usize {
        *self as usize - self.class_base() as usize
    }

    /// Size of the register in bytes.
    pub fn size(&self) -> usize {
        match self.class() {
            RegisterClass::None => 0,
            RegisterClass::Gpr8 => 1,
            RegisterClass::Gpr16 | RegisterClass::Segment => 2,
            RegisterClass::Gpr32 | RegisterClass::Test => 4,
            RegisterClass::Gpr64 | RegisterClass::Mask | RegisterClass::Mmx => 8,
            RegisterClass::Control | RegisterClass::Debug => 8,
            RegisterClass::Ip => {
                if *self == Register::EIP {
                    4
                } else {
                    8
                }
            }
            RegisterClass::Xmm | RegisterClass::Bound => 16,
            RegisterClass::Ymm => 32,
            RegisterClass::Zmm => 64,
            RegisterClass::St => 10,
        }
    }

    /// Returns the largest register that contains this one.
    ///
    /// GPRs map to their 64-bit parent (`ah` -> `rax`), vector registers
    /// to their ZMM parent, everything else to itself.
    pub fn full_register(&self) -> Register {
        let n = self.number() as u8;
        match self.class() {
            // al..bl, then ah..bh / spl..dil / r8b.. sit four places later
            RegisterClass::Gpr8 if n < 4 => Register::gpr64(n),
            RegisterClass::Gpr8 => Register::gpr64(n - 4),
            RegisterClass::Gpr16 | RegisterClass::Gpr32 | RegisterClass::Gpr64 => {
                Register::gpr64(n)
            }
            RegisterClass::Ip => Register::RIP,
            RegisterClass::Xmm | RegisterClass::Ymm | RegisterClass::Zmm => Register::zmm(n),
            _ => *self,
        }
    }

    /// Returns true for any general purpose register.
    pub fn is_gpr(&self) -> bool {
        matches!(
            self.class(),
            RegisterClass::Gpr8 | RegisterClass::Gpr16 | RegisterClass::Gpr32 | RegisterClass::Gpr64
        )
    }

    /// Returns true for XMM, YMM and ZMM registers.
    pub fn is_vector(&self) -> bool {
        matches!(
            self.class(),
            RegisterClass::Xmm | RegisterClass::Ymm | RegisterClass::Zmm
        )
    }

    /// Returns the canonical lower-case name for this register.
    pub fn name(&self) -> &'static str {
        NAMES.get(*self as usize).copied().unwrap_or("")
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpr8_high_byte_rule() {
        assert_eq!(Register::gpr8(4, false), Register::AH);
        assert_eq!(Register::gpr8(7, false), Register::BH);
        assert_eq!(Register::gpr8(4, true), Register::SPL);
        assert_eq!(Register::gpr8(7, true), Register::DIL);
        assert_eq!(Register::gpr8(0, true), Register::AL);
        assert_eq!(Register::gpr8(8, true), Register::R8L);
        assert_eq!(Register::gpr8(15, true), Register::R15L);
    }

    #[test]
    fn test_class_and_size() {
        assert_eq!(Register::R15D.class(), RegisterClass::Gpr32);
        assert_eq!(Register::R15D.size(), 4);
        assert_eq!(Register::XMM31.class(), RegisterClass::Xmm);
        assert_eq!(Register::ZMM3.size(), 64);
        assert_eq!(Register::ST7.class(), RegisterClass::St);
        assert_eq!(Register::BND3.class(), RegisterClass::Bound);
        assert_eq!(Register::None.size(), 0);
    }

    #[test]
    fn test_number() {
        assert_eq!(Register::R9.number(), 9);
        assert_eq!(Register::XMM12.number(), 12);
        assert_eq!(Register::K5.number(), 5);
        assert_eq!(Register::GS.number(), 5);
    }

    #[test]
    fn test_out_of_class_index() {
        assert_eq!(Register::segment(6), Register::None);
        assert_eq!(Register::k(8), Register::None);
        assert_eq!(Register::gpr8(8, false), Register::None);
    }

    #[test]
    fn test_full_register() {
        assert_eq!(Register::AH.full_register(), Register::RAX);
        assert_eq!(Register::DIL.full_register(), Register::RDI);
        assert_eq!(Register::R10L.full_register(), Register::R10);
        assert_eq!(Register::YMM7.full_register(), Register::ZMM7);
    }

    #[test]
    fn test_names() {
        assert_eq!(Register::R8L.name(), "r8b");
        assert_eq!(Register::ST0.to_string(), "st(0)");
        assert_eq!(Register::XMM16.name(), "xmm16");
    }
}
