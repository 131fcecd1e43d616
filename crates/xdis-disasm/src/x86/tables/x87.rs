//! x87 FPU escape opcodes (D8..DF).
//!
//! With a memory ModR/M the reg field selects the instruction. With
//! mod=11 the reg field selects a family operating on ST(i), or the whole
//! ModR/M byte selects a no-operand instruction.

use super::{tpl, tpl_osz, Mem, Op, RegKind, Table, Template};
use xdis_core::Code::{self, *};
use xdis_core::{MemorySize as MS, Register as R};

const fn t(opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(Table::Legacy, opcode, code, ops)
}

const fn v(opcode: u8, codes: [Code; 3], ops: &'static [Op]) -> Template {
    tpl_osz(Table::Legacy, opcode, codes, ops)
}

const ST0: Op = Op::Fixed(R::ST0);
const STi: Op = Op::RmReg(RegKind::St);
const AX: Op = Op::Fixed(R::AX);
const M32fp: Op = Op::M(Mem::Fixed(MS::Float32));
const M64fp: Op = Op::M(Mem::Fixed(MS::Float64));
const M80fp: Op = Op::M(Mem::Fixed(MS::Float80));
const M16int: Op = Op::M(Mem::Fixed(MS::Int16));
const M32int: Op = Op::M(Mem::Fixed(MS::Int32));
const M64int: Op = Op::M(Mem::Fixed(MS::Int64));
const M80bcd: Op = Op::M(Mem::Fixed(MS::Bcd));
const M2byte: Op = Op::M(Mem::Fixed(MS::UInt16));
const Menv: Op = Op::M(Mem::Osz([MS::FpuEnv14, MS::FpuEnv28, MS::FpuEnv28]));
const Mstate: Op = Op::M(Mem::Osz([MS::FpuState94, MS::FpuState108, MS::FpuState108]));

pub(super) static TEMPLATES: &[Template] = &[
    // D8
    t(0xD8, Fadd_m32fp, &[M32fp]).reg(0),
    t(0xD8, Fmul_m32fp, &[M32fp]).reg(1),
    t(0xD8, Fcom_m32fp, &[M32fp]).reg(2),
    t(0xD8, Fcomp_m32fp, &[M32fp]).reg(3),
    t(0xD8, Fsub_m32fp, &[M32fp]).reg(4),
    t(0xD8, Fsubr_m32fp, &[M32fp]).reg(5),
    t(0xD8, Fdiv_m32fp, &[M32fp]).reg(6),
    t(0xD8, Fdivr_m32fp, &[M32fp]).reg(7),
    t(0xD8, Fadd_st0_sti, &[ST0, STi]).reg(0),
    t(0xD8, Fmul_st0_sti, &[ST0, STi]).reg(1),
    t(0xD8, Fcom_st0_sti, &[ST0, STi]).reg(2),
    t(0xD8, Fcomp_st0_sti, &[ST0, STi]).reg(3),
    t(0xD8, Fsub_st0_sti, &[ST0, STi]).reg(4),
    t(0xD8, Fsubr_st0_sti, &[ST0, STi]).reg(5),
    t(0xD8, Fdiv_st0_sti, &[ST0, STi]).reg(6),
    t(0xD8, Fdivr_st0_sti, &[ST0, STi]).reg(7),
    // D9
    t(0xD9, Fld_m32fp, &[M32fp]).reg(0),
    t(0xD9, Fst_m32fp, &[M32fp]).reg(2),
    t(0xD9, Fstp_m32fp, &[M32fp]).reg(3),
    v(0xD9, [Fldenv_m14byte, Fldenv_m28byte, Fldenv_m28byte], &[Menv]).reg(4),
    t(0xD9, Fldcw_m2byte, &[M2byte]).reg(5),
    v(0xD9, [Fnstenv_m14byte, Fnstenv_m28byte, Fnstenv_m28byte], &[Menv]).reg(6),
    t(0xD9, Fnstcw_m2byte, &[M2byte]).reg(7),
    t(0xD9, Fld_st0_sti, &[ST0, STi]).reg(0),
    t(0xD9, Fxch_st0_sti, &[ST0, STi]).reg(1),
    t(0xD9, Fnop, &[]).modrm(0xD0),
    t(0xD9, Fstpnce_sti, &[STi]).reg(3),
    t(0xD9, Fchs, &[]).modrm(0xE0),
    t(0xD9, Fabs, &[]).modrm(0xE1),
    t(0xD9, Ftst, &[]).modrm(0xE4),
    t(0xD9, Fxam, &[]).modrm(0xE5),
    t(0xD9, Fld1, &[]).modrm(0xE8),
    t(0xD9, Fldl2t, &[]).modrm(0xE9),
    t(0xD9, Fldl2e, &[]).modrm(0xEA),
    t(0xD9, Fldpi, &[]).modrm(0xEB),
    t(0xD9, Fldlg2, &[]).modrm(0xEC),
    t(0xD9, Fldln2, &[]).modrm(0xED),
    t(0xD9, Fldz, &[]).modrm(0xEE),
    t(0xD9, F2xm1, &[]).modrm(0xF0),
    t(0xD9, Fyl2x, &[]).modrm(0xF1),
    t(0xD9, Fptan, &[]).modrm(0xF2),
    t(0xD9, Fpatan, &[]).modrm(0xF3),
    t(0xD9, Fxtract, &[]).modrm(0xF4),
    t(0xD9, Fprem1, &[]).modrm(0xF5),
    t(0xD9, Fdecstp, &[]).modrm(0xF6),
    t(0xD9, Fincstp, &[]).modrm(0xF7),
    t(0xD9, Fprem, &[]).modrm(0xF8),
    t(0xD9, Fyl2xp1, &[]).modrm(0xF9),
    t(0xD9, Fsqrt, &[]).modrm(0xFA),
    t(0xD9, Fsincos, &[]).modrm(0xFB),
    t(0xD9, Frndint, &[]).modrm(0xFC),
    t(0xD9, Fscale, &[]).modrm(0xFD),
    t(0xD9, Fsin, &[]).modrm(0xFE),
    t(0xD9, Fcos, &[]).modrm(0xFF),
    // DA
    t(0xDA, Fiadd_m32int, &[M32int]).reg(0),
    t(0xDA, Fimul_m32int, &[M32int]).reg(1),
    t(0xDA, Ficom_m32int, &[M32int]).reg(2),
    t(0xDA, Ficomp_m32int, &[M32int]).reg(3),
    t(0xDA, Fisub_m32int, &[M32int]).reg(4),
    t(0xDA, Fisubr_m32int, &[M32int]).reg(5),
    t(0xDA, Fidiv_m32int, &[M32int]).reg(6),
    t(0xDA, Fidivr_m32int, &[M32int]).reg(7),
    t(0xDA, Fcmovb_st0_sti, &[ST0, STi]).reg(0),
    t(0xDA, Fcmove_st0_sti, &[ST0, STi]).reg(1),
    t(0xDA, Fcmovbe_st0_sti, &[ST0, STi]).reg(2),
    t(0xDA, Fcmovu_st0_sti, &[ST0, STi]).reg(3),
    t(0xDA, Fucompp, &[]).modrm(0xE9),
    // DB
    t(0xDB, Fild_m32int, &[M32int]).reg(0),
    t(0xDB, Fisttp_m32int, &[M32int]).reg(1),
    t(0xDB, Fist_m32int, &[M32int]).reg(2),
    t(0xDB, Fistp_m32int, &[M32int]).reg(3),
    t(0xDB, Fld_m80fp, &[M80fp]).reg(5),
    t(0xDB, Fstp_m80fp, &[M80fp]).reg(7),
    t(0xDB, Fcmovnb_st0_sti, &[ST0, STi]).reg(0),
    t(0xDB, Fcmovne_st0_sti, &[ST0, STi]).reg(1),
    t(0xDB, Fcmovnbe_st0_sti, &[ST0, STi]).reg(2),
    t(0xDB, Fcmovnu_st0_sti, &[ST0, STi]).reg(3),
    t(0xDB, Fneni, &[]).modrm(0xE0),
    t(0xDB, Fndisi, &[]).modrm(0xE1),
    t(0xDB, Fnclex, &[]).modrm(0xE2),
    t(0xDB, Fninit, &[]).modrm(0xE3),
    t(0xDB, Fnsetpm, &[]).modrm(0xE4),
    t(0xDB, Fucomi_st0_sti, &[ST0, STi]).reg(5),
    t(0xDB, Fcomi_st0_sti, &[ST0, STi]).reg(6),
    // DC
    t(0xDC, Fadd_m64fp, &[M64fp]).reg(0),
    t(0xDC, Fmul_m64fp, &[M64fp]).reg(1),
    t(0xDC, Fcom_m64fp, &[M64fp]).reg(2),
    t(0xDC, Fcomp_m64fp, &[M64fp]).reg(3),
    t(0xDC, Fsub_m64fp, &[M64fp]).reg(4),
    t(0xDC, Fsubr_m64fp, &[M64fp]).reg(5),
    t(0xDC, Fdiv_m64fp, &[M64fp]).reg(6),
    t(0xDC, Fdivr_m64fp, &[M64fp]).reg(7),
    t(0xDC, Fadd_sti_st0, &[STi, ST0]).reg(0),
    t(0xDC, Fmul_sti_st0, &[STi, ST0]).reg(1),
    t(0xDC, Fcom_st0_sti_DCD0, &[ST0, STi]).reg(2),
    t(0xDC, Fcomp_st0_sti_DCD8, &[ST0, STi]).reg(3),
    t(0xDC, Fsubr_sti_st0, &[STi, ST0]).reg(4),
    t(0xDC, Fsub_sti_st0, &[STi, ST0]).reg(5),
    t(0xDC, Fdivr_sti_st0, &[STi, ST0]).reg(6),
    t(0xDC, Fdiv_sti_st0, &[STi, ST0]).reg(7),
    // DD
    t(0xDD, Fld_m64fp, &[M64fp]).reg(0),
    t(0xDD, Fisttp_m64int, &[M64int]).reg(1),
    t(0xDD, Fst_m64fp, &[M64fp]).reg(2),
    t(0xDD, Fstp_m64fp, &[M64fp]).reg(3),
    v(0xDD, [Frstor_m94byte, Frstor_m108byte, Frstor_m108byte], &[Mstate]).reg(4),
    v(0xDD, [Fnsave_m94byte, Fnsave_m108byte, Fnsave_m108byte], &[Mstate]).reg(6),
    t(0xDD, Fnstsw_m2byte, &[M2byte]).reg(7),
    t(0xDD, Ffree_sti, &[STi]).reg(0),
    t(0xDD, Fxch_st0_sti_DDC8, &[ST0, STi]).reg(1),
    t(0xDD, Fst_sti, &[STi]).reg(2),
    t(0xDD, Fstp_sti, &[STi]).reg(3),
    t(0xDD, Fucom_st0_sti, &[ST0, STi]).reg(4),
    t(0xDD, Fucomp_st0_sti, &[ST0, STi]).reg(5),
    // DE
    t(0xDE, Fiadd_m16int, &[M16int]).reg(0),
    t(0xDE, Fimul_m16int, &[M16int]).reg(1),
    t(0xDE, Ficom_m16int, &[M16int]).reg(2),
    t(0xDE, Ficomp_m16int, &[M16int]).reg(3),
    t(0xDE, Fisub_m16int, &[M16int]).reg(4),
    t(0xDE, Fisubr_m16int, &[M16int]).reg(5),
    t(0xDE, Fidiv_m16int, &[M16int]).reg(6),
    t(0xDE, Fidivr_m16int, &[M16int]).reg(7),
    t(0xDE, Faddp_sti_st0, &[STi, ST0]).reg(0),
    t(0xDE, Fmulp_sti_st0, &[STi, ST0]).reg(1),
    t(0xDE, Fcomp_st0_sti_DED0, &[ST0, STi]).reg(2),
    t(0xDE, Fcompp, &[]).modrm(0xD9),
    t(0xDE, Fsubrp_sti_st0, &[STi, ST0]).reg(4),
    t(0xDE, Fsubp_sti_st0, &[STi, ST0]).reg(5),
    t(0xDE, Fdivrp_sti_st0, &[STi, ST0]).reg(6),
    t(0xDE, Fdivp_sti_st0, &[STi, ST0]).reg(7),
    // DF
    t(0xDF, Fild_m16int, &[M16int]).reg(0),
    t(0xDF, Fisttp_m16int, &[M16int]).reg(1),
    t(0xDF, Fist_m16int, &[M16int]).reg(2),
    t(0xDF, Fistp_m16int, &[M16int]).reg(3),
    t(0xDF, Fbld_m80bcd, &[M80bcd]).reg(4),
    t(0xDF, Fild_m64int, &[M64int]).reg(5),
    t(0xDF, Fbstp_m80bcd, &[M80bcd]).reg(6),
    t(0xDF, Fistp_m64int, &[M64int]).reg(7),
    t(0xDF, Ffreep_sti, &[STi]).reg(0),
    t(0xDF, Fxch_st0_sti_DFC8, &[ST0, STi]).reg(1),
    t(0xDF, Fstp_sti_DFD0, &[STi]).reg(2),
    t(0xDF, Fstp_sti_DFD8, &[STi]).reg(3),
    t(0xDF, Fnstsw_AX, &[AX]).modrm(0xE0),
    t(0xDF, Fucomip_st0_sti, &[ST0, STi]).reg(5),
    t(0xDF, Fcomip_st0_sti, &[ST0, STi]).reg(6),
];

#[cfg(test)]
mod tests {
    use super::super::{lookup, MatchContext};
    use crate::x86::modrm::ModRM;
    use crate::x86::prefix::MandatoryPrefix;
    use crate::x86::tables::Table;
    use xdis_core::{Bitness, Code};

    fn find(opcode: u8, modrm: u8) -> Option<Code> {
        let ctx = MatchContext {
            bitness: Bitness::Bits64,
            mandatory: MandatoryPrefix::None,
            modrm: Some(ModRM::parse(modrm)),
            p66: false,
            w: false,
            rex_b: false,
            address_size: 64,
            l: 0,
            evex_reg_bcst: false,
            amd: false,
        };
        lookup(Table::Legacy, opcode, &ctx).map(|s| s.code)
    }

    #[test]
    fn test_memory_and_register_forms_split() {
        assert_eq!(find(0xD8, 0x00), Some(Code::Fadd_m32fp));
        assert_eq!(find(0xD8, 0xC1), Some(Code::Fadd_st0_sti));
        assert_eq!(find(0xDC, 0xC1), Some(Code::Fadd_sti_st0));
    }

    #[test]
    fn test_fixed_modrm_forms() {
        assert_eq!(find(0xD9, 0xE8), Some(Code::Fld1));
        assert_eq!(find(0xD9, 0xEF), None);
        assert_eq!(find(0xDF, 0xE0), Some(Code::Fnstsw_AX));
        assert_eq!(find(0xDE, 0xD9), Some(Code::Fcompp));
        assert_eq!(find(0xDE, 0xD8), None);
    }

    #[test]
    fn test_reserved_memory_slots() {
        assert_eq!(find(0xD9, 0x08), None);
        assert_eq!(find(0xDB, 0x20), None);
    }
}
