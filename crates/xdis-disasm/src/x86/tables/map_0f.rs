//! Two-byte opcode map (`0F xx`).

use super::ops::*;
use super::{tpl, tpl_osz, Flags, Mem, Op, RegKind, Table, Template};
use xdis_core::Code::{self, *};
use xdis_core::{MemorySize as MS, Register as R};

const fn t(opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(Table::Legacy0F, opcode, code, ops)
}

const fn v(opcode: u8, codes: [Code; 3], ops: &'static [Op]) -> Template {
    tpl_osz(Table::Legacy0F, opcode, codes, ops)
}

const LOCK: Flags = Flags::LOCK;
const D64: Flags = Flags::D64;
const F64: Flags = Flags::F64;

const Ew16: Op = Op::Rm(RegKind::GprOsz, Mem::Fixed(MS::UInt16));
const Gy: Op = Op::Reg(RegKind::GprW);
const Ebv: Op = Op::Rm(RegKind::Gpr8, Mem::Fixed(MS::UInt8));
const Ebs: Op = Op::Rm(RegKind::Gpr8, Mem::Fixed(MS::Int8));
const Ewv: Op = Op::Rm(RegKind::Gpr16, Mem::Fixed(MS::UInt16));
const Ews: Op = Op::Rm(RegKind::Gpr16, Mem::Fixed(MS::Int16));
const Rd: Op = Op::RmReg(RegKind::GprMode);
const Cd: Op = Op::Reg(RegKind::Control);
const Dd: Op = Op::Reg(RegKind::Debug);
const Td: Op = Op::Reg(RegKind::Test);
const Mb: Op = Op::M(Mem::Fixed(MS::UInt8));
const Md: Op = Op::M(Mem::Fixed(MS::UInt32));
const Mq: Op = Op::M(Mem::Fixed(MS::UInt64));
const Mdq: Op = Op::M(Mem::Fixed(MS::UInt128));
const Mps: Op = Op::M(Mem::Fixed(MS::Packed128_Float32));
const Mpd: Op = Op::M(Mem::Fixed(MS::Packed128_Float64));
const Mfx: Op = Op::M(Mem::Osz([MS::Fxsave_512Byte, MS::Fxsave_512Byte, MS::Fxsave64_512Byte]));
const Mxs: Op = Op::M(Mem::Osz([MS::Xsave, MS::Xsave, MS::Xsave64]));
const Mmxs: Op = Op::M(Mem::Fixed(MS::Unknown));
const Ms: Op = Op::M(Mem::Osz([MS::Fword6, MS::Fword6, MS::Fword10]));
const Mp: Op = Op::M(Mem::Osz([MS::SegPtr16, MS::SegPtr32, MS::SegPtr64]));
const Mcx: Op = Op::M(Mem::Osz([MS::UInt64, MS::UInt64, MS::UInt128]));
const Mnti: Op = Op::M(Mem::Osz([MS::UInt32, MS::UInt32, MS::UInt64]));
const Wss: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float32));
const Wsd: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float64));
const Wq: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::UInt64));
const Wps64: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_Float32));
const Wdq64: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_Int32));
const Ryw: Op = Op::Rm(RegKind::GprW, Mem::Fixed(MS::UInt16));
const Uq: Op = Op::RmReg(RegKind::Xmm);
const FS: Op = Op::Fixed(R::FS);
const GS: Op = Op::Fixed(R::GS);
const rDI: Op = Op::SegDi(Mem::Fixed(MS::UInt64));
const rDIx: Op = Op::SegDi(Mem::Fixed(MS::UInt128));

pub(super) static TEMPLATES: &[Template] = &[
    // Group 6
    v(0x00, [Sldt_rm16, Sldt_r32m16, Sldt_r64m16], &[Ew16]).reg(0),
    v(0x00, [Str_rm16, Str_r32m16, Str_r64m16], &[Ew16]).reg(1),
    v(0x00, [Lldt_rm16, Lldt_r32m16, Lldt_r64m16], &[Ew16]).reg(2),
    v(0x00, [Ltr_rm16, Ltr_r32m16, Ltr_r64m16], &[Ew16]).reg(3),
    v(0x00, [Verr_rm16, Verr_r32m16, Verr_r64m16], &[Ew16]).reg(4),
    v(0x00, [Verw_rm16, Verw_r32m16, Verw_r64m16], &[Ew16]).reg(5),
    // Group 7
    v(0x01, [Sgdt_m1632_16, Sgdt_m1632, Sgdt_m1664], &[Ms]).reg(0).flags(F64),
    v(0x01, [Sidt_m1632_16, Sidt_m1632, Sidt_m1664], &[Ms]).reg(1).flags(F64),
    v(0x01, [Lgdt_m1632_16, Lgdt_m1632, Lgdt_m1664], &[Ms]).reg(2).flags(F64),
    v(0x01, [Lidt_m1632_16, Lidt_m1632, Lidt_m1664], &[Ms]).reg(3).flags(F64),
    v(0x01, [Smsw_rm16, Smsw_r32m16, Smsw_r64m16], &[Ew16]).reg(4),
    v(0x01, [Lmsw_rm16, Lmsw_r32m16, Lmsw_r64m16], &[Ew16]).reg(6),
    t(0x01, Invlpg_m, &[Mmxs]).reg(7),
    t(0x01, Vmcall, &[]).modrm(0xC1),
    t(0x01, Vmlaunch, &[]).modrm(0xC2),
    t(0x01, Vmresume, &[]).modrm(0xC3),
    t(0x01, Vmxoff, &[]).modrm(0xC4),
    t(0x01, Monitorw, &[]).modrm(0xC8).a16(),
    t(0x01, Monitord, &[]).modrm(0xC8).a32(),
    t(0x01, Monitorq, &[]).modrm(0xC8).a64(),
    t(0x01, Mwait, &[]).modrm(0xC9),
    t(0x01, Clac, &[]).modrm(0xCA),
    t(0x01, Stac, &[]).modrm(0xCB),
    t(0x01, Encls, &[]).modrm(0xCF),
    t(0x01, Xgetbv, &[]).modrm(0xD0),
    t(0x01, Xsetbv, &[]).modrm(0xD1),
    t(0x01, Vmfunc, &[]).modrm(0xD4),
    t(0x01, Xend, &[]).modrm(0xD5),
    t(0x01, Xtest, &[]).modrm(0xD6),
    t(0x01, Enclu, &[]).modrm(0xD7),
    t(0x01, Vmrunw, &[]).modrm(0xD8).a16(),
    t(0x01, Vmrund, &[]).modrm(0xD8).a32(),
    t(0x01, Vmrunq, &[]).modrm(0xD8).a64(),
    t(0x01, Vmmcall, &[]).modrm(0xD9),
    t(0x01, Vmloadw, &[]).modrm(0xDA).a16(),
    t(0x01, Vmloadd, &[]).modrm(0xDA).a32(),
    t(0x01, Vmloadq, &[]).modrm(0xDA).a64(),
    t(0x01, Vmsavew, &[]).modrm(0xDB).a16(),
    t(0x01, Vmsaved, &[]).modrm(0xDB).a32(),
    t(0x01, Vmsaveq, &[]).modrm(0xDB).a64(),
    t(0x01, Stgi, &[]).modrm(0xDC),
    t(0x01, Clgi, &[]).modrm(0xDD),
    t(0x01, Skinit, &[]).modrm(0xDE),
    t(0x01, Invlpgaw, &[]).modrm(0xDF).a16(),
    t(0x01, Invlpgad, &[]).modrm(0xDF).a32(),
    t(0x01, Invlpgaq, &[]).modrm(0xDF).a64(),
    t(0x01, Swapgs, &[]).modrm(0xF8).only64(),
    t(0x01, Rdtscp, &[]).modrm(0xF9),
    t(0x01, Monitorxw, &[]).modrm(0xFA).a16(),
    t(0x01, Monitorxd, &[]).modrm(0xFA).a32(),
    t(0x01, Monitorxq, &[]).modrm(0xFA).a64(),
    t(0x01, Mwaitx, &[]).modrm(0xFB),
    t(0x01, Clzerow, &[]).modrm(0xFC).a16(),
    t(0x01, Clzerod, &[]).modrm(0xFC).a32(),
    t(0x01, Clzeroq, &[]).modrm(0xFC).a64(),
    v(0x02, [Lar_r16_rm16, Lar_r32_r32m16, Lar_r64_r64m16], &[Gv, Ew16]),
    v(0x03, [Lsl_r16_rm16, Lsl_r32_r32m16, Lsl_r64_r64m16], &[Gv, Ew16]),
    t(0x05, Syscall, &[]),
    t(0x06, Clts, &[]),
    v(0x07, [Sysretd, Sysretd, Sysretq], &[]),
    t(0x08, Invd, &[]),
    t(0x09, Wbnoinvd, &[]).pf3(),
    t(0x09, Wbinvd, &[]),
    t(0x0B, Ud2, &[]),
    t(0x0D, Prefetch_m8, &[Mb]).reg(0),
    t(0x0D, Prefetchw_m8, &[Mb]).reg(1),
    t(0x0D, Prefetchwt1_m8, &[Mb]).reg(2),
    t(0x0E, Femms, &[]),
    // SSE moves
    t(0x10, Movups_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x10, Movupd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x10, Movss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x10, Movsd_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x11, Movups_xmmm128_xmm, &[Wps, Vx]).np(),
    t(0x11, Movupd_xmmm128_xmm, &[Wpd, Vx]).p66(),
    t(0x11, Movss_xmmm32_xmm, &[Wss, Vx]).pf3(),
    t(0x11, Movsd_xmmm64_xmm, &[Wsd, Vx]).pf2(),
    t(0x12, Movlps_xmm_m64, &[Vx, Mpf]).np(),
    t(0x12, Movhlps_xmm_xmm, &[Vx, Uq]).np(),
    t(0x12, Movlpd_xmm_m64, &[Vx, Msd]).p66(),
    t(0x12, Movsldup_xmm_xmmm128, &[Vx, Wps]).pf3(),
    t(0x12, Movddup_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x13, Movlps_m64_xmm, &[Mpf, Vx]).np(),
    t(0x13, Movlpd_m64_xmm, &[Msd, Vx]).p66(),
    t(0x14, Unpcklps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x14, Unpcklpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x15, Unpckhps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x15, Unpckhpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x16, Movhps_xmm_m64, &[Vx, Mpf]).np(),
    t(0x16, Movlhps_xmm_xmm, &[Vx, Uq]).np(),
    t(0x16, Movhpd_xmm_m64, &[Vx, Msd]).p66(),
    t(0x16, Movshdup_xmm_xmmm128, &[Vx, Wps]).pf3(),
    t(0x17, Movhps_m64_xmm, &[Mpf, Vx]).np(),
    t(0x17, Movhpd_m64_xmm, &[Msd, Vx]).p66(),
    t(0x18, Prefetchnta_m8, &[Mb]).reg(0),
    t(0x18, Prefetcht0_m8, &[Mb]).reg(1),
    t(0x18, Prefetcht1_m8, &[Mb]).reg(2),
    t(0x18, Prefetcht2_m8, &[Mb]).reg(3),
    t(0x1E, Endbr64, &[]).pf3().modrm(0xFA),
    t(0x1E, Endbr32, &[]).pf3().modrm(0xFB),
    v(0x1F, [Nop_rm16, Nop_rm32, Nop_rm64], &[Ev]).reg(0),
    // Control/debug/test registers: mod is ignored
    t(0x20, Mov_r32_cr, &[Rd, Cd]).not64().flags(Flags::FORCE_REG.union(Flags::CR8_LOCK)),
    t(0x20, Mov_r64_cr, &[Rd, Cd]).only64().flags(Flags::FORCE_REG),
    t(0x21, Mov_r32_dr, &[Rd, Dd]).not64().flags(Flags::FORCE_REG),
    t(0x21, Mov_r64_dr, &[Rd, Dd]).only64().flags(Flags::FORCE_REG),
    t(0x22, Mov_cr_r32, &[Cd, Rd]).not64().flags(Flags::FORCE_REG.union(Flags::CR8_LOCK)),
    t(0x22, Mov_cr_r64, &[Cd, Rd]).only64().flags(Flags::FORCE_REG),
    t(0x23, Mov_dr_r32, &[Dd, Rd]).not64().flags(Flags::FORCE_REG),
    t(0x23, Mov_dr_r64, &[Dd, Rd]).only64().flags(Flags::FORCE_REG),
    t(0x24, Mov_r32_tr, &[Rd, Td]).not64().flags(Flags::FORCE_REG),
    t(0x26, Mov_tr_r32, &[Td, Rd]).not64().flags(Flags::FORCE_REG),
    t(0x28, Movaps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x28, Movapd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x29, Movaps_xmmm128_xmm, &[Wps, Vx]).np(),
    t(0x29, Movapd_xmmm128_xmm, &[Wpd, Vx]).p66(),
    t(0x2A, Cvtpi2ps_xmm_mmm64, &[Vx, Qpi]).np(),
    t(0x2A, Cvtpi2pd_xmm_mmm64, &[Vx, Qpi]).p66(),
    t(0x2A, Cvtsi2ss_xmm_rm32, &[Vx, Edi]).pf3().w0(),
    t(0x2A, Cvtsi2ss_xmm_rm64, &[Vx, Eqi]).pf3().w1(),
    t(0x2A, Cvtsi2sd_xmm_rm32, &[Vx, Edi]).pf2().w0(),
    t(0x2A, Cvtsi2sd_xmm_rm64, &[Vx, Eqi]).pf2().w1(),
    t(0x2B, Movntps_m128_xmm, &[Mps, Vx]).np(),
    t(0x2B, Movntpd_m128_xmm, &[Mpd, Vx]).p66(),
    t(0x2C, Cvttps2pi_mm_xmmm64, &[Pq, Wps64]).np(),
    t(0x2C, Cvttpd2pi_mm_xmmm128, &[Pq, Wpd]).p66(),
    t(0x2C, Cvttss2si_r32_xmmm32, &[Gd, Wss]).pf3().w0(),
    t(0x2C, Cvttss2si_r64_xmmm32, &[Gq, Wss]).pf3().w1(),
    t(0x2C, Cvttsd2si_r32_xmmm64, &[Gd, Wsd]).pf2().w0(),
    t(0x2C, Cvttsd2si_r64_xmmm64, &[Gq, Wsd]).pf2().w1(),
    t(0x2D, Cvtps2pi_mm_xmmm64, &[Pq, Wps64]).np(),
    t(0x2D, Cvtpd2pi_mm_xmmm128, &[Pq, Wpd]).p66(),
    t(0x2D, Cvtss2si_r32_xmmm32, &[Gd, Wss]).pf3().w0(),
    t(0x2D, Cvtss2si_r64_xmmm32, &[Gq, Wss]).pf3().w1(),
    t(0x2D, Cvtsd2si_r32_xmmm64, &[Gd, Wsd]).pf2().w0(),
    t(0x2D, Cvtsd2si_r64_xmmm64, &[Gq, Wsd]).pf2().w1(),
    t(0x2E, Ucomiss_xmm_xmmm32, &[Vx, Wss]).np(),
    t(0x2E, Ucomisd_xmm_xmmm64, &[Vx, Wsd]).p66(),
    t(0x2F, Comiss_xmm_xmmm32, &[Vx, Wss]).np(),
    t(0x2F, Comisd_xmm_xmmm64, &[Vx, Wsd]).p66(),
    t(0x30, Wrmsr, &[]),
    t(0x31, Rdtsc, &[]),
    t(0x32, Rdmsr, &[]),
    t(0x33, Rdpmc, &[]),
    t(0x34, Sysenter, &[]),
    v(0x35, [Sysexitd, Sysexitd, Sysexitq], &[]),
    t(0x37, Getsec, &[]),
    // CMOVcc
    v(0x40, [Cmovo_r16_rm16, Cmovo_r32_rm32, Cmovo_r64_rm64], &[Gv, Ev]),
    v(0x41, [Cmovno_r16_rm16, Cmovno_r32_rm32, Cmovno_r64_rm64], &[Gv, Ev]),
    v(0x42, [Cmovb_r16_rm16, Cmovb_r32_rm32, Cmovb_r64_rm64], &[Gv, Ev]),
    v(0x43, [Cmovae_r16_rm16, Cmovae_r32_rm32, Cmovae_r64_rm64], &[Gv, Ev]),
    v(0x44, [Cmove_r16_rm16, Cmove_r32_rm32, Cmove_r64_rm64], &[Gv, Ev]),
    v(0x45, [Cmovne_r16_rm16, Cmovne_r32_rm32, Cmovne_r64_rm64], &[Gv, Ev]),
    v(0x46, [Cmovbe_r16_rm16, Cmovbe_r32_rm32, Cmovbe_r64_rm64], &[Gv, Ev]),
    v(0x47, [Cmova_r16_rm16, Cmova_r32_rm32, Cmova_r64_rm64], &[Gv, Ev]),
    v(0x48, [Cmovs_r16_rm16, Cmovs_r32_rm32, Cmovs_r64_rm64], &[Gv, Ev]),
    v(0x49, [Cmovns_r16_rm16, Cmovns_r32_rm32, Cmovns_r64_rm64], &[Gv, Ev]),
    v(0x4A, [Cmovp_r16_rm16, Cmovp_r32_rm32, Cmovp_r64_rm64], &[Gv, Ev]),
    v(0x4B, [Cmovnp_r16_rm16, Cmovnp_r32_rm32, Cmovnp_r64_rm64], &[Gv, Ev]),
    v(0x4C, [Cmovl_r16_rm16, Cmovl_r32_rm32, Cmovl_r64_rm64], &[Gv, Ev]),
    v(0x4D, [Cmovge_r16_rm16, Cmovge_r32_rm32, Cmovge_r64_rm64], &[Gv, Ev]),
    v(0x4E, [Cmovle_r16_rm16, Cmovle_r32_rm32, Cmovle_r64_rm64], &[Gv, Ev]),
    v(0x4F, [Cmovg_r16_rm16, Cmovg_r32_rm32, Cmovg_r64_rm64], &[Gv, Ev]),
    // SSE arithmetic
    v(0x50, [Movmskps_r32_xmm, Movmskps_r32_xmm, Movmskps_r64_xmm], &[Gy, Uq]).np(),
    v(0x50, [Movmskpd_r32_xmm, Movmskpd_r32_xmm, Movmskpd_r64_xmm], &[Gy, Uq]).p66(),
    t(0x51, Sqrtps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x51, Sqrtpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x51, Sqrtss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x51, Sqrtsd_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x52, Rsqrtps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x52, Rsqrtss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x53, Rcpps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x53, Rcpss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x54, Andps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x54, Andpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x55, Andnps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x55, Andnpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x56, Orps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x56, Orpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x57, Xorps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x57, Xorpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x58, Addps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x58, Addpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x58, Addss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x58, Addsd_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x59, Mulps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x59, Mulpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x59, Mulss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x59, Mulsd_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x5A, Cvtps2pd_xmm_xmmm64, &[Vx, Wps64]).np(),
    t(0x5A, Cvtpd2ps_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x5A, Cvtss2sd_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x5A, Cvtsd2ss_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x5B, Cvtdq2ps_xmm_xmmm128, &[Vx, Wdq]).np(),
    t(0x5B, Cvtps2dq_xmm_xmmm128, &[Vx, Wps]).p66(),
    t(0x5B, Cvttps2dq_xmm_xmmm128, &[Vx, Wps]).pf3(),
    t(0x5C, Subps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x5C, Subpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x5C, Subss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x5C, Subsd_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x5D, Minps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x5D, Minpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x5D, Minss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x5D, Minsd_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x5E, Divps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x5E, Divpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x5E, Divss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x5E, Divsd_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    t(0x5F, Maxps_xmm_xmmm128, &[Vx, Wps]).np(),
    t(0x5F, Maxpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x5F, Maxss_xmm_xmmm32, &[Vx, Wss]).pf3(),
    t(0x5F, Maxsd_xmm_xmmm64, &[Vx, Wsd]).pf2(),
    // MMX / SSE2 integer
    t(0x60, Punpcklbw_mm_mmm32, &[Pq, Qdb]).np(),
    t(0x60, Punpcklbw_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x61, Punpcklwd_mm_mmm32, &[Pq, Qdw]).np(),
    t(0x61, Punpcklwd_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x62, Punpckldq_mm_mmm32, &[Pq, Qdi]).np(),
    t(0x62, Punpckldq_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x63, Packsswb_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x63, Packsswb_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x64, Pcmpgtb_mm_mmm64, &[Pq, Qpb]).np(),
    t(0x64, Pcmpgtb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x65, Pcmpgtw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x65, Pcmpgtw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x66, Pcmpgtd_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x66, Pcmpgtd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x67, Packuswb_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x67, Packuswb_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x68, Punpckhbw_mm_mmm64, &[Pq, Qpb]).np(),
    t(0x68, Punpckhbw_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x69, Punpckhwd_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x69, Punpckhwd_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x6A, Punpckhdq_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x6A, Punpckhdq_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x6B, Packssdw_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x6B, Packssdw_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x6C, Punpcklqdq_xmm_xmmm128, &[Vx, Wpq]).p66(),
    t(0x6D, Punpckhqdq_xmm_xmmm128, &[Vx, Wpq]).p66(),
    t(0x6E, Movd_mm_rm32, &[Pq, Ed]).np().w0(),
    t(0x6E, Movq_mm_rm64, &[Pq, E64]).np().w1(),
    t(0x6E, Movd_xmm_rm32, &[Vx, Ed]).p66().w0(),
    t(0x6E, Movq_xmm_rm64, &[Vx, E64]).p66().w1(),
    t(0x6F, Movq_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x6F, Movdqa_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x6F, Movdqu_xmm_xmmm128, &[Vx, Wdq]).pf3(),
    t(0x70, Pshufw_mm_mmm64_imm8, &[Pq, Qpw, Ib]).np(),
    t(0x70, Pshufd_xmm_xmmm128_imm8, &[Vx, Wdq, Ib]).p66(),
    t(0x70, Pshufhw_xmm_xmmm128_imm8, &[Vx, Wpw, Ib]).pf3(),
    t(0x70, Pshuflw_xmm_xmmm128_imm8, &[Vx, Wpw, Ib]).pf2(),
    // Groups 12..14: shift by immediate
    t(0x71, Psrlw_mm_imm8, &[Nq, Ib]).np().reg(2),
    t(0x71, Psrlw_xmm_imm8, &[Ux, Ib]).p66().reg(2),
    t(0x71, Psraw_mm_imm8, &[Nq, Ib]).np().reg(4),
    t(0x71, Psraw_xmm_imm8, &[Ux, Ib]).p66().reg(4),
    t(0x71, Psllw_mm_imm8, &[Nq, Ib]).np().reg(6),
    t(0x71, Psllw_xmm_imm8, &[Ux, Ib]).p66().reg(6),
    t(0x72, Psrld_mm_imm8, &[Nq, Ib]).np().reg(2),
    t(0x72, Psrld_xmm_imm8, &[Ux, Ib]).p66().reg(2),
    t(0x72, Psrad_mm_imm8, &[Nq, Ib]).np().reg(4),
    t(0x72, Psrad_xmm_imm8, &[Ux, Ib]).p66().reg(4),
    t(0x72, Pslld_mm_imm8, &[Nq, Ib]).np().reg(6),
    t(0x72, Pslld_xmm_imm8, &[Ux, Ib]).p66().reg(6),
    t(0x73, Psrlq_mm_imm8, &[Nq, Ib]).np().reg(2),
    t(0x73, Psrlq_xmm_imm8, &[Ux, Ib]).p66().reg(2),
    t(0x73, Psrldq_xmm_imm8, &[Ux, Ib]).p66().reg(3),
    t(0x73, Psllq_mm_imm8, &[Nq, Ib]).np().reg(6),
    t(0x73, Psllq_xmm_imm8, &[Ux, Ib]).p66().reg(6),
    t(0x73, Pslldq_xmm_imm8, &[Ux, Ib]).p66().reg(7),
    t(0x74, Pcmpeqb_mm_mmm64, &[Pq, Qpb]).np(),
    t(0x74, Pcmpeqb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x75, Pcmpeqw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x75, Pcmpeqw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x76, Pcmpeqd_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x76, Pcmpeqd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x77, Emms, &[]).np(),
    t(0x78, Vmread_rm32_r32, &[Ed, Gd]).np().not64(),
    t(0x78, Vmread_rm64_r64, &[E64, Gq]).np().only64(),
    t(0x78, Extrq_xmm_imm8_imm8, &[Ux, Ib, Ib2]).p66().reg(0),
    t(0x78, Insertq_xmm_xmm_imm8_imm8, &[Vx, Ux, Ib, Ib2]).pf2(),
    t(0x79, Vmwrite_r32_rm32, &[Gd, Ed]).np().not64(),
    t(0x79, Vmwrite_r64_rm64, &[Gq, E64]).np().only64(),
    t(0x79, Extrq_xmm_xmm, &[Vx, Ux]).p66(),
    t(0x79, Insertq_xmm_xmm, &[Vx, Ux]).pf2(),
    t(0x7C, Haddpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x7C, Haddps_xmm_xmmm128, &[Vx, Wps]).pf2(),
    t(0x7D, Hsubpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x7D, Hsubps_xmm_xmmm128, &[Vx, Wps]).pf2(),
    t(0x7E, Movd_rm32_mm, &[Ed, Pq]).np().w0(),
    t(0x7E, Movq_rm64_mm, &[E64, Pq]).np().w1(),
    t(0x7E, Movd_rm32_xmm, &[Ed, Vx]).p66().w0(),
    t(0x7E, Movq_rm64_xmm, &[E64, Vx]).p66().w1(),
    t(0x7E, Movq_xmm_xmmm64, &[Vx, Wq]).pf3(),
    t(0x7F, Movq_mmm64_mm, &[Qpi, Pq]).np(),
    t(0x7F, Movdqa_xmmm128_xmm, &[Wdq, Vx]).p66(),
    t(0x7F, Movdqu_xmmm128_xmm, &[Wdq, Vx]).pf3(),
    // Jcc rel16/32
    v(0x80, [Jo_rel16, Jo_rel32_32, Jo_rel32_64], &[Jz]).flags(F64),
    v(0x81, [Jno_rel16, Jno_rel32_32, Jno_rel32_64], &[Jz]).flags(F64),
    v(0x82, [Jb_rel16, Jb_rel32_32, Jb_rel32_64], &[Jz]).flags(F64),
    v(0x83, [Jae_rel16, Jae_rel32_32, Jae_rel32_64], &[Jz]).flags(F64),
    v(0x84, [Je_rel16, Je_rel32_32, Je_rel32_64], &[Jz]).flags(F64),
    v(0x85, [Jne_rel16, Jne_rel32_32, Jne_rel32_64], &[Jz]).flags(F64),
    v(0x86, [Jbe_rel16, Jbe_rel32_32, Jbe_rel32_64], &[Jz]).flags(F64),
    v(0x87, [Ja_rel16, Ja_rel32_32, Ja_rel32_64], &[Jz]).flags(F64),
    v(0x88, [Js_rel16, Js_rel32_32, Js_rel32_64], &[Jz]).flags(F64),
    v(0x89, [Jns_rel16, Jns_rel32_32, Jns_rel32_64], &[Jz]).flags(F64),
    v(0x8A, [Jp_rel16, Jp_rel32_32, Jp_rel32_64], &[Jz]).flags(F64),
    v(0x8B, [Jnp_rel16, Jnp_rel32_32, Jnp_rel32_64], &[Jz]).flags(F64),
    v(0x8C, [Jl_rel16, Jl_rel32_32, Jl_rel32_64], &[Jz]).flags(F64),
    v(0x8D, [Jge_rel16, Jge_rel32_32, Jge_rel32_64], &[Jz]).flags(F64),
    v(0x8E, [Jle_rel16, Jle_rel32_32, Jle_rel32_64], &[Jz]).flags(F64),
    v(0x8F, [Jg_rel16, Jg_rel32_32, Jg_rel32_64], &[Jz]).flags(F64),
    // SETcc
    t(0x90, Seto_rm8, &[Eb]),
    t(0x91, Setno_rm8, &[Eb]),
    t(0x92, Setb_rm8, &[Eb]),
    t(0x93, Setae_rm8, &[Eb]),
    t(0x94, Sete_rm8, &[Eb]),
    t(0x95, Setne_rm8, &[Eb]),
    t(0x96, Setbe_rm8, &[Eb]),
    t(0x97, Seta_rm8, &[Eb]),
    t(0x98, Sets_rm8, &[Eb]),
    t(0x99, Setns_rm8, &[Eb]),
    t(0x9A, Setp_rm8, &[Eb]),
    t(0x9B, Setnp_rm8, &[Eb]),
    t(0x9C, Setl_rm8, &[Eb]),
    t(0x9D, Setge_rm8, &[Eb]),
    t(0x9E, Setle_rm8, &[Eb]),
    t(0x9F, Setg_rm8, &[Eb]),
    v(0xA0, [Pushw_FS, Pushd_FS, Pushq_FS], &[FS]).flags(D64),
    v(0xA1, [Popw_FS, Popd_FS, Popq_FS], &[FS]).flags(D64),
    t(0xA2, Cpuid, &[]),
    v(0xA3, [Bt_rm16_r16, Bt_rm32_r32, Bt_rm64_r64], &[Ev, Gv]),
    v(0xA4, [Shld_rm16_r16_imm8, Shld_rm32_r32_imm8, Shld_rm64_r64_imm8], &[Ev, Gv, Ib]),
    v(0xA5, [Shld_rm16_r16_CL, Shld_rm32_r32_CL, Shld_rm64_r64_CL], &[Ev, Gv, CL]),
    v(0xA8, [Pushw_GS, Pushd_GS, Pushq_GS], &[GS]).flags(D64),
    v(0xA9, [Popw_GS, Popd_GS, Popq_GS], &[GS]).flags(D64),
    t(0xAA, Rsm, &[]),
    v(0xAB, [Bts_rm16_r16, Bts_rm32_r32, Bts_rm64_r64], &[Ev, Gv]).flags(LOCK),
    v(0xAC, [Shrd_rm16_r16_imm8, Shrd_rm32_r32_imm8, Shrd_rm64_r64_imm8], &[Ev, Gv, Ib]),
    v(0xAD, [Shrd_rm16_r16_CL, Shrd_rm32_r32_CL, Shrd_rm64_r64_CL], &[Ev, Gv, CL]),
    // Group 15
    v(0xAE, [Fxsave_m512byte, Fxsave_m512byte, Fxsave64_m512byte], &[Mfx]).np().reg(0),
    v(0xAE, [Fxrstor_m512byte, Fxrstor_m512byte, Fxrstor64_m512byte], &[Mfx]).np().reg(1),
    t(0xAE, Ldmxcsr_m32, &[Md]).np().reg(2),
    t(0xAE, Stmxcsr_m32, &[Md]).np().reg(3),
    v(0xAE, [Xsave_mem, Xsave_mem, Xsave64_mem], &[Mxs]).np().reg(4),
    v(0xAE, [Xrstor_mem, Xrstor_mem, Xrstor64_mem], &[Mxs]).np().reg(5),
    v(0xAE, [Xsaveopt_mem, Xsaveopt_mem, Xsaveopt64_mem], &[Mxs]).np().reg(6),
    t(0xAE, Clflush_m8, &[Mb]).np().reg(7),
    t(0xAE, Clwb_m8, &[Mb]).p66().reg(6),
    t(0xAE, Clflushopt_m8, &[Mb]).p66().reg(7),
    t(0xAE, Lfence, &[]).np().reg(5).regform(),
    t(0xAE, Mfence, &[]).np().reg(6).regform(),
    t(0xAE, Sfence, &[]).np().reg(7).regform(),
    t(0xAE, Rdfsbase_r32, &[Rd]).pf3().reg(0).only64().w0(),
    t(0xAE, Rdfsbase_r64, &[Rd]).pf3().reg(0).only64().w1(),
    t(0xAE, Rdgsbase_r32, &[Rd]).pf3().reg(1).only64().w0(),
    t(0xAE, Rdgsbase_r64, &[Rd]).pf3().reg(1).only64().w1(),
    t(0xAE, Wrfsbase_r32, &[Rd]).pf3().reg(2).only64().w0(),
    t(0xAE, Wrfsbase_r64, &[Rd]).pf3().reg(2).only64().w1(),
    t(0xAE, Wrgsbase_r32, &[Rd]).pf3().reg(3).only64().w0(),
    t(0xAE, Wrgsbase_r64, &[Rd]).pf3().reg(3).only64().w1(),
    v(0xAF, [Imul_r16_rm16, Imul_r32_rm32, Imul_r64_rm64], &[Gv, Ev]),
    t(0xB0, Cmpxchg_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0xB1, [Cmpxchg_rm16_r16, Cmpxchg_rm32_r32, Cmpxchg_rm64_r64], &[Ev, Gv]).flags(LOCK),
    v(0xB2, [Lss_r16_m1616, Lss_r32_m1632, Lss_r64_m1664], &[Gv, Mp]),
    v(0xB3, [Btr_rm16_r16, Btr_rm32_r32, Btr_rm64_r64], &[Ev, Gv]).flags(LOCK),
    v(0xB4, [Lfs_r16_m1616, Lfs_r32_m1632, Lfs_r64_m1664], &[Gv, Mp]),
    v(0xB5, [Lgs_r16_m1616, Lgs_r32_m1632, Lgs_r64_m1664], &[Gv, Mp]),
    v(0xB6, [Movzx_r16_rm8, Movzx_r32_rm8, Movzx_r64_rm8], &[Gv, Ebv]),
    v(0xB7, [Movzx_r16_rm16, Movzx_r32_rm16, Movzx_r64_rm16], &[Gv, Ewv]),
    v(0xB8, [Popcnt_r16_rm16, Popcnt_r32_rm32, Popcnt_r64_rm64], &[Gv, Ev]).pf3(),
    v(0xB9, [Ud1_r16_rm16, Ud1_r32_rm32, Ud1_r64_rm64], &[Gv, Ev]),
    // Group 8
    v(0xBA, [Bt_rm16_imm8, Bt_rm32_imm8, Bt_rm64_imm8], &[Ev, Ib]).reg(4),
    v(0xBA, [Bts_rm16_imm8, Bts_rm32_imm8, Bts_rm64_imm8], &[Ev, Ib]).reg(5).flags(LOCK),
    v(0xBA, [Btr_rm16_imm8, Btr_rm32_imm8, Btr_rm64_imm8], &[Ev, Ib]).reg(6).flags(LOCK),
    v(0xBA, [Btc_rm16_imm8, Btc_rm32_imm8, Btc_rm64_imm8], &[Ev, Ib]).reg(7).flags(LOCK),
    v(0xBB, [Btc_rm16_r16, Btc_rm32_r32, Btc_rm64_r64], &[Ev, Gv]).flags(LOCK),
    v(0xBC, [Tzcnt_r16_rm16, Tzcnt_r32_rm32, Tzcnt_r64_rm64], &[Gv, Ev]).pf3(),
    v(0xBC, [Bsf_r16_rm16, Bsf_r32_rm32, Bsf_r64_rm64], &[Gv, Ev]),
    v(0xBD, [Lzcnt_r16_rm16, Lzcnt_r32_rm32, Lzcnt_r64_rm64], &[Gv, Ev]).pf3(),
    v(0xBD, [Bsr_r16_rm16, Bsr_r32_rm32, Bsr_r64_rm64], &[Gv, Ev]),
    v(0xBE, [Movsx_r16_rm8, Movsx_r32_rm8, Movsx_r64_rm8], &[Gv, Ebs]),
    v(0xBF, [Movsx_r16_rm16, Movsx_r32_rm16, Movsx_r64_rm16], &[Gv, Ews]),
    t(0xC0, Xadd_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0xC1, [Xadd_rm16_r16, Xadd_rm32_r32, Xadd_rm64_r64], &[Ev, Gv]).flags(LOCK),
    t(0xC2, Cmpps_xmm_xmmm128_imm8, &[Vx, Wps, Ib]).np(),
    t(0xC2, Cmppd_xmm_xmmm128_imm8, &[Vx, Wpd, Ib]).p66(),
    t(0xC2, Cmpss_xmm_xmmm32_imm8, &[Vx, Wss, Ib]).pf3(),
    t(0xC2, Cmpsd_xmm_xmmm64_imm8, &[Vx, Wsd, Ib]).pf2(),
    v(0xC3, [Movnti_m32_r32, Movnti_m32_r32, Movnti_m64_r64], &[Mnti, Gy]).np(),
    v(0xC4, [Pinsrw_mm_r32m16_imm8, Pinsrw_mm_r32m16_imm8, Pinsrw_mm_r64m16_imm8], &[Pq, Ryw, Ib]).np(),
    v(0xC4, [Pinsrw_xmm_r32m16_imm8, Pinsrw_xmm_r32m16_imm8, Pinsrw_xmm_r64m16_imm8], &[Vx, Ryw, Ib]).p66(),
    v(0xC5, [Pextrw_r32_mm_imm8, Pextrw_r32_mm_imm8, Pextrw_r64_mm_imm8], &[Gy, Nq, Ib]).np(),
    v(0xC5, [Pextrw_r32_xmm_imm8, Pextrw_r32_xmm_imm8, Pextrw_r64_xmm_imm8], &[Gy, Ux, Ib]).p66(),
    t(0xC6, Shufps_xmm_xmmm128_imm8, &[Vx, Wps, Ib]).np(),
    t(0xC6, Shufpd_xmm_xmmm128_imm8, &[Vx, Wpd, Ib]).p66(),
    // Group 9
    v(0xC7, [Cmpxchg8b_m64, Cmpxchg8b_m64, Cmpxchg16b_m128], &[Mcx]).reg(1).flags(LOCK),
    v(0xC7, [Xrstors_mem, Xrstors_mem, Xrstors64_mem], &[Mxs]).np().reg(3),
    v(0xC7, [Xsavec_mem, Xsavec_mem, Xsavec64_mem], &[Mxs]).np().reg(4),
    v(0xC7, [Xsaves_mem, Xsaves_mem, Xsaves64_mem], &[Mxs]).np().reg(5),
    t(0xC7, Vmptrld_m64, &[Mq]).np().reg(6),
    t(0xC7, Vmclear_m64, &[Mq]).p66().reg(6),
    t(0xC7, Vmxon_m64, &[Mq]).pf3().reg(6),
    t(0xC7, Vmptrst_m64, &[Mq]).np().reg(7),
    t(0xC7, Rdpid_r32, &[Rd]).pf3().reg(7).not64(),
    t(0xC7, Rdpid_r64, &[Rd]).pf3().reg(7).only64(),
    v(0xC7, [Rdrand_r16, Rdrand_r32, Rdrand_r64], &[Rv]).no_rep().reg(6),
    v(0xC7, [Rdseed_r16, Rdseed_r32, Rdseed_r64], &[Rv]).no_rep().reg(7),
    v(0xC8, [Bswap_r16, Bswap_r32, Bswap_r64], &[Zv]),
    v(0xC9, [Bswap_r16, Bswap_r32, Bswap_r64], &[Zv]),
    v(0xCA, [Bswap_r16, Bswap_r32, Bswap_r64], &[Zv]),
    v(0xCB, [Bswap_r16, Bswap_r32, Bswap_r64], &[Zv]),
    v(0xCC, [Bswap_r16, Bswap_r32, Bswap_r64], &[Zv]),
    v(0xCD, [Bswap_r16, Bswap_r32, Bswap_r64], &[Zv]),
    v(0xCE, [Bswap_r16, Bswap_r32, Bswap_r64], &[Zv]),
    v(0xCF, [Bswap_r16, Bswap_r32, Bswap_r64], &[Zv]),
    t(0xD0, Addsubpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0xD0, Addsubps_xmm_xmmm128, &[Vx, Wps]).pf2(),
    t(0xD1, Psrlw_mm_mmm64, &[Pq, Qq]).np(),
    t(0xD1, Psrlw_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xD2, Psrld_mm_mmm64, &[Pq, Qq]).np(),
    t(0xD2, Psrld_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xD3, Psrlq_mm_mmm64, &[Pq, Qq]).np(),
    t(0xD3, Psrlq_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xD4, Paddq_mm_mmm64, &[Pq, Qq]).np(),
    t(0xD4, Paddq_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xD5, Pmullw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xD5, Pmullw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xD6, Movq_xmmm64_xmm, &[Wq, Vx]).p66(),
    t(0xD6, Movq2dq_xmm_mm, &[Vx, Nq]).pf3(),
    t(0xD6, Movdq2q_mm_xmm, &[Pq, Ux]).pf2(),
    v(0xD7, [Pmovmskb_r32_mm, Pmovmskb_r32_mm, Pmovmskb_r64_mm], &[Gy, Nq]).np(),
    v(0xD7, [Pmovmskb_r32_xmm, Pmovmskb_r32_xmm, Pmovmskb_r64_xmm], &[Gy, Ux]).p66(),
    t(0xD8, Psubusb_mm_mmm64, &[Pq, Qpub]).np(),
    t(0xD8, Psubusb_xmm_xmmm128, &[Vx, Wpub]).p66(),
    t(0xD9, Psubusw_mm_mmm64, &[Pq, Qpuw]).np(),
    t(0xD9, Psubusw_xmm_xmmm128, &[Vx, Wpuw]).p66(),
    t(0xDA, Pminub_mm_mmm64, &[Pq, Qpub]).np(),
    t(0xDA, Pminub_xmm_xmmm128, &[Vx, Wpub]).p66(),
    t(0xDB, Pand_mm_mmm64, &[Pq, Qq]).np(),
    t(0xDB, Pand_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xDC, Paddusb_mm_mmm64, &[Pq, Qpub]).np(),
    t(0xDC, Paddusb_xmm_xmmm128, &[Vx, Wpub]).p66(),
    t(0xDD, Paddusw_mm_mmm64, &[Pq, Qpuw]).np(),
    t(0xDD, Paddusw_xmm_xmmm128, &[Vx, Wpuw]).p66(),
    t(0xDE, Pmaxub_mm_mmm64, &[Pq, Qpub]).np(),
    t(0xDE, Pmaxub_xmm_xmmm128, &[Vx, Wpub]).p66(),
    t(0xDF, Pandn_mm_mmm64, &[Pq, Qq]).np(),
    t(0xDF, Pandn_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xE0, Pavgb_mm_mmm64, &[Pq, Qpub]).np(),
    t(0xE0, Pavgb_xmm_xmmm128, &[Vx, Wpub]).p66(),
    t(0xE1, Psraw_mm_mmm64, &[Pq, Qq]).np(),
    t(0xE1, Psraw_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xE2, Psrad_mm_mmm64, &[Pq, Qq]).np(),
    t(0xE2, Psrad_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xE3, Pavgw_mm_mmm64, &[Pq, Qpuw]).np(),
    t(0xE3, Pavgw_xmm_xmmm128, &[Vx, Wpuw]).p66(),
    t(0xE4, Pmulhuw_mm_mmm64, &[Pq, Qpuw]).np(),
    t(0xE4, Pmulhuw_xmm_xmmm128, &[Vx, Wpuw]).p66(),
    t(0xE5, Pmulhw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xE5, Pmulhw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xE6, Cvttpd2dq_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0xE6, Cvtdq2pd_xmm_xmmm64, &[Vx, Wdq64]).pf3(),
    t(0xE6, Cvtpd2dq_xmm_xmmm128, &[Vx, Wpd]).pf2(),
    t(0xE7, Movntq_m64_mm, &[Mpi, Pq]).np(),
    t(0xE7, Movntdq_m128_xmm, &[Mdqi, Vx]).p66(),
    t(0xE8, Psubsb_mm_mmm64, &[Pq, Qpb]).np(),
    t(0xE8, Psubsb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0xE9, Psubsw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xE9, Psubsw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xEA, Pminsw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xEA, Pminsw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xEB, Por_mm_mmm64, &[Pq, Qq]).np(),
    t(0xEB, Por_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xEC, Paddsb_mm_mmm64, &[Pq, Qpb]).np(),
    t(0xEC, Paddsb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0xED, Paddsw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xED, Paddsw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xEE, Pmaxsw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xEE, Pmaxsw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xEF, Pxor_mm_mmm64, &[Pq, Qq]).np(),
    t(0xEF, Pxor_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xF0, Lddqu_xmm_m128, &[Vx, Mdq]).pf2(),
    t(0xF1, Psllw_mm_mmm64, &[Pq, Qq]).np(),
    t(0xF1, Psllw_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xF2, Pslld_mm_mmm64, &[Pq, Qq]).np(),
    t(0xF2, Pslld_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xF3, Psllq_mm_mmm64, &[Pq, Qq]).np(),
    t(0xF3, Psllq_xmm_xmmm128, &[Vx, Wpuq]).p66(),
    t(0xF4, Pmuludq_mm_mmm64, &[Pq, Qpud]).np(),
    t(0xF4, Pmuludq_xmm_xmmm128, &[Vx, Wpud]).p66(),
    t(0xF5, Pmaddwd_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xF5, Pmaddwd_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xF6, Psadbw_mm_mmm64, &[Pq, Qpub]).np(),
    t(0xF6, Psadbw_xmm_xmmm128, &[Vx, Wpub]).p66(),
    t(0xF7, Maskmovq_rDI_mm_mm, &[rDI, Pq, Nq]).np(),
    t(0xF7, Maskmovdqu_rDI_xmm_xmm, &[rDIx, Vx, Ux]).p66(),
    t(0xF8, Psubb_mm_mmm64, &[Pq, Qpb]).np(),
    t(0xF8, Psubb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0xF9, Psubw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xF9, Psubw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xFA, Psubd_mm_mmm64, &[Pq, Qpi]).np(),
    t(0xFA, Psubd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0xFB, Psubq_mm_mmm64, &[Pq, Qsq]).np(),
    t(0xFB, Psubq_xmm_xmmm128, &[Vx, Wpq]).p66(),
    t(0xFC, Paddb_mm_mmm64, &[Pq, Qpb]).np(),
    t(0xFC, Paddb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0xFD, Paddw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0xFD, Paddw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0xFE, Paddd_mm_mmm64, &[Pq, Qpi]).np(),
    t(0xFE, Paddd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    v(0xFF, [Ud0_r16_rm16, Ud0_r32_rm32, Ud0_r64_rm64], &[Gv, Ev]),
];
