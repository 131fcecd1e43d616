//! VEX-encoded instructions: AVX/AVX2, FMA3, FMA4, F16C, AES, BMI1/BMI2
//! and the AVX-512 opmask instructions (`k*`), which are VEX-only.
//!
//! Vector-length dependent forms use [`tpl_len`]; the 512-bit slot is
//! always `Invalid`, so the reserved L=1 on a scalar-only entry simply
//! fails the lookup. Scalar entries carry no L predicate (LIG).

use super::ops::{Gd, Gq, Ib, Ux, Vx, Wpub, Wpuq, Wx};
use super::{tpl, tpl_len, Mem, Op, RegKind, Table, Template};
use xdis_core::Code::{self, *};
use xdis_core::MemorySize as MS;

const M0F: Table = Table::Vex0F;
const M38: Table = Table::Vex0F38;
const M3A: Table = Table::Vex0F3A;

const fn t(map: Table, opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(map, opcode, code, ops)
}

const fn x(map: Table, opcode: u8, c128: Code, c256: Code, ops: &'static [Op]) -> Template {
    tpl_len(map, opcode, [c128, c256, Invalid], ops)
}

const PS: Mem = Mem::Len([MS::Packed128_Float32, MS::Packed256_Float32, MS::Packed512_Float32]);
const PD: Mem = Mem::Len([MS::Packed128_Float64, MS::Packed256_Float64, MS::Packed512_Float64]);
const PI: Mem = Mem::Len([MS::UInt128, MS::UInt256, MS::UInt512]);

const Vy: Op = Op::Reg(RegKind::VecLen);
const Hy: Op = Op::Vvvv(RegKind::VecLen);
const Uy: Op = Op::RmReg(RegKind::VecLen);
const Ly: Op = Op::Is4(RegKind::VecLen);
const Wps: Op = Op::Rm(RegKind::VecLen, PS);
const Wpd: Op = Op::Rm(RegKind::VecLen, PD);
const Wi: Op = Op::Rm(RegKind::VecLen, PI);
const Wdq: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_Int32, MS::Packed256_Int32, MS::Packed512_Int32]));
const Wib: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_Int8, MS::Packed256_Int8, MS::Packed512_Int8]));
const Wiub: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_UInt8, MS::Packed256_UInt8, MS::Packed512_UInt8]));
const Wiw: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_Int16, MS::Packed256_Int16, MS::Packed512_Int16]));
const Wiud: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_UInt32, MS::Packed256_UInt32, MS::Packed512_UInt32]));
const Wiq: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_Int64, MS::Packed256_Int64, MS::Packed512_Int64]));
const Wiuq: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_UInt64, MS::Packed256_UInt64, MS::Packed512_UInt64]));
const Wdup: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Float64, MS::Packed256_Float64, MS::Packed512_Float64]));
const Mps: Op = Op::M(PS);
const Mpd: Op = Op::M(PD);
const Mi: Op = Op::M(PI);

// Half, quarter and eighth-width sources (conversions, pmovsx/zx).
const WhPs: Op = Op::Rm(RegKind::VecHalf, Mem::Len([MS::Packed64_Float32, MS::Packed128_Float32, MS::Packed256_Float32]));
const WhDq: Op = Op::Rm(RegKind::VecHalf, Mem::Len([MS::Packed64_Int32, MS::Packed128_Int32, MS::Packed256_Int32]));
const WhPh: Op = Op::Rm(RegKind::VecHalf, Mem::Len([MS::Packed64_Float16, MS::Packed128_Float16, MS::Packed256_Float16]));
const Wh: Op = Op::Rm(RegKind::VecHalf, Mem::Len([MS::UInt64, MS::UInt128, MS::UInt256]));
const Wq4: Op = Op::Rm(RegKind::VecQuarter, Mem::Len([MS::UInt32, MS::UInt64, MS::UInt128]));
const Wq8: Op = Op::Rm(RegKind::Xmm, Mem::Len([MS::UInt16, MS::UInt32, MS::UInt64]));

const Hx: Op = Op::Vvvv(RegKind::Xmm);
const Lx: Op = Op::Is4(RegKind::Xmm);
const Wss: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float32));
const Wsd: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float64));
const Wpd128: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed128_Float64));
const Wb: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::UInt8));
const Ww: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::UInt16));
const Wd: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::UInt32));
const Wq: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::UInt64));
const Wf128: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float128));
const Wi128: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Int128));
const Mss: Op = Op::M(Mem::Fixed(MS::Float32));
const Msd: Op = Op::M(Mem::Fixed(MS::Float64));
const Mf128: Op = Op::M(Mem::Fixed(MS::Float128));
const Mdq: Op = Op::M(Mem::Fixed(MS::UInt128));
const Mb: Op = Op::M(Mem::Fixed(MS::UInt8));
const Mw: Op = Op::M(Mem::Fixed(MS::UInt16));
const Md: Op = Op::M(Mem::Fixed(MS::UInt32));
const Mq: Op = Op::M(Mem::Fixed(MS::UInt64));

const Gy: Op = Op::Reg(RegKind::GprW);
const By: Op = Op::Vvvv(RegKind::GprW);
const Ey: Op = Op::Rm(RegKind::GprW, Mem::W([MS::UInt32, MS::UInt64]));
const Eyi: Op = Op::Rm(RegKind::GprW, Mem::W([MS::Int32, MS::Int64]));
const Eyb: Op = Op::Rm(RegKind::GprW, Mem::Fixed(MS::UInt8));
const Eyw: Op = Op::Rm(RegKind::GprW, Mem::Fixed(MS::UInt16));
const Ed32: Op = Op::Rm(RegKind::Gpr32, Mem::Fixed(MS::Float32));
const Ew16: Op = Op::Rm(RegKind::Gpr32, Mem::Fixed(MS::UInt16));
const Rd: Op = Op::RmReg(RegKind::Gpr32);
const Rq: Op = Op::RmReg(RegKind::Gpr64);
const rDIx: Op = Op::SegDi(Mem::Fixed(MS::UInt128));

const Kr: Op = Op::Reg(RegKind::Mask);
const Kv: Op = Op::Vvvv(RegKind::Mask);
const Km: Op = Op::RmReg(RegKind::Mask);
const Km8: Op = Op::Rm(RegKind::Mask, Mem::Fixed(MS::UInt8));
const Km16: Op = Op::Rm(RegKind::Mask, Mem::Fixed(MS::UInt16));
const Km32: Op = Op::Rm(RegKind::Mask, Mem::Fixed(MS::UInt32));
const Km64: Op = Op::Rm(RegKind::Mask, Mem::Fixed(MS::UInt64));

// VSIB: the index register kind is VecLen unless the index is narrower
// than the destination (dword index, qword elements).
const VsD: Op = Op::Vsib(RegKind::VecLen, Mem::Fixed(MS::Int32));
const VsDh: Op = Op::Vsib(RegKind::VecHalf, Mem::Fixed(MS::Int64));
const VsQ: Op = Op::Vsib(RegKind::VecLen, Mem::Fixed(MS::Int64));
const VsDps: Op = Op::Vsib(RegKind::VecLen, Mem::Fixed(MS::Float32));
const VsDpdh: Op = Op::Vsib(RegKind::VecHalf, Mem::Fixed(MS::Float64));
const VsQpd: Op = Op::Vsib(RegKind::VecLen, Mem::Fixed(MS::Float64));

pub(super) static TEMPLATES: &[Template] = &[
    // 0F map: moves
    x(M0F, 0x10, VEX_Vmovups_xmm_xmmm128, VEX_Vmovups_ymm_ymmm256, &[Vy, Wps]).np(),
    x(M0F, 0x10, VEX_Vmovupd_xmm_xmmm128, VEX_Vmovupd_ymm_ymmm256, &[Vy, Wpd]).p66(),
    t(M0F, 0x10, VEX_Vmovss_xmm_m32, &[Vx, Mss]).pf3(),
    t(M0F, 0x10, VEX_Vmovss_xmm_xmm_xmm, &[Vx, Hx, Ux]).pf3(),
    t(M0F, 0x10, VEX_Vmovsd_xmm_m64, &[Vx, Msd]).pf2(),
    t(M0F, 0x10, VEX_Vmovsd_xmm_xmm_xmm, &[Vx, Hx, Ux]).pf2(),
    x(M0F, 0x11, VEX_Vmovups_xmmm128_xmm, VEX_Vmovups_ymmm256_ymm, &[Wps, Vy]).np(),
    x(M0F, 0x11, VEX_Vmovupd_xmmm128_xmm, VEX_Vmovupd_ymmm256_ymm, &[Wpd, Vy]).p66(),
    t(M0F, 0x11, VEX_Vmovss_m32_xmm, &[Mss, Vx]).pf3(),
    t(M0F, 0x11, VEX_Vmovss_xmm_xmm_xmm_0F11, &[Ux, Hx, Vx]).pf3(),
    t(M0F, 0x11, VEX_Vmovsd_m64_xmm, &[Msd, Vx]).pf2(),
    t(M0F, 0x11, VEX_Vmovsd_xmm_xmm_xmm_0F11, &[Ux, Hx, Vx]).pf2(),
    t(M0F, 0x12, VEX_Vmovlps_xmm_xmm_m64, &[Vx, Hx, Mq]).np().l128(),
    t(M0F, 0x12, VEX_Vmovhlps_xmm_xmm_xmm, &[Vx, Hx, Ux]).np().l128(),
    t(M0F, 0x12, VEX_Vmovlpd_xmm_xmm_m64, &[Vx, Hx, Mq]).p66().l128(),
    x(M0F, 0x12, VEX_Vmovsldup_xmm_xmmm128, VEX_Vmovsldup_ymm_ymmm256, &[Vy, Wps]).pf3(),
    x(M0F, 0x12, VEX_Vmovddup_xmm_xmmm64, VEX_Vmovddup_ymm_ymmm256, &[Vy, Wdup]).pf2(),
    t(M0F, 0x13, VEX_Vmovlps_m64_xmm, &[Mq, Vx]).np().l128(),
    t(M0F, 0x13, VEX_Vmovlpd_m64_xmm, &[Mq, Vx]).p66().l128(),
    x(M0F, 0x14, VEX_Vunpcklps_xmm_xmm_xmmm128, VEX_Vunpcklps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x14, VEX_Vunpcklpd_xmm_xmm_xmmm128, VEX_Vunpcklpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    x(M0F, 0x15, VEX_Vunpckhps_xmm_xmm_xmmm128, VEX_Vunpckhps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x15, VEX_Vunpckhpd_xmm_xmm_xmmm128, VEX_Vunpckhpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    t(M0F, 0x16, VEX_Vmovhps_xmm_xmm_m64, &[Vx, Hx, Mq]).np().l128(),
    t(M0F, 0x16, VEX_Vmovlhps_xmm_xmm_xmm, &[Vx, Hx, Ux]).np().l128(),
    t(M0F, 0x16, VEX_Vmovhpd_xmm_xmm_m64, &[Vx, Hx, Mq]).p66().l128(),
    x(M0F, 0x16, VEX_Vmovshdup_xmm_xmmm128, VEX_Vmovshdup_ymm_ymmm256, &[Vy, Wps]).pf3(),
    t(M0F, 0x17, VEX_Vmovhps_m64_xmm, &[Mq, Vx]).np().l128(),
    t(M0F, 0x17, VEX_Vmovhpd_m64_xmm, &[Mq, Vx]).p66().l128(),
    x(M0F, 0x28, VEX_Vmovaps_xmm_xmmm128, VEX_Vmovaps_ymm_ymmm256, &[Vy, Wps]).np(),
    x(M0F, 0x28, VEX_Vmovapd_xmm_xmmm128, VEX_Vmovapd_ymm_ymmm256, &[Vy, Wpd]).p66(),
    x(M0F, 0x29, VEX_Vmovaps_xmmm128_xmm, VEX_Vmovaps_ymmm256_ymm, &[Wps, Vy]).np(),
    x(M0F, 0x29, VEX_Vmovapd_xmmm128_xmm, VEX_Vmovapd_ymmm256_ymm, &[Wpd, Vy]).p66(),
    // 0F map: scalar conversions, W selects the GPR width in 64-bit mode
    t(M0F, 0x2A, VEX_Vcvtsi2ss_xmm_xmm_rm64, &[Vx, Hx, Eyi]).pf3().w1().only64(),
    t(M0F, 0x2A, VEX_Vcvtsi2ss_xmm_xmm_rm32, &[Vx, Hx, Eyi]).pf3(),
    t(M0F, 0x2A, VEX_Vcvtsi2sd_xmm_xmm_rm64, &[Vx, Hx, Eyi]).pf2().w1().only64(),
    t(M0F, 0x2A, VEX_Vcvtsi2sd_xmm_xmm_rm32, &[Vx, Hx, Eyi]).pf2(),
    x(M0F, 0x2B, VEX_Vmovntps_m128_xmm, VEX_Vmovntps_m256_ymm, &[Mps, Vy]).np(),
    x(M0F, 0x2B, VEX_Vmovntpd_m128_xmm, VEX_Vmovntpd_m256_ymm, &[Mpd, Vy]).p66(),
    t(M0F, 0x2C, VEX_Vcvttss2si_r64_xmmm32, &[Gy, Wss]).pf3().w1().only64(),
    t(M0F, 0x2C, VEX_Vcvttss2si_r32_xmmm32, &[Gy, Wss]).pf3(),
    t(M0F, 0x2D, VEX_Vcvtss2si_r64_xmmm32, &[Gy, Wss]).pf3().w1().only64(),
    t(M0F, 0x2D, VEX_Vcvtss2si_r32_xmmm32, &[Gy, Wss]).pf3(),
    t(M0F, 0x2C, VEX_Vcvttsd2si_r64_xmmm64, &[Gy, Wsd]).pf2().w1().only64(),
    t(M0F, 0x2C, VEX_Vcvttsd2si_r32_xmmm64, &[Gy, Wsd]).pf2(),
    t(M0F, 0x2D, VEX_Vcvtsd2si_r64_xmmm64, &[Gy, Wsd]).pf2().w1().only64(),
    t(M0F, 0x2D, VEX_Vcvtsd2si_r32_xmmm64, &[Gy, Wsd]).pf2(),
    t(M0F, 0x2E, VEX_Vucomiss_xmm_xmmm32, &[Vx, Wss]).np(),
    t(M0F, 0x2E, VEX_Vucomisd_xmm_xmmm64, &[Vx, Wsd]).p66(),
    t(M0F, 0x2F, VEX_Vcomiss_xmm_xmmm32, &[Vx, Wss]).np(),
    t(M0F, 0x2F, VEX_Vcomisd_xmm_xmmm64, &[Vx, Wsd]).p66(),
    // 0F map: opmask instructions
    t(M0F, 0x41, VEX_Kandw_kr_kr_kr, &[Kr, Kv, Km]).np().w0().l256(),
    t(M0F, 0x41, VEX_Kandq_kr_kr_kr, &[Kr, Kv, Km]).np().w1().l256(),
    t(M0F, 0x41, VEX_Kandb_kr_kr_kr, &[Kr, Kv, Km]).p66().w0().l256(),
    t(M0F, 0x41, VEX_Kandd_kr_kr_kr, &[Kr, Kv, Km]).p66().w1().l256(),
    t(M0F, 0x42, VEX_Kandnw_kr_kr_kr, &[Kr, Kv, Km]).np().w0().l256(),
    t(M0F, 0x42, VEX_Kandnq_kr_kr_kr, &[Kr, Kv, Km]).np().w1().l256(),
    t(M0F, 0x42, VEX_Kandnb_kr_kr_kr, &[Kr, Kv, Km]).p66().w0().l256(),
    t(M0F, 0x42, VEX_Kandnd_kr_kr_kr, &[Kr, Kv, Km]).p66().w1().l256(),
    t(M0F, 0x45, VEX_Korw_kr_kr_kr, &[Kr, Kv, Km]).np().w0().l256(),
    t(M0F, 0x45, VEX_Korq_kr_kr_kr, &[Kr, Kv, Km]).np().w1().l256(),
    t(M0F, 0x45, VEX_Korb_kr_kr_kr, &[Kr, Kv, Km]).p66().w0().l256(),
    t(M0F, 0x45, VEX_Kord_kr_kr_kr, &[Kr, Kv, Km]).p66().w1().l256(),
    t(M0F, 0x46, VEX_Kxnorw_kr_kr_kr, &[Kr, Kv, Km]).np().w0().l256(),
    t(M0F, 0x46, VEX_Kxnorq_kr_kr_kr, &[Kr, Kv, Km]).np().w1().l256(),
    t(M0F, 0x46, VEX_Kxnorb_kr_kr_kr, &[Kr, Kv, Km]).p66().w0().l256(),
    t(M0F, 0x46, VEX_Kxnord_kr_kr_kr, &[Kr, Kv, Km]).p66().w1().l256(),
    t(M0F, 0x47, VEX_Kxorw_kr_kr_kr, &[Kr, Kv, Km]).np().w0().l256(),
    t(M0F, 0x47, VEX_Kxorq_kr_kr_kr, &[Kr, Kv, Km]).np().w1().l256(),
    t(M0F, 0x47, VEX_Kxorb_kr_kr_kr, &[Kr, Kv, Km]).p66().w0().l256(),
    t(M0F, 0x47, VEX_Kxord_kr_kr_kr, &[Kr, Kv, Km]).p66().w1().l256(),
    t(M0F, 0x4A, VEX_Kaddw_kr_kr_kr, &[Kr, Kv, Km]).np().w0().l256(),
    t(M0F, 0x4A, VEX_Kaddq_kr_kr_kr, &[Kr, Kv, Km]).np().w1().l256(),
    t(M0F, 0x4A, VEX_Kaddb_kr_kr_kr, &[Kr, Kv, Km]).p66().w0().l256(),
    t(M0F, 0x4A, VEX_Kaddd_kr_kr_kr, &[Kr, Kv, Km]).p66().w1().l256(),
    t(M0F, 0x44, VEX_Knotw_kr_kr, &[Kr, Km]).np().w0().l128(),
    t(M0F, 0x44, VEX_Knotq_kr_kr, &[Kr, Km]).np().w1().l128(),
    t(M0F, 0x44, VEX_Knotb_kr_kr, &[Kr, Km]).p66().w0().l128(),
    t(M0F, 0x44, VEX_Knotd_kr_kr, &[Kr, Km]).p66().w1().l128(),
    t(M0F, 0x98, VEX_Kortestw_kr_kr, &[Kr, Km]).np().w0().l128(),
    t(M0F, 0x98, VEX_Kortestq_kr_kr, &[Kr, Km]).np().w1().l128(),
    t(M0F, 0x98, VEX_Kortestb_kr_kr, &[Kr, Km]).p66().w0().l128(),
    t(M0F, 0x98, VEX_Kortestd_kr_kr, &[Kr, Km]).p66().w1().l128(),
    t(M0F, 0x99, VEX_Ktestw_kr_kr, &[Kr, Km]).np().w0().l128(),
    t(M0F, 0x99, VEX_Ktestq_kr_kr, &[Kr, Km]).np().w1().l128(),
    t(M0F, 0x99, VEX_Ktestb_kr_kr, &[Kr, Km]).p66().w0().l128(),
    t(M0F, 0x99, VEX_Ktestd_kr_kr, &[Kr, Km]).p66().w1().l128(),
    t(M0F, 0x4B, VEX_Kunpckbw_kr_kr_kr, &[Kr, Kv, Km]).p66().w0().l256(),
    t(M0F, 0x4B, VEX_Kunpckwd_kr_kr_kr, &[Kr, Kv, Km]).np().w0().l256(),
    t(M0F, 0x4B, VEX_Kunpckdq_kr_kr_kr, &[Kr, Kv, Km]).np().w1().l256(),
    t(M0F, 0x90, VEX_Kmovw_kr_km16, &[Kr, Km16]).np().w0().l128(),
    t(M0F, 0x90, VEX_Kmovq_kr_km64, &[Kr, Km64]).np().w1().l128(),
    t(M0F, 0x90, VEX_Kmovb_kr_km8, &[Kr, Km8]).p66().w0().l128(),
    t(M0F, 0x90, VEX_Kmovd_kr_km32, &[Kr, Km32]).p66().w1().l128(),
    t(M0F, 0x91, VEX_Kmovw_m16_kr, &[Mw, Kr]).np().w0().l128(),
    t(M0F, 0x91, VEX_Kmovq_m64_kr, &[Mq, Kr]).np().w1().l128(),
    t(M0F, 0x91, VEX_Kmovb_m8_kr, &[Mb, Kr]).p66().w0().l128(),
    t(M0F, 0x91, VEX_Kmovd_m32_kr, &[Md, Kr]).p66().w1().l128(),
    t(M0F, 0x92, VEX_Kmovw_kr_r32, &[Kr, Rd]).np().w0().l128(),
    t(M0F, 0x92, VEX_Kmovb_kr_r32, &[Kr, Rd]).p66().w0().l128(),
    t(M0F, 0x92, VEX_Kmovd_kr_r32, &[Kr, Rd]).pf2().w0().l128(),
    t(M0F, 0x92, VEX_Kmovq_kr_r64, &[Kr, Rq]).pf2().w1().l128().only64(),
    t(M0F, 0x93, VEX_Kmovw_r32_kr, &[Gd, Km]).np().w0().l128(),
    t(M0F, 0x93, VEX_Kmovb_r32_kr, &[Gd, Km]).p66().w0().l128(),
    t(M0F, 0x93, VEX_Kmovd_r32_kr, &[Gd, Km]).pf2().w0().l128(),
    t(M0F, 0x93, VEX_Kmovq_r64_kr, &[Gq, Km]).pf2().w1().l128().only64(),
    // 0F map: arithmetic and logic
    x(M0F, 0x50, VEX_Vmovmskps_r32_xmm, VEX_Vmovmskps_r32_ymm, &[Gd, Uy]).np(),
    x(M0F, 0x50, VEX_Vmovmskpd_r32_xmm, VEX_Vmovmskpd_r32_ymm, &[Gd, Uy]).p66(),
    x(M0F, 0x51, VEX_Vsqrtps_xmm_xmmm128, VEX_Vsqrtps_ymm_ymmm256, &[Vy, Wps]).np(),
    x(M0F, 0x51, VEX_Vsqrtpd_xmm_xmmm128, VEX_Vsqrtpd_ymm_ymmm256, &[Vy, Wpd]).p66(),
    t(M0F, 0x51, VEX_Vsqrtss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    t(M0F, 0x51, VEX_Vsqrtsd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).pf2(),
    x(M0F, 0x52, VEX_Vrsqrtps_xmm_xmmm128, VEX_Vrsqrtps_ymm_ymmm256, &[Vy, Wps]).np(),
    t(M0F, 0x52, VEX_Vrsqrtss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    x(M0F, 0x53, VEX_Vrcpps_xmm_xmmm128, VEX_Vrcpps_ymm_ymmm256, &[Vy, Wps]).np(),
    t(M0F, 0x53, VEX_Vrcpss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    x(M0F, 0x54, VEX_Vandps_xmm_xmm_xmmm128, VEX_Vandps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x54, VEX_Vandpd_xmm_xmm_xmmm128, VEX_Vandpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    x(M0F, 0x55, VEX_Vandnps_xmm_xmm_xmmm128, VEX_Vandnps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x55, VEX_Vandnpd_xmm_xmm_xmmm128, VEX_Vandnpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    x(M0F, 0x56, VEX_Vorps_xmm_xmm_xmmm128, VEX_Vorps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x56, VEX_Vorpd_xmm_xmm_xmmm128, VEX_Vorpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    x(M0F, 0x57, VEX_Vxorps_xmm_xmm_xmmm128, VEX_Vxorps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x57, VEX_Vxorpd_xmm_xmm_xmmm128, VEX_Vxorpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    x(M0F, 0x58, VEX_Vaddps_xmm_xmm_xmmm128, VEX_Vaddps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x58, VEX_Vaddpd_xmm_xmm_xmmm128, VEX_Vaddpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    t(M0F, 0x58, VEX_Vaddss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    t(M0F, 0x58, VEX_Vaddsd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).pf2(),
    x(M0F, 0x59, VEX_Vmulps_xmm_xmm_xmmm128, VEX_Vmulps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x59, VEX_Vmulpd_xmm_xmm_xmmm128, VEX_Vmulpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    t(M0F, 0x59, VEX_Vmulss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    t(M0F, 0x59, VEX_Vmulsd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).pf2(),
    x(M0F, 0x5C, VEX_Vsubps_xmm_xmm_xmmm128, VEX_Vsubps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x5C, VEX_Vsubpd_xmm_xmm_xmmm128, VEX_Vsubpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    t(M0F, 0x5C, VEX_Vsubss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    t(M0F, 0x5C, VEX_Vsubsd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).pf2(),
    x(M0F, 0x5D, VEX_Vminps_xmm_xmm_xmmm128, VEX_Vminps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x5D, VEX_Vminpd_xmm_xmm_xmmm128, VEX_Vminpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    t(M0F, 0x5D, VEX_Vminss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    t(M0F, 0x5D, VEX_Vminsd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).pf2(),
    x(M0F, 0x5E, VEX_Vdivps_xmm_xmm_xmmm128, VEX_Vdivps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x5E, VEX_Vdivpd_xmm_xmm_xmmm128, VEX_Vdivpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    t(M0F, 0x5E, VEX_Vdivss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    t(M0F, 0x5E, VEX_Vdivsd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).pf2(),
    x(M0F, 0x5F, VEX_Vmaxps_xmm_xmm_xmmm128, VEX_Vmaxps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).np(),
    x(M0F, 0x5F, VEX_Vmaxpd_xmm_xmm_xmmm128, VEX_Vmaxpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    t(M0F, 0x5F, VEX_Vmaxss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    t(M0F, 0x5F, VEX_Vmaxsd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).pf2(),
    x(M0F, 0x5A, VEX_Vcvtps2pd_xmm_xmmm64, VEX_Vcvtps2pd_ymm_xmmm128, &[Vy, WhPs]).np(),
    x(M0F, 0x5A, VEX_Vcvtpd2ps_xmm_xmmm128, VEX_Vcvtpd2ps_xmm_ymmm256, &[Vx, Wpd]).p66(),
    t(M0F, 0x5A, VEX_Vcvtss2sd_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).pf3(),
    t(M0F, 0x5A, VEX_Vcvtsd2ss_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).pf2(),
    x(M0F, 0x5B, VEX_Vcvtdq2ps_xmm_xmmm128, VEX_Vcvtdq2ps_ymm_ymmm256, &[Vy, Wdq]).np(),
    x(M0F, 0x5B, VEX_Vcvtps2dq_xmm_xmmm128, VEX_Vcvtps2dq_ymm_ymmm256, &[Vy, Wps]).p66(),
    x(M0F, 0x5B, VEX_Vcvttps2dq_xmm_xmmm128, VEX_Vcvttps2dq_ymm_ymmm256, &[Vy, Wps]).pf3(),
    // 0F map: packed integer
    x(M0F, 0x60, VEX_Vpunpcklbw_xmm_xmm_xmmm128, VEX_Vpunpcklbw_ymm_ymm_ymmm256, &[Vy, Hy, Wib]).p66(),
    x(M0F, 0x61, VEX_Vpunpcklwd_xmm_xmm_xmmm128, VEX_Vpunpcklwd_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M0F, 0x62, VEX_Vpunpckldq_xmm_xmm_xmmm128, VEX_Vpunpckldq_ymm_ymm_ymmm256, &[Vy, Hy, Wdq]).p66(),
    x(M0F, 0x63, VEX_Vpacksswb_xmm_xmm_xmmm128, VEX_Vpacksswb_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M0F, 0x64, VEX_Vpcmpgtb_xmm_xmm_xmmm128, VEX_Vpcmpgtb_ymm_ymm_ymmm256, &[Vy, Hy, Wib]).p66(),
    x(M0F, 0x65, VEX_Vpcmpgtw_xmm_xmm_xmmm128, VEX_Vpcmpgtw_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M0F, 0x66, VEX_Vpcmpgtd_xmm_xmm_xmmm128, VEX_Vpcmpgtd_ymm_ymm_ymmm256, &[Vy, Hy, Wdq]).p66(),
    x(M0F, 0x67, VEX_Vpackuswb_xmm_xmm_xmmm128, VEX_Vpackuswb_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M0F, 0x68, VEX_Vpunpckhbw_xmm_xmm_xmmm128, VEX_Vpunpckhbw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0x69, VEX_Vpunpckhwd_xmm_xmm_xmmm128, VEX_Vpunpckhwd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0x6A, VEX_Vpunpckhdq_xmm_xmm_xmmm128, VEX_Vpunpckhdq_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0x6B, VEX_Vpackssdw_xmm_xmm_xmmm128, VEX_Vpackssdw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0x6C, VEX_Vpunpcklqdq_xmm_xmm_xmmm128, VEX_Vpunpcklqdq_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0x6D, VEX_Vpunpckhqdq_xmm_xmm_xmmm128, VEX_Vpunpckhqdq_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0x74, VEX_Vpcmpeqb_xmm_xmm_xmmm128, VEX_Vpcmpeqb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0x75, VEX_Vpcmpeqw_xmm_xmm_xmmm128, VEX_Vpcmpeqw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0x76, VEX_Vpcmpeqd_xmm_xmm_xmmm128, VEX_Vpcmpeqd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    t(M0F, 0x6E, VEX_Vmovq_xmm_rm64, &[Vx, Ey]).p66().l128().w1().only64(),
    t(M0F, 0x6E, VEX_Vmovd_xmm_rm32, &[Vx, Ey]).p66().l128(),
    x(M0F, 0x6F, VEX_Vmovdqa_xmm_xmmm128, VEX_Vmovdqa_ymm_ymmm256, &[Vy, Wi]).p66(),
    x(M0F, 0x6F, VEX_Vmovdqu_xmm_xmmm128, VEX_Vmovdqu_ymm_ymmm256, &[Vy, Wi]).pf3(),
    x(M0F, 0x70, VEX_Vpshufd_xmm_xmmm128_imm8, VEX_Vpshufd_ymm_ymmm256_imm8, &[Vy, Wi, Ib]).p66(),
    x(M0F, 0x70, VEX_Vpshufhw_xmm_xmmm128_imm8, VEX_Vpshufhw_ymm_ymmm256_imm8, &[Vy, Wi, Ib]).pf3(),
    x(M0F, 0x70, VEX_Vpshuflw_xmm_xmmm128_imm8, VEX_Vpshuflw_ymm_ymmm256_imm8, &[Vy, Wi, Ib]).pf2(),
    x(M0F, 0x71, VEX_Vpsrlw_xmm_xmm_imm8, VEX_Vpsrlw_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(2),
    x(M0F, 0x71, VEX_Vpsraw_xmm_xmm_imm8, VEX_Vpsraw_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(4),
    x(M0F, 0x71, VEX_Vpsllw_xmm_xmm_imm8, VEX_Vpsllw_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(6),
    x(M0F, 0x72, VEX_Vpsrld_xmm_xmm_imm8, VEX_Vpsrld_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(2),
    x(M0F, 0x72, VEX_Vpsrad_xmm_xmm_imm8, VEX_Vpsrad_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(4),
    x(M0F, 0x72, VEX_Vpslld_xmm_xmm_imm8, VEX_Vpslld_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(6),
    x(M0F, 0x73, VEX_Vpsrlq_xmm_xmm_imm8, VEX_Vpsrlq_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(2),
    x(M0F, 0x73, VEX_Vpsrldq_xmm_xmm_imm8, VEX_Vpsrldq_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(3),
    x(M0F, 0x73, VEX_Vpsllq_xmm_xmm_imm8, VEX_Vpsllq_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(6),
    x(M0F, 0x73, VEX_Vpslldq_xmm_xmm_imm8, VEX_Vpslldq_ymm_ymm_imm8, &[Hy, Uy, Ib]).p66().reg(7),
    t(M0F, 0x77, VEX_Vzeroupper, &[]).np().l128(),
    t(M0F, 0x77, VEX_Vzeroall, &[]).np().l256(),
    x(M0F, 0x7C, VEX_Vhaddpd_xmm_xmm_xmmm128, VEX_Vhaddpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    x(M0F, 0x7C, VEX_Vhaddps_xmm_xmm_xmmm128, VEX_Vhaddps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).pf2(),
    x(M0F, 0x7D, VEX_Vhsubpd_xmm_xmm_xmmm128, VEX_Vhsubpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    x(M0F, 0x7D, VEX_Vhsubps_xmm_xmm_xmmm128, VEX_Vhsubps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).pf2(),
    t(M0F, 0x7E, VEX_Vmovq_rm64_xmm, &[Ey, Vx]).p66().l128().w1().only64(),
    t(M0F, 0x7E, VEX_Vmovd_rm32_xmm, &[Ey, Vx]).p66().l128(),
    t(M0F, 0x7E, VEX_Vmovq_xmm_xmmm64, &[Vx, Wq]).pf3().l128(),
    x(M0F, 0x7F, VEX_Vmovdqa_xmmm128_xmm, VEX_Vmovdqa_ymmm256_ymm, &[Wi, Vy]).p66(),
    x(M0F, 0x7F, VEX_Vmovdqu_xmmm128_xmm, VEX_Vmovdqu_ymmm256_ymm, &[Wi, Vy]).pf3(),
    t(M0F, 0xAE, VEX_Vldmxcsr_m32, &[Md]).np().reg(2).l128(),
    t(M0F, 0xAE, VEX_Vstmxcsr_m32, &[Md]).np().reg(3).l128(),
    x(M0F, 0xC2, VEX_Vcmpps_xmm_xmm_xmmm128_imm8, VEX_Vcmpps_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wps, Ib]).np(),
    x(M0F, 0xC2, VEX_Vcmppd_xmm_xmm_xmmm128_imm8, VEX_Vcmppd_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wpd, Ib]).p66(),
    t(M0F, 0xC2, VEX_Vcmpss_xmm_xmm_xmmm32_imm8, &[Vx, Hx, Wss, Ib]).pf3(),
    t(M0F, 0xC2, VEX_Vcmpsd_xmm_xmm_xmmm64_imm8, &[Vx, Hx, Wsd, Ib]).pf2(),
    t(M0F, 0xC4, VEX_Vpinsrw_xmm_xmm_r32m16_imm8, &[Vx, Hx, Ew16, Ib]).p66().l128(),
    t(M0F, 0xC5, VEX_Vpextrw_r32_xmm_imm8, &[Gd, Ux, Ib]).p66().l128(),
    x(M0F, 0xC6, VEX_Vshufps_xmm_xmm_xmmm128_imm8, VEX_Vshufps_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wps, Ib]).np(),
    x(M0F, 0xC6, VEX_Vshufpd_xmm_xmm_xmmm128_imm8, VEX_Vshufpd_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wpd, Ib]).p66(),
    x(M0F, 0xD0, VEX_Vaddsubpd_xmm_xmm_xmmm128, VEX_Vaddsubpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66(),
    x(M0F, 0xD0, VEX_Vaddsubps_xmm_xmm_xmmm128, VEX_Vaddsubps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).pf2(),
    x(M0F, 0xD1, VEX_Vpsrlw_xmm_xmm_xmmm128, VEX_Vpsrlw_ymm_ymm_xmmm128, &[Vy, Hy, Wpuq]).p66(),
    x(M0F, 0xD2, VEX_Vpsrld_xmm_xmm_xmmm128, VEX_Vpsrld_ymm_ymm_xmmm128, &[Vy, Hy, Wpuq]).p66(),
    x(M0F, 0xD3, VEX_Vpsrlq_xmm_xmm_xmmm128, VEX_Vpsrlq_ymm_ymm_xmmm128, &[Vy, Hy, Wpuq]).p66(),
    x(M0F, 0xE1, VEX_Vpsraw_xmm_xmm_xmmm128, VEX_Vpsraw_ymm_ymm_xmmm128, &[Vy, Hy, Wx]).p66(),
    x(M0F, 0xE2, VEX_Vpsrad_xmm_xmm_xmmm128, VEX_Vpsrad_ymm_ymm_xmmm128, &[Vy, Hy, Wx]).p66(),
    x(M0F, 0xF1, VEX_Vpsllw_xmm_xmm_xmmm128, VEX_Vpsllw_ymm_ymm_xmmm128, &[Vy, Hy, Wpuq]).p66(),
    x(M0F, 0xF2, VEX_Vpslld_xmm_xmm_xmmm128, VEX_Vpslld_ymm_ymm_xmmm128, &[Vy, Hy, Wpuq]).p66(),
    x(M0F, 0xF3, VEX_Vpsllq_xmm_xmm_xmmm128, VEX_Vpsllq_ymm_ymm_xmmm128, &[Vy, Hy, Wpuq]).p66(),
    x(M0F, 0xD4, VEX_Vpaddq_xmm_xmm_xmmm128, VEX_Vpaddq_ymm_ymm_ymmm256, &[Vy, Hy, Wiuq]).p66(),
    x(M0F, 0xD5, VEX_Vpmullw_xmm_xmm_xmmm128, VEX_Vpmullw_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M0F, 0xD8, VEX_Vpsubusb_xmm_xmm_xmmm128, VEX_Vpsubusb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xD9, VEX_Vpsubusw_xmm_xmm_xmmm128, VEX_Vpsubusw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xDA, VEX_Vpminub_xmm_xmm_xmmm128, VEX_Vpminub_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xDB, VEX_Vpand_xmm_xmm_xmmm128, VEX_Vpand_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xDC, VEX_Vpaddusb_xmm_xmm_xmmm128, VEX_Vpaddusb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xDD, VEX_Vpaddusw_xmm_xmm_xmmm128, VEX_Vpaddusw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xDE, VEX_Vpmaxub_xmm_xmm_xmmm128, VEX_Vpmaxub_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xDF, VEX_Vpandn_xmm_xmm_xmmm128, VEX_Vpandn_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xE0, VEX_Vpavgb_xmm_xmm_xmmm128, VEX_Vpavgb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xE3, VEX_Vpavgw_xmm_xmm_xmmm128, VEX_Vpavgw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xE4, VEX_Vpmulhuw_xmm_xmm_xmmm128, VEX_Vpmulhuw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xE5, VEX_Vpmulhw_xmm_xmm_xmmm128, VEX_Vpmulhw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xE8, VEX_Vpsubsb_xmm_xmm_xmmm128, VEX_Vpsubsb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xE9, VEX_Vpsubsw_xmm_xmm_xmmm128, VEX_Vpsubsw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xEA, VEX_Vpminsw_xmm_xmm_xmmm128, VEX_Vpminsw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xEB, VEX_Vpor_xmm_xmm_xmmm128, VEX_Vpor_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xEC, VEX_Vpaddsb_xmm_xmm_xmmm128, VEX_Vpaddsb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xED, VEX_Vpaddsw_xmm_xmm_xmmm128, VEX_Vpaddsw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xEE, VEX_Vpmaxsw_xmm_xmm_xmmm128, VEX_Vpmaxsw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xEF, VEX_Vpxor_xmm_xmm_xmmm128, VEX_Vpxor_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xF4, VEX_Vpmuludq_xmm_xmm_xmmm128, VEX_Vpmuludq_ymm_ymm_ymmm256, &[Vy, Hy, Wiud]).p66(),
    x(M0F, 0xF5, VEX_Vpmaddwd_xmm_xmm_xmmm128, VEX_Vpmaddwd_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M0F, 0xF6, VEX_Vpsadbw_xmm_xmm_xmmm128, VEX_Vpsadbw_ymm_ymm_ymmm256, &[Vy, Hy, Wiub]).p66(),
    x(M0F, 0xF8, VEX_Vpsubb_xmm_xmm_xmmm128, VEX_Vpsubb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xF9, VEX_Vpsubw_xmm_xmm_xmmm128, VEX_Vpsubw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xFA, VEX_Vpsubd_xmm_xmm_xmmm128, VEX_Vpsubd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xFB, VEX_Vpsubq_xmm_xmm_xmmm128, VEX_Vpsubq_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xFC, VEX_Vpaddb_xmm_xmm_xmmm128, VEX_Vpaddb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xFD, VEX_Vpaddw_xmm_xmm_xmmm128, VEX_Vpaddw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M0F, 0xFE, VEX_Vpaddd_xmm_xmm_xmmm128, VEX_Vpaddd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    t(M0F, 0xD6, VEX_Vmovq_xmmm64_xmm, &[Wq, Vx]).p66().l128(),
    x(M0F, 0xD7, VEX_Vpmovmskb_r32_xmm, VEX_Vpmovmskb_r32_ymm, &[Gd, Uy]).p66(),
    x(M0F, 0xE6, VEX_Vcvttpd2dq_xmm_xmmm128, VEX_Vcvttpd2dq_xmm_ymmm256, &[Vx, Wpd]).p66(),
    x(M0F, 0xE6, VEX_Vcvtdq2pd_xmm_xmmm64, VEX_Vcvtdq2pd_ymm_xmmm128, &[Vy, WhDq]).pf3(),
    x(M0F, 0xE6, VEX_Vcvtpd2dq_xmm_xmmm128, VEX_Vcvtpd2dq_xmm_ymmm256, &[Vx, Wpd]).pf2(),
    x(M0F, 0xE7, VEX_Vmovntdq_m128_xmm, VEX_Vmovntdq_m256_ymm, &[Mi, Vy]).p66(),
    x(M0F, 0xF0, VEX_Vlddqu_xmm_m128, VEX_Vlddqu_ymm_m256, &[Vy, Mi]).pf2(),
    t(M0F, 0xF7, VEX_Vmaskmovdqu_rDI_xmm_xmm, &[rDIx, Vx, Ux]).p66().l128(),
    // 0F38 map
    x(M38, 0x00, VEX_Vpshufb_xmm_xmm_xmmm128, VEX_Vpshufb_ymm_ymm_ymmm256, &[Vy, Hy, Wiub]).p66(),
    x(M38, 0x01, VEX_Vphaddw_xmm_xmm_xmmm128, VEX_Vphaddw_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M38, 0x02, VEX_Vphaddd_xmm_xmm_xmmm128, VEX_Vphaddd_ymm_ymm_ymmm256, &[Vy, Hy, Wdq]).p66(),
    x(M38, 0x03, VEX_Vphaddsw_xmm_xmm_xmmm128, VEX_Vphaddsw_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M38, 0x04, VEX_Vpmaddubsw_xmm_xmm_xmmm128, VEX_Vpmaddubsw_ymm_ymm_ymmm256, &[Vy, Hy, Wib]).p66(),
    x(M38, 0x05, VEX_Vphsubw_xmm_xmm_xmmm128, VEX_Vphsubw_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M38, 0x06, VEX_Vphsubd_xmm_xmm_xmmm128, VEX_Vphsubd_ymm_ymm_ymmm256, &[Vy, Hy, Wdq]).p66(),
    x(M38, 0x07, VEX_Vphsubsw_xmm_xmm_xmmm128, VEX_Vphsubsw_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M38, 0x08, VEX_Vpsignb_xmm_xmm_xmmm128, VEX_Vpsignb_ymm_ymm_ymmm256, &[Vy, Hy, Wib]).p66(),
    x(M38, 0x09, VEX_Vpsignw_xmm_xmm_xmmm128, VEX_Vpsignw_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M38, 0x0A, VEX_Vpsignd_xmm_xmm_xmmm128, VEX_Vpsignd_ymm_ymm_ymmm256, &[Vy, Hy, Wdq]).p66(),
    x(M38, 0x0B, VEX_Vpmulhrsw_xmm_xmm_xmmm128, VEX_Vpmulhrsw_ymm_ymm_ymmm256, &[Vy, Hy, Wiw]).p66(),
    x(M38, 0x28, VEX_Vpmuldq_xmm_xmm_xmmm128, VEX_Vpmuldq_ymm_ymm_ymmm256, &[Vy, Hy, Wdq]).p66(),
    x(M38, 0x29, VEX_Vpcmpeqq_xmm_xmm_xmmm128, VEX_Vpcmpeqq_ymm_ymm_ymmm256, &[Vy, Hy, Wiq]).p66(),
    x(M38, 0x2B, VEX_Vpackusdw_xmm_xmm_xmmm128, VEX_Vpackusdw_ymm_ymm_ymmm256, &[Vy, Hy, Wdq]).p66(),
    x(M38, 0x37, VEX_Vpcmpgtq_xmm_xmm_xmmm128, VEX_Vpcmpgtq_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x38, VEX_Vpminsb_xmm_xmm_xmmm128, VEX_Vpminsb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x39, VEX_Vpminsd_xmm_xmm_xmmm128, VEX_Vpminsd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x3A, VEX_Vpminuw_xmm_xmm_xmmm128, VEX_Vpminuw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x3B, VEX_Vpminud_xmm_xmm_xmmm128, VEX_Vpminud_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x3C, VEX_Vpmaxsb_xmm_xmm_xmmm128, VEX_Vpmaxsb_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x3D, VEX_Vpmaxsd_xmm_xmm_xmmm128, VEX_Vpmaxsd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x3E, VEX_Vpmaxuw_xmm_xmm_xmmm128, VEX_Vpmaxuw_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x3F, VEX_Vpmaxud_xmm_xmm_xmmm128, VEX_Vpmaxud_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x40, VEX_Vpmulld_xmm_xmm_xmmm128, VEX_Vpmulld_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0x0C, VEX_Vpermilps_xmm_xmm_xmmm128, VEX_Vpermilps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0x0D, VEX_Vpermilpd_xmm_xmm_xmmm128, VEX_Vpermilpd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w0(),
    x(M38, 0x0E, VEX_Vtestps_xmm_xmmm128, VEX_Vtestps_ymm_ymmm256, &[Vy, Wps]).p66().w0(),
    x(M38, 0x0F, VEX_Vtestpd_xmm_xmmm128, VEX_Vtestpd_ymm_ymmm256, &[Vy, Wpd]).p66().w0(),
    x(M38, 0x13, VEX_Vcvtph2ps_xmm_xmmm64, VEX_Vcvtph2ps_ymm_xmmm128, &[Vy, WhPh]).p66().w0(),
    t(M38, 0x16, VEX_Vpermps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0().l256(),
    x(M38, 0x17, VEX_Vptest_xmm_xmmm128, VEX_Vptest_ymm_ymmm256, &[Vy, Wi]).p66(),
    x(M38, 0x18, VEX_Vbroadcastss_xmm_m32, VEX_Vbroadcastss_ymm_m32, &[Vy, Mss]).p66().w0(),
    x(M38, 0x18, VEX_Vbroadcastss_xmm_xmm, VEX_Vbroadcastss_ymm_xmm, &[Vy, Ux]).p66().w0(),
    t(M38, 0x19, VEX_Vbroadcastsd_ymm_m64, &[Vy, Msd]).p66().w0().l256(),
    t(M38, 0x19, VEX_Vbroadcastsd_ymm_xmm, &[Vy, Ux]).p66().w0().l256(),
    t(M38, 0x1A, VEX_Vbroadcastf128_ymm_m128, &[Vy, Mf128]).p66().w0().l256(),
    x(M38, 0x1C, VEX_Vpabsb_xmm_xmmm128, VEX_Vpabsb_ymm_ymmm256, &[Vy, Wib]).p66(),
    x(M38, 0x1D, VEX_Vpabsw_xmm_xmmm128, VEX_Vpabsw_ymm_ymmm256, &[Vy, Wiw]).p66(),
    x(M38, 0x1E, VEX_Vpabsd_xmm_xmmm128, VEX_Vpabsd_ymm_ymmm256, &[Vy, Wdq]).p66(),
    x(M38, 0x20, VEX_Vpmovsxbw_xmm_xmmm64, VEX_Vpmovsxbw_ymm_xmmm128, &[Vy, Wh]).p66(),
    x(M38, 0x21, VEX_Vpmovsxbd_xmm_xmmm32, VEX_Vpmovsxbd_ymm_xmmm64, &[Vy, Wq4]).p66(),
    x(M38, 0x22, VEX_Vpmovsxbq_xmm_xmmm16, VEX_Vpmovsxbq_ymm_xmmm32, &[Vy, Wq8]).p66(),
    x(M38, 0x23, VEX_Vpmovsxwd_xmm_xmmm64, VEX_Vpmovsxwd_ymm_xmmm128, &[Vy, Wh]).p66(),
    x(M38, 0x24, VEX_Vpmovsxwq_xmm_xmmm32, VEX_Vpmovsxwq_ymm_xmmm64, &[Vy, Wq4]).p66(),
    x(M38, 0x25, VEX_Vpmovsxdq_xmm_xmmm64, VEX_Vpmovsxdq_ymm_xmmm128, &[Vy, Wh]).p66(),
    x(M38, 0x30, VEX_Vpmovzxbw_xmm_xmmm64, VEX_Vpmovzxbw_ymm_xmmm128, &[Vy, Wh]).p66(),
    x(M38, 0x31, VEX_Vpmovzxbd_xmm_xmmm32, VEX_Vpmovzxbd_ymm_xmmm64, &[Vy, Wq4]).p66(),
    x(M38, 0x32, VEX_Vpmovzxbq_xmm_xmmm16, VEX_Vpmovzxbq_ymm_xmmm32, &[Vy, Wq8]).p66(),
    x(M38, 0x33, VEX_Vpmovzxwd_xmm_xmmm64, VEX_Vpmovzxwd_ymm_xmmm128, &[Vy, Wh]).p66(),
    x(M38, 0x34, VEX_Vpmovzxwq_xmm_xmmm32, VEX_Vpmovzxwq_ymm_xmmm64, &[Vy, Wq4]).p66(),
    x(M38, 0x35, VEX_Vpmovzxdq_xmm_xmmm64, VEX_Vpmovzxdq_ymm_xmmm128, &[Vy, Wh]).p66(),
    x(M38, 0x2A, VEX_Vmovntdqa_xmm_m128, VEX_Vmovntdqa_ymm_m256, &[Vy, Mi]).p66(),
    x(M38, 0x2C, VEX_Vmaskmovps_xmm_xmm_m128, VEX_Vmaskmovps_ymm_ymm_m256, &[Vy, Hy, Mps]).p66().w0(),
    x(M38, 0x2D, VEX_Vmaskmovpd_xmm_xmm_m128, VEX_Vmaskmovpd_ymm_ymm_m256, &[Vy, Hy, Mpd]).p66().w0(),
    x(M38, 0x2E, VEX_Vmaskmovps_m128_xmm_xmm, VEX_Vmaskmovps_m256_ymm_ymm, &[Mps, Hy, Vy]).p66().w0(),
    x(M38, 0x2F, VEX_Vmaskmovpd_m128_xmm_xmm, VEX_Vmaskmovpd_m256_ymm_ymm, &[Mpd, Hy, Vy]).p66().w0(),
    t(M38, 0x36, VEX_Vpermd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66().w0().l256(),
    t(M38, 0x41, VEX_Vphminposuw_xmm_xmmm128, &[Vx, Wx]).p66().l128(),
    x(M38, 0x45, VEX_Vpsrlvd_xmm_xmm_xmmm128, VEX_Vpsrlvd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66().w0(),
    x(M38, 0x45, VEX_Vpsrlvq_xmm_xmm_xmmm128, VEX_Vpsrlvq_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66().w1(),
    x(M38, 0x46, VEX_Vpsravd_xmm_xmm_xmmm128, VEX_Vpsravd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66().w0(),
    x(M38, 0x47, VEX_Vpsllvd_xmm_xmm_xmmm128, VEX_Vpsllvd_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66().w0(),
    x(M38, 0x47, VEX_Vpsllvq_xmm_xmm_xmmm128, VEX_Vpsllvq_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66().w1(),
    x(M38, 0x58, VEX_Vpbroadcastd_xmm_xmmm32, VEX_Vpbroadcastd_ymm_xmmm32, &[Vy, Wd]).p66().w0(),
    x(M38, 0x59, VEX_Vpbroadcastq_xmm_xmmm64, VEX_Vpbroadcastq_ymm_xmmm64, &[Vy, Wq]).p66().w0(),
    t(M38, 0x5A, VEX_Vbroadcasti128_ymm_m128, &[Vy, Mdq]).p66().w0().l256(),
    x(M38, 0x78, VEX_Vpbroadcastb_xmm_xmmm8, VEX_Vpbroadcastb_ymm_xmmm8, &[Vy, Wb]).p66().w0(),
    x(M38, 0x79, VEX_Vpbroadcastw_xmm_xmmm16, VEX_Vpbroadcastw_ymm_xmmm16, &[Vy, Ww]).p66().w0(),
    x(M38, 0x8C, VEX_Vpmaskmovd_xmm_xmm_m128, VEX_Vpmaskmovd_ymm_ymm_m256, &[Vy, Hy, Mi]).p66().w0(),
    x(M38, 0x8C, VEX_Vpmaskmovq_xmm_xmm_m128, VEX_Vpmaskmovq_ymm_ymm_m256, &[Vy, Hy, Mi]).p66().w1(),
    x(M38, 0x8E, VEX_Vpmaskmovd_m128_xmm_xmm, VEX_Vpmaskmovd_m256_ymm_ymm, &[Mi, Hy, Vy]).p66().w0(),
    x(M38, 0x8E, VEX_Vpmaskmovq_m128_xmm_xmm, VEX_Vpmaskmovq_m256_ymm_ymm, &[Mi, Hy, Vy]).p66().w1(),
    // 0F38 map: gathers
    x(M38, 0x90, VEX_Vpgatherdd_xmm_vm32x_xmm, VEX_Vpgatherdd_ymm_vm32y_ymm, &[Vy, VsD, Hy]).p66().w0(),
    x(M38, 0x90, VEX_Vpgatherdq_xmm_vm32x_xmm, VEX_Vpgatherdq_ymm_vm32x_ymm, &[Vy, VsDh, Hy]).p66().w1(),
    x(M38, 0x91, VEX_Vpgatherqd_xmm_vm64x_xmm, VEX_Vpgatherqd_xmm_vm64y_xmm, &[Vx, VsD, Hx]).p66().w0(),
    x(M38, 0x91, VEX_Vpgatherqq_xmm_vm64x_xmm, VEX_Vpgatherqq_ymm_vm64y_ymm, &[Vy, VsQ, Hy]).p66().w1(),
    x(M38, 0x92, VEX_Vgatherdps_xmm_vm32x_xmm, VEX_Vgatherdps_ymm_vm32y_ymm, &[Vy, VsDps, Hy]).p66().w0(),
    x(M38, 0x92, VEX_Vgatherdpd_xmm_vm32x_xmm, VEX_Vgatherdpd_ymm_vm32x_ymm, &[Vy, VsDpdh, Hy]).p66().w1(),
    x(M38, 0x93, VEX_Vgatherqps_xmm_vm64x_xmm, VEX_Vgatherqps_xmm_vm64y_xmm, &[Vx, VsDps, Hx]).p66().w0(),
    x(M38, 0x93, VEX_Vgatherqpd_xmm_vm64x_xmm, VEX_Vgatherqpd_ymm_vm64y_ymm, &[Vy, VsQpd, Hy]).p66().w1(),
    // 0F38 map: FMA3
    x(M38, 0x96, VEX_Vfmaddsub132ps_xmm_xmm_xmmm128, VEX_Vfmaddsub132ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0x96, VEX_Vfmaddsub132pd_xmm_xmm_xmmm128, VEX_Vfmaddsub132pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    x(M38, 0x97, VEX_Vfmsubadd132ps_xmm_xmm_xmmm128, VEX_Vfmsubadd132ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0x97, VEX_Vfmsubadd132pd_xmm_xmm_xmmm128, VEX_Vfmsubadd132pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    x(M38, 0x98, VEX_Vfmadd132ps_xmm_xmm_xmmm128, VEX_Vfmadd132ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0x98, VEX_Vfmadd132pd_xmm_xmm_xmmm128, VEX_Vfmadd132pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0x99, VEX_Vfmadd132ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0x99, VEX_Vfmadd132sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0x9A, VEX_Vfmsub132ps_xmm_xmm_xmmm128, VEX_Vfmsub132ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0x9A, VEX_Vfmsub132pd_xmm_xmm_xmmm128, VEX_Vfmsub132pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0x9B, VEX_Vfmsub132ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0x9B, VEX_Vfmsub132sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0x9C, VEX_Vfnmadd132ps_xmm_xmm_xmmm128, VEX_Vfnmadd132ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0x9C, VEX_Vfnmadd132pd_xmm_xmm_xmmm128, VEX_Vfnmadd132pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0x9D, VEX_Vfnmadd132ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0x9D, VEX_Vfnmadd132sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0x9E, VEX_Vfnmsub132ps_xmm_xmm_xmmm128, VEX_Vfnmsub132ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0x9E, VEX_Vfnmsub132pd_xmm_xmm_xmmm128, VEX_Vfnmsub132pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0x9F, VEX_Vfnmsub132ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0x9F, VEX_Vfnmsub132sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0xA6, VEX_Vfmaddsub213ps_xmm_xmm_xmmm128, VEX_Vfmaddsub213ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xA6, VEX_Vfmaddsub213pd_xmm_xmm_xmmm128, VEX_Vfmaddsub213pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    x(M38, 0xA7, VEX_Vfmsubadd213ps_xmm_xmm_xmmm128, VEX_Vfmsubadd213ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xA7, VEX_Vfmsubadd213pd_xmm_xmm_xmmm128, VEX_Vfmsubadd213pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    x(M38, 0xA8, VEX_Vfmadd213ps_xmm_xmm_xmmm128, VEX_Vfmadd213ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xA8, VEX_Vfmadd213pd_xmm_xmm_xmmm128, VEX_Vfmadd213pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0xA9, VEX_Vfmadd213ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0xA9, VEX_Vfmadd213sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0xAA, VEX_Vfmsub213ps_xmm_xmm_xmmm128, VEX_Vfmsub213ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xAA, VEX_Vfmsub213pd_xmm_xmm_xmmm128, VEX_Vfmsub213pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0xAB, VEX_Vfmsub213ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0xAB, VEX_Vfmsub213sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0xAC, VEX_Vfnmadd213ps_xmm_xmm_xmmm128, VEX_Vfnmadd213ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xAC, VEX_Vfnmadd213pd_xmm_xmm_xmmm128, VEX_Vfnmadd213pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0xAD, VEX_Vfnmadd213ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0xAD, VEX_Vfnmadd213sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0xAE, VEX_Vfnmsub213ps_xmm_xmm_xmmm128, VEX_Vfnmsub213ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xAE, VEX_Vfnmsub213pd_xmm_xmm_xmmm128, VEX_Vfnmsub213pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0xAF, VEX_Vfnmsub213ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0xAF, VEX_Vfnmsub213sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0xB6, VEX_Vfmaddsub231ps_xmm_xmm_xmmm128, VEX_Vfmaddsub231ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xB6, VEX_Vfmaddsub231pd_xmm_xmm_xmmm128, VEX_Vfmaddsub231pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    x(M38, 0xB7, VEX_Vfmsubadd231ps_xmm_xmm_xmmm128, VEX_Vfmsubadd231ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xB7, VEX_Vfmsubadd231pd_xmm_xmm_xmmm128, VEX_Vfmsubadd231pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    x(M38, 0xB8, VEX_Vfmadd231ps_xmm_xmm_xmmm128, VEX_Vfmadd231ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xB8, VEX_Vfmadd231pd_xmm_xmm_xmmm128, VEX_Vfmadd231pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0xB9, VEX_Vfmadd231ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0xB9, VEX_Vfmadd231sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0xBA, VEX_Vfmsub231ps_xmm_xmm_xmmm128, VEX_Vfmsub231ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xBA, VEX_Vfmsub231pd_xmm_xmm_xmmm128, VEX_Vfmsub231pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0xBB, VEX_Vfmsub231ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0xBB, VEX_Vfmsub231sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0xBC, VEX_Vfnmadd231ps_xmm_xmm_xmmm128, VEX_Vfnmadd231ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xBC, VEX_Vfnmadd231pd_xmm_xmm_xmmm128, VEX_Vfnmadd231pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0xBD, VEX_Vfnmadd231ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0xBD, VEX_Vfnmadd231sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    x(M38, 0xBE, VEX_Vfnmsub231ps_xmm_xmm_xmmm128, VEX_Vfnmsub231ps_ymm_ymm_ymmm256, &[Vy, Hy, Wps]).p66().w0(),
    x(M38, 0xBE, VEX_Vfnmsub231pd_xmm_xmm_xmmm128, VEX_Vfnmsub231pd_ymm_ymm_ymmm256, &[Vy, Hy, Wpd]).p66().w1(),
    t(M38, 0xBF, VEX_Vfnmsub231ss_xmm_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0(),
    t(M38, 0xBF, VEX_Vfnmsub231sd_xmm_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1(),
    // 0F38 map: AES
    t(M38, 0xDB, VEX_Vaesimc_xmm_xmmm128, &[Vx, Wx]).p66().l128(),
    x(M38, 0xDC, VEX_Vaesenc_xmm_xmm_xmmm128, VEX_Vaesenc_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0xDD, VEX_Vaesenclast_xmm_xmm_xmmm128, VEX_Vaesenclast_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0xDE, VEX_Vaesdec_xmm_xmm_xmmm128, VEX_Vaesdec_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    x(M38, 0xDF, VEX_Vaesdeclast_xmm_xmm_xmmm128, VEX_Vaesdeclast_ymm_ymm_ymmm256, &[Vy, Hy, Wi]).p66(),
    // 0F38 map: BMI1/BMI2
    t(M38, 0xF2, VEX_Andn_r64_r64_rm64, &[Gy, By, Ey]).np().l128().w1().only64(),
    t(M38, 0xF2, VEX_Andn_r32_r32_rm32, &[Gy, By, Ey]).np().l128(),
    t(M38, 0xF3, VEX_Blsr_r64_rm64, &[By, Ey]).np().l128().w1().only64().reg(1),
    t(M38, 0xF3, VEX_Blsr_r32_rm32, &[By, Ey]).np().l128().reg(1),
    t(M38, 0xF3, VEX_Blsmsk_r64_rm64, &[By, Ey]).np().l128().w1().only64().reg(2),
    t(M38, 0xF3, VEX_Blsmsk_r32_rm32, &[By, Ey]).np().l128().reg(2),
    t(M38, 0xF3, VEX_Blsi_r64_rm64, &[By, Ey]).np().l128().w1().only64().reg(3),
    t(M38, 0xF3, VEX_Blsi_r32_rm32, &[By, Ey]).np().l128().reg(3),
    t(M38, 0xF5, VEX_Bzhi_r64_rm64_r64, &[Gy, Ey, By]).np().l128().w1().only64(),
    t(M38, 0xF5, VEX_Bzhi_r32_rm32_r32, &[Gy, Ey, By]).np().l128(),
    t(M38, 0xF5, VEX_Pext_r64_r64_rm64, &[Gy, By, Ey]).pf3().l128().w1().only64(),
    t(M38, 0xF5, VEX_Pext_r32_r32_rm32, &[Gy, By, Ey]).pf3().l128(),
    t(M38, 0xF5, VEX_Pdep_r64_r64_rm64, &[Gy, By, Ey]).pf2().l128().w1().only64(),
    t(M38, 0xF5, VEX_Pdep_r32_r32_rm32, &[Gy, By, Ey]).pf2().l128(),
    t(M38, 0xF6, VEX_Mulx_r64_r64_rm64, &[Gy, By, Ey]).pf2().l128().w1().only64(),
    t(M38, 0xF6, VEX_Mulx_r32_r32_rm32, &[Gy, By, Ey]).pf2().l128(),
    t(M38, 0xF7, VEX_Bextr_r64_rm64_r64, &[Gy, Ey, By]).np().l128().w1().only64(),
    t(M38, 0xF7, VEX_Bextr_r32_rm32_r32, &[Gy, Ey, By]).np().l128(),
    t(M38, 0xF7, VEX_Shlx_r64_rm64_r64, &[Gy, Ey, By]).p66().l128().w1().only64(),
    t(M38, 0xF7, VEX_Shlx_r32_rm32_r32, &[Gy, Ey, By]).p66().l128(),
    t(M38, 0xF7, VEX_Sarx_r64_rm64_r64, &[Gy, Eyi, By]).pf3().l128().w1().only64(),
    t(M38, 0xF7, VEX_Sarx_r32_rm32_r32, &[Gy, Eyi, By]).pf3().l128(),
    t(M38, 0xF7, VEX_Shrx_r64_rm64_r64, &[Gy, Ey, By]).pf2().l128().w1().only64(),
    t(M38, 0xF7, VEX_Shrx_r32_rm32_r32, &[Gy, Ey, By]).pf2().l128(),
    // 0F3A map
    t(M3A, 0x00, VEX_Vpermq_ymm_ymmm256_imm8, &[Vy, Wi, Ib]).p66().w1().l256(),
    t(M3A, 0x01, VEX_Vpermpd_ymm_ymmm256_imm8, &[Vy, Wpd, Ib]).p66().w1().l256(),
    x(M3A, 0x02, VEX_Vpblendd_xmm_xmm_xmmm128_imm8, VEX_Vpblendd_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wi, Ib]).p66().w0(),
    x(M3A, 0x04, VEX_Vpermilps_xmm_xmmm128_imm8, VEX_Vpermilps_ymm_ymmm256_imm8, &[Vy, Wps, Ib]).p66().w0(),
    x(M3A, 0x05, VEX_Vpermilpd_xmm_xmmm128_imm8, VEX_Vpermilpd_ymm_ymmm256_imm8, &[Vy, Wpd, Ib]).p66().w0(),
    t(M3A, 0x06, VEX_Vperm2f128_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wps, Ib]).p66().w0().l256(),
    x(M3A, 0x08, VEX_Vroundps_xmm_xmmm128_imm8, VEX_Vroundps_ymm_ymmm256_imm8, &[Vy, Wps, Ib]).p66(),
    x(M3A, 0x09, VEX_Vroundpd_xmm_xmmm128_imm8, VEX_Vroundpd_ymm_ymmm256_imm8, &[Vy, Wpd, Ib]).p66(),
    t(M3A, 0x0A, VEX_Vroundss_xmm_xmm_xmmm32_imm8, &[Vx, Hx, Wss, Ib]).p66(),
    t(M3A, 0x0B, VEX_Vroundsd_xmm_xmm_xmmm64_imm8, &[Vx, Hx, Wsd, Ib]).p66(),
    x(M3A, 0x0C, VEX_Vblendps_xmm_xmm_xmmm128_imm8, VEX_Vblendps_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wps, Ib]).p66(),
    x(M3A, 0x0D, VEX_Vblendpd_xmm_xmm_xmmm128_imm8, VEX_Vblendpd_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wpd, Ib]).p66(),
    x(M3A, 0x0E, VEX_Vpblendw_xmm_xmm_xmmm128_imm8, VEX_Vpblendw_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wiw, Ib]).p66(),
    x(M3A, 0x0F, VEX_Vpalignr_xmm_xmm_xmmm128_imm8, VEX_Vpalignr_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wib, Ib]).p66(),
    t(M3A, 0x14, VEX_Vpextrb_r64m8_xmm_imm8, &[Eyb, Vx, Ib]).p66().l128().w1().only64(),
    t(M3A, 0x14, VEX_Vpextrb_r32m8_xmm_imm8, &[Eyb, Vx, Ib]).p66().l128(),
    t(M3A, 0x15, VEX_Vpextrw_r64m16_xmm_imm8, &[Eyw, Vx, Ib]).p66().l128().w1().only64(),
    t(M3A, 0x15, VEX_Vpextrw_r32m16_xmm_imm8, &[Eyw, Vx, Ib]).p66().l128(),
    t(M3A, 0x16, VEX_Vpextrq_rm64_xmm_imm8, &[Ey, Vx, Ib]).p66().l128().w1().only64(),
    t(M3A, 0x16, VEX_Vpextrd_rm32_xmm_imm8, &[Ey, Vx, Ib]).p66().l128(),
    t(M3A, 0x17, VEX_Vextractps_rm32_xmm_imm8, &[Ed32, Vx, Ib]).p66().l128(),
    t(M3A, 0x18, VEX_Vinsertf128_ymm_ymm_xmmm128_imm8, &[Vy, Hy, Wf128, Ib]).p66().w0().l256(),
    t(M3A, 0x19, VEX_Vextractf128_xmmm128_ymm_imm8, &[Wf128, Vy, Ib]).p66().w0().l256(),
    x(M3A, 0x1D, VEX_Vcvtps2ph_xmmm64_xmm_imm8, VEX_Vcvtps2ph_xmmm128_ymm_imm8, &[WhPh, Vy, Ib]).p66().w0(),
    t(M3A, 0x20, VEX_Vpinsrb_xmm_xmm_r64m8_imm8, &[Vx, Hx, Eyb, Ib]).p66().l128().w1().only64(),
    t(M3A, 0x20, VEX_Vpinsrb_xmm_xmm_r32m8_imm8, &[Vx, Hx, Eyb, Ib]).p66().l128(),
    t(M3A, 0x21, VEX_Vinsertps_xmm_xmm_xmmm32_imm8, &[Vx, Hx, Wss, Ib]).p66().l128(),
    t(M3A, 0x22, VEX_Vpinsrq_xmm_xmm_rm64_imm8, &[Vx, Hx, Ey, Ib]).p66().l128().w1().only64(),
    t(M3A, 0x22, VEX_Vpinsrd_xmm_xmm_rm32_imm8, &[Vx, Hx, Ey, Ib]).p66().l128(),
    t(M3A, 0x38, VEX_Vinserti128_ymm_ymm_xmmm128_imm8, &[Vy, Hy, Wi128, Ib]).p66().w0().l256(),
    t(M3A, 0x39, VEX_Vextracti128_xmmm128_ymm_imm8, &[Wi128, Vy, Ib]).p66().w0().l256(),
    x(M3A, 0x40, VEX_Vdpps_xmm_xmm_xmmm128_imm8, VEX_Vdpps_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wps, Ib]).p66(),
    t(M3A, 0x41, VEX_Vdppd_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wpd128, Ib]).p66().l128(),
    x(M3A, 0x42, VEX_Vmpsadbw_xmm_xmm_xmmm128_imm8, VEX_Vmpsadbw_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wiub, Ib]).p66(),
    x(M3A, 0x44, VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, VEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wiuq, Ib]).p66(),
    t(M3A, 0x46, VEX_Vperm2i128_ymm_ymm_ymmm256_imm8, &[Vy, Hy, Wi, Ib]).p66().w0().l256(),
    x(M3A, 0x4A, VEX_Vblendvps_xmm_xmm_xmmm128_xmm, VEX_Vblendvps_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wps, Ly]).p66().w0(),
    x(M3A, 0x4B, VEX_Vblendvpd_xmm_xmm_xmmm128_xmm, VEX_Vblendvpd_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wpd, Ly]).p66().w0(),
    x(M3A, 0x4C, VEX_Vpblendvb_xmm_xmm_xmmm128_xmm, VEX_Vpblendvb_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wi, Ly]).p66().w0(),
    // 0F3A map: FMA4, W selects which source is the r/m operand
    x(M3A, 0x5C, VEX_Vfmaddsubps_xmm_xmm_xmmm128_xmm, VEX_Vfmaddsubps_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wps, Ly]).p66().w0(),
    x(M3A, 0x5C, VEX_Vfmaddsubps_xmm_xmm_xmm_xmmm128, VEX_Vfmaddsubps_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wps]).p66().w1(),
    x(M3A, 0x5D, VEX_Vfmaddsubpd_xmm_xmm_xmmm128_xmm, VEX_Vfmaddsubpd_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wpd, Ly]).p66().w0(),
    x(M3A, 0x5D, VEX_Vfmaddsubpd_xmm_xmm_xmm_xmmm128, VEX_Vfmaddsubpd_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wpd]).p66().w1(),
    x(M3A, 0x5E, VEX_Vfmsubaddps_xmm_xmm_xmmm128_xmm, VEX_Vfmsubaddps_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wps, Ly]).p66().w0(),
    x(M3A, 0x5E, VEX_Vfmsubaddps_xmm_xmm_xmm_xmmm128, VEX_Vfmsubaddps_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wps]).p66().w1(),
    x(M3A, 0x5F, VEX_Vfmsubaddpd_xmm_xmm_xmmm128_xmm, VEX_Vfmsubaddpd_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wpd, Ly]).p66().w0(),
    x(M3A, 0x5F, VEX_Vfmsubaddpd_xmm_xmm_xmm_xmmm128, VEX_Vfmsubaddpd_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wpd]).p66().w1(),
    x(M3A, 0x68, VEX_Vfmaddps_xmm_xmm_xmmm128_xmm, VEX_Vfmaddps_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wps, Ly]).p66().w0(),
    x(M3A, 0x68, VEX_Vfmaddps_xmm_xmm_xmm_xmmm128, VEX_Vfmaddps_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wps]).p66().w1(),
    x(M3A, 0x69, VEX_Vfmaddpd_xmm_xmm_xmmm128_xmm, VEX_Vfmaddpd_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wpd, Ly]).p66().w0(),
    x(M3A, 0x69, VEX_Vfmaddpd_xmm_xmm_xmm_xmmm128, VEX_Vfmaddpd_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wpd]).p66().w1(),
    x(M3A, 0x6C, VEX_Vfmsubps_xmm_xmm_xmmm128_xmm, VEX_Vfmsubps_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wps, Ly]).p66().w0(),
    x(M3A, 0x6C, VEX_Vfmsubps_xmm_xmm_xmm_xmmm128, VEX_Vfmsubps_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wps]).p66().w1(),
    x(M3A, 0x6D, VEX_Vfmsubpd_xmm_xmm_xmmm128_xmm, VEX_Vfmsubpd_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wpd, Ly]).p66().w0(),
    x(M3A, 0x6D, VEX_Vfmsubpd_xmm_xmm_xmm_xmmm128, VEX_Vfmsubpd_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wpd]).p66().w1(),
    x(M3A, 0x78, VEX_Vfnmaddps_xmm_xmm_xmmm128_xmm, VEX_Vfnmaddps_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wps, Ly]).p66().w0(),
    x(M3A, 0x78, VEX_Vfnmaddps_xmm_xmm_xmm_xmmm128, VEX_Vfnmaddps_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wps]).p66().w1(),
    x(M3A, 0x79, VEX_Vfnmaddpd_xmm_xmm_xmmm128_xmm, VEX_Vfnmaddpd_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wpd, Ly]).p66().w0(),
    x(M3A, 0x79, VEX_Vfnmaddpd_xmm_xmm_xmm_xmmm128, VEX_Vfnmaddpd_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wpd]).p66().w1(),
    x(M3A, 0x7C, VEX_Vfnmsubps_xmm_xmm_xmmm128_xmm, VEX_Vfnmsubps_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wps, Ly]).p66().w0(),
    x(M3A, 0x7C, VEX_Vfnmsubps_xmm_xmm_xmm_xmmm128, VEX_Vfnmsubps_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wps]).p66().w1(),
    x(M3A, 0x7D, VEX_Vfnmsubpd_xmm_xmm_xmmm128_xmm, VEX_Vfnmsubpd_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wpd, Ly]).p66().w0(),
    x(M3A, 0x7D, VEX_Vfnmsubpd_xmm_xmm_xmm_xmmm128, VEX_Vfnmsubpd_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wpd]).p66().w1(),
    t(M3A, 0x6A, VEX_Vfmaddss_xmm_xmm_xmmm32_xmm, &[Vx, Hx, Wss, Lx]).p66().w0(),
    t(M3A, 0x6A, VEX_Vfmaddss_xmm_xmm_xmm_xmmm32, &[Vx, Hx, Lx, Wss]).p66().w1(),
    t(M3A, 0x6B, VEX_Vfmaddsd_xmm_xmm_xmmm64_xmm, &[Vx, Hx, Wsd, Lx]).p66().w0(),
    t(M3A, 0x6B, VEX_Vfmaddsd_xmm_xmm_xmm_xmmm64, &[Vx, Hx, Lx, Wsd]).p66().w1(),
    t(M3A, 0x6E, VEX_Vfmsubss_xmm_xmm_xmmm32_xmm, &[Vx, Hx, Wss, Lx]).p66().w0(),
    t(M3A, 0x6E, VEX_Vfmsubss_xmm_xmm_xmm_xmmm32, &[Vx, Hx, Lx, Wss]).p66().w1(),
    t(M3A, 0x6F, VEX_Vfmsubsd_xmm_xmm_xmmm64_xmm, &[Vx, Hx, Wsd, Lx]).p66().w0(),
    t(M3A, 0x6F, VEX_Vfmsubsd_xmm_xmm_xmm_xmmm64, &[Vx, Hx, Lx, Wsd]).p66().w1(),
    t(M3A, 0x7A, VEX_Vfnmaddss_xmm_xmm_xmmm32_xmm, &[Vx, Hx, Wss, Lx]).p66().w0(),
    t(M3A, 0x7A, VEX_Vfnmaddss_xmm_xmm_xmm_xmmm32, &[Vx, Hx, Lx, Wss]).p66().w1(),
    t(M3A, 0x7B, VEX_Vfnmaddsd_xmm_xmm_xmmm64_xmm, &[Vx, Hx, Wsd, Lx]).p66().w0(),
    t(M3A, 0x7B, VEX_Vfnmaddsd_xmm_xmm_xmm_xmmm64, &[Vx, Hx, Lx, Wsd]).p66().w1(),
    t(M3A, 0x7E, VEX_Vfnmsubss_xmm_xmm_xmmm32_xmm, &[Vx, Hx, Wss, Lx]).p66().w0(),
    t(M3A, 0x7E, VEX_Vfnmsubss_xmm_xmm_xmm_xmmm32, &[Vx, Hx, Lx, Wss]).p66().w1(),
    t(M3A, 0x7F, VEX_Vfnmsubsd_xmm_xmm_xmmm64_xmm, &[Vx, Hx, Wsd, Lx]).p66().w0(),
    t(M3A, 0x7F, VEX_Vfnmsubsd_xmm_xmm_xmm_xmmm64, &[Vx, Hx, Lx, Wsd]).p66().w1(),
    // 0F3A map: SSE4.2, AES, BMI2
    t(M3A, 0x60, VEX_Vpcmpestrm64_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66().l128().w1().only64(),
    t(M3A, 0x60, VEX_Vpcmpestrm_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66().l128(),
    t(M3A, 0x61, VEX_Vpcmpestri64_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66().l128().w1().only64(),
    t(M3A, 0x61, VEX_Vpcmpestri_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66().l128(),
    t(M3A, 0x62, VEX_Vpcmpistrm_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66().l128(),
    t(M3A, 0x63, VEX_Vpcmpistri_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66().l128(),
    t(M3A, 0xDF, VEX_Vaeskeygenassist_xmm_xmmm128_imm8, &[Vx, Wx, Ib]).p66().l128(),
    t(M3A, 0xF0, VEX_Rorx_r64_rm64_imm8, &[Gy, Ey, Ib]).pf2().l128().w1().only64(),
    t(M3A, 0xF0, VEX_Rorx_r32_rm32_imm8, &[Gy, Ey, Ib]).pf2().l128(),
];
