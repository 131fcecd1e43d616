//! EVEX-encoded (AVX-512) instructions.
//!
//! Each template declares which EVEX features it accepts through its
//! flags (opmask, zeroing, broadcast, embedded rounding, SAE) and its
//! tuple type, which fixes the disp8*N compression factor.

use super::ops::{Gd, Ib, Ux, Vx, Wpuq, Wx};
use super::{tpl, tpl_len, Flags, Mem, Op, RegKind, Table, Template, TupleType};
use xdis_core::Code::{self, *};
use xdis_core::MemorySize as MS;

const M0F: Table = Table::Evex0F;
const M38: Table = Table::Evex0F38;
const M3A: Table = Table::Evex0F3A;

const fn t(map: Table, opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(map, opcode, code, ops)
}

const fn x(map: Table, opcode: u8, codes: [Code; 3], ops: &'static [Op]) -> Template {
    tpl_len(map, opcode, codes, ops)
}

const K: Flags = Flags::K;
const K1: Flags = Flags::K.union(Flags::K1);
const KZ: Flags = Flags::KZ;
const KB: Flags = Flags::K.union(Flags::BCST);
const KZB: Flags = Flags::KZ.union(Flags::BCST);
const KZB_ER: Flags = KZB.union(Flags::ER);
const KZB_SAE: Flags = KZB.union(Flags::SAE);
const KB_SAE: Flags = KB.union(Flags::SAE);
const KZ_ER: Flags = Flags::KZ.union(Flags::ER);
const KZ_SAE: Flags = Flags::KZ.union(Flags::SAE);
const K_SAE: Flags = Flags::K.union(Flags::SAE);
const ER: Flags = Flags::ER;
const SAE: Flags = Flags::SAE;

const FV32: TupleType = TupleType::Full32;
const FV64: TupleType = TupleType::Full64;
const FVM: TupleType = TupleType::FullMem;
const HV: TupleType = TupleType::Half32;
const HVM: TupleType = TupleType::HalfMem;
const QVM: TupleType = TupleType::QuarterMem;
const OVM: TupleType = TupleType::EighthMem;
const M128: TupleType = TupleType::Mem128;
const DUP: TupleType = TupleType::Movddup;
const T1S1: TupleType = TupleType::Fixed(1);
const T1S2: TupleType = TupleType::Fixed(2);
const T1S4: TupleType = TupleType::Fixed(4);
const T1S8: TupleType = TupleType::Fixed(8);
const T2_32: TupleType = TupleType::Fixed(8);
const T2_64: TupleType = TupleType::Fixed(16);
const T4_32: TupleType = TupleType::Fixed(16);
const T4_64: TupleType = TupleType::Fixed(32);
const T8_32: TupleType = TupleType::Fixed(32);

const fn len(m128: MS, m256: MS, m512: MS) -> Mem {
    Mem::Len([m128, m256, m512])
}

const PS: Mem = len(MS::Packed128_Float32, MS::Packed256_Float32, MS::Packed512_Float32);
const PD: Mem = len(MS::Packed128_Float64, MS::Packed256_Float64, MS::Packed512_Float64);
const PI: Mem = len(MS::UInt128, MS::UInt256, MS::UInt512);

const Vz: Op = Op::Reg(RegKind::VecLen);
const Vh: Op = Op::Reg(RegKind::VecHalf);
const Hz: Op = Op::Vvvv(RegKind::VecLen);
const Hx: Op = Op::Vvvv(RegKind::Xmm);
const Wps: Op = Op::Rm(RegKind::VecLen, PS);
const Wpd: Op = Op::Rm(RegKind::VecLen, PD);
const Wi: Op = Op::Rm(RegKind::VecLen, PI);
const Wb: Op = Op::Rm(RegKind::VecLen, len(MS::Packed128_Int8, MS::Packed256_Int8, MS::Packed512_Int8));
const Ww: Op = Op::Rm(RegKind::VecLen, len(MS::Packed128_Int16, MS::Packed256_Int16, MS::Packed512_Int16));
const Wub: Op = Op::Rm(RegKind::VecLen, len(MS::Packed128_UInt8, MS::Packed256_UInt8, MS::Packed512_UInt8));
const Wd: Op = Op::Rm(RegKind::VecLen, len(MS::Packed128_Int32, MS::Packed256_Int32, MS::Packed512_Int32));
const Wq: Op = Op::Rm(RegKind::VecLen, len(MS::Packed128_Int64, MS::Packed256_Int64, MS::Packed512_Int64));
const Wuq: Op = Op::Rm(RegKind::VecLen, len(MS::Packed128_UInt64, MS::Packed256_UInt64, MS::Packed512_UInt64));
const Wdup: Op = Op::Rm(RegKind::VecLen, len(MS::Float64, MS::Packed256_Float64, MS::Packed512_Float64));
const Mps: Op = Op::M(PS);
const Mpd: Op = Op::M(PD);
const Mi: Op = Op::M(PI);

const WhPs: Op = Op::Rm(RegKind::VecHalf, len(MS::Packed64_Float32, MS::Packed128_Float32, MS::Packed256_Float32));
const WhDq: Op = Op::Rm(RegKind::VecHalf, len(MS::Packed64_Int32, MS::Packed128_Int32, MS::Packed256_Int32));
const WhPh: Op = Op::Rm(RegKind::VecHalf, len(MS::Packed64_Float16, MS::Packed128_Float16, MS::Packed256_Float16));
const Wh: Op = Op::Rm(RegKind::VecHalf, len(MS::UInt64, MS::UInt128, MS::UInt256));
const Wq4: Op = Op::Rm(RegKind::VecQuarter, len(MS::UInt32, MS::UInt64, MS::UInt128));
const Wq8: Op = Op::Rm(RegKind::Xmm, len(MS::UInt16, MS::UInt32, MS::UInt64));

const Wss: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float32));
const Wsd: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float64));
const Wps64: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_Float32));
const Wb8: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Int8));
const Wb16: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Int16));
const Wd32: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Int32));
const Wd64: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_Int32));
const Wq64: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Int64));
const Wuq64: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::UInt64));
const Wx4ps: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed128_Float32));
const Wx2pd: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed128_Float64));
const Wx4d: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed128_Int32));
const Wx2q: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed128_Int64));
const Wy8ps: Op = Op::Rm(RegKind::Ymm, Mem::Fixed(MS::Packed256_Float32));
const Wy4pd: Op = Op::Rm(RegKind::Ymm, Mem::Fixed(MS::Packed256_Float64));
const Wy8d: Op = Op::Rm(RegKind::Ymm, Mem::Fixed(MS::Packed256_Int32));
const Wy4q: Op = Op::Rm(RegKind::Ymm, Mem::Fixed(MS::Packed256_Int64));
const Mss: Op = Op::M(Mem::Fixed(MS::Float32));
const Msd: Op = Op::M(Mem::Fixed(MS::Float64));
const Mq: Op = Op::M(Mem::Fixed(MS::UInt64));
const M128ps: Op = Op::M(Mem::Fixed(MS::Packed128_Float32));
const M128pd: Op = Op::M(Mem::Fixed(MS::Packed128_Float64));
const M128d: Op = Op::M(Mem::Fixed(MS::Packed128_Int32));
const M128q: Op = Op::M(Mem::Fixed(MS::Packed128_Int64));
const M256ps: Op = Op::M(Mem::Fixed(MS::Packed256_Float32));
const M256pd: Op = Op::M(Mem::Fixed(MS::Packed256_Float64));
const M256d: Op = Op::M(Mem::Fixed(MS::Packed256_Int32));
const M256q: Op = Op::M(Mem::Fixed(MS::Packed256_Int64));

const Gy: Op = Op::Reg(RegKind::GprW);
const Ey: Op = Op::Rm(RegKind::GprW, Mem::W([MS::UInt32, MS::UInt64]));
const Eyi: Op = Op::Rm(RegKind::GprW, Mem::W([MS::Int32, MS::Int64]));
const Eyb: Op = Op::Rm(RegKind::GprW, Mem::Fixed(MS::UInt8));
const Eyw: Op = Op::Rm(RegKind::GprW, Mem::Fixed(MS::UInt16));
const Ed32: Op = Op::Rm(RegKind::Gpr32, Mem::Fixed(MS::Float32));
const Ew16: Op = Op::Rm(RegKind::Gpr32, Mem::Fixed(MS::UInt16));
const Rd: Op = Op::RmReg(RegKind::Gpr32);
const Rq: Op = Op::RmReg(RegKind::Gpr64);
const Kr: Op = Op::Reg(RegKind::Mask);

const VsD: Op = Op::Vsib(RegKind::VecLen, Mem::Fixed(MS::Int32));
const VsDh: Op = Op::Vsib(RegKind::VecHalf, Mem::Fixed(MS::Int64));
const VsQ: Op = Op::Vsib(RegKind::VecLen, Mem::Fixed(MS::Int64));
const VsDps: Op = Op::Vsib(RegKind::VecLen, Mem::Fixed(MS::Float32));
const VsDpdh: Op = Op::Vsib(RegKind::VecHalf, Mem::Fixed(MS::Float64));
const VsQpd: Op = Op::Vsib(RegKind::VecLen, Mem::Fixed(MS::Float64));

pub(super) static TEMPLATES: &[Template] = &[
    // 0F map: moves
    x(M0F, 0x10, [EVEX_Vmovups_xmm_k1z_xmmm128, EVEX_Vmovups_ymm_k1z_ymmm256, EVEX_Vmovups_zmm_k1z_zmmm512], &[Vz, Wps]).np().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x10, [EVEX_Vmovupd_xmm_k1z_xmmm128, EVEX_Vmovupd_ymm_k1z_ymmm256, EVEX_Vmovupd_zmm_k1z_zmmm512], &[Vz, Wpd]).p66().w1().flags(KZ).tuple(FVM),
    t(M0F, 0x10, EVEX_Vmovss_xmm_k1z_m32, &[Vx, Mss]).pf3().w0().flags(KZ).tuple(T1S4),
    t(M0F, 0x10, EVEX_Vmovss_xmm_k1z_xmm_xmm, &[Vx, Hx, Ux]).pf3().w0().flags(KZ),
    t(M0F, 0x10, EVEX_Vmovsd_xmm_k1z_m64, &[Vx, Msd]).pf2().w1().flags(KZ).tuple(T1S8),
    t(M0F, 0x10, EVEX_Vmovsd_xmm_k1z_xmm_xmm, &[Vx, Hx, Ux]).pf2().w1().flags(KZ),
    x(M0F, 0x11, [EVEX_Vmovups_xmmm128_k1z_xmm, EVEX_Vmovups_ymmm256_k1z_ymm, EVEX_Vmovups_zmmm512_k1z_zmm], &[Wps, Vz]).np().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x11, [EVEX_Vmovupd_xmmm128_k1z_xmm, EVEX_Vmovupd_ymmm256_k1z_ymm, EVEX_Vmovupd_zmmm512_k1z_zmm], &[Wpd, Vz]).p66().w1().flags(KZ).tuple(FVM),
    t(M0F, 0x11, EVEX_Vmovss_m32_k1_xmm, &[Mss, Vx]).pf3().w0().flags(K).tuple(T1S4),
    t(M0F, 0x11, EVEX_Vmovss_xmm_k1z_xmm_xmm_0F11, &[Ux, Hx, Vx]).pf3().w0().flags(KZ),
    t(M0F, 0x11, EVEX_Vmovsd_m64_k1_xmm, &[Msd, Vx]).pf2().w1().flags(K).tuple(T1S8),
    t(M0F, 0x11, EVEX_Vmovsd_xmm_k1z_xmm_xmm_0F11, &[Ux, Hx, Vx]).pf2().w1().flags(KZ),
    t(M0F, 0x12, EVEX_Vmovlps_xmm_xmm_m64, &[Vx, Hx, Mq]).np().w0().l128().tuple(T2_32),
    t(M0F, 0x12, EVEX_Vmovhlps_xmm_xmm_xmm, &[Vx, Hx, Ux]).np().w0().l128(),
    t(M0F, 0x12, EVEX_Vmovlpd_xmm_xmm_m64, &[Vx, Hx, Mq]).p66().w1().l128().tuple(T1S8),
    x(M0F, 0x12, [EVEX_Vmovsldup_xmm_k1z_xmmm128, EVEX_Vmovsldup_ymm_k1z_ymmm256, EVEX_Vmovsldup_zmm_k1z_zmmm512], &[Vz, Wps]).pf3().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x12, [EVEX_Vmovddup_xmm_k1z_xmmm64, EVEX_Vmovddup_ymm_k1z_ymmm256, EVEX_Vmovddup_zmm_k1z_zmmm512], &[Vz, Wdup]).pf2().w1().flags(KZ).tuple(DUP),
    t(M0F, 0x13, EVEX_Vmovlps_m64_xmm, &[Mq, Vx]).np().w0().l128().tuple(T2_32),
    t(M0F, 0x13, EVEX_Vmovlpd_m64_xmm, &[Mq, Vx]).p66().w1().l128().tuple(T1S8),
    x(M0F, 0x14, [EVEX_Vunpcklps_xmm_k1z_xmm_xmmm128b32, EVEX_Vunpcklps_ymm_k1z_ymm_ymmm256b32, EVEX_Vunpcklps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).np().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x14, [EVEX_Vunpcklpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vunpcklpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vunpcklpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0x15, [EVEX_Vunpckhps_xmm_k1z_xmm_xmmm128b32, EVEX_Vunpckhps_ymm_k1z_ymm_ymmm256b32, EVEX_Vunpckhps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).np().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x15, [EVEX_Vunpckhpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vunpckhpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vunpckhpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    t(M0F, 0x16, EVEX_Vmovhps_xmm_xmm_m64, &[Vx, Hx, Mq]).np().w0().l128().tuple(T2_32),
    t(M0F, 0x16, EVEX_Vmovlhps_xmm_xmm_xmm, &[Vx, Hx, Ux]).np().w0().l128(),
    t(M0F, 0x16, EVEX_Vmovhpd_xmm_xmm_m64, &[Vx, Hx, Mq]).p66().w1().l128().tuple(T1S8),
    x(M0F, 0x16, [EVEX_Vmovshdup_xmm_k1z_xmmm128, EVEX_Vmovshdup_ymm_k1z_ymmm256, EVEX_Vmovshdup_zmm_k1z_zmmm512], &[Vz, Wps]).pf3().w0().flags(KZ).tuple(FVM),
    t(M0F, 0x17, EVEX_Vmovhps_m64_xmm, &[Mq, Vx]).np().w0().l128().tuple(T2_32),
    t(M0F, 0x17, EVEX_Vmovhpd_m64_xmm, &[Mq, Vx]).p66().w1().l128().tuple(T1S8),
    x(M0F, 0x28, [EVEX_Vmovaps_xmm_k1z_xmmm128, EVEX_Vmovaps_ymm_k1z_ymmm256, EVEX_Vmovaps_zmm_k1z_zmmm512], &[Vz, Wps]).np().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x28, [EVEX_Vmovapd_xmm_k1z_xmmm128, EVEX_Vmovapd_ymm_k1z_ymmm256, EVEX_Vmovapd_zmm_k1z_zmmm512], &[Vz, Wpd]).p66().w1().flags(KZ).tuple(FVM),
    x(M0F, 0x29, [EVEX_Vmovaps_xmmm128_k1z_xmm, EVEX_Vmovaps_ymmm256_k1z_ymm, EVEX_Vmovaps_zmmm512_k1z_zmm], &[Wps, Vz]).np().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x29, [EVEX_Vmovapd_xmmm128_k1z_xmm, EVEX_Vmovapd_ymmm256_k1z_ymm, EVEX_Vmovapd_zmmm512_k1z_zmm], &[Wpd, Vz]).p66().w1().flags(KZ).tuple(FVM),
    // 0F map: scalar conversions
    t(M0F, 0x2A, EVEX_Vcvtsi2ss_xmm_xmm_rm64_er, &[Vx, Hx, Eyi]).pf3().w1().only64().flags(ER).tuple(T1S8),
    t(M0F, 0x2A, EVEX_Vcvtsi2ss_xmm_xmm_rm32_er, &[Vx, Hx, Eyi]).pf3().flags(ER).tuple(T1S4),
    t(M0F, 0x2A, EVEX_Vcvtsi2sd_xmm_xmm_rm64_er, &[Vx, Hx, Eyi]).pf2().w1().only64().flags(ER).tuple(T1S8),
    t(M0F, 0x2A, EVEX_Vcvtsi2sd_xmm_xmm_rm32, &[Vx, Hx, Eyi]).pf2().tuple(T1S4),
    x(M0F, 0x2B, [EVEX_Vmovntps_m128_xmm, EVEX_Vmovntps_m256_ymm, EVEX_Vmovntps_m512_zmm], &[Mps, Vz]).np().w0().tuple(FVM),
    x(M0F, 0x2B, [EVEX_Vmovntpd_m128_xmm, EVEX_Vmovntpd_m256_ymm, EVEX_Vmovntpd_m512_zmm], &[Mpd, Vz]).p66().w1().tuple(FVM),
    t(M0F, 0x2C, EVEX_Vcvttss2si_r64_xmmm32_sae, &[Gy, Wss]).pf3().w1().only64().flags(SAE).tuple(T1S4),
    t(M0F, 0x2C, EVEX_Vcvttss2si_r32_xmmm32_sae, &[Gy, Wss]).pf3().flags(SAE).tuple(T1S4),
    t(M0F, 0x2D, EVEX_Vcvtss2si_r64_xmmm32_er, &[Gy, Wss]).pf3().w1().only64().flags(ER).tuple(T1S4),
    t(M0F, 0x2D, EVEX_Vcvtss2si_r32_xmmm32_er, &[Gy, Wss]).pf3().flags(ER).tuple(T1S4),
    t(M0F, 0x2C, EVEX_Vcvttsd2si_r64_xmmm64_sae, &[Gy, Wsd]).pf2().w1().only64().flags(SAE).tuple(T1S8),
    t(M0F, 0x2C, EVEX_Vcvttsd2si_r32_xmmm64_sae, &[Gy, Wsd]).pf2().flags(SAE).tuple(T1S8),
    t(M0F, 0x2D, EVEX_Vcvtsd2si_r64_xmmm64_er, &[Gy, Wsd]).pf2().w1().only64().flags(ER).tuple(T1S8),
    t(M0F, 0x2D, EVEX_Vcvtsd2si_r32_xmmm64_er, &[Gy, Wsd]).pf2().flags(ER).tuple(T1S8),
    t(M0F, 0x2E, EVEX_Vucomiss_xmm_xmmm32_sae, &[Vx, Wss]).np().w0().flags(SAE).tuple(T1S4),
    t(M0F, 0x2E, EVEX_Vucomisd_xmm_xmmm64_sae, &[Vx, Wsd]).p66().w1().flags(SAE).tuple(T1S8),
    t(M0F, 0x2F, EVEX_Vcomiss_xmm_xmmm32_sae, &[Vx, Wss]).np().w0().flags(SAE).tuple(T1S4),
    t(M0F, 0x2F, EVEX_Vcomisd_xmm_xmmm64_sae, &[Vx, Wsd]).p66().w1().flags(SAE).tuple(T1S8),
    // 0F map: floating-point arithmetic
    x(M0F, 0x51, [EVEX_Vsqrtps_xmm_k1z_xmmm128b32, EVEX_Vsqrtps_ymm_k1z_ymmm256b32, EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er], &[Vz, Wps]).np().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0x51, [EVEX_Vsqrtpd_xmm_k1z_xmmm128b64, EVEX_Vsqrtpd_ymm_k1z_ymmm256b64, EVEX_Vsqrtpd_zmm_k1z_zmmm512b64_er], &[Vz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M0F, 0x51, EVEX_Vsqrtss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).pf3().w0().flags(KZ_ER).tuple(T1S4),
    t(M0F, 0x51, EVEX_Vsqrtsd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).pf2().w1().flags(KZ_ER).tuple(T1S8),
    x(M0F, 0x54, [EVEX_Vandps_xmm_k1z_xmm_xmmm128b32, EVEX_Vandps_ymm_k1z_ymm_ymmm256b32, EVEX_Vandps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).np().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x54, [EVEX_Vandpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vandpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vandpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0x55, [EVEX_Vandnps_xmm_k1z_xmm_xmmm128b32, EVEX_Vandnps_ymm_k1z_ymm_ymmm256b32, EVEX_Vandnps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).np().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x55, [EVEX_Vandnpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vandnpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vandnpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0x56, [EVEX_Vorps_xmm_k1z_xmm_xmmm128b32, EVEX_Vorps_ymm_k1z_ymm_ymmm256b32, EVEX_Vorps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).np().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x56, [EVEX_Vorpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vorpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vorpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0x57, [EVEX_Vxorps_xmm_k1z_xmm_xmmm128b32, EVEX_Vxorps_ymm_k1z_ymm_ymmm256b32, EVEX_Vxorps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).np().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x57, [EVEX_Vxorpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vxorpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vxorpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0x58, [EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32, EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32, EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).np().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0x58, [EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M0F, 0x58, EVEX_Vaddss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).pf3().w0().flags(KZ_ER).tuple(T1S4),
    t(M0F, 0x58, EVEX_Vaddsd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).pf2().w1().flags(KZ_ER).tuple(T1S8),
    x(M0F, 0x59, [EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32, EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32, EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).np().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0x59, [EVEX_Vmulpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vmulpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vmulpd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M0F, 0x59, EVEX_Vmulss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).pf3().w0().flags(KZ_ER).tuple(T1S4),
    t(M0F, 0x59, EVEX_Vmulsd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).pf2().w1().flags(KZ_ER).tuple(T1S8),
    x(M0F, 0x5C, [EVEX_Vsubps_xmm_k1z_xmm_xmmm128b32, EVEX_Vsubps_ymm_k1z_ymm_ymmm256b32, EVEX_Vsubps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).np().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0x5C, [EVEX_Vsubpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vsubpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vsubpd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M0F, 0x5C, EVEX_Vsubss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).pf3().w0().flags(KZ_ER).tuple(T1S4),
    t(M0F, 0x5C, EVEX_Vsubsd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).pf2().w1().flags(KZ_ER).tuple(T1S8),
    x(M0F, 0x5D, [EVEX_Vminps_xmm_k1z_xmm_xmmm128b32, EVEX_Vminps_ymm_k1z_ymm_ymmm256b32, EVEX_Vminps_zmm_k1z_zmm_zmmm512b32_sae], &[Vz, Hz, Wps]).np().w0().flags(KZB_SAE).tuple(FV32),
    x(M0F, 0x5D, [EVEX_Vminpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vminpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vminpd_zmm_k1z_zmm_zmmm512b64_sae], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_SAE).tuple(FV64),
    t(M0F, 0x5D, EVEX_Vminss_xmm_k1z_xmm_xmmm32_sae, &[Vx, Hx, Wss]).pf3().w0().flags(KZ_SAE).tuple(T1S4),
    t(M0F, 0x5D, EVEX_Vminsd_xmm_k1z_xmm_xmmm64_sae, &[Vx, Hx, Wsd]).pf2().w1().flags(KZ_SAE).tuple(T1S8),
    x(M0F, 0x5E, [EVEX_Vdivps_xmm_k1z_xmm_xmmm128b32, EVEX_Vdivps_ymm_k1z_ymm_ymmm256b32, EVEX_Vdivps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).np().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0x5E, [EVEX_Vdivpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vdivpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vdivpd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M0F, 0x5E, EVEX_Vdivss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).pf3().w0().flags(KZ_ER).tuple(T1S4),
    t(M0F, 0x5E, EVEX_Vdivsd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).pf2().w1().flags(KZ_ER).tuple(T1S8),
    x(M0F, 0x5F, [EVEX_Vmaxps_xmm_k1z_xmm_xmmm128b32, EVEX_Vmaxps_ymm_k1z_ymm_ymmm256b32, EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae], &[Vz, Hz, Wps]).np().w0().flags(KZB_SAE).tuple(FV32),
    x(M0F, 0x5F, [EVEX_Vmaxpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vmaxpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vmaxpd_zmm_k1z_zmm_zmmm512b64_sae], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_SAE).tuple(FV64),
    t(M0F, 0x5F, EVEX_Vmaxss_xmm_k1z_xmm_xmmm32_sae, &[Vx, Hx, Wss]).pf3().w0().flags(KZ_SAE).tuple(T1S4),
    t(M0F, 0x5F, EVEX_Vmaxsd_xmm_k1z_xmm_xmmm64_sae, &[Vx, Hx, Wsd]).pf2().w1().flags(KZ_SAE).tuple(T1S8),
    x(M0F, 0x5A, [EVEX_Vcvtps2pd_xmm_k1z_xmmm64b32, EVEX_Vcvtps2pd_ymm_k1z_xmmm128b32, EVEX_Vcvtps2pd_zmm_k1z_ymmm256b32_sae], &[Vz, WhPs]).np().w0().flags(KZB_SAE).tuple(HV),
    x(M0F, 0x5A, [EVEX_Vcvtpd2ps_xmm_k1z_xmmm128b64, EVEX_Vcvtpd2ps_xmm_k1z_ymmm256b64, EVEX_Vcvtpd2ps_ymm_k1z_zmmm512b64_er], &[Vh, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M0F, 0x5A, EVEX_Vcvtss2sd_xmm_k1z_xmm_xmmm32_sae, &[Vx, Hx, Wss]).pf3().w0().flags(KZ_SAE).tuple(T1S4),
    t(M0F, 0x5A, EVEX_Vcvtsd2ss_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).pf2().w1().flags(KZ_ER).tuple(T1S8),
    x(M0F, 0x5B, [EVEX_Vcvtdq2ps_xmm_k1z_xmmm128b32, EVEX_Vcvtdq2ps_ymm_k1z_ymmm256b32, EVEX_Vcvtdq2ps_zmm_k1z_zmmm512b32_er], &[Vz, Wd]).np().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0x5B, [EVEX_Vcvtps2dq_xmm_k1z_xmmm128b32, EVEX_Vcvtps2dq_ymm_k1z_ymmm256b32, EVEX_Vcvtps2dq_zmm_k1z_zmmm512b32_er], &[Vz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0x5B, [EVEX_Vcvttps2dq_xmm_k1z_xmmm128b32, EVEX_Vcvttps2dq_ymm_k1z_ymmm256b32, EVEX_Vcvttps2dq_zmm_k1z_zmmm512b32_sae], &[Vz, Wps]).pf3().w0().flags(KZB_SAE).tuple(FV32),
    // 0F map: packed integer
    x(M0F, 0x60, [EVEX_Vpunpcklbw_xmm_k1z_xmm_xmmm128, EVEX_Vpunpcklbw_ymm_k1z_ymm_ymmm256, EVEX_Vpunpcklbw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0x61, [EVEX_Vpunpcklwd_xmm_k1z_xmm_xmmm128, EVEX_Vpunpcklwd_ymm_k1z_ymm_ymmm256, EVEX_Vpunpcklwd_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0x63, [EVEX_Vpacksswb_xmm_k1z_xmm_xmmm128, EVEX_Vpacksswb_ymm_k1z_ymm_ymmm256, EVEX_Vpacksswb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0x67, [EVEX_Vpackuswb_xmm_k1z_xmm_xmmm128, EVEX_Vpackuswb_ymm_k1z_ymm_ymmm256, EVEX_Vpackuswb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0x68, [EVEX_Vpunpckhbw_xmm_k1z_xmm_xmmm128, EVEX_Vpunpckhbw_ymm_k1z_ymm_ymmm256, EVEX_Vpunpckhbw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0x69, [EVEX_Vpunpckhwd_xmm_k1z_xmm_xmmm128, EVEX_Vpunpckhwd_ymm_k1z_ymm_ymmm256, EVEX_Vpunpckhwd_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0x62, [EVEX_Vpunpckldq_xmm_k1z_xmm_xmmm128b32, EVEX_Vpunpckldq_ymm_k1z_ymm_ymmm256b32, EVEX_Vpunpckldq_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x6A, [EVEX_Vpunpckhdq_xmm_k1z_xmm_xmmm128b32, EVEX_Vpunpckhdq_ymm_k1z_ymm_ymmm256b32, EVEX_Vpunpckhdq_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x6B, [EVEX_Vpackssdw_xmm_k1z_xmm_xmmm128b32, EVEX_Vpackssdw_ymm_k1z_ymm_ymmm256b32, EVEX_Vpackssdw_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x6C, [EVEX_Vpunpcklqdq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpunpcklqdq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpunpcklqdq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0x6D, [EVEX_Vpunpckhqdq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpunpckhqdq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpunpckhqdq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0x64, [EVEX_Vpcmpgtb_kr_k1_xmm_xmmm128, EVEX_Vpcmpgtb_kr_k1_ymm_ymmm256, EVEX_Vpcmpgtb_kr_k1_zmm_zmmm512], &[Kr, Hz, Wb]).p66().flags(K).tuple(FVM),
    x(M0F, 0x65, [EVEX_Vpcmpgtw_kr_k1_xmm_xmmm128, EVEX_Vpcmpgtw_kr_k1_ymm_ymmm256, EVEX_Vpcmpgtw_kr_k1_zmm_zmmm512], &[Kr, Hz, Ww]).p66().flags(K).tuple(FVM),
    x(M0F, 0x74, [EVEX_Vpcmpeqb_kr_k1_xmm_xmmm128, EVEX_Vpcmpeqb_kr_k1_ymm_ymmm256, EVEX_Vpcmpeqb_kr_k1_zmm_zmmm512], &[Kr, Hz, Wb]).p66().flags(K).tuple(FVM),
    x(M0F, 0x75, [EVEX_Vpcmpeqw_kr_k1_xmm_xmmm128, EVEX_Vpcmpeqw_kr_k1_ymm_ymmm256, EVEX_Vpcmpeqw_kr_k1_zmm_zmmm512], &[Kr, Hz, Ww]).p66().flags(K).tuple(FVM),
    x(M0F, 0x66, [EVEX_Vpcmpgtd_kr_k1_xmm_xmmm128b32, EVEX_Vpcmpgtd_kr_k1_ymm_ymmm256b32, EVEX_Vpcmpgtd_kr_k1_zmm_zmmm512b32], &[Kr, Hz, Wd]).p66().w0().flags(KB).tuple(FV32),
    x(M0F, 0x76, [EVEX_Vpcmpeqd_kr_k1_xmm_xmmm128b32, EVEX_Vpcmpeqd_kr_k1_ymm_ymmm256b32, EVEX_Vpcmpeqd_kr_k1_zmm_zmmm512b32], &[Kr, Hz, Wd]).p66().w0().flags(KB).tuple(FV32),
    t(M0F, 0x6E, EVEX_Vmovq_xmm_rm64, &[Vx, Ey]).p66().l128().w1().only64().tuple(T1S8),
    t(M0F, 0x6E, EVEX_Vmovd_xmm_rm32, &[Vx, Ey]).p66().l128().tuple(T1S4),
    x(M0F, 0x6F, [EVEX_Vmovdqa32_xmm_k1z_xmmm128, EVEX_Vmovdqa32_ymm_k1z_ymmm256, EVEX_Vmovdqa32_zmm_k1z_zmmm512], &[Vz, Wd]).p66().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x6F, [EVEX_Vmovdqa64_xmm_k1z_xmmm128, EVEX_Vmovdqa64_ymm_k1z_ymmm256, EVEX_Vmovdqa64_zmm_k1z_zmmm512], &[Vz, Wq]).p66().w1().flags(KZ).tuple(FVM),
    x(M0F, 0x6F, [EVEX_Vmovdqu32_xmm_k1z_xmmm128, EVEX_Vmovdqu32_ymm_k1z_ymmm256, EVEX_Vmovdqu32_zmm_k1z_zmmm512], &[Vz, Wd]).pf3().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x6F, [EVEX_Vmovdqu64_xmm_k1z_xmmm128, EVEX_Vmovdqu64_ymm_k1z_ymmm256, EVEX_Vmovdqu64_zmm_k1z_zmmm512], &[Vz, Wq]).pf3().w1().flags(KZ).tuple(FVM),
    x(M0F, 0x6F, [EVEX_Vmovdqu8_xmm_k1z_xmmm128, EVEX_Vmovdqu8_ymm_k1z_ymmm256, EVEX_Vmovdqu8_zmm_k1z_zmmm512], &[Vz, Wb]).pf2().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x6F, [EVEX_Vmovdqu16_xmm_k1z_xmmm128, EVEX_Vmovdqu16_ymm_k1z_ymmm256, EVEX_Vmovdqu16_zmm_k1z_zmmm512], &[Vz, Ww]).pf2().w1().flags(KZ).tuple(FVM),
    x(M0F, 0x7F, [EVEX_Vmovdqa32_xmmm128_k1z_xmm, EVEX_Vmovdqa32_ymmm256_k1z_ymm, EVEX_Vmovdqa32_zmmm512_k1z_zmm], &[Wd, Vz]).p66().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x7F, [EVEX_Vmovdqa64_xmmm128_k1z_xmm, EVEX_Vmovdqa64_ymmm256_k1z_ymm, EVEX_Vmovdqa64_zmmm512_k1z_zmm], &[Wq, Vz]).p66().w1().flags(KZ).tuple(FVM),
    x(M0F, 0x7F, [EVEX_Vmovdqu32_xmmm128_k1z_xmm, EVEX_Vmovdqu32_ymmm256_k1z_ymm, EVEX_Vmovdqu32_zmmm512_k1z_zmm], &[Wd, Vz]).pf3().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x7F, [EVEX_Vmovdqu64_xmmm128_k1z_xmm, EVEX_Vmovdqu64_ymmm256_k1z_ymm, EVEX_Vmovdqu64_zmmm512_k1z_zmm], &[Wq, Vz]).pf3().w1().flags(KZ).tuple(FVM),
    x(M0F, 0x7F, [EVEX_Vmovdqu8_xmmm128_k1z_xmm, EVEX_Vmovdqu8_ymmm256_k1z_ymm, EVEX_Vmovdqu8_zmmm512_k1z_zmm], &[Wb, Vz]).pf2().w0().flags(KZ).tuple(FVM),
    x(M0F, 0x7F, [EVEX_Vmovdqu16_xmmm128_k1z_xmm, EVEX_Vmovdqu16_ymmm256_k1z_ymm, EVEX_Vmovdqu16_zmmm512_k1z_zmm], &[Ww, Vz]).pf2().w1().flags(KZ).tuple(FVM),
    x(M0F, 0x70, [EVEX_Vpshufd_xmm_k1z_xmmm128b32_imm8, EVEX_Vpshufd_ymm_k1z_ymmm256b32_imm8, EVEX_Vpshufd_zmm_k1z_zmmm512b32_imm8], &[Vz, Wd, Ib]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0x70, [EVEX_Vpshufhw_xmm_k1z_xmmm128_imm8, EVEX_Vpshufhw_ymm_k1z_ymmm256_imm8, EVEX_Vpshufhw_zmm_k1z_zmmm512_imm8], &[Vz, Ww, Ib]).pf3().flags(KZ).tuple(FVM),
    x(M0F, 0x70, [EVEX_Vpshuflw_xmm_k1z_xmmm128_imm8, EVEX_Vpshuflw_ymm_k1z_ymmm256_imm8, EVEX_Vpshuflw_zmm_k1z_zmmm512_imm8], &[Vz, Ww, Ib]).pf2().flags(KZ).tuple(FVM),
    // 0F map: shift and rotate by immediate, destination in vvvv
    x(M0F, 0x71, [EVEX_Vpsrlw_xmm_k1z_xmmm128_imm8, EVEX_Vpsrlw_ymm_k1z_ymmm256_imm8, EVEX_Vpsrlw_zmm_k1z_zmmm512_imm8], &[Hz, Ww, Ib]).p66().reg(2).flags(KZ).tuple(FVM),
    x(M0F, 0x71, [EVEX_Vpsraw_xmm_k1z_xmmm128_imm8, EVEX_Vpsraw_ymm_k1z_ymmm256_imm8, EVEX_Vpsraw_zmm_k1z_zmmm512_imm8], &[Hz, Ww, Ib]).p66().reg(4).flags(KZ).tuple(FVM),
    x(M0F, 0x71, [EVEX_Vpsllw_xmm_k1z_xmmm128_imm8, EVEX_Vpsllw_ymm_k1z_ymmm256_imm8, EVEX_Vpsllw_zmm_k1z_zmmm512_imm8], &[Hz, Ww, Ib]).p66().reg(6).flags(KZ).tuple(FVM),
    x(M0F, 0x72, [EVEX_Vprord_xmm_k1z_xmmm128b32_imm8, EVEX_Vprord_ymm_k1z_ymmm256b32_imm8, EVEX_Vprord_zmm_k1z_zmmm512b32_imm8], &[Hz, Wd, Ib]).p66().reg(0).w0().flags(KZB).tuple(FV32),
    x(M0F, 0x72, [EVEX_Vprorq_xmm_k1z_xmmm128b64_imm8, EVEX_Vprorq_ymm_k1z_ymmm256b64_imm8, EVEX_Vprorq_zmm_k1z_zmmm512b64_imm8], &[Hz, Wq, Ib]).p66().reg(0).w1().flags(KZB).tuple(FV64),
    x(M0F, 0x72, [EVEX_Vprold_xmm_k1z_xmmm128b32_imm8, EVEX_Vprold_ymm_k1z_ymmm256b32_imm8, EVEX_Vprold_zmm_k1z_zmmm512b32_imm8], &[Hz, Wd, Ib]).p66().reg(1).w0().flags(KZB).tuple(FV32),
    x(M0F, 0x72, [EVEX_Vprolq_xmm_k1z_xmmm128b64_imm8, EVEX_Vprolq_ymm_k1z_ymmm256b64_imm8, EVEX_Vprolq_zmm_k1z_zmmm512b64_imm8], &[Hz, Wq, Ib]).p66().reg(1).w1().flags(KZB).tuple(FV64),
    x(M0F, 0x72, [EVEX_Vpsrld_xmm_k1z_xmmm128b32_imm8, EVEX_Vpsrld_ymm_k1z_ymmm256b32_imm8, EVEX_Vpsrld_zmm_k1z_zmmm512b32_imm8], &[Hz, Wd, Ib]).p66().reg(2).w0().flags(KZB).tuple(FV32),
    x(M0F, 0x72, [EVEX_Vpsrad_xmm_k1z_xmmm128b32_imm8, EVEX_Vpsrad_ymm_k1z_ymmm256b32_imm8, EVEX_Vpsrad_zmm_k1z_zmmm512b32_imm8], &[Hz, Wd, Ib]).p66().reg(4).w0().flags(KZB).tuple(FV32),
    x(M0F, 0x72, [EVEX_Vpsraq_xmm_k1z_xmmm128b64_imm8, EVEX_Vpsraq_ymm_k1z_ymmm256b64_imm8, EVEX_Vpsraq_zmm_k1z_zmmm512b64_imm8], &[Hz, Wq, Ib]).p66().reg(4).w1().flags(KZB).tuple(FV64),
    x(M0F, 0x72, [EVEX_Vpslld_xmm_k1z_xmmm128b32_imm8, EVEX_Vpslld_ymm_k1z_ymmm256b32_imm8, EVEX_Vpslld_zmm_k1z_zmmm512b32_imm8], &[Hz, Wd, Ib]).p66().reg(6).w0().flags(KZB).tuple(FV32),
    x(M0F, 0x73, [EVEX_Vpsrlq_xmm_k1z_xmmm128b64_imm8, EVEX_Vpsrlq_ymm_k1z_ymmm256b64_imm8, EVEX_Vpsrlq_zmm_k1z_zmmm512b64_imm8], &[Hz, Wq, Ib]).p66().reg(2).w1().flags(KZB).tuple(FV64),
    x(M0F, 0x73, [EVEX_Vpsrldq_xmm_k1z_xmmm128_imm8, EVEX_Vpsrldq_ymm_k1z_ymmm256_imm8, EVEX_Vpsrldq_zmm_k1z_zmmm512_imm8], &[Hz, Wb, Ib]).p66().reg(3).tuple(FVM),
    x(M0F, 0x73, [EVEX_Vpsllq_xmm_k1z_xmmm128b64_imm8, EVEX_Vpsllq_ymm_k1z_ymmm256b64_imm8, EVEX_Vpsllq_zmm_k1z_zmmm512b64_imm8], &[Hz, Wq, Ib]).p66().reg(6).w1().flags(KZB).tuple(FV64),
    x(M0F, 0x73, [EVEX_Vpslldq_xmm_k1z_xmmm128_imm8, EVEX_Vpslldq_ymm_k1z_ymmm256_imm8, EVEX_Vpslldq_zmm_k1z_zmmm512_imm8], &[Hz, Wb, Ib]).p66().reg(7).tuple(FVM),
    t(M0F, 0x7E, EVEX_Vmovq_rm64_xmm, &[Ey, Vx]).p66().l128().w1().only64().tuple(T1S8),
    t(M0F, 0x7E, EVEX_Vmovd_rm32_xmm, &[Ey, Vx]).p66().l128().tuple(T1S4),
    t(M0F, 0x7E, EVEX_Vmovq_xmm_xmmm64, &[Vx, Wuq64]).pf3().l128().w1().tuple(T1S8),
    x(M0F, 0x78, [EVEX_Vcvttps2udq_xmm_k1z_xmmm128b32, EVEX_Vcvttps2udq_ymm_k1z_ymmm256b32, EVEX_Vcvttps2udq_zmm_k1z_zmmm512b32_sae], &[Vz, Wps]).np().w0().flags(KZB_SAE).tuple(FV32),
    x(M0F, 0x79, [EVEX_Vcvtps2udq_xmm_k1z_xmmm128b32, EVEX_Vcvtps2udq_ymm_k1z_ymmm256b32, EVEX_Vcvtps2udq_zmm_k1z_zmmm512b32_er], &[Vz, Wps]).np().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0x7A, [EVEX_Vcvtudq2ps_xmm_k1z_xmmm128b32, EVEX_Vcvtudq2ps_ymm_k1z_ymmm256b32, EVEX_Vcvtudq2ps_zmm_k1z_zmmm512b32_er], &[Vz, Wd]).pf2().w0().flags(KZB_ER).tuple(FV32),
    x(M0F, 0xC2, [EVEX_Vcmpps_kr_k1_xmm_xmmm128b32_imm8, EVEX_Vcmpps_kr_k1_ymm_ymmm256b32_imm8, EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_sae_imm8], &[Kr, Hz, Wps, Ib]).np().w0().flags(KB_SAE).tuple(FV32),
    x(M0F, 0xC2, [EVEX_Vcmppd_kr_k1_xmm_xmmm128b64_imm8, EVEX_Vcmppd_kr_k1_ymm_ymmm256b64_imm8, EVEX_Vcmppd_kr_k1_zmm_zmmm512b64_sae_imm8], &[Kr, Hz, Wpd, Ib]).p66().w1().flags(KB_SAE).tuple(FV64),
    t(M0F, 0xC2, EVEX_Vcmpss_kr_k1_xmm_xmmm32_sae_imm8, &[Kr, Hx, Wss, Ib]).pf3().w0().flags(K_SAE).tuple(T1S4),
    t(M0F, 0xC2, EVEX_Vcmpsd_kr_k1_xmm_xmmm64_sae_imm8, &[Kr, Hx, Wsd, Ib]).pf2().w1().flags(K_SAE).tuple(T1S8),
    t(M0F, 0xC4, EVEX_Vpinsrw_xmm_xmm_r32m16_imm8, &[Vx, Hx, Ew16, Ib]).p66().l128().tuple(T1S2),
    t(M0F, 0xC5, EVEX_Vpextrw_r32_xmm_imm8, &[Gd, Ux, Ib]).p66().l128(),
    x(M0F, 0xC6, [EVEX_Vshufps_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vshufps_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vshufps_zmm_k1z_zmm_zmmm512b32_imm8], &[Vz, Hz, Wps, Ib]).np().w0().flags(KZB).tuple(FV32),
    x(M0F, 0xC6, [EVEX_Vshufpd_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vshufpd_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vshufpd_zmm_k1z_zmm_zmmm512b64_imm8], &[Vz, Hz, Wpd, Ib]).p66().w1().flags(KZB).tuple(FV64),
    // 0F map: shift by xmm count
    x(M0F, 0xD1, [EVEX_Vpsrlw_xmm_k1z_xmm_xmmm128, EVEX_Vpsrlw_ymm_k1z_ymm_xmmm128, EVEX_Vpsrlw_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wpuq]).p66().flags(KZ).tuple(M128),
    x(M0F, 0xD2, [EVEX_Vpsrld_xmm_k1z_xmm_xmmm128, EVEX_Vpsrld_ymm_k1z_ymm_xmmm128, EVEX_Vpsrld_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wpuq]).p66().w0().flags(KZ).tuple(M128),
    x(M0F, 0xD3, [EVEX_Vpsrlq_xmm_k1z_xmm_xmmm128, EVEX_Vpsrlq_ymm_k1z_ymm_xmmm128, EVEX_Vpsrlq_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wpuq]).p66().w1().flags(KZ).tuple(M128),
    x(M0F, 0xE1, [EVEX_Vpsraw_xmm_k1z_xmm_xmmm128, EVEX_Vpsraw_ymm_k1z_ymm_xmmm128, EVEX_Vpsraw_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wx]).p66().flags(KZ).tuple(M128),
    x(M0F, 0xE2, [EVEX_Vpsrad_xmm_k1z_xmm_xmmm128, EVEX_Vpsrad_ymm_k1z_ymm_xmmm128, EVEX_Vpsrad_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wx]).p66().w0().flags(KZ).tuple(M128),
    x(M0F, 0xE2, [EVEX_Vpsraq_xmm_k1z_xmm_xmmm128, EVEX_Vpsraq_ymm_k1z_ymm_xmmm128, EVEX_Vpsraq_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wx]).p66().w1().flags(KZ).tuple(M128),
    x(M0F, 0xF1, [EVEX_Vpsllw_xmm_k1z_xmm_xmmm128, EVEX_Vpsllw_ymm_k1z_ymm_xmmm128, EVEX_Vpsllw_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wpuq]).p66().flags(KZ).tuple(M128),
    x(M0F, 0xF2, [EVEX_Vpslld_xmm_k1z_xmm_xmmm128, EVEX_Vpslld_ymm_k1z_ymm_xmmm128, EVEX_Vpslld_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wpuq]).p66().w0().flags(KZ).tuple(M128),
    x(M0F, 0xF3, [EVEX_Vpsllq_xmm_k1z_xmm_xmmm128, EVEX_Vpsllq_ymm_k1z_ymm_xmmm128, EVEX_Vpsllq_zmm_k1z_zmm_xmmm128], &[Vz, Hz, Wpuq]).p66().w1().flags(KZ).tuple(M128),
    // 0F map: packed integer arithmetic
    x(M0F, 0xD4, [EVEX_Vpaddq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpaddq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpaddq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wuq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0xD5, [EVEX_Vpmullw_xmm_k1z_xmm_xmmm128, EVEX_Vpmullw_ymm_k1z_ymm_ymmm256, EVEX_Vpmullw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xD8, [EVEX_Vpsubusb_xmm_k1z_xmm_xmmm128, EVEX_Vpsubusb_ymm_k1z_ymm_ymmm256, EVEX_Vpsubusb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xD9, [EVEX_Vpsubusw_xmm_k1z_xmm_xmmm128, EVEX_Vpsubusw_ymm_k1z_ymm_ymmm256, EVEX_Vpsubusw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xDA, [EVEX_Vpminub_xmm_k1z_xmm_xmmm128, EVEX_Vpminub_ymm_k1z_ymm_ymmm256, EVEX_Vpminub_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xDB, [EVEX_Vpandd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpandd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpandd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0xDB, [EVEX_Vpandq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpandq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpandq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0xDC, [EVEX_Vpaddusb_xmm_k1z_xmm_xmmm128, EVEX_Vpaddusb_ymm_k1z_ymm_ymmm256, EVEX_Vpaddusb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xDD, [EVEX_Vpaddusw_xmm_k1z_xmm_xmmm128, EVEX_Vpaddusw_ymm_k1z_ymm_ymmm256, EVEX_Vpaddusw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xDE, [EVEX_Vpmaxub_xmm_k1z_xmm_xmmm128, EVEX_Vpmaxub_ymm_k1z_ymm_ymmm256, EVEX_Vpmaxub_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xDF, [EVEX_Vpandnd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpandnd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpandnd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0xDF, [EVEX_Vpandnq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpandnq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpandnq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0xE0, [EVEX_Vpavgb_xmm_k1z_xmm_xmmm128, EVEX_Vpavgb_ymm_k1z_ymm_ymmm256, EVEX_Vpavgb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xE3, [EVEX_Vpavgw_xmm_k1z_xmm_xmmm128, EVEX_Vpavgw_ymm_k1z_ymm_ymmm256, EVEX_Vpavgw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xE4, [EVEX_Vpmulhuw_xmm_k1z_xmm_xmmm128, EVEX_Vpmulhuw_ymm_k1z_ymm_ymmm256, EVEX_Vpmulhuw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xE5, [EVEX_Vpmulhw_xmm_k1z_xmm_xmmm128, EVEX_Vpmulhw_ymm_k1z_ymm_ymmm256, EVEX_Vpmulhw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xE8, [EVEX_Vpsubsb_xmm_k1z_xmm_xmmm128, EVEX_Vpsubsb_ymm_k1z_ymm_ymmm256, EVEX_Vpsubsb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xE9, [EVEX_Vpsubsw_xmm_k1z_xmm_xmmm128, EVEX_Vpsubsw_ymm_k1z_ymm_ymmm256, EVEX_Vpsubsw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xEA, [EVEX_Vpminsw_xmm_k1z_xmm_xmmm128, EVEX_Vpminsw_ymm_k1z_ymm_ymmm256, EVEX_Vpminsw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xEB, [EVEX_Vpord_xmm_k1z_xmm_xmmm128b32, EVEX_Vpord_ymm_k1z_ymm_ymmm256b32, EVEX_Vpord_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0xEB, [EVEX_Vporq_xmm_k1z_xmm_xmmm128b64, EVEX_Vporq_ymm_k1z_ymm_ymmm256b64, EVEX_Vporq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0xEC, [EVEX_Vpaddsb_xmm_k1z_xmm_xmmm128, EVEX_Vpaddsb_ymm_k1z_ymm_ymmm256, EVEX_Vpaddsb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xED, [EVEX_Vpaddsw_xmm_k1z_xmm_xmmm128, EVEX_Vpaddsw_ymm_k1z_ymm_ymmm256, EVEX_Vpaddsw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xEE, [EVEX_Vpmaxsw_xmm_k1z_xmm_xmmm128, EVEX_Vpmaxsw_ymm_k1z_ymm_ymmm256, EVEX_Vpmaxsw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xEF, [EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32, EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32, EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0xEF, [EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0xF4, [EVEX_Vpmuludq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmuludq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmuludq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0xF5, [EVEX_Vpmaddwd_xmm_k1z_xmm_xmmm128, EVEX_Vpmaddwd_ymm_k1z_ymm_ymmm256, EVEX_Vpmaddwd_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xF8, [EVEX_Vpsubb_xmm_k1z_xmm_xmmm128, EVEX_Vpsubb_ymm_k1z_ymm_ymmm256, EVEX_Vpsubb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xF9, [EVEX_Vpsubw_xmm_k1z_xmm_xmmm128, EVEX_Vpsubw_ymm_k1z_ymm_ymmm256, EVEX_Vpsubw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xFA, [EVEX_Vpsubd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpsubd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpsubd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0xFB, [EVEX_Vpsubq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpsubq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpsubq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M0F, 0xFC, [EVEX_Vpaddb_xmm_k1z_xmm_xmmm128, EVEX_Vpaddb_ymm_k1z_ymm_ymmm256, EVEX_Vpaddb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xFD, [EVEX_Vpaddw_xmm_k1z_xmm_xmmm128, EVEX_Vpaddw_ymm_k1z_ymm_ymmm256, EVEX_Vpaddw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M0F, 0xFE, [EVEX_Vpaddd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpaddd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M0F, 0xF6, [EVEX_Vpsadbw_xmm_xmm_xmmm128, EVEX_Vpsadbw_ymm_ymm_ymmm256, EVEX_Vpsadbw_zmm_zmm_zmmm512], &[Vz, Hz, Wub]).p66().tuple(FVM),
    t(M0F, 0xD6, EVEX_Vmovq_xmmm64_xmm, &[Wuq64, Vx]).p66().l128().w1().tuple(T1S8),
    x(M0F, 0xE6, [EVEX_Vcvttpd2dq_xmm_k1z_xmmm128b64, EVEX_Vcvttpd2dq_xmm_k1z_ymmm256b64, EVEX_Vcvttpd2dq_ymm_k1z_zmmm512b64_sae], &[Vh, Wpd]).p66().w1().flags(KZB_SAE).tuple(FV64),
    x(M0F, 0xE6, [EVEX_Vcvtdq2pd_xmm_k1z_xmmm64b32, EVEX_Vcvtdq2pd_ymm_k1z_xmmm128b32, EVEX_Vcvtdq2pd_zmm_k1z_ymmm256b32], &[Vz, WhDq]).pf3().w0().flags(KZB).tuple(HV),
    x(M0F, 0xE6, [EVEX_Vcvtpd2dq_xmm_k1z_xmmm128b64, EVEX_Vcvtpd2dq_xmm_k1z_ymmm256b64, EVEX_Vcvtpd2dq_ymm_k1z_zmmm512b64_er], &[Vh, Wpd]).pf2().w1().flags(KZB_ER).tuple(FV64),
    x(M0F, 0xE7, [EVEX_Vmovntdq_m128_xmm, EVEX_Vmovntdq_m256_ymm, EVEX_Vmovntdq_m512_zmm], &[Mi, Vz]).p66().w0().tuple(FVM),
    // 0F38 map
    x(M38, 0x00, [EVEX_Vpshufb_xmm_k1z_xmm_xmmm128, EVEX_Vpshufb_ymm_k1z_ymm_ymmm256, EVEX_Vpshufb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wub]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x04, [EVEX_Vpmaddubsw_xmm_k1z_xmm_xmmm128, EVEX_Vpmaddubsw_ymm_k1z_ymm_ymmm256, EVEX_Vpmaddubsw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x0B, [EVEX_Vpmulhrsw_xmm_k1z_xmm_xmmm128, EVEX_Vpmulhrsw_ymm_k1z_ymm_ymmm256, EVEX_Vpmulhrsw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x0C, [EVEX_Vpermilps_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermilps_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermilps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x0D, [EVEX_Vpermilpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermilpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermilpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x10, [EVEX_Vpsrlvw_xmm_k1z_xmm_xmmm128, EVEX_Vpsrlvw_ymm_k1z_ymm_ymmm256, EVEX_Vpsrlvw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().w1().flags(KZ).tuple(FVM),
    x(M38, 0x11, [EVEX_Vpsravw_xmm_k1z_xmm_xmmm128, EVEX_Vpsravw_ymm_k1z_ymm_ymmm256, EVEX_Vpsravw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().w1().flags(KZ).tuple(FVM),
    x(M38, 0x12, [EVEX_Vpsllvw_xmm_k1z_xmm_xmmm128, EVEX_Vpsllvw_ymm_k1z_ymm_ymmm256, EVEX_Vpsllvw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().w1().flags(KZ).tuple(FVM),
    x(M38, 0x13, [EVEX_Vcvtph2ps_xmm_k1z_xmmm64, EVEX_Vcvtph2ps_ymm_k1z_xmmm128, EVEX_Vcvtph2ps_zmm_k1z_ymmm256_sae], &[Vz, WhPh]).p66().w0().flags(KZ_SAE).tuple(HVM),
    x(M38, 0x16, [EVEX_Vpermps_Invalid, EVEX_Vpermps_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x16, [Invalid, EVEX_Vpermpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x18, [EVEX_Vbroadcastss_xmm_k1z_xmmm32, EVEX_Vbroadcastss_ymm_k1z_xmmm32, EVEX_Vbroadcastss_zmm_k1z_xmmm32], &[Vz, Wss]).p66().w0().flags(KZ).tuple(T1S4),
    x(M38, 0x19, [EVEX_Vbroadcastf32x2_Invalid, EVEX_Vbroadcastf32x2_ymm_k1z_xmmm64, EVEX_Vbroadcastf32x2_zmm_k1z_xmmm64], &[Vz, Wps64]).p66().w0().flags(KZ).tuple(T2_32),
    x(M38, 0x19, [EVEX_Vbroadcastsd_Invalid, EVEX_Vbroadcastsd_ymm_k1z_xmmm64, EVEX_Vbroadcastsd_zmm_k1z_xmmm64], &[Vz, Wsd]).p66().w1().flags(KZ).tuple(T1S8),
    x(M38, 0x1A, [EVEX_Vbroadcastf32x4_Invalid, EVEX_Vbroadcastf32x4_ymm_k1z_m128, EVEX_Vbroadcastf32x4_zmm_k1z_m128], &[Vz, M128ps]).p66().w0().flags(KZ).tuple(T4_32),
    x(M38, 0x1A, [EVEX_Vbroadcastf64x2_Invalid, EVEX_Vbroadcastf64x2_ymm_k1z_m128, EVEX_Vbroadcastf64x2_zmm_k1z_m128], &[Vz, M128pd]).p66().w1().flags(KZ).tuple(T2_64),
    t(M38, 0x1B, EVEX_Vbroadcastf32x8_zmm_k1z_m256, &[Vz, M256ps]).p66().w0().l512().flags(KZ).tuple(T8_32),
    t(M38, 0x1B, EVEX_Vbroadcastf64x4_zmm_k1z_m256, &[Vz, M256pd]).p66().w1().l512().flags(KZ).tuple(T4_64),
    x(M38, 0x1C, [EVEX_Vpabsb_xmm_k1z_xmmm128, EVEX_Vpabsb_ymm_k1z_ymmm256, EVEX_Vpabsb_zmm_k1z_zmmm512], &[Vz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x1D, [EVEX_Vpabsw_xmm_k1z_xmmm128, EVEX_Vpabsw_ymm_k1z_ymmm256, EVEX_Vpabsw_zmm_k1z_zmmm512], &[Vz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x1E, [EVEX_Vpabsd_xmm_k1z_xmmm128b32, EVEX_Vpabsd_ymm_k1z_ymmm256b32, EVEX_Vpabsd_zmm_k1z_zmmm512b32], &[Vz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x1F, [EVEX_Vpabsq_xmm_k1z_xmmm128b64, EVEX_Vpabsq_ymm_k1z_ymmm256b64, EVEX_Vpabsq_zmm_k1z_zmmm512b64], &[Vz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x20, [EVEX_Vpmovsxbw_xmm_k1z_xmmm64, EVEX_Vpmovsxbw_ymm_k1z_xmmm128, EVEX_Vpmovsxbw_zmm_k1z_ymmm256], &[Vz, Wh]).p66().flags(KZ).tuple(HVM),
    x(M38, 0x21, [EVEX_Vpmovsxbd_xmm_k1z_xmmm32, EVEX_Vpmovsxbd_ymm_k1z_xmmm64, EVEX_Vpmovsxbd_zmm_k1z_xmmm128], &[Vz, Wq4]).p66().flags(KZ).tuple(QVM),
    x(M38, 0x22, [EVEX_Vpmovsxbq_xmm_k1z_xmmm16, EVEX_Vpmovsxbq_ymm_k1z_xmmm32, EVEX_Vpmovsxbq_zmm_k1z_xmmm64], &[Vz, Wq8]).p66().flags(KZ).tuple(OVM),
    x(M38, 0x23, [EVEX_Vpmovsxwd_xmm_k1z_xmmm64, EVEX_Vpmovsxwd_ymm_k1z_xmmm128, EVEX_Vpmovsxwd_zmm_k1z_ymmm256], &[Vz, Wh]).p66().flags(KZ).tuple(HVM),
    x(M38, 0x24, [EVEX_Vpmovsxwq_xmm_k1z_xmmm32, EVEX_Vpmovsxwq_ymm_k1z_xmmm64, EVEX_Vpmovsxwq_zmm_k1z_xmmm128], &[Vz, Wq4]).p66().flags(KZ).tuple(QVM),
    x(M38, 0x25, [EVEX_Vpmovsxdq_xmm_k1z_xmmm64, EVEX_Vpmovsxdq_ymm_k1z_xmmm128, EVEX_Vpmovsxdq_zmm_k1z_ymmm256], &[Vz, Wh]).p66().w0().flags(KZ).tuple(HVM),
    x(M38, 0x30, [EVEX_Vpmovzxbw_xmm_k1z_xmmm64, EVEX_Vpmovzxbw_ymm_k1z_xmmm128, EVEX_Vpmovzxbw_zmm_k1z_ymmm256], &[Vz, Wh]).p66().flags(KZ).tuple(HVM),
    x(M38, 0x31, [EVEX_Vpmovzxbd_xmm_k1z_xmmm32, EVEX_Vpmovzxbd_ymm_k1z_xmmm64, EVEX_Vpmovzxbd_zmm_k1z_xmmm128], &[Vz, Wq4]).p66().flags(KZ).tuple(QVM),
    x(M38, 0x32, [EVEX_Vpmovzxbq_xmm_k1z_xmmm16, EVEX_Vpmovzxbq_ymm_k1z_xmmm32, EVEX_Vpmovzxbq_zmm_k1z_xmmm64], &[Vz, Wq8]).p66().flags(KZ).tuple(OVM),
    x(M38, 0x33, [EVEX_Vpmovzxwd_xmm_k1z_xmmm64, EVEX_Vpmovzxwd_ymm_k1z_xmmm128, EVEX_Vpmovzxwd_zmm_k1z_ymmm256], &[Vz, Wh]).p66().flags(KZ).tuple(HVM),
    x(M38, 0x34, [EVEX_Vpmovzxwq_xmm_k1z_xmmm32, EVEX_Vpmovzxwq_ymm_k1z_xmmm64, EVEX_Vpmovzxwq_zmm_k1z_xmmm128], &[Vz, Wq4]).p66().flags(KZ).tuple(QVM),
    x(M38, 0x35, [EVEX_Vpmovzxdq_xmm_k1z_xmmm64, EVEX_Vpmovzxdq_ymm_k1z_xmmm128, EVEX_Vpmovzxdq_zmm_k1z_ymmm256], &[Vz, Wh]).p66().w0().flags(KZ).tuple(HVM),
    // 0F38 map: down-converting moves, F3 prefix
    x(M38, 0x31, [EVEX_Vpmovdb_xmmm32_k1z_xmm, EVEX_Vpmovdb_xmmm64_k1z_ymm, EVEX_Vpmovdb_xmmm128_k1z_zmm], &[Wq4, Vz]).pf3().w0().flags(KZ).tuple(QVM),
    x(M38, 0x32, [EVEX_Vpmovqb_xmmm16_k1z_xmm, EVEX_Vpmovqb_xmmm32_k1z_ymm, EVEX_Vpmovqb_xmmm64_k1z_zmm], &[Wq8, Vz]).pf3().w0().flags(KZ).tuple(OVM),
    x(M38, 0x33, [EVEX_Vpmovdw_xmmm64_k1z_xmm, EVEX_Vpmovdw_xmmm128_k1z_ymm, EVEX_Vpmovdw_ymmm256_k1z_zmm], &[Wh, Vz]).pf3().w0().flags(KZ).tuple(HVM),
    x(M38, 0x34, [EVEX_Vpmovqw_xmmm32_k1z_xmm, EVEX_Vpmovqw_xmmm64_k1z_ymm, EVEX_Vpmovqw_xmmm128_k1z_zmm], &[Wq4, Vz]).pf3().w0().flags(KZ).tuple(QVM),
    x(M38, 0x35, [EVEX_Vpmovqd_xmmm64_k1z_xmm, EVEX_Vpmovqd_xmmm128_k1z_ymm, EVEX_Vpmovqd_ymmm256_k1z_zmm], &[Wh, Vz]).pf3().w0().flags(KZ).tuple(HVM),
    x(M38, 0x21, [EVEX_Vpmovsdb_xmmm32_k1z_xmm, EVEX_Vpmovsdb_xmmm64_k1z_ymm, EVEX_Vpmovsdb_xmmm128_k1z_zmm], &[Wq4, Vz]).pf3().w0().flags(KZ).tuple(QVM),
    x(M38, 0x23, [EVEX_Vpmovsdw_xmmm64_k1z_xmm, EVEX_Vpmovsdw_xmmm128_k1z_ymm, EVEX_Vpmovsdw_ymmm256_k1z_zmm], &[Wh, Vz]).pf3().w0().flags(KZ).tuple(HVM),
    x(M38, 0x25, [EVEX_Vpmovsqd_xmmm64_k1z_xmm, EVEX_Vpmovsqd_xmmm128_k1z_ymm, EVEX_Vpmovsqd_ymmm256_k1z_zmm], &[Wh, Vz]).pf3().w0().flags(KZ).tuple(HVM),
    x(M38, 0x11, [EVEX_Vpmovusdb_xmmm32_k1z_xmm, EVEX_Vpmovusdb_xmmm64_k1z_ymm, EVEX_Vpmovusdb_xmmm128_k1z_zmm], &[Wq4, Vz]).pf3().w0().flags(KZ).tuple(QVM),
    x(M38, 0x13, [EVEX_Vpmovusdw_xmmm64_k1z_xmm, EVEX_Vpmovusdw_xmmm128_k1z_ymm, EVEX_Vpmovusdw_ymmm256_k1z_zmm], &[Wh, Vz]).pf3().w0().flags(KZ).tuple(HVM),
    x(M38, 0x15, [EVEX_Vpmovusqd_xmmm64_k1z_xmm, EVEX_Vpmovusqd_xmmm128_k1z_ymm, EVEX_Vpmovusqd_ymmm256_k1z_zmm], &[Wh, Vz]).pf3().w0().flags(KZ).tuple(HVM),
    x(M38, 0x26, [EVEX_Vptestmb_kr_k1_xmm_xmmm128, EVEX_Vptestmb_kr_k1_ymm_ymmm256, EVEX_Vptestmb_kr_k1_zmm_zmmm512], &[Kr, Hz, Wb]).p66().w0().flags(K).tuple(FVM),
    x(M38, 0x26, [EVEX_Vptestmw_kr_k1_xmm_xmmm128, EVEX_Vptestmw_kr_k1_ymm_ymmm256, EVEX_Vptestmw_kr_k1_zmm_zmmm512], &[Kr, Hz, Ww]).p66().w1().flags(K).tuple(FVM),
    x(M38, 0x27, [EVEX_Vptestmd_kr_k1_xmm_xmmm128b32, EVEX_Vptestmd_kr_k1_ymm_ymmm256b32, EVEX_Vptestmd_kr_k1_zmm_zmmm512b32], &[Kr, Hz, Wd]).p66().w0().flags(KB).tuple(FV32),
    x(M38, 0x27, [EVEX_Vptestmq_kr_k1_xmm_xmmm128b64, EVEX_Vptestmq_kr_k1_ymm_ymmm256b64, EVEX_Vptestmq_kr_k1_zmm_zmmm512b64], &[Kr, Hz, Wq]).p66().w1().flags(KB).tuple(FV64),
    x(M38, 0x26, [EVEX_Vptestnmb_kr_k1_xmm_xmmm128, EVEX_Vptestnmb_kr_k1_ymm_ymmm256, EVEX_Vptestnmb_kr_k1_zmm_zmmm512], &[Kr, Hz, Wb]).pf3().w0().flags(K).tuple(FVM),
    x(M38, 0x26, [EVEX_Vptestnmw_kr_k1_xmm_xmmm128, EVEX_Vptestnmw_kr_k1_ymm_ymmm256, EVEX_Vptestnmw_kr_k1_zmm_zmmm512], &[Kr, Hz, Ww]).pf3().w1().flags(K).tuple(FVM),
    x(M38, 0x27, [EVEX_Vptestnmd_kr_k1_xmm_xmmm128b32, EVEX_Vptestnmd_kr_k1_ymm_ymmm256b32, EVEX_Vptestnmd_kr_k1_zmm_zmmm512b32], &[Kr, Hz, Wd]).pf3().w0().flags(KB).tuple(FV32),
    x(M38, 0x27, [EVEX_Vptestnmq_kr_k1_xmm_xmmm128b64, EVEX_Vptestnmq_kr_k1_ymm_ymmm256b64, EVEX_Vptestnmq_kr_k1_zmm_zmmm512b64], &[Kr, Hz, Wq]).pf3().w1().flags(KB).tuple(FV64),
    x(M38, 0x28, [EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmuldq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmuldq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x29, [EVEX_Vpcmpeqq_kr_k1_xmm_xmmm128b64, EVEX_Vpcmpeqq_kr_k1_ymm_ymmm256b64, EVEX_Vpcmpeqq_kr_k1_zmm_zmmm512b64], &[Kr, Hz, Wq]).p66().w1().flags(KB).tuple(FV64),
    x(M38, 0x37, [EVEX_Vpcmpgtq_kr_k1_xmm_xmmm128b64, EVEX_Vpcmpgtq_kr_k1_ymm_ymmm256b64, EVEX_Vpcmpgtq_kr_k1_zmm_zmmm512b64], &[Kr, Hz, Wq]).p66().w1().flags(KB).tuple(FV64),
    x(M38, 0x2A, [EVEX_Vmovntdqa_xmm_m128, EVEX_Vmovntdqa_ymm_m256, EVEX_Vmovntdqa_zmm_m512], &[Vz, Mi]).p66().w0().tuple(FVM),
    x(M38, 0x2B, [EVEX_Vpackusdw_xmm_k1z_xmm_xmmm128b32, EVEX_Vpackusdw_ymm_k1z_ymm_ymmm256b32, EVEX_Vpackusdw_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x2C, [EVEX_Vscalefps_xmm_k1z_xmm_xmmm128b32, EVEX_Vscalefps_ymm_k1z_ymm_ymmm256b32, EVEX_Vscalefps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0x2C, [EVEX_Vscalefpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vscalefpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vscalefpd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0x2D, EVEX_Vscalefss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0x2D, EVEX_Vscalefsd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0x36, [EVEX_Vpermd_Invalid, EVEX_Vpermd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x36, [Invalid, EVEX_Vpermq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x38, [EVEX_Vpminsb_xmm_k1z_xmm_xmmm128, EVEX_Vpminsb_ymm_k1z_ymm_ymmm256, EVEX_Vpminsb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x3C, [EVEX_Vpmaxsb_xmm_k1z_xmm_xmmm128, EVEX_Vpmaxsb_ymm_k1z_ymm_ymmm256, EVEX_Vpmaxsb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x3A, [EVEX_Vpminuw_xmm_k1z_xmm_xmmm128, EVEX_Vpminuw_ymm_k1z_ymm_ymmm256, EVEX_Vpminuw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x3E, [EVEX_Vpmaxuw_xmm_k1z_xmm_xmmm128, EVEX_Vpmaxuw_ymm_k1z_ymm_ymmm256, EVEX_Vpmaxuw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().flags(KZ).tuple(FVM),
    x(M38, 0x39, [EVEX_Vpminsd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpminsd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpminsd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x39, [EVEX_Vpminsq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpminsq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpminsq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x3B, [EVEX_Vpminud_xmm_k1z_xmm_xmmm128b32, EVEX_Vpminud_ymm_k1z_ymm_ymmm256b32, EVEX_Vpminud_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x3B, [EVEX_Vpminuq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpminuq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpminuq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x3D, [EVEX_Vpmaxsd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpmaxsd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpmaxsd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x3D, [EVEX_Vpmaxsq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmaxsq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmaxsq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x3F, [EVEX_Vpmaxud_xmm_k1z_xmm_xmmm128b32, EVEX_Vpmaxud_ymm_k1z_ymm_ymmm256b32, EVEX_Vpmaxud_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x3F, [EVEX_Vpmaxuq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmaxuq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmaxuq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x40, [EVEX_Vpmulld_xmm_k1z_xmm_xmmm128b32, EVEX_Vpmulld_ymm_k1z_ymm_ymmm256b32, EVEX_Vpmulld_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x40, [EVEX_Vpmullq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmullq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmullq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x45, [EVEX_Vpsrlvd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpsrlvd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpsrlvd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x45, [EVEX_Vpsrlvq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpsrlvq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpsrlvq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x46, [EVEX_Vpsravd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpsravd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpsravd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x46, [EVEX_Vpsravq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpsravq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpsravq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x47, [EVEX_Vpsllvd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpsllvd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpsllvd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x47, [EVEX_Vpsllvq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpsllvq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpsllvq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x64, [EVEX_Vpblendmd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpblendmd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpblendmd_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x64, [EVEX_Vpblendmq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpblendmq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpblendmq_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x76, [EVEX_Vpermi2d_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermi2d_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermi2d_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x76, [EVEX_Vpermi2q_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermi2q_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermi2q_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x7E, [EVEX_Vpermt2d_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermt2d_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermt2d_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x7E, [EVEX_Vpermt2q_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermt2q_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermt2q_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x42, [EVEX_Vgetexpps_xmm_k1z_xmmm128b32, EVEX_Vgetexpps_ymm_k1z_ymmm256b32, EVEX_Vgetexpps_zmm_k1z_zmmm512b32_sae], &[Vz, Wps]).p66().w0().flags(KZB_SAE).tuple(FV32),
    x(M38, 0x42, [EVEX_Vgetexppd_xmm_k1z_xmmm128b64, EVEX_Vgetexppd_ymm_k1z_ymmm256b64, EVEX_Vgetexppd_zmm_k1z_zmmm512b64_sae], &[Vz, Wpd]).p66().w1().flags(KZB_SAE).tuple(FV64),
    t(M38, 0x43, EVEX_Vgetexpss_xmm_k1z_xmm_xmmm32_sae, &[Vx, Hx, Wss]).p66().w0().flags(KZ_SAE).tuple(T1S4),
    t(M38, 0x43, EVEX_Vgetexpsd_xmm_k1z_xmm_xmmm64_sae, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_SAE).tuple(T1S8),
    x(M38, 0x4C, [EVEX_Vrcp14ps_xmm_k1z_xmmm128b32, EVEX_Vrcp14ps_ymm_k1z_ymmm256b32, EVEX_Vrcp14ps_zmm_k1z_zmmm512b32], &[Vz, Wps]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x4C, [EVEX_Vrcp14pd_xmm_k1z_xmmm128b64, EVEX_Vrcp14pd_ymm_k1z_ymmm256b64, EVEX_Vrcp14pd_zmm_k1z_zmmm512b64], &[Vz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    t(M38, 0x4D, EVEX_Vrcp14ss_xmm_k1z_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0().flags(KZ).tuple(T1S4),
    t(M38, 0x4D, EVEX_Vrcp14sd_xmm_k1z_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1().flags(KZ).tuple(T1S8),
    x(M38, 0x4E, [EVEX_Vrsqrt14ps_xmm_k1z_xmmm128b32, EVEX_Vrsqrt14ps_ymm_k1z_ymmm256b32, EVEX_Vrsqrt14ps_zmm_k1z_zmmm512b32], &[Vz, Wps]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x4E, [EVEX_Vrsqrt14pd_xmm_k1z_xmmm128b64, EVEX_Vrsqrt14pd_ymm_k1z_ymmm256b64, EVEX_Vrsqrt14pd_zmm_k1z_zmmm512b64], &[Vz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    t(M38, 0x4F, EVEX_Vrsqrt14ss_xmm_k1z_xmm_xmmm32, &[Vx, Hx, Wss]).p66().w0().flags(KZ).tuple(T1S4),
    t(M38, 0x4F, EVEX_Vrsqrt14sd_xmm_k1z_xmm_xmmm64, &[Vx, Hx, Wsd]).p66().w1().flags(KZ).tuple(T1S8),
    // 0F38 map: broadcasts
    x(M38, 0x58, [EVEX_Vpbroadcastd_xmm_k1z_xmmm32, EVEX_Vpbroadcastd_ymm_k1z_xmmm32, EVEX_Vpbroadcastd_zmm_k1z_xmmm32], &[Vz, Wd32]).p66().w0().flags(KZ).tuple(T1S4),
    x(M38, 0x59, [EVEX_Vpbroadcastq_xmm_k1z_xmmm64, EVEX_Vpbroadcastq_ymm_k1z_xmmm64, EVEX_Vpbroadcastq_zmm_k1z_xmmm64], &[Vz, Wq64]).p66().w1().flags(KZ).tuple(T1S8),
    x(M38, 0x59, [EVEX_Vbroadcasti32x2_xmm_k1z_xmmm64, EVEX_Vbroadcasti32x2_ymm_k1z_xmmm64, EVEX_Vbroadcasti32x2_zmm_k1z_xmmm64], &[Vz, Wd64]).p66().w0().flags(KZ).tuple(T2_32),
    x(M38, 0x5A, [EVEX_Vbroadcasti32x4_Invalid, EVEX_Vbroadcasti32x4_ymm_k1z_m128, EVEX_Vbroadcasti32x4_zmm_k1z_m128], &[Vz, M128d]).p66().w0().flags(KZ).tuple(T4_32),
    x(M38, 0x5A, [EVEX_Vbroadcasti64x2_Invalid, EVEX_Vbroadcasti64x2_ymm_k1z_m128, EVEX_Vbroadcasti64x2_zmm_k1z_m128], &[Vz, M128q]).p66().w1().flags(KZ).tuple(T2_64),
    t(M38, 0x5B, EVEX_Vbroadcasti32x8_zmm_k1z_m256, &[Vz, M256d]).p66().w0().l512().flags(KZ).tuple(T8_32),
    t(M38, 0x5B, EVEX_Vbroadcasti64x4_zmm_k1z_m256, &[Vz, M256q]).p66().w1().l512().flags(KZ).tuple(T4_64),
    x(M38, 0x65, [EVEX_Vblendmps_xmm_k1z_xmm_xmmm128b32, EVEX_Vblendmps_ymm_k1z_ymm_ymmm256b32, EVEX_Vblendmps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x65, [EVEX_Vblendmpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vblendmpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vblendmpd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x66, [EVEX_Vpblendmb_xmm_k1z_xmm_xmmm128, EVEX_Vpblendmb_ymm_k1z_ymm_ymmm256, EVEX_Vpblendmb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().w0().flags(KZ).tuple(FVM),
    x(M38, 0x66, [EVEX_Vpblendmw_xmm_k1z_xmm_xmmm128, EVEX_Vpblendmw_ymm_k1z_ymm_ymmm256, EVEX_Vpblendmw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().w1().flags(KZ).tuple(FVM),
    x(M38, 0x75, [EVEX_Vpermi2b_xmm_k1z_xmm_xmmm128, EVEX_Vpermi2b_ymm_k1z_ymm_ymmm256, EVEX_Vpermi2b_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().w0().flags(KZ).tuple(FVM),
    x(M38, 0x75, [EVEX_Vpermi2w_xmm_k1z_xmm_xmmm128, EVEX_Vpermi2w_ymm_k1z_ymm_ymmm256, EVEX_Vpermi2w_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().w1().flags(KZ).tuple(FVM),
    x(M38, 0x77, [EVEX_Vpermi2ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermi2ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermi2ps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x77, [EVEX_Vpermi2pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermi2pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermi2pd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0x78, [EVEX_Vpbroadcastb_xmm_k1z_xmmm8, EVEX_Vpbroadcastb_ymm_k1z_xmmm8, EVEX_Vpbroadcastb_zmm_k1z_xmmm8], &[Vz, Wb8]).p66().w0().flags(KZ).tuple(T1S1),
    x(M38, 0x79, [EVEX_Vpbroadcastw_xmm_k1z_xmmm16, EVEX_Vpbroadcastw_ymm_k1z_xmmm16, EVEX_Vpbroadcastw_zmm_k1z_xmmm16], &[Vz, Wb16]).p66().w0().flags(KZ).tuple(T1S2),
    x(M38, 0x7A, [EVEX_Vpbroadcastb_xmm_k1z_r32, EVEX_Vpbroadcastb_ymm_k1z_r32, EVEX_Vpbroadcastb_zmm_k1z_r32], &[Vz, Rd]).p66().w0().flags(KZ),
    x(M38, 0x7B, [EVEX_Vpbroadcastw_xmm_k1z_r32, EVEX_Vpbroadcastw_ymm_k1z_r32, EVEX_Vpbroadcastw_zmm_k1z_r32], &[Vz, Rd]).p66().w0().flags(KZ),
    x(M38, 0x7C, [EVEX_Vpbroadcastq_xmm_k1z_r64, EVEX_Vpbroadcastq_ymm_k1z_r64, EVEX_Vpbroadcastq_zmm_k1z_r64], &[Vz, Rq]).p66().w1().only64().flags(KZ),
    x(M38, 0x7C, [EVEX_Vpbroadcastd_xmm_k1z_r32, EVEX_Vpbroadcastd_ymm_k1z_r32, EVEX_Vpbroadcastd_zmm_k1z_r32], &[Vz, Rd]).p66().flags(KZ),
    x(M38, 0x7D, [EVEX_Vpermt2b_xmm_k1z_xmm_xmmm128, EVEX_Vpermt2b_ymm_k1z_ymm_ymmm256, EVEX_Vpermt2b_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().w0().flags(KZ).tuple(FVM),
    x(M38, 0x7D, [EVEX_Vpermt2w_xmm_k1z_xmm_xmmm128, EVEX_Vpermt2w_ymm_k1z_ymm_ymmm256, EVEX_Vpermt2w_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().w1().flags(KZ).tuple(FVM),
    x(M38, 0x7F, [EVEX_Vpermt2ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermt2ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermt2ps_zmm_k1z_zmm_zmmm512b32], &[Vz, Hz, Wps]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0x7F, [EVEX_Vpermt2pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermt2pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermt2pd_zmm_k1z_zmm_zmmm512b64], &[Vz, Hz, Wpd]).p66().w1().flags(KZB).tuple(FV64),
    // 0F38 map: expand and compress
    x(M38, 0x88, [EVEX_Vexpandps_xmm_k1z_xmmm128, EVEX_Vexpandps_ymm_k1z_ymmm256, EVEX_Vexpandps_zmm_k1z_zmmm512], &[Vz, Wps]).p66().w0().flags(KZ).tuple(T1S4),
    x(M38, 0x88, [EVEX_Vexpandpd_xmm_k1z_xmmm128, EVEX_Vexpandpd_ymm_k1z_ymmm256, EVEX_Vexpandpd_zmm_k1z_zmmm512], &[Vz, Wpd]).p66().w1().flags(KZ).tuple(T1S8),
    x(M38, 0x89, [EVEX_Vpexpandd_xmm_k1z_xmmm128, EVEX_Vpexpandd_ymm_k1z_ymmm256, EVEX_Vpexpandd_zmm_k1z_zmmm512], &[Vz, Wd]).p66().w0().flags(KZ).tuple(T1S4),
    x(M38, 0x89, [EVEX_Vpexpandq_xmm_k1z_xmmm128, EVEX_Vpexpandq_ymm_k1z_ymmm256, EVEX_Vpexpandq_zmm_k1z_zmmm512], &[Vz, Wq]).p66().w1().flags(KZ).tuple(T1S8),
    x(M38, 0x8A, [EVEX_Vcompressps_xmmm128_k1z_xmm, EVEX_Vcompressps_ymmm256_k1z_ymm, EVEX_Vcompressps_zmmm512_k1z_zmm], &[Wps, Vz]).p66().w0().flags(KZ).tuple(T1S4),
    x(M38, 0x8A, [EVEX_Vcompresspd_xmmm128_k1z_xmm, EVEX_Vcompresspd_ymmm256_k1z_ymm, EVEX_Vcompresspd_zmmm512_k1z_zmm], &[Wpd, Vz]).p66().w1().flags(KZ).tuple(T1S8),
    x(M38, 0x8B, [EVEX_Vpcompressd_xmmm128_k1z_xmm, EVEX_Vpcompressd_ymmm256_k1z_ymm, EVEX_Vpcompressd_zmmm512_k1z_zmm], &[Wd, Vz]).p66().w0().flags(KZ).tuple(T1S4),
    x(M38, 0x8B, [EVEX_Vpcompressq_xmmm128_k1z_xmm, EVEX_Vpcompressq_ymmm256_k1z_ymm, EVEX_Vpcompressq_zmmm512_k1z_zmm], &[Wq, Vz]).p66().w1().flags(KZ).tuple(T1S8),
    x(M38, 0x8D, [EVEX_Vpermb_xmm_k1z_xmm_xmmm128, EVEX_Vpermb_ymm_k1z_ymm_ymmm256, EVEX_Vpermb_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Wb]).p66().w0().flags(KZ).tuple(FVM),
    x(M38, 0x8D, [EVEX_Vpermw_xmm_k1z_xmm_xmmm128, EVEX_Vpermw_ymm_k1z_ymm_ymmm256, EVEX_Vpermw_zmm_k1z_zmm_zmmm512], &[Vz, Hz, Ww]).p66().w1().flags(KZ).tuple(FVM),
    // 0F38 map: gathers and scatters, opmask required
    x(M38, 0x90, [EVEX_Vpgatherdd_xmm_k1_vm32x, EVEX_Vpgatherdd_ymm_k1_vm32y, EVEX_Vpgatherdd_zmm_k1_vm32z], &[Vz, VsD]).p66().w0().flags(K1).tuple(T1S4),
    x(M38, 0x90, [EVEX_Vpgatherdq_xmm_k1_vm32x, EVEX_Vpgatherdq_ymm_k1_vm32x, EVEX_Vpgatherdq_zmm_k1_vm32y], &[Vz, VsDh]).p66().w1().flags(K1).tuple(T1S8),
    x(M38, 0x91, [EVEX_Vpgatherqd_xmm_k1_vm64x, EVEX_Vpgatherqd_xmm_k1_vm64y, EVEX_Vpgatherqd_ymm_k1_vm64z], &[Vh, VsD]).p66().w0().flags(K1).tuple(T1S4),
    x(M38, 0x91, [EVEX_Vpgatherqq_xmm_k1_vm64x, EVEX_Vpgatherqq_ymm_k1_vm64y, EVEX_Vpgatherqq_zmm_k1_vm64z], &[Vz, VsQ]).p66().w1().flags(K1).tuple(T1S8),
    x(M38, 0x92, [EVEX_Vgatherdps_xmm_k1_vm32x, EVEX_Vgatherdps_ymm_k1_vm32y, EVEX_Vgatherdps_zmm_k1_vm32z], &[Vz, VsDps]).p66().w0().flags(K1).tuple(T1S4),
    x(M38, 0x92, [EVEX_Vgatherdpd_xmm_k1_vm32x, EVEX_Vgatherdpd_ymm_k1_vm32x, EVEX_Vgatherdpd_zmm_k1_vm32y], &[Vz, VsDpdh]).p66().w1().flags(K1).tuple(T1S8),
    x(M38, 0x93, [EVEX_Vgatherqps_xmm_k1_vm64x, EVEX_Vgatherqps_xmm_k1_vm64y, EVEX_Vgatherqps_ymm_k1_vm64z], &[Vh, VsDps]).p66().w0().flags(K1).tuple(T1S4),
    x(M38, 0x93, [EVEX_Vgatherqpd_xmm_k1_vm64x, EVEX_Vgatherqpd_ymm_k1_vm64y, EVEX_Vgatherqpd_zmm_k1_vm64z], &[Vz, VsQpd]).p66().w1().flags(K1).tuple(T1S8),
    x(M38, 0xA0, [EVEX_Vpscatterdd_vm32x_k1_xmm, EVEX_Vpscatterdd_vm32y_k1_ymm, EVEX_Vpscatterdd_vm32z_k1_zmm], &[VsD, Vz]).p66().w0().flags(K1).tuple(T1S4),
    x(M38, 0xA0, [EVEX_Vpscatterdq_vm32x_k1_xmm, EVEX_Vpscatterdq_vm32x_k1_ymm, EVEX_Vpscatterdq_vm32y_k1_zmm], &[VsDh, Vz]).p66().w1().flags(K1).tuple(T1S8),
    x(M38, 0xA1, [EVEX_Vpscatterqd_vm64x_k1_xmm, EVEX_Vpscatterqd_vm64y_k1_xmm, EVEX_Vpscatterqd_vm64z_k1_ymm], &[VsD, Vh]).p66().w0().flags(K1).tuple(T1S4),
    x(M38, 0xA1, [EVEX_Vpscatterqq_vm64x_k1_xmm, EVEX_Vpscatterqq_vm64y_k1_ymm, EVEX_Vpscatterqq_vm64z_k1_zmm], &[VsQ, Vz]).p66().w1().flags(K1).tuple(T1S8),
    x(M38, 0xA2, [EVEX_Vscatterdps_vm32x_k1_xmm, EVEX_Vscatterdps_vm32y_k1_ymm, EVEX_Vscatterdps_vm32z_k1_zmm], &[VsDps, Vz]).p66().w0().flags(K1).tuple(T1S4),
    x(M38, 0xA2, [EVEX_Vscatterdpd_vm32x_k1_xmm, EVEX_Vscatterdpd_vm32x_k1_ymm, EVEX_Vscatterdpd_vm32y_k1_zmm], &[VsDpdh, Vz]).p66().w1().flags(K1).tuple(T1S8),
    x(M38, 0xA3, [EVEX_Vscatterqps_vm64x_k1_xmm, EVEX_Vscatterqps_vm64y_k1_xmm, EVEX_Vscatterqps_vm64z_k1_ymm], &[VsDps, Vh]).p66().w0().flags(K1).tuple(T1S4),
    x(M38, 0xA3, [EVEX_Vscatterqpd_vm64x_k1_xmm, EVEX_Vscatterqpd_vm64y_k1_ymm, EVEX_Vscatterqpd_vm64z_k1_zmm], &[VsQpd, Vz]).p66().w1().flags(K1).tuple(T1S8),
    // 0F38 map: FMA
    x(M38, 0x96, [EVEX_Vfmaddsub132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmaddsub132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmaddsub132ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0x96, [EVEX_Vfmaddsub132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmaddsub132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmaddsub132pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    x(M38, 0x97, [EVEX_Vfmsubadd132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsubadd132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsubadd132ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0x97, [EVEX_Vfmsubadd132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsubadd132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsubadd132pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    x(M38, 0x98, [EVEX_Vfmadd132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmadd132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmadd132ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0x98, [EVEX_Vfmadd132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmadd132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmadd132pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0x99, EVEX_Vfmadd132ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0x99, EVEX_Vfmadd132sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0x9A, [EVEX_Vfmsub132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsub132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsub132ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0x9A, [EVEX_Vfmsub132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsub132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsub132pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0x9B, EVEX_Vfmsub132ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0x9B, EVEX_Vfmsub132sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0x9C, [EVEX_Vfnmadd132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmadd132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmadd132ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0x9C, [EVEX_Vfnmadd132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmadd132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmadd132pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0x9D, EVEX_Vfnmadd132ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0x9D, EVEX_Vfnmadd132sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0x9E, [EVEX_Vfnmsub132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmsub132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmsub132ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0x9E, [EVEX_Vfnmsub132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmsub132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmsub132pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0x9F, EVEX_Vfnmsub132ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0x9F, EVEX_Vfnmsub132sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xA6, [EVEX_Vfmaddsub213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmaddsub213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmaddsub213ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xA6, [EVEX_Vfmaddsub213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmaddsub213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmaddsub213pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    x(M38, 0xA7, [EVEX_Vfmsubadd213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsubadd213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsubadd213ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xA7, [EVEX_Vfmsubadd213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsubadd213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsubadd213pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    x(M38, 0xA8, [EVEX_Vfmadd213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmadd213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmadd213ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xA8, [EVEX_Vfmadd213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmadd213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmadd213pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0xA9, EVEX_Vfmadd213ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0xA9, EVEX_Vfmadd213sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xAA, [EVEX_Vfmsub213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsub213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsub213ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xAA, [EVEX_Vfmsub213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsub213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsub213pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0xAB, EVEX_Vfmsub213ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0xAB, EVEX_Vfmsub213sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xAC, [EVEX_Vfnmadd213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmadd213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmadd213ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xAC, [EVEX_Vfnmadd213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmadd213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmadd213pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0xAD, EVEX_Vfnmadd213ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0xAD, EVEX_Vfnmadd213sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xAE, [EVEX_Vfnmsub213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmsub213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmsub213ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xAE, [EVEX_Vfnmsub213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmsub213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmsub213pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0xAF, EVEX_Vfnmsub213ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0xAF, EVEX_Vfnmsub213sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xB6, [EVEX_Vfmaddsub231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmaddsub231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmaddsub231ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xB6, [EVEX_Vfmaddsub231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmaddsub231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmaddsub231pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    x(M38, 0xB7, [EVEX_Vfmsubadd231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsubadd231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsubadd231ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xB7, [EVEX_Vfmsubadd231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsubadd231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsubadd231pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    x(M38, 0xB8, [EVEX_Vfmadd231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmadd231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmadd231ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xB8, [EVEX_Vfmadd231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmadd231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmadd231pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0xB9, EVEX_Vfmadd231ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0xB9, EVEX_Vfmadd231sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xBA, [EVEX_Vfmsub231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsub231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsub231ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xBA, [EVEX_Vfmsub231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsub231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsub231pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0xBB, EVEX_Vfmsub231ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0xBB, EVEX_Vfmsub231sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xBC, [EVEX_Vfnmadd231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmadd231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmadd231ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xBC, [EVEX_Vfnmadd231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmadd231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmadd231pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0xBD, EVEX_Vfnmadd231ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0xBD, EVEX_Vfnmadd231sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xBE, [EVEX_Vfnmsub231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmsub231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmsub231ps_zmm_k1z_zmm_zmmm512b32_er], &[Vz, Hz, Wps]).p66().w0().flags(KZB_ER).tuple(FV32),
    x(M38, 0xBE, [EVEX_Vfnmsub231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmsub231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmsub231pd_zmm_k1z_zmm_zmmm512b64_er], &[Vz, Hz, Wpd]).p66().w1().flags(KZB_ER).tuple(FV64),
    t(M38, 0xBF, EVEX_Vfnmsub231ss_xmm_k1z_xmm_xmmm32_er, &[Vx, Hx, Wss]).p66().w0().flags(KZ_ER).tuple(T1S4),
    t(M38, 0xBF, EVEX_Vfnmsub231sd_xmm_k1z_xmm_xmmm64_er, &[Vx, Hx, Wsd]).p66().w1().flags(KZ_ER).tuple(T1S8),
    x(M38, 0xC4, [EVEX_Vpconflictd_xmm_k1z_xmmm128b32, EVEX_Vpconflictd_ymm_k1z_ymmm256b32, EVEX_Vpconflictd_zmm_k1z_zmmm512b32], &[Vz, Wd]).p66().w0().flags(KZB).tuple(FV32),
    x(M38, 0xC4, [EVEX_Vpconflictq_xmm_k1z_xmmm128b64, EVEX_Vpconflictq_ymm_k1z_ymmm256b64, EVEX_Vpconflictq_zmm_k1z_zmmm512b64], &[Vz, Wq]).p66().w1().flags(KZB).tuple(FV64),
    x(M38, 0xDC, [EVEX_Vaesenc_xmm_xmm_xmmm128, EVEX_Vaesenc_ymm_ymm_ymmm256, EVEX_Vaesenc_zmm_zmm_zmmm512], &[Vz, Hz, Wi]).p66().tuple(FVM),
    x(M38, 0xDD, [EVEX_Vaesenclast_xmm_xmm_xmmm128, EVEX_Vaesenclast_ymm_ymm_ymmm256, EVEX_Vaesenclast_zmm_zmm_zmmm512], &[Vz, Hz, Wi]).p66().tuple(FVM),
    x(M38, 0xDE, [EVEX_Vaesdec_xmm_xmm_xmmm128, EVEX_Vaesdec_ymm_ymm_ymmm256, EVEX_Vaesdec_zmm_zmm_zmmm512], &[Vz, Hz, Wi]).p66().tuple(FVM),
    x(M38, 0xDF, [EVEX_Vaesdeclast_xmm_xmm_xmmm128, EVEX_Vaesdeclast_ymm_ymm_ymmm256, EVEX_Vaesdeclast_zmm_zmm_zmmm512], &[Vz, Hz, Wi]).p66().tuple(FVM),
    // 0F3A map
    x(M3A, 0x00, [Invalid, EVEX_Vpermq_ymm_k1z_ymmm256b64_imm8, EVEX_Vpermq_zmm_k1z_zmmm512b64_imm8], &[Vz, Wq, Ib]).p66().w1().flags(KZB).tuple(FV64),
    x(M3A, 0x01, [Invalid, EVEX_Vpermpd_ymm_k1z_ymmm256b64_imm8, EVEX_Vpermpd_zmm_k1z_zmmm512b64_imm8], &[Vz, Wpd, Ib]).p66().w1().flags(KZB).tuple(FV64),
    x(M3A, 0x03, [EVEX_Valignd_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Valignd_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Valignd_zmm_k1z_zmm_zmmm512b32_imm8], &[Vz, Hz, Wd, Ib]).p66().w0().flags(KZB).tuple(FV32),
    x(M3A, 0x03, [EVEX_Valignq_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Valignq_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Valignq_zmm_k1z_zmm_zmmm512b64_imm8], &[Vz, Hz, Wq, Ib]).p66().w1().flags(KZB).tuple(FV64),
    x(M3A, 0x04, [EVEX_Vpermilps_xmm_k1z_xmmm128b32_imm8, EVEX_Vpermilps_ymm_k1z_ymmm256b32_imm8, EVEX_Vpermilps_zmm_k1z_zmmm512b32_imm8], &[Vz, Wps, Ib]).p66().w0().flags(KZB).tuple(FV32),
    x(M3A, 0x05, [EVEX_Vpermilpd_xmm_k1z_xmmm128b64_imm8, EVEX_Vpermilpd_ymm_k1z_ymmm256b64_imm8, EVEX_Vpermilpd_zmm_k1z_zmmm512b64_imm8], &[Vz, Wpd, Ib]).p66().w1().flags(KZB).tuple(FV64),
    x(M3A, 0x08, [EVEX_Vrndscaleps_xmm_k1z_xmmm128b32_imm8, EVEX_Vrndscaleps_ymm_k1z_ymmm256b32_imm8, EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_sae_imm8], &[Vz, Wps, Ib]).p66().w0().flags(KZB_SAE).tuple(FV32),
    x(M3A, 0x09, [EVEX_Vrndscalepd_xmm_k1z_xmmm128b64_imm8, EVEX_Vrndscalepd_ymm_k1z_ymmm256b64_imm8, EVEX_Vrndscalepd_zmm_k1z_zmmm512b64_sae_imm8], &[Vz, Wpd, Ib]).p66().w1().flags(KZB_SAE).tuple(FV64),
    t(M3A, 0x0A, EVEX_Vrndscaless_xmm_k1z_xmm_xmmm32_sae_imm8, &[Vx, Hx, Wss, Ib]).p66().w0().flags(KZ_SAE).tuple(T1S4),
    t(M3A, 0x0B, EVEX_Vrndscalesd_xmm_k1z_xmm_xmmm64_sae_imm8, &[Vx, Hx, Wsd, Ib]).p66().w1().flags(KZ_SAE).tuple(T1S8),
    x(M3A, 0x0F, [EVEX_Vpalignr_xmm_k1z_xmm_xmmm128_imm8, EVEX_Vpalignr_ymm_k1z_ymm_ymmm256_imm8, EVEX_Vpalignr_zmm_k1z_zmm_zmmm512_imm8], &[Vz, Hz, Wb, Ib]).p66().flags(KZ).tuple(FVM),
    t(M3A, 0x14, EVEX_Vpextrb_r64m8_xmm_imm8, &[Eyb, Vx, Ib]).p66().l128().w1().only64().tuple(T1S1),
    t(M3A, 0x14, EVEX_Vpextrb_r32m8_xmm_imm8, &[Eyb, Vx, Ib]).p66().l128().tuple(T1S1),
    t(M3A, 0x15, EVEX_Vpextrw_r64m16_xmm_imm8, &[Eyw, Vx, Ib]).p66().l128().w1().only64().tuple(T1S2),
    t(M3A, 0x15, EVEX_Vpextrw_r32m16_xmm_imm8, &[Eyw, Vx, Ib]).p66().l128().tuple(T1S2),
    t(M3A, 0x16, EVEX_Vpextrq_rm64_xmm_imm8, &[Ey, Vx, Ib]).p66().l128().w1().only64().tuple(T1S8),
    t(M3A, 0x16, EVEX_Vpextrd_rm32_xmm_imm8, &[Ey, Vx, Ib]).p66().l128().tuple(T1S4),
    t(M3A, 0x17, EVEX_Vextractps_rm32_xmm_imm8, &[Ed32, Vx, Ib]).p66().l128().tuple(T1S4),
    x(M3A, 0x18, [EVEX_Vinsertf32x4_Invalid, EVEX_Vinsertf32x4_ymm_k1z_ymm_xmmm128_imm8, EVEX_Vinsertf32x4_zmm_k1z_zmm_xmmm128_imm8], &[Vz, Hz, Wx4ps, Ib]).p66().w0().flags(KZ).tuple(T4_32),
    x(M3A, 0x18, [EVEX_Vinsertf64x2_Invalid, EVEX_Vinsertf64x2_ymm_k1z_ymm_xmmm128_imm8, EVEX_Vinsertf64x2_zmm_k1z_zmm_xmmm128_imm8], &[Vz, Hz, Wx2pd, Ib]).p66().w1().flags(KZ).tuple(T2_64),
    x(M3A, 0x19, [EVEX_Vextractf32x4_Invalid, EVEX_Vextractf32x4_xmmm128_k1z_ymm_imm8, EVEX_Vextractf32x4_xmmm128_k1z_zmm_imm8], &[Wx4ps, Vz, Ib]).p66().w0().flags(KZ).tuple(T4_32),
    x(M3A, 0x19, [EVEX_Vextractf64x2_Invalid, EVEX_Vextractf64x2_xmmm128_k1z_ymm_imm8, EVEX_Vextractf64x2_xmmm128_k1z_zmm_imm8], &[Wx2pd, Vz, Ib]).p66().w1().flags(KZ).tuple(T2_64),
    t(M3A, 0x1A, EVEX_Vinsertf32x8_zmm_k1z_zmm_ymmm256_imm8, &[Vz, Hz, Wy8ps, Ib]).p66().w0().l512().flags(KZ).tuple(T8_32),
    t(M3A, 0x1A, EVEX_Vinsertf64x4_zmm_k1z_zmm_ymmm256_imm8, &[Vz, Hz, Wy4pd, Ib]).p66().w1().l512().flags(KZ).tuple(T4_64),
    t(M3A, 0x1B, EVEX_Vextractf32x8_ymmm256_k1z_zmm_imm8, &[Wy8ps, Vz, Ib]).p66().w0().l512().flags(KZ).tuple(T8_32),
    t(M3A, 0x1B, EVEX_Vextractf64x4_ymmm256_k1z_zmm_imm8, &[Wy4pd, Vz, Ib]).p66().w1().l512().flags(KZ).tuple(T4_64),
    x(M3A, 0x1D, [EVEX_Vcvtps2ph_xmmm64_k1z_xmm_imm8, EVEX_Vcvtps2ph_xmmm128_k1z_ymm_imm8, EVEX_Vcvtps2ph_ymmm256_k1z_zmm_sae_imm8], &[WhPh, Vz, Ib]).p66().w0().flags(KZ_SAE).tuple(HVM),
    x(M3A, 0x1E, [EVEX_Vpcmpud_kr_k1_xmm_xmmm128b32_imm8, EVEX_Vpcmpud_kr_k1_ymm_ymmm256b32_imm8, EVEX_Vpcmpud_kr_k1_zmm_zmmm512b32_imm8], &[Kr, Hz, Wd, Ib]).p66().w0().flags(KB).tuple(FV32),
    x(M3A, 0x1F, [EVEX_Vpcmpd_kr_k1_xmm_xmmm128b32_imm8, EVEX_Vpcmpd_kr_k1_ymm_ymmm256b32_imm8, EVEX_Vpcmpd_kr_k1_zmm_zmmm512b32_imm8], &[Kr, Hz, Wd, Ib]).p66().w0().flags(KB).tuple(FV32),
    x(M3A, 0x1E, [EVEX_Vpcmpuq_kr_k1_xmm_xmmm128b64_imm8, EVEX_Vpcmpuq_kr_k1_ymm_ymmm256b64_imm8, EVEX_Vpcmpuq_kr_k1_zmm_zmmm512b64_imm8], &[Kr, Hz, Wq, Ib]).p66().w1().flags(KB).tuple(FV64),
    x(M3A, 0x1F, [EVEX_Vpcmpq_kr_k1_xmm_xmmm128b64_imm8, EVEX_Vpcmpq_kr_k1_ymm_ymmm256b64_imm8, EVEX_Vpcmpq_kr_k1_zmm_zmmm512b64_imm8], &[Kr, Hz, Wq, Ib]).p66().w1().flags(KB).tuple(FV64),
    t(M3A, 0x20, EVEX_Vpinsrb_xmm_xmm_r64m8_imm8, &[Vx, Hx, Eyb, Ib]).p66().l128().w1().only64().tuple(T1S1),
    t(M3A, 0x20, EVEX_Vpinsrb_xmm_xmm_r32m8_imm8, &[Vx, Hx, Eyb, Ib]).p66().l128().tuple(T1S1),
    t(M3A, 0x21, EVEX_Vinsertps_xmm_xmm_xmmm32_imm8, &[Vx, Hx, Wss, Ib]).p66().l128().w0().tuple(T1S4),
    t(M3A, 0x22, EVEX_Vpinsrq_xmm_xmm_rm64_imm8, &[Vx, Hx, Ey, Ib]).p66().l128().w1().only64().tuple(T1S8),
    t(M3A, 0x22, EVEX_Vpinsrd_xmm_xmm_rm32_imm8, &[Vx, Hx, Ey, Ib]).p66().l128().tuple(T1S4),
    x(M3A, 0x23, [EVEX_Vshuff32x4_Invalid, EVEX_Vshuff32x4_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vshuff32x4_zmm_k1z_zmm_zmmm512b32_imm8], &[Vz, Hz, Wps, Ib]).p66().w0().flags(KZB).tuple(FV32),
    x(M3A, 0x23, [EVEX_Vshuff64x2_Invalid, EVEX_Vshuff64x2_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vshuff64x2_zmm_k1z_zmm_zmmm512b64_imm8], &[Vz, Hz, Wpd, Ib]).p66().w1().flags(KZB).tuple(FV64),
    x(M3A, 0x25, [EVEX_Vpternlogd_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vpternlogd_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vpternlogd_zmm_k1z_zmm_zmmm512b32_imm8], &[Vz, Hz, Wd, Ib]).p66().w0().flags(KZB).tuple(FV32),
    x(M3A, 0x25, [EVEX_Vpternlogq_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vpternlogq_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vpternlogq_zmm_k1z_zmm_zmmm512b64_imm8], &[Vz, Hz, Wq, Ib]).p66().w1().flags(KZB).tuple(FV64),
    x(M3A, 0x26, [EVEX_Vgetmantps_xmm_k1z_xmmm128b32_imm8, EVEX_Vgetmantps_ymm_k1z_ymmm256b32_imm8, EVEX_Vgetmantps_zmm_k1z_zmmm512b32_sae_imm8], &[Vz, Wps, Ib]).p66().w0().flags(KZB_SAE).tuple(FV32),
    x(M3A, 0x26, [EVEX_Vgetmantpd_xmm_k1z_xmmm128b64_imm8, EVEX_Vgetmantpd_ymm_k1z_ymmm256b64_imm8, EVEX_Vgetmantpd_zmm_k1z_zmmm512b64_sae_imm8], &[Vz, Wpd, Ib]).p66().w1().flags(KZB_SAE).tuple(FV64),
    t(M3A, 0x27, EVEX_Vgetmantss_xmm_k1z_xmm_xmmm32_sae_imm8, &[Vx, Hx, Wss, Ib]).p66().w0().flags(KZ_SAE).tuple(T1S4),
    t(M3A, 0x27, EVEX_Vgetmantsd_xmm_k1z_xmm_xmmm64_sae_imm8, &[Vx, Hx, Wsd, Ib]).p66().w1().flags(KZ_SAE).tuple(T1S8),
    x(M3A, 0x38, [EVEX_Vinserti32x4_Invalid, EVEX_Vinserti32x4_ymm_k1z_ymm_xmmm128_imm8, EVEX_Vinserti32x4_zmm_k1z_zmm_xmmm128_imm8], &[Vz, Hz, Wx4d, Ib]).p66().w0().flags(KZ).tuple(T4_32),
    x(M3A, 0x38, [EVEX_Vinserti64x2_Invalid, EVEX_Vinserti64x2_ymm_k1z_ymm_xmmm128_imm8, EVEX_Vinserti64x2_zmm_k1z_zmm_xmmm128_imm8], &[Vz, Hz, Wx2q, Ib]).p66().w1().flags(KZ).tuple(T2_64),
    x(M3A, 0x39, [EVEX_Vextracti32x4_Invalid, EVEX_Vextracti32x4_xmmm128_k1z_ymm_imm8, EVEX_Vextracti32x4_xmmm128_k1z_zmm_imm8], &[Wx4d, Vz, Ib]).p66().w0().flags(KZ).tuple(T4_32),
    x(M3A, 0x39, [EVEX_Vextracti64x2_Invalid, EVEX_Vextracti64x2_xmmm128_k1z_ymm_imm8, EVEX_Vextracti64x2_xmmm128_k1z_zmm_imm8], &[Wx2q, Vz, Ib]).p66().w1().flags(KZ).tuple(T2_64),
    t(M3A, 0x3A, EVEX_Vinserti32x8_zmm_k1z_zmm_ymmm256_imm8, &[Vz, Hz, Wy8d, Ib]).p66().w0().l512().flags(KZ).tuple(T8_32),
    t(M3A, 0x3A, EVEX_Vinserti64x4_zmm_k1z_zmm_ymmm256_imm8, &[Vz, Hz, Wy4q, Ib]).p66().w1().l512().flags(KZ).tuple(T4_64),
    t(M3A, 0x3B, EVEX_Vextracti32x8_ymmm256_k1z_zmm_imm8, &[Wy8d, Vz, Ib]).p66().w0().l512().flags(KZ).tuple(T8_32),
    t(M3A, 0x3B, EVEX_Vextracti64x4_ymmm256_k1z_zmm_imm8, &[Wy4q, Vz, Ib]).p66().w1().l512().flags(KZ).tuple(T4_64),
    x(M3A, 0x3E, [EVEX_Vpcmpub_kr_k1_xmm_xmmm128_imm8, EVEX_Vpcmpub_kr_k1_ymm_ymmm256_imm8, EVEX_Vpcmpub_kr_k1_zmm_zmmm512_imm8], &[Kr, Hz, Wb, Ib]).p66().w0().flags(K).tuple(FVM),
    x(M3A, 0x3E, [EVEX_Vpcmpuw_kr_k1_xmm_xmmm128_imm8, EVEX_Vpcmpuw_kr_k1_ymm_ymmm256_imm8, EVEX_Vpcmpuw_kr_k1_zmm_zmmm512_imm8], &[Kr, Hz, Ww, Ib]).p66().w1().flags(K).tuple(FVM),
    x(M3A, 0x3F, [EVEX_Vpcmpb_kr_k1_xmm_xmmm128_imm8, EVEX_Vpcmpb_kr_k1_ymm_ymmm256_imm8, EVEX_Vpcmpb_kr_k1_zmm_zmmm512_imm8], &[Kr, Hz, Wb, Ib]).p66().w0().flags(K).tuple(FVM),
    x(M3A, 0x3F, [EVEX_Vpcmpw_kr_k1_xmm_xmmm128_imm8, EVEX_Vpcmpw_kr_k1_ymm_ymmm256_imm8, EVEX_Vpcmpw_kr_k1_zmm_zmmm512_imm8], &[Kr, Hz, Ww, Ib]).p66().w1().flags(K).tuple(FVM),
    x(M3A, 0x42, [EVEX_Vdbpsadbw_xmm_k1z_xmm_xmmm128_imm8, EVEX_Vdbpsadbw_ymm_k1z_ymm_ymmm256_imm8, EVEX_Vdbpsadbw_zmm_k1z_zmm_zmmm512_imm8], &[Vz, Hz, Wub, Ib]).p66().w0().flags(KZ).tuple(FVM),
    x(M3A, 0x43, [EVEX_Vshufi32x4_Invalid, EVEX_Vshufi32x4_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vshufi32x4_zmm_k1z_zmm_zmmm512b32_imm8], &[Vz, Hz, Wd, Ib]).p66().w0().flags(KZB).tuple(FV32),
    x(M3A, 0x43, [EVEX_Vshufi64x2_Invalid, EVEX_Vshufi64x2_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vshufi64x2_zmm_k1z_zmm_zmmm512b64_imm8], &[Vz, Hz, Wq, Ib]).p66().w1().flags(KZB).tuple(FV64),
    x(M3A, 0x44, [EVEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, EVEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8, EVEX_Vpclmulqdq_zmm_zmm_zmmm512_imm8], &[Vz, Hz, Wuq, Ib]).p66().tuple(FVM),
    x(M3A, 0x54, [EVEX_Vfixupimmps_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vfixupimmps_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vfixupimmps_zmm_k1z_zmm_zmmm512b32_sae_imm8], &[Vz, Hz, Wd, Ib]).p66().w0().flags(KZB_SAE).tuple(FV32),
    x(M3A, 0x54, [EVEX_Vfixupimmpd_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vfixupimmpd_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vfixupimmpd_zmm_k1z_zmm_zmmm512b64_sae_imm8], &[Vz, Hz, Wq, Ib]).p66().w1().flags(KZB_SAE).tuple(FV64),
];
