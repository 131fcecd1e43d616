//! Three-byte opcode map `0F 38 xx`.

use super::ops::*;
use super::{tpl, tpl_osz, Mem, Op, RegKind, Table, Template};
use xdis_core::Code::{self, *};
use xdis_core::MemorySize as MS;

const fn t(opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(Table::Legacy0F38, opcode, code, ops)
}

const fn v(opcode: u8, codes: [Code; 3], ops: &'static [Op]) -> Template {
    tpl_osz(Table::Legacy0F38, opcode, codes, ops)
}

const Gy: Op = Op::Reg(RegKind::GprW);
const Gm: Op = Op::Reg(RegKind::GprMode);
const Wb8: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed16_Int8));
const Wb4: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed32_Int8));
const Ww4: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed32_Int16));
const Wq8: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_Int8));
const Wq16: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_Int16));
const Wq32: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_Int32));
const Ub8: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed16_UInt8));
const Ub4: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed32_UInt8));
const Uw4: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed32_UInt16));
const Uq8: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_UInt8));
const Uq16: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_UInt16));
const Uq32: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Packed64_UInt32));
const Mdq: Op = Op::M(Mem::Fixed(MS::UInt128));
const Mv: Op = Op::M(OSZ_INT);
const Crc8: Op = Op::Rm(RegKind::Gpr8, Mem::Fixed(MS::UInt8));
const Mnt: Op = Op::M(Mem::W([MS::UInt32, MS::UInt64]));
const M512: Op = Op::M(Mem::Fixed(MS::UInt512));

pub(super) static TEMPLATES: &[Template] = &[
    // SSSE3
    t(0x00, Pshufb_mm_mmm64, &[Pq, Qpub]).np(),
    t(0x00, Pshufb_xmm_xmmm128, &[Vx, Wpub]).p66(),
    t(0x01, Phaddw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x01, Phaddw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x02, Phaddd_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x02, Phaddd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x03, Phaddsw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x03, Phaddsw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x04, Pmaddubsw_mm_mmm64, &[Pq, Qpb]).np(),
    t(0x04, Pmaddubsw_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x05, Phsubw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x05, Phsubw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x06, Phsubd_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x06, Phsubd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x07, Phsubsw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x07, Phsubsw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x08, Psignb_mm_mmm64, &[Pq, Qpb]).np(),
    t(0x08, Psignb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x09, Psignw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x09, Psignw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x0A, Psignd_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x0A, Psignd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x0B, Pmulhrsw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x0B, Pmulhrsw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    // SSE4.1
    t(0x10, Pblendvb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x14, Blendvps_xmm_xmmm128, &[Vx, Wps]).p66(),
    t(0x15, Blendvpd_xmm_xmmm128, &[Vx, Wpd]).p66(),
    t(0x17, Ptest_xmm_xmmm128, &[Vx, Wx]).p66(),
    t(0x1C, Pabsb_mm_mmm64, &[Pq, Qpb]).np(),
    t(0x1C, Pabsb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x1D, Pabsw_mm_mmm64, &[Pq, Qpw]).np(),
    t(0x1D, Pabsw_xmm_xmmm128, &[Vx, Wpw]).p66(),
    t(0x1E, Pabsd_mm_mmm64, &[Pq, Qpi]).np(),
    t(0x1E, Pabsd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x20, Pmovsxbw_xmm_xmmm64, &[Vx, Wq8]).p66(),
    t(0x21, Pmovsxbd_xmm_xmmm32, &[Vx, Wb4]).p66(),
    t(0x22, Pmovsxbq_xmm_xmmm16, &[Vx, Wb8]).p66(),
    t(0x23, Pmovsxwd_xmm_xmmm64, &[Vx, Wq16]).p66(),
    t(0x24, Pmovsxwq_xmm_xmmm32, &[Vx, Ww4]).p66(),
    t(0x25, Pmovsxdq_xmm_xmmm64, &[Vx, Wq32]).p66(),
    t(0x28, Pmuldq_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x29, Pcmpeqq_xmm_xmmm128, &[Vx, Wpq]).p66(),
    t(0x2A, Movntdqa_xmm_m128, &[Vx, Mdq]).p66(),
    t(0x2B, Packusdw_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x30, Pmovzxbw_xmm_xmmm64, &[Vx, Uq8]).p66(),
    t(0x31, Pmovzxbd_xmm_xmmm32, &[Vx, Ub4]).p66(),
    t(0x32, Pmovzxbq_xmm_xmmm16, &[Vx, Ub8]).p66(),
    t(0x33, Pmovzxwd_xmm_xmmm64, &[Vx, Uq16]).p66(),
    t(0x34, Pmovzxwq_xmm_xmmm32, &[Vx, Uw4]).p66(),
    t(0x35, Pmovzxdq_xmm_xmmm64, &[Vx, Uq32]).p66(),
    t(0x37, Pcmpgtq_xmm_xmmm128, &[Vx, Wpq]).p66(),
    t(0x38, Pminsb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x39, Pminsd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x3A, Pminuw_xmm_xmmm128, &[Vx, Wpuw]).p66(),
    t(0x3B, Pminud_xmm_xmmm128, &[Vx, Wpud]).p66(),
    t(0x3C, Pmaxsb_xmm_xmmm128, &[Vx, Wpb]).p66(),
    t(0x3D, Pmaxsd_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x3E, Pmaxuw_xmm_xmmm128, &[Vx, Wpuw]).p66(),
    t(0x3F, Pmaxud_xmm_xmmm128, &[Vx, Wpud]).p66(),
    t(0x40, Pmulld_xmm_xmmm128, &[Vx, Wdq]).p66(),
    t(0x41, Phminposuw_xmm_xmmm128, &[Vx, Wpuw]).p66(),
    // VMX / process-context invalidation
    t(0x80, Invept_r32_m128, &[Gm, Mdq]).p66().not64(),
    t(0x80, Invept_r64_m128, &[Gm, Mdq]).p66().only64(),
    t(0x81, Invvpid_r32_m128, &[Gm, Mdq]).p66().not64(),
    t(0x81, Invvpid_r64_m128, &[Gm, Mdq]).p66().only64(),
    t(0x82, Invpcid_r32_m128, &[Gm, Mdq]).p66().not64(),
    t(0x82, Invpcid_r64_m128, &[Gm, Mdq]).p66().only64(),
    // SHA
    t(0xC8, Sha1nexte_xmm_xmmm128, &[Vx, Wpud]).np(),
    t(0xC9, Sha1msg1_xmm_xmmm128, &[Vx, Wpud]).np(),
    t(0xCA, Sha1msg2_xmm_xmmm128, &[Vx, Wpud]).np(),
    t(0xCB, Sha256rnds2_xmm_xmmm128, &[Vx, Wpud]).np(),
    t(0xCC, Sha256msg1_xmm_xmmm128, &[Vx, Wpud]).np(),
    t(0xCD, Sha256msg2_xmm_xmmm128, &[Vx, Wpud]).np(),
    // AES
    t(0xDB, Aesimc_xmm_xmmm128, &[Vx, Wx]).p66(),
    t(0xDC, Aesenc_xmm_xmmm128, &[Vx, Wx]).p66(),
    t(0xDD, Aesenclast_xmm_xmmm128, &[Vx, Wx]).p66(),
    t(0xDE, Aesdec_xmm_xmmm128, &[Vx, Wx]).p66(),
    t(0xDF, Aesdeclast_xmm_xmmm128, &[Vx, Wx]).p66(),
    // MOVBE / CRC32
    t(0xF0, Crc32_r64_rm8, &[Gy, Crc8]).pf2().w1().only64(),
    t(0xF0, Crc32_r32_rm8, &[Gy, Crc8]).pf2(),
    v(0xF0, [Movbe_r16_m16, Movbe_r32_m32, Movbe_r64_m64], &[Gv, Mv]).no_rep(),
    v(0xF1, [Crc32_r32_rm16, Crc32_r32_rm32, Crc32_r64_rm64], &[Gy, Ev]).pf2(),
    v(0xF1, [Movbe_m16_r16, Movbe_m32_r32, Movbe_m64_r64], &[Mv, Gv]).no_rep(),
    // ADX
    t(0xF6, Adcx_r32_rm32, &[Gd, Ed]).p66().w0(),
    t(0xF6, Adcx_r64_rm64, &[Gq, E64]).p66().w1(),
    t(0xF6, Adox_r32_rm32, &[Gd, Ed]).pf3().w0(),
    t(0xF6, Adox_r64_rm64, &[Gq, E64]).pf3().w1(),
    t(0xF9, Movdiri_m32_r32, &[Mnt, Gy]).np().w0(),
    t(0xF9, Movdiri_m64_r64, &[Mnt, Gy]).np().w1().only64(),
    t(0xF8, Movdir64b_r16_m512, &[Gw, M512]).p66().a16(),
    t(0xF8, Movdir64b_r32_m512, &[Gd, M512]).p66().a32(),
    t(0xF8, Movdir64b_r64_m512, &[Gq, M512]).p66().a64(),
    t(0xF5, Wrussd_m32_r32, &[Mnt, Gy]).p66().w0(),
    t(0xF5, Wrussq_m64_r64, &[Mnt, Gy]).p66().w1(),
];
