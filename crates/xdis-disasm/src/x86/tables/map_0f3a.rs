//! Three-byte opcode map `0F 3A xx`. Every entry carries an imm8.

use super::ops::*;
use super::{tpl, Mem, Op, RegKind, Table, Template};
use xdis_core::Code::{self, *};
use xdis_core::MemorySize as MS;

const fn t(opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(Table::Legacy0F3A, opcode, code, ops)
}

const Wss: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float32));
const Wsd: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float64));
const Eyb: Op = Op::Rm(RegKind::GprW, Mem::Fixed(MS::UInt8));
const Eyw: Op = Op::Rm(RegKind::GprW, Mem::Fixed(MS::UInt16));
const Eyd: Op = Op::Rm(RegKind::GprW, Mem::Fixed(MS::Float32));

pub(super) static TEMPLATES: &[Template] = &[
    t(0x08, Roundps_xmm_xmmm128_imm8, &[Vx, Wps, Ib]).p66(),
    t(0x09, Roundpd_xmm_xmmm128_imm8, &[Vx, Wpd, Ib]).p66(),
    t(0x0A, Roundss_xmm_xmmm32_imm8, &[Vx, Wss, Ib]).p66(),
    t(0x0B, Roundsd_xmm_xmmm64_imm8, &[Vx, Wsd, Ib]).p66(),
    t(0x0C, Blendps_xmm_xmmm128_imm8, &[Vx, Wps, Ib]).p66(),
    t(0x0D, Blendpd_xmm_xmmm128_imm8, &[Vx, Wpd, Ib]).p66(),
    t(0x0E, Pblendw_xmm_xmmm128_imm8, &[Vx, Wpw, Ib]).p66(),
    t(0x0F, Palignr_mm_mmm64_imm8, &[Pq, Qpb, Ib]).np(),
    t(0x0F, Palignr_xmm_xmmm128_imm8, &[Vx, Wpb, Ib]).p66(),
    t(0x14, Pextrb_r64m8_xmm_imm8, &[Eyb, Vx, Ib]).p66().w1().only64(),
    t(0x14, Pextrb_r32m8_xmm_imm8, &[Eyb, Vx, Ib]).p66(),
    t(0x15, Pextrw_r64m16_xmm_imm8, &[Eyw, Vx, Ib]).p66().w1().only64(),
    t(0x15, Pextrw_r32m16_xmm_imm8, &[Eyw, Vx, Ib]).p66(),
    t(0x16, Pextrq_rm64_xmm_imm8, &[E64, Vx, Ib]).p66().w1().only64(),
    t(0x16, Pextrd_rm32_xmm_imm8, &[Ed, Vx, Ib]).p66(),
    t(0x17, Extractps_r64m32_xmm_imm8, &[Eyd, Vx, Ib]).p66().w1().only64(),
    t(0x17, Extractps_rm32_xmm_imm8, &[Eyd, Vx, Ib]).p66(),
    t(0x20, Pinsrb_xmm_r64m8_imm8, &[Vx, Eyb, Ib]).p66().w1().only64(),
    t(0x20, Pinsrb_xmm_r32m8_imm8, &[Vx, Eyb, Ib]).p66(),
    t(0x21, Insertps_xmm_xmmm32_imm8, &[Vx, Wss, Ib]).p66(),
    t(0x22, Pinsrq_xmm_rm64_imm8, &[Vx, E64, Ib]).p66().w1().only64(),
    t(0x22, Pinsrd_xmm_rm32_imm8, &[Vx, Ed, Ib]).p66(),
    t(0x40, Dpps_xmm_xmmm128_imm8, &[Vx, Wps, Ib]).p66(),
    t(0x41, Dppd_xmm_xmmm128_imm8, &[Vx, Wpd, Ib]).p66(),
    t(0x42, Mpsadbw_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66(),
    t(0x44, Pclmulqdq_xmm_xmmm128_imm8, &[Vx, Wpuq, Ib]).p66(),
    // SSE4.2 string compares
    t(0x60, Pcmpestrm64_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66().w1().only64(),
    t(0x60, Pcmpestrm_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66(),
    t(0x61, Pcmpestri64_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66().w1().only64(),
    t(0x61, Pcmpestri_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66(),
    t(0x62, Pcmpistrm_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66(),
    t(0x63, Pcmpistri_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).p66(),
    t(0xCC, Sha1rnds4_xmm_xmmm128_imm8, &[Vx, Wpud, Ib]).np(),
    t(0xDF, Aeskeygenassist_xmm_xmmm128_imm8, &[Vx, Wx, Ib]).p66(),
];
