//! AMD XOP (`8F` escape): maps 8, 9 and A. Shares its field layout with
//! the three-byte VEX prefix; only the map numbers differ.

use super::ops::{Ed, Ib, Vx, Wdq, Wpb, Wpq, Wpub, Wpud, Wpuq, Wpuw, Wpw};
use super::{tpl, tpl_len, Imm, Mem, Op, RegKind, Table, Template};
use xdis_core::Code::{self, *};
use xdis_core::MemorySize as MS;

const X8: Table = Table::Xop8;
const X9: Table = Table::Xop9;
const XA: Table = Table::XopA;

const fn t(map: Table, opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(map, opcode, code, ops)
}

const fn x(map: Table, opcode: u8, c128: Code, c256: Code, ops: &'static [Op]) -> Template {
    tpl_len(map, opcode, [c128, c256, Invalid], ops)
}

const Vy: Op = Op::Reg(RegKind::VecLen);
const Hy: Op = Op::Vvvv(RegKind::VecLen);
const Ly: Op = Op::Is4(RegKind::VecLen);
const Wy: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::UInt128, MS::UInt256, MS::UInt512]));
const Wps: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_Float32, MS::Packed256_Float32, MS::Packed512_Float32]));
const Wpd: Op = Op::Rm(RegKind::VecLen, Mem::Len([MS::Packed128_Float64, MS::Packed256_Float64, MS::Packed512_Float64]));
const Hx: Op = Op::Vvvv(RegKind::Xmm);
const Lx: Op = Op::Is4(RegKind::Xmm);
const Wss: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float32));
const Wsd: Op = Op::Rm(RegKind::Xmm, Mem::Fixed(MS::Float64));

const Gy: Op = Op::Reg(RegKind::GprW);
const By: Op = Op::Vvvv(RegKind::GprW);
const Ey: Op = Op::Rm(RegKind::GprW, Mem::W([MS::UInt32, MS::UInt64]));
const Ry: Op = Op::RmReg(RegKind::GprW);
const Id: Op = Op::Imm(Imm::Id);

pub(super) static TEMPLATES: &[Template] = &[
    // map 8: multiply-accumulate, conditional move, permute, compare, rotate by immediate
    t(X8, 0x85, XOP_Vpmacssww_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wpw, Lx]).w0().l128(),
    t(X8, 0x86, XOP_Vpmacsswd_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wpw, Lx]).w0().l128(),
    t(X8, 0x87, XOP_Vpmacssdql_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wdq, Lx]).w0().l128(),
    t(X8, 0x8E, XOP_Vpmacssdd_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wdq, Lx]).w0().l128(),
    t(X8, 0x8F, XOP_Vpmacssdqh_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wdq, Lx]).w0().l128(),
    t(X8, 0x95, XOP_Vpmacsww_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wpw, Lx]).w0().l128(),
    t(X8, 0x96, XOP_Vpmacswd_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wpw, Lx]).w0().l128(),
    t(X8, 0x97, XOP_Vpmacsdql_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wdq, Lx]).w0().l128(),
    t(X8, 0x9E, XOP_Vpmacsdd_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wdq, Lx]).w0().l128(),
    t(X8, 0x9F, XOP_Vpmacsdqh_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wdq, Lx]).w0().l128(),
    t(X8, 0xA6, XOP_Vpmadcsswd_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wpw, Lx]).w0().l128(),
    t(X8, 0xB6, XOP_Vpmadcswd_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wpw, Lx]).w0().l128(),
    x(X8, 0xA2, XOP_Vpcmov_xmm_xmm_xmmm128_xmm, XOP_Vpcmov_ymm_ymm_ymmm256_ymm, &[Vy, Hy, Wy, Ly]).w0(),
    x(X8, 0xA2, XOP_Vpcmov_xmm_xmm_xmm_xmmm128, XOP_Vpcmov_ymm_ymm_ymm_ymmm256, &[Vy, Hy, Ly, Wy]).w1(),
    t(X8, 0xA3, XOP_Vpperm_xmm_xmm_xmmm128_xmm, &[Vx, Hx, Wpub, Lx]).w0().l128(),
    t(X8, 0xA3, XOP_Vpperm_xmm_xmm_xmm_xmmm128, &[Vx, Hx, Lx, Wpub]).w1().l128(),
    t(X8, 0xC0, XOP_Vprotb_xmm_xmmm128_imm8, &[Vx, Wpub, Ib]).w0().l128(),
    t(X8, 0xC1, XOP_Vprotw_xmm_xmmm128_imm8, &[Vx, Wpuw, Ib]).w0().l128(),
    t(X8, 0xC2, XOP_Vprotd_xmm_xmmm128_imm8, &[Vx, Wpud, Ib]).w0().l128(),
    t(X8, 0xC3, XOP_Vprotq_xmm_xmmm128_imm8, &[Vx, Wpuq, Ib]).w0().l128(),
    t(X8, 0xCC, XOP_Vpcomb_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wpb, Ib]).w0().l128(),
    t(X8, 0xCD, XOP_Vpcomw_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wpw, Ib]).w0().l128(),
    t(X8, 0xCE, XOP_Vpcomd_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wdq, Ib]).w0().l128(),
    t(X8, 0xCF, XOP_Vpcomq_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wpq, Ib]).w0().l128(),
    t(X8, 0xEC, XOP_Vpcomub_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wpub, Ib]).w0().l128(),
    t(X8, 0xED, XOP_Vpcomuw_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wpuw, Ib]).w0().l128(),
    t(X8, 0xEE, XOP_Vpcomud_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wpud, Ib]).w0().l128(),
    t(X8, 0xEF, XOP_Vpcomuq_xmm_xmm_xmmm128_imm8, &[Vx, Hx, Wpuq, Ib]).w0().l128(),
    // map 9: TBM, LWP control, fraction extract, shifts and horizontal adds
    t(X9, 0x01, XOP_Blcfill_r64_rm64, &[By, Ey]).reg(1).l128().w1().only64(),
    t(X9, 0x01, XOP_Blcfill_r32_rm32, &[By, Ey]).reg(1).l128(),
    t(X9, 0x01, XOP_Blsfill_r64_rm64, &[By, Ey]).reg(2).l128().w1().only64(),
    t(X9, 0x01, XOP_Blsfill_r32_rm32, &[By, Ey]).reg(2).l128(),
    t(X9, 0x01, XOP_Blcs_r64_rm64, &[By, Ey]).reg(3).l128().w1().only64(),
    t(X9, 0x01, XOP_Blcs_r32_rm32, &[By, Ey]).reg(3).l128(),
    t(X9, 0x01, XOP_Tzmsk_r64_rm64, &[By, Ey]).reg(4).l128().w1().only64(),
    t(X9, 0x01, XOP_Tzmsk_r32_rm32, &[By, Ey]).reg(4).l128(),
    t(X9, 0x01, XOP_Blcic_r64_rm64, &[By, Ey]).reg(5).l128().w1().only64(),
    t(X9, 0x01, XOP_Blcic_r32_rm32, &[By, Ey]).reg(5).l128(),
    t(X9, 0x01, XOP_Blsic_r64_rm64, &[By, Ey]).reg(6).l128().w1().only64(),
    t(X9, 0x01, XOP_Blsic_r32_rm32, &[By, Ey]).reg(6).l128(),
    t(X9, 0x01, XOP_T1mskc_r64_rm64, &[By, Ey]).reg(7).l128().w1().only64(),
    t(X9, 0x01, XOP_T1mskc_r32_rm32, &[By, Ey]).reg(7).l128(),
    t(X9, 0x02, XOP_Blcmsk_r64_rm64, &[By, Ey]).reg(1).l128().w1().only64(),
    t(X9, 0x02, XOP_Blcmsk_r32_rm32, &[By, Ey]).reg(1).l128(),
    t(X9, 0x02, XOP_Blci_r64_rm64, &[By, Ey]).reg(6).l128().w1().only64(),
    t(X9, 0x02, XOP_Blci_r32_rm32, &[By, Ey]).reg(6).l128(),
    t(X9, 0x12, XOP_Llwpcb_r64, &[Ry]).reg(0).l128().w1().only64(),
    t(X9, 0x12, XOP_Llwpcb_r32, &[Ry]).reg(0).l128(),
    t(X9, 0x12, XOP_Slwpcb_r64, &[Ry]).reg(1).l128().w1().only64(),
    t(X9, 0x12, XOP_Slwpcb_r32, &[Ry]).reg(1).l128(),
    x(X9, 0x80, XOP_Vfrczps_xmm_xmmm128, XOP_Vfrczps_ymm_ymmm256, &[Vy, Wps]).w0(),
    x(X9, 0x81, XOP_Vfrczpd_xmm_xmmm128, XOP_Vfrczpd_ymm_ymmm256, &[Vy, Wpd]).w0(),
    t(X9, 0x82, XOP_Vfrczss_xmm_xmmm32, &[Vx, Wss]).w0().l128(),
    t(X9, 0x83, XOP_Vfrczsd_xmm_xmmm64, &[Vx, Wsd]).w0().l128(),
    t(X9, 0x90, XOP_Vprotb_xmm_xmmm128_xmm, &[Vx, Wpub, Hx]).w0().l128(),
    t(X9, 0x90, XOP_Vprotb_xmm_xmm_xmmm128, &[Vx, Hx, Wpub]).w1().l128(),
    t(X9, 0x91, XOP_Vprotw_xmm_xmmm128_xmm, &[Vx, Wpuw, Hx]).w0().l128(),
    t(X9, 0x91, XOP_Vprotw_xmm_xmm_xmmm128, &[Vx, Hx, Wpuw]).w1().l128(),
    t(X9, 0x92, XOP_Vprotd_xmm_xmmm128_xmm, &[Vx, Wpud, Hx]).w0().l128(),
    t(X9, 0x92, XOP_Vprotd_xmm_xmm_xmmm128, &[Vx, Hx, Wpud]).w1().l128(),
    t(X9, 0x93, XOP_Vprotq_xmm_xmmm128_xmm, &[Vx, Wpuq, Hx]).w0().l128(),
    t(X9, 0x93, XOP_Vprotq_xmm_xmm_xmmm128, &[Vx, Hx, Wpuq]).w1().l128(),
    t(X9, 0x94, XOP_Vpshlb_xmm_xmmm128_xmm, &[Vx, Wpub, Hx]).w0().l128(),
    t(X9, 0x94, XOP_Vpshlb_xmm_xmm_xmmm128, &[Vx, Hx, Wpub]).w1().l128(),
    t(X9, 0x95, XOP_Vpshlw_xmm_xmmm128_xmm, &[Vx, Wpuw, Hx]).w0().l128(),
    t(X9, 0x95, XOP_Vpshlw_xmm_xmm_xmmm128, &[Vx, Hx, Wpuw]).w1().l128(),
    t(X9, 0x96, XOP_Vpshld_xmm_xmmm128_xmm, &[Vx, Wpud, Hx]).w0().l128(),
    t(X9, 0x96, XOP_Vpshld_xmm_xmm_xmmm128, &[Vx, Hx, Wpud]).w1().l128(),
    t(X9, 0x97, XOP_Vpshlq_xmm_xmmm128_xmm, &[Vx, Wpuq, Hx]).w0().l128(),
    t(X9, 0x97, XOP_Vpshlq_xmm_xmm_xmmm128, &[Vx, Hx, Wpuq]).w1().l128(),
    t(X9, 0x98, XOP_Vpshab_xmm_xmmm128_xmm, &[Vx, Wpb, Hx]).w0().l128(),
    t(X9, 0x98, XOP_Vpshab_xmm_xmm_xmmm128, &[Vx, Hx, Wpb]).w1().l128(),
    t(X9, 0x99, XOP_Vpshaw_xmm_xmmm128_xmm, &[Vx, Wpw, Hx]).w0().l128(),
    t(X9, 0x99, XOP_Vpshaw_xmm_xmm_xmmm128, &[Vx, Hx, Wpw]).w1().l128(),
    t(X9, 0x9A, XOP_Vpshad_xmm_xmmm128_xmm, &[Vx, Wdq, Hx]).w0().l128(),
    t(X9, 0x9A, XOP_Vpshad_xmm_xmm_xmmm128, &[Vx, Hx, Wdq]).w1().l128(),
    t(X9, 0x9B, XOP_Vpshaq_xmm_xmmm128_xmm, &[Vx, Wpq, Hx]).w0().l128(),
    t(X9, 0x9B, XOP_Vpshaq_xmm_xmm_xmmm128, &[Vx, Hx, Wpq]).w1().l128(),
    t(X9, 0xC1, XOP_Vphaddbw_xmm_xmmm128, &[Vx, Wpb]).w0().l128(),
    t(X9, 0xC2, XOP_Vphaddbd_xmm_xmmm128, &[Vx, Wpb]).w0().l128(),
    t(X9, 0xC3, XOP_Vphaddbq_xmm_xmmm128, &[Vx, Wpb]).w0().l128(),
    t(X9, 0xC6, XOP_Vphaddwd_xmm_xmmm128, &[Vx, Wpw]).w0().l128(),
    t(X9, 0xC7, XOP_Vphaddwq_xmm_xmmm128, &[Vx, Wpw]).w0().l128(),
    t(X9, 0xCB, XOP_Vphadddq_xmm_xmmm128, &[Vx, Wdq]).w0().l128(),
    t(X9, 0xD1, XOP_Vphaddubw_xmm_xmmm128, &[Vx, Wpub]).w0().l128(),
    t(X9, 0xD2, XOP_Vphaddubd_xmm_xmmm128, &[Vx, Wpub]).w0().l128(),
    t(X9, 0xD3, XOP_Vphaddubq_xmm_xmmm128, &[Vx, Wpub]).w0().l128(),
    t(X9, 0xD6, XOP_Vphadduwd_xmm_xmmm128, &[Vx, Wpuw]).w0().l128(),
    t(X9, 0xD7, XOP_Vphadduwq_xmm_xmmm128, &[Vx, Wpuw]).w0().l128(),
    t(X9, 0xDB, XOP_Vphaddudq_xmm_xmmm128, &[Vx, Wpud]).w0().l128(),
    t(X9, 0xE1, XOP_Vphsubbw_xmm_xmmm128, &[Vx, Wpb]).w0().l128(),
    t(X9, 0xE2, XOP_Vphsubwd_xmm_xmmm128, &[Vx, Wpw]).w0().l128(),
    t(X9, 0xE3, XOP_Vphsubdq_xmm_xmmm128, &[Vx, Wdq]).w0().l128(),
    // map A: immediate-form bextr and LWP inserts
    t(XA, 0x10, XOP_Bextr_r64_rm64_imm32, &[Gy, Ey, Id]).l128().w1().only64(),
    t(XA, 0x10, XOP_Bextr_r32_rm32_imm32, &[Gy, Ey, Id]).l128(),
    t(XA, 0x12, XOP_Lwpins_r64_rm32_imm32, &[By, Ed, Id]).reg(0).l128().w1().only64(),
    t(XA, 0x12, XOP_Lwpins_r32_rm32_imm32, &[By, Ed, Id]).reg(0).l128(),
    t(XA, 0x12, XOP_Lwpval_r64_rm32_imm32, &[By, Ed, Id]).reg(1).l128().w1().only64(),
    t(XA, 0x12, XOP_Lwpval_r32_rm32_imm32, &[By, Ed, Id]).reg(1).l128(),
];
