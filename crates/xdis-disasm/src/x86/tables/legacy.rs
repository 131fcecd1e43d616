//! One-byte opcode map.

use super::ops::*;
use super::{tpl, tpl_osz, Flags, Mem, Op, RegKind, Table, Template};
use xdis_core::Code::{self, *};
use xdis_core::{MemorySize as MS, Register as R};

const fn t(opcode: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(Table::Legacy, opcode, code, ops)
}

const fn v(opcode: u8, codes: [Code; 3], ops: &'static [Op]) -> Template {
    tpl_osz(Table::Legacy, opcode, codes, ops)
}

const LOCK: Flags = Flags::LOCK;
const D64: Flags = Flags::D64;
const F64: Flags = Flags::F64;

const EbS: Op = Op::Rm(RegKind::Gpr8, Mem::Fixed(MS::Int8));
const EvS: Op = Op::Rm(RegKind::GprOsz, Mem::Osz([MS::Int16, MS::Int32, MS::Int64]));
const Ew16: Op = Op::Rm(RegKind::GprOsz, Mem::Fixed(MS::UInt16));
const Edq32: Op = Op::Rm(RegKind::Gpr32, Mem::Fixed(MS::Int32));
const Evj: Op = Op::Rm(RegKind::GprOsz, Mem::Osz([MS::WordOffset, MS::DwordOffset, MS::QwordOffset]));
const Sw: Op = Op::Reg(RegKind::Segment);
const SwDst: Op = Op::Reg(RegKind::SegmentDst);
const Zb: Op = Op::OpReg(RegKind::Gpr8);
const Mp: Op = Op::M(Mem::Osz([MS::SegPtr16, MS::SegPtr32, MS::SegPtr64]));
const Ma: Op = Op::M(Mem::Osz([MS::Bound16_WordWord, MS::Bound32_DwordDword, MS::Bound32_DwordDword]));
const Mlea: Op = Op::M(Mem::Fixed(MS::Unknown));
const Ap: Op = Op::FarPtr;
const Ob: Op = Op::Moffs(Mem::Fixed(MS::UInt8));
const Ov: Op = Op::Moffs(OSZ_INT);
const Xb: Op = Op::StrSrc(Mem::Fixed(MS::UInt8));
const Xv: Op = Op::StrSrc(OSZ_INT);
const Xz: Op = Op::StrSrc(Mem::Osz([MS::UInt16, MS::UInt32, MS::UInt32]));
const Yb: Op = Op::StrDst(Mem::Fixed(MS::UInt8));
const Yv: Op = Op::StrDst(OSZ_INT);
const Yz: Op = Op::StrDst(Mem::Osz([MS::UInt16, MS::UInt32, MS::UInt32]));
const eAX: Op = Op::FixedOsz([R::AX, R::EAX, R::EAX]);
const ONE: Op = Op::Const1;
const ES: Op = Op::Fixed(R::ES);
const CS: Op = Op::Fixed(R::CS);
const SS: Op = Op::Fixed(R::SS);
const DS: Op = Op::Fixed(R::DS);

pub(super) static TEMPLATES: &[Template] = &[
    // ALU r/m, reg forms
    t(0x00, Add_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0x01, [Add_rm16_r16, Add_rm32_r32, Add_rm64_r64], &[Ev, Gv]).flags(LOCK),
    t(0x02, Add_r8_rm8, &[Gb, Eb]),
    v(0x03, [Add_r16_rm16, Add_r32_rm32, Add_r64_rm64], &[Gv, Ev]),
    t(0x04, Add_AL_imm8, &[AL, Ib]),
    v(0x05, [Add_AX_imm16, Add_EAX_imm32, Add_RAX_imm32], &[rAX, Iz]),
    v(0x06, [Pushw_ES, Pushd_ES, Invalid], &[ES]).not64(),
    v(0x07, [Popw_ES, Popd_ES, Invalid], &[ES]).not64(),
    t(0x08, Or_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0x09, [Or_rm16_r16, Or_rm32_r32, Or_rm64_r64], &[Ev, Gv]).flags(LOCK),
    t(0x0A, Or_r8_rm8, &[Gb, Eb]),
    v(0x0B, [Or_r16_rm16, Or_r32_rm32, Or_r64_rm64], &[Gv, Ev]),
    t(0x0C, Or_AL_imm8, &[AL, Ib]),
    v(0x0D, [Or_AX_imm16, Or_EAX_imm32, Or_RAX_imm32], &[rAX, Iz]),
    v(0x0E, [Pushw_CS, Pushd_CS, Invalid], &[CS]).not64(),
    t(0x10, Adc_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0x11, [Adc_rm16_r16, Adc_rm32_r32, Adc_rm64_r64], &[Ev, Gv]).flags(LOCK),
    t(0x12, Adc_r8_rm8, &[Gb, Eb]),
    v(0x13, [Adc_r16_rm16, Adc_r32_rm32, Adc_r64_rm64], &[Gv, Ev]),
    t(0x14, Adc_AL_imm8, &[AL, Ib]),
    v(0x15, [Adc_AX_imm16, Adc_EAX_imm32, Adc_RAX_imm32], &[rAX, Iz]),
    v(0x16, [Pushw_SS, Pushd_SS, Invalid], &[SS]).not64(),
    v(0x17, [Popw_SS, Popd_SS, Invalid], &[SS]).not64(),
    t(0x18, Sbb_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0x19, [Sbb_rm16_r16, Sbb_rm32_r32, Sbb_rm64_r64], &[Ev, Gv]).flags(LOCK),
    t(0x1A, Sbb_r8_rm8, &[Gb, Eb]),
    v(0x1B, [Sbb_r16_rm16, Sbb_r32_rm32, Sbb_r64_rm64], &[Gv, Ev]),
    t(0x1C, Sbb_AL_imm8, &[AL, Ib]),
    v(0x1D, [Sbb_AX_imm16, Sbb_EAX_imm32, Sbb_RAX_imm32], &[rAX, Iz]),
    v(0x1E, [Pushw_DS, Pushd_DS, Invalid], &[DS]).not64(),
    v(0x1F, [Popw_DS, Popd_DS, Invalid], &[DS]).not64(),
    t(0x20, And_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0x21, [And_rm16_r16, And_rm32_r32, And_rm64_r64], &[Ev, Gv]).flags(LOCK),
    t(0x22, And_r8_rm8, &[Gb, Eb]),
    v(0x23, [And_r16_rm16, And_r32_rm32, And_r64_rm64], &[Gv, Ev]),
    t(0x24, And_AL_imm8, &[AL, Ib]),
    v(0x25, [And_AX_imm16, And_EAX_imm32, And_RAX_imm32], &[rAX, Iz]),
    t(0x27, Daa, &[]).not64(),
    t(0x28, Sub_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0x29, [Sub_rm16_r16, Sub_rm32_r32, Sub_rm64_r64], &[Ev, Gv]).flags(LOCK),
    t(0x2A, Sub_r8_rm8, &[Gb, Eb]),
    v(0x2B, [Sub_r16_rm16, Sub_r32_rm32, Sub_r64_rm64], &[Gv, Ev]),
    t(0x2C, Sub_AL_imm8, &[AL, Ib]),
    v(0x2D, [Sub_AX_imm16, Sub_EAX_imm32, Sub_RAX_imm32], &[rAX, Iz]),
    t(0x2F, Das, &[]).not64(),
    t(0x30, Xor_rm8_r8, &[Eb, Gb]).flags(LOCK),
    v(0x31, [Xor_rm16_r16, Xor_rm32_r32, Xor_rm64_r64], &[Ev, Gv]).flags(LOCK),
    t(0x32, Xor_r8_rm8, &[Gb, Eb]),
    v(0x33, [Xor_r16_rm16, Xor_r32_rm32, Xor_r64_rm64], &[Gv, Ev]),
    t(0x34, Xor_AL_imm8, &[AL, Ib]),
    v(0x35, [Xor_AX_imm16, Xor_EAX_imm32, Xor_RAX_imm32], &[rAX, Iz]),
    t(0x37, Aaa, &[]).not64(),
    t(0x38, Cmp_rm8_r8, &[Eb, Gb]),
    v(0x39, [Cmp_rm16_r16, Cmp_rm32_r32, Cmp_rm64_r64], &[Ev, Gv]),
    t(0x3A, Cmp_r8_rm8, &[Gb, Eb]),
    v(0x3B, [Cmp_r16_rm16, Cmp_r32_rm32, Cmp_r64_rm64], &[Gv, Ev]),
    t(0x3C, Cmp_AL_imm8, &[AL, Ib]),
    v(0x3D, [Cmp_AX_imm16, Cmp_EAX_imm32, Cmp_RAX_imm32], &[rAX, Iz]),
    t(0x3F, Aas, &[]).not64(),
    // 40..4F are REX in 64-bit mode
    v(0x40, [Inc_r16, Inc_r32, Invalid], &[Zv]).not64(),
    v(0x41, [Inc_r16, Inc_r32, Invalid], &[Zv]).not64(),
    v(0x42, [Inc_r16, Inc_r32, Invalid], &[Zv]).not64(),
    v(0x43, [Inc_r16, Inc_r32, Invalid], &[Zv]).not64(),
    v(0x44, [Inc_r16, Inc_r32, Invalid], &[Zv]).not64(),
    v(0x45, [Inc_r16, Inc_r32, Invalid], &[Zv]).not64(),
    v(0x46, [Inc_r16, Inc_r32, Invalid], &[Zv]).not64(),
    v(0x47, [Inc_r16, Inc_r32, Invalid], &[Zv]).not64(),
    v(0x48, [Dec_r16, Dec_r32, Invalid], &[Zv]).not64(),
    v(0x49, [Dec_r16, Dec_r32, Invalid], &[Zv]).not64(),
    v(0x4A, [Dec_r16, Dec_r32, Invalid], &[Zv]).not64(),
    v(0x4B, [Dec_r16, Dec_r32, Invalid], &[Zv]).not64(),
    v(0x4C, [Dec_r16, Dec_r32, Invalid], &[Zv]).not64(),
    v(0x4D, [Dec_r16, Dec_r32, Invalid], &[Zv]).not64(),
    v(0x4E, [Dec_r16, Dec_r32, Invalid], &[Zv]).not64(),
    v(0x4F, [Dec_r16, Dec_r32, Invalid], &[Zv]).not64(),
    v(0x50, [Push_r16, Push_r32, Push_r64], &[Zv]).flags(D64),
    v(0x51, [Push_r16, Push_r32, Push_r64], &[Zv]).flags(D64),
    v(0x52, [Push_r16, Push_r32, Push_r64], &[Zv]).flags(D64),
    v(0x53, [Push_r16, Push_r32, Push_r64], &[Zv]).flags(D64),
    v(0x54, [Push_r16, Push_r32, Push_r64], &[Zv]).flags(D64),
    v(0x55, [Push_r16, Push_r32, Push_r64], &[Zv]).flags(D64),
    v(0x56, [Push_r16, Push_r32, Push_r64], &[Zv]).flags(D64),
    v(0x57, [Push_r16, Push_r32, Push_r64], &[Zv]).flags(D64),
    v(0x58, [Pop_r16, Pop_r32, Pop_r64], &[Zv]).flags(D64),
    v(0x59, [Pop_r16, Pop_r32, Pop_r64], &[Zv]).flags(D64),
    v(0x5A, [Pop_r16, Pop_r32, Pop_r64], &[Zv]).flags(D64),
    v(0x5B, [Pop_r16, Pop_r32, Pop_r64], &[Zv]).flags(D64),
    v(0x5C, [Pop_r16, Pop_r32, Pop_r64], &[Zv]).flags(D64),
    v(0x5D, [Pop_r16, Pop_r32, Pop_r64], &[Zv]).flags(D64),
    v(0x5E, [Pop_r16, Pop_r32, Pop_r64], &[Zv]).flags(D64),
    v(0x5F, [Pop_r16, Pop_r32, Pop_r64], &[Zv]).flags(D64),
    v(0x60, [Pushaw, Pushad, Invalid], &[]).not64(),
    v(0x61, [Popaw, Popad, Invalid], &[]).not64(),
    v(0x62, [Bound_r16_m1616, Bound_r32_m3232, Invalid], &[Gv, Ma]).not64(),
    v(0x63, [Arpl_rm16_r16, Arpl_r32m16_r32, Invalid], &[Ew16, Gv]).not64(),
    t(0x63, Movsxd_r16_rm16, &[Gw, Ew]).only64().o16(),
    t(0x63, Movsxd_r32_rm32, &[Gd, Ed]).only64().o32(),
    t(0x63, Movsxd_r64_rm32, &[Gq, Edq32]).only64().o64(),
    v(0x68, [Push_imm16, Pushd_imm32, Pushq_imm32], &[Iz]).flags(D64),
    v(0x69, [Imul_r16_rm16_imm16, Imul_r32_rm32_imm32, Imul_r64_rm64_imm32], &[Gv, EvS, Iz]),
    v(0x6A, [Pushw_imm8, Pushd_imm8, Pushq_imm8], &[Ibs]).flags(D64),
    v(0x6B, [Imul_r16_rm16_imm8, Imul_r32_rm32_imm8, Imul_r64_rm64_imm8], &[Gv, EvS, Ibs]),
    t(0x6C, Insb_m8_DX, &[Yb, DX]),
    v(0x6D, [Insw_m16_DX, Insd_m32_DX, Insd_m32_DX], &[Yz, DX]),
    t(0x6E, Outsb_DX_m8, &[DX, Xb]),
    v(0x6F, [Outsw_DX_m16, Outsd_DX_m32, Outsd_DX_m32], &[DX, Xz]),
    // Jcc rel8
    v(0x70, [Jo_rel8_16, Jo_rel8_32, Jo_rel8_64], &[Jb]).flags(F64),
    v(0x71, [Jno_rel8_16, Jno_rel8_32, Jno_rel8_64], &[Jb]).flags(F64),
    v(0x72, [Jb_rel8_16, Jb_rel8_32, Jb_rel8_64], &[Jb]).flags(F64),
    v(0x73, [Jae_rel8_16, Jae_rel8_32, Jae_rel8_64], &[Jb]).flags(F64),
    v(0x74, [Je_rel8_16, Je_rel8_32, Je_rel8_64], &[Jb]).flags(F64),
    v(0x75, [Jne_rel8_16, Jne_rel8_32, Jne_rel8_64], &[Jb]).flags(F64),
    v(0x76, [Jbe_rel8_16, Jbe_rel8_32, Jbe_rel8_64], &[Jb]).flags(F64),
    v(0x77, [Ja_rel8_16, Ja_rel8_32, Ja_rel8_64], &[Jb]).flags(F64),
    v(0x78, [Js_rel8_16, Js_rel8_32, Js_rel8_64], &[Jb]).flags(F64),
    v(0x79, [Jns_rel8_16, Jns_rel8_32, Jns_rel8_64], &[Jb]).flags(F64),
    v(0x7A, [Jp_rel8_16, Jp_rel8_32, Jp_rel8_64], &[Jb]).flags(F64),
    v(0x7B, [Jnp_rel8_16, Jnp_rel8_32, Jnp_rel8_64], &[Jb]).flags(F64),
    v(0x7C, [Jl_rel8_16, Jl_rel8_32, Jl_rel8_64], &[Jb]).flags(F64),
    v(0x7D, [Jge_rel8_16, Jge_rel8_32, Jge_rel8_64], &[Jb]).flags(F64),
    v(0x7E, [Jle_rel8_16, Jle_rel8_32, Jle_rel8_64], &[Jb]).flags(F64),
    v(0x7F, [Jg_rel8_16, Jg_rel8_32, Jg_rel8_64], &[Jb]).flags(F64),
    // Group 1
    t(0x80, Add_rm8_imm8, &[Eb, Ib]).reg(0).flags(LOCK),
    t(0x80, Or_rm8_imm8, &[Eb, Ib]).reg(1).flags(LOCK),
    t(0x80, Adc_rm8_imm8, &[Eb, Ib]).reg(2).flags(LOCK),
    t(0x80, Sbb_rm8_imm8, &[Eb, Ib]).reg(3).flags(LOCK),
    t(0x80, And_rm8_imm8, &[Eb, Ib]).reg(4).flags(LOCK),
    t(0x80, Sub_rm8_imm8, &[Eb, Ib]).reg(5).flags(LOCK),
    t(0x80, Xor_rm8_imm8, &[Eb, Ib]).reg(6).flags(LOCK),
    t(0x80, Cmp_rm8_imm8, &[Eb, Ib]).reg(7),
    v(0x81, [Add_rm16_imm16, Add_rm32_imm32, Add_rm64_imm32], &[Ev, Iz]).reg(0).flags(LOCK),
    v(0x81, [Or_rm16_imm16, Or_rm32_imm32, Or_rm64_imm32], &[Ev, Iz]).reg(1).flags(LOCK),
    v(0x81, [Adc_rm16_imm16, Adc_rm32_imm32, Adc_rm64_imm32], &[Ev, Iz]).reg(2).flags(LOCK),
    v(0x81, [Sbb_rm16_imm16, Sbb_rm32_imm32, Sbb_rm64_imm32], &[Ev, Iz]).reg(3).flags(LOCK),
    v(0x81, [And_rm16_imm16, And_rm32_imm32, And_rm64_imm32], &[Ev, Iz]).reg(4).flags(LOCK),
    v(0x81, [Sub_rm16_imm16, Sub_rm32_imm32, Sub_rm64_imm32], &[Ev, Iz]).reg(5).flags(LOCK),
    v(0x81, [Xor_rm16_imm16, Xor_rm32_imm32, Xor_rm64_imm32], &[Ev, Iz]).reg(6).flags(LOCK),
    v(0x81, [Cmp_rm16_imm16, Cmp_rm32_imm32, Cmp_rm64_imm32], &[Ev, Iz]).reg(7),
    t(0x82, Add_rm8_imm8_82, &[Eb, Ib]).reg(0).not64().flags(LOCK),
    t(0x82, Or_rm8_imm8_82, &[Eb, Ib]).reg(1).not64().flags(LOCK),
    t(0x82, Adc_rm8_imm8_82, &[Eb, Ib]).reg(2).not64().flags(LOCK),
    t(0x82, Sbb_rm8_imm8_82, &[Eb, Ib]).reg(3).not64().flags(LOCK),
    t(0x82, And_rm8_imm8_82, &[Eb, Ib]).reg(4).not64().flags(LOCK),
    t(0x82, Sub_rm8_imm8_82, &[Eb, Ib]).reg(5).not64().flags(LOCK),
    t(0x82, Xor_rm8_imm8_82, &[Eb, Ib]).reg(6).not64().flags(LOCK),
    t(0x82, Cmp_rm8_imm8_82, &[Eb, Ib]).reg(7).not64(),
    v(0x83, [Add_rm16_imm8, Add_rm32_imm8, Add_rm64_imm8], &[Ev, Ibs]).reg(0).flags(LOCK),
    v(0x83, [Or_rm16_imm8, Or_rm32_imm8, Or_rm64_imm8], &[Ev, Ibs]).reg(1).flags(LOCK),
    v(0x83, [Adc_rm16_imm8, Adc_rm32_imm8, Adc_rm64_imm8], &[Ev, Ibs]).reg(2).flags(LOCK),
    v(0x83, [Sbb_rm16_imm8, Sbb_rm32_imm8, Sbb_rm64_imm8], &[Ev, Ibs]).reg(3).flags(LOCK),
    v(0x83, [And_rm16_imm8, And_rm32_imm8, And_rm64_imm8], &[Ev, Ibs]).reg(4).flags(LOCK),
    v(0x83, [Sub_rm16_imm8, Sub_rm32_imm8, Sub_rm64_imm8], &[Ev, Ibs]).reg(5).flags(LOCK),
    v(0x83, [Xor_rm16_imm8, Xor_rm32_imm8, Xor_rm64_imm8], &[Ev, Ibs]).reg(6).flags(LOCK),
    v(0x83, [Cmp_rm16_imm8, Cmp_rm32_imm8, Cmp_rm64_imm8], &[Ev, Ibs]).reg(7),
    t(0x84, Test_rm8_r8, &[Eb, Gb]),
    v(0x85, [Test_rm16_r16, Test_rm32_r32, Test_rm64_r64], &[Ev, Gv]),
    t(0x86, Xchg_rm8_r8, &[Eb, Gb]).flags(LOCK.union(Flags::HLE_XCHG)),
    v(0x87, [Xchg_rm16_r16, Xchg_rm32_r32, Xchg_rm64_r64], &[Ev, Gv]).flags(LOCK.union(Flags::HLE_XCHG)),
    t(0x88, Mov_rm8_r8, &[Eb, Gb]).flags(Flags::HLE_MOV),
    v(0x89, [Mov_rm16_r16, Mov_rm32_r32, Mov_rm64_r64], &[Ev, Gv]).flags(Flags::HLE_MOV),
    t(0x8A, Mov_r8_rm8, &[Gb, Eb]),
    v(0x8B, [Mov_r16_rm16, Mov_r32_rm32, Mov_r64_rm64], &[Gv, Ev]),
    v(0x8C, [Mov_rm16_Sreg, Mov_r32m16_Sreg, Mov_r64m16_Sreg], &[Ew16, Sw]),
    v(0x8D, [Lea_r16_m, Lea_r32_m, Lea_r64_m], &[Gv, Mlea]),
    v(0x8E, [Mov_Sreg_rm16, Mov_Sreg_r32m16, Mov_Sreg_r64m16], &[SwDst, Ew16]),
    v(0x8F, [Pop_rm16, Pop_rm32, Pop_rm64], &[Ev]).reg(0).flags(D64),
    t(0x90, Pause, &[]).pf3(),
    v(0x90, [Nopw, Nopd, Nopq], &[]).flags(Flags::NO_REX_B),
    v(0x90, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[Zv, rAX]),
    v(0x91, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[Zv, rAX]),
    v(0x92, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[Zv, rAX]),
    v(0x93, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[Zv, rAX]),
    v(0x94, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[Zv, rAX]),
    v(0x95, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[Zv, rAX]),
    v(0x96, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[Zv, rAX]),
    v(0x97, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[Zv, rAX]),
    v(0x98, [Cbw, Cwde, Cdqe], &[]),
    v(0x99, [Cwd, Cdq, Cqo], &[]),
    v(0x9A, [Call_ptr1616, Call_ptr1632, Invalid], &[Ap]).not64(),
    t(0x9B, Wait, &[]),
    v(0x9C, [Pushfw, Pushfd, Pushfq], &[]).flags(D64),
    v(0x9D, [Popfw, Popfd, Popfq], &[]).flags(D64),
    t(0x9E, Sahf, &[]),
    t(0x9F, Lahf, &[]),
    t(0xA0, Mov_AL_moffs8, &[AL, Ob]),
    v(0xA1, [Mov_AX_moffs16, Mov_EAX_moffs32, Mov_RAX_moffs64], &[rAX, Ov]),
    t(0xA2, Mov_moffs8_AL, &[Ob, AL]),
    v(0xA3, [Mov_moffs16_AX, Mov_moffs32_EAX, Mov_moffs64_RAX], &[Ov, rAX]),
    t(0xA4, Movsb_m8_m8, &[Yb, Xb]),
    v(0xA5, [Movsw_m16_m16, Movsd_m32_m32, Movsq_m64_m64], &[Yv, Xv]),
    t(0xA6, Cmpsb_m8_m8, &[Xb, Yb]),
    v(0xA7, [Cmpsw_m16_m16, Cmpsd_m32_m32, Cmpsq_m64_m64], &[Xv, Yv]),
    t(0xA8, Test_AL_imm8, &[AL, Ib]),
    v(0xA9, [Test_AX_imm16, Test_EAX_imm32, Test_RAX_imm32], &[rAX, Iz]),
    t(0xAA, Stosb_m8_AL, &[Yb, AL]),
    v(0xAB, [Stosw_m16_AX, Stosd_m32_EAX, Stosq_m64_RAX], &[Yv, rAX]),
    t(0xAC, Lodsb_AL_m8, &[AL, Xb]),
    v(0xAD, [Lodsw_AX_m16, Lodsd_EAX_m32, Lodsq_RAX_m64], &[rAX, Xv]),
    t(0xAE, Scasb_AL_m8, &[AL, Yb]),
    v(0xAF, [Scasw_AX_m16, Scasd_EAX_m32, Scasq_RAX_m64], &[rAX, Yv]),
    t(0xB0, Mov_r8_imm8, &[Zb, Ib]),
    t(0xB1, Mov_r8_imm8, &[Zb, Ib]),
    t(0xB2, Mov_r8_imm8, &[Zb, Ib]),
    t(0xB3, Mov_r8_imm8, &[Zb, Ib]),
    t(0xB4, Mov_r8_imm8, &[Zb, Ib]),
    t(0xB5, Mov_r8_imm8, &[Zb, Ib]),
    t(0xB6, Mov_r8_imm8, &[Zb, Ib]),
    t(0xB7, Mov_r8_imm8, &[Zb, Ib]),
    v(0xB8, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[Zv, Iv]),
    v(0xB9, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[Zv, Iv]),
    v(0xBA, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[Zv, Iv]),
    v(0xBB, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[Zv, Iv]),
    v(0xBC, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[Zv, Iv]),
    v(0xBD, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[Zv, Iv]),
    v(0xBE, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[Zv, Iv]),
    v(0xBF, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[Zv, Iv]),
    // Group 2, imm8 count
    t(0xC0, Rol_rm8_imm8, &[Eb, Ib]).reg(0),
    t(0xC0, Ror_rm8_imm8, &[Eb, Ib]).reg(1),
    t(0xC0, Rcl_rm8_imm8, &[Eb, Ib]).reg(2),
    t(0xC0, Rcr_rm8_imm8, &[Eb, Ib]).reg(3),
    t(0xC0, Shl_rm8_imm8, &[Eb, Ib]).reg(4),
    t(0xC0, Shr_rm8_imm8, &[Eb, Ib]).reg(5),
    t(0xC0, Sal_rm8_imm8, &[Eb, Ib]).reg(6),
    t(0xC0, Sar_rm8_imm8, &[EbS, Ib]).reg(7),
    v(0xC1, [Rol_rm16_imm8, Rol_rm32_imm8, Rol_rm64_imm8], &[Ev, Ib]).reg(0),
    v(0xC1, [Ror_rm16_imm8, Ror_rm32_imm8, Ror_rm64_imm8], &[Ev, Ib]).reg(1),
    v(0xC1, [Rcl_rm16_imm8, Rcl_rm32_imm8, Rcl_rm64_imm8], &[Ev, Ib]).reg(2),
    v(0xC1, [Rcr_rm16_imm8, Rcr_rm32_imm8, Rcr_rm64_imm8], &[Ev, Ib]).reg(3),
    v(0xC1, [Shl_rm16_imm8, Shl_rm32_imm8, Shl_rm64_imm8], &[Ev, Ib]).reg(4),
    v(0xC1, [Shr_rm16_imm8, Shr_rm32_imm8, Shr_rm64_imm8], &[Ev, Ib]).reg(5),
    v(0xC1, [Sal_rm16_imm8, Sal_rm32_imm8, Sal_rm64_imm8], &[Ev, Ib]).reg(6),
    v(0xC1, [Sar_rm16_imm8, Sar_rm32_imm8, Sar_rm64_imm8], &[EvS, Ib]).reg(7),
    v(0xC2, [Retnw_imm16, Retnd_imm16, Retnq_imm16], &[Iw]).flags(F64),
    v(0xC3, [Retnw, Retnd, Retnq], &[]).flags(F64),
    v(0xC4, [Les_r16_m1616, Les_r32_m1632, Invalid], &[Gv, Mp]).not64(),
    v(0xC5, [Lds_r16_m1616, Lds_r32_m1632, Invalid], &[Gv, Mp]).not64(),
    t(0xC6, Xabort_imm8, &[Ib]).modrm(0xF8),
    t(0xC6, Mov_rm8_imm8, &[Eb, Ib]).reg(0).flags(Flags::HLE_MOV),
    v(0xC7, [Xbegin_rel16, Xbegin_rel32, Xbegin_rel32], &[Jz]).modrm(0xF8),
    v(0xC7, [Mov_rm16_imm16, Mov_rm32_imm32, Mov_rm64_imm32], &[Ev, Iz]).reg(0).flags(Flags::HLE_MOV),
    v(0xC8, [Enterw_imm16_imm8, Enterd_imm16_imm8, Enterq_imm16_imm8], &[Iw, Ib2]).flags(D64),
    v(0xC9, [Leavew, Leaved, Leaveq], &[]).flags(D64),
    v(0xCA, [Retfw_imm16, Retfd_imm16, Retfq_imm16], &[Iw]),
    v(0xCB, [Retfw, Retfd, Retfq], &[]),
    t(0xCC, Int3, &[]),
    t(0xCD, Int_imm8, &[Ib]),
    t(0xCE, Into, &[]).not64(),
    v(0xCF, [Iretw, Iretd, Iretq], &[]),
    // Group 2, count of one
    t(0xD0, Rol_rm8_1, &[Eb, ONE]).reg(0),
    t(0xD0, Ror_rm8_1, &[Eb, ONE]).reg(1),
    t(0xD0, Rcl_rm8_1, &[Eb, ONE]).reg(2),
    t(0xD0, Rcr_rm8_1, &[Eb, ONE]).reg(3),
    t(0xD0, Shl_rm8_1, &[Eb, ONE]).reg(4),
    t(0xD0, Shr_rm8_1, &[Eb, ONE]).reg(5),
    t(0xD0, Sal_rm8_1, &[Eb, ONE]).reg(6),
    t(0xD0, Sar_rm8_1, &[EbS, ONE]).reg(7),
    v(0xD1, [Rol_rm16_1, Rol_rm32_1, Rol_rm64_1], &[Ev, ONE]).reg(0),
    v(0xD1, [Ror_rm16_1, Ror_rm32_1, Ror_rm64_1], &[Ev, ONE]).reg(1),
    v(0xD1, [Rcl_rm16_1, Rcl_rm32_1, Rcl_rm64_1], &[Ev, ONE]).reg(2),
    v(0xD1, [Rcr_rm16_1, Rcr_rm32_1, Rcr_rm64_1], &[Ev, ONE]).reg(3),
    v(0xD1, [Shl_rm16_1, Shl_rm32_1, Shl_rm64_1], &[Ev, ONE]).reg(4),
    v(0xD1, [Shr_rm16_1, Shr_rm32_1, Shr_rm64_1], &[Ev, ONE]).reg(5),
    v(0xD1, [Sal_rm16_1, Sal_rm32_1, Sal_rm64_1], &[Ev, ONE]).reg(6),
    v(0xD1, [Sar_rm16_1, Sar_rm32_1, Sar_rm64_1], &[EvS, ONE]).reg(7),
    // Group 2, count in CL
    t(0xD2, Rol_rm8_CL, &[Eb, CL]).reg(0),
    t(0xD2, Ror_rm8_CL, &[Eb, CL]).reg(1),
    t(0xD2, Rcl_rm8_CL, &[Eb, CL]).reg(2),
    t(0xD2, Rcr_rm8_CL, &[Eb, CL]).reg(3),
    t(0xD2, Shl_rm8_CL, &[Eb, CL]).reg(4),
    t(0xD2, Shr_rm8_CL, &[Eb, CL]).reg(5),
    t(0xD2, Sal_rm8_CL, &[Eb, CL]).reg(6),
    t(0xD2, Sar_rm8_CL, &[EbS, CL]).reg(7),
    v(0xD3, [Rol_rm16_CL, Rol_rm32_CL, Rol_rm64_CL], &[Ev, CL]).reg(0),
    v(0xD3, [Ror_rm16_CL, Ror_rm32_CL, Ror_rm64_CL], &[Ev, CL]).reg(1),
    v(0xD3, [Rcl_rm16_CL, Rcl_rm32_CL, Rcl_rm64_CL], &[Ev, CL]).reg(2),
    v(0xD3, [Rcr_rm16_CL, Rcr_rm32_CL, Rcr_rm64_CL], &[Ev, CL]).reg(3),
    v(0xD3, [Shl_rm16_CL, Shl_rm32_CL, Shl_rm64_CL], &[Ev, CL]).reg(4),
    v(0xD3, [Shr_rm16_CL, Shr_rm32_CL, Shr_rm64_CL], &[Ev, CL]).reg(5),
    v(0xD3, [Sal_rm16_CL, Sal_rm32_CL, Sal_rm64_CL], &[Ev, CL]).reg(6),
    v(0xD3, [Sar_rm16_CL, Sar_rm32_CL, Sar_rm64_CL], &[EvS, CL]).reg(7),
    t(0xD4, Aam_imm8, &[Ib]).not64(),
    t(0xD5, Aad_imm8, &[Ib]).not64(),
    t(0xD6, Salc, &[]).not64(),
    t(0xD7, Xlat_m8, &[Op::Xlat]),
    // LOOPcc/JrCXZ: the counter register follows the address size
    v(0xE0, [Loopne_rel8_16_CX, Loopne_rel8_32_CX, Invalid], &[Jb]).a16().flags(F64),
    v(0xE0, [Loopne_rel8_16_ECX, Loopne_rel8_32_ECX, Loopne_rel8_64_ECX], &[Jb]).a32().flags(F64),
    v(0xE0, [Loopne_rel8_16_RCX, Invalid, Loopne_rel8_64_RCX], &[Jb]).a64().flags(F64),
    v(0xE1, [Loope_rel8_16_CX, Loope_rel8_32_CX, Invalid], &[Jb]).a16().flags(F64),
    v(0xE1, [Loope_rel8_16_ECX, Loope_rel8_32_ECX, Loope_rel8_64_ECX], &[Jb]).a32().flags(F64),
    v(0xE1, [Loope_rel8_16_RCX, Invalid, Loope_rel8_64_RCX], &[Jb]).a64().flags(F64),
    v(0xE2, [Loop_rel8_16_CX, Loop_rel8_32_CX, Invalid], &[Jb]).a16().flags(F64),
    v(0xE2, [Loop_rel8_16_ECX, Loop_rel8_32_ECX, Loop_rel8_64_ECX], &[Jb]).a32().flags(F64),
    v(0xE2, [Loop_rel8_16_RCX, Invalid, Loop_rel8_64_RCX], &[Jb]).a64().flags(F64),
    v(0xE3, [Jcxz_rel8_16, Jcxz_rel8_32, Invalid], &[Jb]).a16().flags(F64),
    v(0xE3, [Jecxz_rel8_16, Jecxz_rel8_32, Jecxz_rel8_64], &[Jb]).a32().flags(F64),
    v(0xE3, [Jrcxz_rel8_16, Invalid, Jrcxz_rel8_64], &[Jb]).a64().flags(F64),
    t(0xE4, In_AL_imm8, &[AL, Ib]),
    v(0xE5, [In_AX_imm8, In_EAX_imm8, In_EAX_imm8], &[eAX, Ib]),
    t(0xE6, Out_imm8_AL, &[Ib, AL]),
    v(0xE7, [Out_imm8_AX, Out_imm8_EAX, Out_imm8_EAX], &[Ib, eAX]),
    v(0xE8, [Call_rel16, Call_rel32_32, Call_rel32_64], &[Jz]).flags(F64),
    v(0xE9, [Jmp_rel16, Jmp_rel32_32, Jmp_rel32_64], &[Jz]).flags(F64),
    v(0xEA, [Jmp_ptr1616, Jmp_ptr1632, Invalid], &[Ap]).not64(),
    v(0xEB, [Jmp_rel8_16, Jmp_rel8_32, Jmp_rel8_64], &[Jb]).flags(F64),
    t(0xEC, In_AL_DX, &[AL, DX]),
    v(0xED, [In_AX_DX, In_EAX_DX, In_EAX_DX], &[eAX, DX]),
    t(0xEE, Out_DX_AL, &[DX, AL]),
    v(0xEF, [Out_DX_AX, Out_DX_EAX, Out_DX_EAX], &[DX, eAX]),
    t(0xF1, Int1, &[]),
    t(0xF4, Hlt, &[]),
    t(0xF5, Cmc, &[]),
    // Group 3
    t(0xF6, Test_rm8_imm8, &[Eb, Ib]).reg(0),
    t(0xF6, Test_rm8_imm8_F6, &[Eb, Ib]).reg(1),
    t(0xF6, Not_rm8, &[Eb]).reg(2).flags(LOCK),
    t(0xF6, Neg_rm8, &[EbS]).reg(3).flags(LOCK),
    t(0xF6, Mul_rm8, &[Eb]).reg(4),
    t(0xF6, Imul_rm8, &[EbS]).reg(5),
    t(0xF6, Div_rm8, &[Eb]).reg(6),
    t(0xF6, Idiv_rm8, &[EbS]).reg(7),
    v(0xF7, [Test_rm16_imm16, Test_rm32_imm32, Test_rm64_imm32], &[Ev, Iz]).reg(0),
    v(0xF7, [Test_rm16_imm16_F7, Test_rm32_imm32_F7, Test_rm64_imm32_F7], &[Ev, Iz]).reg(1),
    v(0xF7, [Not_rm16, Not_rm32, Not_rm64], &[Ev]).reg(2).flags(LOCK),
    v(0xF7, [Neg_rm16, Neg_rm32, Neg_rm64], &[EvS]).reg(3).flags(LOCK),
    v(0xF7, [Mul_rm16, Mul_rm32, Mul_rm64], &[Ev]).reg(4),
    v(0xF7, [Imul_rm16, Imul_rm32, Imul_rm64], &[EvS]).reg(5),
    v(0xF7, [Div_rm16, Div_rm32, Div_rm64], &[Ev]).reg(6),
    v(0xF7, [Idiv_rm16, Idiv_rm32, Idiv_rm64], &[EvS]).reg(7),
    t(0xF8, Clc, &[]),
    t(0xF9, Stc, &[]),
    t(0xFA, Cli, &[]),
    t(0xFB, Sti, &[]),
    t(0xFC, Cld, &[]),
    t(0xFD, Std, &[]),
    // Group 4
    t(0xFE, Inc_rm8, &[Eb]).reg(0).flags(LOCK),
    t(0xFE, Dec_rm8, &[Eb]).reg(1).flags(LOCK),
    // Group 5
    v(0xFF, [Inc_rm16, Inc_rm32, Inc_rm64], &[Ev]).reg(0).flags(LOCK),
    v(0xFF, [Dec_rm16, Dec_rm32, Dec_rm64], &[Ev]).reg(1).flags(LOCK),
    v(0xFF, [Call_rm16, Call_rm32, Call_rm64], &[Evj]).reg(2).flags(F64),
    v(0xFF, [Call_m1616, Call_m1632, Call_m1664], &[Mp]).reg(3),
    v(0xFF, [Jmp_rm16, Jmp_rm32, Jmp_rm64], &[Evj]).reg(4).flags(F64),
    v(0xFF, [Jmp_m1616, Jmp_m1632, Jmp_m1664], &[Mp]).reg(5),
    v(0xFF, [Push_rm16, Push_rm32, Push_rm64], &[Ev]).reg(6).flags(D64),
];
