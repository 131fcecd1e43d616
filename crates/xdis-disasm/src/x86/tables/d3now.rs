//! 3DNow! (`0F 0F /r ib`). Keyed by the trailing opcode byte, which
//! follows the ModR/M, SIB and displacement bytes.

use super::ops::*;
use super::{tpl, Op, Table, Template};
use xdis_core::Code::{self, *};

const fn t(suffix: u8, code: Code, ops: &'static [Op]) -> Template {
    tpl(Table::D3Now, suffix, code, ops)
}

pub(super) static TEMPLATES: &[Template] = &[
    t(0x0C, D3NOW_Pi2fw_mm_mmm64, &[Pq, Qpw]),
    t(0x0D, D3NOW_Pi2fd_mm_mmm64, &[Pq, Qpi]),
    t(0x1C, D3NOW_Pf2iw_mm_mmm64, &[Pq, Qpf]),
    t(0x1D, D3NOW_Pf2id_mm_mmm64, &[Pq, Qpf]),
    t(0x8A, D3NOW_Pfnacc_mm_mmm64, &[Pq, Qpf]),
    t(0x8E, D3NOW_Pfpnacc_mm_mmm64, &[Pq, Qpf]),
    t(0x90, D3NOW_Pfcmpge_mm_mmm64, &[Pq, Qpf]),
    t(0x94, D3NOW_Pfmin_mm_mmm64, &[Pq, Qpf]),
    t(0x96, D3NOW_Pfrcp_mm_mmm64, &[Pq, Qpf]),
    t(0x97, D3NOW_Pfrsqrt_mm_mmm64, &[Pq, Qpf]),
    t(0x9A, D3NOW_Pfsub_mm_mmm64, &[Pq, Qpf]),
    t(0x9E, D3NOW_Pfadd_mm_mmm64, &[Pq, Qpf]),
    t(0xA0, D3NOW_Pfcmpgt_mm_mmm64, &[Pq, Qpf]),
    t(0xA4, D3NOW_Pfmax_mm_mmm64, &[Pq, Qpf]),
    t(0xA6, D3NOW_Pfrcpit1_mm_mmm64, &[Pq, Qpf]),
    t(0xA7, D3NOW_Pfrsqit1_mm_mmm64, &[Pq, Qpf]),
    t(0xAA, D3NOW_Pfsubr_mm_mmm64, &[Pq, Qpf]),
    t(0xAE, D3NOW_Pfacc_mm_mmm64, &[Pq, Qpf]),
    t(0xB0, D3NOW_Pfcmpeq_mm_mmm64, &[Pq, Qpf]),
    t(0xB4, D3NOW_Pfmul_mm_mmm64, &[Pq, Qpf]),
    t(0xB6, D3NOW_Pfrcpit2_mm_mmm64, &[Pq, Qpf]),
    t(0xB7, D3NOW_Pmulhrw_mm_mmm64, &[Pq, Qpw]),
    t(0xBB, D3NOW_Pswapd_mm_mmm64, &[Pq, Qpud]),
    t(0xBF, D3NOW_Pavgusb_mm_mmm64, &[Pq, Qpub]),
];
