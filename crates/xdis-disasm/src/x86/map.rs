//! Opcode map resolution.
//!
//! Reads the opcode byte(s) that follow the legacy prefixes and decides
//! which template table they index: the one-byte map, the `0F`, `0F 38`
//! and `0F 3A` maps, 3DNow!, or a VEX/EVEX/XOP map after decoding the
//! escape's payload bytes.

use super::cursor::ByteCursor;
use super::prefix::{Prefixes, VexPrefix};
use super::tables::Table;
use crate::error::DecodeError;
use xdis_core::Bitness;

/// Encoding family of the current instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Legacy,
    /// `0F 0F /r ib`; the opcode is the trailing byte.
    D3Now,
    Vex,
    Evex,
    Xop,
}

/// Resolved opcode location.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeLocation {
    pub encoding: Encoding,
    pub table: Table,
    /// Opcode byte inside `table`. Zero for 3DNow! until the trailing
    /// byte has been read.
    pub opcode: u8,
    /// VEX/EVEX/XOP payload.
    pub vex: Option<VexPrefix>,
}

impl OpcodeLocation {
    fn legacy(table: Table, opcode: u8) -> Self {
        Self {
            encoding: Encoding::Legacy,
            table,
            opcode,
            vex: None,
        }
    }
}

/// Reads the opcode bytes at the cursor.
pub fn resolve(
    cursor: &mut ByteCursor<'_>,
    prefixes: &Prefixes,
    bitness: Bitness,
) -> Result<OpcodeLocation, DecodeError> {
    let byte = cursor.read_u8()?;
    match byte {
        0x0F => resolve_0f(cursor),
        0xC4 | 0xC5 | 0x62 if is_vex_escape(cursor, bitness) => {
            check_vex_prefixes(cursor, prefixes)?;
            match byte {
                0xC5 => {
                    let vex = VexPrefix::from_vex2(cursor.read_u8()?, bitness);
                    vex_location(cursor, Encoding::Vex, vex)
                }
                0xC4 => {
                    let b1 = cursor.read_u8()?;
                    let b2 = cursor.read_u8()?;
                    let vex = VexPrefix::from_vex3(b1, b2, bitness);
                    vex_location(cursor, Encoding::Vex, vex)
                }
                _ => {
                    let p0 = cursor.read_u8()?;
                    let p1 = cursor.read_u8()?;
                    let p2 = cursor.read_u8()?;
                    let evex =
                        VexPrefix::from_evex(p0, p1, p2, bitness).map_err(|reason| cursor.invalid(reason))?;
                    vex_location(cursor, Encoding::Evex, evex)
                }
            }
        }
        0x8F if cursor.peek_u8().is_some_and(|next| next & 0x1F >= 8) => {
            check_vex_prefixes(cursor, prefixes)?;
            let b1 = cursor.read_u8()?;
            let b2 = cursor.read_u8()?;
            let xop = VexPrefix::from_vex3(b1, b2, bitness);
            vex_location(cursor, Encoding::Xop, xop)
        }
        _ => Ok(OpcodeLocation::legacy(Table::Legacy, byte)),
    }
}

fn resolve_0f(cursor: &mut ByteCursor<'_>) -> Result<OpcodeLocation, DecodeError> {
    let byte = cursor.read_u8()?;
    Ok(match byte {
        0x38 => OpcodeLocation::legacy(Table::Legacy0F38, cursor.read_u8()?),
        0x3A => OpcodeLocation::legacy(Table::Legacy0F3A, cursor.read_u8()?),
        0x0F => OpcodeLocation {
            encoding: Encoding::D3Now,
            table: Table::D3Now,
            opcode: 0,
            vex: None,
        },
        _ => OpcodeLocation::legacy(Table::Legacy0F, byte),
    })
}

/// `C4`/`C5`/`62` start a VEX/EVEX escape in 64-bit mode, and elsewhere
/// only when the following byte would be a register-form ModR/M of
/// LES/LDS/BOUND.
fn is_vex_escape(cursor: &ByteCursor<'_>, bitness: Bitness) -> bool {
    bitness.is_64() || cursor.peek_u8().is_some_and(|next| next & 0xC0 == 0xC0)
}

fn check_vex_prefixes(cursor: &ByteCursor<'_>, prefixes: &Prefixes) -> Result<(), DecodeError> {
    if prefixes.operand_size || prefixes.has_rep() || prefixes.rex.is_some() {
        return Err(cursor.invalid("66/F2/F3/REX before a VEX, EVEX or XOP escape"));
    }
    if prefixes.lock {
        return Err(cursor.invalid("LOCK before a VEX, EVEX or XOP escape"));
    }
    Ok(())
}

fn vex_location(
    cursor: &mut ByteCursor<'_>,
    encoding: Encoding,
    vex: VexPrefix,
) -> Result<OpcodeLocation, DecodeError> {
    let table = match (encoding, vex.map) {
        (Encoding::Vex, 1) => Table::Vex0F,
        (Encoding::Vex, 2) => Table::Vex0F38,
        (Encoding::Vex, 3) => Table::Vex0F3A,
        (Encoding::Evex, 1) => Table::Evex0F,
        (Encoding::Evex, 2) => Table::Evex0F38,
        (Encoding::Evex, 3) => Table::Evex0F3A,
        (Encoding::Xop, 8) => Table::Xop8,
        (Encoding::Xop, 9) => Table::Xop9,
        (Encoding::Xop, 10) => Table::XopA,
        _ => return Err(cursor.invalid("reserved opcode map")),
    };
    Ok(OpcodeLocation {
        encoding,
        table,
        opcode: cursor.read_u8()?,
        vex: Some(vex),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_bytes(bytes: &[u8], bitness: Bitness) -> Result<OpcodeLocation, DecodeError> {
        let mut cursor = ByteCursor::new(bytes);
        cursor.begin(0);
        let prefixes = Prefixes::scan(&mut cursor, bitness)?;
        resolve(&mut cursor, &prefixes, bitness)
    }

    #[test]
    fn test_legacy_maps() {
        let loc = resolve_bytes(&[0x01, 0xC0], Bitness::Bits64).unwrap();
        assert_eq!((loc.table, loc.opcode), (Table::Legacy, 0x01));

        let loc = resolve_bytes(&[0x0F, 0xA2], Bitness::Bits64).unwrap();
        assert_eq!((loc.table, loc.opcode), (Table::Legacy0F, 0xA2));

        let loc = resolve_bytes(&[0x66, 0x0F, 0x38, 0x00, 0xC1], Bitness::Bits64).unwrap();
        assert_eq!((loc.table, loc.opcode), (Table::Legacy0F38, 0x00));

        let loc = resolve_bytes(&[0x0F, 0x0F, 0xC1, 0x9E], Bitness::Bits32).unwrap();
        assert_eq!(loc.encoding, Encoding::D3Now);
    }

    #[test]
    fn test_les_versus_vex_outside_64bit_mode() {
        // C4 with a memory ModR/M is LES.
        let loc = resolve_bytes(&[0xC4, 0x00], Bitness::Bits32).unwrap();
        assert_eq!((loc.table, loc.opcode), (Table::Legacy, 0xC4));

        let loc = resolve_bytes(&[0xC5, 0xF8, 0x77], Bitness::Bits32).unwrap();
        assert_eq!((loc.encoding, loc.table, loc.opcode), (Encoding::Vex, Table::Vex0F, 0x77));

        let loc = resolve_bytes(&[0xC5, 0x78, 0x77], Bitness::Bits64).unwrap();
        assert_eq!(loc.encoding, Encoding::Vex);
    }

    #[test]
    fn test_xop_versus_pop() {
        let loc = resolve_bytes(&[0x8F, 0xC0], Bitness::Bits64).unwrap();
        assert_eq!((loc.table, loc.opcode), (Table::Legacy, 0x8F));

        let loc = resolve_bytes(&[0x8F, 0xE8, 0x78, 0xA2, 0xC1, 0x20], Bitness::Bits64).unwrap();
        assert_eq!((loc.encoding, loc.table, loc.opcode), (Encoding::Xop, Table::Xop8, 0xA2));
    }

    #[test]
    fn test_prefix_before_escape_is_invalid() {
        for bytes in [
            &[0x66, 0xC5, 0xF8, 0x77][..],
            &[0xF3, 0xC5, 0xF8, 0x77],
            &[0x40, 0xC5, 0xF8, 0x77],
            &[0xF0, 0xC5, 0xF8, 0x77],
        ] {
            assert!(matches!(
                resolve_bytes(bytes, Bitness::Bits64),
                Err(DecodeError::Invalid { .. })
            ));
        }
    }

    #[test]
    fn test_reserved_vex_map() {
        assert!(matches!(
            resolve_bytes(&[0xC4, 0xE4, 0x78, 0x00], Bitness::Bits64),
            Err(DecodeError::Invalid { .. })
        ));
    }

    #[test]
    fn test_truncated_escape() {
        assert!(resolve_bytes(&[0x62, 0xF1], Bitness::Bits64)
            .unwrap_err()
            .is_out_of_bytes());
    }
}
