//! Bounded byte reader over the decoder's input buffer.

use crate::error::DecodeError;

/// Architectural limit on the encoded length of one instruction.
pub const MAX_INSTRUCTION_LEN: usize = 15;

/// Little-endian reader that enforces the 15-byte instruction limit.
///
/// [`begin`](Self::begin) marks the start of an instruction; reads past
/// `start + 15` fail with an `Invalid` error while reads past the end of
/// the buffer fail with `OutOfBytes`.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    start: usize,
    limit: usize,
    address: u64,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            start: 0,
            limit: data.len().min(MAX_INSTRUCTION_LEN),
            address: 0,
        }
    }

    /// Starts a new instruction at the current position. `address` is the
    /// instruction pointer of its first byte.
    pub fn begin(&mut self, address: u64) {
        self.start = self.pos;
        self.limit = self.data.len().min(self.pos + MAX_INSTRUCTION_LEN);
        self.address = address;
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor; clamps to the end of the buffer.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    /// Resets to the start of the current instruction.
    pub fn rewind(&mut self) {
        self.pos = self.start;
    }

    /// Bytes consumed by the current instruction so far.
    pub fn consumed(&self) -> usize {
        self.pos - self.start
    }

    /// Bytes left in the whole buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Next byte without consuming it, if it lies inside the instruction
    /// window.
    pub fn peek_u8(&self) -> Option<u8> {
        if self.pos < self.limit {
            Some(self.data[self.pos])
        } else {
            None
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.ensure(1)?;
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.ensure(2)?;
        let value = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.ensure(4)?;
        let bytes = &self.data[self.pos..self.pos + 4];
        let value = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        self.pos += 4;
        Ok(value)
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let low = self.read_u32()? as u64;
        let high = self.read_u32()? as u64;
        Ok(low | (high << 32))
    }

    /// Reads a `size`-byte little-endian value (1, 2, 4 or 8).
    pub fn read_sized(&mut self, size: usize) -> Result<u64, DecodeError> {
        Ok(match size {
            1 => self.read_u8()? as u64,
            2 => self.read_u16()? as u64,
            4 => self.read_u32()? as u64,
            _ => self.read_u64()?,
        })
    }

    /// Invalid error for the current instruction.
    pub fn invalid(&self, reason: &'static str) -> DecodeError {
        DecodeError::invalid(self.address, reason)
    }

    fn ensure(&self, n: usize) -> Result<(), DecodeError> {
        if self.pos + n <= self.limit {
            return Ok(());
        }
        if self.pos + n - self.start > MAX_INSTRUCTION_LEN {
            return Err(self.invalid("instruction longer than 15 bytes"));
        }
        Err(DecodeError::out_of_bytes(
            self.address,
            self.pos + n - self.start,
            self.data.len() - self.start,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_reads() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09];
        let mut cursor = ByteCursor::new(&data);
        cursor.begin(0);
        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16().unwrap(), 0x0302);
        assert_eq!(cursor.read_u32().unwrap(), 0x0706_0504);
        assert_eq!(cursor.consumed(), 7);
    }

    #[test]
    fn test_out_of_bytes() {
        let data = [0x01, 0x02];
        let mut cursor = ByteCursor::new(&data);
        cursor.begin(0x1000);
        cursor.read_u8().unwrap();
        let err = cursor.read_u32().unwrap_err();
        assert_eq!(err, DecodeError::out_of_bytes(0x1000, 5, 2));
    }

    #[test]
    fn test_length_cap_is_invalid() {
        let data = [0x66u8; 20];
        let mut cursor = ByteCursor::new(&data);
        cursor.begin(0);
        for _ in 0..MAX_INSTRUCTION_LEN {
            cursor.read_u8().unwrap();
        }
        assert!(matches!(cursor.read_u8(), Err(DecodeError::Invalid { .. })));
        assert_eq!(cursor.peek_u8(), None);
    }

    #[test]
    fn test_length_cap_at_buffer_end_is_out_of_bytes() {
        let data = [0x66u8; 15];
        let mut cursor = ByteCursor::new(&data);
        cursor.begin(0);
        for _ in 0..MAX_INSTRUCTION_LEN {
            cursor.read_u8().unwrap();
        }
        assert!(cursor.read_u8().unwrap_err().is_out_of_bytes());
    }

    #[test]
    fn test_window_follows_begin() {
        let data = [0x90u8; 40];
        let mut cursor = ByteCursor::new(&data);
        cursor.set_position(30);
        cursor.begin(0);
        for _ in 0..10 {
            cursor.read_u8().unwrap();
        }
        assert!(cursor.read_u8().unwrap_err().is_out_of_bytes());
        cursor.rewind();
        assert_eq!(cursor.position(), 30);
    }
}
