// Bounds-checked cursor over a caller-owned byte slice.
//
// Every put verifies the remaining capacity first and fails with
// `WireError::Overflow` instead of touching memory past the slice. A failed
// put leaves earlier bytes in place; callers surface the error and discard
// the buffer.

use super::layout::NAME_BYTES;
use super::WireError;

pub struct RecordWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> RecordWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        if self.pos + needed > self.buf.len() {
            return Err(WireError::Overflow {
                at: self.pos,
                needed,
                capacity: self.buf.len(),
            });
        }
        Ok(())
    }

    pub fn put_i32(&mut self, v: i32) -> Result<(), WireError> {
        self.ensure(4)?;
        self.buf[self.pos..self.pos + 4].copy_from_slice(&v.to_ne_bytes());
        self.pos += 4;
        Ok(())
    }

    pub fn put_u32(&mut self, v: u32) -> Result<(), WireError> {
        self.ensure(4)?;
        self.buf[self.pos..self.pos + 4].copy_from_slice(&v.to_ne_bytes());
        self.pos += 4;
        Ok(())
    }

    pub fn put_u8(&mut self, v: u8) -> Result<(), WireError> {
        self.ensure(1)?;
        self.buf[self.pos] = v;
        self.pos += 1;
        Ok(())
    }

    /// Booleans are always a single 0/1 byte on the wire, never a
    /// platform-native multi-byte bool.
    pub fn put_bool(&mut self, v: bool) -> Result<(), WireError> {
        self.put_u8(u8::from(v))
    }

    /// Write the fixed-width name field: UTF-8 bytes truncated on a char
    /// boundary to at most `NAME_BYTES - 1`, then zero padding. The final
    /// byte is always NUL.
    pub fn put_name(&mut self, name: &str) -> Result<(), WireError> {
        self.ensure(NAME_BYTES)?;
        let mut len = name.len().min(NAME_BYTES - 1);
        while !name.is_char_boundary(len) {
            len -= 1;
        }
        let start = self.pos;
        self.buf[start..start + len].copy_from_slice(&name.as_bytes()[..len]);
        self.buf[start + len..start + NAME_BYTES].fill(0);
        self.pos += NAME_BYTES;
        Ok(())
    }

    /// Explicit zero fill, used for the padding record slots. The buffer may
    /// arrive dirty, so padding cannot rely on prior contents.
    pub fn put_zeros(&mut self, n: usize) -> Result<(), WireError> {
        self.ensure(n)?;
        self.buf[self.pos..self.pos + n].fill(0);
        self.pos += n;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_reports_position_and_capacity() {
        let mut buf = [0u8; 6];
        let mut w = RecordWriter::new(&mut buf);
        w.put_i32(7).unwrap();
        let err = w.put_i32(8).unwrap_err();
        assert_eq!(
            err,
            WireError::Overflow {
                at: 4,
                needed: 4,
                capacity: 6
            }
        );
        // The failed put must not advance the cursor.
        assert_eq!(w.position(), 4);
    }

    #[test]
    fn test_bool_is_one_byte() {
        let mut buf = [0xFFu8; 2];
        let mut w = RecordWriter::new(&mut buf);
        w.put_bool(true).unwrap();
        w.put_bool(false).unwrap();
        assert_eq!(buf, [1, 0]);
    }

    #[test]
    fn test_name_truncates_and_terminates() {
        let long = "x".repeat(100);
        let mut buf = [0xAAu8; NAME_BYTES];
        let mut w = RecordWriter::new(&mut buf);
        w.put_name(&long).unwrap();
        assert_eq!(&buf[..NAME_BYTES - 1], long[..NAME_BYTES - 1].as_bytes());
        assert_eq!(buf[NAME_BYTES - 1], 0);
    }

    #[test]
    fn test_name_truncation_respects_char_boundary() {
        // 31 two-byte chars = 62 bytes; one more would split at byte 63.
        let name = "é".repeat(40);
        let mut buf = [0u8; NAME_BYTES];
        let mut w = RecordWriter::new(&mut buf);
        w.put_name(&name).unwrap();
        let nul = buf.iter().position(|&b| b == 0).unwrap();
        assert!(std::str::from_utf8(&buf[..nul]).is_ok());
    }

    #[test]
    fn test_short_name_is_zero_padded() {
        let mut buf = [0xAAu8; NAME_BYTES + 4];
        let mut w = RecordWriter::new(&mut buf);
        w.put_name("DELL U2719DC").unwrap();
        assert_eq!(&buf[..12], b"DELL U2719DC");
        assert!(buf[12..NAME_BYTES].iter().all(|&b| b == 0));
        // Bytes past the field untouched.
        assert_eq!(&buf[NAME_BYTES..], [0xAA; 4]);
    }
}
