// Typed reader for serialized snapshots.
//
// The inverse of `encode`, used by Rust consumers and by the round-trip
// tests. Validates the trailer tag and the header invariants before
// reconstructing records; a buffer that fails here was either truncated
// mid-write or produced by an incompatible writer.

use super::layout::{size_for, FORMAT_TAG, NAME_BYTES, TRAILER_BYTES};
use super::WireError;
use crate::screen::types::{PhysicalSize, PixelSize, ScreenRecord, VirtRect};

/// A decoded snapshot. `records` always has length `max_count`; slots at
/// index `count` and beyond are all-zero padding records.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub count: usize,
    pub max_count: usize,
    pub taskbar_auto_hide: bool,
    pub more: bool,
    pub version: (u8, u8, u8),
    pub records: Vec<ScreenRecord>,
}

impl Snapshot {
    /// The records that carry real data, excluding padding slots.
    pub fn filled(&self) -> &[ScreenRecord] {
        &self.records[..self.count]
    }
}

pub fn decode(buf: &[u8]) -> Result<Snapshot, WireError> {
    let mut r = RecordReader::new(buf);

    let count = r.take_i32()?;
    let max_count = r.take_i32()?;
    if max_count < 0 || count < 0 || count > max_count {
        return Err(WireError::CountOutOfRange { count, max_count });
    }
    let max_count = max_count as usize;

    let expected = size_for(max_count);
    if buf.len() < expected {
        return Err(WireError::Truncated {
            expected,
            actual: buf.len(),
            max_count,
        });
    }

    // Check the tag before bothering with the records: a missing tag means
    // the write never completed.
    let tag_at = expected - TRAILER_BYTES;
    let found = u32::from_ne_bytes(buf[tag_at..expected].try_into().unwrap());
    if found != FORMAT_TAG {
        return Err(WireError::BadTag {
            expected: FORMAT_TAG,
            found,
        });
    }

    let taskbar_auto_hide = r.take_i32()? != 0;
    let more = r.take_bool()?;
    let version = (r.take_u8()?, r.take_u8()?, r.take_u8()?);

    let mut records = Vec::with_capacity(max_count);
    for _ in 0..max_count {
        records.push(decode_record(&mut r)?);
    }

    Ok(Snapshot {
        count: count as usize,
        max_count,
        taskbar_auto_hide,
        more,
        version,
        records,
    })
}

fn decode_record(r: &mut RecordReader<'_>) -> Result<ScreenRecord, WireError> {
    Ok(ScreenRecord {
        info_bits: r.take_i32()?,
        refresh_rate: r.take_i32()?,
        is_primary: r.take_bool()?,
        pixel: PixelSize {
            width: r.take_i32()?,
            height: r.take_i32()?,
        },
        virt: decode_rect(r)?,
        work: decode_rect(r)?,
        physical: PhysicalSize {
            width_mm: r.take_i32()?,
            height_mm: r.take_i32()?,
            diagonal_mm: r.take_i32()?,
        },
        name: r.take_name()?,
    })
}

fn decode_rect(r: &mut RecordReader<'_>) -> Result<VirtRect, WireError> {
    Ok(VirtRect {
        left: r.take_i32()?,
        top: r.take_i32()?,
        right: r.take_i32()?,
        bottom: r.take_i32()?,
    })
}

struct RecordReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if self.pos + n > self.buf.len() {
            // The header-level size check catches short buffers before any
            // record read; this only fires for buffers shorter than a header.
            return Err(WireError::Truncated {
                expected: self.pos + n,
                actual: self.buf.len(),
                max_count: 0,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn take_i32(&mut self) -> Result<i32, WireError> {
        Ok(i32::from_ne_bytes(self.take(4)?.try_into().unwrap()))
    }

    fn take_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    fn take_bool(&mut self) -> Result<bool, WireError> {
        Ok(self.take_u8()? != 0)
    }

    fn take_name(&mut self) -> Result<String, WireError> {
        let field = self.take(NAME_BYTES)?;
        let len = field.iter().position(|&b| b == 0).unwrap_or(NAME_BYTES);
        Ok(String::from_utf8_lossy(&field[..len]).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::types::ScreenSet;
    use crate::wire::encode::encode;

    #[test]
    fn test_rejects_missing_tag() {
        let set = ScreenSet::default();
        let mut buf = vec![0u8; size_for(1)];
        encode(&mut buf, &set, 1).unwrap();

        let last = buf.len() - 1;
        buf[last] ^= 0xFF;
        assert!(matches!(decode(&buf), Err(WireError::BadTag { .. })));
    }

    #[test]
    fn test_rejects_truncated_buffer() {
        let set = ScreenSet::default();
        let mut buf = vec![0u8; size_for(2)];
        encode(&mut buf, &set, 2).unwrap();

        let err = decode(&buf[..buf.len() - 10]).unwrap_err();
        assert!(matches!(err, WireError::Truncated { .. }));
    }

    #[test]
    fn test_rejects_count_above_max() {
        let set = ScreenSet::default();
        let mut buf = vec![0u8; size_for(1)];
        encode(&mut buf, &set, 1).unwrap();

        // Corrupt count to 5 with max_count 1.
        buf[..4].copy_from_slice(&5i32.to_ne_bytes());
        assert!(matches!(
            decode(&buf),
            Err(WireError::CountOutOfRange {
                count: 5,
                max_count: 1
            })
        ));
    }

    #[test]
    fn test_padding_decodes_to_default_records() {
        let set = ScreenSet {
            records: vec![ScreenRecord {
                refresh_rate: 60,
                ..Default::default()
            }],
            more: false,
            taskbar_auto_hide: false,
        };
        let mut buf = vec![0xEEu8; size_for(3)];
        encode(&mut buf, &set, 3).unwrap();

        let snap = decode(&buf).unwrap();
        assert_eq!(snap.records.len(), 3);
        assert_eq!(snap.filled().len(), 1);
        assert_eq!(snap.records[1], ScreenRecord::default());
        assert_eq!(snap.records[2], ScreenRecord::default());
    }
}
