// Serialization of a ScreenSet into the caller's buffer.
//
// Field order here *is* the wire format — any change requires a
// FORMAT_VERSION bump. All max_count slots are written (zeroes for slots
// past count) so the reader can assume a fixed total size, and the trailer
// tag goes in last.

use super::layout::{FORMAT_TAG, FORMAT_VERSION, RECORD_BYTES};
use super::writer::RecordWriter;
use super::WireError;
use crate::screen::types::{ScreenRecord, ScreenSet, VirtRect};

/// Serialize `set` into `buf` with exactly `max_count` record slots.
///
/// `buf` must hold at least `layout::size_for(max_count)` bytes; anything
/// shorter fails with `WireError::Overflow` at the first put that would
/// run past the end. Returns the number of bytes written.
pub fn encode(buf: &mut [u8], set: &ScreenSet, max_count: usize) -> Result<usize, WireError> {
    debug_assert!(
        set.records.len() <= max_count,
        "enumerator produced more records than slots"
    );

    let mut w = RecordWriter::new(buf);

    // Header
    w.put_i32(set.records.len() as i32)?;
    w.put_i32(max_count as i32)?;
    w.put_i32(i32::from(set.taskbar_auto_hide))?;
    w.put_bool(set.more)?;
    w.put_u8(FORMAT_VERSION.0)?;
    w.put_u8(FORMAT_VERSION.1)?;
    w.put_u8(FORMAT_VERSION.2)?;

    // Record slots: real data first, then explicit zero padding.
    for record in &set.records {
        encode_record(&mut w, record)?;
    }
    for _ in set.records.len()..max_count {
        w.put_zeros(RECORD_BYTES)?;
    }

    // Tag last: its presence tells the reader the write ran to completion.
    w.put_u32(FORMAT_TAG)?;

    Ok(w.position())
}

fn encode_record(w: &mut RecordWriter<'_>, record: &ScreenRecord) -> Result<(), WireError> {
    w.put_i32(record.info_bits)?;
    w.put_i32(record.refresh_rate)?;
    w.put_bool(record.is_primary)?;
    w.put_i32(record.pixel.width)?;
    w.put_i32(record.pixel.height)?;
    encode_rect(w, &record.virt)?;
    encode_rect(w, &record.work)?;
    w.put_i32(record.physical.width_mm)?;
    w.put_i32(record.physical.height_mm)?;
    w.put_i32(record.physical.diagonal_mm)?;
    w.put_name(&record.name)?;
    Ok(())
}

fn encode_rect(w: &mut RecordWriter<'_>, rect: &VirtRect) -> Result<(), WireError> {
    w.put_i32(rect.left)?;
    w.put_i32(rect.top)?;
    w.put_i32(rect.right)?;
    w.put_i32(rect.bottom)?;
    Ok(())
}
