// Glue between the Win32 source and the wire layer: enumerate, then encode
// into a caller buffer of exactly `wire::layout::size_for(max_count)` bytes.

use anyhow::Result;

use crate::screen::enumerate::enumerate;
use crate::screen::win32::{enable_dpi_awareness, Win32DisplaySource};
use crate::wire::{encode, layout};

/// Enumerate the attached displays and serialize them into `buf`.
///
/// `buf` must hold at least `layout::size_for(max_count)` bytes. Returns
/// the number of bytes written. Overflow means the caller sized the buffer
/// without asking `size_for` first; the buffer contents are then invalid
/// but no memory outside `buf` was touched.
pub fn write_snapshot(buf: &mut [u8], max_count: usize, page: usize) -> Result<usize> {
    enable_dpi_awareness();
    let set = enumerate(&Win32DisplaySource, max_count, page)?;
    let written = encode::encode(buf, &set, max_count)?;
    Ok(written)
}

/// Convenience wrapper allocating an exactly-sized buffer.
pub fn snapshot_bytes(max_count: usize, page: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; layout::size_for(max_count)];
    write_snapshot(&mut buf, max_count, page)?;
    Ok(buf)
}
