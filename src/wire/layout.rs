// Byte-level layout constants. Offsets within a record are defined by the
// write order in `encode`; the sizes here must match it exactly.

/// Record slot capacity used by the fixed-size extension entry points.
pub const MAX_SCREENS: usize = 8;

/// Width of the NUL-terminated name field inside each record.
pub const NAME_BYTES: usize = 64;

/// Header: count (4) + max_count (4) + taskbar_auto_hide (4)
/// + more (1) + version major/minor/build (3).
pub const HEADER_BYTES: usize = 16;

/// Record: info_bits (4) + refresh_rate (4) + is_primary (1)
/// + pixel size (8) + virtual rect (16) + working rect (16)
/// + physical size (12) + name (64).
pub const RECORD_BYTES: usize = 125;

/// Trailer: the format tag alone.
pub const TRAILER_BYTES: usize = 4;

/// Fourcc written after the last record slot. A reader finding anything
/// else must discard the buffer.
pub const FORMAT_TAG: u32 = u32::from_ne_bytes(*b"VSCR");

/// Format version triple written into the header, kept in sync with the
/// crate version. Bump on any layout change.
pub const FORMAT_VERSION: (u8, u8, u8) = (2, 1, 0);

/// Exact serialized size in bytes for `max_count` record slots.
///
/// Pure arithmetic: callable before any enumeration runs, and independent
/// of how many screens are actually attached. The writer never exceeds it.
pub const fn size_for(max_count: usize) -> usize {
    HEADER_BYTES + max_count * RECORD_BYTES + TRAILER_BYTES
}
