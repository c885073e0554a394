// Fixed-layout wire format: [header][record * max_count][trailer tag]
//
// This is the contract with the host reader and must stay byte-for-byte
// stable within a format version. Integers are 4-byte native-endian (host
// and extension always share a process), booleans are exactly one byte.
// Every put is bounds-checked; running past the caller's capacity is a
// first-class error, never undefined behavior. The trailer tag is written
// last so a reader can treat its presence as proof of a complete write.

pub mod decode;
pub mod encode;
pub mod layout;
pub mod writer;

use thiserror::Error;

/// Failure modes of the wire layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// A write would run past the caller-supplied capacity. Bytes already
    /// written stay in place; the caller must treat the buffer as invalid.
    #[error("write of {needed} bytes at offset {at} exceeds buffer capacity {capacity}")]
    Overflow {
        at: usize,
        needed: usize,
        capacity: usize,
    },

    /// The buffer is too short to hold what its own header claims.
    #[error("buffer holds {actual} bytes, need {expected} for {max_count} record slots")]
    Truncated {
        expected: usize,
        actual: usize,
        max_count: usize,
    },

    /// The trailer tag is missing or wrong: the buffer was not produced by
    /// a compatible writer, or the write never completed.
    #[error("format tag mismatch: expected {expected:#010x}, found {found:#010x}")]
    BadTag { expected: u32, found: u32 },

    /// Header `count`/`max_count` violate `0 <= count <= max_count`.
    #[error("header count {count} outside 0..={max_count}")]
    CountOutOfRange { count: i32, max_count: i32 },
}
