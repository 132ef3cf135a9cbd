//! Result file format: constants, record classification, reader and writer
//!
//! Layout (little-endian throughout):
//!
//! | Offset | Size | Meaning                                              |
//! |--------|------|------------------------------------------------------|
//! | 0      | 4    | Magic `0x595A5A4F`                                   |
//! | 4      | 4    | Start marker (`0xDEADBEEF` as written by producers)  |
//! | 8+     | 8    | Sentinel (low 24 bits `0xC0FFEE`) or an `f64` value  |

pub mod reader;
pub mod writer;

// Re-export reader/writer types
pub use reader::{read_header, Header, RecordReader};
pub use writer::{encode, ResultFileWriter};

/// File magic, first 4 bytes of every result file
pub const MAGIC: u32 = 0x595A_5A4F;

/// Start marker written after the magic
pub const START_MARKER: u32 = 0xDEAD_BEEF;

/// End-of-group marker, matched against the low 24 bits of a record
pub const END_MARKER: u64 = 0x00C0_FFEE;

/// Mask selecting the bits compared against [`END_MARKER`]
pub const END_MARKER_MASK: u64 = 0x00FF_FFFF;

/// Size of the magic and of the start marker
pub const HEADER_FIELD_SIZE: usize = 4;

/// Size of one record after the header
pub const RECORD_SIZE: usize = 8;

/// A single 8-byte record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    /// A measurement
    Value(f64),
    /// End of the current group; carries the raw record bits
    Sentinel(u64),
}

impl Record {
    /// Classify a record from its little-endian `u64` interpretation
    ///
    /// Only the low 24 bits decide: a record that would also be a valid double
    /// is still a sentinel when those bits match.
    pub fn from_raw(raw: u64) -> Self {
        if is_sentinel(raw) {
            Record::Sentinel(raw)
        } else {
            Record::Value(f64::from_bits(raw))
        }
    }
}

/// True if the raw record closes a group
pub fn is_sentinel(raw: u64) -> bool {
    raw & END_MARKER_MASK == END_MARKER
}
