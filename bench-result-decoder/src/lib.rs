//! Bench Result Decoder Library
//!
//! A small, stateless library for decoding the binary result files written by the
//! benchmark server: a magic header, a start marker and a stream of 8-byte records
//! holding `f64` measurements, with sentinel records closing each cached entry.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Validates the header and iterates over records lazily
//! - Groups values into cached entries, one per benchmark client/thread
//! - Writes files in the same layout (used for fixtures and tooling)
//!
//! The library does NOT:
//! - Sort or aggregate measurements
//! - Format reports
//! - Install a logger (it only emits through the `log` facade)
//!
//! Report generation lives in the application layer (bench-result-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use bench_result_decoder::{Decoder, DecoderConfig, TrailingGroupPolicy};
//! use std::path::Path;
//!
//! let config = DecoderConfig::new().with_trailing_group(TrailingGroupPolicy::Reject);
//! let decoder = Decoder::with_config(config);
//!
//! let result = decoder.decode_file(Path::new("result.bin")).unwrap();
//! for (index, group) in result.iter().enumerate() {
//!     println!("entry {}: {} values", index, group.len());
//! }
//! ```

// Public modules
pub mod config;
pub mod decoder;
pub mod formats;
pub mod types;

// Re-export main types for convenience
pub use config::{DecoderConfig, TrailingGroupPolicy};
pub use decoder::{decode, DecodeStats, Decoder, GroupIterator};
pub use formats::{encode, Record, ResultFileWriter};
pub use types::{DecoderError, Group, Result, ResultSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
