//! Main decoder API
//!
//! This module provides the primary interface for the decoder library.
//! The Decoder struct validates the header and groups the records that follow
//! into cached entries.

use crate::config::{DecoderConfig, TrailingGroupPolicy};
use crate::formats::{read_header, Header, Record, RecordReader, START_MARKER};
use crate::types::{DecoderError, Group, Result, ResultSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::mem;
use std::path::Path;

/// The main decoder struct - entry point for all decoding operations
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the default (lenient) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with an explicit configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Read the header and return an iterator over the groups that follow
    ///
    /// A source shorter than the magic yields an empty iterator. A wrong magic
    /// fails before any group is produced.
    ///
    /// # Example
    /// ```
    /// use bench_result_decoder::Decoder;
    ///
    /// let decoder = Decoder::new();
    /// let mut groups = decoder.groups(&b""[..]).unwrap();
    /// assert!(groups.next().is_none());
    /// ```
    pub fn groups<R: Read>(&self, mut reader: R) -> Result<GroupIterator<R>> {
        let finished = match read_header(&mut reader)? {
            Header::Missing => true,
            Header::Present { start_marker } => {
                if self.config.validate_start_marker {
                    if let Some(found) = start_marker.filter(|&m| m != START_MARKER) {
                        return Err(DecoderError::UnexpectedStartMarker { found });
                    }
                }
                false
            }
        };

        Ok(GroupIterator {
            records: RecordReader::new(reader),
            current: Vec::new(),
            config: self.config.clone(),
            stats: DecodeStats::default(),
            finished,
        })
    }

    /// Decode a complete result set from a byte source
    ///
    /// # Example
    /// ```
    /// use bench_result_decoder::Decoder;
    ///
    /// let mut bytes = vec![0x4F, 0x5A, 0x5A, 0x59, 0x00, 0x00, 0x00, 0x00];
    /// bytes.extend_from_slice(&1.0f64.to_le_bytes());
    /// bytes.extend_from_slice(&2.0f64.to_le_bytes());
    /// bytes.extend_from_slice(&0xC0FFEEu64.to_le_bytes());
    ///
    /// let result = Decoder::new().decode(&bytes[..]).unwrap();
    /// assert_eq!(result.groups()[0].values(), &[1.0, 2.0]);
    /// ```
    pub fn decode<R: Read>(&self, reader: R) -> Result<ResultSet> {
        let mut groups = self.groups(reader)?;
        let mut result_set = ResultSet::new();

        for group in groups.by_ref() {
            result_set.push(group?);
        }

        let stats = groups.stats();
        log::info!(
            "Decoded {} groups ({} values, {} records)",
            stats.groups,
            stats.values,
            stats.records
        );
        Ok(result_set)
    }

    /// Decode a result file from disk
    pub fn decode_file(&self, path: &Path) -> Result<ResultSet> {
        log::info!("Parsing result file: {:?}", path);

        let file = File::open(path)?;
        self.decode(BufReader::new(file))
    }
}

/// Decode with the default configuration
pub fn decode<R: Read>(reader: R) -> Result<ResultSet> {
    Decoder::new().decode(reader)
}

/// Counters collected while decoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Complete records read after the header
    pub records: usize,
    /// Groups closed by a sentinel
    pub groups: usize,
    /// Values in closed groups
    pub values: usize,
    /// Values after the last sentinel that were not emitted
    pub dropped_values: usize,
    /// Bytes of an incomplete final record
    pub trailing_bytes: usize,
}

/// Iterator that groups records into cached entries
///
/// Each item is one group closed by a sentinel. The in-progress group lives here
/// and is handed out by value once its sentinel is read.
pub struct GroupIterator<R> {
    records: RecordReader<R>,
    current: Vec<f64>,
    config: DecoderConfig,
    stats: DecodeStats,
    finished: bool,
}

impl<R: Read> GroupIterator<R> {
    /// Counters so far; complete once the iterator has returned `None`
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Handle end of stream: drop or reject whatever is still open
    fn finish(&mut self) -> Option<Result<Group>> {
        self.finished = true;
        self.stats.records = self.records.records_read();
        self.stats.trailing_bytes = self.records.trailing_bytes();

        if self.current.is_empty() {
            return None;
        }

        let values = mem::take(&mut self.current).len();
        self.stats.dropped_values = values;

        match self.config.trailing_group {
            TrailingGroupPolicy::Drop => {
                log::warn!("Dropping {} values after the last end marker", values);
                None
            }
            TrailingGroupPolicy::Reject => Some(Err(DecoderError::UnterminatedGroup { values })),
        }
    }
}

impl<R: Read> Iterator for GroupIterator<R> {
    type Item = Result<Group>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.config.allows_group(self.stats.groups) {
            log::debug!("Group limit reached after {} groups", self.stats.groups);
            self.finished = true;
            self.stats.records = self.records.records_read();
            return None;
        }

        loop {
            match self.records.next() {
                Some(Ok(Record::Value(value))) => self.current.push(value),
                Some(Ok(Record::Sentinel(_))) => {
                    let group = Group::new(mem::take(&mut self.current));
                    self.stats.groups += 1;
                    self.stats.values += group.len();
                    self.stats.records = self.records.records_read();
                    log::debug!("Group {} closed with {} values", self.stats.groups, group.len());
                    return Some(Ok(group));
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => return self.finish(),
            }
        }
    }
}
