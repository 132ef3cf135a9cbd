//! Result file reader
//!
//! Reads the 8-byte header and then iterates over the records that follow.
//! Short reads at the end of the stream are not errors: a missing header means
//! there is nothing to decode, and a partial trailing record is discarded.

use super::{Record, HEADER_FIELD_SIZE, MAGIC, RECORD_SIZE};
use crate::types::{DecoderError, Result};
use byteorder::{ByteOrder, LittleEndian};
use std::io::{ErrorKind, Read};

/// Outcome of reading the file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// Fewer than 4 bytes were available
    Missing,
    /// The magic matched. `start_marker` is `None` when the stream ended before it.
    Present { start_marker: Option<u32> },
}

/// Read and validate the magic, then read the start marker
///
/// The start marker value is returned as-is; checking it is up to the caller.
pub fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    let mut buf = [0u8; HEADER_FIELD_SIZE];

    let filled = fill(reader, &mut buf)?;
    if filled < HEADER_FIELD_SIZE {
        log::debug!("No header available ({} bytes), nothing to decode", filled);
        return Ok(Header::Missing);
    }

    let magic = LittleEndian::read_u32(&buf);
    if magic != MAGIC {
        return Err(DecoderError::MalformedHeader { found: magic });
    }
    log::debug!("Magic 0x{:08X} accepted", magic);

    let filled = fill(reader, &mut buf)?;
    let start_marker = if filled == HEADER_FIELD_SIZE {
        let marker = LittleEndian::read_u32(&buf);
        log::debug!("Start marker: 0x{:08X}", marker);
        Some(marker)
    } else {
        log::debug!("Stream ends inside the start marker ({} bytes)", filled);
        None
    };

    Ok(Header::Present { start_marker })
}

/// Iterator over the records following the header
pub struct RecordReader<R> {
    reader: R,
    records_read: usize,
    trailing_bytes: usize,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    /// Wrap a reader positioned at the first record
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            records_read: 0,
            trailing_bytes: 0,
            done: false,
        }
    }

    /// Number of complete records read so far
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Bytes of an incomplete final record that were discarded
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; RECORD_SIZE];
        match fill(&mut self.reader, &mut buf) {
            Ok(RECORD_SIZE) => {
                self.records_read += 1;
                let raw = LittleEndian::read_u64(&buf);
                let record = Record::from_raw(raw);
                log::trace!("Record {}: 0x{:016X} -> {:?}", self.records_read, raw, record);
                Some(Ok(record))
            }
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(partial) => {
                self.done = true;
                self.trailing_bytes = partial;
                log::warn!(
                    "Discarding {} trailing bytes after record {} (incomplete record)",
                    partial,
                    self.records_read
                );
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Read until `buf` is full or the stream ends, returning the number of bytes read
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that hands out at most `chunk` bytes per call
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_header_missing_on_short_input() {
        assert_eq!(read_header(&mut &b""[..]).unwrap(), Header::Missing);
        assert_eq!(read_header(&mut &b"\x4F\x5A\x5A"[..]).unwrap(), Header::Missing);
    }

    #[test]
    fn test_header_rejects_bad_magic() {
        let err = read_header(&mut &b"\x00\x00\x00\x00\xEF\xBE\xAD\xDE"[..]).unwrap_err();
        assert!(matches!(err, DecoderError::MalformedHeader { found: 0 }));
    }

    #[test]
    fn test_header_start_marker() {
        let data = [0x4F, 0x5A, 0x5A, 0x59, 0xEF, 0xBE, 0xAD, 0xDE];
        assert_eq!(
            read_header(&mut &data[..]).unwrap(),
            Header::Present { start_marker: Some(0xDEAD_BEEF) }
        );
        assert_eq!(
            read_header(&mut &data[..6]).unwrap(),
            Header::Present { start_marker: None }
        );
    }

    #[test]
    fn test_records_survive_short_reads() {
        let mut data = Vec::new();
        data.extend_from_slice(&1.5f64.to_le_bytes());
        data.extend_from_slice(&0x00C0_FFEEu64.to_le_bytes());

        let reader = RecordReader::new(Trickle { data: &data, chunk: 3 });
        let records: Vec<Record> = reader.map(|r| r.unwrap()).collect();
        assert_eq!(records, vec![Record::Value(1.5), Record::Sentinel(0x00C0_FFEE)]);
    }

    #[test]
    fn test_partial_record_is_discarded() {
        let mut data = Vec::new();
        data.extend_from_slice(&4.0f64.to_le_bytes());
        data.extend_from_slice(&[0xEE, 0xFF, 0xC0, 0x00]);

        let mut reader = RecordReader::new(&data[..]);
        assert_eq!(reader.next().unwrap().unwrap(), Record::Value(4.0));
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
        assert_eq!(reader.records_read(), 1);
        assert_eq!(reader.trailing_bytes(), 4);
    }

    #[test]
    fn test_into_inner_returns_unread_input() {
        let mut data = Vec::new();
        data.extend_from_slice(&6.0f64.to_le_bytes());
        data.extend_from_slice(&7.0f64.to_le_bytes());

        let mut reader = RecordReader::new(&data[..]);
        assert_eq!(reader.next().unwrap().unwrap(), Record::Value(6.0));

        let rest = reader.into_inner();
        assert_eq!(rest, &7.0f64.to_le_bytes()[..]);
    }
}
