//! Result file writer
//!
//! Produces files in the layout the decoder reads: magic, start marker, then the
//! values of each group followed by one 8-byte sentinel record.

use super::{is_sentinel, END_MARKER, MAGIC, START_MARKER};
use crate::types::{DecoderError, Result, ResultSet};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Writer for result files
pub struct ResultFileWriter<W: Write> {
    writer: W,
    /// Values written since the last sentinel
    open_values: usize,
    groups_written: usize,
}

impl<W: Write> ResultFileWriter<W> {
    /// Write the file header and return a writer positioned at the first record
    pub fn new(mut writer: W) -> Result<Self> {
        writer.write_u32::<LittleEndian>(MAGIC)?;
        writer.write_u32::<LittleEndian>(START_MARKER)?;

        Ok(Self {
            writer,
            open_values: 0,
            groups_written: 0,
        })
    }

    /// Append one value to the current group
    ///
    /// Values whose bit pattern would be read back as a sentinel are refused.
    pub fn write_value(&mut self, value: f64) -> Result<()> {
        if is_sentinel(value.to_bits()) {
            return Err(DecoderError::InvalidData(format!(
                "value {:e} (bits 0x{:016X}) collides with the end marker",
                value,
                value.to_bits()
            )));
        }

        self.writer.write_f64::<LittleEndian>(value)?;
        self.open_values += 1;
        Ok(())
    }

    /// Close the current group with a sentinel record
    pub fn end_group(&mut self) -> Result<()> {
        self.writer.write_u64::<LittleEndian>(END_MARKER)?;
        log::trace!(
            "Closed group {} with {} values",
            self.groups_written,
            self.open_values
        );
        self.groups_written += 1;
        self.open_values = 0;
        Ok(())
    }

    /// Write all values of a group and close it
    pub fn write_group(&mut self, values: &[f64]) -> Result<()> {
        for &value in values {
            self.write_value(value)?;
        }
        self.end_group()
    }

    /// Write every group of a result set
    pub fn write_result_set(&mut self, result_set: &ResultSet) -> Result<()> {
        for group in result_set {
            self.write_group(group.values())?;
        }
        Ok(())
    }

    /// Number of sentinels written so far
    pub fn groups_written(&self) -> usize {
        self.groups_written
    }

    /// Flush and return the underlying writer
    ///
    /// Values written after the last [`end_group`](Self::end_group) stay unterminated.
    pub fn finish(mut self) -> Result<W> {
        if self.open_values > 0 {
            log::debug!("Finishing with {} unterminated values", self.open_values);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Encode a result set into an in-memory result file
pub fn encode(result_set: &ResultSet) -> Result<Vec<u8>> {
    let mut writer = ResultFileWriter::new(Vec::new())?;
    writer.write_result_set(result_set)?;
    writer.finish()
}
