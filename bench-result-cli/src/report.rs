//! Report generation
//!
//! Renders a decoded result set as a plain-text table or as JSON.

pub mod json;
pub mod txt;

use crate::config::OutputFormat;
use bench_result_decoder::ResultSet;
use std::io::{self, Write};

/// Write the report for `result_set` in the requested format
pub fn write_report<W: Write>(
    result_set: &ResultSet,
    format: OutputFormat,
    sink: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Txt => txt::write_report(result_set, sink),
        OutputFormat::Json => json::write_report(result_set, sink),
    }
}
