//! Plain-text report
//!
//! Each cached entry is printed as a banner, its values in tab-separated rows of
//! five, a separator and the element count.

use bench_result_decoder::{Group, ResultSet};
use std::io::{self, Write};

/// Values per output row
pub const ROW_WIDTH: usize = 5;

const ENTRY_BANNER: &str = "======== CACHED ENTRY ========";
const SEPARATOR: &str = "-----";

/// Blank lines printed before and after every entry
const ENTRY_PADDING: &str = "\n\n\n";

pub fn write_report<W: Write>(result_set: &ResultSet, sink: &mut W) -> io::Result<()> {
    for group in result_set {
        write_group(group, sink)?;
    }
    Ok(())
}

fn write_group<W: Write>(group: &Group, sink: &mut W) -> io::Result<()> {
    sink.write_all(ENTRY_PADDING.as_bytes())?;
    writeln!(sink, "{}", ENTRY_BANNER)?;

    let mut row: Vec<String> = Vec::with_capacity(ROW_WIDTH);
    for (index, &value) in group.iter().enumerate() {
        row.push(format_value(value));
        if (index + 1) % ROW_WIDTH == 0 {
            writeln!(sink, "{}", row.join("\t"))?;
            row.clear();
        }
    }
    // The remainder row is always printed, even when it is empty
    writeln!(sink, "{}", row.join("\t"))?;

    writeln!(sink, "{}", SEPARATOR)?;
    writeln!(sink, "Elements total: {}", group.len())?;
    sink.write_all(ENTRY_PADDING.as_bytes())
}

/// Shortest round-trip rendering of a value
///
/// Integral values keep a trailing `.0`; exponents carry a sign and at least two
/// digits (`1e+16`, `1.5e-05`); non-finite values print as `inf`, `-inf` and `nan`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
