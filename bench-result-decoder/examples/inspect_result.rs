//! Inspect a raw result file record by record
//!
//! Usage: cargo run --example inspect_result -- [FILE]   (default: result.bin)

use bench_result_decoder::formats::{read_header, Header, Record, RecordReader};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("result.bin"));

    println!("\n═══════════════════════════════════════");
    println!("Inspecting: {:?}", path);
    println!("═══════════════════════════════════════");

    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    let mut reader = BufReader::new(file);

    match read_header(&mut reader) {
        Ok(Header::Missing) => {
            println!("⚠ No header (file shorter than 4 bytes)");
            return;
        }
        Ok(Header::Present { start_marker }) => {
            println!("✓ Magic OK, start marker: {:08X?}\n", start_marker);
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    let mut records = RecordReader::new(reader);
    let mut open_values = 0;
    let mut groups = 0;

    for record in records.by_ref() {
        match record {
            Ok(Record::Value(_)) => open_values += 1,
            Ok(Record::Sentinel(raw)) => {
                println!(
                    "  Group {:3}: {:6} values  (sentinel 0x{:016X})",
                    groups, open_values, raw
                );
                groups += 1;
                open_values = 0;
            }
            Err(e) => {
                println!("✗ Read error: {}", e);
                break;
            }
        }
    }

    println!("\nRecords:        {}", records.records_read());
    println!("Groups:         {}", groups);
    println!("Unterminated:   {} values", open_values);
    println!("Trailing bytes: {}", records.trailing_bytes());
}
