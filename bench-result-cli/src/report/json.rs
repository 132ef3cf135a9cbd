//! JSON report
//!
//! Non-finite values are written as the strings the text report uses
//! (`"nan"`, `"inf"`, `"-inf"`) so they stay distinguishable from `null`.

use super::txt::format_value;
use bench_result_decoder::{Group, ResultSet};
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonReport<'a> {
    groups: Vec<JsonGroup<'a>>,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    #[serde(serialize_with = "serialize_values")]
    values: &'a [f64],
}

impl<'a> From<&'a Group> for JsonGroup<'a> {
    fn from(group: &'a Group) -> Self {
        Self {
            values: group.values(),
        }
    }
}

fn serialize_values<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for &value in values {
        if value.is_finite() {
            seq.serialize_element(&value)?;
        } else {
            seq.serialize_element(&format_value(value))?;
        }
    }
    seq.end()
}

pub fn write_report<W: Write>(result_set: &ResultSet, sink: &mut W) -> io::Result<()> {
    let report = JsonReport {
        groups: result_set.iter().map(JsonGroup::from).collect(),
    };

    serde_json::to_writer_pretty(&mut *sink, &report)?;
    writeln!(sink)
}
