use std::io::Write;

pub mod cursor;
pub mod predicate;
pub mod value;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;

pub use cursor::{FilterCursor, FilterCursorExt, TryFilterCursor};
pub use predicate::Predicate;
pub use value::Value;

/// The mixed sequence filtered when no values are given on the command line.
pub fn demo_sequence() -> Vec<Value> {
    vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(3),
        Value::Int(4),
        Value::Int(6),
        Value::Int(0),
        Value::None,
        Value::Int(33),
        Value::Text("fkj".into()),
    ]
}

/// Writes every element of `values` accepted by `predicate` to `out`, one per
/// line, and returns how many were written.
pub fn run<W: Write>(values: &[Value], predicate: Predicate, out: &mut W) -> Result<usize> {
    debug!(
        "filtering [{}] with predicate {}",
        values.iter().join(", "),
        predicate
    );

    let mut cursor = values.try_filter_cursor(|value| predicate.test(value));
    let mut written = 0;
    while let Some(value) = cursor.next() {
        let value = value.with_context(|| {
            format!("could not filter element {} of the sequence", cursor.index() - 1)
        })?;
        writeln!(out, "{}", value).with_context(|| "could not write output")?;
        written += 1;
    }

    debug!("wrote {} of {} elements", written, values.len());
    Ok(written)
}
