use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use common::EntityKind;
use serde_json::Value;
use shapes::normalize_value;

/// Read the whole input from `path`, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Normalize newline-delimited JSON. Blank lines are skipped; errors carry
/// the 1-based line number.
pub fn normalize_lines(kind: EntityKind, text: &str) -> anyhow::Result<Vec<Value>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let line_no = i + 1;
            let value: Value = serde_json::from_str(line)
                .with_context(|| format!("Line {line_no}: invalid JSON"))?;
            normalize_value(kind, value).with_context(|| format!("Line {line_no}"))
        })
        .collect()
}

pub fn write_json<W: Write>(out: &mut W, value: &Value, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
