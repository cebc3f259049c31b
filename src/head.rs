//! Display the first lines or bytes of each input.

use std::io::{BufRead, Read, Write};

use crate::error::{FilterError, Result};
use crate::executor::{execute_stream, finish};
use crate::input::{STDIN_NAME, resolve};
use crate::stage::{LineStage, TakeStage, TerminateStage};

/// Lines shown when no count is given.
pub const DEFAULT_LINES: usize = 10;

/// What to take from the front of each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadMode {
    Lines(usize),
    Bytes(usize),
}

impl Default for HeadMode {
    fn default() -> Self {
        HeadMode::Lines(DEFAULT_LINES)
    }
}

fn parse_count(kind: &'static str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FilterError::InvalidCount {
            kind,
            value: value.to_string(),
        }),
    }
}

/// Build the mode from raw `-n` / `-c` operands.
pub fn parse_mode(lines: Option<&str>, bytes: Option<&str>) -> Result<HeadMode> {
    match (lines, bytes) {
        (Some(_), Some(_)) => Err(FilterError::Usage(
            "can't combine line and byte counts".to_string(),
        )),
        (Some(n), None) => Ok(HeadMode::Lines(parse_count("line", n)?)),
        (None, Some(c)) => Ok(HeadMode::Bytes(parse_count("byte", c)?)),
        (None, None) => Ok(HeadMode::default()),
    }
}

fn head_source(reader: &mut dyn BufRead, writer: &mut dyn Write, mode: HeadMode) -> Result<()> {
    match mode {
        HeadMode::Lines(n) => {
            let mut stages: Vec<Box<dyn LineStage>> =
                vec![Box::new(TakeStage::new(n)), Box::new(TerminateStage)];
            execute_stream(reader, writer, &mut stages, false)?;
            finish(writer, &mut stages)?;
        }
        HeadMode::Bytes(n) => {
            let mut buf = Vec::with_capacity(n.min(64 * 1024));
            reader
                .take(n as u64)
                .read_to_end(&mut buf)
                .map_err(|source| FilterError::Read {
                    name: String::new(),
                    source,
                })?;
            writer.write_all(&buf).map_err(FilterError::Write)?;
            writer.flush().map_err(FilterError::Write)?;
        }
    }
    Ok(())
}

/// Write the head of each named input, or of stdin when `names` is empty.
///
/// Inputs that cannot be opened or read are passed to `report` and
/// skipped. Write failures abort. Returns the number of inputs that failed.
pub fn head(
    names: &[String],
    mode: HeadMode,
    writer: &mut dyn Write,
    mut report: impl FnMut(&FilterError),
) -> Result<usize> {
    let default = [STDIN_NAME.to_string()];
    let show_names = names.len() > 1;
    let names = if names.is_empty() { &default[..] } else { names };

    let mut failures = 0;
    for name in names {
        if show_names {
            writeln!(writer, "==> {name} <==").map_err(FilterError::Write)?;
        }
        let result = resolve(name)
            .and_then(|mut reader| head_source(reader.as_mut(), writer, mode))
            .map_err(|e| e.in_input(name));
        match result {
            Ok(()) => tracing::debug!(name = %name, ?mode, "head complete"),
            Err(e @ FilterError::Write(_)) => return Err(e),
            Err(e) => {
                failures += 1;
                report(&e);
            }
        }
    }
    Ok(failures)
}
