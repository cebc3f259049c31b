//! Input resolution: maps command-line operands to readable byte streams.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::error::{FilterError, Result};

/// Operand that selects standard input.
pub const STDIN_NAME: &str = "-";

/// Open `name` for line-oriented reading.
///
/// `-` resolves to standard input; anything else is opened as a path.
/// The returned reader owns its file handle, so the file is closed when
/// the reader is dropped.
pub fn resolve(name: &str) -> Result<Box<dyn BufRead>> {
    if name == STDIN_NAME {
        tracing::debug!("reading standard input");
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(name).map_err(|source| FilterError::Open {
        name: name.to_string(),
        source,
    })?;
    tracing::debug!(name, "opened input");
    Ok(Box::new(BufReader::new(file)))
}

/// Read one line into `buf`, stripping the trailing newline.
///
/// Returns `false` at end of input. A final line without a newline is
/// still returned as a line.
pub fn read_line(reader: &mut dyn BufRead, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    // the caller names the input with `FilterError::in_input`
    let n = reader
        .read_until(b'\n', buf)
        .map_err(|source| FilterError::Read {
            name: String::new(),
            source,
        })?;
    if n == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(true)
}
