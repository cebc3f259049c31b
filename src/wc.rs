//! Line, word, byte and character counts.

use std::io::{Read, Write};

use crate::error::{FilterError, Result};
use crate::input::{STDIN_NAME, resolve};

/// Which counts to print. Order of output is always lines, words, bytes, chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WcSelection {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
    pub chars: bool,
}

impl WcSelection {
    /// Use the flags as given, falling back to lines, words and bytes
    /// when none is set.
    pub fn from_flags(lines: bool, words: bool, bytes: bool, chars: bool) -> Self {
        if !(lines || words || bytes || chars) {
            return Self {
                lines: true,
                words: true,
                bytes: true,
                chars: false,
            };
        }
        Self {
            lines,
            words,
            bytes,
            chars,
        }
    }
}

/// Totals for one input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub lines: u64,
    pub words: u64,
    pub bytes: u64,
    pub chars: u64,
}

impl std::ops::AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.words += rhs.words;
        self.bytes += rhs.bytes;
        self.chars += rhs.chars;
    }
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Incremental counter; words may span chunk boundaries.
#[derive(Debug, Default)]
pub struct Counter {
    counts: Counts,
    in_word: bool,
}

impl Counter {
    pub fn feed(&mut self, chunk: &[u8]) {
        self.counts.bytes += chunk.len() as u64;
        for &b in chunk {
            if b == b'\n' {
                self.counts.lines += 1;
            }
            // UTF-8 continuation bytes do not start a character
            if b & 0xC0 != 0x80 {
                self.counts.chars += 1;
            }
            if is_space(b) {
                self.in_word = false;
            } else if !self.in_word {
                self.in_word = true;
                self.counts.words += 1;
            }
        }
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }
}

/// Count everything readable from `reader`.
pub fn count_reader(reader: &mut dyn Read) -> Result<Counts> {
    let mut counter = Counter::default();
    let mut buf = [0u8; 8 * 1024];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(FilterError::Read {
                    name: String::new(),
                    source,
                });
            }
        };
        counter.feed(&buf[..n]);
    }
    Ok(counter.counts())
}

/// Render one output row.
pub fn format_row(counts: &Counts, selection: &WcSelection, name: Option<&str>) -> String {
    let mut row = String::new();
    let columns = [
        (selection.lines, counts.lines),
        (selection.words, counts.words),
        (selection.bytes, counts.bytes),
        (selection.chars, counts.chars),
    ];
    for (shown, value) in columns {
        if shown {
            row.push_str(&format!("{value:>8}"));
        }
    }
    if let Some(name) = name {
        row.push(' ');
        row.push_str(name);
    }
    row.push('\n');
    row
}

/// Count each named input (stdin when `names` is empty) and write a row
/// per input, plus a `total` row when more than one name was given.
///
/// Unreadable inputs are passed to `report` and skipped. Returns the
/// number of inputs that failed.
pub fn wc(
    names: &[String],
    selection: WcSelection,
    writer: &mut dyn Write,
    mut report: impl FnMut(&FilterError),
) -> Result<usize> {
    if names.is_empty() {
        let mut reader = resolve(STDIN_NAME)?;
        let counts = count_reader(&mut reader).map_err(|e| e.in_input(STDIN_NAME))?;
        writer
            .write_all(format_row(&counts, &selection, None).as_bytes())
            .map_err(FilterError::Write)?;
        return Ok(0);
    }

    let mut total = Counts::default();
    let mut failures = 0;
    for name in names {
        let result = resolve(name)
            .and_then(|mut reader| count_reader(&mut reader))
            .map_err(|e| e.in_input(name));
        match result {
            Ok(counts) => {
                tracing::debug!(name = %name, ?counts, "counted");
                total += counts;
                writer
                    .write_all(format_row(&counts, &selection, Some(name)).as_bytes())
                    .map_err(FilterError::Write)?;
            }
            Err(e) => {
                failures += 1;
                report(&e);
            }
        }
    }
    if names.len() > 1 {
        writer
            .write_all(format_row(&total, &selection, Some("total")).as_bytes())
            .map_err(FilterError::Write)?;
    }
    Ok(failures)
}
