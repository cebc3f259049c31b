//! Per-line formatting: numbering, escaping, end marker, terminator.

use super::escape::escape_bytes;
use super::options::CatOptions;
use crate::stage::LineStage;

/// Running line number shared by every source in one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCounter {
    next: u64,
}

impl LineCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    #[cfg(test)]
    fn peek(&self) -> u64 {
        self.next
    }

    /// Consume a number slot.
    fn take(&mut self) -> u64 {
        let n = self.next;
        self.next += 1;
        n
    }
}

impl Default for LineCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Produce the exact bytes written for one line.
///
/// Stages run in a fixed order: numbering, escaping, end marker, newline.
/// Escaping is applied to the whole buffer, number prefix included.
/// `counter` advances only when the line actually receives a number.
pub fn format(
    line: &[u8],
    is_blank: bool,
    counter: &mut LineCounter,
    options: &CatOptions,
) -> Vec<u8> {
    let numbered = if options.number_non_blank_lines {
        !is_blank
    } else {
        options.number_all_lines
    };

    let mut output = Vec::with_capacity(line.len() + 12);
    if numbered {
        output.extend_from_slice(format!("    {} ", counter.take()).as_bytes());
    }
    output.extend_from_slice(line);

    if options.escapes() {
        output = escape_bytes(&output, options.show_tabs);
    }
    if options.show_end_marker {
        output.push(b'$');
    }
    output.push(b'\n');
    output
}

/// FORMAT - renders each surviving line with the invocation's options.
pub struct FormatStage {
    options: CatOptions,
    counter: LineCounter,
}

impl FormatStage {
    pub fn new(options: CatOptions) -> Self {
        Self {
            options,
            counter: LineCounter::new(),
        }
    }
}

impl LineStage for FormatStage {
    fn process(&mut self, line: Vec<u8>) -> Vec<Vec<u8>> {
        let is_blank = line.is_empty();
        vec![format(&line, is_blank, &mut self.counter, &self.options)]
    }

    fn name(&self) -> &str {
        "FORMAT"
    }
}
