//! The display switches for one cat invocation.

/// Independent display switches, fixed for the lifetime of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatOptions {
    /// `-n`: number every output line.
    pub number_all_lines: bool,
    /// `-b`: number non-blank output lines; wins over `number_all_lines`.
    pub number_non_blank_lines: bool,
    /// `-e`: escape non-printing bytes and mark line ends with `$`.
    pub show_end_marker: bool,
    /// `-v`: escape non-printing bytes.
    pub show_non_printing: bool,
    /// `-s`: squeeze runs of blank lines down to one.
    pub squeeze_blank: bool,
    /// `-t`: escape non-printing bytes and render tab as `^I`.
    pub show_tabs: bool,
    /// `-u`: flush after every line.
    pub unbuffered: bool,
}

impl CatOptions {
    /// True when any switch turns on byte escaping.
    pub fn escapes(&self) -> bool {
        self.show_end_marker || self.show_non_printing || self.show_tabs
    }

    /// True when any numbering switch is set.
    pub fn numbers(&self) -> bool {
        self.number_all_lines || self.number_non_blank_lines
    }
}
