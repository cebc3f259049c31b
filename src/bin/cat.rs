//! Concatenate files to standard output.
//!
//! Usage:
//!   cat [-benstuv] [file ...]
//!
//! With no files, or when a file is `-`, reads standard input.

use clap::Parser;
use filters_rs::cat::{CatOptions, cat};
use filters_rs::logging;
use std::io;
use std::process;

/// Concatenate and display files.
#[derive(Parser)]
#[command(name = "cat")]
struct Cli {
    /// Number the non-blank output lines, starting at 1
    #[arg(short = 'b')]
    number_non_blank: bool,

    /// Display non-printing characters (see -v) and a `$` at the end of each line
    #[arg(short = 'e')]
    show_ends: bool,

    /// Number the output lines, starting at 1
    #[arg(short = 'n')]
    number: bool,

    /// Squeeze multiple adjacent empty lines, causing single spaced output
    #[arg(short = 's')]
    squeeze_blank: bool,

    /// Display non-printing characters (see -v) and tab characters as `^I`
    #[arg(short = 't')]
    show_tabs: bool,

    /// Disable output buffering
    #[arg(short = 'u')]
    unbuffered: bool,

    /// Display non-printing characters so they are visible
    #[arg(short = 'v')]
    show_nonprinting: bool,

    /// Files to concatenate (`-` for standard input)
    files: Vec<String>,
}

impl From<&Cli> for CatOptions {
    fn from(cli: &Cli) -> Self {
        CatOptions {
            number_all_lines: cli.number,
            number_non_blank_lines: cli.number_non_blank,
            show_end_marker: cli.show_ends,
            show_non_printing: cli.show_nonprinting,
            squeeze_blank: cli.squeeze_blank,
            show_tabs: cli.show_tabs,
            unbuffered: cli.unbuffered,
        }
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let options = CatOptions::from(&cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cat(&cli.files, options, &mut out) {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("cat: {e}");
        process::exit(1);
    }
}
