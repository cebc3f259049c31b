//! Word, line, character and byte count.
//!
//! Usage:
//!   wc [-lw] [-c | -m] [file ...]

use clap::Parser;
use filters_rs::logging;
use filters_rs::wc::{WcSelection, wc};
use std::io;
use std::process;

/// Count lines, words and bytes (or characters) in each file.
#[derive(Parser)]
#[command(name = "wc")]
struct Cli {
    /// Count lines
    #[arg(short = 'l')]
    lines: bool,

    /// Count words
    #[arg(short = 'w')]
    words: bool,

    /// Count bytes; cancels any earlier -m
    #[arg(short = 'c', overrides_with = "chars")]
    bytes: bool,

    /// Count characters; cancels any earlier -c
    #[arg(short = 'm', overrides_with = "bytes")]
    chars: bool,

    /// Files to count (`-` for standard input)
    files: Vec<String>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let selection = WcSelection::from_flags(cli.lines, cli.words, cli.bytes, cli.chars);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match wc(&cli.files, selection, &mut out, |e| eprintln!("wc: {e}")) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("wc: {e}");
            process::exit(1);
        }
    }
}
