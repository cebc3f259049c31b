//! Display the first lines of files.
//!
//! Usage:
//!   head [-n count | -c bytes] [file ...]

use clap::Parser;
use filters_rs::head::{head, parse_mode};
use filters_rs::logging;
use std::io;
use std::process;

/// Display the first lines (default 10) or bytes of each file.
#[derive(Parser)]
#[command(name = "head")]
struct Cli {
    /// Number of lines to display
    #[arg(short = 'n', value_name = "COUNT")]
    lines: Option<String>,

    /// Number of bytes to display
    #[arg(short = 'c', value_name = "BYTES")]
    bytes: Option<String>,

    /// Files to read (`-` for standard input)
    files: Vec<String>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let mode = match parse_mode(cli.lines.as_deref(), cli.bytes.as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("head: {e}");
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match head(&cli.files, mode, &mut out, |e| eprintln!("head: {e}")) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("head: {e}");
            process::exit(1);
        }
    }
}
