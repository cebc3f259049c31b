//! Translate characters from standard input to standard output.
//!
//! Usage:
//!   tr string1 string2
//!   tr -d string1
//!   tr -s string1 [string2]
//!   tr -d -s string1 string2

use clap::Parser;
use filters_rs::logging;
use filters_rs::tr::{TrPlan, tr};
use std::io;
use std::process;

/// Translate, delete or squeeze characters.
#[derive(Parser)]
#[command(name = "tr")]
struct Cli {
    /// Delete characters in string1 from the input
    #[arg(short = 'd')]
    delete: bool,

    /// Squeeze repeated characters listed in the last operand into one
    #[arg(short = 's')]
    squeeze: bool,

    /// Guarantee that output is unbuffered
    #[arg(short = 'u')]
    unbuffered: bool,

    /// string1 and optionally string2
    #[arg(value_name = "STRING")]
    operands: Vec<String>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let plan = match TrPlan::new(cli.delete, cli.squeeze, &cli.operands) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    tracing::debug!(?plan, "tr plan");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = tr(&plan, &mut input, &mut out, cli.unbuffered) {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("tr: {e}");
        process::exit(1);
    }
}
