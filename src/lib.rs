//! # filters-rs
//!
//! Classic Unix text filters built on a line-at-a-time stage pipeline.
//!
//! Every filter reads its input one line at a time and pushes each line
//! through a chain of [`LineStage`]s before the next line is read, so
//! output keeps pace with input arriving through a pipe.
//!
//! ## Filters
//!
//! - [`cat`] - concatenate, with numbering, visible control characters,
//!   end-of-line markers and blank-line squeezing
//! - [`head`] - first lines or bytes of each input
//! - [`wc`] - line, word, byte and character counts
//! - [`tr`] - translate, delete or squeeze bytes
//!
//! ## Example
//!
//! ```
//! use filters_rs::cat::{CatDriver, CatOptions};
//! use std::io::Cursor;
//!
//! let options = CatOptions {
//!     number_non_blank_lines: true,
//!     show_end_marker: true,
//!     ..Default::default()
//! };
//! let mut out = Vec::new();
//! CatDriver::new(options)
//!     .run_source(&mut Cursor::new(b"a\n\nb\n".to_vec()), &mut out)
//!     .unwrap();
//!
//! assert_eq!(out, b"    1 a$\n$\n    2 b$\n");
//! ```

pub mod cat;
pub mod error;
pub mod executor;
pub mod head;
pub mod input;
pub mod logging;
pub mod stage;
pub mod tr;
pub mod wc;

pub use error::{FilterError, Result};
pub use executor::{StreamStats, execute_stream, finish, push_through_stages};
pub use input::{STDIN_NAME, resolve};
pub use stage::{LineStage, TakeStage, TerminateStage};
