//! Concatenate and display, with optional line numbering, visible
//! non-printing characters, end-of-line markers and blank squeezing.
//!
//! Each line flows through a two-stage chain:
//!
//! ```text
//! read line -> SQUEEZE (drop repeated blanks) -> FORMAT (number, escape, $, \n) -> write
//! ```

pub mod driver;
pub mod escape;
pub mod format;
pub mod options;
pub mod squeeze;

pub use driver::{CatDriver, cat, cat_stages};
pub use escape::{escape, escape_bytes};
pub use format::{FormatStage, LineCounter, format};
pub use options::CatOptions;
pub use squeeze::{SqueezeStage, SqueezeState};
