//! Shared terminal utilities.
//!
//! Box drawing, ANSI helpers, and raw mode management.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
