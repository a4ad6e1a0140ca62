//! Password generation and strength rating.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::GenerationOptions;
pub use generate::generate;

use thiserror::Error;

/// No character category is enabled, so there is nothing to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("select at least one character category")]
pub struct InvalidOptions;
