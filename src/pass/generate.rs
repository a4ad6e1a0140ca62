//! Password generation.

use rand::Rng;

use super::InvalidOptions;
use super::charset::{self, GenerationOptions};

/// Generate a password: `options.length` characters, each drawn
/// independently and uniformly from the enabled-category pool.
///
/// Callers pass `OsRng` in production; tests pass a seeded `StdRng`.
pub fn generate<R: Rng>(options: &GenerationOptions, rng: &mut R) -> Result<String, InvalidOptions> {
    let pool = charset::build(options)?;
    // The pool is ASCII only, so bytes and chars coincide.
    let bytes = pool.as_bytes();

    let mut password = String::with_capacity(options.length);
    for _ in 0..options.length {
        let idx = rng.gen_range(0..bytes.len());
        password.push(bytes[idx] as char);
    }

    Ok(password)
}
