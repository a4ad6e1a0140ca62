//! Character pool assembly from category flags.

use super::InvalidOptions;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;

/// Which character categories feed the sampling pool, and how many
/// characters to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            upper: true,
            lower: true,
            digits: true,
            symbols: true,
        }
    }
}

impl GenerationOptions {
    /// True if any category is enabled (the pool would be non-empty).
    pub fn any_category(&self) -> bool {
        self.upper || self.lower || self.digits || self.symbols
    }

    /// Clamp `length` into [MIN_LENGTH, MAX_LENGTH]. UI boundaries call this;
    /// the generator itself honors whatever length it is given.
    pub fn clamp_length(&mut self) {
        self.length = self.length.clamp(MIN_LENGTH, MAX_LENGTH);
    }
}

/// Build the character pool: enabled alphabets concatenated in fixed order
/// (upper, lower, digits, symbols).
pub fn build(options: &GenerationOptions) -> Result<String, InvalidOptions> {
    if !options.any_category() {
        return Err(InvalidOptions);
    }

    let mut pool = String::new();

    if options.upper {
        pool.push_str(UPPERCASE);
    }
    if options.lower {
        pool.push_str(LOWERCASE);
    }
    if options.digits {
        pool.push_str(DIGITS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(f: impl FnOnce(&mut GenerationOptions)) -> GenerationOptions {
        let mut o = GenerationOptions {
            upper: false,
            lower: false,
            digits: false,
            symbols: false,
            ..Default::default()
        };
        f(&mut o);
        o
    }

    #[test]
    fn pool_concatenates_in_fixed_order() {
        let pool = build(&GenerationOptions::default()).unwrap();
        assert!(pool.starts_with(UPPERCASE));
        let after_upper = &pool[UPPERCASE.len()..];
        assert!(after_upper.starts_with(LOWERCASE));
        assert!(pool.ends_with(SYMBOLS));
        assert_eq!(
            pool.len(),
            UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SYMBOLS.len()
        );
    }

    #[test]
    fn single_category_pools() {
        assert_eq!(build(&only(|o| o.digits = true)).unwrap(), DIGITS);
        assert_eq!(build(&only(|o| o.symbols = true)).unwrap(), SYMBOLS);
    }

    #[test]
    fn no_categories_is_invalid() {
        assert_eq!(build(&only(|_| {})), Err(InvalidOptions));
    }

    #[test]
    fn clamp_length_bounds() {
        let mut o = GenerationOptions {
            length: 1,
            ..Default::default()
        };
        o.clamp_length();
        assert_eq!(o.length, MIN_LENGTH);
        o.length = 1000;
        o.clamp_length();
        assert_eq!(o.length, MAX_LENGTH);
        o.length = 32;
        o.clamp_length();
        assert_eq!(o.length, 32);
    }
}
