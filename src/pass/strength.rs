//! Heuristic strength rating.
//!
//! Five one-point checks, mapped onto four display tiers. This is a rough
//! signal for the UI, not an entropy estimate.

/// Ordinal strength tier with a fixed display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Weak => "Weak",
            Tier::Medium => "Medium",
            Tier::Strong => "Strong",
            Tier::VeryStrong => "Very Strong",
        }
    }

    /// Canonical display color for this tier.
    pub fn color_hex(self) -> &'static str {
        match self {
            Tier::Weak => "#ff6b6b",
            Tier::Medium => "#ffc107",
            Tier::Strong => "#28a745",
            Tier::VeryStrong => "#00e1ff",
        }
    }

    fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tier::Weak => (0xff, 0x6b, 0x6b),
            Tier::Medium => (0xff, 0xc1, 0x07),
            Tier::Strong => (0x28, 0xa7, 0x45),
            Tier::VeryStrong => (0x00, 0xe1, 0xff),
        }
    }

    /// Truecolor escape matching `color_hex`.
    pub fn ansi(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{r};{g};{b}m")
    }
}

/// Score in [0,5]: one point per satisfied check.
pub fn score(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    if password.chars().count() >= 16 {
        score += 1;
    }
    score
}

/// Map a score onto its tier: `min(score - 1, 3)` clamped at zero, so
/// scores 0 and 1 both rate Weak.
pub fn tier(score: u8) -> Tier {
    match score {
        0 | 1 => Tier::Weak,
        2 => Tier::Medium,
        3 => Tier::Strong,
        _ => Tier::VeryStrong,
    }
}

/// Rate a password in one step.
pub fn rate(password: &str) -> Tier {
    tier(score(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_only_short_is_weak() {
        assert_eq!(score("abcdefgh"), 1);
        assert_eq!(rate("abcdefgh"), Tier::Weak);
    }

    #[test]
    fn four_classes_is_very_strong() {
        // upper + lower + digit + symbol, length < 16 -> score 4
        assert_eq!(score("Abcdefg1!"), 4);
        assert_eq!(rate("Abcdefg1!"), Tier::VeryStrong);
    }

    #[test]
    fn long_lowercase_is_medium() {
        assert_eq!(score("aaaaaaaaaaaaaaaa"), 2);
        assert_eq!(rate("aaaaaaaaaaaaaaaa"), Tier::Medium);
    }

    #[test]
    fn all_five_checks_still_cap_at_very_strong() {
        let pwd = "Abcdefghijklmn1!";
        assert_eq!(score(pwd), 5);
        assert_eq!(rate(pwd), Tier::VeryStrong);
    }

    #[test]
    fn empty_string_clamps_to_weak() {
        assert_eq!(score(""), 0);
        assert_eq!(rate(""), Tier::Weak);
    }

    #[test]
    fn three_classes_is_strong() {
        assert_eq!(rate("Abcdef12"), Tier::Strong);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        // mirrors the [^a-zA-Z0-9] class: anything non-alphanumeric scores
        assert_eq!(score("héllo"), 2);
    }

    #[test]
    fn color_table_is_fixed() {
        assert_eq!(Tier::Weak.color_hex(), "#ff6b6b");
        assert_eq!(Tier::Medium.color_hex(), "#ffc107");
        assert_eq!(Tier::Strong.color_hex(), "#28a745");
        assert_eq!(Tier::VeryStrong.color_hex(), "#00e1ff");
        assert_eq!(Tier::VeryStrong.label(), "Very Strong");
    }
}
