//! Per-character analysis score, bucketed into fixed display tiers.

use super::{Assessment, Composition};

/// A bucket: raw scores `>= min` display as `score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub min: i64,
    pub score: u8,
    pub label: &'static str,
    pub color: &'static str,
}

impl Tier {
    const fn new(min: i64, score: u8, label: &'static str, color: &'static str) -> Self {
        Self {
            min,
            score,
            label,
            color,
        }
    }

    pub const fn assessment(&self) -> Assessment {
        Assessment::new(self.score, self.label, self.color)
    }
}

// Integer raw scores: `> 95` is `>= 96` and so on.
pub const TIERS: [Tier; 7] = [
    Tier::new(96, 100, "Maximum", "#9d4edd"),
    Tier::new(86, 95, "Very High", "#649dff"),
    Tier::new(76, 85, "High", "#4deeea"),
    Tier::new(66, 75, "Good", "#06d6a0"),
    Tier::new(51, 60, "Medium", "#ffd166"),
    Tier::new(36, 45, "Weak", "#f78c6b"),
    Tier::new(i64::MIN, 30, "Very Weak", "#ef476f"),
];

/// Unbucketed score; may exceed 100 or go negative.
pub fn raw_score(password: &str) -> i64 {
    let comp = Composition::of(password);
    let length = comp.length as i64;

    let mut score = length * 2;
    if comp.upper {
        score += 10;
    }
    if comp.lower {
        score += 10;
    }
    if comp.digit {
        score += 15;
    }
    if comp.symbol {
        score += 20;
    }

    if comp.length < 8 {
        score -= 30;
    }
    if !(comp.upper || comp.symbol) {
        score -= 20;
    }
    if (comp.distinct as f64) < comp.length as f64 * 0.6 {
        score -= 15;
    }
    score
}

pub fn tier(raw: i64) -> &'static Tier {
    let tiers: &'static [Tier] = &TIERS;
    tiers
        .iter()
        .find(|tier| raw >= tier.min)
        .unwrap_or(&tiers[tiers.len() - 1])
}

pub fn assess(password: &str) -> Assessment {
    tier(raw_score(password)).assessment()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_sample() {
        // 16 + 55 - 15 (4 distinct < 4.8)
        assert_eq!(raw_score("Ab3!Ab3!"), 56);
        let assessment = assess("Ab3!Ab3!");
        assert_eq!(assessment.score, 60);
        assert_eq!(assessment.label, "Medium");
    }

    #[test]
    fn test_short_penalty() {
        // 14 + 55 - 30
        assert_eq!(raw_score("Ab3!xY9"), 39);
        assert_eq!(assess("Ab3!xY9").label, "Weak");
    }

    #[test]
    fn test_no_upper_no_symbol_penalty() {
        // 24 + 10 + 15 - 20
        assert_eq!(raw_score("abcdef123456"), 29);
        assert_eq!(assess("abcdef123456").label, "Very Weak");
    }

    #[test]
    fn test_pin() {
        // 8 + 15 - 30 - 20 - 15 (1 distinct < 2.4)
        assert_eq!(raw_score("1111"), -42);
        assert_eq!(assess("1111").score, 30);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier(96).label, "Maximum");
        assert_eq!(tier(95).label, "Very High");
        assert_eq!(tier(86).label, "Very High");
        assert_eq!(tier(85).label, "High");
        assert_eq!(tier(66).label, "Good");
        assert_eq!(tier(65).label, "Medium");
        assert_eq!(tier(51).label, "Medium");
        assert_eq!(tier(50).label, "Weak");
        assert_eq!(tier(35).label, "Very Weak");
        assert_eq!(tier(-100).score, 30);
        assert_eq!(tier(400).score, 100);
    }

    #[test]
    fn test_long_mixed_password() {
        let pw = "Zq7!Lm2@Xv9#Rt4$Kp8%Wn";
        assert!(raw_score(pw) > 95);
        assert_eq!(assess(pw).label, "Maximum");
    }
}
