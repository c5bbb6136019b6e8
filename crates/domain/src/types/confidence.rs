//! Detection confidence scoring

use std::fmt;

use serde::{Deserialize, Serialize};

/// Detection confidence level (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ConfidenceScore(f64);

impl ConfidenceScore {
    /// Creates a new confidence score, clamping the value between 0.0 and 1.0
    pub fn new(score: f64) -> Self {
        debug_assert!(score.is_finite(), "Confidence score must be finite");
        Self(score.clamp(0.0, 1.0))
    }

    /// Returns the confidence value as f64
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if this is considered high confidence (>= 0.8)
    pub fn is_high_confidence(&self) -> bool {
        self.0 >= 0.8
    }

    /// Returns true if this is considered medium confidence (0.5 to 0.8)
    pub fn is_medium_confidence(&self) -> bool {
        self.0 >= 0.5 && self.0 < 0.8
    }

    /// Returns true if this is considered low confidence (< 0.5)
    pub fn is_low_confidence(&self) -> bool {
        self.0 < 0.5
    }

    /// Combines two confidence scores using the maximum value
    pub const fn max(self, other: Self) -> Self {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }

    /// Combines two confidence scores using the minimum value
    pub const fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Predefined confidence levels as constants
    pub const LOW: Self = Self(0.3);
    pub const MEDIUM: Self = Self(0.6);
    pub const HIGH: Self = Self(0.8);
    pub const MAXIMUM: Self = Self(1.0);
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl From<f64> for ConfidenceScore {
    fn from(score: f64) -> Self {
        Self::new(score)
    }
}

impl From<ConfidenceScore> for f64 {
    fn from(score: ConfidenceScore) -> Self {
        score.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_out_of_range() {
        assert_eq!(ConfidenceScore::new(1.5).value(), 1.0);
        assert_eq!(ConfidenceScore::new(-0.3).value(), 0.0);
        assert_eq!(ConfidenceScore::new(0.75).value(), 0.75);
    }

    #[test]
    fn test_threshold_bands() {
        assert!(ConfidenceScore::new(0.95).is_high_confidence());
        assert!(ConfidenceScore::HIGH.is_high_confidence());
        assert!(ConfidenceScore::new(0.6).is_medium_confidence());
        assert!(ConfidenceScore::new(0.4).is_low_confidence());
        assert!(!ConfidenceScore::new(0.4).is_medium_confidence());
    }

    #[test]
    fn test_max_min_combinators() {
        let low = ConfidenceScore::new(0.2);
        let high = ConfidenceScore::new(0.9);
        assert_eq!(low.max(high).value(), 0.9);
        assert_eq!(low.min(high).value(), 0.2);
    }

    #[test]
    fn test_display_as_percentage() {
        assert_eq!(ConfidenceScore::new(0.85).to_string(), "85.0%");
        assert_eq!(ConfidenceScore::MAXIMUM.to_string(), "100.0%");
    }

    #[test]
    fn test_from_f64_roundtrip() {
        let score: ConfidenceScore = 0.7.into();
        let raw: f64 = score.into();
        assert!((raw - 0.7).abs() < f64::EPSILON);
    }
}
