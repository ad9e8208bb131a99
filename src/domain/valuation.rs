//! Monetary valuation in integer cents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A monetary estimate for a single (domain, score) evaluation.
///
/// Never cached or mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Valuation {
    cents: u64,
}

impl Valuation {
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Truncates a dollar amount into integer cents, flooring at zero.
    #[must_use]
    pub fn from_dollars(dollars: f64) -> Self {
        Self {
            cents: (dollars * 100.0).max(0.0) as u64,
        }
    }

    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.cents
    }

    #[must_use]
    pub fn dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.dollars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars_truncates() {
        assert_eq!(Valuation::from_dollars(12.349).cents(), 1234);
        assert_eq!(Valuation::from_dollars(-3.0).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Valuation::from_cents(308_75).to_string(), "$308.75");
    }
}
