//! Normalized attributes derived from a domain string.

use serde::{Deserialize, Serialize};

/// Attributes extracted from a validated domain name.
///
/// Derived once per analysis and immutable afterwards. All fractional
/// fields are clamped to the 0.0-1.0 range at extraction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainTraits {
    /// Label before the dot, lowercased.
    pub name: String,
    /// Suffix after the dot, lowercased.
    pub tld: String,
    /// Character count of the label.
    pub length: usize,
    /// Highest matched keyword value, with exact-match bonus (0.0 to 1.0).
    pub keyword_value: f64,
    /// Character-pattern rarity (0.0 to 1.0).
    pub rarity: f64,
    /// Static TLD rarity, 0.5 for unknown TLDs (0.0 to 1.0).
    pub tld_rarity: f64,
    /// Simulated on-chain activity proxy (0.0 to 1.0).
    pub on_chain_activity: f64,
}

impl DomainTraits {
    /// Returns the full domain string, `name.tld`.
    #[must_use]
    pub fn domain(&self) -> String {
        format!("{}.{}", self.name, self.tld)
    }
}
