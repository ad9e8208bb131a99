//! Trait extraction: raw domain string to normalized attributes.
//!
//! The keyword and TLD tables are process-wide constants, initialized once
//! and never mutated, so extraction is safe to share across concurrent
//! callers without locking.

use regex::Regex;

use crate::domain::DomainTraits;
use crate::error::DomainError;

/// Keyword values used for substring matching against the label.
/// In a full deployment these would come from a trained model.
const KEYWORD_VALUES: &[(&str, f64)] = &[
    ("crypto", 0.9),
    ("blockchain", 0.85),
    ("nft", 0.8),
    ("defi", 0.8),
    ("tech", 0.7),
    ("ai", 0.8),
    ("web3", 0.85),
    ("metaverse", 0.8),
    ("finance", 0.6),
    ("banking", 0.6),
    ("trading", 0.7),
    ("gaming", 0.6),
    ("play", 0.5),
    ("game", 0.6),
    ("shop", 0.5),
    ("store", 0.5),
    ("buy", 0.5),
    ("sell", 0.5),
    ("app", 0.6),
    ("api", 0.7),
    ("dev", 0.6),
    ("code", 0.6),
];

/// Rarity scores for known TLDs. Unknown TLDs default to 0.5.
const TLD_RARITY: &[(&str, f64)] = &[
    ("com", 0.3),
    ("net", 0.4),
    ("org", 0.4),
    ("io", 0.7),
    ("eth", 0.9),
    ("crypto", 0.9),
    ("nft", 0.9),
    ("dao", 0.9),
    ("ai", 0.8),
    ("app", 0.7),
    ("dev", 0.7),
    ("tech", 0.6),
];

const DEFAULT_TLD_RARITY: f64 = 0.5;

/// TLDs treated as crypto-native for the on-chain activity proxy.
const CRYPTO_TLDS: &[&str] = &["eth", "crypto", "nft", "dao"];

/// Rarity score for a known TLD, 0.5 for anything else.
#[must_use]
pub fn tld_rarity(tld: &str) -> f64 {
    TLD_RARITY
        .iter()
        .find(|(known, _)| *known == tld)
        .map_or(DEFAULT_TLD_RARITY, |(_, rarity)| *rarity)
}

/// Parses domain strings into [`DomainTraits`].
///
/// Stateless apart from the compiled format pattern; no side effects.
#[derive(Debug, Clone)]
pub struct TraitExtractor {
    format: Regex,
}

impl TraitExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Single label, single TLD; input is lowercased before matching.
            format: Regex::new(r"^[a-z0-9-]{1,63}\.[a-z]{2,}$")
                .expect("domain format pattern is valid"),
        }
    }

    /// Extracts normalized traits from a raw domain string.
    ///
    /// Trims and lowercases the input before validation. Fails with
    /// [`DomainError::InvalidDomainFormat`] when the input is not a single
    /// `label.tld` pair with both sides non-empty.
    pub fn extract(&self, domain: &str) -> Result<DomainTraits, DomainError> {
        let normalized = domain.trim().to_ascii_lowercase();
        if !self.format.is_match(&normalized) {
            return Err(DomainError::InvalidDomainFormat {
                domain: domain.trim().to_string(),
            });
        }

        let Some((name, tld)) = normalized.split_once('.') else {
            return Err(DomainError::InvalidDomainFormat {
                domain: normalized.clone(),
            });
        };

        let keyword_value = keyword_value(name);
        Ok(DomainTraits {
            name: name.to_string(),
            tld: tld.to_string(),
            length: name.chars().count(),
            keyword_value,
            rarity: rarity(name),
            tld_rarity: tld_rarity(tld),
            on_chain_activity: on_chain_activity(name, tld, keyword_value),
        })
    }
}

impl Default for TraitExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest keyword value contained in the label, with a +0.1 bonus for an
/// exact full-label match, capped at 1.0.
fn keyword_value(name: &str) -> f64 {
    let mut max_value: f64 = 0.0;
    for (keyword, value) in KEYWORD_VALUES {
        if name.contains(keyword) {
            max_value = max_value.max(*value);
        }
        if name == *keyword {
            max_value = max_value.max(value + 0.1);
        }
    }
    max_value.min(1.0)
}

/// Character-pattern rarity.
///
/// Starts at 1.0; penalized 0.1 per repeated-character run, 0.2 for more
/// than two digits, 0.1 for a hyphen or underscore. A single digit in a
/// label of at most four characters is a numeric-pattern bonus of 0.2
/// instead of a penalty. The two digit branches are mutually exclusive and
/// kept in the source's order.
fn rarity(name: &str) -> f64 {
    let mut value = 1.0 - 0.1 * repeated_runs(name) as f64;

    let digits = name.chars().filter(char::is_ascii_digit).count();
    if digits == 1 && name.chars().count() <= 4 {
        value += 0.2;
    } else if digits > 2 {
        value -= 0.2;
    }

    // The format pattern rejects underscores, so only the hyphen branch is
    // reachable through `extract`.
    if name.contains('-') || name.contains('_') {
        value -= 0.1;
    }

    value.clamp(0.0, 1.0)
}

/// Counts maximal runs of two or more identical consecutive characters.
fn repeated_runs(name: &str) -> usize {
    let mut runs = 0;
    let mut prev: Option<char> = None;
    let mut run_len = 1;
    for c in name.chars() {
        if prev == Some(c) {
            run_len += 1;
        } else {
            if run_len >= 2 {
                runs += 1;
            }
            run_len = 1;
        }
        prev = Some(c);
    }
    if run_len >= 2 {
        runs += 1;
    }
    runs
}

/// Simulated on-chain activity proxy.
///
/// A full deployment would query indexer data; this stands in with a
/// heuristic over the same characteristics.
fn on_chain_activity(name: &str, tld: &str, keyword_value: f64) -> f64 {
    let mut activity: f64 = 0.5;
    if CRYPTO_TLDS.contains(&tld) {
        activity += 0.3;
    }
    if name.chars().count() <= 4 {
        activity += 0.2;
    }
    if keyword_value > 0.5 {
        activity += 0.2;
    }
    activity.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(domain: &str) -> DomainTraits {
        TraitExtractor::new().extract(domain).unwrap()
    }

    #[test]
    fn test_extracts_name_and_tld() {
        let traits = extract("  Crypto.ETH ");
        assert_eq!(traits.name, "crypto");
        assert_eq!(traits.tld, "eth");
        assert_eq!(traits.length, 6);
    }

    #[test]
    fn test_rejects_malformed_domains() {
        let extractor = TraitExtractor::new();
        for bad in [
            "", "crypto", ".eth", "crypto.", "a.b.c", "crypto.e", "cry pto.eth", "under_score.eth",
        ] {
            assert!(
                matches!(
                    extractor.extract(bad),
                    Err(DomainError::InvalidDomainFormat { .. })
                ),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn test_exact_keyword_match_bonus_capped() {
        // 0.9 + 0.1 exact bonus, capped at 1.0
        assert_eq!(extract("crypto.eth").keyword_value, 1.0);
        // substring only, no bonus
        assert_eq!(extract("cryptoking.com").keyword_value, 0.9);
        // no keyword at all
        assert_eq!(extract("zxqvw.com").keyword_value, 0.0);
    }

    #[test]
    fn test_rarity_penalties() {
        // no repeats, no digits, no hyphen
        assert_eq!(extract("crypto.eth").rarity, 1.0);
        // one repeated run: "oo"
        assert!((extract("book.com").rarity - 0.9).abs() < 1e-9);
        // hyphen penalty
        assert!((extract("my-shop.com").rarity - 0.9).abs() < 1e-9);
        // three digits
        assert!((extract("abc123.com").rarity - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_single_digit_short_name_bonus_clamped() {
        // one digit, length <= 4: bonus, clamped to 1.0
        assert_eq!(extract("web3.io").rarity, 1.0);
    }

    #[test]
    fn test_on_chain_activity_caps_at_one() {
        // crypto TLD + keyword > 0.5 => 0.5 + 0.3 + 0.2 = 1.0
        assert_eq!(extract("crypto.eth").on_chain_activity, 1.0);
        // plain domain: base only
        assert_eq!(extract("zxqvwxyz.com").on_chain_activity, 0.5);
        // short name bonus
        assert!((extract("zx.com").on_chain_activity - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_tld_defaults() {
        assert_eq!(extract("crypto.xyz").tld_rarity, 0.5);
    }

    #[test]
    fn test_all_traits_in_unit_range() {
        for domain in ["crypto.eth", "aaa111.com", "a-b-c-1.io", "x.ai"] {
            let traits = extract(domain);
            for value in [
                traits.keyword_value,
                traits.rarity,
                traits.tld_rarity,
                traits.on_chain_activity,
            ] {
                assert!((0.0..=1.0).contains(&value), "{domain}: {value}");
            }
        }
    }
}
