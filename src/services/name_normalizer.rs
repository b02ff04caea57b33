//! Team name normalization across data sources.
//!
//! The odds feed names franchises in full ("Ohio St Buckeyes") while the
//! results ledger uses short names ("Ohio State"). Normalization maps any raw
//! name onto the ledger's lower-cased vocabulary.

use std::collections::HashMap;

use crate::services::team_aliases::{TEAM_ALIASES, TEAM_SUFFIXES};
use crate::utils::title_case;

/// How a canonical key was derived from a raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// Found in the alias table
    Alias(String),
    /// A known mascot/location suffix was stripped
    SuffixStripped(String),
    /// Nothing matched; the first word is used as a best guess
    FirstToken(String),
}

impl NameResolution {
    pub fn key(&self) -> &str {
        match self {
            NameResolution::Alias(k)
            | NameResolution::SuffixStripped(k)
            | NameResolution::FirstToken(k) => k,
        }
    }

    pub fn into_key(self) -> String {
        match self {
            NameResolution::Alias(k)
            | NameResolution::SuffixStripped(k)
            | NameResolution::FirstToken(k) => k,
        }
    }

    pub fn is_guess(&self) -> bool {
        matches!(self, NameResolution::FirstToken(_))
    }
}

#[derive(Debug, Clone)]
pub struct TeamNameNormalizer {
    aliases: HashMap<&'static str, &'static str>,
    /// (title-cased key, value) in table order, for the case-insensitive scan
    titled_aliases: Vec<(String, &'static str)>,
    /// Longest first so " trail blazers" is tried before " blazers"
    suffixes: Vec<&'static str>,
}

impl TeamNameNormalizer {
    pub fn new(aliases: &[(&'static str, &'static str)], suffixes: &[&'static str]) -> Self {
        let mut sorted_suffixes = suffixes.to_vec();
        sorted_suffixes.sort_by(|a, b| b.len().cmp(&a.len()));

        Self {
            aliases: aliases.iter().copied().collect(),
            titled_aliases: aliases.iter().map(|(k, v)| (title_case(k), *v)).collect(),
            suffixes: sorted_suffixes,
        }
    }

    /// Canonical key for a raw team name. Never fails.
    pub fn normalize(&self, raw: &str) -> String {
        self.resolve(raw).into_key()
    }

    pub fn resolve(&self, raw: &str) -> NameResolution {
        let titled = title_case(raw.trim());

        if let Some(short) = self.aliases.get(titled.as_str()) {
            return NameResolution::Alias(short.to_lowercase());
        }

        if let Some((_, short)) = self.titled_aliases.iter().find(|(key, _)| *key == titled) {
            return NameResolution::Alias(short.to_lowercase());
        }

        let lower = raw.trim().to_lowercase();

        for suffix in &self.suffixes {
            if let Some(base) = lower.strip_suffix(*suffix) {
                let base = base.trim();
                if !base.is_empty() {
                    return NameResolution::SuffixStripped(base.to_string());
                }
            }
        }

        NameResolution::FirstToken(
            lower.split_whitespace().next().unwrap_or_default().to_string(),
        )
    }
}

impl Default for TeamNameNormalizer {
    fn default() -> Self {
        Self::new(TEAM_ALIASES, TEAM_SUFFIXES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_exact_match() {
        let n = TeamNameNormalizer::default();
        assert_eq!(n.normalize("Ohio St Buckeyes"), "ohio state");
        assert_eq!(n.normalize("ohio st buckeyes"), "ohio state");
        assert_eq!(n.normalize("Los Angeles Lakers"), "la lakers");
    }

    #[test]
    fn test_alias_needs_title_cased_table_key() {
        let n = TeamNameNormalizer::default();
        // Table keys "UTEP Miners" and "St. John's Red Storm" only match after
        // the table side is title-cased as well.
        assert_eq!(n.normalize("UTEP Miners"), "utep");
        assert_eq!(n.normalize("St. John's Red Storm"), "st. john's");
        assert!(matches!(n.resolve("UConn Huskies"), NameResolution::Alias(_)));
        assert_eq!(n.normalize("UConn Huskies"), "connecticut");
    }

    #[test]
    fn test_suffix_strip_prefers_longest() {
        let n = TeamNameNormalizer::new(&[], &[" blazers", " trail blazers"]);
        assert_eq!(
            n.resolve("Springfield Trail Blazers"),
            NameResolution::SuffixStripped("springfield".to_string())
        );
    }

    #[test]
    fn test_suffix_strip_only_trailing() {
        let n = TeamNameNormalizer::default();
        // " state" appears mid-name but the trailing " wildcats" is what gets removed
        assert_eq!(n.normalize("Weber State Wildcats"), "weber state");
        assert_eq!(n.normalize("Montana Grizzlies"), "montana");
    }

    #[test]
    fn test_first_token_fallback() {
        let n = TeamNameNormalizer::default();
        let res = n.resolve("Some Unknown Fictional Mammals");
        assert_eq!(res, NameResolution::FirstToken("some".to_string()));
        assert!(res.is_guess());
        assert_eq!(n.normalize(""), "");
        // A lone mascot has no leading space to strip, so the word itself is kept
        assert_eq!(n.normalize(" Heat"), "heat");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let n = TeamNameNormalizer::default();
        for raw in ["Kansas St Wildcats", "Gonzaga Bulldogs", "Zzz Qqq", "MIAMI HEAT"] {
            assert_eq!(n.normalize(raw), n.normalize(raw));
        }
    }
}
