//! Keyword Extractor — turns a student profile into match probes.
//!
//! Every skill contributes itself (lowercased) as a *skill keyword* plus its
//! sub-word tokens as plain keywords. The branch contributes itself and its
//! whitespace tokens. Sets are insertion-ordered so that downstream matched
//! skill lists come out in a reproducible order.

use std::collections::HashSet;

/// Stop words dropped from split tokens. Tuned by hand; override via `MATCH_STOP_WORDS`.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "and",
    "the",
    "for",
    "with",
    "using",
    "from",
    "base",
    "developer",
    "engineer",
    "manager",
    "intern",
    "junior",
    "senior",
];

/// Split tokens shorter than this are dropped. "Go" and "C#" lose their
/// fragments here; the whole-skill keyword still survives.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// The scorer never probes with keywords shorter than this.
pub const DEFAULT_MIN_PROBE_LEN: usize = 2;

/// Tunables for extraction and scoring.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    pub stop_words: HashSet<String>,
    pub min_token_len: usize,
    pub min_probe_len: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            min_probe_len: DEFAULT_MIN_PROBE_LEN,
        }
    }
}

impl KeywordConfig {
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

/// Deduplicated set of keywords that iterates in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the keyword was already present.
    pub fn insert(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if self.seen.contains(&keyword) {
            return false;
        }
        self.seen.insert(keyword.clone());
        self.ordered.push(keyword);
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.seen.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}

/// Output of keyword extraction. `skill_keywords` is always a subset of `keywords`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileKeywords {
    pub keywords: KeywordSet,
    pub skill_keywords: KeywordSet,
}

/// Extracts keywords from a student's skills and branch.
pub fn extract_keywords(
    skills: &[String],
    branch: Option<&str>,
    config: &KeywordConfig,
) -> ProfileKeywords {
    let mut keywords = KeywordSet::new();
    let mut skill_keywords = KeywordSet::new();

    for skill in skills {
        let lowered = skill.trim().to_lowercase();
        if lowered.is_empty() {
            continue;
        }

        keywords.insert(lowered.clone());
        skill_keywords.insert(lowered.clone());

        for piece in lowered.split(is_skill_separator) {
            let cleaned: String = piece.chars().filter(|c| c.is_alphanumeric()).collect();
            if cleaned.chars().count() >= config.min_token_len && !config.is_stop_word(&cleaned) {
                keywords.insert(cleaned);
            }
        }
    }

    if let Some(branch) = branch {
        let lowered = branch.trim().to_lowercase();
        if !lowered.is_empty() {
            keywords.insert(lowered.clone());
            // Branch tokens skip the length filter.
            for token in lowered.split_whitespace() {
                if !config.is_stop_word(token) {
                    keywords.insert(token);
                }
            }
        }
    }

    ProfileKeywords {
        keywords,
        skill_keywords,
    }
}

fn is_skill_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '/' | '-' | ',')
}
