//! Fuzzy ranking of choices against a query using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Utf32Str};
use serde::{Deserialize, Serialize};

use crate::model::{Choice, ChoiceId};

/// Choice field searched by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Label,
    Value,
}

impl SearchField {
    pub fn of(self, choice: &Choice) -> &str {
        match self {
            SearchField::Label => &choice.label,
            SearchField::Value => &choice.value,
        }
    }
}

/// A matched choice and its relevance (higher is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub choice_id: ChoiceId,
    pub score: u32,
}

/// Scores haystack strings against a query.
///
/// Implement this to plug in a different matching strategy; the picker
/// only needs a score per field and treats `None` as "no match".
pub trait Matcher {
    fn score(&mut self, query: &str, haystack: &str) -> Option<u32>;
}

/// Default matcher: case-insensitive fuzzy matching with smart unicode
/// normalization.
pub struct FuzzyMatcher {
    matcher: nucleo_matcher::Matcher,
    pattern: Option<(String, Pattern)>,
    buf: Vec<char>,
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: nucleo_matcher::Matcher::new(Config::DEFAULT),
            pattern: None,
            buf: Vec::new(),
        }
    }

    fn refresh_pattern(&mut self, query: &str) {
        let stale = self
            .pattern
            .as_ref()
            .is_none_or(|(cached, _)| cached != query);
        if stale {
            let pattern = Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            );
            self.pattern = Some((query.to_string(), pattern));
        }
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for FuzzyMatcher {
    fn score(&mut self, query: &str, haystack: &str) -> Option<u32> {
        self.refresh_pattern(query);
        let FuzzyMatcher {
            matcher,
            pattern,
            buf,
        } = self;
        let (_, pattern) = pattern.as_ref()?;
        let haystack = Utf32Str::new(haystack, buf);
        pattern.score(haystack, matcher)
    }
}

/// Rank `haystack` against `query`.
///
/// A choice's score is the best score over `fields`. Results are sorted by
/// score, highest first; ties keep log order.
pub fn rank(
    matcher: &mut dyn Matcher,
    query: &str,
    haystack: &[Choice],
    fields: &[SearchField],
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = haystack
        .iter()
        .filter_map(|choice| {
            fields
                .iter()
                .filter_map(|field| matcher.score(query, field.of(choice)))
                .max()
                .map(|score| SearchResult {
                    choice_id: choice.id,
                    score,
                })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
