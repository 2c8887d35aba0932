//! Keyword frequency extraction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum token length considered a keyword.
const MIN_KEYWORD_LEN: usize = 3;

/// Minimum occurrences for a keyword to be reported.
const MIN_COUNT: usize = 2;

/// How many keywords the list is truncated to.
const TOP_N: usize = 10;

/// One reported keyword with its frequency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensity {
    /// Lowercased token, at least 3 characters.
    pub keyword: String,
    /// Occurrences in the text, at least 2.
    pub count: usize,
    /// Percentage of the text's total word count.
    pub density: f64,
}

/// Extracts the top keywords, or `None` below 3 words.
///
/// Sorted by count descending; ties keep first-seen order. Density is
/// relative to `total_words` — the raw whitespace word count, not the
/// filtered token count.
pub(crate) fn density(text: &str, total_words: usize) -> Option<Vec<KeywordDensity>> {
    if total_words < 3 {
        return None;
    }

    let lowered = text.to_lowercase();
    let tokens = lowered
        .split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN);

    // count and first-seen rank per distinct token
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut next_rank = 0;
    for token in tokens {
        let entry = counts.entry(token).or_insert_with(|| {
            let rank = next_rank;
            next_rank += 1;
            (0, rank)
        });
        entry.0 += 1;
    }

    let mut entries: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count >= MIN_COUNT)
        .map(|(token, (count, rank))| (token, count, rank))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    entries.truncate(TOP_N);

    Some(
        entries
            .into_iter()
            .map(|(token, count, _)| KeywordDensity {
                keyword: token.to_string(),
                count,
                density: 100.0 * count as f64 / total_words as f64,
            })
            .collect(),
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
