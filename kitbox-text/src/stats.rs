//! Descriptive statistics over a text blob.
//!
//! Everything is recomputed from scratch on every call — there is no
//! incremental state — in time linear in the input length.

use crate::keywords::{self, KeywordDensity};
use crate::readability::{self, ReadabilityScore};
use serde::{Deserialize, Serialize};

/// Words-per-minute rate behind the reading-time estimate.
const READING_WPM: usize = 200;

/// The full statistics record for one text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    /// All characters, whitespace included.
    pub characters: usize,
    /// Characters with every whitespace character removed.
    pub characters_no_spaces: usize,
    /// Whitespace-delimited tokens; 0 for blank text.
    pub words: usize,
    /// Newline-delimited segments; at least 1, even for empty text.
    pub lines: usize,
    /// Maximal runs of non-blank lines; 0 for blank text.
    pub paragraphs: usize,
    /// Terminal-punctuation runs (`.`, `!`, `?`).
    pub sentences: usize,
    /// Formatted estimate at 200 words per minute.
    pub reading_time: String,
    /// Formatted UTF-8 size in kilobytes.
    pub file_size: String,
    /// Present once the text has at least 5 words and a sentence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityScore>,
    /// Present once the text has at least 3 words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_density: Option<Vec<KeywordDensity>>,
}

/// Computes the full statistics record for `text`.
#[must_use]
pub fn calculate_text_stats(text: &str) -> TextStats {
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let words = text.split_whitespace().count();
    let lines = text.split('\n').count();
    let paragraphs = count_paragraphs(text);
    let sentences = count_sentences(text);

    TextStats {
        characters,
        characters_no_spaces,
        words,
        lines,
        paragraphs,
        sentences,
        reading_time: format_reading_time(words),
        file_size: format_file_size(text.len()),
        readability: readability::score(text, words, sentences),
        keyword_density: keywords::density(text, words),
    }
}

/// Counts maximal runs of lines that contain any non-whitespace.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            in_paragraph = true;
            count += 1;
        }
    }
    count
}

/// Counts runs of terminal punctuation; consecutive marks are one
/// sentence boundary.
fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_run = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_run {
                in_run = true;
                count += 1;
            }
        } else {
            in_run = false;
        }
    }
    count
}

fn format_reading_time(words: usize) -> String {
    let minutes = words.div_ceil(READING_WPM);
    if minutes < 1 {
        format!("{}s", (words * 60).div_ceil(READING_WPM))
    } else {
        format!("{minutes}m")
    }
}

fn format_file_size(bytes: usize) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
