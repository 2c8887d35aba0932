//! Flesch readability scoring.
//!
//! Syllables are approximated: each contiguous vowel cluster counts as
//! one syllable, a trailing silent "e" drops one, and every word keeps
//! at least one.

use serde::{Deserialize, Serialize};

/// Readability derived from sentence length and syllable density.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityScore {
    /// Flesch Reading Ease, clamped to [0, 100].
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level, clamped to >= 0.
    pub flesch_kincaid_grade: f64,
    /// Bucketed label for the reading-ease score.
    pub reading_level: String,
}

/// Scores `text`, or `None` below 5 words or 1 sentence.
pub(crate) fn score(text: &str, words: usize, sentences: usize) -> Option<ReadabilityScore> {
    if words < 5 || sentences < 1 {
        return None;
    }

    let syllables = count_syllables(text);

    let avg_words_per_sentence = words as f64 / sentences as f64;
    let avg_syllables_per_word = syllables as f64 / words as f64;

    let reading_ease =
        (206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables_per_word).clamp(0.0, 100.0);
    let kincaid_grade =
        (0.39 * avg_words_per_sentence + 11.8 * avg_syllables_per_word - 15.59).max(0.0);

    Some(ReadabilityScore {
        flesch_reading_ease: reading_ease,
        flesch_kincaid_grade: kincaid_grade,
        reading_level: reading_level(reading_ease).to_string(),
    })
}

/// Maps a Flesch Reading Ease score to its conventional label.
///
/// Thresholds are inclusive lower bounds, checked from easiest down.
#[must_use]
pub fn reading_level(flesch_reading_ease: f64) -> &'static str {
    if flesch_reading_ease >= 90.0 {
        "Very Easy"
    } else if flesch_reading_ease >= 80.0 {
        "Easy"
    } else if flesch_reading_ease >= 70.0 {
        "Fairly Easy"
    } else if flesch_reading_ease >= 60.0 {
        "Standard"
    } else if flesch_reading_ease >= 50.0 {
        "Fairly Difficult"
    } else if flesch_reading_ease >= 30.0 {
        "Difficult"
    } else {
        "Very Difficult"
    }
}

/// Counts approximate syllables across the whole text.
///
/// The text is lowercased and split on anything outside `a..z`; each
/// resulting word contributes at least one syllable.
#[must_use]
pub fn count_syllables(text: &str) -> usize {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .map(word_syllables)
        .sum()
}

fn word_syllables(word: &str) -> usize {
    let mut clusters = 0;
    let mut in_cluster = false;
    for c in word.chars() {
        if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y') {
            if !in_cluster {
                in_cluster = true;
                clusters += 1;
            }
        } else {
            in_cluster = false;
        }
    }

    // Trailing silent "e" only drops a syllable it can spare
    if word.ends_with('e') && clusters > 1 {
        clusters -= 1;
    }

    clusters.max(1)
}
