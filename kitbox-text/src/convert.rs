//! Case and layout conversions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A conversion mode name that is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown conversion mode: {0}")]
pub struct UnknownMode(pub String);

/// The closed set of supported text conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConvertMode {
    Uppercase,
    Lowercase,
    Title,
    Camel,
    Snake,
    Kebab,
    Capitalize,
    Reverse,
    RemoveSpaces,
    RemoveLines,
}

impl ConvertMode {
    /// The wire name of this mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Title => "title",
            Self::Camel => "camel",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::Capitalize => "capitalize",
            Self::Reverse => "reverse",
            Self::RemoveSpaces => "remove-spaces",
            Self::RemoveLines => "remove-lines",
        }
    }
}

impl FromStr for ConvertMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uppercase" => Ok(Self::Uppercase),
            "lowercase" => Ok(Self::Lowercase),
            "title" => Ok(Self::Title),
            "camel" => Ok(Self::Camel),
            "snake" => Ok(Self::Snake),
            "kebab" => Ok(Self::Kebab),
            "capitalize" => Ok(Self::Capitalize),
            "reverse" => Ok(Self::Reverse),
            "remove-spaces" => Ok(Self::RemoveSpaces),
            "remove-lines" => Ok(Self::RemoveLines),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ConvertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies one conversion. Pure and total for every mode.
#[must_use]
pub fn convert_text(text: &str, mode: ConvertMode) -> String {
    match mode {
        ConvertMode::Uppercase => text.to_uppercase(),
        ConvertMode::Lowercase => text.to_lowercase(),
        ConvertMode::Title => title_case(text),
        ConvertMode::Camel => camel_case(text),
        ConvertMode::Snake => delimit_lowercase(text, '_'),
        ConvertMode::Kebab => delimit_lowercase(text, '-'),
        ConvertMode::Capitalize => capitalize_words(text),
        ConvertMode::Reverse => text.chars().rev().collect(),
        ConvertMode::RemoveSpaces => text.chars().filter(|c| !c.is_whitespace()).collect(),
        ConvertMode::RemoveLines => collapse_newlines(text),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Uppercases the first word character of each whitespace-delimited
/// token and lowercases the rest of the token.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut seen_word_char = false;
    for c in text.chars() {
        if c.is_whitespace() {
            seen_word_char = false;
            out.push(c);
        } else if seen_word_char {
            out.extend(c.to_lowercase());
        } else if is_word_char(c) {
            seen_word_char = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Lowercases the text's first word character, uppercases each later
/// word-run start, and strips all whitespace.
fn camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        let at_start = prev.is_none();
        let boundary = prev.is_none_or(|p| !is_word_char(p));
        if !c.is_whitespace() {
            if is_word_char(c) && at_start {
                out.extend(c.to_lowercase());
            } else if is_word_char(c) && boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
        }
        prev = Some(c);
    }
    out
}

/// Uppercases every word character that starts a word-character run,
/// leaving everything else untouched.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.chars() {
        let is_word = is_word_char(c);
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Lowercases and replaces each whitespace run with one delimiter.
fn delimit_lowercase(text: &str, delimiter: char) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_space {
                in_space = true;
                out.push(delimiter);
            }
        } else {
            in_space = false;
            out.push(c);
        }
    }
    out
}

/// Replaces each newline run with a single space.
fn collapse_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c == '\n' {
            if !in_run {
                in_run = true;
                out.push(' ');
            }
        } else {
            in_run = false;
            out.push(c);
        }
    }
    out
}
