//! Text statistics and conversion engine for kitbox.
//!
//! Pure, synchronous computation over a text blob:
//!
//! - [`calculate_text_stats`] — counts, reading time, file size, and
//!   (given enough text) Flesch readability and keyword density
//! - [`convert_text`] — case and layout conversions over the closed
//!   [`ConvertMode`] set
//!
//! Every call recomputes from scratch in time linear in the input; no
//! state is retained between calls.

mod convert;
mod keywords;
mod readability;
mod stats;

pub use convert::{ConvertMode, UnknownMode, convert_text};
pub use keywords::KeywordDensity;
pub use readability::{ReadabilityScore, count_syllables, reading_level};
pub use stats::{TextStats, calculate_text_stats};
