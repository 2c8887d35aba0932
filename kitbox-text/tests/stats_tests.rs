use kitbox_text::calculate_text_stats;
use pretty_assertions::assert_eq;

#[test]
fn empty_text_boundary() {
    let stats = calculate_text_stats("");
    assert_eq!(stats.characters, 0);
    assert_eq!(stats.characters_no_spaces, 0);
    assert_eq!(stats.words, 0);
    assert_eq!(stats.lines, 1);
    assert_eq!(stats.paragraphs, 0);
    assert_eq!(stats.sentences, 0);
    assert_eq!(stats.reading_time, "0s");
    assert_eq!(stats.file_size, "0.0 KB");
    assert!(stats.readability.is_none());
    assert!(stats.keyword_density.is_none());
}

#[test]
fn whitespace_only_text() {
    let stats = calculate_text_stats("  \n \t \n  ");
    assert_eq!(stats.words, 0);
    assert_eq!(stats.characters_no_spaces, 0);
    assert_eq!(stats.lines, 3);
    assert_eq!(stats.paragraphs, 0);
    assert_eq!(stats.sentences, 0);
}

#[test]
fn short_sentence_pair() {
    let stats = calculate_text_stats("Hello world. This is great!");
    assert_eq!(stats.characters, 27);
    assert_eq!(stats.characters_no_spaces, 23);
    assert_eq!(stats.words, 5);
    assert_eq!(stats.lines, 1);
    assert_eq!(stats.paragraphs, 1);
    assert_eq!(stats.sentences, 2);
    assert_eq!(stats.reading_time, "1m");

    // 5 words and 2 sentences is enough for readability
    let readability = stats.readability.expect("readability present");
    assert_eq!(readability.flesch_reading_ease, 100.0);
    assert_eq!(readability.flesch_kincaid_grade, 0.0);
    assert_eq!(readability.reading_level, "Very Easy");

    assert!(stats.keyword_density.is_some());
}

#[test]
fn lines_count_newline_segments() {
    let stats = calculate_text_stats("one\ntwo\nthree");
    assert_eq!(stats.lines, 3);

    // A trailing newline opens one more (empty) segment
    let stats = calculate_text_stats("one\ntwo\n");
    assert_eq!(stats.lines, 3);
}

#[test]
fn paragraphs_split_on_blank_lines() {
    let text = "First paragraph\nstill first.\n\nSecond paragraph.\n\n\nThird.";
    let stats = calculate_text_stats(text);
    assert_eq!(stats.paragraphs, 3);
    assert_eq!(stats.lines, 7);
}

#[test]
fn blank_lines_with_spaces_still_split_paragraphs() {
    let stats = calculate_text_stats("one\n   \ntwo");
    assert_eq!(stats.paragraphs, 2);
}

#[test]
fn consecutive_terminators_are_one_sentence_boundary() {
    let stats = calculate_text_stats("Wait... what?! Really?");
    assert_eq!(stats.sentences, 3);
}

#[test]
fn reading_time_buckets() {
    assert_eq!(calculate_text_stats("word").reading_time, "1m");

    let two_hundred = "word ".repeat(200);
    assert_eq!(calculate_text_stats(&two_hundred).reading_time, "1m");

    let two_hundred_one = "word ".repeat(201);
    assert_eq!(calculate_text_stats(&two_hundred_one).reading_time, "2m");
}

#[test]
fn file_size_is_utf8_bytes() {
    // 2048 ASCII bytes = 2.0 KB
    let text = "a".repeat(2048);
    assert_eq!(calculate_text_stats(&text).file_size, "2.0 KB");

    // Multibyte characters count as their UTF-8 length
    let stats = calculate_text_stats("héllo");
    assert_eq!(stats.characters, 5);
    assert_eq!(stats.file_size, "0.0 KB");
}

#[test]
fn characters_count_scalars_not_bytes() {
    let stats = calculate_text_stats("世界 🌍");
    assert_eq!(stats.characters, 4);
    assert_eq!(stats.characters_no_spaces, 3);
    assert_eq!(stats.words, 2);
}

#[test]
fn readability_absent_below_five_words() {
    assert!(calculate_text_stats("Too short.").readability.is_none());
}

#[test]
fn readability_absent_without_sentences() {
    let stats = calculate_text_stats("five words but no terminator");
    assert_eq!(stats.words, 5);
    assert!(stats.readability.is_none());
}

#[test]
fn serde_output_is_camel_case_and_omits_absent_sections() {
    let json = serde_json::to_value(calculate_text_stats("")).unwrap();
    assert!(json.get("charactersNoSpaces").is_some());
    assert!(json.get("readingTime").is_some());
    assert!(json.get("fileSize").is_some());
    assert!(json.get("readability").is_none());
    assert!(json.get("keywordDensity").is_none());

    let json =
        serde_json::to_value(calculate_text_stats("Hello world. This is great!")).unwrap();
    assert!(json.get("readability").is_some());
    assert!(json.get("keywordDensity").is_some());
}
