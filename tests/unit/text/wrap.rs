use super::*;
use crate::text::measure::FixedAdvance;

const TEN: FixedAdvance = FixedAdvance { advance: 10.0 };

#[test]
fn empty_and_blank_input_yield_no_lines() {
    assert!(wrap_text("", &TEN, 100.0).is_empty());
    assert!(wrap_text("   \n  ", &TEN, 100.0).is_empty());
}

#[test]
fn greedy_break_keeps_lines_within_width() {
    let lines = wrap_text("aa bb cc dd ee", &TEN, 50.0);
    assert_eq!(lines, vec!["aa bb", "cc dd", "ee"]);
    for line in &lines {
        assert!(TEN.text_width(line) <= 50.0);
    }
}

#[test]
fn overlong_word_sits_alone() {
    let lines = wrap_text("a abcdefghij b", &TEN, 50.0);
    assert_eq!(lines, vec!["a", "abcdefghij", "b"]);
}

#[test]
fn newlines_start_new_paragraphs() {
    let lines = wrap_text("one two\nthree", &TEN, 1000.0);
    assert_eq!(lines, vec!["one two", "three"]);
}

#[test]
fn rejoining_reconstructs_normalized_words() {
    let text = "Student  engaged well.\nCompleted three exercises and asked clarifying questions about fractions.";
    for width in [40.0, 80.0, 130.0, 300.0] {
        let lines = wrap_text(text, &TEN, width);
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original, "width {width}");
        for line in &lines {
            let fits = TEN.text_width(line) <= width;
            assert!(fits || !line.contains(' '), "{line:?} overflows {width}");
        }
    }
}
