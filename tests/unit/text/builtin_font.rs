use super::*;

#[test]
fn table_covers_printable_ascii() {
    for ch in ' '..='~' {
        assert!(glyph(ch).is_some(), "missing glyph for {ch:?}");
    }
    assert_eq!(glyph(' '), Some([0; 5]));
}

#[test]
fn accented_letters_fold_to_base_glyphs() {
    assert_eq!(glyph('ó'), glyph('o'));
    assert_eq!(glyph('Ó'), glyph('O'));
    assert_eq!(glyph('ñ'), glyph('n'));
    assert!(glyph('•').is_some());
    assert!(glyph('°').is_some());
    assert_eq!(glyph('∫'), None);
}

#[test]
fn width_counts_every_char_including_unknown() {
    assert_eq!(scale_for(22.0), 3);
    assert_eq!(scale_for(2.0), 1);
    assert_eq!(text_width("abc", 22.0), 54.0);
    assert_eq!(text_width("a∫", 22.0), 36.0);
    assert_eq!(text_width("", 22.0), 0.0);
}

#[test]
fn cells_stay_inside_the_measured_box() {
    let size = 22.0;
    let text = "Hola • ÑW";
    let width = text_width(text, size) as u32;
    let mut count = 0;
    for_each_cell(text, size, |x, y, side| {
        count += 1;
        assert!(x + side <= width);
        assert!(y + side <= size as u32);
    });
    assert!(count > 0);
}
