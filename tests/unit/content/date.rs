use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn spanish_long_date() {
    assert_eq!(
        format_long_date(d(2024, 3, 15), Locale::Es),
        "15 de marzo de 2024"
    );
    assert_eq!(
        format_long_date(d(2024, 9, 5), Locale::Es),
        "05 de septiembre de 2024"
    );
}

#[test]
fn english_long_date() {
    assert_eq!(
        format_long_date(d(2024, 12, 1), Locale::En),
        "December 1, 2024"
    );
}

#[test]
fn resolve_parses_iso_dates() {
    let today = d(2030, 1, 1);
    assert_eq!(
        resolve_session_date(Some("2024-03-15"), today),
        (d(2024, 3, 15), false)
    );
    assert_eq!(
        resolve_session_date(Some(" 2024-03-15 "), today),
        (d(2024, 3, 15), false)
    );
}

#[test]
fn resolve_falls_back_to_today() {
    let today = d(2030, 1, 1);
    assert_eq!(resolve_session_date(None, today), (today, true));
    assert_eq!(resolve_session_date(Some(""), today), (today, true));
    assert_eq!(resolve_session_date(Some("15/03/2024"), today), (today, true));
    assert_eq!(resolve_session_date(Some("2024-02-30"), today), (today, true));
}
