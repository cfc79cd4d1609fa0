use chrono::{Datelike, NaiveDate};

use crate::{content::labels::labels, foundation::core::Locale};

/// Resolve the session date from an optional `YYYY-MM-DD` string.
///
/// Absent or unparseable input resolves to `today`; the second element reports whether
/// that fallback was taken.
pub fn resolve_session_date(raw: Option<&str>, today: NaiveDate) -> (NaiveDate, bool) {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return (today, true);
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(d) => (d, false),
        Err(err) => {
            tracing::warn!(date = raw, %err, "unparseable session date, using today");
            (today, true)
        }
    }
}

/// Long-form date using a fixed month table, independent of process locale.
pub fn format_long_date(date: NaiveDate, locale: Locale) -> String {
    let month = labels(locale).months[date.month0() as usize];
    match locale {
        Locale::Es => format!("{:02} de {month} de {}", date.day(), date.year()),
        Locale::En => format!("{month} {}, {}", date.day(), date.year()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/date.rs"]
mod tests;
