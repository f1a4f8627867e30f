//! Human-readable timestamps for reservation listings.
//!
//! The backend emits ISO-8601 timestamps, sometimes without an offset and
//! sometimes with fractional seconds. Anything that does not parse is shown
//! as-is rather than hidden.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Format an ISO-8601 timestamp as `DD/MM/YYYY, HH:MM:SS`.
///
/// Offset timestamps keep their own offset. Unparseable input is returned
/// unchanged.
pub fn format_date(raw: &str) -> String {
    let display = format_description!("[day]/[month]/[year], [hour]:[minute]:[second]");
    let trimmed = raw.trim();

    if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return dt.format(display).unwrap_or_else(|_| raw.to_owned());
    }

    let naive = trimmed.replacen(' ', "T", 1);
    let naive = strip_fraction(&naive);
    match PrimitiveDateTime::parse(naive, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")) {
        Ok(dt) => dt.format(display).unwrap_or_else(|_| raw.to_owned()),
        Err(_) => raw.to_owned(),
    }
}

/// Drop a trailing `.digits` fractional-seconds suffix. Any other suffix is
/// kept so the parse fails and the raw input is shown.
fn strip_fraction(naive: &str) -> &str {
    match naive.rsplit_once('.') {
        Some((head, frac)) if !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()) => head,
        _ => naive,
    }
}
