//! The `YY-M-D` day stamps of the record format, e.g. `01-1-2` for 2001-01-02.
//!
//! Two-digit years from 69 map to the 1900s, lower ones to the 2000s.

use jiff::Timestamp;
use jiff::civil::Date;
use timeserie::calendar::{date_of, day_date};

/// Parses a `YY-M-D` stamp into its UTC midnight. `None` if malformed or not a real day.
pub fn parse_day(s: &str) -> Option<Timestamp> {
    let mut parts = s.split('-');
    let (yy, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || yy.len() != 2 {
        return None;
    }
    let yy: i16 = digits(yy)?;
    let year = if yy >= 69 { 1900 + yy } else { 2000 + yy };
    day_date(year, digits(m)?, digits(d)?).ok()
}

/// Formats the UTC day of `t` as `YY-M-D`.
pub fn format_day(t: Timestamp) -> String {
    let d: Date = date_of(t);
    format!("{:02}-{}-{}", d.year().rem_euclid(100), d.month(), d.day())
}

// One or two ASCII digits.
fn digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
