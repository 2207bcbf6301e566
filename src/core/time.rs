//! Time formatting helpers.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::fmt::Display;

const RFC_3339_FORMAT: &str = "%FT%T%:z";

pub trait TimeExt {
    /// Second-precision RFC 3339 timestamp with a `+HH:MM` offset.
    fn rfc_3339(&self) -> String;
}

impl<Tz> TimeExt for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn rfc_3339(&self) -> String {
        self.format(RFC_3339_FORMAT).to_string()
    }
}

/// Current time with a zero offset.
#[deprecated(note = "use `chrono::Utc::now` instead")]
pub fn utc_now() -> DateTime<FixedOffset> {
    crate::log_deprecated!("time::utc_now", "chrono::Utc::now");
    Utc::now().fixed_offset()
}
