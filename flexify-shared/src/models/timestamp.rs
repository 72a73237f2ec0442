use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use yew::{Html, ToHtml, html};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wall-clock label in the browser's local time zone, e.g. `09:05 PM`.
    #[must_use]
    pub fn clock_label(&self) -> String {
        format_clock(&self.0.with_timezone(&Local))
    }
}

/// Formats a time as a two-digit 12-hour clock with an AM/PM marker.
pub fn format_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%I:%M %p").to_string()
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.clock_label() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn test_clock_formatting() {
        let morning = Utc.with_ymd_and_hms(2025, 3, 8, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&morning), "09:05 AM");

        let evening = Utc.with_ymd_and_hms(2025, 3, 8, 21, 30, 0).unwrap();
        assert_eq!(format_clock(&evening), "09:30 PM");

        let midnight = Utc.with_ymd_and_hms(2025, 3, 8, 0, 0, 0).unwrap();
        assert_eq!(format_clock(&midnight), "12:00 AM");
    }

    #[test]
    fn test_clock_respects_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let time = Utc
            .with_ymd_and_hms(2025, 3, 8, 11, 15, 0)
            .unwrap()
            .with_timezone(&offset);
        assert_eq!(format_clock(&time), "01:15 PM");
    }

    #[test]
    fn test_timestamp_serialization() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap();
        let serialized = serde_json::to_string(&Timestamp(dt)).unwrap();
        assert_eq!(serialized, "\"2025-03-08T14:30:00Z\"");
    }

    #[test]
    fn test_timestamp_ordering() {
        let earlier = Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap());
        let later = Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 1).unwrap());
        assert!(earlier < later);
    }
}
