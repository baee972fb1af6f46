//! Spoken date and time formatting

use chrono::{DateTime, Local, TimeZone};

/// Long-form en-US style used for spoken timestamps, e.g.
/// "Friday, March 15, 2024 at 02:30:05 PM".
const SPOKEN_FORMAT: &str = "%A, %B %-d, %Y at %I:%M:%S %p";

/// Format a timestamp the way it should be read aloud.
pub fn spoken<Tz>(at: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(SPOKEN_FORMAT).to_string()
}

/// Format the current local time for speech.
pub fn spoken_now() -> String {
    spoken(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn spoken_format_reads_like_a_sentence() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 5).unwrap();
        assert_eq!(spoken(at), "Friday, March 15, 2024 at 02:30:05 PM");
    }

    #[test]
    fn morning_hours_use_twelve_hour_clock() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 5, 0).unwrap();
        assert_eq!(spoken(at), "Monday, January 1, 2024 at 12:05:00 AM");
    }

    #[test]
    fn single_digit_days_are_not_padded() {
        let at = Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap();
        assert_eq!(spoken(at), "Thursday, July 4, 2024 at 12:00:00 PM");
    }
}
