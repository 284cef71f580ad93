use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

pub fn format_offset(value: OffsetDateTime) -> String {
    value.format(&Rfc3339).unwrap_or_else(|_| value.to_string())
}

pub fn now_rfc3339() -> String {
    format_offset(now_utc())
}

pub fn days_from_now_rfc3339(days: i64) -> String {
    format_offset(now_utc() + Duration::days(days))
}

/// Parses a stored ISO timestamp. Unparseable values read as "no date".
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value.trim(), &Rfc3339).ok()
}

/// Calendar date part of a stored timestamp, as `YYYY-MM-DD`.
pub fn date_label(value: Option<&str>) -> Option<String> {
    let parsed = parse_timestamp(value?)?;
    Some(format!(
        "{:04}-{:02}-{:02}",
        parsed.year(),
        u8::from(parsed.month()),
        parsed.day()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, PrimitiveDateTime, Time, UtcOffset};

    #[test]
    fn format_offset_preserves_offset() {
        let date = Date::from_calendar_date(2025, time::Month::January, 2).unwrap();
        let time = Time::from_hms(10, 20, 30).unwrap();
        let utc = PrimitiveDateTime::new(date, time).assume_utc();
        let offset = UtcOffset::from_hms(3, 0, 0).unwrap();
        let shifted = utc.to_offset(offset);
        assert_eq!(format_offset(shifted), "2025-01-02T13:20:30+03:00");
    }

    #[test]
    fn parse_timestamp_accepts_browser_iso_strings() {
        let parsed = parse_timestamp("2025-03-04T05:06:07.890Z").expect("parse");
        assert_eq!(parsed.year(), 2025);
        assert_eq!(parsed.day(), 4);
    }

    #[test]
    fn date_label_handles_missing_and_invalid() {
        assert_eq!(date_label(None), None);
        assert_eq!(date_label(Some("not a date")), None);
        assert_eq!(date_label(Some("2025-12-01T00:00:00Z")), Some("2025-12-01".to_string()));
    }

    #[test]
    fn days_from_now_is_in_the_future() {
        let later = parse_timestamp(&days_from_now_rfc3339(3)).expect("parse");
        assert!(later > now_utc() + Duration::days(2));
    }
}
