use std::ops::Index;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses the `published_at` field of a post.
///
/// Accepts RFC 3339 (`2025-05-27T10:00:00Z`, offsets are dropped after
/// conversion to UTC), `2025-05-27 10:00:00[.000]`, `2025-05-27T10:00:00`
/// and a bare `2025-05-27`.
pub fn parse_published_at(buf: &str) -> Result<NaiveDateTime, String> {
    lazy_static! {
        static ref DATE_TIME_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[ T](\d{1,2}):(\d{1,2})(?::(\d{1,2}))?(?:\.\d+)?)?$"
        ).unwrap();
    }

    let buf = buf.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf) {
        return Ok(date_time.naive_utc());
    }

    let Some(caps) = DATE_TIME_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);
    let opt_u32 = |idx: usize| caps.get(idx).map_or(Ok(0), |m| to_u32(m.as_str()));

    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = opt_u32(4)?;
    let mn: u32 = opt_u32(5)?;
    let s: u32 = opt_u32(6)?;

    let date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| format!("Invalid date {}", buf))?;
    let time = NaiveTime::from_hms_opt(h, mn, s)
        .ok_or_else(|| format!("Invalid time {}", buf))?;

    Ok(NaiveDateTime::new(date, time))
}

/// `May 27, 2025`
pub fn format_display_date(date_time: &NaiveDateTime) -> String {
    date_time.format("%B %-d, %Y").to_string()
}

/// Display form of a raw `published_at`. Values that can't be parsed are
/// shown as they came.
pub fn display_published_at(published_at: Option<&str>) -> String {
    match published_at {
        None => String::new(),
        Some(raw) => match parse_published_at(raw) {
            Ok(date_time) => format_display_date(&date_time),
            Err(_) => raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_published_at() {
        let date_time = parse_published_at("2017-09-10 10:42:32.123").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2017-09-10 10:42:32");

        let date_time = parse_published_at("2017-09-10T10:42:32").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2017-09-10 10:42:32");

        let date_time = parse_published_at("2025-05-27T23:30:00-02:00").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-05-28 01:30:00");

        let date_time = parse_published_at("2025-05-27").unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-05-27 00:00:00");
    }

    #[test]
    fn test_invalid_dates() {
        assert!(parse_published_at("yesterday").is_err());
        assert!(parse_published_at("2025-13-40").is_err());
        assert!(parse_published_at("").is_err());
    }

    #[test]
    fn test_display_published_at() {
        assert_eq!(display_published_at(Some("2025-05-27T00:00:00Z")), "May 27, 2025");
        assert_eq!(display_published_at(Some("2025-06-02 08:30:00")), "June 2, 2025");
        assert_eq!(display_published_at(Some("someday")), "someday");
        assert_eq!(display_published_at(None), "");
    }
}
