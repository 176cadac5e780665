use crate::domain::model::DateInput;
use crate::utils::error::{PageError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// [`format_date`] 無法解析時回傳的字串

pub const INVALID_DATE: &str = "Invalid Date";

const MILLIS_PER_MINUTE: u64 = 60_000;

// 帶數字時區 (+0000) 的時間格式
const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%Y/%m/%d"];

/// 轉成美式英文長日期，例如 `January 5, 2024`
///
/// 一律以 UTC 輸出；沒有時區的文字視為 UTC。
/// 不會失敗：無法解析時回傳 [`INVALID_DATE`]。
pub fn format_date(input: impl Into<DateInput>) -> String {
    match to_utc(input.into()) {
        Some(date_time) => date_time.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn to_utc(input: DateInput) -> Option<DateTime<Utc>> {
    match input {
        DateInput::Text(text) => parse_date_text(&text),
        DateInput::TimestampMillis(millis) => DateTime::<Utc>::from_timestamp_millis(millis),
        DateInput::Date(date) => date.and_hms_opt(0, 0, 0).map(|d| d.and_utc()),
        DateInput::DateTime(date_time) => Some(date_time),
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.with_timezone(&Utc));
    }
    if let Ok(date_time) = DateTime::parse_from_rfc2822(text) {
        return Some(date_time.with_timezone(&Utc));
    }
    if let Some(date_time) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
    {
        return Some(date_time.with_timezone(&Utc));
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|d| d.and_utc())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|d| d.and_utc())
        })
        .or_else(|| parse_reduced_iso_date(text))
}

/// ISO-8601 簡化格式：`2024` 或 `2024-01`，缺少的月、日補 1
fn parse_reduced_iso_date(text: &str) -> Option<DateTime<Utc>> {
    static REDUCED: OnceLock<Regex> = OnceLock::new();
    let re = REDUCED.get_or_init(|| {
        Regex::new(r"^(\d{4})(?:-(\d{2}))?$").expect("reduced date pattern is valid")
    });

    let caps = re.captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
}

/// 滿一小時輸出 `"{h}h {m}m"`，否則 `"{m}m"`；不足一分鐘的部分捨去
pub fn format_duration(milliseconds: u64) -> String {
    let total_minutes = milliseconds / MILLIS_PER_MINUTE;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", total_minutes)
    }
}

/// 解析毫秒數字串：小數無條件捨去，負數、非有限值與非數字一律拒絕
pub fn parse_duration_ms(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| PageError::InvalidInput {
        message: format!("'{}' is not a number of milliseconds", text),
    })?;

    if !value.is_finite() {
        return Err(PageError::InvalidInput {
            message: format!("'{}' is not a finite number of milliseconds", text),
        });
    }
    if value < 0.0 {
        return Err(PageError::InvalidInput {
            message: format!("duration cannot be negative: {}", text),
        });
    }
    if value >= u64::MAX as f64 {
        return Err(PageError::InvalidInput {
            message: format!("duration is too large: {}", text),
        });
    }

    Ok(value.floor() as u64)
}

pub fn format_duration_str(text: &str) -> Result<String> {
    parse_duration_ms(text).map(format_duration)
}
