use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 日期格式化可接受的輸入
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// 文字：ISO-8601 日期、RFC 3339 / RFC 2822 時間，或 `January 5, 2024`
    Text(String),
    /// Unix epoch 起算的毫秒數
    TimestampMillis(i64),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::TimestampMillis(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::DateTime(value.and_utc())
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::DateTime(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpStatus(pub u16);

impl HttpStatus {
    pub fn is_ok(self) -> bool {
        (200..=299).contains(&self.0)
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 單次登出觸發的結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LogoutOutcome {
    Redirected { location: String },
    /// 伺服器回應非 2xx；不導頁、不記錄
    Rejected { status: HttpStatus },
    TransportFailed { message: String },
}

impl LogoutOutcome {
    pub fn is_redirected(&self) -> bool {
        matches!(self, LogoutOutcome::Redirected { .. })
    }
}
