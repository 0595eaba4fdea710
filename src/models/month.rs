//! Calendar month values
//!
//! A month is identified by a four digit `MMYY` code, e.g. `"0925"` for
//! September 2025. The two year digits always map into 2000-2099, so every
//! value this module hands out lies inside that window.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First year representable by an `MMYY` code
pub const MIN_YEAR: i32 = 2000;

/// Last year representable by an `MMYY` code
pub const MAX_YEAR: i32 = 2099;

/// A single calendar month between January 2000 and December 2099
///
/// Values are immutable; arithmetic returns new instances. Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthValue {
    // Field order drives the derived ordering: year first, then month.
    year: i32,
    month: u32,
}

impl MonthValue {
    /// January 2000
    pub const EARLIEST: MonthValue = MonthValue {
        year: MIN_YEAR,
        month: 1,
    };

    /// December 2099
    pub const LATEST: MonthValue = MonthValue {
        year: MAX_YEAR,
        month: 12,
    };

    /// Parse a four digit `MMYY` code
    pub fn parse(code: &str) -> Result<Self, MonthParseError> {
        if code.len() != 4 {
            return Err(MonthParseError::InvalidLength(code.to_string()));
        }
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MonthParseError::NonDigit(code.to_string()));
        }

        let month: u32 = code[..2]
            .parse()
            .map_err(|_| MonthParseError::NonDigit(code.to_string()))?;
        let year_offset: i32 = code[2..]
            .parse()
            .map_err(|_| MonthParseError::NonDigit(code.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Ok(Self {
            year: MIN_YEAR + year_offset,
            month,
        })
    }

    /// Build a month from a full year and a 1-based month number
    ///
    /// Returns `None` if the month is not in 1-12 or the year falls outside
    /// the 2000-2099 window.
    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The current calendar month (local time)
    ///
    /// A system clock outside the encodable window pins to its nearest edge.
    pub fn now() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year().clamp(MIN_YEAR, MAX_YEAR),
            month: today.month(),
        }
    }

    /// Full year, e.g. 2025
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month `n` months later (earlier if `n` is negative)
    ///
    /// Returns `None` when the result would leave the 2000-2099 window.
    pub fn plus_months(&self, n: i32) -> Option<Self> {
        let index = self.index() + i64::from(n);
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) + 1;

        let year = i32::try_from(year).ok()?;
        Self::from_year_month(year, month as u32)
    }

    /// The following month, if still inside the window
    pub fn next(&self) -> Option<Self> {
        self.plus_months(1)
    }

    /// The preceding month, if still inside the window
    pub fn prev(&self) -> Option<Self> {
        self.plus_months(-1)
    }

    /// Strictly earlier than `other`
    pub fn is_before(&self, other: &MonthValue) -> bool {
        self < other
    }

    /// Strictly later than `other`
    pub fn is_after(&self, other: &MonthValue) -> bool {
        self > other
    }

    /// Number of months from `self` to `other` (negative if `other` is earlier)
    pub fn months_until(&self, other: &MonthValue) -> i64 {
        other.index() - self.index()
    }

    /// The `MMYY` code; parses back to the same value
    pub fn canonical_form(&self) -> String {
        format!("{:02}{:02}", self.month, self.year - MIN_YEAR)
    }

    /// Display-only form such as "September 2025"
    pub fn human_form(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.canonical_form())
    }

    /// The first calendar day of this month
    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

impl fmt::Display for MonthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.canonical_form())
    }
}

impl FromStr for MonthValue {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim())
    }
}

impl TryFrom<String> for MonthValue {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthValue> for String {
    fn from(value: MonthValue) -> Self {
        value.canonical_form()
    }
}

/// Error type for month code parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidLength(String),
    NonDigit(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidLength(s) => {
                write!(f, "Month code must be exactly 4 digits (MMYY): '{}'", s)
            }
            MonthParseError::NonDigit(s) => {
                write!(f, "Month code must contain only digits (MMYY): '{}'", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn month(code: &str) -> MonthValue {
        MonthValue::parse(code).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let m = month("0925");
        assert_eq!(m.month(), 9);
        assert_eq!(m.year(), 2025);

        let m = month("0100");
        assert_eq!(m.year(), 2000);
        assert_eq!(month("1299").year(), 2099);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            MonthValue::parse("925"),
            Err(MonthParseError::InvalidLength("925".into()))
        );
        assert!(MonthValue::parse("092025").is_err());
        assert!(MonthValue::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            MonthValue::parse("09a5"),
            Err(MonthParseError::NonDigit("09a5".into()))
        );
        assert!(MonthValue::parse("-925").is_err());
        assert!(MonthValue::parse("+925").is_err());
    }

    #[test]
    fn test_parse_rejects_month_out_of_range() {
        assert_eq!(
            MonthValue::parse("0025"),
            Err(MonthParseError::InvalidMonth(0))
        );
        assert_eq!(
            MonthValue::parse("1325"),
            Err(MonthParseError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_from_str_trims() {
        let m: MonthValue = " 0925 ".parse().unwrap();
        assert_eq!(m, month("0925"));
    }

    #[test]
    fn test_ordering() {
        let aug = month("0825");
        let sep = month("0925");
        let jan_next = month("0126");

        assert!(aug.is_before(&sep));
        assert!(sep.is_after(&aug));
        assert!(sep.is_before(&jan_next));
        assert!(!sep.is_before(&sep));
        assert!(!sep.is_after(&sep));
        assert!(month("1224") < month("0125"));
    }

    #[test]
    fn test_plus_months_across_years() {
        assert_eq!(month("1124").plus_months(3), Some(month("0225")));
        assert_eq!(month("0225").plus_months(-3), Some(month("1124")));
        assert_eq!(month("0625").plus_months(24), Some(month("0627")));
        assert_eq!(month("0625").plus_months(0), Some(month("0625")));
    }

    #[test]
    fn test_plus_months_bounded_by_window() {
        assert_eq!(month("1299").next(), None);
        assert_eq!(month("0100").prev(), None);
        assert_eq!(month("0150").plus_months(i32::MAX), None);
        assert_eq!(month("0150").plus_months(i32::MIN), None);
    }

    #[test]
    fn test_window_constants() {
        assert_eq!(MonthValue::EARLIEST, month("0100"));
        assert_eq!(MonthValue::LATEST, month("1299"));
    }

    #[test]
    fn test_months_until() {
        assert_eq!(month("0825").months_until(&month("1125")), 3);
        assert_eq!(month("1125").months_until(&month("0825")), -3);
        assert_eq!(month("0825").months_until(&month("0825")), 0);
    }

    #[test]
    fn test_from_year_month() {
        assert_eq!(MonthValue::from_year_month(2025, 9), Some(month("0925")));
        assert_eq!(MonthValue::from_year_month(2025, 13), None);
        assert_eq!(MonthValue::from_year_month(1999, 12), None);
        assert_eq!(MonthValue::from_year_month(2100, 1), None);
    }

    #[test]
    fn test_now_matches_clock() {
        let today = Local::now().date_naive();
        let now = MonthValue::now();
        assert_eq!(now.month(), today.month());
        assert_eq!(now.canonical_form().len(), 4);
    }

    #[test]
    fn test_human_form() {
        assert_eq!(month("0925").human_form(), "September 2025");
        assert_eq!(month("0100").human_form(), "January 2000");
        assert_eq!(month("1299").human_form(), "December 2099");
    }

    #[test]
    fn test_first_day() {
        let day = month("0226").first_day().unwrap();
        assert_eq!((day.year(), day.month(), day.day()), (2026, 2, 1));
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(month("0307").to_string(), "0307");
        assert_eq!(format!("[{:<6}]", month("0307")), "[0307  ]");
    }

    #[test]
    fn test_serialization() {
        let m = month("0925");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"0925\"");

        let deserialized: MonthValue = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, m);

        assert!(serde_json::from_str::<MonthValue>("\"1325\"").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_canonical_form_round_trips(m in 1u32..=12, y in 0u32..=99) {
            let code = format!("{:02}{:02}", m, y);
            let value = MonthValue::parse(&code).unwrap();
            prop_assert_eq!(value.canonical_form(), code);
        }

        #[test]
        fn prop_offsets_cancel(m in 1u32..=12, y in 0i32..=98, n in -24i32..=24) {
            let value = MonthValue::from_year_month(MIN_YEAR + y, m).unwrap();
            prop_assert_eq!(value.plus_months(0), Some(value));
            if let Some(moved) = value.plus_months(n) {
                prop_assert_eq!(moved.plus_months(-n), Some(value));
                prop_assert_eq!(value.months_until(&moved), i64::from(n));
            }
        }
    }
}
