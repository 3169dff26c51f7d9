//! Deadline normalisation: raw deadline strings into calendar dates.
//!
//! The extractor hands back deadlines exactly as written in the notice. This
//! module turns them into a [`NaiveDate`] on demand.
//!
//! # Supported notations
//!
//! Tried strictly in this order; the first shape that matches anywhere in the
//! string wins, even if a later shape would match earlier in the text.
//!
//! 1. `YYYY[-/년] M[-/월] D[일]` — `2024-12-25`, `2024/12/25`, `2024년 12월 25일`
//! 2. `M/D/YYYY` — US order, `12/25/2024`
//! 3. `M월 D일` — year omitted, defaults to the reference year
//! 4. `YYYY-M-D` — ISO; already covered by (1), kept for completeness
//! 5. `M/D` — year omitted, defaults to the reference year. Only a standalone
//!    pair with a month of 1 to 12; `24/12/25` is not read as month 24.
//!
//! # Month indexing
//!
//! Months are 1-based throughout (January = 1), both in the input and in
//! chrono. No offset is applied anywhere.
//!
//! # Out-of-range components
//!
//! Calendar correctness is not validated. Components roll over the way a
//! lenient date constructor does: month 13 is January of the next year,
//! `2/30` is early March, and day 0 is the last day of the previous month.
//! Only dates chrono cannot represent yield `None`.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use crate::pattern::UNKNOWN;

/// Which notation a deadline string was read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineShape {
    YearMonthDay,
    MonthDayYear,
    KoreanMonthDay,
    Iso,
    MonthDay,
}

/// Shapes in the order they are tried.
const SHAPES: [DeadlineShape; 5] = [
    DeadlineShape::YearMonthDay,
    DeadlineShape::MonthDayYear,
    DeadlineShape::KoreanMonthDay,
    DeadlineShape::Iso,
    DeadlineShape::MonthDay,
];

static SHAPE_PATTERNS: LazyLock<Vec<(DeadlineShape, Regex)>> = LazyLock::new(|| {
    SHAPES
        .iter()
        .map(|&shape| {
            let regex = Regex::new(shape.pattern())
                .unwrap_or_else(|e| panic!("invalid {shape} pattern: {e}"));
            (shape, regex)
        })
        .collect()
});

impl DeadlineShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YearMonthDay => "year_month_day",
            Self::MonthDayYear => "month_day_year",
            Self::KoreanMonthDay => "korean_month_day",
            Self::Iso => "iso",
            Self::MonthDay => "month_day",
        }
    }

    /// True when the notation carries no year.
    pub fn year_implied(&self) -> bool {
        matches!(self, Self::KoreanMonthDay | Self::MonthDay)
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::YearMonthDay => r"([0-9]{4})[-/년]\s*([0-9]{1,2})[-/월]\s*([0-9]{1,2})일?",
            Self::MonthDayYear => r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})",
            Self::KoreanMonthDay => r"([0-9]{1,2})월\s*([0-9]{1,2})일",
            Self::Iso => r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})",
            Self::MonthDay => r"(?:^|[^0-9/])([0-9]{1,2})/([0-9]{1,2})(?:/?$|[^0-9/])",
        }
    }

    /// `(year, month, day)` from a match of this shape's pattern.
    fn components(&self, caps: &Captures<'_>, reference_year: i32) -> Option<(i32, u32, u32)> {
        let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        match self {
            Self::YearMonthDay | Self::Iso => {
                Some((i32::try_from(num(1)?).ok()?, num(2)?, num(3)?))
            }
            Self::MonthDayYear => Some((i32::try_from(num(3)?).ok()?, num(1)?, num(2)?)),
            Self::KoreanMonthDay => Some((reference_year, num(1)?, num(2)?)),
            Self::MonthDay => {
                let month = num(1)?;
                (1..=12)
                    .contains(&month)
                    .then_some((reference_year, month, num(2)?))
            }
        }
    }
}

impl fmt::Display for DeadlineShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalised deadline and the notation it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedDeadline {
    pub date: NaiveDate,
    pub shape: DeadlineShape,
}

/// Normalise a deadline string, defaulting a missing year to the current local year.
pub fn parse_deadline_date(deadline: &str) -> Option<NaiveDate> {
    parse_deadline_date_on(deadline, Local::now().date_naive())
}

/// Normalise a deadline string against an explicit reference date.
pub fn parse_deadline_date_on(deadline: &str, today: NaiveDate) -> Option<NaiveDate> {
    parse_deadline(deadline, today).map(|p| p.date)
}

/// Normalise a deadline string, reporting which notation matched.
///
/// Returns `None` for empty input, for [`UNKNOWN`], and when no notation
/// matches.
pub fn parse_deadline(deadline: &str, today: NaiveDate) -> Option<ParsedDeadline> {
    let deadline = deadline.trim();
    if deadline.is_empty() || deadline == UNKNOWN {
        return None;
    }

    for (shape, regex) in SHAPE_PATTERNS.iter() {
        let Some(caps) = regex.captures(deadline) else {
            continue;
        };
        let (year, month, day) = shape.components(&caps, today.year())?;
        let date = lenient_date(year, month, day)?;
        debug!(deadline, %shape, %date, "deadline normalised");
        return Some(ParsedDeadline {
            date,
            shape: *shape,
        });
    }

    debug!(deadline, "deadline matched no known notation");
    None
}

/// Build a date from 1-based `month` and `day`, carrying overflow forward.
fn lenient_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    // rem_euclid(12) is always in 0..12.
    let month = months.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(TimeDelta::days(i64::from(day) - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        ymd(2026, 10, 16)
    }

    /// Helper: assert each input normalises to the expected date and shape.
    fn assert_parses(cases: &[(&str, NaiveDate, DeadlineShape)]) {
        for (input, date, shape) in cases {
            let parsed = parse_deadline(input, today())
                .unwrap_or_else(|| panic!("expected {input:?} to parse"));
            assert_eq!(parsed.date, *date, "date for {input:?}");
            assert_eq!(parsed.shape, *shape, "shape for {input:?}");
        }
    }

    #[test]
    fn korean_full_date() {
        assert_eq!(
            parse_deadline_date_on("2024년 12월 25일", today()),
            Some(ymd(2024, 12, 25))
        );
    }

    #[test]
    fn us_slash_date() {
        assert_eq!(
            parse_deadline_date_on("12/25/2024", today()),
            Some(ymd(2024, 12, 25))
        );
    }

    #[test]
    fn korean_month_day_uses_reference_year() {
        assert_eq!(
            parse_deadline_date_on("12월 25일", today()),
            Some(ymd(2026, 12, 25))
        );
        assert_eq!(
            parse_deadline_date_on("3월5일", ymd(2031, 1, 1)),
            Some(ymd(2031, 3, 5))
        );
    }

    #[test]
    fn korean_month_day_uses_current_year_by_default() {
        let year = Local::now().year();
        let parsed = parse_deadline_date("12월 25일").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (year, 12, 25));
    }

    #[test]
    fn shapes_reported() {
        assert_parses(&[
            ("2024-12-25", ymd(2024, 12, 25), DeadlineShape::YearMonthDay),
            ("2024/1/5", ymd(2024, 1, 5), DeadlineShape::YearMonthDay),
            ("2024년 3월 1일까지", ymd(2024, 3, 1), DeadlineShape::YearMonthDay),
            ("1/5/2025", ymd(2025, 1, 5), DeadlineShape::MonthDayYear),
            ("11월 3일 자정", ymd(2026, 11, 3), DeadlineShape::KoreanMonthDay),
            ("3/7", ymd(2026, 3, 7), DeadlineShape::MonthDay),
            ("12/25/", ymd(2026, 12, 25), DeadlineShape::MonthDay),
        ]);
    }

    #[test]
    fn truncated_year_slash_date_is_no_match() {
        assert_eq!(parse_deadline("24/12/25", today()), None);
        assert_eq!(parse_deadline("13/5", today()), None);
        assert_eq!(parse_deadline("0/5", today()), None);
        assert_eq!(parse_deadline("1/2/3", today()), None);
    }

    #[test]
    fn month_day_inside_text() {
        assert_parses(&[("마감 5/20 자정", ymd(2026, 5, 20), DeadlineShape::MonthDay)]);
    }

    #[test]
    fn first_shape_in_order_wins_over_position() {
        // The US date appears first in the text, but the year-month-day
        // notation is tried first.
        let parsed = parse_deadline("12/25/2024 또는 2025년 1월 3일", today()).unwrap();
        assert_eq!(parsed.date, ymd(2025, 1, 3));
        assert_eq!(parsed.shape, DeadlineShape::YearMonthDay);
    }

    #[test]
    fn unknown_and_empty_are_no_match() {
        assert_eq!(parse_deadline_date_on(UNKNOWN, today()), None);
        assert_eq!(parse_deadline_date_on("", today()), None);
        assert_eq!(parse_deadline_date_on("   ", today()), None);
        assert_eq!(parse_deadline_date("알 수 없음"), None);
        assert_eq!(parse_deadline_date(""), None);
    }

    #[test]
    fn unrecognised_text_is_no_match() {
        assert_eq!(parse_deadline_date_on("다음 주 금요일", today()), None);
        assert_eq!(parse_deadline_date_on("25.12.2024", today()), None);
    }

    #[test]
    fn day_overflow_rolls_into_next_month() {
        assert_eq!(parse_deadline_date_on("2024-02-30", today()), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_deadline_date_on("2023-02-30", today()), Some(ymd(2023, 3, 2)));
        assert_eq!(parse_deadline_date_on("2024-04-31", today()), Some(ymd(2024, 5, 1)));
    }

    #[test]
    fn month_overflow_rolls_into_next_year() {
        assert_eq!(parse_deadline_date_on("2024-13-01", today()), Some(ymd(2025, 1, 1)));
        assert_eq!(parse_deadline_date_on("13월 2일", today()), Some(ymd(2027, 1, 2)));
    }

    #[test]
    fn zero_components_step_back() {
        assert_eq!(parse_deadline_date_on("2024-03-00", today()), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_deadline_date_on("2024-00-10", today()), Some(ymd(2023, 12, 10)));
    }

    #[test]
    fn lenient_date_matches_strict_constructor_in_range() {
        for (y, m, d) in [(2024, 1, 1), (2024, 2, 29), (1999, 12, 31), (2030, 6, 15)] {
            assert_eq!(lenient_date(y, m, d), NaiveDate::from_ymd_opt(y, m, d));
        }
    }

    #[test]
    fn shape_year_implied() {
        assert!(DeadlineShape::KoreanMonthDay.year_implied());
        assert!(DeadlineShape::MonthDay.year_implied());
        assert!(!DeadlineShape::YearMonthDay.year_implied());
        assert!(!DeadlineShape::MonthDayYear.year_implied());
    }
}
