//! # birthfate
//!
//! Birthdate parsing plus the small card-flip fortune reading built on top of it.
//!
//! The core is [`BirthDate`]: a free-form birthdate string is matched against six accepted
//! [layouts](DateLayout), in priority order, and the first match is validated as a real
//! Gregorian day between [`MIN_YEAR`] and the current year.
//!
//! ```
//! use birthfate::BirthDate;
//!
//! let a: BirthDate = "2000-11-11".parse().unwrap();
//! let b: BirthDate = "11/11/2000".parse().unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "2000-11-11");
//!
//! assert!("2023-04-31".parse::<BirthDate>().is_err());
//! assert!(birthfate::parse_birthdate(Some("   ")).is_none());
//! ```
//!
//! Around it sit the luck scores ([`luck_score`]), the card [`Deck`], the final
//! [`FinalFate`] aggregation and the [`FateSession`] that ties them together.

mod advice;
mod consts;
mod deck;
mod fate;
mod layout;
mod luck;
mod prelude;
mod session;
mod types;

pub use consts::*;
pub use deck::{Deck, DeckError, TarotCard};
pub use fate::{CategoryScores, FateTier, FinalFate};
pub use layout::{DateLayout, FieldOrder, LayoutFields, match_layout};
pub use luck::luck_score;
pub use session::{FateSession, Reveal, SessionError};
pub use types::{Category, Element, Gender, LuckScore, UnknownToken};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate};
use std::str::FromStr;

/// A validated birthdate: a real Gregorian day in `MIN_YEAR..=current year`.
///
/// Only produced by a successful parse, so holding one is proof of validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "date.year()", "date.month()", "date.day()")]
pub struct BirthDate {
    date: NaiveDate,
}

/// Why a birthdate was rejected.
///
/// Callers normally only care that it *was* rejected; the variants exist for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Unrecognized date layout: {_0}")]
    UnrecognizedLayout(String),
    #[display(fmt = "Invalid year: {year} (must be {}-{max})", MIN_YEAR)]
    YearOutOfRange { year: i32, max: i32 },
    #[display(fmt = "Invalid date {year}-{month:02}-{day:02}")]
    ImpossibleDate { year: i32, month: u32, day: u32 },
}

impl std::error::Error for ParseError {}

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Parses a birthdate, collapsing every kind of rejection (including absent input) to `None`.
pub fn parse_birthdate(raw: Option<&str>) -> Option<BirthDate> {
    raw.and_then(|raw| raw.parse().ok())
}

impl BirthDate {
    /// Parses `raw` against the current local year.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first check that failed.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::parse_as_of(raw, current_year())
    }

    /// Parses `raw` treating `current_year` as the latest acceptable year.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first check that failed.
    pub fn parse_as_of(raw: &str, current_year: i32) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let Some((layout, fields)) = match_layout(trimmed) else {
            tracing::debug!(input = trimmed, "no birthdate layout matched");
            return Err(ParseError::UnrecognizedLayout(trimmed.to_owned()));
        };
        tracing::trace!(input = trimmed, %layout, "birthdate layout matched");

        Self::from_ymd_as_of(fields.year, fields.month, fields.day, current_year).inspect_err(
            |err| tracing::debug!(input = trimmed, %layout, %err, "birthdate rejected"),
        )
    }

    /// Validates explicit components against `current_year`.
    ///
    /// # Errors
    /// `YearOutOfRange` outside `MIN_YEAR..=current_year`, `ImpossibleDate` when the
    /// components do not name a real day.
    pub fn from_ymd_as_of(
        year: i32,
        month: u32,
        day: u32,
        current_year: i32,
    ) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=current_year).contains(&year) {
            return Err(ParseError::YearOutOfRange {
                year,
                max: current_year,
            });
        }
        // chrono refuses components that would roll over (Apr 31, month 13, day 0)
        // rather than normalizing them into a neighbouring month.
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ParseError::ImpossibleDate { year, month, day })?;
        Ok(Self { date })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub const fn as_naive_date(&self) -> NaiveDate {
        self.date
    }

    /// Whole days between 1970-01-01 and this date; negative before the epoch.
    pub fn days_since_epoch(&self) -> i64 {
        i64::from(self.date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
    }
}

impl FromStr for BirthDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(value: BirthDate) -> Self {
        value.date
    }
}

impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const AS_OF: i32 = 2026;

    fn ymd(date: &BirthDate) -> (i32, u32, u32) {
        (date.year(), date.month(), date.day())
    }

    #[rstest]
    #[case("2000-11-11")]
    #[case("2000/11/11")]
    #[case("11/11/2000")]
    fn test_same_date_in_every_layout_family(#[case] input: &str) {
        let date = BirthDate::parse_as_of(input, AS_OF).unwrap();
        assert_eq!(ymd(&date), (2000, 11, 11));
    }

    #[rstest]
    #[case("2000-1-5")]
    #[case("1/5/2000")]
    #[case("2000/1/5")]
    #[case("2000-01-5")]
    #[case("01/5/2000")]
    fn test_lenient_single_digit_forms(#[case] input: &str) {
        let date = BirthDate::parse_as_of(input, AS_OF).unwrap();
        assert_eq!(ymd(&date), (2000, 1, 5));
    }

    #[rstest]
    #[case("2000-02-30")]
    #[case("2023-04-31")]
    #[case("1999-13-01")]
    #[case("2000-00-10")]
    #[case("2000-10-00")]
    #[case("2000-1-32")]
    #[case("2/29/2023")]
    #[case("1900/02/29")]
    #[case("13/01/2000")]
    #[case("06/31/2001")]
    fn test_impossible_calendar_dates(#[case] input: &str) {
        let result = BirthDate::parse_as_of(input, AS_OF);
        assert!(
            matches!(result, Err(ParseError::ImpossibleDate { .. })),
            "{input:?} gave {result:?}"
        );
    }

    #[test]
    fn test_leap_days() {
        assert_eq!(
            ymd(&BirthDate::parse_as_of("2000-02-29", AS_OF).unwrap()),
            (2000, 2, 29)
        );
        assert_eq!(
            ymd(&BirthDate::parse_as_of("2/29/2024", AS_OF).unwrap()),
            (2024, 2, 29)
        );
        // 1900 is divisible by 100 but not 400
        assert!(BirthDate::parse_as_of("1900-02-29", AS_OF).is_err());
    }

    #[test]
    fn test_year_bounds_as_of() {
        assert!(BirthDate::parse_as_of("1900-01-01", AS_OF).is_ok());
        assert!(BirthDate::parse_as_of("2026-12-31", AS_OF).is_ok());

        let result = BirthDate::parse_as_of("1899-12-31", AS_OF);
        assert_eq!(
            result,
            Err(ParseError::YearOutOfRange {
                year: 1899,
                max: AS_OF
            })
        );

        let result = BirthDate::parse_as_of("2027-01-01", AS_OF);
        assert!(matches!(
            result,
            Err(ParseError::YearOutOfRange { year: 2027, .. })
        ));
    }

    #[test]
    fn test_year_bounds_against_clock() {
        let this_year = current_year();
        assert!(BirthDate::parse("1899-01-01").is_err());
        assert!(BirthDate::parse(&format!("{}-01-01", this_year + 1)).is_err());
        assert!(BirthDate::parse(&format!("{this_year}-01-01")).is_ok());
    }

    #[test]
    fn test_year_checked_before_calendar() {
        // out of range and impossible: the year check wins
        let result = BirthDate::parse_as_of("1899-02-30", AS_OF);
        assert!(matches!(result, Err(ParseError::YearOutOfRange { .. })));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_empty_input(#[case] input: &str) {
        assert_eq!(
            BirthDate::parse_as_of(input, AS_OF),
            Err(ParseError::EmptyInput)
        );
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2000")]
    #[case("2000-11")]
    #[case("11-11-2000")]
    #[case("2000.11.11")]
    #[case("2000-11/11")]
    #[case("2000 11 11")]
    #[case("11/11/00")]
    #[case("２０００-11-11")]
    fn test_unrecognized_layouts(#[case] input: &str) {
        let result = BirthDate::parse_as_of(input, AS_OF);
        assert!(
            matches!(result, Err(ParseError::UnrecognizedLayout(_))),
            "{input:?} gave {result:?}"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let date = BirthDate::parse_as_of("  \t2000-11-11 \n", AS_OF).unwrap();
        assert_eq!(ymd(&date), (2000, 11, 11));
    }

    #[test]
    fn test_collapsed_api() {
        assert!(parse_birthdate(None).is_none());
        assert!(parse_birthdate(Some("")).is_none());
        assert!(parse_birthdate(Some("  ")).is_none());
        assert!(parse_birthdate(Some("2000-02-30")).is_none());
        assert!(parse_birthdate(Some("1899-01-01")).is_none());
        assert_eq!(
            parse_birthdate(Some("11/11/2000")),
            parse_birthdate(Some("2000-11-11"))
        );
        assert!(parse_birthdate(Some("2000-11-11")).is_some());
    }

    #[test]
    fn test_every_rendering_agrees() {
        // every third day of the accepted range, plus all of a leap year
        let first = NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(AS_OF, 12, 31).unwrap();
        let leap_year = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .iter_days()
            .take(366);
        let sampled = first.iter_days().take_while(|d| *d <= last).step_by(3);

        for date in sampled.chain(leap_year) {
            let (y, m, d) = (date.year(), date.month(), date.day());
            let renderings = [
                format!("{y:04}-{m:02}-{d:02}"),
                format!("{y}-{m}-{d}"),
                format!("{y:04}/{m:02}/{d:02}"),
                format!("{y}/{m}/{d}"),
                format!("{m:02}/{d:02}/{y:04}"),
                format!("{m}/{d}/{y}"),
            ];
            for text in &renderings {
                let parsed = BirthDate::parse_as_of(text, AS_OF)
                    .unwrap_or_else(|e| panic!("{text:?} should parse: {e}"));
                assert_eq!(parsed.as_naive_date(), date, "{text:?}");
            }
        }
    }

    #[test]
    fn test_from_ymd_as_of() {
        let date = BirthDate::from_ymd_as_of(1991, 8, 15, AS_OF).unwrap();
        assert_eq!(date.to_string(), "1991-08-15");
        assert!(BirthDate::from_ymd_as_of(1991, 2, 29, AS_OF).is_err());
        assert!(BirthDate::from_ymd_as_of(1991, 0, 1, AS_OF).is_err());
    }

    #[test]
    fn test_display_is_zero_padded() {
        let date = BirthDate::parse_as_of("1/5/1901", AS_OF).unwrap();
        assert_eq!(date.to_string(), "1901-01-05");
    }

    #[test]
    fn test_days_since_epoch() {
        let epoch = BirthDate::parse_as_of("1970-01-01", AS_OF).unwrap();
        assert_eq!(epoch.days_since_epoch(), 0);
        let next = BirthDate::parse_as_of("1970-01-02", AS_OF).unwrap();
        assert_eq!(next.days_since_epoch(), 1);
        let before = BirthDate::parse_as_of("1969-12-31", AS_OF).unwrap();
        assert_eq!(before.days_since_epoch(), -1);
    }

    #[test]
    fn test_ordering() {
        let a = BirthDate::parse_as_of("1999-12-31", AS_OF).unwrap();
        let b = BirthDate::parse_as_of("1/1/2000", AS_OF).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
        assert_eq!(
            ParseError::YearOutOfRange {
                year: 1899,
                max: 2026
            }
            .to_string(),
            "Invalid year: 1899 (must be 1900-2026)"
        );
        assert_eq!(
            ParseError::ImpossibleDate {
                year: 2023,
                month: 4,
                day: 31
            }
            .to_string(),
            "Invalid date 2023-04-31"
        );
        assert_eq!(
            ParseError::UnrecognizedLayout("abc".to_owned()).to_string(),
            "Unrecognized date layout: abc"
        );
    }

    #[test]
    fn test_serde() {
        let date = BirthDate::parse("2000-11-11").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2000-11-11""#);
        let parsed: BirthDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        // deserialization goes through the same layouts
        let parsed: BirthDate = serde_json::from_str(r#""1/5/2000""#).unwrap();
        assert_eq!(parsed.to_string(), "2000-01-05");
    }

    #[test]
    fn test_serde_rejections() {
        assert!(serde_json::from_str::<BirthDate>(r#""2000-02-30""#).is_err());
        assert!(serde_json::from_str::<BirthDate>(r#""""#).is_err());
        // non-string input
        assert!(serde_json::from_str::<BirthDate>("20001111").is_err());
        assert!(serde_json::from_str::<BirthDate>("null").is_err());
        assert!(serde_json::from_str::<BirthDate>("[2000, 11, 11]").is_err());
    }
}
