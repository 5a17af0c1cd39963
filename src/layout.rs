use std::sync::OnceLock;

use regex::Regex;

use crate::prelude::*;

/// Order in which a layout's three captured groups map onto a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOrder {
    /// `year, month, day`
    YearMonthDay,
    /// `month, day, year`
    MonthDayYear,
}

/// One accepted textual shape for a birthdate.
///
/// Layouts are tried in the order of [`DateLayout::ALL`] and the first one whose pattern
/// matches the whole (trimmed) input wins. Strict layouts require zero-padded two-digit
/// months and days; lenient ones take one or two digits. Each lenient layout accepts
/// everything its strict twin does, so strictness only decides which layout gets reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateLayout {
    #[display(fmt = "YYYY-MM-DD (strict)")]
    IsoStrict,
    #[display(fmt = "YYYY-MM-DD (lenient)")]
    IsoLenient,
    #[display(fmt = "YYYY/MM/DD (strict)")]
    SlashYmdStrict,
    #[display(fmt = "YYYY/MM/DD (lenient)")]
    SlashYmdLenient,
    #[display(fmt = "MM/DD/YYYY (strict)")]
    SlashMdyStrict,
    #[display(fmt = "MM/DD/YYYY (lenient)")]
    SlashMdyLenient,
}

/// The three numeric fields captured by a layout, already put in year/month/day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateLayout {
    /// Every layout, in matching priority order.
    pub const ALL: [Self; 6] = [
        Self::IsoStrict,
        Self::IsoLenient,
        Self::SlashYmdStrict,
        Self::SlashYmdLenient,
        Self::SlashMdyStrict,
        Self::SlashMdyLenient,
    ];

    /// Anchored pattern with exactly three capture groups.
    ///
    /// Digits are spelled `[0-9]` because `\d` in `regex` also matches non-ASCII digits.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::IsoStrict => r"^([0-9]{4})-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$",
            Self::IsoLenient => r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$",
            Self::SlashYmdStrict => r"^([0-9]{4})/(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])$",
            Self::SlashYmdLenient => r"^([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})$",
            Self::SlashMdyStrict => r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/([0-9]{4})$",
            Self::SlashMdyLenient => r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$",
        }
    }

    pub const fn field_order(self) -> FieldOrder {
        match self {
            Self::IsoStrict | Self::IsoLenient | Self::SlashYmdStrict | Self::SlashYmdLenient => {
                FieldOrder::YearMonthDay
            }
            Self::SlashMdyStrict | Self::SlashMdyLenient => FieldOrder::MonthDayYear,
        }
    }

    pub const fn is_strict(self) -> bool {
        matches!(
            self,
            Self::IsoStrict | Self::SlashYmdStrict | Self::SlashMdyStrict
        )
    }

    const fn index(self) -> usize {
        match self {
            Self::IsoStrict => 0,
            Self::IsoLenient => 1,
            Self::SlashYmdStrict => 2,
            Self::SlashYmdLenient => 3,
            Self::SlashMdyStrict => 4,
            Self::SlashMdyLenient => 5,
        }
    }

    fn regex(self) -> &'static Regex {
        &compiled()[self.index()]
    }

    /// Matches `input` against this layout alone and returns its fields in date order.
    pub fn captures(self, input: &str) -> Option<LayoutFields> {
        let caps = self.regex().captures(input)?;
        let (first, second, third) = (
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
        );
        let (year, month, day) = match self.field_order() {
            FieldOrder::YearMonthDay => (first, second, third),
            FieldOrder::MonthDayYear => (third, first, second),
        };
        Some(LayoutFields {
            year: year.parse().ok()?,
            month: month.parse().ok()?,
            day: day.parse().ok()?,
        })
    }
}

#[allow(clippy::expect_used)]
fn compiled() -> &'static [Regex; 6] {
    static PATTERNS: OnceLock<[Regex; 6]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        DateLayout::ALL.map(|layout| Regex::new(layout.pattern()).expect("layout pattern compiles"))
    })
}

/// Finds the first layout, in priority order, that matches the whole of `input`.
pub fn match_layout(input: &str) -> Option<(DateLayout, LayoutFields)> {
    DateLayout::ALL
        .into_iter()
        .find_map(|layout| layout.captures(input).map(|fields| (layout, fields)))
}
