use crate::consts::{
    CAREER_BONUS, FEMALE_OFFSET, HEALTH_BONUS, LOVE_BONUS, MALE_OFFSET, MAX_LUCK,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A token that names no known gender, category or element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {token:?}")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

impl UnknownToken {
    fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_owned(),
        }
    }
}

/// The two genders the reading distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[display(fmt = "男性")]
    Male,
    #[display(fmt = "女性")]
    Female,
}

impl Gender {
    /// Fixed offset this gender adds to every luck score.
    pub const fn offset(self) -> i32 {
        match self {
            Self::Male => MALE_OFFSET,
            Self::Female => FEMALE_OFFSET,
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownToken;

    /// Accepts the form values `男性` / `女性` and the English words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "男性" => Ok(Self::Male),
            "女性" => Ok(Self::Female),
            other if other.eq_ignore_ascii_case("male") => Ok(Self::Male),
            other if other.eq_ignore_ascii_case("female") => Ok(Self::Female),
            other => Err(UnknownToken::new("gender", other)),
        }
    }
}

/// The three life domains a card can be drawn for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Category {
    Love,
    Career,
    Health,
}

impl Category {
    /// Every category, in reveal order.
    pub const ALL: [Self; 3] = [Self::Love, Self::Career, Self::Health];

    /// Fixed bonus this category adds to its luck score.
    pub const fn bonus(self) -> i32 {
        match self {
            Self::Love => LOVE_BONUS,
            Self::Career => CAREER_BONUS,
            Self::Health => HEALTH_BONUS,
        }
    }
}

impl FromStr for Category {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownToken::new("category", s))
    }
}

/// Elemental aura of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[display(fmt = "fire")]
    Fire,
    #[display(fmt = "water")]
    Water,
    #[display(fmt = "earth")]
    Earth,
    #[display(fmt = "air")]
    Air,
}

impl FromStr for Element {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fire" => Ok(Self::Fire),
            "water" => Ok(Self::Water),
            "earth" => Ok(Self::Earth),
            "air" => Ok(Self::Air),
            _ => Err(UnknownToken::new("element", s)),
        }
    }
}

/// A luck percentage guaranteed to be in `0..=MAX_LUCK`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{}%", "_0")]
#[serde(try_from = "u8", into = "u8")]
pub struct LuckScore(u8);

impl LuckScore {
    /// Creates a score, rejecting values above `MAX_LUCK`.
    pub const fn new(value: u8) -> Option<Self> {
        if value > MAX_LUCK {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Clamps any integer into `0..=MAX_LUCK`.
    pub fn clamped(value: i32) -> Self {
        let clamped = value.clamp(0, i32::from(MAX_LUCK));
        Self(u8::try_from(clamped).unwrap_or(MAX_LUCK))
    }

    /// Returns the score as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LuckScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("luck score {value} exceeds {MAX_LUCK}"))
    }
}
