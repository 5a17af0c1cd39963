use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::{
    BirthDate, Category, CategoryScores, Deck, Element, FinalFate, Gender, LuckScore, ParseError,
    TarotCard, UnknownToken, luck_score,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("入力が足りません: 誕生日と性別を入力してください。")]
    MissingInput,

    #[error("誕生日エラー: 正しい日付を入力してください（1900〜現在の年の間）。")]
    InvalidBirthdate(#[source] ParseError),

    #[error(transparent)]
    UnknownGender(#[from] UnknownToken),

    #[error("{0} has already been revealed")]
    AlreadyRevealed(Category),

    #[error("Not every category has been revealed yet")]
    Incomplete,
}

/// What a single card flip shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub category: Category,
    pub card: TarotCard,
    pub score: LuckScore,
    pub image_path: String,
    pub aura: Option<Element>,
}

/// One user's reading: a validated birthdate and gender plus the scores revealed so far.
///
/// Each category is written at most once; [`FateSession::acknowledge`] clears them all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FateSession {
    birthdate: BirthDate,
    gender: Gender,
    scores: BTreeMap<Category, LuckScore>,
}

impl FateSession {
    pub const fn new(birthdate: BirthDate, gender: Gender) -> Self {
        Self {
            birthdate,
            gender,
            scores: BTreeMap::new(),
        }
    }

    /// Validates the raw form fields and starts a session.
    ///
    /// # Errors
    /// `MissingInput` if either field is blank, `InvalidBirthdate` if the date is rejected,
    /// `UnknownGender` if the gender token is not recognized.
    pub fn begin(birthdate: &str, gender: &str) -> Result<Self, SessionError> {
        if birthdate.trim().is_empty() || gender.trim().is_empty() {
            return Err(SessionError::MissingInput);
        }
        let birthdate = BirthDate::parse(birthdate).map_err(SessionError::InvalidBirthdate)?;
        let gender: Gender = gender.parse()?;
        tracing::info!(%birthdate, %gender, "fate session started");
        Ok(Self::new(birthdate, gender))
    }

    pub const fn birthdate(&self) -> BirthDate {
        self.birthdate
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    pub fn score(&self, category: Category) -> Option<LuckScore> {
        self.scores.get(&category).copied()
    }

    /// Categories not yet revealed, in reveal order.
    pub fn remaining(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|category| !self.scores.contains_key(category))
    }

    pub fn is_complete(&self) -> bool {
        self.remaining().next().is_none()
    }

    /// Flips the card for `category`, recording its score.
    ///
    /// # Errors
    /// `AlreadyRevealed` if this category already has a score.
    pub fn reveal<R: Rng + ?Sized>(
        &mut self,
        category: Category,
        deck: &Deck,
        rng: &mut R,
    ) -> Result<Reveal, SessionError> {
        if self.scores.contains_key(&category) {
            return Err(SessionError::AlreadyRevealed(category));
        }
        let score = luck_score(&self.birthdate, self.gender, category, rng);
        let card = deck.draw(category, rng);
        self.scores.insert(category, score);
        tracing::info!(%category, card = %card.name, %score, "card revealed");

        Ok(Reveal {
            category,
            image_path: card.image_path(),
            aura: card.aura(),
            card,
            score,
        })
    }

    /// All three scores, once every category has been revealed.
    pub fn scores(&self) -> Option<CategoryScores> {
        Some(CategoryScores {
            love: self.score(Category::Love)?,
            career: self.score(Category::Career)?,
            health: self.score(Category::Health)?,
        })
    }

    /// Combines the three scores into the final reading.
    ///
    /// # Errors
    /// `Incomplete` while any category is still face down.
    pub fn final_fate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<FinalFate, SessionError> {
        let scores = self.scores().ok_or(SessionError::Incomplete)?;
        Ok(FinalFate::new(scores, rng))
    }

    /// The user has seen the final result; start over with no scores.
    pub fn acknowledge(&mut self) {
        tracing::debug!("fate session reset");
        self.scores.clear();
    }
}
