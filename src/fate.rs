use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::advice;
use crate::consts::{GOOD_THRESHOLD, LOW_THRESHOLD, MEDIUM_THRESHOLD};
use crate::prelude::*;
use crate::{Category, LuckScore};

/// One score per category, as collected by a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryScores {
    pub love: LuckScore,
    pub career: LuckScore,
    pub health: LuckScore,
}

impl CategoryScores {
    pub const fn get(&self, category: Category) -> LuckScore {
        match category {
            Category::Love => self.love,
            Category::Career => self.career,
            Category::Health => self.health,
        }
    }

    /// Average of the three scores, rounded to the nearest integer.
    pub fn total(&self) -> LuckScore {
        let sum = u16::from(self.love.get())
            + u16::from(self.career.get())
            + u16::from(self.health.get());
        // thirds never land on .5, so adding one before dividing rounds to nearest
        LuckScore::clamped(i32::from((sum + 1) / 3))
    }
}

/// Which advice pool a total draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FateTier {
    #[display(fmt = "good")]
    Good,
    #[display(fmt = "medium")]
    Medium,
    #[display(fmt = "low")]
    Low,
    #[display(fmt = "needs improvement")]
    NeedsImprovement,
}

impl FateTier {
    /// `> 75` good, `46..=75` medium, `20..=45` low, below 20 needs improvement.
    pub const fn for_total(total: LuckScore) -> Self {
        let total = total.get();
        if total > GOOD_THRESHOLD {
            Self::Good
        } else if total > MEDIUM_THRESHOLD {
            Self::Medium
        } else if total >= LOW_THRESHOLD {
            Self::Low
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn advice_pool(self) -> &'static [&'static str] {
        match self {
            Self::Good => &advice::GOOD,
            Self::Medium => &advice::MEDIUM,
            Self::Low => &advice::LOW,
            Self::NeedsImprovement => &advice::NEEDS_IMPROVEMENT,
        }
    }

    /// Picks one line of this tier's advice uniformly at random.
    pub fn pick_advice<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        self.advice_pool().choose(rng).copied().unwrap_or_default()
    }
}

/// The combined reading shown once every category has been revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalFate {
    pub scores: CategoryScores,
    pub total: LuckScore,
    pub tier: FateTier,
    pub advice: &'static str,
}

impl FinalFate {
    pub fn new<R: Rng + ?Sized>(scores: CategoryScores, rng: &mut R) -> Self {
        let total = scores.total();
        let tier = FateTier::for_total(total);
        Self {
            scores,
            total,
            tier,
            advice: tier.pick_advice(rng),
        }
    }
}
