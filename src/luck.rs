use rand::Rng;

use crate::consts::{JITTER_MAX, JITTER_MIN, LUCK_MODULUS};
use crate::{BirthDate, Category, Gender, LuckScore};

/// Computes a luck score for one category.
///
/// The score combines a component derived from the birthdate, the gender offset, the
/// category bonus and a random jitter in `JITTER_MIN..=JITTER_MAX`, folded below 100 and
/// clamped to `0..=100`. Only the range is guaranteed; the same inputs give different
/// scores unless `rng` is seeded.
pub fn luck_score<R: Rng + ?Sized>(
    birthdate: &BirthDate,
    gender: Gender,
    category: Category,
    rng: &mut R,
) -> LuckScore {
    let jitter = rng.gen_range(JITTER_MIN..=JITTER_MAX);
    score_with_jitter(birthdate, gender, category, jitter)
}

fn score_with_jitter(
    birthdate: &BirthDate,
    gender: Gender,
    category: Category,
    jitter: i32,
) -> LuckScore {
    let raw = base_number(birthdate) + gender.offset() + category.bonus() + jitter;
    LuckScore::clamped(raw % LUCK_MODULUS)
}

fn base_number(birthdate: &BirthDate) -> i32 {
    let base = birthdate
        .days_since_epoch()
        .rem_euclid(i64::from(LUCK_MODULUS));
    i32::try_from(base).unwrap_or_default()
}
