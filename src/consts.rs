/// Earliest accepted birth year (inclusive)
pub const MIN_YEAR: i32 = 1900;

/// Upper bound of a luck score (inclusive)
pub const MAX_LUCK: u8 = 100;

/// Modulus applied to the birthdate's day number and to the raw score sum
pub(crate) const LUCK_MODULUS: i32 = 100;

/// Gender offsets added to every score
pub const MALE_OFFSET: i32 = 12;
pub const FEMALE_OFFSET: i32 = 7;

/// Per-category bonuses
pub const LOVE_BONUS: i32 = 10;
pub const CAREER_BONUS: i32 = 20;
pub const HEALTH_BONUS: i32 = 5;

/// Random jitter range, inclusive on both ends
pub const JITTER_MIN: i32 = -8;
pub const JITTER_MAX: i32 = 31;

/// A total strictly above this is a good fate
pub const GOOD_THRESHOLD: u8 = 75;
/// A total strictly above this (and not good) is a medium fate
pub const MEDIUM_THRESHOLD: u8 = 45;
/// A total at or above this (and not medium) is a low fate; anything below needs improvement
pub const LOW_THRESHOLD: u8 = 20;

/// Directory card images are served from
pub const IMAGE_DIR: &str = "images";
/// Extension of card images
pub const IMAGE_EXTENSION: &str = "jpg";
