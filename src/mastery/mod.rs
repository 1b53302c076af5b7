//! Pure progress derivation: nothing in here touches storage or the clock.

pub mod attributes;
pub mod keys;
pub mod phase;
pub mod streak;

pub use attributes::{AttributeScores, MentorSummary};
pub use keys::{MasteryKey, MASTERY_KEYS};
pub use phase::{Phase, PhaseProgress};
pub use streak::Streak;

use crate::constants::{MAX_RATING, SESSION_XP_MULTIPLIER};

/// XP for a session: `round(duration * (quality / 5) * 2)`, half-up.
pub fn session_xp(duration_minutes: i64, quality: u8) -> i64 {
    let numerator = duration_minutes
        .max(0)
        .saturating_mul(i64::from(quality))
        .saturating_mul(SESSION_XP_MULTIPLIER);
    let denominator = i64::from(MAX_RATING);
    (numerator * 2 + denominator) / (denominator * 2)
}
