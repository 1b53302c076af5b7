//! The five attribute scores. Each is an integer in 0-100, rounded half-up
//! after scaling and then clamped.

use crate::constants::{
    CREATIVE_PHASE_MINUTES, CREATIVITY_MULTIPLIER, DISCIPLINE_REFERENCE_DAYS, MASTER_PHASE_MINUTES,
    MAX_RATING, MAX_SCORE, SOCIAL_POINTS_PER_LEVEL, SOCIAL_POINTS_PER_MENTOR,
};
use crate::models::{Mentor, PracticeSession, SessionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeScores {
    pub focus: u8,
    pub discipline: u8,
    pub creativity: u8,
    pub intuition: u8,
    pub social_intelligence: u8,
}

/// Aggregate of a life task's mentor relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MentorSummary {
    pub count: i64,
    /// 0 when there are no mentors.
    pub max_relationship_level: u8,
}

impl MentorSummary {
    pub fn from_mentors(mentors: &[Mentor]) -> Self {
        Self {
            count: i64::try_from(mentors.len()).unwrap_or(i64::MAX),
            max_relationship_level: mentors
                .iter()
                .map(|m| m.relationship_level)
                .max()
                .unwrap_or(0),
        }
    }
}

impl AttributeScores {
    pub fn compute(
        sessions: &[PracticeSession],
        current_streak: u32,
        total_minutes: i64,
        mentors: MentorSummary,
    ) -> Self {
        Self {
            focus: focus(sessions),
            discipline: discipline(current_streak),
            creativity: creativity(sessions),
            intuition: intuition(total_minutes),
            social_intelligence: social_intelligence(mentors.count, mentors.max_relationship_level),
        }
    }
}

/// Clamp into the score range.
fn clamp_score(value: i64) -> u8 {
    u8::try_from(value.clamp(0, MAX_SCORE)).unwrap_or(u8::MAX)
}

/// `numerator / denominator` rounded half-up, clamped to 0-100.
fn scaled_score(numerator: i64, denominator: i64) -> u8 {
    if denominator <= 0 || numerator <= 0 {
        return 0;
    }
    let rounded = numerator
        .saturating_mul(2)
        .saturating_add(denominator)
        / denominator.saturating_mul(2);
    clamp_score(rounded)
}

/// Average quality of deliberate sessions, as a percentage of the top rating.
pub fn focus(sessions: &[PracticeSession]) -> u8 {
    let (sum, count) = sessions
        .iter()
        .filter(|s| s.session_type == SessionType::Deliberate)
        .fold((0i64, 0i64), |(sum, count), s| (sum + i64::from(s.quality), count + 1));

    if count == 0 {
        return 0;
    }
    scaled_score(sum * MAX_SCORE, count * i64::from(MAX_RATING))
}

/// Current streak against a 30-day reference.
pub fn discipline(current_streak: u32) -> u8 {
    scaled_score(i64::from(current_streak) * MAX_SCORE, DISCIPLINE_REFERENCE_DAYS)
}

/// Share of observational sessions, doubled. A 50% mix maxes it.
pub fn creativity(sessions: &[PracticeSession]) -> u8 {
    let observational = sessions
        .iter()
        .filter(|s| s.session_type == SessionType::Observational)
        .count();
    let observational = i64::try_from(observational).unwrap_or(i64::MAX);
    let total = i64::try_from(sessions.len()).unwrap_or(i64::MAX).max(1);
    scaled_score(observational.saturating_mul(CREATIVITY_MULTIPLIER), total)
}

/// Zero before the creative phase, then linear up to the master threshold.
pub fn intuition(total_minutes: i64) -> u8 {
    if total_minutes < CREATIVE_PHASE_MINUTES {
        return 0;
    }
    scaled_score(
        (total_minutes - CREATIVE_PHASE_MINUTES).saturating_mul(MAX_SCORE),
        MASTER_PHASE_MINUTES - CREATIVE_PHASE_MINUTES,
    )
}

/// Coarse: ten points per mentor plus ten per level of the closest relationship.
pub fn social_intelligence(mentor_count: i64, max_relationship_level: u8) -> u8 {
    clamp_score(
        mentor_count
            .saturating_mul(SOCIAL_POINTS_PER_MENTOR)
            .saturating_add(i64::from(max_relationship_level) * SOCIAL_POINTS_PER_LEVEL),
    )
}
