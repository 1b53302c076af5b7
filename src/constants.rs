// src/constants.rs

/// Minutes in one hour
pub const MINUTES_PER_HOUR: i64 = 60;

/// Cumulative minutes at which a life task enters the creative phase (500 hours)
pub const CREATIVE_PHASE_MINUTES: i64 = 500 * MINUTES_PER_HOUR;

/// Cumulative minutes at which a life task enters the master phase (5000 hours)
pub const MASTER_PHASE_MINUTES: i64 = 5000 * MINUTES_PER_HOUR;

/// Upper bound of every attribute score
pub const MAX_SCORE: i64 = 100;

/// Highest quality rating / relationship level
pub const MAX_RATING: u8 = 5;

/// Streak length (days) that maxes the discipline score
pub const DISCIPLINE_REFERENCE_DAYS: i64 = 30;

/// Observational share is scaled by this before clamping
pub const CREATIVITY_MULTIPLIER: i64 = 200;

/// Social intelligence points per mentor
pub const SOCIAL_POINTS_PER_MENTOR: i64 = 10;

/// Social intelligence points per level of the closest mentor relationship
pub const SOCIAL_POINTS_PER_LEVEL: i64 = 10;

/// Session XP = duration * (quality / 5) * this
pub const SESSION_XP_MULTIPLIER: i64 = 2;

/// Lowest project XP reward (inclusive)
pub const PROJECT_XP_MIN: i64 = 100;

/// Highest project XP reward (exclusive)
pub const PROJECT_XP_MAX: i64 = 250;

/// Maximum session duration in minutes (24 hours)
pub const MAX_SESSION_MINUTES: i64 = 24 * MINUTES_PER_HOUR;

/// Maximum length of names and titles
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of free-text notes and descriptions
pub const MAX_NOTES_LEN: usize = 2000;

/// Database file name inside the platform data directory
pub const DB_FILE_NAME: &str = "mastery.db";
