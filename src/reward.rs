use rand::Rng;
use std::ops::Range;

/// Source of the XP reward rolled when a project is created.
pub trait RewardSource: Send + Sync {
    /// Pick a value in `range` (end exclusive).
    fn roll(&self, range: Range<i64>) -> i64;
}

/// Uniform pick from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReward;

impl RewardSource for RandomReward {
    fn roll(&self, range: Range<i64>) -> i64 {
        if range.is_empty() {
            return range.start;
        }
        rand::thread_rng().gen_range(range)
    }
}

/// Always returns the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedReward(pub i64);

impl RewardSource for FixedReward {
    fn roll(&self, range: Range<i64>) -> i64 {
        if range.is_empty() {
            return range.start;
        }
        self.0.clamp(range.start, range.end - 1)
    }
}
