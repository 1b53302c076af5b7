use crate::constants::{CREATIVE_PHASE_MINUTES, MASTER_PHASE_MINUTES};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a life task. Ordered: apprentice < creative < master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Apprentice,
    Creative,
    Master,
}

impl Phase {
    /// Classify cumulative practice minutes.
    pub fn for_minutes(total_minutes: i64) -> Self {
        if total_minutes >= MASTER_PHASE_MINUTES {
            Phase::Master
        } else if total_minutes >= CREATIVE_PHASE_MINUTES {
            Phase::Creative
        } else {
            Phase::Apprentice
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Apprentice => "apprentice",
            Phase::Creative => "creative",
            Phase::Master => "master",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "apprentice" => Some(Phase::Apprentice),
            "creative" => Some(Phase::Creative),
            "master" => Some(Phase::Master),
            _ => None,
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Apprentice => "Apprentice",
            Phase::Creative => "Creative-Active",
            Phase::Master => "Master",
        }
    }

    /// Minutes at which the next phase begins; `None` once mastered.
    pub fn next_threshold(self) -> Option<i64> {
        match self {
            Phase::Apprentice => Some(CREATIVE_PHASE_MINUTES),
            Phase::Creative => Some(MASTER_PHASE_MINUTES),
            Phase::Master => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for Phase {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Phase {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Phase::parse(s).ok_or_else(|| FromSqlError::Other(format!("unknown phase '{s}'").into()))
    }
}

/// Progress towards the next phase, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseProgress {
    pub phase: Phase,
    pub next_threshold: Option<i64>,
    pub minutes_remaining: Option<i64>,
    /// 0-100, 100 once mastered.
    pub percent: u8,
}

impl PhaseProgress {
    pub fn for_minutes(total_minutes: i64) -> Self {
        let phase = Phase::for_minutes(total_minutes);
        let next_threshold = phase.next_threshold();
        Self {
            phase,
            next_threshold,
            minutes_remaining: next_threshold.map(|t| (t - total_minutes).max(0)),
            percent: next_threshold.map_or(100, |t| percent_of(total_minutes, t)),
        }
    }
}

/// `value / target` as a floored percentage in 0-100.
pub(crate) fn percent_of(value: i64, target: i64) -> u8 {
    if target <= 0 {
        return 100;
    }
    let pct = (value.max(0).saturating_mul(100) / target).min(100);
    u8::try_from(pct).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_minutes_is_apprentice() {
        assert_eq!(Phase::for_minutes(0), Phase::Apprentice);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(Phase::for_minutes(CREATIVE_PHASE_MINUTES - 1), Phase::Apprentice);
        assert_eq!(Phase::for_minutes(CREATIVE_PHASE_MINUTES), Phase::Creative);
        assert_eq!(Phase::for_minutes(MASTER_PHASE_MINUTES - 1), Phase::Creative);
        assert_eq!(Phase::for_minutes(MASTER_PHASE_MINUTES), Phase::Master);
        assert_eq!(Phase::for_minutes(i64::MAX), Phase::Master);
    }

    #[test]
    fn test_phase_is_monotonic() {
        let mut previous = Phase::Apprentice;
        for minutes in (0..=MASTER_PHASE_MINUTES + 1000).step_by(997) {
            let phase = Phase::for_minutes(minutes);
            assert!(phase >= previous, "phase went backwards at {minutes}");
            previous = phase;
        }
    }

    #[test]
    fn test_parse_round_trips_labels() {
        for phase in [Phase::Apprentice, Phase::Creative, Phase::Master] {
            assert_eq!(Phase::parse(phase.as_str()), Some(phase));
        }
        assert_eq!(Phase::parse("journeyman"), None);
    }

    #[test]
    fn test_phase_progress_apprentice() {
        let progress = PhaseProgress::for_minutes(CREATIVE_PHASE_MINUTES / 4);
        assert_eq!(progress.phase, Phase::Apprentice);
        assert_eq!(progress.next_threshold, Some(CREATIVE_PHASE_MINUTES));
        assert_eq!(progress.minutes_remaining, Some(CREATIVE_PHASE_MINUTES * 3 / 4));
        assert_eq!(progress.percent, 25);
    }

    #[test]
    fn test_phase_progress_creative_measures_against_master_threshold() {
        let progress = PhaseProgress::for_minutes(CREATIVE_PHASE_MINUTES);
        assert_eq!(progress.phase, Phase::Creative);
        assert_eq!(progress.percent, 10);
    }

    #[test]
    fn test_phase_progress_master_is_complete() {
        let progress = PhaseProgress::for_minutes(MASTER_PHASE_MINUTES);
        assert_eq!(progress.next_threshold, None);
        assert_eq!(progress.minutes_remaining, None);
        assert_eq!(progress.percent, 100);
    }
}
