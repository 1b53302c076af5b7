//! Consecutive-day streaks over practice dates.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

impl Streak {
    /// Walk the unique practice days from newest to oldest.
    ///
    /// The walk starts with the cursor on `today`. A day equal to the cursor
    /// extends the run and moves the cursor back one day; any other day closes
    /// the run and starts a new run of one anchored on that day. `current` is
    /// captured the first time a closing run is non-empty, otherwise it is the
    /// final run. A run that ended before today is therefore still reported as
    /// current; see [`Streak::current_as_of`] for the stricter reading.
    pub fn from_dates<I>(dates: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let days: BTreeSet<NaiveDate> = dates.into_iter().collect();
        if days.is_empty() {
            return Self::default();
        }

        let mut current = 0;
        let mut longest = 0;
        let mut run = 0;
        let mut expected = Some(today);

        for day in days.into_iter().rev() {
            if Some(day) == expected {
                run += 1;
            } else {
                if current == 0 {
                    current = run;
                }
                longest = longest.max(run);
                run = 1;
            }
            expected = day.pred_opt();
        }

        if current == 0 {
            current = run;
        }
        longest = longest.max(run);

        Self { current, longest }
    }

    /// Current streak, reading a run whose newest day is older than yesterday
    /// as broken (0). Not what gets persisted; offered to callers that want
    /// the stricter display.
    pub fn current_as_of(&self, last_practiced: Option<NaiveDate>, today: NaiveDate) -> u32 {
        match last_practiced {
            Some(day) if day == today || Some(day) == today.pred_opt() => self.current,
            Some(_) | None => 0,
        }
    }
}
