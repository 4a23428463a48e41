use crate::error::FetchError;
use crate::model::calendar::{ContributionCalendar, ContributionDay, ContributionWeek, DAYS_PER_WEEK};
use crate::repository::traits::CalendarSource;

pub const SYNTHETIC_WEEKS: usize = 52;
pub const PLACEHOLDER_DATE: &str = "2025-01-01";

/// Deterministic sample data for offline runs and as the fallback when a
/// remote fetch fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticCalendar;

impl SyntheticCalendar {
    pub fn count_at(week_index: usize, day_index: usize) -> u32 {
        ((week_index + day_index * 3) % 15) as u32
    }

    pub fn generate(&self) -> ContributionCalendar {
        let weeks = (0..SYNTHETIC_WEEKS)
            .map(|w| {
                let days = (0..DAYS_PER_WEEK)
                    .map(|d| ContributionDay::new(PLACEHOLDER_DATE, Self::count_at(w, d)))
                    .collect();
                ContributionWeek::new(days)
            })
            .collect();
        ContributionCalendar::new(weeks)
    }
}

impl CalendarSource for SyntheticCalendar {
    fn fetch_calendar(&self, _login: &str, _token: Option<&str>) -> Result<ContributionCalendar, FetchError> {
        Ok(self.generate())
    }
}
