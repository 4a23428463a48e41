pub mod calendar;
pub mod tier;

pub use calendar::{CalendarSummary, ContributionCalendar, ContributionDay, ContributionWeek};
pub use tier::{height_level, ColorTier};
