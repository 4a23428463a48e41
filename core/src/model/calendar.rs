use chrono::NaiveDate;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: String, // ISO "YYYY-MM-DD"
    pub count: u32,
}

impl ContributionDay {
    pub fn new(date: impl Into<String>, count: u32) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// One column of the calendar. Days are stored in day-of-week order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

impl ContributionWeek {
    pub fn new(days: Vec<ContributionDay>) -> Self {
        Self { days }
    }

    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| d.count as u64).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContributionCalendar {
    pub weeks: Vec<ContributionWeek>, // chronological
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSummary {
    pub weeks: usize,
    pub total_contributions: u64,
    pub active_days: usize,
    pub busiest_day: Option<ContributionDay>,
    pub span: Option<(NaiveDate, NaiveDate)>,
}

impl ContributionCalendar {
    pub fn new(weeks: Vec<ContributionWeek>) -> Self {
        Self { weeks }
    }

    /// Trailing `limit` weeks, or every week when the calendar is shorter.
    pub fn recent_weeks(&self, limit: usize) -> &[ContributionWeek] {
        let start = self.weeks.len().saturating_sub(limit);
        &self.weeks[start..]
    }

    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    pub fn summary(&self) -> CalendarSummary {
        let total_contributions = self.weeks.iter().map(|w| w.total()).sum();
        let active_days = self.days().filter(|d| d.count > 0).count();

        // First maximum wins so ties resolve to the earliest day.
        let mut busiest_day: Option<&ContributionDay> = None;
        for day in self.days().filter(|d| d.count > 0) {
            if busiest_day.map_or(true, |b| day.count > b.count) {
                busiest_day = Some(day);
            }
        }

        let mut span: Option<(NaiveDate, NaiveDate)> = None;
        for date in self.days().filter_map(|d| d.parsed_date()) {
            span = match span {
                None => Some((date, date)),
                Some((first, last)) => Some((first.min(date), last.max(date))),
            };
        }

        CalendarSummary {
            weeks: self.weeks.len(),
            total_contributions,
            active_days,
            busiest_day: busiest_day.cloned(),
            span,
        }
    }
}
