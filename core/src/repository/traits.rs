use crate::error::FetchError;
use crate::model::calendar::ContributionCalendar;

pub trait CalendarSource {
    fn fetch_calendar(&self, login: &str, token: Option<&str>) -> Result<ContributionCalendar, FetchError>;
}
