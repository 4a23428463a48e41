use crate::config::CalendarRequest;
use crate::model::calendar::ContributionCalendar;
use crate::repository::{CalendarSource, SyntheticCalendar};
use log::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarOrigin {
    Remote,
    Synthetic,
    Fallback { reason: String },
}

impl CalendarOrigin {
    pub fn is_remote(&self) -> bool {
        matches!(self, CalendarOrigin::Remote)
    }
}

#[derive(Debug, Clone)]
pub struct LoadedCalendar {
    pub calendar: ContributionCalendar,
    pub origin: CalendarOrigin,
}

/// Produces a calendar for a request. Never fails: any remote error is
/// replaced by synthetic data.
pub struct CalendarService<S: CalendarSource> {
    remote: S,
    synthetic: SyntheticCalendar,
}

impl<S: CalendarSource> CalendarService<S> {
    pub fn new(remote: S) -> Self {
        Self {
            remote,
            synthetic: SyntheticCalendar,
        }
    }

    pub fn load(&self, request: &CalendarRequest) -> LoadedCalendar {
        if !request.wants_remote() {
            info!("no credential supplied; using sample data");
            return LoadedCalendar {
                calendar: self.synthetic.generate(),
                origin: CalendarOrigin::Synthetic,
            };
        }

        match self.remote.fetch_calendar(&request.login, request.token.as_deref()) {
            Ok(calendar) => {
                info!(
                    "fetched {} weeks of contributions for {}",
                    calendar.weeks.len(),
                    request.login
                );
                LoadedCalendar {
                    calendar,
                    origin: CalendarOrigin::Remote,
                }
            }
            Err(err) => {
                warn!("could not fetch contributions for {}: {}; using sample data", request.login, err);
                LoadedCalendar {
                    calendar: self.synthetic.generate(),
                    origin: CalendarOrigin::Fallback {
                        reason: err.to_string(),
                    },
                }
            }
        }
    }
}
