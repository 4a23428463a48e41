use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::error::FetchError;
use crate::model::calendar::{ContributionCalendar, ContributionDay, ContributionWeek, DAYS_PER_WEEK};
use crate::repository::traits::CalendarSource;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
const USER_AGENT: &str = concat!("isogrid/", env!("CARGO_PKG_VERSION"));

const CALENDAR_QUERY: &str = r#"
query($userName: String!) {
  user(login: $userName) {
    contributionsCollection {
      contributionCalendar {
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

// Wire shapes of the GraphQL response. Missing fields fail the decode,
// which the provider treats like any other fetch failure.
#[derive(Deserialize, Debug)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize, Debug)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    contributions_collection: CollectionNode,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CollectionNode {
    contribution_calendar: CalendarNode,
}

#[derive(Deserialize, Debug)]
struct CalendarNode {
    weeks: Vec<WeekNode>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WeekNode {
    contribution_days: Vec<DayNode>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DayNode {
    contribution_count: u32,
    date: String,
}

pub struct GitHubCalendarSource {
    endpoint: String,
    agent: ureq::Agent,
}

impl Default for GitHubCalendarSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl GitHubCalendarSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
        }
    }
}

impl CalendarSource for GitHubCalendarSource {
    fn fetch_calendar(&self, login: &str, token: Option<&str>) -> Result<ContributionCalendar, FetchError> {
        debug!("querying {} for {}", self.endpoint, login);

        let mut request = self.agent.post(&self.endpoint).set("Accept", "application/json");
        if let Some(token) = token {
            request = request.set("Authorization", &format!("bearer {}", token));
        }

        let body = json!({
            "query": CALENDAR_QUERY,
            "variables": { "userName": login },
        });

        let response = match request.send_json(body) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(err)) => return Err(FetchError::Transport(err.to_string())),
        };

        let text = response
            .into_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_calendar_response(&text, login)
    }
}

/// Turns a GraphQL response body into a calendar. Weeks are returned in
/// the order the API sent them.
pub fn parse_calendar_response(body: &str, login: &str) -> Result<ContributionCalendar, FetchError> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let user = match response.data.and_then(|d| d.user) {
        Some(user) => user,
        None if !response.errors.is_empty() => {
            return Err(FetchError::GraphQl(
                response.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        None => return Err(FetchError::MissingUser(login.to_string())),
    };

    let weeks = user.contributions_collection.contribution_calendar.weeks;
    if weeks.is_empty() {
        return Err(FetchError::MalformedCalendar("no weeks returned".to_string()));
    }

    // The first and last weeks of a year are usually partial, so short weeks
    // are accepted. Overfull or empty weeks are not.
    let mut calendar_weeks = Vec::with_capacity(weeks.len());
    for (index, week) in weeks.into_iter().enumerate() {
        let len = week.contribution_days.len();
        if len == 0 || len > DAYS_PER_WEEK {
            return Err(FetchError::MalformedCalendar(format!(
                "week {} has {} days",
                index, len
            )));
        }
        let days = week
            .contribution_days
            .into_iter()
            .map(|d| ContributionDay::new(d.date, d.contribution_count))
            .collect();
        calendar_weeks.push(ContributionWeek::new(days));
    }

    Ok(ContributionCalendar::new(calendar_weeks))
}
