pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::{CalendarRequest, CanvasConfig};
pub use error::FetchError;
pub use model::{CalendarSummary, ColorTier, ContributionCalendar, ContributionDay, ContributionWeek};
pub use render::render_calendar;
pub use repository::{CalendarSource, GitHubCalendarSource, SyntheticCalendar};
pub use service::{CalendarOrigin, CalendarService};
pub use usecase::{GenerateGraphUseCase, GeneratedGraph};
