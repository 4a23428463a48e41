pub mod github;
#[cfg(test)]
pub(crate) mod stub_server;
pub mod synthetic;
pub mod traits;

// Re-export
pub use github::GitHubCalendarSource;
pub use synthetic::SyntheticCalendar;
pub use traits::CalendarSource;
