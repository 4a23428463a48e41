use thiserror::Error;

/// Reasons a remote calendar could not be obtained. Every variant is
/// recoverable: the provider substitutes synthetic data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("remote returned HTTP {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("query failed: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("no user data for `{0}`")]
    MissingUser(String),
    #[error("malformed calendar: {0}")]
    MalformedCalendar(String),
}
