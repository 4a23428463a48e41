/// Fixed drawing parameters for the isometric graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub offset_x: f64,
    pub offset_y: f64,
    pub cube_size: f64,
    pub spacing: f64,
    pub angle_degrees: f64,
    pub max_weeks: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            offset_x: 100.0,
            offset_y: 50.0,
            cube_size: 4.0,
            spacing: 1.0,
            angle_degrees: 30.0,
            max_weeks: 52,
        }
    }
}

impl CanvasConfig {
    pub fn pitch(&self) -> f64 {
        self.cube_size + self.spacing
    }

    pub fn cos_angle(&self) -> f64 {
        self.angle_degrees.to_radians().cos()
    }

    pub fn sin_angle(&self) -> f64 {
        self.angle_degrees.to_radians().sin()
    }
}

/// What the caller wants the provider to load. The credential is resolved
/// by the caller (flag or environment) before it gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequest {
    pub login: String,
    pub token: Option<String>,
    pub prefer_remote: bool,
}

impl CalendarRequest {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            token: None,
            prefer_remote: false,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn prefer_remote(mut self, prefer: bool) -> Self {
        self.prefer_remote = prefer;
        self
    }

    pub fn wants_remote(&self) -> bool {
        self.prefer_remote || self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_implies_remote() {
        let request = CalendarRequest::new("octocat").with_token(Some("ghp_x".to_string()));
        assert!(request.wants_remote());
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let request = CalendarRequest::new("octocat").with_token(Some("  ".to_string()));
        assert_eq!(request.token, None);
        assert!(!request.wants_remote());
    }

    #[test]
    fn test_flag_without_token() {
        let request = CalendarRequest::new("octocat").prefer_remote(true);
        assert!(request.wants_remote());
        assert!(!CalendarRequest::new("octocat").wants_remote());
    }

    #[test]
    fn test_default_canvas() {
        let canvas = CanvasConfig::default();
        assert_eq!(canvas.pitch(), 5.0);
        assert!((canvas.sin_angle() - 0.5).abs() < 1e-12);
        assert!((canvas.cos_angle() - 3f64.sqrt() / 2.0).abs() < 1e-12);
    }
}
