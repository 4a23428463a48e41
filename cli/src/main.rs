mod output;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use isogrid_core::{
    CalendarOrigin, CalendarRequest, CalendarService, CalendarSummary, CanvasConfig,
    GenerateGraphUseCase, GitHubCalendarSource,
};

use crate::output::{write_svg, OUTPUT_FILE_NAME};

#[derive(Parser, Debug)]
#[command(name = "isogrid")]
#[command(about = "Render a contribution calendar as isometric cube stacks", long_about = None)]
struct Cli {
    /// GitHub login whose calendar is rendered
    #[arg(default_value = "octocat")]
    username: String,

    /// Access token for the GraphQL API (implies --real)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Fetch real contribution data instead of the built-in sample
    #[arg(long)]
    real: bool,
}

impl Cli {
    fn request(&self) -> CalendarRequest {
        CalendarRequest::new(self.username.clone())
            .with_token(self.token.clone())
            .prefer_remote(self.real)
    }
}

fn describe(origin: &CalendarOrigin, username: &str) -> String {
    match origin {
        CalendarOrigin::Remote => format!("Using real contribution data for {}", username),
        CalendarOrigin::Synthetic => "Using sample data (pass --token or set GITHUB_TOKEN for real data)".to_string(),
        // The failure reason is already logged by the provider.
        CalendarOrigin::Fallback { .. } => format!("Could not fetch data for {}; using sample data", username),
    }
}

fn print_summary(summary: &CalendarSummary) {
    println!(
        "  {} weeks, {} contributions on {} active days",
        summary.weeks, summary.total_contributions, summary.active_days
    );
    if let Some((first, last)) = summary.span {
        if first != last {
            println!("  Span: {} .. {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d"));
        }
    }
    if let Some(day) = &summary.busiest_day {
        println!("  Busiest day: {} ({} contributions)", day.date, day.count);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let request = cli.request();

    let service = CalendarService::new(GitHubCalendarSource::default());
    let usecase = GenerateGraphUseCase::new(&service, CanvasConfig::default());
    let graph = usecase.generate(&request);

    println!("{}", describe(&graph.origin, &cli.username));
    print_summary(&graph.summary);

    let path = Path::new(OUTPUT_FILE_NAME);
    write_svg(path, &graph.svg)?;
    log::info!("wrote {} bytes", graph.svg.len());
    println!("Generated isometric contribution graph for {} -> {}", cli.username, path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_flag_implies_real() {
        let cli = Cli::try_parse_from(["isogrid", "alice", "--token", "abc"]).unwrap();
        let request = cli.request();
        assert_eq!(request.login, "alice");
        assert!(request.wants_remote());
    }

    #[test]
    fn test_defaults_use_sample_data() {
        let cli = Cli::try_parse_from(["isogrid", "bob"]).unwrap();
        let request = Cli { token: None, ..cli }.request();
        assert!(!request.wants_remote());
    }

    #[test]
    fn test_real_flag() {
        let cli = Cli::try_parse_from(["isogrid", "--real"]).unwrap();
        assert_eq!(cli.username, "octocat");
        assert!(Cli { token: None, ..cli }.request().prefer_remote);
    }

    #[test]
    fn test_describe_fallback_omits_logged_reason() {
        let origin = CalendarOrigin::Fallback {
            reason: "remote returned HTTP 401".to_string(),
        };
        let line = describe(&origin, "alice");
        assert!(line.contains("using sample data"));
        assert!(!line.contains("HTTP 401"));
    }
}
