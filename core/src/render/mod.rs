//! Isometric renderer: calendar in, SVG document out.

pub mod geometry;
pub mod svg;

use log::debug;

use crate::config::CanvasConfig;
use crate::model::calendar::ContributionCalendar;
use crate::model::tier::{height_level, ColorTier};
use geometry::{cube_faces, project};
use svg::{CubeShape, SvgBuilder};

pub use geometry::{Face, FaceKind, Point};

/// Lays out one cube stack per non-zero day of the most recent weeks.
/// Stacks are emitted week by week, day by day, bottom cube first.
pub fn build_scene(calendar: &ContributionCalendar, canvas: &CanvasConfig) -> SvgBuilder {
    let mut builder = SvgBuilder::new(*canvas);

    for (w, week) in calendar.recent_weeks(canvas.max_weeks).iter().enumerate() {
        for (d, day) in week.days.iter().enumerate() {
            if day.count == 0 {
                continue;
            }
            let base = project(w, d, canvas);
            let tier = ColorTier::for_count(day.count);
            for level in 0..height_level(day.count) {
                let z = level as f64 * canvas.cube_size;
                builder.push_cube(CubeShape {
                    count: day.count,
                    date: day.date.clone(),
                    level,
                    tier,
                    faces: cube_faces(base, z, canvas),
                });
            }
        }
    }

    builder
}

pub fn render_calendar(calendar: &ContributionCalendar, canvas: &CanvasConfig) -> String {
    let builder = build_scene(calendar, canvas);
    debug!("rendering {} cubes", builder.cubes().len());
    builder.finish()
}
