use crate::config::{CalendarRequest, CanvasConfig};
use crate::model::calendar::CalendarSummary;
use crate::render::render_calendar;
use crate::repository::CalendarSource;
use crate::service::calendar_service::{CalendarOrigin, CalendarService};

pub struct GeneratedGraph {
    pub svg: String,
    pub origin: CalendarOrigin,
    pub summary: CalendarSummary,
}

pub struct GenerateGraphUseCase<'a, S: CalendarSource> {
    calendar_service: &'a CalendarService<S>,
    canvas: CanvasConfig,
}

impl<'a, S: CalendarSource> GenerateGraphUseCase<'a, S> {
    pub fn new(calendar_service: &'a CalendarService<S>, canvas: CanvasConfig) -> Self {
        Self {
            calendar_service,
            canvas,
        }
    }

    pub fn generate(&self, request: &CalendarRequest) -> GeneratedGraph {
        let loaded = self.calendar_service.load(request);
        let svg = render_calendar(&loaded.calendar, &self.canvas);
        let summary = loaded.calendar.summary();

        GeneratedGraph {
            svg,
            origin: loaded.origin,
            summary,
        }
    }
}
