use indexmap::IndexMap;

use crate::error::PlotResult;
use crate::figure::Figure;
use crate::render::{PlotEngine, Surface};

/// Headless engine used by tests and server-side figure inspection.
///
/// Keeps the latest figure per surface instead of drawing it.
#[derive(Debug, Default)]
pub struct NullEngine {
    pub plot_calls: usize,
    pub last_trace_count: usize,
    pub last_point_count: usize,
    figures: IndexMap<String, Figure>,
}

impl NullEngine {
    #[must_use]
    pub fn figure_for(&self, surface_id: &str) -> Option<&Figure> {
        self.figures.get(surface_id)
    }

    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.figures.len()
    }
}

impl PlotEngine for NullEngine {
    fn plot(&mut self, surface: &mut Surface, figure: &Figure) -> PlotResult<()> {
        self.plot_calls += 1;
        self.last_trace_count = figure.trace_count();
        self.last_point_count = figure.total_point_count();
        self.figures
            .insert(surface.id().to_owned(), figure.clone());
        surface.replace_content(String::new());
        Ok(())
    }
}
