mod null_engine;
mod plotly_html;
mod surface;

pub use null_engine::NullEngine;
pub use plotly_html::{DEFAULT_PLOTLY_GLOBAL, PlotlyHtmlEngine};
pub use surface::{Surface, SurfaceDocument, SurfaceHost};

use crate::error::PlotResult;
use crate::figure::Figure;

/// Contract implemented by any charting engine.
///
/// Engines receive a fully built `Figure` and own the drawing, layout and
/// interaction of the surface from then on. Drawing again on the same surface
/// replaces the previous figure.
pub trait PlotEngine {
    fn plot(&mut self, surface: &mut Surface, figure: &Figure) -> PlotResult<()>;
}

impl<E: PlotEngine + ?Sized> PlotEngine for &mut E {
    fn plot(&mut self, surface: &mut Surface, figure: &Figure) -> PlotResult<()> {
        (**self).plot(surface, figure)
    }
}
