use tracing::{debug, warn};

use crate::core::PlotRequest;
use crate::error::{PlotError, PlotResult};
use crate::figure::Figure;
use crate::render::{PlotEngine, SurfaceHost};

use super::{ScalingPlotStyle, build_figure};

/// Turns plot requests into figures and hands them to an engine.
///
/// The renderer keeps only the engine and the style; the surface a request
/// targets is looked up again on every call.
pub struct ScalingPlotRenderer<E: PlotEngine> {
    engine: E,
    style: ScalingPlotStyle,
}

impl<E: PlotEngine> ScalingPlotRenderer<E> {
    pub fn new(engine: E, style: ScalingPlotStyle) -> PlotResult<Self> {
        let style = style.validate()?;
        Ok(Self { engine, style })
    }

    #[must_use]
    pub fn with_default_style(engine: E) -> Self {
        Self {
            engine,
            style: ScalingPlotStyle::default(),
        }
    }

    #[must_use]
    pub fn style(&self) -> &ScalingPlotStyle {
        &self.style
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn build_figure(&self, request: &PlotRequest) -> PlotResult<Figure> {
        build_figure(request, &self.style)
    }

    /// Draws `request` on the surface named by `request.plot_id`.
    ///
    /// A previous chart on the same surface is replaced. Engine errors are
    /// returned unchanged.
    pub fn render<H>(&mut self, host: &mut H, request: &PlotRequest) -> PlotResult<()>
    where
        H: SurfaceHost + ?Sized,
    {
        let figure = self.build_figure(request)?;

        let Some(surface) = host.resolve(&request.plot_id) else {
            warn!(surface = request.plot_id.as_str(), "surface lookup failed");
            return Err(PlotError::InvalidSurface {
                id: request.plot_id.clone(),
            });
        };

        debug!(
            surface = request.plot_id.as_str(),
            fit_points = request.fit.len(),
            data_points = request.data.len(),
            "render scaling plot"
        );
        self.engine.plot(surface, &figure)
    }
}

/// Renders one request with the default style.
pub fn render_scaling_plot<H, E>(
    host: &mut H,
    engine: &mut E,
    request: &PlotRequest,
) -> PlotResult<()>
where
    H: SurfaceHost + ?Sized,
    E: PlotEngine,
{
    ScalingPlotRenderer::with_default_style(engine).render(host, request)
}
