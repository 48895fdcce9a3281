//! scaling-plot: declarative scaling-relation charts.
//!
//! A request carrying a precomputed fit line and observed points becomes a
//! two-trace figure with styled axes and legend, which a `PlotEngine` draws
//! onto a named surface.

pub mod api;
pub mod core;
pub mod error;
pub mod figure;
pub mod labels;
pub mod render;
pub mod telemetry;

pub use api::{ScalingPlotRenderer, ScalingPlotStyle, render_scaling_plot};
pub use core::PlotRequest;
pub use error::{PlotError, PlotResult};
