//! Declarative figure handed to a plot engine.
//!
//! Field names follow the Plotly.js figure schema so a serialized `Figure`
//! can be passed to the browser library as-is.

mod color;
mod layout;
mod trace;

pub use color::Color;
pub use layout::{
    Axis, AxisMirror, AxisTitleText, HorizontalAnchor, HoverMode, Layout, Legend, Margin,
    TickPlacement, VerticalAnchor,
};
pub use trace::{Marker, ScatterTrace, TraceKind, TraceMode};

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
}

impl Figure {
    #[must_use]
    pub fn trace_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn total_point_count(&self) -> usize {
        self.data.iter().map(ScatterTrace::point_count).sum()
    }

    pub fn to_json_string(&self) -> PlotResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize figure: {e}")))
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize figure: {e}")))
    }
}
