use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::figure::{Color, HorizontalAnchor, HoverMode, Legend, VerticalAnchor};

pub const DEFAULT_FIT_MARKER_COLOR: Color = Color::rgba(0, 0, 0, 0.25);
pub const DEFAULT_DATA_MARKER_COLOR: Color = Color::rgba(91, 191, 224, 1.0);
pub const DEFAULT_AXIS_LINE_COLOR: Color = Color::rgba(0, 0, 0, 0.2);
pub const DEFAULT_ZERO_LINE_COLOR: Color = Color::rgba(0, 0, 0, 0.4);
pub const DEFAULT_LEGEND: Legend = Legend {
    xanchor: HorizontalAnchor::Center,
    yanchor: VerticalAnchor::Top,
    x: 0.5,
    y: 1.12,
};
pub const DEFAULT_TOP_MARGIN_PX: u32 = 10;
pub const MAX_TOP_MARGIN_PX: u32 = 10_000;

/// Styling applied to every scaling plot.
///
/// This type is serializable so hosts can keep a style file next to their
/// templates; missing fields fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingPlotStyle {
    #[serde(default = "default_fit_marker_color")]
    pub fit_marker_color: Color,
    #[serde(default = "default_data_marker_color")]
    pub data_marker_color: Color,
    /// Axis line and tick color.
    #[serde(default = "default_axis_line_color")]
    pub axis_line_color: Color,
    #[serde(default = "default_zero_line_color")]
    pub zero_line_color: Color,
    #[serde(default = "default_legend")]
    pub legend: Legend,
    #[serde(default = "default_top_margin_px")]
    pub top_margin_px: u32,
    #[serde(default = "default_hover_mode")]
    pub hover_mode: HoverMode,
}

impl Default for ScalingPlotStyle {
    fn default() -> Self {
        Self {
            fit_marker_color: default_fit_marker_color(),
            data_marker_color: default_data_marker_color(),
            axis_line_color: default_axis_line_color(),
            zero_line_color: default_zero_line_color(),
            legend: default_legend(),
            top_margin_px: default_top_margin_px(),
            hover_mode: default_hover_mode(),
        }
    }
}

impl ScalingPlotStyle {
    #[must_use]
    pub fn with_marker_colors(mut self, fit: Color, data: Color) -> Self {
        self.fit_marker_color = fit;
        self.data_marker_color = data;
        self
    }

    #[must_use]
    pub fn with_axis_colors(mut self, line: Color, zero_line: Color) -> Self {
        self.axis_line_color = line;
        self.zero_line_color = zero_line;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_top_margin_px(mut self, top_margin_px: u32) -> Self {
        self.top_margin_px = top_margin_px;
        self
    }

    #[must_use]
    pub fn with_hover_mode(mut self, hover_mode: HoverMode) -> Self {
        self.hover_mode = hover_mode;
        self
    }

    pub fn validate(self) -> PlotResult<Self> {
        for color in [
            self.fit_marker_color,
            self.data_marker_color,
            self.axis_line_color,
            self.zero_line_color,
        ] {
            color.validate()?;
        }
        if !self.legend.x.is_finite() || !self.legend.y.is_finite() {
            return Err(PlotError::InvalidData(
                "legend position must be finite".to_owned(),
            ));
        }
        if self.top_margin_px > MAX_TOP_MARGIN_PX {
            return Err(PlotError::InvalidData(format!(
                "top margin must be <= {MAX_TOP_MARGIN_PX} px"
            )));
        }
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize style: {e}")))
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let style: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse style json: {e}")))?;
        style.validate()
    }
}

fn default_fit_marker_color() -> Color {
    DEFAULT_FIT_MARKER_COLOR
}

fn default_data_marker_color() -> Color {
    DEFAULT_DATA_MARKER_COLOR
}

fn default_axis_line_color() -> Color {
    DEFAULT_AXIS_LINE_COLOR
}

fn default_zero_line_color() -> Color {
    DEFAULT_ZERO_LINE_COLOR
}

fn default_legend() -> Legend {
    DEFAULT_LEGEND
}

fn default_top_margin_px() -> u32 {
    DEFAULT_TOP_MARGIN_PX
}

fn default_hover_mode() -> HoverMode {
    HoverMode::Closest
}
