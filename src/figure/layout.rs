use serde::{Deserialize, Serialize};

use super::Color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitleText {
    pub text: String,
}

/// Which sides of the plot box repeat the axis line and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMirror {
    AllTicks,
    Ticks,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickPlacement {
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: AxisTitleText,
    pub showline: bool,
    pub zerolinecolor: Color,
    pub linecolor: Color,
    pub tickcolor: Color,
    pub mirror: AxisMirror,
    pub ticks: TickPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

/// Legend position in normalized plot coordinates.
///
/// `y` above 1.0 places the legend outside the top of the plot box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub xanchor: HorizontalAnchor,
    pub yanchor: VerticalAnchor,
    pub x: f64,
    pub y: f64,
}

/// Plot margins in pixels; unset sides fall back to engine defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub t: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    /// Nearest point by distance to the pointer.
    Closest,
    /// Nearest x value.
    X,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub margin: Margin,
    pub hovermode: HoverMode,
}
