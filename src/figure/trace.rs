use serde::{Deserialize, Serialize};

use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
}

/// How a scatter trace draws its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Lines,
    Markers,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: Color,
}

/// One visual data series of a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub name: String,
    pub mode: TraceMode,
    pub showlegend: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    pub marker: Marker,
}

impl ScatterTrace {
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>, mode: TraceMode, color: Color) -> Self {
        Self {
            kind: TraceKind::Scatter,
            x,
            y,
            name: String::new(),
            mode,
            showlegend: true,
            text: None,
            marker: Marker { color },
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.showlegend = show;
        self
    }

    /// Sets per-point hover text; an empty list leaves hover text unset.
    #[must_use]
    pub fn with_hover_text(mut self, text: Vec<String>) -> Self {
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn hover_text_at(&self, index: usize) -> Option<&str> {
        self.text.as_ref()?.get(index).map(String::as_str)
    }
}
