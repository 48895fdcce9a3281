use serde::{Deserialize, Serialize};

use crate::core::Series;
use crate::error::{PlotError, PlotResult};

/// Everything needed to draw one scaling-relation chart.
///
/// Built per render call and never retained by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequest {
    /// Identifier of the surface that hosts the chart.
    pub plot_id: String,
    /// Legend name of the fit line.
    pub plot_label: String,
    #[serde(default)]
    pub fit: Series,
    #[serde(default)]
    pub data: Series,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    /// Subscript shown after the italic `E` on the x-axis title.
    #[serde(default)]
    pub out_type_x: String,
    /// Subscript shown after the italic `E` on the y-axis title.
    #[serde(default)]
    pub out_type_y: String,
    /// Hover text per data point, parallel to `data`.
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl PlotRequest {
    #[must_use]
    pub fn new(plot_id: impl Into<String>, plot_label: impl Into<String>) -> Self {
        Self {
            plot_id: plot_id.into(),
            plot_label: plot_label.into(),
            fit: Series::empty(),
            data: Series::empty(),
            x_label: String::new(),
            y_label: String::new(),
            out_type_x: String::new(),
            out_type_y: String::new(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_fit(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.fit = Series::new(x, y);
        self
    }

    #[must_use]
    pub fn with_data(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.data = Series::new(x, y);
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, out_type: impl Into<String>, label: impl Into<String>) -> Self {
        self.out_type_x = out_type.into();
        self.x_label = label.into();
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, out_type: impl Into<String>, label: impl Into<String>) -> Self {
        self.out_type_y = out_type.into();
        self.y_label = label.into();
        self
    }

    #[must_use]
    pub fn with_annotations<I, S>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.annotations = annotations.into_iter().map(Into::into).collect();
        self
    }

    /// Rejects requests the engine could only draw partially.
    ///
    /// Annotations may be empty (no hover text); otherwise there must be
    /// exactly one per data point.
    pub fn validate(&self) -> PlotResult<()> {
        if self.plot_id.trim().is_empty() {
            return Err(PlotError::InvalidSurface {
                id: self.plot_id.clone(),
            });
        }

        self.fit.validate("fit")?;
        self.data.validate("data")?;

        if !self.annotations.is_empty() && self.annotations.len() != self.data.len() {
            return Err(PlotError::MismatchedAnnotations {
                points: self.data.len(),
                annotations: self.annotations.len(),
            });
        }

        Ok(())
    }
}
