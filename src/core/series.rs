use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Ordered coordinate pairs for one trace, stored column-wise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub x: Vec<f64>,
    #[serde(default)]
    pub y: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of points, taken from the x column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }

    /// Checks that both columns have the same length and hold finite values.
    ///
    /// `name` identifies the series in the returned error.
    pub fn validate(&self, name: &'static str) -> PlotResult<()> {
        if self.x.len() != self.y.len() {
            return Err(PlotError::MalformedSeries {
                series: name,
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }

        for (axis, values) in [("x", &self.x), ("y", &self.y)] {
            if let Some(index) = values.iter().position(|value| !value.is_finite()) {
                return Err(PlotError::InvalidData(format!(
                    "{name} series {axis}[{index}] must be finite"
                )));
            }
        }

        Ok(())
    }
}
