use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlotError, PlotResult};

/// RGBA color with 8-bit channels and a unit-interval alpha.
///
/// Serializes as a CSS `rgba(r, g, b, a)` string, which is what the plot
/// schema expects for marker and axis colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(PlotError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = PlotError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (body, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(PlotError::InvalidData(format!(
                "unsupported color `{trimmed}`: expected rgb(..) or rgba(..)"
            )));
        };
        let body = body.strip_suffix(')').ok_or_else(|| {
            PlotError::InvalidData(format!("unterminated color `{trimmed}`"))
        })?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(PlotError::InvalidData(format!(
                "color `{trimmed}` must have {expected} components"
            )));
        }

        let channel = |name: &str, raw: &str| {
            raw.parse::<u8>().map_err(|_| {
                PlotError::InvalidData(format!("color channel `{name}` must be 0..=255, got `{raw}`"))
            })
        };
        let red = channel("red", parts[0])?;
        let green = channel("green", parts[1])?;
        let blue = channel("blue", parts[2])?;
        let alpha = if has_alpha {
            parts[3].parse::<f64>().map_err(|_| {
                PlotError::InvalidData(format!("color alpha must be numeric, got `{}`", parts[3]))
            })?
        } else {
            1.0
        };

        let color = Self::rgba(red, green, blue, alpha);
        color.validate()?;
        Ok(color)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
