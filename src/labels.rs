//! Builders for the text a host passes into a scaling plot request.
//!
//! These cover label and hover-text conventions only; fetching the data and
//! fitting the line happen elsewhere.

use crate::error::{PlotError, PlotResult};

/// Column width used when wrapping references inside hover text.
pub const HOVER_TEXT_WRAP_WIDTH: usize = 25;

const EN_DASH: char = '\u{2013}';
const LINE_BREAK: &str = "<br>";

/// Reaction written as `AB|A|B`: the reactant and the two products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEquation {
    pub reactant: String,
    pub product_a: String,
    pub product_b: String,
}

impl ReactionEquation {
    pub fn parse(input: &str) -> PlotResult<Self> {
        let parts: Vec<&str> = input.split('|').collect();
        let [reactant, product_a, product_b] = parts.as_slice() else {
            return Err(PlotError::InvalidData(format!(
                "reaction `{input}` must have the form AB|A|B"
            )));
        };
        Ok(Self {
            reactant: (*reactant).to_owned(),
            product_a: (*product_a).to_owned(),
            product_b: (*product_b).to_owned(),
        })
    }

    /// Axis label such as `N2 → N* N* (eV)`.
    #[must_use]
    pub fn axis_label(&self) -> String {
        format!(
            "{} \u{2192} {} {} (eV)",
            self.reactant, self.product_a, self.product_b
        )
    }
}

/// Sources cited for one observed point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HoverReferences {
    #[default]
    None,
    /// Both axes plot the same reaction, so one reference covers the point.
    Shared(String),
    /// Each axis plots a different reaction with its own reference.
    PerAxis { x: String, y: String },
}

/// Hover text for one observed point: the surface facet plus its sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverAnnotation {
    pub surface: String,
    pub termination: String,
    pub references: HoverReferences,
}

impl HoverAnnotation {
    #[must_use]
    pub fn new(surface: impl Into<String>, termination: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            termination: termination.into(),
            references: HoverReferences::None,
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.references = HoverReferences::Shared(reference.into());
        self
    }

    #[must_use]
    pub fn with_axis_references(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.references = HoverReferences::PerAxis {
            x: x.into(),
            y: y.into(),
        };
        self
    }

    /// Termination with the short `1` form expanded to `0001`.
    #[must_use]
    pub fn termination(&self) -> &str {
        if self.termination == "1" {
            "0001"
        } else {
            &self.termination
        }
    }

    /// Renders `Surface(termination) <br><br>References:<br>...`.
    ///
    /// Per-axis references are tagged `X.` and `Y.`. Without references only
    /// the facet is shown.
    #[must_use]
    pub fn to_hover_text(&self) -> String {
        let facet = format!("{}({})", self.surface, self.termination());
        let references = match &self.references {
            HoverReferences::None => return facet,
            HoverReferences::Shared(reference) => wrapped(reference),
            HoverReferences::PerAxis { x, y } => {
                format!("X. {}{LINE_BREAK}Y. {}", wrapped(x), wrapped(y))
            }
        };
        format!("{facet} {LINE_BREAK}{LINE_BREAK}References:{LINE_BREAK}{references}")
    }
}

fn wrapped(reference: &str) -> String {
    wrap_words(reference, HOVER_TEXT_WRAP_WIDTH).join(LINE_BREAK)
}

/// Greedy word wrap. Words longer than `width` stay on their own line.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Legend label for a precomputed linear fit, e.g. `Y = 1.50 X + 0.25`.
///
/// Only strictly positive values take the plain or `+` form; zero is written
/// with an en dash like a negative value.
pub fn linear_fit_label(slope: f64, intercept: f64) -> PlotResult<String> {
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(PlotError::InvalidData(
            "fit slope and intercept must be finite".to_owned(),
        ));
    }
    let slope = if slope > 0.0 {
        format!("{slope:.2}")
    } else {
        format!("{EN_DASH}{:.2}", slope.abs())
    };
    let intercept = if intercept > 0.0 {
        format!("+ {intercept:.2}")
    } else {
        format!("{EN_DASH} {:.2}", intercept.abs())
    };
    Ok(format!("Y = {slope} X {intercept}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap_words("a supercalifragilistic word", 10);
        assert_eq!(lines, ["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_words("   ", 25).is_empty());
    }
}
