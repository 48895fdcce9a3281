use tracing::trace;

use crate::error::{PlotError, PlotResult};
use crate::figure::Figure;
use crate::render::{PlotEngine, Surface};

pub const DEFAULT_PLOTLY_GLOBAL: &str = "Plotly";

/// Engine that delegates drawing to Plotly.js in the browser.
///
/// Each draw writes the surface's container `div` together with a script
/// calling `Plotly.react`, which replaces any figure already on the element.
#[derive(Debug, Clone)]
pub struct PlotlyHtmlEngine {
    global_name: String,
}

impl Default for PlotlyHtmlEngine {
    fn default() -> Self {
        Self {
            global_name: DEFAULT_PLOTLY_GLOBAL.to_owned(),
        }
    }
}

impl PlotlyHtmlEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different global for the Plotly.js namespace.
    ///
    /// Accepts a dotted path of script identifiers such as `window.Plotly`.
    pub fn with_global_name(global_name: impl Into<String>) -> PlotResult<Self> {
        let global_name = global_name.into();
        if !global_name.split('.').all(is_script_identifier) {
            return Err(PlotError::InvalidData(format!(
                "`{global_name}` is not a valid script identifier path"
            )));
        }
        Ok(Self { global_name })
    }

    #[must_use]
    pub fn global_name(&self) -> &str {
        &self.global_name
    }

    /// Markup for one surface: container element followed by the draw script.
    pub fn markup(&self, surface_id: &str, figure: &Figure) -> PlotResult<String> {
        let id_literal = script_json(&surface_id)?;
        let data = script_json(&figure.data)?;
        let layout = script_json(&figure.layout)?;

        Ok(format!(
            "<div id=\"{}\"></div>\n<script>{}.react({id_literal}, {data}, {layout});</script>\n",
            escape_attribute(surface_id),
            self.global_name,
        ))
    }
}

impl PlotEngine for PlotlyHtmlEngine {
    fn plot(&mut self, surface: &mut Surface, figure: &Figure) -> PlotResult<()> {
        let markup = self.markup(surface.id(), figure)?;
        trace!(
            surface = surface.id(),
            bytes = markup.len(),
            "write plotly markup"
        );
        surface.replace_content(markup);
        Ok(())
    }
}

fn is_script_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Serializes a value for embedding inside a `<script>` element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> PlotResult<String> {
    let json = serde_json::to_string(value)
        .map_err(|e| PlotError::RenderEngineFailure(format!("failed to encode figure: {e}")))?;
    Ok(json.replace("</", "<\\/"))
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
