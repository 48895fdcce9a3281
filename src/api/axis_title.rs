/// Axis title of the form *E*<sub>type</sub>label.
///
/// The symbol is always an italic `E`; `out_type` becomes its subscript and
/// `label` follows verbatim. Both fragments are inserted as-is, so they may
/// carry the engine's own inline markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTitle<'a> {
    pub out_type: &'a str,
    pub label: &'a str,
}

impl<'a> AxisTitle<'a> {
    pub const SYMBOL: &'static str = "E";

    #[must_use]
    pub fn new(out_type: &'a str, label: &'a str) -> Self {
        Self { out_type, label }
    }

    #[must_use]
    pub fn to_markup(&self) -> String {
        format!(
            "<i>{}</i><sub>{}</sub>{}",
            Self::SYMBOL,
            self.out_type,
            self.label
        )
    }
}
