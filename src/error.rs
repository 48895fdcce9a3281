use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid surface: `{id}` does not resolve to a mounted surface")]
    InvalidSurface { id: String },

    #[error("malformed {series} series: x has {x_len} values, y has {y_len}")]
    MalformedSeries {
        series: &'static str,
        x_len: usize,
        y_len: usize,
    },

    #[error("hover text count {annotations} does not match {points} data points")]
    MismatchedAnnotations { points: usize, annotations: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render engine failure: {0}")]
    RenderEngineFailure(String),
}
