mod axis_title;
mod figure_builder;
mod renderer;
mod style;

pub use axis_title::AxisTitle;
pub use figure_builder::build_figure;
pub use renderer::{ScalingPlotRenderer, render_scaling_plot};
pub use style::{
    DEFAULT_AXIS_LINE_COLOR, DEFAULT_DATA_MARKER_COLOR, DEFAULT_FIT_MARKER_COLOR, DEFAULT_LEGEND,
    DEFAULT_TOP_MARGIN_PX, DEFAULT_ZERO_LINE_COLOR, MAX_TOP_MARGIN_PX, ScalingPlotStyle,
};
