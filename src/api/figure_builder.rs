use crate::core::PlotRequest;
use crate::error::PlotResult;
use crate::figure::{
    Axis, AxisMirror, AxisTitleText, Figure, Layout, Margin, ScatterTrace, TickPlacement,
    TraceMode,
};

use super::{AxisTitle, ScalingPlotStyle};

/// Builds the two-trace scaling figure: fit line first, observed points second.
pub fn build_figure(request: &PlotRequest, style: &ScalingPlotStyle) -> PlotResult<Figure> {
    request.validate()?;

    let fit = ScatterTrace::new(
        request.fit.x.clone(),
        request.fit.y.clone(),
        TraceMode::Lines,
        style.fit_marker_color,
    )
    .with_name(request.plot_label.as_str())
    .with_legend(true);

    let data = ScatterTrace::new(
        request.data.x.clone(),
        request.data.y.clone(),
        TraceMode::Markers,
        style.data_marker_color,
    )
    .with_legend(false)
    .with_hover_text(request.annotations.clone());

    Ok(Figure {
        data: vec![fit, data],
        layout: Layout {
            xaxis: build_axis(
                AxisTitle::new(&request.out_type_x, &request.x_label),
                style,
            ),
            yaxis: build_axis(
                AxisTitle::new(&request.out_type_y, &request.y_label),
                style,
            ),
            legend: style.legend,
            margin: Margin {
                t: style.top_margin_px,
            },
            hovermode: style.hover_mode,
        },
    })
}

fn build_axis(title: AxisTitle<'_>, style: &ScalingPlotStyle) -> Axis {
    Axis {
        title: AxisTitleText {
            text: title.to_markup(),
        },
        showline: true,
        zerolinecolor: style.zero_line_color,
        linecolor: style.axis_line_color,
        tickcolor: style.axis_line_color,
        mirror: AxisMirror::AllTicks,
        ticks: TickPlacement::Inside,
    }
}
