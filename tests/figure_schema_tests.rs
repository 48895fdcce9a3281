use scaling_plot::api::{ScalingPlotStyle, build_figure};
use scaling_plot::core::PlotRequest;
use scaling_plot::figure::Figure;
use serde_json::{Value, json};

fn figure_json(request: &PlotRequest) -> Value {
    let figure = build_figure(request, &ScalingPlotStyle::default()).expect("figure");
    serde_json::from_str(&figure.to_json_string().expect("json")).expect("valid json")
}

#[test]
fn traces_follow_plotly_schema() {
    let request = PlotRequest::new("chart1", "Y = 1.00 X + 0.00")
        .with_fit(vec![0.0, 1.0], vec![0.0, 1.0])
        .with_data(vec![0.25, 0.75], vec![0.2, 0.8])
        .with_annotations(["Pt(111)", "Cu(100)"]);
    let value = figure_json(&request);

    assert_eq!(
        value["data"][0],
        json!({
            "type": "scatter",
            "x": [0.0, 1.0],
            "y": [0.0, 1.0],
            "name": "Y = 1.00 X + 0.00",
            "mode": "lines",
            "showlegend": true,
            "marker": { "color": "rgba(0, 0, 0, 0.25)" }
        })
    );
    assert_eq!(
        value["data"][1],
        json!({
            "type": "scatter",
            "x": [0.25, 0.75],
            "y": [0.2, 0.8],
            "name": "",
            "mode": "markers",
            "showlegend": false,
            "text": ["Pt(111)", "Cu(100)"],
            "marker": { "color": "rgba(91, 191, 224, 1)" }
        })
    );
}

#[test]
fn layout_carries_axis_legend_margin_and_hover_settings() {
    let request = PlotRequest::new("chart1", "Fit")
        .with_x_axis("Reaction_Energy", "N2 \u{2192} N* N* (eV)")
        .with_y_axis("Activation_Energy", "N2 \u{2192} N* N* (eV)");
    let value = figure_json(&request);
    let layout = &value["layout"];

    assert_eq!(
        layout["xaxis"],
        json!({
            "title": { "text": "<i>E</i><sub>Reaction_Energy</sub>N2 \u{2192} N* N* (eV)" },
            "showline": true,
            "zerolinecolor": "rgba(0, 0, 0, 0.4)",
            "linecolor": "rgba(0, 0, 0, 0.2)",
            "tickcolor": "rgba(0, 0, 0, 0.2)",
            "mirror": "allticks",
            "ticks": "inside"
        })
    );
    assert_eq!(
        layout["yaxis"]["title"]["text"],
        "<i>E</i><sub>Activation_Energy</sub>N2 \u{2192} N* N* (eV)"
    );
    assert_eq!(
        layout["legend"],
        json!({ "xanchor": "center", "yanchor": "top", "x": 0.5, "y": 1.12 })
    );
    assert_eq!(layout["margin"], json!({ "t": 10 }));
    assert_eq!(layout["hovermode"], "closest");
}

#[test]
fn figure_json_round_trips() {
    let request = PlotRequest::new("chart1", "Fit")
        .with_fit(vec![0.0, 2.0], vec![1.0, 5.0])
        .with_data(vec![1.0], vec![3.0])
        .with_annotations(["only"]);
    let figure = build_figure(&request, &ScalingPlotStyle::default()).expect("figure");

    let pretty = figure.to_json_pretty().expect("pretty json");
    let parsed: Figure = serde_json::from_str(&pretty).expect("parse figure");
    assert_eq!(parsed, figure);
}
