use scaling_plot::api::ScalingPlotRenderer;
use scaling_plot::core::PlotRequest;
use scaling_plot::render::{PlotlyHtmlEngine, SurfaceDocument};

fn request(plot_id: &str, label: &str) -> PlotRequest {
    PlotRequest::new(plot_id, label)
        .with_fit(vec![0.0, 1.0], vec![0.0, 2.0])
        .with_data(vec![0.5], vec![1.1])
        .with_x_axis("kin", "mass")
        .with_y_axis("kin", "mass")
        .with_annotations(["halo A"])
}

#[test]
fn writes_container_and_react_call() {
    let mut document = SurfaceDocument::new().with_surface("chart1");
    let mut renderer = ScalingPlotRenderer::with_default_style(PlotlyHtmlEngine::new());

    renderer
        .render(&mut document, &request("chart1", "Fit"))
        .expect("render");

    let markup = document
        .surface("chart1")
        .and_then(|surface| surface.content())
        .expect("markup written");
    assert!(markup.starts_with("<div id=\"chart1\"></div>\n<script>Plotly.react(\"chart1\", ["));
    assert!(markup.ends_with(");</script>\n"));
    assert!(markup.contains("\"mode\":\"lines\""));
    assert!(markup.contains("\"text\":[\"halo A\"]"));
    assert!(markup.contains("<i>E<\\/i><sub>kin<\\/sub>mass"));
    assert!(markup.contains("\"hovermode\":\"closest\""));
}

#[test]
fn redraw_replaces_surface_markup() {
    let mut document = SurfaceDocument::new()
        .with_surface("chart1")
        .with_surface("chart2");
    let mut renderer = ScalingPlotRenderer::with_default_style(PlotlyHtmlEngine::new());

    renderer
        .render(&mut document, &request("chart1", "First"))
        .expect("first");
    renderer
        .render(&mut document, &request("chart1", "Second"))
        .expect("second");

    let surface = document.surface("chart1").expect("surface");
    let markup = surface.content().expect("markup");
    assert_eq!(surface.revision(), 2);
    assert_eq!(markup.matches("Plotly.react(").count(), 1);
    assert!(markup.contains("\"name\":\"Second\""));
    assert!(!markup.contains("\"name\":\"First\""));

    let untouched = document.surface("chart2").expect("chart2");
    assert!(untouched.content().is_none());
}

#[test]
fn labels_cannot_break_out_of_the_script() {
    let hostile = PlotRequest::new("chart1", "</script><script>alert(1)</script>")
        .with_fit(vec![0.0], vec![0.0]);
    let mut document = SurfaceDocument::new().with_surface("chart1");
    let mut renderer = ScalingPlotRenderer::with_default_style(PlotlyHtmlEngine::new());

    renderer.render(&mut document, &hostile).expect("render");

    let markup = document
        .surface("chart1")
        .and_then(|surface| surface.content())
        .expect("markup");
    assert_eq!(markup.matches("</script>").count(), 1);
}

#[test]
fn custom_global_name_is_used_for_the_call() {
    let engine = PlotlyHtmlEngine::with_global_name("window.charts").expect("valid global");
    assert_eq!(engine.global_name(), "window.charts");

    let mut document = SurfaceDocument::new().with_surface("chart1");
    let mut renderer = ScalingPlotRenderer::with_default_style(engine);
    renderer
        .render(&mut document, &request("chart1", "Fit"))
        .expect("render");

    let markup = document
        .surface("chart1")
        .and_then(|surface| surface.content())
        .expect("markup");
    assert!(markup.contains("<script>window.charts.react(\"chart1\""));
}
