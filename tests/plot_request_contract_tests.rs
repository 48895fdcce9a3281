use scaling_plot::core::{PLOT_REQUEST_JSON_SCHEMA_V1, PlotRequest};
use scaling_plot::error::PlotError;

fn sample_request() -> PlotRequest {
    PlotRequest::new("chart1", "Y = 0.85 X + 1.02")
        .with_fit(vec![-1.0, 2.0], vec![0.17, 2.72])
        .with_data(vec![-0.5, 1.5], vec![0.6, 2.2])
        .with_x_axis("Reaction_Energy", "N2 \u{2192} N* N* (eV)")
        .with_y_axis("Activation_Energy", "N2 \u{2192} N* N* (eV)")
        .with_annotations(["Ru(0001)", "Fe(110)"])
}

#[test]
fn v1_envelope_round_trips() {
    let request = sample_request();
    let json = request.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {PLOT_REQUEST_JSON_SCHEMA_V1}")));

    let parsed = PlotRequest::from_json_compat_str(&json).expect("parse envelope");
    assert_eq!(parsed, request);
}

#[test]
fn bare_request_with_omitted_fields_is_accepted() {
    let parsed = PlotRequest::from_json_compat_str(
        r#"{
            "plot_id": "chart1",
            "plot_label": "Fit",
            "data": { "x": [0.5], "y": [1.1] },
            "annotations": ["halo A"]
        }"#,
    )
    .expect("bare request");

    assert_eq!(parsed.plot_id, "chart1");
    assert!(parsed.fit.is_empty());
    assert_eq!(parsed.data.len(), 1);
    assert_eq!(parsed.x_label, "");
    parsed.validate().expect("valid request");
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let raw = r#"{ "schema_version": 2, "request": { "plot_id": "c", "plot_label": "f" } }"#;
    let err = PlotRequest::from_json_compat_str(raw).expect_err("v2 rejected");
    assert!(matches!(err, PlotError::InvalidData(ref message) if message.contains("version: 2")));
}

#[test]
fn garbage_is_rejected() {
    assert!(PlotRequest::from_json_compat_str("[1, 2, 3]").is_err());
}

#[test]
fn bare_request_error_names_the_bad_field() {
    let raw = r#"{ "plot_id": 5, "plot_label": "Fit" }"#;
    let err = PlotRequest::from_json_compat_str(raw).expect_err("numeric id rejected");
    let PlotError::InvalidData(message) = err else {
        panic!("expected InvalidData, got {err:?}");
    };
    assert!(message.contains("plot request json:"), "{message}");
    assert!(!message.contains("schema_version"), "{message}");
}

#[test]
fn bare_request_missing_label_reports_that_field() {
    let err = PlotRequest::from_json_compat_str(r#"{ "plot_id": "chart1" }"#)
        .expect_err("label required");
    let PlotError::InvalidData(message) = err else {
        panic!("expected InvalidData, got {err:?}");
    };
    assert!(message.contains("plot_label"), "{message}");
}

#[test]
fn envelope_with_bad_request_reports_payload_error() {
    let raw = r#"{ "schema_version": 1, "request": { "plot_label": "f" } }"#;
    let err = PlotRequest::from_json_compat_str(raw).expect_err("missing id");
    let PlotError::InvalidData(message) = err else {
        panic!("expected InvalidData, got {err:?}");
    };
    assert!(message.contains("payload"), "{message}");
    assert!(message.contains("plot_id"), "{message}");
}
