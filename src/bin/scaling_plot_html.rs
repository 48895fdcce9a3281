use scaling_plot::api::{ScalingPlotRenderer, ScalingPlotStyle};
use scaling_plot::core::PlotRequest;
use scaling_plot::render::{PlotlyHtmlEngine, SurfaceDocument};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const USAGE: &str =
    "usage: scaling_plot_html --input <request.json> [--style <style.json>] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    style: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = scaling_plot::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = read_file(&args.input)?;
    let request = PlotRequest::from_json_compat_str(&raw).map_err(|err| err.to_string())?;

    let style = match &args.style {
        Some(path) => {
            ScalingPlotStyle::from_json_str(&read_file(path)?).map_err(|err| err.to_string())?
        }
        None => ScalingPlotStyle::default(),
    };

    let mut document = SurfaceDocument::new().with_surface(request.plot_id.as_str());
    let mut renderer =
        ScalingPlotRenderer::new(PlotlyHtmlEngine::new(), style).map_err(|err| err.to_string())?;
    renderer
        .render(&mut document, &request)
        .map_err(|err| err.to_string())?;

    let markup = document
        .surface(&request.plot_id)
        .and_then(|surface| surface.content())
        .ok_or_else(|| format!("surface `{}` was not rendered", request.plot_id))?;

    match &args.output {
        Some(path) => fs::write(path, markup)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => std::io::stdout()
            .write_all(markup.as_bytes())
            .map_err(|err| format!("failed to write stdout: {err}")),
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut style = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--style" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --style".to_owned())?;
                style = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        style,
        output,
    })
}
