use crate::config::{Config, load_config};
use crate::parser::{extract_score_table, split_around_table};
use crate::render::{render_radar_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "kpiradar",
    version,
    about = "Render the KPI table of a markdown report as a radar chart"
)]
pub struct Args {
    /// Input markdown file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout except for PNG.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Legend title, e.g. "Performance Comparison"
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Config JSON file (themeVariables, radar, render)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    /// Extracted score table as JSON
    Json,
    /// Document cut around the table, as JSON
    Split,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;

    match args.output_format {
        OutputFormat::Svg => {
            let svg = chart_svg(&input, args.title.as_deref(), &config)?;
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = chart_svg(&input, args.title.as_deref(), &config)?;
            write_png(&svg, &config, &output)?;
        }
        OutputFormat::Json | OutputFormat::Split => {
            let json = structured_output(&input, args.output_format)?;
            write_text(&json, args.output.as_deref())?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed by an embedding program.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn chart_svg(input: &str, title: Option<&str>, config: &Config) -> Result<String> {
    let table = extract_score_table(input).ok_or_else(no_table)?;
    let svg = render_radar_svg(&table, title, &config.theme, &config.radar);
    Ok(svg)
}

#[cfg(feature = "png")]
fn write_png(svg: &str, config: &Config, output: &Path) -> Result<()> {
    crate::raster::write_output_png(svg, output, &config.render)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _config: &Config, _output: &Path) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn structured_output(input: &str, format: OutputFormat) -> Result<String> {
    let json = match format {
        OutputFormat::Split => {
            let split = split_around_table(input).ok_or_else(no_table)?;
            serde_json::to_string_pretty(&split)?
        }
        _ => {
            let table = extract_score_table(input).ok_or_else(no_table)?;
            serde_json::to_string_pretty(&table)?
        }
    };
    Ok(json)
}

fn no_table() -> anyhow::Error {
    anyhow::anyhow!("No KPI table found in input")
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_text(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = concat!(
        "# Benchmark\n\n",
        "| KPI Category | Nike | Adidas |\n|---|---|---|\n",
        "| Innovation | 4 | 3.5 |\n| Overall | 4 | 3.5 |\n",
        "\nNotes.\n"
    );

    #[test]
    fn parses_flags() {
        let argv = "kpiradar -i report.md -e png -o chart.png -t Scores".split(' ');
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.output_format, OutputFormat::Png);
        assert_eq!(args.title.as_deref(), Some("Scores"));
        assert_eq!(args.input, Some(PathBuf::from("report.md")));
        assert!(!args.verbose);
    }

    #[test]
    fn json_output_contains_table() {
        let json = structured_output(REPORT, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["companies"], serde_json::json!(["Nike", "Adidas"]));
        assert_eq!(value["categories"], serde_json::json!(["Innovation"]));
    }

    #[test]
    fn split_output_uses_camel_case_keys() {
        let json = structured_output(REPORT, OutputFormat::Split).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["beforeTable"], "# Benchmark\n\n");
        assert_eq!(value["afterTable"], "\nNotes.\n");
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = chart_svg("just prose", None, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "No KPI table found in input");
        assert!(structured_output("just prose", OutputFormat::Split).is_err());
    }

    #[test]
    fn png_requires_output_path() {
        assert!(ensure_output(&None, "png").is_err());
        assert_eq!(
            ensure_output(&Some(PathBuf::from("a.png")), "png").unwrap(),
            PathBuf::from("a.png")
        );
    }
}
