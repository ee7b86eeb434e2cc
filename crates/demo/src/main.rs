// File: crates/demo/src/main.rs
// Summary: Demo fetches a day's TSV file (or reads a local one) and renders PNG and SVG charts.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use dayline_core::{theme, ChartState, DataLoader, OptionsPatch, RenderOptions, ScaleKind};
use std::path::PathBuf;

// Built-in fallback so the demo draws something without a server: one day of
// three hourly-ish columns.
const SAMPLE_DAY: &str = "\
2024-06-01 00:00:00\t12\t30\t7
2024-06-01 04:00:00\t18\t28\t9
2024-06-01 08:00:00\t42\t26\t14
2024-06-01 12:00:00\t66\t25\t21
2024-06-01 16:00:00\t58\t27\t18
2024-06-01 20:00:00\t31\t29\t11
2024-06-01 23:00:00\t16\t30\t8
";

struct Cli {
    file: Option<PathBuf>,
    base_url: Option<String>,
    prefix: Option<String>,
    categories: Vec<String>,
    scale: ScaleKind,
    title: Option<String>,
    theme: String,
    date: NaiveDate,
}

fn parse_cli() -> Result<Cli> {
    let mut cli = Cli {
        file: None,
        base_url: None,
        prefix: None,
        categories: Vec::new(),
        scale: ScaleKind::Linear,
        title: None,
        theme: "dark".to_string(),
        date: Utc::now().date_naive(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => {
                cli.file = Some(PathBuf::from(args.next().context("--file needs a path")?));
            }
            "--url" => {
                cli.base_url = Some(args.next().context("--url needs a base URL")?);
            }
            "--prefix" => {
                cli.prefix = Some(args.next().context("--prefix needs a value")?);
            }
            "--category" => {
                cli.categories = args
                    .next()
                    .context("--category needs a comma-separated list")?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "--scale" => {
                cli.scale = args.next().context("--scale needs a name")?.parse()?;
            }
            "--title" => {
                cli.title = Some(args.next().context("--title needs a value")?);
            }
            "--theme" => {
                cli.theme = args.next().context("--theme needs a name")?;
            }
            other => {
                cli.date = NaiveDate::parse_from_str(other, "%Y-%m-%d").with_context(|| {
                    format!("unrecognized argument {other:?} (expected a YYYY-MM-DD date)")
                })?;
            }
        }
    }
    Ok(cli)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = parse_cli()?;

    let options = OptionsPatch {
        title: cli.title.clone(),
        scale: Some(cli.scale),
        margin: None,
        base_url: cli.base_url.clone(),
        prefix: cli.prefix.clone(),
        categories: if cli.categories.is_empty() {
            None
        } else {
            Some(cli.categories.clone())
        },
    }
    .resolve();

    let (state, stem) = if let Some(path) = cli.file.as_ref() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("chart")
            .to_string();
        (ChartState::from_tsv(options, &text)?, stem)
    } else if options.base_url.is_empty() {
        // No source given: render the built-in sample day.
        let mut options = options;
        if options.categories.is_empty() {
            options.categories = vec!["cpu".to_string(), "temp".to_string(), "io".to_string()];
        }
        (ChartState::from_tsv(options, SAMPLE_DAY)?, "sample".to_string())
    } else {
        let loader = DataLoader::new(options);
        println!("Fetching {}", loader.day_url(cli.date));
        (
            loader.load_day_or_empty(cli.date),
            cli.date.format("%Y%m%d").to_string(),
        )
    };

    if state.is_empty() {
        println!("No drawable series; rendering the empty chart.");
    } else {
        println!("Loaded {} series", state.series.len());
    }

    let opts = RenderOptions {
        theme: theme::find(&cli.theme),
        ..RenderOptions::default()
    };

    let out_png = PathBuf::from("target/out").join(format!("chart_{stem}.png"));
    state.render_to_png(&opts, &out_png)?;
    println!("Wrote {}", out_png.display());

    let out_svg = out_png.with_extension("svg");
    state.render_to_svg(&opts, &out_svg)?;
    println!("Wrote {}", out_svg.display());

    Ok(())
}
