// File: crates/demo/src/main.rs
// Summary: Demo loads one numeric CSV column and renders histogram/scatter/line/box PNGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use plot_core::{parse_color, Color, PlotKind, PlotRenderer, DEFAULT_BINS, HEIGHT, WIDTH};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plot-demo")]
#[command(about = "Render statistical plots of a CSV column to PNG", long_about = None)]
struct Args {
    /// CSV file to read
    input: PathBuf,

    /// Column to plot, by header name or zero-based index
    #[arg(short, long, default_value = "0")]
    column: String,

    /// Plot kind: histogram, scatter, line, box or all
    #[arg(short, long, default_value = "all")]
    kind: String,

    #[arg(long, default_value_t = WIDTH)]
    width: u32,

    #[arg(long, default_value_t = HEIGHT)]
    height: u32,

    /// Histogram bin count
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    /// Mark color as #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#000000", value_parser = parse_color_arg)]
    color: Color,

    /// Background color as #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#ffffff", value_parser = parse_color_arg)]
    background: Color,

    /// Pin the lower bound of the data range
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Pin the upper bound of the data range
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// The CSV file has no header row
    #[arg(long)]
    no_header: bool,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// Plot name, used for output file names (defaults to the input file stem)
    #[arg(long)]
    name: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_color_arg(s: &str) -> std::result::Result<Color, String> {
    parse_color(s).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    // Failing to produce an image is fatal for the process
    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(args: Args) -> Result<()> {
    let kinds = parse_kinds(&args.kind)?;
    let data = load_column(&args.input, &args.column, !args.no_header)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!(samples = data.len(), column = %args.column, "loaded data");
    if data.is_empty() {
        anyhow::bail!("no numeric values in column '{}'", args.column);
    }

    let name = args.name.clone().unwrap_or_else(|| {
        args.input.file_stem().and_then(|s| s.to_str()).unwrap_or("plot").to_string()
    });

    let mut plot = PlotRenderer::new(data, args.width, args.height, args.color, name.clone(), PathBuf::new())?;
    plot.set_bins(args.bins)?;
    plot.set_background(args.background);
    if let Some(min) = args.min { plot.set_min(min); }
    if let Some(max) = args.max { plot.set_max(max); }

    for kind in kinds {
        let out = out_name_with(&args.out, &name, kind);
        plot.set_sink_name(&out);
        plot.save(kind).with_context(|| format!("rendering {kind} plot"))?;
        println!("Wrote {}", out.display());
    }

    let (min, max) = plot.min_max();
    println!("Range: [{:.4}, {:.4}] across {} samples", min, max, plot.data().len());
    Ok(())
}

fn parse_kinds(raw: &str) -> Result<Vec<PlotKind>> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(PlotKind::ALL.to_vec());
    }
    raw.split(',').map(|k| k.parse::<PlotKind>().map_err(Into::into)).collect()
}

/// Produce output file name like <out>/<name>_<kind>.png
fn out_name_with(out: &Path, name: &str, kind: PlotKind) -> PathBuf {
    out.join(format!("{name}_{kind}.png"))
}

/// Read one column of `path` as f64. Cells that do not parse are skipped with a warning.
fn load_column(path: &Path, column: &str, has_headers: bool) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let index = if has_headers {
        let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
        resolve_column(&headers, column)?
    } else {
        column.trim().parse::<usize>().with_context(|| format!("column '{column}' must be an index without a header row"))?
    };

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        match rec.get(index).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(v) if v.is_finite() => out.push(v),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without a finite value in the selected column");
    }
    Ok(out)
}

fn resolve_column(headers: &[String], column: &str) -> Result<usize> {
    let want = column.trim().to_lowercase();
    if let Some(i) = headers.iter().position(|h| *h == want) {
        return Ok(i);
    }
    match want.parse::<usize>() {
        Ok(i) if i < headers.len() => Ok(i),
        _ => anyhow::bail!("no column '{}' in headers {:?}", column, headers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_column_by_name_and_index() {
        let f = csv_file("time,Value\n0,1.5\n1,oops\n2,-3\n");
        assert_eq!(load_column(f.path(), "value", true).unwrap(), vec![1.5, -3.0]);
        assert_eq!(load_column(f.path(), "0", true).unwrap(), vec![0.0, 1.0, 2.0]);
        assert!(load_column(f.path(), "price", true).is_err());
    }

    #[test]
    fn headerless_files_need_an_index() {
        let f = csv_file("4,5\n6,7\n");
        assert_eq!(load_column(f.path(), "1", false).unwrap(), vec![5.0, 7.0]);
        assert!(load_column(f.path(), "b", false).is_err());
    }

    #[test]
    fn kinds_parse_lists_and_all() {
        assert_eq!(parse_kinds("all").unwrap(), PlotKind::ALL.to_vec());
        assert_eq!(parse_kinds("box,line").unwrap(), vec![PlotKind::Box, PlotKind::Line]);
        assert!(parse_kinds("pie").is_err());
    }

    #[test]
    fn output_names_include_kind() {
        assert_eq!(
            out_name_with(Path::new("target/out"), "prices", PlotKind::Histogram),
            PathBuf::from("target/out/prices_histogram.png")
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
