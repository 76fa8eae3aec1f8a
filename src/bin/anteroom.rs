//! CLI binary for anteroom.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `PreviewConfig` and prints the resulting data URL (or writes the
//! decoded image to a file).

use anteroom::{page_count, preview, Preview, PreviewConfig, PreviewFormat};
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Preview page 1 as a data URL on stdout
  anteroom upload.pdf

  # Preview page 3, write the decoded JPEG to a file
  anteroom upload.pdf --page 3 -o page3.jpg

  # Lossless PNG at 2x zoom
  anteroom upload.pdf --format png --scale 2.0 -o page1.png

  # Page count only, no rendering
  anteroom upload.pdf --count-only

  # Structured JSON ({"data_url": …, "page_count": …})
  anteroom upload.pdf --json > preview.json

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to an existing libpdfium shared library.
                    Without it, the platform default search path is used.
"#;

/// Render a preview of one PDF page as an image data URL.
#[derive(Parser, Debug)]
#[command(
    name = "anteroom",
    version,
    about = "Render a preview of one PDF page as an image data URL",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local path to a .pdf file.
    input: PathBuf,

    /// 1-based page number to preview.
    #[arg(short, long, env = "ANTEROOM_PAGE", default_value_t = 1)]
    page: usize,

    /// Write the decoded image to this file instead of printing a data URL.
    #[arg(short, long, env = "ANTEROOM_OUTPUT")]
    output: Option<PathBuf>,

    /// Zoom factor applied to the page's native dimensions (0.1–8.0).
    #[arg(long, env = "ANTEROOM_SCALE", default_value_t = 1.5)]
    scale: f32,

    /// JPEG quality (1–100). Ignored for PNG.
    #[arg(long, env = "ANTEROOM_QUALITY", default_value_t = 92,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Output image format: jpeg or png.
    #[arg(long, env = "ANTEROOM_FORMAT", value_enum, default_value = "jpeg")]
    format: FormatArg,

    /// Print the page count only, no rendering.
    #[arg(long)]
    count_only: bool,

    /// Output structured JSON instead of the bare data URL.
    #[arg(long, env = "ANTEROOM_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "ANTEROOM_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the result itself.
    #[arg(short, long, env = "ANTEROOM_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Jpeg,
    Png,
}

impl From<FormatArg> for PreviewFormat {
    fn from(v: FormatArg) -> Self {
        match v {
            FormatArg::Jpeg => PreviewFormat::Jpeg,
            FormatArg::Png => PreviewFormat::Png,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Count-only mode ──────────────────────────────────────────────────
    if cli.count_only {
        let count = page_count(&cli.input)
            .await
            .context("Failed to read page count")?;

        if cli.json {
            println!("{}", serde_json::json!({ "page_count": count }));
        } else {
            println!("{count}");
        }
        return Ok(());
    }

    // ── Build config and render ──────────────────────────────────────────
    let config = PreviewConfig::builder()
        .scale(cli.scale)
        .jpeg_quality(cli.quality)
        .format(cli.format.into())
        .build()
        .context("Invalid configuration")?;

    let result = preview(&cli.input, cli.page, &config)
        .await
        .context("Preview failed")?;

    // ── Emit ─────────────────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        write_image(&result, output_path)?;
        if !cli.quiet {
            eprintln!(
                "Wrote page {}/{} to {}",
                cli.page,
                result.page_count,
                output_path.display()
            );
        }
    } else if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialise preview")?
        );
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(result.data_url.as_bytes())
            .context("Failed to write to stdout")?;
        handle.write_all(b"\n").ok();

        if !cli.quiet {
            eprintln!("{} pages in document", result.page_count);
        }
    }

    Ok(())
}

/// Decode the data-URL payload back to raw image bytes and write them out.
fn write_image(result: &Preview, path: &PathBuf) -> Result<()> {
    let payload = result
        .data_url
        .split_once(";base64,")
        .map(|(_, b64)| b64)
        .context("Preview data URL is missing a base64 payload")?;

    let bytes = STANDARD
        .decode(payload)
        .context("Preview payload is not valid base64")?;

    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))?;

    Ok(())
}
