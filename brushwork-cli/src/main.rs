use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use brushwork_html::{Options, Processor};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Expands syntax-highlighter shortcodes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// List of files to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Base URL prepended to delivered asset references
    #[arg(long, default_value = ".")]
    base_url: String,

    /// Emit only the expanded fragment stream, without page chrome
    #[arg(long)]
    embedded: bool,

    /// Print each document's activation set as JSON instead of writing HTML
    #[arg(long, conflicts_with = "embedded")]
    assets: bool,

    /// Page title for standalone output
    #[arg(long, default_value = "Document")]
    title: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let args = Args::parse();

    let options = Options::builder()
        .base_url(args.base_url.clone())
        .embedded(args.embedded)
        .title(args.title.clone())
        .build();
    let processor = Processor::new(options);

    for file in &args.files {
        if args.assets {
            report_assets(&processor, file)?;
        } else {
            convert_file(&processor, file)?;
        }
    }
    Ok(())
}

#[tracing::instrument(skip(processor))]
fn convert_file(processor: &Processor, file: &Path) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let html_path = file.with_extension("html");
    if html_path == file {
        bail!(
            "input file and output file cannot be the same: {}",
            file.display()
        );
    }
    tracing::debug!(source = ?file, destination = ?html_path, "processing file");

    let output = fs::File::create(&html_path)
        .with_context(|| format!("creating {}", html_path.display()))?;
    let mut writer = BufWriter::new(output);
    processor.convert(&mut writer, &content)?;
    writer.flush()?;

    println!("Generated HTML file: {}", html_path.display());
    Ok(())
}

#[tracing::instrument(skip(processor))]
fn report_assets(processor: &Processor, file: &Path) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let activation = processor.activation(&content);

    let report = serde_json::json!({
        "file": file,
        "scripts": activation.scripts(),
        "styles": activation.styles(),
        "footer_script": activation.footer_script(),
    });
    let mut stdout = std::io::stdout();
    serde_json::to_writer_pretty(&stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
