use std::io::{Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "heure-cli",
    about = "Split bracket JSON \"heure\" fields into \"date\" and \"time\"",
    version
)]
struct Args {
    /// Input JSON document
    #[arg(short, long, default_value = "brackets.json")]
    input: PathBuf,

    /// Output JSON document
    #[arg(short, long, default_value = "combats_updated.json")]
    output: PathBuf,

    /// Year written into every converted date
    #[arg(long, env = "HEURE_YEAR", default_value_t = heure::DEFAULT_YEAR)]
    year: i32,

    /// Indentation of the output document
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Print the converted document instead of writing the output file
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "starting");

    let options = heure::Options::default()
        .with_year(args.year)
        .with_indent(args.indent);

    if args.stdout {
        let mut doc = heure::document::load_document(&args.input)
            .with_context(|| format!("reading {}", args.input.display()))?;
        heure::normalize_value(&mut doc, &options)
            .with_context(|| format!("converting {}", args.input.display()))?;
        let mut out = stdout().lock();
        heure::document::write_document(&mut out, &doc, &options)?;
        writeln!(out)?;
        return Ok(());
    }

    heure::convert_file(&args.input, &args.output, &options).with_context(|| {
        format!(
            "converting {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;
    Ok(())
}
