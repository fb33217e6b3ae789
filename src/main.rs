use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use themedither::{
    color_palette::{Compression, Theme},
    config::SweepConfig,
    sweep,
    utils::image,
};

/// Dither an image against every requested theme and compression level.
#[derive(Parser)]
#[command(name = "themedither", version)]
struct Cli {
    /// PNG or JPEG image to dither
    input: PathBuf,

    /// JSON sweep configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the dithered PNGs, defaults to the input's directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Only render these themes (repeatable), overrides the config
    #[arg(short, long = "theme")]
    themes: Vec<String>,

    /// Only render these compression levels (repeatable), overrides the config
    #[arg(short = 'C', long = "compression")]
    compressions: Vec<String>,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "themedither=info".into()),
        )
        .without_time()
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SweepConfig::read_config(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => SweepConfig::default(),
    };
    if !cli.themes.is_empty() {
        config.themes = cli
            .themes
            .iter()
            .map(|name| name.parse::<Theme>())
            .collect::<Result<_, _>>()?;
    }
    if !cli.compressions.is_empty() {
        config.compressions = cli
            .compressions
            .iter()
            .map(|name| name.parse::<Compression>())
            .collect::<Result<_, _>>()?;
    }

    let source = image::read_image(&cli.input)
        .with_context(|| format!("reading image {}", cli.input.display()))?;
    let basename = cli
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input file has no usable name")?;
    let output_dir = match cli.output_dir {
        Some(dir) => dir,
        None => cli
            .input
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default(),
    };
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    tracing::info!(
        input = %cli.input.display(),
        outputs = config.combinations(),
        "starting sweep"
    );

    let mut failed = 0_usize;
    for output in sweep::run(&config, &source) {
        let written = output.and_then(|output| {
            let path = output_dir.join(output.filename(basename));
            image::write_image(&output.image, &path)?;
            tracing::info!(path = %path.display(), "wrote");
            Ok(())
        });
        if let Err(err) = written {
            tracing::error!(%err, "sweep output failed");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} outputs failed", config.combinations());
    }
    Ok(())
}
