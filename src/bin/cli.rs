use clap::Parser;
use clap_num::si_number;
use log::debug;
use std::path::PathBuf;

use wavecolor::*;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to palette config file (.json, .ron or .yaml).
    #[arg(short, long, env = "WAVECOLOR_CONFIG")]
    config: Option<PathBuf>,
    /// Palette to sample, overriding the selection in the config file.
    #[arg(short, long)]
    palette: Option<PaletteKind>,
    /// First sample point.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,
    /// Distance between consecutive sample points.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    step: f64,
    /// Number of samples to print (accepts SI postfixes).
    #[arg(short = 'n', long, default_value = "16", value_parser = si_number::<usize>)]
    count: usize,
    /// Multiply sample points by the palette's scale modifier.
    #[arg(long)]
    scaled: bool,
    /// List the available palettes and exit.
    #[arg(short, long)]
    list: bool,
}

impl Cli {
    fn registry(&self) -> Result<PaletteRegistry, ConfigError> {
        let config = match &self.config {
            Some(path) => PaletteConfig::from_file(path)?,
            None => PaletteConfig::default(),
        };

        let mut registry = config.into_registry();
        if let Some(kind) = self.palette {
            registry.select(kind);
        }
        Ok(registry)
    }
}

fn list(registry: &PaletteRegistry) {
    for kind in PaletteKind::ALL {
        let palette = registry.get(kind);
        let marker = if kind == registry.selection() { "*" } else { " " };
        println!(
            "{} {:<12} wave length {:<8} scale {}",
            marker,
            kind,
            palette.wave_length(),
            palette.scale_modifier()
        );
    }
}

fn run() -> Result<(), ConfigError> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let registry = cli.registry()?;

    if cli.list {
        list(&registry);
        return Ok(());
    }

    let palette = registry.snapshot();
    debug!("sampling {} points from {} palette", cli.count, palette.kind());

    for i in 0..cli.count {
        let n = cli.start + i as f64 * cli.step;
        let color = if cli.scaled { palette.scaled_color(n) } else { palette.color(n) };
        println!("{:>12}  {}", n, color);
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
