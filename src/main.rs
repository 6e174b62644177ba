//! Table QR generator CLI
//!
//! Renders one styled QR code per table of a market into an output directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use table_qr::{
    batch::KNOWN_MARKETS, Batch, ECLevel, EyeStyle, ModuleStyle, Rgb, Settings, Version,
};

#[derive(Parser)]
#[command(name = "table-qr")]
#[command(about = "Styled QR codes for table ordering links")]
#[command(version)]
struct Cli {
    /// Host of the ordering site, e.g. order.example.com
    #[arg(short = 'u', long)]
    host: Option<String>,

    /// Market number
    #[arg(short, long)]
    market: Option<String>,

    /// Table count (1..=N) or table numbers separated by ';'
    #[arg(short, long)]
    tables: Option<String>,

    /// Output directory for the PNG files
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Module color, #rrggbb or r,g,b
    #[arg(long)]
    front: Option<Rgb>,

    /// Background color, #rrggbb or r,g,b
    #[arg(long)]
    back: Option<Rgb>,

    /// Pixels per module
    #[arg(long)]
    box_size: Option<u32>,

    /// Quiet zone width in modules
    #[arg(long)]
    border: Option<u32>,

    /// QR version, 1..=40
    #[arg(long)]
    qr_version: Option<Version>,

    /// Error correction level: L, M, Q or H
    #[arg(long)]
    ec_level: Option<ECLevel>,

    /// Module style: circle or square
    #[arg(long)]
    module_style: Option<ModuleStyle>,

    /// Eye style: hamburger or standard
    #[arg(long)]
    eye_style: Option<EyeStyle>,

    /// JSON settings file providing defaults for any of the above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print known market numbers and exit
    #[arg(long)]
    list_markets: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn merge(self, mut settings: Settings) -> Settings {
        settings.host = self.host.or(settings.host);
        settings.market = self.market.or(settings.market);
        settings.tables = self.tables.or(settings.tables);
        settings.out_dir = self.out_dir.or(settings.out_dir);
        settings.front_color = self.front.unwrap_or(settings.front_color);
        settings.back_color = self.back.unwrap_or(settings.back_color);
        settings.box_size = self.box_size.unwrap_or(settings.box_size);
        settings.border = self.border.unwrap_or(settings.border);
        settings.version = self.qr_version.unwrap_or(settings.version);
        settings.ec_level = self.ec_level.unwrap_or(settings.ec_level);
        settings.module_style = self.module_style.unwrap_or(settings.module_style);
        settings.eye_style = self.eye_style.unwrap_or(settings.eye_style);
        settings
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if cli.list_markets {
        for (id, name) in KNOWN_MARKETS {
            println!("{id:>4}  {name}");
        }
        return Ok(());
    }

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let settings = cli.merge(settings);

    let mut batch = Batch::new(
        settings.host.as_deref().unwrap_or_default(),
        settings.market.as_deref().unwrap_or_default(),
        settings.tables.as_deref().unwrap_or_default(),
        settings.out_dir.as_deref(),
    )?;
    batch.options(settings.render_options());

    let written = batch
        .run()
        .with_context(|| format!("failed to generate codes in {}", batch.out_dir().display()))?;
    info!(
        "Generated {} QR codes for market {} in {}",
        written.len(),
        batch.market(),
        batch.out_dir().display()
    );

    Ok(())
}
