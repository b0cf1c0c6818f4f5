use clap::Parser;
use lockin::core::catalog::Catalog;
use lockin::core::config::{self, CliOverrides, LockinConfig};
use lockin::tui;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lockin", about = "Pick a character, lock it in, rule out the rest")]
struct Args {
    /// Catalog file (TOML) to load instead of the built-in roster
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Fixed number of grid columns (0 = fit to width)
    #[arg(long)]
    columns: Option<u16>,

    /// Print the final selection as JSON on exit
    #[arg(short, long)]
    print: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to lockin.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("lockin.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        eprintln!("lockin: {e}, using defaults");
        LockinConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog: args.catalog.as_deref(),
            columns: args.columns,
        },
    );

    let catalog = match &resolved.catalog_path {
        Some(path) => Catalog::load(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?,
        None => Catalog::builtin(),
    };

    log::info!(
        "Lockin starting with {} characters (columns: {:?})",
        catalog.len(),
        resolved.columns
    );

    let summary = tui::run(resolved, catalog)?;

    if args.print {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        println!("{json}");
    }
    Ok(())
}
