use crate::app_config::AppConfig;
use crate::catalog::builtin_spots;
use crate::ranking::rank_by_distance;
use crate::report::write_report;
use std::io;
use tracing::info;

mod app_config;
mod catalog;
mod domain;
mod extensions;
mod geo_location_deserializer;
mod ranking;
mod report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The report owns stdout
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let spots = builtin_spots()?;
    info!("✅  Loaded {} spots", spots.len());

    let ranked = rank_by_distance(config.reference().location(), &spots);
    info!("✅  Ranked spots by distance from {}", config.reference().name());

    write_report(&mut io::stdout().lock(), &config, &ranked)?;
    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));

    Ok(())
}
