use crate::domain::Spot;
use thiserror::Error;
use tracing::{info, instrument, trace};

/// Number of spots the built-in catalog must contain.
pub const SPOT_COUNT: usize = 15;

const BUILTIN_SPOTS: &str = include_str!("../../resources/spots.json");

/// Returns the built-in spots in catalog order.
#[instrument]
pub fn builtin_spots() -> Result<Vec<Spot>, CatalogError> {
    info!("📍 Loading spots...");
    let spots = ensure_size(parse_spots(BUILTIN_SPOTS)?, SPOT_COUNT)?;
    info!("📍 Loading spots... OK, {} loaded", spots.len());
    Ok(spots)
}

#[instrument(skip_all)]
pub fn parse_spots(json: &str) -> Result<Vec<Spot>, CatalogError> {
    let spots: Vec<Spot> = serde_json::from_str(json)?;
    for spot in &spots {
        trace!("Parsed spot '{}' ({})", spot.name(), spot.image_file());
    }
    Ok(spots)
}

fn ensure_size(spots: Vec<Spot>, expected: usize) -> Result<Vec<Spot>, CatalogError> {
    if spots.len() != expected {
        return Err(CatalogError::UnexpectedSize {
            expected,
            actual: spots.len(),
        });
    }
    Ok(spots)
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("malformed spot data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected {expected} spots, found {actual}")]
    UnexpectedSize { expected: usize, actual: usize },
}
