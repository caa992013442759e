mod loader;

pub use loader::builtin_spots;

#[cfg(test)]
pub use loader::{CatalogError, SPOT_COUNT, parse_spots};
