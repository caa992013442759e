mod distance;
mod geo_location;
mod ranked_spot;
mod spot;

pub use distance::Distance;
pub use geo_location::GeoLocation;
pub use ranked_spot::RankedSpot;
pub use spot::Spot;

#[cfg(test)]
pub use geo_location::haversine;
#[cfg(test)]
pub use spot::SpotBuilder;
