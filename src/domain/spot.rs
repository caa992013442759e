use crate::domain::GeoLocation;
use serde::Deserialize;

/// A photo spot with a view of the reference point.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Spot {
    name: String,
    location: GeoLocation,
    difficulty: String,
    description: String,
    image_file: String,
    image_url: String,
}

impl Spot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_file(&self) -> &str {
        &self.image_file
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

#[cfg(test)]
pub struct SpotBuilder {
    spot: Spot,
}

#[cfg(test)]
impl SpotBuilder {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        SpotBuilder {
            spot: Spot {
                name: name.to_string(),
                location: GeoLocation::new(latitude, longitude),
                difficulty: "初級".to_string(),
                description: format!("{} description", name),
                image_file: "image.jpg".to_string(),
                image_url: "https://example.org/image.jpg".to_string(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.spot.description = description.to_string();
        self
    }

    pub fn build(self) -> Spot {
        self.spot
    }
}
