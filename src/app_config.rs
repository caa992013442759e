use crate::domain::GeoLocation;
use config::{Config, ConfigError, FileFormat};
use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    reference: Reference,
    report: Report,
}

impl AppConfig {
    /// Loads the built-in configuration, overridden by an optional `config_local` file in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(config::File::with_name("config_local").required(false))
            .build()?
            .try_deserialize()
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn report(&self) -> &Report {
        &self.report
    }
}

#[derive(Debug, Deserialize)]
pub struct Reference {
    name: String,
    location: GeoLocation,
}

impl Reference {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Report {
    rule_width: usize,
    description_limit: usize,
}

impl Report {
    pub fn rule_width(&self) -> usize {
        self.rule_width
    }

    pub fn description_limit(&self) -> usize {
        self.description_limit
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                reference: Reference {
                    name: "東京スカイツリー".to_string(),
                    location: GeoLocation {
                        latitude: 35.7101,
                        longitude: 139.8107,
                        altitude: 634.0,
                    },
                },
                report: Report {
                    rule_width: 140,
                    description_limit: 50,
                },
            },
        }
    }

    pub fn reference(mut self, name: &str, location: GeoLocation) -> Self {
        self.config.reference = Reference {
            name: name.to_string(),
            location,
        };
        self
    }

    pub fn rule_width(mut self, rule_width: usize) -> Self {
        self.config.report.rule_width = rule_width;
        self
    }

    pub fn description_limit(mut self, description_limit: usize) -> Self {
        self.config.report.description_limit = description_limit;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_reads_the_built_in_configuration() -> Result<(), ConfigError> {
        let config = AppConfig::load()?;

        assert_eq!(config.reference().name(), "東京スカイツリー");
        assert_eq!(
            config.reference().location(),
            &GeoLocation {
                latitude: 35.7101,
                longitude: 139.8107,
                altitude: 634.0,
            }
        );
        assert_eq!(config.report().rule_width(), 140);
        assert_eq!(config.report().description_limit(), 50);
        Ok(())
    }

    #[test]
    fn load_rejects_an_out_of_range_reference() {
        let result = Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(config::File::from_str("[reference.location]\nlatitude = 95.0", FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize::<AppConfig>());

        match result {
            Err(err) => assert!(err.to_string().contains("invalid location latitude: 95"), "unexpected error: {}", err),
            Ok(config) => panic!("expected an error, found {:?}", config),
        }
    }
}
