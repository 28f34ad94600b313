use crate::dataset::DatasetConfig;
use crate::geo::Strategy;

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_log_level")]
    pub log_level: log::Level,
    #[serde(default)]
    pub strategy: Strategy,
    pub dataset: DatasetConfig,
}

impl Config {
    fn default_log_level() -> log::Level {
        log::Level::Info
    }
}

pub fn parse_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let toml_string = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&toml_string)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Precise;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn defaults() {
        let config: Config = toml::from_str(
            r#"
            [dataset]
            path = "database"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.strategy, Strategy::default());
        assert_eq!(
            config.dataset.blocks,
            PathBuf::from("database/GeoLite2-City-Blocks-IPv4.csv")
        );
    }

    #[test]
    fn full() {
        let config: Config = toml::from_str(
            r#"
            log_level = "warn"
            strategy = "precise"

            [dataset]
            blocks = "blocks.csv"
            locations = "locations.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, log::Level::Warn);
        assert_eq!(config.strategy, Strategy::Precise(Precise));
        assert_eq!(config.dataset.locations, PathBuf::from("locations.csv"));
    }

    #[test]
    fn invalid_strategy() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            strategy = "fast"
            [dataset]
            path = "database"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_field() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            geolite2 = "GeoLite2-City.mmdb"
            [dataset]
            path = "database"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dataset]\npath = \"/var/lib/geoprefix\"").unwrap();
        let config = parse_config(file.path()).unwrap();
        assert_eq!(
            config.dataset.locations,
            PathBuf::from("/var/lib/geoprefix/GeoLite2-City-Locations-en.csv")
        );
    }
}
