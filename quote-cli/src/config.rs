//! TOML configuration for the CLI.
//!
//! ```toml
//! [pricing.tier_rates]
//! silver = 3000
//! gold = 4000
//! diamond = 5000
//!
//! [[pricing.area_rates]]
//! below = 25
//! rate = 100
//!
//! [submit]
//! backend = "form-post"
//! endpoint = "https://studio.example.com/"
//!
//! [logging]
//! level = "info"
//! file = "quote.log"
//!
//! [result]
//! contact_label = "Fale com a AGE"
//! contact_url = "https://wa.me/5561982104088"
//! ```
//!
//! Every table is optional; missing values fall back to the built-in
//! defaults.

use std::path::{Path, PathBuf};

use quote_core::PricingConfig;
use quote_core::PricingConfigError;
use quote_core::submit::SubmitConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid pricing table: {0}")]
    Pricing(#[from] PricingConfigError),
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub backend: Option<String>,
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive applied once the file is loaded.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

/// Call to action shown under a successful quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultConfig {
    pub contact_label: String,
    pub contact_url: String,
}

impl Default for ResultConfig {
    fn default() -> Self {
        Self {
            contact_label: "Fale com a AGE".to_string(),
            contact_url: "https://wa.me/5561982104088?text=Ol%C3%A1!%20Preenchi%20a%20\
                          calculadora%20de%20or%C3%A7amento%20da%20Pen%C3%ADnsula%20e%20\
                          gostaria%20de%20mais%20informa%C3%A7%C3%B5es%20"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub submit: SubmitConfig,
    pub logging: LoggingConfig,
    pub result: ResultConfig,
}

impl AppConfig {
    /// Read and validate `path`, or return the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.pricing.validate()?;
        Ok(config)
    }

    /// Command-line flags win over file values.
    pub fn with_overrides(
        mut self,
        overrides: Overrides,
    ) -> Self {
        if let Some(backend) = overrides.backend {
            self.submit.backend = backend;
        }
        if overrides.endpoint.is_some() {
            self.submit.endpoint = overrides.endpoint;
        }
        if overrides.log_level.is_some() {
            self.logging.level = overrides.log_level;
        }
        if overrides.log_file.is_some() {
            self.logging.file = overrides.log_file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use quote_core::AreaRate;
    use rust_decimal_macros::dec;

    use super::*;

    fn parse(text: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::parse(text, Path::new("test.toml"))
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn submit_table_is_read() {
        let config = parse(
            r#"
            [submit]
            backend = "form-post"
            endpoint = "https://studio.example.com/"
            "#,
        )
        .unwrap();

        assert_eq!(config.submit.backend, "form-post");
        assert_eq!(
            config.submit.endpoint.as_deref(),
            Some("https://studio.example.com/")
        );
        assert_eq!(config.pricing, PricingConfig::default());
    }

    #[test]
    fn partial_pricing_keeps_other_defaults() {
        let config = parse(
            r#"
            [pricing.tier_rates]
            silver = 3500
            gold = 4500
            diamond = 5500
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.tier_rates.silver, dec!(3500));
        assert_eq!(
            config.pricing.area_rates,
            PricingConfig::default().area_rates
        );
    }

    #[test]
    fn custom_area_table_replaces_default() {
        let config = parse(
            r#"
            [[pricing.area_rates]]
            below = 50
            rate = 90

            [[pricing.area_rates]]
            below = 150
            rate = 70
            "#,
        )
        .unwrap();

        assert_eq!(
            config.pricing.area_rates,
            vec![
                AreaRate {
                    below: 50,
                    rate: dec!(90),
                },
                AreaRate {
                    below: 150,
                    rate: dec!(70),
                },
            ]
        );
    }

    #[test]
    fn unordered_area_table_is_rejected() {
        let result = parse(
            r#"
            [[pricing.area_rates]]
            below = 100
            rate = 80

            [[pricing.area_rates]]
            below = 25
            rate = 100
            "#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::Pricing(PricingConfigError::UnorderedThresholds { .. }))
        ));
    }

    #[test]
    fn oversized_rate_is_rejected_on_load() {
        let result = parse(
            r#"
            [pricing.tier_rates]
            silver = 3000
            gold = 4000
            diamond = 2000000
            "#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::Pricing(PricingConfigError::RateTooLarge(_)))
        ));
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let err = parse("[submit\nbackend = 1").unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test.toml"));
    }

    #[test]
    fn logging_table_is_read() {
        let config = parse(
            r#"
            [logging]
            level = "debug"
            file = "quote.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, Some(PathBuf::from("quote.log")));
    }

    #[test]
    fn result_table_overrides_call_to_action() {
        let config = parse(
            r#"
            [result]
            contact_url = "https://studio.example.com/contato"
            "#,
        )
        .unwrap();

        assert_eq!(config.result.contact_url, "https://studio.example.com/contato");
        assert_eq!(config.result.contact_label, "Fale com a AGE");
    }

    #[test]
    fn default_call_to_action_is_the_studio_whatsapp() {
        let result = ResultConfig::default();

        assert!(result.contact_url.starts_with("https://wa.me/5561982104088?text=Ol%C3%A1!"));
        assert!(!result.contact_url.contains(' '));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[submit]\nbackend = \"log\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.submit.backend, "log");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/quote.toml"))).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn flags_override_file_values() {
        let config = AppConfig::default().with_overrides(Overrides {
            backend: Some("form-post".to_string()),
            endpoint: Some("http://localhost/".to_string()),
            log_level: Some("debug".to_string()),
            log_file: None,
        });

        assert_eq!(config.submit.backend, "form-post");
        assert_eq!(config.submit.endpoint.as_deref(), Some("http://localhost/"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));

        let untouched = config.clone().with_overrides(Overrides::default());
        assert_eq!(untouched, config);
    }
}
