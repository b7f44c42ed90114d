use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "species-listing")]
#[command(about = "Lists the species appearing in a Star Wars film")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Films endpoint, e.g. https://swapi.dev/api/films/")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Film to list species for")]
    pub film_id: Option<String>,

    #[arg(long, help = "Fractional digits of converted heights")]
    pub decimals: Option<usize>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Built-in defaults, then the TOML file, then command-line flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration file: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(base_url) = &self.api_base_url {
            config.api_base_url = base_url.clone();
        }
        if let Some(film_id) = &self.film_id {
            config.film_id = Some(film_id.clone());
        }
        if let Some(decimals) = self.decimals {
            config.height_decimals = decimals;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["species-listing"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.resolve().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nfilm_id = 4\n\n[conversion]\ndecimals = 1\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "species-listing",
            "--config",
            path.as_str(),
            "--film-id",
            "3",
            "--format",
            "json",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(config.film_id.as_deref(), Some("3"));
        assert_eq!(config.height_decimals, 1);
    }
}
