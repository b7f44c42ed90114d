use crate::config::AppConfig;
use crate::utils::error::{ListingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk configuration. Every section and key is optional; anything left
/// out keeps the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub conversion: Option<ConversionConfig>,
    pub images: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub film_id: Option<FilmId>,
}

/// Film ids may be written as `film_id = 2` or `film_id = "2"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilmId {
    Number(u64),
    Text(String),
}

impl FilmId {
    pub fn into_string(self) -> String {
        match self {
            FilmId::Number(n) => n.to_string(),
            FilmId::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub ratio: Option<f64>,
    pub decimals: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ListingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ListingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ListingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file's values over `config`. Image entries are merged into
    /// the existing table.
    pub fn apply_to(self, config: &mut AppConfig) {
        if let Some(api) = self.api {
            if let Some(base_url) = api.base_url {
                config.api_base_url = base_url;
            }
            if let Some(film_id) = api.film_id {
                config.film_id = Some(film_id.into_string());
            }
        }
        if let Some(conversion) = self.conversion {
            if let Some(ratio) = conversion.ratio {
                config.conversion_ratio = ratio;
            }
            if let Some(decimals) = conversion.decimals {
                config.height_decimals = decimals;
            }
        }
        if let Some(images) = self.images {
            config.species_images.extend(images);
        }
    }

    pub fn into_app_config(self) -> AppConfig {
        let mut config = AppConfig::default();
        self.apply_to(&mut config);
        config
    }
}
