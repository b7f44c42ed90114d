#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite_positive, validate_path_segment, validate_range, validate_url, Validate,
};
use std::collections::BTreeMap;

pub const DEFAULT_API_BASE_URL: &str = "https://swapi.dev/api/films/";
/// "The Empire Strikes Back".
pub const DEFAULT_FILM_ID: &str = "2";
pub const CM_TO_IN_CONVERSION_RATIO: f64 = 0.3937;
pub const MAX_DECIMALS: usize = 100;

const DROID_IMAGE: &str =
    "https://static.wikia.nocookie.net/starwars/images/f/fb/Droid_Trio_TLJ_alt.png";
const HUMAN_IMAGE: &str =
    "https://static.wikia.nocookie.net/starwars/images/3/3f/HumansInTheResistance-TROS.jpg";
const TRANDOSHAN_IMAGE: &str =
    "https://static.wikia.nocookie.net/starwars/images/7/72/Bossk_full_body.png";
const WOOKIE_IMAGE: &str =
    "https://static.wikia.nocookie.net/starwars/images/1/1e/Chewbacca-Fathead.png";
const YODA_IMAGE: &str = "https://static.wikia.nocookie.net/starwars/images/d/d6/Yoda_SWSB.png";

pub fn default_species_images() -> BTreeMap<String, String> {
    [
        ("Droid", DROID_IMAGE),
        ("Human", HUMAN_IMAGE),
        ("Trandoshan", TRANDOSHAN_IMAGE),
        ("Wookie", WOOKIE_IMAGE),
        ("Yoda's species", YODA_IMAGE),
    ]
    .into_iter()
    .map(|(name, url)| (name.to_string(), url.to_string()))
    .collect()
}

/// Everything the fetch and formatting components need, resolved up front.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub film_id: Option<String>,
    pub conversion_ratio: f64,
    pub height_decimals: usize,
    /// Species name to image URL.
    pub species_images: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            film_id: Some(DEFAULT_FILM_ID.to_string()),
            conversion_ratio: CM_TO_IN_CONVERSION_RATIO,
            height_decimals: 0,
            species_images: default_species_images(),
        }
    }
}

impl AppConfig {
    /// URL of a single film: the base endpoint with `id` as its last segment.
    pub fn film_url(&self, id: &str) -> String {
        format!("{}/{}/", self.api_base_url.trim_end_matches('/'), id)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        if let Some(film_id) = &self.film_id {
            validate_path_segment("api.film_id", film_id)?;
        }
        validate_finite_positive("conversion.ratio", self.conversion_ratio)?;
        validate_range("conversion.decimals", self.height_decimals, 0, MAX_DECIMALS)?;
        for url in self.species_images.values() {
            validate_url("images", url)?;
        }
        Ok(())
    }
}
