use serde::{Deserialize, Deserializer, Serialize};

/// Reads any JSON value, keeping only strings. Numbers, booleans and the like
/// count as missing so one odd field cannot fail a whole species batch.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Film resource as returned by the API. Only `species` is consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Film {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub species: Option<Vec<String>>,
}

/// Species resource as returned by the API.
///
/// `average_height` is usually a numeric string but may be a sentinel such as
/// `"unknown"` or a bare number, and `films` is only ever counted, so both are
/// kept as raw JSON and resolved by the presenter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Species {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub classification: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub designation: Option<String>,
    #[serde(default)]
    pub average_height: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default)]
    pub films: Option<serde_json::Value>,
}

/// Flat record handed to the rendering layer, one per species.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesCard {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub height: String,
    pub image: Option<String>,
    pub num_films: usize,
    pub language: String,
}

/// Lifecycle of the one-shot species load.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Species>),
    Failed(String),
}

impl LoadState {
    pub fn is_fetching(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn species(&self) -> &[Species] {
        match self {
            LoadState::Loaded(species) => species.as_slice(),
            _ => &[],
        }
    }
}
