use crate::config::AppConfig;
use crate::core::convert::{HeightConverter, NOT_AVAILABLE};
use crate::domain::model::{Species, SpeciesCard};
use std::collections::BTreeMap;

/// Maps API species onto display cards, filling every gap with a default.
#[derive(Debug, Clone)]
pub struct CardPresenter {
    converter: HeightConverter,
    decimals: usize,
    images: BTreeMap<String, String>,
}

impl CardPresenter {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            converter: HeightConverter::new(config.conversion_ratio),
            decimals: config.height_decimals,
            images: config.species_images.clone(),
        }
    }

    pub fn card(&self, species: &Species) -> SpeciesCard {
        SpeciesCard {
            name: or_not_available(&species.name),
            classification: or_not_available(&species.classification),
            designation: or_not_available(&species.designation),
            height: self
                .converter
                .convert(&species.average_height, self.decimals),
            image: species
                .name
                .as_ref()
                .and_then(|name| self.images.get(name))
                .cloned(),
            num_films: species
                .films
                .as_ref()
                .and_then(serde_json::Value::as_array)
                .map_or(0, Vec::len),
            language: or_not_available(&species.language),
        }
    }

    pub fn cards(&self, species: &[Species]) -> Vec<SpeciesCard> {
        species.iter().map(|s| self.card(s)).collect()
    }
}

fn or_not_available(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
