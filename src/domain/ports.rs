use crate::domain::model::Species;
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// Anything able to produce the species of a film.
#[async_trait]
pub trait SpeciesSource: Send + Sync {
    async fn fetch_species_for_film(
        &self,
        film_id: Option<&str>,
    ) -> std::result::Result<Option<Vec<Species>>, FetchError>;
}
