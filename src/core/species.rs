use crate::core::film::SwapiClient;
use crate::domain::model::Species;
use crate::domain::ports::SpeciesSource;
use crate::utils::error::{FailureKind, FetchError};
use async_trait::async_trait;
use futures::future::join_all;

const SPECIES_BATCH_FAILED: &str =
    "There were one or more than one species that couldn't be fetched.";

impl SwapiClient {
    /// Fetches a film and then every species it references.
    ///
    /// All species requests are dispatched at once and awaited together, then
    /// all bodies are parsed together. The result keeps the film's reference
    /// order. Any failure fails the whole batch and partial results are
    /// dropped.
    pub async fn fetch_species_for_film(
        &self,
        film_id: Option<&str>,
    ) -> Result<Option<Vec<Species>>, FetchError> {
        if film_id.is_none_or(str::is_empty) {
            return Ok(None);
        }

        match self.fetch_species_batch(film_id).await {
            Ok(species) => Ok(Some(species)),
            Err(e) => {
                tracing::error!(kind = ?e.kind(), cause = %e, "{}", SPECIES_BATCH_FAILED);
                Err(FetchError::Species {
                    kind: e.kind(),
                    message: e.to_string(),
                })
            }
        }
    }

    async fn fetch_species_batch(&self, film_id: Option<&str>) -> Result<Vec<Species>, FetchError> {
        let film = self.fetch_film(film_id).await?.unwrap_or_default();
        let references = film.species.ok_or_else(|| FetchError::Species {
            kind: FailureKind::Parse,
            message: "film payload has no species list".to_string(),
        })?;

        tracing::debug!("Fetching {} species", references.len());

        let responses = join_all(
            references
                .iter()
                .map(|reference| self.client.get(reference.as_str()).send()),
        )
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(species_error)?;

        let species = join_all(responses.into_iter().map(|response| response.json::<Species>()))
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(species_error)?;

        tracing::debug!("Fetched {} species", species.len());
        Ok(species)
    }
}

fn species_error(e: reqwest::Error) -> FetchError {
    FetchError::Species {
        kind: FailureKind::of(&e),
        message: e.to_string(),
    }
}

#[async_trait]
impl SpeciesSource for SwapiClient {
    async fn fetch_species_for_film(
        &self,
        film_id: Option<&str>,
    ) -> Result<Option<Vec<Species>>, FetchError> {
        SwapiClient::fetch_species_for_film(self, film_id).await
    }
}
