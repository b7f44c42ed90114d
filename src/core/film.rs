use crate::config::AppConfig;
use crate::domain::model::Film;
use crate::utils::error::{FailureKind, FetchError, FILM_FETCH_FAILED};
use reqwest::Client;

/// HTTP client for the films and species endpoints.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    pub(crate) config: AppConfig,
    pub(crate) client: Client,
}

impl SwapiClient {
    pub fn new(config: AppConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: AppConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fetches one film. An absent or empty id resolves to `None` without
    /// touching the network. The response status is not inspected: whatever
    /// body comes back is parsed as a film.
    pub async fn fetch_film(&self, id: Option<&str>) -> Result<Option<Film>, FetchError> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        let url = self.config.film_url(id);
        tracing::debug!("Making API request to: {}", url);

        let film = self.request_film(&url).await.map_err(|e| {
            let kind = FailureKind::of(&e);
            tracing::error!(?kind, cause = %e, "{}", FILM_FETCH_FAILED);
            FetchError::Film { kind }
        })?;

        Ok(Some(film))
    }

    async fn request_film(&self, url: &str) -> reqwest::Result<Film> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());
        response.json::<Film>().await
    }
}
