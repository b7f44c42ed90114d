use crate::domain::model::LoadState;
use crate::domain::ports::SpeciesSource;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// Text shown in place of the listing when the load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Ups! Something went wrong. Please try again later.";

/// Drives the one-shot species load and publishes every state change.
pub struct ViewController<S: SpeciesSource> {
    source: S,
    film_id: Option<String>,
    state: watch::Sender<LoadState>,
    mounted: AtomicBool,
}

impl<S: SpeciesSource> ViewController<S> {
    pub fn new(source: S, film_id: Option<String>) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self {
            source,
            film_id,
            state,
            mounted: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Runs the load exactly once per controller. Later calls return without
    /// doing anything.
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("View already mounted, skipping load");
            return;
        }

        self.state.send_replace(LoadState::Loading);
        tracing::info!("Fetching results...");

        match self
            .source
            .fetch_species_for_film(self.film_id.as_deref())
            .await
        {
            Ok(species) => {
                let species = species.unwrap_or_default();
                tracing::info!("Loaded {} species", species.len());
                self.state.send_replace(LoadState::Loaded(species));
            }
            Err(e) => {
                tracing::error!(kind = ?e.kind(), cause = %e, "Something went wrong.");
                self.state
                    .send_replace(LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Species;
    use crate::utils::error::{FailureKind, FetchError};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    struct StubSource {
        result: fn() -> Result<Option<Vec<Species>>, FetchError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SpeciesSource for StubSource {
        async fn fetch_species_for_film(
            &self,
            _film_id: Option<&str>,
        ) -> Result<Option<Vec<Species>>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    fn stub(
        result: fn() -> Result<Option<Vec<Species>>, FetchError>,
    ) -> (StubSource, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            StubSource {
                result,
                calls: calls.clone(),
            },
            calls,
        )
    }

    #[test]
    fn test_initial_state_is_idle() {
        let (source, _) = stub(|| Ok(None));
        let controller = ViewController::new(source, Some("2".into()));
        let state = controller.state();

        assert!(!state.is_fetching());
        assert!(!state.has_error());
        assert!(state.species().is_empty());
    }

    #[test]
    fn test_absent_result_is_empty_listing() {
        let (source, _) = stub(|| Ok(None));
        let controller = ViewController::new(source, None);
        tokio_test::block_on(controller.mount());

        assert_eq!(controller.state(), LoadState::Loaded(vec![]));
    }

    #[tokio::test]
    async fn test_failure_sets_error_message() {
        let (source, _) = stub(|| {
            Err(FetchError::Species {
                kind: FailureKind::Network,
                message: "connection reset".to_string(),
            })
        });
        let controller = ViewController::new(source, Some("2".into()));
        controller.mount().await;

        let state = controller.state();
        assert!(state.has_error());
        assert!(!state.is_fetching());
        assert!(state.species().is_empty());
        assert_eq!(state, LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn test_mount_is_one_shot() {
        let (source, calls) = stub(|| {
            Ok(Some(vec![Species {
                name: Some("Human".into()),
                ..Species::default()
            }]))
        });
        let controller = ViewController::new(source, Some("2".into()));

        controller.mount().await;
        controller.mount().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.state().species().len(), 1);
    }
}
