pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, OutputFormat};

pub use app::{controller::ViewController, presenter::CardPresenter};
pub use config::AppConfig;
pub use self::core::{
    convert::{convert_height, HeightConverter},
    film::SwapiClient,
};
pub use domain::model::{LoadState, Species, SpeciesCard};
pub use utils::error::{FetchError, ListingError, Result};
