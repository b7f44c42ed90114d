pub mod convert;
pub mod film;
pub mod species;

pub use crate::domain::model::{Film, Species};
pub use crate::domain::ports::SpeciesSource;
pub use crate::utils::error::{FetchError, Result};
