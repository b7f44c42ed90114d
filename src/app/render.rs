use crate::app::presenter::CardPresenter;
use crate::domain::model::{LoadState, SpeciesCard};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

pub const TITLE: &str = "Empire Strikes Back - Species Listing";
pub const FETCHING_MESSAGE: &str = "Fetching results...";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Listing<'a> {
    title: &'a str,
    is_fetching: bool,
    has_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    species: Vec<SpeciesCard>,
}

/// Plain-text view of a listing.
struct TextListing<'a> {
    state: &'a LoadState,
    cards: Vec<SpeciesCard>,
}

impl fmt::Display for TextListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;

        if self.state.is_fetching() {
            writeln!(f, "{}", FETCHING_MESSAGE)?;
        }
        if let LoadState::Failed(message) = self.state {
            writeln!(f, "{}", message)?;
        }

        for card in &self.cards {
            writeln!(f)?;
            writeln!(f, "{}", card.name)?;
            writeln!(f, "  Classification: {}", card.classification)?;
            writeln!(f, "  Designation:    {}", card.designation)?;
            writeln!(f, "  Height:         {}", card.height)?;
            writeln!(f, "  Language:       {}", card.language)?;
            writeln!(f, "  Films:          {}", card.num_films)?;
            if let Some(image) = &card.image {
                writeln!(f, "  Image:          {}", image)?;
            }
        }

        Ok(())
    }
}

pub fn render_text(state: &LoadState, presenter: &CardPresenter) -> String {
    TextListing {
        state,
        cards: presenter.cards(state.species()),
    }
    .to_string()
}

pub fn render_json(state: &LoadState, presenter: &CardPresenter) -> Result<String> {
    let listing = Listing {
        title: TITLE,
        is_fetching: state.is_fetching(),
        has_error: state.has_error(),
        message: match state {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        },
        species: presenter.cards(state.species()),
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}
