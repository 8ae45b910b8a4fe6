//! Event wiring for the show browser
//!
//! A `Page` owns the injected show directory together with both display
//! regions and reacts to the two user events: submitting a search and asking
//! a show card for its episodes.

use crate::render::{EpisodesArea, ShowsList, render_episodes, render_shows};
use crate::show_directory::{DirectoryError, ShowDirectory};
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while handling page events
#[derive(Debug, Error)]
pub enum PageError {
    /// The directory request behind the event failed
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// The episodes trigger referenced a card that is not displayed
    #[error("No show card at position {index} ({available} card(s) displayed)")]
    UnknownCard { index: usize, available: usize },
}

/// User visible message about the outcome of the last event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

/// The show browser page
pub struct Page<D: ShowDirectory> {
    directory: D,
    shows_list: ShowsList,
    episodes_area: EpisodesArea,
    notice: Option<Notice>,
}

impl<D: ShowDirectory> Page<D> {
    /// Creates a page with empty regions and a hidden episodes area
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            shows_list: ShowsList::new(),
            episodes_area: EpisodesArea::new(),
            notice: None,
        }
    }

    pub fn shows_list(&self) -> &ShowsList {
        &self.shows_list
    }

    pub fn episodes_area(&self) -> &EpisodesArea {
        &self.episodes_area
    }

    /// The failure reported by the last event, if any
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Handles submission of the search form
    ///
    /// The episodes area is hidden before the search is issued, so it stays
    /// hidden even when the search fails. On failure the show list keeps its
    /// previous cards.
    pub fn submit_search(&mut self, term: &str) -> Result<(), PageError> {
        self.episodes_area.hide();
        self.notice = None;

        info!(term, "searching shows");
        let shows = self
            .directory
            .search_shows(term)
            .map_err(|e| self.fail(e.into()))?;

        render_shows(&mut self.shows_list, &shows);
        Ok(())
    }

    /// Handles a click on the episodes trigger of the card at `card_index`
    pub fn request_episodes(&mut self, card_index: usize) -> Result<(), PageError> {
        let show_id = match self.shows_list.show_id_at(card_index) {
            Some(id) => id,
            None => {
                let error = PageError::UnknownCard {
                    index: card_index,
                    available: self.shows_list.cards().len(),
                };
                return Err(self.fail(error));
            }
        };

        self.episodes_for_show(show_id)
    }

    /// Fetches and renders the episodes of a show with a known identifier
    pub fn episodes_for_show(&mut self, show_id: u64) -> Result<(), PageError> {
        self.notice = None;

        info!(show_id, "fetching episodes");
        let episodes = self
            .directory
            .fetch_episodes(show_id)
            .map_err(|e| self.fail(e.into()))?;

        render_episodes(&mut self.episodes_area, &episodes);
        Ok(())
    }

    /// Records an error as the page notice and hands it back
    fn fail(&mut self, error: PageError) -> PageError {
        warn!(%error, "page event failed");
        self.notice = Some(Notice::Error(error.to_string()));
        error
    }
}

impl<D: ShowDirectory> fmt::Display for Page<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(notice) = &self.notice {
            writeln!(f, "{}\n", notice)?;
        }
        write!(f, "{}", self.shows_list)?;
        if self.episodes_area.is_visible() {
            writeln!(f, "=== Episodes ===")?;
            write!(f, "{}", self.episodes_area)?;
        }
        Ok(())
    }
}
