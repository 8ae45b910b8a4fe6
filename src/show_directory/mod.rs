/// Data structures and traits for querying a tv show directory.
///
/// This module provides the normalized `Show` and `Episode` records handed to
/// the renderer, as well as the `ShowDirectory` trait implemented by directory
/// backends.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::{DEFAULT_IMAGE_URL, DirectoryConfig, TVMAZE_BASE_URL, TvMazeDirectory};

use thiserror::Error;

/// Errors that can occur while talking to the show directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Request to the directory failed or returned a non-success status
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the directory's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// A single show returned by a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Identifier assigned by the directory service
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Summary of the show, may contain HTML markup
    pub summary: String,
    /// URL of the medium sized poster image
    pub image: String,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Identifier assigned by the directory service
    pub id: u64,
    /// The episode title
    pub name: String,
    /// Season label (empty when unknown)
    pub season: String,
    /// Episode number label within the season (empty for specials)
    pub number: String,
}

/// Trait for directories that can search shows and list their episodes.
///
/// Implementors perform exactly one request per call and never retry.
/// Failures are handed back to the caller untouched.
pub trait ShowDirectory {
    /// Searches for shows matching a free-text term.
    ///
    /// The term is passed to the directory as-is, including the empty string.
    ///
    /// # Returns
    ///
    /// The matching shows in the order the directory returned them
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, DirectoryError>;

    /// Fetches all episodes of the show with the given identifier.
    ///
    /// # Returns
    ///
    /// The episodes in the order the directory returned them
    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, DirectoryError>;
}

impl<D: ShowDirectory + ?Sized> ShowDirectory for &D {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, DirectoryError> {
        (**self).search_shows(term)
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, DirectoryError> {
        (**self).fetch_episodes(show_id)
    }
}
