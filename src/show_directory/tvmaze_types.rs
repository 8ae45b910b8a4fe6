/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Every field is optional so that incomplete entries can be normalized
/// instead of failing the whole response.
use serde::Deserialize;

/// A single entry from the `/search/shows` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: Option<TvMazeShow>,
}

/// Show data nested inside a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Poster images (null for shows without artwork)
    pub image: Option<TvMazeImage>,
}

/// Image URLs of a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub medium: Option<String>,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: Option<u64>,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    pub season: Option<TvMazeLabel>,
    /// Episode number within the season (null for specials)
    pub number: Option<TvMazeLabel>,
}

/// A season or episode number, sent either as a JSON number or a string.
///
/// Any other shape is kept as `Other` so one odd label never rejects the
/// whole episode list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum TvMazeLabel {
    Number(u64),
    Text(String),
    Other(serde_json::Value),
}

impl TvMazeLabel {
    pub fn into_text(self) -> String {
        match self {
            TvMazeLabel::Number(n) => n.to_string(),
            TvMazeLabel::Text(s) => s,
            // Negative or fractional numbers still read as numbers
            TvMazeLabel::Other(serde_json::Value::Number(n)) => n.to_string(),
            TvMazeLabel::Other(_) => String::new(),
        }
    }
}
