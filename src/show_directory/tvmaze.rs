/// TVMaze show directory implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult, TvMazeShow};
use super::{DirectoryError, Episode, Show, ShowDirectory};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Base URL of the public TVMaze API
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Placeholder image for shows without artwork
pub const DEFAULT_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Configuration for the TVMaze directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL requests are sent to (trailing slashes are ignored)
    pub base_url: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
        }
    }
}

/// Show directory backed by the TVMaze API.
///
/// This directory searches shows through https://api.tvmaze.com/search/shows
/// and lists episodes through https://api.tvmaze.com/shows/{id}/episodes.
pub struct TvMazeDirectory {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeDirectory {
    /// Creates a new TVMaze directory pointing at the public API.
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::default())
    }

    /// Creates a new TVMaze directory with custom configuration.
    pub fn with_config(config: DirectoryConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a GET request and decodes the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DirectoryError> {
        debug!(url, ?query, "requesting tvmaze");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| DirectoryError::RequestError(e.to_string()))?;

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(DirectoryError::RequestError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| DirectoryError::ParseError(e.to_string()))
    }

    /// Converts a TVMaze show to our internal Show structure.
    ///
    /// Returns None for shows without an identifier, since those can never be
    /// asked for their episodes.
    fn convert_show(tvmaze_show: TvMazeShow) -> Option<Show> {
        let Some(id) = tvmaze_show.id else {
            warn!(name = ?tvmaze_show.name, "skipping show without id");
            return None;
        };

        let image = tvmaze_show
            .image
            .and_then(|image| image.medium)
            .filter(|medium| !medium.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        Some(Show {
            id,
            name: tvmaze_show.name.unwrap_or_default(),
            summary: tvmaze_show.summary.unwrap_or_default(),
            image,
        })
    }

    /// Converts search results to shows, keeping the upstream order.
    fn convert_search_results(results: Vec<TvMazeSearchResult>) -> Vec<Show> {
        results
            .into_iter()
            .filter_map(|result| {
                if result.show.is_none() {
                    warn!("skipping search result without show");
                }
                result.show
            })
            .filter_map(Self::convert_show)
            .collect()
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Option<Episode> {
        let Some(id) = tvmaze_episode.id else {
            warn!(name = ?tvmaze_episode.name, "skipping episode without id");
            return None;
        };

        Some(Episode {
            id,
            name: tvmaze_episode.name.unwrap_or_default(),
            season: tvmaze_episode
                .season
                .map(|s| s.into_text())
                .unwrap_or_default(),
            number: tvmaze_episode
                .number
                .map(|n| n.into_text())
                .unwrap_or_default(),
        })
    }
}

impl Default for TvMazeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowDirectory for TvMazeDirectory {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, DirectoryError> {
        let url = format!("{}/search/shows", self.base_url);
        let results: Vec<TvMazeSearchResult> = self.get_json(&url, &[("q", term)])?;

        let shows = Self::convert_search_results(results);
        debug!(term, count = shows.len(), "search finished");
        Ok(shows)
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, DirectoryError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);
        let episodes: Vec<TvMazeEpisode> = self.get_json(&url, &[])?;

        let episodes: Vec<Episode> = episodes
            .into_iter()
            .filter_map(Self::convert_episode)
            .collect();
        debug!(show_id, count = episodes.len(), "episodes fetched");
        Ok(episodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_results(json: &str) -> Vec<Show> {
        let results: Vec<TvMazeSearchResult> = serde_json::from_str(json).unwrap();
        TvMazeDirectory::convert_search_results(results)
    }

    fn episodes(json: &str) -> Vec<Episode> {
        let raw: Vec<TvMazeEpisode> = serde_json::from_str(json).unwrap();
        raw.into_iter()
            .filter_map(TvMazeDirectory::convert_episode)
            .collect()
    }

    #[test]
    fn test_convert_search_result_with_image() {
        let shows = search_results(
            r#"[{"score": 0.9, "show": {
                "id": 1767,
                "name": "The Bletchley Circle",
                "summary": "<p>Four women who worked at <b>Bletchley Park</b>.</p>",
                "image": {"medium": "http://static.tvmaze.com/uploads/images/medium_portrait/147/369403.jpg",
                          "original": "http://static.tvmaze.com/uploads/images/original_untouched/147/369403.jpg"}
            }}]"#,
        );

        assert_eq!(
            shows,
            vec![Show {
                id: 1767,
                name: "The Bletchley Circle".to_string(),
                summary: "<p>Four women who worked at <b>Bletchley Park</b>.</p>".to_string(),
                image: "http://static.tvmaze.com/uploads/images/medium_portrait/147/369403.jpg"
                    .to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_image_uses_default() {
        let shows = search_results(
            r#"[
                {"show": {"id": 1, "name": "Null Image", "summary": "", "image": null}},
                {"show": {"id": 2, "name": "No Image Field", "summary": ""}},
                {"show": {"id": 3, "name": "Empty Medium", "summary": "", "image": {"medium": ""}}},
                {"show": {"id": 4, "name": "No Medium", "summary": "", "image": {"original": "x"}}}
            ]"#,
        );

        assert_eq!(shows.len(), 4);
        for show in &shows {
            assert_eq!(show.image, DEFAULT_IMAGE_URL, "show {}", show.name);
        }
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let shows = search_results(r#"[{"show": {"id": 7, "name": null, "summary": null}}]"#);
        assert_eq!(shows[0].name, "");
        assert_eq!(shows[0].summary, "");
    }

    #[test]
    fn test_entries_without_id_are_skipped() {
        let shows = search_results(
            r#"[
                {"show": {"name": "Anonymous"}},
                {"score": 1.0},
                {"show": {"id": 5, "name": "Kept"}}
            ]"#,
        );
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].id, 5);
    }

    #[test]
    fn test_convert_episodes_preserves_order() {
        let episodes = episodes(
            r#"[
                {"id": 1, "name": "Pilot", "season": 1, "number": 1, "airdate": "2013-06-24"},
                {"id": 2, "name": "The Fire", "season": 1, "number": 2}
            ]"#,
        );

        assert_eq!(
            episodes,
            vec![
                Episode {
                    id: 1,
                    name: "Pilot".to_string(),
                    season: "1".to_string(),
                    number: "1".to_string(),
                },
                Episode {
                    id: 2,
                    name: "The Fire".to_string(),
                    season: "1".to_string(),
                    number: "2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_episode_labels_accept_strings_and_null() {
        let episodes = episodes(r#"[{"id": 9, "name": "Special", "season": "2", "number": null}]"#);
        assert_eq!(episodes[0].season, "2");
        assert_eq!(episodes[0].number, "");
    }

    #[test]
    fn test_odd_episode_labels_do_not_reject_the_list() {
        let episodes = episodes(
            r#"[
                {"id": 1, "name": "Negative", "season": 1, "number": -1},
                {"id": 2, "name": "Object", "season": {"x": 1}, "number": 2},
                {"id": 3, "name": "Fraction", "season": 1.5, "number": [1]}
            ]"#,
        );

        assert_eq!(episodes.len(), 3);
        assert_eq!(episodes[0].number, "-1");
        assert_eq!(episodes[1].season, "");
        assert_eq!(episodes[1].number, "2");
        assert_eq!(episodes[2].season, "1.5");
        assert_eq!(episodes[2].number, "");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let directory = TvMazeDirectory::with_config(DirectoryConfig {
            base_url: "https://api.tvmaze.com/".to_string(),
        });
        assert_eq!(directory.base_url(), TVMAZE_BASE_URL);
    }
}
