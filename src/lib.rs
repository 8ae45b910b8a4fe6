//! ShowSeeker - Search tv shows and list their episodes
//!
//! This library queries the TVMaze directory for shows matching a search
//! term, renders them as cards, and fetches the episode list of a selected
//! show on demand.
//!
//! # Examples
//!
//! ```no_run
//! use showseeker::{Page, TvMazeDirectory};
//!
//! let mut page = Page::new(TvMazeDirectory::new());
//! page.submit_search("bletchley").unwrap();
//! page.request_episodes(0).unwrap();
//! println!("{}", page);
//! ```

mod page;
mod render;
mod show_directory;

// Re-export error types
pub use page::PageError;
pub use show_directory::DirectoryError;

pub use page::{Notice, Page};
pub use render::{
    EPISODES_TRIGGER_LABEL, EpisodesArea, ShowCard, ShowsList, format_episode_line,
    render_episodes, render_shows,
};
pub use show_directory::{
    DEFAULT_IMAGE_URL, DirectoryConfig, Episode, Show, ShowDirectory, TVMAZE_BASE_URL,
    TvMazeDirectory,
};
