//! Display regions and rendering
//!
//! This module provides the two regions of the show browser: the list of show
//! cards and the episodes area. Rendering only mutates the region it is given,
//! so the regions can be inspected directly in tests and printed to a terminal
//! through their `Display` implementations.

use crate::show_directory::{Episode, Show};
use std::fmt;

/// Label of the action button embedded in every show card
pub const EPISODES_TRIGGER_LABEL: &str = "Episodes";

/// A rendered show card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    /// Identifier attribute carried by the card
    pub show_id: u64,
    /// Name of the show
    pub name: String,
    /// Summary markup as delivered by the directory
    pub summary_html: String,
    /// Poster image URL
    pub image: String,
    /// Label of the embedded episodes trigger
    pub trigger: &'static str,
}

impl ShowCard {
    fn from_show(show: &Show) -> Self {
        Self {
            show_id: show.id,
            name: show.name.clone(),
            summary_html: show.summary.clone(),
            image: show.image.clone(),
            trigger: EPISODES_TRIGGER_LABEL,
        }
    }

    /// The summary rendered as plain terminal text
    pub fn summary_text(&self) -> String {
        nanohtml2text::html2text(&self.summary_html).trim().to_string()
    }
}

impl fmt::Display for ShowCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [#{}]", self.name, self.show_id)?;
        writeln!(f, "  Image: {}", self.image)?;
        for line in self.summary_text().lines() {
            writeln!(f, "  {}", line)?;
        }
        write!(f, "  [{}]", self.trigger)
    }
}

/// The region holding the rendered show cards
#[derive(Debug, Default)]
pub struct ShowsList {
    cards: Vec<ShowCard>,
}

impl ShowsList {
    /// Creates an empty shows list
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed cards, in render order
    pub fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    /// Returns true when no cards are displayed
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Resolves the identifier attribute of the card at the given position
    pub fn show_id_at(&self, index: usize) -> Option<u64> {
        self.cards.get(index).map(|card| card.show_id)
    }

    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append(&mut self, card: ShowCard) {
        self.cards.push(card);
    }
}

impl fmt::Display for ShowsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return writeln!(f, "No shows found.");
        }

        for (index, card) in self.cards.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, card)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The region episode lists are appended to
///
/// The area starts out hidden and is only revealed once episodes have been
/// rendered into it. Lists accumulate across renders.
#[derive(Debug, Default)]
pub struct EpisodesArea {
    lists: Vec<Vec<String>>,
    visible: bool,
}

impl EpisodesArea {
    /// Creates an empty, hidden episodes area
    pub fn new() -> Self {
        Self::default()
    }

    /// All episode lists appended so far, oldest first
    pub fn lists(&self) -> &[Vec<String>] {
        &self.lists
    }

    /// Returns true when the area is revealed
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Reveals the area
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the area, keeping its lists
    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn append(&mut self, list: Vec<String>) {
        self.lists.push(list);
    }
}

impl fmt::Display for EpisodesArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.visible {
            return Ok(());
        }

        for list in &self.lists {
            if list.is_empty() {
                writeln!(f, "No episodes found.")?;
            }
            for line in list {
                writeln!(f, "  - {}", line)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Formats a single episode as a display line
pub fn format_episode_line(episode: &Episode) -> String {
    format!(
        "{}(Season: {}, Number:{})",
        episode.name, episode.season, episode.number
    )
}

/// Replaces the contents of the shows list with one card per show
pub fn render_shows(list: &mut ShowsList, shows: &[Show]) {
    list.clear();
    for show in shows {
        list.append(ShowCard::from_show(show));
    }
}

/// Appends a list of the given episodes to the area and reveals it
pub fn render_episodes(area: &mut EpisodesArea, episodes: &[Episode]) {
    let list = episodes.iter().map(format_episode_line).collect();
    area.append(list);
    area.show();
}
