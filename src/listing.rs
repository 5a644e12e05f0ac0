use std::path::{Path, PathBuf};

use crate::structs::Game;

/// One row of the game list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub label: String,
    /// `None` renders the row without an icon.
    pub icon: Option<PathBuf>,
}

/// Rebuilds the displayed rows from the library, in library order.
pub fn sync(games: &[Game], default_icon: &Path) -> Vec<ListEntry> {
    games
        .iter()
        .map(|game| ListEntry {
            label: game.name.clone(),
            icon: resolve_icon(game, default_icon),
        })
        .collect()
}

fn resolve_icon(game: &Game, default_icon: &Path) -> Option<PathBuf> {
    let candidate = if game.icon.is_empty() {
        default_icon
    } else {
        Path::new(&game.icon)
    };

    if candidate.is_file() {
        Some(candidate.to_path_buf())
    } else {
        log::debug!("No icon for {} at {}", game.name, candidate.display());
        None
    }
}
