//! Turning user input into [`Game`] records.

use std::path::Path;

use crate::error::EditorError;
use crate::structs::Game;

/// Builds a new game from a picked executable and an optional icon.
///
/// The name is the executable's file name. An empty or missing icon is
/// replaced by `default_icon`.
pub fn create(executable: &str, icon: Option<&str>, default_icon: &str) -> Result<Game, EditorError> {
    if executable.is_empty() {
        return Err(EditorError::MissingExecutable);
    }

    let name = Path::new(executable)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| executable.to_string());

    let icon = match icon {
        Some(icon) if !icon.is_empty() => icon,
        _ => default_icon,
    };

    Ok(Game::new(name, executable, icon))
}

/// Text fields of the edit dialog, pre-filled from an existing game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditForm {
    pub name: String,
    pub path: String,
    pub icon: String,
}

impl EditForm {
    pub fn from_game(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            path: game.path.clone(),
            icon: game.icon.clone(),
        }
    }

    /// All three fields are taken as typed, empty ones included.
    pub fn finish(self) -> Game {
        Game {
            name: self.name,
            path: self.path,
            icon: self.icon,
        }
    }
}
