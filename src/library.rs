//! The game library and its JSON file.
//!
//! Every mutation writes the whole library back to disk before returning, so
//! the file always matches what is in memory once a call completes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::LIBRARY_FILE;
use crate::error::LibraryError;
use crate::structs::Game;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    path: PathBuf,
    games: Vec<Game>,
}

impl Default for Library {
    fn default() -> Self {
        Self::empty(LIBRARY_FILE)
    }
}

impl Library {
    /// An empty library that will be saved to `path`. Nothing is written yet.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            games: Vec::new(),
        }
    }

    /// Reads the library at `path`. A missing file is an empty library.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LibraryError> {
        let path = path.into();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No library at {}, starting empty", path.display());
                return Ok(Self::empty(path));
            }
            Err(e) => return Err(e.into()),
        };

        let games: Vec<Game> = match serde_json::from_str(&content) {
            Ok(games) => games,
            Err(source) => return Err(LibraryError::Parse { path, source }),
        };

        log::info!("Loaded {} games from {}", games.len(), path.display());

        Ok(Self { path, games })
    }

    /// Overwrites the library file with the current games.
    pub fn save(&self) -> Result<(), LibraryError> {
        let json = serde_json::to_string_pretty(&self.games).map_err(LibraryError::Serialize)?;

        fs::write(&self.path, json)?;

        log::debug!("Saved {} games to {}", self.games.len(), self.path.display());

        Ok(())
    }

    pub fn append(&mut self, game: Game) -> Result<(), LibraryError> {
        log::info!("Adding {} ({})", game.name, game.path);

        self.games.push(game);

        if let Err(e) = self.save() {
            self.games.pop();
            return Err(e);
        }

        Ok(())
    }

    /// Overwrites the game at `index`. An invalid index or a failed write leaves
    /// memory and the file as they were.
    pub fn replace(&mut self, index: usize, game: Game) -> Result<(), LibraryError> {
        let len = self.games.len();

        let slot = self
            .games
            .get_mut(index)
            .ok_or(LibraryError::OutOfRange { index, len })?;

        let previous = std::mem::replace(slot, game);

        if let Err(e) = self.save() {
            self.games[index] = previous;
            return Err(e);
        }

        Ok(())
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
