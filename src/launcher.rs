use std::env;
use std::path::PathBuf;
use std::process::{Child, Command};

use crate::error::LaunchError;
use crate::structs::Game;

/// Starts the game's executable from its own directory, with no arguments.
///
/// The returned child is not waited on. Dropping it leaves the game running.
pub fn launch(game: &Game) -> Result<Child, LaunchError> {
    let spawn_error = |source| LaunchError::Spawn {
        path: PathBuf::from(&game.path),
        source,
    };

    let executable = game.executable();

    // a relative program would otherwise be looked up from the new working directory
    let program = if executable.is_relative() {
        env::current_dir().map_err(spawn_error)?.join(executable)
    } else {
        executable.to_path_buf()
    };

    let mut command = Command::new(&program);

    if let Some(dir) = program.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        command.current_dir(dir);
    }

    let child = command.spawn().map_err(spawn_error)?;

    log::info!("Launched {} (pid {})", game.name, child.id());

    Ok(child)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.exe");
        let game = Game::new("Nope", path.to_string_lossy(), "");

        let err = launch(&game).unwrap_err();

        let LaunchError::Spawn { path: reported, source } = err;
        assert_eq!(reported, path);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn empty_path_fails() {
        assert!(launch(&Game::new("Empty", "", "")).is_err());
    }
}
