use std::fs;

use panda_launcher::config::Config;
use panda_launcher::editor;
use panda_launcher::error::LibraryError;
use panda_launcher::library::Library;
use panda_launcher::listing;
use panda_launcher::structs::Game;
use pretty_assertions::assert_eq;

fn sample_games() -> Vec<Game> {
    vec![
        Game::new("Foo", "/games/foo.exe", "/icons/foo.png"),
        Game::new("Bar", "/games/bar.exe", ""),
        Game::new("Foo", "/games/foo.exe", "/icons/foo.png"),
    ]
}

fn filled_library(path: &std::path::Path) -> Result<Library, LibraryError> {
    let mut library = Library::empty(path);

    for game in sample_games() {
        library.append(game)?;
    }

    Ok(library)
}

#[test]
fn save_and_reload_round_trips() -> Result<(), LibraryError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game_library.json");

    filled_library(&path)?;

    assert_eq!(Library::load(&path)?.games(), sample_games().as_slice());

    Ok(())
}

#[test]
fn saving_twice_is_byte_identical() -> Result<(), LibraryError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game_library.json");

    let library = filled_library(&path)?;
    library.save()?;
    let first = fs::read(&path)?;

    Library::load(&path)?.save()?;

    assert_eq!(fs::read(&path)?, first);

    Ok(())
}

#[test]
fn appended_game_is_last_after_reload() -> Result<(), LibraryError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game_library.json");
    filled_library(&path)?;

    let mut library = Library::load(&path)?;
    library.append(Game::new("Baz", "/games/baz.exe", ""))?;

    let reloaded = Library::load(&path)?;
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.games().last(), Some(&Game::new("Baz", "/games/baz.exe", "")));

    Ok(())
}

#[test]
fn replace_changes_only_that_game() -> Result<(), LibraryError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game_library.json");
    let mut library = filled_library(&path)?;

    library.replace(1, Game::new("Bar 2", "/games/bar2.exe", "/icons/bar.png"))?;

    let mut expected = sample_games();
    expected[1] = Game::new("Bar 2", "/games/bar2.exe", "/icons/bar.png");

    assert_eq!(library.games(), expected.as_slice());
    assert_eq!(Library::load(&path)?.games(), expected.as_slice());

    Ok(())
}

#[test]
fn replace_past_the_end_leaves_file_alone() -> Result<(), LibraryError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("game_library.json");
    let mut library = filled_library(&path)?;
    let before = fs::read(&path)?;

    let result = library.replace(3, Game::new("Nope", "nope.exe", ""));

    assert!(matches!(result, Err(LibraryError::OutOfRange { index: 3, len: 3 })));
    assert_eq!(fs::read(&path)?, before);

    Ok(())
}

#[test]
fn new_game_gets_default_icon_and_survives_reload() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = Config::in_dir(dir.path());
    fs::write(&config.default_icon, b"png")?;

    let mut library = Library::load(&config.library_file)?;
    assert!(library.is_empty());

    let mut game = editor::create("/games/foo.exe", None, &config.default_icon_str())?;
    game.name = "Foo".into();
    assert_eq!(game.icon, config.default_icon_str());

    library.append(game.clone())?;

    let entries = listing::sync(library.games(), &config.default_icon);
    assert_eq!(entries[0].icon.as_deref(), Some(config.default_icon.as_path()));

    assert_eq!(Library::load(&config.library_file)?.games(), &[game]);

    Ok(())
}
