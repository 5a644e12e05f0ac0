use panda_launcher::error::LaunchError;
use panda_launcher::launcher;
use panda_launcher::structs::Game;

#[test]
fn missing_executable_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let game = Game::new("Gone", dir.path().join("gone.exe").to_string_lossy(), "");

    let result = launcher::launch(&game);

    assert!(matches!(result, Err(LaunchError::Spawn { .. })));
}

#[cfg(unix)]
#[test]
fn runs_from_the_executable_directory() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let game_dir = dir.path().join("game");
    fs::create_dir(&game_dir).unwrap();

    let script = game_dir.join("run.sh");
    fs::write(&script, "#!/bin/sh\npwd -P > started.txt\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let game = Game::new("Run", script.to_string_lossy(), "");
    let mut child = launcher::launch(&game).unwrap();
    assert!(child.wait().unwrap().success());

    let started = fs::read_to_string(game_dir.join("started.txt")).unwrap();
    assert_eq!(started.trim(), fs::canonicalize(&game_dir).unwrap().to_string_lossy());
}
