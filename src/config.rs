use std::path::{Path, PathBuf};

pub const LIBRARY_FILE: &str = "game_library.json";
pub const DEFAULT_ICON: &str = "default_icon.png";
pub const BACKGROUND_IMAGE: &str = "PandaGameLauncher.png";

/// Where the launcher keeps its files. Relative paths resolve against the
/// working directory.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub library_file: PathBuf,
    pub default_icon: PathBuf,
    pub background_image: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_file: LIBRARY_FILE.into(),
            default_icon: DEFAULT_ICON.into(),
            background_image: BACKGROUND_IMAGE.into(),
        }
    }
}

impl Config {
    /// Same file names, rooted at `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self {
            library_file: dir.join(LIBRARY_FILE),
            default_icon: dir.join(DEFAULT_ICON),
            background_image: dir.join(BACKGROUND_IMAGE),
        }
    }

    /// The default icon as it is stored in a game record.
    pub fn default_icon_str(&self) -> String {
        self.default_icon.to_string_lossy().into_owned()
    }
}
