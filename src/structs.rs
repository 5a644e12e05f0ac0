use std::path::Path;

/// One entry of the library. Field order here is the key order on disk.
#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct Game {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub icon: String,
}

impl Game {
    pub fn new(name: impl Into<String>, path: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: icon.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        Path::new(&self.path)
    }
}
