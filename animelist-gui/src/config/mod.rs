use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use animelist_lib::fs::config_dir;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

/// Handle to the GUI configuration shared between components
pub type Cfg = Arc<RwLock<GuiConfig>>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access the configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse the configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize the configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The GUI's configuration, serialized to TOML.
///
/// Missing fields take their default value, so older or hand-written files keep working.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub theme: Theme,
    pub entry_list: EntryList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryList {
    /// Window width, in logical pixels, from which cards use the wide layout
    pub wide_breakpoint: f32,
}

impl Default for EntryList {
    fn default() -> Self {
        Self {
            wide_breakpoint: 768.0,
        }
    }
}

impl GuiConfig {
    /// Location of `gui.toml` inside the user's configuration directory
    pub fn default_path() -> Result<PathBuf, Error> {
        Ok(config_dir()?.join(FILE_NAME))
    }

    /// Load the configuration stored at `path`.
    ///
    /// A missing file is created with the defaults. A file that can't be read or parsed is left
    /// alone and the defaults are used instead.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(cfg)) => cfg,
            Ok(None) => {
                let cfg = Self::default();
                match cfg.save(path) {
                    Ok(()) => debug!("Wrote default configuration to {}", path.display()),
                    Err(e) => warn!("{e}"),
                }
                cfg
            }
            Err(e) => {
                warn!("{e}, using the default configuration");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let contents = toml::to_string_pretty(self)?;

        // Make sure the parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;

        Ok(())
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }

    fn read(path: &Path) -> Result<Option<Self>, Error> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&contents)?))
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::tempdir;

    use super::{GuiConfig, Theme};

    #[test]
    fn test_load_missing_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("gui.toml");

        let cfg = GuiConfig::load(&path);

        assert_eq!(cfg, GuiConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");

        let mut cfg = GuiConfig::default();
        cfg.theme = Theme::Nord;
        cfg.entry_list.wide_breakpoint = 1024.0;
        cfg.save(&path).unwrap();

        assert_eq!(GuiConfig::load(&path), cfg);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");
        fs::write(&path, "theme = \"solarized-light\"\n").unwrap();

        let cfg = GuiConfig::load(&path);

        assert_eq!(cfg.theme, Theme::SolarizedLight);
        assert_eq!(cfg.entry_list, Default::default());
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");
        fs::write(&path, "theme = [").unwrap();

        assert_eq!(GuiConfig::load(&path), GuiConfig::default());
        // The broken file is left for the user to fix
        assert_eq!(fs::read_to_string(&path).unwrap(), "theme = [");
    }
}
