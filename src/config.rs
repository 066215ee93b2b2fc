use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::input_policy::CharPolicy;
use crate::render::Cue;

/// Number of levels in a run.
pub const LEVEL_COUNT: usize = 3;
pub const DEFAULT_TIME_LIMITS: [f64; LEVEL_COUNT] = [45.0, 75.0, 120.0];
pub const COUNTDOWN_SECS: u32 = 3;
/// Half period of the cursor and menu prompt blink.
pub const BLINK_INTERVAL_SECS: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub time_limits: [f64; LEVEL_COUNT],
    pub countdown_secs: u32,
    pub input_filter: CharPolicy,
    /// Directory holding `level1.txt`..; bundled passages when unset.
    pub passage_dir: Option<PathBuf>,
    /// Cues that ring the terminal bell, e.g. `["finish"]`.
    pub bell: Vec<Cue>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_limits: DEFAULT_TIME_LIMITS,
            countdown_secs: COUNTDOWN_SECS,
            input_filter: CharPolicy::default(),
            passage_dir: None,
            bell: Vec::new(),
        }
    }
}

impl Config {
    pub fn rings_bell(&self, cues: &[Cue]) -> bool {
        cues.iter().any(|c| self.bell.contains(c))
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring malformed config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
