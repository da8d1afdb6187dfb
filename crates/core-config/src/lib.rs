//! Configuration loading and parsing.
//!
//! Reads `rowed.toml` (or an override path provided by the binary). Every
//! field is optional and defaults to the built-in behavior; unknown fields
//! are ignored. A missing file or a file that fails to parse yields the
//! defaults, the latter with a warning on the `config` target.
//!
//! ```toml
//! [editor]
//! quit_confirmations = 1
//! message_timeout_secs = 5
//! [render]
//! write_buffer_capacity = 128
//! [input]
//! poll_timeout_ms = 100
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "rowed.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_quit_confirmations")]
    pub quit_confirmations: u32,
    #[serde(default = "EditorConfig::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quit_confirmations: Self::default_quit_confirmations(),
            message_timeout_secs: Self::default_message_timeout_secs(),
        }
    }
}

impl EditorConfig {
    const fn default_quit_confirmations() -> u32 {
        1
    }
    const fn default_message_timeout_secs() -> u64 {
        5
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_write_buffer_capacity")]
    pub write_buffer_capacity: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            write_buffer_capacity: Self::default_write_buffer_capacity(),
        }
    }
}

impl RenderConfig {
    const fn default_write_buffer_capacity() -> usize {
        128
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: Self::default_poll_timeout_ms(),
        }
    }
}

impl InputConfig {
    const fn default_poll_timeout_ms() -> u64 {
        100
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where the values came from, when a file was read.
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("rowed").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                source: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Extra Ctrl-Q presses required to quit with unsaved changes.
    pub fn quit_confirmations(&self) -> u32 {
        self.file.editor.quit_confirmations
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.file.editor.message_timeout_secs.max(1))
    }

    pub fn write_buffer_capacity(&self) -> usize {
        self.file.render.write_buffer_capacity.max(1)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.file.input.poll_timeout_ms.max(1))
    }
}
