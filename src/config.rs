//! Runtime options for the UI and the terminal backend.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! mouse = true
//! alternate_screen = true
//! coalesce_repaints = true
//! flush_lone_escape = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable mouse reporting
    pub mouse: bool,
    /// Draw on the alternate screen and restore the shell on exit
    pub alternate_screen: bool,
    /// Merge back-to-back repaint requests into one redraw
    pub coalesce_repaints: bool,
    /// Treat an ESC at the end of a read as the Esc key
    pub flush_lone_escape: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mouse: true,
            alternate_screen: true,
            coalesce_repaints: true,
            flush_lone_escape: true,
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
