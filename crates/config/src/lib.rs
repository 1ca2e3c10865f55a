//! Configuration types and loading for winplace.
//!
//! The config file is RON: a list of programs to launch, each with the title
//! substring used to find its window, the monitor to place it on, and the
//! placement parameters. Example:
//!
//! ```ron
//! (
//!     programs: [
//!         (
//!             name: "Explorer",
//!             command: "C:/Windows/explorer.exe",
//!             monitor: secondary,
//!             width_pct: 0.75,
//!             height_pct: 0.75,
//!             maximize: true,
//!         ),
//!     ],
//! )
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Error type for configuration loading.
pub mod error;

pub use error::Error;

/// Top-level configuration: the launch sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Programs to launch and place, in order.
    #[serde(default)]
    pub programs: Vec<ProgramSpec>,
}

/// One program to launch and the placement it gets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSpec {
    /// Substring matched case-insensitively against window titles.
    pub name: String,
    /// Path to the executable.
    pub command: PathBuf,
    /// Arguments passed verbatim.
    #[serde(default)]
    pub args: Vec<String>,
    /// Which monitor the window goes to.
    #[serde(default)]
    pub monitor: MonitorChoice,
    /// Window width as a fraction of the monitor's work-area width.
    #[serde(default = "default_pct")]
    pub width_pct: f64,
    /// Window height as a fraction of the monitor's work-area height.
    #[serde(default = "default_pct")]
    pub height_pct: f64,
    /// Maximize after positioning.
    #[serde(default = "default_maximize")]
    pub maximize: bool,
    /// How long to wait for the window to appear, in milliseconds.
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,
}

/// Which monitor a window is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorChoice {
    /// The secondary monitor on a three-monitor desk, else the primary.
    #[default]
    Auto,
    /// The monitor whose work area starts at the origin.
    Primary,
    /// The monitor left of the primary.
    Secondary,
    /// Any other monitor.
    Other,
}

/// Default width/height fraction.
fn default_pct() -> f64 {
    0.75
}

/// Maximize by default.
fn default_maximize() -> bool {
    true
}

/// Default window wait: ten seconds.
fn default_wait_ms() -> u64 {
    10_000
}

impl Config {
    /// Parse a configuration from RON text.
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Load and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_ron(&text).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            line: e.span.start.line,
            col: e.span.start.col,
            message: e.code.to_string(),
        })
    }
}

/// Default config location: `~/.winplace/winplace.ron`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .unwrap_or_default();
    let mut p = PathBuf::from(home);
    p.push(".winplace");
    p.push("winplace.ron");
    p
}

/// Resolve the config path to load: an explicit path wins, otherwise the
/// default location, which must exist.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, Error> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let preferred = default_config_path();
    if preferred.exists() {
        return Ok(preferred);
    }

    Err(Error::Read {
        path: preferred,
        message: "No config found. Create ~/.winplace/winplace.ron or pass --config".to_string(),
    })
}
