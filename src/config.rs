use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::dispatch::NavAction;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
  /// Custom title for the header (defaults to the binary name if not set)
  pub title: Option<String>,
  #[serde(default)]
  pub grid: GridConfig,
  /// Extra key-code to action entries, layered over the built-in remote
  /// table. Values are action names: up, down, left, right, accept, back.
  #[serde(default)]
  pub keymap: BTreeMap<u32, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
  pub rows: usize,
  pub cols: usize,
  /// Tile labels, row-major; missing ones fall back to built-in names
  pub labels: Vec<String>,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      rows: 2,
      cols: 4,
      labels: Vec::new(),
    }
  }
}

impl Config {
  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./tvnav.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/tvnav/config.yaml
  ///
  /// No file found means built-in defaults; the simulator runs out of the
  /// box. An explicit path that does not exist is still an error.
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    match path {
      Some(p) => Self::load_from_path(&p),
      None => Ok(Self::default()),
    }
  }

  fn find_config_file() -> Option<PathBuf> {
    // Check current directory
    let local = PathBuf::from("tvnav.yaml");
    if local.exists() {
      return Some(local);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("tvnav").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    let config: Config = serde_yaml::from_str(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))?;

    Ok(config)
  }

  /// Keymap overrides parsed into actions, failing on unknown action names
  pub fn keymap_overrides(&self) -> Result<Vec<(u32, NavAction)>> {
    self
      .keymap
      .iter()
      .map(|(code, name)| {
        NavAction::parse(name)
          .map(|action| (*code, action))
          .ok_or_else(|| eyre!("Unknown action {:?} for key code {} in keymap", name, code))
      })
      .collect()
  }
}
