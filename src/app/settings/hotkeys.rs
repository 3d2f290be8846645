//! User-facing settings: the hotkey table, persisted as TOML in the config
//! dir. Each action holds a list of key specs so users can bind a primary
//! and an alternate key, e.g. `list_up = ["up", "k"]`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::input::{KeyCode, KeyEvent, KeyModifiers};

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub hotkeys: Hotkeys,
}

impl Settings {
    pub fn settings_file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(SETTINGS_FILE)
    }

    /// Load settings from `config_dir`; a missing file yields defaults.
    pub fn load(config_dir: &Path) -> Result<Self, SettingsError> {
        let path = Self::settings_file_path(config_dir);
        if !path.exists() {
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(&path)?;
        toml::from_str(&text).map_err(|source| SettingsError::Parse { path, source })
    }

    /// Persist settings, creating the config dir if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), SettingsError> {
        fs::create_dir_all(config_dir)?;
        let text = toml::to_string_pretty(self)?;
        fs::write(Self::settings_file_path(config_dir), text)?;
        Ok(())
    }
}

/// Bound keys per action. An empty string in a slot means "unbound" and
/// never matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Hotkeys {
    pub quit: Vec<String>,
    pub list_up: Vec<String>,
    pub list_down: Vec<String>,
    pub reset_cursor: Vec<String>,
    pub confirm: Vec<String>,
    pub pinned_directory: Vec<String>,
    pub refresh: Vec<String>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        fn keys(a: &str, b: &str) -> Vec<String> {
            vec![a.to_string(), b.to_string()]
        }
        Hotkeys {
            quit: keys("esc", "q"),
            list_up: keys("up", "k"),
            list_down: keys("down", "j"),
            reset_cursor: keys("home", "g"),
            confirm: keys("enter", "l"),
            pinned_directory: keys("ctrl+p", ""),
            refresh: keys("r", ""),
        }
    }
}

impl Hotkeys {
    /// True when `key` matches one of the specs bound to `action`. Unknown
    /// action names match nothing.
    pub fn is_bound(&self, action: &str, key: &KeyEvent) -> bool {
        let specs = match action {
            "quit" => &self.quit,
            "list_up" => &self.list_up,
            "list_down" => &self.list_down,
            "reset_cursor" => &self.reset_cursor,
            "confirm" => &self.confirm,
            "pinned_directory" => &self.pinned_directory,
            "refresh" => &self.refresh,
            _ => return false,
        };
        specs.iter().any(|spec| matches_key(spec, key))
    }
}

/// Match one key spec ("up", "k", "ctrl+p", ...) against a key event.
fn matches_key(spec: &str, key: &KeyEvent) -> bool {
    if spec.is_empty() {
        return false;
    }
    let (want_ctrl, name) = match spec.split_once('+') {
        Some(("ctrl", rest)) => (true, rest),
        Some(_) => (false, spec), // unknown modifier prefix: treat literally
        None => (false, spec),
    };
    if want_ctrl != key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match named_key(name) {
        Some(code) => key.code == code,
        None => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => key.code == KeyCode::Char(c),
                _ => false,
            }
        }
    }
}

fn named_key(name: &str) -> Option<KeyCode> {
    Some(match name {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        "delete" => KeyCode::Delete,
        "pgup" => KeyCode::PageUp,
        "pgdn" => KeyCode::PageDown,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn default_bindings_match_expected_keys() {
        let hotkeys = Hotkeys::default();
        assert!(hotkeys.is_bound("list_up", &key(KeyCode::Up)));
        assert!(hotkeys.is_bound("list_up", &key(KeyCode::Char('k'))));
        assert!(hotkeys.is_bound("list_down", &key(KeyCode::Char('j'))));
        assert!(hotkeys.is_bound("quit", &key(KeyCode::Esc)));
        assert!(hotkeys.is_bound("pinned_directory", &ctrl('p')));
        assert!(!hotkeys.is_bound("list_up", &key(KeyCode::Down)));
        assert!(!hotkeys.is_bound("no_such_action", &key(KeyCode::Up)));
    }

    #[test]
    fn empty_slot_never_matches() {
        let hotkeys = Hotkeys::default();
        // `pinned_directory` has an empty second slot; no plain key matches.
        assert!(!hotkeys.is_bound("pinned_directory", &key(KeyCode::Char('p'))));
    }

    #[test]
    fn ctrl_spec_requires_the_modifier() {
        assert!(matches_key("ctrl+p", &ctrl('p')));
        assert!(!matches_key("ctrl+p", &key(KeyCode::Char('p'))));
        assert!(!matches_key("p", &ctrl('p')));
    }

    #[test]
    fn settings_roundtrip_on_disk() {
        let temp = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.hotkeys.quit = vec!["q".to_string()];
        settings.save(temp.path()).unwrap();
        assert_eq!(Settings::load(temp.path()).unwrap(), settings);
    }

    #[test]
    fn missing_settings_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(temp.path()).unwrap(), Settings::default());
    }
}
