//! Editor configuration
//!
//! Stores popup templates, input hints, snippets and editing preferences in
//! `~/.config/ded/config.yaml`. Every section has defaults, so a missing or
//! partial file still yields a usable configuration.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Color;

/// Placeholder shown when a configured string is missing
pub const MISSING_PLACEHOLDER: &str = "???";

/// Message flashed when any configuration lookup fails
pub const CONFIG_ERROR_MESSAGE: &str = "Config error! See program output for more info";
pub const CONFIG_ERROR_COLOR: Color = Color(0xff2400ff);
pub const CONFIG_ERROR_DURATION: Duration = Duration::from_millis(2000);

/// Errors from loading the config file or resolving a configured string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `section/key` is not configured
    MissingKey { section: &'static str, key: String },
    /// Template references an unknown placeholder or has an unclosed brace
    Template { key: String, reason: String },
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { section, key } => write!(f, "\"{}/{}\" not configured", section, key),
            Self::Template { key, reason } => write!(f, "\"{}\" format error: {}", key, reason),
            Self::Io(msg) => write!(f, "could not read config: {}", msg),
            Self::Parse(msg) => write!(f, "could not parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Popup appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    #[serde(default = "default_popup_scale")]
    pub scale: f64,
    /// Fade-in time in milliseconds
    #[serde(default = "default_fade_in", rename = "fade_in")]
    pub fade_in_ms: u64,
}

fn default_popup_scale() -> f64 {
    0.5
}

fn default_fade_in() -> u64 {
    150
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            scale: default_popup_scale(),
            fade_in_ms: default_fade_in(),
        }
    }
}

impl PopupConfig {
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }
}

/// A configured popup: text with `{name}` placeholders, color, lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupTemplate {
    pub text: String,
    pub color: Color,
    pub duration_ms: u64,
}

impl PopupTemplate {
    fn new(text: &str, color: u32, duration_ms: u64) -> Self {
        Self {
            text: text.to_string(),
            color: Color(color),
            duration_ms,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditingConfig {
    /// Spaces inserted by Tab
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

fn default_tab_width() -> usize {
    4
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
        }
    }
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub popup: PopupConfig,
    #[serde(default = "default_popup_messages")]
    pub popup_messages: HashMap<String, PopupTemplate>,
    #[serde(default = "default_input_hints")]
    pub input_hints: HashMap<String, String>,
    #[serde(default)]
    pub editor: EditingConfig,
    /// Trigger word → snippet content (`$0` marks the cursor)
    #[serde(default)]
    pub snippets: HashMap<String, String>,
}

fn default_popup_messages() -> HashMap<String, PopupTemplate> {
    [
        ("save ok", PopupTemplate::new("Saved {path}", 0x7ccf00ff, 1500)),
        (
            "can not save",
            PopupTemplate::new("Can not save: {err}", 0xff2400ff, 3000),
        ),
        (
            "can not open",
            PopupTemplate::new("Can not open {path}: {err}", 0xff2400ff, 3000),
        ),
        (
            "invalid goto",
            PopupTemplate::new("Expected LINE or LINE:COL", 0xffa500ff, 2000),
        ),
    ]
    .into_iter()
    .map(|(key, template)| (key.to_string(), template))
    .collect()
}

fn default_input_hints() -> HashMap<String, String> {
    [
        ("find", "Find: "),
        ("save", "Save to: "),
        ("save as", "Save as: "),
        ("goto", "Goto: "),
    ]
    .into_iter()
    .map(|(key, hint)| (key.to_string(), hint.to_string()))
    .collect()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            popup: PopupConfig::default(),
            popup_messages: default_popup_messages(),
            input_hints: default_input_hints(),
            editor: EditingConfig::default(),
            snippets: HashMap::new(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| ConfigError::Io("no config directory available".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn popup_template(&self, key: &str) -> Result<&PopupTemplate, ConfigError> {
        self.popup_messages
            .get(key)
            .ok_or_else(|| ConfigError::MissingKey {
                section: "popup_messages",
                key: key.to_string(),
            })
    }

    pub fn input_hint(&self, key: &str) -> Result<&str, ConfigError> {
        self.input_hints
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingKey {
                section: "input_hints",
                key: key.to_string(),
            })
    }
}

/// Substitute `{name}` placeholders. `{{` and `}}` are literal braces.
pub fn format_template(
    key: &str,
    template: &str,
    placeholders: &[(&str, &str)],
) -> Result<String, ConfigError> {
    let err = |reason: String| ConfigError::Template {
        key: key.to_string(),
        reason,
    };

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => return Err(err("unclosed '{'".to_string())),
                    }
                }
                let value = placeholders
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| err(format!("unknown placeholder {{{}}}", name)))?;
                out.push_str(value);
            }
            '}' => return Err(err("unmatched '}'".to_string())),
            _ => out.push(c),
        }
    }
    Ok(out)
}
