// Pbevents Settings Module
// User-tunable pump behaviour loaded from TOML

#![cfg(feature = "config")]

use std::path::{Path, PathBuf};

use crate::event::PumpConfig;

/// Settings controlling the event pump
///
/// Loaded from a TOML file (default: ~/.config/pbevents/settings.toml).
/// Every key is optional; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Records processed per pump call
    max_events_per_call: usize,

    /// Post wheel clicks at the pointer position rather than (0, 0)
    wheel_at_cursor: bool,

    /// Wrap shifted on-screen keys in synthetic left-shift events
    synthesize_shift: bool,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    pump: Option<PumpSettings>,

    #[serde(default)]
    pointer: Option<PointerSettings>,

    #[serde(default)]
    keyboard: Option<KeyboardSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct PumpSettings {
    #[serde(default)]
    max_events_per_call: Option<i64>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct PointerSettings {
    #[serde(default)]
    wheel_at_cursor: Option<toml::Value>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct KeyboardSettings {
    #[serde(default)]
    synthesize_shift: Option<toml::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with every value at its default
    pub fn new() -> Self {
        let pump = PumpConfig::default();
        Self {
            max_events_per_call: pump.max_events_per_call,
            wheel_at_cursor: pump.wheel_at_cursor,
            synthesize_shift: pump.synthesize_shift,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(max) = toml_settings.pump.and_then(|p| p.max_events_per_call) {
            settings.max_events_per_call = usize::try_from(max)
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    SettingsError::InvalidValue(format!(
                        "pump.max_events_per_call must be at least 1, got {}",
                        max
                    ))
                })?;
        }

        if let Some(value) = toml_settings.pointer.and_then(|p| p.wheel_at_cursor) {
            settings.wheel_at_cursor = parse_bool_value(&value)?;
        }

        if let Some(value) = toml_settings.keyboard.and_then(|k| k.synthesize_shift) {
            settings.synthesize_shift = parse_bool_value(&value)?;
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pbevents").join("settings.toml"))
    }

    /// Load from default location (~/.config/pbevents/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::new())
    }

    pub fn max_events_per_call(&self) -> usize {
        self.max_events_per_call
    }

    pub fn wheel_at_cursor(&self) -> bool {
        self.wheel_at_cursor
    }

    pub fn synthesize_shift(&self) -> bool {
        self.synthesize_shift
    }

    /// File these settings were read from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reload settings from the file they were read from
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    /// Pump configuration described by these settings
    pub fn pump_config(&self) -> PumpConfig {
        PumpConfig {
            max_events_per_call: self.max_events_per_call,
            wheel_at_cursor: self.wheel_at_cursor,
            synthesize_shift: self.synthesize_shift,
        }
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Pbevents Settings
# Place this file at: ~/.config/pbevents/settings.toml

[pump]
# Native records decoded per pump call; must be at least 1
max_events_per_call = 1

[pointer]
# Post wheel clicks at the pointer position instead of (0, 0)
wheel_at_cursor = false

[keyboard]
# Wrap shifted on-screen keys in a left-shift press/release
synthesize_shift = true
"#
}
