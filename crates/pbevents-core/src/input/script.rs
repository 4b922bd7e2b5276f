// Pbevents Input Layer - Event Scripts
// Parses recorded raw event streams from TOML into a ScriptedQueue

#![cfg(feature = "config")]

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::event::{EventType, Property};
use super::scripted::{ScriptedEvent, ScriptedQueue};

/// Errors that can occur when loading an event script
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Unknown event type in entry {index}: {value}")]
    UnknownEventType { index: usize, value: String },
}

/// Root of a script file: a list of `[[event]]` tables
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ScriptToml {
    #[serde(default)]
    event: Vec<EventToml>,
}

/// One recorded event. Only the fields present are set on the record.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventToml {
    /// Type name (e.g. "pointer", "mtouch_move") or raw native value
    #[serde(rename = "type")]
    event_type: TypeToml,
    #[serde(default)]
    window: Option<usize>,
    #[serde(default)]
    name: Option<i32>,
    #[serde(default)]
    buttons: Option<i32>,
    #[serde(default)]
    source_position: Option<[i32; 2]>,
    #[serde(default)]
    position: Option<[i32; 2]>,
    #[serde(default)]
    mouse_wheel: Option<i32>,
    #[serde(default)]
    key_sym: Option<i32>,
    #[serde(default)]
    key_modifiers: Option<i32>,
    #[serde(default)]
    key_flags: Option<i32>,
    #[serde(default)]
    key_scan: Option<i32>,
    #[serde(default)]
    key_cap: Option<i32>,
    #[serde(default)]
    touch_id: Option<i32>,
    #[serde(default)]
    touch_orientation: Option<i32>,
    #[serde(default)]
    touch_pressure: Option<i32>,
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    sequence_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TypeToml {
    Raw(i32),
    Name(String),
}

impl EventToml {
    fn into_event(self, index: usize) -> Result<ScriptedEvent, ScriptError> {
        let mut event = match self.event_type {
            TypeToml::Raw(raw) => ScriptedEvent::with_raw_type(raw),
            TypeToml::Name(name) => {
                let ty = EventType::from_str(&name).map_err(|_| ScriptError::UnknownEventType {
                    index,
                    value: name.clone(),
                })?;
                ScriptedEvent::new(ty)
            }
        };

        if let Some(window) = self.window {
            event = event.with_window(window);
        }

        let ints = [
            (Property::Name, self.name),
            (Property::Buttons, self.buttons),
            (Property::MouseWheel, self.mouse_wheel),
            (Property::KeySym, self.key_sym),
            (Property::KeyModifiers, self.key_modifiers),
            (Property::KeyFlags, self.key_flags),
            (Property::KeyScan, self.key_scan),
            (Property::KeyCap, self.key_cap),
            (Property::TouchId, self.touch_id),
            (Property::TouchOrientation, self.touch_orientation),
            (Property::TouchPressure, self.touch_pressure),
            (Property::SequenceId, self.sequence_id),
        ];
        for (prop, value) in ints {
            if let Some(value) = value {
                event = event.with_int(prop, value);
            }
        }

        let pairs = [
            (Property::SourcePosition, self.source_position),
            (Property::Position, self.position),
        ];
        for (prop, value) in pairs {
            if let Some(value) = value {
                event = event.with_pair(prop, value);
            }
        }

        if let Some(timestamp) = self.timestamp {
            event = event.with_long(Property::Timestamp, timestamp);
        }

        Ok(event)
    }
}

impl ScriptedQueue {
    /// Load a script from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a script from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        let script: ScriptToml =
            toml::from_str(content).map_err(|e| ScriptError::TomlParse(e.to_string()))?;

        let mut queue = ScriptedQueue::new();
        for (index, entry) in script.event.into_iter().enumerate() {
            queue.push(entry.into_event(index)?);
        }
        log::debug!("loaded event script with {} entries", queue.len());
        Ok(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{EventQueue, RawEvent, WindowHandle};

    #[test]
    fn test_script_from_toml() {
        let toml = r#"
[[event]]
type = "mtouch_touch"
window = 1
source_position = [10, 20]
timestamp = 123456789012

[[event]]
type = "keyboard"
key_sym = 97
key_flags = 1

[[event]]
type = 7
key_sym = 98
"#;

        let mut queue = ScriptedQueue::from_toml(toml).unwrap();
        assert_eq!(queue.len(), 3);

        let touch = queue.poll().unwrap().unwrap();
        assert_eq!(touch.event_type(), Ok(Some(EventType::MtouchTouch)));
        assert_eq!(touch.window(), Ok(WindowHandle::new(1)));
        assert_eq!(touch.int_pair(Property::SourcePosition), Ok([10, 20]));
        assert_eq!(touch.long(Property::Timestamp), Ok(123456789012));
        assert!(touch.int(Property::Buttons).is_err());

        let key = queue.poll().unwrap().unwrap();
        assert_eq!(key.event_type(), Ok(Some(EventType::Keyboard)));
        assert_eq!(key.int(Property::KeySym), Ok(97));
        assert_eq!(key.window(), Ok(None));

        let raw = queue.poll().unwrap().unwrap();
        assert_eq!(raw.event_type(), Ok(Some(EventType::Keyboard)));
    }

    #[test]
    fn test_script_unknown_type() {
        let toml = r#"
[[event]]
type = "pointer"

[[event]]
type = "swipe"
"#;
        let err = ScriptedQueue::from_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::UnknownEventType { index: 1, ref value } if value == "swipe"
        ));
    }

    #[test]
    fn test_script_rejects_unknown_fields() {
        let toml = r#"
[[event]]
type = "pointer"
colour = "red"
"#;
        assert!(matches!(
            ScriptedQueue::from_toml(toml),
            Err(ScriptError::TomlParse(_))
        ));
    }

    #[test]
    fn test_empty_script() {
        let queue = ScriptedQueue::from_toml("").unwrap();
        assert!(queue.is_empty());
    }
}
