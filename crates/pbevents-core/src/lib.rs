// Pbevents Core Library
// Screen input-event translation: native records in, normalized events out

pub mod action;
pub mod decode;
pub mod event;
pub mod input;
pub mod key;
pub mod keymap;
pub mod modifier;
pub mod output;

#[cfg(feature = "config")]
pub mod settings;

pub use action::Action;
pub use decode::{InputState, KeyTranslation};
pub use event::{EventBatch, EventPump, PumpConfig, PumpStats};
pub use input::{
    EventQueue, EventType, Property, PropertyError, QueueError, RawEvent, ScriptedEvent,
    ScriptedQueue, WindowHandle,
};
pub use key::{KeySym, Scancode};
pub use keymap::{KeymapTables, SymbolLookup};
pub use modifier::KeyMod;
pub use output::{Button, ButtonEvent, EventSink, KeyEvent, MotionEvent, OutputEvent};

#[cfg(feature = "config")]
pub use input::ScriptError;
#[cfg(feature = "config")]
pub use settings::{Settings, SettingsError};
