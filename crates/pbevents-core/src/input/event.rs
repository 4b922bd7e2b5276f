// Pbevents Input Layer - Raw Event Records
// Type tags, property identifiers and the accessor trait for native events

use std::num::NonZeroUsize;

use strum_macros::{Display, EnumIter, EnumString};

/// Native event type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EventType {
    None,
    Create,
    Property,
    Close,
    Input,
    Jog,
    Pointer,
    Keyboard,
    User,
    Post,
    EffectComplete,
    Display,
    Idle,
    Unrealize,
    Gamepad,
    Joystick,
    Manager,
    MtouchTouch,
    MtouchMove,
    MtouchRelease,
}

impl EventType {
    /// Decode a native type value. Unknown values yield `None`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        let ty = match raw {
            0 => EventType::None,
            1 => EventType::Create,
            2 => EventType::Property,
            3 => EventType::Close,
            4 => EventType::Input,
            5 => EventType::Jog,
            6 => EventType::Pointer,
            7 => EventType::Keyboard,
            8 => EventType::User,
            9 => EventType::Post,
            10 => EventType::EffectComplete,
            11 => EventType::Display,
            12 => EventType::Idle,
            13 => EventType::Unrealize,
            14 => EventType::Gamepad,
            15 => EventType::Joystick,
            16 => EventType::Manager,
            100 => EventType::MtouchTouch,
            101 => EventType::MtouchMove,
            102 => EventType::MtouchRelease,
            _ => return None,
        };
        Some(ty)
    }

    /// Native value of this type
    pub fn raw(self) -> i32 {
        match self {
            EventType::None => 0,
            EventType::Create => 1,
            EventType::Property => 2,
            EventType::Close => 3,
            EventType::Input => 4,
            EventType::Jog => 5,
            EventType::Pointer => 6,
            EventType::Keyboard => 7,
            EventType::User => 8,
            EventType::Post => 9,
            EventType::EffectComplete => 10,
            EventType::Display => 11,
            EventType::Idle => 12,
            EventType::Unrealize => 13,
            EventType::Gamepad => 14,
            EventType::Joystick => 15,
            EventType::Manager => 16,
            EventType::MtouchTouch => 100,
            EventType::MtouchMove => 101,
            EventType::MtouchRelease => 102,
        }
    }

    /// Returns true for the three multi-touch types
    pub fn is_touch(self) -> bool {
        matches!(
            self,
            EventType::MtouchTouch | EventType::MtouchMove | EventType::MtouchRelease
        )
    }
}

/// Named property identifiers readable from a raw event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Property {
    Type,
    Window,
    /// Name of the changed property on property-change events
    Name,
    Buttons,
    SourcePosition,
    Position,
    MouseWheel,
    KeySym,
    KeyModifiers,
    KeyFlags,
    KeyScan,
    KeyCap,
    TouchId,
    TouchOrientation,
    TouchPressure,
    Timestamp,
    SequenceId,
}

/// Opaque handle of the window an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(NonZeroUsize);

impl WindowHandle {
    /// Wrap a raw native handle; a null handle yields `None`
    pub fn new(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(WindowHandle)
    }

    pub fn raw(self) -> usize {
        self.0.get()
    }
}

/// Result type for property reads
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors from reading a property off a raw event
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("property {0} is not present on this event")]
    Missing(Property),

    #[error("property {prop} is not a {expected} value")]
    WrongKind {
        prop: Property,
        expected: &'static str,
    },
}

/// Accessors for one native event record.
///
/// Mirrors the native per-event getters: integer, integer pair, 64-bit
/// integer and pointer-valued (window) properties.
pub trait RawEvent {
    /// Read an integer property
    fn int(&self, prop: Property) -> PropertyResult<i32>;

    /// Read a two-integer property such as a position
    fn int_pair(&self, prop: Property) -> PropertyResult<[i32; 2]>;

    /// Read a 64-bit integer property such as a timestamp
    fn long(&self, prop: Property) -> PropertyResult<i64>;

    /// Read the owning window; `Ok(None)` when the handle is null
    fn window(&self) -> PropertyResult<Option<WindowHandle>>;

    /// Read and decode the type tag.
    ///
    /// `Ok(None)` means the value is not a known type.
    fn event_type(&self) -> PropertyResult<Option<EventType>> {
        self.int(Property::Type).map(EventType::from_raw)
    }
}
