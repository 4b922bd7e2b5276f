// Pbevents Input Layer - Scripted Queue
// In-memory event records and queue, used for replay and tests

use std::collections::{HashMap, VecDeque};

use super::event::{EventType, Property, PropertyError, PropertyResult, RawEvent, WindowHandle};
use super::queue::{EventQueue, QueueError, QueueResult};

/// Value stored for one property of a scripted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue {
    Int(i32),
    IntPair([i32; 2]),
    Long(i64),
}

/// A raw event record held in memory.
///
/// Build with the chained setters:
///
/// ```
/// use pbevents_core::input::{EventType, Property, ScriptedEvent};
///
/// let event = ScriptedEvent::new(EventType::Pointer)
///     .with_window(1)
///     .with_int(Property::Buttons, 1)
///     .with_pair(Property::SourcePosition, [10, 20]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedEvent {
    props: HashMap<Property, PropertyValue>,
    window: Option<WindowHandle>,
}

impl ScriptedEvent {
    /// Create an event of the given type with no window
    pub fn new(event_type: EventType) -> Self {
        Self::with_raw_type(event_type.raw())
    }

    /// Create an event with an arbitrary native type value
    pub fn with_raw_type(raw: i32) -> Self {
        Self::default().with_int(Property::Type, raw)
    }

    /// Set the owning window; 0 clears it
    pub fn with_window(mut self, raw: usize) -> Self {
        self.window = WindowHandle::new(raw);
        self
    }

    pub fn with_int(mut self, prop: Property, value: i32) -> Self {
        self.props.insert(prop, PropertyValue::Int(value));
        self
    }

    pub fn with_pair(mut self, prop: Property, value: [i32; 2]) -> Self {
        self.props.insert(prop, PropertyValue::IntPair(value));
        self
    }

    pub fn with_long(mut self, prop: Property, value: i64) -> Self {
        self.props.insert(prop, PropertyValue::Long(value));
        self
    }

    /// Pointer record on window 1
    pub fn pointer(buttons: i32, pos: [i32; 2], wheel: i32) -> Self {
        Self::new(EventType::Pointer)
            .with_window(1)
            .with_int(Property::Buttons, buttons)
            .with_pair(Property::SourcePosition, pos)
            .with_pair(Property::Position, pos)
            .with_int(Property::MouseWheel, wheel)
    }

    /// Multi-touch record of the given touch type on window 1
    pub fn touch(event_type: EventType, pos: [i32; 2]) -> Self {
        Self::new(event_type)
            .with_window(1)
            .with_int(Property::TouchId, 0)
            .with_pair(Property::SourcePosition, pos)
            .with_pair(Property::Position, pos)
    }

    /// Keyboard record with no window
    pub fn keyboard(sym: i32, modifiers: i32, flags: i32, scan: i32) -> Self {
        Self::new(EventType::Keyboard)
            .with_int(Property::KeySym, sym)
            .with_int(Property::KeyModifiers, modifiers)
            .with_int(Property::KeyFlags, flags)
            .with_int(Property::KeyScan, scan)
            .with_int(Property::KeyCap, sym)
    }

    fn get(&self, prop: Property) -> PropertyResult<PropertyValue> {
        self.props
            .get(&prop)
            .copied()
            .ok_or(PropertyError::Missing(prop))
    }
}

impl RawEvent for ScriptedEvent {
    fn int(&self, prop: Property) -> PropertyResult<i32> {
        match self.get(prop)? {
            PropertyValue::Int(v) => Ok(v),
            _ => Err(PropertyError::WrongKind {
                prop,
                expected: "integer",
            }),
        }
    }

    fn int_pair(&self, prop: Property) -> PropertyResult<[i32; 2]> {
        match self.get(prop)? {
            PropertyValue::IntPair(v) => Ok(v),
            _ => Err(PropertyError::WrongKind {
                prop,
                expected: "integer pair",
            }),
        }
    }

    fn long(&self, prop: Property) -> PropertyResult<i64> {
        match self.get(prop)? {
            PropertyValue::Long(v) => Ok(v),
            PropertyValue::Int(v) => Ok(i64::from(v)),
            _ => Err(PropertyError::WrongKind {
                prop,
                expected: "64-bit integer",
            }),
        }
    }

    fn window(&self) -> PropertyResult<Option<WindowHandle>> {
        Ok(self.window)
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Event(ScriptedEvent),
    Failure(String),
}

/// Queue that hands out pre-recorded events in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedQueue {
    entries: VecDeque<Scripted>,
    polls: usize,
}

impl ScriptedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&mut self, event: ScriptedEvent) {
        self.entries.push_back(Scripted::Event(event));
    }

    /// Append a poll failure; the poll that reaches it returns an error
    pub fn push_failure(&mut self, message: impl Into<String>) {
        self.entries.push_back(Scripted::Failure(message.into()));
    }

    /// Number of entries not yet polled
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of poll calls so far
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl FromIterator<ScriptedEvent> for ScriptedQueue {
    fn from_iter<I: IntoIterator<Item = ScriptedEvent>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Scripted::Event).collect(),
            polls: 0,
        }
    }
}

impl EventQueue for ScriptedQueue {
    type Event = ScriptedEvent;

    fn poll(&mut self) -> QueueResult<Option<ScriptedEvent>> {
        self.polls += 1;
        match self.entries.pop_front() {
            None => Ok(None),
            Some(Scripted::Event(event)) => Ok(Some(event)),
            Some(Scripted::Failure(message)) => Err(QueueError::Poll(message)),
        }
    }
}
