// Pbevents Input Layer
// Boundary to the native event queue and its raw event records

mod event;
mod queue;
#[cfg(feature = "config")]
mod script;
mod scripted;

pub use event::{
    EventType, Property, PropertyError, PropertyResult, RawEvent, WindowHandle,
};
pub use queue::{EventQueue, QueueError, QueueResult};
#[cfg(feature = "config")]
pub use script::ScriptError;
pub use scripted::{PropertyValue, ScriptedEvent, ScriptedQueue};
