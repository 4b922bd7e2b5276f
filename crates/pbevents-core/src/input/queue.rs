// Pbevents Input Layer - Native Queue
// Non-blocking poll boundary to the platform event queue

use super::event::RawEvent;

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur while polling the native queue
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Event poll failed: {0}")]
    Poll(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Native event queue.
///
/// `poll` uses a zero timeout: it returns the next event if one is ready
/// and `Ok(None)` otherwise. It never blocks.
pub trait EventQueue {
    type Event: RawEvent;

    fn poll(&mut self) -> QueueResult<Option<Self::Event>>;
}

impl<Q: EventQueue + ?Sized> EventQueue for &mut Q {
    type Event = Q::Event;

    fn poll(&mut self) -> QueueResult<Option<Self::Event>> {
        (**self).poll()
    }
}
