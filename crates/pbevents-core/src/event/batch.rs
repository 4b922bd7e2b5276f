// Pbevents Event Batch
// Ordered collection of normalized events; doubles as a recording sink

use crate::output::{ButtonEvent, EventSink, KeyEvent, MotionEvent, OutputEvent};

/// Batch of events in emission order
#[derive(Debug, Clone, PartialEq)]
pub struct EventBatch<T> {
    events: Vec<T>,
}

impl<T> EventBatch<T> {
    /// Create a new empty batch
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(batch_config::DEFAULT_CAPACITY),
        }
    }

    /// Create a batch with a pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Add an event to the batch
    pub fn push(&mut self, event: T) {
        self.events.push(event);
    }

    /// Extend the batch with multiple events
    pub fn extend(&mut self, events: impl IntoIterator<Item = T>) {
        self.events.extend(events);
    }

    /// Get the number of events in the batch
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the batch is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear the batch
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Remove and return all events, leaving the batch empty
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Iterate over the events
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Get a reference to the underlying events
    pub fn as_slice(&self) -> &[T] {
        &self.events
    }

    /// Consume the batch and return the events
    pub fn into_vec(self) -> Vec<T> {
        self.events
    }
}

impl<T> Default for EventBatch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsRef<[T]> for EventBatch<T> {
    fn as_ref(&self) -> &[T] {
        &self.events
    }
}

impl EventSink for EventBatch<OutputEvent> {
    fn post_key(&mut self, event: KeyEvent) {
        self.push(event.into());
    }

    fn post_button(&mut self, event: ButtonEvent) {
        self.push(event.into());
    }

    fn post_motion(&mut self, event: MotionEvent) {
        self.push(event.into());
    }

    fn post_quit(&mut self) {
        self.push(OutputEvent::Quit);
    }
}

/// Batch size configuration
pub mod batch_config {
    /// Default capacity; one pump call rarely yields more than a handful
    pub const DEFAULT_CAPACITY: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, KeyMod, KeySym, Scancode};

    #[test]
    fn test_event_batch_new() {
        let batch: EventBatch<u32> = EventBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn test_event_batch_push_extend() {
        let mut batch = EventBatch::new();
        batch.push(1);
        batch.extend(vec![2, 3]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.iter().sum::<u32>(), 6);
    }

    #[test]
    fn test_event_batch_drain() {
        let mut batch = EventBatch::new();
        batch.extend(vec![1, 2, 3]);
        let drained: Vec<u32> = batch.drain().collect();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_event_batch_into_vec() {
        let mut batch = EventBatch::with_capacity(4);
        batch.extend(vec![1, 2, 3]);
        assert_eq!(batch.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_batch_records_sink_calls_in_order() {
        let mut batch: EventBatch<OutputEvent> = EventBatch::new();
        let key = KeyEvent {
            scancode: Scancode(16),
            sym: KeySym::Q,
            modifiers: KeyMod::NONE,
            action: Action::Press,
        };
        batch.post_key(key);
        batch.post_motion(MotionEvent::new(false, 2, 3));
        batch.post_quit();
        assert_eq!(
            batch.into_vec(),
            vec![
                OutputEvent::Key(key),
                OutputEvent::Motion(MotionEvent::new(false, 2, 3)),
                OutputEvent::Quit,
            ]
        );
    }
}
