// Pbevents Decoder State
// Motion coalescing and debounce state carried across pump calls

use crate::output::{EventSink, MotionEvent};

/// One buffered motion sample, emitted at the end of a pump call.
///
/// At most one sample is held; buffering overwrites the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingMotion {
    pub pending: bool,
    pub touching: bool,
    pub x: i32,
    pub y: i32,
}

impl PendingMotion {
    /// Buffer a sample, replacing any earlier one
    pub fn buffer(&mut self, touching: bool, pos: [i32; 2]) {
        *self = Self {
            pending: true,
            touching,
            x: pos[0],
            y: pos[1],
        };
    }

    /// Drop the buffered sample; an emitted transition supersedes it
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Take the buffered sample as a motion event, clearing it
    pub fn take(&mut self) -> Option<MotionEvent> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(MotionEvent::new(self.touching, self.x, self.y))
    }
}

/// All mutable decoder state of one input subsystem
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub motion: PendingMotion,
    /// Pointer button mask seen on the last button transition
    pub last_buttons: i32,
    /// Whether the single tracked touch contact is down
    pub touching: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the buffered motion sample, if any. Returns true if one was sent.
    pub fn flush_motion<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        match self.motion.take() {
            Some(motion) => {
                log::trace!("flushing buffered motion to ({}, {})", motion.x, motion.y);
                sink.post_motion(motion);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventBatch;
    use crate::output::{Button, OutputEvent};

    #[test]
    fn test_buffer_overwrites() {
        let mut motion = PendingMotion::default();
        motion.buffer(false, [1, 2]);
        motion.buffer(true, [3, 4]);
        assert_eq!(
            motion,
            PendingMotion {
                pending: true,
                touching: true,
                x: 3,
                y: 4,
            }
        );
    }

    #[test]
    fn test_take_clears() {
        let mut motion = PendingMotion::default();
        assert_eq!(motion.take(), None);
        motion.buffer(true, [5, 6]);
        let event = motion.take().unwrap();
        assert_eq!(event.held, Some(Button::Left));
        assert_eq!((event.x, event.y), (5, 6));
        assert_eq!(motion.take(), None);
    }

    #[test]
    fn test_cancel() {
        let mut motion = PendingMotion::default();
        motion.buffer(false, [1, 1]);
        motion.cancel();
        assert!(!motion.pending);
        assert_eq!(motion.take(), None);
    }

    #[test]
    fn test_flush_motion() {
        let mut state = InputState::new();
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        assert!(!state.flush_motion(&mut sink));
        assert!(sink.is_empty());

        state.motion.buffer(false, [7, 8]);
        assert!(state.flush_motion(&mut sink));
        assert!(!state.flush_motion(&mut sink));
        assert_eq!(
            sink.as_slice(),
            &[OutputEvent::Motion(MotionEvent::new(false, 7, 8))]
        );
    }
}
