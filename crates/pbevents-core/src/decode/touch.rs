// Pbevents Multi-touch Decoder
// Single-contact touch tracking reported as left-button mouse input

use std::fmt;

use super::{read_int, read_long, read_pair, InputState};
use crate::input::{EventType, Property, RawEvent};
use crate::output::{Button, ButtonEvent, EventSink, MotionEvent};
use crate::Action;

/// Phase of a multi-touch record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Touch,
    Move,
    Release,
}

impl TouchPhase {
    /// Phase for a multi-touch event type; `None` for anything else
    pub fn from_event_type(ty: EventType) -> Option<Self> {
        match ty {
            EventType::MtouchTouch => Some(TouchPhase::Touch),
            EventType::MtouchMove => Some(TouchPhase::Move),
            EventType::MtouchRelease => Some(TouchPhase::Release),
            _ => None,
        }
    }
}

impl fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TouchPhase::Touch => write!(f, "touch"),
            TouchPhase::Move => write!(f, "move"),
            TouchPhase::Release => write!(f, "release"),
        }
    }
}

/// Fields of one multi-touch record.
///
/// Only `source` drives decoding. The rest is read so callers tracking
/// more than one contact have it at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchSample {
    pub contact_id: i32,
    pub source: [i32; 2],
    pub screen: [i32; 2],
    pub orientation: i32,
    pub pressure: i32,
    pub timestamp: i64,
    pub sequence_id: i32,
}

impl TouchSample {
    pub fn read<E: RawEvent + ?Sized>(event: &E) -> Self {
        Self {
            contact_id: read_int(event, Property::TouchId),
            source: read_pair(event, Property::SourcePosition),
            screen: read_pair(event, Property::Position),
            orientation: read_int(event, Property::TouchOrientation),
            pressure: read_int(event, Property::TouchPressure),
            timestamp: read_long(event, Property::Timestamp),
            sequence_id: read_int(event, Property::SequenceId),
        }
    }
}

/// Decode one touch sample against the tracked contact.
///
/// Touch and release post their events immediately and drop any buffered
/// motion. Move only buffers.
pub fn handle_touch<S: EventSink + ?Sized>(
    phase: TouchPhase,
    sample: &TouchSample,
    state: &mut InputState,
    sink: &mut S,
) {
    let [x, y] = sample.source;
    log::trace!(
        "{} contact {} at ({}, {}), tracking={}",
        phase,
        sample.contact_id,
        x,
        y,
        state.touching
    );

    let left = |action| ButtonEvent {
        button: Button::Left,
        action,
        x,
        y,
    };

    match phase {
        TouchPhase::Touch => {
            if state.touching {
                sink.post_motion(MotionEvent::new(true, x, y));
            } else {
                sink.post_motion(MotionEvent::new(false, x, y));
                sink.post_button(left(Action::Press));
            }
            state.motion.cancel();
            state.touching = true;
        }
        TouchPhase::Release => {
            if state.touching {
                sink.post_motion(MotionEvent::new(true, x, y));
                sink.post_button(left(Action::Release));
            } else {
                sink.post_motion(MotionEvent::new(false, x, y));
            }
            state.motion.cancel();
            state.touching = false;
        }
        TouchPhase::Move => state.motion.buffer(state.touching, sample.source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventBatch;
    use crate::input::ScriptedEvent;
    use crate::output::OutputEvent;

    fn at(x: i32, y: i32) -> TouchSample {
        TouchSample {
            source: [x, y],
            ..TouchSample::default()
        }
    }

    #[test]
    fn test_phase_from_event_type() {
        assert_eq!(
            TouchPhase::from_event_type(EventType::MtouchTouch),
            Some(TouchPhase::Touch)
        );
        assert_eq!(
            TouchPhase::from_event_type(EventType::MtouchRelease),
            Some(TouchPhase::Release)
        );
        assert_eq!(TouchPhase::from_event_type(EventType::Pointer), None);
    }

    #[test]
    fn test_read_sample() {
        let event = ScriptedEvent::touch(EventType::MtouchMove, [3, 4])
            .with_int(Property::TouchId, 2)
            .with_int(Property::TouchPressure, 80)
            .with_long(Property::Timestamp, 1 << 40)
            .with_int(Property::SequenceId, 9);
        let sample = TouchSample::read(&event);
        assert_eq!(sample.contact_id, 2);
        assert_eq!(sample.source, [3, 4]);
        assert_eq!(sample.pressure, 80);
        assert_eq!(sample.timestamp, 1 << 40);
        assert_eq!(sample.sequence_id, 9);
        assert_eq!(sample.orientation, 0);
    }

    #[test]
    fn test_touch_begin_emits_motion_then_press() {
        let mut state = InputState::new();
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        state.motion.buffer(false, [1, 1]);
        handle_touch(TouchPhase::Touch, &at(10, 20), &mut state, &mut sink);
        assert_eq!(
            sink.as_slice(),
            &[
                OutputEvent::Motion(MotionEvent::new(false, 10, 20)),
                OutputEvent::Button(ButtonEvent {
                    button: Button::Left,
                    action: Action::Press,
                    x: 10,
                    y: 20,
                }),
            ]
        );
        assert!(state.touching);
        assert!(!state.motion.pending);
    }

    #[test]
    fn test_touch_while_tracking_only_moves() {
        let mut state = InputState::new();
        state.touching = true;
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        handle_touch(TouchPhase::Touch, &at(5, 5), &mut state, &mut sink);
        assert_eq!(
            sink.as_slice(),
            &[OutputEvent::Motion(MotionEvent::new(true, 5, 5))]
        );
    }

    #[test]
    fn test_release_while_tracking_emits_motion_then_release() {
        let mut state = InputState::new();
        state.touching = true;
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        handle_touch(TouchPhase::Release, &at(6, 7), &mut state, &mut sink);
        assert_eq!(
            sink.as_slice(),
            &[
                OutputEvent::Motion(MotionEvent::new(true, 6, 7)),
                OutputEvent::Button(ButtonEvent {
                    button: Button::Left,
                    action: Action::Release,
                    x: 6,
                    y: 7,
                }),
            ]
        );
        assert!(!state.touching);
    }

    #[test]
    fn test_release_without_contact_only_moves() {
        let mut state = InputState::new();
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        handle_touch(TouchPhase::Release, &at(1, 2), &mut state, &mut sink);
        assert_eq!(
            sink.as_slice(),
            &[OutputEvent::Motion(MotionEvent::new(false, 1, 2))]
        );
    }

    #[test]
    fn test_move_is_deferred() {
        let mut state = InputState::new();
        state.touching = true;
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        handle_touch(TouchPhase::Move, &at(3, 3), &mut state, &mut sink);
        handle_touch(TouchPhase::Move, &at(4, 4), &mut state, &mut sink);
        assert!(sink.is_empty());
        assert!(state.flush_motion(&mut sink));
        assert_eq!(
            sink.as_slice(),
            &[OutputEvent::Motion(MotionEvent::new(true, 4, 4))]
        );
    }
}
