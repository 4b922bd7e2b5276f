// Pbevents Pointer Decoder
// Mouse records -> wheel clicks, left-button transitions and buffered motion

use super::{read_int, read_pair, InputState};
use crate::input::{Property, RawEvent};
use crate::output::{Button, ButtonEvent, EventSink};
use crate::Action;

/// Fields of one pointer record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    /// Native button mask
    pub buttons: i32,
    /// Window-relative position
    pub source: [i32; 2],
    /// Screen position; read but unused by the decoder
    pub screen: [i32; 2],
    pub wheel: i32,
}

impl PointerSample {
    pub fn read<E: RawEvent + ?Sized>(event: &E) -> Self {
        Self {
            buttons: read_int(event, Property::Buttons),
            source: read_pair(event, Property::SourcePosition),
            screen: read_pair(event, Property::Position),
            wheel: read_int(event, Property::MouseWheel),
        }
    }

    /// Wheel button for the delta, if it moved
    pub fn wheel_button(&self) -> Option<Button> {
        match self.wheel {
            0 => None,
            d if d > 0 => Some(Button::WheelDown),
            _ => Some(Button::WheelUp),
        }
    }
}

/// Decode one pointer sample.
///
/// A wheel delta becomes an immediate press and release of the wheel
/// button, posted at (0, 0) unless `wheel_at_cursor` is set. Then, when the
/// button mask is unchanged the position is buffered as motion; when it
/// changed a left-button transition is posted at the source position and
/// any buffered motion is dropped.
pub fn handle_pointer<S: EventSink + ?Sized>(
    sample: &PointerSample,
    state: &mut InputState,
    wheel_at_cursor: bool,
    sink: &mut S,
) {
    if let Some(button) = sample.wheel_button() {
        let [x, y] = if wheel_at_cursor { sample.source } else { [0, 0] };
        log::trace!("wheel {} ({}) at ({}, {})", button, sample.wheel, x, y);
        for action in [Action::Press, Action::Release] {
            sink.post_button(ButtonEvent {
                button,
                action,
                x,
                y,
            });
        }
    }

    if sample.buttons == state.last_buttons {
        state.motion.buffer(sample.buttons != 0, sample.source);
        return;
    }
    state.last_buttons = sample.buttons;

    let [x, y] = sample.source;
    let action = Action::from_down(sample.buttons != 0);
    log::trace!("pointer mask {:#x}: left {} at ({}, {})", sample.buttons, action, x, y);
    sink.post_button(ButtonEvent {
        button: Button::Left,
        action,
        x,
        y,
    });
    state.motion.cancel();
}
