// Pbevents Output Layer - Host Sink
// Where normalized events leave the core

use super::event::{ButtonEvent, KeyEvent, MotionEvent, OutputEvent};

/// The host's event intake.
///
/// Events are posted in the order they were decoded. Control never flows
/// back from the sink into the core.
pub trait EventSink {
    fn post_key(&mut self, event: KeyEvent);

    fn post_button(&mut self, event: ButtonEvent);

    fn post_motion(&mut self, event: MotionEvent);

    /// Ask the host process to quit
    fn post_quit(&mut self);

    /// Post any normalized event
    fn post(&mut self, event: OutputEvent) {
        match event {
            OutputEvent::Key(e) => self.post_key(e),
            OutputEvent::Button(e) => self.post_button(e),
            OutputEvent::Motion(e) => self.post_motion(e),
            OutputEvent::Quit => self.post_quit(),
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn post_key(&mut self, event: KeyEvent) {
        (**self).post_key(event)
    }

    fn post_button(&mut self, event: ButtonEvent) {
        (**self).post_button(event)
    }

    fn post_motion(&mut self, event: MotionEvent) {
        (**self).post_motion(event)
    }

    fn post_quit(&mut self) {
        (**self).post_quit()
    }
}
