// Pbevents Output Layer
// Normalized event vocabulary and the host sink boundary

mod event;
mod sink;

pub use event::{Button, ButtonEvent, KeyEvent, MotionEvent, OutputEvent};
pub use sink::EventSink;
