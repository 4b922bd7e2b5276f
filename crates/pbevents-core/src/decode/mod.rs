// Pbevents Decoders
// Per-event-type translation of raw records into normalized events

pub mod keyboard;
pub mod pointer;
mod state;
pub mod touch;

pub use keyboard::{
    decode_hardware, decode_virtual, handle_keyboard, translate_keyboard, KeyTranslation, RawKey,
    VirtualDecode,
};
pub use pointer::{handle_pointer, PointerSample};
pub use state::{InputState, PendingMotion};
pub use touch::{handle_touch, TouchPhase, TouchSample};

use crate::input::{Property, RawEvent};

// Unreadable properties decode as zero, the same as an unset native field.

pub(crate) fn read_int<E: RawEvent + ?Sized>(event: &E, prop: Property) -> i32 {
    event.int(prop).unwrap_or_else(|err| {
        log::trace!("{}; using 0", err);
        0
    })
}

pub(crate) fn read_pair<E: RawEvent + ?Sized>(event: &E, prop: Property) -> [i32; 2] {
    event.int_pair(prop).unwrap_or_else(|err| {
        log::trace!("{}; using (0, 0)", err);
        [0, 0]
    })
}

pub(crate) fn read_long<E: RawEvent + ?Sized>(event: &E, prop: Property) -> i64 {
    event.long(prop).unwrap_or_else(|err| {
        log::trace!("{}; using 0", err);
        0
    })
}
