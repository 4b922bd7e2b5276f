// Pbevents Keymap Layer
// Static lookup tables shared by the keyboard decoders

mod tables;
mod virtual_keys;

pub use tables::{
    KeyMapEntry, KeymapTables, SpecialCollision, SymbolLookup, SPECIAL_MARKER, TABLE_SIZE,
};
pub use virtual_keys::{virtual_key, VirtualKey};
