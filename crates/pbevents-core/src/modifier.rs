// Pbevents Modifier Masks
// Host modifier mask and the native modifier bits it is decoded from

use std::fmt;

bitflags::bitflags! {
    /// Host modifier mask carried on every key event.
    ///
    /// Combine with bitwise OR: `KeyMod::LSHIFT | KeyMod::LCTRL`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyMod: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LMETA = 0x0400;
        const RMETA = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;
    }
}

/// Native modifier bits as reported on keyboard records
pub mod native {
    pub const SHIFT: i32 = 0x1;
    pub const CTRL: i32 = 0x2;
    pub const ALT: i32 = 0x4;
    pub const CAPS_LOCK: i32 = 0x10000;
    pub const NUM_LOCK: i32 = 0x20000;
    /// No host mask bit exists for scroll lock; it is ignored.
    pub const SCROLL_LOCK: i32 = 0x40000;
}

impl KeyMod {
    /// No modifiers
    pub const NONE: KeyMod = KeyMod::empty();

    /// Decode native modifier bits.
    ///
    /// The native source does not distinguish left from right, so every
    /// modifier maps to its left variant.
    pub fn from_native(mods: i32) -> KeyMod {
        const TABLE: &[(i32, KeyMod)] = &[
            (native::SHIFT, KeyMod::LSHIFT),
            (native::CTRL, KeyMod::LCTRL),
            (native::ALT, KeyMod::LALT),
            (native::CAPS_LOCK, KeyMod::CAPS),
            (native::NUM_LOCK, KeyMod::NUM),
        ];

        TABLE
            .iter()
            .filter(|(bit, _)| mods & bit != 0)
            .fold(KeyMod::NONE, |acc, &(_, m)| acc | m)
    }

    /// Returns true if either shift is held
    pub fn has_shift(self) -> bool {
        self.intersects(KeyMod::LSHIFT | KeyMod::RSHIFT)
    }
}

impl fmt::Display for KeyMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        bitflags::parser::to_writer(self, f)
    }
}
