// Pbevents Keycode Tables
// Raw key code -> abstract symbol lookup, built once and shared read-only

use std::sync::{Arc, OnceLock};

use crate::{KeyMod, KeySym};

/// Bits that mark a raw symbol as a "special" (non-printable) key
pub const SPECIAL_MARKER: i32 = 0xf000;

/// Number of slots in each table
pub const TABLE_SIZE: usize = 256;

/// One entry of the ascii table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyMapEntry {
    pub sym: KeySym,
    pub modifiers: KeyMod,
}

/// Result of resolving a raw symbol against the tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolLookup {
    Mapped(KeySym),
    Unmapped,
}

impl SymbolLookup {
    pub fn is_mapped(self) -> bool {
        matches!(self, SymbolLookup::Mapped(_))
    }

    /// The mapped symbol, or `KeySym::UNKNOWN` when unmapped
    pub fn sym_or_unknown(self) -> KeySym {
        match self {
            SymbolLookup::Mapped(sym) => sym,
            SymbolLookup::Unmapped => KeySym::UNKNOWN,
        }
    }
}

impl From<Option<KeySym>> for SymbolLookup {
    fn from(value: Option<KeySym>) -> Self {
        value.map_or(SymbolLookup::Unmapped, SymbolLookup::Mapped)
    }
}

/// A special-table slot written more than once during init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialCollision {
    pub slot: u8,
    /// Association that was overwritten
    pub replaced: KeySym,
    /// Association left in the table
    pub kept: KeySym,
}

/// Special-key associations, applied in order. Later writes win.
///
/// 0xbe is listed for both F1 and MENU; MENU ends up in the slot.
const SPECIAL_ASSOCIATIONS: &[(u8, KeySym)] = &[
    (0x08, KeySym::BACKSPACE),
    (0x09, KeySym::TAB),
    (0x0d, KeySym::RETURN),
    (0x13, KeySym::PAUSE),
    (0x1b, KeySym::ESCAPE),
    (0xff, KeySym::DELETE),
    (0x52, KeySym::UP),
    (0x54, KeySym::DOWN),
    (0x53, KeySym::RIGHT),
    (0x51, KeySym::LEFT),
    (0x63, KeySym::INSERT),
    (0x50, KeySym::HOME),
    (0x57, KeySym::END),
    (0x55, KeySym::PAGEUP),
    (0x56, KeySym::PAGEDOWN),
    (0xbe, KeySym::F1),
    (0xbf, KeySym::F2),
    (0xc0, KeySym::F3),
    (0xc1, KeySym::F4),
    (0xc2, KeySym::F5),
    (0xc3, KeySym::F6),
    (0xc4, KeySym::F7),
    (0xc5, KeySym::F8),
    (0xc6, KeySym::F9),
    (0xc7, KeySym::F10),
    (0xc8, KeySym::F11),
    (0xc9, KeySym::F12),
    (0xe5, KeySym::CAPSLOCK),
    (0x14, KeySym::SCROLLOCK),
    (0xe2, KeySym::RSHIFT),
    (0xe1, KeySym::LSHIFT),
    (0xe4, KeySym::RCTRL),
    (0xe3, KeySym::LCTRL),
    (0xe8, KeySym::RALT),
    (0xe9, KeySym::LALT),
    (0xbe, KeySym::MENU),
    (0x61, KeySym::SYSREQ),
    (0x6b, KeySym::BREAK),
];

/// The two keycode tables used by every keyboard decoder.
///
/// Immutable after construction. Use [`KeymapTables::shared`] to get the
/// process-wide instance, which is built exactly once.
#[derive(Debug, Clone)]
pub struct KeymapTables {
    ascii: [Option<KeyMapEntry>; TABLE_SIZE],
    special: [Option<KeySym>; TABLE_SIZE],
    collisions: Vec<SpecialCollision>,
}

impl KeymapTables {
    /// Build both tables
    pub fn new() -> Self {
        let mut ascii = [None; TABLE_SIZE];
        for code in 32u16..=122 {
            let entry = match code {
                // Capital letters map to their lowercase symbol plus shift
                65..=90 => KeyMapEntry {
                    sym: KeySym(code + 32),
                    modifiers: KeyMod::LSHIFT,
                },
                _ => KeyMapEntry {
                    sym: KeySym(code),
                    modifiers: KeyMod::NONE,
                },
            };
            ascii[code as usize] = Some(entry);
        }

        let mut special: [Option<KeySym>; TABLE_SIZE] = [None; TABLE_SIZE];
        let mut collisions = Vec::new();
        for &(slot, sym) in SPECIAL_ASSOCIATIONS {
            if let Some(replaced) = special[slot as usize].replace(sym) {
                if replaced != sym {
                    log::warn!(
                        "special key slot {:#04x} maps to both {} and {}; keeping {}",
                        slot,
                        replaced,
                        sym,
                        sym
                    );
                    collisions.push(SpecialCollision {
                        slot,
                        replaced,
                        kept: sym,
                    });
                }
            }
        }

        Self {
            ascii,
            special,
            collisions,
        }
    }

    /// Process-wide tables, built on first access
    pub fn shared() -> Arc<KeymapTables> {
        static SHARED: OnceLock<Arc<KeymapTables>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(KeymapTables::new())).clone()
    }

    /// Ascii table entry for a raw code
    pub fn ascii_entry(&self, raw: usize) -> Option<KeyMapEntry> {
        self.ascii.get(raw).copied().flatten()
    }

    /// Special table entry for the low byte of a raw special code
    pub fn special_sym(&self, slot: u8) -> SymbolLookup {
        self.special[slot as usize].into()
    }

    /// Slots written twice while building the special table
    pub fn collisions(&self) -> &[SpecialCollision] {
        &self.collisions
    }

    /// Resolve a raw key symbol.
    ///
    /// Symbols carrying [`SPECIAL_MARKER`] are looked up by low byte in the
    /// special table; everything else indexes the ascii table directly.
    pub fn resolve(&self, raw_sym: i32) -> SymbolLookup {
        if raw_sym & SPECIAL_MARKER != 0 {
            return self.special_sym((raw_sym & 0xff) as u8);
        }
        usize::try_from(raw_sym)
            .ok()
            .and_then(|raw| self.ascii_entry(raw))
            .map(|entry| entry.sym)
            .into()
    }
}

impl Default for KeymapTables {
    fn default() -> Self {
        Self::new()
    }
}
