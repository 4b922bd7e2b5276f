// Pbevents Keyboard Decoders
// Hardware and on-screen keyboard records -> normalized key events

use smallvec::SmallVec;

use super::read_int;
use crate::input::{Property, RawEvent};
use crate::keymap::{virtual_key, KeymapTables};
use crate::modifier::native;
use crate::output::{EventSink, KeyEvent};
use crate::{Action, KeyMod, Scancode};

/// Native keyboard flag bits
pub mod flags {
    /// Key is down
    pub const KEY_DOWN: i32 = 0x1;
    /// Record comes from an attached hardware keyboard
    pub const HARDWARE_KEYBOARD: i32 = 0x20;
    /// Exact flag value of the companion message the hardware keyboard
    /// sends alongside arrows, right ctrl and pause. Carries no new key.
    pub const COMPANION_MESSAGE: i32 = 32;
}

/// Hardware scan codes above this value are the release variant of
/// `scan - RELEASE_SCAN_OFFSET`
pub const RELEASE_SCAN_OFFSET: i32 = 128;

/// The five raw keyboard fields, read once per record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawKey {
    pub sym: i32,
    pub modifiers: i32,
    pub flags: i32,
    pub scan: i32,
    pub cap: i32,
}

impl RawKey {
    /// Read the keyboard fields off a raw event. Missing fields read as 0.
    pub fn read<E: RawEvent + ?Sized>(event: &E) -> Self {
        Self {
            sym: read_int(event, Property::KeySym),
            modifiers: read_int(event, Property::KeyModifiers),
            flags: read_int(event, Property::KeyFlags),
            scan: read_int(event, Property::KeyScan),
            cap: read_int(event, Property::KeyCap),
        }
    }

    /// Whether the hardware decoder handles this record
    pub fn is_hardware(&self) -> bool {
        self.flags & flags::HARDWARE_KEYBOARD != 0
    }

    /// Press or release, from the key-down flag
    pub fn action(&self) -> Action {
        Action::from_down(self.flags & flags::KEY_DOWN != 0)
    }
}

/// Decode a hardware keyboard record.
///
/// Returns `None` for the companion message. The release variant of a scan
/// code folds onto the press variant so both report the same scancode.
/// Modifiers are carried explicitly, left variants only.
pub fn decode_hardware(raw: &RawKey, tables: &KeymapTables) -> Option<KeyEvent> {
    if raw.flags == flags::COMPANION_MESSAGE {
        log::debug!("dropping hardware keyboard companion message (sym {:#x})", raw.sym);
        return None;
    }

    let scan = if raw.scan > RELEASE_SCAN_OFFSET {
        raw.scan - RELEASE_SCAN_OFFSET
    } else {
        raw.scan
    };
    let scancode = u8::try_from(scan).map(Scancode).unwrap_or_else(|_| {
        log::trace!("hardware scan code {} out of range", raw.scan);
        Scancode::NONE
    });

    let lookup = tables.resolve(raw.sym);
    if !lookup.is_mapped() {
        log::trace!("hardware key sym {:#x} has no mapping", raw.sym);
    }

    Some(KeyEvent {
        scancode,
        sym: lookup.sym_or_unknown(),
        modifiers: KeyMod::from_native(raw.modifiers),
        action: raw.action(),
    })
}

/// Result of decoding an on-screen keyboard record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualDecode {
    pub key: KeyEvent,
    /// Shift must be synthesized around the key
    pub shifted: bool,
}

/// Decode an on-screen keyboard record.
///
/// The scancode comes from the fixed on-screen layout, not the raw scan
/// field. Shift is reported through `shifted` and the modifier mask is
/// left empty.
pub fn decode_virtual(raw: &RawKey, tables: &KeymapTables) -> VirtualDecode {
    let lookup = tables.resolve(raw.sym);
    let sym = lookup.sym_or_unknown();
    let layout = virtual_key(sym);
    if layout.is_none() {
        log::trace!("virtual key {} (raw {:#x}) has no scancode", sym, raw.sym);
    }

    let explicit_shift = raw.modifiers & native::SHIFT != 0;
    let implicit_shift = layout.is_some_and(|k| k.implicit_shift);

    VirtualDecode {
        key: KeyEvent {
            scancode: layout.map_or(Scancode::NONE, |k| k.scancode),
            sym,
            modifiers: KeyMod::NONE,
            action: raw.action(),
        },
        shifted: explicit_shift || implicit_shift,
    }
}

/// A decoded key, possibly needing a synthetic shift around it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTranslation {
    pub key: KeyEvent,
    pub shifted: bool,
}

impl KeyTranslation {
    /// Events to post, in order.
    ///
    /// One event, or three when shifted and `synthesize_shift` is set:
    /// left-shift press, the key, left-shift release.
    pub fn events(&self, synthesize_shift: bool) -> SmallVec<[KeyEvent; 3]> {
        let mut events = SmallVec::new();
        let wrap = self.shifted && synthesize_shift;
        if wrap {
            events.push(KeyEvent::left_shift(Action::Press));
        }
        events.push(self.key);
        if wrap {
            events.push(KeyEvent::left_shift(Action::Release));
        }
        events
    }
}

/// Read a keyboard record and translate it with the decoder its flags
/// select. `None` when the record carries no key.
pub fn translate_keyboard<E: RawEvent + ?Sized>(
    event: &E,
    tables: &KeymapTables,
) -> Option<KeyTranslation> {
    let raw = RawKey::read(event);
    if raw.is_hardware() {
        decode_hardware(&raw, tables).map(|key| KeyTranslation {
            key,
            shifted: false,
        })
    } else {
        let decoded = decode_virtual(&raw, tables);
        Some(KeyTranslation {
            key: decoded.key,
            shifted: decoded.shifted,
        })
    }
}

/// Translate a keyboard record and post the result. Returns the number of
/// key events posted.
pub fn handle_keyboard<E, S>(
    event: &E,
    tables: &KeymapTables,
    synthesize_shift: bool,
    sink: &mut S,
) -> usize
where
    E: RawEvent + ?Sized,
    S: EventSink + ?Sized,
{
    let Some(translation) = translate_keyboard(event, tables) else {
        return 0;
    };

    let events = translation.events(synthesize_shift);
    for key in &events {
        log::trace!(
            "key {} sym={} scan={} mod={}",
            key.action,
            key.sym,
            key.scancode,
            key.modifiers
        );
        sink.post_key(*key);
    }
    events.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventBatch;
    use crate::input::ScriptedEvent;
    use crate::output::OutputEvent;
    use crate::KeySym;

    fn hw(sym: i32, modifiers: i32, down: bool, scan: i32) -> RawKey {
        RawKey {
            sym,
            modifiers,
            flags: flags::HARDWARE_KEYBOARD | flags::KEY_DOWN * down as i32 | 0x40,
            scan,
            cap: sym,
        }
    }

    fn vkb(sym: i32, modifiers: i32, down: bool) -> RawKey {
        RawKey {
            sym,
            modifiers,
            flags: flags::KEY_DOWN * down as i32,
            scan: 0,
            cap: sym,
        }
    }

    #[test]
    fn test_raw_key_dispatch_bits() {
        assert!(hw(97, 0, true, 30).is_hardware());
        assert!(!vkb(97, 0, true).is_hardware());
        assert_eq!(hw(97, 0, true, 30).action(), Action::Press);
        assert_eq!(hw(97, 0, false, 158).action(), Action::Release);
    }

    #[test]
    fn test_hardware_companion_message_dropped() {
        let tables = KeymapTables::new();
        for sym in [0, 97, 0xf052, 0xf013] {
            for scan in [0, 30, 200] {
                let raw = RawKey {
                    sym,
                    modifiers: native::CTRL,
                    flags: flags::COMPANION_MESSAGE,
                    scan,
                    cap: 0,
                };
                assert_eq!(decode_hardware(&raw, &tables), None);
            }
        }
    }

    #[test]
    fn test_hardware_release_scan_folds_onto_press_scan() {
        let tables = KeymapTables::new();
        for s in 1..=127 {
            let down = decode_hardware(&hw(97, 0, true, s), &tables).unwrap();
            let up = decode_hardware(&hw(97, 0, false, s + 128), &tables).unwrap();
            assert_eq!(down.scancode, up.scancode);
            assert_eq!(down.scancode, Scancode(s as u8));
            assert_eq!(down.action, Action::Press);
            assert_eq!(up.action, Action::Release);
        }
    }

    #[test]
    fn test_hardware_scan_128_is_not_folded_to_zero() {
        let tables = KeymapTables::new();
        let key = decode_hardware(&hw(97, 0, true, 128), &tables).unwrap();
        assert_eq!(key.scancode, Scancode(128));
    }

    #[test]
    fn test_hardware_modifiers_and_symbols() {
        let tables = KeymapTables::new();
        let key = decode_hardware(
            &hw(65, native::SHIFT | native::CAPS_LOCK, true, 30),
            &tables,
        )
        .unwrap();
        assert_eq!(key.sym, KeySym::A);
        assert_eq!(key.modifiers, KeyMod::LSHIFT | KeyMod::CAPS);

        let up = decode_hardware(&hw(0xf052, 0, true, 103), &tables).unwrap();
        assert_eq!(up.sym, KeySym::UP);
        assert_eq!(up.modifiers, KeyMod::NONE);
    }

    #[test]
    fn test_hardware_unmapped_symbol_passes_through_as_unknown() {
        let tables = KeymapTables::new();
        let key = decode_hardware(&hw(0xf070, 0, true, 10), &tables).unwrap();
        assert_eq!(key.sym, KeySym::UNKNOWN);
        assert_eq!(key.scancode, Scancode(10));
    }

    #[test]
    fn test_virtual_exclaim_shares_one_scancode() {
        let tables = KeymapTables::new();
        let bang = decode_virtual(&vkb('!' as i32, 0, true), &tables);
        let one = decode_virtual(&vkb('1' as i32, 0, true), &tables);
        assert!(bang.shifted);
        assert!(!one.shifted);
        assert_eq!(bang.key.scancode, one.key.scancode);
        assert_eq!(bang.key.scancode, Scancode(2));
        assert_eq!(bang.key.sym, KeySym::EXCLAIM);
    }

    #[test]
    fn test_virtual_explicit_shift_and_cleared_mods() {
        let tables = KeymapTables::new();
        let decoded = decode_virtual(&vkb('q' as i32, native::SHIFT | native::CTRL, true), &tables);
        assert!(decoded.shifted);
        assert_eq!(decoded.key.modifiers, KeyMod::NONE);
        assert_eq!(decoded.key.scancode, Scancode(16));
    }

    #[test]
    fn test_virtual_ignores_raw_scan() {
        let tables = KeymapTables::new();
        let mut raw = vkb('a' as i32, 0, true);
        raw.scan = 99;
        assert_eq!(decode_virtual(&raw, &tables).key.scancode, Scancode(30));
    }

    #[test]
    fn test_virtual_unmapped_keeps_scancode_zero() {
        let tables = KeymapTables::new();
        let decoded = decode_virtual(&vkb(0xf0be, 0, true), &tables);
        assert_eq!(decoded.key.sym, KeySym::MENU);
        assert_eq!(decoded.key.scancode, Scancode::NONE);
        assert!(!decoded.shifted);
    }

    #[test]
    fn test_translation_events() {
        let key = KeyEvent {
            scancode: Scancode(2),
            sym: KeySym::EXCLAIM,
            modifiers: KeyMod::NONE,
            action: Action::Press,
        };
        let shifted = KeyTranslation { key, shifted: true };
        let events = shifted.events(true);
        assert_eq!(
            events.as_slice(),
            &[
                KeyEvent::left_shift(Action::Press),
                key,
                KeyEvent::left_shift(Action::Release),
            ]
        );
        assert_eq!(shifted.events(false).as_slice(), &[key]);

        let plain = KeyTranslation {
            key,
            shifted: false,
        };
        assert_eq!(plain.events(true).as_slice(), &[key]);
    }

    #[test]
    fn test_handle_keyboard_wraps_shifted_virtual_key() {
        let tables = KeymapTables::new();
        let event = ScriptedEvent::keyboard('?' as i32, 0, flags::KEY_DOWN, 0);
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        assert_eq!(handle_keyboard(&event, &tables, true, &mut sink), 3);

        let events = sink.into_vec();
        assert_eq!(events[0], OutputEvent::Key(KeyEvent::left_shift(Action::Press)));
        match events[1] {
            OutputEvent::Key(k) => {
                assert_eq!(k.sym, KeySym::QUESTION);
                assert_eq!(k.scancode, Scancode(53));
                assert_eq!(k.action, Action::Press);
            }
            other => panic!("expected key event, got {:?}", other),
        }
        assert_eq!(events[2], OutputEvent::Key(KeyEvent::left_shift(Action::Release)));
    }

    #[test]
    fn test_handle_keyboard_drops_companion_message() {
        let tables = KeymapTables::new();
        let event = ScriptedEvent::keyboard(0xf052, 0, flags::COMPANION_MESSAGE, 0);
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        assert_eq!(handle_keyboard(&event, &tables, true, &mut sink), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_handle_keyboard_release() {
        let tables = KeymapTables::new();
        let event = ScriptedEvent::keyboard('z' as i32, 0, 0, 0);
        let mut sink: EventBatch<OutputEvent> = EventBatch::new();
        assert_eq!(handle_keyboard(&event, &tables, true, &mut sink), 1);
        match sink.as_slice() {
            [OutputEvent::Key(k)] => {
                assert_eq!(k.action, Action::Release);
                assert_eq!(k.scancode, Scancode(44));
            }
            other => panic!("unexpected events {:?}", other),
        }
    }
}
