// Pbevents Virtual Keyboard Scancodes
// On-screen keyboard symbols -> PC set-1 scancodes, plus implied shift

use crate::{KeySym, Scancode};

/// Scancode assignment for one on-screen keyboard symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualKey {
    pub scancode: Scancode,
    /// The symbol is the shifted variant of its key (e.g. `!` on `1`)
    pub implicit_shift: bool,
}

impl VirtualKey {
    const fn plain(code: u8) -> Self {
        Self {
            scancode: Scancode(code),
            implicit_shift: false,
        }
    }

    const fn shifted(code: u8) -> Self {
        Self {
            scancode: Scancode(code),
            implicit_shift: true,
        }
    }
}

/// Look up the scancode of an on-screen keyboard symbol.
///
/// Shifted punctuation shares the scancode of its base key. Returns `None`
/// for symbols the on-screen keyboard has no physical position for.
pub fn virtual_key(sym: KeySym) -> Option<VirtualKey> {
    let key = match sym {
        KeySym::EXCLAIM => VirtualKey::shifted(2),
        KeySym::NUM_1 => VirtualKey::plain(2),
        KeySym::AT => VirtualKey::shifted(3),
        KeySym::NUM_2 => VirtualKey::plain(3),
        KeySym::HASH => VirtualKey::shifted(4),
        KeySym::NUM_3 => VirtualKey::plain(4),
        KeySym::DOLLAR => VirtualKey::shifted(5),
        KeySym::NUM_4 => VirtualKey::plain(5),
        KeySym::NUM_5 => VirtualKey::plain(6),
        KeySym::CARET => VirtualKey::shifted(7),
        KeySym::NUM_6 => VirtualKey::plain(7),
        KeySym::AMPERSAND => VirtualKey::shifted(8),
        KeySym::NUM_7 => VirtualKey::plain(8),
        KeySym::ASTERISK => VirtualKey::shifted(9),
        KeySym::NUM_8 => VirtualKey::plain(9),
        KeySym::LEFTPAREN => VirtualKey::shifted(10),
        KeySym::NUM_9 => VirtualKey::plain(10),
        KeySym::RIGHTPAREN => VirtualKey::shifted(11),
        KeySym::NUM_0 => VirtualKey::plain(11),
        KeySym::UNDERSCORE => VirtualKey::shifted(12),
        KeySym::MINUS => VirtualKey::plain(12),
        KeySym::PLUS => VirtualKey::shifted(13),
        KeySym::EQUALS => VirtualKey::plain(13),
        KeySym::BACKSPACE => VirtualKey::plain(14),
        KeySym::TAB => VirtualKey::plain(15),
        KeySym::Q => VirtualKey::plain(16),
        KeySym::W => VirtualKey::plain(17),
        KeySym::E => VirtualKey::plain(18),
        KeySym::R => VirtualKey::plain(19),
        KeySym::T => VirtualKey::plain(20),
        KeySym::Y => VirtualKey::plain(21),
        KeySym::U => VirtualKey::plain(22),
        KeySym::I => VirtualKey::plain(23),
        KeySym::O => VirtualKey::plain(24),
        KeySym::P => VirtualKey::plain(25),
        KeySym::LEFTBRACKET => VirtualKey::plain(26),
        KeySym::RIGHTBRACKET => VirtualKey::plain(27),
        KeySym::RETURN => VirtualKey::plain(28),
        KeySym::A => VirtualKey::plain(30),
        KeySym::S => VirtualKey::plain(31),
        KeySym::D => VirtualKey::plain(32),
        KeySym::F => VirtualKey::plain(33),
        KeySym::G => VirtualKey::plain(34),
        KeySym::H => VirtualKey::plain(35),
        KeySym::J => VirtualKey::plain(36),
        KeySym::K => VirtualKey::plain(37),
        KeySym::L => VirtualKey::plain(38),
        KeySym::COLON => VirtualKey::shifted(39),
        KeySym::SEMICOLON => VirtualKey::plain(39),
        KeySym::QUOTEDBL => VirtualKey::shifted(40),
        KeySym::QUOTE => VirtualKey::plain(40),
        KeySym::BACKQUOTE => VirtualKey::plain(41),
        KeySym::BACKSLASH => VirtualKey::plain(43),
        KeySym::Z => VirtualKey::plain(44),
        KeySym::X => VirtualKey::plain(45),
        KeySym::C => VirtualKey::plain(46),
        KeySym::V => VirtualKey::plain(47),
        KeySym::B => VirtualKey::plain(48),
        KeySym::N => VirtualKey::plain(49),
        KeySym::M => VirtualKey::plain(50),
        KeySym::LESS => VirtualKey::shifted(51),
        KeySym::COMMA => VirtualKey::plain(51),
        KeySym::GREATER => VirtualKey::shifted(52),
        KeySym::PERIOD => VirtualKey::plain(52),
        KeySym::QUESTION => VirtualKey::shifted(53),
        KeySym::SLASH => VirtualKey::plain(53),
        KeySym::SPACE => VirtualKey::plain(57),
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_punctuation_shares_base_scancode() {
        let pairs = [
            (KeySym::EXCLAIM, KeySym::NUM_1),
            (KeySym::AT, KeySym::NUM_2),
            (KeySym::HASH, KeySym::NUM_3),
            (KeySym::DOLLAR, KeySym::NUM_4),
            (KeySym::CARET, KeySym::NUM_6),
            (KeySym::AMPERSAND, KeySym::NUM_7),
            (KeySym::ASTERISK, KeySym::NUM_8),
            (KeySym::LEFTPAREN, KeySym::NUM_9),
            (KeySym::RIGHTPAREN, KeySym::NUM_0),
            (KeySym::UNDERSCORE, KeySym::MINUS),
            (KeySym::PLUS, KeySym::EQUALS),
            (KeySym::COLON, KeySym::SEMICOLON),
            (KeySym::QUOTEDBL, KeySym::QUOTE),
            (KeySym::LESS, KeySym::COMMA),
            (KeySym::GREATER, KeySym::PERIOD),
            (KeySym::QUESTION, KeySym::SLASH),
        ];
        for (shifted, base) in pairs {
            let s = virtual_key(shifted).unwrap();
            let b = virtual_key(base).unwrap();
            assert!(s.implicit_shift, "{} should imply shift", shifted);
            assert!(!b.implicit_shift, "{} should not imply shift", base);
            assert_eq!(s.scancode, b.scancode);
        }
    }

    #[test]
    fn test_letter_rows() {
        assert_eq!(virtual_key(KeySym::Q).unwrap().scancode, Scancode(16));
        assert_eq!(virtual_key(KeySym::P).unwrap().scancode, Scancode(25));
        assert_eq!(virtual_key(KeySym::A).unwrap().scancode, Scancode(30));
        assert_eq!(virtual_key(KeySym::L).unwrap().scancode, Scancode(38));
        assert_eq!(virtual_key(KeySym::Z).unwrap().scancode, Scancode(44));
        assert_eq!(virtual_key(KeySym::M).unwrap().scancode, Scancode(50));
        assert_eq!(virtual_key(KeySym::SPACE).unwrap().scancode, Scancode(57));
    }

    #[test]
    fn test_five_has_no_shifted_partner() {
        // '%' has no symbol in the host model
        assert_eq!(virtual_key(KeySym::NUM_5), Some(VirtualKey::plain(6)));
    }

    #[test]
    fn test_unmapped_symbols() {
        assert_eq!(virtual_key(KeySym::UNKNOWN), None);
        assert_eq!(virtual_key(KeySym::F1), None);
        assert_eq!(virtual_key(KeySym::UP), None);
        assert_eq!(virtual_key(KeySym::ESCAPE), None);
    }

    #[test]
    fn test_no_virtual_key_uses_scancode_zero() {
        for code in 0u16..=KeySym::MAX_NAMED {
            if let Some(key) = virtual_key(KeySym(code)) {
                assert!(key.scancode.is_mapped());
            }
        }
    }
}
