// Pbevents Key Types
// Abstract key symbols and scancodes as seen by the host event model

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

include!(concat!(env!("OUT_DIR"), "/key_sym.rs"));

impl KeySym {
    /// "No mapping" symbol; never produced for a real key
    pub const UNKNOWN: KeySym = KeySym(0);
    pub const BACKSPACE: KeySym = KeySym(8);
    pub const TAB: KeySym = KeySym(9);
    pub const RETURN: KeySym = KeySym(13);
    pub const PAUSE: KeySym = KeySym(19);
    pub const ESCAPE: KeySym = KeySym(27);
    pub const SPACE: KeySym = KeySym(32);
    pub const EXCLAIM: KeySym = KeySym(33);
    pub const QUOTEDBL: KeySym = KeySym(34);
    pub const HASH: KeySym = KeySym(35);
    pub const DOLLAR: KeySym = KeySym(36);
    pub const AMPERSAND: KeySym = KeySym(38);
    pub const QUOTE: KeySym = KeySym(39);
    pub const LEFTPAREN: KeySym = KeySym(40);
    pub const RIGHTPAREN: KeySym = KeySym(41);
    pub const ASTERISK: KeySym = KeySym(42);
    pub const PLUS: KeySym = KeySym(43);
    pub const COMMA: KeySym = KeySym(44);
    pub const MINUS: KeySym = KeySym(45);
    pub const PERIOD: KeySym = KeySym(46);
    pub const SLASH: KeySym = KeySym(47);
    pub const NUM_0: KeySym = KeySym(48);
    pub const NUM_1: KeySym = KeySym(49);
    pub const NUM_2: KeySym = KeySym(50);
    pub const NUM_3: KeySym = KeySym(51);
    pub const NUM_4: KeySym = KeySym(52);
    pub const NUM_5: KeySym = KeySym(53);
    pub const NUM_6: KeySym = KeySym(54);
    pub const NUM_7: KeySym = KeySym(55);
    pub const NUM_8: KeySym = KeySym(56);
    pub const NUM_9: KeySym = KeySym(57);
    pub const COLON: KeySym = KeySym(58);
    pub const SEMICOLON: KeySym = KeySym(59);
    pub const LESS: KeySym = KeySym(60);
    pub const EQUALS: KeySym = KeySym(61);
    pub const GREATER: KeySym = KeySym(62);
    pub const QUESTION: KeySym = KeySym(63);
    pub const AT: KeySym = KeySym(64);
    pub const LEFTBRACKET: KeySym = KeySym(91);
    pub const BACKSLASH: KeySym = KeySym(92);
    pub const RIGHTBRACKET: KeySym = KeySym(93);
    pub const CARET: KeySym = KeySym(94);
    pub const UNDERSCORE: KeySym = KeySym(95);
    pub const BACKQUOTE: KeySym = KeySym(96);
    pub const A: KeySym = KeySym(97);
    pub const B: KeySym = KeySym(98);
    pub const C: KeySym = KeySym(99);
    pub const D: KeySym = KeySym(100);
    pub const E: KeySym = KeySym(101);
    pub const F: KeySym = KeySym(102);
    pub const G: KeySym = KeySym(103);
    pub const H: KeySym = KeySym(104);
    pub const I: KeySym = KeySym(105);
    pub const J: KeySym = KeySym(106);
    pub const K: KeySym = KeySym(107);
    pub const L: KeySym = KeySym(108);
    pub const M: KeySym = KeySym(109);
    pub const N: KeySym = KeySym(110);
    pub const O: KeySym = KeySym(111);
    pub const P: KeySym = KeySym(112);
    pub const Q: KeySym = KeySym(113);
    pub const R: KeySym = KeySym(114);
    pub const S: KeySym = KeySym(115);
    pub const T: KeySym = KeySym(116);
    pub const U: KeySym = KeySym(117);
    pub const V: KeySym = KeySym(118);
    pub const W: KeySym = KeySym(119);
    pub const X: KeySym = KeySym(120);
    pub const Y: KeySym = KeySym(121);
    pub const Z: KeySym = KeySym(122);
    pub const DELETE: KeySym = KeySym(127);
    pub const UP: KeySym = KeySym(273);
    pub const DOWN: KeySym = KeySym(274);
    pub const RIGHT: KeySym = KeySym(275);
    pub const LEFT: KeySym = KeySym(276);
    pub const INSERT: KeySym = KeySym(277);
    pub const HOME: KeySym = KeySym(278);
    pub const END: KeySym = KeySym(279);
    pub const PAGEUP: KeySym = KeySym(280);
    pub const PAGEDOWN: KeySym = KeySym(281);
    pub const F1: KeySym = KeySym(282);
    pub const F2: KeySym = KeySym(283);
    pub const F3: KeySym = KeySym(284);
    pub const F4: KeySym = KeySym(285);
    pub const F5: KeySym = KeySym(286);
    pub const F6: KeySym = KeySym(287);
    pub const F7: KeySym = KeySym(288);
    pub const F8: KeySym = KeySym(289);
    pub const F9: KeySym = KeySym(290);
    pub const F10: KeySym = KeySym(291);
    pub const F11: KeySym = KeySym(292);
    pub const F12: KeySym = KeySym(293);
    pub const NUMLOCK: KeySym = KeySym(300);
    pub const CAPSLOCK: KeySym = KeySym(301);
    pub const SCROLLOCK: KeySym = KeySym(302);
    pub const RSHIFT: KeySym = KeySym(303);
    pub const LSHIFT: KeySym = KeySym(304);
    pub const RCTRL: KeySym = KeySym(305);
    pub const LCTRL: KeySym = KeySym(306);
    pub const RALT: KeySym = KeySym(307);
    pub const LALT: KeySym = KeySym(308);
    pub const SYSREQ: KeySym = KeySym(317);
    pub const BREAK: KeySym = KeySym(318);
    pub const MENU: KeySym = KeySym(319);

    /// Highest symbol value with a name
    pub const MAX_NAMED: u16 = 319;
}

/// Symbol names, in the host's naming. Letters and digits use their glyph.
const SYMBOL_NAMES: &[(&str, u16)] = &[
    ("UNKNOWN", 0),
    ("BACKSPACE", 8),
    ("TAB", 9),
    ("RETURN", 13),
    ("PAUSE", 19),
    ("ESCAPE", 27),
    ("SPACE", 32),
    ("EXCLAIM", 33),
    ("QUOTEDBL", 34),
    ("HASH", 35),
    ("DOLLAR", 36),
    ("AMPERSAND", 38),
    ("QUOTE", 39),
    ("LEFTPAREN", 40),
    ("RIGHTPAREN", 41),
    ("ASTERISK", 42),
    ("PLUS", 43),
    ("COMMA", 44),
    ("MINUS", 45),
    ("PERIOD", 46),
    ("SLASH", 47),
    ("0", 48),
    ("1", 49),
    ("2", 50),
    ("3", 51),
    ("4", 52),
    ("5", 53),
    ("6", 54),
    ("7", 55),
    ("8", 56),
    ("9", 57),
    ("COLON", 58),
    ("SEMICOLON", 59),
    ("LESS", 60),
    ("EQUALS", 61),
    ("GREATER", 62),
    ("QUESTION", 63),
    ("AT", 64),
    ("LEFTBRACKET", 91),
    ("BACKSLASH", 92),
    ("RIGHTBRACKET", 93),
    ("CARET", 94),
    ("UNDERSCORE", 95),
    ("BACKQUOTE", 96),
    ("a", 97),
    ("b", 98),
    ("c", 99),
    ("d", 100),
    ("e", 101),
    ("f", 102),
    ("g", 103),
    ("h", 104),
    ("i", 105),
    ("j", 106),
    ("k", 107),
    ("l", 108),
    ("m", 109),
    ("n", 110),
    ("o", 111),
    ("p", 112),
    ("q", 113),
    ("r", 114),
    ("s", 115),
    ("t", 116),
    ("u", 117),
    ("v", 118),
    ("w", 119),
    ("x", 120),
    ("y", 121),
    ("z", 122),
    ("DELETE", 127),
    ("UP", 273),
    ("DOWN", 274),
    ("RIGHT", 275),
    ("LEFT", 276),
    ("INSERT", 277),
    ("HOME", 278),
    ("END", 279),
    ("PAGEUP", 280),
    ("PAGEDOWN", 281),
    ("F1", 282),
    ("F2", 283),
    ("F3", 284),
    ("F4", 285),
    ("F5", 286),
    ("F6", 287),
    ("F7", 288),
    ("F8", 289),
    ("F9", 290),
    ("F10", 291),
    ("F11", 292),
    ("F12", 293),
    ("NUMLOCK", 300),
    ("CAPSLOCK", 301),
    ("SCROLLOCK", 302),
    ("RSHIFT", 303),
    ("LSHIFT", 304),
    ("RCTRL", 305),
    ("RALT", 307),
    ("LCTRL", 306),
    ("LALT", 308),
    ("SYSREQ", 317),
    ("BREAK", 318),
    ("MENU", 319),
];

/// Display name for a symbol code
pub fn sym_name(code: u16) -> &'static str {
    static SYM_NAMES: OnceLock<Vec<&'static str>> = OnceLock::new();
    SYM_NAMES
        .get_or_init(|| {
            let mut names = vec!["UNKNOWN"; KeySym::MAX_NAMED as usize + 1];
            for &(name, code) in SYMBOL_NAMES {
                names[code as usize] = name;
            }
            names
        })
        .get(code as usize)
        .copied()
        .unwrap_or("UNKNOWN")
}

/// Try to parse a symbol name. Letters match in either case.
pub fn sym_from_name(name: &str) -> Option<KeySym> {
    if let Some(&(_, code)) = SYMBOL_NAMES.iter().find(|(n, _)| *n == name) {
        return Some(KeySym(code));
    }
    let upper = name.to_uppercase();
    SYMBOL_NAMES
        .iter()
        .find(|(n, _)| n.to_uppercase() == upper)
        .map(|&(_, code)| KeySym(code))
}

/// Host scancode of a physical key.
///
/// Scancode 0 means "no mapping" and is never assigned to a real key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Scancode(pub u8);

impl Scancode {
    pub const NONE: Scancode = Scancode(0);
    /// Left shift, used for synthesized shift wrapping
    pub const LSHIFT: Scancode = Scancode(42);

    /// Get the raw scancode value
    pub fn code(self) -> u8 {
        self.0
    }

    /// Returns true if this scancode identifies a real key
    pub fn is_mapped(self) -> bool {
        self.0 != 0
    }
}

impl From<u8> for Scancode {
    fn from(code: u8) -> Self {
        Scancode(code)
    }
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sym_names() {
        assert_eq!(KeySym::A.name(), "a");
        assert_eq!(KeySym::NUM_1.name(), "1");
        assert_eq!(KeySym::MENU.name(), "MENU");
        assert_eq!(KeySym(200).name(), "UNKNOWN");
        assert_eq!(KeySym(9999).name(), "UNKNOWN");
    }

    #[test]
    fn test_sym_from_name() {
        assert_eq!(sym_from_name("F12"), Some(KeySym::F12));
        assert_eq!(sym_from_name("a"), Some(KeySym::A));
        assert_eq!(sym_from_name("A"), Some(KeySym::A));
        assert_eq!(sym_from_name("pageup"), Some(KeySym::PAGEUP));
        assert_eq!(sym_from_name("NOPE"), None);
        assert_eq!("LSHIFT".parse::<KeySym>(), Ok(KeySym::LSHIFT));
        assert!("NOPE".parse::<KeySym>().is_err());
    }

    #[test]
    fn test_symbol_table_has_no_duplicate_codes() {
        let mut codes: Vec<u16> = SYMBOL_NAMES.iter().map(|&(_, c)| c).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(before, codes.len());
    }

    #[test]
    fn test_scancode() {
        assert!(!Scancode::NONE.is_mapped());
        assert!(Scancode::LSHIFT.is_mapped());
        assert_eq!(Scancode::from(30).code(), 30);
        assert_eq!(Scancode(42).to_string(), "42");
    }
}
