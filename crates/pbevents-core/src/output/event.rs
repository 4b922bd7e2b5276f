// Pbevents Output Layer - Normalized Events
// The event vocabulary handed to the host sink

use std::fmt;

use crate::{Action, KeyMod, KeySym, Scancode};

/// Abstract pointer button ids, as numbered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    Left = 1,
    Middle = 2,
    Right = 3,
    WheelUp = 4,
    WheelDown = 5,
}

impl Button {
    /// Host button id
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Button::Left => "left",
            Button::Middle => "middle",
            Button::Right => "right",
            Button::WheelUp => "wheel-up",
            Button::WheelDown => "wheel-down",
        };
        write!(f, "{}", name)
    }
}

/// Normalized key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub scancode: Scancode,
    pub sym: KeySym,
    pub modifiers: KeyMod,
    pub action: Action,
}

impl KeyEvent {
    /// Synthetic left-shift event used to wrap implicitly shifted keys
    pub fn left_shift(action: Action) -> Self {
        Self {
            scancode: Scancode::LSHIFT,
            sym: KeySym::LSHIFT,
            modifiers: KeyMod::NONE,
            action,
        }
    }

    /// The same key with a different action
    pub fn with_action(self, action: Action) -> Self {
        Self { action, ..self }
    }
}

/// Normalized button transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: Button,
    pub action: Action,
    pub x: i32,
    pub y: i32,
}

/// Normalized motion sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEvent {
    /// Button held during the motion, if any
    pub held: Option<Button>,
    pub x: i32,
    pub y: i32,
}

impl MotionEvent {
    /// Motion with the left button held when `touching` is set
    pub fn new(touching: bool, x: i32, y: i32) -> Self {
        Self {
            held: touching.then_some(Button::Left),
            x,
            y,
        }
    }
}

/// Any event the core can hand to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEvent {
    Key(KeyEvent),
    Button(ButtonEvent),
    Motion(MotionEvent),
    Quit,
}

impl From<KeyEvent> for OutputEvent {
    fn from(event: KeyEvent) -> Self {
        OutputEvent::Key(event)
    }
}

impl From<ButtonEvent> for OutputEvent {
    fn from(event: ButtonEvent) -> Self {
        OutputEvent::Button(event)
    }
}

impl From<MotionEvent> for OutputEvent {
    fn from(event: MotionEvent) -> Self {
        OutputEvent::Motion(event)
    }
}

impl fmt::Display for OutputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputEvent::Key(k) => write!(
                f,
                "key {} sym={}({}) scan={} mod={}",
                k.action,
                k.sym,
                k.sym.code(),
                k.scancode,
                k.modifiers
            ),
            OutputEvent::Button(b) => {
                write!(f, "button {} {} at ({}, {})", b.button, b.action, b.x, b.y)
            }
            OutputEvent::Motion(m) => match m.held {
                Some(button) => write!(f, "motion to ({}, {}) holding {}", m.x, m.y, button),
                None => write!(f, "motion to ({}, {})", m.x, m.y),
            },
            OutputEvent::Quit => write!(f, "quit"),
        }
    }
}
