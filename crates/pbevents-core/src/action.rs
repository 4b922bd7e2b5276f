use std::fmt;

/// Pressed/released state of a key or button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Action {
    Release = 0,
    Press = 1,
}

impl Action {
    /// Returns true if this is a PRESS event
    pub fn is_pressed(self) -> bool {
        matches!(self, Action::Press)
    }

    /// Returns true if this is a RELEASE event
    pub fn is_released(self) -> bool {
        matches!(self, Action::Release)
    }

    /// Press when `down` is set, release otherwise
    pub fn from_down(down: bool) -> Self {
        if down {
            Action::Press
        } else {
            Action::Release
        }
    }

    /// Create Action from its i32 representation
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Action::Release),
            1 => Some(Action::Press),
            _ => None,
        }
    }

    /// Convert Action to its i32 representation
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Release => write!(f, "release"),
            Action::Press => write!(f, "press"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_properties() {
        assert!(Action::Press.is_pressed());
        assert!(!Action::Press.is_released());
        assert!(!Action::Release.is_pressed());
        assert!(Action::Release.is_released());
    }

    #[test]
    fn test_action_from_down() {
        assert_eq!(Action::from_down(true), Action::Press);
        assert_eq!(Action::from_down(false), Action::Release);
    }

    #[test]
    fn test_action_i32() {
        assert_eq!(Action::from_i32(0), Some(Action::Release));
        assert_eq!(Action::from_i32(1), Some(Action::Press));
        assert_eq!(Action::from_i32(2), None);
        assert_eq!(Action::Press.to_i32(), 1);
    }
}
