//! Pointer and key events delivered by the owning view

use crate::core::types::Vec2;

/// Pointer event in screen (view pixel) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Press { position: Vec2 },
    /// Pointer moved (with or without an active stroke)
    Move { position: Vec2 },
    /// Primary button released
    Release { position: Vec2 },
}

impl PointerEvent {
    /// Screen position carried by the event
    pub fn position(&self) -> Vec2 {
        match self {
            PointerEvent::Press { position }
            | PointerEvent::Move { position }
            | PointerEvent::Release { position } => *position,
        }
    }
}

/// Key symbols the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySym {
    Plus,
    Equal,
    Minus,
    Underscore,
}

impl KeySym {
    /// Parse an X11-style key symbol name
    pub fn from_name(name: &str) -> Option<KeySym> {
        match name {
            "plus" => Some(KeySym::Plus),
            "equal" => Some(KeySym::Equal),
            "minus" => Some(KeySym::Minus),
            "underscore" => Some(KeySym::Underscore),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let p = Vec2::new(12.0, 34.0);
        assert_eq!(PointerEvent::Press { position: p }.position(), p);
        assert_eq!(PointerEvent::Move { position: p }.position(), p);
        assert_eq!(PointerEvent::Release { position: p }.position(), p);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KeySym::from_name("plus"), Some(KeySym::Plus));
        assert_eq!(KeySym::from_name("equal"), Some(KeySym::Equal));
        assert_eq!(KeySym::from_name("minus"), Some(KeySym::Minus));
        assert_eq!(KeySym::from_name("underscore"), Some(KeySym::Underscore));
        assert_eq!(KeySym::from_name("space"), None);
    }
}
