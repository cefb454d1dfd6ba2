//! Keyboard-facing input events

/// A key press the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single letter, stored uppercase
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Translate a key name as reported by a keyboard event
    ///
    /// Accepts a single ASCII letter in either case, `"Backspace"` and
    /// `"Enter"`. Everything else maps to `None` and should be ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::game::Key;
    ///
    /// assert_eq!(Key::parse("q"), Some(Key::Letter('Q')));
    /// assert_eq!(Key::parse("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("Shift"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Backspace" => Some(Self::Backspace),
            "Enter" => Some(Self::Enter),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::letter(ch),
                    _ => None,
                }
            }
        }
    }

    /// A letter key, if `ch` is an ASCII letter
    #[must_use]
    pub fn letter(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self::Letter(ch.to_ascii_uppercase()))
    }
}
