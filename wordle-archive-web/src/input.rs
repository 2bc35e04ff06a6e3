/// A key press the board understands, from the physical or on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Enter,
    Delete,
}

impl KeyInput {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            "Backspace" | "Delete" => Some(Self::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_alphabetic() => {
                        Some(Self::Letter(ch.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }

    /// Label shown on the on-screen key.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DELETE".to_string(),
        }
    }
}
