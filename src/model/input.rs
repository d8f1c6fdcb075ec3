/// Normalised key press from either the on-screen keyboard or a physical one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Enter,
    Backspace,
}

/// On-screen keyboard layout, row by row.
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["Enter", "Z", "X", "C", "V", "B", "N", "M", "←"],
];

impl KeyInput {
    /// Map a `KeyboardEvent.key` value or on-screen key label.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(KeyInput::Enter),
            "Backspace" | "←" => Some(KeyInput::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(KeyInput::Letter(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(KeyInput::parse("a"), Some(KeyInput::Letter('A')));
        assert_eq!(KeyInput::parse("Q"), Some(KeyInput::Letter('Q')));
        assert_eq!(KeyInput::parse("Enter"), Some(KeyInput::Enter));
        assert_eq!(KeyInput::parse("Backspace"), Some(KeyInput::Backspace));
        assert_eq!(KeyInput::parse("←"), Some(KeyInput::Backspace));
        assert_eq!(KeyInput::parse("Shift"), None);
        assert_eq!(KeyInput::parse("1"), None);
        assert_eq!(KeyInput::parse("é"), None);
        assert_eq!(KeyInput::parse(""), None);
    }

    #[test]
    fn test_layout_covers_alphabet() {
        let letters: Vec<char> = KEYBOARD_ROWS
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|k| match KeyInput::parse(k) {
                Some(KeyInput::Letter(c)) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(letters.len(), 26);
        for c in 'A'..='Z' {
            assert!(letters.contains(&c), "missing {c}");
        }
    }
}
