//! Per-letter feedback colours and the keyboard-wide letter tracker.

use serde::{Deserialize, Serialize};

use super::grid::WORD_LENGTH;

/// Server verdict for one letter of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackColor {
    Green,  // right letter, right position
    Yellow, // right letter, wrong position
    Gray,   // letter absent
}

impl FeedbackColor {
    /// CSS class applied to tiles and keys.
    pub fn css_class(self) -> &'static str {
        match self {
            FeedbackColor::Green => "green",
            FeedbackColor::Yellow => "yellow",
            FeedbackColor::Gray => "gray",
        }
    }
}

/// Feedback for one submitted row. Length is fixed by the type, so a
/// response with the wrong number of colours fails to decode.
pub type TileFeedback = [FeedbackColor; WORD_LENGTH];

/// Tracker state of a single letter. Variants are ordered so that an upgrade
/// is simply `max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Gray,
    Yellow,
    Green,
}

impl LetterStatus {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            LetterStatus::Unknown => None,
            LetterStatus::Gray => Some("gray"),
            LetterStatus::Yellow => Some("yellow"),
            LetterStatus::Green => Some("green"),
        }
    }
}

impl From<FeedbackColor> for LetterStatus {
    fn from(c: FeedbackColor) -> Self {
        match c {
            FeedbackColor::Green => LetterStatus::Green,
            FeedbackColor::Yellow => LetterStatus::Yellow,
            FeedbackColor::Gray => LetterStatus::Gray,
        }
    }
}

/// Status of all 26 letters for the whole game. Statuses only ever upgrade.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterTracker {
    letters: [LetterStatus; 26],
}

impl LetterTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: char) -> Option<usize> {
        let up = letter.to_ascii_uppercase();
        up.is_ascii_uppercase().then(|| (up as u8 - b'A') as usize)
    }

    pub fn status(&self, letter: char) -> LetterStatus {
        Self::index(letter)
            .map(|i| self.letters[i])
            .unwrap_or_default()
    }

    /// Apply one feedback colour. Returns true when the stored status changed.
    pub fn record(&mut self, letter: char, color: FeedbackColor) -> bool {
        let Some(i) = Self::index(letter) else {
            return false;
        };
        let next = self.letters[i].max(color.into());
        let changed = next != self.letters[i];
        self.letters[i] = next;
        changed
    }

    /// Letters with a known status, in alphabetical order.
    pub fn known(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != LetterStatus::Unknown)
            .map(|(i, s)| ((b'A' + i as u8) as char, *s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackColor::*;

    #[test]
    fn test_colors_decode_lowercase() {
        let fb: TileFeedback =
            serde_json::from_str(r#"["gray","yellow","green","gray","green"]"#).unwrap();
        assert_eq!(fb, [Gray, Yellow, Green, Gray, Green]);
    }

    #[test]
    fn test_wrong_length_or_unknown_color_rejected() {
        assert!(serde_json::from_str::<TileFeedback>(r#"["gray","gray"]"#).is_err());
        assert!(
            serde_json::from_str::<TileFeedback>(r#"["gray","gray","gray","gray","blue"]"#)
                .is_err()
        );
    }

    #[test]
    fn test_tracker_never_downgrades() {
        let mut t = LetterTracker::new();
        assert!(t.record('e', Green));
        assert!(!t.record('E', Yellow));
        assert!(!t.record('E', Gray));
        assert_eq!(t.status('e'), LetterStatus::Green);

        assert!(t.record('r', Gray));
        assert!(t.record('r', Yellow));
        assert!(!t.record('r', Gray));
        assert_eq!(t.status('R'), LetterStatus::Yellow);
        assert!(t.record('r', Green));
        assert_eq!(t.status('R'), LetterStatus::Green);
    }

    #[test]
    fn test_tracker_ignores_non_letters() {
        let mut t = LetterTracker::new();
        assert!(!t.record('1', Green));
        assert_eq!(t.status('1'), LetterStatus::Unknown);
        assert_eq!(t.known().count(), 0);
    }

    #[test]
    fn test_known_is_alphabetical() {
        let mut t = LetterTracker::new();
        t.record('z', Gray);
        t.record('a', Yellow);
        let known: Vec<_> = t.known().collect();
        assert_eq!(known, vec![('A', LetterStatus::Yellow), ('Z', LetterStatus::Gray)]);
    }
}
