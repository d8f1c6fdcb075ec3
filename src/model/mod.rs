//! Pure game model. No web APIs below this module.

pub mod feedback;
pub mod grid;
pub mod input;
pub mod session;

pub use feedback::{FeedbackColor, LetterStatus, LetterTracker, TileFeedback};
pub use grid::{Cursor, GuessGrid, NUM_ROWS, WORD_LENGTH};
pub use input::{KEYBOARD_ROWS, KeyInput};
pub use session::{
    GameSession, GuessApplied, GuessEvent, NOT_ENOUGH_LETTERS, Pending, Phase, SubmitAction,
};
