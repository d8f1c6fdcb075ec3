//! Guess engine: one owned session object per game.
//!
//! Every operation is a plain state update that returns what the caller has
//! to do next (send a request, show a notice, repaint a tile). Nothing here
//! touches the DOM or the network, so the whole game loop runs under native
//! `cargo test`.

use super::feedback::{LetterTracker, TileFeedback};
use super::grid::{Cursor, GuessGrid, NUM_ROWS, WORD_LENGTH};
use crate::api::{EndGameRequest, GuessResponse};

pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Request currently in flight. At most one exists at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    Guess,
    Hint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Row is complete; send this word and wait for the verdict.
    Send(String),
    /// Precondition failed; show this and do nothing else.
    Notice(&'static str),
    /// Game over or a request is already in flight.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessEvent {
    Continue,
    Won { attempts: u32 },
    Lost { solution: Option<String> },
}

/// Result of applying a server verdict to the submitted row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessApplied {
    pub row: usize,
    pub word: String,
    pub feedback: TileFeedback,
    pub event: GuessEvent,
}

#[derive(Clone, Debug, Default)]
pub struct GameSession {
    grid: GuessGrid,
    cursor: Cursor,
    tracker: LetterTracker,
    row_feedback: [Option<TileFeedback>; NUM_ROWS],
    phase: Phase,
    pending: Option<Pending>,
    lives_left: Option<u32>,
    hints_disabled: bool,
    end_report: Option<EndGameRequest>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors -----------------------------------------------------------

    pub fn grid(&self) -> &GuessGrid {
        &self.grid
    }
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
    pub fn tracker(&self) -> &LetterTracker {
        &self.tracker
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }
    pub fn lives_left(&self) -> Option<u32> {
        self.lives_left
    }
    pub fn row_feedback(&self, row: usize) -> Option<&TileFeedback> {
        self.row_feedback.get(row).and_then(Option::as_ref)
    }

    pub fn game_over(&self) -> bool {
        self.phase != Phase::Playing
    }

    /// Grid input is accepted only while playing with nothing in flight.
    pub fn accepts_input(&self) -> bool {
        !self.game_over() && self.pending.is_none() && !self.cursor.exhausted()
    }

    pub fn hints_enabled(&self) -> bool {
        !self.hints_disabled && !self.game_over() && self.pending.is_none()
    }

    // --- Grid input ----------------------------------------------------------

    /// Write a letter at the cursor. Returns the cell written, or `None` when
    /// the input was ignored.
    pub fn add_letter(&mut self, ch: char) -> Option<(usize, usize)> {
        if !self.accepts_input() || self.cursor.col >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return None;
        }
        let (row, col) = (self.cursor.row, self.cursor.col);
        self.grid.set(row, col, ch.to_ascii_uppercase());
        self.cursor.col += 1;
        Some((row, col))
    }

    /// Clear the letter left of the cursor. Returns the cell cleared.
    pub fn delete_letter(&mut self) -> Option<(usize, usize)> {
        if !self.accepts_input() || self.cursor.col == 0 {
            return None;
        }
        self.cursor.col -= 1;
        let (row, col) = (self.cursor.row, self.cursor.col);
        self.grid.clear(row, col);
        Some((row, col))
    }

    // --- Guess round trip ----------------------------------------------------

    pub fn submit_guess(&mut self) -> SubmitAction {
        if !self.accepts_input() {
            return SubmitAction::Ignored;
        }
        if !self.grid.row_complete(self.cursor.row) {
            return SubmitAction::Notice(NOT_ENOUGH_LETTERS);
        }
        self.pending = Some(Pending::Guess);
        SubmitAction::Send(self.grid.row_word(self.cursor.row))
    }

    /// Apply the server verdict for the pending guess. Returns `None` if no
    /// guess was in flight.
    pub fn apply_guess(&mut self, resp: &GuessResponse) -> Option<GuessApplied> {
        if self.pending != Some(Pending::Guess) {
            return None;
        }
        self.pending = None;

        let row = self.cursor.row;
        let word = self.grid.row_word(row);
        for (letter, color) in word.chars().zip(resp.feedback.iter()) {
            self.tracker.record(letter, *color);
        }
        self.row_feedback[row] = Some(resp.feedback);
        self.cursor.row += 1;
        self.cursor.col = 0;

        let event = if resp.correct {
            let attempts = resp.attempts.unwrap_or(self.cursor.row as u32);
            self.finish(Phase::Won, attempts);
            GuessEvent::Won { attempts }
        } else if self.cursor.exhausted() {
            self.finish(Phase::Lost, resp.attempts.unwrap_or(NUM_ROWS as u32));
            GuessEvent::Lost {
                solution: resp.solution_word.clone(),
            }
        } else {
            GuessEvent::Continue
        };

        Some(GuessApplied {
            row,
            word,
            feedback: resp.feedback,
            event,
        })
    }

    /// The guess was refused or never arrived. Grid and cursor stay as they
    /// were so the row can be edited and resubmitted.
    pub fn reject_guess(&mut self) {
        if self.pending == Some(Pending::Guess) {
            self.pending = None;
        }
    }

    fn finish(&mut self, phase: Phase, attempts: u32) {
        self.phase = phase;
        self.end_report = Some(EndGameRequest {
            won: phase == Phase::Won,
            attempts: Some(attempts),
        });
    }

    /// End-of-game report, handed out exactly once.
    pub fn take_end_report(&mut self) -> Option<EndGameRequest> {
        self.end_report.take()
    }

    // --- Lives & hints -------------------------------------------------------

    fn mirror_lives(&mut self, lives: u32) {
        self.lives_left = Some(lives);
        if lives == 0 {
            self.hints_disabled = true;
        }
    }

    pub fn apply_start(&mut self, lives_left: u32) {
        self.mirror_lives(lives_left);
    }

    pub fn reject_start(&mut self, lives_left: Option<u32>) {
        if let Some(l) = lives_left {
            self.mirror_lives(l);
        }
    }

    /// Claim the request slot for a hint. False when hints are unavailable.
    pub fn request_hint(&mut self) -> bool {
        if !self.hints_enabled() {
            return false;
        }
        self.pending = Some(Pending::Hint);
        true
    }

    pub fn apply_hint(&mut self, lives_left: u32) {
        if self.pending == Some(Pending::Hint) {
            self.pending = None;
        }
        self.mirror_lives(lives_left);
    }

    pub fn reject_hint(&mut self, lives_left: Option<u32>) {
        if self.pending == Some(Pending::Hint) {
            self.pending = None;
        }
        if let Some(l) = lives_left {
            self.mirror_lives(l);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feedback::{FeedbackColor::*, LetterStatus};

    fn verdict(feedback: TileFeedback, correct: bool) -> GuessResponse {
        GuessResponse {
            feedback,
            correct,
            solution_word: None,
            attempts: None,
        }
    }

    fn type_word(s: &mut GameSession, word: &str) {
        for ch in word.chars() {
            s.add_letter(ch);
        }
    }

    #[test]
    fn test_add_stops_at_row_end() {
        let mut s = GameSession::new();
        type_word(&mut s, "ABCDEFG");
        assert_eq!(s.cursor().col, WORD_LENGTH);
        assert_eq!(s.grid().row_word(0), "ABCDE");
        assert_eq!(s.add_letter('Z'), None);
    }

    #[test]
    fn test_delete_at_start_is_noop() {
        let mut s = GameSession::new();
        assert_eq!(s.delete_letter(), None);
        s.add_letter('a');
        assert_eq!(s.grid().cell(0, 0), Some('A'));
        assert_eq!(s.delete_letter(), Some((0, 0)));
        assert_eq!(s.grid().cell(0, 0), None);
        assert_eq!(s.cursor().col, 0);
    }

    #[test]
    fn test_non_letters_ignored() {
        let mut s = GameSession::new();
        assert_eq!(s.add_letter('3'), None);
        assert_eq!(s.add_letter(' '), None);
        assert_eq!(s.cursor().col, 0);
    }

    #[test]
    fn test_cursor_bounds_under_mixed_input() {
        let mut s = GameSession::new();
        // Deterministic pseudo-random walk of adds and deletes.
        let mut x: u32 = 7;
        for _ in 0..500 {
            x = x.wrapping_mul(1664525).wrapping_add(1013904223);
            if x % 3 == 0 {
                let before = s.cursor().col;
                if let Some((_, col)) = s.delete_letter() {
                    assert_eq!(col, before - 1);
                    assert_eq!(s.grid().cell(0, col), None);
                }
            } else {
                let ch = (b'A' + (x % 26) as u8) as char;
                if let Some((_, col)) = s.add_letter(ch) {
                    assert_eq!(s.grid().cell(0, col), Some(ch));
                }
            }
            assert!(s.cursor().col <= WORD_LENGTH);
            assert_eq!(s.cursor().row, 0);
        }
    }

    #[test]
    fn test_incomplete_row_submit_is_noop() {
        let mut s = GameSession::new();
        type_word(&mut s, "CRA");
        let before = s.clone();
        assert_eq!(s.submit_guess(), SubmitAction::Notice(NOT_ENOUGH_LETTERS));
        assert_eq!(s.cursor(), before.cursor());
        assert_eq!(s.grid(), before.grid());
        assert_eq!(s.pending(), None);
    }

    #[test]
    fn test_crane_feedback_applied() {
        let mut s = GameSession::new();
        type_word(&mut s, "crane");
        assert_eq!(s.submit_guess(), SubmitAction::Send("CRANE".into()));
        let fb = [Gray, Yellow, Green, Gray, Green];
        let applied = s.apply_guess(&verdict(fb, false)).unwrap();
        assert_eq!(applied.row, 0);
        assert_eq!(applied.feedback, fb);
        assert_eq!(applied.event, GuessEvent::Continue);
        assert_eq!(s.row_feedback(0), Some(&fb));
        assert_eq!(s.tracker().status('C'), LetterStatus::Gray);
        assert_eq!(s.tracker().status('R'), LetterStatus::Yellow);
        assert_eq!(s.tracker().status('A'), LetterStatus::Green);
        assert_eq!(s.tracker().status('N'), LetterStatus::Gray);
        assert_eq!(s.tracker().status('E'), LetterStatus::Green);
        assert_eq!(s.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn test_input_blocked_while_guess_pending() {
        let mut s = GameSession::new();
        type_word(&mut s, "CRANE");
        assert!(matches!(s.submit_guess(), SubmitAction::Send(_)));
        assert_eq!(s.delete_letter(), None);
        assert_eq!(s.submit_guess(), SubmitAction::Ignored);
        assert!(!s.request_hint());
        assert_eq!(s.grid().row_word(0), "CRANE");
    }

    #[test]
    fn test_rejected_guess_keeps_row_editable() {
        let mut s = GameSession::new();
        type_word(&mut s, "XXXXX");
        s.submit_guess();
        s.reject_guess();
        assert_eq!(s.cursor(), Cursor { row: 0, col: 5 });
        assert_eq!(s.grid().row_word(0), "XXXXX");
        assert_eq!(s.delete_letter(), Some((0, 4)));
        s.add_letter('Y');
        assert_eq!(s.submit_guess(), SubmitAction::Send("XXXXY".into()));
    }

    #[test]
    fn test_stale_verdict_ignored() {
        let mut s = GameSession::new();
        assert!(s.apply_guess(&verdict([Gray; 5], false)).is_none());
        assert_eq!(s.cursor().row, 0);
    }

    #[test]
    fn test_win_reports_once() {
        let mut s = GameSession::new();
        type_word(&mut s, "PLANT");
        s.submit_guess();
        let applied = s.apply_guess(&verdict([Green; 5], true)).unwrap();
        assert_eq!(applied.event, GuessEvent::Won { attempts: 1 });
        assert_eq!(s.phase(), Phase::Won);
        assert!(s.game_over());
        assert_eq!(
            s.take_end_report(),
            Some(EndGameRequest { won: true, attempts: Some(1) })
        );
        assert_eq!(s.take_end_report(), None);
        assert_eq!(s.add_letter('A'), None);
    }

    #[test]
    fn test_six_misses_lose() {
        let mut s = GameSession::new();
        for round in 0..NUM_ROWS {
            type_word(&mut s, "WRONG");
            assert!(matches!(s.submit_guess(), SubmitAction::Send(_)));
            let mut resp = verdict([Gray; 5], false);
            if round == NUM_ROWS - 1 {
                resp.solution_word = Some("PLANT".into());
            }
            let applied = s.apply_guess(&resp).unwrap();
            if round < NUM_ROWS - 1 {
                assert_eq!(applied.event, GuessEvent::Continue);
                assert_eq!(s.take_end_report(), None);
            } else {
                assert_eq!(
                    applied.event,
                    GuessEvent::Lost { solution: Some("PLANT".into()) }
                );
            }
        }
        assert_eq!(s.phase(), Phase::Lost);
        assert!(s.cursor().exhausted());
        let report = s.take_end_report().unwrap();
        assert!(!report.won);
        assert_eq!(report.attempts, Some(6));
        assert_eq!(s.take_end_report(), None);
        assert_eq!(s.submit_guess(), SubmitAction::Ignored);
    }

    #[test]
    fn test_hint_disabled_at_zero_lives() {
        let mut s = GameSession::new();
        s.apply_start(1);
        assert!(s.request_hint());
        assert_eq!(s.pending(), Some(Pending::Hint));
        s.apply_hint(0);
        assert_eq!(s.lives_left(), Some(0));
        assert!(!s.hints_enabled());
        assert!(!s.request_hint());
        assert_eq!(s.pending(), None);
    }

    #[test]
    fn test_rejected_hint_mirrors_lives() {
        let mut s = GameSession::new();
        s.apply_start(3);
        assert!(s.request_hint());
        s.reject_hint(None);
        assert_eq!(s.lives_left(), Some(3));
        assert!(s.request_hint());
        s.reject_hint(Some(0));
        assert!(!s.request_hint());
    }

    #[test]
    fn test_start_without_lives_disables_hints() {
        let mut s = GameSession::new();
        s.reject_start(Some(0));
        assert!(!s.hints_enabled());
        // Grid input is still the server's call.
        assert!(s.add_letter('A').is_some());
    }
}
