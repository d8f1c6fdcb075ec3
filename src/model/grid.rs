//! Guess grid and input cursor.

pub const NUM_ROWS: usize = 6;
pub const WORD_LENGTH: usize = 5;

/// Fixed 6x5 matrix of uppercase letters. `None` is an empty cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessGrid {
    cells: [[Option<char>; WORD_LENGTH]; NUM_ROWS],
}

impl GuessGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, letter: char) {
        self.cells[row][col] = Some(letter);
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }

    pub fn row_complete(&self, row: usize) -> bool {
        self.cells
            .get(row)
            .map(|r| r.iter().all(Option::is_some))
            .unwrap_or(false)
    }

    /// Joined letters of a row, skipping empty cells.
    pub fn row_word(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|r| r.iter().flatten().collect())
            .unwrap_or_default()
    }
}

/// Current input position. `row == NUM_ROWS` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize, // 0..=NUM_ROWS
    pub col: usize, // 0..=WORD_LENGTH
}

impl Cursor {
    pub fn exhausted(&self) -> bool {
        self.row >= NUM_ROWS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_has_no_complete_rows() {
        let g = GuessGrid::new();
        for row in 0..NUM_ROWS {
            assert!(!g.row_complete(row));
            assert_eq!(g.row_word(row), "");
        }
        assert!(!g.row_complete(NUM_ROWS));
    }

    #[test]
    fn test_row_word_and_completion() {
        let mut g = GuessGrid::new();
        for (col, ch) in "CRAN".chars().enumerate() {
            g.set(2, col, ch);
        }
        assert!(!g.row_complete(2));
        g.set(2, 4, 'E');
        assert!(g.row_complete(2));
        assert_eq!(g.row_word(2), "CRANE");
        g.clear(2, 4);
        assert_eq!(g.cell(2, 4), None);
        assert_eq!(g.cell(2, 0), Some('C'));
    }

    #[test]
    fn test_out_of_range_cell_is_empty() {
        let g = GuessGrid::new();
        assert_eq!(g.cell(NUM_ROWS, 0), None);
        assert_eq!(g.cell(0, WORD_LENGTH), None);
    }
}
