//! Grid cursor for keyboard-driven card selection.

use tui_pairs_types::DifficultyConfig;

/// Position of the selection cursor on the card grid.
///
/// Movement clamps at the edges; the cursor never leaves the grid that the
/// current difficulty defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    pub row: u8,
    pub col: u8,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board position under the cursor (row-major).
    pub fn index(&self, cols: u8) -> usize {
        self.row as usize * cols as usize + self.col as usize
    }

    /// Board position under the cursor for `config`'s grid.
    pub fn position(&self, config: &DifficultyConfig) -> usize {
        self.index(config.cols)
    }

    pub fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn down(&mut self, rows: u8) {
        if self.row + 1 < rows {
            self.row += 1;
        }
    }

    pub fn left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn right(&mut self, cols: u8) {
        if self.col + 1 < cols {
            self.col += 1;
        }
    }

    /// Snap back into a (possibly smaller) grid after a difficulty change.
    pub fn clamp_to(&mut self, rows: u8, cols: u8) {
        if rows > 0 && self.row >= rows {
            self.row = rows - 1;
        }
        if cols > 0 && self.col >= cols {
            self.col = cols - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let cursor = GridCursor { row: 2, col: 3 };
        assert_eq!(cursor.index(4), 11);
    }

    #[test]
    fn position_uses_the_grid_column_count() {
        use tui_pairs_types::Difficulty;
        let cursor = GridCursor { row: 1, col: 2 };
        let config = Difficulty::Hard.config(); // 6x5
        assert_eq!(cursor.position(&config), 7);
    }

    #[test]
    fn movement_clamps_at_the_edges() {
        let mut cursor = GridCursor::new();
        cursor.up();
        cursor.left();
        assert_eq!(cursor, GridCursor { row: 0, col: 0 });

        for _ in 0..10 {
            cursor.down(4);
            cursor.right(4);
        }
        assert_eq!(cursor, GridCursor { row: 3, col: 3 });
    }

    #[test]
    fn clamp_pulls_the_cursor_into_a_smaller_grid() {
        let mut cursor = GridCursor { row: 5, col: 4 };
        cursor.clamp_to(4, 4);
        assert_eq!(cursor, GridCursor { row: 3, col: 3 });
    }
}
