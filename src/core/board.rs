//! Board module - manages the puzzle grid
//!
//! The board is a 6x12 grid where each cell is empty or holds a colored token.
//! Uses a flat array for cache locality and zero-allocation access.
//! Coordinates: (x, y) where x ranges 0..5 (left to right), y ranges 0..11
//! (top to bottom). Gravity pulls toward increasing y.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The puzzle grid - 6 columns x 12 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within the grid
    pub fn is_in_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some()
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and holds a token
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is valid for the active pair (in bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        self.is_empty(x, y)
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write the board into a u8 grid for observers
    /// (0 = empty, 1..=5 = token color code)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(color) => color.code(),
                    None => 0,
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenColor;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(5, 0), Some(5));
        assert_eq!(Board::index(0, 1), Some(6));
        assert_eq!(Board::index(5, 11), Some(71));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(6, 0), None);
        assert_eq!(Board::index(0, 12), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(TokenColor::Red));
        board.set(4, 7, Some(TokenColor::Blue));

        assert_eq!(board.get(0, 0), Some(Some(TokenColor::Red)));
        assert_eq!(board.get(4, 7), Some(Some(TokenColor::Blue)));

        assert_eq!(board.cells[0], Some(TokenColor::Red));
        assert_eq!(board.cells[7 * 6 + 4], Some(TokenColor::Blue));
    }

    #[test]
    fn test_occupied_count() {
        let mut board = Board::new();
        assert_eq!(board.occupied_count(), 0);

        board.set(1, 11, Some(TokenColor::Green));
        board.set(2, 11, Some(TokenColor::Green));
        assert_eq!(board.occupied_count(), 2);

        board.set(1, 11, None);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(3, 5, Some(TokenColor::Purple));

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[5][3], TokenColor::Purple.code());
        assert_eq!(grid[0][0], 0);
    }
}
