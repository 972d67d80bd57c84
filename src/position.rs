//! Board coordinates.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A grid coordinate: `x` is the row, `y` is the column, both zero-based.
///
/// Positions carry no bounds information; whether a position lies on a given
/// board is the board's question to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Applies a signed delta, returning `None` if either coordinate would
    /// fall below zero. Used to walk to orthogonal neighbors.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Position> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position { x, y })
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_is_coordinate_wise() {
        assert_eq!(
            Position::new(1, 2) + Position::new(3, 4),
            Position::new(4, 6)
        );
    }

    #[test]
    fn test_offset_checks_underflow() {
        assert_eq!(Position::new(0, 3).offset(-1, 0), None);
        assert_eq!(Position::new(3, 0).offset(0, -1), None);
        assert_eq!(Position::new(2, 2).offset(-1, 1), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Position::new(5, 7), Position::new(5, 7));
        assert_ne!(Position::new(5, 7), Position::new(7, 5));
    }
}
