//! Connected groups of stones and their liberties.

use std::collections::HashSet;

use crate::position::Position;
use crate::stone::Stone;

/// A maximal connected component of same-colored stones under 4-directional
/// adjacency, together with its liberty set.
///
/// Groups are computed on demand from the current board state and are never
/// stored across mutations; a `Group` in hand describes the board as it was
/// at the moment of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    stone: Stone,
    positions: HashSet<Position>,
    liberties: HashSet<Position>,
}

impl Group {
    pub fn new(stone: Stone, positions: HashSet<Position>, liberties: HashSet<Position>) -> Self {
        Self {
            stone,
            positions,
            liberties,
        }
    }

    /// Color of every stone in the group.
    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// The stones making up the component.
    pub fn positions(&self) -> &HashSet<Position> {
        &self.positions
    }

    /// Empty intersections orthogonally adjacent to the component.
    pub fn liberties(&self) -> &HashSet<Position> {
        &self.liberties
    }

    /// A group with no liberties is dead on the board it was computed from.
    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }
}
