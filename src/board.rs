//! Board state, placement legality, captures, territory, and scoring.
//!
//! The board is the authoritative state of a game: a mapping from every
//! position of an NxN grid to an optional stone. Construction validates the
//! grid shape and sweeps any group that arrives without liberties, so a board
//! seeded from historical data never starts in an illegal state. Placement
//! resolves captures before the self-liberty check, which is the rule that
//! makes capturing moves legal even when the capturing stone begins with no
//! liberties of its own.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    CELL_BLACK, CELL_EMPTY, CELL_WHITE, CHAR_BLACK, CHAR_EMPTY, CHAR_WHITE, NEIGHBOR_OFFSETS,
    ROW_SEPARATOR, VALID_SIZES,
};
use crate::group::Group;
use crate::moves::Move;
use crate::position::Position;
use crate::stone::Stone;

/// Errors raised while constructing a board from an external representation.
///
/// Construction is atomic: on any of these, no partially built board is
/// observable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The representation does not describe a square grid.
    #[error("board must be square")]
    NotSquare,
    /// The derived size is not a playable board size.
    #[error("board size {0} is not one of the supported sizes")]
    UnsupportedSize(usize),
    /// A mapping key falls outside the `[0, size)` range on either axis.
    #[error("position {position} lies outside the {size}x{size} grid")]
    OutOfRangePosition { position: Position, size: usize },
    /// A matrix cell holds something other than 1 (black), -1 (white), 0 (empty).
    #[error("matrix cell value {0} is not a valid stone encoding")]
    InvalidCellValue(i8),
    /// A string cell holds something other than 'B', 'W', '.'.
    #[error("character {0:?} is not a valid stone encoding")]
    InvalidCellChar(char),
}

/// Errors raised by [`Board::place`].
///
/// Every variant leaves the board exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("intersection {0} is occupied by an existing stone")]
    Occupied(Position),
    #[error("placing at {0} would leave the new group with no liberties (suicide)")]
    Suicide(Position),
}

/// Requested the group at an intersection that holds no stone.
///
/// Distinct from [`MoveError`]: this is a lookup failure, not a rejected
/// placement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no stone at {0}")]
pub struct EmptyPointError(pub Position);

/// The partition of empty intersections produced by
/// [`Board::find_territories`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Territories {
    black: HashSet<Position>,
    white: HashSet<Position>,
    neutral: HashSet<Position>,
}

impl Territories {
    /// Territory credited to the given owner; `None` selects the neutral
    /// (dame) points.
    pub fn owned_by(&self, owner: Option<Stone>) -> &HashSet<Position> {
        match owner {
            Some(Stone::Black) => &self.black,
            Some(Stone::White) => &self.white,
            None => &self.neutral,
        }
    }

    pub fn black(&self) -> &HashSet<Position> {
        &self.black
    }

    pub fn white(&self) -> &HashSet<Position> {
        &self.white
    }

    pub fn neutral(&self) -> &HashSet<Position> {
        &self.neutral
    }
}

/// Area score per color: stones on the board plus owned territory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn get(&self, stone: Stone) -> usize {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }
}

/// The Go board.
///
/// State is a mapping from every position of the grid to an optional stone;
/// an absent stone is an empty intersection. `Clone` takes an independent
/// deep copy, which is the intended way for strategies to explore
/// hypothetical continuations; the live board is never shared with a
/// simulation copy. `PartialEq` compares observable state, so two boards
/// reached through different constructions compare equal when their grids
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    figures: HashMap<Position, Option<Stone>>,
    size: usize,
    allow_suicide: bool,
}

impl Board {
    /// Builds a board from an explicit position-to-stone mapping.
    ///
    /// Validation order: the key count must be a perfect square, the derived
    /// size must be whitelisted, every key must lie within the grid, and the
    /// grid must be square. Groups that arrive without liberties are then
    /// removed, so callers may seed from arbitrary historical data.
    pub fn from_figures(figures: HashMap<Position, Option<Stone>>) -> Result<Self, BoardError> {
        let cells = figures.len();
        let size = cells.isqrt();
        if size * size != cells {
            return Err(BoardError::NotSquare);
        }
        if !VALID_SIZES.contains(&size) {
            return Err(BoardError::UnsupportedSize(size));
        }
        for &position in figures.keys() {
            if position.x >= size || position.y >= size {
                return Err(BoardError::OutOfRangePosition { position, size });
            }
        }
        let unique_x: HashSet<usize> = figures.keys().map(|p| p.x).collect();
        let unique_y: HashSet<usize> = figures.keys().map(|p| p.y).collect();
        if unique_x.len() != size || unique_y.len() != size {
            return Err(BoardError::NotSquare);
        }

        let mut board = Board {
            figures,
            size,
            allow_suicide: false,
        };
        board.remove_dead_groups();
        Ok(board)
    }

    /// Builds a board from a square matrix of cell values.
    ///
    /// Row index is x, column index is y; `1` is black, `-1` is white, `0`
    /// is empty.
    pub fn from_matrix(matrix: &[Vec<i8>]) -> Result<Self, BoardError> {
        let size = matrix.len();
        if matrix.iter().any(|row| row.len() != size) {
            return Err(BoardError::NotSquare);
        }
        let mut figures = HashMap::with_capacity(size * size);
        for (x, row) in matrix.iter().enumerate() {
            for (y, &cell) in row.iter().enumerate() {
                let stone = match cell {
                    CELL_BLACK => Some(Stone::Black),
                    CELL_WHITE => Some(Stone::White),
                    CELL_EMPTY => None,
                    other => return Err(BoardError::InvalidCellValue(other)),
                };
                figures.insert(Position::new(x, y), stone);
            }
        }
        Self::from_figures(figures)
    }

    /// Creates an all-empty board of a whitelisted size.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if !VALID_SIZES.contains(&size) {
            return Err(BoardError::UnsupportedSize(size));
        }
        let figures = (0..size)
            .flat_map(|x| (0..size).map(move |y| (Position::new(x, y), None)))
            .collect();
        Ok(Board {
            figures,
            size,
            allow_suicide: false,
        })
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only view of the full grid state.
    pub fn figures(&self) -> &HashMap<Position, Option<Stone>> {
        &self.figures
    }

    /// The stone at a position, if any. Out-of-range positions read as empty.
    pub fn stone_at(&self, position: Position) -> Option<Stone> {
        self.figures.get(&position).copied().flatten()
    }

    pub fn position_in_bounds(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    /// Opts in to suicide moves: a zero-liberty self-placement succeeds and
    /// the new group is removed immediately. Off by default.
    pub fn set_allow_suicide(&mut self, allow: bool) {
        self.allow_suicide = allow;
    }

    /// In-bounds orthogonal neighbors of a position.
    fn neighbors(&self, position: Position) -> Vec<Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| position.offset(dx, dy))
            .filter(|&neighbor| self.position_in_bounds(neighbor))
            .collect()
    }

    /// Executes a placement with capture and suicide resolution.
    ///
    /// Precondition failures (out of bounds, occupied) are reported before
    /// anything is touched; a suicide is reverted before the error is
    /// surfaced. Either way a failed call leaves the board unchanged.
    pub fn place(&mut self, mv: Move) -> Result<(), MoveError> {
        let position = mv.position();
        if !self.position_in_bounds(position) {
            return Err(MoveError::OutOfBounds(position));
        }
        if self.stone_at(position).is_some() {
            return Err(MoveError::Occupied(position));
        }

        let stone = mv.stone();
        self.figures.insert(position, Some(stone));

        // Captures resolve first. A neighbor whose group already came off in
        // an earlier iteration reads as empty and is skipped.
        let enemy = stone.opponent();
        for neighbor in self.neighbors(position) {
            if self.stone_at(neighbor) == Some(enemy) {
                let group = self.collect_group(neighbor, enemy);
                if group.is_captured() {
                    self.remove_group(&group);
                }
            }
        }

        let own = self.collect_group(position, stone);
        if own.is_captured() {
            if self.allow_suicide {
                self.remove_group(&own);
                return Ok(());
            }
            self.figures.insert(position, None);
            return Err(MoveError::Suicide(position));
        }
        Ok(())
    }

    /// The group containing the stone at `position`, with its liberty set.
    ///
    /// Fails with [`EmptyPointError`] when the intersection holds no stone.
    pub fn group_at(&self, position: Position) -> Result<Group, EmptyPointError> {
        match self.stone_at(position) {
            Some(stone) => Ok(self.collect_group(position, stone)),
            None => Err(EmptyPointError(position)),
        }
    }

    /// Breadth-first traversal from a seed stone over same-colored neighbors.
    /// Empty neighbors accumulate in the liberty set. Read-only.
    fn collect_group(&self, seed: Position, stone: Stone) -> Group {
        let mut positions = HashSet::new();
        let mut liberties = HashSet::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([seed]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            match self.stone_at(current) {
                Some(color) if color == stone => {
                    positions.insert(current);
                    for neighbor in self.neighbors(current) {
                        if !visited.contains(&neighbor) {
                            queue.push_back(neighbor);
                        }
                    }
                }
                Some(_) => {}
                None => {
                    liberties.insert(current);
                }
            }
        }
        Group::new(stone, positions, liberties)
    }

    fn remove_group(&mut self, group: &Group) {
        debug!(
            stone = %group.stone(),
            stones = group.positions().len(),
            "removing group with no liberties"
        );
        for &position in group.positions() {
            self.figures.insert(position, None);
        }
    }

    /// Sweeps every liberty-less group from the current state.
    ///
    /// Dead groups are collected against the state as it stands before any
    /// removal, then removed together; two mutually surrounding dead groups
    /// both come off, matching seeded-board semantics.
    fn remove_dead_groups(&mut self) {
        let occupied: Vec<(Position, Stone)> = self
            .figures
            .iter()
            .filter_map(|(&position, &stone)| stone.map(|s| (position, s)))
            .collect();

        let mut seen: HashSet<Position> = HashSet::new();
        let mut dead: Vec<Group> = Vec::new();
        for (position, stone) in occupied {
            if seen.contains(&position) {
                continue;
            }
            let group = self.collect_group(position, stone);
            seen.extend(group.positions().iter().copied());
            if group.is_captured() {
                dead.push(group);
            }
        }
        for group in dead {
            self.remove_group(&group);
        }
    }

    /// Partitions the empty intersections into black territory, white
    /// territory, and neutral points.
    ///
    /// Each maximal empty region is credited to a color only when that color
    /// is the sole one bordering it; a region bordering both colors, or no
    /// stones at all, is neutral in its entirety. A region is never split
    /// between owners.
    pub fn find_territories(&self) -> Territories {
        let mut territories = Territories::default();
        let mut visited: HashSet<Position> = HashSet::new();

        for x in 0..self.size {
            for y in 0..self.size {
                let seed = Position::new(x, y);
                if self.stone_at(seed).is_some() || visited.contains(&seed) {
                    continue;
                }
                let (region, borders) = self.empty_region(seed);
                visited.extend(region.iter().copied());
                match (borders.contains(&Stone::Black), borders.contains(&Stone::White)) {
                    (true, false) => territories.black.extend(region),
                    (false, true) => territories.white.extend(region),
                    _ => territories.neutral.extend(region),
                }
            }
        }
        territories
    }

    /// Flood-fills the maximal connected empty region around `seed` and
    /// collects the colors of every stone bordering it.
    fn empty_region(&self, seed: Position) -> (HashSet<Position>, HashSet<Stone>) {
        let mut region = HashSet::new();
        let mut borders = HashSet::new();
        let mut queue = VecDeque::from([seed]);

        while let Some(current) = queue.pop_front() {
            if !region.insert(current) {
                continue;
            }
            for neighbor in self.neighbors(current) {
                match self.stone_at(neighbor) {
                    Some(stone) => {
                        borders.insert(stone);
                    }
                    None => {
                        if !region.contains(&neighbor) {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
        }
        (region, borders)
    }

    /// Area score: stones on the board plus owned territory, per color.
    /// No dead-stone removal and no komi.
    pub fn score(&self) -> Score {
        let territories = self.find_territories();
        let count = |stone: Stone| {
            self.figures
                .values()
                .filter(|&&cell| cell == Some(stone))
                .count()
        };
        Score {
            black: count(Stone::Black) + territories.black.len(),
            white: count(Stone::White) + territories.white.len(),
        }
    }

    /// Current state in the matrix encoding accepted by [`Board::from_matrix`].
    pub fn state_as_matrix(&self) -> Vec<Vec<i8>> {
        (0..self.size)
            .map(|x| {
                (0..self.size)
                    .map(|y| match self.stone_at(Position::new(x, y)) {
                        Some(Stone::Black) => CELL_BLACK,
                        Some(Stone::White) => CELL_WHITE,
                        None => CELL_EMPTY,
                    })
                    .collect()
            })
            .collect()
    }

    /// Current state in the string encoding accepted by `Board::from_str`.
    pub fn state_as_string(&self) -> String {
        let rows: Vec<String> = (0..self.size)
            .map(|x| {
                (0..self.size)
                    .map(|y| match self.stone_at(Position::new(x, y)) {
                        Some(Stone::Black) => CHAR_BLACK,
                        Some(Stone::White) => CHAR_WHITE,
                        None => CHAR_EMPTY,
                    })
                    .collect()
            })
            .collect();
        rows.join(&ROW_SEPARATOR.to_string())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the '/'-separated string encoding: `B` black, `W` white,
    /// `.` empty, one segment per row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split(ROW_SEPARATOR).collect();
        let size = rows.len();
        let mut figures = HashMap::with_capacity(size * size);
        for (x, row) in rows.iter().enumerate() {
            let mut width = 0;
            for (y, ch) in row.chars().enumerate() {
                let stone = match ch {
                    CHAR_BLACK => Some(Stone::Black),
                    CHAR_WHITE => Some(Stone::White),
                    CHAR_EMPTY => None,
                    other => return Err(BoardError::InvalidCellChar(other)),
                };
                figures.insert(Position::new(x, y), stone);
                width += 1;
            }
            if width != size {
                return Err(BoardError::NotSquare);
            }
        }
        Self::from_figures(figures)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.size {
            for y in 0..self.size {
                let ch = match self.stone_at(Position::new(x, y)) {
                    Some(Stone::Black) => CHAR_BLACK,
                    Some(Stone::White) => CHAR_WHITE,
                    None => CHAR_EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::empty(9).unwrap();
        board
            .place(Move::new(Position::new(2, 3), Stone::Black))
            .unwrap();
        assert_eq!(board.stone_at(Position::new(2, 3)), Some(Stone::Black));
        assert_eq!(board.stone_at(Position::new(3, 2)), None);
    }

    #[test]
    fn test_group_at_single_stone_has_four_liberties() {
        let mut board = Board::empty(9).unwrap();
        board
            .place(Move::new(Position::new(4, 4), Stone::White))
            .unwrap();
        let group = board.group_at(Position::new(4, 4)).unwrap();
        assert_eq!(group.stone(), Stone::White);
        assert_eq!(group.positions().len(), 1);
        assert_eq!(group.liberties().len(), 4);
    }

    #[test]
    fn test_group_at_corner_stone_has_two_liberties() {
        let mut board = Board::empty(9).unwrap();
        board
            .place(Move::new(Position::new(0, 0), Stone::Black))
            .unwrap();
        let group = board.group_at(Position::new(0, 0)).unwrap();
        assert_eq!(group.liberties().len(), 2);
    }

    #[test]
    fn test_group_at_empty_point_is_a_lookup_error() {
        let board = Board::empty(9).unwrap();
        assert_eq!(
            board.group_at(Position::new(1, 1)),
            Err(EmptyPointError(Position::new(1, 1)))
        );
    }

    #[test]
    fn test_connected_stones_share_liberties() {
        let mut board = Board::empty(9).unwrap();
        board
            .place(Move::new(Position::new(3, 3), Stone::Black))
            .unwrap();
        board
            .place(Move::new(Position::new(3, 4), Stone::Black))
            .unwrap();
        let group = board.group_at(Position::new(3, 3)).unwrap();
        assert_eq!(group.positions().len(), 2);
        assert_eq!(group.liberties().len(), 6);
    }

    #[test]
    fn test_clone_is_an_independent_snapshot() {
        let mut live = Board::empty(5).unwrap();
        let snapshot = live.clone();
        live.place(Move::new(Position::new(0, 0), Stone::Black))
            .unwrap();
        assert_eq!(snapshot.stone_at(Position::new(0, 0)), None);
        assert_ne!(live, snapshot);
    }
}
