//! Shared constants: legal board sizes, adjacency offsets, and the
//! integer/character cell encodings used by the external representations.

/// Board sizes accepted by [`crate::board::Board`] construction.
///
/// Standard Go is played on 9x9, 13x13, or 19x19; the intermediate sizes are
/// accepted for teaching boards.
pub const VALID_SIZES: [usize; 10] = [5, 6, 7, 8, 9, 11, 13, 15, 17, 19];

/// Signed deltas to the four orthogonal neighbors: north, south, east, west.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

// Matrix encoding, fixed once and enforced everywhere: row index is x,
// column index is y.

/// Matrix cell value for a black stone.
pub const CELL_BLACK: i8 = 1;

/// Matrix cell value for a white stone.
pub const CELL_WHITE: i8 = -1;

/// Matrix cell value for an empty intersection.
pub const CELL_EMPTY: i8 = 0;

/// String encoding character for a black stone.
pub const CHAR_BLACK: char = 'B';

/// String encoding character for a white stone.
pub const CHAR_WHITE: char = 'W';

/// String encoding character for an empty intersection.
pub const CHAR_EMPTY: char = '.';

/// Separator between rows in the string encoding.
pub const ROW_SEPARATOR: char = '/';

/// Illegal placements a bot tolerates before giving up on the position.
pub const BOT_MAX_ATTEMPTS: usize = 15;
