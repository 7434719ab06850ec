use rand::{seq::SliceRandom, Rng};
use std::fmt;

use crate::error::BoardError;

/// Direction the blank travels when it swaps with an adjacent tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Neighbor generation order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// The move that carries the blank from `from` to `to`, if they are adjacent.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        let dr = to.0 as isize - from.0 as isize;
        let dc = to.1 as isize - from.1 as isize;
        Move::ALL.into_iter().find(|mv| mv.as_offset() == (dr, dc))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable n-by-n grid of tiles, `0` being the blank.
///
/// Tiles are stored row-major. Equality, ordering and hashing all follow the
/// tile contents, so boards can key sets and maps directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    size: usize,
    tiles: Box<[u32]>,
    blank: Option<usize>,
}

impl Board {
    /// Copies `tiles` (where `tiles[row][col]` is the tile at that cell) into a new board.
    ///
    /// Only the shape is checked. Use [`Board::validate`] to make sure the
    /// values form a permutation of `0..n*n`.
    pub fn new<R: AsRef<[u32]>>(tiles: &[R]) -> Result<Self, BoardError> {
        let size = tiles.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if size < 2 {
            return Err(BoardError::TooSmall { dimension: size });
        }

        let mut flat = Vec::with_capacity(size * size);
        for (row, values) in tiles.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            flat.extend_from_slice(values);
        }

        Ok(Self::from_flat(size, flat))
    }

    /// The solved board of the given dimension.
    pub fn goal(size: usize) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::TooSmall { dimension: size });
        }
        let cells = size * size;
        let tiles = (1..cells as u32).chain(std::iter::once(0)).collect();
        Ok(Self::from_flat(size, tiles))
    }

    /// A uniformly shuffled board. About half of these cannot be solved.
    pub fn random(size: usize, rng: &mut impl Rng) -> Result<Self, BoardError> {
        let mut tiles = Self::goal(size)?.tiles.into_vec();
        tiles.shuffle(rng);
        Ok(Self::from_flat(size, tiles))
    }

    /// A board reached by walking the blank `steps` random moves away from the goal,
    /// so it is always solvable.
    pub fn scrambled(size: usize, steps: usize, rng: &mut impl Rng) -> Result<Self, BoardError> {
        let mut board = Self::goal(size)?;
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let options: Vec<Move> = Move::ALL
                .into_iter()
                .filter(|&mv| Some(mv.opposite()) != last && board.can_slide(mv))
                .collect();
            // Every blank has at least two legal directions, so one survives the filter.
            if let Some(&mv) = options.choose(rng) {
                if let Some(next) = board.slide(mv) {
                    board = next;
                    last = Some(mv);
                }
            }
        }

        Ok(board)
    }

    pub(crate) fn from_flat(size: usize, tiles: Vec<u32>) -> Self {
        let blank = tiles.iter().position(|&t| t == 0);
        Self {
            size,
            tiles: tiles.into_boxed_slice(),
            blank,
        }
    }

    /// Board dimension n.
    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.size)
    }

    /// Position of the blank as `(row, col)`.
    pub fn blank(&self) -> Option<(usize, usize)> {
        self.blank.map(|i| (i / self.size, i % self.size))
    }

    /// Checks that every value in `0..n*n` appears exactly once.
    pub fn validate(&self) -> Result<(), BoardError> {
        let cells = self.tiles.len();
        let mut seen = vec![false; cells];
        for &value in self.tiles.iter() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::TileOutOfRange {
                    value,
                    dimension: self.size,
                })?;
            if *slot {
                return Err(BoardError::NotAPermutation { value });
            }
            *slot = true;
        }
        Ok(())
    }

    /// Number of tiles out of place.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &value)| value != 0 && value as usize != i + 1)
            .count()
    }

    /// Sum of Manhattan distances between tiles and their goal cells.
    pub fn manhattan(&self) -> usize {
        let mut distance = 0;
        for (i, &value) in self.tiles.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let (row, col) = (i / self.size, i % self.size);
            let target = value as usize - 1;
            let (target_row, target_col) = (target / self.size, target % self.size);
            distance += row.abs_diff(target_row) + col.abs_diff(target_col);
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == 0
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &value)| value as usize == i + 1)
    }

    fn target(&self, movement: Move) -> Option<(usize, usize)> {
        let (row, col) = self.blank()?;
        let (dr, dc) = movement.as_offset();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let size = self.size as isize;

        if new_row >= 0 && new_row < size && new_col >= 0 && new_col < size {
            Some((new_row as usize, new_col as usize))
        } else {
            None
        }
    }

    pub fn can_slide(&self, movement: Move) -> bool {
        self.target(movement).is_some()
    }

    /// The board obtained by moving the blank one cell in `movement`'s direction.
    pub fn slide(&self, movement: Move) -> Option<Self> {
        let blank = self.blank?;
        let (row, col) = self.target(movement)?;
        let target = row * self.size + col;

        let mut tiles = self.tiles.clone();
        tiles.swap(blank, target);
        Some(Self {
            size: self.size,
            tiles,
            blank: Some(target),
        })
    }

    /// Boards one blank move away, in up, down, left, right order.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Move::ALL.into_iter().filter_map(move |mv| self.slide(mv))
    }

    /// This board with its first two non-blank tiles (row-major) exchanged.
    pub fn twin(&self) -> Self {
        let mut occupied = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, _)| i);

        let mut tiles = self.tiles.clone();
        if let (Some(first), Some(second)) = (occupied.next(), occupied.next()) {
            tiles.swap(first, second);
        }
        Self {
            size: self.size,
            tiles,
            blank: self.blank,
        }
    }
}
