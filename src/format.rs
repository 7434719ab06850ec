//! Text encoding of boards: the dimension on its own line, then one line per
//! row with the tiles separated by spaces and `0` for the blank.
//!
//! ```
//! use slider_puzzle::Board;
//!
//! let board: Board = "3\n 1 2 3\n 4 0 6\n 7 5 8".parse().unwrap();
//! assert_eq!(board.dimension(), 3);
//! assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::ParseBoardError;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.dimension();
        let width = (size * size - 1).to_string().len();

        write!(f, "{}", size)?;
        for row in self.rows() {
            writeln!(f)?;
            for (col, &val) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", val, width = width)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let size = tokens
            .next()
            .ok_or(ParseBoardError::MissingDimension)
            .and_then(parse_number)? as usize;

        let tiles = tokens.map(parse_number).collect::<Result<Vec<u32>, _>>()?;
        let expected = size * size;
        if tiles.len() != expected {
            return Err(ParseBoardError::TileCount {
                expected,
                found: tiles.len(),
            });
        }

        let rows: Vec<&[u32]> = if size == 0 {
            Vec::new()
        } else {
            tiles.chunks(size).collect()
        };
        Ok(Board::new(&rows)?)
    }
}

fn parse_number(token: &str) -> Result<u32, ParseBoardError> {
    token.parse().map_err(|_| ParseBoardError::InvalidNumber {
        token: token.to_string(),
    })
}
