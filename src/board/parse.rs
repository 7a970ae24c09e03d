use std::str::FromStr;

use log::{debug, warn};

use crate::board::errors::BoardError;
use crate::board::grid::Board;
use crate::board::tile::Tile;

impl Board {
    /// Parse a board written one row per line (`/` also separates rows).
    ///
    /// Whitespace inside a row is ignored, so `"1 + 2"` is a three-tile row.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty board, rows of different lengths or
    /// symbols that are neither digits nor `+ - * %`.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        debug!("Parsing board from '{}'", text);

        let rows: Vec<Vec<char>> = text
            .split(['\n', '/'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();

        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .map(|(index, row)| (index, row.len()))
            .find(|&(_, len)| len != width)
        {
            warn!("Row {} has {} tiles, expected {}", row, found, width);
            return Err(BoardError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }

        let tiles = rows
            .into_iter()
            .flatten()
            .map(Tile::new)
            .collect::<Result<Vec<_>, _>>()?;

        Board::new(width, height, tiles)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}
