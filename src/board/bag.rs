use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::errors::BoardError;
use crate::board::grid::Board;
use crate::board::tile::Tile;

/// Symbols found in the standard bag
pub const STANDARD_CONTENT: [char; 14] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '+', '-', '*', '%',
];

/// Copies of each [`STANDARD_CONTENT`] symbol in the standard bag
pub const STANDARD_FREQUENCY: [usize; 14] = [8, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8, 8, 8, 8];

/// Supply of tiles that boards are dealt from, front first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The standard 76-tile bag in catalogue order
    pub fn standard() -> Self {
        let tiles = STANDARD_CONTENT
            .iter()
            .zip(STANDARD_FREQUENCY)
            .flat_map(|(&symbol, count)| std::iter::repeat_n(Tile::from_parts(symbol, false), count))
            .collect();
        Self { tiles }
    }

    /// The standard bag in random order
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bag = Self::standard();
        bag.shuffle(rng);
        bag
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Board {
    /// Deal a board from the front of `bag`, removing the dealt tiles.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero dimension or when the bag holds fewer than
    /// `width * height` tiles; the bag is left untouched in that case.
    pub fn deal(width: usize, height: usize, bag: &mut TileBag) -> Result<Self, BoardError> {
        let board = Board::new(width, height, bag.tiles.iter().copied())?;
        bag.tiles.drain(..width * height);
        debug!("Dealt {}x{} board, {} tiles left in bag", width, height, bag.len());
        Ok(board)
    }
}
