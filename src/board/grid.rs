use std::fmt;
use std::sync::Arc;

use bitvec::prelude::*;
use log::{debug, warn};

use crate::board::errors::BoardError;
use crate::board::tile::Tile;

/// Cell coordinate, `x` grows to the right and `y` downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance of exactly one.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size grid of tiles.
///
/// Tile symbols are shared between snapshots and copied on write; the active
/// flags are a bitset owned by each snapshot, so cloning a board and marking a
/// tile active never touches any other snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    symbols: Arc<[char]>,
    active: BitVec<u64, Lsb0>,
}

impl Board {
    /// Fill a `width` x `height` board row by row from `tiles`.
    ///
    /// Tiles beyond `width * height` are left in the supply.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, the cell count does not
    /// fit in a `usize`, or the supply runs out before every cell is covered.
    pub fn new<I>(width: usize, height: usize, tiles: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Tile>,
    {
        let Some(required) = width.checked_mul(height).filter(|&cells| cells > 0) else {
            warn!("Rejecting board dimensions {}x{}", width, height);
            return Err(BoardError::InvalidDimensions { width, height });
        };

        // Sized by the supply, never by the requested dimensions
        let supplied: Vec<Tile> = tiles.into_iter().take(required).collect();
        if supplied.len() < required {
            warn!(
                "Tile supply too small: need {}, got {}",
                required,
                supplied.len()
            );
            return Err(BoardError::InsufficientTiles {
                required,
                supplied: supplied.len(),
            });
        }

        let symbols: Vec<char> = supplied.iter().map(Tile::symbol).collect();
        let active: BitVec<u64, Lsb0> = supplied.iter().map(Tile::is_active).collect();

        debug!("Built {}x{} board", width, height);
        Ok(Self {
            width,
            height,
            symbols: symbols.into(),
            active,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a position outside the board.
    pub fn tile_at(&self, position: Position) -> Result<Tile, BoardError> {
        let index = self.index_of(position)?;
        self.tile_at_index(index).ok_or(BoardError::OutOfBounds {
            x: position.x,
            y: position.y,
            width: self.width,
            height: self.height,
        })
    }

    /// Confirm that `tile` sits at `position` in this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] or [`BoardError::NotFound`] when
    /// the tile belongs to some other snapshot.
    pub fn position_of(&self, position: Position, tile: &Tile) -> Result<Position, BoardError> {
        if self.tile_at(position)? == *tile {
            Ok(position)
        } else {
            Err(BoardError::NotFound {
                x: position.x,
                y: position.y,
                symbol: tile.symbol(),
            })
        }
    }

    /// Install `tile` at `position`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a position outside the board.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> Result<(), BoardError> {
        let index = self.index_of(position)?;
        if self.symbols.get(index) != Some(&tile.symbol()) {
            if let Some(slot) = Arc::make_mut(&mut self.symbols).get_mut(index) {
                *slot = tile.symbol();
            }
        }
        self.active.set(index, tile.is_active());
        Ok(())
    }

    /// Whether the tiles at `a` and `b` are grid neighbours.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either position is off the board.
    pub fn are_neighbours(&self, a: Position, b: Position) -> Result<bool, BoardError> {
        self.index_of(a)?;
        self.index_of(b)?;
        Ok(a.is_adjacent(&b))
    }

    /// All cells in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        (0..self.symbols.len()).filter_map(move |index| {
            let tile = self.tile_at_index(index)?;
            Some((Position::new(index % self.width, index / self.width), tile))
        })
    }

    /// In-bounds neighbours of `position` in row-major order
    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let x_last = position.x.saturating_add(1).min(self.width - 1);
        let y_last = position.y.saturating_add(1).min(self.height - 1);
        let x_range = position.x.saturating_sub(1)..=x_last;
        let y_range = position.y.saturating_sub(1)..=y_last;
        y_range
            .flat_map(move |y| x_range.clone().map(move |x| Position::new(x, y)))
            .filter(move |candidate| position.is_adjacent(candidate))
            .filter_map(move |candidate| {
                let tile = self.tile_at(candidate).ok()?;
                Some((candidate, tile))
            })
    }

    fn index_of(&self, position: Position) -> Result<usize, BoardError> {
        if position.x >= self.width || position.y >= self.height {
            return Err(BoardError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(position.y * self.width + position.x)
    }

    fn tile_at_index(&self, index: usize) -> Option<Tile> {
        let symbol = *self.symbols.get(index)?;
        let active = *self.active.get(index)?;
        Some(Tile::from_parts(symbol, active))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_index, row) in self.symbols.chunks(self.width).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
