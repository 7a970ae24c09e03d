use std::fmt;

use crate::board::errors::BoardError;

/// Whether a tile carries a digit or an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Number,
    Operator,
}

/// A single board tile: a digit or operator symbol plus its path-membership flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    symbol: char,
    active: bool,
}

impl Tile {
    pub const OPERATORS: [char; 4] = ['+', '-', '*', '%'];

    /// # Errors
    ///
    /// Returns [`BoardError::InvalidTile`] unless the symbol is an ASCII digit
    /// or one of `+ - * %`.
    pub fn new(symbol: char) -> Result<Self, BoardError> {
        if symbol.is_ascii_digit() || Self::OPERATORS.contains(&symbol) {
            Ok(Self {
                symbol,
                active: false,
            })
        } else {
            Err(BoardError::InvalidTile(symbol))
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn kind(&self) -> TileKind {
        if Self::OPERATORS.contains(&self.symbol) {
            TileKind::Operator
        } else {
            TileKind::Number
        }
    }

    pub fn is_operator(&self) -> bool {
        self.kind() == TileKind::Operator
    }

    /// Digit value of a number tile, `None` for operators
    pub fn digit(&self) -> Option<i64> {
        self.symbol.to_digit(10).map(i64::from)
    }

    /// Copy of this tile with the given active flag
    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    pub(crate) fn from_parts(symbol: char, active: bool) -> Self {
        Self { symbol, active }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.symbol)
    }
}
