//! Board model split into submodules

mod bag;
mod errors;
mod grid;
mod parse;
mod tile;

pub use bag::{STANDARD_CONTENT, STANDARD_FREQUENCY, TileBag};
pub use errors::BoardError;
pub use grid::{Board, Position};
pub use tile::{Tile, TileKind};

#[cfg(test)]
mod tests;
