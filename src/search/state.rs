use log::{debug, warn};

use crate::board::{Board, Position, TileKind};
use crate::path::{Path, PathStep};
use crate::search::errors::SearchError;

/// A board snapshot paired with the path that produced it.
///
/// States are never modified once built; every move yields a new state with
/// its own copy of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    path: Path,
}

impl GameState {
    /// State before any move has been made
    pub fn initial(board: Board) -> Self {
        Self {
            board,
            path: Path::new(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if `path` breaks the path invariants or any of its
    /// steps is not present, active, at its position on `board`.
    pub fn new(board: Board, path: Path) -> Result<Self, SearchError> {
        path.check_invariants()?;
        for step in path.steps() {
            board.position_of(step.position, &step.tile)?;
        }
        Ok(Self { board, path })
    }

    /// Play `positions` in order starting from a fresh `board`.
    ///
    /// # Errors
    ///
    /// Returns an error for an off-board position or if the resulting path
    /// is not a legal one.
    pub fn replay(board: Board, positions: &[Position]) -> Result<Self, SearchError> {
        let mut state = Self::initial(board);
        for &position in positions {
            state = state.play(position)?;
        }
        state.path.check_invariants()?;
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_parts(self) -> (Board, Path) {
        (self.board, self.path)
    }

    /// New state with the tile at `position` marked active and appended to the path.
    ///
    /// No legality check is made here.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::BoardError::OutOfBounds`] for an off-board position.
    pub fn play(&self, position: Position) -> Result<Self, SearchError> {
        let tile = self.board.tile_at(position)?.with_active(true);
        let mut board = self.board.clone();
        board.set_tile(position, tile)?;
        Ok(Self {
            board,
            path: self.path.extended(PathStep::new(position, tile)),
        })
    }

    /// Every legal first move: one state per number tile, row-major.
    ///
    /// # Errors
    ///
    /// Propagates board lookup failures.
    pub fn opening_states(&self) -> Result<Vec<Self>, SearchError> {
        let openings: Vec<Position> = self
            .board
            .tiles()
            .filter(|(_, tile)| tile.kind() == TileKind::Number)
            .map(|(position, _)| position)
            .collect();

        debug!("Found {} opening moves", openings.len());
        openings
            .into_iter()
            .map(|position| self.play(position))
            .collect()
    }

    /// Every state reachable by one more move from a non-empty path.
    ///
    /// A candidate must neighbour the last tile, be inactive and be of the
    /// other kind. Results follow row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyPath`] for a state with no moves yet, or
    /// [`crate::board::BoardError::NotFound`] if the last step is not on this board.
    pub fn next_states(&self) -> Result<Vec<Self>, SearchError> {
        let Some(last) = self.path.last() else {
            warn!("Asked to expand a state with an empty path");
            return Err(SearchError::EmptyPath);
        };
        let from = self.board.position_of(last.position, &last.tile)?;
        let last_kind = last.tile.kind();

        let moves: Vec<Position> = self
            .board
            .neighbours(from)
            .filter(|(position, tile)| {
                *position != from && !tile.is_active() && tile.kind() != last_kind
            })
            .map(|(position, _)| position)
            .collect();

        moves.into_iter().map(|position| self.play(position)).collect()
    }

    /// Opening moves for an empty path, next moves otherwise
    ///
    /// # Errors
    ///
    /// See [`GameState::next_states`].
    pub fn successors(&self) -> Result<Vec<Self>, SearchError> {
        if self.path.is_empty() {
            self.opening_states()
        } else {
            self.next_states()
        }
    }
}
