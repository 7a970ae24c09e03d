//! Exhaustive bounded-depth search over game states

pub mod constants;
mod builder;
mod errors;
mod state;
mod tree;
mod values;

pub use builder::TreeBuilder;
pub use errors::SearchError;
pub use state::GameState;
pub use tree::{Node, NodeId, Tree};
pub use values::{collect_values, extract_values};
