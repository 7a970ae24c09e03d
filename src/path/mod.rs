//! Move paths: the ordered tiles a player (or the search) has picked

mod core;
mod display;
mod errors;
mod eval;

pub use self::core::{Path, PathStep};
pub use errors::PathError;
pub use eval::{Operator, evaluate};
