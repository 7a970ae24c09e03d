mod core;
mod errors;

pub use self::core::{GeneratorConfig, TargetGenerator};
pub use errors::TargetError;
