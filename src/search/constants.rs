// Configuration constants for the search module
pub const DEFAULT_MAX_NODES: usize = 5_000_000;
pub const ROOT_SENTINEL: i64 = 0;
