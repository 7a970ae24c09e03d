use log::debug;

use crate::search::constants::ROOT_SENTINEL;
use crate::search::state::GameState;
use crate::search::tree::Tree;

/// Value tree of the same shape: each node holds the evaluated path of the
/// matching state. The root holds [`ROOT_SENTINEL`] and is never sampled.
pub fn extract_values(tree: &Tree<GameState>) -> Tree<i64> {
    let mut values = tree.par_map(|state| state.path().evaluate());
    if let Some(root) = values.value_mut(Tree::<i64>::ROOT) {
        *root = ROOT_SENTINEL;
    }
    values
}

/// Every value below the root, level order, for at most `depth` levels
pub fn collect_values(values: &Tree<i64>, depth: usize) -> Vec<i64> {
    let collected: Vec<i64> = values.breadth_first(depth).into_iter().copied().collect();
    debug!("Collected {} values over {} levels", collected.len(), depth);
    collected
}
