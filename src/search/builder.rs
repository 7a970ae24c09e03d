use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::search::constants::DEFAULT_MAX_NODES;
use crate::search::errors::SearchError;
use crate::search::state::GameState;
use crate::search::tree::Tree;

/// Builds the enumeration tree of every state reachable within a number of moves
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    max_nodes: Option<usize>,
    parallel: bool,
}

impl TreeBuilder {
    pub fn new(max_nodes: Option<usize>, parallel: bool) -> Self {
        Self {
            max_nodes,
            parallel,
        }
    }

    /// Expand `root` to `depth` plies.
    ///
    /// The first ply is the opening moves when `root` has an empty path and
    /// its ordinary successors otherwise. With `parallel` set, each first-ply
    /// subtree is expanded on the rayon pool and merged back in order, so the
    /// result is identical to a sequential build.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BudgetExceeded`] once the tree would hold more
    /// than `max_nodes` nodes, or any error raised while expanding a state.
    pub fn build(&self, root: GameState, depth: usize) -> Result<Tree<GameState>, SearchError> {
        let nodes = AtomicUsize::new(0);
        self.charge(&nodes)?;

        let seeds = if depth == 0 {
            Vec::new()
        } else {
            root.successors()?
        };
        debug!("Expanding {} first-ply states to depth {}", seeds.len(), depth);

        let remaining = depth.saturating_sub(1);
        let subtrees: Vec<Tree<GameState>> = if self.parallel {
            seeds
                .into_par_iter()
                .map(|seed| self.expand(seed, remaining, &nodes))
                .collect::<Result<_, _>>()?
        } else {
            seeds
                .into_iter()
                .map(|seed| self.expand(seed, remaining, &nodes))
                .collect::<Result<_, _>>()?
        };

        let mut tree = Tree::new(root);
        for subtree in subtrees {
            tree.graft(Tree::<GameState>::ROOT, subtree);
        }

        info!("Built enumeration tree with {} nodes", tree.count());
        Ok(tree)
    }

    /// Breadth-first expansion of one subtree with an explicit worklist
    fn expand(
        &self,
        state: GameState,
        depth: usize,
        nodes: &AtomicUsize,
    ) -> Result<Tree<GameState>, SearchError> {
        self.charge(nodes)?;
        let mut tree = Tree::new(state);
        let mut frontier = VecDeque::from([(Tree::<GameState>::ROOT, depth)]);

        while let Some((id, remaining)) = frontier.pop_front() {
            if remaining == 0 {
                continue;
            }
            let successors = match tree.value(id) {
                Some(state) => state.next_states()?,
                None => continue,
            };
            for successor in successors {
                self.charge(nodes)?;
                let child = tree.add_child(id, successor);
                frontier.push_back((child, remaining - 1));
            }
        }

        Ok(tree)
    }

    fn charge(&self, nodes: &AtomicUsize) -> Result<(), SearchError> {
        let used = nodes.fetch_add(1, Ordering::Relaxed) + 1;
        match self.max_nodes {
            Some(limit) if used > limit => {
                warn!("Search budget of {} nodes exceeded", limit);
                Err(SearchError::BudgetExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_NODES), true)
    }
}
