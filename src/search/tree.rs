use std::collections::VecDeque;

use rayon::prelude::*;

/// Index of a node inside its [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    value: T,
    children: Vec<NodeId>,
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Rooted tree stored as an arena; children keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Tree<T> {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(root: T) -> Self {
        Self {
            nodes: vec![Node {
                value: root,
                children: Vec::new(),
            }],
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|node| &mut node.value)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Append `value` as the last child of `parent`.
    ///
    /// An unknown `parent` leaves the new node detached.
    pub fn add_child(&mut self, parent: NodeId, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            children: Vec::new(),
        });
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        id
    }

    /// Attach the whole of `subtree` as the last child of `parent`.
    pub fn graft(&mut self, parent: NodeId, subtree: Tree<T>) -> NodeId {
        let offset = self.nodes.len();
        self.nodes.extend(subtree.nodes.into_iter().map(|node| Node {
            value: node.value,
            children: node
                .children
                .into_iter()
                .map(|child| NodeId(child.0 + offset))
                .collect(),
        }));
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(NodeId(offset));
        }
        NodeId(offset)
    }

    /// Total number of nodes, root included
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// Tree of the same shape holding `f` of every value
    pub fn map<U, F>(&self, f: F) -> Tree<U>
    where
        F: Fn(&T) -> U,
    {
        Tree {
            nodes: self
                .nodes
                .iter()
                .map(|node| Node {
                    value: f(&node.value),
                    children: node.children.clone(),
                })
                .collect(),
        }
    }

    /// [`Tree::map`] spread over the rayon pool
    pub fn par_map<U, F>(&self, f: F) -> Tree<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync,
    {
        Tree {
            nodes: self
                .nodes
                .par_iter()
                .map(|node| Node {
                    value: f(&node.value),
                    children: node.children.clone(),
                })
                .collect(),
        }
    }

    /// Values level by level, starting below the root, for at most `depth` levels.
    ///
    /// Within a level nodes appear in child order.
    pub fn breadth_first(&self, depth: usize) -> Vec<&T> {
        let mut result = Vec::new();
        let mut queue: VecDeque<(NodeId, usize)> = self
            .children(Self::ROOT)
            .iter()
            .map(|&child| (child, 1))
            .collect();

        while let Some((id, level)) = queue.pop_front() {
            if level > depth {
                break;
            }
            let Some(node) = self.node(id) else {
                continue;
            };
            result.push(&node.value);
            if level < depth {
                queue.extend(node.children.iter().map(|&child| (child, level + 1)));
            }
        }

        result
    }
}
