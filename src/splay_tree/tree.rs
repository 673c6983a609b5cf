use crate::arena::{NodeId, TypedArena};
use crate::entry::Entry;
use crate::splay_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// One level pair of the search path, recorded on the way down and resolved by rotations on the
/// way back up. The `Ordering` compares the searched key against the child's key.
#[derive(Clone, Copy, Debug)]
enum Step {
    Left(NodeId, Ordering),
    Right(NodeId, Ordering),
}

pub struct Tree<K, V> {
    pub arena: TypedArena<Node<K, V>>,
    pub root: Option<NodeId>,
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Tree {
            arena: TypedArena::new(),
            root: None,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn entry(&self, id: NodeId) -> &Entry<K, V> {
        &self.arena[id].entry
    }

    pub fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let child = self.arena[id].right.expect("Expected right child node to be `Some`.");
        self.arena[id].right = self.arena[child].left;
        self.arena[child].left = Some(id);
        child
    }

    pub fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let child = self.arena[id].left.expect("Expected left child node to be `Some`.");
        self.arena[id].left = self.arena[child].right;
        self.arena[child].right = Some(id);
        child
    }

    /// Splays the whole tree for `key`. Afterwards the root holds `key` if it is present, and
    /// otherwise the last node visited before the search fell off the tree.
    pub fn splay<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let root = self.root;
        self.root = self.splay_subtree(root, key);
    }

    fn splay_subtree<Q>(&mut self, root: Option<NodeId>, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut steps = Vec::new();
        let mut current = root;
        let mut splayed = loop {
            let id = match current {
                Some(id) => id,
                None => break None,
            };
            let node = &self.arena[id];
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Equal => break Some(id),
                Ordering::Less => {
                    let child = match node.left {
                        Some(child) => &self.arena[child],
                        None => break Some(id),
                    };
                    let ord = key.cmp(child.entry.key.borrow());
                    steps.push(Step::Left(id, ord));
                    current = match ord {
                        Ordering::Less => child.left,
                        Ordering::Greater => child.right,
                        Ordering::Equal => break None,
                    };
                },
                Ordering::Greater => {
                    let child = match node.right {
                        Some(child) => &self.arena[child],
                        None => break Some(id),
                    };
                    let ord = key.cmp(child.entry.key.borrow());
                    steps.push(Step::Right(id, ord));
                    current = match ord {
                        Ordering::Greater => child.right,
                        Ordering::Less => child.left,
                        Ordering::Equal => break None,
                    };
                },
            }
        };

        while let Some(step) = steps.pop() {
            splayed = Some(self.resolve(step, splayed));
        }
        splayed
    }

    // `splayed` is the new root of the grandchild subtree the step descended into. It is unused
    // when the step stopped at the child itself.
    fn resolve(&mut self, step: Step, splayed: Option<NodeId>) -> NodeId {
        match step {
            Step::Left(id, Ordering::Equal) => self.rotate_right(id),
            Step::Left(id, Ordering::Less) => {
                let child = self.arena[id].left.expect("Expected left child node to be `Some`.");
                self.arena[child].left = splayed;
                let id = self.rotate_right(id);
                if self.arena[id].left.is_some() {
                    self.rotate_right(id)
                } else {
                    id
                }
            },
            Step::Left(id, Ordering::Greater) => {
                let child = self.arena[id].left.expect("Expected left child node to be `Some`.");
                self.arena[child].right = splayed;
                if splayed.is_some() {
                    let child = self.rotate_left(child);
                    self.arena[id].left = Some(child);
                }
                self.rotate_right(id)
            },
            Step::Right(id, Ordering::Equal) => self.rotate_left(id),
            Step::Right(id, Ordering::Greater) => {
                let child = self.arena[id].right.expect("Expected right child node to be `Some`.");
                self.arena[child].right = splayed;
                let id = self.rotate_left(id);
                if self.arena[id].right.is_some() {
                    self.rotate_left(id)
                } else {
                    id
                }
            },
            Step::Right(id, Ordering::Less) => {
                let child = self.arena[id].right.expect("Expected right child node to be `Some`.");
                self.arena[child].left = splayed;
                if splayed.is_some() {
                    let child = self.rotate_right(child);
                    self.arena[id].right = Some(child);
                }
                self.rotate_left(id)
            },
        }
    }

    /// Splays for `key` and makes it the root. If the key was already present its value is
    /// replaced and the old value returned alongside the node.
    pub fn insert(&mut self, key: K, value: V) -> (NodeId, Option<V>)
    where
        K: Ord,
    {
        self.splay(&key);
        let root = match self.root {
            Some(root) => root,
            None => {
                let id = self.arena.allocate(Node::new(key, value));
                self.root = Some(id);
                return (id, None);
            },
        };

        let mut new_node = Node::new(key, value);
        match new_node.entry.key.cmp(&self.arena[root].entry.key) {
            Ordering::Equal => {
                let old = mem::replace(&mut self.arena[root].entry.value, new_node.entry.value);
                return (root, Some(old));
            },
            Ordering::Less => {
                new_node.left = self.arena[root].left.take();
                new_node.right = Some(root);
            },
            Ordering::Greater => {
                new_node.right = self.arena[root].right.take();
                new_node.left = Some(root);
            },
        }
        let id = self.arena.allocate(new_node);
        self.root = Some(id);
        (id, None)
    }

    pub fn ceil<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        let mut best = None;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match key.cmp(node.entry.key.borrow()) {
                Ordering::Greater => node.right,
                Ordering::Less => {
                    best = Some(id);
                    node.left
                },
                Ordering::Equal => return Some(id),
            };
        }
        best
    }

    pub fn floor<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        let mut best = None;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    best = Some(id);
                    node.right
                },
                Ordering::Equal => return Some(id),
            };
        }
        best
    }

    pub fn min(&self) -> Option<NodeId> {
        let mut curr = self.root?;
        while let Some(left) = self.arena[curr].left {
            curr = left;
        }
        Some(curr)
    }

    pub fn max(&self) -> Option<NodeId> {
        let mut curr = self.root?;
        while let Some(right) = self.arena[curr].right {
            curr = right;
        }
        Some(curr)
    }

    /// Number of nodes on the longest root-to-leaf path. Walks with an explicit stack because the
    /// tree can degenerate into a path as long as the map.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[id];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }
}
