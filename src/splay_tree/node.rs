use crate::arena::NodeId;
use crate::entry::Entry;

pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Node {
            entry: Entry::new(key, value),
            left: None,
            right: None,
        }
    }
}
