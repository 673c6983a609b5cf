//! Fixed-capacity cache that evicts the least recently used entry.

use crate::arena::{NodeId, TypedArena};
use crate::entry::Entry;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

struct Node<K, V> {
    entry: Entry<K, V>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A key-value cache holding at most `capacity` entries.
///
/// Entries are kept on a doubly-linked recency list threaded through a `TypedArena`, with a
/// `HashMap` from key to list node. `get` and `put` move the entry to the front of the list and
/// `put` evicts from the back once the cache is over capacity, all in constant time.
///
/// # Examples
///
/// ```
/// use splay_memo::lru_cache::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.put(1, "one");
/// cache.put(2, "two");
/// assert_eq!(cache.get(&1), Some(&"one"));
///
/// // 2 is now the least recently used entry
/// assert_eq!(cache.put(3, "three"), Some((2, "two")));
/// assert!(!cache.contains_key(&2));
///
/// assert_eq!(cache.invalidate(|key| *key > 2), 1);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct LruCache<K, V> {
    arena: TypedArena<Node<K, V>>,
    index: HashMap<K, NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Constructs a new, empty `LruCache<K, V>` that holds at most `capacity` entries. A cache
    /// with a capacity of zero never stores anything.
    pub fn new(capacity: usize) -> Self {
        LruCache {
            arena: TypedArena::with_capacity(capacity.min(1 << 16)),
            index: HashMap::new(),
            head: None,
            tail: None,
            capacity,
        }
    }

    fn detach(&mut self, id: NodeId) {
        let (prev, next) = {
            let node = &self.arena[id];
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.arena[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.arena[next].prev = prev,
            None => self.tail = prev,
        }
        let node = &mut self.arena[id];
        node.prev = None;
        node.next = None;
    }

    fn push_front(&mut self, id: NodeId) {
        self.arena[id].next = self.head;
        match self.head {
            Some(head) => self.arena[head].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    fn remove_node(&mut self, id: NodeId) -> (K, V) {
        self.detach(id);
        let Node { entry, .. } = self.arena.free(id);
        self.index.remove(&entry.key);
        entry.into_pair()
    }

    /// Returns the value associated with a key and marks it as the most recently used entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::lru_cache::LruCache;
    ///
    /// let mut cache = LruCache::new(4);
    /// cache.put(1, 1);
    /// assert_eq!(cache.get(&1), Some(&1));
    /// assert_eq!(cache.get(&2), None);
    /// ```
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        self.detach(id);
        self.push_front(id);
        Some(&self.arena[id].entry.value)
    }

    /// Inserts or overwrites a key-value pair and marks it as the most recently used entry. If
    /// this pushes the cache over capacity, the least recently used entry is evicted and returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(&id) = self.index.get(&key) {
            self.arena[id].entry.value = value;
            self.detach(id);
            self.push_front(id);
            return None;
        }

        let id = self.arena.allocate(Node {
            entry: Entry::new(key.clone(), value),
            prev: None,
            next: None,
        });
        self.index.insert(key, id);
        self.push_front(id);

        if self.index.len() > self.capacity {
            let tail = self.tail.expect("Expected non-empty recency list.");
            return Some(self.remove_node(tail));
        }
        None
    }

    /// Removes a key from the cache, returning its value if it was cached.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        Some(self.remove_node(id).1)
    }

    /// Removes every entry whose key satisfies `predicate` and returns how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::lru_cache::LruCache;
    ///
    /// let mut cache = LruCache::new(8);
    /// cache.put((0, 4), 10);
    /// cache.put((5, 9), 20);
    /// assert_eq!(cache.invalidate(|&(left, right)| left <= 2 && 2 <= right), 1);
    /// assert!(cache.contains_key(&(5, 9)));
    /// ```
    pub fn invalidate<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K) -> bool,
    {
        let stale: Vec<NodeId> = self
            .index
            .iter()
            .filter(|(key, _)| predicate(*key))
            .map(|(_, id)| *id)
            .collect();
        for id in &stale {
            self.remove_node(*id);
        }
        stale.len()
    }

    /// Checks if a key is cached without changing its recency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the cached keys from most to least recently used.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut current = self.head;
        while let Some(id) = current {
            let node = &self.arena[id];
            keys.push(&node.entry.key);
            current = node.next;
        }
        keys
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries the cache holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }
}
