use crate::arena::NodeId;
use crate::splay_tree::tree::Tree;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

/// An ordered map implemented using a splay tree, with a hash index on the side.
///
/// A splay tree is a self-adjusting binary tree with an additional property that recently
/// accessed items are quick to access again. Every insertion "splays" the inserted key to the
/// root of the tree.
///
/// Lookups come in two flavours. `find` answers from a hash index that maps each key to its node
/// and leaves the shape of the tree alone, so only insertions reorganize the tree. `find_and_splay`
/// is the textbook lookup: it walks the tree and splays the key (or its nearest neighbour on a
/// miss) to the root.
///
/// # Examples
///
/// ```
/// use splay_memo::splay_tree::SplayMap;
///
/// let mut map = SplayMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.find(&1), None);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.root(), Some((&3, &4)));
///
/// assert_eq!(map.find_and_splay(&0), Some(&1));
/// assert_eq!(map.root(), Some((&0, &1)));
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
/// ```
pub struct SplayMap<K, V> {
    tree: Tree<K, V>,
    index: HashMap<K, NodeId>,
}

impl<K, V> SplayMap<K, V>
where
    K: Ord + Hash + Clone,
{
    /// Constructs a new, empty `SplayMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// ```
    pub fn new() -> Self {
        SplayMap {
            tree: Tree::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts a key-value pair into the map and splays the key to the root. If the key already
    /// exists in the map, its value is replaced and the old value returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.find(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.find(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let indexed_key = if self.index.contains_key(&key) {
            None
        } else {
            Some(key.clone())
        };
        let (id, old_value) = self.tree.insert(key, value);
        if let Some(key) = indexed_key {
            self.index.insert(key, id);
        }
        old_value
    }

    /// Returns the value associated with a key by consulting the index. The tree is not
    /// traversed and its shape does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.find(&1), Some(&1));
    /// assert_eq!(map.find(&3), None);
    /// assert_eq!(map.root(), Some((&2, &2)));
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|id| &self.tree.entry(*id).value)
    }

    /// Searches the tree for a key and splays it to the root, returning its value. On a miss the
    /// last node on the search path becomes the root and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(5, 5);
    /// assert_eq!(map.find_and_splay(&1), Some(&1));
    /// assert_eq!(map.root(), Some((&1, &1)));
    /// assert_eq!(map.find_and_splay(&4), None);
    /// assert_eq!(map.root(), Some((&5, &5)));
    /// ```
    pub fn find_and_splay<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.splay(key);
        let entry = self.tree.entry(self.tree.root?);
        if entry.key.borrow() == key {
            Some(&entry.value)
        } else {
            None
        }
    }

    /// Checks if a key exists in the map. The tree is not splayed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the key-value pair at the root of the tree, which is the most recently inserted
    /// or splayed key.
    pub fn root(&self) -> Option<(&K, &V)> {
        self.tree.root.map(|id| {
            let entry = self.tree.entry(id);
            (&entry.key, &entry.value)
        })
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// for key in 0..10 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.index.clear();
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist. Note that `floor` does not splay the tree.
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.floor(key).map(|id| &self.tree.entry(id).key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist. Note that `ceil` does not splay the tree.
    pub fn ceil<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.ceil(key).map(|id| &self.tree.entry(id).key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        self.tree.min().map(|id| &self.tree.entry(id).key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&K> {
        self.tree.max().map(|id| &self.tree.entry(id).key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayMapIter<K, V> {
        SplayMapIter {
            tree: &self.tree,
            current: self.tree.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SplayMap<K, V>
where
    K: Ord + Hash + Clone,
{
    type IntoIter = SplayMapIter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `SplayMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct SplayMapIter<'a, K, V> {
    tree: &'a Tree<K, V>,
    current: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl<'a, K, V> Iterator for SplayMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(id) = self.current {
            self.current = tree.arena[id].left;
            self.stack.push(id);
        }
        self.stack.pop().map(|id| {
            let node = &tree.arena[id];
            self.current = node.right;
            (&node.entry.key, &node.entry.value)
        })
    }
}

impl<K, V> Default for SplayMap<K, V>
where
    K: Ord + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V, Q> Index<&'a Q> for SplayMap<K, V>
where
    K: Ord + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.find(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::SplayMap;

    #[test]
    fn test_len_empty() {
        let map: SplayMap<u32, u32> = SplayMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.root(), None);
        assert_eq!(map.height(), 0);
    }

    #[test]
    fn test_min_max_empty() {
        let map: SplayMap<u32, u32> = SplayMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = SplayMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.find(&1), Some(&1));
        assert_eq!(map.root(), Some((&1, &1)));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = SplayMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(2, 2), None);
        assert_eq!(map.insert(1, 3), Some(1));
        assert_eq!(map.find(&1), Some(&3));
        assert_eq!(map.root(), Some((&1, &3)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().count(), 2);
    }

    #[test]
    fn test_find_leaves_shape() {
        let mut map = SplayMap::new();
        for key in 0..5 {
            map.insert(key, key * 10);
        }
        let height = map.height();
        assert_eq!(map.find(&0), Some(&0));
        assert_eq!(map.root(), Some((&4, &40)));
        assert_eq!(map.height(), height);
    }

    #[test]
    fn test_find_and_splay_hit() {
        let mut map = SplayMap::new();
        for key in 0..5 {
            map.insert(key, key * 10);
        }
        assert_eq!(map.find_and_splay(&0), Some(&0));
        assert_eq!(map.root(), Some((&0, &0)));
        assert_eq!(map.find_and_splay(&3), Some(&30));
        assert_eq!(map.root(), Some((&3, &30)));
        assert_eq!(
            map.iter().map(|(key, _)| *key).collect::<Vec<u32>>(),
            vec![0, 1, 2, 3, 4],
        );
    }

    #[test]
    fn test_find_and_splay_miss() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);
        assert_eq!(map.find_and_splay(&4), None);
        assert_eq!(map.root(), Some((&3, &3)));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_find_and_splay_empty() {
        let mut map: SplayMap<u32, u32> = SplayMap::new();
        assert_eq!(map.find_and_splay(&4), None);
    }

    #[test]
    fn test_clear() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.find(&1), None);
        assert_eq!(map.root(), None);
        map.insert(3, 3);
        assert_eq!(map.find(&3), Some(&3));
    }

    #[test]
    fn test_min_max() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = SplayMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_iter() {
        let mut map = SplayMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
        assert_eq!((&map).into_iter().count(), 3);
    }

    #[test]
    fn test_borrowed_key() {
        let mut map = SplayMap::new();
        map.insert(String::from("b"), 2);
        map.insert(String::from("a"), 1);
        assert_eq!(map.find("a"), Some(&1));
        assert_eq!(map.find_and_splay("b"), Some(&2));
        assert_eq!(map["a"], 1);
    }
}
