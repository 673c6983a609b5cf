//! Slot allocator shared by the node-based containers in this crate.

use std::mem;
use std::ops::{Index, IndexMut};

/// A copyable handle to an object stored in a `TypedArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// An allocator for a single type of object that hands out `NodeId` handles instead of
/// references.
///
/// Objects are stored contiguously in a `Vec`. Freed slots are chained into a free list and
/// reused by later allocations, so a container that evicts as often as it inserts does not
/// grow. Links between objects are plain `NodeId`s, which lets a container rewire several
/// of them at once without fighting the borrow checker.
///
/// # Examples
///
/// ```
/// use splay_memo::arena::TypedArena;
///
/// let mut arena = TypedArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    head: Option<NodeId>,
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>`.
    pub fn new() -> Self {
        TypedArena {
            head: None,
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `TypedArena<T>` with room for `capacity` objects before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        TypedArena {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Stores an object in the arena and returns its handle. A previously freed slot is reused
    /// if one is available.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            },
            Some(id) => {
                let vacant = mem::replace(&mut self.slots[id.0], Slot::Occupied(value));
                match vacant {
                    Slot::Vacant(next) => self.head = next,
                    Slot::Occupied(_) => panic!("Expected a vacant slot at the head of the free list."),
                }
                id
            },
        }
    }

    /// Removes an object from the arena and returns it. The handle must not be used again
    /// until the arena hands it out from another allocation.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an occupied slot.
    pub fn free(&mut self, id: NodeId) -> T {
        if id.0 >= self.slots.len() {
            panic!("Error: attempting to free invalid slot.");
        }
        let old = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.head));
        match old {
            Slot::Occupied(value) => {
                self.len -= 1;
                self.head = Some(id);
                value
            },
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("Error: attempting to free vacant slot.");
            },
        }
    }

    /// Returns an immutable reference to an object. Returns `None` if `id` does not refer to an
    /// occupied slot.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object. Returns `None` if `id` does not refer to an
    /// occupied slot.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object and invalidates all outstanding handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for TypedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for TypedArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<NodeId> for TypedArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: handle does not refer to a live object.")
    }
}
