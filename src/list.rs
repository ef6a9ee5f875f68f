use core::mem;

use parking_lot::RwLock;
use rand::{rngs::SmallRng, Rng};

use super::{
  arena::Arena,
  key::{Filter, KeyOrder},
  level::LevelGenerator,
  node::{Link, Node, NodeId},
};

mod api;
mod entry;
pub use entry::*;
mod iterator;
pub use iterator::*;


/// An ordered map based on skiplist, guarded by a single reader-writer lock.
///
/// Lookups ([`get`](SkipList::get), [`len`](SkipList::len), ...) take the lock
/// in shared mode and may run concurrently with each other. Every mutation
/// ([`set`](SkipList::set), [`remove`](SkipList::remove), ...) takes it in
/// exclusive mode for its whole duration, so writers are totally ordered.
///
/// Traversal from [`front`](SkipList::front) takes no lock at all: it
/// requires `&mut self`, which proves that no other thread can be writing. Shared
/// callers traverse through a [`ReadView`] instead, which holds the read lock
/// for as long as it lives.
///
/// Nodes live in an arena and link to each other through stable handles, so
/// the list contains no `unsafe` code.
pub struct SkipList<K, V, R = SmallRng> {
  inner: RwLock<Inner<K, V, R>>,
  max_level: usize,
}

pub(crate) struct Inner<K, V, R> {
  arena: Arena<K, V>,
  /// Forward links of the head sentinel, sized to the max level.
  head: Box<[Link]>,
  /// Current height. 1 <= height <= max level.
  height: usize,
  len: usize,
  levels: LevelGenerator<R>,
  /// Predecessor of the last searched key at every level, `None` standing for
  /// the head sentinel. Only meaningful inside one write operation.
  prevs: Box<[Link]>,
}

impl<K, V, R> Inner<K, V, R> {
  fn new(levels: LevelGenerator<R>, max_level: usize) -> Self {
    Self {
      arena: Arena::new(),
      head: vec![None; max_level].into_boxed_slice(),
      height: 1,
      len: 0,
      levels,
      prevs: vec![None; max_level].into_boxed_slice(),
    }
  }

  #[inline]
  fn next_of(&self, prev: Link, level: usize) -> Link {
    match prev {
      None => self.head[level],
      Some(id) => self.arena.get(id).next(level),
    }
  }

  #[inline]
  fn set_next(&mut self, prev: Link, level: usize, next: Link) {
    match prev {
      None => self.head[level] = next,
      Some(id) => self.arena.get_mut(id).tower[level] = next,
    }
  }

  /// Unlinks `id` from every level it participates in. `self.prevs` must hold
  /// the predecessors of the node.
  fn unsplice(&mut self, id: NodeId) -> Node<K, V> {
    let height = self.arena.get(id).height();
    for level in 0..height {
      let prev = self.prevs[level];
      debug_assert_eq!(self.next_of(prev, level), Some(id), "broken splice at level {level}");
      let next = self.arena.get(id).next(level);
      self.set_next(prev, level, next);
    }

    self.len -= 1;
    self.retire_levels();
    let node = self.arena.dealloc(id);
    debug_assert_eq!(self.arena.allocated(), self.len);
    node
  }

  /// Lowers the height while the top level is empty.
  fn retire_levels(&mut self) {
    while self.height > 1 && self.head[self.height - 1].is_none() {
      self.height -= 1;

      #[cfg(feature = "tracing")]
      tracing::trace!(height = self.height, "lower skiplist height");
    }
  }

  fn remove_front(&mut self) -> Option<Node<K, V>> {
    let id = self.head[0]?;
    // The first node is preceded by the head at every level.
    let height = self.arena.get(id).height();
    self.prevs[..height].fill(None);
    Some(self.unsplice(id))
  }

  fn clear(&mut self) {
    self.arena.clear();
    self.head.fill(None);
    self.height = 1;
    self.len = 0;
  }
}

impl<K: KeyOrder, V, R> Inner<K, V, R> {
  /// Walks from the head at the current height down to level 0, moving right
  /// while the next key is less than `key`.
  ///
  /// Returns the predecessor at level 0 and the node whose key is equivalent
  /// to `key`, if any. When `prevs` is given, the predecessor at every level
  /// below the current height is recorded in it.
  fn find(&self, key: &K, mut prevs: Option<&mut [Link]>) -> (Link, Option<NodeId>) {
    let mut prev = None;
    for level in (0..self.height).rev() {
      while let Some(next) = self.next_of(prev, level) {
        if !self.arena.get(next).key.less(key) {
          break;
        }
        prev = Some(next);
      }

      if let Some(prevs) = prevs.as_mut() {
        prevs[level] = prev;
      }
    }

    let found = self
      .next_of(prev, 0)
      .filter(|id| self.arena.get(*id).key.equivalent(key));
    (prev, found)
  }

  /// Same as [`find`](Self::find), recording the predecessors into `self.prevs`.
  fn find_splice(&mut self, key: &K) -> (Link, Option<NodeId>) {
    let mut prevs = mem::take(&mut self.prevs);
    let res = self.find(key, Some(&mut prevs[..]));
    self.prevs = prevs;
    res
  }

  #[inline]
  fn get(&self, key: &K) -> Option<&Node<K, V>> {
    self.find(key, None).1.map(|id| self.arena.get(id))
  }

  fn remove(&mut self, key: &K) -> Option<Node<K, V>> {
    let (_, found) = self.find_splice(key);
    found.map(|id| self.unsplice(id))
  }

  fn remove_by_filter(&mut self, key: &K) -> Option<Node<K, V>>
  where
    K: Filter,
  {
    // The ordering locates the position, the fingerprint decides the match.
    let (prev, _) = self.find_splice(key);
    let candidate = self.next_of(prev, 0)?;
    if self.arena.get(candidate).key.fingerprint() != key.fingerprint() {
      return None;
    }
    Some(self.unsplice(candidate))
  }
}

impl<K: KeyOrder, V, R: Rng> Inner<K, V, R> {
  /// Inserts the key or replaces the value of the existing key.
  ///
  /// Returns the node and the replaced value.
  fn upsert(&mut self, key: K, value: V) -> (NodeId, Option<V>) {
    if let (_, Some(id)) = self.find_splice(&key) {
      let old = mem::replace(&mut self.arena.get_mut(id).value, value);
      return (id, Some(old));
    }

    let height = self.levels.random_level();
    if height > self.height {
      // The new levels have not been populated yet, so the head precedes the
      // new node there.
      self.prevs[self.height..height].fill(None);

      #[cfg(feature = "tracing")]
      tracing::trace!(from = self.height, to = height, "raise skiplist height");

      self.height = height;
    }

    // We always link from the base level and up.
    let mut node = Node::new(key, value, height);
    for level in 0..height {
      node.tower[level] = self.next_of(self.prevs[level], level);
    }

    let id = self.arena.alloc(node);
    for level in 0..height {
      self.set_next(self.prevs[level], level, Some(id));
    }
    self.len += 1;
    (id, None)
  }
}
