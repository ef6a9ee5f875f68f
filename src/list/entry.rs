use parking_lot::{MappedRwLockReadGuard, MappedRwLockWriteGuard};

use super::{Arena, Node, NodeId};

/// A shared reference to an entry in the [`SkipList`](super::SkipList).
///
/// The read lock of the list is held until this guard is dropped.
pub struct EntryRef<'a, K, V> {
  node: MappedRwLockReadGuard<'a, Node<K, V>>,
}

impl<'a, K, V> EntryRef<'a, K, V> {
  #[inline]
  pub(super) fn new(node: MappedRwLockReadGuard<'a, Node<K, V>>) -> Self {
    Self { node }
  }

  /// Returns the key of the entry.
  #[inline]
  pub fn key(&self) -> &K {
    &self.node.key
  }

  /// Returns the value of the entry.
  #[inline]
  pub fn value(&self) -> &V {
    &self.node.value
  }
}

impl<K: core::fmt::Debug, V: core::fmt::Debug> core::fmt::Debug for EntryRef<'_, K, V> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("EntryRef")
      .field("key", self.key())
      .field("value", self.value())
      .finish()
  }
}

/// A mutable reference to an entry in the [`SkipList`](super::SkipList), returned by
/// [`SkipList::set`](super::SkipList::set).
///
/// The write lock of the list is held until this guard is dropped, so do not
/// keep it around while calling other methods of the same list.
pub struct EntryMut<'a, K, V> {
  node: MappedRwLockWriteGuard<'a, Node<K, V>>,
}

impl<'a, K, V> EntryMut<'a, K, V> {
  #[inline]
  pub(super) fn new(node: MappedRwLockWriteGuard<'a, Node<K, V>>) -> Self {
    Self { node }
  }

  /// Returns the key of the entry.
  #[inline]
  pub fn key(&self) -> &K {
    &self.node.key
  }

  /// Returns the value of the entry.
  #[inline]
  pub fn value(&self) -> &V {
    &self.node.value
  }

  /// Returns a mutable reference to the value of the entry.
  #[inline]
  pub fn value_mut(&mut self) -> &mut V {
    &mut self.node.value
  }
}

impl<K: core::fmt::Debug, V: core::fmt::Debug> core::fmt::Debug for EntryMut<'_, K, V> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("EntryMut")
      .field("key", self.key())
      .field("value", self.value())
      .finish()
  }
}

/// An entry which has been removed from the [`SkipList`](super::SkipList).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
  key: K,
  value: V,
}

impl<K, V> Entry<K, V> {
  #[inline]
  pub(super) fn from_node(node: Node<K, V>) -> Self {
    Self {
      key: node.key,
      value: node.value,
    }
  }

  /// Returns the key of the entry.
  #[inline]
  pub const fn key(&self) -> &K {
    &self.key
  }

  /// Returns the value of the entry.
  #[inline]
  pub const fn value(&self) -> &V {
    &self.value
  }

  /// Consumes the entry, returning the key and the value.
  #[inline]
  pub fn into_parts(self) -> (K, V) {
    (self.key, self.value)
  }
}

/// A cursor over a node of the [`SkipList`](super::SkipList), returned by
/// [`SkipList::front`](super::SkipList::front) and [`ReadView::front`](super::ReadView::front).
///
/// Call [`next`](NodeRef::next) to walk the entries in ascending key order.
pub struct NodeRef<'a, K, V> {
  arena: &'a Arena<K, V>,
  id: NodeId,
}

impl<K, V> Clone for NodeRef<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
  #[inline]
  pub(super) const fn new(arena: &'a Arena<K, V>, id: NodeId) -> Self {
    Self { arena, id }
  }

  /// Returns the key of the node.
  #[inline]
  pub fn key(&self) -> &'a K {
    &self.arena.get(self.id).key
  }

  /// Returns the value of the node.
  #[inline]
  pub fn value(&self) -> &'a V {
    &self.arena.get(self.id).value
  }

  /// Returns the following node, or `None` at the end of the list.
  ///
  /// Only operates on the bottom level (a fully linked list).
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn next(&self) -> Option<NodeRef<'a, K, V>> {
    self
      .arena
      .get(self.id)
      .next(0)
      .map(|id| NodeRef::new(self.arena, id))
  }
}

impl<K: core::fmt::Debug, V: core::fmt::Debug> core::fmt::Debug for NodeRef<'_, K, V> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("NodeRef")
      .field("key", self.key())
      .field("value", self.value())
      .finish()
  }
}
