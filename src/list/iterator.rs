use core::iter::FusedIterator;

use parking_lot::RwLockReadGuard;

use super::{Arena, Inner, KeyOrder, Link, NodeRef};

/// An iterator over the entries of a [`SkipList`](super::SkipList), in ascending key order.
pub struct Iter<'a, K, V> {
  arena: &'a Arena<K, V>,
  next: Link,
  remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
  #[inline]
  pub(super) fn new<R>(inner: &'a Inner<K, V, R>) -> Self {
    Self {
      arena: &inner.arena,
      next: inner.head[0],
      remaining: inner.len,
    }
  }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let node = self.arena.get(self.next?);
    self.next = node.next(0);
    self.remaining -= 1;
    Some((&node.key, &node.value))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      next: self.next,
      remaining: self.remaining,
    }
  }
}

/// An owning iterator over the entries of a [`SkipList`](super::SkipList), in ascending key order.
pub struct IntoIter<K, V> {
  arena: Arena<K, V>,
  next: Link,
  remaining: usize,
}

impl<K, V> IntoIter<K, V> {
  #[inline]
  pub(super) fn new<R>(inner: Inner<K, V, R>) -> Self {
    Self {
      next: inner.head[0],
      remaining: inner.len,
      arena: inner.arena,
    }
  }
}

impl<K, V> Iterator for IntoIter<K, V> {
  type Item = (K, V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let node = self.arena.dealloc(self.next?);
    self.next = node.next(0);
    self.remaining -= 1;
    Some((node.key, node.value))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// A read-locked view of a [`SkipList`](super::SkipList), returned by
/// [`SkipList::read`](super::SkipList::read).
///
/// The read lock is held for the lifetime of the view, so traversal through it
/// never races with writers. Writers block until the view is dropped.
pub struct ReadView<'a, K, V, R> {
  inner: RwLockReadGuard<'a, Inner<K, V, R>>,
}

impl<'a, K, V, R> ReadView<'a, K, V, R> {
  #[inline]
  pub(super) fn new(inner: RwLockReadGuard<'a, Inner<K, V, R>>) -> Self {
    Self { inner }
  }

  /// Returns the number of entries.
  #[inline]
  pub fn len(&self) -> usize {
    self.inner.len
  }

  /// Returns `true` if there are no entries.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.inner.len == 0
  }

  /// Returns the first node, or `None` if the list is empty.
  #[inline]
  pub fn front(&self) -> Option<NodeRef<'_, K, V>> {
    self.inner.head[0].map(|id| NodeRef::new(&self.inner.arena, id))
  }

  /// Returns an iterator over the entries, in ascending key order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter::new(&*self.inner)
  }
}

impl<K: KeyOrder, V, R> ReadView<'_, K, V, R> {
  /// Returns the value of the key, if it exists.
  #[inline]
  pub fn get(&self, key: &K) -> Option<&V> {
    self.inner.get(key).map(|node| &node.value)
  }
}

impl<'a, K, V, R> IntoIterator for &'a ReadView<'_, K, V, R> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
