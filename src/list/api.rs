use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::{
  super::{options::validate_probability, Error, DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY},
  Entry, EntryMut, EntryRef, Filter, Inner, IntoIter, Iter, KeyOrder, LevelGenerator, NodeRef,
  ReadView, SkipList,
};

impl<K, V> SkipList<K, V> {
  /// Creates a new, empty skiplist with the default max level (`18`) and the
  /// default success probability (`1 / e`).
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// list.set(1, "one");
  /// assert_eq!(list.get(&1).unwrap().value(), &"one");
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self::with_max_level(DEFAULT_MAX_LEVEL)
  }

  /// Creates a new, empty skiplist whose nodes are at most `max_level` levels
  /// high, with the default success probability.
  ///
  /// The level is not validated. A max level of `0` behaves like `1`: the list
  /// degenerates to a plain sorted linked list. Use
  /// [`Builder`](crate::Builder) for a validated configuration.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::<u32, u32>::with_max_level(4);
  /// assert_eq!(list.max_level(), 4);
  /// ```
  #[inline]
  pub fn with_max_level(max_level: usize) -> Self {
    Self::with_rng(SmallRng::from_os_rng(), max_level, DEFAULT_PROBABILITY)
  }
}

impl<K, V> Default for SkipList<K, V> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V, R> SkipList<K, V, R> {
  pub(crate) fn with_rng(rng: R, max_level: usize, probability: f64) -> Self {
    let max_level = max_level.max(1);
    Self {
      inner: RwLock::new(Inner::new(
        LevelGenerator::new(rng, max_level, probability),
        max_level,
      )),
      max_level,
    }
  }

  /// Returns the number of entries in the skiplist.
  #[inline]
  pub fn len(&self) -> usize {
    self.inner.read().len
  }

  /// Returns `true` if the skiplist is empty.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the height of the tallest tower currently linked into the list.
  ///
  /// `1 <= height <= max_level`.
  #[inline]
  pub fn height(&self) -> usize {
    self.inner.read().height
  }

  /// Returns the upper bound on the height of any node.
  #[inline]
  pub const fn max_level(&self) -> usize {
    self.max_level
  }

  /// Returns the success probability used to generate the height of new nodes.
  #[inline]
  pub fn probability(&self) -> f64 {
    self.inner.read().levels.probability()
  }

  /// Replaces the success probability used to generate the height of new
  /// nodes. Nodes already in the list keep their height.
  ///
  /// The probability is not validated: a value `<= 0` (or NaN) makes every new
  /// node one level high, a value `>= 1` makes every new node `max_level`
  /// levels high. See [`try_set_probability`](SkipList::try_set_probability).
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::<u32, u32>::new();
  /// list.set_probability(0.5);
  /// assert_eq!(list.probability(), 0.5);
  /// ```
  pub fn set_probability(&self, probability: f64) {
    self.inner.write().levels.set_probability(probability);

    #[cfg(feature = "tracing")]
    tracing::debug!(probability, "skiplist probability changed");
  }

  /// Replaces the success probability, rejecting values outside `(0, 1)`.
  ///
  /// # Errors
  ///
  /// - Returns `Error::InvalidProbability` if the probability is not in `(0, 1)`,
  ///   the current probability is kept.
  pub fn try_set_probability(&self, probability: f64) -> Result<(), Error> {
    validate_probability(probability)?;
    self.set_probability(probability);
    Ok(())
  }

  /// Returns the first node, or `None` if the list is empty.
  ///
  /// No lock is taken: the exclusive borrow guarantees that nothing can modify the
  /// list while the returned node, or any node reached through
  /// [`NodeRef::next`], is alive. Use [`read`](SkipList::read) to traverse a
  /// shared list.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let mut list = SkipList::new();
  /// list.set(2, 20);
  /// list.set(1, 10);
  ///
  /// let mut keys = vec![];
  /// let mut cur = list.front();
  /// while let Some(node) = cur {
  ///   keys.push(*node.key());
  ///   cur = node.next();
  /// }
  /// assert_eq!(keys, [1, 2]);
  /// ```
  #[inline]
  pub fn front(&mut self) -> Option<NodeRef<'_, K, V>> {
    let inner: &Inner<K, V, R> = self.inner.get_mut();
    inner.head[0].map(|id| NodeRef::new(&inner.arena, id))
  }

  /// Returns an iterator over the entries, in ascending key order. No lock is taken.
  #[inline]
  pub fn iter(&mut self) -> Iter<'_, K, V> {
    Iter::new(&*self.inner.get_mut())
  }

  /// Locks the list for reading and returns a view to traverse it.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// list.set("b", 2);
  /// list.set("a", 1);
  ///
  /// let view = list.read();
  /// let entries: Vec<_> = view.iter().map(|(k, v)| (*k, *v)).collect();
  /// assert_eq!(entries, [("a", 1), ("b", 2)]);
  /// ```
  #[inline]
  pub fn read(&self) -> ReadView<'_, K, V, R> {
    ReadView::new(self.inner.read())
  }

  /// Removes the entry with the smallest key and returns it, or `None` if the
  /// list is empty.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// list.set(2, "b");
  /// list.set(1, "a");
  ///
  /// assert_eq!(list.remove_front().unwrap().into_parts(), (1, "a"));
  /// assert_eq!(list.remove_front().unwrap().into_parts(), (2, "b"));
  /// assert!(list.remove_front().is_none());
  /// ```
  pub fn remove_front(&self) -> Option<Entry<K, V>> {
    self.inner.write().remove_front().map(Entry::from_node)
  }

  /// Removes every entry.
  pub fn clear(&self) {
    self.inner.write().clear();
  }
}

impl<K: KeyOrder, V, R> SkipList<K, V, R> {
  /// Returns the entry of the key, if it exists.
  ///
  /// The returned [`EntryRef`] holds the read lock until it is dropped.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// list.set(10, 1);
  ///
  /// let ent = list.get(&10).unwrap();
  /// assert_eq!(ent.key(), &10);
  /// assert_eq!(ent.value(), &1);
  /// drop(ent);
  ///
  /// assert!(list.get(&20).is_none());
  /// ```
  pub fn get(&self, key: &K) -> Option<EntryRef<'_, K, V>> {
    RwLockReadGuard::try_map(self.inner.read(), |inner| inner.get(key))
      .ok()
      .map(EntryRef::new)
  }

  /// Returns a clone of the value of the key, if it exists. The read lock is
  /// released before returning.
  pub fn get_cloned(&self, key: &K) -> Option<V>
  where
    V: Clone,
  {
    self.inner.read().get(key).map(|node| node.value.clone())
  }

  /// Returns `true` if the key exists in the list.
  #[inline]
  pub fn contains_key(&self, key: &K) -> bool {
    self.inner.read().get(key).is_some()
  }

  /// Removes the entry of the key and returns it, or `None` if the key does
  /// not exist.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// list.set(10, 1);
  ///
  /// assert!(list.remove(&0).is_none());
  /// assert_eq!(list.remove(&10).unwrap().value(), &1);
  /// assert!(list.is_empty());
  /// ```
  pub fn remove(&self, key: &K) -> Option<Entry<K, V>> {
    self.inner.write().remove(key).map(Entry::from_node)
  }

  /// Removes the entry positioned at `key` if its [`Filter`] fingerprint
  /// matches the fingerprint of `key`, and returns it.
  ///
  /// The position is located through [`KeyOrder`], like [`remove`](SkipList::remove),
  /// but the match is decided by identity. Returns `None` if there is no entry
  /// at that position or its fingerprint differs.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// list.set(10, 1);
  /// list.set(20, 2);
  ///
  /// assert_eq!(list.remove_by_filter(&10).unwrap().key(), &10);
  /// assert!(list.remove_by_filter(&15).is_none());
  /// assert_eq!(list.len(), 1);
  /// ```
  pub fn remove_by_filter(&self, key: &K) -> Option<Entry<K, V>>
  where
    K: Filter,
  {
    self.inner.write().remove_by_filter(key).map(Entry::from_node)
  }
}

impl<K: KeyOrder, V, R: Rng> SkipList<K, V, R> {
  /// Inserts the key with the value, or replaces the value if the key already
  /// exists, and returns the entry.
  ///
  /// The returned [`EntryMut`] holds the write lock until it is dropped.
  ///
  /// # Deadlocks
  ///
  /// The lock is not reentrant. Calling any other method of the same list on
  /// the same thread while the returned entry is alive blocks forever. Drop
  /// the entry first, or use [`insert`](SkipList::insert), which releases the
  /// lock before returning.
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// let mut ent = list.set("k", 1);
  /// *ent.value_mut() += 1;
  /// // `list.get(&"k")` here would never return.
  /// drop(ent);
  ///
  /// assert_eq!(list.get(&"k").unwrap().value(), &2);
  /// ```
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// list.set(30, 3);
  /// list.set(30, 9);
  ///
  /// assert_eq!(list.len(), 1);
  /// assert_eq!(list.get(&30).unwrap().value(), &9);
  /// ```
  pub fn set(&self, key: K, value: V) -> EntryMut<'_, K, V> {
    let mut inner = self.inner.write();
    let (id, _) = inner.upsert(key, value);
    EntryMut::new(RwLockWriteGuard::map(inner, |inner| inner.arena.get_mut(id)))
  }

  /// Inserts the key with the value. If the key already exists, the value is
  /// replaced and the old value is returned.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::SkipList;
  ///
  /// let list = SkipList::new();
  /// assert_eq!(list.insert("k", 1), None);
  /// assert_eq!(list.insert("k", 2), Some(1));
  /// ```
  pub fn insert(&self, key: K, value: V) -> Option<V> {
    self.inner.write().upsert(key, value).1
  }
}

impl<K, V, R> IntoIterator for SkipList<K, V, R> {
  type Item = (K, V);
  type IntoIter = IntoIter<K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self.inner.into_inner())
  }
}

impl<K: KeyOrder, V, R: Rng> Extend<(K, V)> for SkipList<K, V, R> {
  fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
    let inner = self.inner.get_mut();
    for (k, v) in iter {
      inner.upsert(k, v);
    }
  }
}

impl<K: KeyOrder, V> FromIterator<(K, V)> for SkipList<K, V> {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

/// Formats the entries as a map.
///
/// The lock is only tried, never waited for: while any writer holds it or is
/// queued for it, on this thread or another, the output is
/// `SkipList { <locked> }` instead of the entries.
impl<K: core::fmt::Debug, V: core::fmt::Debug, R> core::fmt::Debug for SkipList<K, V, R> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.inner.try_read() {
      Some(inner) => f.debug_map().entries(Iter::new(&*inner)).finish(),
      None => f.write_str("SkipList { <locked> }"),
    }
  }
}
