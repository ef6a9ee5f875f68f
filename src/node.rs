/// A stable handle to a node stored in the [`Arena`](crate::arena::Arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
  #[inline]
  pub(crate) const fn new(index: u32) -> Self {
    Self(index)
  }

  #[inline]
  pub(crate) const fn index(self) -> usize {
    self.0 as usize
  }
}

/// A forward link at one level. `None` marks the end of the level.
pub(crate) type Link = Option<NodeId>;

#[derive(Debug)]
pub(crate) struct Node<K, V> {
  // Immutable once the node is linked.
  pub(crate) key: K,
  pub(crate) value: V,
  // One forward link per level the node participates in, bottom level first.
  // The length is the node's height and never changes.
  pub(crate) tower: Box<[Link]>,
}

impl<K, V> Node<K, V> {
  #[inline]
  pub(crate) fn new(key: K, value: V, height: usize) -> Self {
    Self {
      key,
      value,
      tower: vec![None; height].into_boxed_slice(),
    }
  }

  #[inline]
  pub(crate) fn height(&self) -> usize {
    self.tower.len()
  }

  #[inline]
  pub(crate) fn next(&self, level: usize) -> Link {
    self.tower[level]
  }
}
