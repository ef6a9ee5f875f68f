use super::node::{Node, NodeId};

/// Slot storage for the nodes of one list.
///
/// Nodes never move once allocated, so a [`NodeId`] stays valid until the
/// node is deallocated. Vacated slots are kept on a freelist and handed out
/// again by the next allocation.
#[derive(Debug)]
pub(crate) struct Arena<K, V> {
  slots: Vec<Option<Node<K, V>>>,
  freelist: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self {
      slots: Vec::new(),
      freelist: Vec::new(),
    }
  }

  /// Returns the number of live nodes.
  #[inline]
  pub(crate) fn allocated(&self) -> usize {
    self.slots.len() - self.freelist.len()
  }

  /// Returns the number of slots, live or vacated.
  #[cfg(test)]
  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.len()
  }

  pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
    if let Some(id) = self.freelist.pop() {
      self.slots[id.index()] = Some(node);
      return id;
    }

    let index = match u32::try_from(self.slots.len()) {
      Ok(index) => index,
      Err(_) => panic!("arena cannot hold more than {} nodes", u32::MAX),
    };
    self.slots.push(Some(node));
    NodeId::new(index)
  }

  /// Takes the node out of its slot. The caller must have unlinked it first.
  pub(crate) fn dealloc(&mut self, id: NodeId) -> Node<K, V> {
    match self.slots[id.index()].take() {
      Some(node) => {
        self.freelist.push(id);
        node
      }
      None => panic!("double free of node {id:?}"),
    }
  }

  #[inline]
  pub(crate) fn get(&self, id: NodeId) -> &Node<K, V> {
    match &self.slots[id.index()] {
      Some(node) => node,
      None => panic!("dangling node {id:?}"),
    }
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
    match &mut self.slots[id.index()] {
      Some(node) => node,
      None => panic!("dangling node {id:?}"),
    }
  }

  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.freelist.clear();
  }
}
