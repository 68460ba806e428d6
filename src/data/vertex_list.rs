use super::Vertex;

/// Stable handle to a vertex inside a [`VertexList`]. Slots are assigned in
/// list order when the list is filled and survive removal of their
/// neighbours.
pub type Slot = usize;

/// The working polygon: a cyclic doubly-linked list over an arena of
/// vertices.
///
/// Removing a vertex links its neighbours to each other in O(1). Positions
/// (0 is the head) wrap modulo the current length in both directions.
#[derive(Clone, Debug)]
pub struct VertexList<T> {
  vertices: Vec<Vertex<T>>,
  links: Vec<Link>,
  head: Slot,
  len: usize,
}

#[derive(Copy, Clone, Debug)]
struct Link {
  prev: Slot,
  next: Slot,
  alive: bool,
}

impl<T> Default for VertexList<T> {
  fn default() -> Self {
    VertexList::new()
  }
}

impl<T> VertexList<T> {
  pub fn new() -> VertexList<T> {
    VertexList {
      vertices: Vec::new(),
      links: Vec::new(),
      head: 0,
      len: 0,
    }
  }

  /// Replace the contents with `vertices`, in order. Previously allocated
  /// storage is reused.
  pub fn reset<I>(&mut self, vertices: I)
  where
    I: IntoIterator<Item = Vertex<T>>,
  {
    self.vertices.clear();
    self.vertices.extend(vertices);
    let size = self.vertices.len();
    self.links.clear();
    self.links.extend((0..size).map(|i| Link {
      prev: (i + size - 1) % size,
      next: (i + 1) % size,
      alive: true,
    }));
    self.head = 0;
    self.len = size;
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Number of slots ever handed out since the last reset.
  pub fn capacity(&self) -> usize {
    self.vertices.len()
  }

  pub fn contains(&self, slot: Slot) -> bool {
    self.links.get(slot).map_or(false, |link| link.alive)
  }

  pub fn vertex(&self, slot: Slot) -> &Vertex<T> {
    &self.vertices[slot]
  }

  pub fn prev(&self, slot: Slot) -> Slot {
    self.links[slot].prev
  }

  pub fn next(&self, slot: Slot) -> Slot {
    self.links[slot].next
  }

  pub fn head(&self) -> Option<Slot> {
    if self.is_empty() {
      None
    } else {
      Some(self.head)
    }
  }

  /// Slot at `position`, counted from the head and wrapped modulo the
  /// current length, so `-1` is the last vertex. O(n)
  pub fn slot_at(&self, position: isize) -> Option<Slot> {
    let head = self.head()?;
    let len = self.len as isize;
    let wrapped = ((position % len) + len) % len;
    let mut slot = head;
    if wrapped <= len / 2 {
      for _ in 0..wrapped {
        slot = self.next(slot);
      }
    } else {
      for _ in wrapped..len {
        slot = self.prev(slot);
      }
    }
    Some(slot)
  }

  pub fn get(&self, position: isize) -> Option<&Vertex<T>> {
    self.slot_at(position).map(|slot| self.vertex(slot))
  }

  /// Unlink `slot`. Its former neighbours become adjacent, and the head moves
  /// forward if it was the head.
  pub fn remove(&mut self, slot: Slot) {
    debug_assert!(self.contains(slot), "slot {} is not in the list", slot);
    let Link { prev, next, .. } = self.links[slot];
    self.links[prev].next = next;
    self.links[next].prev = prev;
    self.links[slot].alive = false;
    if self.head == slot {
      self.head = next;
    }
    self.len -= 1;
  }

  /// Slots in list order, starting at the head.
  pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
    let mut at = self.head;
    std::iter::from_fn(move || {
      let this = at;
      at = self.links[at].next;
      Some(this)
    })
    .take(self.len)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
    self.slots().map(move |slot| self.vertex(slot))
  }
}
