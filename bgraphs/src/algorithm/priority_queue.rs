use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QueueError {
  #[error("priority queue is empty")]
  EmptyQueue,
  #[error("element is not in the priority queue")]
  ElementNotFound,
}

/// Identity of a queued element.
///
/// Two elements with the same index are the same element, whatever their
/// ordering key. Indices should be dense: the heap keeps a slot per index.
pub trait Indexed {
  fn as_index(&self) -> usize;
}

/// Min-priority queue.
pub trait PriorityQueue<E> {
  fn is_empty(&self) -> bool;

  fn len(&self) -> usize;

  fn insert(&mut self, element: E);

  /// Removes an arbitrary element, typically to re-insert it with a new key.
  fn remove(&mut self, element: &E) -> Result<(), QueueError>;

  fn find_min(&self) -> Result<&E, QueueError>;

  fn delete_min(&mut self) -> Result<E, QueueError>;
}

/// Array-based binary min-heap with an index of element positions, so that
/// [`PriorityQueue::remove`] does not need to scan the array.
pub struct BinaryHeap<E> {
  items: Vec<E>,
  // Position in `items` of every queued element, by `Indexed::as_index`.
  positions: Vec<Option<usize>>,
}

impl<E: Ord + Indexed> BinaryHeap<E> {
  pub fn new() -> Self {
    Self {
      items: Vec::new(),
      positions: Vec::new(),
    }
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      items: Vec::with_capacity(capacity),
      positions: vec![None; capacity],
    }
  }

  pub fn contains(&self, element: &E) -> bool {
    self.position(element).is_some()
  }

  pub fn clear(&mut self) {
    for item in &self.items {
      self.positions[item.as_index()] = None;
    }
    self.items.clear();
  }

  fn position(&self, element: &E) -> Option<usize> {
    self.positions.get(element.as_index()).cloned().flatten()
  }

  fn place(&mut self, position: usize) {
    let index = self.items[position].as_index();
    self.positions[index] = Some(position);
  }

  fn swap(&mut self, a: usize, b: usize) {
    self.items.swap(a, b);
    self.place(a);
    self.place(b);
  }

  fn sift_up(&mut self, mut position: usize) {
    while position > 0 {
      let parent = (position - 1) / 2;
      if self.items[position] >= self.items[parent] {
        break;
      }
      self.swap(position, parent);
      position = parent;
    }
  }

  fn sift_down(&mut self, mut position: usize) {
    loop {
      let left = 2 * position + 1;
      let right = left + 1;
      let mut smallest = position;
      if left < self.items.len() && self.items[left] < self.items[smallest] {
        smallest = left;
      }
      if right < self.items.len() && self.items[right] < self.items[smallest] {
        smallest = right;
      }
      if smallest == position {
        break;
      }
      self.swap(position, smallest);
      position = smallest;
    }
  }

  fn take(&mut self, position: usize) -> E {
    let element = self.items.swap_remove(position);
    self.positions[element.as_index()] = None;

    // The last element moved into the hole, it may belong above or below.
    if position < self.items.len() {
      self.place(position);
      self.sift_down(position);
      self.sift_up(position);
    }
    element
  }
}

impl<E: Ord + Indexed> Default for BinaryHeap<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Ord + Indexed> PriorityQueue<E> for BinaryHeap<E> {
  fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  fn len(&self) -> usize {
    self.items.len()
  }

  fn insert(&mut self, element: E) {
    let index = element.as_index();
    debug_assert!(!self.contains(&element), "element {} is already queued", index);
    if index >= self.positions.len() {
      self.positions.resize(index + 1, None);
    }
    self.items.push(element);
    self.place(self.items.len() - 1);
    self.sift_up(self.items.len() - 1);
  }

  fn remove(&mut self, element: &E) -> Result<(), QueueError> {
    let position = self.position(element).ok_or(QueueError::ElementNotFound)?;
    self.take(position);
    Ok(())
  }

  fn find_min(&self) -> Result<&E, QueueError> {
    self.items.first().ok_or(QueueError::EmptyQueue)
  }

  fn delete_min(&mut self) -> Result<E, QueueError> {
    if self.items.is_empty() {
      return Err(QueueError::EmptyQueue);
    }
    Ok(self.take(0))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::seq::SliceRandom;
  use rand::SeedableRng;

  #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
  struct Item {
    key: i32,
    id: usize,
  }

  impl Indexed for Item {
    fn as_index(&self) -> usize {
      self.id
    }
  }

  fn items(keys: &[i32]) -> Vec<Item> {
    keys.iter().enumerate().map(|(id, key)| Item { key: *key, id: id }).collect()
  }

  fn drain(heap: &mut BinaryHeap<Item>) -> Vec<i32> {
    let mut keys = Vec::new();
    while let Ok(item) = heap.delete_min() {
      keys.push(item.key);
    }
    keys
  }

  #[test]
  fn test_empty_queue() {
    let mut heap = BinaryHeap::<Item>::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.find_min().err(), Some(QueueError::EmptyQueue));
    assert_eq!(heap.delete_min().err(), Some(QueueError::EmptyQueue));
    assert_eq!(heap.remove(&Item { key: 1, id: 0 }).err(), Some(QueueError::ElementNotFound));
  }

  #[test]
  fn test_delete_min_returns_sorted_elements() {
    let mut keys: Vec<i32> = (0..200).map(|k| (k * 37) % 101 - 50).collect();
    let mut rng = StdRng::seed_from_u64(17);
    keys.shuffle(&mut rng);

    let mut heap = BinaryHeap::new();
    for item in items(&keys) {
      heap.insert(item);
    }
    assert_eq!(heap.len(), keys.len());
    assert_eq!(heap.find_min().map(|i| i.key), Ok(-50));

    keys.sort();
    assert_eq!(drain(&mut heap), keys);
    assert!(heap.is_empty());
  }

  #[test]
  fn test_remove_arbitrary_elements() {
    let all = items(&[8, 3, 5, 1, 9, 4, 7]);
    let mut heap = BinaryHeap::new();
    for item in &all {
      heap.insert(*item);
    }

    assert_eq!(heap.remove(&all[1]), Ok(()));
    assert_eq!(heap.remove(&all[3]), Ok(()));
    assert_eq!(heap.remove(&all[3]).err(), Some(QueueError::ElementNotFound));
    assert!(!heap.contains(&all[1]));
    assert!(heap.contains(&all[0]));

    assert_eq!(drain(&mut heap), vec![4, 5, 7, 8, 9]);
  }

  #[test]
  fn test_remove_then_insert_updates_key() {
    let all = items(&[10, 20, 30, 40]);
    let mut heap = BinaryHeap::new();
    for item in &all {
      heap.insert(*item);
    }

    heap.remove(&all[3]).unwrap();
    heap.insert(Item { key: 5, id: 3 });
    heap.remove(&all[0]).unwrap();
    heap.insert(Item { key: 35, id: 0 });

    let order: Vec<usize> = std::iter::from_fn(|| heap.delete_min().ok()).map(|i| i.id).collect();
    assert_eq!(order, vec![3, 1, 2, 0]);
  }

  #[test]
  fn test_clear_and_reuse() {
    let all = items(&[2, 1]);
    let mut heap = BinaryHeap::with_capacity(2);
    assert!(heap.items.capacity() >= 2);
    heap.insert(all[0]);
    heap.insert(all[1]);
    heap.clear();

    assert!(heap.is_empty());
    assert!(!heap.contains(&all[0]));
    heap.insert(all[0]);
    assert_eq!(heap.find_min(), Ok(&all[0]));
  }
}
