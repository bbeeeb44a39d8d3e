use super::priority_queue::Indexed;
use crate::graph::{Idx, Node};
use std::cmp::Ordering;

/// Search state of one node.
///
/// The cost only decreases until the label is settled, then it is final.
/// An estimate, when present, is fixed at creation and added to the cost to
/// order labels in the queue.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
  node: Idx,
  cost: f64,
  predecessor: Option<Idx>,
  settled: bool,
  estimate: Option<f64>,
}

impl Label {
  pub fn new(node: Idx) -> Self {
    Self {
      node: node,
      cost: f64::INFINITY,
      predecessor: None,
      settled: false,
      estimate: None,
    }
  }

  pub fn with_estimate(node: Idx, estimate: f64) -> Self {
    Self {
      estimate: Some(estimate),
      ..Self::new(node)
    }
  }

  pub fn node(&self) -> Idx {
    self.node
  }

  pub fn cost(&self) -> f64 {
    self.cost
  }

  /// Arc through which the current cost was reached.
  pub fn predecessor(&self) -> Option<Idx> {
    self.predecessor
  }

  pub fn is_settled(&self) -> bool {
    self.settled
  }

  pub fn estimate(&self) -> Option<f64> {
    self.estimate
  }

  /// Ordering key: cost, plus the estimate if any.
  pub fn key(&self) -> f64 {
    self.cost + self.estimate.unwrap_or(0.0)
  }

  pub(crate) fn start(&mut self) {
    self.cost = 0.0;
    self.predecessor = None;
  }

  pub(crate) fn update(&mut self, cost: f64, predecessor: Idx) {
    debug_assert!(!self.settled, "settled label {} updated", self.node);
    self.cost = cost;
    self.predecessor = Some(predecessor);
  }

  pub(crate) fn settle(&mut self) {
    self.settled = true;
  }

  /// Snapshot of the label as queued.
  pub(crate) fn entry(&self) -> QueueEntry {
    QueueEntry {
      key: self.key(),
      estimate: self.estimate.unwrap_or(0.0),
      node: self.node,
    }
  }
}

/// Creates the labels of a search, one per node.
pub trait LabelFactory {
  fn create(&self, node: &Node) -> Label;
}

/// Labels ordered by cost alone.
pub struct PlainLabels;

impl LabelFactory for PlainLabels {
  fn create(&self, node: &Node) -> Label {
    Label::new(node.id())
  }
}

/// Queue element of a label.
///
/// Entries compare by key with a total order on floats. On equal keys the
/// smaller estimate goes first, i.e. the label furthest along its path, then
/// the smaller node id, so the order never depends on insertion history.
#[derive(Copy, Clone, Debug)]
pub(crate) struct QueueEntry {
  key: f64,
  estimate: f64,
  node: Idx,
}

impl QueueEntry {
  pub fn node(&self) -> Idx {
    self.node
  }
}

impl Ord for QueueEntry {
  fn cmp(&self, other: &Self) -> Ordering {
    self
      .key
      .total_cmp(&other.key)
      .then_with(|| self.estimate.total_cmp(&other.estimate))
      .then_with(|| self.node.cmp(&other.node))
  }
}

impl PartialOrd for QueueEntry {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for QueueEntry {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for QueueEntry {}

impl Indexed for QueueEntry {
  fn as_index(&self) -> usize {
    self.node as usize
  }
}
