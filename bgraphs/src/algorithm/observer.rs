use crate::graph::Node;
use log::{debug, trace};

/// Receives the progress of a search.
///
/// Every method does nothing by default. Observers cannot change the course
/// of the search.
pub trait ShortestPathObserver {
  fn notify_origin_processed(&mut self, _node: &Node) {}

  /// A node got a new, lower cost.
  fn notify_node_reached(&mut self, _node: &Node) {}

  /// A node got its final cost.
  fn notify_node_marked(&mut self, _node: &Node) {}

  fn notify_destination_reached(&mut self, _node: &Node) {}
}

impl ShortestPathObserver for () {}

impl<'a, O: ShortestPathObserver + ?Sized> ShortestPathObserver for &'a mut O {
  fn notify_origin_processed(&mut self, node: &Node) {
    (**self).notify_origin_processed(node)
  }

  fn notify_node_reached(&mut self, node: &Node) {
    (**self).notify_node_reached(node)
  }

  fn notify_node_marked(&mut self, node: &Node) {
    (**self).notify_node_marked(node)
  }

  fn notify_destination_reached(&mut self, node: &Node) {
    (**self).notify_destination_reached(node)
  }
}

impl<A: ShortestPathObserver, B: ShortestPathObserver> ShortestPathObserver for (A, B) {
  fn notify_origin_processed(&mut self, node: &Node) {
    self.0.notify_origin_processed(node);
    self.1.notify_origin_processed(node);
  }

  fn notify_node_reached(&mut self, node: &Node) {
    self.0.notify_node_reached(node);
    self.1.notify_node_reached(node);
  }

  fn notify_node_marked(&mut self, node: &Node) {
    self.0.notify_node_marked(node);
    self.1.notify_node_marked(node);
  }

  fn notify_destination_reached(&mut self, node: &Node) {
    self.0.notify_destination_reached(node);
    self.1.notify_destination_reached(node);
  }
}

/// Writes search events to the log.
#[derive(Default)]
pub struct LoggingObserver {
  marked: usize,
}

impl LoggingObserver {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of nodes marked since creation.
  pub fn marked(&self) -> usize {
    self.marked
  }
}

impl ShortestPathObserver for LoggingObserver {
  fn notify_origin_processed(&mut self, node: &Node) {
    debug!("Search starts from node {} at {:?}", node.id(), node.point());
  }

  fn notify_node_reached(&mut self, node: &Node) {
    trace!("Node {} reached", node.id());
  }

  fn notify_node_marked(&mut self, node: &Node) {
    self.marked += 1;
    trace!("Node {} marked", node.id());
  }

  fn notify_destination_reached(&mut self, node: &Node) {
    debug!("Destination {} reached after marking {} nodes", node.id(), self.marked);
  }
}
