use super::road::RoadInformation;
use crate::spatial::{BoundingBox, NodeIndex, Position};
use std::fmt;
use std::ops::Range;

/// Identifier of a node or an arc. Ids are dense indices starting at 0.
pub type Idx = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
  id: Idx,
  point: Position,
}

impl Node {
  pub(super) fn new(id: Idx, point: Position) -> Self {
    Self {
      id: id,
      point: point,
    }
  }

  pub fn id(&self) -> Idx {
    self.id
  }

  pub fn point(&self) -> Position {
    self.point
  }
}

/// Directed traversal of a road from `origin` to `destination`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
  id: Idx,
  origin: Idx,
  destination: Idx,
  length: f64,
  road: RoadInformation,
}

impl Arc {
  pub(super) fn new(id: Idx, origin: Idx, destination: Idx, length: f64, road: RoadInformation) -> Self {
    Self {
      id: id,
      origin: origin,
      destination: destination,
      length: length,
      road: road,
    }
  }

  pub fn id(&self) -> Idx {
    self.id
  }

  pub fn origin(&self) -> Idx {
    self.origin
  }

  pub fn destination(&self) -> Idx {
    self.destination
  }

  /// Length in meters.
  pub fn length(&self) -> f64 {
    self.length
  }

  pub fn road_information(&self) -> &RoadInformation {
    &self.road
  }

  /// Seconds needed to travel the arc at `speed` km/h.
  pub fn travel_time(&self, speed: f64) -> f64 {
    self.length * 3600.0 / (speed * 1000.0)
  }

  /// Seconds needed to travel the arc at the road speed limit.
  pub fn minimum_travel_time(&self) -> f64 {
    self.travel_time(self.road.max_speed as f64)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphStatistics {
  pub node_count: usize,
  pub arc_count: usize,
  /// Highest speed limit of any arc in the graph, in km/h. Zero for a graph without arcs.
  pub maximum_speed: u16,
  pub bounding_box: Option<BoundingBox>,
}

/// Immutable road network.
///
/// Arcs are grouped by origin in one array, `offsets[n]..offsets[n + 1]` is
/// the range of successors of node `n`.
pub struct Graph {
  map_id: String,
  map_name: String,
  nodes: Vec<Node>,
  // One entry per node plus a sentinel, so that `offsets[n + 1]` is always valid.
  offsets: Vec<Idx>,
  arcs: Vec<Arc>,
  statistics: GraphStatistics,
  index: NodeIndex,
}

impl Graph {
  pub(super) fn from_parts(
    map_id: String,
    map_name: String,
    nodes: Vec<Node>,
    offsets: Vec<Idx>,
    arcs: Vec<Arc>,
    statistics: GraphStatistics,
  ) -> Self {
    let index = NodeIndex::new(nodes.iter().map(|n| (n.id, n.point)));
    Self {
      map_id: map_id,
      map_name: map_name,
      nodes: nodes,
      offsets: offsets,
      arcs: arcs,
      statistics: statistics,
      index: index,
    }
  }

  pub fn map_id(&self) -> &str {
    &self.map_id
  }

  pub fn map_name(&self) -> &str {
    &self.map_name
  }

  /// Number of nodes.
  pub fn size(&self) -> usize {
    self.nodes.len()
  }

  pub fn contains(&self, node_id: Idx) -> bool {
    (node_id as usize) < self.nodes.len()
  }

  pub fn get(&self, node_id: Idx) -> Option<&Node> {
    self.nodes.get(node_id as usize)
  }

  /// Panics if `node_id` is not a node of this graph.
  pub fn node(&self, node_id: Idx) -> &Node {
    &self.nodes[node_id as usize]
  }

  /// Panics if `arc_id` is not an arc of this graph.
  pub fn arc(&self, arc_id: Idx) -> &Arc {
    &self.arcs[arc_id as usize]
  }

  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  pub fn arcs(&self) -> &[Arc] {
    &self.arcs
  }

  /// Outgoing arcs of a node in insertion order.
  pub fn successors(&self, node_id: Idx) -> &[Arc] {
    &self.arcs[self.successor_range(node_id)]
  }

  fn successor_range(&self, node_id: Idx) -> Range<usize> {
    let start = self.offsets[node_id as usize] as usize;
    let end = self.offsets[node_id as usize + 1] as usize;
    start..end
  }

  pub fn statistics(&self) -> &GraphStatistics {
    &self.statistics
  }

  /// Closest node to a position, `None` for an empty graph.
  pub fn nearest_node(&self, position: &Position) -> Option<Idx> {
    self.index.nearest(position)
  }
}

impl fmt::Display for Graph {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Graph[id={}, name={}, #nodes={}, #arcs={}]",
      self.map_id,
      self.map_name,
      self.size(),
      self.arcs.len()
    )
  }
}

impl fmt::Debug for Graph {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
