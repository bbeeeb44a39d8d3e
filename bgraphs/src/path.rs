//! Paths over a road network.
//!
//! A path is a list of arcs rather than a list of nodes, since the graph may
//! hold several parallel arcs between the same two nodes.

use crate::graph::{Arc, Graph, Idx, Node};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
  #[error("node {0} does not exist")]
  UnknownNode(Idx),
  #[error("node {from} is not connected to node {to}")]
  Disconnected { from: Idx, to: Idx },
  #[error("cannot concatenate an empty list of paths")]
  NothingToConcatenate,
  #[error("cannot concatenate paths from different graphs")]
  DifferentGraphs,
  #[error("arcs do not form a single path")]
  Invalid,
}

#[derive(Clone)]
pub struct Path<'g> {
  graph: &'g Graph,
  origin: Option<Idx>,
  arcs: Vec<Idx>,
}

impl<'g> Path<'g> {
  /// Path without any node.
  pub fn empty(graph: &'g Graph) -> Self {
    Self {
      graph: graph,
      origin: None,
      arcs: Vec::new(),
    }
  }

  /// Path made of one node and no arc.
  pub fn single(graph: &'g Graph, node: Idx) -> Self {
    Self {
      graph: graph,
      origin: Some(node),
      arcs: Vec::new(),
    }
  }

  /// Path following the given arcs. The chain of arcs is not checked, see [`Path::is_valid`].
  ///
  /// Panics if an arc id is not an arc of `graph`.
  pub fn new(graph: &'g Graph, arcs: Vec<Idx>) -> Self {
    Self {
      graph: graph,
      origin: arcs.first().map(|id| graph.arc(*id).origin()),
      arcs: arcs,
    }
  }

  /// Path through `nodes` picking the fastest arc between consecutive nodes.
  pub fn create_fastest_path_from_nodes(graph: &'g Graph, nodes: &[Idx]) -> Result<Self, PathError> {
    Self::from_nodes(graph, nodes, Arc::minimum_travel_time)
  }

  /// Path through `nodes` picking the shortest arc between consecutive nodes.
  pub fn create_shortest_path_from_nodes(graph: &'g Graph, nodes: &[Idx]) -> Result<Self, PathError> {
    Self::from_nodes(graph, nodes, Arc::length)
  }

  fn from_nodes<F: Fn(&Arc) -> f64>(graph: &'g Graph, nodes: &[Idx], measure: F) -> Result<Self, PathError> {
    if let Some(unknown) = nodes.iter().find(|id| !graph.contains(**id)) {
      return Err(PathError::UnknownNode(*unknown));
    }
    match nodes {
      [] => return Ok(Self::empty(graph)),
      [single] => return Ok(Self::single(graph, *single)),
      _ => (),
    }

    let mut arcs = Vec::with_capacity(nodes.len() - 1);
    for pair in nodes.windows(2) {
      let best = graph
        .successors(pair[0])
        .iter()
        .filter(|arc| arc.destination() == pair[1])
        .min_by(|a, b| measure(*a).total_cmp(&measure(*b)))
        .ok_or(PathError::Disconnected {
          from: pair[0],
          to: pair[1],
        })?;
      arcs.push(best.id());
    }
    Ok(Self::new(graph, arcs))
  }

  /// Joins paths end to end.
  pub fn concatenate(paths: &[Path<'g>]) -> Result<Self, PathError> {
    let first = paths.first().ok_or(PathError::NothingToConcatenate)?;
    if paths.iter().any(|p| !std::ptr::eq(p.graph, first.graph)) {
      return Err(PathError::DifferentGraphs);
    }

    let mut result = Self::empty(first.graph);
    for path in paths.iter().filter(|p| !p.is_empty()) {
      match result.destination() {
        Some(end) if Some(end.id()) != path.origin => return Err(PathError::Invalid),
        Some(_) => (),
        None => result.origin = path.origin,
      }
      result.arcs.extend_from_slice(&path.arcs);
    }

    if result.is_valid() {
      Ok(result)
    } else {
      Err(PathError::Invalid)
    }
  }

  pub fn graph(&self) -> &'g Graph {
    self.graph
  }

  pub fn origin(&self) -> Option<&'g Node> {
    self.origin.map(|id| self.graph.node(id))
  }

  /// Last node of the path, the origin for a single-node path.
  pub fn destination(&self) -> Option<&'g Node> {
    match self.arcs.last() {
      Some(id) => Some(self.graph.node(self.graph.arc(*id).destination())),
      None => self.origin(),
    }
  }

  pub fn arcs(&self) -> impl Iterator<Item = &'g Arc> + '_ {
    let graph = self.graph;
    self.arcs.iter().map(move |id| graph.arc(*id))
  }

  pub fn arc_ids(&self) -> &[Idx] {
    &self.arcs
  }

  /// Nodes visited by the path, in order.
  pub fn nodes(&self) -> Vec<Idx> {
    self
      .origin
      .into_iter()
      .chain(self.arcs().map(|arc| arc.destination()))
      .collect()
  }

  pub fn is_empty(&self) -> bool {
    self.origin.is_none()
  }

  /// Number of nodes.
  pub fn size(&self) -> usize {
    if self.is_empty() {
      0
    } else {
      1 + self.arcs.len()
    }
  }

  /// A path is valid if it is empty, has a single node, or its first arc
  /// leaves the origin and every arc starts where the previous one ends.
  pub fn is_valid(&self) -> bool {
    let origin = match self.origin {
      None => return self.arcs.is_empty(),
      Some(origin) => origin,
    };

    let mut current = origin;
    for arc in self.arcs() {
      if arc.origin() != current {
        return false;
      }
      current = arc.destination();
    }
    true
  }

  /// Total length in meters.
  pub fn length(&self) -> f64 {
    self.arcs().map(Arc::length).sum()
  }

  /// Seconds needed to travel the path at `speed` km/h.
  pub fn travel_time(&self, speed: f64) -> f64 {
    self.arcs().map(|arc| arc.travel_time(speed)).sum()
  }

  /// Seconds needed to travel the path at the speed limit of every arc.
  pub fn minimum_travel_time(&self) -> f64 {
    self.arcs().map(Arc::minimum_travel_time).sum()
  }
}

impl<'g> PartialEq for Path<'g> {
  fn eq(&self, other: &Self) -> bool {
    std::ptr::eq(self.graph, other.graph) && self.origin == other.origin && self.arcs == other.arcs
  }
}

impl<'g> fmt::Debug for Path<'g> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Path{:?}", self.nodes())
  }
}
