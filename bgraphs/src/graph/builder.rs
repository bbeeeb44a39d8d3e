use super::graph::*;
use super::road::RoadInformation;
use crate::spatial::{bounding_box, Position};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
  #[error("node {0} does not exist")]
  UnknownNode(Idx),
  #[error("arc {origin} -> {destination} has invalid length {length}")]
  InvalidLength {
    origin: Idx,
    destination: Idx,
    length: f64,
  },
  #[error("arc {origin} -> {destination} has no speed limit")]
  MissingSpeedLimit { origin: Idx, destination: Idx },
  #[error("{0} arcs do not fit into 32-bit identifiers")]
  TooManyArcs(usize),
}

struct PendingArc {
  origin: Idx,
  destination: Idx,
  length: f64,
  road: RoadInformation,
}

/// Collects nodes and roads, then lays them out into an immutable [`Graph`].
pub struct GraphBuilder {
  map_id: String,
  map_name: String,
  points: Vec<Position>,
  arcs: Vec<PendingArc>,
}

impl GraphBuilder {
  pub fn new(map_id: &str, map_name: &str) -> Self {
    Self {
      map_id: map_id.to_string(),
      map_name: map_name.to_string(),
      points: Vec::new(),
      arcs: Vec::new(),
    }
  }

  pub fn add_node(&mut self, point: Position) -> Idx {
    self.points.push(point);
    (self.points.len() - 1) as Idx
  }

  /// Adds a road between two nodes. Unless the road is one-way, the arc in the
  /// opposite direction is added as well and shares the same road information.
  pub fn add_arc(
    &mut self,
    origin: Idx,
    destination: Idx,
    length: f64,
    road: RoadInformation,
  ) -> Result<&mut Self, GraphError> {
    for id in &[origin, destination] {
      if *id as usize >= self.points.len() {
        return Err(GraphError::UnknownNode(*id));
      }
    }
    if !length.is_finite() || length < 0.0 {
      return Err(GraphError::InvalidLength {
        origin: origin,
        destination: destination,
        length: length,
      });
    }
    if road.max_speed == 0 {
      return Err(GraphError::MissingSpeedLimit {
        origin: origin,
        destination: destination,
      });
    }

    self.arcs.push(PendingArc {
      origin: origin,
      destination: destination,
      length: length,
      road: road,
    });
    if !road.one_way {
      self.arcs.push(PendingArc {
        origin: destination,
        destination: origin,
        length: length,
        road: road,
      });
    }
    Ok(self)
  }

  pub fn number_of_nodes(&self) -> usize {
    self.points.len()
  }

  pub fn build(self) -> Result<Graph, GraphError> {
    let num_nodes = self.points.len();
    let mut pending = self.arcs;
    if pending.len() > Idx::MAX as usize {
      return Err(GraphError::TooManyArcs(pending.len()));
    }

    // Stable sort keeps the insertion order among the successors of a node.
    pending.sort_by_key(|arc| arc.origin);

    // Count successors in `offsets[n + 1]`, then turn counts into global offsets.
    let mut offsets: Vec<Idx> = vec![0; num_nodes + 1];
    for arc in &pending {
      offsets[arc.origin as usize + 1] += 1;
    }
    for n in 0..num_nodes {
      offsets[n + 1] += offsets[n];
    }

    let arcs: Vec<Arc> = pending
      .into_iter()
      .enumerate()
      .map(|(id, arc)| Arc::new(id as Idx, arc.origin, arc.destination, arc.length, arc.road))
      .collect();

    let statistics = GraphStatistics {
      node_count: num_nodes,
      arc_count: arcs.len(),
      maximum_speed: arcs
        .iter()
        .map(|arc| arc.road_information().max_speed)
        .max()
        .unwrap_or(0),
      bounding_box: bounding_box(self.points.iter().cloned()),
    };

    let nodes = self
      .points
      .into_iter()
      .enumerate()
      .map(|(id, point)| Node::new(id as Idx, point))
      .collect();

    Ok(Graph::from_parts(
      self.map_id,
      self.map_name,
      nodes,
      offsets,
      arcs,
      statistics,
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::super::{AccessRestrictions, RoadInformation};
  use super::*;
  use std::collections::HashSet;

  fn points(builder: &mut GraphBuilder, count: usize) -> Vec<Idx> {
    (0..count)
      .map(|i| builder.add_node(Position::from((i as f64 * 0.01, 0.0))))
      .collect()
  }

  #[test]
  fn test_two_way_roads_add_reverse_arcs() {
    let mut builder = GraphBuilder::new("test", "two-way");
    let ids = points(&mut builder, 3);
    builder
      .add_arc(ids[0], ids[1], 10.0, RoadInformation::new(AccessRestrictions::all(), false, 50))
      .unwrap()
      .add_arc(ids[1], ids[2], 20.0, RoadInformation::new(AccessRestrictions::all(), true, 90))
      .unwrap();
    let graph = builder.build().unwrap();

    assert_eq!(graph.statistics().node_count, 3);
    assert_eq!(graph.statistics().arc_count, 3);
    assert_eq!(graph.statistics().maximum_speed, 90);

    let out_1: HashSet<_> = graph.successors(ids[1]).iter().map(|a| a.destination()).collect();
    assert_eq!(out_1, [ids[0], ids[2]].iter().cloned().collect());
    assert!(graph.successors(ids[2]).is_empty());
  }

  #[test]
  fn test_rejects_invalid_input() {
    let mut builder = GraphBuilder::new("test", "invalid");
    let ids = points(&mut builder, 2);
    let road = RoadInformation::new(AccessRestrictions::all(), true, 50);

    assert_eq!(
      builder.add_arc(ids[0], 7, 10.0, road).err(),
      Some(GraphError::UnknownNode(7))
    );
    assert!(matches!(
      builder.add_arc(ids[0], ids[1], -1.0, road),
      Err(GraphError::InvalidLength { .. })
    ));
    assert!(matches!(
      builder.add_arc(ids[0], ids[1], f64::NAN, road),
      Err(GraphError::InvalidLength { .. })
    ));
    assert_eq!(
      builder
        .add_arc(ids[0], ids[1], 10.0, RoadInformation::new(AccessRestrictions::all(), true, 0))
        .err(),
      Some(GraphError::MissingSpeedLimit {
        origin: ids[0],
        destination: ids[1]
      })
    );
  }

  #[test]
  fn test_empty_graph() {
    let graph = GraphBuilder::new("empty", "empty").build().unwrap();
    assert_eq!(graph.size(), 0);
    assert_eq!(graph.statistics().maximum_speed, 0);
    assert!(graph.statistics().bounding_box.is_none());
    assert_eq!(graph.nearest_node(&Position::from((0.0, 0.0))), None);
  }
}
