use crate::algorithm::*;
use crate::graph::*;
use crate::spatial::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn road(max_speed: u16) -> RoadInformation {
  RoadInformation::new(AccessRestrictions::all(), true, max_speed)
}

pub fn graph_from_edges(positions: Vec<Position>, edges: Vec<(Idx, Idx, f64, RoadInformation)>) -> Graph {
  let mut builder = GraphBuilder::new("test", "test");
  for p in positions {
    builder.add_node(p);
  }
  for (from, to, length, road) in edges {
    builder.add_arc(from, to, length, road).unwrap();
  }
  builder.build().unwrap()
}

// Sample network, all roads are one-way and open to everybody:
//
//   A ──1 km──► B ──1 km──► C ──1 km──► D
//   └──────────5 km────────►┘
//
pub fn square_graph() -> Graph {
  graph_from_edges(
    vec![
      Position::from((1.4400, 43.5600)),
      Position::from((1.4401, 43.5600)),
      Position::from((1.4401, 43.5601)),
      Position::from((1.4400, 43.5601)),
    ],
    vec![
      (0, 1, 1000.0, road(36)),
      (1, 2, 1000.0, road(72)),
      (0, 2, 5000.0, road(90)),
      (2, 3, 1000.0, road(50)),
    ],
  )
}

/// Two nodes linked by a short slow road and a longer fast road.
pub fn parallel_arcs_graph() -> Graph {
  graph_from_edges(
    vec![Position::from((1.44, 43.56)), Position::from((1.45, 43.56))],
    vec![(0, 1, 1000.0, road(30)), (0, 1, 1500.0, road(90))],
  )
}

pub fn arc_between(graph: &Graph, from: Idx, to: Idx) -> Idx {
  graph
    .successors(from)
    .iter()
    .find(|arc| arc.destination() == to)
    .map(Arc::id)
    .unwrap()
}

/// Random network whose arcs are never shorter than the straight line between
/// their ends, so straight-line estimates stay admissible.
pub fn random_graph(seed: u64, num_nodes: usize, num_edges: usize) -> Graph {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut builder = GraphBuilder::new("random", &format!("random-{}", seed));

  let points: Vec<Position> = (0..num_nodes)
    .map(|_| Position::from((rng.gen_range(1.40..1.50), rng.gen_range(43.55..43.62))))
    .collect();
  for p in &points {
    builder.add_node(*p);
  }

  let accesses = [
    AccessRestrictions::all(),
    AccessRestrictions::allowing(&[AccessMode::Motorcar, AccessMode::HeavyGoods]),
    AccessRestrictions::allowing(&[AccessMode::Foot, AccessMode::Bicycle]),
  ];
  let speeds = [30, 50, 70, 90, 110, 130];

  for _ in 0..num_edges {
    let from = rng.gen_range(0..num_nodes);
    let to = rng.gen_range(0..num_nodes);
    let length = distance(&points[from], &points[to]) * rng.gen_range(1.0..1.5);
    let road = RoadInformation::new(
      accesses[rng.gen_range(0..accesses.len())],
      rng.gen_bool(0.3),
      speeds[rng.gen_range(0..speeds.len())],
    );
    builder.add_arc(from as Idx, to as Idx, length, road).unwrap();
  }
  builder.build().unwrap()
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Event {
  OriginProcessed(Idx),
  NodeReached(Idx),
  NodeMarked(Idx),
  DestinationReached(Idx),
}

#[derive(Default)]
pub struct RecordingObserver {
  pub events: Vec<Event>,
}

impl RecordingObserver {
  pub fn count<F: Fn(&Event) -> bool>(&self, filter: F) -> usize {
    self.events.iter().filter(|e| filter(*e)).count()
  }
}

impl ShortestPathObserver for RecordingObserver {
  fn notify_origin_processed(&mut self, node: &Node) {
    self.events.push(Event::OriginProcessed(node.id()));
  }

  fn notify_node_reached(&mut self, node: &Node) {
    self.events.push(Event::NodeReached(node.id()));
  }

  fn notify_node_marked(&mut self, node: &Node) {
    self.events.push(Event::NodeMarked(node.id()));
  }

  fn notify_destination_reached(&mut self, node: &Node) {
    self.events.push(Event::DestinationReached(node.id()));
  }
}

/// Checks the path of a feasible solution against the reported cost.
pub fn assert_consistent<I: ArcInspector>(solution: &ShortestPathSolution, data: &ShortestPathData<I>) {
  let path = solution.path().expect("feasible solution without path");
  assert!(path.is_valid());
  assert_eq!(path.origin().map(Node::id), Some(data.origin()));
  assert_eq!(path.destination().map(Node::id), Some(data.destination()));
  assert!(path.arcs().all(|arc| data.is_allowed(arc)));

  let cost: f64 = path.arcs().map(|arc| data.cost(arc)).sum();
  assert!(
    (cost - solution.cost()).abs() < 1e-3,
    "path cost {} differs from solution cost {}",
    cost,
    solution.cost()
  );
}
