use super::astar::astar;
use super::bellman_ford::bellman_ford;
use super::data::ShortestPathData;
use super::inspector::ArcInspector;
use super::observer::ShortestPathObserver;
use super::search::{dijkstra, SearchOutcome};
use super::solution::{reconstruct, ShortestPathSolution};
use super::AlgorithmError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
  Dijkstra,
  AStar,
  BellmanFord,
}

impl Algorithm {
  pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::BellmanFord];

  pub fn name(&self) -> &'static str {
    match self {
      Algorithm::Dijkstra => "dijkstra",
      Algorithm::AStar => "astar",
      Algorithm::BellmanFord => "bellman-ford",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Algorithm::ALL
      .iter()
      .find(|algorithm| algorithm.name() == s)
      .cloned()
      .ok_or_else(|| format!("unknown algorithm '{}'", s))
  }
}

/// Runs one algorithm on one routing problem.
///
/// A solver can be run any number of times, every run starts from scratch and
/// produces the same solution.
pub struct ShortestPathSolver<'g, I> {
  data: ShortestPathData<'g, I>,
  algorithm: Algorithm,
}

impl<'g, I: ArcInspector> ShortestPathSolver<'g, I> {
  pub fn new(data: ShortestPathData<'g, I>, algorithm: Algorithm) -> Self {
    Self {
      data: data,
      algorithm: algorithm,
    }
  }

  pub fn dijkstra(data: ShortestPathData<'g, I>) -> Self {
    Self::new(data, Algorithm::Dijkstra)
  }

  pub fn astar(data: ShortestPathData<'g, I>) -> Self {
    Self::new(data, Algorithm::AStar)
  }

  pub fn bellman_ford(data: ShortestPathData<'g, I>) -> Self {
    Self::new(data, Algorithm::BellmanFord)
  }

  pub fn data(&self) -> &ShortestPathData<'g, I> {
    &self.data
  }

  pub fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  pub fn run(&self) -> Result<ShortestPathSolution<'g>, AlgorithmError> {
    self.run_with(&mut ())
  }

  /// Runs the search, reporting its progress to `observer`.
  pub fn run_with<O: ShortestPathObserver + ?Sized>(
    &self,
    observer: &mut O,
  ) -> Result<ShortestPathSolution<'g>, AlgorithmError> {
    self.data.validate()?;
    debug!(
      "Running {} from {} to {} on {}",
      self.algorithm,
      self.data.origin(),
      self.data.destination(),
      self.data.graph()
    );

    let start = Instant::now();
    let outcome = self.search(observer)?;
    let solution = match reconstruct(&self.data, &outcome.labels)? {
      Some(path) => ShortestPathSolution::optimal(&self.data, path, outcome.visited),
      None => ShortestPathSolution::infeasible(&self.data, outcome.visited),
    };
    let solution = solution.with_solving_time(start.elapsed());

    debug!("{}: {}", self.algorithm, solution);
    Ok(solution)
  }

  fn search<O: ShortestPathObserver + ?Sized>(&self, observer: &mut O) -> Result<SearchOutcome, AlgorithmError> {
    match self.algorithm {
      Algorithm::Dijkstra => dijkstra(&self.data, observer),
      Algorithm::AStar => astar(&self.data, observer),
      Algorithm::BellmanFord => bellman_ford(&self.data, observer),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithm::{ArcFilter, Status};
  use crate::graph::{Graph, Node};
  use crate::test_utils::*;

  #[test]
  fn test_sample_route_with_every_algorithm() {
    let graph = square_graph();
    for algorithm in Algorithm::ALL.iter() {
      let data = ShortestPathData::new(&graph, 0, 3, ArcFilter::AllRoadsLength);
      let solution = ShortestPathSolver::new(data, *algorithm).run().unwrap();

      assert_eq!(solution.status(), Status::Optimal, "{}", algorithm);
      assert!((solution.cost() - 3000.0).abs() < 1e-9);
      let path = solution.path().unwrap();
      assert_eq!(
        path.arc_ids(),
        &[
          arc_between(&graph, 0, 1),
          arc_between(&graph, 1, 2),
          arc_between(&graph, 2, 3)
        ]
      );
      assert_consistent(&solution, &ShortestPathData::new(&graph, 0, 3, ArcFilter::AllRoadsLength));
    }
  }

  #[test]
  fn test_fastest_route_differs_from_shortest() {
    let graph = parallel_arcs_graph();

    let shortest = ShortestPathSolver::dijkstra(ShortestPathData::new(&graph, 0, 1, ArcFilter::AllRoadsLength))
      .run()
      .unwrap();
    let fastest = ShortestPathSolver::dijkstra(ShortestPathData::new(&graph, 0, 1, ArcFilter::AllRoadsTime))
      .run()
      .unwrap();

    assert!((shortest.cost() - 1000.0).abs() < 1e-9);
    assert!((fastest.cost() - 60.0).abs() < 1e-9);
    assert_ne!(shortest.path(), fastest.path());
  }

  #[test]
  fn test_origin_is_destination() {
    let graph = square_graph();
    for algorithm in Algorithm::ALL.iter() {
      let solver = ShortestPathSolver::new(ShortestPathData::new(&graph, 1, 1, ArcFilter::CarsTime), *algorithm);
      let solution = solver.run().unwrap();

      assert_eq!(solution.status(), Status::Optimal);
      assert_eq!(solution.cost(), 0.0);
      let path = solution.path().unwrap();
      assert_eq!(path.size(), 1);
      assert!(path.arc_ids().is_empty());
      assert_eq!(path.origin().map(Node::id), Some(1));
    }
  }

  #[test]
  fn test_infeasible() {
    let graph = square_graph();
    for algorithm in Algorithm::ALL.iter() {
      let solver = ShortestPathSolver::new(ShortestPathData::new(&graph, 3, 0, ArcFilter::AllRoadsLength), *algorithm);
      let solution = solver.run().unwrap();

      assert_eq!(solution.status(), Status::Infeasible);
      assert!(!solution.is_feasible());
      assert!(solution.path().is_none());
      assert_eq!(solution.visited_nodes(), 1);
    }
  }

  #[test]
  fn test_invalid_input() {
    let graph = square_graph();
    let mut observer = RecordingObserver::default();
    let solver = ShortestPathSolver::astar(ShortestPathData::new(&graph, 12, 0, ArcFilter::CarsLength));

    assert!(matches!(
      solver.run_with(&mut observer),
      Err(AlgorithmError::InvalidInput { origin: 12, destination: 0, .. })
    ));
    assert!(observer.events.is_empty());
  }

  #[test]
  fn test_rerun_gives_same_solution() {
    let graph = random_graph(3, 150, 600);
    for algorithm in Algorithm::ALL.iter() {
      let solver = ShortestPathSolver::new(ShortestPathData::new(&graph, 10, 140, ArcFilter::CarsTime), *algorithm);
      let first = solver.run().unwrap();
      let second = solver.run().unwrap();

      assert_eq!(first.status(), second.status());
      assert_eq!(first.path(), second.path());
      assert_eq!(first.cost(), second.cost());
      assert_eq!(first.visited_nodes(), second.visited_nodes());
    }
  }

  #[test]
  fn test_solutions_are_consistent_on_random_graphs() {
    for seed in 40..45 {
      let graph = random_graph(seed, 100, 400);
      for filter in ArcFilter::ALL.iter() {
        let costs: Vec<f64> = Algorithm::ALL
          .iter()
          .map(|algorithm| {
            let data = ShortestPathData::new(&graph, 1, 98, *filter);
            let solution = ShortestPathSolver::new(data, *algorithm).run().unwrap();
            if solution.is_feasible() {
              assert_consistent(&solution, &ShortestPathData::new(&graph, 1, 98, *filter));
            }
            solution.cost()
          })
          .collect();

        if costs[0].is_finite() {
          assert!((costs[0] - costs[1]).abs() < 1e-6, "seed {} {}", seed, filter);
          assert!((costs[0] - costs[2]).abs() < 1e-6, "seed {} {}", seed, filter);
        } else {
          assert!(costs.iter().all(|c| c.is_infinite()));
        }
      }
    }
  }

  #[test]
  fn test_observer_sees_every_marked_node() {
    let graph = random_graph(7, 60, 240);
    let solver = ShortestPathSolver::dijkstra(ShortestPathData::new(&graph, 0, 59, ArcFilter::AllRoadsTime));
    let mut observer = RecordingObserver::default();
    let solution = solver.run_with(&mut observer).unwrap();

    assert_eq!(observer.events.first(), Some(&Event::OriginProcessed(0)));
    assert_eq!(
      observer.count(|e| matches!(e, Event::NodeMarked(_))),
      solution.visited_nodes()
    );
    assert_eq!(
      observer.count(|e| matches!(e, Event::DestinationReached(_))),
      if solution.is_feasible() { 1 } else { 0 }
    );
  }

  #[test]
  fn test_algorithm_names() {
    for algorithm in Algorithm::ALL.iter() {
      assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(*algorithm));
    }
    assert!("floyd".parse::<Algorithm>().is_err());
  }

  fn assert_sync<T: Sync + Send>() {}

  #[test]
  fn test_solvers_share_graph_across_threads() {
    assert_sync::<Graph>();

    let graph = random_graph(11, 200, 800);
    let costs: Vec<f64> = std::thread::scope(|scope| {
      let handles: Vec<_> = Algorithm::ALL
        .iter()
        .map(|algorithm| {
          let graph = &graph;
          scope.spawn(move || {
            let data = ShortestPathData::new(graph, 0, 199, ArcFilter::AllRoadsLength);
            ShortestPathSolver::new(data, *algorithm).run().unwrap().cost()
          })
        })
        .collect();
      handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(costs.len(), 3);
    assert!(costs[0].is_finite());
    assert!(costs.iter().all(|cost| (cost - costs[0]).abs() < 1e-6), "{:?}", costs);
  }
}
