use bgraphs::algorithm::{Algorithm, AlgorithmError, ArcFilter, ShortestPathData, ShortestPathSolution, ShortestPathSolver};
use bgraphs::graph::{Graph, Idx};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

const COST_TOLERANCE: f64 = 1e-6;

/// Random origin/destination pairs, origin and destination may coincide.
pub fn random_pairs(graph: &Graph, count: usize, seed: u64) -> Vec<(Idx, Idx)> {
  let mut rng = StdRng::seed_from_u64(seed);
  if graph.size() == 0 {
    return Vec::new();
  }
  (0..count)
    .map(|_| {
      (
        rng.gen_range(0..graph.size()) as Idx,
        rng.gen_range(0..graph.size()) as Idx,
      )
    })
    .collect()
}

#[derive(Debug, Serialize)]
pub struct AlgorithmReport {
  pub algorithm: Algorithm,
  pub runs: usize,
  pub feasible: usize,
  pub average_time_ms: f64,
  pub average_visited_nodes: f64,
}

#[derive(Debug, Serialize)]
pub struct ScenarioReport {
  pub graph: String,
  pub filter: ArcFilter,
  pub scenarios: usize,
  /// Scenarios where an algorithm disagreed with the first one.
  pub mismatches: usize,
  /// Solutions whose path does not check out.
  pub invalid: usize,
  pub algorithms: Vec<AlgorithmReport>,
}

impl ScenarioReport {
  pub fn is_success(&self) -> bool {
    self.mismatches == 0 && self.invalid == 0
  }
}

impl fmt::Display for ScenarioReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{} scenarios on {}", self.scenarios, self.graph)?;
    writeln!(f, "Profile: {} ({})", self.filter, self.filter.description())?;
    for report in &self.algorithms {
      writeln!(
        f,
        "  {:<14} {:>4}/{:<4} feasible, {:>9.3} ms, {:>9.1} visited nodes",
        report.algorithm.to_string(),
        report.feasible,
        report.runs,
        report.average_time_ms,
        report.average_visited_nodes
      )?;
    }
    write!(f, "Mismatches: {}, invalid paths: {}", self.mismatches, self.invalid)
  }
}

#[derive(Default)]
struct Totals {
  runs: usize,
  feasible: usize,
  time_ms: f64,
  visited: usize,
}

fn is_valid(solution: &ShortestPathSolution, data: &ShortestPathData<ArcFilter>) -> bool {
  let path = match solution.path() {
    Some(path) => path,
    None => return !solution.is_feasible(),
  };
  let cost: f64 = path.arcs().map(|arc| data.cost(arc)).sum();
  path.is_valid()
    && path.origin().map(|n| n.id()) == Some(data.origin())
    && path.destination().map(|n| n.id()) == Some(data.destination())
    && path.arcs().all(|arc| data.is_allowed(arc))
    && (cost - solution.cost()).abs() < 1e-3
}

fn agree(reference: &ShortestPathSolution, other: &ShortestPathSolution) -> bool {
  if reference.status() != other.status() {
    return false;
  }
  !reference.is_feasible() || (reference.cost() - other.cost()).abs() < COST_TOLERANCE
}

/// Solves every pair with every algorithm and cross-checks the results
/// against the first algorithm.
pub fn run_scenarios(
  graph: &Graph,
  pairs: &[(Idx, Idx)],
  filter: ArcFilter,
  algorithms: &[Algorithm],
) -> Result<ScenarioReport, AlgorithmError> {
  let mut totals: Vec<Totals> = algorithms.iter().map(|_| Totals::default()).collect();
  let mut mismatches = 0;
  let mut invalid = 0;

  for (origin, destination) in pairs {
    let mut solutions = Vec::with_capacity(algorithms.len());
    for (algorithm, total) in algorithms.iter().zip(totals.iter_mut()) {
      let data = ShortestPathData::new(graph, *origin, *destination, filter);
      let solution = ShortestPathSolver::new(data, *algorithm).run()?;
      debug!("{}: {}", algorithm, solution);

      if !is_valid(&solution, &ShortestPathData::new(graph, *origin, *destination, filter)) {
        warn!("{} produced an invalid path from {} to {}", algorithm, origin, destination);
        invalid += 1;
      }
      total.runs += 1;
      total.time_ms += solution.solving_time().as_secs_f64() * 1000.0;
      total.visited += solution.visited_nodes();
      if solution.is_feasible() {
        total.feasible += 1;
      }
      solutions.push(solution);
    }

    if let Some((reference, others)) = solutions.split_first() {
      if !others.iter().all(|other| agree(reference, other)) {
        let costs: Vec<f64> = solutions.iter().map(ShortestPathSolution::cost).collect();
        warn!("Algorithms disagree from {} to {}: {:?}", origin, destination, costs);
        mismatches += 1;
      }
    }
  }

  let reports = algorithms
    .iter()
    .zip(totals)
    .map(|(algorithm, total)| {
      let runs = total.runs.max(1) as f64;
      AlgorithmReport {
        algorithm: *algorithm,
        runs: total.runs,
        feasible: total.feasible,
        average_time_ms: total.time_ms / runs,
        average_visited_nodes: total.visited as f64 / runs,
      }
    })
    .collect();

  Ok(ScenarioReport {
    graph: graph.to_string(),
    filter: filter,
    scenarios: pairs.len(),
    mismatches: mismatches,
    invalid: invalid,
    algorithms: reports,
  })
}
