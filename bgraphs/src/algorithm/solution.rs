use super::data::ShortestPathData;
use super::inspector::{ArcInspector, Mode};
use super::label::Label;
use super::AlgorithmError;
use crate::graph::Idx;
use crate::path::{Path, PathError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
  /// No run has produced this solution yet.
  Unknown,
  Infeasible,
  Feasible,
  Optimal,
}

impl Default for Status {
  fn default() -> Self {
    Status::Unknown
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Status::Unknown => "unknown",
      Status::Infeasible => "infeasible",
      Status::Feasible => "feasible",
      Status::Optimal => "optimal",
    };
    f.write_str(name)
  }
}

/// Result of a shortest-path run.
///
/// The path is present iff the status is feasible or optimal. The cost of an
/// infeasible solution is infinite.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathSolution<'g> {
  status: Status,
  origin: Idx,
  destination: Idx,
  mode: Mode,
  path: Option<Path<'g>>,
  cost: f64,
  visited_nodes: usize,
  solving_time: Duration,
}

impl<'g> ShortestPathSolution<'g> {
  pub(crate) fn infeasible<I: ArcInspector>(data: &ShortestPathData<'g, I>, visited_nodes: usize) -> Self {
    Self {
      status: Status::Infeasible,
      origin: data.origin(),
      destination: data.destination(),
      mode: data.mode(),
      path: None,
      cost: f64::INFINITY,
      visited_nodes: visited_nodes,
      solving_time: Duration::default(),
    }
  }

  pub(crate) fn optimal<I: ArcInspector>(data: &ShortestPathData<'g, I>, path: Path<'g>, visited_nodes: usize) -> Self {
    let cost: f64 = path.arcs().map(|arc| data.cost(arc)).sum();
    Self {
      status: Status::Optimal,
      origin: data.origin(),
      destination: data.destination(),
      mode: data.mode(),
      path: Some(path),
      cost: cost,
      visited_nodes: visited_nodes,
      solving_time: Duration::default(),
    }
  }

  pub(crate) fn with_solving_time(mut self, solving_time: Duration) -> Self {
    self.solving_time = solving_time;
    self
  }

  pub fn status(&self) -> Status {
    self.status
  }

  pub fn is_feasible(&self) -> bool {
    self.status == Status::Feasible || self.status == Status::Optimal
  }

  pub fn origin(&self) -> Idx {
    self.origin
  }

  pub fn destination(&self) -> Idx {
    self.destination
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub fn path(&self) -> Option<&Path<'g>> {
    self.path.as_ref()
  }

  /// Sum of the arc costs along the path, in meters or seconds depending on the mode.
  pub fn cost(&self) -> f64 {
    self.cost
  }

  pub fn visited_nodes(&self) -> usize {
    self.visited_nodes
  }

  pub fn solving_time(&self) -> Duration {
    self.solving_time
  }
}

impl<'g> fmt::Display for ShortestPathSolution<'g> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} path from #{} to #{}", self.status, self.origin, self.destination)?;
    if let Some(path) = &self.path {
      match self.mode {
        Mode::Length => write!(f, ", {:.2} km", self.cost / 1000.0)?,
        Mode::Time => write!(f, ", {:.1} min", self.cost / 60.0)?,
      }
      write!(f, " over {} arcs", path.arc_ids().len())?;
    }
    write!(f, ", {} nodes visited in {:?}", self.visited_nodes, self.solving_time)
  }
}

/// Walks predecessor arcs back from the destination.
///
/// Returns `None` when the destination has no finite cost.
pub(crate) fn reconstruct<'g, I: ArcInspector>(
  data: &ShortestPathData<'g, I>,
  labels: &[Label],
) -> Result<Option<Path<'g>>, AlgorithmError> {
  let graph = data.graph();
  let destination = &labels[data.destination() as usize];
  if !destination.cost().is_finite() {
    return Ok(None);
  }

  let mut arcs = Vec::new();
  let mut current = destination;
  while let Some(arc_id) = current.predecessor() {
    // A path cannot hold more arcs than there are nodes
    if arcs.len() >= labels.len() {
      return Err(PathError::Invalid.into());
    }
    arcs.push(arc_id);
    current = &labels[graph.arc(arc_id).origin() as usize];
  }
  arcs.reverse();

  let path = if arcs.is_empty() {
    Path::single(graph, data.destination())
  } else {
    Path::new(graph, arcs)
  };
  if !path.is_valid() || path.origin().map(|n| n.id()) != Some(data.origin()) {
    return Err(PathError::Invalid.into());
  }
  Ok(Some(path))
}
