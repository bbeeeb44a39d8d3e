//! Shortest-path algorithms.
//!
//! Dijkstra and A* share one heap-based relaxation loop and only differ by
//! the labels they create. Bellman-Ford relaxes every reached node in sweeps
//! and accepts negative arc costs.

pub mod priority_queue;

mod astar;
mod bellman_ford;
mod data;
mod inspector;
mod label;
mod observer;
mod search;
mod solution;
mod solver;

pub use astar::*;
pub use data::*;
pub use inspector::*;
pub use label::{Label, LabelFactory, PlainLabels};
pub use observer::*;
pub use solution::*;
pub use solver::*;

use crate::graph::Idx;
use crate::path::PathError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AlgorithmError {
  #[error("cannot route from {origin} to {destination} in {graph}")]
  InvalidInput { origin: Idx, destination: Idx, graph: String },
  #[error("arc {arc} has invalid cost {cost}")]
  InvalidArcCost { arc: Idx, cost: f64 },
  #[error("negative cycle reachable from node {origin}")]
  NegativeCycle { origin: Idx },
  #[error("invalid solution path: {0}")]
  Path(#[from] PathError),
}
