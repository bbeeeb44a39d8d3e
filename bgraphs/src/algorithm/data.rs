use super::inspector::{ArcInspector, Mode};
use super::AlgorithmError;
use crate::graph::{Arc, Graph, Idx};

/// A routing problem: where to go, on which graph, for which traveler.
pub struct ShortestPathData<'g, I> {
  graph: &'g Graph,
  origin: Idx,
  destination: Idx,
  inspector: I,
}

impl<'g, I: ArcInspector> ShortestPathData<'g, I> {
  pub fn new(graph: &'g Graph, origin: Idx, destination: Idx, inspector: I) -> Self {
    Self {
      graph: graph,
      origin: origin,
      destination: destination,
      inspector: inspector,
    }
  }

  pub fn graph(&self) -> &'g Graph {
    self.graph
  }

  pub fn origin(&self) -> Idx {
    self.origin
  }

  pub fn destination(&self) -> Idx {
    self.destination
  }

  pub fn inspector(&self) -> &I {
    &self.inspector
  }

  pub fn is_allowed(&self, arc: &Arc) -> bool {
    self.inspector.is_allowed(arc)
  }

  pub fn cost(&self, arc: &Arc) -> f64 {
    self.inspector.cost(arc)
  }

  pub fn mode(&self) -> Mode {
    self.inspector.mode()
  }

  pub fn maximum_speed(&self) -> Option<u16> {
    self.inspector.maximum_speed()
  }

  pub(crate) fn validate(&self) -> Result<(), AlgorithmError> {
    if self.graph.contains(self.origin) && self.graph.contains(self.destination) {
      Ok(())
    } else {
      Err(AlgorithmError::InvalidInput {
        origin: self.origin,
        destination: self.destination,
        graph: self.graph.to_string(),
      })
    }
  }
}
