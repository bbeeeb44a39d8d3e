use super::data::ShortestPathData;
use super::inspector::{ArcInspector, Mode};
use super::label::{Label, LabelFactory};
use super::observer::ShortestPathObserver;
use super::search::{label_correcting, SearchOutcome};
use super::AlgorithmError;
use crate::graph::Node;
use crate::spatial::{distance, Position};

/// Lower bound of the remaining cost to the destination, from the
/// great-circle distance.
///
/// In time mode the distance is traveled at the highest speed any allowed
/// arc could be driven at: the fastest road of the graph, capped by the
/// traveler speed if it has one. Without any positive speed the estimate is
/// zero and A* behaves like Dijkstra.
#[derive(Clone, Debug, PartialEq)]
pub struct StraightLineEstimate {
  target: Position,
  // Cost of one meter of straight line.
  factor: f64,
}

impl StraightLineEstimate {
  pub fn new<I: ArcInspector>(data: &ShortestPathData<I>) -> Result<Self, AlgorithmError> {
    data.validate()?;
    let graph = data.graph();
    let factor = match data.mode() {
      Mode::Length => 1.0,
      Mode::Time => {
        let road_speed = graph.statistics().maximum_speed;
        let speed = data.maximum_speed().map_or(road_speed, |cap| cap.min(road_speed));
        if speed == 0 {
          0.0
        } else {
          3.6 / speed as f64
        }
      }
    };
    Ok(Self {
      target: graph.node(data.destination()).point(),
      factor: factor,
    })
  }

  pub fn estimate(&self, position: &Position) -> f64 {
    distance(position, &self.target) * self.factor
  }
}

impl LabelFactory for StraightLineEstimate {
  fn create(&self, node: &Node) -> Label {
    Label::with_estimate(node.id(), self.estimate(&node.point()))
  }
}

pub(crate) fn astar<I, O>(data: &ShortestPathData<I>, observer: &mut O) -> Result<SearchOutcome, AlgorithmError>
where
  I: ArcInspector,
  O: ShortestPathObserver + ?Sized,
{
  let estimate = StraightLineEstimate::new(data)?;
  label_correcting(data, &estimate, observer)
}
