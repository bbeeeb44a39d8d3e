use super::data::ShortestPathData;
use super::inspector::ArcInspector;
use super::label::{Label, LabelFactory, PlainLabels};
use super::observer::ShortestPathObserver;
use super::search::{arc_cost, SearchOutcome};
use super::AlgorithmError;
use log::warn;

/// Sweeps over every reached node until no cost improves.
///
/// Arc costs may be negative. A graph of `n` nodes needs at most `n - 1`
/// improving sweeps, so a `n`-th improving sweep means a negative cycle is
/// reachable from the origin.
pub(crate) fn bellman_ford<I, O>(data: &ShortestPathData<I>, observer: &mut O) -> Result<SearchOutcome, AlgorithmError>
where
  I: ArcInspector,
  O: ShortestPathObserver + ?Sized,
{
  let graph = data.graph();
  let mut labels: Vec<Label> = graph.nodes().iter().map(|node| PlainLabels.create(node)).collect();

  let origin = data.origin();
  labels[origin as usize].start();
  observer.notify_origin_processed(graph.node(origin));

  let mut converged = false;
  for _ in 0..graph.size() {
    let mut improved = false;
    for node in graph.nodes() {
      let cost = labels[node.id() as usize].cost();
      if !cost.is_finite() {
        continue;
      }
      for arc in graph.successors(node.id()) {
        if !data.is_allowed(arc) {
          continue;
        }
        let candidate = cost + arc_cost(data, arc, true)?;
        let successor = &mut labels[arc.destination() as usize];
        if candidate < successor.cost() {
          successor.update(candidate, arc.id());
          improved = true;
          observer.notify_node_reached(graph.node(arc.destination()));
        }
      }
    }
    if !improved {
      converged = true;
      break;
    }
  }

  if !converged {
    warn!("Costs still decrease after {} sweeps from node {}", graph.size(), origin);
    return Err(AlgorithmError::NegativeCycle { origin: origin });
  }

  let mut visited = 0;
  for label in labels.iter_mut().filter(|label| label.cost().is_finite()) {
    label.settle();
    visited += 1;
    observer.notify_node_marked(graph.node(label.node()));
  }
  let destination = graph.node(data.destination());
  if labels[destination.id() as usize].cost().is_finite() {
    observer.notify_destination_reached(destination);
  }

  Ok(SearchOutcome {
    labels: labels,
    visited: visited,
  })
}
