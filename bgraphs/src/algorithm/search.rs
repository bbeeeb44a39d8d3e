use super::data::ShortestPathData;
use super::inspector::ArcInspector;
use super::label::{Label, LabelFactory, PlainLabels};
use super::observer::ShortestPathObserver;
use super::priority_queue::{BinaryHeap, PriorityQueue};
use super::AlgorithmError;
use crate::graph::Arc;

/// Labels of every node once a search is over.
pub(crate) struct SearchOutcome {
  pub labels: Vec<Label>,
  pub visited: usize,
}

/// Cost of an arc, rejecting values the searches cannot handle.
pub(crate) fn arc_cost<I: ArcInspector>(
  data: &ShortestPathData<I>,
  arc: &Arc,
  allow_negative: bool,
) -> Result<f64, AlgorithmError> {
  let cost = data.cost(arc);
  if cost.is_finite() && (allow_negative || cost >= 0.0) {
    Ok(cost)
  } else {
    Err(AlgorithmError::InvalidArcCost {
      arc: arc.id(),
      cost: cost,
    })
  }
}

/// Heap-based label-correcting search from the origin, stopping as soon as
/// the destination is marked.
///
/// Labels are popped by increasing key, so with non-negative costs and a
/// consistent estimate a popped label is final.
pub(crate) fn label_correcting<I, F, O>(
  data: &ShortestPathData<I>,
  factory: &F,
  observer: &mut O,
) -> Result<SearchOutcome, AlgorithmError>
where
  I: ArcInspector,
  F: LabelFactory + ?Sized,
  O: ShortestPathObserver + ?Sized,
{
  let graph = data.graph();
  let mut labels: Vec<Label> = graph.nodes().iter().map(|node| factory.create(node)).collect();
  let mut heap = BinaryHeap::with_capacity(labels.len());
  let mut visited = 0;

  let origin = data.origin();
  labels[origin as usize].start();
  heap.insert(labels[origin as usize].entry());
  observer.notify_origin_processed(graph.node(origin));

  while let Ok(entry) = heap.delete_min() {
    let current = &mut labels[entry.node() as usize];
    if current.is_settled() {
      continue;
    }
    current.settle();
    let cost = current.cost();
    let node = graph.node(entry.node());
    visited += 1;
    observer.notify_node_marked(node);

    if node.id() == data.destination() {
      observer.notify_destination_reached(node);
      break;
    }

    for arc in graph.successors(node.id()) {
      if !data.is_allowed(arc) || labels[arc.destination() as usize].is_settled() {
        continue;
      }
      let candidate = cost + arc_cost(data, arc, false)?;
      let successor = &mut labels[arc.destination() as usize];
      if candidate < successor.cost() {
        // Nodes reached for the first time are not queued yet
        heap.remove(&successor.entry()).ok();
        successor.update(candidate, arc.id());
        heap.insert(successor.entry());
        observer.notify_node_reached(graph.node(arc.destination()));
      }
    }
  }

  Ok(SearchOutcome {
    labels: labels,
    visited: visited,
  })
}

pub(crate) fn dijkstra<I, O>(data: &ShortestPathData<I>, observer: &mut O) -> Result<SearchOutcome, AlgorithmError>
where
  I: ArcInspector,
  O: ShortestPathObserver + ?Sized,
{
  label_correcting(data, &PlainLabels, observer)
}
