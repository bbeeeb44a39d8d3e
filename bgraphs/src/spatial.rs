//! Geographic types.

use crate::graph::Idx;
use geo::{haversine_distance::*, Point, Rect};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

#[doc(hidden)]
pub use geo::Coordinate;

/// A (longitude, latitude) pair in degrees.
pub type Position = Coordinate<f64>;

pub type BoundingBox = Rect<f64>;

/// Great-circle distance between two positions, in meters.
pub fn distance(from: &Position, to: &Position) -> f64 {
  Point::from(*from).haversine_distance(&Point::from(*to))
}

pub fn bounding_box<P: Iterator<Item = Position>>(points: P) -> Option<BoundingBox> {
  let mut extremes: Option<(Position, Position)> = None;
  for p in points {
    let (bl, tr) = extremes.get_or_insert((p, p));
    bl.x = bl.x.min(p.x);
    bl.y = bl.y.min(p.y);
    tr.x = tr.x.max(p.x);
    tr.y = tr.y.max(p.y);
  }

  extremes.map(|e| BoundingBox::new(e.0, e.1))
}

struct Entry {
  id: Idx,
  point: [f64; 2],
}

impl RTreeObject for Entry {
  type Envelope = AABB<[f64; 2]>;

  fn envelope(&self) -> Self::Envelope {
    AABB::from_point(self.point)
  }
}

impl PointDistance for Entry {
  fn distance_2(&self, point: &[f64; 2]) -> f64 {
    let dx = self.point[0] - point[0];
    let dy = self.point[1] - point[1];
    dx * dx + dy * dy
  }
}

/// R-tree over node positions.
///
/// Distances inside the tree are planar in degrees, which is good enough to
/// snap a waypoint onto the closest intersection but must not be used as a cost.
pub struct NodeIndex {
  rtree: RTree<Entry>,
}

impl NodeIndex {
  pub fn new<I: Iterator<Item = (Idx, Position)>>(nodes: I) -> Self {
    let entries = nodes
      .map(|(id, p)| Entry {
        id: id,
        point: [p.x, p.y],
      })
      .collect();
    Self {
      rtree: RTree::bulk_load(entries),
    }
  }

  pub fn nearest(&self, position: &Position) -> Option<Idx> {
    self
      .rtree
      .nearest_neighbor(&[position.x, position.y])
      .map(|entry| entry.id)
  }

  pub fn len(&self) -> usize {
    self.rtree.size()
  }
}
