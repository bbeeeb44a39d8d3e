use bgraphs::graph::{AccessMode, AccessRestrictions, Graph, GraphBuilder, GraphError, Idx, RoadInformation};
use bgraphs::spatial::{distance, Position};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Road categories of the synthetic network, with the access rules and
/// speed limits of their OpenStreetMap highway counterparts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RoadClass {
  Motorway,
  Primary,
  Residential,
  Footway,
}

impl RoadClass {
  pub fn access(self) -> AccessRestrictions {
    match self {
      RoadClass::Motorway => AccessRestrictions::allowing(&[AccessMode::Motorcar, AccessMode::HeavyGoods]),
      RoadClass::Primary => AccessRestrictions::all(),
      RoadClass::Residential => AccessRestrictions::allowing(&[
        AccessMode::Foot,
        AccessMode::Bicycle,
        AccessMode::Motorcar,
        AccessMode::PublicTransport,
      ]),
      RoadClass::Footway => AccessRestrictions::allowing(&[AccessMode::Foot, AccessMode::Bicycle]),
    }
  }

  pub fn speed_limit_km_h(self) -> u16 {
    match self {
      RoadClass::Motorway => 130,
      RoadClass::Primary => 80,
      RoadClass::Residential => 50,
      RoadClass::Footway => 10,
    }
  }

  pub fn road_information(self, one_way: bool) -> RoadInformation {
    RoadInformation::new(self.access(), one_way, self.speed_limit_km_h())
  }
}

/// Shape of a synthetic city: a perturbed grid of streets.
#[derive(Clone, Debug)]
pub struct GridNetwork {
  pub rows: usize,
  pub cols: usize,
  /// South-west corner.
  pub corner: Position,
  /// Distance between two neighbouring intersections, in degrees.
  pub spacing: f64,
  pub seed: u64,
}

impl GridNetwork {
  pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
    Self {
      rows: rows,
      cols: cols,
      corner: Position::from((1.40, 43.55)),
      spacing: 0.002,
      seed: seed,
    }
  }

  /// Every 10th line is a motorway, every 5th a primary road, the others are
  /// residential streets, some of them one-way. Footways cut through blocks
  /// diagonally.
  fn class_of_line(line: usize) -> RoadClass {
    if line % 10 == 0 {
      RoadClass::Motorway
    } else if line % 5 == 0 {
      RoadClass::Primary
    } else {
      RoadClass::Residential
    }
  }

  pub fn build(&self) -> Result<Graph, GraphError> {
    let mut rng = StdRng::seed_from_u64(self.seed);
    let mut builder = GraphBuilder::new(
      &format!("grid-{}", self.seed),
      &format!("Synthetic grid {}x{}", self.rows, self.cols),
    );

    let jitter = self.spacing / 5.0;
    let mut points = Vec::with_capacity(self.rows * self.cols);
    for row in 0..self.rows {
      for col in 0..self.cols {
        let point = Position::from((
          self.corner.x + col as f64 * self.spacing + rng.gen_range(-jitter..jitter),
          self.corner.y + row as f64 * self.spacing + rng.gen_range(-jitter..jitter),
        ));
        points.push(point);
        builder.add_node(point);
      }
    }
    let id = |row: usize, col: usize| (row * self.cols + col) as Idx;

    for row in 0..self.rows {
      for col in 0..self.cols {
        let here = id(row, col);
        let mut neighbours = Vec::new();
        if col + 1 < self.cols {
          neighbours.push((id(row, col + 1), Self::class_of_line(row)));
        }
        if row + 1 < self.rows {
          neighbours.push((id(row + 1, col), Self::class_of_line(col)));
        }
        if row + 1 < self.rows && col + 1 < self.cols && rng.gen_bool(0.2) {
          neighbours.push((id(row + 1, col + 1), RoadClass::Footway));
        }

        for (there, class) in neighbours {
          // Streets are never straight
          let length = distance(&points[here as usize], &points[there as usize]) * rng.gen_range(1.0..1.25);
          let one_way = class == RoadClass::Residential && rng.gen_bool(0.15);
          let (from, to) = if one_way && rng.gen_bool(0.5) {
            (there, here)
          } else {
            (here, there)
          };
          builder.add_arc(from, to, length, class.road_information(one_way))?;
        }
      }
    }

    let graph = builder.build()?;
    info!("Generated {}", graph);
    Ok(graph)
  }
}
