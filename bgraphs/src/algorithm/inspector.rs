use crate::graph::{AccessMode, Arc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Metric an inspector measures costs in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
  /// Meters.
  Length,
  /// Seconds.
  Time,
}

/// Traveler profile: which arcs may be used and what they cost.
///
/// Implementations must be pure, the same arc is queried once per relaxation.
pub trait ArcInspector {
  fn is_allowed(&self, arc: &Arc) -> bool;

  fn cost(&self, arc: &Arc) -> f64;

  fn mode(&self) -> Mode;

  /// Speed cap of the traveler in km/h, if slower than the roads allow.
  fn maximum_speed(&self) -> Option<u16> {
    None
  }
}

impl<'a, I: ArcInspector + ?Sized> ArcInspector for &'a I {
  fn is_allowed(&self, arc: &Arc) -> bool {
    (*self).is_allowed(arc)
  }

  fn cost(&self, arc: &Arc) -> f64 {
    (*self).cost(arc)
  }

  fn mode(&self) -> Mode {
    (*self).mode()
  }

  fn maximum_speed(&self) -> Option<u16> {
    (*self).maximum_speed()
  }
}

pub const PEDESTRIAN_SPEED: u16 = 5;

/// Standard traveler profiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArcFilter {
  AllRoadsLength,
  CarsLength,
  AllRoadsTime,
  CarsTime,
  PedestrianTime,
}

impl ArcFilter {
  pub const ALL: [ArcFilter; 5] = [
    ArcFilter::AllRoadsLength,
    ArcFilter::CarsLength,
    ArcFilter::AllRoadsTime,
    ArcFilter::CarsTime,
    ArcFilter::PedestrianTime,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      ArcFilter::AllRoadsLength => "all-length",
      ArcFilter::CarsLength => "cars-length",
      ArcFilter::AllRoadsTime => "all-time",
      ArcFilter::CarsTime => "cars-time",
      ArcFilter::PedestrianTime => "pedestrian-time",
    }
  }

  /// Comma-separated names of every filter.
  pub fn names() -> String {
    let names: Vec<_> = ArcFilter::ALL.iter().map(ArcFilter::name).collect();
    names.join(", ")
  }

  pub fn description(&self) -> &'static str {
    match self {
      ArcFilter::AllRoadsLength => "Shortest path, all roads allowed",
      ArcFilter::CarsLength => "Shortest path, only roads open for cars",
      ArcFilter::AllRoadsTime => "Fastest path, all roads allowed",
      ArcFilter::CarsTime => "Fastest path, only roads open for cars",
      ArcFilter::PedestrianTime => "Fastest path for pedestrians",
    }
  }
}

impl ArcInspector for ArcFilter {
  fn is_allowed(&self, arc: &Arc) -> bool {
    let access = arc.road_information().access;
    match self {
      ArcFilter::AllRoadsLength | ArcFilter::AllRoadsTime => true,
      ArcFilter::CarsLength | ArcFilter::CarsTime => access.is_allowed_for(AccessMode::Motorcar),
      ArcFilter::PedestrianTime => access.is_allowed_for(AccessMode::Foot),
    }
  }

  fn cost(&self, arc: &Arc) -> f64 {
    match self {
      ArcFilter::AllRoadsLength | ArcFilter::CarsLength => arc.length(),
      ArcFilter::AllRoadsTime | ArcFilter::CarsTime => arc.minimum_travel_time(),
      ArcFilter::PedestrianTime => {
        arc.travel_time(PEDESTRIAN_SPEED.min(arc.road_information().max_speed) as f64)
      }
    }
  }

  fn mode(&self) -> Mode {
    match self {
      ArcFilter::AllRoadsLength | ArcFilter::CarsLength => Mode::Length,
      _ => Mode::Time,
    }
  }

  fn maximum_speed(&self) -> Option<u16> {
    match self {
      ArcFilter::PedestrianTime => Some(PEDESTRIAN_SPEED),
      _ => None,
    }
  }
}

impl fmt::Display for ArcFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Error)]
#[error("unknown filter '{0}', expected one of: {}", ArcFilter::names())]
pub struct UnknownFilter(pub String);

impl FromStr for ArcFilter {
  type Err = UnknownFilter;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ArcFilter::ALL
      .iter()
      .find(|filter| filter.name() == s)
      .cloned()
      .ok_or_else(|| UnknownFilter(s.to_string()))
  }
}

/// Inspector made of two closures, for profiles outside of [`ArcFilter`].
pub struct CustomInspector<A, C> {
  mode: Mode,
  allowed: A,
  cost: C,
}

impl<A: Fn(&Arc) -> bool, C: Fn(&Arc) -> f64> CustomInspector<A, C> {
  pub fn new(mode: Mode, allowed: A, cost: C) -> Self {
    Self {
      mode: mode,
      allowed: allowed,
      cost: cost,
    }
  }
}

impl<A: Fn(&Arc) -> bool, C: Fn(&Arc) -> f64> ArcInspector for CustomInspector<A, C> {
  fn is_allowed(&self, arc: &Arc) -> bool {
    (self.allowed)(arc)
  }

  fn cost(&self, arc: &Arc) -> f64 {
    (self.cost)(arc)
  }

  fn mode(&self) -> Mode {
    self.mode
  }
}
