use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of traveler an access rule applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessMode {
  Foot,
  Bicycle,
  Motorcar,
  HeavyGoods,
  PublicTransport,
}

impl AccessMode {
  pub const ALL: [AccessMode; 5] = [
    AccessMode::Foot,
    AccessMode::Bicycle,
    AccessMode::Motorcar,
    AccessMode::HeavyGoods,
    AccessMode::PublicTransport,
  ];

  fn bit(self) -> u8 {
    1 << (self as u8)
  }
}

/// Set of access modes allowed on a road.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessRestrictions(u8);

impl AccessRestrictions {
  pub fn none() -> Self {
    AccessRestrictions(0)
  }

  pub fn all() -> Self {
    Self::allowing(&AccessMode::ALL)
  }

  pub fn allowing(modes: &[AccessMode]) -> Self {
    modes.iter().fold(Self::none(), |access, mode| access.allow(*mode))
  }

  pub fn allow(self, mode: AccessMode) -> Self {
    AccessRestrictions(self.0 | mode.bit())
  }

  pub fn is_allowed_for(&self, mode: AccessMode) -> bool {
    self.0 & mode.bit() != 0
  }
}

impl fmt::Debug for AccessRestrictions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set()
      .entries(AccessMode::ALL.iter().filter(|m| self.is_allowed_for(**m)))
      .finish()
  }
}

/// Attributes shared by every arc of a road.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadInformation {
  pub access: AccessRestrictions,
  pub one_way: bool,
  /// Legal speed limit in km/h, always positive in a built graph.
  pub max_speed: u16,
}

impl RoadInformation {
  pub fn new(access: AccessRestrictions, one_way: bool, max_speed: u16) -> Self {
    Self {
      access: access,
      one_way: one_way,
      max_speed: max_speed,
    }
  }
}
