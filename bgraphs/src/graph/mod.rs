//! Road-network model.
//!
//! The network is a directed multigraph stored as flat arrays addressed by
//! [`Idx`]: nodes are intersections, arcs are one-way traversals of a road.
//! A [`Graph`] cannot be modified once built with [`GraphBuilder`], so it can
//! be shared by reference between any number of concurrent searches.
mod builder;
mod graph;
mod road;

pub use builder::*;
pub use graph::*;
pub use road::*;
