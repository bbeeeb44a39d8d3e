//! Least-cost routing algorithms over static road networks.

pub mod spatial;
pub mod graph;
pub mod path;
pub mod algorithm;

#[cfg(test)]
mod test_utils;
