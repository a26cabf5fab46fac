//! Domain layer: post snapshots and the relatedness heuristic.

pub mod entities;
pub mod relatedness;
