//! Application services layer: pool assembly, selection, preview shaping.

pub mod pool;
pub mod preview;
pub mod selector;
pub mod service;
