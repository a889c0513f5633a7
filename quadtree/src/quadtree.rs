//! A region quadtree over labeled points.
//!
//! The tree partitions a fixed world rectangle into quadrants as leaves
//! overflow their capacity, and collapses quadrants back into leaves as
//! removals shrink them. Every walk is iterative with an explicit work
//! stack, so adversarially deep trees cannot exhaust the call stack.

mod autocorrelation;
mod config;
mod core;
mod dbscan;
mod hotspot;
mod insert;
mod iter;
mod nearest;
mod query;
mod query_circle;
mod query_polygon;
mod query_ray;
mod query_sector;
mod remove;
mod serialize;
mod set_ops;
mod stats;
mod types;

pub use config::DensityPolicy;
pub use iter::Iter;
pub use types::QuadTree;

pub(crate) use types::{Children, NodeStack, QuadNode};
