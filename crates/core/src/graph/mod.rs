//! Neighbor review graph.
//!
//! Builds a point-adjacency graph over human-placed annotation points:
//! each point connects to the two neighbors most likely to be its
//! predecessor and successor on the same text line, edges are scored by a
//! geometric feature vector, and statistical outliers are flagged by
//! density clustering for human review.

pub mod cluster;
pub mod features;
pub mod review;
pub mod spatial;

pub use review::{
    GraphEdge, GraphNode, NeighborGraph, build_review_graph, build_review_graph_with_index,
};
pub use spatial::{BruteForceIndex, NeighborIndex, RTreePointIndex};
