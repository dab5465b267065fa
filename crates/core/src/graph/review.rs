//! Review graph assembly.
//!
//! Runs the neighbor analysis end to end: k-nearest neighbors per point,
//! opposed-pair selection, feature extraction, density clustering, and the
//! normal/outlier relabeling a human reviewer consumes.

use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use super::cluster::{NOISE, dbscan, standardize};
use super::features::{FEATURE_DIM, best_opposed_pair, edge_features};
use super::spatial::{NeighborIndex, RTreePointIndex};
use crate::layout::SegParams;
use crate::utils::Point;

/// Edge label for members of the dominant cluster.
pub const LABEL_NORMAL: i8 = 0;
/// Edge label for density outliers and minor clusters.
pub const LABEL_OUTLIER: i8 = -1;

/// A graph node; id is the point's index in the input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

/// A directed candidate adjacency between two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
    /// Feature vector of the pair this edge belongs to; internal, not part
    /// of the wire format.
    #[serde(skip)]
    pub features: [f64; FEATURE_DIM],
    pub label: i8,
}

/// The serializable review graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Builds the review graph with the default R-tree neighbor index.
pub fn build_review_graph(points: &[Point], params: &SegParams) -> NeighborGraph {
    let index = RTreePointIndex::new(points);
    build_review_graph_with_index(points, &index, params)
}

/// Builds the review graph over an injected neighbor index.
pub fn build_review_graph_with_index(
    points: &[Point],
    index: &dyn NeighborIndex,
    params: &SegParams,
) -> NeighborGraph {
    let nodes: Vec<GraphNode> = points
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| GraphNode { id, x, y })
        .collect();

    // (query, neighbor_a, neighbor_b, features) per accepted pair.
    let mut accepted: Vec<(usize, usize, usize, [f64; FEATURE_DIM])> = Vec::new();
    for (i, &(qx, qy)) in points.iter().enumerate() {
        let neighbors = index.nearest(i, params.neighbor_k);
        if neighbors.len() < 2 {
            continue;
        }

        let rels: SmallVec<[Point; 8]> = neighbors
            .iter()
            .map(|&j| (points[j].0 - qx, points[j].1 - qy))
            .collect();
        let distances: SmallVec<[f64; 8]> = rels.iter().map(|r| r.0.hypot(r.1)).collect();

        // Scale directions by the largest component so the similarity test
        // is insensitive to the local point spacing.
        let mut scale = rels
            .iter()
            .map(|r| r.0.abs().max(r.1.abs()))
            .fold(0.0_f64, f64::max);
        if scale == 0.0 {
            scale = 1.0;
        }
        let normals: SmallVec<[Point; 8]> =
            rels.iter().map(|r| (r.0 / scale, r.1 / scale)).collect();

        if let Some((a, b)) =
            best_opposed_pair(&normals, &distances, params.opposition_threshold)
        {
            accepted.push((i, neighbors[a], neighbors[b], edge_features(rels[a], rels[b])));
        }
    }

    let features: Vec<[f64; FEATURE_DIM]> = accepted.iter().map(|row| row.3).collect();
    let clusters = dbscan(&standardize(&features), params.cluster_eps, params.cluster_min_pts);

    // The dominant cluster is "how edges on this page normally look";
    // everything else, noise included, goes to the reviewer.
    let mut sizes: FxHashMap<isize, usize> = FxHashMap::default();
    for &c in &clusters {
        if c != NOISE {
            *sizes.entry(c).or_default() += 1;
        }
    }
    let dominant = sizes
        .iter()
        .max_by_key(|&(&id, &size)| (size, std::cmp::Reverse(id)))
        .map(|(&id, _)| id);
    debug!(
        pairs = accepted.len(),
        clusters = sizes.len(),
        "review graph clustering done"
    );

    let mut edges = Vec::with_capacity(accepted.len() * 2);
    for ((query, a, b, features), cluster) in accepted.into_iter().zip(clusters) {
        let label = if Some(cluster) == dominant {
            LABEL_NORMAL
        } else {
            LABEL_OUTLIER
        };
        for target in [a, b] {
            edges.push(GraphEdge {
                source: query,
                target,
                features,
                label,
            });
        }
    }

    NeighborGraph { nodes, edges }
}
