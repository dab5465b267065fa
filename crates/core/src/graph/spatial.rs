//! K-nearest-neighbor indexes over annotation points.
//!
//! The review graph only needs one query shape: the k points nearest a
//! member point, nearest first. The R-tree implementation serves real
//! pages; the brute-force implementation is for small fixtures where fully
//! deterministic tie-breaking matters.

use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::utils::Point;

/// K-nearest-neighbor query capability, injectable for tests.
pub trait NeighborIndex {
    /// Indices of up to `k` points nearest to point `query`, excluding the
    /// query itself, ordered by ascending distance.
    fn nearest(&self, query: usize, k: usize) -> Vec<usize>;
}

/// R-tree backed index.
pub struct RTreePointIndex {
    points: Vec<Point>,
    tree: RTree<GeomWithData<[f64; 2], usize>>,
}

impl RTreePointIndex {
    pub fn new(points: &[Point]) -> Self {
        let entries: Vec<_> = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| GeomWithData::new([x, y], i))
            .collect();
        Self {
            points: points.to_vec(),
            tree: RTree::bulk_load(entries),
        }
    }
}

impl NeighborIndex for RTreePointIndex {
    fn nearest(&self, query: usize, k: usize) -> Vec<usize> {
        let (x, y) = self.points[query];
        self.tree
            .nearest_neighbor_iter(&[x, y])
            .filter(|entry| entry.data != query)
            .take(k)
            .map(|entry| entry.data)
            .collect()
    }
}

/// Exhaustive index with deterministic (distance, index) ordering.
pub struct BruteForceIndex {
    points: Vec<Point>,
}

impl BruteForceIndex {
    pub fn new(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }
}

impl NeighborIndex for BruteForceIndex {
    fn nearest(&self, query: usize, k: usize) -> Vec<usize> {
        let (qx, qy) = self.points[query];
        let mut candidates: Vec<(f64, usize)> = self
            .points
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != query)
            .map(|(i, &(x, y))| ((x - qx).powi(2) + (y - qy).powi(2), i))
            .collect();
        candidates.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });
        candidates.into_iter().take(k).map(|(_, i)| i).collect()
    }
}
