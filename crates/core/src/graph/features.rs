//! Edge candidate selection and feature extraction.
//!
//! Around each query point, the pair of neighbors pointing in near-opposite
//! directions with the smallest combined distance is the best guess for the
//! previous/next point on the same text line. Each accepted pair gets a
//! geometric feature vector for the outlier clustering pass.

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::utils::Point;

/// Number of components in an edge feature vector.
pub const FEATURE_DIM: usize = 5;

/// Cosine similarity of two vectors; a zero-length operand yields 0 rather
/// than an error.
pub fn cosine_similarity(a: Point, b: Point) -> f64 {
    let norm_a = a.0.hypot(a.1);
    let norm_b = b.0.hypot(b.1);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.0 * b.0 + a.1 * b.1) / (norm_a * norm_b)
}

/// Picks the opposed neighbor pair with the smallest combined distance.
///
/// `normals` are the direction vectors scaled to unit maximum component,
/// `distances` the unnormalized neighbor distances. A pair qualifies when
/// the cosine similarity of its directions falls below `threshold`; among
/// qualifying pairs the one minimizing `distances[a] + distances[b]` wins,
/// first in combination order on ties. None when no pair opposes.
pub fn best_opposed_pair(
    normals: &[Point],
    distances: &[f64],
    threshold: f64,
) -> Option<(usize, usize)> {
    (0..normals.len())
        .tuple_combinations()
        .filter(|&(a, b)| cosine_similarity(normals[a], normals[b]) < threshold)
        .min_by_key(|&(a, b)| OrderedFloat(distances[a] + distances[b]))
}

/// Feature vector for an accepted pair, from the unnormalized relative
/// displacements of its two neighbors:
/// total length, bend (|sum of signed elevations from horizontal|),
/// chord aspect ratio (horizontal span floored at 0.001), vertical
/// alignment inconsistency, and mean vertical displacement.
pub fn edge_features(rel_a: Point, rel_b: Point) -> [f64; FEATURE_DIM] {
    let elevation = |v: Point| v.1.atan2(v.0.abs());
    let chord = (rel_a.0 - rel_b.0, rel_a.1 - rel_b.1);
    [
        rel_a.0.hypot(rel_a.1) + rel_b.0.hypot(rel_b.1),
        (elevation(rel_a) + elevation(rel_b)).abs(),
        chord.1.abs() / chord.0.abs().max(0.001),
        (rel_a.1 - rel_b.1).abs(),
        (rel_a.1 + rel_b.1) / 2.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_opposites_is_minus_one() {
        assert!((cosine_similarity((1.0, 0.0), (-1.0, 0.0)) + 1.0).abs() < 1e-12);
        assert!((cosine_similarity((1.0, 0.0), (1.0, 0.0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_vector_scores_zero() {
        assert_eq!(cosine_similarity((0.0, 0.0), (1.0, 1.0)), 0.0);
    }

    #[test]
    fn picks_nearest_opposed_pair() {
        // Neighbors left and right at distance 1, plus a far-right neighbor.
        let normals = [(-1.0, 0.0), (1.0, 0.0), (1.0, 0.0)];
        let distances = [1.0, 1.0, 3.0];
        assert_eq!(best_opposed_pair(&normals, &distances, -0.8), Some((0, 1)));
    }

    #[test]
    fn no_opposed_pair_yields_none() {
        let normals = [(1.0, 0.0), (1.0, 0.1)];
        let distances = [1.0, 1.0];
        assert_eq!(best_opposed_pair(&normals, &distances, -0.8), None);
    }

    #[test]
    fn collinear_pair_features_are_flat() {
        let f = edge_features((-10.0, 0.0), (10.0, 0.0));
        assert_eq!(f[0], 20.0);
        assert_eq!(f[1], 0.0);
        assert_eq!(f[2], 0.0);
        assert_eq!(f[3], 0.0);
        assert_eq!(f[4], 0.0);
    }
}
