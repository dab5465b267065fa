//! Density clustering of edge feature vectors.
//!
//! The outlier pass needs a clustering that marks sparse points as noise
//! and groups dense regions without a predetermined cluster count; DBSCAN
//! over standardized features satisfies that contract.

use super::features::FEATURE_DIM;

/// Cluster label for noise points.
pub const NOISE: isize = -1;

const UNCLASSIFIED: isize = -2;

/// Per-dimension z-score standardization; a constant dimension maps to 0.
pub fn standardize(data: &[[f64; FEATURE_DIM]]) -> Vec<[f64; FEATURE_DIM]> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    let mut mean = [0.0; FEATURE_DIM];
    for row in data {
        for (m, v) in mean.iter_mut().zip(row) {
            *m += v;
        }
    }
    for m in &mut mean {
        *m /= n as f64;
    }

    let mut var = [0.0; FEATURE_DIM];
    for row in data {
        for ((s, v), m) in var.iter_mut().zip(row).zip(&mean) {
            *s += (v - m) * (v - m);
        }
    }
    let std_dev: Vec<f64> = var.iter().map(|s| (s / n as f64).sqrt()).collect();

    data.iter()
        .map(|row| {
            let mut out = [0.0; FEATURE_DIM];
            for d in 0..FEATURE_DIM {
                out[d] = if std_dev[d] > 0.0 {
                    (row[d] - mean[d]) / std_dev[d]
                } else {
                    0.0
                };
            }
            out
        })
        .collect()
}

/// DBSCAN with euclidean distance.
///
/// Returns one label per row: consecutive cluster ids from 0, or [`NOISE`]
/// for points in no dense region. Deterministic: clusters are seeded in
/// input order.
pub fn dbscan(data: &[[f64; FEATURE_DIM]], eps: f64, min_pts: usize) -> Vec<isize> {
    let n = data.len();
    let mut labels = vec![UNCLASSIFIED; n];
    let mut next_cluster = 0isize;

    for seed in 0..n {
        if labels[seed] != UNCLASSIFIED {
            continue;
        }
        let neighborhood = region_query(data, seed, eps);
        if neighborhood.len() < min_pts {
            labels[seed] = NOISE;
            continue;
        }

        let cluster = next_cluster;
        next_cluster += 1;
        labels[seed] = cluster;

        let mut queue: Vec<usize> = neighborhood;
        let mut head = 0;
        while head < queue.len() {
            let point = queue[head];
            head += 1;

            if labels[point] == NOISE {
                labels[point] = cluster; // border point, claimed by the cluster
            }
            if labels[point] != UNCLASSIFIED {
                continue;
            }
            labels[point] = cluster;

            let expansion = region_query(data, point, eps);
            if expansion.len() >= min_pts {
                queue.extend(expansion);
            }
        }
    }

    labels
}

fn region_query(data: &[[f64; FEATURE_DIM]], center: usize, eps: f64) -> Vec<usize> {
    let eps_sq = eps * eps;
    (0..data.len())
        .filter(|&i| distance_sq(&data[center], &data[i]) <= eps_sq)
        .collect()
}

fn distance_sq(a: &[f64; FEATURE_DIM], b: &[f64; FEATURE_DIM]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
