use super::QuadTree;
use common::shapes::Point;

impl<V> QuadTree<V> {
    /// Moran's I spatial autocorrelation of the entry values under the
    /// numeric projection `value_of`, using the default neighbour
    /// threshold: the mean nearest-neighbour distance of the point set.
    ///
    /// Returns a value in `[-1, 1]`; 0 for fewer than two entries or
    /// zero variance.
    pub fn spatial_autocorrelation<F>(&self, value_of: F) -> f32
    where
        F: Fn(&V) -> f32,
    {
        let samples: Vec<(Point, f64)> = self
            .iter()
            .map(|(point, value)| (point, value_of(value) as f64))
            .collect();
        let threshold = mean_nearest_neighbor_distance(&samples);
        moran_i(&samples, threshold)
    }

    /// Moran's I with an explicit neighbour distance threshold: points
    /// within `threshold` of each other are weighted as neighbours.
    pub fn spatial_autocorrelation_with_threshold<F>(&self, value_of: F, threshold: f32) -> f32
    where
        F: Fn(&V) -> f32,
    {
        let samples: Vec<(Point, f64)> = self
            .iter()
            .map(|(point, value)| (point, value_of(value) as f64))
            .collect();
        moran_i(&samples, threshold as f64)
    }
}

fn mean_nearest_neighbor_distance(samples: &[(Point, f64)]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0f64;
    for (i, (point, _)) in samples.iter().enumerate() {
        let mut nearest_sq = f32::MAX;
        for (j, (other, _)) in samples.iter().enumerate() {
            if i != j {
                nearest_sq = nearest_sq.min(point.distance_sq(other));
            }
        }
        total += (nearest_sq as f64).sqrt();
    }
    total / samples.len() as f64
}

fn moran_i(samples: &[(Point, f64)], threshold: f64) -> f32 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let mean = samples.iter().map(|(_, value)| value).sum::<f64>() / n as f64;
    let variance_sum: f64 = samples
        .iter()
        .map(|(_, value)| (value - mean) * (value - mean))
        .sum();
    if variance_sum == 0.0 {
        return 0.0;
    }

    let threshold_sq = threshold * threshold;
    let mut weight_sum = 0.0f64;
    let mut cross_sum = 0.0f64;
    for (i, (point_i, value_i)) in samples.iter().enumerate() {
        for (j, (point_j, value_j)) in samples.iter().enumerate() {
            if i == j {
                continue;
            }
            if point_i.distance_sq(point_j) as f64 <= threshold_sq {
                weight_sum += 1.0;
                cross_sum += (value_i - mean) * (value_j - mean);
            }
        }
    }
    if weight_sum == 0.0 {
        return 0.0;
    }

    let moran = (n as f64 / weight_sum) * cross_sum / variance_sum;
    moran.clamp(-1.0, 1.0) as f32
}
