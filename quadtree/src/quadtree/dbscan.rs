use super::QuadTree;
use common::shapes::Point;
use fxhash::FxHashSet;

impl<V: Clone> QuadTree<V> {
    /// DBSCAN clustering over the stored points. A point is a core
    /// point when the closed disk of radius `eps` around it (including
    /// itself) holds at least `min_pts` entries; clusters are grown by
    /// flood fill across core neighbourhoods. Noise points are omitted.
    ///
    /// Neighbourhood lookups go through [`QuadTree::query_circle`], so
    /// each expansion costs a pruned tree walk rather than a full scan.
    pub fn dbscan_cluster(&self, eps: f32, min_pts: usize) -> Vec<Vec<Point>> {
        let points: Vec<Point> = self.iter().map(|(point, _)| point).collect();
        let mut visited: FxHashSet<Point> = FxHashSet::default();
        let mut clustered: FxHashSet<Point> = FxHashSet::default();
        let mut clusters = Vec::new();
        let mut neighborhood: Vec<(Point, V)> = Vec::new();

        for &point in &points {
            if visited.contains(&point) {
                continue;
            }
            visited.insert(point);
            neighborhood.clear();
            self.query_circle(point, eps, &mut neighborhood);
            if neighborhood.len() < min_pts {
                continue;
            }

            let mut cluster = vec![point];
            clustered.insert(point);
            let mut frontier: Vec<Point> =
                neighborhood.iter().map(|(neighbor, _)| *neighbor).collect();
            let mut next = 0;
            while next < frontier.len() {
                let candidate = frontier[next];
                next += 1;
                if visited.insert(candidate) {
                    neighborhood.clear();
                    self.query_circle(candidate, eps, &mut neighborhood);
                    if neighborhood.len() >= min_pts {
                        frontier.extend(neighborhood.iter().map(|(neighbor, _)| *neighbor));
                    }
                }
                if clustered.insert(candidate) {
                    cluster.push(candidate);
                }
            }
            clusters.push(cluster);
        }
        clusters
    }
}
