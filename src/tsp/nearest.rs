//! Greedy nearest-neighbor tour construction.
//!
//! Starting from a chosen point, the tour is always extended to the closest
//! point not yet visited, then closed back to the start. Runs in O(n²)
//! distance evaluations.

use log::trace;

use super::{
    error::{Error, Result},
    point::{DistanceMode, NodeId, Point},
    tour::Tour,
};

/// Finds the point named `start_id`, returning its position in `points` too.
pub fn resolve_start(points: &[Point], start_id: NodeId) -> Result<(usize, Point)> {
    if points.is_empty() {
        return Err(Error::EmptyCollection);
    }
    points
        .iter()
        .enumerate()
        .find(|(_, p)| p.id == start_id)
        .map(|(idx, &p)| (idx, p))
        .ok_or(Error::InvalidStartIdentifier(start_id))
}

/// Builds a closed tour over `points` beginning and ending at `start_id`.
///
/// Candidates are scanned in slice order and only a strictly shorter edge
/// replaces the current best, so the earlier point wins exact ties.
pub fn nearest_neighbor(points: &[Point], start_id: NodeId, mode: DistanceMode) -> Result<Tour> {
    let mut builder = TourBuilder::new(points, start_id, mode)?;
    while !builder.done() {
        builder.move_to_next();
    }
    builder.complete();
    Ok(builder.into_tour())
}

struct TourBuilder<'a> {
    points: &'a [Point],
    mode: DistanceMode,
    start: Point,
    current: usize,
    visited: Vec<bool>,
    visited_count: usize,
    tour: Tour,
}

impl<'a> TourBuilder<'a> {
    fn new(points: &'a [Point], start_id: NodeId, mode: DistanceMode) -> Result<Self> {
        let (start_idx, start) = resolve_start(points, start_id)?;

        let mut visited = vec![false; points.len()];
        visited[start_idx] = true;

        Ok(Self {
            points,
            mode,
            start,
            current: start_idx,
            visited,
            visited_count: 1,
            tour: Tour {
                path: vec![start],
                weights: vec![0.0],
                total_distance: 0.0,
            },
        })
    }

    fn done(&self) -> bool {
        self.visited_count == self.points.len()
    }

    fn move_to_next(&mut self) {
        match self.find_next_node() {
            Some((next, distance)) => self.visit(next, distance),
            // Not done means at least one point is still unvisited
            None => unreachable!(
                "no unvisited point left after {} of {}",
                self.visited_count,
                self.points.len()
            ),
        }
    }

    fn find_next_node(&self) -> Option<(usize, f64)> {
        let cur = &self.points[self.current];
        let mut best: Option<(usize, f64)> = None;

        for (i, candidate) in self.points.iter().enumerate() {
            if self.visited[i] {
                continue;
            }
            let d = cur.distance(candidate, self.mode);
            // A NaN best loses to any real distance
            let closer = best.map_or(true, |(_, best_d)| {
                d < best_d || (best_d.is_nan() && !d.is_nan())
            });
            if closer {
                best = Some((i, d));
            }
        }

        best
    }

    fn visit(&mut self, idx: usize, distance: f64) {
        let point = self.points[idx];
        trace!(
            "edge {} -> {} weight {}",
            self.points[self.current].id,
            point.id,
            distance
        );

        self.tour.path.push(point);
        self.tour.weights.push(distance);
        self.tour.total_distance += distance;

        self.visited[idx] = true;
        self.visited_count += 1;
        self.current = idx;
    }

    fn complete(&mut self) {
        let back = self.points[self.current].distance(&self.start, self.mode);
        trace!(
            "closing edge {} -> {} weight {}",
            self.points[self.current].id,
            self.start.id,
            back
        );
        self.tour.path.push(self.start);
        self.tour.weights.push(back);
        self.tour.total_distance += back;
    }

    fn into_tour(self) -> Tour {
        self.tour
    }
}
