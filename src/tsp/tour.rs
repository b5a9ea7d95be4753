use std::fmt;

use super::point::{NodeId, Point};

/// A closed tour. `weights[i]` is the length of the edge arriving at `path[i]`,
/// so `weights[0]` is always zero and the last point repeats the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tour {
    pub path: Vec<Point>,
    pub weights: Vec<f64>,
    pub total_distance: f64,
}

impl Tour {
    pub fn ids(&self) -> Vec<NodeId> {
        self.path.iter().map(|p| p.id).collect()
    }

    /// Number of edges, including the closing edge.
    pub fn num_edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point, f64)> + '_ {
        self.path
            .iter()
            .zip(self.path.iter().skip(1))
            .zip(self.weights.iter().skip(1))
            .map(|((from, to), &weight)| (from, to, weight))
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, to, weight) in self.edges() {
            writeln!(f, "EDGE {} -> {} | WEIGHT: {}", from.id, to.id, weight)?;
        }
        writeln!(f, "TOTAL DISTANCE: {}", self.total_distance)
    }
}
