use strum::{Display, EnumString};

pub type NodeId = usize;

/// How edge weights are measured between two points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DistanceMode {
    /// Real-valued Euclidean distance.
    #[default]
    #[strum(ascii_case_insensitive)]
    Exact,
    /// Euclidean distance truncated toward zero, as whole-number weights.
    #[strum(ascii_case_insensitive)]
    Truncated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to `other`. Symmetric, and zero for coincident points.
    pub fn distance(&self, other: &Point, mode: DistanceMode) -> f64 {
        let exact = ((other.y - self.y).powi(2) + (other.x - self.x).powi(2)).sqrt();
        match mode {
            DistanceMode::Exact => exact,
            DistanceMode::Truncated => exact.trunc(),
        }
    }
}
