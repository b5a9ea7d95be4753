pub use error::{Error, Result};
pub use nearest::{nearest_neighbor, resolve_start};
pub use planner::{Planner, PlannerOptions};
pub use point::{DistanceMode, NodeId, Point};
pub use problem::{EdgeWeightType, Header, Problem, ProblemType};
pub use tour::Tour;

mod error;
mod nearest;
mod planner;
mod point;
mod problem;
mod tour;
