use std::{io::Write, time::Instant};

use log::{debug, info};

use super::{
    error::Error,
    nearest::nearest_neighbor,
    point::{DistanceMode, NodeId},
    problem::Problem,
    tour::Tour,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct PlannerOptions {
    /// Node to start from. Defaults to the first node in the problem.
    pub start: Option<NodeId>,
    pub mode: DistanceMode,
}

pub struct Planner {
    problem: Problem,
    options: PlannerOptions,
}

impl Planner {
    pub fn on(problem: Problem, options: PlannerOptions) -> Self {
        Self { problem, options }
    }

    pub fn start_id(&self) -> Option<NodeId> {
        self.options.start.or_else(|| self.problem.first_id())
    }

    /// Builds the tour and writes its edge listing to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<Tour> {
        info!(
            "problem {}: {} nodes, {} weights",
            self.problem.header.name.as_deref().unwrap_or("<unnamed>"),
            self.problem.len(),
            self.options.mode
        );

        debug!("header: {:?}", self.problem.header);

        let start_id = self.start_id().ok_or(Error::EmptyCollection)?;

        let now = Instant::now();
        let tour = nearest_neighbor(&self.problem.points, start_id, self.options.mode)?;
        let time = now.elapsed();

        info!(
            "tour from {} has {} edges and length {}",
            start_id,
            tour.num_edges(),
            tour.total_distance
        );
        info!("took {:?}", time);

        write!(out, "{}", tour)?;
        out.flush()?;

        Ok(tour)
    }
}
