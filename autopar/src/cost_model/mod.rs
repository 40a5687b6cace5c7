//! Contains the cost model which estimates how long a candidate parallelisation takes to execute.
//!
//! The search only interacts with the model through [`ParallelCostModel`]; the default
//! implementation is [`OverlapCostModel`].

mod execution_overlap;
mod metrics;
mod overlap_cost_model;

use std::ops::Range;

pub use execution_overlap::ConjunctDependence;
pub use execution_overlap::ConjunctExecution;
pub use execution_overlap::ExecutionOverlap;
pub use metrics::IncrementalMetrics;
pub use metrics::ParallelExecMetrics;
pub use overlap_cost_model::OverlapCostModel;

use crate::basic_types::Goal;
use crate::engine::DependencyGraphs;
use crate::options::AutoparOptions;

/// Whether a goal is expensive enough to be worth executing in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalCostClass {
    Cheap,
    Costly,
}

pub fn classify_goal_cost(options: &AutoparOptions, goal: &Goal) -> GoalCostClass {
    if goal.cost.percall > options.costly_threshold {
        GoalCostClass::Costly
    } else {
        GoalCostClass::Cheap
    }
}

/// The cost of executing the goals in `range` one after the other, for a single execution of the
/// conjunction.
pub fn sequential_cost(goals: &[Goal], range: Range<usize>, num_calls: u64) -> f64 {
    goals[range]
        .iter()
        .map(|goal| goal.cost.cost_per_conjunction_call(num_calls))
        .sum()
}

/// How a candidate divides the goals of a conjunction; all ranges are 0-based positions into
/// [`ParallelisationLayout::goals`].
///
/// For an incomplete candidate, the goals which have not been scheduled yet are part of
/// [`ParallelisationLayout::goals_after`].
#[derive(Debug, Clone)]
pub struct ParallelisationLayout<'a> {
    pub goals: &'a [Goal],
    pub goals_before: Range<usize>,
    pub conjuncts: Vec<Range<usize>>,
    pub goals_after: Range<usize>,
    pub num_calls: u64,
    pub dependency_graphs: &'a DependencyGraphs,
}

/// The cost estimate of a candidate parallelisation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelCostData {
    pub overlap: ExecutionOverlap,
    pub metrics: IncrementalMetrics,
}

impl ParallelCostData {
    pub fn objective_value(&self) -> f64 {
        self.metrics.objective_value()
    }
}

/// Estimates the cost of candidate parallelisations.
///
/// Implementations are expected to be pure: the search evaluates the same layout more than once
/// and discards results freely. A model may decline to evaluate a layout by returning [`None`],
/// but it has to evaluate every layout in which the last parallel conjunct was extended when it
/// evaluated the layout before the extension.
pub trait ParallelCostModel {
    fn compute_parallel_cost(
        &self,
        options: &AutoparOptions,
        layout: &ParallelisationLayout<'_>,
    ) -> Option<ParallelCostData>;
}
