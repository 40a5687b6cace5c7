use std::ops::Range;

use crate::basic_types::Goal;
use crate::cost_model::ConjunctDependence;
use crate::cost_model::ParallelExecMetrics;

/// The best parallelisation which was found for a conjunction.
///
/// The conjunction is executed as the goals in [`FullParallelisation::goals_before`], followed
/// by the parallel execution of [`FullParallelisation::par_conjuncts`], followed by the goals in
/// [`FullParallelisation::goals_after`].
#[derive(Debug, Clone, PartialEq)]
pub struct FullParallelisation {
    pub goals_before: Vec<Goal>,
    /// The parallel conjuncts from left to right; always at least two
    pub par_conjuncts: Vec<Vec<Goal>>,
    pub goals_after: Vec<Goal>,
    /// The positions of the goals of every parallel conjunct in the original conjunction
    pub par_conjunct_positions: Vec<Range<usize>>,
    pub dependence: ConjunctDependence,
    pub metrics: ParallelExecMetrics,
}

impl FullParallelisation {
    pub fn num_par_conjuncts(&self) -> usize {
        self.par_conjuncts.len()
    }

    pub fn conjuncts_are_independent(&self) -> bool {
        self.dependence.is_independent()
    }
}
