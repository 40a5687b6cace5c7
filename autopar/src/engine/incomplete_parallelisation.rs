use std::ops::Range;

use super::DependencyGraphs;
use super::GoalGroup;
use super::GoalsForParallelisation;
use crate::autopar_assert_advanced;
use crate::autopar_assert_moderate;
use crate::basic_types::Goal;
use crate::cost_model::sequential_cost;
use crate::cost_model::ParallelCostData;
use crate::cost_model::ParallelCostModel;
use crate::cost_model::ParallelisationLayout;
use crate::options::AutoparOptions;

/// A candidate parallelisation in which the goal groups up to and including
/// `last_scheduled_goal` have been assigned to parallel conjuncts.
///
/// Every modification returns a new value; the two alternatives at a decision never share
/// state.
#[derive(Debug, Clone)]
pub(crate) struct IncompleteParallelisation<'a> {
    goals: &'a [Goal],
    first_par_goal: usize,
    last_par_goal: usize,
    /// The last goal of the last parallel conjunct
    last_scheduled_goal: usize,
    /// The last goal of every parallel conjunct apart from the last one.
    ///
    /// Stored in construction order, which is also the left-to-right order of the conjuncts.
    split_points: Vec<usize>,
    num_calls: u64,
    dependency_graphs: &'a DependencyGraphs,
    costs: CachedCosts,
}

/// The costs of a candidate, which are cleared together whenever the candidate changes.
#[derive(Debug, Clone, Default)]
struct CachedCosts {
    goals_before_cost: Option<f64>,
    goals_after_cost: Option<f64>,
    par_cost_data: Option<ParallelCostData>,
}

impl<'a> IncompleteParallelisation<'a> {
    /// Creates the candidate in which `first_group` forms the first parallel conjunct.
    pub(crate) fn new(preprocessed: &'a GoalsForParallelisation, first_group: &GoalGroup) -> Self {
        autopar_assert_moderate!(first_group.index == preprocessed.first_costly_goal());

        Self {
            goals: preprocessed.goals(),
            first_par_goal: preprocessed.first_costly_goal(),
            last_par_goal: preprocessed.last_costly_goal(),
            last_scheduled_goal: first_group.last_goal(),
            split_points: vec![],
            num_calls: preprocessed.num_calls(),
            dependency_graphs: preprocessed.dependency_graphs(),
            costs: CachedCosts::default(),
        }
    }

    /// Returns the candidate in which `group` is added to the last parallel conjunct.
    pub(crate) fn append_group(&self, group: &GoalGroup) -> Self {
        autopar_assert_moderate!(group.index == self.last_scheduled_goal + 1);

        let mut appended = self.clone();
        appended.last_scheduled_goal = group.last_goal();
        appended.costs = CachedCosts::default();
        appended
    }

    /// Returns the candidate in which `group` starts a new parallel conjunct.
    pub(crate) fn split_with_group(&self, group: &GoalGroup) -> Self {
        autopar_assert_moderate!(group.index == self.last_scheduled_goal + 1);

        let mut split = self.clone();
        split.split_points.push(self.last_scheduled_goal);
        split.last_scheduled_goal = group.last_goal();
        split.costs = CachedCosts::default();
        split
    }

    pub(crate) fn num_parallel_conjuncts(&self) -> usize {
        self.split_points.len() + 1
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.last_scheduled_goal == self.last_par_goal
    }

    pub(crate) fn goals(&self) -> &'a [Goal] {
        self.goals
    }

    pub(crate) fn goals_before(&self) -> Range<usize> {
        0..self.first_par_goal
    }

    /// The goals after the parallel conjuncts, including the goals which have not been scheduled
    /// yet.
    pub(crate) fn goals_after(&self) -> Range<usize> {
        self.last_scheduled_goal + 1..self.goals.len()
    }

    /// The goals of each parallel conjunct, from left to right.
    pub(crate) fn conjuncts(&self) -> Vec<Range<usize>> {
        let mut start = self.first_par_goal;
        let mut conjuncts = Vec::with_capacity(self.num_parallel_conjuncts());
        for &split_point in self.split_points.iter() {
            conjuncts.push(start..split_point + 1);
            start = split_point + 1;
        }
        conjuncts.push(start..self.last_scheduled_goal + 1);
        autopar_assert_advanced!(conjuncts
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start && !pair[0].is_empty()));
        conjuncts
    }

    pub(crate) fn layout(&self) -> ParallelisationLayout<'a> {
        ParallelisationLayout {
            goals: self.goals,
            goals_before: self.goals_before(),
            conjuncts: self.conjuncts(),
            goals_after: self.goals_after(),
            num_calls: self.num_calls,
            dependency_graphs: self.dependency_graphs,
        }
    }

    /// Clears the cached costs and computes them again; returns whether the cost model could
    /// evaluate this candidate.
    pub(crate) fn recompute_cost(
        &mut self,
        options: &AutoparOptions,
        cost_model: &impl ParallelCostModel,
    ) -> bool {
        let layout = self.layout();
        self.costs = CachedCosts {
            goals_before_cost: Some(sequential_cost(
                self.goals,
                layout.goals_before.clone(),
                self.num_calls,
            )),
            goals_after_cost: Some(sequential_cost(
                self.goals,
                layout.goals_after.clone(),
                self.num_calls,
            )),
            par_cost_data: cost_model.compute_parallel_cost(options, &layout),
        };
        self.costs.par_cost_data.is_some()
    }

    pub(crate) fn par_cost_data(&self) -> Option<&ParallelCostData> {
        self.costs.par_cost_data.as_ref()
    }

    pub(crate) fn objective_value(&self) -> Option<f64> {
        self.par_cost_data().map(ParallelCostData::objective_value)
    }

    pub(crate) fn goals_before_cost(&self) -> Option<f64> {
        self.costs.goals_before_cost
    }

    pub(crate) fn goals_after_cost(&self) -> Option<f64> {
        self.costs.goals_after_cost
    }
}
