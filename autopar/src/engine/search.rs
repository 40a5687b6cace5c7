//! The branch-and-bound search over the ways of dividing the goal groups of a conjunction into
//! parallel conjuncts.
//!
//! The groups are processed from left to right. For every group after the first, the search
//! either appends the group to the last parallel conjunct or starts a new parallel conjunct with
//! it. Both candidates are costed; the cheaper one is followed first and, if the
//! [`SearchAlgorithm`] allows it, the other one is explored as well. Candidates which are worse
//! than the best complete candidate found so far, or which violate the policy on dependent
//! conjunctions, are pruned.

use log::trace;

use super::BestSolutions;
use super::GoalGroup;
use super::GoalsForParallelisation;
use super::IncompleteParallelisation;
use super::SearchStatistics;
use super::SolutionComparison;
use crate::autopar_assert_simple;
use crate::cost_model::ParallelCostData;
use crate::cost_model::ParallelCostModel;
use crate::optimisation::SearchAlgorithm;
use crate::options::AutoparOptions;

/// The outcome of a single run of the search.
#[derive(Debug)]
pub(crate) struct SearchResult<'a> {
    pub(crate) best_solutions: BestSolutions<IncompleteParallelisation<'a>>,
    pub(crate) statistics: SearchStatistics,
}

pub(crate) struct BranchAndBoundSearch<'a, 'b, Model> {
    options: &'b AutoparOptions,
    algorithm: SearchAlgorithm,
    cost_model: &'b Model,
    best_solutions: BestSolutions<IncompleteParallelisation<'a>>,
    statistics: SearchStatistics,
}

impl<Model> std::fmt::Debug for BranchAndBoundSearch<'_, '_, Model> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchAndBoundSearch")
            .field("algorithm", &self.algorithm)
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}

/// Returns whether the candidate may be executed given the policy on dependent conjunctions.
pub(crate) fn respects_dependency_policy(
    options: &AutoparOptions,
    cost_data: &ParallelCostData,
) -> bool {
    options.allows_dependent_conjunctions()
        || cost_data.overlap.conjuncts_dependence().is_independent()
}

impl<'a, 'b, Model: ParallelCostModel> BranchAndBoundSearch<'a, 'b, Model> {
    pub(crate) fn new(
        options: &'b AutoparOptions,
        algorithm: SearchAlgorithm,
        cost_model: &'b Model,
    ) -> Self {
        Self {
            options,
            algorithm,
            cost_model,
            best_solutions: BestSolutions::default(),
            statistics: SearchStatistics::default(),
        }
    }

    pub(crate) fn run(mut self, preprocessed: &'a GoalsForParallelisation) -> SearchResult<'a> {
        let Some((first_group, remaining_groups)) = preprocessed.goal_groups().split_first()
        else {
            panic!("A conjunction prepared for parallelisation has at least one goal group");
        };

        let start = IncompleteParallelisation::new(preprocessed, first_group);
        self.generate_parallelisations(remaining_groups, start);

        trace!("Search finished: {:?}", self.statistics);
        SearchResult {
            best_solutions: self.best_solutions,
            statistics: self.statistics,
        }
    }

    fn generate_parallelisations(
        &mut self,
        groups: &[GoalGroup],
        candidate: IncompleteParallelisation<'a>,
    ) {
        let Some((group, remaining_groups)) = groups.split_first() else {
            self.complete_parallelisation(candidate);
            return;
        };

        let mut append = candidate.append_group(group);
        let mut split = candidate.split_with_group(group);
        let append_has_cost = append.recompute_cost(self.options, self.cost_model);
        let split_has_cost = split.recompute_cost(self.options, self.cost_model);

        autopar_assert_simple!(
            append_has_cost,
            "the cost model has to evaluate a candidate in which the last conjunct is extended"
        );

        trace!(
            "Goal {}: append costs {:?}, split costs {:?}",
            group.index,
            append.objective_value(),
            split.objective_value()
        );

        let (primary, alternative) = if split_has_cost && Self::prefers_split(&append, &split) {
            (split, Some(append))
        } else if split_has_cost {
            (append, Some(split))
        } else {
            (append, None)
        };

        match alternative {
            Some(alternative) if self.algorithm.should_expand_search(&self.statistics) => {
                for branch in [primary, alternative] {
                    if self.is_good_enough(&branch) {
                        self.generate_parallelisations(remaining_groups, branch);
                    }
                }
            }
            _ => {
                if self.is_good_enough(&primary) {
                    self.generate_parallelisations(remaining_groups, primary);
                }
            }
        }
    }

    /// Returns whether `split` should be explored before `append`; the cheapest candidate comes
    /// first and ties favour `append`. The policy on dependent conjunctions is left to
    /// [`Self::is_good_enough`].
    fn prefers_split(
        append: &IncompleteParallelisation<'a>,
        split: &IncompleteParallelisation<'a>,
    ) -> bool {
        match (append.objective_value(), split.objective_value()) {
            (Some(append_cost), Some(split_cost)) => split_cost < append_cost,
            _ => false,
        }
    }

    /// Tests whether the search should continue with `candidate`.
    fn is_good_enough(&mut self, candidate: &IncompleteParallelisation<'a>) -> bool {
        let is_good_enough = match candidate.par_cost_data() {
            Some(cost_data) if respects_dependency_policy(self.options, cost_data) => {
                match self.best_solutions.best_objective_value() {
                    None => true,
                    Some(best) => cost_data.objective_value() <= best,
                }
            }
            _ => false,
        };

        if is_good_enough {
            self.statistics.incomplete_good_enough += 1;
        } else {
            trace!(
                "Pruning candidate with conjuncts {:?}",
                candidate.conjuncts()
            );
            self.statistics.incomplete_not_good_enough += 1;
        }
        is_good_enough
    }

    fn complete_parallelisation(&mut self, candidate: IncompleteParallelisation<'a>) {
        autopar_assert_simple!(candidate.is_complete());

        if candidate.num_parallel_conjuncts() < 2 {
            self.statistics.complete_non_solution += 1;
            return;
        }

        let objective_value = candidate
            .objective_value()
            .expect("a candidate with several conjuncts has been costed");

        trace!(
            "Complete candidate {:?} (before: {:?}, after: {:?}) with objective value {objective_value}",
            candidate.conjuncts(),
            candidate.goals_before_cost(),
            candidate.goals_after_cost(),
        );

        match self.best_solutions.offer(candidate, objective_value) {
            SolutionComparison::Better => self.statistics.complete_best_solution += 1,
            SolutionComparison::Equal => self.statistics.complete_equal_solution += 1,
            SolutionComparison::Worse => self.statistics.complete_worse_solution += 1,
        }
    }
}
