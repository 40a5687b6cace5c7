//! Contains the selection of the algorithm which is used to search for the best parallelisation.

use log::debug;

use crate::engine::SearchStatistics;

/// The configured strategy for searching for the best parallelisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BestParAlgorithm {
    /// Explore the whole search space, only pruning branches which cannot improve on the best
    /// solution found so far.
    #[default]
    Complete,
    /// As [`BestParAlgorithm::Complete`], but stop branching once the given number of incomplete
    /// parallelisations has been evaluated.
    CompleteBranches(u64),
    /// As [`BestParAlgorithm::Complete`] for conjunctions with at most the given number of goals,
    /// [`BestParAlgorithm::Greedy`] for larger conjunctions.
    CompleteSize(usize),
    /// Never branch; at every step only the cheapest decision is followed.
    Greedy,
}

/// The algorithm which is used for a particular conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    /// Branch-and-bound search, optionally limited in the number of incomplete parallelisations
    /// which are evaluated.
    Complete { branch_limit: Option<u64> },
    Greedy,
}

/// Selects the algorithm to use for a conjunction consisting of `conjunction_size` goals.
pub fn choose_algorithm(configured: BestParAlgorithm, conjunction_size: usize) -> SearchAlgorithm {
    let algorithm = match configured {
        BestParAlgorithm::Complete => SearchAlgorithm::Complete { branch_limit: None },
        BestParAlgorithm::CompleteBranches(limit) => SearchAlgorithm::Complete {
            branch_limit: Some(limit),
        },
        BestParAlgorithm::CompleteSize(max_size) => {
            if conjunction_size > max_size {
                SearchAlgorithm::Greedy
            } else {
                SearchAlgorithm::Complete { branch_limit: None }
            }
        }
        BestParAlgorithm::Greedy => SearchAlgorithm::Greedy,
    };

    debug!("Using {algorithm:?} for a conjunction of {conjunction_size} goals");
    algorithm
}

impl SearchAlgorithm {
    /// Returns whether the search should explore both alternatives at the current decision.
    ///
    /// Once a branch limit has been reached this keeps returning `false` for the remainder of the
    /// search, since the counters it is compared against never decrease.
    pub fn should_expand_search(&self, statistics: &SearchStatistics) -> bool {
        match self {
            SearchAlgorithm::Complete { branch_limit: None } => true,
            SearchAlgorithm::Complete {
                branch_limit: Some(limit),
            } => {
                statistics.incomplete_good_enough + statistics.incomplete_not_good_enough < *limit
            }
            SearchAlgorithm::Greedy => false,
        }
    }
}
