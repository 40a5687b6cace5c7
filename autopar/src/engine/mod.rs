//! The search for the best parallelisation of a conjunction: preprocessing, the search state, the
//! branch-and-bound search itself and the conversion of its result.

mod best_solutions;
mod dependency_graph;
mod finaliser;
mod incomplete_parallelisation;
mod preprocessing;
mod search;
mod search_statistics;

pub(crate) use best_solutions::BestSolutions;
pub(crate) use best_solutions::SolutionComparison;
pub use dependency_graph::DependencyGraphs;
pub(crate) use finaliser::finalise_parallelisation;
pub(crate) use incomplete_parallelisation::IncompleteParallelisation;
pub use preprocessing::preprocess_conjunction;
pub use preprocessing::GoalGroup;
pub use preprocessing::GoalsForParallelisation;
pub(crate) use search::BranchAndBoundSearch;
pub use search_statistics::SearchStatistics;
