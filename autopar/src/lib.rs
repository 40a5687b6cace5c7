//! # Autopar
//! Searches for profitable ways of executing the goals of a conjunction in parallel, based on
//! profiling data.
//!
//! The goals between the first and the last costly goal of a conjunction are divided into
//! parallel conjuncts by a branch-and-bound search. Every candidate is evaluated by a
//! [`ParallelCostModel`](cost_model::ParallelCostModel) which estimates how long the parallel
//! execution takes, including the overheads of creating sparks and of communicating shared
//! variables. The candidate with the lowest objective value (parallel time plus twice the
//! overheads) is reported.
//!
//! ```rust
//! # use autopar::find_best_parallelisation;
//! # use autopar::options::AutoparOptions;
//! # use autopar::Determinism;
//! # use autopar::Goal;
//! # use autopar::GoalCost;
//! # use autopar::ProgramLocation;
//! # use autopar::Var;
//! let goals = vec![
//!     Goal::new("p", GoalCost::new(10, 10_000.0), Determinism::Det).binds([Var(1)]),
//!     Goal::new("q", GoalCost::new(10, 10_000.0), Determinism::Det).binds([Var(2)]),
//!     Goal::new("r", GoalCost::new(10, 10.0), Determinism::Det).consumes([Var(1), Var(2)]),
//! ];
//!
//! let mut messages = vec![];
//! let parallelisation = find_best_parallelisation(
//!     &AutoparOptions::default(),
//!     &ProgramLocation::new("main/2", ""),
//!     &goals,
//!     &mut messages,
//! )
//! .expect("the conjunction contains costly goals")
//! .expect("p and q can be executed in parallel");
//!
//! assert_eq!(parallelisation.num_par_conjuncts(), 2);
//! assert!(parallelisation.conjuncts_are_independent());
//! assert!(parallelisation.metrics.speedup > 1.0);
//! ```
pub(crate) mod asserts;
pub(crate) mod basic_types;
pub(crate) mod engine;

pub mod cost_model;
pub mod optimisation;
pub mod options;
pub mod statistics;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
mod api;

pub use api::find_best_parallelisation;
pub use api::outputs::FullParallelisation;
pub use api::ParallelisationFinder;
pub use crate::basic_types::AutoparError;
pub use crate::basic_types::CanFail;
pub use crate::basic_types::Determinism;
pub use crate::basic_types::Goal;
pub use crate::basic_types::GoalCost;
pub use crate::basic_types::InstMapInfo;
pub use crate::basic_types::Message;
pub use crate::basic_types::MessageKind;
pub use crate::basic_types::ProgramLocation;
pub use crate::basic_types::SolutionCount;
pub use crate::basic_types::Var;
pub use crate::engine::preprocess_conjunction;
pub use crate::engine::DependencyGraphs;
pub use crate::engine::GoalGroup;
pub use crate::engine::GoalsForParallelisation;
pub use crate::engine::SearchStatistics;
