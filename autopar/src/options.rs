//! Options which control the search for parallelisations and the cost model it uses.

use crate::optimisation::BestParAlgorithm;

/// Options for the search for the best parallelisation of a conjunction.
///
/// The cost related options are expressed in the same unit as the profiled per-call costs of the
/// goals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoparOptions {
    /// How the space of parallelisations is explored
    pub best_par_algorithm: BestParAlgorithm,
    /// Whether conjuncts which share variables may be executed in parallel
    pub dependent_conjunctions: DependentConjunctions,
    /// The per-call cost above which a goal is considered costly
    pub costly_threshold: f64,
    /// The cost to a context of creating a spark for the remaining conjuncts
    pub sparking_cost: f64,
    /// The delay between creating a spark and the spark being executed
    pub sparking_delay: f64,
    /// The cost of the barrier at the end of a sparked conjunct
    pub barrier_cost: f64,
    /// The cost of signalling that a shared variable has been produced
    pub future_signal_cost: f64,
    /// The cost of waiting on a shared variable
    pub future_wait_cost: f64,
    /// The delay before a context which blocked on a shared variable resumes
    pub context_wakeup_delay: f64,
}

impl Default for AutoparOptions {
    fn default() -> Self {
        Self {
            best_par_algorithm: BestParAlgorithm::default(),
            dependent_conjunctions: DependentConjunctions::default(),
            costly_threshold: 2000.0,
            sparking_cost: 100.0,
            sparking_delay: 1000.0,
            barrier_cost: 100.0,
            future_signal_cost: 100.0,
            future_wait_cost: 200.0,
            context_wakeup_delay: 1000.0,
        }
    }
}

impl AutoparOptions {
    pub fn allows_dependent_conjunctions(&self) -> bool {
        matches!(
            self.dependent_conjunctions,
            DependentConjunctions::Parallelise(_)
        )
    }

    /// The estimate which is used for the speedup of dependent conjunctions.
    ///
    /// When dependent conjunctions are not parallelised, the dependencies are still taken into
    /// account by the overlap estimate so that the cost of such candidates is not underestimated.
    pub fn speedup_estimate(&self) -> SpeedupEstimate {
        match self.dependent_conjunctions {
            DependentConjunctions::DoNotParallelise => SpeedupEstimate::Overlap,
            DependentConjunctions::Parallelise(estimate) => estimate,
        }
    }
}

/// Whether dependent conjunctions are allowed to be parallelised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependentConjunctions {
    #[default]
    DoNotParallelise,
    Parallelise(SpeedupEstimate),
}

/// How the speedup of dependent parallel conjuncts is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SpeedupEstimate {
    /// Assume that the conjuncts never have to wait for the variables they share
    Naive,
    /// Compute how the execution of the conjuncts overlaps, given the times at which the shared
    /// variables are produced and consumed
    #[default]
    Overlap,
}
