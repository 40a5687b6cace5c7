pub(crate) mod outputs;

use log::debug;

use crate::basic_types::AutoparError;
use crate::basic_types::Goal;
use crate::basic_types::Message;
use crate::basic_types::ProgramLocation;
use crate::cost_model::OverlapCostModel;
use crate::cost_model::ParallelCostModel;
use crate::engine::finalise_parallelisation;
use crate::engine::preprocess_conjunction;
use crate::engine::BranchAndBoundSearch;
use crate::engine::SearchStatistics;
use crate::optimisation::choose_algorithm;
use crate::options::AutoparOptions;
use crate::options::DependentConjunctions;
use crate::options::SpeedupEstimate;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::FullParallelisation;

/// Searches for the best parallelisation of `goals` using the default [`OverlapCostModel`].
///
/// See [`ParallelisationFinder::find_best_parallelisation`].
pub fn find_best_parallelisation(
    options: &AutoparOptions,
    location: &ProgramLocation,
    goals: &[Goal],
    messages: &mut Vec<Message>,
) -> Result<Option<FullParallelisation>, AutoparError> {
    ParallelisationFinder::new(*options).find_best_parallelisation(location, goals, messages)
}

/// Searches for the best parallelisations of conjunctions using a [`ParallelCostModel`], and
/// keeps track of the [`SearchStatistics`] of the last search.
#[derive(Debug, Clone)]
pub struct ParallelisationFinder<Model = OverlapCostModel> {
    options: AutoparOptions,
    cost_model: Model,
    statistics: SearchStatistics,
}

impl ParallelisationFinder<OverlapCostModel> {
    pub fn new(options: AutoparOptions) -> Self {
        Self::with_cost_model(options, OverlapCostModel)
    }
}

impl Default for ParallelisationFinder<OverlapCostModel> {
    fn default() -> Self {
        Self::new(AutoparOptions::default())
    }
}

impl<Model: ParallelCostModel> ParallelisationFinder<Model> {
    pub fn with_cost_model(options: AutoparOptions, cost_model: Model) -> Self {
        Self {
            options,
            cost_model,
            statistics: SearchStatistics::default(),
        }
    }

    /// The statistics of the last run of the search; when the search was retried with dependent
    /// conjunctions allowed, these are the statistics of the retry.
    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Logs the statistics of the last search, if statistic logging has been configured with
    /// [`configure_statistic_logging`](crate::statistics::configure_statistic_logging).
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::default());
            log_statistic_postfix();
        }
    }

    /// Searches for the best parallelisation of the conjunction `goals`.
    ///
    /// Returns `Ok(None)` when the conjunction cannot be profitably parallelised; if this is
    /// because of the determinism of the goals, a [`Message`] is added to `messages`. If no
    /// parallelisation is found while dependent conjunctions are not allowed, the search is
    /// repeated once with dependent conjunctions allowed.
    ///
    /// The conjunction has to contain at least one costly goal, otherwise
    /// [`AutoparError::TooFewCostlyGoals`] is returned.
    pub fn find_best_parallelisation(
        &mut self,
        location: &ProgramLocation,
        goals: &[Goal],
        messages: &mut Vec<Message>,
    ) -> Result<Option<FullParallelisation>, AutoparError> {
        self.statistics = SearchStatistics::default();

        let algorithm = choose_algorithm(self.options.best_par_algorithm, goals.len());

        let Some(preprocessed) = preprocess_conjunction(&self.options, location, goals, messages)?
        else {
            return Ok(None);
        };

        let mut options = self.options;
        loop {
            let result = BranchAndBoundSearch::new(&options, algorithm, &self.cost_model)
                .run(&preprocessed);
            self.statistics = result.statistics;

            if let Some(best) = result.best_solutions.into_best() {
                return Ok(Some(finalise_parallelisation(best)));
            }

            if options.allows_dependent_conjunctions() {
                debug!("No parallelisation found for the conjunction at {location}");
                return Ok(None);
            }

            debug!(
                "No independent parallelisation found for the conjunction at {location}, \
                 retrying with dependent conjunctions"
            );
            options.dependent_conjunctions =
                DependentConjunctions::Parallelise(SpeedupEstimate::Overlap);
        }
    }
}
