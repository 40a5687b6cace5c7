/// The weight of the parallelisation overheads relative to the parallel execution time in the
/// objective value.
const OVERHEAD_WEIGHT: f64 = 2.0;

/// Metrics of a (possibly incomplete) parallelisation, for a single execution of the
/// conjunction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncrementalMetrics {
    /// The number of times the conjunction was executed
    pub num_calls: u64,
    /// The time the conjunction takes when executed sequentially
    pub seq_time: f64,
    /// The time the conjunction takes when executed in parallel, overheads included
    pub par_time: f64,
    /// The overheads of the parallel execution
    pub par_overheads: f64,
    /// The time the original context spends waiting for the other conjuncts to finish
    pub first_conj_dead_time: f64,
    /// The time spent blocked on shared variables
    pub future_dead_time: f64,
}

impl IncrementalMetrics {
    /// The value which is minimised by the search.
    pub fn objective_value(&self) -> f64 {
        self.par_time + OVERHEAD_WEIGHT * self.par_overheads
    }

    pub fn finalise(&self) -> ParallelExecMetrics {
        let time_saving = self.seq_time - self.par_time;
        let speedup = if self.par_time > 0.0 {
            self.seq_time / self.par_time
        } else {
            1.0
        };

        ParallelExecMetrics {
            num_calls: self.num_calls,
            seq_time: self.seq_time,
            par_time: self.par_time,
            par_overheads: self.par_overheads,
            first_conj_dead_time: self.first_conj_dead_time,
            future_dead_time: self.future_dead_time,
            speedup,
            time_saving,
            total_time_saving: time_saving * self.num_calls as f64,
        }
    }
}

/// The reported metrics of a parallelisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelExecMetrics {
    pub num_calls: u64,
    /// Per-call sequential execution time
    pub seq_time: f64,
    /// Per-call parallel execution time
    pub par_time: f64,
    pub par_overheads: f64,
    pub first_conj_dead_time: f64,
    pub future_dead_time: f64,
    pub speedup: f64,
    /// Per-call time saved by executing the conjunction in parallel
    pub time_saving: f64,
    /// Time saved over all executions of the conjunction
    pub total_time_saving: f64,
}
