use crate::create_statistics_struct;

create_statistics_struct!(
    /// The counters of a single run of the search for the best parallelisation.
    pub SearchStatistics {
        /// The number of incomplete candidates which passed the good-enough test
        incomplete_good_enough: u64,
        /// The number of incomplete candidates which were pruned by the good-enough test
        incomplete_not_good_enough: u64,
        /// The number of complete candidates which were strictly better than all earlier ones
        complete_best_solution: u64,
        /// The number of complete candidates which were as good as the best one
        complete_equal_solution: u64,
        /// The number of complete candidates which were worse than the best one
        complete_worse_solution: u64,
        /// The number of complete candidates with fewer than two parallel conjuncts
        complete_non_solution: u64,
});
