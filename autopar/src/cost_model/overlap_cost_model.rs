use std::collections::BTreeSet;

use fnv::FnvHashMap;
use log::trace;

use super::sequential_cost;
use super::ConjunctExecution;
use super::ExecutionOverlap;
use super::IncrementalMetrics;
use super::ParallelCostData;
use super::ParallelCostModel;
use super::ParallelisationLayout;
use crate::basic_types::Var;
use crate::options::AutoparOptions;
use crate::options::SpeedupEstimate;

/// A [`ParallelCostModel`] which simulates the execution of the parallel conjuncts.
///
/// Every conjunct apart from the last sparks the conjuncts to its right before executing its own
/// goals; a sparked conjunct starts [`AutoparOptions::sparking_delay`] after its spark was
/// created. Variables which are produced in one conjunct and consumed in a later one are
/// signalled by their producer right after the producing goal finishes. With
/// [`SpeedupEstimate::Overlap`] a consumer blocks until such a variable has been produced; with
/// [`SpeedupEstimate::Naive`] it only pays the cost of waiting.
///
/// Layouts in which a conjunct consumes a variable bound by a later conjunct are declined; such
/// conjunctions are rejected by [`preprocess_conjunction`](crate::preprocess_conjunction).
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapCostModel;

impl ParallelCostModel for OverlapCostModel {
    fn compute_parallel_cost(
        &self,
        options: &AutoparOptions,
        layout: &ParallelisationLayout<'_>,
    ) -> Option<ParallelCostData> {
        let goals = layout.goals;
        let num_calls = layout.num_calls;
        let estimate = options.speedup_estimate();

        let before_time = sequential_cost(goals, layout.goals_before.clone(), num_calls);
        let after_time = sequential_cost(goals, layout.goals_after.clone(), num_calls);

        let num_conjuncts = layout.conjuncts.len();
        let region_start = layout.conjuncts.first().map_or(0, |range| range.start);

        // The conjunct binding each variable bound in the parallel region
        let mut binding_conjunct: FnvHashMap<Var, usize> = FnvHashMap::default();
        // The variables consumed by each conjunct
        let mut consumed_by_conjunct: Vec<BTreeSet<Var>> = Vec::with_capacity(num_conjuncts);
        for (index, range) in layout.conjuncts.iter().enumerate() {
            let mut consumed = BTreeSet::new();
            for goal in &goals[range.clone()] {
                consumed.extend(goal.inst_map_info.consumed.iter().copied());
                for var in goal.inst_map_info.bound.iter() {
                    let _ = binding_conjunct.insert(*var, index);
                }
            }
            consumed_by_conjunct.push(consumed);
        }

        // When each shared variable is produced, relative to the start of the region
        let mut production_times: FnvHashMap<Var, f64> = FnvHashMap::default();

        let mut overlap = ExecutionOverlap::Empty;
        let mut par_overheads = 0.0;
        let mut future_dead_time = 0.0;
        let mut seq_region_time = 0.0;
        let mut par_region_time: f64 = 0.0;
        let mut first_conj_end = 0.0;
        let mut conjunct_start = 0.0;

        for (index, range) in layout.conjuncts.iter().enumerate() {
            let is_last = index + 1 == num_conjuncts;
            let mut time = conjunct_start;
            let mut next_conjunct_start = conjunct_start;

            if !is_last {
                time += options.sparking_cost;
                par_overheads += options.sparking_cost;
                next_conjunct_start = time + options.sparking_delay;
            }

            let consumed_later = consumed_by_conjunct[index + 1..]
                .iter()
                .flatten()
                .copied()
                .collect::<BTreeSet<_>>();

            let has_earlier_dependencies = index > 0
                && layout
                    .dependency_graphs
                    .any_dependency_between(region_start..range.start, range.clone());

            let mut shared_vars = BTreeSet::new();
            for goal_index in range.clone() {
                let goal = &goals[goal_index];

                for var in goal.inst_map_info.consumed.iter() {
                    match binding_conjunct.get(var) {
                        Some(&producer) if producer > index => {
                            trace!("{var} is consumed before it is produced");
                            return None;
                        }
                        Some(&producer) if producer < index && has_earlier_dependencies => {
                            if !shared_vars.insert(*var) {
                                continue;
                            }
                            time += options.future_wait_cost;
                            par_overheads += options.future_wait_cost;

                            let produced_at = production_times.get(var).copied().unwrap_or(0.0);
                            if estimate == SpeedupEstimate::Overlap && produced_at > time {
                                let resumed_at = produced_at + options.context_wakeup_delay;
                                future_dead_time += resumed_at - time;
                                time = resumed_at;
                            }
                        }
                        _ => {}
                    }
                }

                let goal_time = goal.cost.cost_per_conjunction_call(num_calls);
                time += goal_time;
                seq_region_time += goal_time;

                for var in goal.inst_map_info.bound.iter() {
                    if consumed_later.contains(var) {
                        time += options.future_signal_cost;
                        par_overheads += options.future_signal_cost;
                        let _ = production_times.insert(*var, time);
                    }
                }
            }

            if index > 0 {
                time += options.barrier_cost;
                par_overheads += options.barrier_cost;
            } else {
                first_conj_end = time;
            }

            par_region_time = par_region_time.max(time);
            overlap = overlap.with_conjunct(
                ConjunctExecution {
                    start: conjunct_start,
                    end: time,
                },
                shared_vars,
            );
            conjunct_start = next_conjunct_start;
        }

        let metrics = IncrementalMetrics {
            num_calls,
            seq_time: before_time + seq_region_time + after_time,
            par_time: before_time + par_region_time + after_time,
            par_overheads,
            first_conj_dead_time: par_region_time - first_conj_end,
            future_dead_time,
        };

        Some(ParallelCostData { overlap, metrics })
    }
}
