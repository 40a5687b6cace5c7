use super::IncompleteParallelisation;
use crate::api::outputs::FullParallelisation;
use crate::autopar_assert_simple;

/// Converts the best complete candidate into the reported parallelisation.
pub(crate) fn finalise_parallelisation(
    candidate: IncompleteParallelisation<'_>,
) -> FullParallelisation {
    autopar_assert_simple!(candidate.is_complete());
    autopar_assert_simple!(candidate.num_parallel_conjuncts() >= 2);

    let cost_data = candidate
        .par_cost_data()
        .expect("the best candidate has been costed");

    let goals = candidate.goals();
    let par_conjunct_positions = candidate.conjuncts();
    let par_conjuncts = par_conjunct_positions
        .iter()
        .map(|range| goals[range.clone()].to_vec())
        .collect();

    FullParallelisation {
        goals_before: goals[candidate.goals_before()].to_vec(),
        par_conjuncts,
        goals_after: goals[candidate.goals_after()].to_vec(),
        par_conjunct_positions,
        dependence: cost_data.overlap.conjuncts_dependence(),
        metrics: cost_data.metrics.finalise(),
    }
}
