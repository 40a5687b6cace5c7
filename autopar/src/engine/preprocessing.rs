//! Prepares a conjunction for the search: locates the costly goals, checks that the goals between
//! them may be executed in parallel, and divides them into goal groups.

use log::debug;
use log::warn;

use super::DependencyGraphs;
use crate::autopar_assert_simple;
use crate::basic_types::AutoparError;
use crate::basic_types::Determinism;
use crate::basic_types::Goal;
use crate::basic_types::Message;
use crate::basic_types::MessageKind;
use crate::basic_types::ProgramLocation;
use crate::cost_model::classify_goal_cost;
use crate::cost_model::GoalCostClass;
use crate::options::AutoparOptions;

/// The unit which is scheduled by the search; currently always a single goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalGroup {
    /// The position of the goal in the conjunction
    pub index: usize,
    pub class: GoalCostClass,
}

impl GoalGroup {
    /// The position of the last goal in this group.
    pub fn last_goal(&self) -> usize {
        self.index
    }
}

/// A conjunction which has been prepared for the search for a parallelisation.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalsForParallelisation {
    goals: Vec<Goal>,
    first_costly_goal: usize,
    last_costly_goal: usize,
    goal_groups: Vec<GoalGroup>,
    dependency_graphs: DependencyGraphs,
    costly_goals: Vec<usize>,
    num_calls: u64,
}

impl GoalsForParallelisation {
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn first_costly_goal(&self) -> usize {
        self.first_costly_goal
    }

    pub fn last_costly_goal(&self) -> usize {
        self.last_costly_goal
    }

    /// The goal groups covering the goals from the first up to and including the last costly
    /// goal, in order; never empty.
    pub fn goal_groups(&self) -> &[GoalGroup] {
        &self.goal_groups
    }

    pub fn dependency_graphs(&self) -> &DependencyGraphs {
        &self.dependency_graphs
    }

    /// The positions of all costly goals; never empty.
    pub fn costly_goals(&self) -> &[usize] {
        &self.costly_goals
    }

    /// The number of times the first costly goal was called, which is used as the number of
    /// executions of the conjunction.
    pub fn num_calls(&self) -> u64 {
        self.num_calls
    }
}

/// Prepares `goals` for the search for a parallelisation.
///
/// Returns `Ok(None)` if the goals between the first and last costly goal cannot be executed in
/// parallel because of their determinism; a [`Message`] explaining this is added to `messages`.
pub fn preprocess_conjunction(
    options: &AutoparOptions,
    location: &ProgramLocation,
    goals: &[Goal],
    messages: &mut Vec<Message>,
) -> Result<Option<GoalsForParallelisation>, AutoparError> {
    let goals = goals.to_vec();
    let dependency_graphs = DependencyGraphs::new(&goals);
    autopar_assert_simple!(dependency_graphs.num_goals() == goals.len());

    let costly_goals = goals
        .iter()
        .enumerate()
        .filter(|(_, goal)| classify_goal_cost(options, goal) == GoalCostClass::Costly)
        .map(|(index, _)| index)
        .collect::<Vec<_>>();

    let (Some(&first_costly_goal), Some(&last_costly_goal)) =
        (costly_goals.first(), costly_goals.last())
    else {
        return Err(AutoparError::TooFewCostlyGoals {
            location: location.clone(),
        });
    };

    let determinism = goals[first_costly_goal..=last_costly_goal]
        .iter()
        .fold(Determinism::Det, |determinism, goal| {
            determinism.conjunction(goal.detism)
        });

    if !determinism.is_parallelisable() {
        debug!("Not parallelising conjunction at {location} with determinism {determinism}");
        messages.push(Message::new(
            location.clone(),
            MessageKind::CannotParalleliseDeterminism(determinism),
        ));
        return Ok(None);
    }

    check_execution_order(location, &goals[..=last_costly_goal], first_costly_goal)?;

    let goal_groups = (first_costly_goal..=last_costly_goal)
        .map(|index| GoalGroup {
            index,
            class: classify_goal_cost(options, &goals[index]),
        })
        .collect::<Vec<_>>();
    autopar_assert_simple!(!goal_groups.is_empty());

    let num_calls = goals[first_costly_goal].cost.calls;
    if num_calls == 0 {
        warn!("The first costly goal of the conjunction at {location} was never called");
    }

    Ok(Some(GoalsForParallelisation {
        goals,
        first_costly_goal,
        last_costly_goal,
        goal_groups,
        dependency_graphs,
        costly_goals,
        num_calls,
    }))
}

/// Checks that no goal from `first_goal` onwards consumes a variable which is bound by a later
/// goal in `goals`.
fn check_execution_order(
    location: &ProgramLocation,
    goals: &[Goal],
    first_goal: usize,
) -> Result<(), AutoparError> {
    for consumer in first_goal..goals.len() {
        for producer in consumer + 1..goals.len() {
            let rebound = goals[consumer]
                .inst_map_info
                .consumed
                .intersection(&goals[producer].inst_map_info.bound)
                .next();
            if let Some(&var) = rebound {
                return Err(AutoparError::ConsumedBeforeBound {
                    location: location.clone(),
                    var,
                    consumer,
                    producer,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::GoalCost;
    use crate::basic_types::Var;

    fn goal(percall: f64, detism: Determinism) -> Goal {
        Goal::new("g", GoalCost::new(10, percall), detism)
    }

    fn location() -> ProgramLocation {
        ProgramLocation::new("test/1", "c1;")
    }

    #[test]
    fn conjunction_without_costly_goals_is_an_error() {
        let mut messages = vec![];
        let result = preprocess_conjunction(
            &AutoparOptions::default(),
            &location(),
            &[goal(1.0, Determinism::Det)],
            &mut messages,
        );

        assert_eq!(
            result,
            Err(AutoparError::TooFewCostlyGoals {
                location: location()
            })
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn groups_cover_the_range_between_the_costly_goals() {
        let goals = [
            goal(1.0, Determinism::Semidet),
            goal(5000.0, Determinism::Det),
            goal(1.0, Determinism::CcMulti),
            goal(5000.0, Determinism::Det),
            goal(1.0, Determinism::Nondet),
        ];
        let mut messages = vec![];

        let preprocessed =
            preprocess_conjunction(&AutoparOptions::default(), &location(), &goals, &mut messages)
                .expect("there are costly goals")
                .expect("the middle of the conjunction is cc_multi");

        assert_eq!(preprocessed.first_costly_goal(), 1);
        assert_eq!(preprocessed.last_costly_goal(), 3);
        assert_eq!(preprocessed.costly_goals(), &[1, 3]);
        assert_eq!(
            preprocessed.goal_groups(),
            &[
                GoalGroup {
                    index: 1,
                    class: GoalCostClass::Costly
                },
                GoalGroup {
                    index: 2,
                    class: GoalCostClass::Cheap
                },
                GoalGroup {
                    index: 3,
                    class: GoalCostClass::Costly
                },
            ]
        );
        assert_eq!(preprocessed.num_calls(), 10);
        assert_eq!(preprocessed.goals().len(), 5);
        assert_eq!(preprocessed.dependency_graphs().num_goals(), 5);
        assert!(messages.is_empty());
    }

    #[test]
    fn semidet_middle_is_declined_with_a_message() {
        let goals = [
            goal(5000.0, Determinism::Det),
            goal(1.0, Determinism::Semidet),
            goal(5000.0, Determinism::Det),
        ];
        let mut messages = vec![];

        let preprocessed =
            preprocess_conjunction(&AutoparOptions::default(), &location(), &goals, &mut messages)
                .expect("there are costly goals");

        assert!(preprocessed.is_none());
        assert_eq!(
            messages,
            vec![Message::new(
                location(),
                MessageKind::CannotParalleliseDeterminism(Determinism::Semidet)
            )]
        );
    }

    #[test]
    fn preprocessing_is_pure() {
        let goals = [
            goal(5000.0, Determinism::Det).binds([Var(1)]),
            goal(1.0, Determinism::Det).consumes([Var(1)]).binds([Var(2)]),
            goal(5000.0, Determinism::Det).consumes([Var(2)]),
        ];
        let mut messages = vec![];

        let first =
            preprocess_conjunction(&AutoparOptions::default(), &location(), &goals, &mut messages)
                .expect("there are costly goals");
        let second =
            preprocess_conjunction(&AutoparOptions::default(), &location(), &goals, &mut messages)
                .expect("there are costly goals");

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn consuming_a_variable_bound_later_in_the_region_is_an_error() {
        let goals = [
            goal(5000.0, Determinism::Det).consumes([Var(1)]),
            goal(5000.0, Determinism::Det),
            goal(5000.0, Determinism::Det).binds([Var(1)]),
        ];

        let result =
            preprocess_conjunction(&AutoparOptions::default(), &location(), &goals, &mut vec![]);

        assert_eq!(
            result,
            Err(AutoparError::ConsumedBeforeBound {
                location: location(),
                var: Var(1),
                consumer: 0,
                producer: 2,
            })
        );
    }

    #[test]
    fn rebinding_outside_the_region_is_accepted() {
        let goals = [
            goal(1.0, Determinism::Det).consumes([Var(1)]),
            goal(5000.0, Determinism::Det).consumes([Var(2)]),
            goal(5000.0, Determinism::Det),
            goal(1.0, Determinism::Det).binds([Var(1), Var(2)]),
        ];

        let preprocessed =
            preprocess_conjunction(&AutoparOptions::default(), &location(), &goals, &mut vec![])
                .expect("no goal of the region consumes a variable bound later in the region");

        assert!(preprocessed.is_some());
    }
}
