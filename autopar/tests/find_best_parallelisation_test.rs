#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use std::collections::BTreeSet;

use autopar::find_best_parallelisation;
use autopar::optimisation::BestParAlgorithm;
use autopar::options::AutoparOptions;
use autopar::options::DependentConjunctions;
use autopar::options::SpeedupEstimate;
use autopar::preprocess_conjunction;
use autopar::AutoparError;
use autopar::Determinism;
use autopar::Message;
use autopar::MessageKind;
use autopar::ParallelisationFinder;
use autopar::SearchStatistics;
use autopar::Var;
use helpers::goal;
use helpers::goal_with_determinism;
use helpers::init_logging;
use helpers::location;
use helpers::names;
use helpers::CHEAP;
use helpers::COSTLY;

#[test]
fn non_parallelisable_determinism_is_reported_once() {
    init_logging();
    for determinism in [
        Determinism::Semidet,
        Determinism::Multi,
        Determinism::Nondet,
        Determinism::CcNondet,
        Determinism::Failure,
        Determinism::Erroneous,
    ] {
        let goals = vec![
            goal("a", COSTLY, &[], &[]),
            goal_with_determinism("middle", CHEAP, determinism, &[], &[]),
            goal("b", COSTLY, &[], &[]),
        ];
        let mut messages = vec![];

        let result =
            find_best_parallelisation(&AutoparOptions::default(), &location(), &goals, &mut messages)
                .expect("there are costly goals");

        assert!(result.is_none());
        assert_eq!(
            messages,
            vec![Message::new(
                location(),
                MessageKind::CannotParalleliseDeterminism(determinism)
            )]
        );
    }
}

#[test]
fn determinism_outside_the_costly_range_does_not_matter() {
    let goals = vec![
        goal_with_determinism("test", CHEAP, Determinism::Semidet, &[], &[]),
        goal("a", COSTLY, &[], &[]),
        goal_with_determinism("middle", CHEAP, Determinism::CcMulti, &[], &[]),
        goal("b", COSTLY, &[], &[]),
        goal_with_determinism("choice", CHEAP, Determinism::Nondet, &[], &[]),
    ];
    let mut messages = vec![];

    let parallelisation =
        find_best_parallelisation(&AutoparOptions::default(), &location(), &goals, &mut messages)
            .expect("there are costly goals")
            .expect("the costly goals are independent");

    assert!(messages.is_empty());
    assert_eq!(names(&parallelisation.goals_before), vec!["test"]);
    assert_eq!(names(&parallelisation.goals_after), vec!["choice"]);
}

#[test]
fn single_costly_goal_cannot_be_parallelised() {
    init_logging();
    let goals = vec![
        goal("a", CHEAP, &[], &[1]),
        goal("b", CHEAP, &[1], &[2]),
        goal("costly", COSTLY, &[2], &[3]),
        goal("d", CHEAP, &[3], &[4]),
        goal("e", CHEAP, &[4], &[]),
    ];
    let options = AutoparOptions::default();
    let mut messages = vec![];

    let preprocessed = preprocess_conjunction(&options, &location(), &goals, &mut messages)
        .expect("there is a costly goal")
        .expect("the conjunction is det");
    assert_eq!(preprocessed.costly_goals(), &[2]);
    assert_eq!(preprocessed.goal_groups().len(), 1);

    let mut finder = ParallelisationFinder::new(options);
    let result = finder
        .find_best_parallelisation(&location(), &goals, &mut messages)
        .expect("there is a costly goal");

    assert!(result.is_none());
    assert!(messages.is_empty());
    assert_eq!(
        finder.statistics(),
        SearchStatistics {
            complete_non_solution: 1,
            ..Default::default()
        }
    );
}

#[test]
fn greedy_search_parallelises_independent_goals_without_branching() {
    init_logging();
    let goals = vec![
        goal("a", COSTLY, &[], &[1]),
        goal("b", COSTLY, &[], &[2]),
        goal("c", COSTLY, &[], &[3]),
        goal("d", COSTLY, &[], &[4]),
    ];
    let options = AutoparOptions {
        best_par_algorithm: BestParAlgorithm::Greedy,
        dependent_conjunctions: DependentConjunctions::DoNotParallelise,
        ..Default::default()
    };
    let mut finder = ParallelisationFinder::new(options);

    let parallelisation = finder
        .find_best_parallelisation(&location(), &goals, &mut vec![])
        .expect("there are costly goals")
        .expect("the goals are independent");

    assert!(parallelisation.num_par_conjuncts() >= 2);
    assert!(parallelisation.conjuncts_are_independent());
    assert_eq!(parallelisation.par_conjunct_positions, vec![0..1, 1..2, 2..3, 3..4]);

    let statistics = finder.statistics();
    assert_eq!(statistics.incomplete_good_enough, 3);
    assert_eq!(statistics.incomplete_not_good_enough, 0);
    assert_eq!(statistics.complete_best_solution, 1);
    assert_eq!(statistics.complete_equal_solution, 0);
    assert_eq!(statistics.complete_worse_solution, 0);
}

#[test]
fn empty_conjunction_is_a_caller_error() {
    let result =
        find_best_parallelisation(&AutoparOptions::default(), &location(), &[], &mut vec![]);

    assert_eq!(
        result,
        Err(AutoparError::TooFewCostlyGoals {
            location: location()
        })
    );
}

#[test]
fn dependent_conjuncts_are_avoided_when_not_allowed() {
    let goals = vec![
        goal("a", COSTLY, &[], &[1]),
        goal("b", COSTLY, &[1], &[]),
        goal("c", COSTLY, &[], &[]),
    ];

    let parallelisation =
        find_best_parallelisation(&AutoparOptions::default(), &location(), &goals, &mut vec![])
            .expect("there are costly goals")
            .expect("c is independent of a and b");

    assert!(parallelisation.conjuncts_are_independent());
    assert_eq!(parallelisation.par_conjunct_positions, vec![0..2, 2..3]);
    assert_eq!(names(&parallelisation.par_conjuncts[0]), vec!["a", "b"]);
    assert_eq!(names(&parallelisation.par_conjuncts[1]), vec!["c"]);
}

#[test]
fn search_is_retried_with_dependent_conjunctions() {
    init_logging();
    let goals = vec![
        goal("a", COSTLY, &[], &[1]),
        goal("b", COSTLY, &[1], &[]),
    ];

    let mut retried_finder = ParallelisationFinder::new(AutoparOptions::default());
    let retried = retried_finder
        .find_best_parallelisation(&location(), &goals, &mut vec![])
        .expect("there are costly goals")
        .expect("the retry allows dependent conjunctions");

    let mut direct_finder = ParallelisationFinder::new(AutoparOptions {
        dependent_conjunctions: DependentConjunctions::Parallelise(SpeedupEstimate::Overlap),
        ..Default::default()
    });
    let direct = direct_finder
        .find_best_parallelisation(&location(), &goals, &mut vec![])
        .expect("there are costly goals")
        .expect("dependent conjunctions are allowed");

    assert_eq!(retried, direct);
    assert_eq!(retried_finder.statistics(), direct_finder.statistics());
    assert_eq!(
        retried.dependence,
        autopar::cost_model::ConjunctDependence::Dependent(BTreeSet::from([Var(1)]))
    );
    assert!(retried.metrics.future_dead_time > 0.0);
}

#[test]
fn no_retry_when_dependent_conjunctions_are_already_allowed() {
    let goals = vec![goal("a", COSTLY, &[], &[])];
    let mut finder = ParallelisationFinder::new(AutoparOptions {
        dependent_conjunctions: DependentConjunctions::Parallelise(SpeedupEstimate::Naive),
        ..Default::default()
    });

    let result = finder
        .find_best_parallelisation(&location(), &goals, &mut vec![])
        .expect("there is a costly goal");

    assert!(result.is_none());
    assert_eq!(finder.statistics().complete_non_solution, 1);
}

#[test]
fn every_algorithm_finds_the_independent_split() {
    let goals = vec![
        goal("setup", CHEAP, &[], &[1]),
        goal("left", COSTLY, &[1], &[2]),
        goal("glue", CHEAP, &[2], &[3]),
        goal("right", COSTLY, &[1], &[4]),
        goal("combine", CHEAP, &[3, 4], &[]),
    ];

    for algorithm in [
        BestParAlgorithm::Complete,
        BestParAlgorithm::CompleteBranches(2),
        BestParAlgorithm::CompleteSize(3),
        BestParAlgorithm::CompleteSize(10),
        BestParAlgorithm::Greedy,
    ] {
        let options = AutoparOptions {
            best_par_algorithm: algorithm,
            ..Default::default()
        };

        let parallelisation = find_best_parallelisation(&options, &location(), &goals, &mut vec![])
            .expect("there are costly goals")
            .expect("left and right are independent");

        assert_eq!(
            parallelisation.par_conjunct_positions,
            vec![1..3, 3..4],
            "{algorithm:?}"
        );
        assert!(parallelisation.conjuncts_are_independent());
        assert_eq!(names(&parallelisation.goals_before), vec!["setup"]);
        assert_eq!(names(&parallelisation.goals_after), vec!["combine"]);
        assert!(parallelisation.metrics.speedup > 1.0);
    }
}

#[test]
fn complete_search_explores_at_least_as_much_as_greedy_search() {
    let goals = (0..6)
        .map(|index| goal(&format!("g{index}"), COSTLY, &[], &[]))
        .collect::<Vec<_>>();

    let mut complete = ParallelisationFinder::new(AutoparOptions::default());
    let complete_result = complete
        .find_best_parallelisation(&location(), &goals, &mut vec![])
        .expect("there are costly goals")
        .expect("the goals are independent");

    let mut greedy = ParallelisationFinder::new(AutoparOptions {
        best_par_algorithm: BestParAlgorithm::Greedy,
        ..Default::default()
    });
    let greedy_result = greedy
        .find_best_parallelisation(&location(), &goals, &mut vec![])
        .expect("there are costly goals")
        .expect("the goals are independent");

    let explored = |statistics: SearchStatistics| {
        statistics.incomplete_good_enough + statistics.incomplete_not_good_enough
    };
    assert!(explored(complete.statistics()) >= explored(greedy.statistics()));
    assert!(
        complete_result.metrics.par_time + 2.0 * complete_result.metrics.par_overheads
            <= greedy_result.metrics.par_time + 2.0 * greedy_result.metrics.par_overheads
    );
}

#[test]
fn consuming_a_variable_before_it_is_bound_is_a_caller_error() {
    let goals = vec![
        goal("a", COSTLY, &[1], &[]),
        goal("b", COSTLY, &[], &[]),
        goal("c", COSTLY, &[], &[1]),
    ];

    for algorithm in [BestParAlgorithm::Complete, BestParAlgorithm::Greedy] {
        let options = AutoparOptions {
            best_par_algorithm: algorithm,
            ..Default::default()
        };

        let result = find_best_parallelisation(&options, &location(), &goals, &mut vec![]);

        assert_eq!(
            result,
            Err(AutoparError::ConsumedBeforeBound {
                location: location(),
                var: Var(1),
                consumer: 0,
                producer: 2,
            }),
            "{algorithm:?}"
        );
    }
}
