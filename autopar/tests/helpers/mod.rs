//! Shared builders for the integration tests.
#![allow(
    dead_code,
    reason = "every integration test binary uses a different subset of the helpers"
)]

use autopar::Determinism;
use autopar::Goal;
use autopar::GoalCost;
use autopar::ProgramLocation;
use autopar::Var;

/// A per-call cost well above the default costly threshold.
pub(crate) const COSTLY: f64 = 10_000.0;
/// A per-call cost well below the default costly threshold.
pub(crate) const CHEAP: f64 = 10.0;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn location() -> ProgramLocation {
    ProgramLocation::new("test_module.test_pred/2", "c2;")
}

pub(crate) fn goal(name: &str, percall: f64, consumes: &[u32], binds: &[u32]) -> Goal {
    goal_with_determinism(name, percall, Determinism::Det, consumes, binds)
}

pub(crate) fn goal_with_determinism(
    name: &str,
    percall: f64,
    detism: Determinism,
    consumes: &[u32],
    binds: &[u32],
) -> Goal {
    Goal::new(name, GoalCost::new(100, percall), detism)
        .consumes(consumes.iter().copied().map(Var))
        .binds(binds.iter().copied().map(Var))
}

pub(crate) fn names(goals: &[Goal]) -> Vec<&str> {
    goals.iter().map(|goal| goal.name.as_str()).collect()
}
