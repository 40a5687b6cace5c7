use std::collections::BTreeSet;
use std::fmt::Display;

use super::Determinism;

/// A program variable, identified by its number within the procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub u32);

impl Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V_{}", self.0)
    }
}

/// The profiled cost of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GoalCost {
    /// The number of times the goal was executed during profiling
    pub calls: u64,
    /// The average cost of a single execution of the goal
    pub percall: f64,
}

impl GoalCost {
    pub fn new(calls: u64, percall: f64) -> Self {
        Self { calls, percall }
    }

    /// The cost of this goal for a single execution of the conjunction containing it, given that
    /// the conjunction was executed `num_calls` times.
    pub fn cost_per_conjunction_call(&self, num_calls: u64) -> f64 {
        if num_calls == 0 {
            self.percall
        } else {
            self.percall * self.calls as f64 / num_calls as f64
        }
    }
}

/// The variables which are read and written by a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstMapInfo {
    /// The variables which are already bound when the goal is called and read by it
    pub consumed: BTreeSet<Var>,
    /// The variables which are bound by the goal
    pub bound: BTreeSet<Var>,
}

/// A single goal of the conjunction which is being analysed.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    /// A human-readable description of the goal (e.g. the callee)
    pub name: String,
    pub cost: GoalCost,
    pub inst_map_info: InstMapInfo,
    pub detism: Determinism,
}

impl Goal {
    pub fn new(name: impl Into<String>, cost: GoalCost, detism: Determinism) -> Self {
        Self {
            name: name.into(),
            cost,
            inst_map_info: InstMapInfo::default(),
            detism,
        }
    }

    /// Adds the provided variables to the variables which are consumed by this goal.
    pub fn consumes(mut self, vars: impl IntoIterator<Item = Var>) -> Self {
        self.inst_map_info.consumed.extend(vars);
        self
    }

    /// Adds the provided variables to the variables which are bound by this goal.
    pub fn binds(mut self, vars: impl IntoIterator<Item = Var>) -> Self {
        self.inst_map_info.bound.extend(vars);
        self
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
