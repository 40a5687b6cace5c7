use std::collections::BTreeSet;

use crate::basic_types::Var;

/// When a parallel conjunct starts and finishes executing, relative to the start of the parallel
/// conjunction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctExecution {
    pub start: f64,
    pub end: f64,
}

/// How the parallel conjuncts of a candidate overlap in time.
///
/// The structure is built left to right; every [`ExecutionOverlap::Conjunction`] adds one
/// conjunct to the chain of conjuncts on its left, together with the variables which the new
/// conjunct consumes from them.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOverlap {
    Empty,
    Conjunction {
        left: Box<ExecutionOverlap>,
        conjunct: ConjunctExecution,
        shared_vars: BTreeSet<Var>,
    },
}

/// Whether the parallel conjuncts share variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConjunctDependence {
    Independent,
    Dependent(BTreeSet<Var>),
}

impl ConjunctDependence {
    pub fn is_independent(&self) -> bool {
        matches!(self, ConjunctDependence::Independent)
    }
}

impl ExecutionOverlap {
    pub fn with_conjunct(self, conjunct: ConjunctExecution, shared_vars: BTreeSet<Var>) -> Self {
        ExecutionOverlap::Conjunction {
            left: Box::new(self),
            conjunct,
            shared_vars,
        }
    }

    pub fn num_conjuncts(&self) -> usize {
        match self {
            ExecutionOverlap::Empty => 0,
            ExecutionOverlap::Conjunction { left, .. } => left.num_conjuncts() + 1,
        }
    }

    /// Reduces the overlap to whether the conjuncts are dependent on one another, and if so on
    /// which variables.
    pub fn conjuncts_dependence(&self) -> ConjunctDependence {
        match self {
            ExecutionOverlap::Empty => ConjunctDependence::Independent,
            ExecutionOverlap::Conjunction {
                left, shared_vars, ..
            } => match left.conjuncts_dependence() {
                ConjunctDependence::Dependent(mut vars) => {
                    vars.extend(shared_vars.iter().copied());
                    ConjunctDependence::Dependent(vars)
                }
                ConjunctDependence::Independent if shared_vars.is_empty() => {
                    ConjunctDependence::Independent
                }
                ConjunctDependence::Independent => {
                    ConjunctDependence::Dependent(shared_vars.clone())
                }
            },
        }
    }
}
