//! Determinism of goals and the rules for combining the determinism of goals which are executed
//! in sequence.
//!
//! A determinism is described by two components: whether the goal can fail ([`CanFail`]) and
//! the maximum number of solutions it can produce ([`SolutionCount`]). The combination of two
//! goals in a conjunction is computed component-wise, see [`Determinism::conjunction`].

use std::fmt::Display;

/// The determinism of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Determinism {
    Det,
    Semidet,
    Multi,
    Nondet,
    CcMulti,
    CcNondet,
    Failure,
    Erroneous,
}

/// Whether a goal can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanFail {
    CanFail,
    CannotFail,
}

/// The maximum number of solutions of a goal.
///
/// [`SolutionCount::AtMostManyCc`] means that the goal can have many solutions but is executed in
/// a committed-choice context, so at most one of them is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionCount {
    AtMostZero,
    AtMostOne,
    AtMostManyCc,
    AtMostMany,
}

impl Determinism {
    pub fn from_components(can_fail: CanFail, solutions: SolutionCount) -> Determinism {
        match (can_fail, solutions) {
            (CanFail::CannotFail, SolutionCount::AtMostZero) => Determinism::Erroneous,
            (CanFail::CanFail, SolutionCount::AtMostZero) => Determinism::Failure,
            (CanFail::CannotFail, SolutionCount::AtMostOne) => Determinism::Det,
            (CanFail::CanFail, SolutionCount::AtMostOne) => Determinism::Semidet,
            (CanFail::CannotFail, SolutionCount::AtMostManyCc) => Determinism::CcMulti,
            (CanFail::CanFail, SolutionCount::AtMostManyCc) => Determinism::CcNondet,
            (CanFail::CannotFail, SolutionCount::AtMostMany) => Determinism::Multi,
            (CanFail::CanFail, SolutionCount::AtMostMany) => Determinism::Nondet,
        }
    }

    pub fn components(self) -> (CanFail, SolutionCount) {
        match self {
            Determinism::Erroneous => (CanFail::CannotFail, SolutionCount::AtMostZero),
            Determinism::Failure => (CanFail::CanFail, SolutionCount::AtMostZero),
            Determinism::Det => (CanFail::CannotFail, SolutionCount::AtMostOne),
            Determinism::Semidet => (CanFail::CanFail, SolutionCount::AtMostOne),
            Determinism::CcMulti => (CanFail::CannotFail, SolutionCount::AtMostManyCc),
            Determinism::CcNondet => (CanFail::CanFail, SolutionCount::AtMostManyCc),
            Determinism::Multi => (CanFail::CannotFail, SolutionCount::AtMostMany),
            Determinism::Nondet => (CanFail::CanFail, SolutionCount::AtMostMany),
        }
    }

    /// Returns the determinism of executing `self` followed by `other`.
    ///
    /// A conjunction can fail if either of its conjuncts can fail. If either conjunct has no
    /// solutions then neither does the conjunction; otherwise the conjunction can have as many
    /// solutions as its least deterministic conjunct, where committed choice is only retained
    /// when no conjunct can produce many solutions outside a committed-choice context.
    pub fn conjunction(self, other: Determinism) -> Determinism {
        let (can_fail_a, solutions_a) = self.components();
        let (can_fail_b, solutions_b) = other.components();

        let can_fail = if can_fail_a == CanFail::CannotFail && can_fail_b == CanFail::CannotFail {
            CanFail::CannotFail
        } else {
            CanFail::CanFail
        };

        let solutions = match (solutions_a, solutions_b) {
            (SolutionCount::AtMostZero, _) | (_, SolutionCount::AtMostZero) => {
                SolutionCount::AtMostZero
            }
            (SolutionCount::AtMostMany, _) | (_, SolutionCount::AtMostMany) => {
                SolutionCount::AtMostMany
            }
            (SolutionCount::AtMostManyCc, _) | (_, SolutionCount::AtMostManyCc) => {
                SolutionCount::AtMostManyCc
            }
            (SolutionCount::AtMostOne, SolutionCount::AtMostOne) => SolutionCount::AtMostOne,
        };

        Determinism::from_components(can_fail, solutions)
    }

    /// Whether a sequence of goals with this determinism may be executed in parallel.
    pub fn is_parallelisable(self) -> bool {
        matches!(self, Determinism::Det | Determinism::CcMulti)
    }
}

impl Display for Determinism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Determinism::Det => "det",
            Determinism::Semidet => "semidet",
            Determinism::Multi => "multi",
            Determinism::Nondet => "nondet",
            Determinism::CcMulti => "cc_multi",
            Determinism::CcNondet => "cc_nondet",
            Determinism::Failure => "failure",
            Determinism::Erroneous => "erroneous",
        };
        write!(f, "{name}")
    }
}
