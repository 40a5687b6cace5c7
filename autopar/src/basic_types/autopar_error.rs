use thiserror::Error;

use super::ProgramLocation;
use super::Var;

/// Errors which can be returned when searching for a parallelisation.
///
/// A conjunction which simply cannot be parallelised is not an error; these are reported as
/// [`None`] together with a diagnostic [`Message`](super::Message) where relevant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutoparError {
    /// The conjunction handed to the search did not contain a single costly goal. Callers are
    /// expected to only pass conjunctions which are known to contain at least one costly call.
    #[error("Conjunction at {location} contains too few costly goals to be parallelised")]
    TooFewCostlyGoals { location: ProgramLocation },
    /// A goal between the first and last costly goal consumes a variable which is only bound by
    /// a later goal of the conjunction; such a conjunction is not in a valid execution order.
    #[error("Goal {consumer} at {location} consumes {var} before goal {producer} binds it")]
    ConsumedBeforeBound {
        location: ProgramLocation,
        var: Var,
        /// The position of the consuming goal
        consumer: usize,
        /// The position of the later goal binding `var`
        producer: usize,
    },
}
