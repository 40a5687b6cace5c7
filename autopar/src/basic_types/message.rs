use std::fmt::Display;

use super::Determinism;
use super::ProgramLocation;

/// A diagnostic produced while analysing a conjunction.
///
/// Messages are appended to a caller-supplied list and never printed by the search itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub location: ProgramLocation,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The goals between the first and the last costly goal have a combined determinism for
    /// which parallel execution is not supported.
    CannotParalleliseDeterminism(Determinism),
}

impl Message {
    pub fn new(location: ProgramLocation, kind: MessageKind) -> Self {
        Self { location, kind }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MessageKind::CannotParalleliseDeterminism(determinism) => write!(
                f,
                "{}: cannot parallelise conjunction with determinism {determinism}",
                self.location
            ),
        }
    }
}
