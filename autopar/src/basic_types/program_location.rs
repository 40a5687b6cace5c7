use std::fmt::Display;

/// Identifies the conjunction which is being analysed; only used for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProgramLocation {
    /// The procedure containing the conjunction
    pub proc_name: String,
    /// The path to the conjunction inside the body of the procedure
    pub goal_path: String,
}

impl ProgramLocation {
    pub fn new(proc_name: impl Into<String>, goal_path: impl Into<String>) -> Self {
        Self {
            proc_name: proc_name.into(),
            goal_path: goal_path.into(),
        }
    }
}

impl Display for ProgramLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.goal_path.is_empty() {
            write!(f, "{}", self.proc_name)
        } else {
            write!(f, "{} at {}", self.proc_name, self.goal_path)
        }
    }
}
