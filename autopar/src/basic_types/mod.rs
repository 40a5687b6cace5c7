mod autopar_error;
mod determinism;
mod goal;
mod message;
mod program_location;

pub use autopar_error::AutoparError;
pub use determinism::CanFail;
pub use determinism::Determinism;
pub use determinism::SolutionCount;
pub use goal::Goal;
pub use goal::GoalCost;
pub use goal::InstMapInfo;
pub use goal::Var;
pub use message::Message;
pub use message::MessageKind;
pub use program_location::ProgramLocation;
