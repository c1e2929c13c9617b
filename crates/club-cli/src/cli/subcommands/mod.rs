pub mod attendance;
pub mod exercise;
pub mod program;

pub use attendance::AttendanceCommands;
pub use exercise::ExerciseCommands;
pub use program::ProgramCommands;
