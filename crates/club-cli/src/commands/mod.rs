pub mod attendance;
pub mod dispatch;
pub mod exercise;
pub mod program;
pub mod shared;
