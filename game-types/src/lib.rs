pub mod errors;
pub mod game;
pub mod messages;
pub mod stats;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use messages::*;
pub use stats::*;
