pub mod dictionary;
pub mod scoring;
pub mod session;
pub mod stats;

// Re-export main components
pub use dictionary::*;
pub use scoring::*;
pub use session::*;
pub use stats::*;
