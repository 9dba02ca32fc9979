//! The match engine: compile a pattern, scan the word list, emit records.
//!
//! The engine is stateless and never logs; errors are returned to the caller
//! to present.

pub mod grepper;
pub mod record;

// Re-export commonly used types
pub use grepper::*;
pub use record::*;
