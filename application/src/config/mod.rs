//! Application-level configuration.
//!
//! - [`ChatBehavior`] — labels and fixed texts the controller renders

pub mod chat_behavior;

pub use chat_behavior::ChatBehavior;
