//! Dinosaur actions and their execution

pub mod catalog;
pub mod execute;

pub use catalog::{Action, ActionCategory};
pub use execute::{execute, kill};
