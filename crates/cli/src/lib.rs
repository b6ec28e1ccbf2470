//! Terminal front end for the shop inventory tracker.
//!
//! The menu layer only gathers input and renders output; every state change
//! goes through [`command::execute`], which is the load → operate →
//! save-on-mutation dispatch path and is testable without a terminal.

pub mod command;
pub mod forms;
pub mod menu;
pub mod render;

pub use command::{Command, Outcome, execute};
