//! Terminal rendering of pours, runs and progression.

mod console;

pub use console::*;
