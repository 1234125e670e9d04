//! costar: interactive explorer for a co-star network.
//!
//! Reads the actor, movie and cast tables into a costar-core graph, then
//! answers line-oriented commands against a movable center of the universe.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod load;
pub mod reply;
pub mod repl;
pub mod state;
