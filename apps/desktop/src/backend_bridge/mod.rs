//! Host side of the command boundary: the command registry and task launching.

pub mod commands;
pub mod runtime;
