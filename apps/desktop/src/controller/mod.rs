//! Controller layer: input parsing, view state transitions, and the event loop.

pub mod events;
pub mod orchestration;
pub mod view;
