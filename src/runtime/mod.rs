//! Single-writer async service around the pure engine.

/// Event stream types emitted by the service loop.
pub mod events;
/// Handle and command loop implementation.
pub mod handle;
