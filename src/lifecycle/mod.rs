//! Process-level setup for the demo binary.

pub mod tracing;
