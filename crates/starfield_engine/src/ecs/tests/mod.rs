//! Integration tests for the transient object lifecycle
//!
//! Shared loaders live in `support`; `frame_sequence` drives the full render
//! loop with a manual clock.

pub(crate) mod support;
mod frame_sequence;
