//! Filesystem utilities for resumake.
//!
//! This module provides safe filesystem operations, particularly atomic
//! writes, so a rendered document is never observable in a half-written
//! state.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
