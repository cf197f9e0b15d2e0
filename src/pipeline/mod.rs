//! Stage orchestration
//!
//! The runner threads artifacts from normalization through assembly; the
//! observer module defines the stage-boundary hooks.

pub mod observer;
pub mod runner;
