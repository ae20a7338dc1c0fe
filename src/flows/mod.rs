//! Flows module - Commands built from the core pieces
//!
//! Provides:
//! - report: the direct word-frequency pipeline
//! - framework: run a plugin package through the loader
//! - eleven: the capability-dispatching controller
//! - inspect: describe registered types by name

pub mod eleven;
pub mod framework;
pub mod inspect;
pub mod report;
