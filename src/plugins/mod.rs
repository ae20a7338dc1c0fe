//! Plugins module - The plugin-loading framework and its bundled packages
//!
//! Provides:
//! - contract: the `App` contract and its type-erased export
//! - registry: packages registered by name
//! - loader: the framework state machine
//! - app1, app2: two interchangeable application packages

pub mod app1;
pub mod app2;
pub mod contract;
pub mod loader;
pub mod registry;
