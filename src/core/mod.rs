//! Core module - The word-count building blocks
//!
//! This module provides:
//! - Word source and token filtering
//! - Stop-word set
//! - Frequency table and report model
//! - Rendering functions for different output formats
//! - Error kinds, configuration, logging and path helpers

pub mod config;
pub mod error;
pub mod file_reader;
pub mod frequency;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
pub mod stop_words;
pub mod words;
