//! Shared utilities for Veda: logger setup and time helpers.

pub mod logger;
pub mod time;
