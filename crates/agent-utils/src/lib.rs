//! Shared utilities for QuantGPT
//!
//! This crate provides the ambient pieces every binary in the workspace
//! needs: tracing setup and process-level configuration.

pub mod config;
pub mod logging;

pub use config::{Config, LogFormat};
pub use logging::{init_tracing, init_tracing_with};
