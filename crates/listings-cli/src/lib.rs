//! CLI library components for the listings pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;
