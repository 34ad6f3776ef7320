//! Command-line interface for playing, evaluating and training agents

pub mod commands;
pub mod config;
pub mod output;
