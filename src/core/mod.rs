//! Core functionality for configuration and shared wire types

pub mod config;
pub mod types;
