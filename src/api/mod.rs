//! API client for the documentation-generation service

pub mod client;

pub use client::{DocsClient, PendingRequest};
