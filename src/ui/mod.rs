//! UI components for Docassist

pub mod output;
pub mod request;
