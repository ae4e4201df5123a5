//! Analyzer configuration
//!
//! - [`spec`]: the serde-deserializable [`AnalyzerSpec`](spec::AnalyzerSpec)
//! - [`validation`]: rules that check a spec and report every problem
//! - [`errors`] / [`error_code`]: diagnostics and build errors

pub mod error_code;
pub mod errors;
pub mod spec;
pub mod validation;
