//! Format-specific emitters that understand end-of-line comments.

pub mod toml;
pub mod yaml;
