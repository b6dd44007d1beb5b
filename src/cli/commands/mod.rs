//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod plan;
pub mod status;
pub mod validate;
