//! Static file lookup
//!
//! This module maps request targets onto files under the configured root,
//! refusing anything that would leave it.

pub mod resolver;
pub mod sandbox;

pub use resolver::Resolver;
pub use sandbox::{Sandbox, SandboxError};
