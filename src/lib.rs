//! Statik - minimal static-content server
//!
//! Core library: request parsing, sandboxed file resolution and the
//! per-connection worker.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
