//! Socket acceptance and worker dispatch

pub mod listener;

pub use listener::Listener;
