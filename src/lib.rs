// ABOUTME: Library root for architect-logger — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod cli;
pub mod config;
pub mod event;
pub mod format;
pub mod hooks;
pub mod session;
