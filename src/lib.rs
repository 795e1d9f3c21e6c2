//! bookmarkd — a bookmark query/mutation service speaking newline-delimited JSON-RPC.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod repository;
pub mod rpc_handler;
pub mod store;
pub mod types;
