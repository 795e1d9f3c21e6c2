//! Shared type definitions for bookmarkd.

pub mod bookmark;
pub mod errors;
pub mod requests;
