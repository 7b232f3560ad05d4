//! SiteDock — data core for a client-side website directory.
//!
//! This library crate exposes the catalog store, visit-history log,
//! favorites list, and ranking engine for use by a presentation layer and
//! by integration tests.

pub mod app;
pub mod managers;
pub mod services;
pub mod storage;
pub mod types;
