//! Core modules for the Reality Hierarchy store.
//!
//! Persistence, the node model, and the upsert/merge primitives every seeding
//! phase shares live here.

pub mod broker;
pub mod config;
pub mod db;
pub mod error;
pub mod merge;
pub mod model;
pub mod schemas;
pub mod slug;
pub mod store;
pub mod time;
pub mod upsert;
pub mod verify;
