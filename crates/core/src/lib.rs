//! Domain types, validation and error taxonomy for the ArqDesign project
//! store.
//!
//! This crate has no storage dependency so it can be shared by the store,
//! the command line and any future network-backed front end.

pub mod error;
pub mod export;
pub mod ids;
pub mod profile;
pub mod project;
pub mod stats;
pub mod types;
pub mod validation;
