//! Command-line front end for the ArqDesign project store.

pub mod cli;
pub mod commands;
pub mod config;
