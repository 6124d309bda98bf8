//! Configuration resolution for the Netatmo exporter.
//!
//! Start with [`configuration::resolve`], which turns the process arguments
//! and an environment lookup into a validated [`configuration::Configuration`].

pub mod cli;
pub mod configuration;
pub mod logging;
