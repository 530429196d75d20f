//! Blipline CLI library.
//!
//! This crate provides the core functionality for the `blipline` binary:
//! input loading, logging setup and the command implementations.

pub mod commands;
pub mod input;
pub mod logging;
