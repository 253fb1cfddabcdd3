//! Duet API Library Crate
//!
//! This library contains all the logic for the Duet web service: the
//! application state, configuration, API handlers, and routing. The
//! `bin/api.rs` binary is a thin wrapper around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
