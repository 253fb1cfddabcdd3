//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the shared,
//! read-only resources every handler needs: the completion client and the
//! persona pair.

use crate::config::Config;
use duet_core::{completion::CompletionClient, persona::Personas};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// handlers. The personas are immutable configuration; nothing in here is
/// mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub personas: Arc<Personas>,
    pub config: Arc<Config>,
}
