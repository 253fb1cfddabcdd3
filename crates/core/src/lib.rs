//! Duet Core Library
//!
//! Domain logic for the Duet conversation service: the scripted personas,
//! the completion-client seam to the hosted model, turn scheduling for the
//! Alex/Jordan exchange, and best-effort analysis of finished transcripts.
//! Everything here is stateless per call; the HTTP layer lives in the
//! `duet-api` service crate.

pub mod analysis;
pub mod completion;
pub mod dialogue;
pub mod persona;
pub mod transcript;
