// Service Listing Approvals - Workflow Core
//
// This crate applies moderation verdicts to marketplace listing edits:
// harmless edits publish immediately, structural edits queue for admin
// reapproval, and edits that fail screening are turned away with reasons.
// Architecture follows domain-driven design; collaborators (record store,
// blob store, notifier) are injected behind kernel traits.
//
// Change classification and screening live in the `moderation` package.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
