//! # Engine Module
//!
//! The stateful algorithms of dataset preparation.
//!
//! ## Overview
//!
//! - **Graph Construction** ([`builder`]) - One notation string in, one attributed graph
//!   (or a tagged [`BuildError`](crate::core::structure::error::BuildError)) out
//! - **Curation** ([`curation`]) - Rejection sampling over an endless notation stream
//!   until a target number of valid, size-bounded graphs has been accepted
//! - **Partitioning** ([`partition`]) - Seeded shuffle and contiguous split into data
//!   and competition subsets
//! - **Configuration** ([`config`]) - Validated parameter sets and their builders
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Fatal engine failures
//!
//! Per-candidate build failures never abort curation. Only the conditions in
//! [`error::EngineError`] do.

pub mod builder;
pub mod config;
pub mod curation;
pub mod error;
pub mod partition;
pub mod progress;
