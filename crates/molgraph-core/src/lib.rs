//! # molgraph Core Library
//!
//! Turns molecular line notation into attributed graphs for learning tasks, curates
//! reproducible corpora of them under size and validity constraints, and splits those
//! corpora deterministically into training and held-out evaluation sets.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Graph and corpus models, the traits through which an
//!   external toolkit supplies typed molecules, and dataset I/O.
//!
//! - **[`engine`]: The Logic Core.** Graph construction with its all-or-nothing
//!   completeness rule, the rejection-sampling curator, and the seeded partitioner.
//!
//! - **[`workflows`]: The Public API.** Reference-set and data/competition preparation,
//!   from notations to persisted datasets.
//!
//! Chemistry is never performed here: notation parsing and force-field typing are the
//! job of whatever implements [`core::structure::StructureGenerator`].

pub mod core;
pub mod engine;
pub mod workflows;
