//! # Core Module
//!
//! Stateless building blocks for molecular graph dataset preparation.
//!
//! ## Architecture
//!
//! - **Graph Representation** ([`models`]) - Attributed graphs, corpora and datasets
//! - **Toolkit Interfaces** ([`structure`]) - The traits through which notation strings
//!   become typed molecules, and a file-backed catalog implementing them
//! - **File I/O** ([`io`]) - Notation pools in, JSON datasets out
//!
//! Nothing in this module performs chemistry itself. Structure generation and
//! force-field typing stay behind the [`structure::StructureGenerator`] trait.

pub mod io;
pub mod models;
pub mod structure;
