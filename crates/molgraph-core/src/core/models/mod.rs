//! # Core Models Module
//!
//! Data structures shared by every stage of dataset preparation.
//!
//! ## Key Components
//!
//! - [`graph`] - The attributed molecular graph: atom nodes and bond edges, each with a
//!   fixed attribute schema, plus parameter masking
//! - [`corpus`] - Ordered collections of (notation, graph) pairs and the notation → graph
//!   [`Dataset`](corpus::Dataset) mapping that gets persisted
//!
//! ## Usage
//!
//! ```ignore
//! use molgraph::core::models::corpus::Corpus;
//!
//! let mut corpus = Corpus::new();
//! corpus.push("C1CC1", graph);
//! let masked = corpus.masked().to_dataset();
//! ```

pub mod corpus;
pub mod graph;
