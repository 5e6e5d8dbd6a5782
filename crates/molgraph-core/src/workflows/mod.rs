//! # Workflows Module
//!
//! End-to-end procedures built from the engine.
//!
//! - **Reference Sets** ([`reference`]) - Build a fixed list of notations into a named
//!   dataset and its parameter-masked twin
//! - **Data/Competition Splits** ([`split`]) - Curate a corpus from an endless notation
//!   stream, partition it with a seed, and persist both halves
//!
//! Both workflows report progress through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) and persist through a
//! [`DatasetSink`](crate::core::io::traits::DatasetSink).

pub mod reference;
pub mod split;
