//! Provides input/output for dataset preparation.
//!
//! Candidate notations come in through [`pool`] files; curated datasets go out through
//! the [`DatasetSink`](traits::DatasetSink) interface, whose standard implementation in
//! [`json`] writes one JSON document per named dataset.

pub mod json;
pub mod pool;
pub mod traits;
