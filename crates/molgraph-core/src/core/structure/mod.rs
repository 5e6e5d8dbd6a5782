//! # Structure Module
//!
//! Interfaces to the external structure and force-field toolkit.
//!
//! ## Overview
//!
//! Interpreting line notation, perceiving aromaticity and assigning force-field types
//! are delegated to a collaborator. The rest of the library depends only on the
//! traits in this module, which expose exactly the per-atom and per-bond queries that
//! graph construction needs.
//!
//! Generation happens in two stages, mirroring the toolkit: a [`StructureGenerator`]
//! turns a notation into a [`TypedStructure`], which in turn yields the per-atom
//! parameter assignment together with a queryable [`MoleculeView`]. Either stage may
//! fail with a [`BuildError`](error::BuildError).
//!
//! ## Key Components
//!
//! - [`error`] - The tagged per-candidate failure type
//! - [`catalog`] - A file-backed generator serving pre-computed molecules

pub mod catalog;
pub mod error;

use crate::core::models::graph::{AtomIndex, ParamRecord};
use error::BuildError;
use indexmap::IndexMap;

/// Force-field parameters keyed by atom index. Atoms without a force-field type are
/// absent; iteration order is the toolkit's.
pub type ParamAssignment = IndexMap<AtomIndex, ParamRecord>;

/// Per-atom queries.
pub trait AtomView {
    fn atomic_number(&self) -> u32;
    fn total_valence(&self) -> u32;
    fn formal_charge(&self) -> i32;
    fn is_aromatic(&self) -> bool;
    fn hybridization(&self) -> i32;
    fn radical_electrons(&self) -> u32;
}

/// Per-bond queries.
pub trait BondView {
    fn begin_index(&self) -> AtomIndex;
    fn end_index(&self) -> AtomIndex;
    fn bond_type(&self) -> i32;
    fn stereo(&self) -> i32;
    fn is_aromatic(&self) -> bool;
    fn is_conjugated(&self) -> bool;
}

/// A generated molecule that can be queried atom by atom.
pub trait MoleculeView {
    type Atom: AtomView;
    type Bond: BondView;

    /// Returns the atom at `index`, if the molecule has one.
    fn atom(&self, index: AtomIndex) -> Option<&Self::Atom>;

    /// Iterates the bonds incident to the atom at `index`.
    fn bonds(&self, index: AtomIndex) -> impl Iterator<Item = &Self::Bond>;
}

/// The intermediate produced by a [`StructureGenerator`], not yet force-field typed.
pub trait TypedStructure {
    type Molecule: MoleculeView;

    /// Assigns force-field types.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ForceFieldAssignment`] if no consistent typing exists.
    fn forcefield_types(self) -> Result<(ParamAssignment, Self::Molecule), BuildError>;
}

/// Turns a notation string into a structure.
pub trait StructureGenerator {
    type Structure: TypedStructure;

    /// # Errors
    ///
    /// Returns [`BuildError::Structure`] if no structure can be generated and
    /// [`BuildError::Validation`] if the notation is rejected outright.
    fn generate(&self, notation: &str) -> Result<Self::Structure, BuildError>;
}
