use super::error::{BuildError, FailureKind};
use super::{AtomView, BondView, MoleculeView, ParamAssignment, StructureGenerator, TypedStructure};
use crate::core::models::graph::{AtomIndex, ParamRecord};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RecordedAtom {
    pub index: AtomIndex,
    pub atomic_number: u32,
    pub total_valence: u32,
    #[serde(default)]
    pub formal_charge: i32,
    #[serde(default)]
    pub aromatic: bool,
    pub hybridization: i32,
    #[serde(default)]
    pub radical_electrons: u32,
    /// Force-field parameters; atoms without them were left untyped by the toolkit.
    #[serde(default)]
    pub param: Option<ParamRecord>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RecordedBond {
    pub begin: AtomIndex,
    pub end: AtomIndex,
    pub bond_type: i32,
    #[serde(default)]
    pub stereo: i32,
    #[serde(default)]
    pub aromatic: bool,
    #[serde(default)]
    pub conjugated: bool,
}

impl AtomView for RecordedAtom {
    fn atomic_number(&self) -> u32 {
        self.atomic_number
    }
    fn total_valence(&self) -> u32 {
        self.total_valence
    }
    fn formal_charge(&self) -> i32 {
        self.formal_charge
    }
    fn is_aromatic(&self) -> bool {
        self.aromatic
    }
    fn hybridization(&self) -> i32 {
        self.hybridization
    }
    fn radical_electrons(&self) -> u32 {
        self.radical_electrons
    }
}

impl BondView for RecordedBond {
    fn begin_index(&self) -> AtomIndex {
        self.begin
    }
    fn end_index(&self) -> AtomIndex {
        self.end
    }
    fn bond_type(&self) -> i32 {
        self.bond_type
    }
    fn stereo(&self) -> i32 {
        self.stereo
    }
    fn is_aromatic(&self) -> bool {
        self.aromatic
    }
    fn is_conjugated(&self) -> bool {
        self.conjugated
    }
}

/// A molecule served from the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordedMolecule {
    atoms: IndexMap<AtomIndex, RecordedAtom>,
    bonds: Vec<RecordedBond>,
}

impl RecordedMolecule {
    pub fn new(atoms: Vec<RecordedAtom>, bonds: Vec<RecordedBond>) -> Self {
        Self {
            atoms: atoms.into_iter().map(|a| (a.index, a)).collect(),
            bonds,
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Parameters of every atom that carries them, in atom order.
    pub fn param_assignment(&self) -> ParamAssignment {
        self.atoms
            .values()
            .filter_map(|a| a.param.clone().map(|p| (a.index, p)))
            .collect()
    }
}

impl MoleculeView for RecordedMolecule {
    type Atom = RecordedAtom;
    type Bond = RecordedBond;

    fn atom(&self, index: AtomIndex) -> Option<&RecordedAtom> {
        self.atoms.get(&index)
    }

    fn bonds(&self, index: AtomIndex) -> impl Iterator<Item = &RecordedBond> {
        self.bonds
            .iter()
            .filter(move |b| b.begin == index || b.end == index)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CatalogEntry {
    Molecule(RecordedMolecule),
    Failure { kind: FailureKind, message: String },
}

/// Generated intermediate handed out by [`StructureCatalog::generate`].
#[derive(Debug, Clone)]
pub struct RecordedStructure {
    molecule: RecordedMolecule,
    typing_failure: Option<String>,
}

impl TypedStructure for RecordedStructure {
    type Molecule = RecordedMolecule;

    fn forcefield_types(self) -> Result<(ParamAssignment, RecordedMolecule), BuildError> {
        if let Some(message) = self.typing_failure {
            return Err(BuildError::ForceFieldAssignment(message));
        }
        let params = self.molecule.param_assignment();
        Ok((params, self.molecule))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    molecule: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileEntry {
    notation: String,
    #[serde(default)]
    atom: Vec<RecordedAtom>,
    #[serde(default)]
    bond: Vec<RecordedBond>,
    failure: Option<FileFailure>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileFailure {
    kind: FailureKind,
    message: String,
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Notation '{0}' is recorded more than once")]
    DuplicateNotation(String),
    #[error("Invalid record for notation '{notation}': {reason}")]
    InvalidEntry { notation: String, reason: String },
}

/// A [`StructureGenerator`] backed by pre-computed molecules.
///
/// Each notation maps either to a typed molecule or to a recorded failure. Structure
/// and validation failures surface from [`generate`](StructureGenerator::generate);
/// force-field failures surface later from
/// [`forcefield_types`](TypedStructure::forcefield_types). Notations absent from the
/// catalog fail as structure errors.
#[derive(Debug, Clone, Default)]
pub struct StructureCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl StructureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: CatalogFile = toml::from_str(&content).map_err(|e| CatalogLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut catalog = Self::new();
        for entry in file.molecule {
            catalog.insert_file_entry(entry)?;
        }
        debug!(
            "Loaded {} catalog entries from {:?}",
            catalog.len(),
            path
        );
        Ok(catalog)
    }

    fn insert_file_entry(&mut self, entry: FileEntry) -> Result<(), CatalogLoadError> {
        let FileEntry {
            notation,
            atom,
            bond,
            failure,
        } = entry;

        let record = match failure {
            Some(FileFailure { kind, message }) => {
                if !atom.is_empty() || !bond.is_empty() {
                    return Err(CatalogLoadError::InvalidEntry {
                        notation,
                        reason: "a failure record cannot also list atoms or bonds".to_string(),
                    });
                }
                CatalogEntry::Failure { kind, message }
            }
            None => {
                if let Err(reason) = check_topology(&atom, &bond) {
                    return Err(CatalogLoadError::InvalidEntry { notation, reason });
                }
                CatalogEntry::Molecule(RecordedMolecule::new(atom, bond))
            }
        };

        match self.entries.entry(notation) {
            Entry::Occupied(slot) => Err(CatalogLoadError::DuplicateNotation(slot.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Records (or replaces) a molecule for `notation`.
    pub fn insert_molecule(&mut self, notation: impl Into<String>, molecule: RecordedMolecule) {
        self.entries
            .insert(notation.into(), CatalogEntry::Molecule(molecule));
    }

    /// Records (or replaces) a failure for `notation`.
    pub fn insert_failure(&mut self, notation: impl Into<String>, error: BuildError) {
        let kind = error.kind();
        let message = error.message().to_string();
        self.entries
            .insert(notation.into(), CatalogEntry::Failure { kind, message });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, notation: &str) -> bool {
        self.entries.contains_key(notation)
    }
}

fn check_topology(atoms: &[RecordedAtom], bonds: &[RecordedBond]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(atoms.len());
    for atom in atoms {
        if !seen.insert(atom.index) {
            return Err(format!("atom index {} appears more than once", atom.index));
        }
    }
    for bond in bonds {
        for end in [bond.begin, bond.end] {
            if !seen.contains(&end) {
                return Err(format!(
                    "bond {}-{} references unknown atom {}",
                    bond.begin, bond.end, end
                ));
            }
        }
        if bond.begin == bond.end {
            return Err(format!("bond {}-{} is a self-loop", bond.begin, bond.end));
        }
    }
    Ok(())
}

impl StructureGenerator for StructureCatalog {
    type Structure = RecordedStructure;

    fn generate(&self, notation: &str) -> Result<RecordedStructure, BuildError> {
        match self.entries.get(notation) {
            None => Err(BuildError::structure(format!(
                "no structure recorded for '{}'",
                notation
            ))),
            Some(CatalogEntry::Failure { kind, message }) => match kind {
                FailureKind::ForceFieldAssignment => Ok(RecordedStructure {
                    molecule: RecordedMolecule::default(),
                    typing_failure: Some(message.clone()),
                }),
                _ => Err(BuildError::of_kind(*kind, message.clone())),
            },
            Some(CatalogEntry::Molecule(molecule)) => Ok(RecordedStructure {
                molecule: molecule.clone(),
                typing_failure: None,
            }),
        }
    }
}
