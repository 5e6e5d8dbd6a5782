use crate::core::models::graph::{AttributedGraph, EdgeAttributes, NodeAttributes};
use crate::core::structure::error::BuildError;
use crate::core::structure::{
    AtomView, BondView, MoleculeView, StructureGenerator, TypedStructure,
};
use tracing::trace;

/// Converts notation strings into attributed graphs through a structure toolkit.
pub struct GraphBuilder<'a, G: StructureGenerator> {
    generator: &'a G,
}

impl<'a, G: StructureGenerator> GraphBuilder<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        Self { generator }
    }

    /// Builds the attributed graph for one notation string.
    ///
    /// The node set is the set of atoms that received force-field parameters, in the
    /// order the toolkit listed them. Edges are collected by walking the bonds of every
    /// node; a bond reached from both ends is stored once.
    ///
    /// Construction is all-or-nothing: if any node or edge cannot be fully attributed
    /// no graph is returned.
    ///
    /// # Errors
    ///
    /// * [`BuildError::Structure`] - generation failed, or the typed atoms are not all
    ///   present in the generated molecule.
    /// * [`BuildError::Validation`] - the notation was rejected.
    /// * [`BuildError::ForceFieldAssignment`] - typing failed, an atom received an empty
    ///   parameter record, or a bond leads to an atom without a force-field type.
    pub fn build(&self, notation: &str) -> Result<AttributedGraph, BuildError> {
        let structure = self.generator.generate(notation)?;
        let (params, molecule) = structure.forcefield_types()?;

        let mut graph = AttributedGraph::new();
        for (&index, record) in &params {
            let atom = molecule.atom(index).ok_or_else(|| {
                BuildError::structure(format!(
                    "typed atom {} is missing from the generated molecule",
                    index
                ))
            })?;
            if record.is_empty() {
                return Err(BuildError::force_field(format!(
                    "atom {} received an empty parameter record",
                    index
                )));
            }
            graph.add_node(
                index,
                NodeAttributes {
                    atomic: atom.atomic_number(),
                    valence: atom.total_valence(),
                    formal_charge: atom.formal_charge(),
                    aromatic: atom.is_aromatic(),
                    hybridization: atom.hybridization(),
                    radical_electrons: atom.radical_electrons(),
                    param: Some(record.clone()),
                },
            );
        }

        for &index in params.keys() {
            for bond in molecule.bonds(index) {
                let (begin, end) = (bond.begin_index(), bond.end_index());
                if let Some(untyped) = [begin, end].into_iter().find(|i| !params.contains_key(i)) {
                    return Err(BuildError::force_field(format!(
                        "bond {}-{} reaches atom {} which has no force-field type",
                        begin, end, untyped
                    )));
                }
                graph.add_edge(
                    begin,
                    end,
                    EdgeAttributes {
                        bond_type: bond.bond_type(),
                        stereo: bond.stereo(),
                        aromatic: bond.is_aromatic(),
                        conjugated: bond.is_conjugated(),
                    },
                );
            }
        }

        trace!(
            notation,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built graph"
        );
        Ok(graph)
    }
}
