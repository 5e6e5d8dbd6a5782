use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an atom within the molecule it was generated from.
///
/// Indices are unique within one graph but need not be contiguous: atoms the
/// force field could not type are left out of the node set.
pub type AtomIndex = usize;

/// A single scalar field of a force-field parameter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Named force-field parameters of one atom, in the order the typer reported them.
pub type ParamRecord = IndexMap<String, ParamValue>;

/// Chemical attributes of an atom node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAttributes {
    /// Atomic number (e.g., 6 for carbon).
    pub atomic: u32,
    /// Total valence, including implicit hydrogens.
    pub valence: u32,
    /// Formal charge in elementary charge units.
    pub formal_charge: i32,
    /// Whether the atom is part of an aromatic system.
    pub aromatic: bool,
    /// Integer hybridization code as reported by the structure toolkit.
    pub hybridization: i32,
    /// Number of unpaired (radical) electrons.
    pub radical_electrons: u32,
    /// Force-field parameters. `None` only on masked graphs.
    pub param: Option<ParamRecord>,
}

/// Chemical attributes of a bond edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeAttributes {
    /// Integer bond-type code (single, double, aromatic, ...).
    pub bond_type: i32,
    /// Integer stereochemistry code.
    pub stereo: i32,
    pub aromatic: bool,
    pub conjugated: bool,
}

/// An edge as first inserted. `source`/`target` keep the orientation of that
/// first visit; the owning graph keys it by the unordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: AtomIndex,
    pub target: AtomIndex,
    pub attributes: EdgeAttributes,
}

impl Edge {
    pub fn contains(&self, index: AtomIndex) -> bool {
        self.source == index || self.target == index
    }
}

fn edge_key(a: AtomIndex, b: AtomIndex) -> (AtomIndex, AtomIndex) {
    if a <= b { (a, b) } else { (b, a) }
}

/// An undirected molecular graph whose nodes are atoms and whose edges are bonds,
/// each carrying a fixed attribute schema.
///
/// Nodes keep insertion order; edges are keyed by their unordered endpoint pair so a
/// bond seen from both of its atoms is stored once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributedGraph {
    nodes: IndexMap<AtomIndex, NodeAttributes>,
    edges: IndexMap<(AtomIndex, AtomIndex), Edge>,
}

impl AttributedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the node at `index`.
    pub fn add_node(&mut self, index: AtomIndex, attributes: NodeAttributes) {
        self.nodes.insert(index, attributes);
    }

    /// Inserts an edge unless the unordered pair is already present.
    ///
    /// # Return
    ///
    /// Returns `true` if the edge was new, `false` if an edge between the two atoms
    /// already existed (the stored edge is left untouched).
    pub fn add_edge(
        &mut self,
        source: AtomIndex,
        target: AtomIndex,
        attributes: EdgeAttributes,
    ) -> bool {
        match self.edges.entry(edge_key(source, target)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Edge {
                    source,
                    target,
                    attributes,
                });
                true
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, index: AtomIndex) -> bool {
        self.nodes.contains_key(&index)
    }

    pub fn node(&self, index: AtomIndex) -> Option<&NodeAttributes> {
        self.nodes.get(&index)
    }

    pub fn edge(&self, a: AtomIndex, b: AtomIndex) -> Option<&Edge> {
        self.edges.get(&edge_key(a, b))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (AtomIndex, &NodeAttributes)> {
        self.nodes.iter().map(|(&index, attrs)| (index, attrs))
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Whether every node carries a non-empty parameter record and every edge joins
    /// two nodes of this graph.
    pub fn is_complete(&self) -> bool {
        let nodes_typed = self
            .nodes
            .values()
            .all(|n| n.param.as_ref().is_some_and(|p| !p.is_empty()));
        let edges_closed = self
            .edges
            .values()
            .all(|e| self.contains_node(e.source) && self.contains_node(e.target));
        nodes_typed && edges_closed
    }

    pub fn is_masked(&self) -> bool {
        self.nodes.values().all(|n| n.param.is_none())
    }

    /// Removes the parameter record from every node in place.
    pub fn strip_parameters(&mut self) {
        for node in self.nodes.values_mut() {
            node.param = None;
        }
    }

    /// Returns a copy of this graph with the parameter record removed from every
    /// node. The receiver is left untouched.
    pub fn masked(&self) -> Self {
        let mut derived = self.clone();
        derived.strip_parameters();
        derived
    }
}

struct SerNode<'a> {
    id: AtomIndex,
    attrs: &'a NodeAttributes,
}

impl Serialize for SerNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.attrs.param.is_some() { 8 } else { 7 };
        let mut s = serializer.serialize_struct("Node", len)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("atomic", &self.attrs.atomic)?;
        s.serialize_field("valence", &self.attrs.valence)?;
        s.serialize_field("formal_charge", &self.attrs.formal_charge)?;
        s.serialize_field("aromatic", &self.attrs.aromatic)?;
        s.serialize_field("hybridization", &self.attrs.hybridization)?;
        s.serialize_field("radical_electrons", &self.attrs.radical_electrons)?;
        match &self.attrs.param {
            Some(param) => s.serialize_field("param", param)?,
            None => s.skip_field("param")?,
        }
        s.end()
    }
}

impl Serialize for Edge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Edge", 6)?;
        s.serialize_field("source", &self.source)?;
        s.serialize_field("target", &self.target)?;
        s.serialize_field("type", &self.attributes.bond_type)?;
        s.serialize_field("stereo", &self.attributes.stereo)?;
        s.serialize_field("aromatic", &self.attributes.aromatic)?;
        s.serialize_field("conjugated", &self.attributes.conjugated)?;
        s.end()
    }
}

impl Serialize for AttributedGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nodes: Vec<SerNode<'_>> = self
            .nodes
            .iter()
            .map(|(&id, attrs)| SerNode { id, attrs })
            .collect();
        let edges: Vec<&Edge> = self.edges.values().collect();

        let mut s = serializer.serialize_struct("AttributedGraph", 2)?;
        s.serialize_field("nodes", &nodes)?;
        s.serialize_field("edges", &edges)?;
        s.end()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn carbon(param_type: &str) -> NodeAttributes {
        let mut param = ParamRecord::new();
        param.insert("type".to_string(), ParamValue::Text(param_type.to_string()));
        param.insert("charge".to_string(), ParamValue::Float(-0.12));
        NodeAttributes {
            atomic: 6,
            valence: 4,
            formal_charge: 0,
            aromatic: false,
            hybridization: 4,
            radical_electrons: 0,
            param: Some(param),
        }
    }

    pub(crate) fn single_bond() -> EdgeAttributes {
        EdgeAttributes {
            bond_type: 1,
            stereo: 0,
            aromatic: false,
            conjugated: false,
        }
    }

    fn cyclopropane() -> AttributedGraph {
        let mut graph = AttributedGraph::new();
        for i in 0..3 {
            graph.add_node(i, carbon("c3"));
        }
        graph.add_edge(0, 1, single_bond());
        graph.add_edge(1, 2, single_bond());
        graph.add_edge(2, 0, single_bond());
        graph
    }

    #[test]
    fn add_edge_is_idempotent_for_either_orientation() {
        let mut graph = cyclopropane();
        assert!(!graph.add_edge(1, 0, single_bond()));
        assert!(!graph.add_edge(0, 1, single_bond()));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn edge_keeps_orientation_of_first_insertion() {
        let graph = cyclopropane();
        let edge = graph.edge(0, 2).unwrap();
        assert_eq!((edge.source, edge.target), (2, 0));
        assert!(edge.contains(0) && edge.contains(2) && !edge.contains(1));
    }

    #[test]
    fn nodes_iterate_in_insertion_order() {
        let mut graph = AttributedGraph::new();
        graph.add_node(7, carbon("c3"));
        graph.add_node(2, carbon("c3"));
        graph.add_node(5, carbon("c3"));
        let order: Vec<_> = graph.nodes().map(|(i, _)| i).collect();
        assert_eq!(order, vec![7, 2, 5]);
    }

    #[test]
    fn complete_graph_requires_parameters_on_every_node() {
        let mut graph = cyclopropane();
        assert!(graph.is_complete());

        let mut untyped = carbon("c3");
        untyped.param = Some(ParamRecord::new());
        graph.add_node(1, untyped);
        assert!(!graph.is_complete());
    }

    #[test]
    fn edge_to_missing_node_breaks_completeness() {
        let mut graph = cyclopropane();
        graph.add_edge(2, 9, single_bond());
        assert!(!graph.is_complete());
    }

    #[test]
    fn masked_copy_drops_only_parameters() {
        let graph = cyclopropane();
        let masked = graph.masked();

        assert!(graph.is_complete());
        assert!(masked.is_masked());
        assert_eq!(masked.node_count(), graph.node_count());
        assert_eq!(masked.edge_count(), graph.edge_count());
        for ((i, full), (j, derived)) in graph.nodes().zip(masked.nodes()) {
            assert_eq!(i, j);
            assert_eq!(full.atomic, derived.atomic);
            assert_eq!(full.valence, derived.valence);
            assert_eq!(full.formal_charge, derived.formal_charge);
            assert_eq!(full.aromatic, derived.aromatic);
            assert_eq!(full.hybridization, derived.hybridization);
            assert_eq!(full.radical_electrons, derived.radical_electrons);
            assert!(derived.param.is_none());
        }
        assert!(graph.edges().eq(masked.edges()));
    }

    #[test]
    fn masking_is_idempotent() {
        let once = cyclopropane().masked();
        assert_eq!(once.masked(), once);
    }

    #[test]
    fn serializes_nodes_and_edges_with_fixed_field_order() {
        let mut graph = AttributedGraph::new();
        graph.add_node(0, carbon("c3"));
        graph.add_node(1, carbon("c3"));
        graph.add_edge(0, 1, single_bond());

        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"nodes":["#,
                r#"{"id":0,"atomic":6,"valence":4,"formal_charge":0,"aromatic":false,"hybridization":4,"radical_electrons":0,"param":{"type":"c3","charge":-0.12}},"#,
                r#"{"id":1,"atomic":6,"valence":4,"formal_charge":0,"aromatic":false,"hybridization":4,"radical_electrons":0,"param":{"type":"c3","charge":-0.12}}"#,
                r#"],"edges":[{"source":0,"target":1,"type":1,"stereo":0,"aromatic":false,"conjugated":false}]}"#
            )
        );
    }

    #[test]
    fn masked_graph_serialization_omits_param() {
        let graph = cyclopropane().masked();
        let json = serde_json::to_value(&graph).unwrap();
        for node in json["nodes"].as_array().unwrap() {
            assert!(node.get("param").is_none());
            assert_eq!(node["atomic"], 6);
        }
    }

    #[test]
    fn param_value_parses_untagged_scalars() {
        let record: ParamRecord =
            serde_json::from_str(r#"{"type":"c3","sigma":3.4,"index":2,"hbond":false}"#).unwrap();
        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "sigma", "index", "hbond"]);
        assert_eq!(record["sigma"], ParamValue::Float(3.4));
        assert_eq!(record["index"], ParamValue::Int(2));
        assert_eq!(record["hbond"], ParamValue::Bool(false));
        assert_eq!(record["type"].to_string(), "c3");
    }
}
