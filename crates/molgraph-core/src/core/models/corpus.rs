use super::graph::AttributedGraph;
use indexmap::IndexMap;

/// An insertion-ordered notation → graph mapping, the unit that gets persisted.
pub type Dataset = IndexMap<String, AttributedGraph>;

/// One accepted candidate: the notation string and the graph built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub notation: String,
    pub graph: AttributedGraph,
}

/// An ordered collection of curated (notation, graph) pairs.
///
/// Notations are not deduplicated; the same notation may be accepted more than once
/// when the stream repeats it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, notation: impl Into<String>, graph: AttributedGraph) {
        self.entries.push(CorpusEntry {
            notation: notation.into(),
            graph,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorpusEntry> {
        self.entries.iter()
    }

    pub fn notations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.notation.as_str())
    }

    /// Builds the notation → graph mapping handed to a dataset sink.
    ///
    /// A notation that occurs more than once keeps the position of its first
    /// occurrence and the graph of its last one.
    pub fn to_dataset(&self) -> Dataset {
        let mut dataset = Dataset::with_capacity(self.entries.len());
        for entry in &self.entries {
            dataset.insert(entry.notation.clone(), entry.graph.clone());
        }
        dataset
    }

    /// Returns a corpus whose graphs carry no parameter records.
    pub fn masked(&self) -> Self {
        self.entries
            .iter()
            .map(|e| CorpusEntry {
                notation: e.notation.clone(),
                graph: e.graph.masked(),
            })
            .collect()
    }
}

impl FromIterator<CorpusEntry> for Corpus {
    fn from_iter<I: IntoIterator<Item = CorpusEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Corpus {
    type Item = CorpusEntry;
    type IntoIter = std::vec::IntoIter<CorpusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a CorpusEntry;
    type IntoIter = std::slice::Iter<'a, CorpusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::graph::tests::carbon;

    fn graph_with(nodes: usize) -> AttributedGraph {
        let mut graph = AttributedGraph::new();
        for i in 0..nodes {
            graph.add_node(i, carbon("c3"));
        }
        graph
    }

    #[test]
    fn push_keeps_order_and_duplicates() {
        let mut corpus = Corpus::new();
        corpus.push("CC", graph_with(2));
        corpus.push("CCC", graph_with(3));
        corpus.push("CC", graph_with(2));

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.notations().collect::<Vec<_>>(), vec!["CC", "CCC", "CC"]);
    }

    #[test]
    fn to_dataset_keeps_first_position_and_last_graph_for_repeats() {
        let mut corpus = Corpus::new();
        corpus.push("A", graph_with(1));
        corpus.push("B", graph_with(2));
        corpus.push("A", graph_with(3));

        let dataset = corpus.to_dataset();
        assert_eq!(dataset.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(dataset["A"].node_count(), 3);
    }

    #[test]
    fn masked_corpus_leaves_the_source_intact() {
        let mut corpus = Corpus::new();
        corpus.push("CC", graph_with(2));

        let masked = corpus.masked();
        assert!(masked.get(0).unwrap().graph.is_masked());
        assert!(corpus.get(0).unwrap().graph.is_complete());
        assert_eq!(masked.notations().collect::<Vec<_>>(), vec!["CC"]);
    }
}
