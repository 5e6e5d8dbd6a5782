use super::error::EngineError;
use crate::core::models::corpus::{Corpus, CorpusEntry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Splits a corpus into a data subset and a competition subset using a seeded
/// shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetPartitioner {
    data_size: usize,
    competition_size: usize,
    seed: u64,
}

impl DatasetPartitioner {
    pub fn new(data_size: usize, competition_size: usize, seed: u64) -> Self {
        Self {
            data_size,
            competition_size,
            seed,
        }
    }

    /// The shuffled index order for a corpus of `len` entries.
    pub fn permutation(&self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        order.shuffle(&mut rng);
        order
    }

    /// Shuffles the corpus indices and cuts them into `[..data_size]` and the rest.
    ///
    /// Equal inputs always give equal subsets, index for index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PartitionSize`] unless
    /// `data_size + competition_size == corpus.len()`.
    pub fn partition(&self, corpus: Corpus) -> Result<PartitionedCorpus, EngineError> {
        if self.data_size + self.competition_size != corpus.len() {
            return Err(EngineError::PartitionSize {
                data: self.data_size,
                competition: self.competition_size,
                corpus: corpus.len(),
            });
        }

        let order = self.permutation(corpus.len());
        debug!(
            seed = self.seed,
            data = self.data_size,
            competition = self.competition_size,
            "Partitioned corpus"
        );
        Ok(PartitionedCorpus {
            corpus,
            order,
            data_size: self.data_size,
        })
    }
}

/// A corpus together with one seeded permutation of its indices, cut in two.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedCorpus {
    corpus: Corpus,
    order: Vec<usize>,
    data_size: usize,
}

impl PartitionedCorpus {
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn data_indices(&self) -> &[usize] {
        &self.order[..self.data_size]
    }

    pub fn competition_indices(&self) -> &[usize] {
        &self.order[self.data_size..]
    }

    pub fn data(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries(self.data_indices())
    }

    pub fn competition(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries(self.competition_indices())
    }

    fn entries<'s>(&'s self, indices: &'s [usize]) -> impl Iterator<Item = &'s CorpusEntry> {
        indices.iter().filter_map(|&i| self.corpus.get(i))
    }

    /// Splits into owned (data, competition) corpora, both in shuffled order.
    pub fn into_subsets(self) -> (Corpus, Corpus) {
        let mut slots: Vec<Option<CorpusEntry>> = self.corpus.into_iter().map(Some).collect();
        let mut take = |indices: &[usize]| -> Corpus {
            indices.iter().filter_map(|&i| slots[i].take()).collect()
        };
        let data = take(&self.order[..self.data_size]);
        let competition = take(&self.order[self.data_size..]);
        (data, competition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::graph::AttributedGraph;
    use std::collections::HashSet;

    fn corpus_of(n: usize) -> Corpus {
        let mut corpus = Corpus::new();
        for i in 0..n {
            corpus.push(format!("C{}", i), AttributedGraph::new());
        }
        corpus
    }

    #[test]
    fn same_seed_gives_identical_subsets() {
        let a = DatasetPartitioner::new(70, 30, 1234)
            .partition(corpus_of(100))
            .unwrap();
        let b = DatasetPartitioner::new(70, 30, 1234)
            .partition(corpus_of(100))
            .unwrap();
        assert_eq!(a.data_indices(), b.data_indices());
        assert_eq!(a.competition_indices(), b.competition_indices());
    }

    #[test]
    fn different_seeds_give_different_orders() {
        let a = DatasetPartitioner::new(70, 30, 1).permutation(100);
        let b = DatasetPartitioner::new(70, 30, 2).permutation(100);
        assert_ne!(a, b);
    }

    #[test]
    fn subsets_are_disjoint_and_exactly_sized() {
        let split = DatasetPartitioner::new(40, 10, 99)
            .partition(corpus_of(50))
            .unwrap();

        let data: HashSet<_> = split.data_indices().iter().copied().collect();
        let competition: HashSet<_> = split.competition_indices().iter().copied().collect();
        assert_eq!(data.len(), 40);
        assert_eq!(competition.len(), 10);
        assert!(data.is_disjoint(&competition));
        assert_eq!(data.union(&competition).count(), 50);
    }

    #[test]
    fn entries_follow_the_shuffled_order() {
        let split = DatasetPartitioner::new(3, 2, 5)
            .partition(corpus_of(5))
            .unwrap();
        let expected: Vec<String> = split
            .data_indices()
            .iter()
            .map(|&i| format!("C{}", i))
            .collect();
        let actual: Vec<String> = split.data().map(|e| e.notation.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn into_subsets_matches_the_borrowed_views() {
        let split = DatasetPartitioner::new(6, 4, 11)
            .partition(corpus_of(10))
            .unwrap();
        let data_view: Vec<_> = split.data().cloned().collect();
        let competition_view: Vec<_> = split.competition().cloned().collect();

        let (data, competition) = split.into_subsets();
        assert_eq!(data.into_iter().collect::<Vec<_>>(), data_view);
        assert_eq!(competition.into_iter().collect::<Vec<_>>(), competition_view);
    }

    #[test]
    fn mismatched_sizes_are_rejected() {
        let result = DatasetPartitioner::new(5, 5, 0).partition(corpus_of(9));
        assert!(matches!(
            result,
            Err(EngineError::PartitionSize {
                data: 5,
                competition: 5,
                corpus: 9
            })
        ));
    }

    #[test]
    fn empty_competition_subset_is_allowed() {
        let split = DatasetPartitioner::new(4, 0, 3)
            .partition(corpus_of(4))
            .unwrap();
        assert_eq!(split.data().count(), 4);
        assert_eq!(split.competition().count(), 0);
    }
}
