//! Similarity index of label graph pairs.
//!
//! Each graph is turned into a node frequency distribution: every node has a
//! baseline weight of 1, and every connected component spreads a structural
//! budget derived from its average shortest path length over its edges, in
//! proportion to `log1p` of the edge weights. The two distributions are aligned
//! on the sorted union of node labels and normalized, and the similarity index
//! is their Pearson correlation, in the range `[-1, 1]`.
//!
//! The cost is `O(n^2 log(n) + n m)` for `n` nodes and `m` edges.

mod correlation;
mod error;
mod frequency;
mod frequency_vector;
pub mod graph;
mod graph_traits;

pub use {correlation::*, error::*, frequency::*, frequency_vector::*, graph_traits::*};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Computes the similarity index of `g1` and `g2`.
///
/// `weight` names the edge attribute holding the numeric edge weight. If it is
/// `None`, or an edge lacks the attribute, the edge weighs 1.
pub fn compute_similarity<A, B>(
    g1: &A,
    g2: &B,
    weight: Option<&str>,
) -> Result<f64, SimilarityError>
where
    A: LabeledGraph,
    B: LabeledGraph<Label = A::Label>,
{
    if g1.num_nodes() == 0 {
        return Err(SimilarityError::EmptyGraph { position: 1 });
    }
    if g2.num_nodes() == 0 {
        return Err(SimilarityError::EmptyGraph { position: 2 });
    }

    let frequencies_1 = node_frequencies(g1, weight)?;
    let frequencies_2 = node_frequencies(g2, weight)?;

    let vectors = FrequencyVectors::reconcile(&frequencies_1, &frequencies_2)?;
    let similarity = vectors.similarity()?;

    log::debug!(
        "similarity index of {} labels : {:.6}",
        vectors.len(),
        similarity
    );
    Ok(similarity)
}

/// A reusable similarity calculation with a fixed weight attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityIndex {
    weight: Option<String>,
}

impl SimilarityIndex {
    pub fn new() -> SimilarityIndex {
        SimilarityIndex { weight: None }
    }

    pub fn with_weight(mut self, weight: &str) -> SimilarityIndex {
        self.weight = Some(weight.to_owned());
        self
    }

    pub fn weight(&self) -> Option<&str> {
        self.weight.as_deref()
    }

    pub fn compute<A, B>(&self, g1: &A, g2: &B) -> Result<f64, SimilarityError>
    where
        A: LabeledGraph,
        B: LabeledGraph<Label = A::Label>,
    {
        compute_similarity(g1, g2, self.weight())
    }
}
