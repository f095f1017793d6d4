use crate::correlation::pearson_correlation;
use crate::error::SimilarityError;
use crate::frequency::NodeFrequencies;
use ndarray::Array1;
use std::collections::BTreeSet;

/// Two frequency maps aligned on the sorted union of their labels, each
/// normalized to sum 1. A label missing from one map has frequency 0 there.
#[derive(Debug, Clone)]
pub struct FrequencyVectors<L> {
    labels: Vec<L>,
    first: Array1<f64>,
    second: Array1<f64>,
}

impl<L: Ord + Clone> FrequencyVectors<L> {
    pub fn reconcile(
        first: &NodeFrequencies<L>,
        second: &NodeFrequencies<L>,
    ) -> Result<FrequencyVectors<L>, SimilarityError> {
        let labels: Vec<L> = first
            .labels()
            .chain(second.labels())
            .cloned()
            .collect::<BTreeSet<L>>()
            .into_iter()
            .collect();

        let first_vec = label_order_vector(first, &labels)?;
        let second_vec = label_order_vector(second, &labels)?;

        Ok(FrequencyVectors {
            labels,
            first: first_vec,
            second: second_vec,
        })
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn first(&self) -> &Array1<f64> {
        &self.first
    }

    pub fn second(&self) -> &Array1<f64> {
        &self.second
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Pearson correlation of both vectors.
    pub fn similarity(&self) -> Result<f64, SimilarityError> {
        pearson_correlation(self.first.view(), self.second.view())
    }
}

fn label_order_vector<L: Ord>(
    frequencies: &NodeFrequencies<L>,
    labels: &[L],
) -> Result<Array1<f64>, SimilarityError> {
    let total = frequencies.total();
    if !(total > 0.0) {
        return Err(SimilarityError::NonPositiveMass { total });
    }
    let entries: Vec<f64> = labels
        .iter()
        .map(|label| frequencies.get(label).unwrap_or(0.0) / total)
        .collect();
    Ok(Array1::from(entries))
}
