//! Conversion of a graph into a node frequency map.
//!
//! Every node starts with a baseline frequency of 1. Each connected component
//! with more than one node owns a structural budget
//! `(average_shortest_path_length - 1) * component_size / 2` which is split
//! among its endpoint pairs in proportion to `log1p(weight)`, each share going
//! to both endpoints.

use crate::error::SimilarityError;
use crate::graph_traits::LabeledGraph;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Frequency of every node of a graph, keyed by node label.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeFrequencies<L: Ord> {
    map: BTreeMap<L, f64>,
}

impl<L: Ord> NodeFrequencies<L> {
    pub fn get(&self, label: &L) -> Option<f64> {
        self.map.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates in ascending label order.
    pub fn iter(&self) -> btree_map::Iter<'_, L, f64> {
        self.map.iter()
    }

    pub fn labels(&self) -> btree_map::Keys<'_, L, f64> {
        self.map.keys()
    }

    /// Sum of all frequencies.
    pub fn total(&self) -> f64 {
        self.map.values().sum()
    }
}

/// Computes the frequency of every node of `graph`.
///
/// `weight` names the edge attribute holding the edge weight. Without it, or
/// for edges lacking the attribute, the weight is 1.
pub fn node_frequencies<G: LabeledGraph>(
    graph: &G,
    weight: Option<&str>,
) -> Result<NodeFrequencies<G::Label>, SimilarityError> {
    check_unique_labels(graph)?;

    let mut frequencies = vec![1.0; graph.num_nodes()];

    if !graph.is_edgeless() {
        let components = graph.connected_components();
        log::debug!(
            "graph with {} nodes, {} edges, {} components",
            graph.num_nodes(),
            graph.num_edges(),
            components.len()
        );

        let mut membership = vec![0; graph.num_nodes()];
        for (c, nodes) in components.iter().enumerate() {
            for &node in nodes {
                membership[node] = c;
            }
        }

        let mut pairs_of_component: Vec<Vec<(usize, usize, Vec<usize>)>> =
            vec![Vec::new(); components.len()];
        for ((i, j), edges) in graph.edge_groups() {
            pairs_of_component[membership[i]].push((i, j, edges));
        }

        for (nodes, pairs) in components.iter().zip(pairs_of_component.iter()) {
            if nodes.len() > 1 {
                distribute_budget(graph, nodes, pairs, weight, &mut frequencies)?;
            }
        }
    }

    let map = (0..graph.num_nodes())
        .map(|i| (graph.node_label(i).clone(), frequencies[i]))
        .collect();
    Ok(NodeFrequencies { map })
}

fn check_unique_labels<G: LabeledGraph>(graph: &G) -> Result<(), SimilarityError> {
    let mut seen = BTreeMap::new();
    for i in 0..graph.num_nodes() {
        let label = graph.node_label(i);
        if seen.insert(label, i).is_some() {
            return Err(SimilarityError::DuplicateLabel {
                label: format!("{:?}", label),
            });
        }
    }
    Ok(())
}

/// Spreads the structural budget of one component over its endpoint pairs.
fn distribute_budget<G: LabeledGraph>(
    graph: &G,
    nodes: &[usize],
    pairs: &[(usize, usize, Vec<usize>)],
    weight: Option<&str>,
    frequencies: &mut [f64],
) -> Result<(), SimilarityError> {
    let edges: Vec<usize> = pairs
        .iter()
        .flat_map(|(_, _, copies)| copies.iter().copied())
        .collect();
    let avg_path_length = graph.average_shortest_path_length(nodes, &edges);
    let budget = (avg_path_length - 1.0) * nodes.len() as f64 / 2.0;

    let log_masses = pairs
        .iter()
        .map(|(i, j, edges)| pair_weight(graph, *i, *j, edges, weight).map(f64::ln_1p))
        .collect::<Result<Vec<f64>, _>>()?;

    let total_log_mass: f64 = log_masses.iter().sum();
    if total_log_mass <= 0.0 {
        return Err(SimilarityError::ZeroLogMass {
            component_size: nodes.len(),
        });
    }

    log::trace!(
        "component of {} nodes : average shortest path {:.3e}, budget {:.3e}, log mass {:.3e}",
        nodes.len(),
        avg_path_length,
        budget,
        total_log_mass
    );

    for ((i, j, _), log_mass) in pairs.iter().zip(log_masses) {
        let share = (log_mass / total_log_mass) * budget;
        frequencies[*i] += share;
        frequencies[*j] += share;
    }
    Ok(())
}

/// Mean weight of the parallel `edges` between `i` and `j`.
fn pair_weight<G: LabeledGraph>(
    graph: &G,
    i: usize,
    j: usize,
    edges: &[usize],
    weight: Option<&str>,
) -> Result<f64, SimilarityError> {
    let endpoints = || {
        (
            format!("{:?}", graph.node_label(i)),
            format!("{:?}", graph.node_label(j)),
        )
    };

    let mut sum = 0.0;
    for &e in edges {
        let value = match weight.and_then(|name| graph.edge_attribute(e, name)) {
            None => 1.0,
            Some(attr) => match attr.as_f64() {
                Some(v) => v,
                None => {
                    let (src, dst) = endpoints();
                    return Err(SimilarityError::NonNumericWeight {
                        src,
                        dst,
                        found: attr.type_name(),
                    });
                }
            },
        };
        sum += value;
    }
    let mean = sum / edges.len() as f64;

    if !mean.is_finite() {
        let (src, dst) = endpoints();
        return Err(SimilarityError::NonFiniteWeight {
            src,
            dst,
            weight: mean,
        });
    }
    if mean < 0.0 {
        let (src, dst) = endpoints();
        return Err(SimilarityError::NegativeWeight {
            src,
            dst,
            weight: mean,
            copies: edges.len(),
        });
    }
    Ok(mean)
}
