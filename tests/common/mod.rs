#![allow(dead_code)]

use label_graph_similarity::graph::{Attributes, GraphBuilder};
use petgraph::{EdgeType, Graph as PetGraph};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

pub type LabelGraph<Ty> = PetGraph<usize, Attributes, Ty>;

/// Edges of a growing network with redirection: node `i` links to a uniformly
/// chosen older node, or with probability `p` to that node's own target.
/// The result is a tree whose edges point from newer to older nodes.
pub fn gnr_edges(n: usize, p: f64, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut successor: Vec<Option<usize>> = vec![None; n];
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for source in 1..n {
        let mut target = rng.gen_range(0..source);
        if rng.gen::<f64>() < p {
            if let Some(next) = successor[target] {
                target = next;
            }
        }
        successor[source] = Some(target);
        edges.push((source, target));
    }
    edges
}

pub fn build_graph<Ty: EdgeType>(n: usize, edges: &[(usize, usize)]) -> LabelGraph<Ty> {
    let mut builder: GraphBuilder<usize, Ty> = GraphBuilder::new();
    for i in 0..n {
        builder.add_node(i);
    }
    for &(source, target) in edges {
        builder.add_edge_unweighted(source, target);
    }
    builder.graph()
}

pub fn build_weighted_graph<Ty: EdgeType>(
    n: usize,
    edges: &[(usize, usize, f64)],
) -> LabelGraph<Ty> {
    let mut builder: GraphBuilder<usize, Ty> = GraphBuilder::new();
    for i in 0..n {
        builder.add_node(i);
    }
    for &(source, target, w) in edges {
        builder.add_weighted_edge(source, target, "weight", w);
    }
    builder.graph()
}

pub fn gnr_graph<Ty: EdgeType>(n: usize, p: f64, seed: u64) -> LabelGraph<Ty> {
    build_graph(n, &gnr_edges(n, p, seed))
}

pub fn isolated_nodes<Ty: EdgeType>(labels: impl Iterator<Item = usize>) -> LabelGraph<Ty> {
    let mut builder: GraphBuilder<usize, Ty> = GraphBuilder::new();
    for label in labels {
        builder.add_node(label);
    }
    builder.graph()
}
