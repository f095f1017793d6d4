//! Traits that represent an abstract labeled graph upon which our algorithm operates.

use petgraph::algo::dijkstra;
use petgraph::unionfind::UnionFind;
use petgraph::{graph::NodeIndex, Directed, Graph as PetGraph};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// The value of a named edge attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    /// Counts as 0 or 1 when used as a weight.
    Bool(bool),
    Text(String),
}

impl AttrValue {
    /// Numeric view of the value, `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            AttrValue::Int(i) => Some(i as f64),
            AttrValue::Float(f) => Some(f),
            AttrValue::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            AttrValue::Text(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Int(_) => "int",
            AttrValue::Float(_) => "float",
            AttrValue::Bool(_) => "bool",
            AttrValue::Text(_) => "str",
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> AttrValue {
        AttrValue::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> AttrValue {
        AttrValue::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> AttrValue {
        AttrValue::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> AttrValue {
        AttrValue::Text(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> AttrValue {
        AttrValue::Text(v)
    }
}

/// Named attribute lookup on the payload of an edge.
pub trait EdgeAttributes {
    fn attribute(&self, name: &str) -> Option<AttrValue>;
}

/// Edges without any attributes.
impl EdgeAttributes for () {
    fn attribute(&self, _name: &str) -> Option<AttrValue> {
        None
    }
}

/// A bare numeric edge payload is the value of every named attribute.
impl EdgeAttributes for f64 {
    fn attribute(&self, _name: &str) -> Option<AttrValue> {
        Some(AttrValue::Float(*self))
    }
}

/// Abstract representation of a labeled graph. Used by the algorithm.
///
/// Nodes and edges are addressed by their position `0..num_nodes()` and
/// `0..num_edges()`. Parallel edges and self loops are allowed.
pub trait LabeledGraph {
    type Label: Ord + Clone + Debug;
    type Attrs: EdgeAttributes;

    fn num_nodes(&self) -> usize;
    fn num_edges(&self) -> usize;
    fn is_directed(&self) -> bool;
    fn node_label(&self, node_idx: usize) -> &Self::Label;

    /// Returns `(source, target)` of the edge.
    fn edge_nodes(&self, edge_idx: usize) -> (usize, usize);
    fn edge_attributes(&self, edge_idx: usize) -> &Self::Attrs;

    fn edge_attribute(&self, edge_idx: usize, name: &str) -> Option<AttrValue> {
        self.edge_attributes(edge_idx).attribute(name)
    }

    /// `true` if the graph has no edges (it may still have nodes).
    fn is_edgeless(&self) -> bool {
        self.num_edges() == 0
    }

    /// Topology of the subgraph spanned by `nodes` and those of `edges` whose
    /// endpoints both lie in `nodes`, keeping the orientation of directed edges.
    /// Undirected edges are inserted in both directions. Node weights are the
    /// node indices in `self`. Only `nodes` and `edges` are visited.
    fn induced_petgraph(
        &self,
        nodes: &[usize],
        edges: &[usize],
    ) -> PetGraph<usize, (), Directed> {
        let mut local: BTreeMap<usize, NodeIndex> = BTreeMap::new();
        let mut graph = PetGraph::with_capacity(nodes.len(), edges.len());
        for &i in nodes {
            local.insert(i, graph.add_node(i));
        }
        for &e in edges {
            let (i, j) = self.edge_nodes(e);
            if let (Some(&a), Some(&b)) = (local.get(&i), local.get(&j)) {
                graph.add_edge(a, b, ());
                if !self.is_directed() && a != b {
                    graph.add_edge(b, a, ());
                }
            }
        }
        graph
    }

    fn to_petgraph(&self) -> PetGraph<usize, (), Directed> {
        let nodes: Vec<usize> = (0..self.num_nodes()).collect();
        let edges: Vec<usize> = (0..self.num_edges()).collect();
        self.induced_petgraph(&nodes, &edges)
    }

    /// Connected components of the undirected projection. Every component is
    /// sorted by node index.
    fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut sets = UnionFind::<usize>::new(self.num_nodes());
        for e in 0..self.num_edges() {
            let (i, j) = self.edge_nodes(e);
            sets.union(i, j);
        }
        let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (node, root) in sets.into_labeling().into_iter().enumerate() {
            components.entry(root).or_insert_with(Vec::new).push(node);
        }
        components.into_iter().map(|(_, nodes)| nodes).collect()
    }

    /// Average number of hops between the ordered pairs of `nodes`, measured on
    /// the subgraph spanned by `nodes` and `edges` (usually a component and its
    /// edges). Unreachable pairs count as zero hops, the sum is divided by
    /// `n * (n - 1)`. Returns 0 for less than two nodes.
    fn average_shortest_path_length(&self, nodes: &[usize], edges: &[usize]) -> f64 {
        let n = nodes.len();
        if n < 2 {
            return 0.0;
        }
        let graph = self.induced_petgraph(nodes, edges);
        let total: usize = graph
            .node_indices()
            .map(|start| {
                dijkstra(&graph, start, None, |_| 1usize)
                    .values()
                    .sum::<usize>()
            })
            .sum();
        total as f64 / (n * (n - 1)) as f64
    }

    /// Edge indices grouped by endpoint pair. For undirected graphs the pair
    /// is stored with the smaller node index first.
    fn edge_groups(&self) -> BTreeMap<(usize, usize), Vec<usize>> {
        let mut groups: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
        for e in 0..self.num_edges() {
            let (i, j) = self.edge_nodes(e);
            let key = if self.is_directed() || i <= j {
                (i, j)
            } else {
                (j, i)
            };
            groups.entry(key).or_insert_with(Vec::new).push(e);
        }
        groups
    }

    fn has_parallel_edges(&self, a: usize, b: usize) -> bool {
        (0..self.num_edges())
            .filter(|&e| {
                let (i, j) = self.edge_nodes(e);
                (i, j) == (a, b) || (!self.is_directed() && (j, i) == (a, b))
            })
            .nth(1)
            .is_some()
    }
}
