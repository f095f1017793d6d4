use super::graph_traits::{AttrValue, EdgeAttributes, LabeledGraph};
use petgraph::graph::{IndexType, NodeIndex};
use petgraph::Graph as PetGraph;
use petgraph::{Directed, EdgeType};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Named attributes of an edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    values: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Attributes {
        Attributes {
            values: BTreeMap::new(),
        }
    }

    pub fn with<V: Into<AttrValue>>(mut self, name: &str, value: V) -> Attributes {
        self.insert(name, value);
        self
    }

    pub fn insert<V: Into<AttrValue>>(&mut self, name: &str, value: V) -> Option<AttrValue> {
        self.values.insert(name.to_owned(), value.into())
    }
}

impl EdgeAttributes for Attributes {
    fn attribute(&self, name: &str) -> Option<AttrValue> {
        self.values.get(name).cloned()
    }
}

impl<N, E, Ty, Ix> LabeledGraph for PetGraph<N, E, Ty, Ix>
where
    N: Ord + Clone + Debug,
    E: EdgeAttributes,
    Ty: EdgeType,
    Ix: IndexType,
{
    type Label = N;
    type Attrs = E;

    #[inline]
    fn num_nodes(&self) -> usize {
        self.node_count()
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.edge_count()
    }

    #[inline]
    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    #[inline]
    fn node_label(&self, node_idx: usize) -> &N {
        &self.raw_nodes()[node_idx].weight
    }

    #[inline]
    fn edge_nodes(&self, edge_idx: usize) -> (usize, usize) {
        let edge = &self.raw_edges()[edge_idx];
        (edge.source().index(), edge.target().index())
    }

    #[inline]
    fn edge_attributes(&self, edge_idx: usize) -> &E {
        &self.raw_edges()[edge_idx].weight
    }
}

/// Builds a petgraph `Graph` whose nodes are addressed by their label.
pub struct GraphBuilder<L: Ord + Clone + Debug, Ty: EdgeType = Directed> {
    // maps the node label to its index in graph.
    node_map: BTreeMap<L, NodeIndex>,
    graph: PetGraph<L, Attributes, Ty>,
}

impl<L: Ord + Clone + Debug, Ty: EdgeType> GraphBuilder<L, Ty> {
    pub fn new() -> GraphBuilder<L, Ty> {
        GraphBuilder {
            node_map: BTreeMap::new(),
            graph: PetGraph::default(),
        }
    }

    pub fn graph(self) -> PetGraph<L, Attributes, Ty> {
        self.graph
    }

    // returns node index. An existing label keeps its node.
    pub fn add_node(&mut self, label: L) -> usize {
        match self.node_map.entry(label) {
            Entry::Vacant(e) => {
                let idx = self.graph.add_node(e.key().clone());
                e.insert(idx);
                idx.index()
            }
            Entry::Occupied(e) => e.get().index(),
        }
    }

    pub fn add_edge_unweighted(&mut self, source: L, target: L) {
        self.add_edge(source, target, Attributes::new());
    }

    pub fn add_weighted_edge<V: Into<AttrValue>>(
        &mut self,
        source: L,
        target: L,
        attribute: &str,
        value: V,
    ) {
        self.add_edge(source, target, Attributes::new().with(attribute, value));
    }

    pub fn add_edge(&mut self, source: L, target: L, attributes: Attributes) {
        let source_index = self.add_node(source);
        let target_index = self.add_node(target);
        self.graph.add_edge(
            NodeIndex::new(source_index),
            NodeIndex::new(target_index),
            attributes,
        );
    }
}

impl<L: Ord + Clone + Debug, Ty: EdgeType> Default for GraphBuilder<L, Ty> {
    fn default() -> Self {
        GraphBuilder::new()
    }
}
