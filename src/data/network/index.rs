//! # Node indices
//!
//! Flow computations work on matrices, so every node gets a dense index.
use std::collections::HashMap;

use crate::data::network::{Category, Network, Node};
use crate::data::number_types::traits::FlowNumber;

/// Bijection between node names and the indices `0..nr_nodes`.
///
/// Indices follow the order in which nodes were added to the network. The mapping is built once
/// and not changed afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeIndex {
    nodes: Vec<Node>,
    index_by_name: HashMap<String, usize>,
}

impl NodeIndex {
    /// Index the nodes of a network.
    pub fn new<F: FlowNumber>(network: &Network<F>) -> Self {
        let nodes = network.nodes().to_vec();
        let index_by_name = nodes.iter()
            .enumerate()
            .map(|(i, node)| (node.name.clone(), i))
            .collect();

        Self { nodes, index_by_name }
    }

    /// Index of the node called `name`, if there is one.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

    /// Name of the node at index `i`.
    pub fn name(&self, i: usize) -> &str {
        debug_assert!(i < self.len());

        &self.nodes[i].name
    }

    /// Category of the node at index `i`.
    pub fn category(&self, i: usize) -> Category {
        debug_assert!(i < self.len());

        self.nodes[i].category
    }

    /// Indices of all nodes of a category, in increasing order.
    pub fn indices_of(&self, category: Category) -> impl Iterator<Item = usize> + '_ {
        self.nodes.iter()
            .enumerate()
            .filter(move |(_, node)| node.category == category)
            .map(|(i, _)| i)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes are indexed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::data::network::{Category, Network};
    use crate::data::network::index::NodeIndex;

    #[test]
    fn bijection() {
        let mut network = Network::<i64>::new();
        network.add_node("source", Category::Source).unwrap();
        network.add_node("Store 1", Category::Store).unwrap();
        network.add_node("sink", Category::Sink).unwrap();
        network.add_node("Store 2", Category::Store).unwrap();

        let index = NodeIndex::new(&network);
        assert_eq!(index.len(), 4);
        for i in 0..index.len() {
            assert_eq!(index.index(index.name(i)), Some(i));
        }
        assert_eq!(index.index("Store 2"), Some(3));
        assert_eq!(index.index("Store 3"), None);
        assert_eq!(index.category(2), Category::Sink);
        assert_eq!(index.indices_of(Category::Store).collect::<Vec<_>>(), vec![1, 3]);
    }
}
