//! # Distribution networks
//!
//! Goods enter a network at the source, pass terminals, warehouses and stores in that order and
//! leave it at the sink. A `Network` is the description of such a network as it is given by the
//! user. Before any computation, it is converted into a `NodeIndex` and a `CapacityMatrix`, which
//! is also where the description is validated.
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use enum_map::{Enum, EnumMap};
use thiserror::Error;

use crate::data::number_types::capacity::Capacity;
use crate::data::number_types::traits::FlowNumber;

pub mod capacity_matrix;
pub mod index;
pub mod logistics;

/// The role of a node in the network.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Source,
    Sink,
    Terminal,
    Warehouse,
    Store,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Source,
        Category::Sink,
        Category::Terminal,
        Category::Warehouse,
        Category::Store,
    ];
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Source => "source",
            Category::Sink => "sink",
            Category::Terminal => "terminal",
            Category::Warehouse => "warehouse",
            Category::Store => "store",
        })
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Category::ALL.into_iter()
            .find(|category| category.to_string() == text)
            .ok_or_else(|| format!("Unknown node category \"{text}\""))
    }
}

/// A named location in the network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    /// Unique within a network.
    pub name: String,
    #[allow(missing_docs)]
    pub category: Category,
}

/// A directed connection between two nodes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Arc<F> {
    /// Name of the node the flow leaves.
    pub from: String,
    /// Name of the node the flow arrives at.
    pub to: String,
    #[allow(missing_docs)]
    pub capacity: Capacity<F>,
}

/// Description of a distribution network.
///
/// Node names are unique, and there is at most one arc per ordered pair of nodes. Arcs may refer
/// to nodes that are not (yet) added; that is reported when the network is converted into a
/// `CapacityMatrix`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Network<F> {
    nodes: Vec<Node>,
    arcs: Vec<Arc<F>>,

    node_by_name: HashMap<String, usize>,
    /// Arc position by tail name, then head name.
    arc_by_endpoints: HashMap<String, HashMap<String, usize>>,
}

impl<F: FlowNumber> Network<F> {
    /// Create a network without any nodes or arcs.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            arcs: Vec::new(),

            node_by_name: HashMap::new(),
            arc_by_endpoints: HashMap::new(),
        }
    }

    /// Add a node.
    ///
    /// # Errors
    ///
    /// If a node with the same name already exists.
    pub fn add_node(&mut self, name: impl Into<String>, category: Category) -> Result<(), NetworkError> {
        let name = name.into();
        if self.node_by_name.contains_key(&name) {
            return Err(NetworkError::DuplicateNode(name));
        }

        self.node_by_name.insert(name.clone(), self.nodes.len());
        self.nodes.push(Node { name, category });

        Ok(())
    }

    /// Add an arc.
    ///
    /// # Errors
    ///
    /// If an arc between the same two nodes in the same direction already exists, or if the arc
    /// would connect a node with itself.
    pub fn add_arc(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        capacity: Capacity<F>,
    ) -> Result<(), NetworkError> {
        let (from, to) = (from.into(), to.into());
        if from == to {
            return Err(NetworkError::SelfLoop(from));
        }
        if self.has_arc(&from, &to) {
            return Err(NetworkError::DuplicateArc { from, to });
        }

        self.arc_by_endpoints.entry(from.clone())
            .or_default()
            .insert(to.clone(), self.arcs.len());
        self.arcs.push(Arc { from, to, capacity });

        Ok(())
    }

    /// All nodes, in the order in which they were added.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All arcs, in the order in which they were added.
    pub fn arcs(&self) -> &[Arc<F>] {
        &self.arcs
    }

    /// Find a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.node_by_name.get(name).map(|&i| &self.nodes[i])
    }

    /// Nodes of a single category, in the order in which they were added.
    pub fn nodes_of(&self, category: Category) -> impl Iterator<Item = &Node> + Clone + '_ {
        self.nodes.iter().filter(move |node| node.category == category)
    }

    /// Number of nodes per category.
    pub fn category_counts(&self) -> EnumMap<Category, usize> {
        let mut counts = EnumMap::default();
        for node in &self.nodes {
            counts[node.category] += 1;
        }

        counts
    }

    /// Find the arc from `from` to `to`.
    pub fn arc(&self, from: &str, to: &str) -> Option<&Arc<F>> {
        self.arc_by_endpoints.get(from)
            .and_then(|heads| heads.get(to))
            .map(|&i| &self.arcs[i])
    }

    /// Whether there is an arc from `from` to `to`.
    pub fn has_arc(&self, from: &str, to: &str) -> bool {
        self.arc(from, to).is_some()
    }

    /// Number of nodes.
    pub fn nr_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of arcs.
    pub fn nr_arcs(&self) -> usize {
        self.arcs.len()
    }
}

impl<F: FlowNumber> Default for Network<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A `NetworkError` is created when a network description can't be used for a flow computation.
///
/// The offending node or arc is named, so that the user can find it in the description.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum NetworkError {
    /// Two nodes share a name.
    #[error("node \"{0}\" is defined more than once")]
    DuplicateNode(String),
    /// Two arcs share both endpoints and their direction.
    #[error("arc \"{from}\" -> \"{to}\" is defined more than once")]
    DuplicateArc {
        #[allow(missing_docs)]
        from: String,
        #[allow(missing_docs)]
        to: String,
    },
    /// An arc starts and ends at the same node.
    #[error("arc from \"{0}\" to itself")]
    SelfLoop(String),
    /// An arc endpoint is not a node of the network.
    #[error("arc \"{from}\" -> \"{to}\" references unknown node \"{node}\"")]
    UnknownNode {
        #[allow(missing_docs)]
        from: String,
        #[allow(missing_docs)]
        to: String,
        /// The endpoint that could not be found.
        node: String,
    },
    /// Capacities are never negative.
    #[error("arc \"{from}\" -> \"{to}\" has negative capacity {capacity}")]
    NegativeCapacity {
        #[allow(missing_docs)]
        from: String,
        #[allow(missing_docs)]
        to: String,
        /// Textual representation of the capacity.
        capacity: String,
    },
    /// There is no node of a category of which exactly one is required.
    #[error("network has no {0} node")]
    MissingCategory(Category),
    /// There are several nodes of a category of which exactly one is required.
    #[error("network has {count} {category} nodes, but exactly one is required")]
    DuplicateCategory {
        #[allow(missing_docs)]
        category: Category,
        #[allow(missing_docs)]
        count: usize,
    },
    /// A node index is at least the number of nodes.
    #[error("node index {index} is out of range for a network with {nr_nodes} nodes")]
    IndexOutOfRange {
        #[allow(missing_docs)]
        index: usize,
        #[allow(missing_docs)]
        nr_nodes: usize,
    },
    /// Rows of a capacity matrix don't all have one value per row.
    #[error("row {row} of the capacity matrix has {len} values, but there are {nr_nodes} rows")]
    NotSquare {
        #[allow(missing_docs)]
        row: usize,
        /// Number of values in that row.
        len: usize,
        #[allow(missing_docs)]
        nr_nodes: usize,
    },
    /// The source and the sink are the same node.
    #[error("source and sink are both node \"{0}\"")]
    SourceIsSink(String),
    /// The source reaches the sink over arcs that all have unbounded capacity, so the maximum
    /// flow is unbounded as well.
    #[error("source reaches the sink through unbounded arcs only: {0}")]
    UnboundedPath(String),
}
