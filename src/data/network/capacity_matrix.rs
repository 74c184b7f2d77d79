//! # Capacity matrix
//!
//! Validated, index based representation of the capacities of a network.
use std::iter::once;
use std::ops::Index;

use itertools::Itertools;
use log::debug;

use crate::algorithm::utilities::{breadth_first_search, path_arcs};
use crate::data::linear_algebra::matrix::SquareMatrix;
use crate::data::network::{Category, Network, NetworkError};
use crate::data::network::index::NodeIndex;
use crate::data::number_types::capacity::Capacity;
use crate::data::number_types::traits::FlowNumber;

/// Capacities between all pairs of nodes, together with the source and sink index.
///
/// Entry `(i, j)` is the capacity of the arc from node `i` to node `j`, and zero if there is no
/// such arc. A value of this type is always valid input for the max flow algorithms:
///
/// * no capacity is negative;
/// * source and sink are distinct, existing nodes;
/// * every path from the source to the sink contains at least one arc of finite capacity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapacityMatrix<F> {
    capacities: SquareMatrix<Capacity<F>>,

    source: usize,
    sink: usize,
}

impl<F: FlowNumber> CapacityMatrix<F> {
    /// Derive the capacity matrix of a network.
    ///
    /// # Arguments
    ///
    /// * `network`: Network description.
    /// * `index`: Indices of the nodes of that same network.
    ///
    /// # Errors
    ///
    /// When the network doesn't have exactly one source and one sink, when an arc references a
    /// node that doesn't exist, when a capacity is negative, or when the maximum flow would be
    /// unbounded.
    pub fn new(network: &Network<F>, index: &NodeIndex) -> Result<Self, NetworkError> {
        debug_assert_eq!(network.nr_nodes(), index.len());

        let source = unique_index(index, Category::Source)?;
        let sink = unique_index(index, Category::Sink)?;

        let mut capacities = SquareMatrix::constant(Capacity::zero(), index.len());
        for arc in network.arcs() {
            let lookup = |name: &str| index.index(name).ok_or_else(|| NetworkError::UnknownNode {
                from: arc.from.clone(),
                to: arc.to.clone(),
                node: name.to_string(),
            });
            let (i, j) = (lookup(&arc.from)?, lookup(&arc.to)?);
            capacities[(i, j)] = arc.capacity.clone();
        }

        Self::validated(capacities, source, sink, |i| index.name(i).to_string())
    }

    /// Use capacities given as rows of a matrix.
    ///
    /// Nodes are named by their index in error messages.
    ///
    /// # Arguments
    ///
    /// * `rows`: Capacity of the arc from the row node to the column node, one row per node.
    /// * `source`: Index of the source node.
    /// * `sink`: Index of the sink node.
    ///
    /// # Errors
    ///
    /// When the rows don't form a square matrix, when the source or sink index is out of range,
    /// when they are equal, when a capacity is negative or when the maximum flow would be
    /// unbounded.
    pub fn from_rows(
        rows: Vec<Vec<Capacity<F>>>,
        source: usize,
        sink: usize,
    ) -> Result<Self, NetworkError> {
        let nr_nodes = rows.len();
        if let Some((row, values)) = rows.iter().find_position(|values| values.len() != nr_nodes) {
            return Err(NetworkError::NotSquare { row, len: values.len(), nr_nodes });
        }
        if let Some(index) = [source, sink].into_iter().find(|&index| index >= nr_nodes) {
            return Err(NetworkError::IndexOutOfRange { index, nr_nodes });
        }

        Self::validated(SquareMatrix::from_rows(rows), source, sink, |i| i.to_string())
    }

    fn validated<N>(
        capacities: SquareMatrix<Capacity<F>>,
        source: usize,
        sink: usize,
        name: N,
    ) -> Result<Self, NetworkError>
    where
        N: Fn(usize) -> String,
    {
        if source == sink {
            return Err(NetworkError::SourceIsSink(name(source)));
        }

        for (i, row) in capacities.rows().enumerate() {
            if let Some((j, capacity)) = row.iter().find_position(|capacity| capacity.is_negative()) {
                return Err(NetworkError::NegativeCapacity {
                    from: name(i),
                    to: name(j),
                    capacity: capacity.to_string(),
                });
            }
        }

        let matrix = Self { capacities, source, sink };
        if let Some(arcs) = matrix.unbounded_path() {
            let path = once(source)
                .chain(arcs.into_iter().map(|(_, j)| j))
                .map(&name)
                .join(" -> ");
            return Err(NetworkError::UnboundedPath(path));
        }

        debug!(
            "Capacity matrix of {} nodes and {} arcs, source {}, sink {}",
            matrix.nr_nodes(), matrix.nr_arcs(), name(source), name(sink),
        );
        Ok(matrix)
    }

    /// A shortest path from source to sink over unbounded arcs only, if there is one.
    fn unbounded_path(&self) -> Option<Vec<(usize, usize)>> {
        let mut visited = vec![false; self.nr_nodes()];
        let mut parent = vec![self.source; self.nr_nodes()];

        let found = breadth_first_search(
            self.source,
            Some(self.sink),
            &mut visited,
            &mut parent,
            |i, j| self.capacities[(i, j)].is_unbounded(),
        );

        found.then(|| path_arcs(&parent, self.source, self.sink))
    }

    /// Index of the source node.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Index of the sink node.
    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Number of rows and columns.
    pub fn nr_nodes(&self) -> usize {
        self.capacities.len()
    }

    /// Number of arcs with a nonzero capacity.
    pub fn nr_arcs(&self) -> usize {
        self.capacities.rows().flatten().filter(|capacity| !capacity.is_zero()).count()
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &SquareMatrix<Capacity<F>> {
        &self.capacities
    }
}

impl<F> Index<(usize, usize)> for CapacityMatrix<F> {
    type Output = Capacity<F>;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.capacities[index]
    }
}

/// The single node of a category.
fn unique_index(index: &NodeIndex, category: Category) -> Result<usize, NetworkError> {
    let indices = index.indices_of(category).collect::<Vec<_>>();
    match indices[..] {
        [i] => Ok(i),
        [] => Err(NetworkError::MissingCategory(category)),
        _ => Err(NetworkError::DuplicateCategory { category, count: indices.len() }),
    }
}
