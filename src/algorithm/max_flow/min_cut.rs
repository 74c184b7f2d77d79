//! # Minimum cut
//!
//! When no augmenting path is left, the nodes that the source still reaches in the residual graph
//! form the source side of a minimum cut. Every arc leaving that side is saturated, so the
//! capacity of the cut equals the value of the flow.
use crate::algorithm::max_flow::MaxFlow;
use crate::algorithm::utilities::breadth_first_search;
use crate::data::network::capacity_matrix::CapacityMatrix;
use crate::data::number_types::capacity::Capacity;
use crate::data::number_types::traits::FlowNumber;

/// Partition of the nodes into a side containing the source and a side containing the sink.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinCut {
    source_side: Vec<bool>,
}

impl MinCut {
    /// Derive the cut from a maximum flow.
    pub fn new<F: FlowNumber>(capacities: &CapacityMatrix<F>, max_flow: &MaxFlow<F>) -> Self {
        let nr_nodes = capacities.nr_nodes();
        let flow = max_flow.flow();
        let mut source_side = vec![false; nr_nodes];
        let mut parent = vec![capacities.source(); nr_nodes];

        breadth_first_search(
            capacities.source(),
            None,
            &mut source_side,
            &mut parent,
            |i, j| capacities[(i, j)].admits_more_than(&flow[(i, j)]),
        );
        debug_assert!(!source_side[capacities.sink()], "flow is not maximal");

        Self { source_side }
    }

    /// Whether node `i` is on the source side.
    pub fn is_source_side(&self, i: usize) -> bool {
        self.source_side[i]
    }

    /// Indices of the nodes on the source side, in increasing order.
    pub fn source_side(&self) -> impl Iterator<Item = usize> + '_ {
        self.source_side.iter()
            .enumerate()
            .filter(|&(_, &is_source_side)| is_source_side)
            .map(|(i, _)| i)
    }

    /// Arcs from the source side to the sink side.
    pub fn arcs<'b, F: FlowNumber>(
        &'b self,
        capacities: &'b CapacityMatrix<F>,
    ) -> impl Iterator<Item = (usize, usize)> + 'b {
        self.source_side()
            .flat_map(move |i| (0..self.source_side.len()).map(move |j| (i, j)))
            .filter(move |&(i, j)| !self.source_side[j] && !capacities[(i, j)].is_zero())
    }

    /// Total capacity of the arcs crossing the cut.
    pub fn capacity<F: FlowNumber>(&self, capacities: &CapacityMatrix<F>) -> Capacity<F> {
        self.arcs(capacities)
            .map(|(i, j)| capacities[(i, j)].clone())
            .fold(Capacity::zero(), |total, capacity| total + capacity)
    }
}
