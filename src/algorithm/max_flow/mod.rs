//! # Maximum flow
//!
//! Computing how much can be sent from the source to the sink of a network, and where that flow
//! goes.
//!
//! The steps are:
//!
//! 1. Index the nodes and derive the `CapacityMatrix`, which validates the network.
//! 2. Solve with `EdmondsKarp`.
//! 3. Attribute the flow to terminal and store pairs with `decomposition::decompose`.
//!
//! `FlowAnalysis` performs all of these at once.
use log::info;

use crate::algorithm::max_flow::decomposition::{TerminalStoreFlow, decompose};
use crate::algorithm::max_flow::edmonds_karp::EdmondsKarp;
use crate::algorithm::max_flow::min_cut::MinCut;
use crate::data::linear_algebra::matrix::SquareMatrix;
use crate::data::network::{Network, NetworkError};
use crate::data::network::capacity_matrix::CapacityMatrix;
use crate::data::network::index::NodeIndex;
use crate::data::number_types::traits::FlowNumber;

pub mod decomposition;
pub mod edmonds_karp;
pub mod min_cut;

/// A maximum flow.
///
/// The flow matrix is antisymmetric and satisfies the capacities and flow conservation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaxFlow<F> {
    total: F,
    flow: SquareMatrix<F>,
    nr_augmentations: usize,
}

impl<F: FlowNumber> MaxFlow<F> {
    pub(crate) fn new(total: F, flow: SquareMatrix<F>, nr_augmentations: usize) -> Self {
        Self { total, flow, nr_augmentations }
    }

    /// Value of the flow, which is the amount leaving the source.
    pub fn total(&self) -> &F {
        &self.total
    }

    /// Flow between all pairs of nodes, by index.
    pub fn flow(&self) -> &SquareMatrix<F> {
        &self.flow
    }

    /// Number of augmenting paths used to compute this flow.
    pub fn nr_augmentations(&self) -> usize {
        self.nr_augmentations
    }

    /// Flow leaving node `i` minus the flow entering it.
    pub fn net_outflow(&self, i: usize) -> F {
        self.flow.row(i).iter().cloned().fold(F::zero(), |total, value| total + value)
    }
}

/// Everything computed for a network: its index, capacities, a maximum flow, a minimum cut and
/// the flow per terminal and store.
#[derive(Debug)]
pub struct FlowAnalysis<'a, F> {
    network: &'a Network<F>,
    index: NodeIndex,
    capacities: CapacityMatrix<F>,
    max_flow: MaxFlow<F>,
    min_cut: MinCut,
    terminal_store: TerminalStoreFlow<F>,
}

impl<'a, F: FlowNumber> FlowAnalysis<'a, F> {
    /// Validate the network and compute its maximum flow.
    ///
    /// # Errors
    ///
    /// When the network is not valid, see `CapacityMatrix::new`. Nothing is computed in that case.
    pub fn new(network: &'a Network<F>) -> Result<Self, NetworkError> {
        let index = NodeIndex::new(network);
        let capacities = CapacityMatrix::new(network, &index)?;

        let max_flow = EdmondsKarp::new(&capacities).solve();
        let min_cut = MinCut::new(&capacities, &max_flow);
        let terminal_store = decompose(network, &index, max_flow.flow());
        info!(
            "Maximum flow of {} units through {} nodes and {} arcs",
            max_flow.total(), network.nr_nodes(), network.nr_arcs(),
        );

        Ok(Self { network, index, capacities, max_flow, min_cut, terminal_store })
    }

    /// The analysed network.
    pub fn network(&self) -> &'a Network<F> {
        self.network
    }

    /// Node indices used in the matrices.
    pub fn index(&self) -> &NodeIndex {
        &self.index
    }

    #[allow(missing_docs)]
    pub fn capacities(&self) -> &CapacityMatrix<F> {
        &self.capacities
    }

    #[allow(missing_docs)]
    pub fn max_flow(&self) -> &MaxFlow<F> {
        &self.max_flow
    }

    #[allow(missing_docs)]
    pub fn min_cut(&self) -> &MinCut {
        &self.min_cut
    }

    /// Flow attributed to pairs of terminals and stores.
    pub fn terminal_store(&self) -> &TerminalStoreFlow<F> {
        &self.terminal_store
    }

    /// Flow over the arc from `from` to `to`, by node name.
    pub fn arc_flow(&self, from: &str, to: &str) -> Option<&F> {
        let i = self.index.index(from)?;
        let j = self.index.index(to)?;

        Some(&self.max_flow.flow()[(i, j)])
    }
}
