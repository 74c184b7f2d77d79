//! # Flow decomposition
//!
//! Attributing the flow through the network to pairs of a terminal and a store.
//!
//! For a terminal and a store, every warehouse that is connected directly to both contributes the
//! minimum of the flow from the terminal into the warehouse and the flow from the warehouse to
//! the store. The pair receives the sum of these contributions.
//!
//! # Note
//!
//! This is an approximation. It is not checked that the units arriving at a warehouse from a
//! terminal are the same units that leave it towards a store, so when several terminals supply
//! the same warehouse, the flows attributed to pairs can add up to more than the maximum flow.
use std::collections::BTreeMap;

use itertools::iproduct;

use crate::data::linear_algebra::matrix::SquareMatrix;
use crate::data::network::{Category, Network};
use crate::data::network::index::NodeIndex;
use crate::data::number_types::traits::FlowNumber;

/// Flow per terminal and store, only for pairs that receive a positive amount.
///
/// Iteration is sorted by terminal name, then by store name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TerminalStoreFlow<F> {
    flows: BTreeMap<(String, String), F>,
}

impl<F: FlowNumber> TerminalStoreFlow<F> {
    /// Flow attributed to a pair, if it is positive.
    pub fn get(&self, terminal: &str, store: &str) -> Option<&F> {
        self.flows.get(&(terminal.to_string(), store.to_string()))
    }

    /// All pairs with their flow.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &F)> + '_ {
        self.flows.iter()
            .map(|((terminal, store), flow)| (terminal.as_str(), store.as_str(), flow))
    }

    /// Total flow attributed to each terminal.
    pub fn by_terminal(&self) -> BTreeMap<&str, F> {
        self.aggregate(|terminal, _| terminal)
    }

    /// Total flow attributed to each store.
    pub fn by_store(&self) -> BTreeMap<&str, F> {
        self.aggregate(|_, store| store)
    }

    fn aggregate<'a>(&'a self, key: impl Fn(&'a str, &'a str) -> &'a str) -> BTreeMap<&'a str, F> {
        let mut totals = BTreeMap::new();
        for (terminal, store, flow) in self.iter() {
            let total = totals.entry(key(terminal, store)).or_insert_with(F::zero);
            *total += flow.clone();
        }

        totals
    }

    /// Number of pairs with a positive flow.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Whether no pair receives any flow.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

/// Attribute flow to terminal and store pairs.
///
/// # Arguments
///
/// * `network`: Network that the flow was computed for.
/// * `index`: Index of the nodes of that network.
/// * `flow`: Flow matrix, indexed like `index`.
pub fn decompose<F: FlowNumber>(
    network: &Network<F>,
    index: &NodeIndex,
    flow: &SquareMatrix<F>,
) -> TerminalStoreFlow<F> {
    debug_assert_eq!(index.len(), flow.len());

    let id = |name: &str| {
        let i = index.index(name);
        debug_assert!(i.is_some(), "node \"{name}\" is not indexed");
        i
    };

    let mut flows = BTreeMap::new();
    for (terminal, store) in iproduct!(network.nodes_of(Category::Terminal), network.nodes_of(Category::Store)) {
        let (Some(t), Some(s)) = (id(&terminal.name), id(&store.name)) else { continue };

        let total = network.nodes_of(Category::Warehouse)
            .filter(|warehouse| {
                network.has_arc(&terminal.name, &warehouse.name)
                    && network.has_arc(&warehouse.name, &store.name)
            })
            .filter_map(|warehouse| id(&warehouse.name))
            .map(|w| flow[(t, w)].clone().min(flow[(w, s)].clone()))
            .fold(F::zero(), |total, contribution| total + contribution);

        if total.is_positive() {
            flows.insert((terminal.name.clone(), store.name.clone()), total);
        }
    }

    TerminalStoreFlow { flows }
}

#[cfg(test)]
mod test {
    use crate::algorithm::max_flow::decomposition::decompose;
    use crate::algorithm::max_flow::edmonds_karp::EdmondsKarp;
    use crate::data::network::capacity_matrix::CapacityMatrix;
    use crate::data::network::index::NodeIndex;
    use crate::tests::{shared_warehouse, single_path};

    #[test]
    fn single_path_pair() {
        let network = single_path();
        let index = NodeIndex::new(&network);
        let capacities = CapacityMatrix::new(&network, &index).unwrap();
        let max_flow = EdmondsKarp::new(&capacities).solve();

        let flows = decompose(&network, &index, max_flow.flow());
        assert_eq!(flows.len(), 1);
        assert_eq!(flows.get("T1", "S1"), Some(&15));
        assert_eq!(flows.iter().collect::<Vec<_>>(), vec![("T1", "S1", &15)]);
    }

    #[test]
    fn shared_warehouse_overcounts() {
        let network = shared_warehouse();
        let index = NodeIndex::new(&network);
        let capacities = CapacityMatrix::new(&network, &index).unwrap();
        let max_flow = EdmondsKarp::new(&capacities).solve();
        assert_eq!(*max_flow.total(), 16);

        let flows = decompose(&network, &index, max_flow.flow());
        assert_eq!(flows.get("A", "P"), Some(&6));
        assert_eq!(flows.get("A", "Q"), Some(&10));
        assert_eq!(flows.get("B", "P"), Some(&6));
        assert_eq!(flows.get("B", "Q"), Some(&6));
        // More than the 16 units that actually flow
        let attributed = flows.iter().map(|(_, _, &flow)| flow).sum::<i64>();
        assert_eq!(attributed, 28);

        assert_eq!(flows.by_terminal().get("A"), Some(&16));
        assert_eq!(flows.by_terminal().get("B"), Some(&12));
        assert_eq!(flows.by_store().get("P"), Some(&12));
        assert_eq!(flows.by_store().get("Q"), Some(&16));
    }

    #[test]
    fn idempotent() {
        let network = shared_warehouse();
        let index = NodeIndex::new(&network);
        let capacities = CapacityMatrix::new(&network, &index).unwrap();
        let max_flow = EdmondsKarp::new(&capacities).solve();

        assert_eq!(
            decompose(&network, &index, max_flow.flow()),
            decompose(&network, &index, max_flow.flow()),
        );
    }
}
