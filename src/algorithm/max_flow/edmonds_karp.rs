//! # Edmonds-Karp
//!
//! Augment along shortest paths in the residual graph until the sink can't be reached anymore.
//! Using shortest paths bounds the number of augmentations by `O(V E)`.
use log::{debug, trace};

use crate::algorithm::max_flow::MaxFlow;
use crate::algorithm::utilities::{breadth_first_search, path_arcs};
use crate::data::linear_algebra::matrix::SquareMatrix;
use crate::data::network::capacity_matrix::CapacityMatrix;
use crate::data::number_types::capacity::Capacity;
use crate::data::number_types::traits::FlowNumber;

/// Solver state of a single max flow computation.
///
/// The flow matrix is owned by the solver until the computation is complete; it is then moved into
/// the returned `MaxFlow`. Flow is antisymmetric: sending `x` from `i` to `j` is stored as `x` at
/// `(i, j)` and `-x` at `(j, i)`.
///
/// Augmentations can be performed one at a time with `augment`, which allows a caller to stop the
/// computation in between.
#[derive(Debug)]
pub struct EdmondsKarp<'a, F> {
    capacities: &'a CapacityMatrix<F>,
    flow: SquareMatrix<F>,

    /// Working space of the path search, reused for every augmentation.
    parent: Vec<usize>,
    visited: Vec<bool>,

    total: F,
    nr_augmentations: usize,
    done: bool,
}

impl<'a, F: FlowNumber> EdmondsKarp<'a, F> {
    /// Start with zero flow.
    pub fn new(capacities: &'a CapacityMatrix<F>) -> Self {
        let nr_nodes = capacities.nr_nodes();

        Self {
            capacities,
            flow: SquareMatrix::constant(F::zero(), nr_nodes),

            parent: vec![capacities.source(); nr_nodes],
            visited: vec![false; nr_nodes],

            total: F::zero(),
            nr_augmentations: 0,
            done: false,
        }
    }

    /// Send flow along one shortest augmenting path.
    ///
    /// # Return value
    ///
    /// The amount of flow that was added, or `None` if the flow is maximal.
    pub fn augment(&mut self) -> Option<F> {
        if self.done {
            return None;
        }

        let (source, sink) = (self.capacities.source(), self.capacities.sink());
        let capacities = self.capacities;
        let flow = &self.flow;
        let found = breadth_first_search(
            source,
            Some(sink),
            &mut self.visited,
            &mut self.parent,
            |i, j| capacities[(i, j)].admits_more_than(&flow[(i, j)]),
        );
        if !found {
            self.done = true;
            debug!(
                "Maximum flow {} after {} augmentations",
                self.total, self.nr_augmentations,
            );
            return None;
        }

        let path = path_arcs(&self.parent, source, sink);
        let bottleneck = path.iter()
            .map(|&(i, j)| capacities[(i, j)].residual(&self.flow[(i, j)]))
            .min()
            .unwrap_or(Capacity::Unbounded);
        let bottleneck = match bottleneck {
            Capacity::Finite(value) => value,
            Capacity::Unbounded => unreachable!(
                "a capacity matrix never has a path of unbounded arcs from source to sink",
            ),
        };
        debug_assert!(bottleneck.is_positive());

        for &(i, j) in &path {
            self.flow[(i, j)] += bottleneck.clone();
            self.flow[(j, i)] -= bottleneck.clone();
        }
        self.total += bottleneck.clone();
        self.nr_augmentations += 1;
        trace!(
            "Augmentation {}: {} units over {} arcs, total {}",
            self.nr_augmentations, bottleneck, path.len(), self.total,
        );

        Some(bottleneck)
    }

    /// Augment until the flow is maximal.
    pub fn solve(mut self) -> MaxFlow<F> {
        while self.augment().is_some() {}

        MaxFlow::new(self.total, self.flow, self.nr_augmentations)
    }

    /// Value of the current flow.
    pub fn total(&self) -> &F {
        &self.total
    }

    /// The current flow.
    pub fn flow(&self) -> &SquareMatrix<F> {
        &self.flow
    }

    /// Whether the current flow is known to be maximal.
    pub fn is_done(&self) -> bool {
        self.done
    }
}
