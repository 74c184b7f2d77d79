//! # Fixtures for tests that require a look inside the crate.
//!
//! Networks are named after their shape; matrices are written with the node the arc leaves on the
//! left and the node it arrives at on top.
use crate::algorithm::max_flow::MaxFlow;
use crate::data::network::{Category, Network};
use crate::data::network::capacity_matrix::CapacityMatrix;
use crate::data::number_types::capacity::Capacity;
use crate::data::number_types::capacity::Capacity::{Finite, Unbounded};
use crate::data::number_types::traits::FlowNumber;


/// Finite capacities from integer rows, zero meaning "no arc".
pub fn capacities_from_test_data(rows: &[&[i64]], source: usize, sink: usize) -> CapacityMatrix<i64> {
    let rows = rows.iter()
        .map(|row| row.iter().map(|&value| Finite(value)).collect())
        .collect();

    CapacityMatrix::from_rows(rows, source, sink).unwrap()
}

/// Example from Introduction to Algorithms by Cormen et al., with a pair of antiparallel arcs.
pub fn clrs() -> CapacityMatrix<i64> {
    capacities_from_test_data(&[
        //   s  v1  v2  v3  v4  t
        &[0, 16, 13, 0, 0, 0], // s
        &[0, 0, 10, 12, 0, 0], // v1
        &[0, 4, 0, 0, 14, 0], // v2
        &[0, 0, 9, 0, 0, 20], // v3
        &[0, 0, 0, 7, 0, 4], // v4
        &[0, 0, 0, 0, 0, 0], // t
    ], 0, 5)
}

fn with_nodes(nodes: &[(&str, Category)]) -> Network<i64> {
    let mut network = Network::new();
    for &(name, category) in nodes {
        network.add_node(name, category).unwrap();
    }
    network
}

fn with_arcs(mut network: Network<i64>, arcs: &[(&str, &str, Capacity<i64>)]) -> Network<i64> {
    for (from, to, capacity) in arcs {
        network.add_arc(*from, *to, capacity.clone()).unwrap();
    }
    network
}

/// source -> T1 -> W1 -> S1 -> sink, with finite capacities 25 and 15 in the middle.
pub fn single_path() -> Network<i64> {
    let network = with_nodes(&[
        ("source", Category::Source),
        ("T1", Category::Terminal),
        ("W1", Category::Warehouse),
        ("S1", Category::Store),
        ("sink", Category::Sink),
    ]);
    with_arcs(network, &[
        ("source", "T1", Unbounded),
        ("T1", "W1", Finite(25)),
        ("W1", "S1", Finite(15)),
        ("S1", "sink", Unbounded),
    ])
}

/// Terminals A and B both supply warehouse X, which supplies stores P and Q.
pub fn shared_warehouse() -> Network<i64> {
    let network = with_nodes(&[
        ("source", Category::Source),
        ("sink", Category::Sink),
        ("A", Category::Terminal),
        ("B", Category::Terminal),
        ("X", Category::Warehouse),
        ("P", Category::Store),
        ("Q", Category::Store),
    ]);
    with_arcs(network, &[
        ("source", "A", Unbounded),
        ("source", "B", Unbounded),
        ("A", "X", Finite(10)),
        ("B", "X", Finite(10)),
        ("X", "P", Finite(6)),
        ("X", "Q", Finite(10)),
        ("P", "sink", Unbounded),
        ("Q", "sink", Unbounded),
    ])
}

/// Stores are connected to the sink, but nothing leaves the source.
pub fn isolated_source() -> Network<i64> {
    let network = with_nodes(&[
        ("source", Category::Source),
        ("sink", Category::Sink),
        ("T1", Category::Terminal),
        ("W1", Category::Warehouse),
        ("S1", Category::Store),
    ]);
    with_arcs(network, &[
        ("T1", "W1", Finite(5)),
        ("W1", "S1", Finite(5)),
        ("S1", "sink", Unbounded),
    ])
}

/// Check antisymmetry, capacities and flow conservation, and that the total leaves the source.
pub fn assert_valid_flow<F: FlowNumber>(capacities: &CapacityMatrix<F>, max_flow: &MaxFlow<F>) {
    let flow = max_flow.flow();
    let nr_nodes = capacities.nr_nodes();

    for i in 0..nr_nodes {
        for j in 0..nr_nodes {
            assert_eq!(flow[(i, j)], -flow[(j, i)].clone(), "antisymmetry of ({i}, {j})");
            if let Finite(capacity) = &capacities[(i, j)] {
                assert!(&flow[(i, j)] <= capacity, "capacity of ({i}, {j})");
            }
            if capacities[(j, i)].is_zero() {
                assert!(!flow[(i, j)].is_negative(), "no reverse arc for ({i}, {j})");
            }
        }
    }

    for i in 0..nr_nodes {
        if i != capacities.source() && i != capacities.sink() {
            assert!(max_flow.net_outflow(i).is_zero(), "conservation at {i}");
        }
    }
    assert_eq!(&max_flow.net_outflow(capacities.source()), max_flow.total());
    assert_eq!(max_flow.net_outflow(capacities.sink()), -max_flow.total().clone());
}
