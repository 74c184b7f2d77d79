//! # Logistics network
//!
//! A fixed network of two terminals, four warehouses and fourteen stores. It is used when no
//! network file is provided.
use crate::data::network::{Category, Network, NetworkError};
use crate::data::number_types::capacity::Capacity;
use crate::data::number_types::traits::FlowNumber;

/// Capacities of the arcs from terminals to warehouses.
const TERMINAL_TO_WAREHOUSE: [(u8, u8, i32); 6] = [
    (1, 1, 25),
    (1, 2, 20),
    (1, 3, 15),
    (2, 3, 15),
    (2, 4, 30),
    (2, 2, 10),
];

/// Capacities of the arcs from warehouses to stores.
const WAREHOUSE_TO_STORE: [(u8, u8, i32); 14] = [
    (1, 1, 15),
    (1, 2, 10),
    (1, 3, 20),
    (2, 4, 15),
    (2, 5, 10),
    (2, 6, 25),
    (3, 7, 20),
    (3, 8, 15),
    (3, 9, 10),
    (4, 10, 20),
    (4, 11, 10),
    (4, 12, 15),
    (4, 13, 5),
    (4, 14, 10),
];

const NR_TERMINALS: u8 = 2;
const NR_WAREHOUSES: u8 = 4;
const NR_STORES: u8 = 14;

/// Build the logistics network.
///
/// The source supplies both terminals and every store delivers to the sink, all over arcs of
/// unbounded capacity.
///
/// # Errors
///
/// Never for the fixed data of this module; the result type is that of the network construction.
pub fn network<F: FlowNumber + From<i32>>() -> Result<Network<F>, NetworkError> {
    let terminal = |i| format!("Terminal {i}");
    let warehouse = |i| format!("Warehouse {i}");
    let store = |i| format!("Store {i}");

    let mut network = Network::new();
    network.add_node("source", Category::Source)?;
    network.add_node("sink", Category::Sink)?;
    for i in 1..=NR_TERMINALS {
        network.add_node(terminal(i), Category::Terminal)?;
    }
    for i in 1..=NR_WAREHOUSES {
        network.add_node(warehouse(i), Category::Warehouse)?;
    }
    for i in 1..=NR_STORES {
        network.add_node(store(i), Category::Store)?;
    }

    for i in 1..=NR_TERMINALS {
        network.add_arc("source", terminal(i), Capacity::Unbounded)?;
    }
    for i in 1..=NR_STORES {
        network.add_arc(store(i), "sink", Capacity::Unbounded)?;
    }
    for (t, w, capacity) in TERMINAL_TO_WAREHOUSE {
        network.add_arc(terminal(t), warehouse(w), Capacity::Finite(F::from(capacity)))?;
    }
    for (w, s, capacity) in WAREHOUSE_TO_STORE {
        network.add_arc(warehouse(w), store(s), Capacity::Finite(F::from(capacity)))?;
    }

    Ok(network)
}

#[cfg(test)]
mod test {
    use crate::data::network::Category;
    use crate::data::network::logistics::network;
    use crate::data::number_types::capacity::Capacity::Finite;

    #[test]
    fn shape() {
        let network = network::<i64>().unwrap();
        let counts = network.category_counts();

        assert_eq!(counts[Category::Source], 1);
        assert_eq!(counts[Category::Sink], 1);
        assert_eq!(counts[Category::Terminal], 2);
        assert_eq!(counts[Category::Warehouse], 4);
        assert_eq!(counts[Category::Store], 14);
        assert_eq!(network.nr_arcs(), 2 + 14 + 6 + 14);
        assert_eq!(
            network.arc("Terminal 2", "Warehouse 4").map(|arc| &arc.capacity),
            Some(&Finite(30)),
        );
    }
}
