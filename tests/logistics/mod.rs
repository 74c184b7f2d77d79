//! # Built-in logistics network
//!
//! Solved over exact rationals, as the binary does.
use relp_num::{RationalBig, RB};

use logiflow::algorithm::max_flow::FlowAnalysis;
use logiflow::data::network::logistics;
use logiflow::data::number_types::capacity::Capacity;
use logiflow::io::report::report;

#[test]
fn maximum_flow() {
    let network = logistics::network::<RationalBig>().unwrap();
    let analysis = FlowAnalysis::new(&network).unwrap();

    assert_eq!(analysis.max_flow().total(), &RB!(115));
    assert_eq!(
        analysis.min_cut().capacity(analysis.capacities()),
        Capacity::Finite(RB!(115)),
    );
}

#[test]
fn every_terminal_arc_is_saturated() {
    let network = logistics::network::<RationalBig>().unwrap();
    let analysis = FlowAnalysis::new(&network).unwrap();

    let text = report(&analysis);
    for (terminal, warehouse) in [(1, 1), (1, 2), (1, 3), (2, 2), (2, 3), (2, 4)] {
        let (from, to) = (format!("Terminal {terminal}"), format!("Warehouse {warehouse}"));
        let capacity = &network.arc(&from, &to).unwrap().capacity;
        assert!(analysis.arc_flow(&from, &to).is_some_and(|flow| capacity.is_saturated_by(flow)));

        let line = format!("  {from} -> {to}: {capacity} (fully used)");
        assert!(text.contains(&line), "missing \"{line}\"");
    }
}
