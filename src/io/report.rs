//! # Report
//!
//! Human readable summary of a flow analysis: how much flow reaches the stores, where it comes
//! from and which arcs limit it.
use std::fmt;
use std::fmt::Write;

use itertools::Itertools;

use crate::algorithm::max_flow::FlowAnalysis;
use crate::data::number_types::traits::FlowNumber;

/// Number of arcs listed as having the lowest capacity.
const NR_LOWEST_CAPACITY_ARCS: usize = 5;

/// Write the report for an analysis.
///
/// # Errors
///
/// Only when the writer fails.
pub fn write_report<F, W>(out: &mut W, analysis: &FlowAnalysis<'_, F>) -> fmt::Result
where
    F: FlowNumber,
    W: Write,
{
    let network = analysis.network();
    let terminal_store = analysis.terminal_store();

    writeln!(out, "Flow analysis of the distribution network")?;
    writeln!(out, "=========================================")?;
    writeln!(out)?;
    writeln!(out, "Maximum flow: {} units", analysis.max_flow().total())?;
    writeln!(out)?;

    writeln!(out, "Flow from terminals to stores:")?;
    writeln!(out, "------------------------------")?;
    writeln!(out, "Terminal\tStore\tFlow")?;
    for (terminal, store, flow) in terminal_store.iter() {
        writeln!(out, "{terminal}\t{store}\t{flow}")?;
    }
    writeln!(out)?;

    writeln!(out, "Terminals by delivered flow:")?;
    let by_terminal = terminal_store.by_terminal();
    for (terminal, flow) in by_terminal.iter().sorted_by(|(_, a), (_, b)| b.cmp(a)) {
        writeln!(out, "  {terminal}: {flow}")?;
    }
    writeln!(out)?;

    writeln!(out, "Arcs with the lowest capacity:")?;
    let lowest = network.arcs().iter()
        .filter_map(|arc| arc.capacity.finite().map(|capacity| (arc, capacity)))
        .sorted_by(|(_, a), (_, b)| a.cmp(b))
        .take(NR_LOWEST_CAPACITY_ARCS);
    for (arc, capacity) in lowest {
        writeln!(out, "  {} -> {}: {capacity}", arc.from, arc.to)?;
    }
    writeln!(out)?;

    writeln!(out, "Stores by received flow:")?;
    let by_store = terminal_store.by_store();
    for (store, flow) in by_store.iter().sorted_by(|(_, a), (_, b)| a.cmp(b)) {
        writeln!(out, "  {store}: {flow}")?;
    }
    writeln!(out)?;

    writeln!(out, "Saturated arcs:")?;
    let saturated = network.arcs().iter()
        .filter(|arc| {
            analysis.arc_flow(&arc.from, &arc.to)
                .is_some_and(|flow| arc.capacity.is_saturated_by(flow))
        })
        .collect::<Vec<_>>();
    if saturated.is_empty() {
        writeln!(out, "  none")?;
    }
    for arc in saturated {
        writeln!(out, "  {} -> {}: {} (fully used)", arc.from, arc.to, arc.capacity)?;
    }

    Ok(())
}

/// The report as a `String`.
pub fn report<F: FlowNumber>(analysis: &FlowAnalysis<'_, F>) -> String {
    let mut out = String::new();
    // Writing to a `String` doesn't fail
    let _ = write_report(&mut out, analysis);

    out
}

#[cfg(test)]
mod test {
    use crate::algorithm::max_flow::FlowAnalysis;
    use crate::io::report::report;
    use crate::tests::{isolated_source, shared_warehouse};

    #[test]
    fn shared_warehouse_report() {
        let network = shared_warehouse();
        let analysis = FlowAnalysis::new(&network).unwrap();

        assert_eq!(report(&analysis), "\
Flow analysis of the distribution network
=========================================

Maximum flow: 16 units

Flow from terminals to stores:
------------------------------
Terminal\tStore\tFlow
A\tP\t6
A\tQ\t10
B\tP\t6
B\tQ\t6

Terminals by delivered flow:
  A: 16
  B: 12

Arcs with the lowest capacity:
  X -> P: 6
  A -> X: 10
  B -> X: 10
  X -> Q: 10

Stores by received flow:
  P: 12
  Q: 16

Saturated arcs:
  A -> X: 10 (fully used)
  X -> P: 6 (fully used)
  X -> Q: 10 (fully used)
");
    }

    #[test]
    fn empty_flow() {
        let network = isolated_source();
        let analysis = FlowAnalysis::new(&network).unwrap();
        let text = report(&analysis);

        assert!(text.contains("Maximum flow: 0 units"));
        assert!(text.ends_with("Saturated arcs:\n  none\n"));
    }
}
