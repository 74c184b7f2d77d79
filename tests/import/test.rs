use relp_num::{RationalBig, RB};

use logiflow::algorithm::max_flow::FlowAnalysis;
use logiflow::data::network::{Category, NetworkError};
use logiflow::io::error::ImportError;
use logiflow::io::import;

use crate::import::get_test_file_path;

#[test]
fn logistics() {
    let network = import::<i64>(&get_test_file_path("logistics")).unwrap();
    let analysis = FlowAnalysis::new(&network).unwrap();

    assert_eq!(network.nr_nodes(), 22);
    assert_eq!(*analysis.max_flow().total(), 115);
}

#[test]
fn two_terminals_one_warehouse() {
    let network = import::<i64>(&get_test_file_path("shared_warehouse")).unwrap();
    let analysis = FlowAnalysis::new(&network).unwrap();

    assert_eq!(*analysis.max_flow().total(), 16);
    assert_eq!(analysis.arc_flow("X", "P"), Some(&6));
    assert_eq!(analysis.arc_flow("X", "Q"), Some(&10));
}

#[test]
fn fractional_capacities() {
    let network = import::<RationalBig>(&get_test_file_path("fractional")).unwrap();
    let analysis = FlowAnalysis::new(&network).unwrap();

    // Warehouse 1 passes 0.5 + 0.25, warehouse 2 is limited by its supply of 0.375
    assert_eq!(analysis.max_flow().total(), &RB!(9, 8));
    assert_eq!(analysis.terminal_store().get("Terminal", "Store 1"), Some(&RB!(1, 2)));
    assert_eq!(analysis.terminal_store().get("Terminal", "Store 2"), Some(&RB!(5, 8)));
}

#[test]
fn fractional_capacities_need_rationals() {
    let result = import::<i64>(&get_test_file_path("fractional"));

    assert!(matches!(result, Err(ImportError::Parse(_))));
}

#[test]
fn no_source() {
    let network = import::<i64>(&get_test_file_path("no_source")).unwrap();

    assert!(matches!(
        FlowAnalysis::new(&network),
        Err(NetworkError::MissingCategory(Category::Source)),
    ));
}

#[test]
fn unbounded() {
    let network = import::<i64>(&get_test_file_path("unbounded")).unwrap();

    match FlowAnalysis::new(&network) {
        Err(NetworkError::UnboundedPath(path)) => assert_eq!(path, "source -> Terminal -> Store -> sink"),
        other => panic!("expected an unbounded path, got {other:?}"),
    }
}
