//! # Utilities
//!
//! Helper functions for algorithms.
use std::collections::VecDeque;

/// Breadth-first search from `source` over the arcs for which `traversable(i, j)` holds.
///
/// Neighbours are explored in increasing index order, so the result only depends on the input. The
/// search stops as soon as `target` is discovered; the path found to it has the least number of
/// arcs.
///
/// # Arguments
///
/// * `source`: Node to start from.
/// * `target`: Node to find, or `None` to discover everything reachable.
/// * `visited`: Working space with one value per node. It is reset before searching and holds the
/// discovered nodes afterwards.
/// * `parent`: Working space with one value per node. For each discovered node other than the
/// source, its predecessor on the search tree.
/// * `traversable`: Whether the search may move from the first to the second node.
///
/// # Return value
///
/// Whether `target` was discovered.
pub fn breadth_first_search<T>(
    source: usize,
    target: Option<usize>,
    visited: &mut [bool],
    parent: &mut [usize],
    mut traversable: T,
) -> bool
where
    T: FnMut(usize, usize) -> bool,
{
    let nr_nodes = visited.len();
    debug_assert_eq!(parent.len(), nr_nodes);
    debug_assert!(source < nr_nodes);
    debug_assert!(target.is_none_or(|target| target < nr_nodes && target != source));

    visited.fill(false);
    visited[source] = true;
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        for neighbour in 0..nr_nodes {
            if !visited[neighbour] && traversable(current, neighbour) {
                parent[neighbour] = current;
                visited[neighbour] = true;
                if Some(neighbour) == target {
                    return true;
                }
                queue.push_back(neighbour);
            }
        }
    }

    false
}

/// Walk the parent pointers from `target` back to `source`.
///
/// # Return value
///
/// The arcs of the path, in order from `source` to `target`.
pub fn path_arcs(parent: &[usize], source: usize, target: usize) -> Vec<(usize, usize)> {
    let mut arcs = Vec::new();
    let mut current = target;
    while current != source {
        let previous = parent[current];
        arcs.push((previous, current));
        current = previous;
    }
    arcs.reverse();

    arcs
}
