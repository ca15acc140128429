//! Generic A* over any node type with a hashable identity.
//!
//! Nodes live in an arena (an [IndexMap] keyed by node) for the duration of a
//! single call and are addressed by their arena index everywhere else: the
//! open set holds indices and every node records the index of its
//! predecessor. A node that is reached more cheaply is relaxed in place and
//! pushed onto the open set again; the older heap entry is discarded when it
//! is popped after the node has been closed.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

/// Search state of one node in the arena.
#[derive(Clone, Copy, Debug)]
struct PathNode<C> {
    parent: usize,
    g: C,
    h: C,
    closed: bool,
}

/// Entry of the open set.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry<C> {
    estimated_cost: C,
    heuristic: C,
    index: usize,
}

impl<C: PartialEq> Eq for OpenEntry<C> {}

impl<C: PartialEq> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.heuristic.eq(&other.heuristic)
    }
}

impl<C: Ord> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest estimated cost is the greatest
        // entry, and among equal estimates the one closest to the goal wins
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.heuristic.cmp(&self.heuristic),
            s => s,
        }
    }
}

fn reverse_path<N, C>(nodes: &FxIndexMap<N, PathNode<C>>, goal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(goal), |&i| {
        nodes
            .get_index(i)
            .map(|(_, node)| node.parent)
            .filter(|&p| p != NO_PARENT)
    })
    .filter_map(|i| nodes.get_index(i).map(|(n, _)| n.clone()))
    .collect();
    path.reverse();
    path
}

/// Finds a cheapest path from `start` to a node satisfying `success`.
///
/// `successors` yields the reachable neighbours of a node together with the
/// cost of moving there, `heuristic` must never overestimate the remaining
/// cost. Returns the path including both endpoints and its total cost, or
/// [None] if the open set runs dry.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut nodes: FxIndexMap<N, PathNode<C>> = FxIndexMap::default();
    let h = heuristic(start);
    nodes.insert(
        start.clone(),
        PathNode {
            parent: NO_PARENT,
            g: Zero::zero(),
            h,
            closed: false,
        },
    );
    to_see.push(OpenEntry {
        estimated_cost: h,
        heuristic: h,
        index: 0,
    });
    while let Some(OpenEntry { index, .. }) = to_see.pop() {
        let (successors, cost) = {
            let Some((node, state)) = nodes.get_index(index) else {
                continue;
            };
            // A node may have been pushed several times if a cheaper way to
            // reach it was found; only the first pop counts.
            if state.closed {
                continue;
            }
            if success(node) {
                let cost = state.g;
                return Some((reverse_path(&nodes, index), cost));
            }
            (successors(node), state.g)
        };
        if let Some((_, state)) = nodes.get_index_mut(index) {
            state.closed = true;
        }
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let (h, n) = match nodes.entry(successor) {
                Vacant(e) => {
                    let h = heuristic(e.key());
                    let n = e.index();
                    e.insert(PathNode {
                        parent: index,
                        g: new_cost,
                        h,
                        closed: false,
                    });
                    (h, n)
                }
                Occupied(mut e) => {
                    let n = e.index();
                    let node = e.get_mut();
                    if node.closed || new_cost >= node.g {
                        continue;
                    }
                    node.g = new_cost;
                    node.parent = index;
                    (node.h, n)
                }
            };
            to_see.push(OpenEntry {
                estimated_cost: new_cost + h,
                heuristic: h,
                index: n,
            });
        }
    }
    None
}
