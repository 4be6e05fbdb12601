use fxhash::{FxBuildHasher, FxHashSet};
/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which keeps the whole search tree around after the search, so callers can walk predecessor
/// links for any node that was relaxed, not only the goal.
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::warn;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    sequence: usize,
}

impl<K: PartialOrd> Eq for SmallestCostHolder<K> {}

impl<K: PartialOrd> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, ties go to whichever entry was pushed first
        match other
            .estimated_cost
            .partial_cmp(&self.estimated_cost)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Everything an [astar] run learned: for every relaxed node, the node it was reached from and
/// the best known cost to reach it. The start node is stored without a predecessor.
#[derive(Clone, Debug)]
pub struct SearchTree<N, C> {
    parents: FxIndexMap<N, (usize, C)>,
    goal: Option<usize>,
}

impl<N, C> SearchTree<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Copy,
{
    /// A tree holding only `start`, for searches that are known to fail up front.
    pub(crate) fn rooted(start: N) -> Self {
        let mut parents = FxIndexMap::default();
        parents.insert(start, (usize::MAX, Zero::zero()));
        SearchTree {
            parents,
            goal: None,
        }
    }

    /// The node `node` was reached from, or [None] for the start and for nodes never relaxed.
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        let &(parent, _) = self.parents.get(node)?;
        self.parents.get_index(parent).map(|(p, _)| p)
    }

    /// Best known cost from the start to `node`.
    pub fn cost(&self, node: &N) -> Option<C> {
        self.parents.get(node).map(|&(_, c)| c)
    }

    /// Number of predecessor entries, which excludes the start.
    pub fn len(&self) -> usize {
        self.parents.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All `(node, predecessor)` pairs in the order nodes were first relaxed.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.parents
            .iter()
            .filter_map(|(node, &(parent, _))| {
                self.parents.get_index(parent).map(|(p, _)| (node, p))
            })
    }

    /// Whether the search stopped because it popped a success node.
    pub fn goal(&self) -> Option<&N> {
        self.goal
            .and_then(|ix| self.parents.get_index(ix))
            .map(|(node, _)| node)
    }

    /// The node chain from the start to `node` together with its cost.
    pub fn path_to(&self, node: &N) -> Option<(Vec<N>, C)> {
        let (index, _, &(_, cost)) = self.parents.get_full(node)?;
        Some((reverse_path(&self.parents, index), cost))
    }
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        parents.get_index(i).map(|(_, &(parent, _))| parent)
    })
    .map_while(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// A* search from `start` that runs until a node satisfying `success` is popped or the open set
/// runs dry. Nodes are expanded at most once.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchTree<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + PartialOrd + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut sequence = 0;
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
        sequence,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut goal = None;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                goal = Some(index);
                break;
            }
            // We may have inserted a node several time into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c || !closed.insert(index) {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if !closed.contains(&e.index()) && e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
                sequence,
            });
        }
    }
    if goal.is_none() {
        warn!("Open set exhausted before reaching a goal, is the reachable graph correct?");
    }
    SearchTree { parents, goal }
}
