use tracing::{debug, trace};

use crate::{Cost, Criterion, Network, NodeIndex};

/// Result of a single-source search: the cheapest known cost from the origin to every node and the
/// previous node on the cheapest path.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree {
    origin: NodeIndex,
    costs: Vec<Cost>,
    parents: Vec<Option<NodeIndex>>,
}

impl SearchTree {
    pub const fn origin(&self) -> NodeIndex {
        self.origin
    }

    /// Gets the cost from the origin to the node, None if the node cannot be reached.
    pub fn cost(&self, node: NodeIndex) -> Option<Cost> {
        self.costs
            .get(node.index())
            .copied()
            .filter(|cost| !cost.is_infinite())
    }

    /// Gets the node preceding the given one on the cheapest path from the origin.
    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.parents.get(node.index()).copied().flatten()
    }

    /// Unpacks the cheapest path from the origin to the destination, None if the destination
    /// cannot be reached.
    pub fn path_to(&self, destination: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.cost(destination)?;

        let mut nodes = vec![destination];
        let mut next = destination;

        while let Some(previous) = self.parent(next) {
            next = previous;
            nodes.push(previous);
        }

        debug_assert_eq!(next, self.origin);
        nodes.reverse();
        Some(nodes)
    }
}

/// Computes the cheapest cost from the origin to all the nodes of the network, only considering
/// the edge weights of the given criterion.
///
/// At each step the unsettled node with the lowest cost is settled, ties are broken in favour of
/// the lowest index. The search ends when every reachable node is settled or, if a destination is
/// given, as soon as the destination is settled: costs and parents of settled nodes are final, so
/// both ways yield the same path to the destination.
pub fn shortest_path_tree(
    network: &Network,
    origin: NodeIndex,
    criterion: Criterion,
    destination: Option<NodeIndex>,
) -> SearchTree {
    let count = network.node_count();

    let mut costs = vec![Cost::INFINITY; count];
    let mut parents = vec![None; count];
    let mut settled = vec![false; count];

    if let Some(cost) = costs.get_mut(origin.index()) {
        *cost = Cost::ZERO;
    }

    for _ in 0..count {
        let next = costs
            .iter()
            .enumerate()
            .filter(|&(i, _)| !settled[i])
            .min_by_key(|&(i, cost)| (*cost, i));

        let u = match next {
            Some((i, cost)) if !cost.is_infinite() => NodeIndex::new(i),
            // the remaining nodes are unreachable
            _ => break,
        };

        settled[u.index()] = true;

        if Some(u) == destination {
            debug!("Destination {u} settled at {}", costs[u.index()]);
            break;
        }

        for (v, weight) in network.neighbors(u) {
            if settled[v.index()] {
                continue;
            }

            let candidate = costs[u.index()] + weight.get(criterion);
            if candidate < costs[v.index()] {
                trace!("Relax {v} via {u}: {} -> {candidate}", costs[v.index()]);
                costs[v.index()] = candidate;
                parents[v.index()] = Some(u);
            }
        }
    }

    SearchTree {
        origin,
        costs,
        parents,
    }
}
