pub mod dijkstra;

use tracing::debug;

use crate::routing::dijkstra::shortest_path_tree;
use crate::{Cost, Criterion, Network, NodeIndex, RouteError};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathConfig {
    /// Stop the search as soon as the destination is settled instead of settling every reachable
    /// node. The resulting route is the same either way.
    pub stop_at_destination: bool,
}

/// Cheapest path between two nodes of the network, including both of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub cost: Cost,
    pub nodes: Vec<NodeIndex>,
}

/// Cheapest route between two named locations, including both of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub cost: Cost,
    pub path: Vec<String>,
}

/// Computes the cheapest route between two named locations for the given criterion.
pub fn shortest_path(
    config: &ShortestPathConfig,
    network: &Network,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Result<Route, RouteError> {
    if network.is_empty() {
        return Err(RouteError::EmptyGraph);
    }

    let resolve = |name: &str| {
        network
            .resolve_index(name)
            .ok_or_else(|| RouteError::InvalidNode(name.to_owned()))
    };

    let Path { cost, nodes } =
        shortest_path_between(config, network, resolve(start)?, resolve(end)?, criterion)?;

    let path = nodes
        .into_iter()
        .filter_map(|node| network.resolve_name(node))
        .map(str::to_owned)
        .collect();

    Ok(Route { cost, path })
}

/// Computes the cheapest path between two nodes for the given criterion.
///
/// Only the weight selected by the criterion is considered: the path can differ from the one
/// computed for another criterion over the same network.
pub fn shortest_path_between(
    config: &ShortestPathConfig,
    network: &Network,
    start: NodeIndex,
    end: NodeIndex,
    criterion: Criterion,
) -> Result<Path, RouteError> {
    debug!("Computing shortest path {start} -> {end} by {criterion} with {config:?}");

    if network.is_empty() {
        return Err(RouteError::EmptyGraph);
    }

    let name = |node: NodeIndex| {
        network
            .resolve_name(node)
            .map(str::to_owned)
            .ok_or_else(|| RouteError::InvalidNode(node.to_string()))
    };

    let start_name = name(start)?;
    let end_name = name(end)?;

    if start == end {
        return Ok(Path {
            cost: Cost::ZERO,
            nodes: vec![start],
        });
    }

    let destination = config.stop_at_destination.then_some(end);
    let tree = shortest_path_tree(network, start, criterion, destination);

    match tree.cost(end).zip(tree.path_to(end)) {
        Some((cost, nodes)) => Ok(Path { cost, nodes }),
        None => {
            debug!("No route from {start_name:?} to {end_name:?} by {criterion}");
            Err(RouteError::Unreachable {
                start: start_name,
                end: end_name,
            })
        }
    }
}
