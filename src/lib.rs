#![doc = include_str!("../README.md")]

mod error;
mod format;
mod model;
mod network;
mod routing;

pub use error::{FormatError, NetworkError, RouteError};
pub use format::{network_from_str, network_to_string, read_network, write_network};
pub use model::{Cost, Criterion, EdgeWeight, NodeIndex};
pub use network::Network;
pub use routing::dijkstra::{SearchTree, shortest_path_tree};
pub use routing::{Path, Route, ShortestPathConfig, shortest_path, shortest_path_between};
