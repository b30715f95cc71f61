//! Plain text layout of a network: the node count, one node name per line, then the distance,
//! fare and time of every pair of nodes.

mod reader;
mod writer;

pub use reader::{network_from_str, read_network};
pub use writer::{network_to_string, write_network};

/// Weight written in place of all the three weights of a pair of unconnected nodes.
const ABSENT: i64 = 2_147_483_647;
