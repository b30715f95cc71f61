use rustc_hash::FxHashMap;
use tracing::warn;

use crate::{EdgeWeight, NetworkError, NodeIndex};

/// Undirected network of named locations.
///
/// Every pair of nodes stores at most one [`EdgeWeight`], kept in a flat square matrix addressed
/// by `row * node_count + column`. Writes always update both `(a, b)` and `(b, a)`, and the
/// diagonal and all unconnected pairs hold no weight.
///
/// Nodes are only ever appended: indices are stable and never reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    indices: FxHashMap<String, NodeIndex>,
    names: Vec<String>,
    weights: Vec<Option<EdgeWeight>>,
}

impl Network {
    pub fn with_capacity(capacity: usize) -> Self {
        let cells = capacity.checked_mul(capacity).unwrap_or_default();
        Self {
            indices: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(cells),
        }
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Appends a new node and returns its index.
    ///
    /// The weight matrix is reallocated to make room for the new row and column, all of them
    /// unconnected. Inserting a name twice remaps the name to the newest index.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeIndex {
        let name = name.into();
        let count = self.node_count();
        let node = NodeIndex::new(count);

        let size = count + 1;
        let mut weights = vec![None; size * size];
        for (row, cells) in self.weights.chunks_exact(count.max(1)).enumerate() {
            weights[row * size..row * size + count].copy_from_slice(cells);
        }
        self.weights = weights;

        if let Some(previous) = self.indices.insert(name.clone(), node) {
            warn!("Location {name:?} already exists at {previous}, remapped to {node}");
        }
        self.names.push(name);

        node
    }

    /// Sets the weights of the undirected edge between two named nodes, overwriting any previous
    /// weights for the same pair.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: EdgeWeight,
    ) -> Result<(), NetworkError> {
        let a = self.node(from)?;
        let b = self.node(to)?;
        self.set_edge(a, b, weight)
    }

    /// Sets the weights of the undirected edge between two nodes, overwriting any previous
    /// weights for the same pair.
    pub fn set_edge(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        weight: EdgeWeight,
    ) -> Result<(), NetworkError> {
        let ab = self.cell(a, b)?;
        let ba = self.cell(b, a)?;
        self.weights[ab] = Some(weight);
        self.weights[ba] = Some(weight);
        Ok(())
    }

    /// Gets the weights of the edge between two nodes, None if they are not directly connected.
    pub fn edge(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeWeight> {
        self.cell(a, b).ok().and_then(|cell| self.weights[cell])
    }

    /// Gets an iterator over the nodes directly connected to the given node, in index order.
    /// Returns an empty iterator if the node doesn't belong to the network.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, EdgeWeight)> {
        let count = self.node_count();
        let row = node
            .index()
            .checked_mul(count)
            .and_then(|start| Some(start..start.checked_add(count)?))
            .and_then(|cells| self.weights.get(cells))
            .unwrap_or(&[]);

        row.iter()
            .enumerate()
            .filter_map(|(column, weight)| weight.map(|w| (NodeIndex::new(column), w)))
    }

    /// Number of connected pairs, self edges excluded.
    pub fn edge_count(&self) -> usize {
        self.nodes()
            .map(|(node, _)| {
                self.neighbors(node)
                    .filter(|&(neighbor, _)| neighbor > node)
                    .count()
            })
            .sum()
    }

    /// Gets an iterator over all the nodes and their names, in index order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeIndex::new(i), name.as_str()))
    }

    pub fn resolve_index(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    pub fn resolve_name(&self, node: NodeIndex) -> Option<&str> {
        self.names.get(node.index()).map(String::as_str)
    }

    fn node(&self, name: &str) -> Result<NodeIndex, NetworkError> {
        self.resolve_index(name)
            .ok_or_else(|| NetworkError::UnknownNode(name.to_owned()))
    }

    fn cell(&self, row: NodeIndex, column: NodeIndex) -> Result<usize, NetworkError> {
        let count = self.node_count();
        if row.index() >= count {
            return Err(NetworkError::IndexOutOfRange(row));
        }
        if column.index() >= count {
            return Err(NetworkError::IndexOutOfRange(column));
        }
        Ok(row.index() * count + column.index())
    }
}
