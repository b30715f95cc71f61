use std::io::BufRead;

use tracing::debug;

use crate::format::ABSENT;
use crate::{EdgeWeight, FormatError, Network, NodeIndex};

/// Reads a network from its plain text representation.
pub fn network_from_str(data: &str) -> Result<Network, FormatError> {
    read_network(data.as_bytes())
}

/// Reads a network from its plain text representation.
///
/// The node count comes first on its own line, followed by one node name per line, in index
/// order. Then the distance, fare and time of every pair `(i, j)` with `i < j`, row by row.
/// Pairs with any weight equal to 2147483647 are not connected.
pub fn read_network(reader: impl BufRead) -> Result<Network, FormatError> {
    let mut reader = NetworkTextReader::new(reader);

    let count = reader.read_node_count()?;
    let mut network = Network::with_capacity(count.min(MAX_PREALLOCATED_NODES));

    for i in 0..count {
        let name = reader.read_node_name(i)?;
        network.add_node(name);
    }

    for row in 0..count {
        for column in row + 1..count {
            if let Some(weight) = reader.read_weight(row, column)? {
                network.set_edge(NodeIndex::new(row), NodeIndex::new(column), weight)?;
            }
        }
    }

    debug!(
        "Read network of {} nodes and {} edges",
        network.node_count(),
        network.edge_count()
    );

    Ok(network)
}

/// Upper bound to the nodes allocated upfront, the node count of the file is not trusted.
const MAX_PREALLOCATED_NODES: usize = 1024;

#[derive(Debug)]
struct NetworkTextReader<R> {
    lines: std::io::Lines<R>,
    tokens: Vec<String>,
}

impl<R: BufRead> NetworkTextReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            tokens: vec![],
        }
    }

    fn read_node_count(&mut self) -> Result<usize, FormatError> {
        let line = self.next_line()?.ok_or(FormatError::MissingNodeCount)?;
        let line = line.trim();
        line.parse()
            .map_err(|_| FormatError::InvalidNodeCount(line.to_owned()))
    }

    fn read_node_name(&mut self, index: usize) -> Result<String, FormatError> {
        let line = self.next_line()?.ok_or(FormatError::MissingNodeName(index))?;
        Ok(line.trim_end_matches('\r').to_owned())
    }

    fn read_weight(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<Option<EdgeWeight>, FormatError> {
        let mut field = || -> Result<i64, FormatError> {
            let token = self
                .next_token()?
                .ok_or(FormatError::MissingWeight { row, column })?;
            token
                .parse()
                .map_err(|_| FormatError::InvalidWeight(token))
        };

        let [distance, fare, time] = [field()?, field()?, field()?];

        if [distance, fare, time].contains(&ABSENT) {
            return Ok(None);
        }

        let weight = |value: i64| {
            u32::try_from(value).map_err(|_| FormatError::InvalidWeight(value.to_string()))
        };

        Ok(Some(EdgeWeight::new(
            weight(distance)?,
            weight(fare)?,
            weight(time)?,
        )))
    }

    fn next_line(&mut self) -> Result<Option<String>, FormatError> {
        Ok(self.lines.next().transpose()?)
    }

    fn next_token(&mut self) -> Result<Option<String>, FormatError> {
        while self.tokens.is_empty() {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            self.tokens = line.split_whitespace().rev().map(str::to_owned).collect();
        }
        Ok(self.tokens.pop())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn read_network_001() {
        let data = "3\nP\nQ\nR\n10 5 2\n15 1 10\n10 5 2\n";
        let network = network_from_str(data).unwrap();

        let [p, q, r] = [0, 1, 2].map(NodeIndex::new);
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.resolve_name(p), Some("P"));
        assert_eq!(network.resolve_name(q), Some("Q"));
        assert_eq!(network.resolve_name(r), Some("R"));

        assert_eq!(network.edge(p, q), Some(EdgeWeight::new(10, 5, 2)));
        assert_eq!(network.edge(p, r), Some(EdgeWeight::new(15, 1, 10)));
        assert_eq!(network.edge(r, q), Some(EdgeWeight::new(10, 5, 2)));
    }

    #[test]
    fn read_network_absent_edges_002() {
        let data = "3\nNew Town\nOld Town\nHarbour\n\
            4 4 4\n\
            2147483647 2147483647 2147483647\n\
            2147483647 2147483647 2147483647\n";
        let network = network_from_str(data).unwrap();

        assert_eq!(network.resolve_index("New Town"), Some(NodeIndex::new(0)));
        assert_eq!(network.resolve_index("Harbour"), Some(NodeIndex::new(2)));
        assert_eq!(network.edge_count(), 1);
        assert_eq!(network.edge(NodeIndex::new(1), NodeIndex::new(2)), None);
    }

    #[test]
    fn read_network_weights_on_any_line_003() {
        let data = "3\nA\nB\nC\n1 2\n3 4 5 6\n7 8 9\n";
        let network = network_from_str(data).unwrap();

        let [a, b, c] = [0, 1, 2].map(NodeIndex::new);
        assert_eq!(network.edge(a, b), Some(EdgeWeight::new(1, 2, 3)));
        assert_eq!(network.edge(a, c), Some(EdgeWeight::new(4, 5, 6)));
        assert_eq!(network.edge(b, c), Some(EdgeWeight::new(7, 8, 9)));
    }

    #[test]
    fn read_network_empty_004() {
        let network = network_from_str("0\n").unwrap();
        assert!(network.is_empty());
    }

    #[test]
    fn read_network_errors_005() {
        assert_eq!(network_from_str(""), Err(FormatError::MissingNodeCount));
        assert_eq!(
            network_from_str("three\n"),
            Err(FormatError::InvalidNodeCount("three".into()))
        );
        assert_eq!(
            network_from_str("2\nA\n"),
            Err(FormatError::MissingNodeName(1))
        );
        assert_eq!(
            network_from_str("5000000000\nA\n"),
            Err(FormatError::MissingNodeName(1))
        );
        assert_eq!(
            network_from_str("3\nA\nB\nC\n1 1 1\n1 1\n"),
            Err(FormatError::MissingWeight { row: 0, column: 2 })
        );
        assert_eq!(
            network_from_str("2\nA\nB\n1 x 1\n"),
            Err(FormatError::InvalidWeight("x".into()))
        );
        assert_eq!(
            network_from_str("2\nA\nB\n1 -3 1\n"),
            Err(FormatError::InvalidWeight("-3".into()))
        );
    }
}
