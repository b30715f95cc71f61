use std::io::Write;

use tracing::debug;

use crate::format::ABSENT;
use crate::{FormatError, Network};

/// Writes a network into its plain text representation.
pub fn network_to_string(network: &Network) -> Result<String, FormatError> {
    let mut data: Vec<u8> = vec![];
    write_network(network, &mut data)?;
    String::from_utf8(data).map_err(|_| FormatError::Io(std::io::ErrorKind::InvalidData))
}

/// Writes a network into its plain text representation, see [`crate::read_network`].
///
/// Nothing is written if a node name contains a line break or if a weight is equal to the value
/// reserved for unconnected nodes, since neither would be read back.
pub fn write_network(network: &Network, mut writer: impl Write) -> Result<(), FormatError> {
    ensure_network_is_writable(network)?;

    writeln!(writer, "{}", network.node_count())?;

    for (_, name) in network.nodes() {
        writeln!(writer, "{name}")?;
    }

    for (a, _) in network.nodes() {
        for (b, _) in network.nodes().skip(a.index() + 1) {
            match network.edge(a, b) {
                Some(weight) => {
                    writeln!(writer, "{} {} {}", weight.distance, weight.fare, weight.time)?
                }
                None => writeln!(writer, "{ABSENT} {ABSENT} {ABSENT}")?,
            }
        }
    }

    writer.flush()?;

    debug!(
        "Wrote network of {} nodes and {} edges",
        network.node_count(),
        network.edge_count()
    );

    Ok(())
}

fn ensure_network_is_writable(network: &Network) -> Result<(), FormatError> {
    if let Some((_, name)) = network.nodes().find(|(_, name)| name.contains(['\n', '\r'])) {
        return Err(FormatError::InvalidNodeName(name.to_owned()));
    }

    for (a, _) in network.nodes() {
        for (b, weight) in network.neighbors(a).filter(|&(b, _)| b > a) {
            let weights = [weight.distance, weight.fare, weight.time];
            if weights.iter().any(|&w| i64::from(w) == ABSENT) {
                return Err(FormatError::ReservedWeight {
                    row: a.index(),
                    column: b.index(),
                });
            }
        }
    }

    Ok(())
}
