use std::sync::LazyLock;

use cityroute::{EdgeWeight, Network};

/// Small city network with two disconnected components.
///
/// ```text
///            Central ------------ Airport
///            /     \              /    \
///      Museum ---- Harbour ------'   University --- Stadium
///          \____________________________/
///
///      Island --- Lighthouse
/// ```
pub static CITY_NETWORK: LazyLock<Network> = LazyLock::new(|| {
    let mut network = Network::default();

    for name in [
        "Central",
        "Harbour",
        "Museum",
        "Airport",
        "University",
        "Stadium",
        "Island",
        "Lighthouse",
    ] {
        network.add_node(name);
    }

    let edges = [
        ("Central", "Harbour", EdgeWeight::new(4, 5, 10)),
        ("Central", "Museum", EdgeWeight::new(2, 2, 5)),
        ("Museum", "Harbour", EdgeWeight::new(1, 1, 3)),
        ("Harbour", "Airport", EdgeWeight::new(9, 1, 15)),
        ("Museum", "University", EdgeWeight::new(6, 2, 8)),
        ("University", "Airport", EdgeWeight::new(3, 2, 4)),
        ("Central", "Airport", EdgeWeight::new(20, 30, 12)),
        ("University", "Stadium", EdgeWeight::new(2, 1, 3)),
        ("Island", "Lighthouse", EdgeWeight::new(1, 1, 1)),
    ];

    for (from, to, weight) in edges {
        network.add_edge(from, to, weight).unwrap();
    }

    network
});

/// P, Q and R where the cheapest route between P and R depends on the criterion.
pub fn triangle_network() -> Network {
    let mut network = Network::default();
    network.add_node("P");
    network.add_node("Q");
    network.add_node("R");
    network.add_edge("P", "Q", EdgeWeight::new(10, 5, 2)).unwrap();
    network.add_edge("Q", "R", EdgeWeight::new(10, 5, 2)).unwrap();
    network.add_edge("P", "R", EdgeWeight::new(15, 1, 10)).unwrap();
    network
}
