//! Built-in example diagrams.
//!
//! Examples are looked up by a stable key, e.g. `basic-flow`. Each call
//! builds a fresh document; the catalog holds no shared state.

use trellis_core::model::{DiagramEdge, DiagramNode, DiagramState, EdgeEnd, Metadata};

/// Schema version stamped on every example.
const SCHEMA_VERSION: &str = "1.1.0";

/// Keys of every available example, in presentation order.
pub const NAMES: &[&str] = &[
    "basic-flow",
    "architecture",
    "grid",
    "basic-flow-connected",
    "architecture-connected",
];

/// Builds the example registered under `name`.
pub fn example(name: &str) -> Option<DiagramState> {
    let diagram = match name {
        "basic-flow" => document("Basic Flow", basic_flow_nodes(), Vec::new()),
        "architecture" => document("Mini Architecture", architecture_nodes(), Vec::new()),
        "grid" => document("Grid Layout", grid_nodes(), Vec::new()),
        "basic-flow-connected" => document(
            "Basic Flow (Connected)",
            basic_flow_nodes(),
            edges(&[("e1", "start", "process"), ("e2", "process", "end")]),
        ),
        "architecture-connected" => document(
            "Mini Architecture (Connected)",
            architecture_nodes(),
            edges(&[
                ("c1", "client", "api"),
                ("c2", "client", "auth"),
                ("c3", "api", "db"),
                ("c4", "auth", "db"),
                ("c5", "api", "cache"),
                ("c6", "auth", "cache"),
            ]),
        ),
        _ => return None,
    };
    Some(diagram)
}

fn document(title: &str, nodes: Vec<DiagramNode>, edges: Vec<DiagramEdge>) -> DiagramState {
    DiagramState {
        schema_version: SCHEMA_VERSION.to_string(),
        nodes,
        edges,
        selection: Vec::new(),
        metadata: Metadata {
            title: title.to_string(),
        },
    }
}

fn node(id: &str, node_type: &str, x: f64, y: f64, w: f64, h: f64) -> DiagramNode {
    DiagramNode {
        id: id.to_string(),
        node_type: node_type.to_string(),
        x,
        y,
        w,
        h,
        data: Default::default(),
    }
}

fn edges(pairs: &[(&str, &str, &str)]) -> Vec<DiagramEdge> {
    pairs
        .iter()
        .map(|&(id, source, target)| DiagramEdge {
            id: id.to_string(),
            source: EdgeEnd::new(source),
            target: EdgeEnd::new(target),
            edge_type: "edge".to_string(),
            data: Default::default(),
        })
        .collect()
}

fn basic_flow_nodes() -> Vec<DiagramNode> {
    vec![
        node("start", "start", 80.0, 120.0, 140.0, 60.0),
        node("process", "process", 320.0, 120.0, 160.0, 60.0),
        node("end", "end", 600.0, 120.0, 140.0, 60.0),
    ]
}

fn architecture_nodes() -> Vec<DiagramNode> {
    vec![
        node("client", "client", 60.0, 80.0, 160.0, 60.0),
        node("api", "api", 300.0, 60.0, 160.0, 60.0),
        node("auth", "auth", 300.0, 160.0, 160.0, 60.0),
        node("db", "database", 560.0, 110.0, 180.0, 70.0),
        node("cache", "cache", 560.0, 220.0, 180.0, 70.0),
    ]
}

/// Twelve nodes on a 4-column grid.
fn grid_nodes() -> Vec<DiagramNode> {
    (0..12)
        .map(|i| {
            let col = (i % 4) as f64;
            let row = (i / 4) as f64;
            node(
                &format!("n{i}"),
                &format!("N{i}"),
                80.0 + col * 180.0,
                80.0 + row * 140.0,
                150.0,
                70.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in NAMES {
            let diagram = example(name).unwrap();
            assert_eq!(diagram.schema_version, "1.1.0");
            assert!(diagram.selection.is_empty());
        }
    }

    #[test]
    fn test_unknown_example() {
        assert!(example("nope").is_none());
    }

    #[test]
    fn test_grid_layout() {
        let grid = example("grid").unwrap();
        assert_eq!(grid.nodes.len(), 12);

        let last = grid.node("n11").unwrap();
        assert_eq!(last.node_type, "N11");
        assert_eq!((last.x, last.y), (620.0, 360.0));
    }

    #[test]
    fn test_connected_examples_have_no_dangling_edges() {
        let flow = example("basic-flow-connected").unwrap();
        assert_eq!(flow.edges.len(), 2);
        assert_eq!(flow.dangling_edges().count(), 0);

        let arch = example("architecture-connected").unwrap();
        assert_eq!(arch.edges.len(), 6);
        assert_eq!(arch.dangling_edges().count(), 0);
        assert_eq!(arch.metadata.title, "Mini Architecture (Connected)");
    }
}
