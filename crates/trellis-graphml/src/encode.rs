//! GraphML writer.
//!
//! The output layout is fixed: the full key table, then one line per node and
//! one line per edge, each sorted by id. Encoding the same document twice
//! yields identical bytes regardless of element order in memory.
//!
//! Empty strings are written as absent: an edge label or dash pattern of
//! `Some("")` has no `<data>` child and decodes back as `None`.

use std::{borrow::Cow, fmt::Write};

use log::{debug, warn};
use serde::Serialize;

use trellis_core::model::{DiagramEdge, DiagramNode, DiagramState, Extra, Shape};

use crate::keys::{self, DECLARATIONS};

const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

/// Writer options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Leave out `d_shape` for nodes whose shape is `rect`.
    ///
    /// Such files decode with a "missing shape" warning per node.
    pub omit_default_shape: bool,
}

/// Serializes `diagram` as a GraphML document.
pub fn encode(diagram: &DiagramState, options: &EncodeOptions) -> String {
    let mut nodes: Vec<_> = diagram.nodes.iter().collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    let mut edges: Vec<_> = diagram.edges.iter().collect();
    edges.sort_by(|a, b| a.id.cmp(&b.id));

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(out, "<graphml xmlns=\"{GRAPHML_NS}\">");

    let declarations: Vec<_> = DECLARATIONS
        .iter()
        .map(|d| {
            format!(
                "<key id=\"{}\" for=\"{}\" attr.name=\"{}\" attr.type=\"{}\"/>",
                d.id, d.domain, d.name, d.value_type
            )
        })
        .collect();
    let _ = writeln!(out, "  {}", declarations.join("\n  "));

    out.push_str("  <graph id=\"G\" edgedefault=\"directed\">\n");
    out.push_str("    ");
    push_data(&mut out, keys::graph::TITLE, &diagram.metadata.title);
    out.push_str("\n    ");
    push_data(&mut out, keys::graph::MODEL_VERSION, &diagram.schema_version);
    out.push('\n');

    for node in &nodes {
        out.push_str("    ");
        write_node(&mut out, node, options);
        out.push('\n');
    }
    for edge in &edges {
        out.push_str("    ");
        write_edge(&mut out, edge);
        out.push('\n');
    }

    out.push_str("  </graph>\n</graphml>");

    debug!(nodes = nodes.len(), edges = edges.len(); "Encoded GraphML");
    out
}

fn write_node(out: &mut String, node: &DiagramNode, options: &EncodeOptions) {
    let data = &node.data;
    let _ = write!(out, "<node id=\"{}\">", escape(&node.id));

    push_data(out, keys::node::TYPE, &node.node_type);
    push_data(out, keys::node::X, node.x);
    push_data(out, keys::node::Y, node.y);
    push_data(out, keys::node::W, node.w);
    push_data(out, keys::node::H, node.h);

    let shape = data.shape_or_default();
    if !(options.omit_default_shape && shape == Shape::Rect) {
        push_data(out, keys::node::SHAPE, shape);
    }
    if let Some(color) = &data.background_color {
        push_data(out, keys::node::BACKGROUND_COLOR, color);
    }
    if let Some(color) = &data.text_color {
        push_data(out, keys::node::TEXT_COLOR, color);
    }
    if let Some(color) = &data.stroke_color {
        push_data(out, keys::node::STROKE_COLOR, color);
    }
    if let Some(width) = positive(data.stroke_width) {
        push_data(out, keys::node::STROKE_WIDTH, width);
    }

    if data.text.is_some() || !data.extra.is_empty() {
        let blob = NodeBlob {
            text: data.text.as_deref(),
            extra: &data.extra,
        };
        if let Some(json) = to_json(&blob, &node.id) {
            push_data(out, keys::node::DATA, json);
        }
    }

    out.push_str("</node>");
}

fn write_edge(out: &mut String, edge: &DiagramEdge) {
    let data = &edge.data;
    let _ = write!(
        out,
        "<edge id=\"{}\" source=\"{}\" target=\"{}\">",
        escape(&edge.id),
        escape(&edge.source.node_id),
        escape(&edge.target.node_id)
    );

    push_data(out, keys::edge::TYPE, &edge.edge_type);
    if let Some(color) = &data.stroke_color {
        push_data(out, keys::edge::STROKE_COLOR, color);
    }
    if let Some(width) = positive(data.stroke_width) {
        push_data(out, keys::edge::STROKE_WIDTH, width);
    }
    if let Some(style) = data.line_style {
        push_data(out, keys::edge::LINE_STYLE, style);
    }
    if let Some(pattern) = data.dash_pattern.as_deref().filter(|p| !p.is_empty()) {
        push_data(out, keys::edge::DASH_PATTERN, pattern);
    }
    if let Some(arrow) = data.arrow_source {
        push_data(out, keys::edge::ARROW_SOURCE, arrow);
    }
    if let Some(arrow) = data.arrow_target {
        push_data(out, keys::edge::ARROW_TARGET, arrow);
    }
    if let Some(label) = data.label.as_deref().filter(|l| !l.is_empty()) {
        push_data(out, keys::edge::LABEL, label);
    }
    if let Some(routing) = data.routing {
        push_data(out, keys::edge::ROUTING, routing);
    }
    if let Some(json) = data.bend_points.as_ref().and_then(|p| to_json(p, &edge.id)) {
        push_data(out, keys::edge::BEND_POINTS, json);
    }
    if !data.extra.is_empty() {
        if let Some(json) = to_json(&data.extra, &edge.id) {
            push_data(out, keys::edge::DATA, json);
        }
    }

    out.push_str("</edge>");
}

/// Node extension blob: the label text plus every opaque key.
#[derive(Serialize)]
struct NodeBlob<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(flatten)]
    extra: &'a Extra,
}

fn push_data(out: &mut String, key: &str, value: impl ToString) {
    let value = value.to_string();
    let _ = write!(out, "<data key=\"{key}\">{}</data>", escape(&value));
}

fn positive(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite() && *w > 0.0)
}

fn to_json(value: &impl Serialize, element_id: &str) -> Option<String> {
    serde_json::to_string(value)
        .inspect_err(|err| warn!(element_id = element_id, error:% = err; "Skipping unserializable data"))
        .ok()
}

/// Escapes the five XML reserved characters.
pub(crate) fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use trellis_core::{
        color::Color,
        model::{BendPoint, EdgeData, EdgeEnd, NodeData},
    };

    use super::*;

    fn node(id: &str, data: NodeData) -> DiagramNode {
        DiagramNode {
            id: id.to_string(),
            node_type: "process".to_string(),
            x: 10.0,
            y: 20.5,
            w: 160.0,
            h: 60.0,
            data,
        }
    }

    fn node_block<'a>(xml: &'a str, id: &str) -> &'a str {
        let start = format!("<node id=\"{id}\">");
        let rest = xml.split(start.as_str()).nth(1).unwrap();
        rest.split("</node>").next().unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("A&B <Test>"), "A&amp;B &lt;Test&gt;");
        assert_eq!(escape("\"q\" 'a'"), "&quot;q&quot; &apos;a&apos;");
    }

    #[test]
    fn test_document_layout() {
        let diagram = DiagramState::with_title("A&B <Test>");
        let xml = encode(&diagram, &EncodeOptions::default());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<graphml xmlns="));
        assert!(xml.contains("  <key id=\"d_title\" for=\"graph\" attr.name=\"title\" attr.type=\"string\"/>\n"));
        assert!(xml.contains("<graph id=\"G\" edgedefault=\"directed\">"));
        assert!(xml.contains("<data key=\"d_title\">A&amp;B &lt;Test&gt;</data>"));
        assert!(xml.contains("<data key=\"d_modelVersion\">1.0.0</data>"));
        assert!(xml.ends_with("  </graph>\n</graphml>"));
    }

    #[test]
    fn test_node_children_order() {
        let mut data = NodeData {
            text: Some("Hello".to_string()),
            background_color: Color::new("#ff0000").ok(),
            text_color: Color::new("#000000").ok(),
            ..NodeData::default()
        };
        data.extra.insert("note".to_string(), json!("hi"));
        let mut diagram = DiagramState::default();
        diagram.nodes.push(node("n1", data));

        let xml = encode(&diagram, &EncodeOptions::default());
        assert!(xml.contains(
            "<node id=\"n1\"><data key=\"d_type\">process</data>\
             <data key=\"d_x\">10</data><data key=\"d_y\">20.5</data>\
             <data key=\"d_w\">160</data><data key=\"d_h\">60</data>\
             <data key=\"d_shape\">rect</data>\
             <data key=\"d_bg\">#ff0000</data><data key=\"d_tc\">#000000</data>\
             <data key=\"d_nodeData\">{&quot;text&quot;:&quot;Hello&quot;,&quot;note&quot;:&quot;hi&quot;}</data>\
             </node>"
        ));
    }

    #[test]
    fn test_shape_emitted_for_every_node() {
        let mut diagram = DiagramState::default();
        diagram.nodes.push(node("n1", NodeData::default()));
        diagram.nodes.push(node(
            "n2",
            NodeData {
                shape: Some(Shape::Diamond),
                stroke_color: Color::new("#333").ok(),
                stroke_width: Some(2.0),
                ..NodeData::default()
            },
        ));

        let xml = encode(&diagram, &EncodeOptions::default());
        assert_eq!(xml.matches("key=\"d_shape\"").count(), 2);
        assert!(!node_block(&xml, "n1").contains("d_sc"));
        assert!(node_block(&xml, "n2").contains("<data key=\"d_sc\">#333</data>"));
        assert!(node_block(&xml, "n2").contains("<data key=\"d_sw\">2</data>"));
    }

    #[test]
    fn test_omit_default_shape() {
        let mut diagram = DiagramState::default();
        diagram.nodes.push(node(
            "a",
            NodeData {
                shape: Some(Shape::Rect),
                ..NodeData::default()
            },
        ));
        diagram.nodes.push(node(
            "b",
            NodeData {
                shape: Some(Shape::Diamond),
                ..NodeData::default()
            },
        ));

        let options = EncodeOptions {
            omit_default_shape: true,
        };
        let xml = encode(&diagram, &options);
        assert!(!node_block(&xml, "a").contains("d_shape"));
        assert!(node_block(&xml, "b").contains("<data key=\"d_shape\">diamond</data>"));
    }

    #[test]
    fn test_non_positive_stroke_width_not_emitted() {
        let mut diagram = DiagramState::default();
        for (id, width) in [("a", -5.0), ("b", 0.0), ("c", f64::NAN)] {
            diagram.nodes.push(node(
                id,
                NodeData {
                    stroke_width: Some(width),
                    ..NodeData::default()
                },
            ));
        }

        let xml = encode(&diagram, &EncodeOptions::default());
        assert!(!xml.contains("<data key=\"d_sw\">"));
    }

    #[test]
    fn test_edge_children() {
        let mut data = EdgeData {
            stroke_color: Color::new("#ff0000").ok(),
            stroke_width: Some(2.0),
            line_style: "dashed".parse().ok(),
            arrow_target: "standard".parse().ok(),
            label: Some("Flow".to_string()),
            dash_pattern: Some(String::new()),
            bend_points: Some(vec![BendPoint::new(50.0, 20.0)]),
            ..EdgeData::default()
        };
        data.extra.insert("customMetric".to_string(), json!(42));

        let mut diagram = DiagramState::default();
        diagram.edges.push(DiagramEdge {
            id: "e1".to_string(),
            source: EdgeEnd::new("n1"),
            target: EdgeEnd::new("n2"),
            edge_type: "default".to_string(),
            data,
        });

        let xml = encode(&diagram, &EncodeOptions::default());
        assert!(xml.contains(
            "<edge id=\"e1\" source=\"n1\" target=\"n2\"><data key=\"d_edgeType\">default</data>\
             <data key=\"d_edgeStrokeColor\">#ff0000</data>\
             <data key=\"d_edgeStrokeWidth\">2</data>\
             <data key=\"d_edgeLineStyle\">dashed</data>\
             <data key=\"d_edgeArrowTarget\">standard</data>\
             <data key=\"d_edgeLabel\">Flow</data>"
        ));
        assert!(!xml.contains("d_edgeDashPattern\">"));
        assert!(xml.contains("<data key=\"d_edgeData\">{&quot;customMetric&quot;:42}</data></edge>"));
    }

    #[test]
    fn test_empty_strings_decode_as_absent() {
        let mut diagram = DiagramState::default();
        diagram.edges.push(DiagramEdge {
            id: "e1".to_string(),
            source: EdgeEnd::new("n1"),
            target: EdgeEnd::new("n2"),
            edge_type: "default".to_string(),
            data: EdgeData {
                label: Some(String::new()),
                dash_pattern: Some(String::new()),
                ..EdgeData::default()
            },
        });

        let xml = encode(&diagram, &EncodeOptions::default());
        assert!(!xml.contains("d_edgeLabel\">"));

        let decoded = crate::decode::decode(&xml).unwrap();
        let data = &decoded.diagram.edges[0].data;
        assert!(data.label.is_none());
        assert!(data.dash_pattern.is_none());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn test_encoding_ignores_insertion_order() {
        let mut forward = DiagramState::default();
        forward.nodes = vec![node("a", NodeData::default()), node("b", NodeData::default())];
        let mut reversed = forward.clone();
        reversed.nodes.reverse();

        let options = EncodeOptions::default();
        let xml = encode(&forward, &options);
        assert_eq!(xml, encode(&reversed, &options));
        assert!(xml.find("<node id=\"a\">").unwrap() < xml.find("<node id=\"b\">").unwrap());
    }
}
