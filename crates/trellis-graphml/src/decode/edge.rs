//! `<edge>` decoding.
//!
//! Edges have no required `<data>`: once `id`, `source` and `target` are
//! present the edge is always accepted, with whatever styling survived
//! validation. Endpoints are not checked against the decoded nodes.
//!
//! Empty text is absent for every field, silently: an empty stroke color,
//! label or dash pattern leaves the field unset without a warning, mirroring
//! the writer, which never emits empty values.

use std::str::FromStr;

use roxmltree::Node;
use serde_json::Value;

use trellis_core::{
    color::Color,
    model::{ArrowKind, BendPoint, DiagramEdge, EdgeData, EdgeEnd, LineStyle, Routing},
};

use crate::{
    decode::{
        blob::{Blob, assign, parse_object, positive, typed},
        data_children,
        node::parse_positive,
    },
    error::{Warning, WarningCode, WarningCollector},
    keys,
    span::Span,
};

const DEFAULT_EDGE_TYPE: &str = "default";

pub(super) fn decode_edge(
    element: Node,
    id: &str,
    source: &str,
    target: &str,
    collector: &mut WarningCollector,
) -> DiagramEdge {
    let mut edge_type = DEFAULT_EDGE_TYPE.to_string();
    let mut data = EdgeData::default();
    let mut blob = None;

    for (key, text, span) in data_children(element) {
        match key {
            Some(keys::edge::TYPE) => {
                if !text.is_empty() {
                    edge_type = text;
                }
            }
            Some(keys::edge::STROKE_COLOR) => {
                if text.is_empty() {
                    continue;
                }
                match Color::new(&text) {
                    Ok(color) => data.stroke_color = Some(color),
                    Err(_) => {
                        collector.stats().invalid_stroke_colors += 1;
                        collector.emit(
                            Warning::new(
                                WarningCode::W201,
                                format!("Invalid strokeColor '{text}' on edge {id} ignored"),
                            )
                            .with_span(span),
                        );
                    }
                }
            }
            Some(keys::edge::STROKE_WIDTH) => match parse_positive(&text) {
                Some(width) => data.stroke_width = Some(width),
                None => {
                    collector.stats().invalid_stroke_widths += 1;
                    collector.emit(
                        Warning::new(
                            WarningCode::W202,
                            format!("Invalid strokeWidth on edge {id} ignored"),
                        )
                        .with_span(span),
                    );
                }
            },
            Some(keys::edge::LINE_STYLE) => {
                data.line_style = vocabulary::<LineStyle>(&text, "lineStyle", id, span, collector);
            }
            Some(keys::edge::DASH_PATTERN) => {
                if !text.is_empty() {
                    data.dash_pattern = Some(text);
                }
            }
            Some(keys::edge::ARROW_SOURCE) => {
                data.arrow_source = vocabulary::<ArrowKind>(&text, "arrowSource", id, span, collector);
            }
            Some(keys::edge::ARROW_TARGET) => {
                data.arrow_target = vocabulary::<ArrowKind>(&text, "arrowTarget", id, span, collector);
            }
            Some(keys::edge::LABEL) => {
                if !text.is_empty() {
                    data.label = Some(text);
                }
            }
            Some(keys::edge::ROUTING) => {
                data.routing = vocabulary::<Routing>(&text, "routing", id, span, collector);
            }
            Some(keys::edge::BEND_POINTS) => {
                data.bend_points = bend_points(&text, id, span, collector);
            }
            Some(keys::edge::DATA) => {
                if !text.is_empty() {
                    blob = Some((text, span));
                }
            }
            _ => collector.stats().unknown_edge_keys += 1,
        }
    }

    if let Some((blob, span)) = blob {
        match parse_object(&blob) {
            Some(blob) => merge_blob(&mut data, blob, id, span, collector),
            None => collector.emit(
                Warning::new(
                    WarningCode::W302,
                    format!("Failed to parse extra edge data JSON for edge {id}"),
                )
                .with_span(span),
            ),
        }
    }

    DiagramEdge {
        id: id.to_string(),
        source: EdgeEnd::new(source),
        target: EdgeEnd::new(target),
        edge_type,
        data,
    }
}

/// Merges a `d_edgeData` object into `data`; blob values win.
fn merge_blob(
    data: &mut EdgeData,
    blob: Blob,
    id: &str,
    span: Span,
    collector: &mut WarningCollector,
) {
    for (key, value) in blob {
        let accepted = match key.as_str() {
            "strokeColor" => assign(&mut data.stroke_color, typed(value)),
            "strokeWidth" => assign(&mut data.stroke_width, positive(value)),
            "lineStyle" => assign(&mut data.line_style, typed(value)),
            "dashPattern" => assign(&mut data.dash_pattern, typed(value)),
            "arrowSource" => assign(&mut data.arrow_source, typed(value)),
            "arrowTarget" => assign(&mut data.arrow_target, typed(value)),
            "label" => assign(&mut data.label, typed(value)),
            "routing" => assign(&mut data.routing, typed(value)),
            "bendPoints" => assign(&mut data.bend_points, typed(value)),
            _ => {
                data.extra.insert(key, value);
                continue;
            }
        };
        if accepted {
            continue;
        }

        match key.as_str() {
            "strokeColor" => collector.stats().invalid_stroke_colors += 1,
            "strokeWidth" => collector.stats().invalid_stroke_widths += 1,
            _ => {}
        }
        collector.emit(
            Warning::new(
                WarningCode::W304,
                format!("Invalid {key} in extra edge data for edge {id} ignored"),
            )
            .with_span(span),
        );
    }
}

/// Parses a closed-vocabulary value. Empty text is absent, anything outside
/// the vocabulary is dropped with a warning.
fn vocabulary<T: FromStr>(
    text: &str,
    field: &str,
    id: &str,
    span: Span,
    collector: &mut WarningCollector,
) -> Option<T> {
    if text.is_empty() {
        return None;
    }
    let parsed = text.parse().ok();
    if parsed.is_none() {
        collector.emit(
            Warning::new(
                WarningCode::W203,
                format!("Unknown {field} '{text}' on edge {id}"),
            )
            .with_span(span),
        );
    }
    parsed
}

fn bend_points(
    text: &str,
    id: &str,
    span: Span,
    collector: &mut WarningCollector,
) -> Option<Vec<BendPoint>> {
    if text.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<Value>(text) else {
        collector.emit(
            Warning::new(
                WarningCode::W204,
                format!("Failed to parse bendPoints on edge {id}"),
            )
            .with_span(span),
        );
        return None;
    };

    let points = value
        .is_array()
        .then(|| serde_json::from_value::<Vec<BendPoint>>(value).ok())
        .flatten();
    if points.is_none() {
        collector.emit(
            Warning::new(WarningCode::W204, format!("Invalid bendPoints on edge {id}"))
                .with_span(span)
                .with_help("expected a JSON array such as [{\"x\":10,\"y\":20}]"),
        );
    }
    points
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::decode::decode;

    use super::*;

    fn edge_xml(children: &str) -> String {
        format!(
            "<?xml version=\"1.0\"?>\n<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\
             <graph id=\"G\" edgedefault=\"directed\">\
             <edge id=\"e1\" source=\"n1\" target=\"n2\">{children}</edge></graph></graphml>"
        )
    }

    #[test]
    fn test_bare_edge_defaults() {
        let decoded = decode(&edge_xml("")).unwrap();

        let edge = &decoded.diagram.edges[0];
        assert_eq!(edge.edge_type, "default");
        assert_eq!(edge.source.node_id, "n1");
        assert!(edge.data.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn test_invalid_styling_is_dropped() {
        let decoded = decode(&edge_xml(
            "<data key=\"d_edgeType\">default</data>\
             <data key=\"d_edgeStrokeColor\">not-a-color</data>\
             <data key=\"d_edgeStrokeWidth\">-3</data>\
             <data key=\"d_edgeLineStyle\">weird</data>\
             <data key=\"d_edgeArrowTarget\">strangeArrow</data>",
        ))
        .unwrap();

        assert_eq!(decoded.diagram.edges.len(), 1);
        assert!(decoded.diagram.edges[0].data.is_empty());
        assert_eq!(decoded.warnings.len(), 4);
        assert!(decoded.messages().iter().all(|m| m.contains("edge")));
        assert_eq!(decoded.stats.invalid_stroke_colors, 1);
        assert_eq!(decoded.stats.invalid_stroke_widths, 1);
    }

    #[test]
    fn test_empty_vocabulary_values_are_silent() {
        let decoded = decode(&edge_xml(
            "<data key=\"d_edgeLineStyle\"></data><data key=\"d_edgeRouting\"></data>\
             <data key=\"d_edgeStrokeColor\"></data>",
        ))
        .unwrap();

        assert!(decoded.warnings.is_empty());
        assert!(decoded.diagram.edges[0].data.is_empty());
    }

    #[test]
    fn test_bend_points() {
        let decoded = decode(&edge_xml(
            "<data key=\"d_edgeBendPoints\">[{\"x\":50,\"y\":20},{\"x\":150.5,\"y\":90}]</data>",
        ))
        .unwrap();

        assert_eq!(
            decoded.diagram.edges[0].data.bend_points,
            Some(vec![BendPoint::new(50.0, 20.0), BendPoint::new(150.5, 90.0)])
        );
    }

    #[test]
    fn test_bad_bend_points() {
        let unparsable = decode(&edge_xml("<data key=\"d_edgeBendPoints\">[{</data>")).unwrap();
        assert_eq!(unparsable.messages(), ["Failed to parse bendPoints on edge e1"]);

        let wrong_shape =
            decode(&edge_xml("<data key=\"d_edgeBendPoints\">[{\"x\":\"a\",\"y\":1}]</data>")).unwrap();
        assert_eq!(wrong_shape.messages(), ["Invalid bendPoints on edge e1"]);

        let not_array = decode(&edge_xml("<data key=\"d_edgeBendPoints\">{\"x\":1,\"y\":1}</data>")).unwrap();
        assert_eq!(not_array.messages(), ["Invalid bendPoints on edge e1"]);
        assert!(not_array.diagram.edges[0].data.bend_points.is_none());
    }

    #[test]
    fn test_extra_edge_data() {
        let decoded = decode(&edge_xml(
            "<data key=\"d_edgeLabel\">Flow</data>\
             <data key=\"d_edgeData\">{\"customMetric\":42,\"label\":\"Blob\"}</data>",
        ))
        .unwrap();

        let data = &decoded.diagram.edges[0].data;
        assert_eq!(data.extra["customMetric"], json!(42));
        assert_eq!(data.label.as_deref(), Some("Blob"));
    }

    #[test]
    fn test_extra_edge_data_is_validated_per_key() {
        let decoded = decode(&edge_xml(
            "<data key=\"d_edgeStrokeWidth\">2</data>\
             <data key=\"d_edgeData\">{\"strokeWidth\":0,\"routing\":\"curvy\",\
             \"bendPoints\":[{\"x\":1,\"y\":2}],\"team\":\"core\"}</data>",
        ))
        .unwrap();

        let data = &decoded.diagram.edges[0].data;
        assert_eq!(data.stroke_width, Some(2.0));
        assert!(data.routing.is_none());
        assert_eq!(data.bend_points, Some(vec![BendPoint::new(1.0, 2.0)]));
        assert_eq!(data.extra["team"], json!("core"));
        assert_eq!(
            decoded.messages(),
            [
                "Invalid routing in extra edge data for edge e1 ignored",
                "Invalid strokeWidth in extra edge data for edge e1 ignored",
            ]
        );
        assert_eq!(decoded.stats.invalid_stroke_widths, 1);
        assert!(decoded.warnings.iter().all(|w| w.code() == WarningCode::W304));
    }

    #[test]
    fn test_bad_extra_edge_data() {
        let decoded = decode(&edge_xml("<data key=\"d_edgeData\">not json</data>")).unwrap();
        assert_eq!(
            decoded.messages(),
            ["Failed to parse extra edge data JSON for edge e1"]
        );
    }

    #[test]
    fn test_unknown_edge_keys_are_counted_silently() {
        let decoded = decode(&edge_xml("<data key=\"d_weight\">3</data><data>4</data>")).unwrap();

        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.stats.unknown_edge_keys, 2);
    }
}
