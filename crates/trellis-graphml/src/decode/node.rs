//! `<node>` decoding.

use roxmltree::Node;

use trellis_core::{
    color::Color,
    model::{DiagramNode, NodeData, Shape},
};

use crate::{
    decode::{
        blob::{Blob, assign, parse_object, positive, typed},
        data_children, span_of,
    },
    error::{Warning, WarningCode, WarningCollector},
    keys,
    span::Span,
};

const COLOR_HELP: &str = "use `#` followed by 3 to 8 hex digits, or a color name";

/// Raw `<data>` values of one node, before validation.
#[derive(Default)]
struct RawNode {
    node_type: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    w: Option<f64>,
    h: Option<f64>,
    shape: Option<String>,
    background_color: Option<(String, Span)>,
    text_color: Option<(String, Span)>,
    stroke_color: Option<(String, Span)>,
    stroke_width: Option<(String, Span)>,
    blob: Option<(String, Span)>,
}

/// Decodes one node element whose id has already been checked.
///
/// Returns `None` when a required field is missing; the warning has been
/// emitted by then.
pub(super) fn decode_node(
    element: Node,
    id: &str,
    collector: &mut WarningCollector,
) -> Option<DiagramNode> {
    let raw = collect(element, id, collector);

    let (Some(node_type), Some(x), Some(y), Some(w), Some(h)) =
        (raw.node_type, raw.x, raw.y, raw.w, raw.h)
    else {
        collector.emit(
            Warning::new(
                WarningCode::W101,
                format!("Node {id} missing required fields and was skipped"),
            )
            .with_span(span_of(element))
            .with_help("nodes need numeric `d_x`, `d_y`, `d_w`, `d_h` and a `d_type`"),
        );
        return None;
    };

    let mut data = NodeData {
        background_color: color(raw.background_color, "backgroundColor", id, collector),
        text_color: color(raw.text_color, "textColor", id, collector),
        shape: Some(shape(raw.shape, id, element, collector)),
        ..NodeData::default()
    };

    if let Some((value, span)) = raw.stroke_color.filter(|(value, _)| !value.is_empty()) {
        match Color::new(&value) {
            Ok(color) => data.stroke_color = Some(color),
            Err(_) => {
                collector.stats().invalid_stroke_colors += 1;
                collector.emit(
                    Warning::new(
                        WarningCode::W104,
                        format!("Invalid strokeColor '{value}' on node {id} ignored"),
                    )
                    .with_span(span)
                    .with_help(COLOR_HELP),
                );
            }
        }
    }

    if let Some((value, span)) = raw.stroke_width {
        match parse_positive(&value) {
            Some(width) => data.stroke_width = Some(width),
            None => {
                collector.stats().invalid_stroke_widths += 1;
                collector.emit(
                    Warning::new(
                        WarningCode::W105,
                        format!("Invalid strokeWidth on node {id} ignored"),
                    )
                    .with_span(span)
                    .with_help("stroke widths must be positive numbers"),
                );
            }
        }
    }

    if let Some((blob, span)) = raw.blob.filter(|(blob, _)| !blob.is_empty()) {
        match parse_object(&blob) {
            Some(blob) => merge_blob(&mut data, blob, id, span, collector),
            None => collector.emit(
                Warning::new(
                    WarningCode::W301,
                    format!("Failed to parse extra node data JSON for node {id}"),
                )
                .with_span(span),
            ),
        }
    }

    Some(DiagramNode {
        id: id.to_string(),
        node_type,
        x,
        y,
        w,
        h,
        data,
    })
}

fn collect(element: Node, id: &str, collector: &mut WarningCollector) -> RawNode {
    let mut raw = RawNode::default();
    for (key, text, span) in data_children(element) {
        match key {
            Some(keys::node::TYPE) => raw.node_type = Some(text),
            Some(keys::node::X) => raw.x = parse_number(&text),
            Some(keys::node::Y) => raw.y = parse_number(&text),
            Some(keys::node::W) => raw.w = parse_number(&text),
            Some(keys::node::H) => raw.h = parse_number(&text),
            Some(keys::node::SHAPE) => raw.shape = Some(text),
            Some(keys::node::BACKGROUND_COLOR) => raw.background_color = Some((text, span)),
            Some(keys::node::TEXT_COLOR) => raw.text_color = Some((text, span)),
            Some(keys::node::STROKE_COLOR) => raw.stroke_color = Some((text, span)),
            Some(keys::node::STROKE_WIDTH) => raw.stroke_width = Some((text, span)),
            Some(keys::node::DATA) => raw.blob = Some((text, span)),
            other => {
                collector.stats().unknown_node_keys += 1;
                collector.emit(
                    Warning::new(
                        WarningCode::W107,
                        format!("Unknown node data key {} on node {id}", other.unwrap_or("(none)")),
                    )
                    .with_span(span),
                );
            }
        }
    }
    raw
}

fn shape(
    value: Option<String>,
    id: &str,
    element: Node,
    collector: &mut WarningCollector,
) -> Shape {
    let Some(value) = value else {
        collector.stats().missing_shape += 1;
        collector.emit(
            Warning::new(WarningCode::W102, "Missing shape defaulted to rect")
                .with_span(span_of(element))
                .with_help(format!("node {id} has no `d_shape` data element")),
        );
        return Shape::Rect;
    };

    if value.is_empty() {
        return Shape::Rect;
    }

    value.parse().unwrap_or_else(|_| {
        let known: Vec<_> = Shape::ALL.iter().map(Shape::as_str).collect();
        collector.stats().unknown_shapes += 1;
        collector.emit(
            Warning::new(
                WarningCode::W103,
                format!("Unknown shape '{value}' downgraded to rect"),
            )
            .with_span(span_of(element))
            .with_help(format!("known shapes: {}", known.join(", "))),
        );
        Shape::Rect
    })
}

fn color(
    value: Option<(String, Span)>,
    field: &str,
    id: &str,
    collector: &mut WarningCollector,
) -> Option<Color> {
    let (value, span) = value.filter(|(value, _)| !value.is_empty())?;
    match Color::new(&value) {
        Ok(color) => Some(color),
        Err(_) => {
            collector.stats().invalid_colors += 1;
            collector.emit(
                Warning::new(
                    WarningCode::W106,
                    format!("Invalid {field} '{value}' on node {id} ignored"),
                )
                .with_span(span)
                .with_help(COLOR_HELP),
            );
            None
        }
    }
}

/// A finite number, or `None` for anything else (including empty text).
pub(super) fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A finite number greater than zero.
pub(super) fn parse_positive(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| *v > 0.0)
}

/// Merges a `d_nodeData` object into `data`; blob values win.
fn merge_blob(
    data: &mut NodeData,
    blob: Blob,
    id: &str,
    span: Span,
    collector: &mut WarningCollector,
) {
    for (key, value) in blob {
        let accepted = match key.as_str() {
            "shape" => assign(&mut data.shape, typed(value)),
            "text" => assign(&mut data.text, typed(value)),
            "textColor" => assign(&mut data.text_color, typed(value)),
            "backgroundColor" => assign(&mut data.background_color, typed(value)),
            "strokeColor" => assign(&mut data.stroke_color, typed(value)),
            "strokeWidth" => assign(&mut data.stroke_width, positive(value)),
            _ => {
                data.extra.insert(key, value);
                continue;
            }
        };
        if accepted {
            continue;
        }

        let stats = collector.stats();
        match key.as_str() {
            "shape" => stats.unknown_shapes += 1,
            "textColor" | "backgroundColor" => stats.invalid_colors += 1,
            "strokeColor" => stats.invalid_stroke_colors += 1,
            "strokeWidth" => stats.invalid_stroke_widths += 1,
            _ => {}
        }
        collector.emit(
            Warning::new(
                WarningCode::W303,
                format!("Invalid {key} in extra node data for node {id} ignored"),
            )
            .with_span(span),
        );
    }
}
