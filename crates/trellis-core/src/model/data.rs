//! Presentation payloads attached to nodes and edges.
//!
//! [`NodeData`] and [`EdgeData`] give static types to the style fields the
//! editor understands and keep every other key in an insertion-ordered
//! [`Extra`] map. Unknown keys are never interpreted, only carried, so
//! caller-defined metadata survives JSON and GraphML round-trips.
//!
//! An empty payload is equivalent to an absent one: deserialization fills
//! missing payloads with the default and serialization skips empty ones.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    color::Color,
    model::style::{ArrowKind, BendPoint, LineStyle, Routing, Shape},
};

/// Opaque extension keys, kept in the order they were first inserted.
pub type Extra = IndexMap<String, Value>;

/// Styling and content of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl NodeData {
    /// Returns `true` when no field and no extension key is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The shape to draw, falling back to [`Shape::Rect`].
    pub fn shape_or_default(&self) -> Shape {
        self.shape.unwrap_or_default()
    }

    /// Shallow merge: every field and extension key set in `patch` replaces
    /// the current value, everything else is retained.
    pub fn merge(&mut self, patch: NodeData) {
        let NodeData {
            shape,
            text,
            text_color,
            background_color,
            stroke_color,
            stroke_width,
            extra,
        } = patch;

        merge_field(&mut self.shape, shape);
        merge_field(&mut self.text, text);
        merge_field(&mut self.text_color, text_color);
        merge_field(&mut self.background_color, background_color);
        merge_field(&mut self.stroke_color, stroke_color);
        merge_field(&mut self.stroke_width, stroke_width);
        self.extra.extend(extra);
    }
}

/// Styling and routing of an edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_source: Option<ArrowKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_target: Option<ArrowKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<Routing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bend_points: Option<Vec<BendPoint>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl EdgeData {
    /// Returns `true` when no field and no extension key is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge, see [`NodeData::merge`].
    pub fn merge(&mut self, patch: EdgeData) {
        let EdgeData {
            stroke_color,
            stroke_width,
            line_style,
            dash_pattern,
            arrow_source,
            arrow_target,
            label,
            routing,
            bend_points,
            extra,
        } = patch;

        merge_field(&mut self.stroke_color, stroke_color);
        merge_field(&mut self.stroke_width, stroke_width);
        merge_field(&mut self.line_style, line_style);
        merge_field(&mut self.dash_pattern, dash_pattern);
        merge_field(&mut self.arrow_source, arrow_source);
        merge_field(&mut self.arrow_target, arrow_target);
        merge_field(&mut self.label, label);
        merge_field(&mut self.routing, routing);
        merge_field(&mut self.bend_points, bend_points);
        self.extra.extend(extra);
    }
}

fn merge_field<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_node_data_merge_keeps_untargeted_keys() {
        let mut data = NodeData {
            text: Some("A".to_string()),
            text_color: Some(Color::new("#111").unwrap()),
            ..NodeData::default()
        };
        data.merge(NodeData {
            text: Some("B".to_string()),
            ..NodeData::default()
        });

        assert_eq!(data.text.as_deref(), Some("B"));
        assert_eq!(data.text_color, Some(Color::new("#111").unwrap()));
    }

    #[test]
    fn test_node_data_merge_extra() {
        let mut data = NodeData::default();
        data.extra.insert("note".to_string(), json!("hi"));
        data.extra.insert("rank".to_string(), json!(1));

        let mut patch = NodeData::default();
        patch.extra.insert("rank".to_string(), json!(2));
        patch.extra.insert("owner".to_string(), json!("ops"));
        data.merge(patch);

        let keys: Vec<_> = data.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, ["note", "rank", "owner"]);
        assert_eq!(data.extra["rank"], json!(2));
    }

    #[test]
    fn test_node_data_json_shape() {
        let data: NodeData = serde_json::from_value(json!({
            "shape": "diamond",
            "backgroundColor": "#fff",
            "strokeWidth": 2,
            "note": "hi",
            "meta": { "a": [1, 2] }
        }))
        .unwrap();

        assert_eq!(data.shape, Some(Shape::Diamond));
        assert_eq!(data.stroke_width, Some(2.0));
        assert_eq!(data.extra["note"], json!("hi"));
        assert_eq!(data.extra["meta"], json!({ "a": [1, 2] }));

        let back = serde_json::to_value(&data).unwrap();
        assert_eq!(back["backgroundColor"], json!("#fff"));
        assert_eq!(back["note"], json!("hi"));
        assert!(back.get("textColor").is_none());
    }

    #[test]
    fn test_node_data_rejects_invalid_known_field() {
        let result = serde_json::from_value::<NodeData>(json!({ "strokeColor": "not-a-color" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_data() {
        assert!(NodeData::default().is_empty());
        assert!(EdgeData::default().is_empty());

        let mut data = EdgeData::default();
        data.extra.insert("x".to_string(), json!(null));
        assert!(!data.is_empty());
    }

    #[test]
    fn test_edge_data_merge() {
        let mut data = EdgeData {
            line_style: Some(LineStyle::Dashed),
            label: Some("Flow".to_string()),
            ..EdgeData::default()
        };
        data.merge(EdgeData {
            label: Some("Call".to_string()),
            arrow_target: Some(ArrowKind::Tee),
            ..EdgeData::default()
        });

        assert_eq!(data.line_style, Some(LineStyle::Dashed));
        assert_eq!(data.label.as_deref(), Some("Call"));
        assert_eq!(data.arrow_target, Some(ArrowKind::Tee));
    }
}
