//! The GraphML key table.
//!
//! Every `<data key="…">` id the codec reads or writes is declared here,
//! together with the `<key>` declaration emitted at the top of each document.
//! The ids are part of the file format and must not change.

pub mod graph {
    pub const TITLE: &str = "d_title";
    pub const MODEL_VERSION: &str = "d_modelVersion";
}

pub mod node {
    pub const TYPE: &str = "d_type";
    pub const X: &str = "d_x";
    pub const Y: &str = "d_y";
    pub const W: &str = "d_w";
    pub const H: &str = "d_h";
    pub const BACKGROUND_COLOR: &str = "d_bg";
    pub const TEXT_COLOR: &str = "d_tc";
    pub const DATA: &str = "d_nodeData";
    pub const SHAPE: &str = "d_shape";
    pub const STROKE_COLOR: &str = "d_sc";
    pub const STROKE_WIDTH: &str = "d_sw";
}

pub mod edge {
    pub const TYPE: &str = "d_edgeType";
    pub const STROKE_COLOR: &str = "d_edgeStrokeColor";
    pub const STROKE_WIDTH: &str = "d_edgeStrokeWidth";
    pub const LINE_STYLE: &str = "d_edgeLineStyle";
    pub const DASH_PATTERN: &str = "d_edgeDashPattern";
    pub const ARROW_SOURCE: &str = "d_edgeArrowSource";
    pub const ARROW_TARGET: &str = "d_edgeArrowTarget";
    pub const LABEL: &str = "d_edgeLabel";
    pub const ROUTING: &str = "d_edgeRouting";
    pub const BEND_POINTS: &str = "d_edgeBendPoints";
    pub const DATA: &str = "d_edgeData";
}

/// One `<key>` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDecl {
    pub id: &'static str,
    pub domain: &'static str,
    pub name: &'static str,
    pub value_type: &'static str,
}

const fn decl(
    id: &'static str,
    domain: &'static str,
    name: &'static str,
    value_type: &'static str,
) -> KeyDecl {
    KeyDecl {
        id,
        domain,
        name,
        value_type,
    }
}

/// All key declarations, in the order they are written.
pub const DECLARATIONS: &[KeyDecl] = &[
    decl(graph::TITLE, "graph", "title", "string"),
    decl(graph::MODEL_VERSION, "graph", "modelVersion", "string"),
    decl(node::TYPE, "node", "type", "string"),
    decl(node::X, "node", "x", "double"),
    decl(node::Y, "node", "y", "double"),
    decl(node::W, "node", "w", "double"),
    decl(node::H, "node", "h", "double"),
    decl(node::BACKGROUND_COLOR, "node", "backgroundColor", "string"),
    decl(node::TEXT_COLOR, "node", "textColor", "string"),
    decl(node::DATA, "node", "data", "string"),
    decl(node::SHAPE, "node", "shape", "string"),
    decl(node::STROKE_COLOR, "node", "strokeColor", "string"),
    decl(node::STROKE_WIDTH, "node", "strokeWidth", "double"),
    decl(edge::TYPE, "edge", "type", "string"),
    decl(edge::STROKE_COLOR, "edge", "strokeColor", "string"),
    decl(edge::STROKE_WIDTH, "edge", "strokeWidth", "double"),
    decl(edge::LINE_STYLE, "edge", "lineStyle", "string"),
    decl(edge::DASH_PATTERN, "edge", "dashPattern", "string"),
    decl(edge::ARROW_SOURCE, "edge", "arrowSource", "string"),
    decl(edge::ARROW_TARGET, "edge", "arrowTarget", "string"),
    decl(edge::LABEL, "edge", "label", "string"),
    decl(edge::ROUTING, "edge", "routing", "string"),
    decl(edge::BEND_POINTS, "edge", "bendPoints", "string"),
    decl(edge::DATA, "edge", "data", "string"),
];
