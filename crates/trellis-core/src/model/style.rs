//! Closed style vocabularies for nodes and edges.
//!
//! Every enumeration here has a single lowercase wire spelling, shared by
//! Diagram JSON and GraphML. [`FromStr`] rejects anything outside the
//! vocabulary with an [`InvalidValue`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InvalidValue;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire spelling of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = InvalidValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(InvalidValue::new($kind, s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Outline drawn for a node.
    ///
    /// Nodes without an explicit shape render as [`Shape::Rect`].
    Shape as "shape" {
        Rect => "rect",
        Rounded => "rounded",
        Diamond => "diamond",
        Ellipse => "ellipse",
        Circle => "circle",
        Hexagon => "hexagon",
        Parallelogram => "parallelogram",
        Trapezoid => "trapezoid",
        Octagon => "octagon",
        Cylinder => "cylinder",
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::Rect
    }
}

wire_enum! {
    /// Dash style of an edge stroke.
    LineStyle as "line style" {
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
    }
}

wire_enum! {
    /// Marker drawn at an edge endpoint.
    ArrowKind as "arrow" {
        None => "none",
        Standard => "standard",
        Circle => "circle",
        Diamond => "diamond",
        Tee => "tee",
    }
}

wire_enum! {
    /// Path routing hint for an edge.
    Routing as "routing" {
        Straight => "straight",
        Orthogonal => "orthogonal",
        Spline => "spline",
    }
}

/// An intermediate point an edge is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendPoint {
    pub x: f64,
    pub y: f64,
}

impl BendPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
