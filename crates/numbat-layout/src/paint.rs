//! Paint-tree counterparts of layout nodes.
//!
//! After layout settles, the paint-tree builder walks the layout tree,
//! asks each node for its paint counterpart, and attaches the result via
//! the node's paintable link. The paint tree has its own lifetime (it is
//! shared with the compositor), so the link is reference counted; the
//! layout tree can be rebuilt while a previous paint tree is still being
//! presented.
//!
//! NOTE: This is the structural half only. Display-list generation from
//! paintables belongs to the painter, not to this crate.

use crate::box_model::Rect;

/// Which paint behavior a counterpart carries.
///
/// Mirrors the layout-side tiers: plain boxes paint background, borders,
/// and their descendants; block containers with inline content also own
/// line fragments; list markers paint a generated bullet or counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintableKind {
    /// Background, borders, and box decorations.
    Box,
    /// A box that additionally owns the line boxes of its inline content.
    WithLines,
    /// A generated list-item marker.
    Marker,
}

/// The paint-tree representation of one layout node.
///
/// Created by [`create_paintable`](crate::node::LayoutNode::create_paintable)
/// and attached by the paint-tree builder. Carries the layout node's
/// serial number so the painter can report which node produced a given
/// display item without holding a reference back into the layout arena.
#[derive(Debug, Clone)]
pub struct Paintable {
    kind: PaintableKind,
    layout_node_serial: u64,
    /// Absolute border-box rectangle, filled in by the paint-tree builder
    /// once containing-block offsets are accumulated.
    pub absolute_border_box: Rect,
}

impl Paintable {
    /// Create a paintable for the layout node with the given serial.
    #[must_use]
    pub const fn new(kind: PaintableKind, layout_node_serial: u64) -> Paintable {
        Paintable {
            kind,
            layout_node_serial,
            absolute_border_box: Rect {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        }
    }

    /// The paint behavior of this counterpart.
    #[must_use]
    pub const fn kind(&self) -> PaintableKind {
        self.kind
    }

    /// Serial number of the layout node this counterpart was created for.
    #[must_use]
    pub const fn layout_node_serial(&self) -> u64 {
        self.layout_node_serial
    }
}
