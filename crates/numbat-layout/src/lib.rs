//! Layout tree and style resolution core for the Numbat renderer.
//!
//! This crate models the tree that sits between the document and the
//! paint pipeline:
//!
//! - [`tree::LayoutTree`] owns the nodes and answers style, font, and
//!   flow-classification queries for them.
//! - [`node::LayoutNode`] is one node: a concrete [`node::NodeKind`],
//!   flags, optional own style, and optional box-model metrics.
//! - [`style`] holds the computed-value model the tree stores and the
//!   cascaded property bundles it accepts.
//! - [`box_model`] holds the margin/border/padding/content geometry
//!   written by the layout algorithms.
//! - [`font`] is the interface to the host's font-matching service.
//! - [`paint`] holds the paint-tree counterparts layout nodes create.
//!
//! The formatting algorithms themselves (block, inline, flex, table
//! layout) build on these types from outside this crate.

/// Box-model geometry: rectangles, edge sizes, and the per-node
/// margin/border/padding/content holder.
pub mod box_model;
/// Opaque handles into the host document tree.
pub mod dom;
/// Font descriptions, metrics, and the host font-matching interface.
pub mod font;
/// Layout node identity, flags, and fast kind dispatch.
pub mod node;
/// Paint-tree counterparts of layout nodes.
pub mod paint;
/// Computed-value model and cascaded property bundles.
pub mod style;
/// The layout tree arena, style application, and flow classification.
pub mod tree;

pub use box_model::{BoxModelMetrics, EdgeSizes, Rect};
pub use dom::{BrowsingContextId, DomNodeId};
pub use font::{ApproximateFontMatcher, Font, FontDescription, FontMatcher, FontPixelMetrics};
pub use node::{FastKind, LayoutNode, NodeKind, NodeStyle, SelectionState};
pub use paint::{Paintable, PaintableKind};
pub use style::{ComputedValues, StyleProperties};
pub use tree::{AncestorIterator, FormattingContextType, LayoutNodeId, LayoutTree};
