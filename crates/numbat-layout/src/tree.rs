//! The layout tree arena, style application, and flow classification.
//!
//! [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/)
//!
//! Nodes live in a flat arena owned by [`LayoutTree`] and refer to each
//! other by [`LayoutNodeId`] index. Children are reached top-down through
//! each node's child list; the parent link is a non-owning back pointer,
//! so ownership flows strictly from root to leaf. The tree is built for
//! one document snapshot and rebuilt wholesale when the document or its
//! styles change - there is no incremental reconstruction.

use std::rc::Rc;

use serde::Serialize;
use strum_macros::Display;

use crate::dom::{BrowsingContextId, DomNodeId};
use crate::font::{Font, FontDescription, FontMatcher};
use crate::node::{LayoutNode, NodeKind, NodeStyle};
use crate::style::{
    AutoEdgeSizes, ComputedValues, LineHeight, PositionType, StyleProperties, Visibility, ZIndex,
};

/// Index of a node in its [`LayoutTree`] arena.
///
/// Stable for the lifetime of the tree: nodes are never removed from the
/// arena, only detached from the child structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutNodeId(pub usize);

/// The formatting context a node participates in, as established by its
/// containing block.
///
/// [§ 9.4 Normal flow](https://www.w3.org/TR/CSS2/visuren.html#normal-flow)
///
/// Flow classification depends on it: a float is out of flow in a block
/// formatting context, but a `float` declaration has no effect on a flex
/// or grid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum FormattingContextType {
    /// Block formatting context.
    Block,
    /// Inline formatting context.
    Inline,
    /// Flex formatting context.
    Flex,
    /// Grid formatting context.
    Grid,
    /// Internal table layout.
    Table,
}

/// The layout tree for one document snapshot.
///
/// Owns every [`LayoutNode`] in a flat arena. The first node created is
/// the root and must be the viewport, constructed with style already
/// applicable: every style query on an unstyled node resolves through
/// ancestors, and the chain must terminate at a styled node.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
    next_serial: u64,
}

impl LayoutTree {
    /// An empty tree; the first [`new_node`](LayoutTree::new_node) call
    /// creates the root.
    #[must_use]
    pub const fn new() -> LayoutTree {
        LayoutTree {
            nodes: Vec::new(),
            next_serial: 0,
        }
    }

    /// Number of nodes ever created in this tree, wired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no node has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node of the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    #[must_use]
    pub fn root(&self) -> LayoutNodeId {
        assert!(!self.nodes.is_empty(), "layout tree has no root");
        LayoutNodeId(0)
    }

    /// Create a node in the arena and return its id.
    ///
    /// The node starts detached; wire it with
    /// [`append_child`](LayoutTree::append_child). Serial numbers are
    /// handed out in creation order and never reused, so a later node
    /// always has a greater serial than an earlier one.
    pub fn new_node(
        &mut self,
        kind: NodeKind,
        dom_node: Option<DomNodeId>,
        browsing_context: BrowsingContextId,
    ) -> LayoutNodeId {
        let id = LayoutNodeId(self.nodes.len());
        let serial = self.next_serial;
        self.next_serial += 1;
        self.nodes
            .push(LayoutNode::new(kind, dom_node, browsing_context, serial));
        id
    }

    /// The node at `id`, or `None` for an id from another tree.
    #[must_use]
    pub fn get(&self, id: LayoutNodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    /// Mutable access to the node at `id`.
    #[must_use]
    pub fn get_mut(&mut self, id: LayoutNodeId) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id.0)
    }

    fn node(&self, id: LayoutNodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: LayoutNodeId) -> &mut LayoutNode {
        &mut self.nodes[id.0]
    }

    /// The parent of `id`, or `None` for the root and detached nodes.
    #[must_use]
    pub fn parent(&self, id: LayoutNodeId) -> Option<LayoutNodeId> {
        self.node(id).parent
    }

    /// The children of `id`, in document order.
    #[must_use]
    pub fn children(&self, id: LayoutNodeId) -> &[LayoutNodeId] {
        &self.node(id).children
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if `child` is already wired under a parent; a node is
    /// detached first, never moved in place.
    pub fn append_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) {
        assert!(
            self.node(child).parent.is_none(),
            "{} already has a parent",
            self.node(child).debug_description()
        );
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Insert `child` into `parent`'s child list at `index`.
    ///
    /// # Panics
    /// Panics if `child` already has a parent or `index` is past the end
    /// of the child list.
    pub fn insert_child(&mut self, parent: LayoutNodeId, index: usize, child: LayoutNodeId) {
        assert!(
            self.node(child).parent.is_none(),
            "{} already has a parent",
            self.node(child).debug_description()
        );
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.insert(index, child);
    }

    /// Detach `child` from its parent, leaving it (and its subtree)
    /// alive in the arena for re-wiring.
    ///
    /// # Panics
    /// Panics if `child` has no parent.
    pub fn remove_child(&mut self, child: LayoutNodeId) {
        let Some(parent) = self.node(child).parent else {
            panic!(
                "{} has no parent to detach from",
                self.node(child).debug_description()
            )
        };
        let position = self
            .node(parent)
            .children
            .iter()
            .position(|&c| c == child)
            .unwrap_or_else(|| {
                panic!(
                    "{} not found in parent child list",
                    self.node(child).debug_description()
                )
            });
        let _detached = self.node_mut(parent).children.remove(position);
        self.node_mut(child).parent = None;
    }

    /// Iterate the ancestors of `id`, nearest first, root last.
    #[must_use]
    pub fn ancestors(&self, id: LayoutNodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.node(id).parent,
        }
    }

    /// The nearest styled node at or above `id`.
    ///
    /// Style queries on unstyled nodes (text runs, breaks) resolve
    /// through this walk, so a text run sees the computed values of the
    /// element whose text it renders.
    ///
    /// # Panics
    /// Panics if no node on the chain carries style. The root must be
    /// styled before anything below it is queried; a tree violating that
    /// cannot be laid out and there is no value to substitute.
    fn resolved_style(&self, id: LayoutNodeId) -> &NodeStyle {
        if let Some(style) = self.node(id).style() {
            return style;
        }
        for ancestor in self.ancestors(id) {
            if let Some(style) = self.node(ancestor).style() {
                return style;
            }
        }
        panic!(
            "{} has no styled ancestor; the layout tree root must carry style",
            self.node(id).debug_description()
        )
    }

    /// The computed-style snapshot governing `id`, resolving through the
    /// nearest styled ancestor for nodes without their own style.
    ///
    /// # Panics
    /// Panics if neither `id` nor any ancestor carries style.
    #[must_use]
    pub fn computed_values(&self, id: LayoutNodeId) -> &ComputedValues {
        self.resolved_style(id).computed_values()
    }

    /// The font governing `id`, resolved like
    /// [`computed_values`](LayoutTree::computed_values).
    ///
    /// # Panics
    /// Panics if neither `id` nor any ancestor carries style.
    #[must_use]
    pub fn font(&self, id: LayoutNodeId) -> Rc<Font> {
        self.resolved_style(id).font()
    }

    /// The font governing `id` at `scale` times its size, for
    /// device-scaled paint contexts.
    ///
    /// # Panics
    /// Panics if neither `id` nor any ancestor carries style.
    #[must_use]
    pub fn scaled_font(
        &self,
        id: LayoutNodeId,
        scale: f32,
        matcher: &dyn FontMatcher,
    ) -> Rc<Font> {
        let description = self.resolved_style(id).font().description().scaled(scale);
        matcher.match_font(&description)
    }

    /// The used line-height (in CSS pixels) governing `id`, resolved like
    /// [`computed_values`](LayoutTree::computed_values).
    ///
    /// # Panics
    /// Panics if neither `id` nor any ancestor carries style.
    #[must_use]
    pub fn line_height(&self, id: LayoutNodeId) -> f32 {
        self.resolved_style(id).line_height()
    }

    /// The resolved list-style image URL governing `id`, if any.
    ///
    /// # Panics
    /// Panics if neither `id` nor any ancestor carries style.
    #[must_use]
    pub fn list_style_image(&self, id: LayoutNodeId) -> Option<&str> {
        self.resolved_style(id).list_style_image()
    }

    /// Apply a cascaded property bundle to `id`.
    ///
    /// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
    ///
    /// Replaces the node's entire style-derived state as one unit:
    /// the computed snapshot, the matched font, the used line-height,
    /// and the node's visibility flag. Nothing from a previous
    /// application survives, so repeated restyles cannot accumulate
    /// stale state.
    pub fn apply_style(
        &mut self,
        id: LayoutNodeId,
        properties: &StyleProperties,
        matcher: &dyn FontMatcher,
    ) {
        let computed = properties.to_computed_values();
        let font = matcher.match_font(&FontDescription {
            family: computed.font_family.clone(),
            size_px: computed.font_size,
            weight: computed.font_weight,
            style: computed.font_style,
        });
        let line_height = resolve_line_height(computed.line_height, computed.font_size, &font);
        let visible = !matches!(
            computed.visibility,
            Visibility::Hidden | Visibility::Collapse
        );
        let list_style_image = computed.list_style_image.clone();

        let node = self.node_mut(id);
        node.set_style(NodeStyle::new(
            computed,
            font,
            line_height,
            list_style_image,
        ));
        node.set_visible(visible);
    }

    /// Create a detached anonymous box of `kind` that continues `source`'s
    /// inherited style.
    ///
    /// [§ 2.1 Anonymous Boxes](https://www.w3.org/TR/css-display-3/#anonymous)
    ///
    /// "Inherited properties take their values from the element ancestors
    /// of the anonymous box; non-inherited properties take their initial
    /// values."
    ///
    /// The wrapper carries its own style snapshot: inherited properties
    /// are copied from `source`'s governing style, everything else resets
    /// to its initial value. The font and used line-height carry over
    /// as resolved, since they derive only from inherited properties.
    /// The caller wires the wrapper into the tree.
    ///
    /// # Panics
    /// Panics if `source` has no styled ancestor.
    pub fn create_anonymous_wrapper(
        &mut self,
        source: LayoutNodeId,
        kind: NodeKind,
    ) -> LayoutNodeId {
        let (computed, font, line_height) = {
            let style = self.resolved_style(source);
            (
                ComputedValues::inherited_from(style.computed_values()),
                style.font(),
                style.line_height(),
            )
        };
        let visible = !matches!(
            computed.visibility,
            Visibility::Hidden | Visibility::Collapse
        );
        let list_style_image = computed.list_style_image.clone();
        let browsing_context = self.node(source).browsing_context();

        let wrapper = self.new_node(kind, None, browsing_context);
        let node = self.node_mut(wrapper);
        node.set_style(NodeStyle::new(
            computed,
            font,
            line_height,
            list_style_image,
        ));
        node.set_visible(visible);
        wrapper
    }

    /// Move the table element's positioning-related computed values from
    /// the table box onto its wrapper box.
    ///
    /// [§ 17.4 Tables in the visual formatting model](https://www.w3.org/TR/CSS2/tables.html#model)
    ///
    /// Copies 'position', 'top'/'right'/'bottom'/'left', 'float', 'clear',
    /// and the margins to the wrapper, then resets them on the table box
    /// so they cannot apply twice.
    ///
    /// # Panics
    /// Panics if either node carries no style of its own.
    pub fn hoist_table_box_values_to_wrapper(
        &mut self,
        table: LayoutNodeId,
        wrapper: LayoutNodeId,
    ) {
        let (position, inset, float, clear, margin) = {
            let description = self.node(table).debug_description();
            let values = self
                .node(table)
                .style()
                .unwrap_or_else(|| panic!("{description} has no style to hoist"))
                .computed_values();
            (
                values.position,
                values.inset,
                values.float,
                values.clear,
                values.margin,
            )
        };
        {
            let description = self.node(wrapper).debug_description();
            let values = self
                .node_mut(wrapper)
                .style_mut()
                .unwrap_or_else(|| panic!("{description} has no style to receive hoisted values"))
                .computed_values_mut();
            values.position = position;
            values.inset = inset;
            values.float = float;
            values.clear = clear;
            values.margin = margin;
        }
        self.reset_table_box_values_taken_by_wrapper(table);
    }

    /// Reset the positioning-related computed values of a table box whose
    /// wrapper has taken them over.
    ///
    /// [§ 17.4 Tables in the visual formatting model](https://www.w3.org/TR/CSS2/tables.html#model)
    ///
    /// "The computed values of properties 'position', 'float', 'margin-*',
    /// 'top', 'right', 'bottom', and 'left' on the table element are used
    /// on the table wrapper box and not the table box; all other values of
    /// non-inheritable properties are used on the table box."
    ///
    /// The wrapper has already been styled with these values; clearing
    /// them here keeps them from applying twice.
    ///
    /// # Panics
    /// Panics if the node at `id` carries no style of its own; only a
    /// styled table box can hand values over to its wrapper.
    pub fn reset_table_box_values_taken_by_wrapper(&mut self, id: LayoutNodeId) {
        let description = self.node(id).debug_description();
        let style = self
            .node_mut(id)
            .style_mut()
            .unwrap_or_else(|| panic!("{description} has no style to reset"));
        let values = style.computed_values_mut();
        values.position = PositionType::Static;
        values.float = None;
        values.clear = None;
        values.margin = AutoEdgeSizes::ZERO;
        values.inset = AutoEdgeSizes::AUTO;
    }

    /// [§ 9.3.2](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    ///
    /// True if `id`'s governing style positions it (anything other than
    /// `position: static`).
    #[must_use]
    pub fn is_positioned(&self, id: LayoutNodeId) -> bool {
        self.computed_values(id).is_positioned()
    }

    /// [§ 9.6 Absolute positioning](https://www.w3.org/TR/CSS2/visuren.html#absolute-positioning)
    ///
    /// True for `position: absolute` and `position: fixed`.
    #[must_use]
    pub fn is_absolutely_positioned(&self, id: LayoutNodeId) -> bool {
        self.computed_values(id).is_absolutely_positioned()
    }

    /// [§ 9.3.1 Fixed positioning](https://www.w3.org/TR/CSS2/visuren.html#fixed-positioning)
    ///
    /// True for `position: fixed` only.
    #[must_use]
    pub fn is_fixed_position(&self, id: LayoutNodeId) -> bool {
        self.computed_values(id).is_fixed_position()
    }

    /// [§ 9.7](https://www.w3.org/TR/CSS2/visuren.html#dis-pos-flo)
    ///
    /// True if `id` floats; always false for absolutely positioned nodes,
    /// whatever their `float` property says.
    #[must_use]
    pub fn is_floating(&self, id: LayoutNodeId) -> bool {
        self.computed_values(id).is_floating()
    }

    /// True if `id`'s governing display is plain `inline`.
    #[must_use]
    pub fn is_inline(&self, id: LayoutNodeId) -> bool {
        self.computed_values(id).display.is_inline()
    }

    /// True if `id`'s governing display is `inline-block`.
    #[must_use]
    pub fn is_inline_block(&self, id: LayoutNodeId) -> bool {
        self.computed_values(id).display.is_inline_block()
    }

    /// True if `id`'s governing display is `inline-table`.
    #[must_use]
    pub fn is_inline_table(&self, id: LayoutNodeId) -> bool {
        self.computed_values(id).display.is_inline_table()
    }

    /// Whether `id` is taken out of normal flow within a formatting
    /// context of the given type.
    ///
    /// [§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
    ///
    /// Absolutely positioned boxes are out of flow everywhere. Floats are
    /// out of flow only in a block formatting context; elsewhere the
    /// 'float' property does not take the box out of flow (an inline
    /// formatting context hands its floats to the containing block
    /// formatting context, which classifies them itself).
    #[must_use]
    pub fn is_out_of_flow(&self, id: LayoutNodeId, context: FormattingContextType) -> bool {
        if self.is_absolutely_positioned(id) {
            return true;
        }
        match context {
            FormattingContextType::Block => self.is_floating(id),
            FormattingContextType::Inline
            | FormattingContextType::Flex
            | FormattingContextType::Grid
            | FormattingContextType::Table => false,
        }
    }

    /// [§ 9.9 Layered presentation](https://www.w3.org/TR/CSS2/visuren.html#layers)
    ///
    /// True if `id` establishes a stacking context: the tree root and the
    /// root element always do; so do fixed and sticky boxes, positioned
    /// boxes with a non-auto z-index, and boxes with opacity below 1.
    #[must_use]
    pub fn establishes_stacking_context(&self, id: LayoutNodeId) -> bool {
        if self.node(id).is_viewport() || self.is_root_element(id) {
            return true;
        }
        let values = self.computed_values(id);
        if matches!(
            values.position,
            PositionType::Fixed | PositionType::Sticky
        ) {
            return true;
        }
        if values.is_positioned() && !matches!(values.z_index, ZIndex::Auto) {
            return true;
        }
        values.opacity < 1.0
    }

    /// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// "If the element has 'position: absolute', the containing block is
    /// established by the nearest ancestor with a 'position' of
    /// 'absolute', 'relative' or 'fixed'."
    #[must_use]
    pub fn can_contain_boxes_with_position_absolute(&self, id: LayoutNodeId) -> bool {
        self.node(id).is_viewport() || self.is_positioned(id)
    }

    /// The node whose content box is `id`'s containing block, or `None`
    /// for the tree root.
    ///
    /// [§ 10.1](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// Text runs belong to the nearest block container. Fixed boxes are
    /// contained by the viewport; absolute boxes by the nearest positioned
    /// ancestor, falling back to the viewport; everything else by the
    /// nearest block-container ancestor.
    #[must_use]
    pub fn containing_block(&self, id: LayoutNodeId) -> Option<LayoutNodeId> {
        let node = self.node(id);
        if node.is_viewport() || node.parent.is_none() {
            return None;
        }

        if node.is_text_node() {
            return self.nearest_block_container_ancestor(id);
        }
        match self.computed_values(id).position {
            PositionType::Fixed => Some(self.root()),
            PositionType::Absolute => self
                .ancestors(id)
                .find(|&ancestor| self.can_contain_boxes_with_position_absolute(ancestor))
                .or_else(|| Some(self.root())),
            PositionType::Static | PositionType::Relative | PositionType::Sticky => {
                self.nearest_block_container_ancestor(id)
            }
        }
    }

    fn nearest_block_container_ancestor(&self, id: LayoutNodeId) -> Option<LayoutNodeId> {
        self.ancestors(id)
            .find(|&ancestor| self.node(ancestor).is_block_container())
    }

    /// True if `id` is the layout node of the document's root element:
    /// a non-anonymous child of the viewport.
    #[must_use]
    pub fn is_root_element(&self, id: LayoutNodeId) -> bool {
        let node = self.node(id);
        if node.dom_node().is_none() {
            return false;
        }
        node.parent
            .is_some_and(|parent| self.node(parent).is_viewport())
    }
}

/// Walks parent links from a node up to the root.
///
/// Yields the nearest ancestor first and the root last; a detached node
/// yields nothing.
pub struct AncestorIterator<'a> {
    tree: &'a LayoutTree,
    current: Option<LayoutNodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = LayoutNodeId;

    fn next(&mut self) -> Option<LayoutNodeId> {
        let id = self.current?;
        self.current = self.tree.node(id).parent;
        Some(id)
    }
}

/// Resolve a specified line-height to a used pixel value against the
/// matched font.
///
/// [§ 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
///
/// 'normal' uses the font's natural line spacing; lengths are used as-is;
/// percentages and numbers multiply the element's own font size.
fn resolve_line_height(line_height: LineHeight, font_size: f32, font: &Font) -> f32 {
    match line_height {
        LineHeight::Normal => font.line_spacing(),
        LineHeight::Px(px) => px,
        LineHeight::Percentage(percent) => percent / 100.0 * font_size,
        LineHeight::Number(factor) => factor * font_size,
    }
}
