//! Layout node identity, flags, and fast kind dispatch.
//!
//! [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
//!
//! Formatting and paint walk every node of the layout tree on every pass,
//! and constantly need to answer "is this a box?", "is this a table?".
//! A general runtime type query is too slow for that, so the concrete
//! type of every node is recorded once, at construction, as a
//! [`NodeKind`] tag, and all type tests are O(1) comparisons against it.

use std::rc::Rc;

use serde::Serialize;
use strum_macros::Display;

use crate::box_model::BoxModelMetrics;
use crate::dom::{BrowsingContextId, DomNodeId};
use crate::font::Font;
use crate::paint::{Paintable, PaintableKind};
use crate::style::ComputedValues;
use crate::tree::LayoutNodeId;

/// The closed set of concrete layout node types.
///
/// [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// Every layout node is constructed as exactly one of these kinds and
/// never changes kind afterwards. The tier predicates on this enum
/// ([`is_box`](NodeKind::is_box), [`is_block_container`](NodeKind::is_block_container),
/// [`is_svg_box`](NodeKind::is_svg_box), [`carries_box_model`](NodeKind::carries_box_model))
/// answer for groups of kinds, mirroring the refinement hierarchy:
/// every block container is a box, every box carries box-model metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum NodeKind {
    /// The root of the layout tree; the initial containing block.
    ///
    /// [§ 2.1 The viewport](https://www.w3.org/TR/CSS2/visuren.html#viewport)
    Viewport,
    /// A block-level box that contains either only block-level boxes or
    /// only inline-level content.
    ///
    /// [§ 2.1 Block containers](https://www.w3.org/TR/css-display-3/#block-container)
    BlockContainer,
    /// A forced line break (`<br>`). Participates in inline layout only.
    Break,
    /// A text run; the most basic box-generating content.
    ///
    /// [§ 2.5 Text Runs](https://www.w3.org/TR/css-display-3/#text-nodes)
    Text,
    /// The outermost `<svg>` element; a replaced box from the outside,
    /// an SVG viewport from the inside.
    SvgRoot,
    /// A shape-generating SVG element (`<path>`, `<rect>`, `<circle>`...).
    SvgGeometryBox,
    /// A `<label>` element; a block container with activation behavior.
    Label,
    /// An element whose content is outside the scope of the CSS
    /// formatting model, such as an image.
    ///
    /// [§ 10.3.2 Replaced elements](https://www.w3.org/TR/CSS2/visudet.html#inline-replaced-width)
    ReplacedBox,
    /// The principal box of a `display: list-item` element.
    ///
    /// [§ 3 Declaring a List Item](https://www.w3.org/TR/css-lists-3/#declaring)
    ListItemBox,
    /// The generated marker box of a list item.
    ///
    /// [§ 3.1 The ::marker pseudo-element](https://www.w3.org/TR/css-lists-3/#marker-pseudo)
    ListItemMarkerBox,
    /// The anonymous box generated around a table to hold the table box
    /// and its captions.
    ///
    /// [§ 17.4 Tables in the visual formatting model](https://www.w3.org/TR/CSS2/tables.html#model)
    TableWrapper,
    /// The table grid box itself.
    ///
    /// [§ 17.4](https://www.w3.org/TR/CSS2/tables.html#model)
    Table,
}

impl NodeKind {
    /// True for every kind that generates a box (everything except text
    /// runs and forced breaks).
    #[must_use]
    pub const fn is_box(self) -> bool {
        !matches!(self, NodeKind::Text | NodeKind::Break)
    }

    /// True for every kind that is a block container.
    ///
    /// [§ 2.1 Block containers](https://www.w3.org/TR/css-display-3/#block-container)
    #[must_use]
    pub const fn is_block_container(self) -> bool {
        matches!(
            self,
            NodeKind::BlockContainer
                | NodeKind::Viewport
                | NodeKind::Label
                | NodeKind::ListItemBox
                | NodeKind::TableWrapper
        )
    }

    /// True for every SVG layout kind.
    #[must_use]
    pub const fn is_svg_box(self) -> bool {
        matches!(self, NodeKind::SvgRoot | NodeKind::SvgGeometryBox)
    }

    /// True for every kind that is laid out as a replaced box.
    ///
    /// The SVG root is replaced from the perspective of its parent
    /// formatting context.
    #[must_use]
    pub const fn is_replaced_box(self) -> bool {
        matches!(self, NodeKind::ReplacedBox | NodeKind::SvgRoot)
    }

    /// True for every kind that owns mutable box-model metrics.
    ///
    /// Coincides with the box tier: text runs and breaks have no margin,
    /// border, or padding of their own.
    #[must_use]
    pub const fn carries_box_model(self) -> bool {
        self.is_box()
    }
}

/// How a document selection overlaps this node.
///
/// [Selection API § 2](https://www.w3.org/TR/selection-api/#definition)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
pub enum SelectionState {
    /// No selection touches this node.
    #[default]
    None,
    /// The selection starts in this node.
    Start,
    /// The selection ends in this node.
    End,
    /// The selection starts and ends in this node.
    StartAndEnd,
    /// The selection starts before and ends after this node.
    Full,
}

/// A kind test usable with [`LayoutNode::fast_is`].
///
/// Implemented by the zero-sized markers in [`fast`]. Each marker routes
/// to one of the [`NodeKind`] predicates, so generic tree walks get a
/// uniform `node.fast_is::<K>()` call site at the same O(1) cost as
/// calling the predicate directly.
pub trait FastKind {
    /// Does `kind` satisfy this test?
    fn matches(kind: NodeKind) -> bool;
}

/// Zero-sized markers for [`LayoutNode::fast_is`], one per kind predicate.
pub mod fast {
    use super::{FastKind, NodeKind};

    macro_rules! fast_kind_marker {
        // Tier markers route to a NodeKind predicate method.
        ($(#[$doc:meta])* $name:ident => $predicate:ident) => {
            $(#[$doc])*
            pub struct $name;

            impl FastKind for $name {
                fn matches(kind: NodeKind) -> bool {
                    NodeKind::$predicate(kind)
                }
            }
        };
        // Concrete markers test a single variant.
        ($(#[$doc:meta])* $name:ident is $variant:ident) => {
            $(#[$doc])*
            pub struct $name;

            impl FastKind for $name {
                fn matches(kind: NodeKind) -> bool {
                    matches!(kind, NodeKind::$variant)
                }
            }
        };
    }

    fast_kind_marker!(
        /// Any box-generating kind.
        AnyBox => is_box
    );
    fast_kind_marker!(
        /// Any block container kind.
        BlockContainer => is_block_container
    );
    fast_kind_marker!(
        /// Any kind that owns box-model metrics.
        MetricBox => carries_box_model
    );
    fast_kind_marker!(
        /// Any SVG layout kind.
        SvgBox => is_svg_box
    );
    fast_kind_marker!(
        /// Any replaced-box kind.
        ReplacedBox => is_replaced_box
    );
    fast_kind_marker!(
        /// A text run.
        TextNode is Text
    );
    fast_kind_marker!(
        /// A forced line break.
        BreakNode is Break
    );
    fast_kind_marker!(
        /// The viewport root.
        Viewport is Viewport
    );
    fast_kind_marker!(
        /// A label box.
        Label is Label
    );
    fast_kind_marker!(
        /// The outermost SVG box.
        SvgRoot is SvgRoot
    );
    fast_kind_marker!(
        /// An SVG shape box.
        SvgGeometryBox is SvgGeometryBox
    );
    fast_kind_marker!(
        /// A list-item principal box.
        ListItemBox is ListItemBox
    );
    fast_kind_marker!(
        /// A list-item marker box.
        ListItemMarkerBox is ListItemMarkerBox
    );
    fast_kind_marker!(
        /// A table wrapper box.
        TableWrapper is TableWrapper
    );
    fast_kind_marker!(
        /// A table grid box.
        Table is Table
    );
}

/// The style-derived state of a node that carries its own style.
///
/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// Built as a unit by style application and swapped in atomically:
/// the snapshot, the matched font, the resolved line height, and the
/// resolved list-style image always belong to the same restyle pass.
#[derive(Debug, Clone)]
pub struct NodeStyle {
    computed_values: ComputedValues,
    font: Rc<Font>,
    line_height: f32,
    list_style_image: Option<String>,
}

impl NodeStyle {
    /// Bundle the derived state of one style application.
    #[must_use]
    pub const fn new(
        computed_values: ComputedValues,
        font: Rc<Font>,
        line_height: f32,
        list_style_image: Option<String>,
    ) -> NodeStyle {
        NodeStyle {
            computed_values,
            font,
            line_height,
            list_style_image,
        }
    }

    /// The immutable computed-style snapshot.
    #[must_use]
    pub const fn computed_values(&self) -> &ComputedValues {
        &self.computed_values
    }

    /// The font matched for this node's family/size/weight/style.
    #[must_use]
    pub fn font(&self) -> Rc<Font> {
        Rc::clone(&self.font)
    }

    /// The used line-height in CSS pixels.
    #[must_use]
    pub const fn line_height(&self) -> f32 {
        self.line_height
    }

    /// The resolved list-style image URL, if any.
    #[must_use]
    pub fn list_style_image(&self) -> Option<&str> {
        self.list_style_image.as_deref()
    }

    pub(crate) fn computed_values_mut(&mut self) -> &mut ComputedValues {
        &mut self.computed_values
    }
}

/// One node of the layout tree.
///
/// Mirrors a renderable document node (or is synthesized anonymously to
/// satisfy formatting-model structure) and carries resolved style and
/// box geometry for the formatting and paint passes. Nodes are created
/// by the tree builder through
/// [`LayoutTree::new_node`](crate::tree::LayoutTree::new_node) and live
/// in the tree's arena; parent and child links are arena indices.
#[derive(Debug)]
pub struct LayoutNode {
    kind: NodeKind,
    serial_id: u64,
    dom_node: Option<DomNodeId>,
    browsing_context: BrowsingContextId,

    anonymous: bool,
    generated: bool,
    visible: bool,
    is_flex_item: bool,
    children_are_inline: bool,
    selection_state: SelectionState,

    style: Option<NodeStyle>,
    box_model: Option<BoxModelMetrics>,
    paintable: Option<Rc<Paintable>>,

    pub(crate) parent: Option<LayoutNodeId>,
    pub(crate) children: Vec<LayoutNodeId>,
}

impl LayoutNode {
    /// Construct a node of the given kind.
    ///
    /// A node without a document back-reference is anonymous by
    /// definition; the flag is derived here so the two can never
    /// disagree. Box-tier kinds get zeroed box-model metrics up front.
    pub(crate) fn new(
        kind: NodeKind,
        dom_node: Option<DomNodeId>,
        browsing_context: BrowsingContextId,
        serial_id: u64,
    ) -> LayoutNode {
        LayoutNode {
            kind,
            serial_id,
            anonymous: dom_node.is_none(),
            dom_node,
            browsing_context,
            generated: false,
            visible: true,
            is_flex_item: false,
            children_are_inline: false,
            selection_state: SelectionState::None,
            style: None,
            box_model: kind.carries_box_model().then(BoxModelMetrics::default),
            paintable: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// The concrete kind this node was constructed as.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Construction serial number; unique and strictly increasing across
    /// the lifetime of the owning tree, independent of tree position.
    #[must_use]
    pub const fn serial_id(&self) -> u64 {
        self.serial_id
    }

    /// The originating document node, or `None` for anonymous and
    /// generated boxes.
    #[must_use]
    pub const fn dom_node(&self) -> Option<DomNodeId> {
        self.dom_node
    }

    /// The browsing context this node was built for.
    #[must_use]
    pub const fn browsing_context(&self) -> BrowsingContextId {
        self.browsing_context
    }

    /// True if this node has no originating document node.
    ///
    /// [§ 2.1 Anonymous Boxes](https://www.w3.org/TR/css-display-3/#anonymous)
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// True if this node renders generated content (`::before`/`::after`).
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.generated
    }

    /// Mark this node as generated content.
    pub fn set_generated(&mut self, generated: bool) {
        self.generated = generated;
    }

    /// True unless the last applied style hid this node
    /// (`visibility: hidden`/`collapse`).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide this node without restyling.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// True if the parent formatting context treats this node as a flex
    /// item.
    ///
    /// [§ 4 Flex Items](https://www.w3.org/TR/css-flexbox-1/#flex-items)
    #[must_use]
    pub const fn is_flex_item(&self) -> bool {
        self.is_flex_item
    }

    /// Set by the tree builder when the parent establishes a flex
    /// formatting context.
    pub fn set_flex_item(&mut self, is_flex_item: bool) {
        self.is_flex_item = is_flex_item;
    }

    /// True if all in-flow children of this node are inline-level.
    ///
    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    #[must_use]
    pub const fn children_are_inline(&self) -> bool {
        self.children_are_inline
    }

    /// Set by the tree builder after box generation for this subtree.
    pub fn set_children_are_inline(&mut self, value: bool) {
        self.children_are_inline = value;
    }

    /// How the active document selection overlaps this node.
    #[must_use]
    pub const fn selection_state(&self) -> SelectionState {
        self.selection_state
    }

    /// Update the selection overlap for this node.
    pub fn set_selection_state(&mut self, state: SelectionState) {
        self.selection_state = state;
    }

    /// True if this node carries its own computed-style snapshot.
    ///
    /// Nodes without their own style (text runs, breaks) resolve style
    /// queries through their nearest styled ancestor.
    #[must_use]
    pub const fn has_style(&self) -> bool {
        self.style.is_some()
    }

    /// This node's own style-derived state, if it has one.
    #[must_use]
    pub const fn style(&self) -> Option<&NodeStyle> {
        self.style.as_ref()
    }

    /// Replace this node's style-derived state wholesale.
    pub(crate) fn set_style(&mut self, style: NodeStyle) {
        self.style = Some(style);
    }

    pub(crate) fn style_mut(&mut self) -> Option<&mut NodeStyle> {
        self.style.as_mut()
    }

    /// Generic O(1) kind test; `K` selects which predicate to apply.
    ///
    /// Gives generic tree walks a uniform call site:
    /// `node.fast_is::<fast::TableWrapper>()` costs the same as calling
    /// [`NodeKind::is_box`]-style predicates directly.
    #[must_use]
    pub fn fast_is<K: FastKind>(&self) -> bool {
        K::matches(self.kind)
    }

    /// True if this node generates a box.
    #[must_use]
    pub const fn is_box(&self) -> bool {
        self.kind.is_box()
    }

    /// True if this node is a block container.
    #[must_use]
    pub const fn is_block_container(&self) -> bool {
        self.kind.is_block_container()
    }

    /// True if this node is a forced line break.
    #[must_use]
    pub const fn is_break_node(&self) -> bool {
        matches!(self.kind, NodeKind::Break)
    }

    /// True if this node is a text run.
    #[must_use]
    pub const fn is_text_node(&self) -> bool {
        matches!(self.kind, NodeKind::Text)
    }

    /// True if this node is the viewport root.
    #[must_use]
    pub const fn is_viewport(&self) -> bool {
        matches!(self.kind, NodeKind::Viewport)
    }

    /// True if this node is any SVG layout box.
    #[must_use]
    pub const fn is_svg_box(&self) -> bool {
        self.kind.is_svg_box()
    }

    /// True if this node is an SVG shape box.
    #[must_use]
    pub const fn is_svg_geometry_box(&self) -> bool {
        matches!(self.kind, NodeKind::SvgGeometryBox)
    }

    /// True if this node is the outermost SVG box.
    #[must_use]
    pub const fn is_svg_root(&self) -> bool {
        matches!(self.kind, NodeKind::SvgRoot)
    }

    /// True if this node is a label box.
    #[must_use]
    pub const fn is_label(&self) -> bool {
        matches!(self.kind, NodeKind::Label)
    }

    /// True if this node is laid out as a replaced box.
    #[must_use]
    pub const fn is_replaced_box(&self) -> bool {
        self.kind.is_replaced_box()
    }

    /// True if this node is a list-item principal box.
    #[must_use]
    pub const fn is_list_item_box(&self) -> bool {
        matches!(self.kind, NodeKind::ListItemBox)
    }

    /// True if this node is a list-item marker box.
    #[must_use]
    pub const fn is_list_item_marker_box(&self) -> bool {
        matches!(self.kind, NodeKind::ListItemMarkerBox)
    }

    /// True if this node is a table wrapper box.
    #[must_use]
    pub const fn is_table_wrapper(&self) -> bool {
        matches!(self.kind, NodeKind::TableWrapper)
    }

    /// True if this node is a table grid box.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self.kind, NodeKind::Table)
    }

    /// True if this node owns box-model metrics.
    #[must_use]
    pub const fn is_metric_box(&self) -> bool {
        self.kind.carries_box_model()
    }

    /// This node's box-model metrics.
    ///
    /// # Panics
    /// Panics if this kind does not carry box-model metrics. Geometry
    /// queries on text runs or breaks are programming errors; continuing
    /// with made-up metrics would corrupt layout downstream.
    #[must_use]
    pub fn box_model(&self) -> &BoxModelMetrics {
        self.box_model
            .as_ref()
            .unwrap_or_else(|| panic!("{} does not carry box-model metrics", self.kind))
    }

    /// Mutable access to this node's box-model metrics, for the layout
    /// algorithms that write used values.
    ///
    /// # Panics
    /// Panics if this kind does not carry box-model metrics.
    pub fn box_model_mut(&mut self) -> &mut BoxModelMetrics {
        let kind = self.kind;
        self.box_model
            .as_mut()
            .unwrap_or_else(|| panic!("{kind} does not carry box-model metrics"))
    }

    /// Create the paint-tree counterpart for this node's concrete kind.
    ///
    /// Block containers own the line boxes of their inline content;
    /// other boxes paint plain decorations; list markers paint generated
    /// content; text runs and breaks have no counterpart of their own
    /// (their fragments belong to the containing block's lines).
    #[must_use]
    pub fn create_paintable(&self) -> Option<Paintable> {
        let kind = match self.kind {
            NodeKind::Viewport
            | NodeKind::BlockContainer
            | NodeKind::Label
            | NodeKind::ListItemBox
            | NodeKind::TableWrapper => PaintableKind::WithLines,
            NodeKind::Table
            | NodeKind::ReplacedBox
            | NodeKind::SvgRoot
            | NodeKind::SvgGeometryBox => PaintableKind::Box,
            NodeKind::ListItemMarkerBox => PaintableKind::Marker,
            NodeKind::Text | NodeKind::Break => return None,
        };
        Some(Paintable::new(kind, self.serial_id))
    }

    /// The paint-tree counterpart attached to this node, if any.
    #[must_use]
    pub fn paintable(&self) -> Option<&Rc<Paintable>> {
        self.paintable.as_ref()
    }

    /// Attach (or replace) this node's paint-tree counterpart.
    ///
    /// Replacing an existing counterpart is legal - the paint tree is
    /// rebuilt without rebuilding the layout tree - and has no effect
    /// beyond the store.
    pub fn set_paintable(&mut self, paintable: Rc<Paintable>) {
        self.paintable = Some(paintable);
    }

    /// A short human-readable description for logs and test failures,
    /// e.g. `BlockContainer#7 (anonymous)`.
    #[must_use]
    pub fn debug_description(&self) -> String {
        if self.anonymous {
            format!("{}#{} (anonymous)", self.kind, self.serial_id)
        } else {
            format!("{}#{}", self.kind, self.serial_id)
        }
    }
}
