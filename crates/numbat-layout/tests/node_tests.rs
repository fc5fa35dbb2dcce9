//! Integration tests for layout node kinds, flags, and paint counterparts.

use std::rc::Rc;

use numbat_layout::node::fast;
use numbat_layout::{
    ApproximateFontMatcher, BrowsingContextId, DomNodeId, LayoutNodeId, LayoutTree, NodeKind,
    Paintable, PaintableKind, SelectionState, StyleProperties,
};

const ALL_KINDS: [NodeKind; 12] = [
    NodeKind::Viewport,
    NodeKind::BlockContainer,
    NodeKind::Break,
    NodeKind::Text,
    NodeKind::SvgRoot,
    NodeKind::SvgGeometryBox,
    NodeKind::Label,
    NodeKind::ReplacedBox,
    NodeKind::ListItemBox,
    NodeKind::ListItemMarkerBox,
    NodeKind::TableWrapper,
    NodeKind::Table,
];

/// Helper: a one-node tree whose root is a styled viewport.
fn styled_viewport_tree() -> (LayoutTree, LayoutNodeId) {
    let mut tree = LayoutTree::new();
    let root = tree.new_node(
        NodeKind::Viewport,
        Some(DomNodeId(0)),
        BrowsingContextId(1),
    );
    tree.apply_style(root, &StyleProperties::default(), &ApproximateFontMatcher);
    (tree, root)
}

fn node_of_kind(kind: NodeKind) -> (LayoutTree, LayoutNodeId) {
    let (mut tree, root) = styled_viewport_tree();
    let id = tree.new_node(kind, Some(DomNodeId(1)), BrowsingContextId(1));
    tree.append_child(root, id);
    (tree, id)
}

// ---------------------------------------------------------------------------
// Kind tiers
// ---------------------------------------------------------------------------

#[test]
fn test_box_tier_excludes_text_and_break() {
    for kind in ALL_KINDS {
        let expected = !matches!(kind, NodeKind::Text | NodeKind::Break);
        assert_eq!(kind.is_box(), expected, "is_box disagrees for {kind}");
    }
}

#[test]
fn test_block_container_tier_membership() {
    let members = [
        NodeKind::Viewport,
        NodeKind::BlockContainer,
        NodeKind::Label,
        NodeKind::ListItemBox,
        NodeKind::TableWrapper,
    ];
    for kind in ALL_KINDS {
        assert_eq!(
            kind.is_block_container(),
            members.contains(&kind),
            "is_block_container disagrees for {kind}"
        );
    }
}

#[test]
fn test_every_block_container_is_a_box() {
    for kind in ALL_KINDS {
        if kind.is_block_container() {
            assert!(kind.is_box(), "{kind} is a block container but not a box");
        }
    }
}

#[test]
fn test_svg_and_replaced_tiers() {
    for kind in ALL_KINDS {
        assert_eq!(
            kind.is_svg_box(),
            matches!(kind, NodeKind::SvgRoot | NodeKind::SvgGeometryBox),
            "is_svg_box disagrees for {kind}"
        );
        assert_eq!(
            kind.is_replaced_box(),
            matches!(kind, NodeKind::ReplacedBox | NodeKind::SvgRoot),
            "is_replaced_box disagrees for {kind}"
        );
    }
}

#[test]
fn test_box_model_presence_coincides_with_box_tier() {
    for kind in ALL_KINDS {
        assert_eq!(
            kind.carries_box_model(),
            kind.is_box(),
            "box-model presence disagrees with box tier for {kind}"
        );
    }
}

// ---------------------------------------------------------------------------
// Fast kind dispatch
// ---------------------------------------------------------------------------

#[test]
fn test_fast_is_concrete_kind() {
    let (tree, id) = node_of_kind(NodeKind::TableWrapper);
    let node = tree.get(id).unwrap();
    assert!(node.fast_is::<fast::TableWrapper>());
    assert!(!node.fast_is::<fast::Table>());
    assert!(!node.fast_is::<fast::TextNode>());
}

#[test]
fn test_fast_is_tier_markers_agree_with_predicates() {
    for kind in ALL_KINDS {
        let (tree, id) = node_of_kind(kind);
        let node = tree.get(id).unwrap();
        assert_eq!(node.fast_is::<fast::AnyBox>(), node.is_box());
        assert_eq!(
            node.fast_is::<fast::BlockContainer>(),
            node.is_block_container()
        );
        assert_eq!(node.fast_is::<fast::MetricBox>(), node.is_metric_box());
        assert_eq!(node.fast_is::<fast::SvgBox>(), node.is_svg_box());
        assert_eq!(node.fast_is::<fast::ReplacedBox>(), node.is_replaced_box());
    }
}

// ---------------------------------------------------------------------------
// Identity and flags
// ---------------------------------------------------------------------------

#[test]
fn test_serial_ids_strictly_increase_in_creation_order() {
    let (mut tree, root) = styled_viewport_tree();
    let a = tree.new_node(NodeKind::BlockContainer, Some(DomNodeId(1)), BrowsingContextId(1));
    let b = tree.new_node(NodeKind::Text, Some(DomNodeId(2)), BrowsingContextId(1));
    tree.append_child(root, a);
    tree.append_child(a, b);
    let root_serial = tree.get(root).unwrap().serial_id();
    let a_serial = tree.get(a).unwrap().serial_id();
    let b_serial = tree.get(b).unwrap().serial_id();
    assert!(root_serial < a_serial, "root created before a");
    assert!(a_serial < b_serial, "a created before b");
}

#[test]
fn test_anonymous_iff_no_dom_node() {
    let mut tree = LayoutTree::new();
    let with_dom = tree.new_node(
        NodeKind::BlockContainer,
        Some(DomNodeId(7)),
        BrowsingContextId(1),
    );
    let without_dom = tree.new_node(NodeKind::BlockContainer, None, BrowsingContextId(1));
    assert!(!tree.get(with_dom).unwrap().is_anonymous());
    assert!(tree.get(without_dom).unwrap().is_anonymous());
    assert_eq!(tree.get(without_dom).unwrap().dom_node(), None);
}

#[test]
fn test_flag_defaults() {
    let (tree, id) = node_of_kind(NodeKind::BlockContainer);
    let node = tree.get(id).unwrap();
    assert!(node.is_visible());
    assert!(!node.is_generated());
    assert!(!node.is_flex_item());
    assert!(!node.children_are_inline());
    assert_eq!(node.selection_state(), SelectionState::None);
}

#[test]
fn test_selection_state_round_trip() {
    let (mut tree, id) = node_of_kind(NodeKind::Text);
    tree.get_mut(id)
        .unwrap()
        .set_selection_state(SelectionState::StartAndEnd);
    assert_eq!(
        tree.get(id).unwrap().selection_state(),
        SelectionState::StartAndEnd
    );
}

#[test]
fn test_debug_description_marks_anonymous_nodes() {
    let (mut tree, _root) = styled_viewport_tree();
    let named = tree.new_node(
        NodeKind::BlockContainer,
        Some(DomNodeId(3)),
        BrowsingContextId(1),
    );
    let anon = tree.new_node(NodeKind::BlockContainer, None, BrowsingContextId(1));
    let named_description = tree.get(named).unwrap().debug_description();
    let anon_description = tree.get(anon).unwrap().debug_description();
    assert!(
        named_description.starts_with("BlockContainer#"),
        "got {named_description}"
    );
    assert!(!named_description.contains("anonymous"));
    assert!(anon_description.contains("(anonymous)"), "got {anon_description}");
}

// ---------------------------------------------------------------------------
// Box-model metrics access
// ---------------------------------------------------------------------------

#[test]
fn test_box_kinds_have_zeroed_metrics_at_construction() {
    let (tree, id) = node_of_kind(NodeKind::BlockContainer);
    let metrics = tree.get(id).unwrap().box_model();
    assert!(metrics.content.width.abs() < f32::EPSILON);
    assert!(metrics.margin.horizontal().abs() < f32::EPSILON);
}

#[test]
#[should_panic(expected = "does not carry box-model metrics")]
fn test_box_model_on_text_run_panics() {
    let (tree, id) = node_of_kind(NodeKind::Text);
    let _metrics = tree.get(id).unwrap().box_model();
}

// ---------------------------------------------------------------------------
// Paint counterparts
// ---------------------------------------------------------------------------

#[test]
fn test_create_paintable_kind_mapping() {
    let cases = [
        (NodeKind::Viewport, Some(PaintableKind::WithLines)),
        (NodeKind::BlockContainer, Some(PaintableKind::WithLines)),
        (NodeKind::Label, Some(PaintableKind::WithLines)),
        (NodeKind::ListItemBox, Some(PaintableKind::WithLines)),
        (NodeKind::TableWrapper, Some(PaintableKind::WithLines)),
        (NodeKind::Table, Some(PaintableKind::Box)),
        (NodeKind::ReplacedBox, Some(PaintableKind::Box)),
        (NodeKind::SvgRoot, Some(PaintableKind::Box)),
        (NodeKind::SvgGeometryBox, Some(PaintableKind::Box)),
        (NodeKind::ListItemMarkerBox, Some(PaintableKind::Marker)),
        (NodeKind::Text, None),
        (NodeKind::Break, None),
    ];
    for (kind, expected) in cases {
        let (tree, id) = node_of_kind(kind);
        let paintable = tree.get(id).unwrap().create_paintable();
        assert_eq!(
            paintable.as_ref().map(Paintable::kind),
            expected,
            "paintable kind disagrees for {kind}"
        );
    }
}

#[test]
fn test_paintable_records_layout_node_serial() {
    let (tree, id) = node_of_kind(NodeKind::BlockContainer);
    let node = tree.get(id).unwrap();
    let paintable = node.create_paintable().unwrap();
    assert_eq!(paintable.layout_node_serial(), node.serial_id());
}

#[test]
fn test_set_paintable_overwrites_previous_link() {
    let (mut tree, id) = node_of_kind(NodeKind::BlockContainer);
    let first = Rc::new(Paintable::new(PaintableKind::Box, 100));
    let second = Rc::new(Paintable::new(PaintableKind::WithLines, 200));
    tree.get_mut(id).unwrap().set_paintable(first);
    tree.get_mut(id).unwrap().set_paintable(Rc::clone(&second));
    let attached = tree.get(id).unwrap().paintable().unwrap();
    assert!(Rc::ptr_eq(attached, &second));
    assert_eq!(attached.layout_node_serial(), 200);
}
