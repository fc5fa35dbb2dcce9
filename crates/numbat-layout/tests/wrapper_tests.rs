//! Integration tests for anonymous wrapper synthesis and table fixup.
//!
//! [§ 17.4 Tables in the visual formatting model](https://www.w3.org/TR/CSS2/tables.html#model)

use std::rc::Rc;

use numbat_layout::style::{
    AutoEdgeSizes, AutoOr, ColorValue, FloatSide, LineHeight, PositionType, TextAlign,
};
use numbat_layout::{
    ApproximateFontMatcher, BrowsingContextId, DomNodeId, LayoutNodeId, LayoutTree, NodeKind,
    StyleProperties,
};

const EPSILON: f32 = 1e-4;

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

/// Helper: append a styled node of `kind` under `parent`.
fn styled_node(
    tree: &mut LayoutTree,
    parent: LayoutNodeId,
    kind: NodeKind,
    dom: usize,
    properties: &StyleProperties,
) -> LayoutNodeId {
    let id = tree.new_node(kind, Some(DomNodeId(dom)), BrowsingContextId(1));
    tree.append_child(parent, id);
    tree.apply_style(id, properties, &ApproximateFontMatcher);
    id
}

// ---------------------------------------------------------------------------
// Anonymous wrapper synthesis
//
// [§ 2.1 Anonymous Boxes](https://www.w3.org/TR/css-display-3/#anonymous)
// ---------------------------------------------------------------------------

#[test]
fn test_wrapper_copies_inherited_and_resets_non_inherited_properties() {
    let (mut tree, root) = styled_viewport_tree();
    let red = ColorValue {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
    let source = styled_node(
        &mut tree,
        root,
        NodeKind::BlockContainer,
        1,
        &StyleProperties {
            color: Some(red),
            font_size: Some(24.0),
            text_align: Some(TextAlign::Center),
            position: Some(PositionType::Relative),
            float: Some(Some(FloatSide::Left)),
            padding_top: Some(10.0),
            width: Some(AutoOr::Px(300.0)),
            ..StyleProperties::default()
        },
    );
    let wrapper = tree.create_anonymous_wrapper(source, NodeKind::BlockContainer);
    let values = tree.computed_values(wrapper);

    // Inherited properties follow the source's governing style.
    assert_eq!(values.color, red);
    assert!((values.font_size - 24.0).abs() < EPSILON);
    assert_eq!(values.text_align, TextAlign::Center);

    // Non-inherited properties start from their initial values.
    assert_eq!(values.position, PositionType::Static);
    assert_eq!(values.float, None);
    assert!(values.padding.top.abs() < EPSILON);
    assert_eq!(values.width, AutoOr::Auto);
}

#[test]
fn test_wrapper_is_anonymous_styled_and_detached() {
    let (mut tree, root) = styled_viewport_tree();
    let source = styled_node(
        &mut tree,
        root,
        NodeKind::Table,
        1,
        &StyleProperties::default(),
    );
    let wrapper = tree.create_anonymous_wrapper(source, NodeKind::TableWrapper);
    let node = tree.get(wrapper).unwrap();

    assert!(node.is_anonymous());
    assert_eq!(node.dom_node(), None);
    assert!(node.has_style(), "wrappers carry their own style snapshot");
    assert_eq!(tree.parent(wrapper), None, "caller wires the wrapper");
    assert!(node.is_table_wrapper());
    assert!(
        node.serial_id() > tree.get(source).unwrap().serial_id(),
        "wrappers are created after their source"
    );
}

#[test]
fn test_wrapper_reuses_resolved_font_and_line_height() {
    let (mut tree, root) = styled_viewport_tree();
    let source = styled_node(
        &mut tree,
        root,
        NodeKind::BlockContainer,
        1,
        &StyleProperties {
            font_size: Some(20.0),
            line_height: Some(LineHeight::Number(1.5)),
            ..StyleProperties::default()
        },
    );
    let wrapper = tree.create_anonymous_wrapper(source, NodeKind::BlockContainer);

    assert!(Rc::ptr_eq(&tree.font(wrapper), &tree.font(source)));
    assert!((tree.line_height(wrapper) - 30.0).abs() < EPSILON);
}

#[test]
fn test_wrapper_for_unstyled_source_inherits_from_its_ancestor() {
    let (mut tree, root) = styled_viewport_tree();
    let block = styled_node(
        &mut tree,
        root,
        NodeKind::BlockContainer,
        1,
        &StyleProperties {
            font_size: Some(28.0),
            ..StyleProperties::default()
        },
    );
    let text = tree.new_node(NodeKind::Text, Some(DomNodeId(2)), BrowsingContextId(1));
    tree.append_child(block, text);

    // Wrapping a styleless text run: inheritance resolves through the
    // nearest styled ancestor.
    let wrapper = tree.create_anonymous_wrapper(text, NodeKind::BlockContainer);
    assert!((tree.computed_values(wrapper).font_size - 28.0).abs() < EPSILON);
}

// ---------------------------------------------------------------------------
// Table fixup
//
// "The computed values of properties 'position', 'float', 'margin-*',
// 'top', 'right', 'bottom', and 'left' on the table element are used on
// the table wrapper box and not the table box."
// ---------------------------------------------------------------------------

fn floated_table_properties() -> StyleProperties {
    StyleProperties {
        position: Some(PositionType::Relative),
        top: Some(AutoOr::Px(5.0)),
        float: Some(Some(FloatSide::Left)),
        margin_top: Some(AutoOr::Px(10.0)),
        margin_left: Some(AutoOr::Px(12.0)),
        padding_top: Some(3.0),
        width: Some(AutoOr::Px(400.0)),
        ..StyleProperties::default()
    }
}

#[test]
fn test_hoist_moves_positioning_values_onto_wrapper() {
    let (mut tree, root) = styled_viewport_tree();
    let table = styled_node(
        &mut tree,
        root,
        NodeKind::Table,
        1,
        &floated_table_properties(),
    );
    let wrapper = tree.create_anonymous_wrapper(table, NodeKind::TableWrapper);
    tree.hoist_table_box_values_to_wrapper(table, wrapper);

    let wrapper_values = tree.computed_values(wrapper);
    assert_eq!(wrapper_values.position, PositionType::Relative);
    assert_eq!(wrapper_values.inset.top, AutoOr::Px(5.0));
    assert_eq!(wrapper_values.float, Some(FloatSide::Left));
    assert_eq!(wrapper_values.margin.top, AutoOr::Px(10.0));
    assert_eq!(wrapper_values.margin.left, AutoOr::Px(12.0));
}

#[test]
fn test_hoist_resets_the_table_box_values() {
    let (mut tree, root) = styled_viewport_tree();
    let table = styled_node(
        &mut tree,
        root,
        NodeKind::Table,
        1,
        &floated_table_properties(),
    );
    let wrapper = tree.create_anonymous_wrapper(table, NodeKind::TableWrapper);
    tree.hoist_table_box_values_to_wrapper(table, wrapper);

    let table_values = tree.computed_values(table);
    assert_eq!(table_values.position, PositionType::Static);
    assert_eq!(table_values.float, None);
    assert_eq!(table_values.clear, None);
    assert_eq!(table_values.margin, AutoEdgeSizes::ZERO);
    assert_eq!(table_values.inset, AutoEdgeSizes::AUTO);

    // Values the wrapper does not take stay on the table box.
    assert!((table_values.padding.top - 3.0).abs() < EPSILON);
    assert_eq!(table_values.width, AutoOr::Px(400.0));
}

#[test]
fn test_hoisted_table_no_longer_floats_but_wrapper_does() {
    let (mut tree, root) = styled_viewport_tree();
    let table = styled_node(
        &mut tree,
        root,
        NodeKind::Table,
        1,
        &floated_table_properties(),
    );
    let wrapper = tree.create_anonymous_wrapper(table, NodeKind::TableWrapper);
    tree.hoist_table_box_values_to_wrapper(table, wrapper);

    assert!(tree.is_floating(wrapper));
    assert!(!tree.is_floating(table));
}

#[test]
#[should_panic(expected = "has no style to reset")]
fn test_reset_on_styleless_node_panics() {
    let (mut tree, _root) = styled_viewport_tree();
    let bare = tree.new_node(NodeKind::Table, Some(DomNodeId(1)), BrowsingContextId(1));
    tree.reset_table_box_values_taken_by_wrapper(bare);
}

// ---------------------------------------------------------------------------
// Fixup wiring end to end
// ---------------------------------------------------------------------------

#[test]
fn test_wrapper_takes_the_tables_place_in_the_tree() {
    let (mut tree, root) = styled_viewport_tree();
    let body = styled_node(
        &mut tree,
        root,
        NodeKind::BlockContainer,
        1,
        &StyleProperties::default(),
    );
    let before = styled_node(
        &mut tree,
        body,
        NodeKind::BlockContainer,
        2,
        &StyleProperties::default(),
    );
    let table = styled_node(
        &mut tree,
        body,
        NodeKind::Table,
        3,
        &floated_table_properties(),
    );

    let index = tree
        .children(body)
        .iter()
        .position(|&child| child == table)
        .unwrap();
    let wrapper = tree.create_anonymous_wrapper(table, NodeKind::TableWrapper);
    tree.remove_child(table);
    tree.insert_child(body, index, wrapper);
    tree.append_child(wrapper, table);
    tree.hoist_table_box_values_to_wrapper(table, wrapper);

    assert_eq!(tree.children(body), &[before, wrapper]);
    assert_eq!(tree.parent(table), Some(wrapper));
    assert_eq!(
        tree.containing_block(table),
        Some(wrapper),
        "the wrapper is a block container and contains the table"
    );
}
