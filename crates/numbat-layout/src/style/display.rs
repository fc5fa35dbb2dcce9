//! CSS Display property types.
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
//!
//! "The display property defines an element's display type, which consists
//! of the two basic qualities of how an element generates boxes:
//!   - the inner display type, which defines the kind of formatting context
//!     it generates, dictating how its descendant boxes are laid out.
//!   - the outer display type, which dictates how the principal box itself
//!     participates in flow layout."
//!
//! Elements with `display: none` generate no layout node at all, so the
//! value is not representable here.

use serde::Serialize;

/// [§ 2.1 Outer Display Roles](https://www.w3.org/TR/css-display-3/#outer-role)
///
/// "The `<display-outside>` keywords specify the element's outer display
/// type, which is essentially its principal box's role in flow layout."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OuterDisplayType {
    /// "The element generates a block-level box when placed in flow layout."
    Block,
    /// "The element generates an inline-level box when placed in flow layout."
    Inline,
    /// "The element generates a run-in box, which is a type of inline-level box."
    RunIn,
}

/// [§ 2.2 Inner Display Layout Models](https://www.w3.org/TR/css-display-3/#inner-model)
///
/// "The `<display-inside>` keywords specify the element's inner display
/// type, which defines the type of formatting context that lays out its
/// contents."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InnerDisplayType {
    /// "The element lays out its contents using flow layout (block-and-inline layout)."
    Flow,
    /// Same as [`InnerDisplayType::Flow`], but establishes a new block
    /// formatting context.
    FlowRoot,
    /// "The element lays out its contents using table layout."
    Table,
    /// "The element lays out its contents using flex layout."
    Flex,
    /// "The element lays out its contents using grid layout."
    Grid,
}

/// Combined display value.
///
/// [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayValue {
    /// "The outer display type, which dictates how the box participates in flow layout."
    pub outer: OuterDisplayType,
    /// "The inner display type, which dictates how its descendant boxes are laid out."
    pub inner: InnerDisplayType,
}

impl DisplayValue {
    /// `display: block` - block outer, flow inner
    #[must_use]
    pub const fn block() -> Self {
        Self {
            outer: OuterDisplayType::Block,
            inner: InnerDisplayType::Flow,
        }
    }

    /// `display: inline` - inline outer, flow inner
    #[must_use]
    pub const fn inline() -> Self {
        Self {
            outer: OuterDisplayType::Inline,
            inner: InnerDisplayType::Flow,
        }
    }

    /// `display: inline-block` - inline outer, flow-root inner
    #[must_use]
    pub const fn inline_block() -> Self {
        Self {
            outer: OuterDisplayType::Inline,
            inner: InnerDisplayType::FlowRoot,
        }
    }

    /// `display: table` - block outer, table inner
    #[must_use]
    pub const fn table() -> Self {
        Self {
            outer: OuterDisplayType::Block,
            inner: InnerDisplayType::Table,
        }
    }

    /// `display: inline-table` - inline outer, table inner
    #[must_use]
    pub const fn inline_table() -> Self {
        Self {
            outer: OuterDisplayType::Inline,
            inner: InnerDisplayType::Table,
        }
    }

    /// `display: flex` - block outer, flex inner
    #[must_use]
    pub const fn flex() -> Self {
        Self {
            outer: OuterDisplayType::Block,
            inner: InnerDisplayType::Flex,
        }
    }

    /// `display: grid` - block outer, grid inner
    #[must_use]
    pub const fn grid() -> Self {
        Self {
            outer: OuterDisplayType::Block,
            inner: InnerDisplayType::Grid,
        }
    }

    /// True if the principal box is inline-level.
    ///
    /// [§ 2.1](https://www.w3.org/TR/css-display-3/#outer-role)
    /// "inline: The element generates an inline-level box."
    #[must_use]
    pub const fn is_inline_outside(&self) -> bool {
        matches!(self.outer, OuterDisplayType::Inline)
    }

    /// True for plain `display: inline`.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.is_inline_outside() && matches!(self.inner, InnerDisplayType::Flow)
    }

    /// True for `display: inline-block` (inline outside, flow-root inside).
    #[must_use]
    pub const fn is_inline_block(&self) -> bool {
        self.is_inline_outside() && matches!(self.inner, InnerDisplayType::FlowRoot)
    }

    /// True for `display: inline-table` (inline outside, table inside).
    #[must_use]
    pub const fn is_inline_table(&self) -> bool {
        self.is_inline_outside() && matches!(self.inner, InnerDisplayType::Table)
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        DisplayValue::inline()
    }
}
