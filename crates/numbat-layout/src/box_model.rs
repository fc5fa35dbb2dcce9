//! Box model metrics attached to geometry-bearing layout nodes.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! The metrics here are *used values*: the layout algorithms resolve the
//! computed style into concrete pixels and write the results into
//! [`BoxModelMetrics`]. This module only stores and combines them; it never
//! computes a size itself.

use serde::Serialize;

/// A rectangle positioned in 2D space, in CSS pixels.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

/// Per-side sizes for one layer of the box model (margin, border, or padding).
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl EdgeSizes {
    /// All four edges zero.
    pub const ZERO: EdgeSizes = EdgeSizes {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Sum of the left and right edge sizes.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom edge sizes.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Resolved box-model metrics for one layout node.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
///
/// The node owns these metrics exclusively; formatting algorithms mutate
/// them between passes and the painter reads the final values. Content
/// offsets are relative to the node's containing block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoxModelMetrics {
    /// Content area position and size.
    pub content: Rect,
    /// Padding sizes on each side of the content area.
    pub padding: EdgeSizes,
    /// Border widths on each side of the padding area.
    pub border: EdgeSizes,
    /// Margin sizes on each side of the border area.
    pub margin: EdgeSizes,
}

impl BoxModelMetrics {
    /// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
    ///
    /// "The content box contains the actual content of the element."
    #[must_use]
    pub const fn content_box(&self) -> Rect {
        self.content
    }

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// "The padding box contains both the content and padding areas."
    ///
    /// Expands the content box outward through the padding layer.
    #[must_use]
    pub fn padding_box(&self) -> Rect {
        Rect {
            x: self.content.x - self.padding.left,
            y: self.content.y - self.padding.top,
            width: self.content.width + self.padding.horizontal(),
            height: self.content.height + self.padding.vertical(),
        }
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// "The border box contains content, padding, and border areas."
    ///
    /// Expands the content box outward through padding and border.
    #[must_use]
    pub fn border_box(&self) -> Rect {
        Rect {
            x: self.content.x - self.padding.left - self.border.left,
            y: self.content.y - self.padding.top - self.border.top,
            width: self.content.width + self.padding.horizontal() + self.border.horizontal(),
            height: self.content.height + self.padding.vertical() + self.border.vertical(),
        }
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "The margin box is the outermost box, and contains all four areas."
    ///
    /// Expands the content box outward through padding, border, and margin.
    #[must_use]
    pub fn margin_box(&self) -> Rect {
        Rect {
            x: self.content.x - self.padding.left - self.border.left - self.margin.left,
            y: self.content.y - self.padding.top - self.border.top - self.margin.top,
            width: self.content.width
                + self.padding.horizontal()
                + self.border.horizontal()
                + self.margin.horizontal(),
            height: self.content.height
                + self.padding.vertical()
                + self.border.vertical()
                + self.margin.vertical(),
        }
    }
}
