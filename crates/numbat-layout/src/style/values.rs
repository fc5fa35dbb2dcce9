//! Computed value types consumed by the layout tree.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! Everything here is post-cascade: lengths are in CSS pixels, keywords are
//! enums, and nothing refers back to the stylesheet. The cascade engine is
//! responsible for producing these; this core only stores and interprets
//! them.

use serde::Serialize;

use crate::box_model::EdgeSizes;

/// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// The CSS 'medium' font size per UA stylesheet conventions.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// A computed value that is either `auto` or a resolved pixel length.
///
/// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
///
/// "The value 'auto' means that the width depends on the values of other
/// properties." Margins, insets, and sizes all use this shape; what `auto`
/// resolves to is the concern of the formatting algorithms, not of this
/// value type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum AutoOr {
    /// Resolution is deferred to the formatting algorithm.
    #[default]
    Auto,
    /// A resolved length in CSS pixels.
    Px(f32),
}

impl AutoOr {
    /// A resolved zero length.
    pub const ZERO: AutoOr = AutoOr::Px(0.0);

    /// True if the value is `auto`.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, AutoOr::Auto)
    }

    /// The pixel value, or `fallback` when the value is `auto`.
    #[must_use]
    pub const fn to_px_or(&self, fallback: f32) -> f32 {
        match self {
            AutoOr::Auto => fallback,
            AutoOr::Px(px) => *px,
        }
    }
}

/// Per-side auto-or-length values for margins and insets.
///
/// [§ 6.1 Margin properties](https://www.w3.org/TR/css-box-4/#margin-physical)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AutoEdgeSizes {
    /// Top edge value.
    pub top: AutoOr,
    /// Right edge value.
    pub right: AutoOr,
    /// Bottom edge value.
    pub bottom: AutoOr,
    /// Left edge value.
    pub left: AutoOr,
}

impl AutoEdgeSizes {
    /// All four edges `auto`.
    pub const AUTO: AutoEdgeSizes = AutoEdgeSizes {
        top: AutoOr::Auto,
        right: AutoOr::Auto,
        bottom: AutoOr::Auto,
        left: AutoOr::Auto,
    };

    /// All four edges zero length.
    pub const ZERO: AutoEdgeSizes = AutoEdgeSizes {
        top: AutoOr::ZERO,
        right: AutoOr::ZERO,
        bottom: AutoOr::ZERO,
        left: AutoOr::ZERO,
    };
}

/// An sRGB color with alpha.
///
/// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
    /// Alpha channel, 0-255.
    pub a: u8,
}

impl ColorValue {
    /// Opaque black, the initial value of 'color' in most UA stylesheets.
    pub const BLACK: ColorValue = ColorValue {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Fully transparent, the initial value of 'background-color'.
    pub const TRANSPARENT: ColorValue = ColorValue {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

/// [§ 9.3.1 Choosing a positioning scheme: 'position' property](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "The 'position' and 'float' properties determine which of the CSS 2
/// positioning algorithms is used to calculate the position of a box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PositionType {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
    /// [CSS Positioned Layout Module Level 3 § 3.2](https://www.w3.org/TR/css-position-3/#sticky-position)
    ///
    /// "A stickily positioned box is positioned similarly to a relatively
    /// positioned box, but the offset is computed with reference to the
    /// nearest ancestor with a scrolling mechanism."
    Sticky,
}

/// [§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats)
///
/// "The element generates a block box that is floated to the left"
/// (or right). `float: none` is represented as the absence of a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FloatSide {
    /// "The element generates a block box that is floated to the left."
    Left,
    /// "The element generates a block box that is floated to the right."
    Right,
}

/// [§ 9.5.2 Controlling flow next to floats: the 'clear' property](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
///
/// "This property indicates which sides of an element's box(es) may not
/// be adjacent to an earlier floating box." `clear: none` is represented
/// as the absence of a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClearSide {
    /// "Requires the top border edge be below any left-floating boxes."
    Left,
    /// "Requires the top border edge be below any right-floating boxes."
    Right,
    /// "Requires the top border edge be below any floating boxes."
    Both,
}

/// [§ 9.9.1 Specifying the stack level: the 'z-index' property](https://www.w3.org/TR/CSS2/visuren.html#z-index)
///
/// "For a positioned box, the 'z-index' property specifies the stack level
/// of the box in the current stacking context, and whether the box
/// establishes a stacking context."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ZIndex {
    /// "The stack level is 0. Does not establish a new stacking context."
    #[default]
    Auto,
    /// "This integer is the stack level. Establishes a new stacking context."
    Integer(i32),
}

/// [§ 4.2 'visibility'](https://www.w3.org/TR/CSS2/visufx.html#visibility)
///
/// "The 'visibility' property specifies whether the boxes generated by an
/// element are rendered. Invisible boxes still affect layout."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Visibility {
    /// "The generated box is visible."
    #[default]
    Visible,
    /// "The generated box is invisible, but still affects layout."
    Hidden,
    /// For table rows and columns: the box is removed from display.
    /// For other elements, treated as 'hidden'.
    Collapse,
}

/// [§ 3 White Space Processing: the 'white-space' property](https://www.w3.org/TR/css-text-3/#white-space-property)
///
/// "This property specifies two things: whether and how white space inside
/// the element is collapsed, and whether lines may wrap."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WhiteSpace {
    /// "Sequences of white space are collapsed... lines are broken as
    /// necessary to fill line boxes."
    #[default]
    Normal,
    /// "Sequences of white space are preserved. Lines are only broken at
    /// preserved newline characters."
    Pre,
    /// "Collapses white space as for 'normal', but suppresses line breaks."
    Nowrap,
    /// "Preserved white space, with wrapping allowed."
    PreWrap,
    /// "Collapses white space, but preserves segment breaks."
    PreLine,
}

/// [§ 16.2 Alignment: the 'text-align' property](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
///
/// "This property describes how inline-level content of a block container
/// is aligned."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextAlign {
    /// "Inline-level content is aligned to the start edge of the line box."
    #[default]
    Left,
    /// "Inline-level content is aligned to the end edge of the line box."
    Right,
    /// "Inline-level content is centered within the line box."
    Center,
    /// "Text is justified."
    Justify,
}

/// [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
///
/// "The 'font-style' property allows italic or oblique faces to be
/// selected."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FontStyle {
    /// "Selects a face that is classified as a normal face."
    #[default]
    Normal,
    /// "Selects a font that is labeled as an italic face."
    Italic,
    /// "Selects a font that is labeled as an oblique face."
    Oblique,
}

/// [§ 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
///
/// "This property specifies the minimal height of line boxes within the
/// element."
///
/// The computed value preserves the specified form; resolution against
/// the element's font happens when style is applied to a layout node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum LineHeight {
    /// "Tells user agents to set the used value to a 'reasonable' value
    /// based on the font of the element." Resolved from font metrics.
    #[default]
    Normal,
    /// "The specified length is used in the calculation of the line box
    /// height." CSS pixels.
    Px(f32),
    /// "The computed value of the property is this percentage multiplied
    /// by the element's computed font size."
    Percentage(f32),
    /// "The used value of the property is this number multiplied by the
    /// element's computed font size."
    Number(f32),
}

/// Per-side resolved border widths.
///
/// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// Border style and color are paint concerns; the layout tree only needs
/// the widths, already collapsed to zero where border-style is 'none'.
pub type BorderWidths = EdgeSizes;
