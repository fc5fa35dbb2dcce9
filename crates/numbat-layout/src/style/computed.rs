//! The immutable computed-style snapshot carried by styled layout nodes.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."

use serde::Serialize;

use crate::box_model::EdgeSizes;

use super::display::DisplayValue;
use super::values::{
    AutoEdgeSizes, AutoOr, BorderWidths, ClearSide, ColorValue, DEFAULT_FONT_SIZE_PX, FloatSide,
    FontStyle, LineHeight, PositionType, TextAlign, Visibility, WhiteSpace, ZIndex,
};

/// Computed style snapshot for one layout node.
///
/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// Every field holds a fully resolved value; there is no pending cascade
/// state. A node's snapshot is replaced wholesale on restyle and is never
/// patched in place, so readers can never observe a mixture of old and
/// new values.
#[derive(Debug, Clone, Serialize)]
pub struct ComputedValues {
    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// Initial: inline. Inherited: no.
    pub display: DisplayValue,

    /// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
    ///
    /// Initial: static. Inherited: no.
    pub position: PositionType,

    /// [§ 9.5 'float'](https://www.w3.org/TR/CSS2/visuren.html#floats)
    ///
    /// `None` means `float: none`. Initial: none. Inherited: no.
    pub float: Option<FloatSide>,

    /// [§ 9.5.2 'clear'](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
    ///
    /// `None` means `clear: none`. Initial: none. Inherited: no.
    pub clear: Option<ClearSide>,

    /// [§ 9.9.1 'z-index'](https://www.w3.org/TR/CSS2/visuren.html#z-index)
    ///
    /// Initial: auto. Inherited: no.
    pub z_index: ZIndex,

    /// [§ 9.3.2 Box offsets: 'top', 'right', 'bottom', 'left'](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    ///
    /// Initial: auto on all sides. Inherited: no.
    pub inset: AutoEdgeSizes,

    /// [§ 6.1 Margin properties](https://www.w3.org/TR/css-box-4/#margin-physical)
    ///
    /// "Margins can be negative." Initial: 0 on all sides. Inherited: no.
    pub margin: AutoEdgeSizes,

    /// [§ 6.2 Padding properties](https://www.w3.org/TR/css-box-4/#padding-physical)
    ///
    /// "Values for padding properties cannot be negative."
    /// Initial: 0 on all sides. Inherited: no.
    pub padding: EdgeSizes,

    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    ///
    /// Already collapsed to zero where border-style is 'none'.
    /// Initial: 0 on all sides. Inherited: no.
    pub border_width: BorderWidths,

    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    ///
    /// Initial: auto. Inherited: no.
    pub width: AutoOr,

    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    ///
    /// Initial: auto. Inherited: no.
    pub height: AutoOr,

    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    ///
    /// Initial: 0 (no minimum constraint). Inherited: no.
    pub min_width: f32,

    /// [§ 10.7 'min-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    ///
    /// Initial: 0 (no minimum constraint). Inherited: no.
    pub min_height: f32,

    /// [§ 10.4 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    ///
    /// `None` means `max-width: none`. Initial: none. Inherited: no.
    pub max_width: Option<f32>,

    /// [§ 10.7 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    ///
    /// `None` means `max-height: none`. Initial: none. Inherited: no.
    pub max_height: Option<f32>,

    /// [§ 3.2 'opacity'](https://www.w3.org/TR/css-color-4/#transparency)
    ///
    /// "Opacity applies to the element as a whole." Clamped to [0, 1].
    /// Initial: 1. Inherited: no.
    pub opacity: f32,

    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    ///
    /// Initial: black (UA-dependent). Inherited: yes.
    pub color: ColorValue,

    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    ///
    /// Initial: transparent. Inherited: no.
    pub background_color: ColorValue,

    /// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
    ///
    /// The first family the cascade settled on. Initial: UA-dependent
    /// ("serif" here). Inherited: yes.
    pub font_family: String,

    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    ///
    /// Resolved to CSS pixels. Initial: 16 ('medium'). Inherited: yes.
    pub font_size: f32,

    /// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
    ///
    /// Numeric weight: 400 = normal, 700 = bold. Initial: 400.
    /// Inherited: yes.
    pub font_weight: u16,

    /// [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
    ///
    /// Initial: normal. Inherited: yes.
    pub font_style: FontStyle,

    /// [§ 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
    ///
    /// Kept in its specified form; resolved against the matched font when
    /// style is applied to a node. Initial: normal. Inherited: yes.
    pub line_height: LineHeight,

    /// [§ 16.2 'text-align'](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
    ///
    /// Initial: left (for ltr). Inherited: yes.
    pub text_align: TextAlign,

    /// [§ 3 'white-space'](https://www.w3.org/TR/css-text-3/#white-space-property)
    ///
    /// Initial: normal. Inherited: yes.
    pub white_space: WhiteSpace,

    /// [§ 4.2 'visibility'](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    ///
    /// Initial: visible. Inherited: yes.
    pub visibility: Visibility,

    /// [§ 3.1 'list-style-type'](https://www.w3.org/TR/css-lists-3/#list-style-type)
    ///
    /// Lowercase counter-style keyword. Initial: "disc". Inherited: yes.
    pub list_style_type: String,

    /// [§ 3.2 'list-style-image'](https://www.w3.org/TR/css-lists-3/#list-style-image)
    ///
    /// Resolved image URL, or `None` for `list-style-image: none`.
    /// Initial: none. Inherited: yes.
    pub list_style_image: Option<String>,
}

impl ComputedValues {
    /// The initial value of every property this core models.
    ///
    /// [§ 4.1 Initial Values](https://www.w3.org/TR/css-cascade-4/#initial-values)
    ///
    /// "Each property has an initial value, defined in the property's
    /// definition table."
    #[must_use]
    pub fn initial() -> ComputedValues {
        ComputedValues {
            display: DisplayValue::inline(),
            position: PositionType::Static,
            float: None,
            clear: None,
            z_index: ZIndex::Auto,
            inset: AutoEdgeSizes::AUTO,
            margin: AutoEdgeSizes::ZERO,
            padding: EdgeSizes::ZERO,
            border_width: BorderWidths::ZERO,
            width: AutoOr::Auto,
            height: AutoOr::Auto,
            min_width: 0.0,
            min_height: 0.0,
            max_width: None,
            max_height: None,
            opacity: 1.0,
            color: ColorValue::BLACK,
            background_color: ColorValue::TRANSPARENT,
            font_family: String::from("serif"),
            font_size: DEFAULT_FONT_SIZE_PX,
            font_weight: 400,
            font_style: FontStyle::Normal,
            line_height: LineHeight::Normal,
            text_align: TextAlign::Left,
            white_space: WhiteSpace::Normal,
            visibility: Visibility::Visible,
            list_style_type: String::from("disc"),
            list_style_image: None,
        }
    }

    /// Computed values for an anonymous box generated inside `parent`.
    ///
    /// [§ 4 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
    ///
    /// "Inheritance propagates property values from parent elements to
    /// their children."
    ///
    /// [§ 2.1 Anonymous Boxes](https://www.w3.org/TR/css-display-3/#anonymous)
    ///
    /// "Anonymous boxes inherit through the box tree: the inherited
    /// properties take their values from the element ancestors of the
    /// anonymous box; non-inherited properties take their initial values."
    ///
    /// The inherited properties among those this core models are: color,
    /// font-family, font-size, font-weight, font-style, line-height,
    /// text-align, white-space, visibility, list-style-type, and
    /// list-style-image. Everything else resets to its initial value.
    #[must_use]
    pub fn inherited_from(parent: &ComputedValues) -> ComputedValues {
        ComputedValues {
            color: parent.color,
            font_family: parent.font_family.clone(),
            font_size: parent.font_size,
            font_weight: parent.font_weight,
            font_style: parent.font_style,
            line_height: parent.line_height,
            text_align: parent.text_align,
            white_space: parent.white_space,
            visibility: parent.visibility,
            list_style_type: parent.list_style_type.clone(),
            list_style_image: parent.list_style_image.clone(),
            ..ComputedValues::initial()
        }
    }

    /// [§ 9.3.2](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    ///
    /// "An element is said to be positioned if its 'position' property has
    /// a value other than 'static'."
    #[must_use]
    pub const fn is_positioned(&self) -> bool {
        !matches!(self.position, PositionType::Static)
    }

    /// [§ 9.6 Absolute positioning](https://www.w3.org/TR/CSS2/visuren.html#absolute-positioning)
    ///
    /// "The absolute positioning model... applies to elements with
    /// 'position' set to 'absolute' or 'fixed'."
    #[must_use]
    pub const fn is_absolutely_positioned(&self) -> bool {
        matches!(self.position, PositionType::Absolute | PositionType::Fixed)
    }

    /// [§ 9.3.1 Fixed positioning](https://www.w3.org/TR/CSS2/visuren.html#fixed-positioning)
    ///
    /// "Fixed positioning is a subcategory of absolute positioning."
    #[must_use]
    pub const fn is_fixed_position(&self) -> bool {
        matches!(self.position, PositionType::Fixed)
    }

    /// [§ 9.7 Relationships between 'display', 'position', and 'float'](https://www.w3.org/TR/CSS2/visuren.html#dis-pos-flo)
    ///
    /// "If 'position' has the value 'absolute' or 'fixed'... the computed
    /// value of 'float' is 'none'." An absolutely positioned box never
    /// floats, whatever the 'float' property says.
    #[must_use]
    pub const fn is_floating(&self) -> bool {
        if self.is_absolutely_positioned() {
            return false;
        }
        self.float.is_some()
    }
}

impl Default for ComputedValues {
    fn default() -> Self {
        ComputedValues::initial()
    }
}
