//! The fully-cascaded property bundle handed over by the style engine.
//!
//! [§ 2 Cascading and Inheritance](https://www.w3.org/TR/css-cascade-4/)
//!
//! The cascade engine resolves selectors, specificity, and inheritance
//! before this core ever sees a value. A [`StyleProperties`] bundle must
//! therefore contain no pending cascade state: every present field is the
//! winning declaration's value, already converted to pixels or keywords,
//! and every absent field means "use the initial value".

use serde::Serialize;

use numbat_common::warning::warn_once;

use crate::box_model::EdgeSizes;

use super::computed::ComputedValues;
use super::display::DisplayValue;
use super::values::{
    AutoEdgeSizes, AutoOr, BorderWidths, ClearSide, ColorValue, FloatSide, FontStyle, LineHeight,
    PositionType, TextAlign, Visibility, WhiteSpace, ZIndex,
};

/// Resolved style properties for one element, as produced by the cascade.
///
/// All fields are `Option` - `None` means "not set" (use the initial
/// value). This is the input to style application; the output is the
/// concrete [`ComputedValues`] snapshot stored on the layout node.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StyleProperties {
    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    pub display: Option<DisplayValue>,
    /// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
    pub position: Option<PositionType>,
    /// [§ 9.5 'float'](https://www.w3.org/TR/CSS2/visuren.html#floats)
    ///
    /// `Some(None)` is an explicit `float: none`.
    pub float: Option<Option<FloatSide>>,
    /// [§ 9.5.2 'clear'](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
    ///
    /// `Some(None)` is an explicit `clear: none`.
    pub clear: Option<Option<ClearSide>>,
    /// [§ 9.9.1 'z-index'](https://www.w3.org/TR/CSS2/visuren.html#z-index)
    pub z_index: Option<ZIndex>,

    /// [§ 9.3.2 'top'](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    pub top: Option<AutoOr>,
    /// [§ 9.3.2 'right'](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    pub right: Option<AutoOr>,
    /// [§ 9.3.2 'bottom'](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    pub bottom: Option<AutoOr>,
    /// [§ 9.3.2 'left'](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    pub left: Option<AutoOr>,

    /// [§ 6.1 'margin-top'](https://www.w3.org/TR/css-box-4/#margin-physical)
    pub margin_top: Option<AutoOr>,
    /// [§ 6.1 'margin-right'](https://www.w3.org/TR/css-box-4/#margin-physical)
    pub margin_right: Option<AutoOr>,
    /// [§ 6.1 'margin-bottom'](https://www.w3.org/TR/css-box-4/#margin-physical)
    pub margin_bottom: Option<AutoOr>,
    /// [§ 6.1 'margin-left'](https://www.w3.org/TR/css-box-4/#margin-physical)
    pub margin_left: Option<AutoOr>,

    /// [§ 6.2 'padding-top'](https://www.w3.org/TR/css-box-4/#padding-physical)
    pub padding_top: Option<f32>,
    /// [§ 6.2 'padding-right'](https://www.w3.org/TR/css-box-4/#padding-physical)
    pub padding_right: Option<f32>,
    /// [§ 6.2 'padding-bottom'](https://www.w3.org/TR/css-box-4/#padding-physical)
    pub padding_bottom: Option<f32>,
    /// [§ 6.2 'padding-left'](https://www.w3.org/TR/css-box-4/#padding-physical)
    pub padding_left: Option<f32>,

    /// [§ 4.3 'border-top-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub border_top_width: Option<f32>,
    /// [§ 4.3 'border-right-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub border_right_width: Option<f32>,
    /// [§ 4.3 'border-bottom-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub border_bottom_width: Option<f32>,
    /// [§ 4.3 'border-left-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub border_left_width: Option<f32>,

    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    pub width: Option<AutoOr>,
    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    pub height: Option<AutoOr>,
    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    pub min_width: Option<f32>,
    /// [§ 10.7 'min-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    pub min_height: Option<f32>,
    /// [§ 10.4 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    ///
    /// `Some(None)` is an explicit `max-width: none`.
    pub max_width: Option<Option<f32>>,
    /// [§ 10.7 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    ///
    /// `Some(None)` is an explicit `max-height: none`.
    pub max_height: Option<Option<f32>>,

    /// [§ 3.2 'opacity'](https://www.w3.org/TR/css-color-4/#transparency)
    pub opacity: Option<f32>,
    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    pub color: Option<ColorValue>,
    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    pub background_color: Option<ColorValue>,

    /// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
    pub font_family: Option<String>,
    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop) in CSS pixels.
    pub font_size: Option<f32>,
    /// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
    pub font_weight: Option<u16>,
    /// [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
    pub font_style: Option<FontStyle>,
    /// [§ 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
    pub line_height: Option<LineHeight>,

    /// [§ 16.2 'text-align'](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
    pub text_align: Option<TextAlign>,
    /// [§ 3 'white-space'](https://www.w3.org/TR/css-text-3/#white-space-property)
    pub white_space: Option<WhiteSpace>,
    /// [§ 4.2 'visibility'](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    pub visibility: Option<Visibility>,

    /// [§ 3.1 'list-style-type'](https://www.w3.org/TR/css-lists-3/#list-style-type)
    pub list_style_type: Option<String>,
    /// [§ 3.2 'list-style-image'](https://www.w3.org/TR/css-lists-3/#list-style-image)
    ///
    /// `Some(None)` is an explicit `list-style-image: none`.
    pub list_style_image: Option<Option<String>>,
}

impl StyleProperties {
    /// Compute the concrete snapshot this bundle describes.
    ///
    /// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
    ///
    /// Unset fields fall back to [`ComputedValues::initial`]. Out-of-range
    /// values the cascade should not have produced are clamped with a
    /// one-time warning rather than trusted: weight outside [1, 1000],
    /// opacity outside [0, 1], negative padding or border widths, and
    /// non-positive line-height numbers.
    #[must_use]
    pub fn to_computed_values(&self) -> ComputedValues {
        let initial = ComputedValues::initial();

        ComputedValues {
            display: self.display.unwrap_or(initial.display),
            position: self.position.unwrap_or(initial.position),
            float: self.float.unwrap_or(initial.float),
            clear: self.clear.unwrap_or(initial.clear),
            z_index: self.z_index.unwrap_or(initial.z_index),
            inset: AutoEdgeSizes {
                top: self.top.unwrap_or(AutoOr::Auto),
                right: self.right.unwrap_or(AutoOr::Auto),
                bottom: self.bottom.unwrap_or(AutoOr::Auto),
                left: self.left.unwrap_or(AutoOr::Auto),
            },
            margin: AutoEdgeSizes {
                top: self.margin_top.unwrap_or(AutoOr::ZERO),
                right: self.margin_right.unwrap_or(AutoOr::ZERO),
                bottom: self.margin_bottom.unwrap_or(AutoOr::ZERO),
                left: self.margin_left.unwrap_or(AutoOr::ZERO),
            },
            padding: EdgeSizes {
                top: non_negative("padding-top", self.padding_top.unwrap_or(0.0)),
                right: non_negative("padding-right", self.padding_right.unwrap_or(0.0)),
                bottom: non_negative("padding-bottom", self.padding_bottom.unwrap_or(0.0)),
                left: non_negative("padding-left", self.padding_left.unwrap_or(0.0)),
            },
            border_width: BorderWidths {
                top: non_negative("border-top-width", self.border_top_width.unwrap_or(0.0)),
                right: non_negative("border-right-width", self.border_right_width.unwrap_or(0.0)),
                bottom: non_negative(
                    "border-bottom-width",
                    self.border_bottom_width.unwrap_or(0.0),
                ),
                left: non_negative("border-left-width", self.border_left_width.unwrap_or(0.0)),
            },
            width: self.width.unwrap_or(AutoOr::Auto),
            height: self.height.unwrap_or(AutoOr::Auto),
            min_width: self.min_width.unwrap_or(0.0),
            min_height: self.min_height.unwrap_or(0.0),
            max_width: self.max_width.unwrap_or(None),
            max_height: self.max_height.unwrap_or(None),
            opacity: clamp_opacity(self.opacity.unwrap_or(1.0)),
            color: self.color.unwrap_or(initial.color),
            background_color: self.background_color.unwrap_or(initial.background_color),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| initial.font_family.clone()),
            font_size: self.font_size.unwrap_or(initial.font_size),
            font_weight: clamp_font_weight(self.font_weight.unwrap_or(400)),
            font_style: self.font_style.unwrap_or(initial.font_style),
            line_height: checked_line_height(self.line_height.unwrap_or(LineHeight::Normal)),
            text_align: self.text_align.unwrap_or(initial.text_align),
            white_space: self.white_space.unwrap_or(initial.white_space),
            visibility: self.visibility.unwrap_or(initial.visibility),
            list_style_type: self
                .list_style_type
                .clone()
                .unwrap_or_else(|| initial.list_style_type.clone()),
            list_style_image: self.list_style_image.clone().unwrap_or(None),
        }
    }
}

/// [§ 6.2 Padding properties](https://www.w3.org/TR/css-box-4/#padding-physical)
///
/// "Negative values for padding properties are invalid."
fn non_negative(property: &str, value: f32) -> f32 {
    if value < 0.0 {
        warn_once(
            "Style",
            &format!("negative {property} {value}px is invalid, using 0"),
        );
        return 0.0;
    }
    value
}

/// [§ 3.2 'opacity'](https://www.w3.org/TR/css-color-4/#transparency)
///
/// "Values outside the range [0,1]... are clamped to this range."
fn clamp_opacity(value: f32) -> f32 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        warn_once("Style", &format!("opacity {value} out of range, clamping"));
        value.clamp(0.0, 1.0)
    }
}

/// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// "Values... must be in the range [1, 1000]."
fn clamp_font_weight(weight: u16) -> u16 {
    if (1..=1000).contains(&weight) {
        weight
    } else {
        warn_once(
            "Style",
            &format!("font-weight {weight} out of range, clamping"),
        );
        weight.clamp(1, 1000)
    }
}

/// [§ 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
///
/// "Negative values are invalid." Falls back to 'normal'.
fn checked_line_height(value: LineHeight) -> LineHeight {
    let negative = match value {
        LineHeight::Normal => false,
        LineHeight::Px(v) | LineHeight::Percentage(v) | LineHeight::Number(v) => v < 0.0,
    };
    if negative {
        warn_once("Style", "negative line-height is invalid, using normal");
        return LineHeight::Normal;
    }
    value
}
