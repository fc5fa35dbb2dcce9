//! Style types consumed and stored by the layout tree.
//!
//! This module implements the computed-style side of the layout tree per:
//! - [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/)
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! The cascade itself lives upstream; what arrives here is a fully
//! resolved [`StyleProperties`] bundle, and what the tree stores is an
//! immutable [`ComputedValues`] snapshot derived from it.

pub mod computed;
mod display;
pub mod properties;
mod values;

// Re-export all public types
pub use computed::ComputedValues;
pub use display::{DisplayValue, InnerDisplayType, OuterDisplayType};
pub use properties::StyleProperties;
pub use values::{
    AutoEdgeSizes, AutoOr, BorderWidths, ClearSide, ColorValue, DEFAULT_FONT_SIZE_PX, FloatSide,
    FontStyle, LineHeight, PositionType, TextAlign, Visibility, WhiteSpace, ZIndex,
};
