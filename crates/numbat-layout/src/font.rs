//! Font resolution interface between the layout tree and the host's
//! font-matching service.
//!
//! [§ 5 Font Matching Algorithm](https://www.w3.org/TR/css-fonts-4/#font-matching-algorithm)
//!
//! The layout tree never loads or shapes fonts itself. When style is
//! applied to a node, it builds a [`FontDescription`] from the computed
//! values and asks the host's [`FontMatcher`] for a concrete [`Font`].
//! The returned font is shared (`Rc`): many nodes typically resolve to
//! the same face and size.

use std::rc::Rc;

use crate::style::FontStyle;

/// The style-derived key used to look up a concrete font.
///
/// [§ 5.2 Matching font styles](https://www.w3.org/TR/css-fonts-4/#font-style-matching)
///
/// "The font matching algorithm... uses the font-family, font-style,
/// font-weight... to select a font face."
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescription {
    /// Requested family name.
    pub family: String,
    /// Requested size in CSS pixels.
    pub size_px: f32,
    /// Requested weight: 400 = normal, 700 = bold.
    pub weight: u16,
    /// Requested style (normal, italic, oblique).
    pub style: FontStyle,
}

impl FontDescription {
    /// The same description at `scale` times the size.
    ///
    /// Used for device-scaled lookups, where the paint context's
    /// device-pixels-per-CSS-pixel ratio is folded into the requested
    /// size rather than applied to the glyphs afterwards.
    #[must_use]
    pub fn scaled(&self, scale: f32) -> FontDescription {
        FontDescription {
            family: self.family.clone(),
            size_px: self.size_px * scale,
            weight: self.weight,
            style: self.style,
        }
    }
}

/// Vertical metrics of a matched font, in pixels at its resolved size.
///
/// [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
///
/// "CSS assumes that every font has font metrics that specify a
/// characteristic height above the baseline and a depth below it."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontPixelMetrics {
    /// Height above the baseline.
    pub ascent: f32,
    /// Depth below the baseline.
    pub descent: f32,
    /// Recommended additional spacing between lines.
    pub line_gap: f32,
}

impl FontPixelMetrics {
    /// The font's natural baseline-to-baseline distance.
    ///
    /// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#leading)
    ///
    /// This is what `line-height: normal` resolves to.
    #[must_use]
    pub fn line_spacing(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// A concrete font resolved by the host's font-matching service.
///
/// Layout never reads glyph data from this; it only needs the identity
/// (for paint) and the vertical metrics (for line-height resolution).
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    description: FontDescription,
    metrics: FontPixelMetrics,
}

impl Font {
    /// Wrap a matched face with its resolved metrics.
    #[must_use]
    pub const fn new(description: FontDescription, metrics: FontPixelMetrics) -> Font {
        Font {
            description,
            metrics,
        }
    }

    /// The description this font was matched for.
    #[must_use]
    pub const fn description(&self) -> &FontDescription {
        &self.description
    }

    /// Vertical metrics at the font's resolved size.
    #[must_use]
    pub const fn pixel_metrics(&self) -> FontPixelMetrics {
        self.metrics
    }

    /// Natural baseline-to-baseline distance; the used value of
    /// `line-height: normal`.
    #[must_use]
    pub fn line_spacing(&self) -> f32 {
        self.metrics.line_spacing()
    }
}

/// Host-provided font-matching service.
///
/// [§ 5 Font Matching Algorithm](https://www.w3.org/TR/css-fonts-4/#font-matching-algorithm)
///
/// Matching must always produce a font - the algorithm's final fallback
/// is a UA-chosen face, never a failure. Any background font loading
/// must complete (or fall back) before the result is handed over here;
/// layout runs on a single timeline and does not wait.
pub trait FontMatcher {
    /// Resolve a description to a concrete font.
    fn match_font(&self, description: &FontDescription) -> Rc<Font>;
}

/// Font matcher using fixed metric ratios.
///
/// Implementation note: Without access to actual font data, we use fixed
/// ratio approximations: 0.8× ascent and 0.2× descent with a 0.2× line
/// gap, giving a 1.2× line spacing - the upper end of the range the spec
/// recommends for `line-height: normal`.
///
/// This is used as a fallback when no platform matcher is wired up, and
/// in tests.
pub struct ApproximateFontMatcher;

impl FontMatcher for ApproximateFontMatcher {
    fn match_font(&self, description: &FontDescription) -> Rc<Font> {
        const ASCENT_RATIO: f32 = 0.8;
        const DESCENT_RATIO: f32 = 0.2;
        const LINE_GAP_RATIO: f32 = 0.2;

        let metrics = FontPixelMetrics {
            ascent: description.size_px * ASCENT_RATIO,
            descent: description.size_px * DESCENT_RATIO,
            line_gap: description.size_px * LINE_GAP_RATIO,
        };
        Rc::new(Font::new(description.clone(), metrics))
    }
}
