//! Stroke definitions for edges and outlines.
//!
//! - [`StrokeDefinition`]: color, width and line cap of a stroke
//! - [`StrokeCap`]: how line endpoints are rendered
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! Stroke widths are expressed in hundredths of a canvas unit, so an edge
//! width of `1.5` is `0.015` canvas units wide once rendered. This keeps
//! widths readable next to layer geometry, which is a few units across.

use crate::color::Color;

/// Canvas units per unit of stroke width.
pub const STROKE_WIDTH_SCALE: f32 = 0.01;

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// A stroke definition for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use laminar_core::draw::{StrokeCap, StrokeDefinition};
/// use laminar_core::color::Color;
///
/// let mut stroke = StrokeDefinition::new(Color::new("white").unwrap(), 1.5);
/// stroke.set_cap(StrokeCap::Round);
///
/// assert_eq!(stroke.width(), 1.5);
/// assert!((stroke.canvas_width() - 0.015).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke width converted to canvas units.
    pub fn canvas_width(&self) -> f32 {
        self.width * STROKE_WIDTH_SCALE
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width (in canvas units) and line cap.
///
/// # Examples
///
/// ```
/// use laminar_core::draw::StrokeDefinition;
/// use laminar_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("white").unwrap(), 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 1)
///     .set("y2", 1);
///
/// let line = laminar_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.canvas_width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
    }};
}
