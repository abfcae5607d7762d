//! Image layers: an input image shown as a block.

use svg::node::element as svg_element;

use laminar_core::{
    animation::{Animation, Effect},
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

use crate::{
    error::LaminarError,
    layer::{ForwardPassStyle, Layer, LayerKind},
};

/// Visual parameters of an image layer.
#[derive(Debug, Clone)]
pub struct ImageDefinition {
    display_height: f32,
    border: StrokeDefinition,
}

impl Default for ImageDefinition {
    fn default() -> Self {
        Self {
            display_height: 1.5,
            border: StrokeDefinition::new(Color::default(), 1.0),
        }
    }
}

impl ImageDefinition {
    /// Height of the image on the canvas; width follows the aspect ratio.
    pub fn with_display_height(mut self, display_height: f32) -> Self {
        self.display_height = display_height;
        self
    }

    pub fn with_border(mut self, border: StrokeDefinition) -> Self {
        self.border = border;
        self
    }

    pub fn display_height(&self) -> f32 {
        self.display_height
    }

    pub fn border(&self) -> &StrokeDefinition {
        &self.border
    }

    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] if the display height or the border
    /// width is negative or not finite.
    pub fn validate(&self) -> Result<(), LaminarError> {
        for (name, value) in [
            ("display_height", self.display_height),
            ("border width", self.border.width()),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LaminarError::config(format!(
                    "image {name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// An image of known pixel dimensions, scaled to the definition's display height.
#[derive(Debug, Clone)]
pub struct ImageLayer {
    pixel_width: u32,
    pixel_height: u32,
    source: Option<String>,
    definition: ImageDefinition,
    center: Point,
    depth: RenderLayer,
}

impl ImageLayer {
    pub fn new(pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            pixel_width,
            pixel_height,
            source: None,
            definition: ImageDefinition::default(),
            center: Point::default(),
            depth: RenderLayer::default(),
        }
    }

    /// Location of the image, used as the `href` of exported snapshots.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_definition(mut self, definition: ImageDefinition) -> Self {
        self.definition = definition;
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn definition(&self) -> &ImageDefinition {
        &self.definition
    }

    /// Width over height; images without pixels are treated as square.
    pub fn aspect_ratio(&self) -> f32 {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return 1.0;
        }
        self.pixel_width as f32 / self.pixel_height as f32
    }
}

impl Layer for ImageLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::IMAGE
    }

    fn size(&self) -> Size {
        let height = self.definition.display_height;
        Size::new(height * self.aspect_ratio(), height)
    }

    fn center(&self) -> Point {
        self.center
    }

    fn move_center_to(&mut self, center: Point) {
        self.center = center;
    }

    fn render_depth(&self) -> RenderLayer {
        self.depth
    }

    fn set_render_depth(&mut self, depth: RenderLayer) {
        self.depth = depth;
    }

    /// The middle of the right edge.
    fn ports(&self) -> Vec<Point> {
        vec![self.center.add_point(Point::new(self.size().half_width(), 0.0))]
    }

    fn forward_pass_animation(&self, style: &ForwardPassStyle) -> Animation {
        Animation::clip(
            Effect::Indicate {
                color: style.dot_color(),
            },
            "image",
        )
    }

    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = self.bounds();

        if let Some(source) = &self.source {
            let image = svg_element::Image::new()
                .set("href", source.as_str())
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("preserveAspectRatio", "none");
            output.add_to_layer(self.depth, Box::new(image));
        }

        let border = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", "none");
        let border = apply_stroke!(border, self.definition.border());
        output.add_to_layer(self.depth, Box::new(border));

        output
    }
}
