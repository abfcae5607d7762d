//! Layers: the blocks a network diagram is made of.
//!
//! Every layer implements [`Layer`], the capability contract the layout engine,
//! the connective synthesizer and the network composite are written against.
//! Nothing in Laminar inspects a concrete layer type; dispatch goes through the
//! open [`LayerKind`] tag instead, so new layer variants can be added (and
//! connected, by registering a connector rule) from outside this crate.
//!
//! Built-in variants:
//! - [`FeedForwardLayer`]: a column of nodes
//! - [`ImageLayer`]: an image block

mod feed_forward;
mod image;

pub use feed_forward::{FeedForwardDefinition, FeedForwardLayer};
pub use image::{ImageDefinition, ImageLayer};

use std::fmt;

use laminar_core::{
    animation::{Animation, Effect},
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
};

/// Type tag of a layer, used to pick the connector between two layers.
///
/// The set of kinds is open: any crate can define its own.
///
/// ```
/// # use laminar::LayerKind;
/// const CONVOLUTIONAL: LayerKind = LayerKind::new("convolutional");
/// assert_eq!(CONVOLUTIONAL.to_string(), "convolutional");
/// assert_ne!(CONVOLUTIONAL, LayerKind::FEED_FORWARD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerKind(&'static str);

impl LayerKind {
    pub const FEED_FORWARD: Self = Self::new("feed_forward");
    pub const IMAGE: Self = Self::new("image");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Styling hints forwarded to every forward-pass animation factory.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPassStyle {
    dot_color: Color,
    passing_flash: bool,
}

impl ForwardPassStyle {
    pub fn new(dot_color: Color, passing_flash: bool) -> Self {
        Self {
            dot_color,
            passing_flash,
        }
    }

    /// Color of highlights, flashes and travelling dots.
    pub fn dot_color(&self) -> Color {
        self.dot_color
    }

    /// `true` for a transient flash along each path, `false` for a dot that
    /// travels it.
    pub fn passing_flash(&self) -> bool {
        self.passing_flash
    }
}

/// Capability contract of a layer.
///
/// The layout engine is the only writer of a layer's position (through
/// [`Layer::move_center_to`] and [`Layer::shift`]), and it writes it once,
/// before any connector is derived from it.
pub trait Layer: fmt::Debug {
    /// Type tag used for connector dispatch.
    fn kind(&self) -> LayerKind;

    /// Intrinsic size, known before layout.
    fn size(&self) -> Size;

    fn center(&self) -> Point;

    fn move_center_to(&mut self, center: Point);

    /// Moves the layer by `offset`.
    fn shift(&mut self, offset: Point) {
        let center = self.center().add_point(offset);
        self.move_center_to(center);
    }

    fn bounds(&self) -> Bounds {
        self.center().to_bounds(self.size())
    }

    fn render_depth(&self) -> RenderLayer;

    fn set_render_depth(&mut self, depth: RenderLayer);

    /// Points connectors attach to, in absolute coordinates.
    fn ports(&self) -> Vec<Point>;

    /// Animation that draws the layer onto the canvas.
    fn create_animation(&self) -> Animation {
        Animation::clip(Effect::Create, self.kind().name())
    }

    /// Animation of a signal passing through the layer.
    fn forward_pass_animation(&self, style: &ForwardPassStyle) -> Animation;

    /// Static rendering of the layer at its current position.
    fn render_to_layers(&self) -> LayeredOutput;
}
