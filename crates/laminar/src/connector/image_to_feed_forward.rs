//! Dots travelling from an image layer into a feed-forward layer.

use svg::node::element as svg_element;

use laminar_core::{
    animation::Animation,
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point},
};

use crate::{
    connector::{Connector, ConnectorKind, Path, fully_connected, paths_bounds, travel_animation},
    layer::{ForwardPassStyle, Layer},
};

/// Paths from the image's port to every node of the next layer.
///
/// The paths are only visible while animating; a static rendering shows a dot
/// at each node entry point, outlined with the connector's stroke.
#[derive(Debug, Clone)]
pub struct ImageToFeedForward {
    paths: Vec<Path>,
    dot_radius: f32,
    stroke: StrokeDefinition,
    depth: RenderLayer,
}

impl ImageToFeedForward {
    pub fn new(from: &dyn Layer, to: &dyn Layer, dot_radius: f32) -> Self {
        Self {
            paths: fully_connected(&from.ports(), &to.ports()),
            dot_radius,
            stroke: StrokeDefinition::default(),
            depth: RenderLayer::Connector,
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Connector for ImageToFeedForward {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::IMAGE_TO_FEED_FORWARD
    }

    fn bounds(&self) -> Option<Bounds> {
        paths_bounds(&self.paths)
    }

    fn shift(&mut self, offset: Point) {
        for path in &mut self.paths {
            path.shift(offset);
        }
    }

    fn render_depth(&self) -> RenderLayer {
        self.depth
    }

    fn set_render_depth(&mut self, depth: RenderLayer) {
        self.depth = depth;
    }

    fn forward_pass_animation(&self, style: &ForwardPassStyle) -> Animation {
        travel_animation(&self.paths, "dot", style, self.dot_radius)
    }

    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for path in &self.paths {
            let dot = svg_element::Circle::new()
                .set("cx", path.to().x())
                .set("cy", path.to().y())
                .set("r", self.dot_radius)
                .set("fill", "none");
            let dot = apply_stroke!(dot, &self.stroke);
            output.add_to_layer(self.depth, Box::new(dot));
        }

        output
    }
}
