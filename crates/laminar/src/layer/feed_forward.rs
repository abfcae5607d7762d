//! Feed-forward layers: a column of nodes inside an outline.

use std::rc::Rc;

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

/// Visual parameters of a feed-forward layer.
///
/// Definitions are shared between layers through an `Rc`, so a whole network
/// of identical layers carries one definition.
#[derive(Debug, Clone)]
pub struct FeedForwardDefinition {
    node_radius: f32,
    node_spacing: f32,
    node_color: Color,
    node_stroke: StrokeDefinition,
    layer_buffer: f32,
    outline: StrokeDefinition,
}

impl Default for FeedForwardDefinition {
    fn default() -> Self {
        Self {
            node_radius: 0.08,
            node_spacing: 0.06,
            node_color: Color::new("blue").expect("'blue' is a valid CSS color"),
            node_stroke: StrokeDefinition::new(Color::default(), 2.0),
            layer_buffer: 0.1,
            outline: StrokeDefinition::new(Color::default(), 2.0),
        }
    }
}

impl FeedForwardDefinition {
    pub fn with_node_radius(mut self, node_radius: f32) -> Self {
        self.node_radius = node_radius;
        self
    }

    /// Vertical gap between two nodes.
    pub fn with_node_spacing(mut self, node_spacing: f32) -> Self {
        self.node_spacing = node_spacing;
        self
    }

    pub fn with_node_color(mut self, node_color: Color) -> Self {
        self.node_color = node_color;
        self
    }

    pub fn with_node_stroke(mut self, node_stroke: StrokeDefinition) -> Self {
        self.node_stroke = node_stroke;
        self
    }

    /// Gap between the nodes and the outline.
    pub fn with_layer_buffer(mut self, layer_buffer: f32) -> Self {
        self.layer_buffer = layer_buffer;
        self
    }

    pub fn with_outline(mut self, outline: StrokeDefinition) -> Self {
        self.outline = outline;
        self
    }

    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    pub fn node_spacing(&self) -> f32 {
        self.node_spacing
    }

    pub fn node_color(&self) -> Color {
        self.node_color
    }

    pub fn node_stroke(&self) -> &StrokeDefinition {
        &self.node_stroke
    }

    pub fn layer_buffer(&self) -> f32 {
        self.layer_buffer
    }

    pub fn outline(&self) -> &StrokeDefinition {
        &self.outline
    }

    /// Checks that every length is a non-negative number.
    ///
    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), LaminarError> {
        for (name, value) in [
            ("node_radius", self.node_radius),
            ("node_spacing", self.node_spacing),
            ("layer_buffer", self.layer_buffer),
            ("node_stroke width", self.node_stroke.width()),
            ("outline width", self.outline.width()),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LaminarError::config(format!(
                    "feed-forward {name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Height taken by `num_nodes` stacked nodes, without the buffer.
    fn column_height(&self, num_nodes: usize) -> f32 {
        if num_nodes == 0 {
            return 0.0;
        }
        let n = num_nodes as f32;
        n * 2.0 * self.node_radius + (n - 1.0) * self.node_spacing
    }
}

/// A layer of `num_nodes` nodes stacked vertically.
#[derive(Debug, Clone)]
pub struct FeedForwardLayer {
    num_nodes: usize,
    definition: Rc<FeedForwardDefinition>,
    center: Point,
    depth: RenderLayer,
}

impl FeedForwardLayer {
    /// Creates a layer with the default definition, centered at the origin.
    pub fn new(num_nodes: usize) -> Self {
        Self::with_definition(num_nodes, Rc::new(FeedForwardDefinition::default()))
    }

    pub fn with_definition(num_nodes: usize, definition: Rc<FeedForwardDefinition>) -> Self {
        Self {
            num_nodes,
            definition,
            center: Point::default(),
            depth: RenderLayer::default(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn definition(&self) -> &FeedForwardDefinition {
        &self.definition
    }

    /// Centers of the nodes, top to bottom.
    pub fn node_centers(&self) -> Vec<Point> {
        let def = &self.definition;
        let top = self.center.y() - def.column_height(self.num_nodes) / 2.0 + def.node_radius;
        let step = 2.0 * def.node_radius + def.node_spacing;

        (0..self.num_nodes)
            .map(|i| Point::new(self.center.x(), top + i as f32 * step))
            .collect()
    }
}

impl Layer for FeedForwardLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::FEED_FORWARD
    }

    fn size(&self) -> Size {
        let def = &self.definition;
        Size::new(
            2.0 * def.node_radius + 2.0 * def.layer_buffer,
            def.column_height(self.num_nodes) + 2.0 * def.layer_buffer,
        )
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

    fn ports(&self) -> Vec<Point> {
        self.node_centers()
    }

    fn forward_pass_animation(&self, style: &ForwardPassStyle) -> Animation {
        let highlights = (0..self.num_nodes)
            .map(|i| {
                Animation::clip(
                    Effect::Highlight {
                        color: style.dot_color(),
                    },
                    format!("node[{i}]"),
                )
            })
            .collect();
        Animation::parallel(highlights)
    }

    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = self.bounds();

        let outline = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", "none");
        let outline = apply_stroke!(outline, self.definition.outline());
        output.add_to_layer(self.depth, Box::new(outline));

        for node in self.node_centers() {
            let circle = svg_element::Circle::new()
                .set("cx", node.x())
                .set("cy", node.y())
                .set("r", self.definition.node_radius())
                .set("fill", &self.definition.node_color());
            let circle = apply_stroke!(circle, self.definition.node_stroke());
            output.add_to_layer(self.depth, Box::new(circle));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_size_grows_with_nodes() {
        let small = FeedForwardLayer::new(1).size();
        let large = FeedForwardLayer::new(5).size();

        assert_approx_eq!(f32, small.width(), large.width());
        // 5 nodes: 5 * 0.16 + 4 * 0.06 + 0.2
        assert_approx_eq!(f32, large.height(), 1.24, epsilon = 1e-5);
        assert!(large.height() > small.height());
    }

    #[test]
    fn test_empty_layer_has_only_buffer() {
        let layer = FeedForwardLayer::new(0);
        assert_approx_eq!(f32, layer.size().height(), 0.2, epsilon = 1e-6);
        assert!(layer.ports().is_empty());
    }

    #[test]
    fn test_node_centers_are_symmetric_about_center() {
        let mut layer = FeedForwardLayer::new(3);
        layer.move_center_to(Point::new(2.0, 1.0));

        let nodes = layer.node_centers();
        assert_eq!(nodes.len(), 3);
        assert!(nodes.iter().all(|n| n.x() == 2.0));
        assert_approx_eq!(f32, nodes[1].y(), 1.0, epsilon = 1e-6);
        assert_approx_eq!(f32, nodes[0].y() + nodes[2].y(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_nodes_stay_inside_bounds() {
        let layer = FeedForwardLayer::new(4);
        let bounds = layer.bounds();
        let radius = layer.definition().node_radius();

        for node in layer.node_centers() {
            assert!(node.y() - radius >= bounds.min_y() - 1e-6);
            assert!(node.y() + radius <= bounds.max_y() + 1e-6);
        }
    }

    #[test]
    fn test_forward_pass_highlights_every_node() {
        let layer = FeedForwardLayer::new(3);
        let style = ForwardPassStyle::new(Color::new("red").unwrap(), true);

        let animation = layer.forward_pass_animation(&style);
        assert_approx_eq!(f32, animation.run_time(), 1.0);

        let timeline = animation.schedule();
        assert_eq!(timeline.len(), 3);
        assert!(timeline.iter().all(|c| c.start() == 0.0));
        assert_eq!(timeline.clips()[2].subject(), "node[2]");
    }

    #[test]
    fn test_render_draws_outline_and_nodes() {
        let layer = FeedForwardLayer::new(2);
        let nodes = layer.render_to_layers().render();

        assert_eq!(nodes.len(), 1);
        let svg = nodes[0].to_string();
        assert!(svg.contains("data-layer=\"layer\""));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<rect").count(), 1);
    }

    #[test]
    fn test_shared_definition() {
        let definition = Rc::new(FeedForwardDefinition::default().with_node_radius(0.2));
        let a = FeedForwardLayer::with_definition(2, Rc::clone(&definition));
        let b = FeedForwardLayer::with_definition(4, Rc::clone(&definition));

        assert_approx_eq!(f32, a.size().width(), b.size().width());
        assert_approx_eq!(f32, a.size().width(), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_definition_validation() {
        assert!(FeedForwardDefinition::default().validate().is_ok());
        assert!(
            FeedForwardDefinition::default()
                .with_node_radius(0.0)
                .with_layer_buffer(0.0)
                .validate()
                .is_ok()
        );

        let invalid = [
            FeedForwardDefinition::default().with_node_radius(-0.5),
            FeedForwardDefinition::default().with_node_spacing(f32::NAN),
            FeedForwardDefinition::default().with_layer_buffer(-0.1),
            FeedForwardDefinition::default().with_layer_buffer(f32::INFINITY),
            FeedForwardDefinition::default()
                .with_outline(StrokeDefinition::new(Color::default(), -1.0)),
        ];
        for definition in invalid {
            let err = definition.validate().unwrap_err();
            assert!(matches!(err, LaminarError::Config(_)), "{definition:?}");
        }

        let err = FeedForwardDefinition::default()
            .with_node_radius(-0.5)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("node_radius"));
    }
}
