//! Edges between two feed-forward layers.

use svg::node::element as svg_element;

use laminar_core::{
    animation::Animation,
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeCap, StrokeDefinition},
    geometry::{Bounds, Point},
};

use crate::{
    connector::{Connector, ConnectorKind, Path, fully_connected, paths_bounds, travel_animation},
    layer::{ForwardPassStyle, Layer},
};

/// A straight edge from every node of one layer to every node of the next.
#[derive(Debug, Clone)]
pub struct FeedForwardToFeedForward {
    edges: Vec<Path>,
    stroke: StrokeDefinition,
    depth: RenderLayer,
}

impl FeedForwardToFeedForward {
    pub fn new(from: &dyn Layer, to: &dyn Layer, mut stroke: StrokeDefinition) -> Self {
        stroke.set_cap(StrokeCap::Round);
        Self {
            edges: fully_connected(&from.ports(), &to.ports()),
            stroke,
            depth: RenderLayer::Connector,
        }
    }

    /// Edges ordered by source node, then target node.
    pub fn edges(&self) -> &[Path] {
        &self.edges
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Connector for FeedForwardToFeedForward {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::FEED_FORWARD_TO_FEED_FORWARD
    }

    fn bounds(&self) -> Option<Bounds> {
        paths_bounds(&self.edges)
    }

    fn shift(&mut self, offset: Point) {
        for edge in &mut self.edges {
            edge.shift(offset);
        }
    }

    fn render_depth(&self) -> RenderLayer {
        self.depth
    }

    fn set_render_depth(&mut self, depth: RenderLayer) {
        self.depth = depth;
    }

    /// Dots are sized after the edge stroke.
    fn forward_pass_animation(&self, style: &ForwardPassStyle) -> Animation {
        travel_animation(&self.edges, "edge", style, self.stroke.canvas_width())
    }

    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for edge in &self.edges {
            let line = svg_element::Line::new()
                .set("x1", edge.from().x())
                .set("y1", edge.from().y())
                .set("x2", edge.to().x())
                .set("y2", edge.to().y());
            let line = apply_stroke!(line, &self.stroke);
            output.add_to_layer(self.depth, Box::new(line));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use laminar_core::{animation::Effect, color::Color};

    use super::*;
    use crate::layer::FeedForwardLayer;

    fn positioned(num_nodes: usize, x: f32) -> FeedForwardLayer {
        let mut layer = FeedForwardLayer::new(num_nodes);
        layer.move_center_to(Point::new(x, 0.0));
        layer
    }

    #[test]
    fn test_edges_connect_every_node_pair() {
        let from = positioned(3, 0.0);
        let to = positioned(2, 1.0);

        let connector = FeedForwardToFeedForward::new(&from, &to, StrokeDefinition::default());

        assert_eq!(connector.edges().len(), 6);
        assert!(connector.edges().iter().all(|e| e.from().x() == 0.0));
        assert!(connector.edges().iter().all(|e| e.to().x() == 1.0));
        assert_eq!(connector.render_depth(), RenderLayer::Connector);
    }

    #[test]
    fn test_shift_moves_every_edge() {
        let from = positioned(1, 0.0);
        let to = positioned(1, 1.0);
        let mut connector = FeedForwardToFeedForward::new(&from, &to, StrokeDefinition::default());

        connector.shift(Point::new(-0.5, 2.0));

        let bounds = connector.bounds().unwrap();
        assert_eq!(bounds.min_x(), -0.5);
        assert_eq!(bounds.min_y(), 2.0);
        assert_eq!(bounds.max_x(), 0.5);
    }

    #[test]
    fn test_empty_layer_yields_no_edges() {
        let from = positioned(0, 0.0);
        let to = positioned(3, 1.0);
        let connector = FeedForwardToFeedForward::new(&from, &to, StrokeDefinition::default());

        assert!(connector.edges().is_empty());
        assert!(connector.bounds().is_none());
        assert_eq!(
            connector
                .forward_pass_animation(&ForwardPassStyle::new(Color::default(), true))
                .run_time(),
            0.0
        );
    }

    #[test]
    fn test_forward_pass_flashes_each_edge() {
        let from = positioned(2, 0.0);
        let to = positioned(2, 1.0);
        let connector = FeedForwardToFeedForward::new(&from, &to, StrokeDefinition::default());
        let style = ForwardPassStyle::new(Color::new("red").unwrap(), true);

        let timeline = connector.forward_pass_animation(&style).schedule();

        assert_eq!(timeline.len(), 4);
        assert!(
            timeline
                .iter()
                .all(|c| matches!(c.effect(), Effect::PassingFlash { .. }))
        );
        assert_eq!(timeline.clips()[3].subject(), "edge[3]");
    }

    #[test]
    fn test_render_draws_one_line_per_edge() {
        let from = positioned(2, 0.0);
        let to = positioned(3, 1.0);
        let connector = FeedForwardToFeedForward::new(&from, &to, StrokeDefinition::default());

        let nodes = connector.render_to_layers().render();
        let svg = nodes[0].to_string();
        assert!(svg.contains("data-layer=\"connector\""));
        assert_eq!(svg.matches("<line").count(), 6);
        assert!(svg.contains("stroke-linecap=\"round\""));
    }
}
