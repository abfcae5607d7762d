//! Connectors: the elements drawn between two adjacent layers.
//!
//! A connector is built from two already positioned layers, reading their
//! geometry through shared references. It copies what it needs at construction
//! and never touches the layers again. Which connector joins a given pair of
//! layers is decided by the [`ConnectorRegistry`](crate::ConnectorRegistry).
//!
//! Built-in variants:
//! - [`FeedForwardToFeedForward`]: an edge between every pair of nodes
//! - [`ImageToFeedForward`]: dots travelling from an image into each node

mod feed_forward_to_feed_forward;
mod image_to_feed_forward;

pub use feed_forward_to_feed_forward::FeedForwardToFeedForward;
pub use image_to_feed_forward::ImageToFeedForward;

use std::fmt;

use laminar_core::{
    animation::{Animation, Effect},
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point},
};

use crate::{config::StyleConfig, error::LaminarError, layer::ForwardPassStyle};

/// Type tag of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKind(&'static str);

impl ConnectorKind {
    pub const FEED_FORWARD_TO_FEED_FORWARD: Self = Self::new("feed_forward_to_feed_forward");
    pub const IMAGE_TO_FEED_FORWARD: Self = Self::new("image_to_feed_forward");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Style parameters handed to every connector factory.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorStyle {
    edge: StrokeDefinition,
    dot_radius: f32,
}

impl ConnectorStyle {
    pub fn new(edge: StrokeDefinition, dot_radius: f32) -> Self {
        Self { edge, dot_radius }
    }

    /// Stroke of edges (configured `edge_color` and `edge_width`).
    pub fn edge(&self) -> &StrokeDefinition {
        &self.edge
    }

    /// Radius of travelling dots.
    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self::new(StrokeDefinition::new(Color::default(), 1.5), 0.03)
    }
}

impl TryFrom<&StyleConfig> for ConnectorStyle {
    type Error = LaminarError;

    fn try_from(style: &StyleConfig) -> Result<Self, Self::Error> {
        let edge = StrokeDefinition::new(style.edge_color()?, style.edge_width());
        Ok(Self::new(edge, style.dot_radius()))
    }
}

/// Capability contract of a connector.
pub trait Connector: fmt::Debug {
    fn kind(&self) -> ConnectorKind;

    /// Bounds of everything the connector draws or animates along, or `None`
    /// if it has no paths (one of its layers had no ports).
    fn bounds(&self) -> Option<Bounds>;

    /// Moves the connector by `offset`, following a move of both its layers.
    fn shift(&mut self, offset: Point);

    fn render_depth(&self) -> RenderLayer;

    fn set_render_depth(&mut self, depth: RenderLayer);

    /// Animation that draws the connector onto the canvas.
    fn create_animation(&self) -> Animation {
        Animation::clip(Effect::Create, self.kind().name())
    }

    /// Animation of a signal travelling across the connector.
    fn forward_pass_animation(&self, style: &ForwardPassStyle) -> Animation;

    /// Static rendering of the connector.
    fn render_to_layers(&self) -> LayeredOutput;
}

/// A straight path between two ports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Path {
    from: Point,
    to: Point,
}

impl Path {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    fn shift(&mut self, offset: Point) {
        self.from = self.from.add_point(offset);
        self.to = self.to.add_point(offset);
    }

    /// The effect of a signal moving along this path.
    fn travel_effect(&self, style: &ForwardPassStyle, dot_radius: f32) -> Effect {
        if style.passing_flash() {
            Effect::PassingFlash {
                from: self.from,
                to: self.to,
                color: style.dot_color(),
            }
        } else {
            Effect::TravelingDot {
                from: self.from,
                to: self.to,
                color: style.dot_color(),
                radius: dot_radius,
            }
        }
    }
}

/// Every path from each port in `from` to each port in `to`.
fn fully_connected(from: &[Point], to: &[Point]) -> Vec<Path> {
    from.iter()
        .flat_map(|&start| to.iter().map(move |&end| Path::new(start, end)))
        .collect()
}

fn paths_bounds(paths: &[Path]) -> Option<Bounds> {
    paths
        .iter()
        .map(|path| Bounds::new_from_points(path.from, path.to))
        .reduce(|acc, bounds| acc.merge(&bounds))
}

/// One travel effect per path, all at once, subjects named `{name}[i]`.
fn travel_animation(
    paths: &[Path],
    name: &str,
    style: &ForwardPassStyle,
    dot_radius: f32,
) -> Animation {
    let clips = paths
        .iter()
        .enumerate()
        .map(|(i, path)| Animation::clip(path.travel_effect(style, dot_radius), format!("{name}[{i}]")))
        .collect();
    Animation::parallel(clips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_connected_orders_by_source() {
        let from = [Point::new(0.0, 0.0), Point::new(0.0, 1.0)];
        let to = [Point::new(1.0, 0.0), Point::new(1.0, 1.0), Point::new(1.0, 2.0)];

        let paths = fully_connected(&from, &to);
        assert_eq!(paths.len(), 6);
        assert_eq!(paths[0], Path::new(from[0], to[0]));
        assert_eq!(paths[3], Path::new(from[1], to[0]));
    }

    #[test]
    fn test_paths_bounds() {
        assert!(paths_bounds(&[]).is_none());

        let paths = [
            Path::new(Point::new(0.0, 0.0), Point::new(2.0, 1.0)),
            Path::new(Point::new(0.0, -1.0), Point::new(2.0, 0.0)),
        ];
        let bounds = paths_bounds(&paths).unwrap();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.min_y(), -1.0);
        assert_eq!(bounds.max_x(), 2.0);
        assert_eq!(bounds.max_y(), 1.0);
    }

    #[test]
    fn test_travel_effect_follows_passing_flash_hint() {
        let path = Path::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let red = Color::new("red").unwrap();

        let flash = path.travel_effect(&ForwardPassStyle::new(red, true), 0.05);
        assert!(matches!(flash, Effect::PassingFlash { .. }));

        let dot = path.travel_effect(&ForwardPassStyle::new(red, false), 0.05);
        assert_eq!(
            dot,
            Effect::TravelingDot {
                from: path.from(),
                to: path.to(),
                color: red,
                radius: 0.05,
            }
        );
    }

    #[test]
    fn test_connector_style_from_config() {
        let config = StyleConfig::default()
            .with_edge_color("green")
            .with_edge_width(3.0)
            .with_dot_radius(0.1);

        let style = ConnectorStyle::try_from(&config).unwrap();
        assert_eq!(style.edge().color(), Color::new("green").unwrap());
        assert_eq!(style.edge().width(), 3.0);
        assert_eq!(style.dot_radius(), 0.1);

        let invalid = StyleConfig::default().with_edge_color("nope");
        assert!(ConnectorStyle::try_from(&invalid).is_err());
    }
}
