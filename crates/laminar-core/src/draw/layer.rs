//! Render depth and z-ordered SVG output.
//!
//! Every element of a diagram draws at a [`RenderLayer`]. Connectors draw below
//! layers so that edge lines crossing a layer never cover its nodes.
//!
//! - [`RenderLayer`]: The available render depths, bottom to top
//! - [`LayeredOutput`]: SVG nodes collected per render depth
//!
//! # Example
//!
//! ```
//! # use laminar_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Line};
//!
//! let mut output = LayeredOutput::new();
//!
//! // Added first, but still rendered on top of the edge
//! output.add_to_layer(RenderLayer::Layer, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Connector, Box::new(Line::new()));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Render depth of a diagram element.
///
/// The `Ord` derive uses declaration order: the first variant renders first
/// (bottom), the last renders last (top).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Connectors between layers: edges, travelling dots
    Connector,
    /// The layers themselves
    #[default]
    Layer,
}

impl RenderLayer {
    /// Returns a human-readable name for this depth.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connector => "connector",
            Self::Layer => "layer",
        }
    }

    /// Numeric z-index of this depth, as understood by scene graphs that
    /// sort by an integer depth.
    pub fn z_index(&self) -> i32 {
        match self {
            Self::Connector => 0,
            Self::Layer => 2,
        }
    }
}

/// SVG nodes grouped by render depth.
///
/// When rendered, nodes are emitted in depth order (bottom to top); nodes at
/// the same depth keep the order they were added in.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node at the specified depth.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all nodes from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes at any depth.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all depths to SVG groups, consuming the output.
    ///
    /// Each non-empty depth becomes an SVG `<g>` element with a `data-layer`
    /// attribute naming it.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable, so insertion order survives within a depth
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
