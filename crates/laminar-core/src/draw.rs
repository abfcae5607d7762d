//! Drawing primitives shared by layer and connector implementations.
//!
//! Diagram elements render to one or more [`RenderLayer`]s, which are ordered
//! during final SVG generation so connectors always sit behind layers.

mod layer;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{STROKE_WIDTH_SCALE, StrokeCap, StrokeDefinition};
