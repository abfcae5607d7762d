//! Static snapshots of a laid-out network.
//!
//! Animations are plans for a rendering environment to play back; exports are
//! the one place Laminar draws something itself. A snapshot shows every
//! element of the display sequence at its final position, connectors below
//! layers.
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgExporter`]

pub mod svg;
