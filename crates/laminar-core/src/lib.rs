//! Laminar Core Types and Definitions
//!
//! This crate provides the rendering-environment primitives that Laminar's layer
//! and connector implementations are written against. It includes:
//!
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Animation**: Composable animation plans and timelines ([`animation`] module)
//! - **Draw**: Render depths, z-ordered SVG output and strokes ([`draw`] module)

pub mod animation;
pub mod color;
pub mod draw;
pub mod geometry;
