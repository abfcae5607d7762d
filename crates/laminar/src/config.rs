//! Configuration types for building neural network diagrams.
//!
//! All types implement [`serde::Deserialize`] so configurations can be loaded
//! from external sources; every field has a default, so partial documents work.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas width and the spacing constant used by the layout engine.
//! - [`StyleConfig`] - Connector and animation styling.
//!
//! # Example
//!
//! ```
//! # use laminar::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.style().edge_width(), 1.5);
//! ```

use serde::Deserialize;

use laminar_core::color::Color;

use crate::error::LaminarError;

/// Width of the default canvas: a 16:9 frame that is 8 units tall.
pub const DEFAULT_FRAME_WIDTH: f32 = 128.0 / 9.0;

/// Default fraction of the frame width left empty between adjacent layers.
pub const DEFAULT_SPACING_FRACTION: f32 = 0.05;

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), LaminarError> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// Layout settings supplied by the rendering environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the canvas, in canvas units.
    frame_width: f32,

    /// Gap between adjacent layers as a fraction of `frame_width`.
    spacing_fraction: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            spacing_fraction: DEFAULT_SPACING_FRACTION,
        }
    }
}

impl LayoutConfig {
    pub fn with_frame_width(mut self, frame_width: f32) -> Self {
        self.frame_width = frame_width;
        self
    }

    pub fn with_spacing_fraction(mut self, spacing_fraction: f32) -> Self {
        self.spacing_fraction = spacing_fraction;
        self
    }

    /// Returns the canvas width.
    pub fn frame_width(&self) -> f32 {
        self.frame_width
    }

    /// Returns the spacing fraction.
    pub fn spacing_fraction(&self) -> f32 {
        self.spacing_fraction
    }

    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] if the frame width is not a positive
    /// number or the spacing fraction is negative or not finite.
    pub fn validate(&self) -> Result<(), LaminarError> {
        if !(self.frame_width.is_finite() && self.frame_width > 0.0) {
            return Err(LaminarError::config(format!(
                "frame_width must be a positive number, got {}",
                self.frame_width
            )));
        }
        if !(self.spacing_fraction.is_finite() && self.spacing_fraction >= 0.0) {
            return Err(LaminarError::config(format!(
                "spacing_fraction must be a non-negative number, got {}",
                self.spacing_fraction
            )));
        }
        Ok(())
    }
}

/// Styling for connectors and animations.
///
/// Colors are stored as CSS color strings and parsed on access.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Stroke color of edges between feed-forward layers.
    edge_color: String,

    /// Reserved for explicit spacing control; the layout engine derives
    /// spacing from [`LayoutConfig`] instead.
    layer_spacing: f32,

    /// Color of the flashes and dots that travel during a forward pass.
    animation_dot_color: String,

    /// Stroke width of edges, in hundredths of a canvas unit.
    edge_width: f32,

    /// Radius of the dots travelling from an image layer into a feed-forward layer.
    dot_radius: f32,

    /// Background color of exported snapshots.
    background_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            edge_color: "white".to_string(),
            layer_spacing: 0.8,
            animation_dot_color: "red".to_string(),
            edge_width: 1.5,
            dot_radius: 0.03,
            background_color: None,
        }
    }
}

impl StyleConfig {
    pub fn with_edge_color(mut self, color: impl Into<String>) -> Self {
        self.edge_color = color.into();
        self
    }

    pub fn with_layer_spacing(mut self, layer_spacing: f32) -> Self {
        self.layer_spacing = layer_spacing;
        self
    }

    pub fn with_animation_dot_color(mut self, color: impl Into<String>) -> Self {
        self.animation_dot_color = color.into();
        self
    }

    pub fn with_edge_width(mut self, edge_width: f32) -> Self {
        self.edge_width = edge_width;
        self
    }

    pub fn with_dot_radius(mut self, dot_radius: f32) -> Self {
        self.dot_radius = dot_radius;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the parsed edge [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn edge_color(&self) -> Result<Color, LaminarError> {
        parse_color("edge_color", &self.edge_color)
    }

    pub fn layer_spacing(&self) -> f32 {
        self.layer_spacing
    }

    /// Returns the parsed animation dot [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn animation_dot_color(&self) -> Result<Color, LaminarError> {
        parse_color("animation_dot_color", &self.animation_dot_color)
    }

    pub fn edge_width(&self) -> f32 {
        self.edge_width
    }

    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, LaminarError> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }

    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] for unparsable colors or negative,
    /// non-finite sizes.
    pub fn validate(&self) -> Result<(), LaminarError> {
        self.edge_color()?;
        self.animation_dot_color()?;
        self.background_color()?;

        for (name, value) in [
            ("layer_spacing", self.layer_spacing),
            ("edge_width", self.edge_width),
            ("dot_radius", self.dot_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LaminarError::config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, LaminarError> {
    Color::new(value).map_err(|err| LaminarError::config(format!("Invalid {field} in config: {err}")))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_approx_eq!(f32, config.layout().frame_width(), 128.0 / 9.0);
        assert_approx_eq!(f32, config.layout().spacing_fraction(), 0.05);
        assert_approx_eq!(f32, config.style().layer_spacing(), 0.8);
        assert_approx_eq!(f32, config.style().edge_width(), 1.5);
        assert_approx_eq!(f32, config.style().dot_radius(), 0.03);
        assert_eq!(
            config.style().edge_color().unwrap(),
            Color::new("white").unwrap()
        );
        assert_eq!(
            config.style().animation_dot_color().unwrap(),
            Color::new("red").unwrap()
        );
        assert!(config.style().background_color().unwrap().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_toml() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            spacing_fraction = 0.1

            [style]
            edge_color = "#336699"
            dot_radius = 0.05
            background_color = "black"
            "##,
        )
        .expect("valid config");

        assert_approx_eq!(f32, config.layout().spacing_fraction(), 0.1);
        assert_approx_eq!(f32, config.layout().frame_width(), DEFAULT_FRAME_WIDTH);
        assert_approx_eq!(f32, config.style().dot_radius(), 0.05);
        assert_approx_eq!(f32, config.style().edge_width(), 1.5);
        assert!(config.style().background_color().unwrap().is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config is valid");
        assert_approx_eq!(f32, config.style().edge_width(), 1.5);
    }

    #[test]
    fn test_negative_spacing_fraction_rejected() {
        let layout = LayoutConfig::default().with_spacing_fraction(-0.1);
        let err = layout.validate().unwrap_err();
        assert!(matches!(err, LaminarError::Config(msg) if msg.contains("spacing_fraction")));
    }

    #[test]
    fn test_non_positive_frame_width_rejected() {
        assert!(LayoutConfig::default().with_frame_width(0.0).validate().is_err());
        assert!(
            LayoutConfig::default()
                .with_frame_width(f32::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_invalid_color_rejected() {
        let style = StyleConfig::default().with_edge_color("not-a-color");
        let err = style.validate().unwrap_err();
        assert!(matches!(err, LaminarError::Config(msg) if msg.contains("edge_color")));
    }

    #[test]
    fn test_negative_sizes_rejected() {
        assert!(StyleConfig::default().with_edge_width(-1.0).validate().is_err());
        assert!(StyleConfig::default().with_dot_radius(-0.01).validate().is_err());
        assert!(
            StyleConfig::default()
                .with_layer_spacing(f32::INFINITY)
                .validate()
                .is_err()
        );
    }
}
