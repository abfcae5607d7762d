//! SVG snapshot export.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use laminar_core::{color::Color, geometry::Bounds};

use crate::{config::StyleConfig, error::LaminarError, network::NeuralNetwork};

/// Empty space kept around the diagram, in canvas units.
pub const DEFAULT_PADDING: f32 = 0.5;

/// Output pixels per canvas unit.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 100.0;

/// Renders a [`NeuralNetwork`] as an SVG document.
///
/// ```
/// # use laminar::{AppConfig, NeuralNetwork, export::svg::SvgExporter, layer::FeedForwardDefinition};
/// let config = AppConfig::default();
/// let network =
///     NeuralNetwork::feed_forward(&[2, 3], &FeedForwardDefinition::default(), &config).unwrap();
///
/// let svg = SvgExporter::new(config.style()).unwrap().render_to_string(&network);
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgExporter {
    padding: f32,
    pixels_per_unit: f32,
    background: Option<Color>,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            background: None,
        }
    }
}

impl SvgExporter {
    /// Creates an exporter using the style's background color.
    ///
    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] if the background color cannot be parsed.
    pub fn new(style: &StyleConfig) -> Result<Self, LaminarError> {
        Ok(Self::default().with_background(style.background_color()?))
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    /// `None` leaves the background transparent.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Area covered by the document, in canvas units.
    pub fn view_box(&self, network: &NeuralNetwork) -> Bounds {
        network.bounds().expand(self.padding)
    }

    pub fn render(&self, network: &NeuralNetwork) -> Document {
        let view_box = self.view_box(network);

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view_box.min_x(),
                    view_box.min_y(),
                    view_box.width(),
                    view_box.height()
                ),
            )
            .set("width", view_box.width() * self.pixels_per_unit)
            .set("height", view_box.height() * self.pixels_per_unit);

        if let Some(background) = &self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", view_box.min_x())
                .set("y", view_box.min_y())
                .set("width", view_box.width())
                .set("height", view_box.height())
                .set("fill", background);
            doc = doc.add(rect);
        }

        for group in network.render_to_layers().render() {
            doc = doc.add(group);
        }

        debug!(view_box:?; "SVG document rendered");
        doc
    }

    pub fn render_to_string(&self, network: &NeuralNetwork) -> String {
        self.render(network).to_string()
    }

    /// Writes the rendered document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LaminarError::Io`] if the file cannot be created or written.
    pub fn save(&self, network: &NeuralNetwork, path: impl AsRef<Path>) -> Result<(), LaminarError> {
        let path = path.as_ref();
        let doc = self.render(network);

        info!(path:?; "Creating SVG file");
        let mut file = File::create(path).map_err(|err| {
            error!(path:?, err:err; "Failed to create SVG file");
            LaminarError::Io(err)
        })?;

        write!(file, "{doc}").map_err(|err| {
            error!(path:?, err:err; "Failed to write SVG content");
            LaminarError::Io(err)
        })?;

        Ok(())
    }
}
