//! The neural-network diagram: layers, their connectors and the animations
//! composed over them.

use std::rc::Rc;

use log::{debug, info, trace};

use laminar_core::{
    animation::{Animation, AnimationGroup},
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::{Bounds, Point},
};

use crate::{
    config::{AppConfig, StyleConfig},
    connector::{Connector, ConnectorStyle},
    diagnostic::Diagnostic,
    error::LaminarError,
    layer::{FeedForwardDefinition, FeedForwardLayer, ForwardPassStyle, Layer},
    layout::LayoutEngine,
    synthesis::{ConnectiveSynthesizer, ConnectorRegistry, ElementRef, Link},
};

/// Default duration of a forward pass, in seconds.
pub const DEFAULT_FORWARD_PASS_RUN_TIME: f32 = 10.0;

/// Options of [`NeuralNetwork::forward_pass_animation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardPassOptions {
    run_time: f32,
    passing_flash: bool,
}

impl Default for ForwardPassOptions {
    fn default() -> Self {
        Self {
            run_time: DEFAULT_FORWARD_PASS_RUN_TIME,
            passing_flash: true,
        }
    }
}

impl ForwardPassOptions {
    /// Total duration of the pass; every component is scaled to fit.
    pub fn with_run_time(mut self, run_time: f32) -> Self {
        self.run_time = run_time;
        self
    }

    /// Flash along connector paths (`true`) or move dots along them (`false`).
    pub fn with_passing_flash(mut self, passing_flash: bool) -> Self {
        self.passing_flash = passing_flash;
        self
    }

    pub fn run_time(&self) -> f32 {
        self.run_time
    }

    pub fn passing_flash(&self) -> bool {
        self.passing_flash
    }
}

/// A resolved slot of the display sequence.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    Layer(&'a dyn Layer),
    Connector(&'a dyn Connector),
}

impl Element<'_> {
    pub fn create_animation(&self) -> Animation {
        match self {
            Self::Layer(layer) => layer.create_animation(),
            Self::Connector(connector) => connector.create_animation(),
        }
    }

    pub fn render_depth(&self) -> RenderLayer {
        match self {
            Self::Layer(layer) => layer.render_depth(),
            Self::Connector(connector) => connector.render_depth(),
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Layer(layer) => Some(layer.bounds()),
            Self::Connector(connector) => connector.bounds(),
        }
    }

    pub fn render_to_layers(&self) -> LayeredOutput {
        match self {
            Self::Layer(layer) => layer.render_to_layers(),
            Self::Connector(connector) => connector.render_to_layers(),
        }
    }
}

/// Builder for [`NeuralNetwork`].
///
/// ```
/// # use laminar::{NeuralNetwork, layer::{FeedForwardLayer, ImageLayer}};
/// let network = NeuralNetwork::builder()
///     .with_layer(ImageLayer::new(28, 28))
///     .with_layer(FeedForwardLayer::new(4))
///     .with_layer(FeedForwardLayer::new(2))
///     .build()
///     .unwrap();
///
/// assert_eq!(network.layers().len(), 3);
/// assert_eq!(network.connectors().len(), 2);
/// assert!(network.diagnostics().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    layers: Vec<Box<dyn Layer>>,
    config: AppConfig,
    registry: ConnectorRegistry,
}

impl NetworkBuilder {
    /// Appends a layer to the chain.
    pub fn with_layer(mut self, layer: impl Layer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Appends several layers to the chain, in order.
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = Box<dyn Layer>>) -> Self {
        self.layers.extend(layers);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the built-in connector rules.
    pub fn with_registry(mut self, registry: ConnectorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Lays out the layers, synthesizes their connectors and centers the
    /// result at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] if no layer was added or the
    /// configuration is invalid. Unsupported adjacencies are not errors; they
    /// are reported through [`NeuralNetwork::diagnostics`].
    pub fn build(self) -> Result<NeuralNetwork, LaminarError> {
        let Self {
            mut layers,
            config,
            registry,
        } = self;

        info!(layers_count = layers.len(); "Building neural network");

        if layers.is_empty() {
            return Err(LaminarError::config(
                "a neural network requires at least one layer",
            ));
        }
        config.validate()?;

        LayoutEngine::new(config.layout())?.place(&mut layers)?;
        debug!("Layers placed");

        let connector_style = ConnectorStyle::try_from(config.style())?;
        let synthesis = ConnectiveSynthesizer::new(&registry, &connector_style).synthesize(&layers);
        let (links, display_sequence, diagnostics) = synthesis.into_parts();
        debug!(
            connectors_count = links.len(),
            diagnostics_count = diagnostics.len();
            "Connectors synthesized"
        );

        let mut adjacency = vec![None; layers.len() - 1];
        for (position, link) in links.iter().enumerate() {
            adjacency[link.from_index()] = Some(position);
        }

        let mut network = NeuralNetwork {
            layers,
            links,
            adjacency,
            display_sequence,
            diagnostics,
            dot_color: config.style().animation_dot_color()?,
            style: config.style().clone(),
            bounds: Bounds::default(),
        };
        network.recenter();

        info!(
            layers_count = network.layers.len(),
            connectors_count = network.links.len();
            "Neural network built"
        );
        Ok(network)
    }
}

/// A laid-out chain of layers and the connectors between them.
///
/// Construction runs the whole pipeline (layout, connector synthesis,
/// recentering), so every `NeuralNetwork` is ready to animate or export. The
/// layers and connectors cannot be mutated afterwards.
#[derive(Debug)]
pub struct NeuralNetwork {
    layers: Vec<Box<dyn Layer>>,
    links: Vec<Link>,
    /// Link position for each adjacency, `None` where unsupported.
    adjacency: Vec<Option<usize>>,
    display_sequence: Vec<ElementRef>,
    diagnostics: Vec<Diagnostic>,
    style: StyleConfig,
    dot_color: Color,
    bounds: Bounds,
}

impl NeuralNetwork {
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::default()
    }

    /// Builds a network from `layers` with the built-in connector rules.
    ///
    /// # Errors
    ///
    /// See [`NetworkBuilder::build`].
    pub fn new(layers: Vec<Box<dyn Layer>>, config: &AppConfig) -> Result<Self, LaminarError> {
        Self::builder()
            .with_layers(layers)
            .with_config(config.clone())
            .build()
    }

    /// Builds a chain of feed-forward layers, one per entry of `node_counts`,
    /// all sharing `definition`.
    ///
    /// ```
    /// # use laminar::{AppConfig, NeuralNetwork, layer::FeedForwardDefinition};
    /// let network = NeuralNetwork::feed_forward(
    ///     &[3, 5, 3],
    ///     &FeedForwardDefinition::default(),
    ///     &AppConfig::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(network.connectors().len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`NetworkBuilder::build`].
    pub fn feed_forward(
        node_counts: &[usize],
        definition: &FeedForwardDefinition,
        config: &AppConfig,
    ) -> Result<Self, LaminarError> {
        definition.validate()?;
        let definition = Rc::new(definition.clone());
        let layers = node_counts.iter().map(|&num_nodes| {
            Box::new(FeedForwardLayer::with_definition(
                num_nodes,
                Rc::clone(&definition),
            )) as Box<dyn Layer>
        });

        Self::builder()
            .with_layers(layers)
            .with_config(config.clone())
            .build()
    }

    /// Layers in chain order.
    pub fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&dyn Layer> {
        self.layers.get(index).map(|layer| layer.as_ref())
    }

    /// Synthesized connectors in chain order, one per supported adjacency.
    pub fn connectors(&self) -> &[Link] {
        &self.links
    }

    /// The connector between layer `index` and layer `index + 1`, if any.
    pub fn connector_after(&self, index: usize) -> Option<&dyn Connector> {
        let position = (*self.adjacency.get(index)?)?;
        Some(self.links[position].connector())
    }

    pub fn display_sequence(&self) -> &[ElementRef] {
        &self.display_sequence
    }

    /// The display sequence with every slot resolved.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        self.display_sequence.iter().map(|element| match *element {
            ElementRef::Layer(index) => Element::Layer(self.layers[index].as_ref()),
            ElementRef::Connector(position) => Element::Connector(self.links[position].connector()),
        })
    }

    /// Warnings collected while building, such as unsupported adjacencies.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Union of the bounds of every element. Centered at the origin.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Every element drawn one after the other, in display order.
    ///
    /// The run time is the sum of the elements' creation run times.
    pub fn build_animation(&self) -> Animation {
        let steps = self
            .display_sequence
            .iter()
            .zip(self.elements())
            .map(|(slot, element)| element.create_animation().labeled(self.slot_label(*slot)))
            .collect();

        Animation::sequence(steps)
    }

    /// A signal flowing through the chain, from the first layer to the last.
    ///
    /// Each layer's pass is followed by the pass of the connector leaving it,
    /// if that adjacency has one. The whole plan is scaled to
    /// `options.run_time()`.
    ///
    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] if the run time is not a positive
    /// finite number.
    pub fn forward_pass_animation(
        &self,
        options: &ForwardPassOptions,
    ) -> Result<Animation, LaminarError> {
        let run_time = options.run_time();
        if !run_time.is_finite() || run_time <= 0.0 {
            return Err(LaminarError::config(format!(
                "forward pass run time must be a positive number, got {run_time}"
            )));
        }

        let style = ForwardPassStyle::new(self.dot_color, options.passing_flash());
        let mut steps = Vec::with_capacity(self.layers.len() + self.links.len());

        for (index, layer) in self.layers.iter().enumerate() {
            steps.push(
                layer
                    .forward_pass_animation(&style)
                    .labeled(format!("layer[{index}]")),
            );
            if let Some(connector) = self.connector_after(index) {
                steps.push(
                    connector
                        .forward_pass_animation(&style)
                        .labeled(format!("connector[{index}]")),
                );
            }
        }

        let animation: Animation = AnimationGroup::new(steps)
            .with_lag_ratio(1.0)
            .with_run_time(run_time)
            .into();
        trace!(animation:?; "Forward pass planned");

        Ok(animation)
    }

    /// Static rendering of every element, grouped by render depth.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for element in self.elements() {
            output.merge(element.render_to_layers());
        }
        output
    }

    fn slot_label(&self, slot: ElementRef) -> String {
        match slot {
            ElementRef::Layer(index) => format!("layer[{index}]"),
            ElementRef::Connector(position) => {
                format!("connector[{}]", self.links[position].from_index())
            }
        }
    }

    /// Union of the bounds of every element.
    fn content_bounds(&self) -> Option<Bounds> {
        self.elements()
            .filter_map(|e| e.bounds())
            .reduce(|a, b| a.merge(&b))
    }

    /// Moves every element so the union of their bounds is centered at the origin.
    fn recenter(&mut self) {
        let Some(bounds) = self.content_bounds() else {
            return;
        };
        let offset = Point::default().sub_point(bounds.center());

        for layer in &mut self.layers {
            layer.shift(offset);
        }
        for link in &mut self.links {
            link.connector_mut().shift(offset);
        }
        // Must equal the union of the moved elements, rounding included.
        self.bounds = self.content_bounds().unwrap_or(bounds);

        trace!(offset:?, bounds:? = self.bounds; "Network recentered");
    }
}
