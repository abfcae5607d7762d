//! Connector synthesis for a laid-out layer chain.
//!
//! For every adjacent pair of layers the synthesizer asks the
//! [`ConnectorRegistry`] for a factory keyed by the pair's [`LayerKind`]s. A
//! match produces a [`Link`]; a miss produces a warning [`Diagnostic`] and a
//! gap in the chain. Either way synthesis never fails.

use std::fmt;

use log::{debug, warn};

use laminar_core::draw::RenderLayer;

use crate::{
    connector::{Connector, ConnectorStyle, FeedForwardToFeedForward, ImageToFeedForward},
    diagnostic::Diagnostic,
    layer::{Layer, LayerKind},
};

/// Builds a connector between two positioned layers.
pub type ConnectorFactory = Box<dyn Fn(&dyn Layer, &dyn Layer, &ConnectorStyle) -> Box<dyn Connector>>;

struct ConnectorRule {
    from: LayerKind,
    to: LayerKind,
    factory: ConnectorFactory,
}

/// Ordered connector rules. The first rule matching a layer pair wins.
///
/// ```
/// # use laminar::{ConnectorRegistry, LayerKind};
/// # use laminar::connector::FeedForwardToFeedForward;
/// const DENSE: LayerKind = LayerKind::new("dense");
///
/// let mut registry = ConnectorRegistry::default();
/// registry.register(DENSE, LayerKind::FEED_FORWARD, |from, to, style| {
///     Box::new(FeedForwardToFeedForward::new(from, to, style.edge().clone()))
/// });
///
/// assert!(registry.supports(DENSE, LayerKind::FEED_FORWARD));
/// assert!(!registry.supports(LayerKind::FEED_FORWARD, DENSE));
/// ```
pub struct ConnectorRegistry {
    rules: Vec<ConnectorRule>,
}

impl ConnectorRegistry {
    /// A registry without any rule; every adjacency is unsupported.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Rules registered earlier take precedence.
    pub fn register<F>(&mut self, from: LayerKind, to: LayerKind, factory: F)
    where
        F: Fn(&dyn Layer, &dyn Layer, &ConnectorStyle) -> Box<dyn Connector> + 'static,
    {
        self.rules.push(ConnectorRule {
            from,
            to,
            factory: Box::new(factory),
        });
    }

    /// Builder form of [`ConnectorRegistry::register`].
    pub fn with_rule<F>(mut self, from: LayerKind, to: LayerKind, factory: F) -> Self
    where
        F: Fn(&dyn Layer, &dyn Layer, &ConnectorStyle) -> Box<dyn Connector> + 'static,
    {
        self.register(from, to, factory);
        self
    }

    /// The factory of the first rule matching `from -> to`.
    pub fn lookup(&self, from: LayerKind, to: LayerKind) -> Option<&ConnectorFactory> {
        self.rules
            .iter()
            .find(|rule| rule.from == from && rule.to == to)
            .map(|rule| &rule.factory)
    }

    pub fn supports(&self, from: LayerKind, to: LayerKind) -> bool {
        self.lookup(from, to).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ConnectorRegistry {
    /// The built-in rules: feed-forward to feed-forward, then image to feed-forward.
    fn default() -> Self {
        Self::empty()
            .with_rule(
                LayerKind::FEED_FORWARD,
                LayerKind::FEED_FORWARD,
                |from, to, style| {
                    Box::new(FeedForwardToFeedForward::new(from, to, style.edge().clone()))
                },
            )
            .with_rule(LayerKind::IMAGE, LayerKind::FEED_FORWARD, |from, to, style| {
                Box::new(
                    ImageToFeedForward::new(from, to, style.dot_radius())
                        .with_stroke(style.edge().clone()),
                )
            })
    }
}

impl fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.rules
                    .iter()
                    .map(|rule| format!("{} -> {}", rule.from, rule.to)),
            )
            .finish()
    }
}

/// A connector and the adjacency it bridges: layer `from_index` to layer
/// `from_index + 1`.
#[derive(Debug)]
pub struct Link {
    from_index: usize,
    connector: Box<dyn Connector>,
}

impl Link {
    pub fn from_index(&self) -> usize {
        self.from_index
    }

    pub fn to_index(&self) -> usize {
        self.from_index + 1
    }

    pub fn connector(&self) -> &dyn Connector {
        self.connector.as_ref()
    }

    pub(crate) fn connector_mut(&mut self) -> &mut dyn Connector {
        self.connector.as_mut()
    }
}

/// One slot of the display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef {
    /// Index into the layers.
    Layer(usize),
    /// Index into the links.
    Connector(usize),
}

/// Result of synthesizing the connectors of a layer chain.
#[derive(Debug)]
pub struct Synthesis {
    links: Vec<Link>,
    display_sequence: Vec<ElementRef>,
    diagnostics: Vec<Diagnostic>,
}

impl Synthesis {
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Layers interleaved with the connectors between them, ending with the
    /// last layer.
    pub fn display_sequence(&self) -> &[ElementRef] {
        &self.display_sequence
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Vec<Link>, Vec<ElementRef>, Vec<Diagnostic>) {
        (self.links, self.display_sequence, self.diagnostics)
    }
}

/// Derives the connectors of a positioned layer chain.
#[derive(Debug)]
pub struct ConnectiveSynthesizer<'a> {
    registry: &'a ConnectorRegistry,
    style: &'a ConnectorStyle,
}

impl<'a> ConnectiveSynthesizer<'a> {
    pub fn new(registry: &'a ConnectorRegistry, style: &'a ConnectorStyle) -> Self {
        Self { registry, style }
    }

    /// Builds one connector per supported adjacency.
    ///
    /// Layers are only read. Each unsupported adjacency is logged and
    /// reported as a [`Diagnostic`].
    pub fn synthesize(&self, layers: &[Box<dyn Layer>]) -> Synthesis {
        let mut links = Vec::new();
        let mut display_sequence = Vec::with_capacity(layers.len() * 2);
        let mut diagnostics = Vec::new();

        for (index, pair) in layers.windows(2).enumerate() {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            display_sequence.push(ElementRef::Layer(index));

            match self.registry.lookup(from.kind(), to.kind()) {
                Some(factory) => {
                    let mut connector = factory(from, to, self.style);
                    connector.set_render_depth(RenderLayer::Connector);
                    debug!(index, connector_kind:% = connector.kind(); "Connector synthesized");

                    display_sequence.push(ElementRef::Connector(links.len()));
                    links.push(Link {
                        from_index: index,
                        connector,
                    });
                }
                None => {
                    warn!(
                        index,
                        from:% = from.kind(),
                        to:% = to.kind();
                        "Unimplemented connection between layer types, skipping"
                    );
                    diagnostics.push(Diagnostic::unsupported_adjacency(
                        index,
                        from.kind(),
                        to.kind(),
                    ));
                }
            }
        }

        if !layers.is_empty() {
            display_sequence.push(ElementRef::Layer(layers.len() - 1));
        }

        Synthesis {
            links,
            display_sequence,
            diagnostics,
        }
    }
}
