//! Laminar - layout and animation planning for neural-network diagrams.
//!
//! A network is a linear chain of layers. Laminar places the layers left to
//! right, chooses a connector for every adjacent pair based on the two layers'
//! kinds, centers the result and composes animation plans over it: a build
//! animation that draws each element in turn and a forward pass that sends a
//! signal through the chain.
//!
//! Playback is left to a rendering environment. Animations are plain data
//! ([`animation::Animation`]) that can be flattened into a
//! [`animation::Timeline`]; static snapshots can be exported as SVG.
//!
//! # Examples
//!
//! ```
//! use laminar::{AppConfig, ForwardPassOptions, NeuralNetwork};
//! use laminar::layer::{FeedForwardLayer, ImageLayer};
//!
//! let network = NeuralNetwork::builder()
//!     .with_config(AppConfig::default())
//!     .with_layer(ImageLayer::new(28, 28))
//!     .with_layer(FeedForwardLayer::new(5))
//!     .with_layer(FeedForwardLayer::new(3))
//!     .build()?;
//!
//! let build = network.build_animation();
//! assert_eq!(build.run_time(), 5.0);
//!
//! let pass = network.forward_pass_animation(&ForwardPassOptions::default())?;
//! assert_eq!(pass.run_time(), 10.0);
//! # Ok::<(), laminar::LaminarError>(())
//! ```

pub mod config;
pub mod connector;
pub mod diagnostic;
pub mod export;
pub mod layer;
pub mod layout;
pub mod synthesis;

mod error;
mod network;

pub use laminar_core::{animation, color, draw, geometry};

pub use config::AppConfig;
pub use connector::{Connector, ConnectorKind};
pub use error::LaminarError;
pub use layer::{Layer, LayerKind};
pub use network::{
    DEFAULT_FORWARD_PASS_RUN_TIME, Element, ForwardPassOptions, NetworkBuilder, NeuralNetwork,
};
pub use synthesis::{ConnectorRegistry, ElementRef, Link};
