//! Left-to-right placement of a layer chain.

use log::{debug, trace};

use laminar_core::{
    draw::RenderLayer,
    geometry::{Point, Size},
};

use crate::{config::LayoutConfig, error::LaminarError, layer::Layer};

/// Places layers in a single row, left to right, without overlap.
///
/// The first layer is the anchor and keeps its position. Every following layer
/// is centered to the right of its predecessor, at the same height, separated
/// by a fixed gap of `spacing_fraction * frame_width` between their edges.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    frame_width: f32,
    spacing_fraction: f32,
}

impl LayoutEngine {
    /// Creates a layout engine from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] if the frame width is not a positive
    /// finite number or the spacing fraction is negative or not finite.
    pub fn new(config: &LayoutConfig) -> Result<Self, LaminarError> {
        config.validate()?;
        Ok(Self {
            frame_width: config.frame_width(),
            spacing_fraction: config.spacing_fraction(),
        })
    }

    /// Horizontal distance between the centers of two adjacent layers.
    pub fn spacing(&self, previous: Size, current: Size) -> f32 {
        self.spacing_fraction * self.frame_width + previous.half_width() + current.half_width()
    }

    /// Moves every layer after the first into place and sets all render depths.
    ///
    /// # Errors
    ///
    /// Returns [`LaminarError::Config`] if `layers` is empty or any layer
    /// reports a negative or non-finite size. Nothing is moved in that case.
    pub fn place(&self, layers: &mut [Box<dyn Layer>]) -> Result<(), LaminarError> {
        for (i, layer) in layers.iter().enumerate() {
            let size = layer.size();
            let valid = |v: f32| v.is_finite() && v >= 0.0;
            if !(valid(size.width()) && valid(size.height())) {
                return Err(LaminarError::config(format!(
                    "layer {i} ({}) has invalid size {}x{}",
                    layer.kind(),
                    size.width(),
                    size.height()
                )));
            }
        }

        let Some(first) = layers.first_mut() else {
            return Err(LaminarError::config(
                "cannot lay out an empty layer sequence",
            ));
        };
        first.set_render_depth(RenderLayer::Layer);

        for i in 1..layers.len() {
            let (placed, rest) = layers.split_at_mut(i);
            let previous = &placed[i - 1];
            let current = &mut rest[0];

            let dx = self.spacing(previous.size(), current.size());
            let center = previous.center().add_point(Point::new(dx, 0.0));
            current.move_center_to(center);
            current.set_render_depth(RenderLayer::Layer);

            trace!(index = i, kind:% = current.kind(), center:?; "Placed layer");
        }

        debug!(layers_count = layers.len(); "Layout finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use std::rc::Rc;

    use super::*;
    use crate::{
        config::DEFAULT_FRAME_WIDTH,
        layer::{FeedForwardDefinition, FeedForwardLayer, ImageDefinition, ImageLayer},
    };

    fn engine() -> LayoutEngine {
        LayoutEngine::new(&LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_spacing_formula() {
        let engine = engine();
        let spacing = engine.spacing(Size::new(1.0, 1.0), Size::new(3.0, 1.0));
        assert_approx_eq!(f32, spacing, 0.05 * DEFAULT_FRAME_WIDTH + 0.5 + 1.5);
    }

    #[test]
    fn test_place_rejects_empty_sequence() {
        let mut layers: Vec<Box<dyn Layer>> = Vec::new();
        let err = engine().place(&mut layers).unwrap_err();
        assert!(matches!(err, LaminarError::Config(_)));
    }

    #[test]
    fn test_single_layer_does_not_move() {
        let mut layer = FeedForwardLayer::new(3);
        layer.move_center_to(Point::new(1.0, -2.0));
        let mut layers: Vec<Box<dyn Layer>> = vec![Box::new(layer)];

        engine().place(&mut layers).unwrap();

        assert_eq!(layers[0].center(), Point::new(1.0, -2.0));
        assert_eq!(layers[0].render_depth(), RenderLayer::Layer);
    }

    #[test]
    fn test_layers_share_anchor_row() {
        let mut anchor = ImageLayer::new(28, 28);
        anchor.move_center_to(Point::new(-3.0, 0.75));
        let mut layers: Vec<Box<dyn Layer>> = vec![
            Box::new(anchor),
            Box::new(FeedForwardLayer::new(3)),
            Box::new(FeedForwardLayer::new(5)),
        ];

        engine().place(&mut layers).unwrap();

        assert_eq!(layers[0].center(), Point::new(-3.0, 0.75));
        for pair in layers.windows(2) {
            assert_eq!(pair[1].center().y(), 0.75);
            assert!(pair[1].center().x() > pair[0].center().x());
        }
        assert!(
            layers
                .iter()
                .all(|layer| layer.render_depth() == RenderLayer::Layer)
        );
    }

    #[test]
    fn test_zero_spacing_makes_layers_touch() {
        let config = LayoutConfig::default().with_spacing_fraction(0.0);
        let engine = LayoutEngine::new(&config).unwrap();
        let mut layers: Vec<Box<dyn Layer>> = vec![
            Box::new(FeedForwardLayer::new(2)),
            Box::new(FeedForwardLayer::new(2)),
        ];

        engine.place(&mut layers).unwrap();

        assert_approx_eq!(
            f32,
            layers[0].bounds().max_x(),
            layers[1].bounds().min_x(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_place_rejects_degenerate_sizes() {
        let negative_radius = Rc::new(FeedForwardDefinition::default().with_node_radius(-0.5));
        let nan_buffer = Rc::new(FeedForwardDefinition::default().with_layer_buffer(f32::NAN));
        let negative_height = ImageDefinition::default().with_display_height(-1.5);

        let cases: Vec<Box<dyn Layer>> = vec![
            Box::new(FeedForwardLayer::with_definition(2, negative_radius)),
            Box::new(FeedForwardLayer::with_definition(2, nan_buffer)),
            Box::new(ImageLayer::new(28, 28).with_definition(negative_height)),
        ];

        for bad in cases {
            let mut anchor = FeedForwardLayer::new(2);
            anchor.move_center_to(Point::new(1.0, 1.0));
            let mut layers: Vec<Box<dyn Layer>> = vec![Box::new(anchor), bad];

            let err = engine().place(&mut layers).unwrap_err();
            assert!(matches!(err, LaminarError::Config(_)));
            assert!(err.to_string().contains("layer 1"), "{err}");
            assert_eq!(layers[1].center(), Point::default());
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = LayoutConfig::default().with_frame_width(0.0);
        assert!(LayoutEngine::new(&config).is_err());

        let config = LayoutConfig::default().with_spacing_fraction(-0.1);
        assert!(LayoutEngine::new(&config).is_err());
    }

    proptest! {
        #[test]
        fn prop_adjacent_layers_never_overlap(
            node_counts in prop::collection::vec(0usize..12, 2..8),
            fraction in 0.0f32..0.5,
        ) {
            let config = LayoutConfig::default().with_spacing_fraction(fraction);
            let engine = LayoutEngine::new(&config).unwrap();
            let mut layers: Vec<Box<dyn Layer>> = node_counts
                .iter()
                .map(|&n| Box::new(FeedForwardLayer::new(n)) as Box<dyn Layer>)
                .collect();

            engine.place(&mut layers).unwrap();

            for pair in layers.windows(2) {
                let gap = pair[1].center().x() - pair[0].center().x();
                let min_gap = pair[0].size().half_width() + pair[1].size().half_width();
                prop_assert!(gap >= min_gap - 1e-4);
                prop_assert_eq!(pair[0].center().y(), pair[1].center().y());
            }
        }

        #[test]
        fn prop_image_widths_are_respected(
            widths in prop::collection::vec(1u32..400, 2..6),
        ) {
            let mut layers: Vec<Box<dyn Layer>> = widths
                .iter()
                .map(|&w| Box::new(ImageLayer::new(w, 100)) as Box<dyn Layer>)
                .collect();

            engine().place(&mut layers).unwrap();

            for pair in layers.windows(2) {
                prop_assert!(pair[0].bounds().max_x() <= pair[1].bounds().min_x() + 1e-4);
            }
        }
    }
}
