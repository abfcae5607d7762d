//! Example: Planning a forward pass through an image classifier
//!
//! This example builds a small network (an input image followed by three
//! feed-forward layers), prints the scheduled forward pass and writes a static
//! SVG snapshot of the diagram.

use laminar::{
    AppConfig, ForwardPassOptions, NeuralNetwork,
    config::{LayoutConfig, StyleConfig},
    export::svg::SvgExporter,
    layer::{FeedForwardLayer, ImageLayer},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::new(
        LayoutConfig::default(),
        StyleConfig::default()
            .with_animation_dot_color("orange")
            .with_background_color("black"),
    );

    let network = NeuralNetwork::builder()
        .with_config(config.clone())
        .with_layer(ImageLayer::new(28, 28).with_source("digit.png"))
        .with_layer(FeedForwardLayer::new(5))
        .with_layer(FeedForwardLayer::new(3))
        .with_layer(FeedForwardLayer::new(2))
        .build()?;

    for diagnostic in network.diagnostics() {
        println!("{diagnostic}");
    }

    let build = network.build_animation();
    println!("Build animation: {:.1}s", build.run_time());

    let options = ForwardPassOptions::default()
        .with_run_time(6.0)
        .with_passing_flash(false);
    let timeline = network.forward_pass_animation(&options)?.schedule();

    println!("Forward pass: {} clips over {:.1}s", timeline.len(), timeline.duration());
    for clip in &timeline {
        println!(
            "  {:>5.2}s - {:>5.2}s  {:<10} {}",
            clip.start(),
            clip.end(),
            clip.effect().name(),
            clip.subject()
        );
    }

    let output = std::env::temp_dir().join("laminar_forward_pass.svg");
    SvgExporter::new(config.style())?.save(&network, &output)?;
    println!("\nSnapshot written to {}", output.display());

    Ok(())
}
