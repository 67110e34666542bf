use crate::config::LayoutConfig;
use crate::diagram::network::NeuralNetwork;
use crate::error::{DiagramError, DiagramResult};
use crate::surface::DrawingSurface;

/// Builds a network from per-layer neuron counts and labels, paired element
/// by element, centred on the largest count.
///
/// Both sequences must be non-empty and of the same length.
pub fn build_network<S: AsRef<str>>(counts: &[usize], labels: &[Option<S>]) -> DiagramResult<NeuralNetwork> {
    build_network_with(counts, labels, LayoutConfig::default())
}

/// Like `build_network`, with explicit layout constants.
pub fn build_network_with<S: AsRef<str>>(
    counts: &[usize],
    labels: &[Option<S>],
    config: LayoutConfig,
) -> DiagramResult<NeuralNetwork> {
    if counts.len() != labels.len() {
        return Err(DiagramError::LengthMismatch { counts: counts.len(), labels: labels.len() });
    }
    let widest = *counts.iter().max().ok_or(DiagramError::EmptyInput)?;

    let mut network = NeuralNetwork::with_config(widest, config)?;
    for (count, label) in counts.iter().zip(labels) {
        network.add_layer(*count, label.as_ref().map(|l| l.as_ref()))?;
    }
    Ok(network)
}

/// Builds the network described by `counts` and `labels` and draws it on
/// `surface`. Nothing is drawn when the input is rejected.
pub fn draw_nn<S: AsRef<str>>(
    counts: &[usize],
    labels: &[Option<S>],
    surface: &mut dyn DrawingSurface,
) -> DiagramResult<NeuralNetwork> {
    let network = build_network(counts, labels)?;
    network.draw(surface)?;
    Ok(network)
}
