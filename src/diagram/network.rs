use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::diagram::layer::Layer;
use crate::error::{DiagramError, DiagramResult};
use crate::geometry::Bounds;
use crate::surface::DrawingSurface;

/// An ordered, append-only stack of layers sharing one centring width.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetwork {
    widest: usize,
    config: LayoutConfig,
    layers: Vec<Layer>,
}

impl NeuralNetwork {
    /// Creates an empty network whose layers are centred on one of `widest`
    /// neurons, using the default layout constants.
    pub fn new(widest: usize) -> DiagramResult<NeuralNetwork> {
        NeuralNetwork::with_config(widest, LayoutConfig::default())
    }

    pub fn with_config(widest: usize, config: LayoutConfig) -> DiagramResult<NeuralNetwork> {
        if widest == 0 {
            return Err(DiagramError::ZeroWidth);
        }
        config.validate()?;
        Ok(NeuralNetwork { widest, config, layers: Vec::new() })
    }

    pub fn widest(&self) -> usize {
        self.widest
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Appends a layer of `size` neurons above the current last layer.
    pub fn add_layer(&mut self, size: usize, label: Option<&str>) -> DiagramResult<&Layer> {
        let layer = Layer::new(self, size, label.map(str::to_owned))?;
        self.layers.push(layer);
        Ok(&self.layers[self.layers.len() - 1])
    }

    /// The layer preceding the one at `index`, if any.
    pub fn previous_of(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)?.previous().and_then(|p| self.layers.get(p))
    }

    /// Total number of edges a draw pass issues.
    pub fn edge_count(&self) -> usize {
        (0..self.layers.len())
            .map(|i| self.layers[i].edge_count(self.previous_of(i)))
            .sum()
    }

    /// Extent of every circle and label anchor, or `None` for an empty network.
    pub fn bounds(&self) -> Option<Bounds> {
        let radius = self.config.neuron_radius;
        let mut bounds: Option<Bounds> = None;
        for layer in &self.layers {
            for neuron in &layer.neurons {
                let b = bounds.get_or_insert_with(|| Bounds::at(neuron.center()));
                b.include_circle(neuron.center(), radius);
            }
            if layer.label.is_some() {
                if let Some(b) = bounds.as_mut() {
                    b.include(layer.label_anchor());
                }
            }
        }
        bounds
    }

    /// Draws the whole diagram on a fresh figure of `surface`, then frames it
    /// with equal axis scaling and no axis decorations.
    pub fn draw(&self, surface: &mut dyn DrawingSurface) -> DiagramResult<()> {
        let bounds = self.bounds().ok_or(DiagramError::EmptyNetwork)?;

        surface.begin()?;
        let mut edges = 0;
        for (i, layer) in self.layers.iter().enumerate() {
            let drawn = layer.draw(surface, self.previous_of(i))?;
            debug!(layer = i, neurons = layer.len(), edges = drawn, "layer drawn");
            edges += drawn;
        }
        surface.finish(bounds)?;

        info!(layers = self.layers.len(), edges, widest = self.widest, "network drawn");
        Ok(())
    }
}
