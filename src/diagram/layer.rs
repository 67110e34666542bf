use tracing::debug;

use crate::config::LayoutConfig;
use crate::diagram::network::NeuralNetwork;
use crate::diagram::neuron::Neuron;
use crate::error::{DiagramError, DiagramResult};
use crate::geometry::{Point, Segment};
use crate::surface::{DrawingSurface, ZOrder};

/// One horizontal rank of neurons in the diagram.
///
/// A layer sits `vertical_spacing` above its predecessor (the first one at
/// `y = 0`) and is centred under the widest layer of the network. The
/// predecessor is referenced by its index in the owning network, never owned.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub y: f64,
    pub neurons: Vec<Neuron>,
    pub label: Option<String>,
    widest: usize,
    previous: Option<usize>,
    config: LayoutConfig,
}

impl Layer {
    /// Builds the layer that would be appended next to `network`.
    pub fn new(network: &NeuralNetwork, size: usize, label: Option<String>) -> DiagramResult<Layer> {
        let index = network.layers().len();
        let widest = network.widest();
        let config = *network.config();
        if size == 0 {
            return Err(DiagramError::ZeroNeurons { layer: index });
        }
        if size > widest {
            return Err(DiagramError::WiderThanWidest { layer: index, count: size, widest });
        }

        let previous = index.checked_sub(1);
        let y = match network.layers().last() {
            Some(prev) => prev.y + config.vertical_spacing,
            None => 0.0,
        };

        let left_margin = left_margin(size, widest, config.horizontal_spacing);
        let neurons = (0..size)
            .map(|i| Neuron::new(left_margin + i as f64 * config.horizontal_spacing, y))
            .collect();

        debug!(layer = index, size, y, ?label, "layer laid out");
        Ok(Layer { y, neurons, label, widest, previous, config })
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Index of the previous layer in the owning network.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Where the label is anchored: right of every layer, level with this one.
    pub fn label_anchor(&self) -> Point {
        Point::new(self.widest as f64 * self.config.horizontal_spacing, self.y)
    }

    /// Number of edges connecting this layer to `previous`.
    pub fn edge_count(&self, previous: Option<&Layer>) -> usize {
        previous.map_or(0, |prev| prev.len() * self.len())
    }

    /// Draws every neuron, its edges to each neuron of `previous`, and the
    /// label. Returns the number of edges drawn.
    ///
    /// Edges go out as background lines so they end up under the circles.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, previous: Option<&Layer>) -> DiagramResult<usize> {
        let radius = self.config.neuron_radius;
        let mut edges = 0;
        for neuron in &self.neurons {
            neuron.draw(surface, radius)?;
            if let Some(prev) = previous {
                for prev_neuron in &prev.neurons {
                    let segment = Segment::between_circles(neuron.center(), prev_neuron.center(), radius)?;
                    surface.line(segment, ZOrder::Background)?;
                    edges += 1;
                }
            }
        }
        if let Some(label) = &self.label {
            surface.text(self.label_anchor(), label, self.config.label_font_size)?;
        }
        Ok(edges)
    }
}

/// Offset of the first neuron so a layer of `size` is centred under one of
/// `widest` neurons.
fn left_margin(size: usize, widest: usize, spacing: f64) -> f64 {
    spacing * (widest - size) as f64 / 2.0
}
