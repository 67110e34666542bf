use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::diagram::draw_nn::build_network_with;
use crate::diagram::network::NeuralNetwork;
use crate::error::DiagramResult;
use crate::surface::DrawingSurface;

/// A serializable description of a diagram: the layer sizes, their labels,
/// and optionally the layout constants.
///
/// `DiagramSpec` can be saved to / loaded from JSON, so a diagram can be kept
/// next to the model it documents and redrawn later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSpec {
    /// Neuron count per layer, first layer first.
    pub counts: Vec<usize>,
    /// Label per layer; `null` for an unlabelled layer.
    pub labels: Vec<Option<String>>,
    /// Layout overrides; the defaults apply when absent.
    #[serde(default)]
    pub layout: Option<LayoutConfig>,
}

impl DiagramSpec {
    pub fn new(counts: Vec<usize>, labels: Vec<Option<String>>) -> DiagramSpec {
        DiagramSpec { counts, labels, layout: None }
    }

    pub fn build(&self) -> DiagramResult<NeuralNetwork> {
        build_network_with(&self.counts, &self.labels, self.layout.unwrap_or_default())
    }

    pub fn draw(&self, surface: &mut dyn DrawingSurface) -> DiagramResult<NeuralNetwork> {
        let network = self.build()?;
        network.draw(surface)?;
        Ok(network)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> DiagramResult<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `DiagramSpec` from a JSON file.
    pub fn load_json(path: &str) -> DiagramResult<DiagramSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
