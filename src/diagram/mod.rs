pub mod neuron;
pub mod layer;
pub mod network;
pub mod draw_nn;
pub mod spec;

pub use neuron::Neuron;
pub use layer::Layer;
pub use network::NeuralNetwork;
pub use draw_nn::{build_network, build_network_with, draw_nn};
pub use spec::DiagramSpec;
