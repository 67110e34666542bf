/// Result type used throughout the crate.
pub type DiagramResult<T> = Result<T, DiagramError>;

/// Errors raised while building or drawing a diagram.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("no layers requested")]
    EmptyInput,

    #[error("got {counts} neuron counts but {labels} labels")]
    LengthMismatch { counts: usize, labels: usize },

    #[error("layer {layer} has no neurons")]
    ZeroNeurons { layer: usize },

    #[error("widest layer must have at least one neuron")]
    ZeroWidth,

    #[error("layer {layer} has {count} neurons, wider than the widest layer ({widest})")]
    WiderThanWidest { layer: usize, count: usize, widest: usize },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("cannot draw an edge between two neurons both centred at ({x}, {y})")]
    CoincidentNeurons { x: f64, y: f64 },

    #[error("network has no layers to draw")]
    EmptyNetwork,

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("surface output requested before the figure was finished")]
    NotFinished,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
