/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Top-level payload could not be interpreted at all
    PayloadError(String),
    /// A pane was asked to render with impossible parameters (zero-sized surface)
    RenderingError(String),
    /// An indicator spec carried unusable parameters
    InvalidSpec(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::PayloadError(msg) => write!(f, "Payload Error: {}", msg),
            ChartError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            ChartError::InvalidSpec(msg) => write!(f, "Invalid Spec: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

// Simple convenience type alias
pub type RenderResult<T> = Result<T, ChartError>;
