use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum QuadtreeError {
    InvalidCapacity { capacity: usize },
    NonFinitePoint { x: f32, y: f32 },
    InvalidBoundary {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Serialize { message: String },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidCapacity { capacity } => {
                write!(f, "leaf capacity must be at least 1 (capacity: {})", capacity)
            }
            QuadtreeError::NonFinitePoint { x, y } => {
                write!(f, "point coordinates must be finite (x: {}, y: {})", x, y)
            }
            QuadtreeError::InvalidBoundary {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "boundary must be finite with non-negative dimensions (x: {}, y: {}, width: {}, height: {})",
                    x, y, width, height
                )
            }
            QuadtreeError::Serialize { message } => {
                write!(f, "failed to serialize tree: {}", message)
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
