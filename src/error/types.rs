use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the plotgrid crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Fatal errors surfaced by alignment, composition, and rendering.
///
/// Composition is all-or-nothing: none of these come with partial output.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("grid of {nrow}x{ncol} cannot hold {cells} cells")]
    GridCapacity {
        cells: usize,
        nrow: usize,
        ncol: usize,
    },
    #[error("`{field}` has {found} values, expected 1 or {expected}")]
    FieldLengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("`{field}` must be finite and positive, got {value}")]
    InvalidRelativeSize { field: &'static str, value: f64 },
    #[error("invalid panel geometry: {0}")]
    InvalidGeometry(String),
    #[error("nothing to compose")]
    EmptyGrid,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Non-fatal conditions reported next to a successful result.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The drawable at `index` exposes no panel geometry and was passed through unaligned.
    UnsupportedGeometry { index: usize, name: String },
    /// Alignment was requested but no drawable in the group exposes geometry.
    DegenerateAlignment { requested: usize },
}

impl Diagnostic {
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::UnsupportedGeometry { .. } => "unsupported_geometry",
            Diagnostic::DegenerateAlignment { .. } => "degenerate_alignment",
        }
    }
}
