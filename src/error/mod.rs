//! Error and diagnostic types shared by every stage of the engine.

mod types;

pub use types::{Diagnostic, LayoutError, Result};
