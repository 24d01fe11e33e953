//! Alignment of panel edges across a group of drawables.

mod core;
mod spec;

pub use self::core::{Alignment, AlignmentEngine, align_panels};
pub use self::spec::{AlignAxis, AlignmentSpec, Edge, EdgeSet};
