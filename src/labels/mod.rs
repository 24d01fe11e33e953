//! Per-cell labels: text resolution, field broadcasting, and anchoring.

mod core;

pub use self::core::{
    Label, LabelSource, LabelSpec, LetterCase, PerCell, annotate, auto_labels, label_anchor,
};
pub use crate::render::text_bounds;
