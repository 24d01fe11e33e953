use std::fmt::Debug;
use std::sync::Arc;

use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::panel::PanelGeometry;
use crate::render::Surface;

/// Shared handle to an immutable drawable.
pub type DrawableRef = Arc<dyn Drawable>;

/// Preferred extent of a drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeHint {
    /// Keeps this size and is positioned inside whatever box it receives.
    Fixed(Size),
    /// Stretches to fill the box it receives.
    Flexible,
}

impl SizeHint {
    pub fn fixed(&self) -> Option<Size> {
        match self {
            SizeHint::Fixed(size) => Some(*size),
            SizeHint::Flexible => None,
        }
    }

    pub fn is_flexible(&self) -> bool {
        matches!(self, SizeHint::Flexible)
    }
}

/// A composable graphical unit.
///
/// Implementations are immutable: alignment and composition build new
/// drawables instead of editing existing ones.
pub trait Drawable: Debug + Send + Sync {
    /// Short human-readable name used in diagnostics.
    fn name(&self) -> &str;

    fn size_hint(&self) -> SizeHint;

    fn render(&self, surface: &mut dyn Surface, area: Rect) -> Result<()>;

    /// Introspectable panel layout, if this drawable has one.
    fn panel(&self) -> Option<&dyn PanelLayout> {
        None
    }
}

/// Capability of drawables whose structure can be read and rebuilt.
pub trait PanelLayout {
    fn geometry(&self) -> PanelGeometry;

    /// Copy of the drawable laid out with `geometry`. Callers only pass
    /// geometries derived from [`PanelLayout::geometry`] by growing regions.
    fn relayout(&self, geometry: PanelGeometry) -> DrawableRef;
}
