//! The drawable abstraction plus the bundled panel kinds.

mod chart;
mod core;
mod shapes;

pub use self::chart::{ChartBuilder, ChartPanel, Margins};
pub use self::core::{Drawable, DrawableRef, PanelLayout, SizeHint};
pub use self::shapes::{Fill, Picture};

/// Region names used by [`ChartPanel::builder`].
pub mod regions {
    pub use super::chart::{
        LEGEND, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, TITLE, X_AXIS, X_TITLE,
        Y_AXIS, Y_TITLE,
    };
}
