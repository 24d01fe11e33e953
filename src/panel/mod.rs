//! Panel geometry: the layout tables a chart-like drawable exposes so that
//! edges can be reconciled across a group.

mod core;

pub use self::core::{AxisLayout, Geometry, PanelGeometry, Region, RegionKind, Side, extract};
