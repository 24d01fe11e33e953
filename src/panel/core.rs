use serde::{Deserialize, Serialize};

use crate::drawable::Drawable;
use crate::error::{LayoutError, Result};

/// Role of a region inside a layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Margin,
    Title,
    AxisTitle,
    AxisText,
    Legend,
    Panel,
}

/// Named, sized slice of a drawable along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub kind: RegionKind,
    pub size: f64,
}

impl Region {
    pub fn new(name: impl Into<String>, kind: RegionKind, size: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
        }
    }

    pub fn margin(name: impl Into<String>, size: f64) -> Self {
        Self::new(name, RegionKind::Margin, size)
    }

    pub fn panel(size: f64) -> Self {
        Self::new("panel", RegionKind::Panel, size)
    }
}

/// Which side of the panel body a measurement refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left along the horizontal table, top along the vertical one.
    Before,
    /// Right along the horizontal table, bottom along the vertical one.
    After,
}

/// Ordered layout table along one axis with exactly one panel-body region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    regions: Vec<Region>,
    panel: usize,
}

impl AxisLayout {
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        let mut panel = None;
        for (idx, region) in regions.iter().enumerate() {
            if !region.size.is_finite() || region.size < 0.0 {
                return Err(LayoutError::InvalidGeometry(format!(
                    "region `{}` has size {}",
                    region.name, region.size
                )));
            }
            if region.kind == RegionKind::Panel {
                if panel.is_some() {
                    return Err(LayoutError::InvalidGeometry(
                        "more than one panel region".to_string(),
                    ));
                }
                panel = Some(idx);
            }
        }
        let panel = panel
            .ok_or_else(|| LayoutError::InvalidGeometry("no panel region".to_string()))?;
        Ok(Self { regions, panel })
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn panel_index(&self) -> usize {
        self.panel
    }

    pub fn panel_size(&self) -> f64 {
        self.regions[self.panel].size
    }

    pub fn before_panel(&self) -> f64 {
        self.regions[..self.panel].iter().map(|r| r.size).sum()
    }

    pub fn after_panel(&self) -> f64 {
        self.regions[self.panel + 1..].iter().map(|r| r.size).sum()
    }

    pub fn total(&self) -> f64 {
        self.regions.iter().map(|r| r.size).sum()
    }

    pub fn extent(&self, side: Side) -> f64 {
        match side {
            Side::Before => self.before_panel(),
            Side::After => self.after_panel(),
        }
    }

    /// True when at least one region sits on `side` of the panel body.
    pub fn has_side(&self, side: Side) -> bool {
        match side {
            Side::Before => self.panel > 0,
            Side::After => self.panel + 1 < self.regions.len(),
        }
    }

    /// Grow the outermost region on `side` until the side spans `target`.
    ///
    /// Never shrinks; a side without regions is left untouched.
    pub fn expand(&mut self, side: Side, target: f64) {
        if !self.has_side(side) {
            return;
        }
        let extra = target - self.extent(side);
        if extra <= 0.0 {
            return;
        }
        let outer = match side {
            Side::Before => 0,
            Side::After => self.regions.len() - 1,
        };
        self.regions[outer].size += extra;
    }

    /// Sizes of every region when the panel body absorbs `available - fixed`.
    pub fn resolve(&self, available: f64) -> Vec<f64> {
        let fixed = self.total() - self.panel_size();
        self.regions
            .iter()
            .enumerate()
            .map(|(idx, region)| {
                if idx == self.panel {
                    (available - fixed).max(0.0)
                } else {
                    region.size
                }
            })
            .collect()
    }
}

/// Internal layout of a panel-bearing drawable along both axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelGeometry {
    /// Left to right.
    pub horizontal: AxisLayout,
    /// Top to bottom.
    pub vertical: AxisLayout,
}

impl PanelGeometry {
    pub fn new(horizontal: AxisLayout, vertical: AxisLayout) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Outcome of geometry extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Panel(PanelGeometry),
    Unsupported,
}

impl Geometry {
    pub fn is_supported(&self) -> bool {
        matches!(self, Geometry::Panel(_))
    }

    pub fn into_panel(self) -> Option<PanelGeometry> {
        match self {
            Geometry::Panel(geometry) => Some(geometry),
            Geometry::Unsupported => None,
        }
    }
}

/// Read the layout table of `drawable`, or report that it is opaque.
pub fn extract(drawable: &dyn Drawable) -> Geometry {
    match drawable.panel() {
        Some(panel) => Geometry::Panel(panel.geometry()),
        None => Geometry::Unsupported,
    }
}
