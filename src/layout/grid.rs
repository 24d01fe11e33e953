//! Grid sizing - dimensions, relative track weights, and track lengths
//!
//! A grid is described by a [`GridSpec`]. Cells are mapped onto it in
//! row-major order (or column-major with `by_row = false`), rows and columns
//! get lengths proportional to their relative weights, and every track is at
//! least as long as the largest fixed-size drawable it holds.
//!
//! # Example
//! ```
//! use plotgrid::layout::grid::{GridDims, GridSpec};
//!
//! let spec = GridSpec::new().ncol(2).rel_widths(vec![1.0, 2.0]);
//! let dims = GridDims::resolve(&spec, 3)?;
//! assert_eq!((dims.nrow, dims.ncol), (2, 2));
//! # Ok::<(), plotgrid::LayoutError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::align::AlignmentSpec;
use crate::error::{LayoutError, Result};
use crate::labels::PerCell;

/// Shape and sizing parameters for one composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub nrow: Option<usize>,
    pub ncol: Option<usize>,
    pub rel_widths: Option<Vec<f64>>,
    pub rel_heights: Option<Vec<f64>>,
    /// Fill rows first (`true`) or columns first.
    pub by_row: bool,
    /// Total width; auto-sized from content when absent.
    pub width: Option<f64>,
    /// Total height; auto-sized from content when absent.
    pub height: Option<f64>,
    /// Align panel edges of the contents before placing them.
    pub align: Option<AlignmentSpec>,
    /// Content scale inside each cell box, broadcast over supplied cells.
    pub scale: Option<PerCell<f64>>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            nrow: None,
            ncol: None,
            rel_widths: None,
            rel_heights: None,
            by_row: true,
            width: None,
            height: None,
            align: None,
            scale: None,
        }
    }
}

impl GridSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nrow(mut self, nrow: usize) -> Self {
        self.nrow = Some(nrow);
        self
    }

    pub fn ncol(mut self, ncol: usize) -> Self {
        self.ncol = Some(ncol);
        self
    }

    pub fn rel_widths(mut self, weights: Vec<f64>) -> Self {
        self.rel_widths = Some(weights);
        self
    }

    pub fn rel_heights(mut self, weights: Vec<f64>) -> Self {
        self.rel_heights = Some(weights);
        self
    }

    pub fn by_row(mut self, by_row: bool) -> Self {
        self.by_row = by_row;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn align(mut self, spec: AlignmentSpec) -> Self {
        self.align = Some(spec);
        self
    }

    pub fn scale(mut self, scale: impl Into<PerCell<f64>>) -> Self {
        self.scale = Some(scale.into());
        self
    }
}

/// Resolved number of rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub nrow: usize,
    pub ncol: usize,
}

impl GridDims {
    /// Infer missing dimensions for `cells` supplied cells and check capacity.
    pub fn resolve(spec: &GridSpec, cells: usize) -> Result<Self> {
        if cells == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        let capacity_error = |nrow: usize, ncol: usize| LayoutError::GridCapacity {
            cells,
            nrow,
            ncol,
        };

        let (nrow, ncol) = match (spec.nrow, spec.ncol) {
            (Some(nrow), Some(ncol)) => (nrow, ncol),
            (Some(0), None) => return Err(capacity_error(0, 0)),
            (None, Some(0)) => return Err(capacity_error(0, 0)),
            (Some(nrow), None) => (nrow, cells.div_ceil(nrow)),
            (None, Some(ncol)) => (cells.div_ceil(ncol), ncol),
            (None, None) => {
                let ncol = (cells as f64).sqrt().ceil() as usize;
                (cells.div_ceil(ncol), ncol)
            }
        };

        match nrow.checked_mul(ncol) {
            Some(capacity) if capacity >= cells => Ok(Self { nrow, ncol }),
            _ => Err(capacity_error(nrow, ncol)),
        }
    }

    pub fn len(&self) -> usize {
        self.nrow * self.ncol
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid position of the `index`-th cell in traversal order.
    pub fn position(&self, index: usize, by_row: bool) -> (usize, usize) {
        if by_row {
            (index / self.ncol, index % self.ncol)
        } else {
            (index % self.nrow, index / self.nrow)
        }
    }
}

/// Expand optional relative weights to `count` validated values.
pub fn resolve_weights(
    weights: Option<&[f64]>,
    field: &'static str,
    count: usize,
) -> Result<Vec<f64>> {
    let weights = match weights {
        None => vec![1.0; count],
        Some(values) => PerCell::Each(values.to_vec()).resolve(field, count)?,
    };
    if let Some(bad) = weights.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
        return Err(LayoutError::InvalidRelativeSize { field, value: *bad });
    }
    Ok(weights)
}

/// Track lengths from relative weights.
///
/// With an explicit `total` each track gets its share of it. Otherwise the
/// smallest unit length is chosen so every track reaches its `floor`, which
/// keeps the weight ratios exact; `fallback` is shared out when no track has
/// a floor.
pub fn track_lengths(weights: &[f64], floors: &[f64], total: Option<f64>, fallback: f64) -> Vec<f64> {
    let weight_sum: f64 = weights.iter().sum();
    let unit = match total {
        Some(total) => total / weight_sum,
        None => {
            let unit = weights
                .iter()
                .zip(floors)
                .map(|(weight, floor)| floor / weight)
                .fold(0.0_f64, f64::max);
            if unit > 0.0 { unit } else { fallback / weight_sum }
        }
    };
    weights.iter().map(|weight| weight * unit).collect()
}

/// Running offsets of consecutive tracks starting at zero.
pub fn offsets(lengths: &[f64]) -> Vec<f64> {
    let mut cursor = 0.0;
    lengths
        .iter()
        .map(|len| {
            let start = cursor;
            cursor += len;
            start
        })
        .collect()
}
