//! Alignment and grid composition for plot-like panels.
//!
//! Drawables that expose their panel layout tables can have their panel
//! edges lined up across a group ([`align`]), and any drawables can be
//! arranged into labelled grids ([`layout`]) that are themselves drawables
//! and nest freely. Rendering goes through the [`render::Surface`] trait,
//! with a character canvas and an ANSI terminal renderer bundled.

pub mod align;
pub mod config;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod panel;
pub mod render;
pub mod text;

pub use align::{AlignAxis, Alignment, AlignmentEngine, AlignmentSpec, Edge, EdgeSet, align_panels};
pub use config::{ComposerConfig, LabelDefaults};
pub use drawable::{ChartBuilder, ChartPanel, Drawable, DrawableRef, Fill, Margins, PanelLayout, Picture, SizeHint};
pub use error::{Diagnostic, LayoutError, Result};
pub use geometry::{Justify, Point, Rect, Size};
pub use labels::{Label, LabelSource, LabelSpec, LetterCase, PerCell, annotate, auto_labels};
pub use layout::{Cell, Composition, Grid, GridComposer, GridDims, GridSpec, PlacedCell, compose};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{CompositionMetrics, MetricSnapshot};
pub use panel::{AxisLayout, Geometry, PanelGeometry, Region, RegionKind, Side, extract};
pub use render::{AnsiRenderer, CharCanvas, RecordingSurface, RendererSettings, Surface, TextStyle};
pub use text::display_width;
