use std::sync::Arc;

use crate::align::{AlignmentEngine, AlignmentSpec, Edge, EdgeSet};
use crate::config::ComposerConfig;
use crate::drawable::{Drawable, DrawableRef, SizeHint};
use crate::error::{Diagnostic, LayoutError, Result};
use crate::geometry::{Justify, Rect, Size};
use crate::labels::{Label, LabelSource, LabelSpec, PerCell, annotate, label_anchor};
use crate::logging::{COMPOSE_TARGET, LogLevel, METRICS_TARGET, emit, json_kv};
use crate::render::Surface;

use super::cell::Cell;
use super::grid::{GridDims, GridSpec, offsets, resolve_weights, track_lengths};

/// One grid slot after placement, in grid coordinates.
#[derive(Debug, Clone)]
pub struct PlacedCell {
    pub row: usize,
    pub col: usize,
    /// The full cell box.
    pub bounds: Rect,
    /// Where the content is drawn inside `bounds`.
    pub area: Rect,
    pub content: Option<DrawableRef>,
    pub label: Option<Label>,
}

/// A composed grid. It is itself a [`Drawable`] but exposes no panel
/// geometry, so nested grids pass through alignment untouched.
#[derive(Debug, Clone)]
pub struct Grid {
    name: String,
    size: Size,
    dims: GridDims,
    column_widths: Vec<f64>,
    row_heights: Vec<f64>,
    cells: Vec<PlacedCell>,
}

impl Grid {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    /// Supplied cells in input order, followed by padding cells.
    pub fn cells(&self) -> &[PlacedCell] {
        &self.cells
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&PlacedCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Drawable for Grid {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::Fixed(self.size)
    }

    fn render(&self, surface: &mut dyn Surface, area: Rect) -> Result<()> {
        let frame = Rect::from_size(self.size);
        for cell in &self.cells {
            if let Some(content) = &cell.content {
                content.render(surface, cell.area.map_into(frame, area))?;
            }
        }
        // Labels go on top of every content.
        for cell in &self.cells {
            if let Some(label) = &cell.label {
                let anchor = label_anchor(cell.bounds.map_into(frame, area), label);
                surface.draw_text(&label.text, anchor, label.justify, &label.style);
            }
        }
        Ok(())
    }
}

/// Output of one composition.
#[derive(Debug, Clone)]
pub struct Composition {
    pub grid: Grid,
    pub diagnostics: Vec<Diagnostic>,
}

impl Composition {
    pub fn is_degraded(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Share the grid so it can be placed inside another composition.
    pub fn into_drawable(self) -> DrawableRef {
        Arc::new(self.grid)
    }
}

/// Arranges drawables in a grid with optional alignment and labels.
#[derive(Debug, Clone)]
pub struct GridComposer {
    config: ComposerConfig,
}

impl GridComposer {
    pub fn new(config: ComposerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_default() -> Self {
        Self {
            config: ComposerConfig::default(),
        }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Label options seeded from the configured defaults.
    pub fn labels(&self, source: impl Into<LabelSource>) -> LabelSpec {
        LabelSpec::from_defaults(&self.config.labels, source.into())
    }

    pub fn compose(
        &self,
        cells: Vec<Cell>,
        spec: &GridSpec,
        labels: &LabelSpec,
    ) -> Result<Composition> {
        let count = cells.len();
        let dims = GridDims::resolve(spec, count)?;
        let rel_widths = resolve_weights(spec.rel_widths.as_deref(), "rel_widths", dims.ncol)?;
        let rel_heights = resolve_weights(spec.rel_heights.as_deref(), "rel_heights", dims.nrow)?;
        let scales = resolve_scales(spec.scale.as_ref(), count)?;
        check_total("width", spec.width)?;
        check_total("height", spec.height)?;
        let mut cells = annotate(cells, labels)?;

        let mut diagnostics = Vec::new();
        if let Some(align) = &spec.align {
            diagnostics = self.align_contents(&mut cells, align);
            let edges = align.effective_edges();
            for cell in &mut cells {
                if cell.content.as_ref().is_some_and(|c| c.panel().is_some()) {
                    cell.justify = anchor_to_edges(cell.justify, edges);
                }
            }
        }

        let positions: Vec<(usize, usize)> = (0..dims.len())
            .map(|index| dims.position(index, spec.by_row))
            .collect();

        let mut width_floors = vec![0.0_f64; dims.ncol];
        let mut height_floors = vec![0.0_f64; dims.nrow];
        for ((cell, &(row, col)), scale) in cells.iter().zip(&positions).zip(&scales) {
            if let Some(size) = cell.content.as_ref().and_then(|c| c.size_hint().fixed()) {
                width_floors[col] = width_floors[col].max(size.width / scale);
                height_floors[row] = height_floors[row].max(size.height / scale);
            }
        }

        let fallback = self.config.fallback_size;
        let column_widths = track_lengths(&rel_widths, &width_floors, spec.width, fallback.width);
        let row_heights = track_lengths(&rel_heights, &height_floors, spec.height, fallback.height);
        let xs = offsets(&column_widths);
        let ys = offsets(&row_heights);
        let size = Size::new(column_widths.iter().sum(), row_heights.iter().sum());

        let mut supplied = cells.into_iter().zip(scales);
        let placed: Vec<PlacedCell> = positions
            .iter()
            .map(|&(row, col)| {
                let bounds = Rect::new(xs[col], ys[row], column_widths[col], row_heights[row]);
                let (cell, scale) = supplied.next().unwrap_or((Cell::empty(), 1.0));
                let area = content_area(bounds, scale, cell.content.as_ref(), cell.justify);
                PlacedCell {
                    row,
                    col,
                    bounds,
                    area,
                    content: cell.content,
                    label: cell.label,
                }
            })
            .collect();

        let label_count = placed.iter().filter(|c| c.label.is_some()).count();
        emit(
            self.config.logger.as_ref(),
            LogLevel::Debug,
            COMPOSE_TARGET,
            "grid.composed",
            [
                json_kv("nrow", dims.nrow),
                json_kv("ncol", dims.ncol),
                json_kv("cells", count),
                json_kv("labels", label_count),
                json_kv("width", size.width),
                json_kv("height", size.height),
            ],
        );
        if let Some(metrics) = &self.config.metrics {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_grid(count, label_count);
                if let Some(logger) = &self.config.logger {
                    let _ = logger.log_event(guard.snapshot().to_log_event(METRICS_TARGET));
                }
            }
        }

        Ok(Composition {
            grid: Grid {
                name: "grid".to_string(),
                size,
                dims,
                column_widths,
                row_heights,
                cells: placed,
            },
            diagnostics,
        })
    }

    /// Align the non-empty contents in place; diagnostic indices refer to
    /// positions in `cells`.
    fn align_contents(
        &self,
        cells: &mut [Cell],
        align: &AlignmentSpec,
    ) -> Vec<Diagnostic> {
        let (indices, contents): (Vec<usize>, Vec<DrawableRef>) = cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.content.clone().map(|c| (index, c)))
            .unzip();
        if contents.is_empty() {
            return Vec::new();
        }

        let mut engine = AlignmentEngine::new();
        if let Some(logger) = &self.config.logger {
            engine = engine.with_logger(logger.clone());
        }
        if let Some(metrics) = self.config.metrics_handle() {
            engine = engine.with_metrics(metrics);
        }
        let alignment = engine.align(&contents, align);

        for (&index, drawable) in indices.iter().zip(alignment.drawables) {
            cells[index].content = Some(drawable);
        }
        alignment
            .diagnostics
            .into_iter()
            .map(|diagnostic| match diagnostic {
                Diagnostic::UnsupportedGeometry { index, name } => {
                    Diagnostic::UnsupportedGeometry {
                        index: indices[index],
                        name,
                    }
                }
                other => other,
            })
            .collect()
    }
}

fn resolve_scales(scale: Option<&PerCell<f64>>, count: usize) -> Result<Vec<f64>> {
    let scales = match scale {
        Some(scale) => scale.resolve("scale", count)?,
        None => vec![1.0; count],
    };
    if let Some(bad) = scales.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
        return Err(LayoutError::InvalidRelativeSize {
            field: "scale",
            value: *bad,
        });
    }
    Ok(scales)
}

fn check_total(field: &str, total: Option<f64>) -> Result<()> {
    match total {
        Some(value) if !(value.is_finite() && value > 0.0) => Err(LayoutError::InvalidGeometry(
            format!("{field} must be positive, got {value}"),
        )),
        _ => Ok(()),
    }
}

/// Pin panel drawables to the edges they were aligned on, so boxes wider
/// than the drawable do not shift the aligned panel edge.
fn anchor_to_edges(justify: Justify, edges: EdgeSet) -> Justify {
    let pin = |start: Edge, end: Edge, current: f64| {
        if edges.contains(start) {
            0.0
        } else if edges.contains(end) {
            1.0
        } else {
            current
        }
    };
    Justify::new(
        pin(Edge::Left, Edge::Right, justify.h),
        pin(Edge::Top, Edge::Bottom, justify.v),
    )
}

fn content_area(
    bounds: Rect,
    scale: f64,
    content: Option<&DrawableRef>,
    justify: Justify,
) -> Rect {
    let scaled = bounds.scaled(scale);
    match content.map(|c| c.size_hint()) {
        Some(SizeHint::Fixed(size)) => scaled.place(size, justify),
        _ => scaled,
    }
}

/// Compose with the default configuration.
pub fn compose(cells: Vec<Cell>, spec: &GridSpec, labels: &LabelSpec) -> Result<Composition> {
    GridComposer::with_default().compose(cells, spec, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::{ChartPanel, Fill, Picture};
    use crate::geometry::Point;
    use crate::logging::{Logger, MemorySink};
    use crate::panel::{Geometry, extract};
    use crate::render::{RecordingSurface, render, render_to_canvas};

    fn picture(name: &str, width: usize, height: usize) -> Cell {
        let art = vec!["#".repeat(width); height].join("\n");
        Cell::new(Picture::new(name, art).into_ref())
    }

    fn labels_at(grid: &Grid) -> Vec<(String, usize, usize)> {
        grid.cells()
            .iter()
            .filter_map(|c| c.label.as_ref().map(|l| (l.text.clone(), c.row, c.col)))
            .collect()
    }

    #[test]
    fn capacity_is_checked_before_anything_else() {
        let sink = MemorySink::new();
        let mut config = ComposerConfig::default().with_logger(Logger::new(sink.clone()));
        config.enable_metrics();
        let composer = GridComposer::new(config).unwrap();
        let spec = GridSpec::new().nrow(1).ncol(1);
        // The label spec is invalid too; capacity must win.
        let labels = LabelSpec::new("AUTO").hjust([1.0, 2.0, 3.0]);

        let err = composer
            .compose(vec![picture("a", 2, 1), picture("b", 2, 1)], &spec, &labels)
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::GridCapacity {
                cells: 2,
                nrow: 1,
                ncol: 1
            }
        ));
        assert!(sink.events().is_empty());
        let snapshot = composer.config().metrics_handle().unwrap().lock().unwrap().snapshot();
        assert_eq!(snapshot.grids, 0);
    }

    #[test]
    fn auto_labels_follow_row_major_order() {
        let cells = (0..4).map(|i| picture(&format!("p{i}"), 3, 2)).collect();
        let composition = compose(cells, &GridSpec::new(), &LabelSpec::new("AUTO")).unwrap();
        assert_eq!(
            labels_at(&composition.grid),
            vec![
                ("A".to_string(), 0, 0),
                ("B".to_string(), 0, 1),
                ("C".to_string(), 1, 0),
                ("D".to_string(), 1, 1),
            ]
        );
    }

    #[test]
    fn column_major_fills_columns_first() {
        let cells = (0..3).map(|i| picture(&format!("p{i}"), 3, 2)).collect();
        let spec = GridSpec::new().nrow(2).by_row(false);
        let composition = compose(cells, &spec, &LabelSpec::new("auto")).unwrap();
        assert_eq!(composition.grid.dims(), GridDims { nrow: 2, ncol: 2 });
        assert_eq!(
            labels_at(&composition.grid),
            vec![
                ("a".to_string(), 0, 0),
                ("b".to_string(), 1, 0),
                ("c".to_string(), 0, 1),
            ]
        );
    }

    #[test]
    fn empty_cells_take_a_label_and_padding_does_not() {
        let cells = vec![picture("p", 2, 2), Cell::empty(), picture("q", 2, 2)];
        let composition = compose(cells, &GridSpec::new(), &LabelSpec::new("AUTO")).unwrap();
        let grid = &composition.grid;

        assert_eq!(grid.cells().len(), 4);
        let empty = grid.cell_at(0, 1).unwrap();
        assert!(empty.content.is_none());
        assert_eq!(empty.label.as_ref().unwrap().text, "B");
        let padding = grid.cell_at(1, 1).unwrap();
        assert!(padding.content.is_none() && padding.label.is_none());
    }

    #[test]
    fn relative_widths_hold_under_auto_sizing() {
        let cells = vec![picture("a", 4, 3), picture("b", 4, 3)];
        let spec = GridSpec::new().ncol(2).rel_widths(vec![1.0, 2.0]);
        let grid = compose(cells, &spec, &LabelSpec::default()).unwrap().grid;
        assert_eq!(grid.column_widths(), &[4.0, 8.0]);
        assert_eq!(grid.row_heights(), &[3.0]);
        assert_eq!(grid.size(), Size::new(12.0, 3.0));
    }

    #[test]
    fn relative_widths_split_an_explicit_total() {
        let cells = vec![Cell::new(Fill::new("a", '.').into_ref()), picture("b", 2, 1)];
        let spec = GridSpec::new().rel_widths(vec![1.0, 2.0]).size(30.0, 6.0);
        let grid = compose(cells, &spec, &LabelSpec::default()).unwrap().grid;
        assert_eq!(grid.column_widths(), &[10.0, 20.0]);
        assert_eq!(grid.cells()[0].area, Rect::new(0.0, 0.0, 10.0, 6.0));
        // Fixed content keeps its size, centred in its box.
        assert_eq!(grid.cells()[1].area, Rect::new(19.0, 2.5, 2.0, 1.0));
    }

    #[test]
    fn rel_widths_length_must_match_columns() {
        let cells = vec![picture("a", 1, 1), picture("b", 1, 1)];
        let spec = GridSpec::new().ncol(2).rel_widths(vec![1.0, 1.0, 1.0]);
        let err = compose(cells, &spec, &LabelSpec::default()).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::FieldLengthMismatch {
                field: "rel_widths",
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn label_field_length_mismatch_is_fatal() {
        let cells = vec![picture("a", 1, 1), picture("b", 1, 1)];
        let labels = LabelSpec::new("AUTO").hjust([0.0, 0.5, 1.0]);
        let err = compose(cells, &GridSpec::new(), &labels).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::FieldLengthMismatch { field: "hjust", .. }
        ));
    }

    #[test]
    fn flexible_only_grid_uses_fallback_size() {
        let cells = vec![
            Cell::new(Fill::new("a", 'a').into_ref()),
            Cell::new(Fill::new("b", 'b').into_ref()),
        ];
        let grid = compose(cells, &GridSpec::new(), &LabelSpec::default()).unwrap().grid;
        assert_eq!(grid.column_widths(), &[40.0, 40.0]);
        assert_eq!(grid.row_heights(), &[24.0]);
    }

    #[test]
    fn scale_shrinks_content_about_the_centre() {
        let cells = vec![Cell::new(Fill::new("a", 'a').into_ref())];
        let spec = GridSpec::new().size(10.0, 10.0).scale(0.5);
        let grid = compose(cells, &spec, &LabelSpec::default()).unwrap().grid;
        assert_eq!(grid.cells()[0].area, Rect::new(2.5, 2.5, 5.0, 5.0));

        let bad = GridSpec::new().scale(0.0);
        let err = compose(vec![picture("p", 1, 1)], &bad, &LabelSpec::default()).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidRelativeSize { field: "scale", .. }
        ));
    }

    #[test]
    fn opaque_contents_pass_through_alignment() {
        let a = Picture::new("a", "##").into_ref();
        let b = Picture::new("b", "##").into_ref();
        let spec = GridSpec::new().align(AlignmentSpec::parse("hv", "tblr").unwrap());
        let composition = compose(
            vec![Cell::new(Arc::clone(&a)), Cell::empty(), Cell::new(Arc::clone(&b))],
            &spec,
            &LabelSpec::default(),
        )
        .unwrap();

        let cells = composition.grid.cells();
        assert!(Arc::ptr_eq(cells[0].content.as_ref().unwrap(), &a));
        assert!(Arc::ptr_eq(cells[2].content.as_ref().unwrap(), &b));
        assert!(composition.diagnostics.contains(&Diagnostic::UnsupportedGeometry {
            index: 2,
            name: "b".to_string()
        }));
        assert!(composition.is_degraded());
    }

    #[test]
    fn no_alignment_axis_reports_nothing() {
        let spec = GridSpec::new().align(AlignmentSpec::parse("none", "").unwrap());
        let composition = compose(vec![picture("p", 2, 1)], &spec, &LabelSpec::default()).unwrap();
        assert!(composition.diagnostics.is_empty());
        assert!(!composition.is_degraded());
    }

    #[test]
    fn aligned_charts_share_panel_offsets() {
        let narrow = ChartPanel::builder("narrow")
            .y_axis(None, ["1", "0"])
            .build()
            .unwrap()
            .into_ref();
        let wide = ChartPanel::builder("wide")
            .y_axis(Some("count"), ["1000", "0"])
            .build()
            .unwrap()
            .into_ref();
        let spec = GridSpec::new()
            .ncol(1)
            .align(AlignmentSpec::parse("v", "l").unwrap());
        let composition = compose(
            vec![Cell::new(narrow), Cell::new(wide)],
            &spec,
            &LabelSpec::default(),
        )
        .unwrap();
        assert!(composition.diagnostics.is_empty());

        let before: Vec<f64> = composition
            .grid
            .cells()
            .iter()
            .map(|c| {
                let content = c.content.as_ref().unwrap();
                extract(content.as_ref()).into_panel().unwrap().horizontal.before_panel()
            })
            .collect();
        assert_eq!(before[0], before[1]);
    }

    #[test]
    fn aligned_panels_line_up_when_rendered() {
        let narrow = ChartPanel::builder("narrow")
            .y_axis(None, ["1", "0"])
            .build()
            .unwrap()
            .into_ref();
        let wide = ChartPanel::builder("wide")
            .y_axis(None, ["1000", "0"])
            .legend(["online", "store"])
            .build()
            .unwrap()
            .into_ref();
        let spec = GridSpec::new()
            .ncol(1)
            .align(AlignmentSpec::parse("v", "l").unwrap());
        let grid = compose(
            vec![Cell::new(narrow), Cell::new(wide)],
            &spec,
            &LabelSpec::default(),
        )
        .unwrap()
        .grid;

        let mut surface = RecordingSurface::new(grid.size());
        render(&grid, &mut surface).unwrap();
        let frames = surface.strokes();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].x, frames[1].x);
        assert_eq!(frames[0].x, 6.0);
    }

    #[test]
    fn right_aligned_panels_pin_to_the_cell_end() {
        let short = ChartPanel::builder("short").build().unwrap().into_ref();
        let legend = ChartPanel::builder("legend")
            .y_axis(None, ["1000", "0"])
            .legend(["online"])
            .build()
            .unwrap()
            .into_ref();
        let spec = GridSpec::new()
            .ncol(1)
            .align(AlignmentSpec::parse("v", "r").unwrap());
        let grid = compose(
            vec![Cell::new(short), Cell::new(legend)],
            &spec,
            &LabelSpec::default(),
        )
        .unwrap()
        .grid;

        let mut surface = RecordingSurface::new(grid.size());
        render(&grid, &mut surface).unwrap();
        let frames = surface.strokes();
        assert_eq!(frames[0].right(), frames[1].right());
    }

    #[test]
    fn grids_nest_and_render() {
        let inner = compose(
            vec![picture("a", 2, 1), picture("b", 2, 1)],
            &GridSpec::new().ncol(2),
            &LabelSpec::default(),
        )
        .unwrap()
        .into_drawable();
        assert!(matches!(extract(inner.as_ref()), Geometry::Unsupported));

        let chart = ChartPanel::builder("chart").build().unwrap().into_ref();
        let spec = GridSpec::new().align(AlignmentSpec::parse("hv", "").unwrap());
        let outer = compose(
            vec![Cell::new(Arc::clone(&inner)), Cell::new(chart)],
            &spec,
            &LabelSpec::new("AUTO"),
        )
        .unwrap();
        assert_eq!(
            outer.diagnostics,
            vec![Diagnostic::UnsupportedGeometry {
                index: 0,
                name: "grid".to_string()
            }]
        );
        assert!(Arc::ptr_eq(outer.grid.cells()[0].content.as_ref().unwrap(), &inner));

        let canvas = render_to_canvas(&outer.grid, Size::new(80.0, 24.0)).unwrap();
        let text = canvas.lines().join("\n");
        assert!(text.contains("##"));
        assert!(text.contains('┌'));
    }

    #[test]
    fn labels_are_drawn_at_cell_corners_after_contents() {
        let cells = vec![picture("a", 4, 2), picture("b", 6, 2)];
        let grid = compose(cells, &GridSpec::new().ncol(2), &LabelSpec::new("AUTO"))
            .unwrap()
            .grid;
        let mut surface = RecordingSurface::new(grid.size());
        render(&grid, &mut surface).unwrap();

        let texts = surface.texts();
        let labels: Vec<_> = texts.iter().filter(|(t, _)| t == "A" || t == "B").collect();
        assert_eq!(labels[0], &("A".to_string(), Point::new(0.0, 0.0)));
        assert_eq!(labels[1], &("B".to_string(), Point::new(6.0, 0.0)));
        // Contents come first, labels last.
        assert_eq!(texts.last().map(|(t, _)| t.as_str()), Some("B"));
    }

    #[test]
    fn render_scales_into_a_larger_area() {
        let grid = compose(
            vec![Cell::new(Fill::new("a", '#').into_ref())],
            &GridSpec::new().size(4.0, 2.0),
            &LabelSpec::default(),
        )
        .unwrap()
        .grid;
        let mut surface = RecordingSurface::new(Size::new(8.0, 4.0));
        render(&grid, &mut surface).unwrap();
        assert!(surface.ops().iter().any(|op| matches!(
            op,
            crate::render::DrawOp::Fill { rect, .. } if *rect == Rect::new(0.0, 0.0, 8.0, 4.0)
        )));
    }

    #[test]
    fn composition_is_logged_and_counted() {
        let sink = MemorySink::new();
        let mut config = ComposerConfig::default().with_logger(Logger::new(sink.clone()));
        config.enable_metrics();
        let composer = GridComposer::new(config).unwrap();
        let labels = composer.labels("AUTO");
        composer
            .compose(vec![picture("a", 1, 1), Cell::empty()], &GridSpec::new(), &labels)
            .unwrap();

        assert!(sink.messages().contains(&"grid.composed".to_string()));
        let reported = sink
            .events()
            .into_iter()
            .find(|e| e.target == METRICS_TARGET)
            .unwrap();
        assert_eq!(reported.message, "composition_metrics");
        assert_eq!(reported.fields["cells"], serde_json::json!(2));
        let snapshot = composer.config().metrics_handle().unwrap().lock().unwrap().snapshot();
        assert_eq!(snapshot.grids, 1);
        assert_eq!(snapshot.cells, 2);
        assert_eq!(snapshot.labels, 2);
    }
}
