use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::drawable::{Drawable, DrawableRef};
use crate::error::Diagnostic;
use crate::logging::{ALIGN_TARGET, LogLevel, Logger, emit, json_kv, json_str};
use crate::metrics::CompositionMetrics;
use crate::panel::{AxisLayout, Geometry, PanelGeometry, extract};

use super::spec::{AlignmentSpec, Edge};

/// Result of aligning a group: same length and order as the input.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub drawables: Vec<DrawableRef>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Alignment {
    /// True when at least one drawable could not take part.
    pub fn is_degraded(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Reconciles the margins of panel-bearing drawables so chosen edges coincide.
#[derive(Debug, Clone, Default)]
pub struct AlignmentEngine {
    logger: Option<Logger>,
    metrics: Option<Arc<Mutex<CompositionMetrics>>>,
}

impl AlignmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Mutex<CompositionMetrics>>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn align(&self, drawables: &[DrawableRef], spec: &AlignmentSpec) -> Alignment {
        let edges = spec.effective_edges();
        if edges.is_empty() {
            return Alignment {
                drawables: drawables.to_vec(),
                diagnostics: Vec::new(),
            };
        }

        let mut diagnostics = Vec::new();
        let mut geometries: Vec<Option<PanelGeometry>> = Vec::with_capacity(drawables.len());

        for (index, drawable) in drawables.iter().enumerate() {
            match extract(drawable.as_ref()) {
                Geometry::Panel(geometry) => geometries.push(Some(geometry)),
                Geometry::Unsupported => {
                    emit(
                        self.logger.as_ref(),
                        LogLevel::Warn,
                        ALIGN_TARGET,
                        "geometry.unsupported",
                        [json_kv("index", index), json_str("name", drawable.name())],
                    );
                    diagnostics.push(Diagnostic::UnsupportedGeometry {
                        index,
                        name: drawable.name().to_string(),
                    });
                    geometries.push(None);
                }
            }
        }

        let alignable = geometries.iter().filter(|g| g.is_some()).count();
        self.record(alignable, drawables.len() - alignable);

        if alignable == 0 {
            if !drawables.is_empty() {
                emit(
                    self.logger.as_ref(),
                    LogLevel::Debug,
                    ALIGN_TARGET,
                    "alignment.degenerate",
                    [json_kv("requested", drawables.len())],
                );
                diagnostics.push(Diagnostic::DegenerateAlignment {
                    requested: drawables.len(),
                });
            }
            return Alignment {
                drawables: drawables.to_vec(),
                diagnostics,
            };
        }

        for edge in edges.iter() {
            reconcile(&mut geometries, edge);
        }

        emit(
            self.logger.as_ref(),
            LogLevel::Debug,
            ALIGN_TARGET,
            "alignment.applied",
            [
                json_kv("alignable", alignable),
                json_kv("edges", json!(edges.to_string())),
            ],
        );

        let drawables = drawables
            .iter()
            .zip(geometries)
            .map(|(drawable, geometry)| match (drawable.panel(), geometry) {
                (Some(panel), Some(geometry)) if geometry != panel.geometry() => {
                    panel.relayout(geometry)
                }
                _ => Arc::clone(drawable),
            })
            .collect();

        Alignment {
            drawables,
            diagnostics,
        }
    }

    fn record(&self, aligned: usize, passthrough: usize) {
        if let Some(metrics) = &self.metrics {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_alignment(aligned, passthrough);
            }
        }
    }
}

fn table_mut(geometry: &mut PanelGeometry, edge: Edge) -> &mut AxisLayout {
    if edge.is_horizontal_table() {
        &mut geometry.horizontal
    } else {
        &mut geometry.vertical
    }
}

/// Expand every geometry's extent on `edge` to the group maximum.
fn reconcile(geometries: &mut [Option<PanelGeometry>], edge: Edge) {
    let side = edge.side();
    let target = geometries
        .iter_mut()
        .flatten()
        .map(|geometry| table_mut(geometry, edge).extent(side))
        .fold(0.0_f64, f64::max);

    for geometry in geometries.iter_mut().flatten() {
        table_mut(geometry, edge).expand(side, target);
    }
}

/// Align with a default engine (no logging, no metrics).
pub fn align_panels(drawables: &[DrawableRef], spec: &AlignmentSpec) -> Alignment {
    AlignmentEngine::new().align(drawables, spec)
}
