use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running counters for alignment and composition work.
#[derive(Debug, Default, Clone)]
pub struct CompositionMetrics {
    grids: u64,
    cells: u64,
    labels: u64,
    aligned: u64,
    passthrough: u64,
}

impl CompositionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_grid(&mut self, cells: usize, labels: usize) {
        self.grids = self.grids.saturating_add(1);
        self.cells = self.cells.saturating_add(cells as u64);
        self.labels = self.labels.saturating_add(labels as u64);
    }

    pub fn record_alignment(&mut self, aligned: usize, passthrough: usize) {
        self.aligned = self.aligned.saturating_add(aligned as u64);
        self.passthrough = self.passthrough.saturating_add(passthrough as u64);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            grids: self.grids,
            cells: self.cells,
            labels: self.labels,
            aligned: self.aligned,
            passthrough: self.passthrough,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub grids: u64,
    pub cells: u64,
    pub labels: u64,
    pub aligned: u64,
    pub passthrough: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "composition_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("grids".to_string(), json!(self.grids));
        map.insert("cells".to_string(), json!(self.cells));
        map.insert("labels".to_string(), json!(self.labels));
        map.insert("aligned".to_string(), json!(self.aligned));
        map.insert("passthrough".to_string(), json!(self.passthrough));
        map
    }
}
