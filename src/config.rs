use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::Size;
use crate::logging::Logger;
use crate::metrics::CompositionMetrics;

/// Default label styling applied when a caller does not override a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelDefaults {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub hjust: f64,
    pub vjust: f64,
    pub family: Option<String>,
    pub face: Option<String>,
    pub color: Option<String>,
}

impl Default for LabelDefaults {
    fn default() -> Self {
        Self {
            size: 14.0,
            x: 0.0,
            y: 1.0,
            hjust: -0.5,
            vjust: 1.5,
            family: None,
            face: Some("bold".to_string()),
            color: None,
        }
    }
}

/// Configuration knobs for the grid composer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Total size used when auto-sizing finds no fixed-size content.
    pub fallback_size: Size,
    pub labels: LabelDefaults,
    /// Optional structured logger used by composition and alignment.
    #[serde(skip)]
    pub logger: Option<Logger>,
    /// Counters shared with the caller.
    #[serde(skip)]
    pub metrics: Option<Arc<Mutex<CompositionMetrics>>>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            fallback_size: Size::new(80.0, 24.0),
            labels: LabelDefaults::default(),
            logger: None,
            metrics: None,
        }
    }
}

impl ComposerConfig {
    /// Load the serializable fields from JSON; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| LayoutError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let Size { width, height } = self.fallback_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::Config(format!(
                "fallback_size must be positive, got {width}x{height}"
            )));
        }
        Ok(())
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(CompositionMetrics::new())));
        }
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<CompositionMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_overrides_selected_fields() {
        let config = ComposerConfig::from_json_str(
            r#"{"fallback_size":{"width":40,"height":10},"labels":{"size":10,"color":"blue"}}"#,
        )
        .unwrap();
        assert_eq!(config.fallback_size, Size::new(40.0, 10.0));
        assert_eq!(config.labels.size, 10.0);
        assert_eq!(config.labels.color.as_deref(), Some("blue"));
        assert_eq!(config.labels.hjust, -0.5);
        assert!(config.logger.is_none());
    }

    #[test]
    fn rejects_zero_fallback() {
        let err = ComposerConfig::from_json_str(r#"{"fallback_size":{"width":0,"height":10}}"#);
        assert!(matches!(err, Err(LayoutError::Config(_))));
    }

    #[test]
    fn metrics_handle_is_shared() {
        let mut config = ComposerConfig::default();
        assert!(config.metrics_handle().is_none());
        config.enable_metrics();
        let handle = config.metrics_handle().unwrap();
        handle.lock().unwrap().record_grid(1, 0);
        let snapshot = config.metrics_handle().unwrap().lock().unwrap().snapshot();
        assert_eq!(snapshot.grids, 1);
    }
}
