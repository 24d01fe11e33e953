use std::sync::Arc;

use crate::error::Result;
use crate::geometry::{Justify, Point, Rect, Size};
use crate::panel::{AxisLayout, PanelGeometry, Region, RegionKind};
use crate::render::{Surface, TextStyle};
use crate::text::display_width;

use super::core::{Drawable, DrawableRef, PanelLayout, SizeHint};

pub const MARGIN_LEFT: &str = "margin-l";
pub const Y_TITLE: &str = "ylab-l";
pub const Y_AXIS: &str = "axis-l";
pub const LEGEND: &str = "legend";
pub const MARGIN_RIGHT: &str = "margin-r";
pub const MARGIN_TOP: &str = "margin-t";
pub const TITLE: &str = "title";
pub const X_AXIS: &str = "axis-b";
pub const X_TITLE: &str = "xlab-b";
pub const MARGIN_BOTTOM: &str = "margin-b";

/// A fully built chart: a framed panel body surrounded by titles, axis text,
/// an optional legend, and margins, all described by its layout tables.
#[derive(Debug, Clone)]
pub struct ChartPanel {
    name: String,
    geometry: PanelGeometry,
    title: Option<String>,
    x_title: Option<String>,
    y_title: Option<String>,
    x_ticks: Vec<String>,
    y_ticks: Vec<String>,
    legend: Vec<String>,
    body: Option<char>,
    flexible: bool,
}

impl ChartPanel {
    pub fn builder(name: impl Into<String>) -> ChartBuilder {
        ChartBuilder::new(name)
    }

    /// Chart with caller-provided tables and no decorations.
    pub fn from_geometry(name: impl Into<String>, geometry: PanelGeometry) -> Self {
        Self {
            name: name.into(),
            geometry,
            title: None,
            x_title: None,
            y_title: None,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            legend: Vec::new(),
            body: None,
            flexible: false,
        }
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Let the panel body stretch to whatever box the chart receives.
    pub fn flexible(mut self) -> Self {
        self.flexible = true;
        self
    }

    pub fn into_ref(self) -> DrawableRef {
        Arc::new(self)
    }

    /// Absolute rect of the panel body when rendered into `area`.
    pub fn panel_rect(&self, area: Rect) -> Rect {
        let columns = spans(&self.geometry.horizontal, area.x, area.width);
        let rows = spans(&self.geometry.vertical, area.y, area.height);
        let (x, width) = columns[self.geometry.horizontal.panel_index()];
        let (y, height) = rows[self.geometry.vertical.panel_index()];
        Rect::new(x, y, width, height)
    }
}

/// `(offset, size)` of every region when the table fills `available`.
fn spans(layout: &AxisLayout, start: f64, available: f64) -> Vec<(f64, f64)> {
    let mut cursor = start;
    layout
        .resolve(available)
        .into_iter()
        .map(|size| {
            let span = (cursor, size);
            cursor += size;
            span
        })
        .collect()
}

fn region_span(layout: &AxisLayout, spans: &[(f64, f64)], name: &str) -> Option<(f64, f64)> {
    layout
        .regions()
        .iter()
        .position(|region| region.name == name)
        .map(|idx| spans[idx])
        .filter(|(_, size)| *size > 0.0)
}

/// Evenly spread `count` positions over `[start, start + len]`.
fn tick_positions(start: f64, len: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start + len / 2.0],
        n => (0..n)
            .map(|i| start + len * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

impl Drawable for ChartPanel {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_hint(&self) -> SizeHint {
        if self.flexible {
            SizeHint::Flexible
        } else {
            SizeHint::Fixed(Size::new(
                self.geometry.horizontal.total(),
                self.geometry.vertical.total(),
            ))
        }
    }

    fn render(&self, surface: &mut dyn Surface, area: Rect) -> Result<()> {
        let horizontal = &self.geometry.horizontal;
        let vertical = &self.geometry.vertical;
        let columns = spans(horizontal, area.x, area.width);
        let rows = spans(vertical, area.y, area.height);
        let panel = self.panel_rect(area);

        if let Some(glyph) = self.body {
            surface.fill(
                Rect::new(panel.x + 1.0, panel.y + 1.0, panel.width - 2.0, panel.height - 2.0),
                glyph,
            );
        }
        surface.stroke_rect(panel);

        let plain = TextStyle::default();
        let center = panel.center();

        if let (Some(text), Some((y, h))) = (&self.title, region_span(vertical, &rows, TITLE)) {
            let style = TextStyle {
                face: Some("bold".to_string()),
                ..TextStyle::default()
            };
            surface.draw_text(text, Point::new(center.x, y + h / 2.0), Justify::CENTER, &style);
        }

        if let (Some(text), Some((y, h))) = (&self.x_title, region_span(vertical, &rows, X_TITLE)) {
            surface.draw_text(text, Point::new(center.x, y + h / 2.0), Justify::CENTER, &plain);
        }

        if let (Some(text), Some((x, w))) = (&self.y_title, region_span(horizontal, &columns, Y_TITLE)) {
            let stacked: Vec<String> = text.chars().map(String::from).collect();
            surface.draw_text(
                &stacked.join("\n"),
                Point::new(x + w / 2.0, center.y),
                Justify::CENTER,
                &plain,
            );
        }

        if let Some((y, _)) = region_span(vertical, &rows, X_AXIS) {
            let xs = tick_positions(panel.x, panel.width, self.x_ticks.len());
            for (tick, x) in self.x_ticks.iter().zip(xs) {
                surface.draw_text(tick, Point::new(x, y), Justify::new(0.5, 1.0), &plain);
            }
        }

        if let Some((x, w)) = region_span(horizontal, &columns, Y_AXIS) {
            // Bottom tick first; the last row of the frame is the baseline.
            let ys = tick_positions(panel.bottom() - 1.0, -(panel.height - 1.0), self.y_ticks.len());
            for (tick, y) in self.y_ticks.iter().zip(ys) {
                surface.draw_text(tick, Point::new(x + w - 1.0, y), Justify::new(1.0, 1.0), &plain);
            }
        }

        if let Some((x, _)) = region_span(horizontal, &columns, LEGEND) {
            if !self.legend.is_empty() {
                surface.draw_text(
                    &self.legend.join("\n"),
                    Point::new(x + 1.0, center.y),
                    Justify::new(0.0, 0.5),
                    &plain,
                );
            }
        }

        Ok(())
    }

    fn panel(&self) -> Option<&dyn PanelLayout> {
        Some(self)
    }
}

impl PanelLayout for ChartPanel {
    fn geometry(&self) -> PanelGeometry {
        self.geometry.clone()
    }

    fn relayout(&self, geometry: PanelGeometry) -> DrawableRef {
        Arc::new(Self {
            geometry,
            ..self.clone()
        })
    }
}

/// Margins in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn uniform(size: f64) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Builds the standard chart tables from its decorations.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    name: String,
    panel: Size,
    margins: Margins,
    title: Option<String>,
    x_title: Option<String>,
    y_title: Option<String>,
    x_ticks: Vec<String>,
    y_ticks: Vec<String>,
    legend: Vec<String>,
    body: Option<char>,
    flexible: bool,
}

impl ChartBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            panel: Size::new(20.0, 8.0),
            margins: Margins::default(),
            title: None,
            x_title: None,
            y_title: None,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            legend: Vec::new(),
            body: None,
            flexible: false,
        }
    }

    pub fn panel_size(mut self, width: f64, height: f64) -> Self {
        self.panel = Size::new(width, height);
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_axis<I, S>(mut self, title: Option<&str>, ticks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.x_title = title.map(str::to_string);
        self.x_ticks = ticks.into_iter().map(Into::into).collect();
        self
    }

    pub fn y_axis<I, S>(mut self, title: Option<&str>, ticks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.y_title = title.map(str::to_string);
        self.y_ticks = ticks.into_iter().map(Into::into).collect();
        self
    }

    pub fn legend<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legend = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn body(mut self, glyph: char) -> Self {
        self.body = Some(glyph);
        self
    }

    pub fn flexible(mut self) -> Self {
        self.flexible = true;
        self
    }

    pub fn build(self) -> Result<ChartPanel> {
        let widest = |items: &[String]| items.iter().map(|s| display_width(s)).max().unwrap_or(0);

        let y_title_width = if self.y_title.is_some() { 2.0 } else { 0.0 };
        let y_axis_width = if self.y_ticks.is_empty() {
            0.0
        } else {
            widest(&self.y_ticks) as f64 + 1.0
        };
        let legend_width = if self.legend.is_empty() {
            0.0
        } else {
            widest(&self.legend) as f64 + 2.0
        };
        let horizontal = AxisLayout::new(vec![
            Region::margin(MARGIN_LEFT, self.margins.left),
            Region::new(Y_TITLE, RegionKind::AxisTitle, y_title_width),
            Region::new(Y_AXIS, RegionKind::AxisText, y_axis_width),
            Region::panel(self.panel.width),
            Region::new(LEGEND, RegionKind::Legend, legend_width),
            Region::margin(MARGIN_RIGHT, self.margins.right),
        ])?;

        let flag = |present: bool| if present { 1.0 } else { 0.0 };
        let vertical = AxisLayout::new(vec![
            Region::margin(MARGIN_TOP, self.margins.top),
            Region::new(TITLE, RegionKind::Title, flag(self.title.is_some())),
            Region::panel(self.panel.height),
            Region::new(X_AXIS, RegionKind::AxisText, flag(!self.x_ticks.is_empty())),
            Region::new(X_TITLE, RegionKind::AxisTitle, flag(self.x_title.is_some())),
            Region::margin(MARGIN_BOTTOM, self.margins.bottom),
        ])?;

        Ok(ChartPanel {
            name: self.name,
            geometry: PanelGeometry::new(horizontal, vertical),
            title: self.title,
            x_title: self.x_title,
            y_title: self.y_title,
            x_ticks: self.x_ticks,
            y_ticks: self.y_ticks,
            legend: self.legend,
            body: self.body,
            flexible: self.flexible,
        })
    }
}
