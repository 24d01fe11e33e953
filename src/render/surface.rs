use serde::{Deserialize, Serialize};

use crate::geometry::{Justify, Point, Rect, Size};

/// Styling carried through to the surface untouched by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f64,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub face: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 11.0,
            family: None,
            face: None,
            color: None,
        }
    }
}

/// Drawing target consumed by every drawable.
pub trait Surface {
    fn size(&self) -> Size;

    fn fill(&mut self, rect: Rect, glyph: char);

    /// Outline `rect`.
    fn stroke_rect(&mut self, rect: Rect);

    /// Draw `text` so that its bounding box sits at `anchor` shifted by `justify`
    /// (see [`text_bounds`]).
    fn draw_text(&mut self, text: &str, anchor: Point, justify: Justify, style: &TextStyle);
}

/// Bounding box of anchored text in the y-down frame.
///
/// `hjust = 0` puts the left edge on the anchor, `1` the right edge; `vjust = 1`
/// puts the top edge on the anchor, `0` the bottom edge. Values outside `[0, 1]`
/// push the text away from the anchor.
pub fn text_bounds(anchor: Point, text: Size, justify: Justify) -> Rect {
    Rect::new(
        anchor.x - justify.h * text.width,
        anchor.y - (1.0 - justify.v) * text.height,
        text.width,
        text.height,
    )
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill {
        rect: Rect,
        glyph: char,
    },
    Stroke {
        rect: Rect,
    },
    Text {
        text: String,
        anchor: Point,
        justify: Justify,
        style: TextStyle,
    },
}

/// Surface that keeps every call, for hosts that forward drawing elsewhere and for tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Text calls as `(text, anchor)` pairs in drawing order.
    pub fn texts(&self) -> Vec<(String, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, anchor, .. } => Some((text.clone(), *anchor)),
                _ => None,
            })
            .collect()
    }

    pub fn strokes(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { rect } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, rect: Rect, glyph: char) {
        self.ops.push(DrawOp::Fill { rect, glyph });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Stroke { rect });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, justify: Justify, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            anchor,
            justify,
            style: style.clone(),
        });
    }
}
