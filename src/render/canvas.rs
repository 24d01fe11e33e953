use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

use crate::geometry::{Justify, Point, Rect, Size};
use crate::text::{measure, plain};

use super::surface::{Surface, TextStyle, text_bounds};

/// Continuation marker for the second half of a wide glyph.
const WIDE_TAIL: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasCell {
    pub glyph: char,
    pub color: Option<Color>,
    pub bold: bool,
}

impl Default for CanvasCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            color: None,
            bold: false,
        }
    }
}

/// In-memory character grid; one layout unit maps to one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CharCanvas {
    width: u16,
    height: u16,
    cells: Vec<CanvasCell>,
}

impl CharCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![CanvasCell::default(); width as usize * height as usize],
        }
    }

    /// Canvas large enough for a drawable of `size`.
    pub fn for_size(size: Size) -> Self {
        let clamp = |v: f64| v.ceil().clamp(0.0, u16::MAX as f64) as u16;
        Self::new(clamp(size.width), clamp(size.height))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&CanvasCell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row as usize * self.width as usize + col as usize)
    }

    pub fn row(&self, row: u16) -> &[CanvasCell] {
        let start = row as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Rendered rows with trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                let line: String = self
                    .row(row)
                    .iter()
                    .filter(|cell| cell.glyph != WIDE_TAIL)
                    .map(|cell| cell.glyph)
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Content hash used to skip redundant terminal writes.
    pub fn digest(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.width.to_le_bytes());
        hasher.update(&self.height.to_le_bytes());
        for cell in &self.cells {
            hasher.update(&(cell.glyph as u32).to_le_bytes());
            hasher.update(&[cell.bold as u8]);
            hasher.update(format!("{:?}", cell.color).as_bytes());
        }
        hasher.finalize()
    }

    fn put(&mut self, col: i64, row: i64, cell: CanvasCell) {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return;
        }
        let idx = row as usize * self.width as usize + col as usize;
        self.cells[idx] = cell;
    }

    fn put_glyph(&mut self, col: i64, row: i64, glyph: char) {
        self.put(
            col,
            row,
            CanvasCell {
                glyph,
                ..CanvasCell::default()
            },
        );
    }
}

/// Snap a rect to inclusive-exclusive cell spans.
fn cell_span(rect: Rect) -> (i64, i64, i64, i64) {
    let x0 = rect.x.round() as i64;
    let y0 = rect.y.round() as i64;
    let x1 = rect.right().round() as i64;
    let y1 = rect.bottom().round() as i64;
    (x0, y0, x1, y1)
}

fn is_bold(face: Option<&str>) -> bool {
    matches!(face, Some(face) if face.split('.').any(|part| part == "bold"))
}

impl Surface for CharCanvas {
    fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    fn fill(&mut self, rect: Rect, glyph: char) {
        let (x0, y0, x1, y1) = cell_span(rect);
        for row in y0..y1 {
            for col in x0..x1 {
                self.put_glyph(col, row, glyph);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let (x0, y0, x1, y1) = cell_span(rect);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let (right, bottom) = (x1 - 1, y1 - 1);
        if right == x0 {
            for row in y0..y1 {
                self.put_glyph(x0, row, '│');
            }
            return;
        }
        if bottom == y0 {
            for col in x0..x1 {
                self.put_glyph(col, y0, '─');
            }
            return;
        }
        for col in x0 + 1..right {
            self.put_glyph(col, y0, '─');
            self.put_glyph(col, bottom, '─');
        }
        for row in y0 + 1..bottom {
            self.put_glyph(x0, row, '│');
            self.put_glyph(right, row, '│');
        }
        self.put_glyph(x0, y0, '┌');
        self.put_glyph(right, y0, '┐');
        self.put_glyph(x0, bottom, '└');
        self.put_glyph(right, bottom, '┘');
    }

    fn draw_text(&mut self, text: &str, anchor: Point, justify: Justify, style: &TextStyle) {
        let text = plain(text);
        let bounds = text_bounds(anchor, measure(&text), justify);
        let color = style
            .color
            .as_deref()
            .and_then(|name| Color::try_from(name).ok());
        let bold = is_bold(style.face.as_deref());
        let left = bounds.x.round() as i64;
        let top = bounds.y.round() as i64;

        for (line_idx, line) in text.split('\n').enumerate() {
            let row = top + line_idx as i64;
            let mut col = left;
            for ch in line.chars() {
                let width = ch.width().unwrap_or(0) as i64;
                if width == 0 {
                    continue;
                }
                self.put(col, row, CanvasCell { glyph: ch, color, bold });
                if width == 2 {
                    self.put(
                        col + 1,
                        row,
                        CanvasCell {
                            glyph: WIDE_TAIL,
                            color,
                            bold,
                        },
                    );
                }
                col += width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_draws_box() {
        let mut canvas = CharCanvas::new(4, 3);
        canvas.stroke_rect(Rect::new(0.0, 0.0, 4.0, 3.0));
        assert_eq!(canvas.lines(), vec!["┌──┐", "│  │", "└──┘"]);
    }

    #[test]
    fn text_is_clipped_and_styled() {
        let mut canvas = CharCanvas::new(3, 1);
        let style = TextStyle {
            color: Some("red".to_string()),
            face: Some("bold".to_string()),
            ..TextStyle::default()
        };
        canvas.draw_text("ABCD", Point::new(1.0, 0.0), Justify::new(0.0, 1.0), &style);
        assert_eq!(canvas.lines(), vec![" AB"]);
        let cell = canvas.cell(1, 0).unwrap();
        assert_eq!(cell.color, Some(Color::Red));
        assert!(cell.bold);
    }

    #[test]
    fn wide_glyph_occupies_two_cells() {
        let mut canvas = CharCanvas::new(4, 1);
        canvas.draw_text("図a", Point::new(0.0, 0.0), Justify::new(0.0, 1.0), &TextStyle::default());
        assert_eq!(canvas.lines(), vec!["図a"]);
        assert_eq!(canvas.cell(2, 0).unwrap().glyph, 'a');
    }

    #[test]
    fn digest_tracks_content() {
        let mut canvas = CharCanvas::new(3, 1);
        let before = canvas.digest();
        canvas.fill(Rect::new(0.0, 0.0, 1.0, 1.0), '#');
        assert_ne!(before, canvas.digest());
    }
}
