use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::drawable::Drawable;
use crate::error::Result;
use crate::geometry::{Rect, Size};

use super::canvas::{CanvasCell, CharCanvas};
use super::surface::Surface;

/// Render `drawable` over the whole surface.
pub fn render(drawable: &dyn Drawable, surface: &mut dyn Surface) -> Result<()> {
    let area = Rect::from_size(surface.size());
    drawable.render(surface, area)
}

/// Render `drawable` into a fresh canvas sized to its preferred size
/// (or `fallback` for flexible drawables).
pub fn render_to_canvas(drawable: &dyn Drawable, fallback: Size) -> Result<CharCanvas> {
    let size = drawable.size_hint().fixed().unwrap_or(fallback);
    let mut canvas = CharCanvas::for_size(size);
    render(drawable, &mut canvas)?;
    Ok(canvas)
}

/// Renderer runtime parameters.
#[derive(Debug, Clone, Default)]
pub struct RendererSettings {
    /// Terminal position of the canvas' top-left cell.
    pub origin: (u16, u16),
    pub restore_cursor: Option<(u16, u16)>,
    /// Emit colour and weight attributes.
    pub styled: bool,
}

/// Writes character canvases to a terminal with crossterm commands.
pub struct AnsiRenderer {
    settings: RendererSettings,
    last_frame: Option<blake3::Hash>,
}

impl AnsiRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            last_frame: None,
        }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings {
            styled: true,
            ..RendererSettings::default()
        })
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    /// Forget the last frame so the next call writes unconditionally.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
    }

    /// Write `canvas` unless it matches the previous frame. Returns whether
    /// anything was written.
    pub fn render(&mut self, writer: &mut impl Write, canvas: &CharCanvas) -> Result<bool> {
        let digest = canvas.digest();
        if self.last_frame == Some(digest) {
            return Ok(false);
        }

        let (origin_col, origin_row) = self.settings.origin;
        for row in 0..canvas.height() {
            queue!(
                writer,
                MoveTo(origin_col, origin_row.saturating_add(row))
            )?;
            self.write_row(writer, canvas.row(row))?;
        }

        if let Some((row, col)) = self.settings.restore_cursor {
            queue!(writer, MoveTo(col, row))?;
        }

        writer.flush()?;
        self.last_frame = Some(digest);
        Ok(true)
    }

    fn write_row(&self, writer: &mut impl Write, cells: &[CanvasCell]) -> Result<()> {
        let mut color: Option<Color> = None;
        let mut bold = false;
        for cell in cells {
            if cell.glyph == '\0' {
                continue;
            }
            if self.settings.styled && (cell.color != color || cell.bold != bold) {
                queue!(writer, SetAttribute(Attribute::Reset), ResetColor)?;
                if let Some(fg) = cell.color {
                    queue!(writer, SetForegroundColor(fg))?;
                }
                if cell.bold {
                    queue!(writer, SetAttribute(Attribute::Bold))?;
                }
                color = cell.color;
                bold = cell.bold;
            }
            queue!(writer, Print(cell.glyph))?;
        }
        if self.settings.styled && (color.is_some() || bold) {
            queue!(writer, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Justify, Point};
    use crate::render::TextStyle;

    #[test]
    fn renderer_writes_cursor_sequences() {
        let mut canvas = CharCanvas::new(5, 2);
        canvas.draw_text("hi", Point::new(0.0, 0.0), Justify::new(0.0, 1.0), &TextStyle::default());

        let mut output = Vec::new();
        let mut renderer = AnsiRenderer::new(RendererSettings {
            origin: (2, 3),
            ..RendererSettings::default()
        });
        assert!(renderer.render(&mut output, &canvas).unwrap());

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("\u{1b}[4;3Hhi"));
        assert!(rendered.contains("\u{1b}[5;3H"));
    }

    #[test]
    fn unchanged_frame_is_skipped() {
        let canvas = CharCanvas::new(2, 1);
        let mut renderer = AnsiRenderer::with_default();
        let mut output = Vec::new();
        assert!(renderer.render(&mut output, &canvas).unwrap());
        let mut second = Vec::new();
        assert!(!renderer.render(&mut second, &canvas).unwrap());
        assert!(second.is_empty());

        renderer.invalidate();
        assert!(renderer.render(&mut second, &canvas).unwrap());
    }
}
