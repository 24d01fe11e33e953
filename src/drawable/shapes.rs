use std::sync::Arc;

use crate::error::Result;
use crate::geometry::{Justify, Rect, Size};
use crate::render::{Surface, TextStyle};
use crate::text::measure;

use super::core::{Drawable, DrawableRef, SizeHint};

/// Opaque fixed-size block of text art, the stand-in for raster images.
#[derive(Debug, Clone)]
pub struct Picture {
    name: String,
    art: String,
    size: Size,
}

impl Picture {
    pub fn new(name: impl Into<String>, art: impl Into<String>) -> Self {
        let art = art.into();
        let size = measure(&art);
        Self {
            name: name.into(),
            art,
            size,
        }
    }

    pub fn into_ref(self) -> DrawableRef {
        Arc::new(self)
    }
}

impl Drawable for Picture {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::Fixed(self.size)
    }

    fn render(&self, surface: &mut dyn Surface, area: Rect) -> Result<()> {
        surface.draw_text(&self.art, area.center(), Justify::CENTER, &TextStyle::default());
        Ok(())
    }
}

/// Opaque drawable that floods whatever box it gets.
#[derive(Debug, Clone)]
pub struct Fill {
    name: String,
    glyph: char,
}

impl Fill {
    pub fn new(name: impl Into<String>, glyph: char) -> Self {
        Self {
            name: name.into(),
            glyph,
        }
    }

    pub fn into_ref(self) -> DrawableRef {
        Arc::new(self)
    }
}

impl Drawable for Fill {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::Flexible
    }

    fn render(&self, surface: &mut dyn Surface, area: Rect) -> Result<()> {
        surface.fill(area, self.glyph);
        Ok(())
    }
}
