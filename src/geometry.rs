use serde::{Deserialize, Serialize};

/// Extent measured in layout units (one unit renders as one terminal cell).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrink (or grow) the rect around its centre by `scale`.
    pub fn scaled(&self, scale: f64) -> Self {
        let width = self.width * scale;
        let height = self.height * scale;
        let center = self.center();
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Place a box of `size` inside `self`, distributing the slack by `justify`.
    /// The box may overhang when it is larger than `self`.
    pub fn place(&self, size: Size, justify: Justify) -> Self {
        let x = self.x + (self.width - size.width) * justify.h;
        let y = self.y + (self.height - size.height) * justify.v;
        Self::new(x, y, size.width, size.height)
    }

    /// Re-express a rect given relative to `from` in the coordinate frame of `to`.
    pub fn map_into(&self, from: Rect, to: Rect) -> Self {
        let sx = if from.width > 0.0 { to.width / from.width } else { 1.0 };
        let sy = if from.height > 0.0 { to.height / from.height } else { 1.0 };
        Self::new(
            to.x + (self.x - from.x) * sx,
            to.y + (self.y - from.y) * sy,
            self.width * sx,
            self.height * sy,
        )
    }
}

/// Horizontal/vertical justification, 0 = left/top, 1 = right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Justify {
    pub h: f64,
    pub v: f64,
}

impl Justify {
    pub const CENTER: Justify = Justify::new(0.5, 0.5);

    pub const fn new(h: f64, v: f64) -> Self {
        Self { h, v }
    }
}

impl Default for Justify {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_centers_smaller_box() {
        let cell = Rect::new(10.0, 0.0, 20.0, 10.0);
        let placed = cell.place(Size::new(10.0, 4.0), Justify::CENTER);
        assert_eq!(placed, Rect::new(15.0, 3.0, 10.0, 4.0));
    }

    #[test]
    fn place_honours_justification() {
        let cell = Rect::new(0.0, 0.0, 20.0, 10.0);
        let placed = cell.place(Size::new(10.0, 4.0), Justify::new(0.0, 1.0));
        assert_eq!(placed, Rect::new(0.0, 6.0, 10.0, 4.0));
    }

    #[test]
    fn map_into_rescales() {
        let from = Rect::new(0.0, 0.0, 10.0, 10.0);
        let to = Rect::new(100.0, 50.0, 20.0, 5.0);
        let mapped = Rect::new(5.0, 2.0, 5.0, 4.0).map_into(from, to);
        assert_eq!(mapped, Rect::new(110.0, 51.0, 10.0, 2.0));
    }

    #[test]
    fn scaled_keeps_center() {
        let rect = Rect::new(0.0, 0.0, 10.0, 20.0).scaled(0.5);
        assert_eq!(rect, Rect::new(2.5, 5.0, 5.0, 10.0));
    }
}
