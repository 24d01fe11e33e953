use crate::drawable::DrawableRef;
use crate::geometry::Justify;
use crate::labels::Label;

/// One grid slot as supplied by the caller.
///
/// `Cell::empty()` is the explicit "no content" marker: it occupies a grid
/// position and can still carry a label.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub content: Option<DrawableRef>,
    pub label: Option<Label>,
    /// Placement of fixed-size content inside its box.
    pub justify: Justify,
}

impl Cell {
    pub fn new(content: DrawableRef) -> Self {
        Self {
            content: Some(content),
            label: None,
            justify: Justify::CENTER,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

impl From<DrawableRef> for Cell {
    fn from(content: DrawableRef) -> Self {
        Cell::new(content)
    }
}

impl From<Option<DrawableRef>> for Cell {
    fn from(content: Option<DrawableRef>) -> Self {
        match content {
            Some(content) => Cell::new(content),
            None => Cell::empty(),
        }
    }
}
