//! Drawing surfaces and terminal output.
//!
//! The layout engine only talks to [`Surface`]; [`CharCanvas`] and
//! [`RecordingSurface`] are the bundled implementations.

mod canvas;
mod core;
mod surface;

pub use self::canvas::{CanvasCell, CharCanvas};
pub use self::core::{AnsiRenderer, RendererSettings, render, render_to_canvas};
pub use self::surface::{DrawOp, RecordingSurface, Surface, TextStyle, text_bounds};
