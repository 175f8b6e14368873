//! Glyphmark Render Library
//!
//! Serializes a settled monogram layout into an SVG document.

mod renderer;
mod svg;

pub use renderer::{RenderResult, RendererError};
pub use svg::{SvgRenderer, format_number, path_data};
