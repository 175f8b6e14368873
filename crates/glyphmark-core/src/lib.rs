//! Glyphmark Core Library
//!
//! Data structures and layout logic for generating monogram app icons:
//! glyph records, quadrant palettes, name validation and the glyph layout engine.

pub mod glyph;
pub mod indicator;
pub mod input;
pub mod layout;
pub mod palette;

pub use glyph::{Glyph, GlyphDataError, parse_glyphs};
pub use indicator::{HomeIndicator, IndicatorStatus, PluginVersion};
pub use input::{IconRequest, MAX_SHORT_NAME_LEN, ValidationError, pascal_case};
pub use layout::{
    CANVAS_SIZE, Column, Fill, LayoutError, LayoutParams, LetterPlacement, MonogramLayout,
    TARGET_HEIGHT, choose_column, layout_glyphs, layout_glyphs_with, settle_scale,
};
pub use palette::{
    PALETTE_CATALOG, Palette, PaletteError, Quadrant, invert_color, invert_hex, parse_hex_color,
    to_hex, to_hex_upper,
};
