//! Glyphmark Application
//!
//! Glyph tool integration, icon generation and the example-app setup
//! pipeline behind the `glyphmark` command.

mod config;
mod glyph_source;
mod icon;
mod setup;

pub use config::{AppConfig, GlyphTool};
pub use glyph_source::{
    CachedGlyphSource, CommandGlyphSource, DEFAULT_FONT, GlyphError, GlyphResult, GlyphSource,
};
pub use icon::{GeneratedIcon, IconError, IconGenerator, PaletteChoice};
pub use setup::{
    ASSETS_PACKAGE, CommandRunner, ProcessRunner, SetupError, SetupOptions, SetupSummary,
    ensure_assets_package, generate_platform_assets, run_setup,
};
