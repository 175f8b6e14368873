//! Application configuration.

use crate::glyph_source::{CachedGlyphSource, CommandGlyphSource, DEFAULT_FONT};
use crate::icon::{IconGenerator, PaletteChoice};
use glyphmark_render::SvgRenderer;
use std::path::PathBuf;

/// Which program produces glyph outlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GlyphTool {
    /// Bundled CoreText helper run through `swift`.
    #[default]
    Swift,
    /// Any executable invoked as `<program> <args...> <FONT> <TEXT>`.
    Command { program: PathBuf, args: Vec<String> },
}

/// Settings shared by the `icon` and `setup` commands.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Font the letters are set in.
    pub font: String,
    /// Directory the glyph tool runs in and keeps its helper files under.
    pub work_dir: PathBuf,
    pub glyph_tool: GlyphTool,
    pub palette: PaletteChoice,
    /// Rendered size of the square icon, in pixels.
    pub render_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            work_dir: PathBuf::from("."),
            glyph_tool: GlyphTool::Swift,
            palette: PaletteChoice::Random,
            render_size: 512,
        }
    }
}

impl AppConfig {
    /// Cached glyph source for the configured tool.
    pub fn glyph_source(&self) -> CachedGlyphSource<CommandGlyphSource> {
        let source = match &self.glyph_tool {
            GlyphTool::Swift => CommandGlyphSource::swift(&self.work_dir, &self.font),
            GlyphTool::Command { program, args } => {
                CommandGlyphSource::custom(program, args, &self.work_dir, &self.font)
            }
        };
        CachedGlyphSource::new(source)
    }

    /// Icon generator wired to the configured tool, palette and size.
    pub fn icon_generator(&self) -> IconGenerator<CachedGlyphSource<CommandGlyphSource>> {
        IconGenerator::new(self.glyph_source())
            .with_palette(self.palette)
            .with_renderer(SvgRenderer::new(self.render_size, self.render_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.font, "HelveticaNeue-Bold");
        assert_eq!(config.glyph_tool, GlyphTool::Swift);
        assert_eq!(config.palette, PaletteChoice::Random);
        assert_eq!(config.render_size, 512);
    }

    #[test]
    fn test_glyph_source_uses_font_and_work_dir() {
        let config = AppConfig {
            font: "Menlo".to_string(),
            work_dir: PathBuf::from("/tmp/project"),
            glyph_tool: GlyphTool::Command {
                program: PathBuf::from("glyphs"),
                args: vec!["--json".to_string()],
            },
            ..AppConfig::default()
        };
        let source = config.glyph_source();
        assert_eq!(source.inner().font(), "Menlo");
        assert_eq!(source.inner().work_dir(), std::path::Path::new("/tmp/project"));
    }
}
