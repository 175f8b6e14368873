//! Monogram icon generation: glyphs in, SVG file out.

use crate::glyph_source::{GlyphError, GlyphSource};
use glyphmark_core::input::{IconRequest, ValidationError};
use glyphmark_core::layout::{LayoutError, MonogramLayout, layout_glyphs};
use glyphmark_core::palette::{Palette, PaletteError};
use glyphmark_render::{RendererError, SvgRenderer};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Icon generation errors.
#[derive(Debug, Error)]
pub enum IconError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    #[error("Glyph tool returned {found} glyph(s) for the {expected} character(s) of \"{text}\"")]
    MissingGlyphs {
        text: String,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// How the background palette is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaletteChoice {
    /// Uniformly random from the catalog.
    #[default]
    Random,
    /// A fixed catalog entry.
    Catalog(usize),
}

impl PaletteChoice {
    fn resolve(self) -> Result<Palette, PaletteError> {
        match self {
            PaletteChoice::Random => Palette::random(&mut rand::thread_rng()),
            PaletteChoice::Catalog(index) => Palette::from_catalog(index),
        }
    }
}

/// Outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub palette: Palette,
    pub short_name: String,
    pub full_name: String,
    pub output_path: PathBuf,
}

/// Fetches glyphs, lays them out and writes the SVG.
pub struct IconGenerator<S> {
    source: S,
    renderer: SvgRenderer,
    palette: PaletteChoice,
}

impl<S: GlyphSource> IconGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            renderer: SvgRenderer::default(),
            palette: PaletteChoice::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: SvgRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_palette(mut self, palette: PaletteChoice) -> Self {
        self.palette = palette;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch glyphs for `short_name` and lay them out over `palette`.
    pub fn layout(&mut self, short_name: &str, palette: &Palette) -> Result<MonogramLayout, IconError> {
        let glyphs = self.source.glyphs(short_name)?;
        let expected = short_name.chars().count();
        if glyphs.len() != expected {
            return Err(IconError::MissingGlyphs {
                text: short_name.to_string(),
                expected,
                found: glyphs.len(),
            });
        }
        Ok(layout_glyphs(&glyphs, palette)?)
    }

    /// Generate the icon for `request` and write it to `output_path`.
    ///
    /// Nothing is written unless layout succeeds.
    pub fn generate(&mut self, request: &IconRequest, output_path: &Path) -> Result<GeneratedIcon, IconError> {
        let palette = self.palette.resolve()?;
        let layout = self.layout(&request.short_name, &palette)?;
        log::debug!(
            "Layout for {}: scale {:.4}x{:.4}, spacing {:.3}",
            request.short_name,
            layout.horizontal_scale,
            layout.vertical_scale,
            layout.spacing
        );
        self.renderer.write_to(output_path, &layout, &palette)?;

        Ok(GeneratedIcon {
            palette,
            short_name: request.short_name.clone(),
            full_name: request.full_name.clone(),
            output_path: output_path.to_path_buf(),
        })
    }
}
