//! SVG emitter.

use crate::renderer::{RenderResult, RendererError};
use glyphmark_core::layout::{CANVAS_SIZE, Fill, LetterPlacement, MonogramLayout};
use glyphmark_core::palette::{Palette, Quadrant, to_hex, to_hex_upper};
use kurbo::{BezPath, PathEl, Point, Rect};
use std::fs;
use std::path::Path;

/// Writes monogram layouts as SVG documents.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    /// Rendered width in pixels.
    pub width: u32,
    /// Rendered height in pixels.
    pub height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Serialize the canvas background, glyph clips and fill groups.
    pub fn render(&self, layout: &MonogramLayout, palette: &Palette) -> String {
        let clip_paths: Vec<String> = layout.letters.iter().map(clip_path).collect();
        let letter_groups: Vec<String> = layout.letters.iter().map(letter_group).collect();

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            self.width,
            self.height,
            format_number(CANVAS_SIZE),
            format_number(CANVAS_SIZE),
        ));
        svg.push_str(&format!("  <defs>\n{}\n  </defs>\n", clip_paths.join("\n")));
        for quadrant in Quadrant::ALL {
            let rect = quadrant.rect();
            svg.push_str(&format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" />\n",
                format_number(rect.x0),
                format_number(rect.y0),
                format_number(rect.width()),
                format_number(rect.height()),
                to_hex_upper(palette.color(quadrant)),
            ));
        }
        svg.push_str(&letter_groups.join("\n"));
        svg.push_str("\n</svg>\n");
        svg
    }

    /// Render and write to `path`, creating parent directories.
    pub fn write_to(
        &self,
        path: &Path,
        layout: &MonogramLayout,
        palette: &Palette,
    ) -> RenderResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                RendererError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let svg = self.render(layout, palette);
        fs::write(path, svg)
            .map_err(|e| RendererError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        log::debug!("Wrote {} glyph(s) to {}", layout.letters.len(), path.display());
        Ok(())
    }
}

fn clip_path(letter: &LetterPlacement) -> String {
    let transform = format!(
        "translate({:.3},{:.3}) scale({:.3},{:.3})",
        letter.translation.x, letter.translation.y, letter.scale_x, letter.scale_y
    );
    format!(
        "    <clipPath id=\"{}\">\n      <path d=\"{}\" transform=\"{}\" />\n    </clipPath>",
        letter.clip_id,
        path_data(&letter.outline),
        transform
    )
}

fn letter_group(letter: &LetterPlacement) -> String {
    let fills: Vec<String> = letter.fills.iter().map(fill_path).collect();
    format!(
        "  <g clip-path=\"url(#{})\">\n{}\n  </g>",
        letter.clip_id,
        fills.join("\n")
    )
}

fn fill_path(fill: &Fill) -> String {
    format!(
        "    <path d=\"{}\" fill=\"{}\" />",
        rect_data(fill.rect),
        to_hex(fill.color)
    )
}

fn rect_data(rect: Rect) -> String {
    format!(
        "M {} {} H {} V {} H {} Z",
        format_number(rect.x0),
        format_number(rect.y0),
        format_number(rect.x1),
        format_number(rect.y1),
        format_number(rect.x0)
    )
}

fn point(p: Point) -> String {
    format!("{} {}", format_number(p.x), format_number(p.y))
}

/// Path data with absolute commands and at most three decimals.
pub fn path_data(path: &BezPath) -> String {
    path.elements()
        .iter()
        .map(|el| match *el {
            PathEl::MoveTo(p) => format!("M {}", point(p)),
            PathEl::LineTo(p) => format!("L {}", point(p)),
            PathEl::QuadTo(p1, p2) => format!("Q {} {}", point(p1), point(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                format!("C {} {} {}", point(p1), point(p2), point(p3))
            }
            PathEl::ClosePath => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format with up to three decimals, trimming trailing zeros.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphmark_core::glyph::Glyph;
    use glyphmark_core::layout::layout_glyphs;

    fn glyph(advance: f64, height: f64) -> Glyph {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((advance, 0.0));
        path.quad_to((advance, height / 2.0), (advance, height));
        path.close_path();
        Glyph::new(path, advance, 0.0, advance, height)
    }

    fn render(glyphs: &[Glyph]) -> String {
        let palette = Palette::from_catalog(0).unwrap();
        let layout = layout_glyphs(glyphs, &palette).unwrap();
        SvgRenderer::default().render(&layout, &palette)
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn test_path_data() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.5, 0.0));
        path.quad_to((1.0, 2.0), (3.0, 4.0));
        path.curve_to((1.0, 1.0), (2.0, 2.0), (3.333_333, 4.0));
        path.close_path();
        assert_eq!(path_data(&path), "M 0 0 L 10.5 0 Q 1 2 3 4 C 1 1 2 2 3.333 4 Z");
    }

    #[test]
    fn test_document_header_and_background() {
        let svg = render(&[glyph(600.0, 700.0)]);
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(svg.contains(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"512\" height=\"512\" viewBox=\"0 0 100 100\">"
        ));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"50\" height=\"50\" fill=\"#77BEF0\" />"));
        assert!(svg.contains("<rect x=\"50\" y=\"0\" width=\"50\" height=\"50\" fill=\"#FFCB61\" />"));
        assert!(svg.contains("<rect x=\"0\" y=\"50\" width=\"50\" height=\"50\" fill=\"#FF894F\" />"));
        assert!(svg.contains("<rect x=\"50\" y=\"50\" width=\"50\" height=\"50\" fill=\"#EA5B6F\" />"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_clip_path_transform() {
        let svg = render(&[glyph(600.0, 700.0)]);
        assert!(svg.contains("<clipPath id=\"letter-clip-0\">"));
        // scale 85/700 = 0.121428..., centered vertically at 7.5
        assert!(svg.contains("scale(0.121,0.121)"));
        assert!(svg.contains(",7.500) scale("));
        assert!(svg.contains("<path d=\"M 0 0 L 600 0 Q 600 350 600 700 Z\""));
    }

    #[test]
    fn test_fill_groups() {
        let svg = render(&[glyph(600.0, 700.0), glyph(620.0, 680.0)]);
        assert_eq!(svg.matches("<g clip-path=").count(), 2);
        assert!(svg.contains("<g clip-path=\"url(#letter-clip-1)\">"));
        assert!(svg.contains("<path d=\"M 0 0 H 100 V 50 H 0 Z\" fill=\"#88410f\" />"));
        assert!(svg.contains("<path d=\"M 0 50 H 100 V 100 H 0 Z\" fill=\"#15a490\" />"));
    }

    #[test]
    fn test_three_letter_middle_has_four_fills() {
        let svg = render(&[glyph(600.0, 700.0), glyph(600.0, 700.0), glyph(600.0, 700.0)]);
        let middle = svg
            .split("<g clip-path=\"url(#letter-clip-1)\">")
            .nth(1)
            .and_then(|rest| rest.split("</g>").next())
            .unwrap();
        assert_eq!(middle.matches("<path ").count(), 4);
        assert!(middle.contains("<path d=\"M 50 50 H 100 V 100 H 50 Z\" fill=\"#15a490\" />"));
    }

    #[test]
    fn test_write_to_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("assets").join("logo.svg");
        let palette = Palette::from_catalog(3).unwrap();
        let layout = layout_glyphs(&[glyph(600.0, 700.0)], &palette).unwrap();

        SvgRenderer::default().write_to(&target, &layout, &palette).unwrap();
        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.contains("fill=\"#347433\""));
    }
}
