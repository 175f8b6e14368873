//! Glyph records produced by the external glyph tool.

use kurbo::{BezPath, Rect, Shape};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while decoding glyph data.
#[derive(Debug, Error)]
pub enum GlyphDataError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Glyph {index} has invalid metrics: {reason}")]
    InvalidMetrics { index: usize, reason: String },
}

/// One rendered character as reported by the glyph tool.
///
/// Coordinates are in font units (the tool renders at 1000 units per em).
/// The outline has already been flipped so Y grows downwards and shifted so
/// the top of the ink sits at `y = 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    /// Outline in absolute `M`/`L`/`Q`/`C`/`Z` commands.
    #[serde(rename = "path", with = "outline_svg")]
    pub outline: BezPath,
    /// Horizontal distance to the next glyph origin.
    pub advance: f64,
    /// Left edge of the ink in the original (unflipped) space.
    pub min_x: f64,
    /// Right edge of the ink in the original (unflipped) space.
    pub max_x: f64,
    /// Height of the ink after normalization.
    pub height: f64,
}

impl Glyph {
    /// Create a glyph from an outline and its metrics.
    pub fn new(outline: BezPath, advance: f64, min_x: f64, max_x: f64, height: f64) -> Self {
        Self {
            outline,
            advance,
            min_x,
            max_x,
            height,
        }
    }

    /// A glyph with no ink (e.g. a space), occupying only its advance.
    pub fn blank(advance: f64) -> Self {
        Self::new(BezPath::new(), advance, 0.0, advance, 0.0)
    }

    /// Whether the glyph has any renderable ink.
    pub fn has_ink(&self) -> bool {
        !self.outline.elements().is_empty()
    }

    /// Width of the visible ink.
    pub fn ink_width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Bounding box of the normalized outline.
    pub fn outline_bounds(&self) -> Rect {
        if self.has_ink() {
            self.outline.bounding_box()
        } else {
            Rect::ZERO
        }
    }

    /// Check the record invariants: finite metrics, `min_x <= max_x`, `height >= 0`.
    pub fn validate(&self) -> Result<(), String> {
        let metrics = [self.advance, self.min_x, self.max_x, self.height];
        if metrics.iter().any(|v| !v.is_finite()) {
            return Err("metrics must be finite".to_string());
        }
        if self.min_x > self.max_x {
            return Err(format!("minX {} exceeds maxX {}", self.min_x, self.max_x));
        }
        if self.height < 0.0 {
            return Err(format!("negative height {}", self.height));
        }
        Ok(())
    }
}

/// Decode the glyph tool's JSON output, checking every record.
pub fn parse_glyphs(json: &str) -> Result<Vec<Glyph>, GlyphDataError> {
    let glyphs: Vec<Glyph> = serde_json::from_str(json)?;
    for (index, glyph) in glyphs.iter().enumerate() {
        glyph
            .validate()
            .map_err(|reason| GlyphDataError::InvalidMetrics { index, reason })?;
    }
    Ok(glyphs)
}

/// Serde adapter storing a `BezPath` as SVG path data.
mod outline_svg {
    use kurbo::BezPath;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(path: &BezPath, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&path.to_svg())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BezPath, D::Error> {
        let data = String::deserialize(deserializer)?;
        if data.trim().is_empty() {
            return Ok(BezPath::new());
        }
        BezPath::from_svg(&data).map_err(|e| D::Error::custom(format!("bad path data: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    const SAMPLE: &str = r#"[
        {"path":"M 0 0 L 100 0 L 100 700 L 0 700 Z","advance":600,"minX":40,"maxX":560,"height":700},
        {"path":"","advance":278,"minX":0,"maxX":278,"height":0}
    ]"#;

    #[test]
    fn test_parse_glyphs() {
        let glyphs = parse_glyphs(SAMPLE).unwrap();
        assert_eq!(glyphs.len(), 2);
        assert!((glyphs[0].advance - 600.0).abs() < f64::EPSILON);
        assert!((glyphs[0].ink_width() - 520.0).abs() < f64::EPSILON);
        assert!(glyphs[0].has_ink());
        assert!(!glyphs[1].has_ink());
    }

    #[test]
    fn test_outline_commands() {
        let glyphs = parse_glyphs(SAMPLE).unwrap();
        let elements = glyphs[0].outline.elements();
        assert!(matches!(elements[0], PathEl::MoveTo(_)));
        assert!(matches!(elements.last(), Some(PathEl::ClosePath)));
        let bounds = glyphs[0].outline_bounds();
        assert!((bounds.height() - 700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_curves_parse() {
        let json = r#"[{"path":"M 0 0 Q 10 20 30 40 C 1 2 3 4 5 6 Z","advance":10,"minX":0,"maxX":10,"height":40}]"#;
        let glyphs = parse_glyphs(json).unwrap();
        let elements = glyphs[0].outline.elements();
        assert!(matches!(elements[1], PathEl::QuadTo(_, _)));
        assert!(matches!(elements[2], PathEl::CurveTo(_, _, _)));
    }

    #[test]
    fn test_rejects_inverted_extent() {
        let json = r#"[{"path":"","advance":10,"minX":20,"maxX":5,"height":0}]"#;
        let result = parse_glyphs(json);
        assert!(matches!(result, Err(GlyphDataError::InvalidMetrics { index: 0, .. })));
    }

    #[test]
    fn test_rejects_negative_height() {
        let json = r#"[{"path":"","advance":10,"minX":0,"maxX":10,"height":-1}]"#;
        assert!(parse_glyphs(json).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_glyphs("not json"), Err(GlyphDataError::Json(_))));
        assert!(matches!(parse_glyphs(r#"{"path":""}"#), Err(GlyphDataError::Json(_))));
    }

    #[test]
    fn test_blank_glyph() {
        let glyph = Glyph::blank(250.0);
        assert!(glyph.validate().is_ok());
        assert!((glyph.max_x - 250.0).abs() < f64::EPSILON);
        assert_eq!(glyph.outline_bounds(), Rect::ZERO);
    }
}
