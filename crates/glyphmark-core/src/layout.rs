//! Monogram layout: scaling, spacing and quadrant color assignment.
//!
//! Glyphs are scaled to a shared visual height, spaced and (if needed)
//! squeezed horizontally to fit the available width, centered on the
//! canvas, and each assigned the inverted quadrant colors it is painted with.

use crate::glyph::Glyph;
use crate::palette::{Palette, Quadrant};
use kurbo::{Affine, BezPath, Rect, Vec2};
use peniko::Color;
use thiserror::Error;

/// Logical canvas size (both axes).
pub const CANVAS_SIZE: f64 = 100.0;

/// Visual height every glyph string is scaled to.
pub const TARGET_HEIGHT: f64 = 85.0;

/// Gap between glyphs before any squeezing, as a fraction of the target height.
pub const INITIAL_SPACING_RATIO: f64 = 0.14;

/// Smallest gap spacing reduction may reach, as a fraction of the target height.
pub const MINIMUM_SPACING_RATIO: f64 = 0.05;

/// Layout errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Degenerate layout: {0}")]
    Degenerate(&'static str),
}

/// Geometry constraints for one layout run.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Height the tallest glyph is scaled to.
    pub target_height: f64,
    /// Maximum total width of the glyph string.
    pub available_width: f64,
    /// Gap between glyphs before negotiation.
    pub initial_spacing: f64,
    /// Floor for spacing reduction.
    pub minimum_spacing: f64,
}

impl LayoutParams {
    /// Default constraints for a string of `count` glyphs.
    ///
    /// Three-letter marks get a wider box since their middle letter straddles
    /// the midline.
    pub fn for_glyph_count(count: usize) -> Self {
        let (initial_spacing, minimum_spacing) = if count > 1 {
            (
                TARGET_HEIGHT * INITIAL_SPACING_RATIO,
                TARGET_HEIGHT * MINIMUM_SPACING_RATIO,
            )
        } else {
            (0.0, 0.0)
        };
        Self {
            target_height: TARGET_HEIGHT,
            available_width: if count == 3 { 94.0 } else { 85.0 },
            initial_spacing,
            minimum_spacing,
        }
    }
}

/// Canvas half a glyph is colored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    /// Quadrant above the horizontal midline.
    pub fn top(self) -> Quadrant {
        match self {
            Column::Left => Quadrant::TopLeft,
            Column::Right => Quadrant::TopRight,
        }
    }

    /// Quadrant below the horizontal midline.
    pub fn bottom(self) -> Quadrant {
        match self {
            Column::Left => Quadrant::BottomLeft,
            Column::Right => Quadrant::BottomRight,
        }
    }
}

/// A colored rectangle painted through a glyph clip.
#[derive(Debug, Clone, Copy)]
pub struct Fill {
    pub rect: Rect,
    pub color: Color,
}

/// Placement and coloring of one glyph.
#[derive(Debug, Clone)]
pub struct LetterPlacement {
    /// Position in the glyph string.
    pub index: usize,
    /// Identifier of the glyph's clip region.
    pub clip_id: String,
    /// Glyph outline in font units.
    pub outline: BezPath,
    /// Translation applied after scaling.
    pub translation: Vec2,
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Left edge of the rendered ink.
    pub left: f64,
    /// Right edge of the rendered ink.
    pub right: f64,
    /// One, two or four fills drawn through the clip.
    pub fills: Vec<Fill>,
}

impl LetterPlacement {
    /// Font units to canvas units.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }

    /// Horizontal center of the rendered ink.
    pub fn center_x(&self) -> f64 {
        self.left + (self.right - self.left) / 2.0
    }
}

/// Settled layout for a glyph string.
#[derive(Debug, Clone)]
pub struct MonogramLayout {
    pub vertical_scale: f64,
    pub horizontal_scale: f64,
    pub spacing: f64,
    pub params: LayoutParams,
    pub letters: Vec<LetterPlacement>,
    sum_advances: f64,
}

impl MonogramLayout {
    /// Rendered width of the string, advances plus gaps.
    pub fn total_width(&self) -> f64 {
        total_width(
            self.sum_advances,
            self.letters.len(),
            self.horizontal_scale,
            self.spacing,
        )
    }
}

fn total_width(sum_advances: f64, count: usize, scale_x: f64, spacing: f64) -> f64 {
    sum_advances * scale_x + spacing * count.saturating_sub(1) as f64
}

/// Negotiate horizontal scale and spacing for `count` glyphs.
///
/// Spacing gives way first, down to `params.minimum_spacing`; if the string is
/// still too wide both scale and spacing shrink by the same factor. Returns
/// `(horizontal_scale, spacing)`.
pub fn settle_scale(
    sum_advances: f64,
    count: usize,
    vertical_scale: f64,
    params: &LayoutParams,
) -> (f64, f64) {
    let mut scale_x = vertical_scale;
    if count <= 1 {
        return (scale_x, 0.0);
    }

    let gaps = (count - 1) as f64;
    let mut spacing = params.initial_spacing;
    let minimum = params.minimum_spacing;
    let available = params.available_width;

    let total = total_width(sum_advances, count, scale_x, spacing);
    if total > available && spacing > minimum {
        let excess = total - available;
        let capacity = (spacing - minimum) * gaps;
        if capacity > 0.0 {
            let adjusted = spacing - excess.min(capacity) / gaps;
            spacing = adjusted.max(minimum);
        }
    }

    let total = total_width(sum_advances, count, scale_x, spacing);
    if total > available {
        let factor = available / total;
        scale_x *= factor;
        spacing *= factor;
    }

    (scale_x, spacing)
}

/// Pick the canvas half a glyph spanning `[left, right]` mostly covers.
///
/// Equal overlap goes to the half containing the glyph's center, with the
/// midline itself counting as right.
pub fn choose_column(left: f64, right: f64) -> Column {
    let half = CANVAS_SIZE / 2.0;
    let left_overlap = (half.min(right) - left.max(0.0)).max(0.0);
    let right_overlap = (CANVAS_SIZE.min(right) - left.max(half)).max(0.0);

    if right_overlap > left_overlap {
        Column::Right
    } else if right_overlap == left_overlap && left + (right - left) / 2.0 >= half {
        Column::Right
    } else {
        Column::Left
    }
}

fn column_fills(palette: &Palette, column: Column) -> Vec<Fill> {
    let half = CANVAS_SIZE / 2.0;
    vec![
        Fill {
            rect: Rect::new(0.0, 0.0, CANVAS_SIZE, half),
            color: palette.inverted(column.top()),
        },
        Fill {
            rect: Rect::new(0.0, half, CANVAS_SIZE, CANVAS_SIZE),
            color: palette.inverted(column.bottom()),
        },
    ]
}

fn quadrant_fills(palette: &Palette) -> Vec<Fill> {
    Quadrant::ALL
        .iter()
        .map(|&quadrant| Fill {
            rect: quadrant.rect(),
            color: palette.inverted(quadrant),
        })
        .collect()
}

/// Lay out `glyphs` with the default constraints for their count.
pub fn layout_glyphs(glyphs: &[Glyph], palette: &Palette) -> Result<MonogramLayout, LayoutError> {
    layout_glyphs_with(glyphs, palette, LayoutParams::for_glyph_count(glyphs.len()))
}

/// Lay out `glyphs` under explicit constraints.
pub fn layout_glyphs_with(
    glyphs: &[Glyph],
    palette: &Palette,
    params: LayoutParams,
) -> Result<MonogramLayout, LayoutError> {
    if glyphs.is_empty() {
        return Err(LayoutError::Degenerate("no glyphs to lay out"));
    }
    let sum_advances: f64 = glyphs.iter().map(|g| g.advance).sum();
    if sum_advances <= 0.0 {
        return Err(LayoutError::Degenerate("glyph advances sum to zero"));
    }

    let count = glyphs.len();
    let max_height = glyphs.iter().map(|g| g.height).fold(1.0, f64::max);
    let vertical_scale = params.target_height / max_height;
    let (horizontal_scale, spacing) = settle_scale(sum_advances, count, vertical_scale, &params);

    let total = total_width(sum_advances, count, horizontal_scale, spacing);
    let mut cursor = CANVAS_SIZE / 2.0 - total / 2.0;
    let mut letters = Vec::with_capacity(count);

    for (index, glyph) in glyphs.iter().enumerate() {
        let letter_height = glyph.height * vertical_scale;
        let translation = Vec2::new(
            cursor - glyph.min_x * horizontal_scale,
            CANVAS_SIZE / 2.0 - letter_height / 2.0,
        );
        let left = cursor;
        let right = cursor + glyph.ink_width() * horizontal_scale;

        let fills = if count == 3 && index == 1 {
            quadrant_fills(palette)
        } else {
            column_fills(palette, choose_column(left, right))
        };

        log::trace!("glyph {index}: ink [{left:.3}, {right:.3}], {} fills", fills.len());

        letters.push(LetterPlacement {
            index,
            clip_id: format!("letter-clip-{index}"),
            outline: glyph.outline.clone(),
            translation,
            scale_x: horizontal_scale,
            scale_y: vertical_scale,
            left,
            right,
            fills,
        });

        cursor += glyph.advance * horizontal_scale + spacing;
    }

    Ok(MonogramLayout {
        vertical_scale,
        horizontal_scale,
        spacing,
        params,
        letters,
        sum_advances,
    })
}
