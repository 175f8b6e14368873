//! Quadrant palettes and color inversion.

use crate::layout::CANVAS_SIZE;
use kurbo::Rect;
use peniko::Color;
use rand::Rng;
use thiserror::Error;

/// Curated four-color sets: top-left, top-right, bottom-left, bottom-right.
pub const PALETTE_CATALOG: [[&str; 4]; 10] = [
    ["#77BEF0", "#FFCB61", "#FF894F", "#EA5B6F"],
    ["#FF2DD1", "#FDFFB8", "#4DFFBE", "#63C8FF"],
    ["#722323", "#BA487F", "#FF9587", "#FFECCC"],
    ["#347433", "#FFC107", "#FF6F3C", "#B22222"],
    ["#0B1D51", "#725CAD", "#8CCDEB", "#FFE3A9"],
    ["#F4E7E1", "#FF9B45", "#D5451B", "#521C0D"],
    ["#F3F3E0", "#27548A", "#183B4E", "#DDA853"],
    ["#000000", "#8E1616", "#E8C999", "#F8EEDF"],
    ["#8F87F1", "#C68EFD", "#E9A5F1", "#FED2E2"],
    ["#F5ECE0", "#5F99AE", "#336D82", "#693382"],
];

/// Palette errors.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Palette index {index} out of range (catalog has {len} palettes)")]
    UnknownIndex { index: usize, len: usize },
}

/// One of the four canvas quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in palette order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    /// The quadrant's area on the canvas.
    pub fn rect(self) -> Rect {
        let half = CANVAS_SIZE / 2.0;
        match self {
            Quadrant::TopLeft => Rect::new(0.0, 0.0, half, half),
            Quadrant::TopRight => Rect::new(half, 0.0, CANVAS_SIZE, half),
            Quadrant::BottomLeft => Rect::new(0.0, half, half, CANVAS_SIZE),
            Quadrant::BottomRight => Rect::new(half, half, CANVAS_SIZE, CANVAS_SIZE),
        }
    }
}

/// Background colors for the four canvas quadrants.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colors: [Color; 4],
}

impl Palette {
    /// Build a palette from four hex codes in quadrant order.
    pub fn from_hex(codes: [&str; 4]) -> Result<Self, PaletteError> {
        let mut colors = [Color::from_rgba8(0, 0, 0, 255); 4];
        for (slot, code) in colors.iter_mut().zip(codes) {
            *slot = parse_hex_color(code)?;
        }
        Ok(Self { colors })
    }

    /// Palette at `index` in [`PALETTE_CATALOG`].
    pub fn from_catalog(index: usize) -> Result<Self, PaletteError> {
        let codes = PALETTE_CATALOG.get(index).ok_or(PaletteError::UnknownIndex {
            index,
            len: PALETTE_CATALOG.len(),
        })?;
        Self::from_hex(*codes)
    }

    /// Pick a catalog palette uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, PaletteError> {
        Self::from_catalog(rng.gen_range(0..PALETTE_CATALOG.len()))
    }

    /// Background color of a quadrant.
    pub fn color(&self, quadrant: Quadrant) -> Color {
        self.colors[quadrant.index()]
    }

    /// Contrast color for glyph ink drawn over a quadrant.
    pub fn inverted(&self, quadrant: Quadrant) -> Color {
        invert_color(self.color(quadrant))
    }

    /// Upper-case hex codes in quadrant order.
    pub fn hex_codes(&self) -> [String; 4] {
        self.colors.map(to_hex_upper)
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex_color(code: &str) -> Result<Color, PaletteError> {
    let digits = code.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidHex(code.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| PaletteError::InvalidHex(code.to_string()))
    };
    Ok(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255))
}

/// Lower-case `#rrggbb`.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// Upper-case `#RRGGBB`.
pub fn to_hex_upper(color: Color) -> String {
    to_hex(color).to_uppercase()
}

/// Channel-wise 8-bit complement; alpha is kept.
pub fn invert_color(color: Color) -> Color {
    let rgba = color.to_rgba8();
    Color::from_rgba8(255 - rgba.r, 255 - rgba.g, 255 - rgba.b, rgba.a)
}

/// Invert a hex code, returning lower-case `#rrggbb`.
pub fn invert_hex(code: &str) -> Result<String, PaletteError> {
    parse_hex_color(code).map(|color| to_hex(invert_color(color)))
}
