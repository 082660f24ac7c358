//! Title text attributes.

use crate::Color;

/// Font weight (100-900).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const REGULAR: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

/// Attributes applied to the title. Unset fields fall back to the renderer's
/// defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextAttributes {
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub foreground_color: Option<Color>,
}

impl TextAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, size: f32, weight: FontWeight) -> Self {
        self.font_size = Some(size);
        self.font_weight = Some(weight);
        self
    }

    pub fn with_foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = Some(color);
        self
    }
}
