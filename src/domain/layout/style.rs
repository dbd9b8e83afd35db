//! Text styling for draw operations.

use serde::{Deserialize, Serialize};

use super::metrics::FONT_SIZE;

/// Font weight; each weight maps to one font face in the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Colour used for answers in answer mode.
    pub const ANSWER: Rgb = Rgb(255, 0, 0);

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

/// Size, weight and colour of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgb,
}

impl TextStyle {
    /// Regular black body text.
    pub const fn body() -> Self {
        Self {
            size: FONT_SIZE,
            weight: FontWeight::Regular,
            color: Rgb::BLACK,
        }
    }

    pub const fn bold() -> Self {
        Self {
            size: FONT_SIZE,
            weight: FontWeight::Bold,
            color: Rgb::BLACK,
        }
    }

    /// Body text in the answer colour.
    pub const fn answer() -> Self {
        Self {
            size: FONT_SIZE,
            weight: FontWeight::Regular,
            color: Rgb::ANSWER,
        }
    }

    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_unit_scales_channels() {
        assert_eq!(Rgb::ANSWER.to_unit(), (1.0, 0.0, 0.0));
        assert_eq!(Rgb::BLACK.to_unit(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn answer_style_differs_only_in_colour() {
        let body = TextStyle::body();
        let answer = TextStyle::answer();
        assert_eq!(body.size, answer.size);
        assert_eq!(body.weight, answer.weight);
        assert_ne!(body.color, answer.color);
    }
}
