//! Metrics read from embedded TrueType/OpenType fonts.

use std::collections::HashMap;
use std::sync::Arc;

use ttf_parser::Face;

use super::FontError;
use crate::domain::layout::{FontWeight, MM_PER_PT};
use crate::ports::TextMeasurer;

/// Advance widths of one face, keyed by character.
#[derive(Debug)]
struct FaceMetrics {
    units_per_em: f32,
    advances: HashMap<char, u16>,
}

impl FaceMetrics {
    fn parse(name: &str, data: &[u8]) -> Result<Self, FontError> {
        let face = Face::parse(data, 0).map_err(|err| FontError::Parse {
            name: name.to_string(),
            reason: err.to_string(),
        })?;

        let mut advances = HashMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables.into_iter().filter(|s| s.is_unicode()) {
                subtable.codepoints(|codepoint| {
                    let Some(ch) = char::from_u32(codepoint) else {
                        return;
                    };
                    if let Some(advance) = face
                        .glyph_index(ch)
                        .and_then(|glyph| face.glyph_hor_advance(glyph))
                    {
                        advances.insert(ch, advance);
                    }
                });
            }
        }

        Ok(Self {
            units_per_em: f32::from(face.units_per_em()),
            advances,
        })
    }

    fn em_units(&self, text: &str) -> f32 {
        let missing = self.units_per_em / 2.0;
        let total: f32 = text
            .chars()
            .map(|ch| self.advances.get(&ch).map_or(missing, |&a| f32::from(a)))
            .sum();
        total / self.units_per_em
    }
}

/// Advance widths from the `hmtx` table of the same font files the renderer
/// embeds, read once when the fonts are loaded. Characters the font has no
/// glyph for measure as half an em.
#[derive(Debug, Clone)]
pub struct TrueTypeMetrics {
    regular: Arc<FaceMetrics>,
    bold: Arc<FaceMetrics>,
}

impl TrueTypeMetrics {
    pub(super) fn parse(regular: &[u8], bold: &[u8]) -> Result<Self, FontError> {
        Ok(Self {
            regular: Arc::new(FaceMetrics::parse("regular", regular)?),
            bold: Arc::new(FaceMetrics::parse("bold", bold)?),
        })
    }
}

impl TextMeasurer for TrueTypeMetrics {
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        let face = match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        };
        face.em_units(text) * font_size * MM_PER_PT
    }
}
