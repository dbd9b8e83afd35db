//! Metrics for the PDF base-14 Helvetica faces.
//!
//! Widths are the Adobe AFM advances (1/1000 em) for printable ASCII. Other
//! characters are estimated: wide for CJK and related scripts, average
//! otherwise. Built-in fonts cannot draw those scripts anyway.

use crate::domain::layout::{FontWeight, MM_PER_PT};
use crate::ports::TextMeasurer;

/// Advances for `' '..='~'`.
#[rustfmt::skip]
const REGULAR_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const AVERAGE_WIDTH: u16 = 556;
const WIDE_WIDTH: u16 = 1000;

/// First code point of the CJK radicals block; everything from here on is
/// treated as full width.
const WIDE_START: char = '\u{2E80}';

#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    pub fn new() -> Self {
        Self
    }

    fn char_width(ch: char, weight: FontWeight) -> u16 {
        let table = match weight {
            FontWeight::Regular => &REGULAR_WIDTHS,
            FontWeight::Bold => &BOLD_WIDTHS,
        };
        match ch {
            ' '..='~' => table[ch as usize - ' ' as usize],
            ch if ch >= WIDE_START => WIDE_WIDTH,
            _ => AVERAGE_WIDTH,
        }
    }
}

impl TextMeasurer for HelveticaMetrics {
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        let units: u32 = text
            .chars()
            .map(|ch| u32::from(Self::char_width(ch, weight)))
            .sum();
        units as f32 / 1000.0 * font_size * MM_PER_PT
    }
}
