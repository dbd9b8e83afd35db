//! Greedy line wrapping against measured text widths.
//!
//! Lines are returned as byte ranges into the input rather than owned
//! strings, so callers can map highlighted spans (fill-in answers) onto the
//! wrapped lines.

use std::ops::Range;

use super::style::TextStyle;
use crate::ports::TextMeasurer;

/// Wraps `text` to `max_width` millimetres.
///
/// Explicit line breaks are kept. Within a paragraph, words are separated by
/// spaces and packed greedily; a word wider than a whole line is broken
/// between characters. Always returns at least one (possibly empty) line.
pub fn wrap_text(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: TextStyle,
    max_width: f32,
) -> Vec<Range<usize>> {
    let measure =
        |range: &Range<usize>| measurer.text_width(&text[range.clone()], style.size, style.weight);
    let mut lines = Vec::new();

    let mut paragraph_start = 0;
    for paragraph in text.split('\n') {
        let paragraph_end = paragraph_start + paragraph.trim_end_matches('\r').len();
        wrap_paragraph(text, paragraph_start..paragraph_end, max_width, &measure, &mut lines);
        paragraph_start += paragraph.len() + 1;
    }

    lines
}

fn wrap_paragraph(
    text: &str,
    paragraph: Range<usize>,
    max_width: f32,
    measure: &dyn Fn(&Range<usize>) -> f32,
    lines: &mut Vec<Range<usize>>,
) {
    let mut current: Option<Range<usize>> = None;

    for word in words(text, paragraph.clone()) {
        if let Some(line) = &current {
            let candidate = line.start..word.end;
            if measure(&candidate) <= max_width {
                current = Some(candidate);
                continue;
            }
            lines.push(line.clone());
        }

        if measure(&word) <= max_width {
            current = Some(word);
        } else {
            let mut pieces = split_word(text, word, max_width, measure);
            current = pieces.pop();
            lines.extend(pieces);
        }
    }

    lines.push(current.unwrap_or(paragraph.start..paragraph.start));
}

/// Space-separated words of a paragraph as byte ranges.
fn words(text: &str, paragraph: Range<usize>) -> impl Iterator<Item = Range<usize>> + '_ {
    let base = paragraph.start;
    text[paragraph]
        .split(' ')
        .scan(base, |offset, word| {
            let start = *offset;
            *offset += word.len() + 1;
            Some(start..start + word.len())
        })
        .filter(|range| !range.is_empty())
}

/// Breaks an overlong word into character runs that each fit the line.
fn split_word(
    text: &str,
    word: Range<usize>,
    max_width: f32,
    measure: &dyn Fn(&Range<usize>) -> f32,
) -> Vec<Range<usize>> {
    let mut pieces = Vec::new();
    let mut piece_start = word.start;

    for (offset, ch) in text[word.clone()].char_indices() {
        let char_start = word.start + offset;
        let char_end = char_start + ch.len_utf8();
        if char_start > piece_start && measure(&(piece_start..char_end)) > max_width {
            pieces.push(piece_start..char_start);
            piece_start = char_start;
        }
    }

    pieces.push(piece_start..word.end);
    pieces
}
