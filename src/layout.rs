//! Text measurement and placement on a character grid.
//!
//! Widths come from `unicode-width`. A zero-width joiner glues the following
//! code point onto the current cell, and zero-width marks (combining accents,
//! variation selectors) merge into the preceding cell, so a sequence such as
//! `👩‍💻` or `é` written as `e` + U+0301 occupies a single cell.

use unicode_width::UnicodeWidthChar;

pub const ZERO_WIDTH_JOINER: char = '\u{200d}';

/// Intrinsic display width of a single code point. Control characters count as 0.
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// One display cell: the code points drawn there and the columns they take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub offset: u16,
    pub symbol: String,
    pub width: u16,
}

/// Split `s` into display cells, left to right.
pub fn clusters(s: &str) -> Vec<Cluster> {
    let mut out = Vec::new();
    let mut offset = 0u16;
    let mut pending = String::new();
    let mut pending_width = 0u16;
    let mut joined = false;

    let mut flush = |pending: &mut String, width: u16, out: &mut Vec<Cluster>| {
        if !pending.is_empty() {
            out.push(Cluster {
                offset,
                symbol: std::mem::take(pending),
                width,
            });
            offset += width;
        }
    };

    for c in s.chars() {
        if c == ZERO_WIDTH_JOINER {
            if pending.is_empty() {
                pending.push(' ');
                pending_width = 1;
            }
            pending.push(c);
            joined = true;
            continue;
        }
        if joined {
            pending.push(c);
            joined = false;
            continue;
        }
        match char_width(c) {
            0 => {
                if pending.is_empty() {
                    pending.push(' ');
                    pending_width = 1;
                }
            }
            w => {
                flush(&mut pending, pending_width, &mut out);
                pending_width = w;
            }
        }
        pending.push(c);
    }
    flush(&mut pending, pending_width, &mut out);
    out
}

/// Columns `s` occupies once clustered.
pub fn str_width(s: &str) -> u16 {
    clusters(s).iter().map(|c| c.width).sum()
}

/// A word placed on the grid, trailing space included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<'a> {
    pub x: u16,
    pub y: u16,
    pub word: &'a str,
}

/// Place the words of `text` on rows of `width` columns without splitting any
/// word. A word moves to the next row once `x + word_width` reaches
/// `width - 1`, unless it already begins a row. A word that begins a row can
/// leave its trailing space past the edge.
pub fn layout_words(text: &str, width: u16) -> Vec<Placement<'_>> {
    let limit = width.saturating_sub(1);
    let (mut x, mut y) = (0u16, 0u16);

    text.split_inclusive(' ')
        .map(|word| {
            let w = str_width(word);
            if x > 0 && x.saturating_add(w) >= limit {
                x = 0;
                y += 1;
            }
            let placed = Placement { x, y, word };
            x = x.saturating_add(w);
            placed
        })
        .collect()
}

/// Display width of the longest word in `words`.
pub fn longest_word<S: AsRef<str>>(words: &[S]) -> u16 {
    words
        .iter()
        .map(|w| str_width(w.as_ref()))
        .max()
        .unwrap_or(0)
}
