use concat_string::concat_string;

use crate::border::BorderStyle;
use crate::escape::{open_escape, RESET};
use crate::width::width;

/// Tiling step for `glyph`. Zero-width glyphs advance by one column so that
/// degenerate styles still terminate.
fn step(glyph: &str) -> usize {
    width(glyph).max(1)
}

/// Pushes `left`, then `fill` until at least `cols` columns are covered, then `right`.
fn push_rule(o: &mut String, left: &str, fill: &str, right: &str, cols: usize) {
    o.push_str(left);
    let step = step(fill);
    let mut i = 0;
    while i < cols {
        o.push_str(fill);
        i += step;
    }
    o.push_str(right);
}

/// Pushes one framed row and returns the escape to carry into the next one.
///
/// `carry` is re-emitted before the left border and reset after the right
/// one, so the previous row's colour continues through this row's frame.
fn push_row<'a>(
    o: &mut String,
    style: &BorderStyle,
    line: &'a str,
    max_width: usize,
    carry: &str,
) -> &'a str {
    o.push_str(carry);
    o.push_str(style.left);
    o.push_str(style.middle);
    o.push_str(line);

    let gap = max_width + width(style.middle) - width(line);
    let step = step(style.middle);
    let mut i = 0;
    while i < gap {
        o.push_str(style.middle);
        i += step;
    }

    o.push_str(style.right);
    if !carry.is_empty() {
        o.push_str(RESET);
    }
    o.push('\n');

    open_escape(line)
}

/// Renders `lines` inside a bubble drawn with `style`.
///
/// The block has no trailing line break.
pub fn gen_bubble<S: AsRef<str>>(style: &BorderStyle, lines: &[S]) -> String {
    let max_width = lines
        .iter()
        .map(|line| width(line.as_ref()))
        .max()
        .unwrap_or(0);
    let frame = max_width + 2 * width(style.middle);

    let mut o = String::with_capacity((lines.len() + 2) * (frame + 16));
    push_rule(&mut o, style.top_left, style.top, style.top_right, frame);
    o.push('\n');

    let mut carry = "";
    for line in lines {
        carry = push_row(&mut o, style, line.as_ref(), max_width, carry);
    }

    push_rule(&mut o, style.bottom_left, style.bottom, style.bottom_right, frame);
    o
}

/// A bubble holding the style's own name, with its pointer underneath.
pub fn preview(style: &BorderStyle) -> String {
    concat_string!(gen_bubble(style, &[style.name]), "\n    ", style.pointer, "\n")
}
