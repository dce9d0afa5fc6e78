use unicode_width::UnicodeWidthChar;

use crate::escape::{ESC, SGR_END};

/// Number of terminal columns `line` occupies once printed.
///
/// Escape sequences are skipped from the introducer up to and including the
/// SGR terminator. Characters without a defined width count as zero.
pub fn width(line: &str) -> usize {
    let mut in_escape = false;
    let mut w = 0;
    for c in line.chars() {
        if c == ESC {
            in_escape = true;
        }
        if in_escape {
            if c == SGR_END {
                in_escape = false;
            }
            continue;
        }
        w += c.width().unwrap_or(0);
    }
    w
}

#[cfg(test)]
mod tests {
    use concat_string::concat_string;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn plain_ascii() {
        assert_eq!(width(""), 0);
        assert_eq!(width("Hello"), 5);
        assert_eq!(width("a b c"), 5);
    }

    #[test]
    fn wide_glyphs() {
        assert_eq!(width("漢字"), 4);
        assert_eq!(width("ok 漢"), 5);
        assert_eq!(width("┌─┐"), 3);
    }

    #[test]
    fn zero_width_and_control() {
        // combining acute accent
        assert_eq!(width("e\u{301}"), 1);
        assert_eq!(width("\u{200b}"), 0);
        assert_eq!(width("a\u{7}b"), 2);
    }

    #[test]
    fn escape_sequences_are_invisible() {
        assert_eq!(width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(width("\x1b[38;2;85;205;253m漢\x1b[0m"), 2);
        assert_eq!(
            width("\x1b[1mHello\x1b[0m there"),
            width("Hello there")
        );
    }

    #[test]
    fn unterminated_escape_swallows_rest() {
        assert_eq!(width("ab\x1b[31"), 2);
        assert_eq!(width("ab\x1b[31 still inside"), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn plain_width_is_sum_of_chars(line in r"[^\x1b]*") {
            let sum: usize = line.chars().map(|c| c.width().unwrap_or(0)).sum();
            prop_assert_eq!(width(&line), sum);
        }

        #[test]
        fn inserted_sgr_is_invisible(
            line in r"[^\x1b]*",
            params in "[0-9;]{0,12}",
            at in any::<prop::sample::Index>(),
        ) {
            let cut = line
                .char_indices()
                .nth(at.index(line.chars().count() + 1))
                .map_or(line.len(), |(i, _)| i);
            let styled = concat_string!(&line[..cut], "\x1b[", params, "m", &line[cut..]);
            prop_assert_eq!(width(&styled), width(&line));
        }
    }
}
